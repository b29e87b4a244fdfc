//! Core types for the regform crate.
//!
//! This crate provides the foundational types for previewing registration forms:
//! - `FieldDescriptor` and `FieldKind` - Individual form fields and their input types
//! - `Section` - Named groups of fields and the rule deciding when they appear
//! - `FieldCatalogue` - An ordered, id-unique list of field descriptors
//! - `ProgramConfiguration` - The program data entered in earlier wizard steps
//! - `RenderContext` - Ephemeral per-render state (user type, layout, question index)

mod field;
pub use field::{FieldDescriptor, FieldKind};

mod section;
pub use section::Section;

mod catalogue;
pub use catalogue::FieldCatalogue;

mod program;
pub use program::{DeliveryMode, ProgramConfiguration, ProgramType};

mod context;
pub use context::{CollapsedSections, LayoutStyle, PrefilledPolicy, RenderContext, UserType};

mod error;
pub use error::{CatalogueError, ConfigError};
