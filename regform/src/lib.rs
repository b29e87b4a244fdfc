//! # regform
//!
//! Preview the registration form participants will fill out for a program.
//!
//! A program's form is a pure function of its configuration: a declarative
//! [`FieldCatalogue`] is filtered by the sections the program needs, grouped,
//! and composed into one of three layouts. The result is a [`DisplayTree`]
//! that backends turn into HTML, a terminal UI, or anything else.
//!
//! ## Usage
//!
//! ```rust
//! use regform::{
//!     DeliveryMode, LayoutBody, ProgramConfiguration, ProgramType, RenderContext,
//!     canonical_catalogue, render_preview,
//! };
//!
//! let config = ProgramConfiguration::new(ProgramType::Workshop, "Clay Basics")
//!     .with_mode(DeliveryMode::Offline)
//!     .with_fee("INR", 1500.0);
//! let context = RenderContext::from_config(&config);
//!
//! let tree = render_preview(&config, &canonical_catalogue(), &context);
//! assert_eq!(tree.title, "Clay Basics Registration");
//! assert!(matches!(tree.body, LayoutBody::Cards(ref cards) if cards.len() == 3));
//! ```
//!
//! ## Pieces
//!
//! - [`render_field`] - one descriptor to one read-only widget description
//! - [`group_sections`] - the visible fields of a program, by section
//! - [`LayoutComposer`] - grouped sections to a [`DisplayTree`]
//! - [`advance`] - the question-by-question stepper
//!
//! ## Backends
//!
//! - `regform-doc-html` - HTML preview documents
//! - `regform-preview-ratatui` - interactive terminal preview

// Re-export all types from regform-types
pub use regform_types::*;

mod catalogue;
pub use catalogue::canonical_catalogue;

mod render;
pub use render::{InputType, RenderedField, SENTINEL_VALUE, SelectOption, Widget, render_field};

mod grouping;
pub use grouping::{GroupedSections, SectionGroup, group_sections};

mod layout;
pub use layout::{
    Direction, DisplayTree, FeeSummary, LayoutBody, LayoutComposer, QuestionView, SectionCard,
    TwoColumnScope, advance, clamp_question_index,
};

mod preview;
pub use preview::render_preview;
