//! # regform-doc-html
//!
//! Render a regform [`DisplayTree`](regform::DisplayTree) as an HTML page.
//!
//! Every control is emitted `readonly` or `disabled`: the page shows what a
//! participant would see, it does not collect anything.
//!
//! ```rust
//! use regform::{ProgramConfiguration, ProgramType, RenderContext, canonical_catalogue, render_preview};
//! use regform_doc_html::{HtmlOptions, to_html};
//!
//! let config = ProgramConfiguration::new(ProgramType::Seminar, "Evening Talk");
//! let tree = render_preview(&config, &canonical_catalogue(), &RenderContext::from_config(&config));
//! let html = to_html(&tree, &HtmlOptions::new().full_document(false));
//! assert!(html.contains("Evening Talk Registration"));
//! ```

mod generator;
pub use generator::{HtmlOptions, to_html};
