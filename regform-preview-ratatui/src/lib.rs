//! # regform-preview-ratatui
//!
//! Interactive terminal preview of regform registration forms.
//!
//! The host owns the [`RenderContext`](regform::RenderContext): switching the
//! user type or layout, or stepping through questions, updates the context and
//! redraws the preview from it.
//!
//! ```rust,no_run
//! use regform::{RenderContext, canonical_catalogue};
//! use regform_preview_ratatui::RatatuiPreview;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = example_programs::offline_workshop::config();
//! let context = RatatuiPreview::new()
//!     .with_title("Workshop")
//!     .run(&config, &canonical_catalogue(), RenderContext::from_config(&config))?;
//! println!("ended on {}", context.layout_style);
//! # Ok(())
//! # }
//! ```

mod preview;
mod state;

pub use preview::{RatatuiError, RatatuiPreview, Theme};
