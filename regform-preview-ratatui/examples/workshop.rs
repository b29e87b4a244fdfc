//! Preview the sample workshop in the terminal.
//!
//! Run with: cargo run -p regform-preview-ratatui --example workshop

use anyhow::Result;
use regform::{RenderContext, canonical_catalogue};
use regform_preview_ratatui::{RatatuiError, RatatuiPreview};

fn main() -> Result<()> {
    let config = example_programs::offline_workshop::config();
    let catalogue = canonical_catalogue();

    let preview = RatatuiPreview::new().with_title("Clay Basics");
    match preview.run(&config, &catalogue, RenderContext::from_config(&config)) {
        Ok(context) => {
            println!(
                "Last viewed as {} in {} layout",
                context.user_type.label(),
                context.layout_style.label()
            );
        }
        Err(RatatuiError::Cancelled) => println!("Preview cancelled"),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
