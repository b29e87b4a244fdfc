use regform_types::{FieldCatalogue, ProgramConfiguration, RenderContext};

use crate::{DisplayTree, LayoutComposer, group_sections};

/// Render the registration form preview for a program.
///
/// Pure: equal inputs give equal trees, and nothing is mutated.
pub fn render_preview(
    config: &ProgramConfiguration,
    catalogue: &FieldCatalogue,
    context: &RenderContext,
) -> DisplayTree {
    let grouped = group_sections(catalogue, config, context);
    let tree = LayoutComposer::new().compose(&grouped, config, context);

    tracing::debug!(
        program = %config.program_name,
        layout = %context.layout_style,
        existing_user = context.is_existing_user(),
        "rendered preview"
    );

    tree
}
