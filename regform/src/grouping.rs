//! Section grouping: the visible fields of a program, by section.

use regform_types::{
    FieldCatalogue, FieldDescriptor, PrefilledPolicy, ProgramConfiguration, RenderContext, Section,
};

/// The fields of one section, in catalogue order.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionGroup {
    pub section: Section,
    pub fields: Vec<FieldDescriptor>,
}

/// Visible fields partitioned by section.
///
/// Sections are in display order and never empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedSections {
    groups: Vec<SectionGroup>,
}

impl GroupedSections {
    /// Get the groups, in display order.
    pub fn sections(&self) -> &[SectionGroup] {
        &self.groups
    }

    /// Get the fields of a section, if it is present.
    pub fn get(&self, section: Section) -> Option<&[FieldDescriptor]> {
        self.groups
            .iter()
            .find(|g| g.section == section)
            .map(|g| g.fields.as_slice())
    }

    pub fn contains(&self, section: Section) -> bool {
        self.get(section).is_some()
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of fields across all sections.
    pub fn total_fields(&self) -> usize {
        self.groups.iter().map(|g| g.fields.len()).sum()
    }

    /// All fields in question order: section by section, catalogue order within.
    pub fn flattened(&self) -> impl Iterator<Item = (Section, &FieldDescriptor)> {
        self.groups
            .iter()
            .flat_map(|g| g.fields.iter().map(move |f| (g.section, f)))
    }
}

/// Derive the visible field set of a program and partition it by section.
///
/// Recomputed on every call.
pub fn group_sections(
    catalogue: &FieldCatalogue,
    config: &ProgramConfiguration,
    context: &RenderContext,
) -> GroupedSections {
    let groups: Vec<SectionGroup> = Section::ALL
        .into_iter()
        .filter(|section| section.is_active(config))
        .map(|section| SectionGroup {
            section,
            fields: catalogue
                .iter()
                .filter(|f| f.section() == section && is_visible(f, context))
                .cloned()
                .collect(),
        })
        .filter(|group| !group.fields.is_empty())
        .collect();

    tracing::debug!(
        mode = %config.mode,
        payment_required = config.payment_required,
        sections = groups.len(),
        fields = groups.iter().map(|g| g.fields.len()).sum::<usize>(),
        "grouped catalogue"
    );

    GroupedSections { groups }
}

fn is_visible(field: &FieldDescriptor, context: &RenderContext) -> bool {
    match context.prefilled_policy {
        PrefilledPolicy::ShowReadOnly => true,
        PrefilledPolicy::Hide => !(field.is_prefilled() && context.is_existing_user()),
    }
}
