use serde::{Deserialize, Serialize};

use crate::Section;

/// A single field in a registration form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Stable key, unique within a catalogue.
    id: String,

    /// The label shown next to the input.
    label: String,

    /// The kind of field (determines the rendered widget).
    #[serde(flatten)]
    kind: FieldKind,

    /// Whether the field is required (shown with an asterisk).
    #[serde(default)]
    mandatory: bool,

    /// Whether the value is already known for an existing participant.
    #[serde(default)]
    prefilled: bool,

    /// The section this field is grouped under.
    section: Section,

    /// Short hint shown under the label.
    #[serde(default, alias = "helperText", skip_serializing_if = "Option::is_none")]
    helper_text: Option<String>,
}

impl FieldDescriptor {
    /// Create a new optional, non-prefilled field.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        kind: FieldKind,
        section: Section,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            mandatory: false,
            prefilled: false,
            section,
            helper_text: None,
        }
    }

    /// Create a single-line text field.
    pub fn text(id: impl Into<String>, label: impl Into<String>, section: Section) -> Self {
        Self::new(id, label, FieldKind::Text, section)
    }

    /// Create an email field.
    pub fn email(id: impl Into<String>, label: impl Into<String>, section: Section) -> Self {
        Self::new(id, label, FieldKind::Email, section)
    }

    /// Create a date field.
    pub fn date(id: impl Into<String>, label: impl Into<String>, section: Section) -> Self {
        Self::new(id, label, FieldKind::Date, section)
    }

    /// Create a file upload field.
    pub fn file(id: impl Into<String>, label: impl Into<String>, section: Section) -> Self {
        Self::new(id, label, FieldKind::File, section)
    }

    /// Create a dropdown with the given options, in display order.
    pub fn dropdown<I, S>(
        id: impl Into<String>,
        label: impl Into<String>,
        section: Section,
        options: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options = options.into_iter().map(Into::into).collect();
        Self::new(id, label, FieldKind::Dropdown { options }, section)
    }

    /// Create a multi-line paragraph field.
    pub fn paragraph(id: impl Into<String>, label: impl Into<String>, section: Section) -> Self {
        Self::new(id, label, FieldKind::Paragraph, section)
    }

    /// Create a yes/no toggle.
    pub fn toggle(id: impl Into<String>, label: impl Into<String>, section: Section) -> Self {
        Self::new(id, label, FieldKind::Toggle, section)
    }

    /// Set whether the field is mandatory.
    pub fn with_mandatory(mut self, mandatory: bool) -> Self {
        self.mandatory = mandatory;
        self
    }

    /// Set whether the field is prefilled for existing participants.
    pub fn with_prefilled(mut self, prefilled: bool) -> Self {
        self.prefilled = prefilled;
        self
    }

    /// Set the hint shown under the label.
    pub fn with_helper_text(mut self, helper_text: impl Into<String>) -> Self {
        self.helper_text = Some(helper_text.into());
        self
    }

    /// Get the field id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the field kind.
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Get the section tag.
    pub fn section(&self) -> Section {
        self.section
    }

    pub fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    pub fn is_prefilled(&self) -> bool {
        self.prefilled
    }

    pub fn helper_text(&self) -> Option<&str> {
        self.helper_text.as_deref()
    }
}

/// The kind of field, tagged by `type` when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FieldKind {
    /// Single-line text input.
    Text,

    /// Single-line email input.
    Email,

    /// Date picker.
    Date,

    /// File upload.
    File,

    /// Pick one of a fixed list of options.
    #[serde(alias = "select")]
    Dropdown {
        #[serde(default)]
        options: Vec<String>,
    },

    /// Multi-line text area.
    #[serde(alias = "textarea")]
    Paragraph,

    /// Yes/no switch.
    Toggle,

    /// A `type` tag this version does not know. Rendered label-only.
    #[serde(other)]
    Unknown,
}

impl FieldKind {
    /// The options of a dropdown, empty for every other kind.
    pub fn options(&self) -> &[String] {
        match self {
            Self::Dropdown { options } => options,
            _ => &[],
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Fields {
        fields: Vec<FieldDescriptor>,
    }

    #[test]
    fn builder_flags() {
        let field = FieldDescriptor::text("fullName", "Full Name", Section::Personal)
            .with_mandatory(true)
            .with_prefilled(true);

        assert_eq!(field.id(), "fullName");
        assert_eq!(field.label(), "Full Name");
        assert!(field.is_mandatory());
        assert!(field.is_prefilled());
        assert_eq!(field.section(), Section::Personal);
        assert_eq!(field.helper_text(), None);
    }

    #[test]
    fn helper_text_from_toml() -> anyhow::Result<()> {
        let parsed: Fields = toml::from_str(
            r#"
            [[fields]]
            id = "idPicture"
            label = "ID Picture"
            type = "file"
            section = "travel"
            helperText = "Passport or national ID"

            [[fields]]
            id = "city"
            label = "City"
            type = "text"
            section = "personal"
            "#,
        )?;

        assert_eq!(parsed.fields[0].helper_text(), Some("Passport or national ID"));
        assert_eq!(parsed.fields[0].kind(), &FieldKind::File);
        assert_eq!(parsed.fields[1].helper_text(), None);
        Ok(())
    }

    #[test]
    fn dropdown_keeps_option_order() {
        let field = FieldDescriptor::dropdown("size", "Size", Section::Travel, ["S", "M", "L"]);
        assert_eq!(field.kind().options(), ["S", "M", "L"]);
    }

    #[test]
    fn non_dropdown_has_no_options() {
        assert!(FieldKind::Toggle.options().is_empty());
    }

    #[test]
    fn deserialize_prototype_aliases() -> anyhow::Result<()> {
        let parsed: Fields = toml::from_str(
            r#"
            [[fields]]
            id = "gender"
            label = "Gender"
            type = "select"
            section = "personal"
            options = ["Male", "Female"]

            [[fields]]
            id = "note"
            label = "Note"
            type = "textarea"
            section = "personal"

            [[fields]]
            id = "gst"
            label = "Registered under Indian GST"
            type = "toggle"
            section = "invoice"
            "#,
        )?;

        assert_eq!(
            parsed.fields[0].kind(),
            &FieldKind::Dropdown {
                options: vec!["Male".into(), "Female".into()]
            }
        );
        assert_eq!(parsed.fields[1].kind(), &FieldKind::Paragraph);
        assert_eq!(parsed.fields[2].section(), Section::Payment);
        assert!(!parsed.fields[2].is_mandatory());
        Ok(())
    }

    #[test]
    fn dropdown_without_options_is_empty() -> anyhow::Result<()> {
        let parsed: Fields = toml::from_str(
            r#"
            [[fields]]
            id = "idType"
            label = "ID Type"
            type = "dropdown"
            section = "travel"
            "#,
        )?;

        assert!(parsed.fields[0].kind().options().is_empty());
        Ok(())
    }

    #[test]
    fn unknown_type_is_kept() -> anyhow::Result<()> {
        let parsed: Fields = toml::from_str(
            r#"
            [[fields]]
            id = "signature"
            label = "Signature"
            type = "signature-pad"
            section = "personal"
            mandatory = true
            "#,
        )?;

        assert!(parsed.fields[0].kind().is_unknown());
        assert!(parsed.fields[0].is_mandatory());
        Ok(())
    }
}
