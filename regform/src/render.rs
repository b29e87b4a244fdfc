//! Field rendering: one descriptor to one read-only widget description.

use regform_types::{FieldDescriptor, FieldKind, RenderContext};

/// Sample value shown in fields an existing participant already filled in.
pub const SENTINEL_VALUE: &str = "John Doe";

/// Caption next to a toggle that is off.
const SWITCH_OFF_CAPTION: &str = "No";

/// A field ready to display.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedField {
    pub id: String,
    pub label: String,
    /// Show a required marker next to the label.
    pub mandatory: bool,
    /// The input widget, or `None` when the field kind is unknown.
    pub widget: Option<Widget>,
    pub display_value: String,
    pub placeholder: String,
    /// Always true: a preview is never a live form.
    pub read_only: bool,
    /// Signals "this value would be auto-filled".
    pub show_info_badge: bool,
    /// Hint shown under the label.
    pub helper_text: Option<String>,
}

/// The input widget for a field.
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    /// Single-line input.
    Input { input_type: InputType },

    /// Date input.
    Date,

    /// Disabled file picker.
    File,

    /// Disabled select.
    Select { options: Vec<SelectOption> },

    /// Multi-line text area.
    TextArea,

    /// Disabled on/off switch.
    Switch { on: bool, caption: String },
}

impl Widget {
    /// Stable name of the widget kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Input { .. } => "input",
            Self::Date => "date",
            Self::File => "file",
            Self::Select { .. } => "select",
            Self::TextArea => "textarea",
            Self::Switch { .. } => "switch",
        }
    }

    /// Whether the control is disabled outright (rather than read-only).
    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::File | Self::Select { .. } | Self::Switch { .. })
    }
}

/// The `type` of a single-line input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Email,
}

impl InputType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
        }
    }
}

/// One entry of a select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn new(option: &str) -> Self {
        Self {
            value: option.to_string(),
            label: option.to_string(),
        }
    }
}

/// Render a field for the given context.
///
/// Total over all descriptors: dropdowns without options render an empty
/// select, unknown kinds render label-only.
pub fn render_field(descriptor: &FieldDescriptor, context: &RenderContext) -> RenderedField {
    let known = descriptor.is_prefilled() && context.is_existing_user();

    let (display_value, placeholder) = if known {
        (SENTINEL_VALUE.to_string(), SENTINEL_VALUE.to_string())
    } else {
        (
            String::new(),
            format!("Enter {}", descriptor.label().to_lowercase()),
        )
    };

    RenderedField {
        id: descriptor.id().to_string(),
        label: descriptor.label().to_string(),
        mandatory: descriptor.is_mandatory(),
        widget: widget_for(descriptor.kind()),
        display_value,
        placeholder,
        read_only: true,
        show_info_badge: known,
        helper_text: descriptor.helper_text().map(str::to_string),
    }
}

fn widget_for(kind: &FieldKind) -> Option<Widget> {
    let widget = match kind {
        FieldKind::Text => Widget::Input {
            input_type: InputType::Text,
        },
        FieldKind::Email => Widget::Input {
            input_type: InputType::Email,
        },
        FieldKind::Date => Widget::Date,
        FieldKind::File => Widget::File,
        FieldKind::Dropdown { options } => Widget::Select {
            options: options.iter().map(|o| SelectOption::new(o)).collect(),
        },
        FieldKind::Paragraph => Widget::TextArea,
        FieldKind::Toggle => Widget::Switch {
            on: false,
            caption: SWITCH_OFF_CAPTION.to_string(),
        },
        FieldKind::Unknown => return None,
    };
    Some(widget)
}
