//! HTML preview generator implementation.

use regform::{
    DisplayTree, FeeSummary, LayoutBody, QuestionView, RenderedField, SectionCard, Widget,
};

/// Options for HTML generation.
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    /// Title for the HTML document. Defaults to the tree's title.
    pub title: Option<String>,
    /// Whether to include default CSS styling.
    pub include_styles: bool,
    /// Whether to generate a complete HTML document (with html/head/body tags).
    pub full_document: bool,
    /// Custom CSS class prefix for all generated elements.
    pub class_prefix: String,
}

impl HtmlOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self {
            title: None,
            include_styles: true,
            full_document: true,
            class_prefix: "regform".to_string(),
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enable or disable default CSS styling.
    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }

    /// Generate a complete HTML document or just the preview fragment.
    pub fn full_document(mut self, full: bool) -> Self {
        self.full_document = full;
        self
    }

    /// Set a custom CSS class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }
}

/// Render a display tree as HTML.
pub fn to_html(tree: &DisplayTree, options: &HtmlOptions) -> String {
    let mut html = String::new();
    let prefix = options.class_prefix.as_str();

    if options.full_document {
        let title = options.title.as_deref().unwrap_or(&tree.title);

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str(
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str(&format!("  <title>{}</title>\n", escape_html(title)));

        if options.include_styles {
            html.push_str(&generate_styles(prefix));
        }

        html.push_str("</head>\n<body>\n");
    }

    html.push_str(&format!(
        "<div class=\"{prefix}-preview\" data-layout=\"{}\" data-user=\"{}\">\n",
        tree.layout_style,
        escape_html(tree.user_type.label())
    ));

    // Header
    html.push_str(&format!("  <div class=\"{prefix}-header\">\n"));
    html.push_str(&format!(
        "    <h1 class=\"{prefix}-title\">{}</h1>\n",
        escape_html(&tree.title)
    ));
    html.push_str(&format!(
        "    <span class=\"{prefix}-badge\">{}</span>\n",
        escape_html(&tree.layout_label)
    ));
    html.push_str("  </div>\n");

    match &tree.body {
        LayoutBody::Cards(cards) => {
            for card in cards {
                html.push_str(&generate_card(card, prefix));
            }
        }
        LayoutBody::Question(view) => html.push_str(&generate_question(view, prefix)),
        LayoutBody::Empty => {
            html.push_str(&format!(
                "  <p class=\"{prefix}-empty\">There are no questions to preview.</p>\n"
            ));
        }
    }

    if let Some(fees) = &tree.fee_summary {
        html.push_str(&generate_fees(fees, prefix));
    }

    if let Some(venue) = &tree.venue {
        html.push_str(&format!(
            "  <section class=\"{prefix}-card {prefix}-venue\">\n"
        ));
        html.push_str("    <h2>Venue</h2>\n");
        html.push_str(&format!(
            "    <textarea class=\"{prefix}-textarea\" rows=\"3\" readonly>{}</textarea>\n",
            escape_html(venue)
        ));
        html.push_str("  </section>\n");
    }

    html.push_str("</div>\n");

    if options.full_document {
        html.push_str("</body>\n</html>\n");
    }

    html
}

/// Generate HTML for one section card.
///
/// Cards are `<details>` elements, open unless the host collapsed them.
fn generate_card(card: &SectionCard, prefix: &str) -> String {
    let mut html = String::new();
    let open = if card.collapsed { "" } else { " open" };

    html.push_str(&format!(
        "  <details class=\"{prefix}-card\" data-section=\"{}\"{open}>\n",
        card.section
    ));
    html.push_str(&format!(
        "    <summary><h2>{}</h2></summary>\n",
        escape_html(&card.heading)
    ));
    if let Some(note) = &card.note {
        html.push_str(&format!(
            "    <p class=\"{prefix}-note\">{}</p>\n",
            escape_html(note)
        ));
    }
    if !card.collapsed {
        html.push_str(&format!(
            "    <div class=\"{prefix}-fields {prefix}-columns-{}\">\n",
            card.columns
        ));
        for field in &card.fields {
            html.push_str(&generate_field(field, prefix, 3));
        }
        html.push_str("    </div>\n");
    }
    html.push_str("  </details>\n");

    html
}

/// Generate HTML for the current question of a question-by-question preview.
fn generate_question(view: &QuestionView, prefix: &str) -> String {
    let mut html = String::new();
    let disabled = |enabled: bool| if enabled { "" } else { " disabled" };

    html.push_str(&format!(
        "  <section class=\"{prefix}-card {prefix}-question\" data-section=\"{}\">\n",
        view.section
    ));
    html.push_str(&format!("    <h2>{}</h2>\n", escape_html(&view.caption)));
    html.push_str(&generate_field(&view.field, prefix, 2));
    html.push_str(&format!("    <div class=\"{prefix}-nav\">\n"));
    html.push_str(&format!(
        "      <button type=\"button\"{}>Previous</button>\n",
        disabled(view.can_go_previous)
    ));
    html.push_str(&format!(
        "      <button type=\"button\"{}>Next Question</button>\n",
        disabled(view.can_go_next)
    ));
    html.push_str("    </div>\n");
    html.push_str("  </section>\n");
    html.push_str(&format!(
        "  <p class=\"{prefix}-footnote\">{}</p>\n",
        escape_html(&view.footnote)
    ));

    html
}

/// Generate HTML for the fee summary of a paid program.
fn generate_fees(fees: &FeeSummary, prefix: &str) -> String {
    let mut html = String::new();

    html.push_str(&format!("  <section class=\"{prefix}-card {prefix}-fees\">\n"));
    html.push_str("    <h2>Payment</h2>\n");
    for (label, value) in [
        ("Program Fee", fees.display()),
        ("HDB Fee", fees.hdb_fee.to_string()),
        ("MSD Fee", fees.msd_fee.to_string()),
    ] {
        html.push_str(&format!("    <div class=\"{prefix}-field\">\n"));
        html.push_str(&format!("      <label>{label}</label>\n"));
        html.push_str(&format!(
            "      <input type=\"text\" class=\"{prefix}-input\" value=\"{}\" readonly>\n",
            escape_html(&value)
        ));
        html.push_str("    </div>\n");
    }
    html.push_str("  </section>\n");

    html
}

/// Generate HTML for a single field.
fn generate_field(field: &RenderedField, prefix: &str, indent: usize) -> String {
    let ind = "  ".repeat(indent);
    let field_id = escape_html(&field.id);
    let placeholder = escape_html(&field.placeholder);
    let value = escape_html(&field.display_value);

    let mut html = String::new();

    let class = if field.show_info_badge {
        format!("{prefix}-field {prefix}-prefilled")
    } else {
        format!("{prefix}-field")
    };
    let (kind, lock) = match &field.widget {
        Some(widget) if widget.is_disabled() => (widget.kind_name(), "disabled"),
        Some(widget) => (widget.kind_name(), "readonly"),
        None => ("none", "readonly"),
    };
    html.push_str(&format!(
        "{ind}<div class=\"{class}\" data-widget=\"{kind}\">\n"
    ));

    let mut label = escape_html(&field.label);
    if field.mandatory {
        label.push_str(&format!(" <span class=\"{prefix}-required\">*</span>"));
    }
    if field.show_info_badge {
        label.push_str(&format!(
            " <span class=\"{prefix}-info\" title=\"Filled in from the participant's profile\">i</span>"
        ));
    }
    html.push_str(&format!("{ind}  <label for=\"{field_id}\">{label}</label>\n"));
    if let Some(helper) = &field.helper_text {
        html.push_str(&format!(
            "{ind}  <p class=\"{prefix}-helper\">{}</p>\n",
            escape_html(helper)
        ));
    }

    match &field.widget {
        Some(Widget::Input { input_type }) => {
            html.push_str(&format!(
                "{ind}  <input type=\"{}\" id=\"{field_id}\" name=\"{field_id}\" class=\"{prefix}-input\" placeholder=\"{placeholder}\" value=\"{value}\" {lock}>\n",
                input_type.as_str()
            ));
        }
        // A sample value is not a date, so known dates show as plain text.
        Some(Widget::Date) if !field.display_value.is_empty() => {
            html.push_str(&format!(
                "{ind}  <input type=\"text\" id=\"{field_id}\" name=\"{field_id}\" class=\"{prefix}-input\" data-type=\"date\" value=\"{value}\" {lock}>\n"
            ));
        }
        Some(Widget::Date) => {
            html.push_str(&format!(
                "{ind}  <input type=\"date\" id=\"{field_id}\" name=\"{field_id}\" class=\"{prefix}-input\" {lock}>\n"
            ));
        }
        Some(Widget::File) => {
            html.push_str(&format!(
                "{ind}  <input type=\"file\" id=\"{field_id}\" name=\"{field_id}\" class=\"{prefix}-input\" {lock}>\n"
            ));
        }
        Some(Widget::Select { options }) => {
            html.push_str(&format!(
                "{ind}  <select id=\"{field_id}\" name=\"{field_id}\" class=\"{prefix}-input\" {lock}>\n"
            ));
            html.push_str(&format!(
                "{ind}    <option value=\"\" selected>{placeholder}</option>\n"
            ));
            for option in options {
                html.push_str(&format!(
                    "{ind}    <option value=\"{}\">{}</option>\n",
                    escape_html(&option.value),
                    escape_html(&option.label)
                ));
            }
            html.push_str(&format!("{ind}  </select>\n"));
        }
        Some(Widget::TextArea) => {
            html.push_str(&format!(
                "{ind}  <textarea id=\"{field_id}\" name=\"{field_id}\" rows=\"4\" class=\"{prefix}-textarea\" placeholder=\"{placeholder}\" {lock}>{value}</textarea>\n"
            ));
        }
        Some(Widget::Switch { on, caption }) => {
            let checked = if *on { " checked" } else { "" };
            html.push_str(&format!("{ind}  <div class=\"{prefix}-switch\">\n"));
            html.push_str(&format!(
                "{ind}    <input type=\"checkbox\" role=\"switch\" id=\"{field_id}\" name=\"{field_id}\"{checked} {lock}>\n"
            ));
            html.push_str(&format!("{ind}    <span>{}</span>\n", escape_html(caption)));
            html.push_str(&format!("{ind}  </div>\n"));
        }
        None => {
            // Unknown kind: label only
        }
    }

    html.push_str(&format!("{ind}</div>\n"));
    html
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate default CSS styles.
fn generate_styles(prefix: &str) -> String {
    format!(
        r#"  <style>
    .{prefix}-preview {{
      max-width: 900px;
      margin: 2rem auto;
      padding: 1.5rem;
      font-family: sans-serif;
      color: #292524;
    }}
    .{prefix}-header {{
      display: flex;
      align-items: center;
      justify-content: space-between;
      margin-bottom: 1.5rem;
    }}
    .{prefix}-badge {{
      font-size: 0.85rem;
      padding: 0.25rem 0.75rem;
      border-radius: 999px;
      background: #ffedd5;
      color: #c2410c;
    }}
    .{prefix}-card {{
      margin: 1rem 0;
      padding: 1rem 1.5rem;
      border: 1px solid #e7e5e4;
      border-radius: 1rem;
    }}
    .{prefix}-card summary h2 {{
      display: inline;
    }}
    .{prefix}-helper {{
      margin: 0 0 0.25rem;
      font-size: 0.75rem;
      color: #57534e;
    }}
    .{prefix}-note {{
      font-size: 0.8rem;
      color: #78716c;
    }}
    .{prefix}-columns-2 {{
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 1rem;
    }}
    .{prefix}-field {{
      margin: 0.5rem 0;
    }}
    .{prefix}-field label {{
      display: block;
      margin-bottom: 0.25rem;
    }}
    .{prefix}-prefilled label {{
      color: #57534e;
    }}
    .{prefix}-required {{
      color: #ef4444;
    }}
    .{prefix}-info {{
      font-size: 0.7rem;
      padding: 0 0.3rem;
      border: 1px solid #a8a29e;
      border-radius: 50%;
    }}
    .{prefix}-input, .{prefix}-textarea {{
      width: 100%;
      padding: 0.5rem;
      box-sizing: border-box;
    }}
    .{prefix}-switch {{
      display: flex;
      align-items: center;
      gap: 0.5rem;
    }}
    .{prefix}-nav {{
      display: flex;
      justify-content: space-between;
      padding-top: 1rem;
    }}
    .{prefix}-footnote {{
      text-align: center;
      font-style: italic;
      color: #57534e;
    }}
  </style>
"#
    )
}
