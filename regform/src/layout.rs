//! Layout composition: grouped sections to a display tree.

use regform_types::{LayoutStyle, ProgramConfiguration, RenderContext, Section, UserType};

use crate::{GroupedSections, RenderedField, render_field};

const QUESTION_FOOTNOTE: &str =
    "Preview shows step-by-step experience. Actual form will guide users one question at a time.";

/// The composed preview of one program's registration form.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayTree {
    /// "<program name> Registration".
    pub title: String,
    pub layout_style: LayoutStyle,
    /// "<layout name> Layout".
    pub layout_label: String,
    pub user_type: UserType,
    pub body: LayoutBody,
    /// Present for paid programs.
    pub fee_summary: Option<FeeSummary>,
    /// Present for programs with a venue and a non-blank address.
    pub venue: Option<String>,
}

impl DisplayTree {
    /// Every rendered field in the body, in display order.
    pub fn fields(&self) -> Vec<&RenderedField> {
        match &self.body {
            LayoutBody::Cards(cards) => cards.iter().flat_map(|c| c.fields.iter()).collect(),
            LayoutBody::Question(view) => vec![&view.field],
            LayoutBody::Empty => Vec::new(),
        }
    }

    /// The section cards, empty for question-by-question layouts.
    pub fn cards(&self) -> &[SectionCard] {
        match &self.body {
            LayoutBody::Cards(cards) => cards,
            _ => &[],
        }
    }
}

/// The main content of a preview.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutBody {
    /// Single- and two-column layouts: one card per section.
    Cards(Vec<SectionCard>),

    /// Question-by-question layout: the current question only.
    Question(QuestionView),

    /// Question-by-question layout with nothing to ask.
    Empty,
}

/// A section rendered as a card.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionCard {
    pub section: Section,
    pub heading: String,
    /// 1 for stacked fields, 2 for a two-column grid.
    pub columns: u8,
    /// Why the section is there, for sections added by the delivery mode.
    pub note: Option<String>,
    /// Folded by the host: only the heading is shown.
    pub collapsed: bool,
    /// Empty when collapsed.
    pub fields: Vec<RenderedField>,
}

/// The current step of a question-by-question preview.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionView {
    /// Zero-based, always within `0..total`.
    pub index: usize,
    pub total: usize,
    pub section: Section,
    /// "Question <index + 1> of <total>".
    pub caption: String,
    pub field: RenderedField,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub footnote: String,
}

/// Fees shown alongside the form of a paid program.
#[derive(Debug, Clone, PartialEq)]
pub struct FeeSummary {
    pub currency: String,
    pub program_fee: f64,
    pub hdb_fee: f64,
    pub msd_fee: f64,
}

impl FeeSummary {
    fn from_config(config: &ProgramConfiguration) -> Self {
        Self {
            currency: config.currency.clone(),
            program_fee: config.program_fee,
            hdb_fee: config.hdb_fee,
            msd_fee: config.msd_fee,
        }
    }

    /// The program fee with its currency, e.g. "INR 1500".
    pub fn display(&self) -> String {
        format!("{} {}", self.currency, self.program_fee)
    }
}

/// Which sections a two-column layout lays out in a grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TwoColumnScope {
    /// Only personal information; other sections stay stacked.
    #[default]
    PersonalOnly,

    /// Every section.
    AllSections,
}

/// Step direction in a question-by-question layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Move the question index one step, staying within `0..total`.
///
/// Next at the last question and Previous at the first leave the index unchanged.
pub fn advance(index: usize, direction: Direction, total: usize) -> usize {
    let index = clamp_question_index(index, total);
    match direction {
        Direction::Next => (index + 1).min(total.saturating_sub(1)),
        Direction::Previous => index.saturating_sub(1),
    }
}

/// Clamp a possibly stale question index into `0..total` (0 when empty).
pub fn clamp_question_index(index: usize, total: usize) -> usize {
    index.min(total.saturating_sub(1))
}

/// Turns grouped sections into a [`DisplayTree`].
#[derive(Debug, Clone, Default)]
pub struct LayoutComposer {
    two_column_scope: TwoColumnScope,
}

impl LayoutComposer {
    /// Create a composer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose which sections become two-column grids.
    pub fn with_two_column_scope(mut self, scope: TwoColumnScope) -> Self {
        self.two_column_scope = scope;
        self
    }

    /// Compose the preview for the context's layout style.
    pub fn compose(
        &self,
        grouped: &GroupedSections,
        config: &ProgramConfiguration,
        context: &RenderContext,
    ) -> DisplayTree {
        let body = match context.layout_style {
            LayoutStyle::SingleColumn => {
                LayoutBody::Cards(self.cards(grouped, config, context, false))
            }
            LayoutStyle::TwoColumn => {
                LayoutBody::Cards(self.cards(grouped, config, context, true))
            }
            LayoutStyle::QuestionByQuestion => question(grouped, context),
        };

        let venue = (config.mode.needs_venue() && !config.venue_address.trim().is_empty())
            .then(|| config.venue_address.clone());

        DisplayTree {
            title: format!("{} Registration", config.program_name),
            layout_style: context.layout_style,
            layout_label: format!("{} Layout", context.layout_style.label()),
            user_type: context.user_type,
            body,
            fee_summary: config
                .payment_required
                .then(|| FeeSummary::from_config(config)),
            venue,
        }
    }

    fn cards(
        &self,
        grouped: &GroupedSections,
        config: &ProgramConfiguration,
        context: &RenderContext,
        two_column: bool,
    ) -> Vec<SectionCard> {
        grouped
            .sections()
            .iter()
            .map(|group| {
                let grid = two_column
                    && match self.two_column_scope {
                        TwoColumnScope::PersonalOnly => group.section == Section::Personal,
                        TwoColumnScope::AllSections => true,
                    };

                let collapsed = context.is_collapsed(group.section);
                let fields = if collapsed {
                    Vec::new()
                } else {
                    group
                        .fields
                        .iter()
                        .map(|f| render_field(f, context))
                        .collect()
                };

                SectionCard {
                    section: group.section,
                    heading: group.section.heading().to_string(),
                    columns: if grid { 2 } else { 1 },
                    note: group
                        .section
                        .is_mode_dependent()
                        .then(|| format!("Auto-added due to {} mode", config.mode)),
                    collapsed,
                    fields,
                }
            })
            .collect()
    }
}

fn question(grouped: &GroupedSections, context: &RenderContext) -> LayoutBody {
    let total = grouped.total_fields();
    let index = clamp_question_index(context.question_index, total);
    if index != context.question_index {
        tracing::debug!(
            stale = context.question_index,
            clamped = index,
            total,
            "clamped question index"
        );
    }

    let Some((section, descriptor)) = grouped.flattened().nth(index) else {
        return LayoutBody::Empty;
    };

    LayoutBody::Question(QuestionView {
        index,
        total,
        section,
        caption: format!("Question {} of {}", index + 1, total),
        field: render_field(descriptor, context),
        can_go_previous: index > 0,
        can_go_next: index + 1 < total,
        footnote: QUESTION_FOOTNOTE.to_string(),
    })
}
