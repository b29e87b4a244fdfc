use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ProgramConfiguration, Section};

/// Presentation strategy for a form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutStyle {
    #[default]
    SingleColumn,
    TwoColumn,
    QuestionByQuestion,
}

impl LayoutStyle {
    pub const ALL: [LayoutStyle; 3] = [
        LayoutStyle::SingleColumn,
        LayoutStyle::TwoColumn,
        LayoutStyle::QuestionByQuestion,
    ];

    /// Human-readable name ("Two Column").
    pub fn label(self) -> &'static str {
        match self {
            Self::SingleColumn => "Single Column",
            Self::TwoColumn => "Two Column",
            Self::QuestionByQuestion => "Question by Question",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SingleColumn => "single-column",
            Self::TwoColumn => "two-column",
            Self::QuestionByQuestion => "question-by-question",
        }
    }

    /// The next style in `ALL`, wrapping around.
    pub fn cycle(self) -> Self {
        match self {
            Self::SingleColumn => Self::TwoColumn,
            Self::TwoColumn => Self::QuestionByQuestion,
            Self::QuestionByQuestion => Self::SingleColumn,
        }
    }
}

impl fmt::Display for LayoutStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownLayout(s.to_string()))
    }
}

/// Which kind of participant the preview is rendered for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserType {
    #[default]
    New,
    Existing,
}

impl UserType {
    pub fn toggled(self) -> Self {
        match self {
            Self::New => Self::Existing,
            Self::Existing => Self::New,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::New => "New User",
            Self::Existing => "Existing User",
        }
    }
}

/// What happens to prefilled fields when previewing as an existing user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrefilledPolicy {
    /// Show them read-only with a sample value and an info badge.
    #[default]
    ShowReadOnly,

    /// Leave them out of the form entirely.
    Hide,
}

/// The sections a host currently shows folded, by heading only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CollapsedSections(u8);

impl CollapsedSections {
    fn bit(section: Section) -> u8 {
        1 << section as u8
    }

    pub fn contains(self, section: Section) -> bool {
        self.0 & Self::bit(section) != 0
    }

    pub fn insert(&mut self, section: Section) {
        self.0 |= Self::bit(section);
    }

    pub fn remove(&mut self, section: Section) {
        self.0 &= !Self::bit(section);
    }

    /// Fold an open section, or unfold a folded one.
    pub fn toggle(&mut self, section: Section) {
        self.0 ^= Self::bit(section);
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<Section> for CollapsedSections {
    fn from_iter<I: IntoIterator<Item = Section>>(iter: I) -> Self {
        let mut collapsed = Self::default();
        for section in iter {
            collapsed.insert(section);
        }
        collapsed
    }
}

/// Ephemeral per-render state.
///
/// The host owns it and hands it to the render functions by reference.
/// Recreate it with [`RenderContext::from_config`] when the configuration changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderContext {
    pub user_type: UserType,
    pub layout_style: LayoutStyle,
    /// Only meaningful for question-by-question layouts.
    pub question_index: usize,
    pub prefilled_policy: PrefilledPolicy,
    /// Folded section cards. Ignored by question-by-question layouts.
    pub collapsed: CollapsedSections,
}

impl RenderContext {
    /// Create a context for the given user type and layout.
    pub fn new(user_type: UserType, layout_style: LayoutStyle) -> Self {
        Self {
            user_type,
            layout_style,
            question_index: 0,
            prefilled_policy: PrefilledPolicy::default(),
            collapsed: CollapsedSections::default(),
        }
    }

    /// The initial context for a configuration's "preview as" settings.
    pub fn from_config(config: &ProgramConfiguration) -> Self {
        Self::new(config.user_type, config.layout_style)
    }

    /// Set the current question index.
    pub fn with_question_index(mut self, question_index: usize) -> Self {
        self.question_index = question_index;
        self
    }

    /// Set the prefilled-field policy.
    pub fn with_prefilled_policy(mut self, prefilled_policy: PrefilledPolicy) -> Self {
        self.prefilled_policy = prefilled_policy;
        self
    }

    /// Fold a section card.
    pub fn with_collapsed(mut self, section: Section) -> Self {
        self.collapsed.insert(section);
        self
    }

    pub fn is_collapsed(&self, section: Section) -> bool {
        self.collapsed.contains(section)
    }

    pub fn is_existing_user(&self) -> bool {
        self.user_type == UserType::Existing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_round_trips_through_str() {
        for style in LayoutStyle::ALL {
            assert_eq!(style.as_str().parse::<LayoutStyle>().unwrap(), style);
        }
    }

    #[test]
    fn unknown_layout_is_an_error() {
        let err = "three-column".parse::<LayoutStyle>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown layout style: three-column");
    }

    #[test]
    fn cycle_visits_every_layout() {
        let mut style = LayoutStyle::SingleColumn;
        let mut seen = vec![style];
        for _ in 0..2 {
            style = style.cycle();
            seen.push(style);
        }
        assert_eq!(seen, LayoutStyle::ALL);
        assert_eq!(style.cycle(), LayoutStyle::SingleColumn);
    }

    #[test]
    fn context_from_config() {
        let config = ProgramConfiguration {
            layout_style: LayoutStyle::TwoColumn,
            user_type: UserType::Existing,
            ..Default::default()
        };

        let context = RenderContext::from_config(&config);
        assert!(context.is_existing_user());
        assert_eq!(context.layout_style, LayoutStyle::TwoColumn);
        assert_eq!(context.question_index, 0);
        assert_eq!(context.prefilled_policy, PrefilledPolicy::ShowReadOnly);
    }

    #[test]
    fn collapsed_sections() {
        let mut collapsed: CollapsedSections = [Section::Travel].into_iter().collect();
        assert!(collapsed.contains(Section::Travel));
        assert!(!collapsed.contains(Section::Personal));

        collapsed.toggle(Section::Personal);
        collapsed.toggle(Section::Travel);
        assert!(collapsed.contains(Section::Personal));
        assert!(!collapsed.contains(Section::Travel));

        collapsed.remove(Section::Personal);
        assert!(collapsed.is_empty());

        let context = RenderContext::default().with_collapsed(Section::Payment);
        assert!(context.is_collapsed(Section::Payment));
        assert!(!context.is_collapsed(Section::Accommodation));
    }

    #[test]
    fn toggling_user_type() {
        assert_eq!(UserType::New.toggled(), UserType::Existing);
        assert_eq!(UserType::Existing.toggled().toggled(), UserType::Existing);
    }
}
