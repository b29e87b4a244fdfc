//! Preview state and key handling, kept free of terminal I/O.

use crossterm::event::KeyCode;
use regform::{
    Direction, DisplayTree, FieldCatalogue, LayoutStyle, ProgramConfiguration, RenderContext,
    advance, clamp_question_index, group_sections, render_preview,
};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Control {
    Continue,
    Quit,
    Cancel,
}

/// The host side of a preview: the inputs it renders and the context it owns.
pub(crate) struct PreviewState<'a> {
    config: &'a ProgramConfiguration,
    catalogue: &'a FieldCatalogue,
    context: RenderContext,
    scroll: u16,
}

impl<'a> PreviewState<'a> {
    pub(crate) fn new(
        config: &'a ProgramConfiguration,
        catalogue: &'a FieldCatalogue,
        context: RenderContext,
    ) -> Self {
        let mut state = Self {
            config,
            catalogue,
            context,
            scroll: 0,
        };
        state.clamp();
        state
    }

    #[cfg(test)]
    pub(crate) fn context(&self) -> &RenderContext {
        &self.context
    }

    pub(crate) fn into_context(self) -> RenderContext {
        self.context
    }

    pub(crate) fn scroll(&self) -> u16 {
        self.scroll
    }

    /// The preview as it currently looks.
    pub(crate) fn tree(&self) -> DisplayTree {
        render_preview(self.config, self.catalogue, &self.context)
    }

    fn total(&self) -> usize {
        group_sections(self.catalogue, self.config, &self.context).total_fields()
    }

    fn clamp(&mut self) {
        self.context.question_index =
            clamp_question_index(self.context.question_index, self.total());
    }

    fn step(&mut self, direction: Direction) {
        if self.context.layout_style != LayoutStyle::QuestionByQuestion {
            return;
        }
        self.context.question_index = advance(self.context.question_index, direction, self.total());
    }

    /// Fold or unfold the card at `position` (0-based) in a card layout.
    fn toggle_card(&mut self, position: usize) {
        if self.context.layout_style == LayoutStyle::QuestionByQuestion {
            return;
        }
        let grouped = group_sections(self.catalogue, self.config, &self.context);
        let Some(group) = grouped.sections().get(position) else {
            return;
        };
        self.context.collapsed.toggle(group.section);
        tracing::debug!(
            section = %group.section,
            collapsed = self.context.is_collapsed(group.section),
            "toggled section"
        );
    }

    pub(crate) fn handle_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Esc => return Control::Cancel,
            KeyCode::Char('q') => return Control::Quit,
            KeyCode::Right | KeyCode::Char('n') => self.step(Direction::Next),
            KeyCode::Left | KeyCode::Char('p') => self.step(Direction::Previous),
            KeyCode::Char('u') => {
                self.context.user_type = self.context.user_type.toggled();
                // Hidden prefilled fields change the question count.
                self.clamp();
                tracing::debug!(user = self.context.user_type.label(), "toggled user type");
            }
            KeyCode::Char('l') => {
                self.context.layout_style = self.context.layout_style.cycle();
                self.scroll = 0;
                self.clamp();
                tracing::debug!(layout = %self.context.layout_style, "switched layout");
            }
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(digit) = c.to_digit(10) {
                    self.toggle_card(digit as usize - 1);
                }
            }
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down => self.scroll = self.scroll.saturating_add(1),
            _ => {}
        }
        Control::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use example_programs::catalogues;
    use regform::{LayoutBody, PrefilledPolicy, Section, UserType};

    fn config() -> ProgramConfiguration {
        ProgramConfiguration {
            program_name: "Test".into(),
            ..Default::default()
        }
    }

    #[test]
    fn steps_only_in_question_layout() {
        let config = config();
        let catalogue = catalogues::personal_only();

        let context = RenderContext::new(UserType::New, LayoutStyle::SingleColumn);
        let mut state = PreviewState::new(&config, &catalogue, context);
        state.handle_key(KeyCode::Right);
        assert_eq!(state.context().question_index, 0);

        let context = RenderContext::new(UserType::New, LayoutStyle::QuestionByQuestion);
        let mut state = PreviewState::new(&config, &catalogue, context);
        state.handle_key(KeyCode::Right);
        state.handle_key(KeyCode::Char('n'));
        assert_eq!(state.context().question_index, 2);
        state.handle_key(KeyCode::Left);
        assert_eq!(state.context().question_index, 1);
        for _ in 0..10 {
            state.handle_key(KeyCode::Char('n'));
        }
        assert_eq!(state.context().question_index, 3);
    }

    #[test]
    fn toggling_user_reclamps_hidden_questions() {
        let config = config();
        let catalogue = catalogues::personal_only();
        let context = RenderContext::new(UserType::New, LayoutStyle::QuestionByQuestion)
            .with_prefilled_policy(PrefilledPolicy::Hide)
            .with_question_index(3);
        let mut state = PreviewState::new(&config, &catalogue, context);

        state.handle_key(KeyCode::Char('u'));
        assert_eq!(state.context().user_type, UserType::Existing);
        assert_eq!(state.context().question_index, 1);

        let LayoutBody::Question(view) = state.tree().body else {
            panic!("expected a question");
        };
        assert_eq!(view.caption, "Question 2 of 2");
    }

    #[test]
    fn cycling_layout_resets_scroll() {
        let config = config();
        let catalogue = catalogues::personal_only();
        let context = RenderContext::new(UserType::New, LayoutStyle::SingleColumn);
        let mut state = PreviewState::new(&config, &catalogue, context);

        state.handle_key(KeyCode::Down);
        state.handle_key(KeyCode::Down);
        state.handle_key(KeyCode::Up);
        assert_eq!(state.scroll(), 1);

        state.handle_key(KeyCode::Char('l'));
        assert_eq!(state.context().layout_style, LayoutStyle::TwoColumn);
        assert_eq!(state.scroll(), 0);
    }

    #[test]
    fn number_keys_fold_cards() {
        let config = ProgramConfiguration {
            mode: regform::DeliveryMode::Offline,
            ..config()
        };
        let catalogue = catalogues::mixed();
        let context = RenderContext::new(UserType::New, LayoutStyle::SingleColumn);
        let mut state = PreviewState::new(&config, &catalogue, context);

        // Personal, then Travel: payment is not required.
        state.handle_key(KeyCode::Char('2'));
        assert!(state.context().is_collapsed(Section::Travel));
        let folded: Vec<_> = state
            .tree()
            .cards()
            .iter()
            .map(|c| (c.section, c.collapsed))
            .collect();
        assert_eq!(folded, [(Section::Personal, false), (Section::Travel, true)]);

        state.handle_key(KeyCode::Char('2'));
        assert!(!state.context().is_collapsed(Section::Travel));

        // No third card.
        state.handle_key(KeyCode::Char('3'));
        assert!(state.context().collapsed.is_empty());
    }

    #[test]
    fn number_keys_ignored_in_question_layout() {
        let config = config();
        let catalogue = catalogues::personal_only();
        let context = RenderContext::new(UserType::New, LayoutStyle::QuestionByQuestion);
        let mut state = PreviewState::new(&config, &catalogue, context);

        state.handle_key(KeyCode::Char('1'));
        assert!(state.context().collapsed.is_empty());
    }

    #[test]
    fn quit_and_cancel() {
        let config = config();
        let catalogue = catalogues::personal_only();
        let mut state = PreviewState::new(&config, &catalogue, RenderContext::default());

        assert_eq!(state.handle_key(KeyCode::Char('x')), Control::Continue);
        assert_eq!(state.handle_key(KeyCode::Char('q')), Control::Quit);
        assert_eq!(state.handle_key(KeyCode::Esc), Control::Cancel);
    }
}
