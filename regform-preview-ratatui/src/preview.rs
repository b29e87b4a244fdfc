//! Ratatui host for registration form previews.
//!
//! Draws the display tree in a styled terminal UI and lets the organizer
//! switch user type and layout, or step through questions, while looking at it.

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    layout::{Alignment, Constraint, Direction, Layout},
    prelude::CrosstermBackend,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use regform::{
    DisplayTree, FeeSummary, FieldCatalogue, LayoutBody, ProgramConfiguration, QuestionView,
    RenderContext, RenderedField, SectionCard, Widget,
};
use std::io::{self, Stdout};
use thiserror::Error;

use crate::state::{Control, PreviewState};

/// Error type for the Ratatui host.
#[derive(Debug, Error)]
pub enum RatatuiError {
    /// User cancelled the preview (pressed Esc).
    #[error("Preview cancelled by user")]
    Cancelled,

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal setup/restore error.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub background: Color,
    pub text: Color,
    pub highlight: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            highlight: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            border: Color::Gray,
        }
    }
}

/// Interactive terminal preview of a program's registration form.
#[derive(Debug, Clone)]
pub struct RatatuiPreview {
    /// Title shown in the header border.
    title: String,
    /// Color theme for the UI.
    theme: Theme,
}

impl Default for RatatuiPreview {
    fn default() -> Self {
        Self::new()
    }
}

impl RatatuiPreview {
    /// Create a new preview host with default settings.
    pub fn new() -> Self {
        Self {
            title: "Registration Preview".to_string(),
            theme: Theme::default(),
        }
    }

    /// Set the title shown in the header border.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Show the preview until the user quits.
    ///
    /// Returns the context the user ended on (`q`), or
    /// [`RatatuiError::Cancelled`] when they pressed Esc.
    pub fn run(
        &self,
        config: &ProgramConfiguration,
        catalogue: &FieldCatalogue,
        context: RenderContext,
    ) -> Result<RenderContext, RatatuiError> {
        let mut terminal = self.setup_terminal()?;
        let mut state = PreviewState::new(config, catalogue, context);

        let outcome = self.event_loop(&mut terminal, &mut state);
        self.restore_terminal(&mut terminal)?;

        match outcome? {
            Control::Cancel => Err(RatatuiError::Cancelled),
            _ => Ok(state.into_context()),
        }
    }

    fn event_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        state: &mut PreviewState<'_>,
    ) -> Result<Control, RatatuiError> {
        loop {
            terminal.draw(|frame| draw_ui(frame, state, &self.title, &self.theme))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match state.handle_key(key.code) {
                    Control::Continue => {}
                    done => return Ok(done),
                }
            }
        }
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>, RatatuiError> {
        enable_raw_mode().map_err(|e| RatatuiError::Terminal(e.to_string()))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), RatatuiError> {
        disable_raw_mode().map_err(|e| RatatuiError::Terminal(e.to_string()))?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }
}

pub(crate) fn draw_ui(frame: &mut Frame, state: &PreviewState<'_>, title: &str, theme: &Theme) {
    let area = frame.area();
    let tree = state.tree();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Preview-as status
            Constraint::Min(5),    // Form
            Constraint::Length(2), // Help
        ])
        .split(area);

    let header = Paragraph::new(tree.title.clone())
        .style(Style::default().fg(theme.primary).bold())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(format!(" {title} "))
                .title_style(Style::default().fg(theme.highlight)),
        );
    frame.render_widget(header, chunks[0]);

    let status = Paragraph::new(Line::from(vec![
        Span::styled(tree.user_type.label(), Style::default().fg(theme.secondary)),
        Span::raw("  ·  "),
        Span::styled(tree.layout_label.clone(), Style::default().fg(theme.highlight)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(status, chunks[1]);

    let form_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.background));
    let width = form_block.inner(chunks[2]).width as usize;
    let form = Paragraph::new(tree_lines(&tree, width, theme))
        .style(Style::default().fg(theme.text))
        .wrap(Wrap { trim: false })
        .scroll((state.scroll(), 0))
        .block(form_block);
    frame.render_widget(form, chunks[2]);

    let help_text = match tree.body {
        LayoutBody::Question(_) => {
            "←/p: Previous  →/n: Next  u: User type  l: Layout  ↑/↓: Scroll  q: Quit  Esc: Cancel"
        }
        _ => "1-9: Fold section  u: User type  l: Layout  ↑/↓: Scroll  q: Quit  Esc: Cancel",
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(theme.border))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(help, chunks[3]);
}

fn tree_lines(tree: &DisplayTree, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    match &tree.body {
        LayoutBody::Cards(cards) => {
            for (position, card) in cards.iter().enumerate() {
                card_lines(position, card, width, theme, &mut lines);
            }
        }
        LayoutBody::Question(view) => question_lines(view, theme, &mut lines),
        LayoutBody::Empty => lines.push(Line::styled(
            "There are no questions to preview.",
            Style::default().fg(theme.border).italic(),
        )),
    }

    if let Some(fees) = &tree.fee_summary {
        fee_lines(fees, theme, &mut lines);
    }

    if let Some(venue) = &tree.venue {
        lines.push(heading("Venue", theme));
        lines.push(Line::raw(format!("  {venue}")));
        lines.push(Line::default());
    }

    lines
}

fn heading(text: &str, theme: &Theme) -> Line<'static> {
    Line::styled(text.to_string(), Style::default().fg(theme.primary).bold())
}

fn card_lines(
    position: usize,
    card: &SectionCard,
    width: usize,
    theme: &Theme,
    lines: &mut Vec<Line<'static>>,
) {
    // The number is the key that folds the card.
    let marker = if card.collapsed { '▸' } else { '▾' };
    lines.push(heading(
        &format!("{marker} {}. {}", position + 1, card.heading),
        theme,
    ));
    if let Some(note) = &card.note {
        lines.push(Line::styled(
            note.clone(),
            Style::default().fg(theme.border).italic(),
        ));
    }

    if card.collapsed {
        lines.push(Line::default());
        return;
    }

    if card.columns >= 2 {
        let column = width / 2;
        for pair in card.fields.chunks(2) {
            let left = field_lines(&pair[0], theme);
            let right = pair.get(1).map(|f| field_lines(f, theme)).unwrap_or_default();
            for row in 0..left.len().max(right.len()) {
                let mut spans = pad(left.get(row), column);
                if let Some(line) = right.get(row) {
                    spans.extend(line.spans.iter().cloned());
                }
                lines.push(Line::from(spans));
            }
        }
    } else {
        for field in &card.fields {
            lines.extend(field_lines(field, theme));
        }
    }
    lines.push(Line::default());
}

/// The spans of a line, padded with spaces to `width` columns.
fn pad(line: Option<&Line<'static>>, width: usize) -> Vec<Span<'static>> {
    let Some(line) = line else {
        return vec![Span::raw(" ".repeat(width))];
    };
    let mut spans = line.spans.clone();
    let used = line.width();
    if used < width {
        spans.push(Span::raw(" ".repeat(width - used)));
    }
    spans
}

fn question_lines(view: &QuestionView, theme: &Theme, lines: &mut Vec<Line<'static>>) {
    lines.push(heading(&view.caption, theme));
    lines.push(Line::default());
    lines.extend(field_lines(&view.field, theme));
    lines.push(Line::default());

    let nav = |label: &'static str, enabled: bool| {
        let style = if enabled {
            Style::default().fg(theme.highlight)
        } else {
            Style::default().fg(theme.border).dim()
        };
        Span::styled(label, style)
    };
    lines.push(Line::from(vec![
        nav("◄ Previous", view.can_go_previous),
        Span::raw("    "),
        nav("Next Question ►", view.can_go_next),
    ]));
    lines.push(Line::default());
    lines.push(Line::styled(
        view.footnote.clone(),
        Style::default().fg(theme.border).italic(),
    ));
    lines.push(Line::default());
}

fn fee_lines(fees: &FeeSummary, theme: &Theme, lines: &mut Vec<Line<'static>>) {
    lines.push(heading("Payment", theme));
    lines.push(Line::raw(format!("  Program Fee: {}", fees.display())));
    lines.push(Line::raw(format!("  HDB Fee: {}", fees.hdb_fee)));
    lines.push(Line::raw(format!("  MSD Fee: {}", fees.msd_fee)));
    lines.push(Line::default());
}

fn field_lines(field: &RenderedField, theme: &Theme) -> Vec<Line<'static>> {
    let mut label = vec![Span::styled(
        field.label.clone(),
        Style::default().fg(theme.text),
    )];
    if field.mandatory {
        label.push(Span::styled(" *", Style::default().fg(theme.error)));
    }
    if field.show_info_badge {
        label.push(Span::styled(" (i)", Style::default().fg(theme.success)));
    }

    let mut lines = vec![Line::from(label)];
    if let Some(helper) = &field.helper_text {
        lines.push(Line::styled(
            format!("  {helper}"),
            Style::default().fg(theme.border).italic(),
        ));
    }

    let shown = |value: &str, placeholder: &str| {
        if value.is_empty() {
            Span::styled(
                format!("[ {placeholder} ]"),
                Style::default().fg(theme.border).dim(),
            )
        } else {
            Span::styled(format!("[ {value} ]"), Style::default().fg(theme.secondary))
        }
    };

    let control = match &field.widget {
        Some(Widget::Input { .. }) | Some(Widget::TextArea) => {
            Some(vec![shown(&field.display_value, &field.placeholder)])
        }
        Some(Widget::Date) => Some(vec![shown(&field.display_value, "dd/mm/yyyy")]),
        Some(Widget::File) => Some(vec![shown(&field.display_value, "Choose file")]),
        Some(Widget::Select { options }) => {
            let choices = options
                .iter()
                .map(|o| o.label.as_str())
                .collect::<Vec<_>>()
                .join(" / ");
            Some(vec![
                shown("", &format!("{} ▾", field.placeholder)),
                Span::styled(format!(" {choices}"), Style::default().fg(theme.border)),
            ])
        }
        Some(Widget::Switch { on, caption }) => {
            let knob = if *on { "(●)" } else { "( )" };
            Some(vec![Span::styled(
                format!("{knob} {caption}"),
                Style::default().fg(theme.border),
            )])
        }
        None => None,
    };

    if let Some(mut spans) = control {
        spans.insert(0, Span::raw("  "));
        lines.push(Line::from(spans));
    }
    lines
}
