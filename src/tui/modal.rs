// Modal system for TUI overlays
//
// Self-contained modal dialogs that handle their own input and return actions.
// App just holds Option<Modal>, input routing acts on returned ModalAction.

use crate::theme::Theme;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Actions returned by modal input handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    /// Close the modal
    Close,
}

/// Available modal types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Help overlay - shows keyboard shortcuts
    Help,
    /// A single user-facing message (validation errors, busy gate)
    Notice(String),
}

const HELP_KEYS: &[(&str, &str)] = &[
    ("Enter", "Run both searches"),
    ("Tab / Shift+Tab", "Switch between array and target"),
    ("Backspace", "Delete last character"),
    ("Ctrl+G", "Generate a random array"),
    ("Esc", "Cancel the running search"),
    ("?", "Toggle this help"),
    ("Ctrl+C / Ctrl+Q", "Quit"),
];

impl Modal {
    /// Create a help modal
    pub fn help() -> Self {
        Modal::Help
    }

    pub fn notice(message: impl Into<String>) -> Self {
        Modal::Notice(message.into())
    }

    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q') => {
                    ModalAction::Close
                }
                _ => ModalAction::None,
            },
            Modal::Notice(_) => match key {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('q') => {
                    ModalAction::Close
                }
                _ => ModalAction::None,
            },
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Modal::Help => " Help ",
            Modal::Notice(_) => " Notice ",
        }
    }

    fn lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        match self {
            Modal::Help => {
                let mut lines: Vec<Line> = HELP_KEYS
                    .iter()
                    .map(|(key, what)| {
                        Line::from(vec![
                            Span::styled(
                                format!("{:>16}  ", key),
                                Style::default()
                                    .fg(theme.highlight)
                                    .add_modifier(Modifier::BOLD),
                            ),
                            Span::styled(what.to_string(), Style::default().fg(theme.foreground)),
                        ])
                    })
                    .collect();
                lines.push(Line::default());
                lines.push(Line::styled(
                    format!("Themes: {}", Theme::list_available().join(", ")),
                    Style::default().fg(theme.muted),
                ));
                lines
            }
            Modal::Notice(message) => vec![
                Line::styled(message.clone(), Style::default().fg(theme.foreground)),
                Line::default(),
                Line::styled("Press Enter to dismiss", Style::default().fg(theme.muted)),
            ],
        }
    }

    /// Render centered over `area`
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let lines = self.lines(theme);
        let height = (lines.len() as u16 + 2).min(area.height);
        let width = match self {
            Modal::Help => 60,
            Modal::Notice(_) => 50,
        }
        .min(area.width);

        let popup = centered(area, width, height);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.highlight))
            .title(self.title())
            .style(Style::default().bg(theme.background));

        let alignment = match self {
            Modal::Help => Alignment::Left,
            Modal::Notice(_) => Alignment::Center,
        };
        let body = Paragraph::new(lines)
            .block(block)
            .alignment(alignment)
            .wrap(Wrap { trim: true });

        f.render_widget(Clear, popup);
        f.render_widget(body, popup);
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    popup
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_closes_on_enter_or_esc() {
        let modal = Modal::notice("Array input cannot be empty.");
        assert_eq!(modal.handle_input(KeyCode::Enter), ModalAction::Close);
        assert_eq!(modal.handle_input(KeyCode::Esc), ModalAction::Close);
        assert_eq!(modal.handle_input(KeyCode::Char('5')), ModalAction::None);
    }

    #[test]
    fn help_toggles_with_question_mark() {
        assert_eq!(Modal::help().handle_input(KeyCode::Char('?')), ModalAction::Close);
        assert_eq!(Modal::help().handle_input(KeyCode::Tab), ModalAction::None);
    }

    #[test]
    fn centered_popup_fits_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered(area, 50, 6);
        assert_eq!((popup.width, popup.height), (50, 6));
        assert_eq!(popup.x, 25);
        assert_eq!(popup.y, 17);
    }
}
