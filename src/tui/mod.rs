// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks)
// - Rendering the UI
// - Receiving search events and updating the status line

pub mod app;
pub mod board;
pub mod components;
pub mod field;
pub mod modal;
pub mod ui;

use crate::config::Config;
use crate::events::SearchEvent;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Search events buffered between the search task and the UI
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop and restores the terminal
/// when done, even if the loop failed.
pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let (event_tx, mut event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
    let mut app = App::new(config, log_buffer, event_tx);
    tracing::info!("Searchlight ready (theme: {})", app.theme.name);

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app, &mut event_rx).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on keyboard input, the animation tick and search events with
/// tokio::select!, redrawing after whichever completes first.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_rx: &mut mpsc::Receiver<SearchEvent>,
) -> Result<()> {
    // Board highlights change at the step delay; 10 FPS keeps the spinner smooth
    let mut tick_interval = tokio::time::interval(Duration::from_millis(100));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            Some(search_event) = event_rx.recv() => {
                app.handle_search_event(search_event);
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Stop a running search at its next step
    app.cancel_search();
    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Global → Field editing
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    // Layer 1: Modal captures all input when active
    if let Some(modal) = &app.modal {
        if modal.handle_input(key_event.code) == ModalAction::Close {
            app.modal = None;
        }
        return;
    }

    // Layer 2: Global keys
    if handle_global_keys(app, &key_event) {
        return;
    }

    // Layer 3: Field editing
    match key_event.code {
        KeyCode::Enter => app.execute_search(),
        KeyCode::Esc => {
            app.cancel_search();
        }
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Backspace => app.focused_field_mut().backspace(),
        KeyCode::Char('?') => app.modal = Some(Modal::help()),
        KeyCode::Char(c) => app.focused_field_mut().push(c),
        _ => {}
    }
}

/// Ctrl chords that work regardless of focus. Returns true if consumed.
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    if !key_event.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }
    match key_event.code {
        KeyCode::Char('c') | KeyCode::Char('q') => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('g') => {
            app.generate_random();
            true
        }
        // Swallow other chords so they never reach the fields
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let (tx, _rx) = mpsc::channel(1);
        App::new(Config::default(), LogBuffer::new(), tx)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        handle_key_event(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let mut app = app();
        for c in "5,3".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('5'));

        assert_eq!(app.array_field.value(), "5,3");
        assert_eq!(app.target_field.value(), "5");
    }

    #[test]
    fn modal_swallows_keys_until_closed() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.modal, Some(Modal::Help));

        press(&mut app, KeyCode::Char('7'));
        assert_eq!(app.array_field.value(), "");

        press(&mut app, KeyCode::Esc);
        assert!(app.modal.is_none());
    }

    #[test]
    fn empty_submit_shows_notice() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.modal, Some(Modal::Notice(_))));
    }

    #[test]
    fn ctrl_chords_are_global() {
        let mut app = app();
        ctrl(&mut app, 'g');
        assert!(!app.array_field.value().is_empty());
        assert!(!app.should_quit);

        ctrl(&mut app, 'x');
        ctrl(&mut app, 'q');
        assert!(app.should_quit);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut app = app();
        let mut release = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        handle_key_event(&mut app, release);
        assert_eq!(app.array_field.value(), "");
    }
}
