// TUI application state
//
// Holds the input fields, the two shared boards, the metrics sink and the
// UI chrome (modal, toast, spinner). Searches run on a spawned task that
// writes into the shared boards; App only reads them when drawing.

use super::board::{self, BoardSurface, SharedBoard};
use super::components::Toast;
use super::field::TextField;
use super::modal::Modal;
use crate::config::Config;
use crate::events::SearchEvent;
use crate::logging::LogBuffer;
use crate::metrics::{MetricsSink, SharedMetrics};
use crate::player::TokioClock;
use crate::random::{format_array, random_array};
use crate::search::Algorithm;
use crate::session::Orchestrator;
use crate::theme::Theme;
use std::time::Instant;
use tokio::sync::mpsc;

/// Spinner frames for the title bar while a search runs
const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Which input field receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Array,
    Target,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Array => Focus::Target,
            Focus::Target => Focus::Array,
        }
    }

    /// Two fields, so the cycle is symmetric
    pub fn prev(self) -> Self {
        self.next()
    }
}

/// Main application state for the TUI
pub struct App {
    pub array_field: TextField,
    pub target_field: TextField,
    pub focus: Focus,

    pub linear_board: SharedBoard,
    pub binary_board: SharedBoard,
    pub metrics: SharedMetrics,
    orchestrator: Orchestrator,

    /// Log buffer for system logs display
    pub log_buffer: LogBuffer,

    pub config: Config,
    pub theme: Theme,

    pub modal: Option<Modal>,
    pub toast: Option<Toast>,

    /// Summary of the most recent search event
    pub status: String,

    /// Searches that ran to completion
    pub runs_completed: u32,

    /// Whether the app should quit
    pub should_quit: bool,

    /// When the app started (for uptime display)
    pub start_time: Instant,

    spinner_frame: usize,
}

impl App {
    pub fn new(config: Config, log_buffer: LogBuffer, events: mpsc::Sender<SearchEvent>) -> Self {
        let metrics = MetricsSink::shared();
        let orchestrator =
            Orchestrator::new(metrics.clone(), config.step_delay()).with_events(events);

        Self {
            array_field: TextField::new(" Array (comma-separated, 1-100) "),
            target_field: TextField::new(" Target "),
            focus: Focus::default(),
            linear_board: board::shared(Algorithm::Linear),
            binary_board: board::shared(Algorithm::Binary),
            metrics,
            orchestrator,
            log_buffer,
            theme: Theme::by_name(&config.theme),
            config,
            modal: None,
            toast: None,
            status: "Enter an array and a target, then press Enter".to_string(),
            runs_completed: 0,
            should_quit: false,
            start_time: Instant::now(),
            spinner_frame: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.orchestrator.gate().is_busy()
    }

    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            Focus::Array => &mut self.array_field,
            Focus::Target => &mut self.target_field,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    fn surfaces(&self) -> (BoardSurface, BoardSurface) {
        (
            BoardSurface::new(self.linear_board.clone()),
            BoardSurface::new(self.binary_board.clone()),
        )
    }

    /// Validate the fields and start both animations on a background task.
    ///
    /// Rejections (bad input, busy gate) open a notice and start nothing.
    pub fn execute_search(&mut self) {
        let request = match self
            .orchestrator
            .begin(self.array_field.value(), self.target_field.value())
        {
            Ok(request) => request,
            Err(e) => {
                self.modal = Some(Modal::notice(e.to_string()));
                return;
            }
        };

        let orchestrator = self.orchestrator.clone();
        let (mut linear, mut binary) = self.surfaces();
        tokio::spawn(async move {
            orchestrator
                .run(request, &mut linear, &mut binary, &TokioClock)
                .await;
        });
    }

    /// Fill the array field with random values and clear previous results
    pub fn generate_random(&mut self) {
        let (mut linear, mut binary) = self.surfaces();
        if let Err(e) = self.orchestrator.clear_results(&mut linear, &mut binary) {
            self.modal = Some(Modal::notice(e.to_string()));
            return;
        }

        let values = random_array(self.config.random_len, &mut rand::thread_rng());
        self.array_field.set(format_array(&values));
        tracing::debug!("Generated random array of {} values", values.len());
        self.show_toast(format!("Generated {} values", values.len()));
    }

    /// Ask the running search to stop at its next step
    pub fn cancel_search(&mut self) -> bool {
        let cancelled = self.orchestrator.gate().cancel_active();
        if cancelled {
            self.show_toast("Cancelling search...");
        }
        cancelled
    }

    pub fn handle_search_event(&mut self, event: SearchEvent) {
        self.status = event.summary();
        if let SearchEvent::RunFinished { cancelled, .. } = event {
            if cancelled {
                self.show_toast("Search cancelled");
            } else {
                self.runs_completed += 1;
            }
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Advance the spinner and expire the toast
    pub fn tick_animation(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    pub fn spinner_char(&self) -> char {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    /// Get uptime as a formatted string
    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;

        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }
}
