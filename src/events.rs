// Events emitted by the orchestrator
//
// These flow from the search task to the TUI (status, toasts, notices) and to
// the headless runner's `--json` output. Same shape as every other
// tagged event stream in the app: `{"type": "run_started", ...}`.

use crate::player::Playback;
use crate::search::Algorithm;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SearchEvent {
    /// Input validated; the linear animation is about to start
    RunStarted {
        timestamp: DateTime<Utc>,
        values: Vec<u32>,
        sorted: Vec<u32>,
        target: u32,
    },

    /// One algorithm's playback ended (completed or cancelled)
    AlgorithmFinished {
        timestamp: DateTime<Utc>,
        algorithm: Algorithm,
        playback: Playback,
    },

    /// Both playbacks ended; the metrics sink was updated unless cancelled
    RunFinished {
        timestamp: DateTime<Utc>,
        linear_steps: u32,
        binary_steps: u32,
        cancelled: bool,
    },

    /// A request was refused before anything ran
    Rejected {
        timestamp: DateTime<Utc>,
        kind: &'static str,
        message: String,
    },
}

impl SearchEvent {
    /// One-line summary for logs and the status bar
    pub fn summary(&self) -> String {
        match self {
            SearchEvent::RunStarted { values, target, .. } => {
                format!("Searching for {} in {} element(s)", target, values.len())
            }
            SearchEvent::AlgorithmFinished {
                algorithm,
                playback,
                ..
            } => match (playback.is_cancelled(), playback.found_at) {
                (true, _) => format!("{} cancelled", algorithm.name()),
                (false, Some(i)) => format!(
                    "{}: found at {} in {} step(s)",
                    algorithm.name(),
                    i,
                    playback.steps_taken
                ),
                (false, None) => format!(
                    "{}: not found after {} step(s)",
                    algorithm.name(),
                    playback.steps_taken
                ),
            },
            SearchEvent::RunFinished {
                linear_steps,
                binary_steps,
                cancelled,
                ..
            } => {
                if *cancelled {
                    "Search cancelled".to_string()
                } else {
                    format!("Linear {} vs Binary {} step(s)", linear_steps, binary_steps)
                }
            }
            SearchEvent::Rejected { message, .. } => message.clone(),
        }
    }
}
