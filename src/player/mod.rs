// Animation player
//
// Replays a recorded trace onto a surface, one step per tick:
//
//   Idle ──play()──▶ Playing ──▶ Completed
//                       │
//                       └──cancel──▶ Cancelled
//
// The only suspension point is the fixed pause after a Checking or Found
// step. Cancellation is checked once at the top of every step. Whatever the
// exit path, no cell keeps the `Current` highlight after play() returns.

pub mod clock;
pub mod surface;

pub use clock::{Clock, InstantClock, TokioClock};
pub use surface::{Highlight, Readout, Surface};

use crate::search::{Algorithm, StepStatus, Trace};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Default pause between animated steps
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(1000);

/// Cooperative cancellation flag shared between a run and whoever may stop it
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// Lifecycle of a single playback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerState {
    #[default]
    Idle,
    Playing,
    Completed,
    Cancelled,
}

/// What a finished playback reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Playback {
    pub state: PlayerState,
    pub steps_taken: u32,
    pub found_at: Option<usize>,
}

impl Playback {
    pub fn is_cancelled(&self) -> bool {
        self.state == PlayerState::Cancelled
    }
}

/// Replays one trace for one algorithm
pub struct Player<'a, C: Clock> {
    algorithm: Algorithm,
    clock: &'a C,
    delay: Duration,
    cancel: CancelToken,
    state: PlayerState,
}

impl<'a, C: Clock> Player<'a, C> {
    pub fn new(algorithm: Algorithm, clock: &'a C, delay: Duration, cancel: CancelToken) -> Self {
        Self {
            algorithm,
            clock,
            delay,
            cancel,
            state: PlayerState::Idle,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Animate `trace` over `values` on `surface`
    pub async fn play<S: Surface>(&mut self, surface: &mut S, values: &[u32], trace: &Trace) -> Playback {
        surface.set_readout(Readout::StepsTaken, Readout::StepsTaken.format(0));
        surface.set_readout(Readout::FoundAt, Readout::FoundAt.format("-"));
        surface.render_array(values);
        self.state = PlayerState::Playing;

        let mut steps_taken: u32 = 0;
        let mut current: Option<usize> = None;
        let mut found_at = None;

        for step in trace {
            if self.cancel.is_cancelled() {
                tracing::debug!(
                    "{} cancelled after {} step(s)",
                    self.algorithm.name(),
                    steps_taken
                );
                self.state = PlayerState::Cancelled;
                break;
            }

            match (step.status, step.index) {
                (StepStatus::Checking, Some(index)) => {
                    steps_taken += 1;
                    surface.set_readout(
                        Readout::StepsTaken,
                        Readout::StepsTaken.format(steps_taken),
                    );
                    if let Some(previous) = current.take() {
                        surface.remove_highlight(previous, Highlight::Current);
                    }
                    surface.add_highlight(index, Highlight::Current);
                    current = Some(index);
                    tracing::trace!("{} checking {}", self.algorithm.name(), index);

                    self.clock.sleep(self.delay).await;
                }
                (StepStatus::Found, Some(index)) => {
                    steps_taken += 1;
                    surface.set_readout(
                        Readout::StepsTaken,
                        Readout::StepsTaken.format(steps_taken),
                    );
                    surface.set_readout(Readout::FoundAt, Readout::FoundAt.format(index));
                    if let Some(previous) = current.take() {
                        if previous != index {
                            surface.remove_highlight(previous, Highlight::Current);
                        }
                    }
                    surface.remove_highlight(index, Highlight::Current);
                    surface.add_highlight(index, Highlight::Found);
                    found_at = Some(index);

                    self.clock.sleep(self.delay).await;
                    self.state = PlayerState::Completed;
                    break;
                }
                (StepStatus::NotFound, _) => {
                    surface.set_readout(Readout::FoundAt, Readout::FoundAt.format("Not Found"));
                    if let Some(previous) = current.take() {
                        surface.remove_highlight(previous, Highlight::Current);
                    }
                }
                (StepStatus::EmptyArray, _) => {
                    surface.set_readout(
                        Readout::FoundAt,
                        Readout::FoundAt.format("Array is empty"),
                    );
                }
                // Checking/Found always carry an index
                (StepStatus::Checking | StepStatus::Found, None) => {}
            }
        }

        if let Some(previous) = current.take() {
            surface.remove_highlight(previous, Highlight::Current);
        }
        if self.state == PlayerState::Playing {
            self.state = PlayerState::Completed;
        }

        Playback {
            state: self.state,
            steps_taken,
            found_at,
        }
    }
}
