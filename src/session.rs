//! Search orchestration
//!
//! The orchestrator owns the run gate and the metrics sink. A search goes
//! through a fixed sequence:
//!
//! ```text
//! begin():  gate ─▶ validate array ─▶ validate target ─▶ SearchRequest
//! run():    clear boards + metrics
//!           ─▶ linear trace ─▶ play (linear board)
//!           ─▶ sort copy ─▶ binary trace ─▶ play (binary board)
//!           ─▶ metrics.update()   (skipped when cancelled)
//! ```
//!
//! The gate is held by the request's [`RunToken`] from `begin()` until `run()`
//! returns. A second request in that window is rejected, never queued.

use crate::error::SearchError;
use crate::events::SearchEvent;
use crate::metrics::{MetricsSink, SharedMetrics};
use crate::player::{CancelToken, Clock, Playback, Player, Surface};
use crate::search::Algorithm;
use crate::validate::{parse_array, parse_target};
use chrono::Utc;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::mpsc;

// ─────────────────────────────────────────────────────────────────────────────
// Run gate
// ─────────────────────────────────────────────────────────────────────────────

type ActiveSlot = Arc<Mutex<Option<CancelToken>>>;

fn lock_slot(slot: &ActiveSlot) -> MutexGuard<'_, Option<CancelToken>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

fn lock_metrics(metrics: &SharedMetrics) -> MutexGuard<'_, MetricsSink> {
    metrics.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Admits at most one search at a time
#[derive(Debug, Clone, Default)]
pub struct RunGate {
    active: ActiveSlot,
}

impl RunGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the gate, or fail if a run is already in flight
    pub fn try_acquire(&self) -> Result<RunToken, SearchError> {
        let mut slot = lock_slot(&self.active);
        if slot.is_some() {
            return Err(SearchError::ConcurrentInvocation);
        }
        let cancel = CancelToken::new();
        *slot = Some(cancel.clone());
        Ok(RunToken {
            active: self.active.clone(),
            cancel,
        })
    }

    pub fn is_busy(&self) -> bool {
        lock_slot(&self.active).is_some()
    }

    /// Ask the active run to stop. Returns false when nothing is running.
    pub fn cancel_active(&self) -> bool {
        match lock_slot(&self.active).as_ref() {
            Some(token) => {
                token.cancel();
                true
            }
            None => false,
        }
    }
}

/// Proof of holding the gate; releases it on drop
#[derive(Debug)]
pub struct RunToken {
    active: ActiveSlot,
    cancel: CancelToken,
}

impl RunToken {
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }
}

impl Drop for RunToken {
    fn drop(&mut self) {
        *lock_slot(&self.active) = None;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Orchestrator
// ─────────────────────────────────────────────────────────────────────────────

/// A validated search that holds the gate
#[derive(Debug)]
pub struct SearchRequest {
    pub values: Vec<u32>,
    pub target: u32,
    token: RunToken,
}

/// Outcome of both playbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub linear: Playback,
    pub binary: Playback,
}

impl RunReport {
    pub fn cancelled(&self) -> bool {
        self.linear.is_cancelled() || self.binary.is_cancelled()
    }
}

#[derive(Debug, Clone)]
pub struct Orchestrator {
    gate: RunGate,
    metrics: SharedMetrics,
    step_delay: Duration,
    events: Option<mpsc::Sender<SearchEvent>>,
}

impl Orchestrator {
    pub fn new(metrics: SharedMetrics, step_delay: Duration) -> Self {
        Self {
            gate: RunGate::new(),
            metrics,
            step_delay,
            events: None,
        }
    }

    /// Publish lifecycle events on `tx`
    pub fn with_events(mut self, tx: mpsc::Sender<SearchEvent>) -> Self {
        self.events = Some(tx);
        self
    }

    pub fn gate(&self) -> &RunGate {
        &self.gate
    }

    pub fn metrics(&self) -> &SharedMetrics {
        &self.metrics
    }

    /// Check the gate, then validate both inputs.
    ///
    /// Any error is reported (log + `Rejected` event) before being returned;
    /// a failed validation releases the gate again.
    pub fn begin(&self, array_input: &str, target_input: &str) -> Result<SearchRequest, SearchError> {
        let result = self.gate.try_acquire().and_then(|token| {
            let values = parse_array(array_input)?;
            let target = parse_target(target_input)?;
            Ok(SearchRequest {
                values,
                target,
                token,
            })
        });

        if let Err(ref e) = result {
            self.reject(e);
        }
        result
    }

    /// Clear boards and metrics outside of a run (e.g. new random array)
    pub fn clear_results<L: Surface, B: Surface>(
        &self,
        linear: &mut L,
        binary: &mut B,
    ) -> Result<(), SearchError> {
        if self.gate.is_busy() {
            let e = SearchError::ConcurrentInvocation;
            self.reject(&e);
            return Err(e);
        }
        self.reset(linear, binary);
        Ok(())
    }

    /// Play both algorithms in order and publish the comparison
    pub async fn run<L: Surface, B: Surface, C: Clock>(
        &self,
        request: SearchRequest,
        linear_surface: &mut L,
        binary_surface: &mut B,
        clock: &C,
    ) -> RunReport {
        let SearchRequest {
            values,
            target,
            token,
        } = request;

        self.reset(linear_surface, binary_surface);

        let mut sorted = values.clone();
        sorted.sort_unstable();

        tracing::info!("Search started: target={} values={:?}", target, values);
        self.emit(SearchEvent::RunStarted {
            timestamp: Utc::now(),
            values: values.clone(),
            sorted: sorted.clone(),
            target,
        })
        .await;

        let linear = self
            .play(Algorithm::Linear, &token, linear_surface, &values, target, clock)
            .await;
        let binary = self
            .play(Algorithm::Binary, &token, binary_surface, &sorted, target, clock)
            .await;

        let report = RunReport { linear, binary };
        if report.cancelled() {
            tracing::info!("Search cancelled; comparison not recorded");
        } else {
            lock_metrics(&self.metrics).update(linear.steps_taken, binary.steps_taken);
            tracing::info!(
                "Search finished: linear={} binary={}",
                linear.steps_taken,
                binary.steps_taken
            );
        }

        self.emit(SearchEvent::RunFinished {
            timestamp: Utc::now(),
            linear_steps: linear.steps_taken,
            binary_steps: binary.steps_taken,
            cancelled: report.cancelled(),
        })
        .await;

        // Gate reopens only after both animations
        drop(token);
        report
    }

    async fn play<S: Surface, C: Clock>(
        &self,
        algorithm: Algorithm,
        token: &RunToken,
        surface: &mut S,
        values: &[u32],
        target: u32,
        clock: &C,
    ) -> Playback {
        let trace = algorithm.trace(values, target);
        tracing::debug!("{} trace has {} step(s)", algorithm.name(), trace.steps().len());

        let mut player = Player::new(algorithm, clock, self.step_delay, token.cancel_token());
        let playback = player.play(surface, values, &trace).await;

        self.emit(SearchEvent::AlgorithmFinished {
            timestamp: Utc::now(),
            algorithm,
            playback,
        })
        .await;
        playback
    }

    fn reset<L: Surface, B: Surface>(&self, linear: &mut L, binary: &mut B) {
        linear.clear();
        binary.clear();
        lock_metrics(&self.metrics).reset();
    }

    fn reject(&self, error: &SearchError) {
        tracing::warn!("Search rejected ({}): {}", error.kind(), error);
        if let Some(tx) = &self.events {
            // Rejections happen on the UI thread; never block it
            let _ = tx.try_send(SearchEvent::Rejected {
                timestamp: Utc::now(),
                kind: error.kind(),
                message: error.to_string(),
            });
        }
    }

    async fn emit(&self, event: SearchEvent) {
        if let Some(tx) = &self.events {
            // Receiver gone means nobody is listening; the run still completes
            let _ = tx.send(event).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::surface::RecordingSurface;
    use crate::player::{Highlight, InstantClock, PlayerState};
    use std::future::Future;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn orchestrator() -> Orchestrator {
        Orchestrator::new(MetricsSink::shared(), Duration::from_millis(1000))
    }

    /// Cancels the active run through the gate after `after` pauses
    struct GateCancellingClock {
        gate: RunGate,
        after: usize,
        count: AtomicUsize,
    }

    impl Clock for GateCancellingClock {
        fn sleep(&self, _duration: Duration) -> impl Future<Output = ()> + Send {
            if self.count.fetch_add(1, Ordering::SeqCst) + 1 == self.after {
                self.gate.cancel_active();
            }
            std::future::ready(())
        }
    }

    #[tokio::test]
    async fn full_run_updates_metrics() {
        let orch = orchestrator();
        let (mut linear, mut binary) = (RecordingSurface::new(), RecordingSurface::new());

        let request = orch.begin("5, 3, 8, 1", "8").unwrap();
        let report = orch
            .run(request, &mut linear, &mut binary, &InstantClock::new())
            .await;

        assert_eq!(report.linear.found_at, Some(2));
        assert_eq!(report.linear.steps_taken, 4);
        // binary runs on the sorted copy [1, 3, 5, 8]
        assert_eq!(binary.values, vec![1, 3, 5, 8]);
        assert_eq!(report.binary.found_at, Some(3));
        assert_eq!(report.binary.steps_taken, 4);

        let sink = orch.metrics().lock().unwrap();
        assert_eq!(sink.get(Algorithm::Linear).step_count, 4);
        assert_eq!(sink.get(Algorithm::Binary).step_count, 4);
        drop(sink);
        assert!(!orch.gate().is_busy());
    }

    #[tokio::test]
    async fn poisoned_metrics_still_record_the_run() {
        let orch = orchestrator();
        let metrics = orch.metrics().clone();
        let _ = std::thread::spawn(move || {
            let _guard = metrics.lock().unwrap();
            panic!("renderer crashed while holding the sink");
        })
        .join();
        assert!(orch.metrics().is_poisoned());

        let (mut linear, mut binary) = (RecordingSurface::new(), RecordingSurface::new());
        let request = orch.begin("5, 3, 8, 1", "8").unwrap();
        orch.run(request, &mut linear, &mut binary, &InstantClock::new())
            .await;

        let sink = lock_metrics(orch.metrics());
        assert_eq!(sink.get(Algorithm::Linear).step_count, 4);
        assert_eq!(sink.get(Algorithm::Binary).step_count, 4);
    }

    #[tokio::test]
    async fn second_request_rejected_while_in_flight() {
        let orch = orchestrator();
        let first = orch.begin("1,2,3", "2").unwrap();

        assert_eq!(
            orch.begin("4,5,6", "5").unwrap_err(),
            SearchError::ConcurrentInvocation
        );
        assert!(orch.gate().is_busy());

        let (mut l, mut b) = (RecordingSurface::new(), RecordingSurface::new());
        orch.run(first, &mut l, &mut b, &InstantClock::new()).await;
        assert!(orch.begin("4,5,6", "5").is_ok());
    }

    #[test]
    fn invalid_input_releases_gate() {
        let orch = orchestrator();
        assert_eq!(orch.begin("", "5").unwrap_err(), SearchError::EmptyInput);
        assert!(matches!(
            orch.begin("1,2", "500").unwrap_err(),
            SearchError::OutOfRangeInput { .. }
        ));
        assert!(!orch.gate().is_busy());
    }

    #[tokio::test]
    async fn cancelled_run_is_not_recorded() {
        let orch = orchestrator();
        if let Ok(mut sink) = orch.metrics().lock() {
            sink.update(9, 9);
        }
        let clock = GateCancellingClock {
            gate: orch.gate().clone(),
            after: 2,
            count: AtomicUsize::new(0),
        };
        let (mut linear, mut binary) = (RecordingSurface::new(), RecordingSurface::new());

        let request = orch.begin("10, 20, 30, 40", "40").unwrap();
        let report = orch.run(request, &mut linear, &mut binary, &clock).await;

        assert!(report.cancelled());
        assert_eq!(report.linear.state, PlayerState::Cancelled);
        assert_eq!(report.binary.state, PlayerState::Cancelled);
        assert_eq!(report.binary.steps_taken, 0);
        assert!(linear.with_class(Highlight::Current).is_empty());
        assert!(binary.with_class(Highlight::Current).is_empty());

        // reset at run start, never updated afterwards
        let sink = orch.metrics().lock().unwrap();
        assert!(sink.entries().iter().all(|e| e.step_count == 0));
        drop(sink);
        assert!(!orch.gate().is_busy());
    }

    #[tokio::test]
    async fn events_arrive_in_order() {
        let (tx, mut rx) = mpsc::channel(16);
        let orch = orchestrator().with_events(tx);
        let (mut l, mut b) = (RecordingSurface::new(), RecordingSurface::new());

        let request = orch.begin("7", "3").unwrap();
        orch.run(request, &mut l, &mut b, &InstantClock::new()).await;

        let mut kinds = Vec::new();
        while let Ok(event) = rx.try_recv() {
            kinds.push(match event {
                SearchEvent::RunStarted { .. } => "started",
                SearchEvent::AlgorithmFinished { algorithm, .. } => match algorithm {
                    Algorithm::Linear => "linear",
                    Algorithm::Binary => "binary",
                },
                SearchEvent::RunFinished { cancelled, .. } => {
                    assert!(!cancelled);
                    "finished"
                }
                SearchEvent::Rejected { .. } => "rejected",
            });
        }
        assert_eq!(kinds, vec!["started", "linear", "binary", "finished"]);
    }

    #[test]
    fn rejections_are_published() {
        let (tx, mut rx) = mpsc::channel(4);
        let orch = orchestrator().with_events(tx);
        let _ = orch.begin("a,b", "1");

        match rx.try_recv() {
            Ok(SearchEvent::Rejected { kind, message, .. }) => {
                assert_eq!(kind, "non_numeric_input");
                assert!(message.starts_with("Invalid array input"));
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn clear_results_refused_while_busy() {
        let orch = orchestrator();
        let (mut l, mut b) = (RecordingSurface::new(), RecordingSurface::new());
        let _request = orch.begin("1,2", "2").unwrap();
        assert_eq!(
            orch.clear_results(&mut l, &mut b),
            Err(SearchError::ConcurrentInvocation)
        );
    }

    #[test]
    fn clear_results_resets_boards() {
        let orch = orchestrator();
        if let Ok(mut sink) = orch.metrics().lock() {
            sink.update(3, 2);
        }
        let (mut l, mut b) = (RecordingSurface::new(), RecordingSurface::new());
        orch.clear_results(&mut l, &mut b).unwrap();
        assert_eq!(l.steps_text, "Steps taken: 0");
        assert_eq!(b.found_text, "Index found at: -");
        assert_eq!(orch.metrics().lock().unwrap().scale().domain_max, 1);
    }

    #[test]
    fn cancel_without_run_is_noop() {
        let gate = RunGate::new();
        assert!(!gate.cancel_active());
        let token = gate.try_acquire().unwrap();
        assert!(gate.cancel_active());
        assert!(token.cancel_token().is_cancelled());
        drop(token);
        assert!(!gate.is_busy());
    }
}
