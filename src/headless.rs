// Headless runner - `searchlight run`
//
// Plays both searches against console surfaces, then prints the comparison.
// With --json the boards stay silent and every orchestrator event is printed
// as one JSON line instead. Ctrl+C cancels the run through the gate, the
// same as Esc in the TUI.

use crate::cli::RunArgs;
use crate::config::Config;
use crate::error::SearchError;
use crate::events::SearchEvent;
use crate::metrics::{bar_label, MetricsSink};
use crate::player::{Clock, Highlight, InstantClock, Readout, Surface, TokioClock};
use crate::search::Algorithm;
use crate::session::{Orchestrator, RunReport};
use anyhow::{Context, Result};
use std::io::Write;
use std::sync::PoisonError;
use std::time::Duration;
use tokio::sync::mpsc;

/// Exit code for rejected input
pub const EXIT_INVALID_INPUT: i32 = 2;
/// Exit code for a run stopped with Ctrl+C
pub const EXIT_CANCELLED: i32 = 130;

/// Widest bar drawn in the summary chart
const SUMMARY_BAR_WIDTH: u32 = 30;

/// Four lifecycle events per run plus a possible rejection
const EVENT_CAPACITY: usize = 16;

// ─────────────────────────────────────────────────────────────────────────────
// Console surface
// ─────────────────────────────────────────────────────────────────────────────

/// Surface that narrates each animation step as a line of text
pub struct ConsoleSurface<W: Write + Send> {
    algorithm: Algorithm,
    out: W,
    values: Vec<u32>,
    steps_text: String,
}

impl<W: Write + Send> ConsoleSurface<W> {
    pub fn new(algorithm: Algorithm, out: W) -> Self {
        Self {
            algorithm,
            out,
            values: Vec::new(),
            steps_text: Readout::StepsTaken.format(0),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        // Console output is best effort; a closed pipe must not abort the run
        let _ = writeln!(self.out, "{}", text);
        let _ = self.out.flush();
    }

    fn describe(&self, index: usize) -> String {
        match self.values.get(index) {
            Some(value) => format!("{} ({})", self.algorithm.element_id(index), value),
            None => self.algorithm.element_id(index),
        }
    }
}

impl<W: Write + Send> Surface for ConsoleSurface<W> {
    fn render_array(&mut self, values: &[u32]) {
        self.values = values.to_vec();
        if values.is_empty() {
            return;
        }
        let name = self.algorithm.name();
        self.line(format_args!("{}: {:?}", name, values));
    }

    fn add_highlight(&mut self, index: usize, highlight: Highlight) {
        let cell = self.describe(index);
        match highlight {
            Highlight::Current => {
                let steps = self.steps_text.clone();
                self.line(format_args!("  [{}] checking {}", steps, cell));
            }
            Highlight::Found => self.line(format_args!("  found {}", cell)),
        }
    }

    fn remove_highlight(&mut self, _index: usize, _highlight: Highlight) {}

    fn set_readout(&mut self, readout: Readout, text: String) {
        match readout {
            Readout::StepsTaken => self.steps_text = text,
            // The "-" placeholder only marks a reset board
            Readout::FoundAt if text != Readout::FoundAt.format("-") => {
                self.line(format_args!("  {}", text));
            }
            Readout::FoundAt => {}
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Runner
// ─────────────────────────────────────────────────────────────────────────────

/// Everything a headless run produced
pub(crate) struct Outcome {
    pub result: Result<RunReport, SearchError>,
    pub metrics: MetricsSink,
    pub events: Vec<SearchEvent>,
}

/// Validate, play both boards and collect the events
pub(crate) async fn execute<L: Surface, B: Surface, C: Clock>(
    orchestrator: Orchestrator,
    events: mpsc::Receiver<SearchEvent>,
    args: &RunArgs,
    linear: &mut L,
    binary: &mut B,
    clock: &C,
) -> Outcome {
    let result = match orchestrator.begin(&args.array, &args.target) {
        Ok(request) => Ok(orchestrator.run(request, linear, binary, clock).await),
        Err(e) => Err(e),
    };

    let metrics = orchestrator
        .metrics()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();

    // Dropping the orchestrator closes the channel so the drain terminates
    drop(orchestrator);
    let events = drain(events);

    Outcome {
        result,
        metrics,
        events,
    }
}

/// `execute` against stdout, or silent boards when printing JSON
async fn execute_on_console<C: Clock>(
    orchestrator: Orchestrator,
    events: mpsc::Receiver<SearchEvent>,
    args: &RunArgs,
    clock: &C,
) -> Outcome {
    if args.json {
        let mut linear = ConsoleSurface::new(Algorithm::Linear, std::io::sink());
        let mut binary = ConsoleSurface::new(Algorithm::Binary, std::io::sink());
        execute(orchestrator, events, args, &mut linear, &mut binary, clock).await
    } else {
        let mut linear = ConsoleSurface::new(Algorithm::Linear, std::io::stdout());
        let mut binary = ConsoleSurface::new(Algorithm::Binary, std::io::stdout());
        execute(orchestrator, events, args, &mut linear, &mut binary, clock).await
    }
}

fn drain(mut rx: mpsc::Receiver<SearchEvent>) -> Vec<SearchEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

/// Entry point for `searchlight run`; returns the process exit code
pub async fn run(config: &Config, args: &RunArgs) -> Result<i32> {
    let delay = args
        .delay_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.step_delay());

    let (tx, rx) = mpsc::channel(EVENT_CAPACITY);
    let orchestrator = Orchestrator::new(MetricsSink::shared(), delay).with_events(tx);

    // Ctrl+C stops the animation cooperatively
    let gate = orchestrator.gate().clone();
    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupted; cancelling search");
            gate.cancel_active();
        }
    });

    tracing::debug!("Headless run with {}ms step delay", delay.as_millis());

    // --delay-ms 0 skips the timer entirely
    let outcome = if delay.is_zero() {
        execute_on_console(orchestrator, rx, args, &InstantClock::new()).await
    } else {
        execute_on_console(orchestrator, rx, args, &TokioClock).await
    };
    interrupt.abort();

    let mut stdout = std::io::stdout();
    if args.json {
        for event in &outcome.events {
            let line = serde_json::to_string(event).context("Failed to serialize event")?;
            writeln!(stdout, "{}", line)?;
        }
    }

    match outcome.result {
        Ok(report) => {
            if !args.json {
                writeln!(stdout)?;
                write!(stdout, "{}", format_summary(&outcome.metrics, &report))?;
            }
            Ok(if report.cancelled() { EXIT_CANCELLED } else { 0 })
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            Ok(EXIT_INVALID_INPUT)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Summary
// ─────────────────────────────────────────────────────────────────────────────

fn bar(steps: u32, domain_max: u32) -> String {
    let width = steps.saturating_mul(SUMMARY_BAR_WIDTH) / domain_max.max(1);
    "█".repeat(width as usize)
}

fn found_text(found_at: Option<usize>) -> String {
    match found_at {
        Some(index) => format!("index {}", index),
        None => "not found".to_string(),
    }
}

/// Text rendition of the comparison chart
pub fn format_summary(metrics: &MetricsSink, report: &RunReport) -> String {
    if report.cancelled() {
        return "Search cancelled; comparison not recorded\n".to_string();
    }

    let scale = metrics.scale();
    let name_width = Algorithm::ALL
        .iter()
        .map(|a| a.name().len())
        .max()
        .unwrap_or(0);

    let mut out = String::from("Comparison (steps)\n");
    for (algorithm, playback) in [
        (Algorithm::Linear, &report.linear),
        (Algorithm::Binary, &report.binary),
    ] {
        let steps = metrics.get(algorithm).step_count;
        out.push_str(&format!(
            "  {:<width$}  {} {}  ({})\n",
            algorithm.name(),
            bar(steps, scale.domain_max),
            bar_label(steps),
            found_text(playback.found_at),
            width = name_width,
        ));
    }
    out
}
