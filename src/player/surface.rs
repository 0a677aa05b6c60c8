//! Rendering capability used by the player
//!
//! A surface is one algorithm's board: a row of addressable cells that can
//! carry highlight classes, plus two text readouts. The TUI, the headless
//! console and the tests each provide their own implementation.

use serde::Serialize;

/// Highlight classes a cell can carry
///
/// A cell may briefly hold both; renderers must draw `Found` over `Current`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    Current,
    Found,
}

impl Highlight {
    pub fn class_name(&self) -> &'static str {
        match self {
            Highlight::Current => "highlight-current",
            Highlight::Found => "highlight-found",
        }
    }
}

/// Text readouts shown under each board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Readout {
    StepsTaken,
    FoundAt,
}

impl Readout {
    pub fn label(&self) -> &'static str {
        match self {
            Readout::StepsTaken => "Steps taken",
            Readout::FoundAt => "Index found at",
        }
    }

    /// Full readout line, e.g. `Steps taken: 3`
    pub fn format(&self, value: impl std::fmt::Display) -> String {
        format!("{}: {}", self.label(), value)
    }
}

/// A board the player can draw on
pub trait Surface: Send {
    /// Replace the cells with an unhighlighted row of `values`
    fn render_array(&mut self, values: &[u32]);

    /// Add a highlight class to the cell at `index` (no-op if out of range)
    fn add_highlight(&mut self, index: usize, highlight: Highlight);

    /// Remove a highlight class from the cell at `index`
    fn remove_highlight(&mut self, index: usize, highlight: Highlight);

    fn set_readout(&mut self, readout: Readout, text: String);

    /// Drop all cells and restore the idle readouts
    fn clear(&mut self) {
        self.render_array(&[]);
        self.set_readout(Readout::StepsTaken, Readout::StepsTaken.format(0));
        self.set_readout(Readout::FoundAt, Readout::FoundAt.format("-"));
    }
}

#[cfg(test)]
pub use recording::{RecordingSurface, SurfaceOp};
