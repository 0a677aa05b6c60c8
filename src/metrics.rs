//! Step-count comparison between the two algorithms
//!
//! Holds exactly one entry per algorithm. Every update replaces both values;
//! results are never accumulated across searches.

use crate::search::Algorithm;
use serde::Serialize;
use std::sync::{Arc, Mutex};

/// Final step count of one fully played trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmResult {
    pub name: &'static str,
    #[serde(rename = "time")]
    pub step_count: u32,
}

/// Axis parameters for the comparison chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartScale {
    /// Upper end of the value axis; never below 1
    pub domain_max: u32,
    /// Number of axis ticks to draw
    pub ticks: u32,
}

/// Two-entry sink feeding the comparison chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSink {
    linear: AlgorithmResult,
    binary: AlgorithmResult,
}

/// Sink shared between the search task and the renderer
pub type SharedMetrics = Arc<Mutex<MetricsSink>>;

impl Default for MetricsSink {
    fn default() -> Self {
        Self {
            linear: AlgorithmResult {
                name: Algorithm::Linear.name(),
                step_count: 0,
            },
            binary: AlgorithmResult {
                name: Algorithm::Binary.name(),
                step_count: 0,
            },
        }
    }
}

impl MetricsSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedMetrics {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Replace both entries
    pub fn update(&mut self, linear_steps: u32, binary_steps: u32) {
        self.linear.step_count = linear_steps;
        self.binary.step_count = binary_steps;
    }

    /// Zero both entries (chart shows an empty comparison)
    pub fn reset(&mut self) {
        self.update(0, 0);
    }

    pub fn get(&self, algorithm: Algorithm) -> &AlgorithmResult {
        match algorithm {
            Algorithm::Linear => &self.linear,
            Algorithm::Binary => &self.binary,
        }
    }

    /// Dataset in chart order (linear first)
    pub fn entries(&self) -> [&AlgorithmResult; 2] {
        [&self.linear, &self.binary]
    }

    fn max_steps(&self) -> u32 {
        self.linear.step_count.max(self.binary.step_count)
    }

    /// Scale with one unit of headroom past the longest bar
    pub fn scale(&self) -> ChartScale {
        let max = self.max_steps();
        ChartScale {
            domain_max: max + 1,
            ticks: max.max(2),
        }
    }
}

/// Label printed at the end of each bar
pub fn bar_label(steps: u32) -> String {
    format!("{}s", steps)
}
