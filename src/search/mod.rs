// Search trace generation
//
// Each algorithm runs to completion up front and records what it inspected
// as an ordered list of steps. The player replays that list later; nothing
// here sleeps, logs or touches the display.

use serde::{Serialize, Serializer};

/// The two algorithms being compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Linear,
    Binary,
}

impl Algorithm {
    /// Both algorithms, in the order they are animated
    pub const ALL: [Algorithm; 2] = [Algorithm::Linear, Algorithm::Binary];

    /// Display name used by the chart and readouts
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Linear => "Linear Search",
            Algorithm::Binary => "Binary Search",
        }
    }

    /// Prefix for per-element identifiers (`linear-el-0`, `binary-el-3`, ...)
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Algorithm::Linear => "linear-el-",
            Algorithm::Binary => "binary-el-",
        }
    }

    /// Stable identifier for the element at `index`
    pub fn element_id(&self, index: usize) -> String {
        format!("{}{}", self.id_prefix(), index)
    }

    /// Record the trace for this algorithm.
    ///
    /// For [`Algorithm::Binary`] the caller must pass an ascending slice.
    pub fn trace(&self, values: &[u32], target: u32) -> Trace {
        match self {
            Algorithm::Linear => linear_trace(values, target),
            Algorithm::Binary => binary_trace(values, target),
        }
    }
}

/// What a single step concluded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepStatus {
    Checking,
    Found,
    NotFound,
    EmptyArray,
}

/// One recorded step of a search
///
/// `index` is `Some` for `Checking`/`Found` and `None` for the terminal
/// `NotFound`/`EmptyArray` markers (serialized as `-1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    #[serde(serialize_with = "serialize_index")]
    pub index: Option<usize>,
    pub status: StepStatus,
}

impl Step {
    pub fn checking(index: usize) -> Self {
        Self {
            index: Some(index),
            status: StepStatus::Checking,
        }
    }

    pub fn found(index: usize) -> Self {
        Self {
            index: Some(index),
            status: StepStatus::Found,
        }
    }

    pub fn not_found() -> Self {
        Self {
            index: None,
            status: StepStatus::NotFound,
        }
    }

    pub fn empty_array() -> Self {
        Self {
            index: None,
            status: StepStatus::EmptyArray,
        }
    }
}

fn serialize_index<S: Serializer>(index: &Option<usize>, s: S) -> Result<S::Ok, S::Error> {
    match index {
        Some(i) => s.serialize_i64(*i as i64),
        None => s.serialize_i64(-1),
    }
}

/// Immutable, ordered record of one search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of elements the search inspected
    pub fn checking_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.status == StepStatus::Checking)
            .count()
    }

    /// Index of the match, if the search found one
    pub fn found_at(&self) -> Option<usize> {
        self.steps
            .iter()
            .find(|s| s.status == StepStatus::Found)
            .and_then(|s| s.index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Scan left to right, stopping at the first occurrence of `target`.
pub fn linear_trace(values: &[u32], target: u32) -> Trace {
    if values.is_empty() {
        return Trace {
            steps: vec![Step::empty_array()],
        };
    }

    let mut steps = Vec::with_capacity(values.len() + 1);
    for (i, &value) in values.iter().enumerate() {
        steps.push(Step::checking(i));
        if value == target {
            steps.push(Step::found(i));
            return Trace { steps };
        }
    }

    steps.push(Step::not_found());
    Trace { steps }
}

/// Classic halving search over an ascending slice.
///
/// The slice is assumed sorted; this is not checked. Unsorted input may
/// produce a wrong answer but always terminates with a well-formed trace.
pub fn binary_trace(sorted: &[u32], target: u32) -> Trace {
    if sorted.is_empty() {
        return Trace {
            steps: vec![Step::empty_array()],
        };
    }

    let mut steps = Vec::new();
    // Half-open bounds [low, high) so `high = mid` never underflows
    let mut low = 0usize;
    let mut high = sorted.len();

    while low < high {
        // Same as floor((low + inclusive_high) / 2)
        let mid = low + (high - 1 - low) / 2;
        steps.push(Step::checking(mid));

        if sorted[mid] == target {
            steps.push(Step::found(mid));
            return Trace { steps };
        } else if sorted[mid] < target {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    steps.push(Step::not_found());
    Trace { steps }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn checking_indices(trace: &Trace) -> Vec<usize> {
        trace
            .iter()
            .filter(|s| s.status == StepStatus::Checking)
            .filter_map(|s| s.index)
            .collect()
    }

    #[test]
    fn linear_stops_at_first_match() {
        let trace = linear_trace(&[5, 3, 8, 1], 8);
        assert_eq!(
            trace.steps(),
            &[
                Step::checking(0),
                Step::checking(1),
                Step::checking(2),
                Step::found(2)
            ]
        );
    }

    #[test]
    fn linear_reports_first_of_duplicates() {
        let trace = linear_trace(&[4, 7, 7, 7], 7);
        assert_eq!(trace.found_at(), Some(1));
        assert_eq!(trace.checking_count(), 2);
    }

    #[test]
    fn linear_miss_checks_everything() {
        let trace = linear_trace(&[5, 3, 8, 1], 99);
        assert_eq!(checking_indices(&trace), vec![0, 1, 2, 3]);
        assert_eq!(trace.steps().last(), Some(&Step::not_found()));
        assert_eq!(trace.steps().len(), 5);
    }

    #[test]
    fn binary_walks_right_half() {
        let trace = binary_trace(&[1, 3, 5, 8], 8);
        assert_eq!(
            trace.steps(),
            &[
                Step::checking(1),
                Step::checking(2),
                Step::checking(3),
                Step::found(3)
            ]
        );
    }

    #[test]
    fn binary_miss_below_range_terminates() {
        // mid 1, then 0, then high drops below low
        let trace = binary_trace(&[1, 3, 5, 8], 0);
        assert_eq!(checking_indices(&trace), vec![1, 0]);
        assert_eq!(trace.steps().last(), Some(&Step::not_found()));
    }

    #[test]
    fn binary_miss_above_range() {
        let trace = binary_trace(&[1, 3, 5, 8], 99);
        assert_eq!(checking_indices(&trace), vec![1, 2, 3]);
        assert_eq!(trace.found_at(), None);
    }

    #[test]
    fn binary_single_element_checked_once() {
        let hit = binary_trace(&[42], 42);
        assert_eq!(hit.steps(), &[Step::checking(0), Step::found(0)]);

        let miss = binary_trace(&[42], 7);
        assert_eq!(miss.steps(), &[Step::checking(0), Step::not_found()]);
    }

    #[test]
    fn empty_array_yields_single_marker() {
        for algorithm in Algorithm::ALL {
            let trace = algorithm.trace(&[], 10);
            assert_eq!(trace.steps(), &[Step::empty_array()]);
            assert_eq!(trace.checking_count(), 0);
        }
    }

    #[test]
    fn binary_tolerates_unsorted_input() {
        let trace = binary_trace(&[9, 1, 7, 3, 5], 3);
        assert!(matches!(
            trace.steps().last().map(|s| s.status),
            Some(StepStatus::Found | StepStatus::NotFound)
        ));
    }

    #[test]
    fn element_ids_use_prefix() {
        assert_eq!(Algorithm::Linear.element_id(0), "linear-el-0");
        assert_eq!(Algorithm::Binary.element_id(5), "binary-el-5");
    }

    #[test]
    fn step_serializes_sentinel_index() {
        let json = serde_json::to_string(&Step::not_found()).unwrap();
        assert_eq!(json, r#"{"index":-1,"status":"not-found"}"#);

        let json = serde_json::to_string(&Step::checking(2)).unwrap();
        assert_eq!(json, r#"{"index":2,"status":"checking"}"#);
    }

    proptest! {
        #[test]
        fn linear_checks_prefix_up_to_first_match(
            values in proptest::collection::vec(1u32..=100, 0..12),
            target in 1u32..=100,
        ) {
            let trace = linear_trace(&values, target);
            match values.iter().position(|&v| v == target) {
                Some(k) => {
                    prop_assert_eq!(checking_indices(&trace), (0..=k).collect::<Vec<_>>());
                    prop_assert_eq!(trace.steps().last(), Some(&Step::found(k)));
                }
                None if values.is_empty() => {
                    prop_assert_eq!(trace.steps(), &[Step::empty_array()]);
                }
                None => {
                    prop_assert_eq!(checking_indices(&trace), (0..values.len()).collect::<Vec<_>>());
                    prop_assert_eq!(trace.steps().last(), Some(&Step::not_found()));
                }
            }
        }

        #[test]
        fn binary_is_logarithmic_and_correct(
            mut values in proptest::collection::vec(1u32..=100, 1..64),
            target in 1u32..=100,
        ) {
            values.sort_unstable();
            let trace = binary_trace(&values, target);
            let bound = (usize::BITS - values.len().leading_zeros()) as usize;
            prop_assert!(trace.checking_count() <= bound);

            match trace.found_at() {
                Some(i) => prop_assert_eq!(values[i], target),
                None => prop_assert!(!values.contains(&target)),
            }
        }

        #[test]
        fn traces_are_deterministic(
            values in proptest::collection::vec(1u32..=100, 0..12),
            target in 1u32..=100,
        ) {
            for algorithm in Algorithm::ALL {
                prop_assert_eq!(algorithm.trace(&values, target), algorithm.trace(&values, target));
            }
        }
    }
}
