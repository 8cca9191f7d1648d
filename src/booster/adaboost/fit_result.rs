//! Defines the value returned by [`AdaBoost`](super::AdaBoost).
use serde::{Serialize, Deserialize};

use crate::WeightedMajority;
use crate::error::{BoostError, Result};

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::time::Duration;
use std::fmt;

const HEADER: &str = "Round,MinimalError,Time\n";


/// The reason the boosting loop stopped.
/// None of the outcomes is an error:
/// the combined hypothesis is usable in all three cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitOutcome {
    /// The best weak hypothesis had weighted error `>= 0.5`.
    /// The hypothesis of that round is discarded.
    ErrorThresholdExceeded,
    /// A weak hypothesis with zero weighted error was found.
    ErrorFreeClassifierFound,
    /// All rounds ran without the two events above.
    IterationsExhausted,
}


impl FitOutcome {
    /// Returns the tag reported to remote callers.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ErrorThresholdExceeded => "ERROR_LEVEL_EXCEEDED",
            Self::ErrorFreeClassifierFound => "ERROR_FREE_CLASSIFIER_FOUND",
            Self::IterationsExhausted => "ITERATIONS_EXCEEDED",
        }
    }
}


impl fmt::Display for FitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}


/// Statistics of a single boosting round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// The round number, starting from `1`.
    pub round: usize,
    /// Time elapsed since the fit started.
    pub elapsed: Duration,
    /// Weighted error of the hypothesis chosen in this round.
    pub minimal_error: f64,
    /// The distribution the weak learner saw in this round.
    pub distribution: Vec<f64>,
}


/// Append-only log of the rounds that produced a hypothesis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FitTrace {
    records: Vec<RoundRecord>,
}


impl FitTrace {
    /// Construct an empty trace.
    pub fn new() -> Self {
        Self::default()
    }


    pub(crate) fn push(&mut self, record: RoundRecord) {
        self.records.push(record);
    }


    /// Returns the records in round order.
    pub fn records(&self) -> &[RoundRecord] {
        &self.records[..]
    }


    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }


    /// Returns `true` if no round was recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }


    /// Serialize the trace into a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }


    /// Write the trace to `path` as CSV.
    /// Each line has the round, the minimal error,
    /// and the elapsed time in milliseconds.
    /// The distributions are not written.
    pub fn to_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let io_error = |source| BoostError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::create(path).map_err(io_error)?;
        file.write_all(HEADER.as_bytes()).map_err(io_error)?;

        for record in &self.records {
            let line = format!(
                "{},{},{}\n",
                record.round,
                record.minimal_error,
                record.elapsed.as_millis(),
            );
            file.write_all(line.as_bytes()).map_err(io_error)?;
        }
        Ok(())
    }
}


/// The result of [`AdaBoost`](super::AdaBoost).
/// Holds the combined hypothesis and why the loop stopped.
#[derive(Debug, Clone)]
pub struct FitResult<H> {
    /// Why the boosting loop stopped.
    pub outcome: FitOutcome,
    /// The combined hypothesis built before the loop stopped.
    pub hypothesis: WeightedMajority<H>,
    /// Per-round statistics, `Some` only if tracing was requested.
    pub trace: Option<FitTrace>,
}
