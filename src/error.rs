//! Defines the error type returned by this crate.
//!
//! Every variant except `Io` and `Parse` reports an invalid input
//! that is rejected before any computation starts.
//! The three outcomes of a boosting run are **not** errors;
//! see [`FitOutcome`](crate::FitOutcome).
use std::path::PathBuf;
use thiserror::Error;


/// A shorthand for `std::result::Result<T, BoostError>`.
pub type Result<T> = std::result::Result<T, BoostError>;


/// Errors returned by the fit/predict/analyze entry points.
#[derive(Debug, Error)]
pub enum BoostError {
    /// The sample has no rows.
    #[error("The sample has no rows")]
    EmptySample,

    /// The sample has no features.
    #[error("The sample has no features")]
    NoFeature,

    /// A row has a different number of features from the first row.
    #[error("Row {row} has {got} features, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        got: usize,
    },

    /// A feature value is `NaN` or infinite.
    #[error("Feature value at row {row}, feature {feature} is not finite")]
    NonFiniteValue {
        /// Row of the value.
        row: usize,
        /// Feature of the value.
        feature: usize,
    },

    /// The number of labels differs from the number of rows.
    #[error("Got {n_target} labels for {n_sample} rows")]
    TargetLength {
        /// Number of rows.
        n_sample: usize,
        /// Number of labels.
        n_target: usize,
    },

    /// The operation needs labels but the sample has none.
    #[error(
        "The target is not specified. \
         Use `Sample::from_rows` or `SampleReader::target_feature`"
    )]
    MissingTarget,

    /// A label is neither `-1` nor `+1`.
    #[error("Label {label} at row {row} is not -1 or +1")]
    InvalidLabel {
        /// Row of the label.
        row: usize,
        /// The label itself.
        label: f64,
    },

    /// The number of boosting rounds is zero.
    #[error("The number of estimators must be positive")]
    ZeroEstimators,

    /// The numerical tolerance is negative or not finite.
    #[error("The tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),

    /// The caller-supplied initial distribution is malformed.
    #[error("Invalid initial distribution: {0}")]
    InvalidDistribution(String),

    /// The margin parameter `rho` is not strictly positive.
    #[error("The margin parameter rho must be positive, got {0}")]
    InvalidRho(f64),

    /// The number of Rademacher vectors is zero.
    #[error("The subset size must be positive")]
    ZeroSubsetSize,

    /// A CSV cell could not be parsed.
    #[error("Failed to parse `{value}` at line {line}")]
    Parse {
        /// 1-based line number in the file.
        line: usize,
        /// The cell that failed to parse.
        value: String,
    },

    /// The target column does not exist in the CSV header.
    #[error("The target column `{0}` does not exist")]
    UnknownColumn(String),

    /// Failed to read or write a file.
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}
