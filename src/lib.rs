#![warn(missing_docs)]

//!
//! A crate that provides `AdaBoost` over decision stumps
//! for binary classification.
//!
//! - [`AdaBoost`] reweights the training examples round by round
//!   and combines the stumps found by [`DStump`]
//!   into a [`WeightedMajority`].
//! - [`DStump`] searches every (feature, threshold, sign) triple,
//!   either sequentially or with one rayon task per feature.
//!   Both searches return the same stump.
//! - [`WeightedMajority`] predicts the sign of the weighted vote
//!   and reports the `l1`-margin and the margin loss.
//! - [`research`] provides the console logger and
//!   the Rademacher complexity estimator.
//!
//! ```
//! use stumpboost::prelude::*;
//!
//! let rows = vec![
//!     vec![-2.0], vec![-1.0], vec![0.0], vec![1.0], vec![2.0],
//! ];
//! let target = vec![-1.0, -1.0, -1.0, 1.0, 1.0];
//! let sample = Sample::from_rows(&rows, target).unwrap();
//!
//! let result = AdaBoostConfig::default().fit(&sample).unwrap();
//! assert_eq!(result.outcome, FitOutcome::ErrorFreeClassifierFound);
//! assert_eq!(result.hypothesis.predict_all(&sample), vec![-1, -1, -1, 1, 1]);
//! ```

pub mod error;
pub mod common;
pub mod sample;
pub mod hypothesis;
pub mod weak_learner;
pub mod booster;
pub mod research;

pub mod prelude;


pub use error::{BoostError, Result};

/// A struct that returns [`Sample`].
/// Using this struct, one can read a CSV file to [`Sample`].
/// # Example
/// ```no_run
/// use stumpboost::SampleReader;
/// let filename = "/path/to/csv/file.csv";
/// let sample = SampleReader::default()
///     .file(filename)
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
/// ```
pub use sample::{
    SampleReader,
    Sample,
    Feature,
};

pub use hypothesis::{
    Classifier,
    Ensemble,
    WeightedMajority,
};

pub use weak_learner::{
    WeakLearner,
    DStump,
    DStumpClassifier,
    SearchStrategy,
};

pub use booster::{
    Booster,
    AdaBoost,
    AdaBoostConfig,
    FitOutcome,
    FitResult,
    FitTrace,
    RoundRecord,
};
