use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use crate::{Sample, WeakLearner};
use crate::common::{utils, constants::SIGNS};
use super::dstump_classifier::DStumpClassifier;

use std::fmt;


/// The way [`DStump`] scans the features.
/// Both strategies return bit-identical stumps for the same input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStrategy {
    /// A single-threaded loop over features, examples, and signs.
    #[default]
    Sequential,
    /// One task per feature on the rayon thread pool.
    /// The per-feature results are reduced in feature order.
    Parallel,
}


impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sequential => "Sequential",
            Self::Parallel => "Parallel",
        };
        write!(f, "{name}")
    }
}


/// The exhaustive decision stump search.
/// Given a distribution over the training examples,
/// `DStump` evaluates every candidate stump
/// ```text
/// (feature j, threshold x_{i, j}, sign s) for all j, i, s in {-1, +1},
/// ```
/// and returns the one with the smallest weighted error.
/// Ties go to the first candidate in the order
/// (feature ascending, example ascending, sign `-1` then `+1`).
///
/// # Example
/// ```
/// use stumpboost::prelude::*;
///
/// let rows = vec![vec![-2.0], vec![-1.0], vec![1.0], vec![2.0]];
/// let sample = Sample::from_rows(&rows, vec![-1.0, -1.0, 1.0, 1.0])
///     .unwrap();
///
/// let weak_learner = DStump::new()
///     .strategy(SearchStrategy::Parallel);
/// let dist = vec![0.25; 4];
/// let (h, error) = weak_learner.search(&sample, &dist);
///
/// assert_eq!(error, 0.0);
/// assert_eq!(h.predict_all(&sample), vec![-1, -1, 1, 1]);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct DStump {
    strategy: SearchStrategy,
}


impl DStump {
    /// Construct a sequential `DStump`.
    pub fn new() -> Self {
        Self::default()
    }


    /// Set the search strategy.
    /// Default is `SearchStrategy::Sequential`.
    pub fn strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }


    /// Returns the current search strategy.
    pub fn search_strategy(&self) -> SearchStrategy {
        self.strategy
    }


    /// Returns the stump with the minimal weighted error
    /// and the error itself.
    /// `sample` must be labeled and `dist.len()` must equal
    /// the number of examples.
    pub fn search(&self, sample: &Sample, dist: &[f64])
        -> (DStumpClassifier, f64)
    {
        match self.strategy {
            SearchStrategy::Sequential => search_sequential(sample, dist),
            SearchStrategy::Parallel => search_parallel(sample, dist),
        }
    }
}


impl WeakLearner for DStump {
    type Hypothesis = DStumpClassifier;


    fn name(&self) -> &str {
        "Decision Stump"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Search", format!("{}", self.strategy)),
        ]);
        Some(info)
    }


    fn produce(&self, sample: &Sample, dist: &[f64]) -> Self::Hypothesis {
        self.search(sample, dist).0
    }
}


/// Weighted error of the stump `(feature, threshold, sign)`
/// whose feature values are `column`.
#[inline(always)]
fn candidate_error(
    column: &[f64],
    target: &[f64],
    dist: &[f64],
    threshold: f64,
    sign: i64,
) -> f64
{
    let predictions = column.iter()
        .map(|&x| DStumpClassifier::rule(x, threshold, sign));
    utils::weighted_error(predictions, target, dist)
}


fn search_sequential(sample: &Sample, dist: &[f64])
    -> (DStumpClassifier, f64)
{
    let target = sample.target();
    let features = sample.features();

    let first = features[0].values();
    let mut best_stump = DStumpClassifier::new(0, SIGNS[0], first[0]);
    let mut best_error = candidate_error(
        first, target, dist, first[0], SIGNS[0]
    );

    for (j, feature) in features.iter().enumerate() {
        let column = feature.values();
        for &threshold in column {
            for sign in SIGNS {
                let error = candidate_error(
                    column, target, dist, threshold, sign
                );
                if error < best_error {
                    best_error = error;
                    best_stump = DStumpClassifier::new(j, sign, threshold);
                }
            }
        }
    }
    (best_stump, best_error)
}


/// The best candidate on the `j`-th feature.
fn search_feature(sample: &Sample, dist: &[f64], j: usize)
    -> (DStumpClassifier, f64)
{
    let target = sample.target();
    let column = sample.features()[j].values();

    let mut best_stump = DStumpClassifier::new(j, SIGNS[0], column[0]);
    let mut best_error = candidate_error(
        column, target, dist, column[0], SIGNS[0]
    );

    for &threshold in column {
        for sign in SIGNS {
            let error = candidate_error(column, target, dist, threshold, sign);
            if error < best_error {
                best_error = error;
                best_stump = DStumpClassifier::new(j, sign, threshold);
            }
        }
    }
    (best_stump, best_error)
}


fn search_parallel(sample: &Sample, dist: &[f64])
    -> (DStumpClassifier, f64)
{
    let n_feature = sample.shape().1;

    // `collect` keeps the feature order
    // regardless of the order the tasks finish.
    let candidates = (0..n_feature).into_par_iter()
        .map(|j| search_feature(sample, dist, j))
        .collect::<Vec<_>>();

    candidates.into_iter()
        .reduce(|best, candidate| {
            if candidate.1 < best.1 { candidate } else { best }
        })
        .expect("`Sample` has at least one feature")
}
