//! Defines the decision stump classifier.
use crate::{Sample, Classifier};
use crate::common::utils;

use std::fmt;


/// A decision stump over a continuous feature:
/// ```text
/// h(x) = sign    if x[feature_index] > threshold,
/// h(x) = -sign   otherwise,
/// ```
/// where `sign` is `-1` or `+1`.
///
/// A stump is never mutated after the weak learner creates it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DStumpClassifier {
    pub(crate) feature_index: usize,
    pub(crate) sign: i64,
    pub(crate) threshold: f64,
}


impl DStumpClassifier {
    /// Construct a new stump.
    /// Panics if `sign` is neither `-1` nor `+1`.
    pub fn new(feature_index: usize, sign: i64, threshold: f64) -> Self {
        assert!(
            sign == 1 || sign == -1,
            "The sign of a decision stump must be -1 or +1, got {sign}"
        );
        Self { feature_index, sign, threshold, }
    }


    /// Returns the index of the feature this stump looks at.
    pub fn feature_index(&self) -> usize {
        self.feature_index
    }


    /// Returns the label predicted above the threshold.
    pub fn sign(&self) -> i64 {
        self.sign
    }


    /// Returns the threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }


    /// The prediction rule shared by the classifier and the search.
    #[inline(always)]
    pub(crate) fn rule(value: f64, threshold: f64, sign: i64) -> i64 {
        if value > threshold { sign } else { -sign }
    }


    /// Predicts the labels of all examples in `sample`.
    /// Panics if `sample` has no feature `self.feature_index()`.
    pub fn classify(&self, sample: &Sample) -> Vec<i64> {
        sample.features()[self.feature_index]
            .iter()
            .map(|&x| Self::rule(x, self.threshold, self.sign))
            .collect()
    }


    /// Returns the total mass of `dist` on the examples
    /// this stump misclassifies.
    pub fn weighted_error(&self, sample: &Sample, dist: &[f64]) -> f64 {
        let predictions = sample.features()[self.feature_index]
            .iter()
            .map(|&x| Self::rule(x, self.threshold, self.sign));
        utils::weighted_error(predictions, sample.target(), dist)
    }
}


impl Classifier for DStumpClassifier {
    fn confidence(&self, sample: &Sample, row: usize) -> f64 {
        let x = sample.value(row, self.feature_index);
        Self::rule(x, self.threshold, self.sign) as f64
    }
}


impl fmt::Display for DStumpClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "feature: {}, sign: {:+}, threshold: {}",
            self.feature_index, self.sign, self.threshold,
        )
    }
}
