//! The core library for the weak learner in the boosting protocol.
//!
//! Given a distribution over training examples,
//! the weak learner returns a hypothesis that is slightly better than
//! the random guessing.
//!
//! In this crate, we assume that the weak learner returns a hypothesis
//! that **minimizes** the weighted error for a given distribution.
use crate::Sample;


/// An interface that returns a function that implements
/// the [`Classifier`](crate::Classifier) trait.
pub trait WeakLearner {
    /// The hypothesis type the weak learner returns.
    type Hypothesis;


    /// Returns the name of the weak learner.
    fn name(&self) -> &str;


    /// Returns the information of the weak learner as `String`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Returns a hypothesis trained on `sample` under `dist`.
    fn produce(&self, sample: &Sample, dist: &[f64]) -> Self::Hypothesis;
}
