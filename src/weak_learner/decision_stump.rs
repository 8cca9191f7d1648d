//! Defines the decision stump weak learner
//! for continuous features.

/// Defines the exhaustive stump search.
pub mod dstump;
/// Defines the classifier produced by `DStump`.
pub mod dstump_classifier;


pub use dstump::{DStump, SearchStrategy};
pub use dstump_classifier::DStumpClassifier;
