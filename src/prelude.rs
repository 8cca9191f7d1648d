//! Exports the booster, the weak learner, and the traits.
//!
pub use crate::booster::{
    // Booster trait
    Booster,

    AdaBoost,
    AdaBoostConfig,
    FitOutcome,
    FitResult,
};


pub use crate::weak_learner::{
    // Weak learner trait
    WeakLearner,

    DStump,
    DStumpClassifier,
    SearchStrategy,
};


pub use crate::hypothesis::{
    Classifier,
    Ensemble,
    WeightedMajority,
};


pub use crate::sample::{
    Sample,
    SampleReader,
};

pub use crate::research::CurrentHypothesis;
