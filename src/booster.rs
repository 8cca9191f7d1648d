//! Provides the boosting algorithm.

mod core;

// ------------------------------------------------
// Classification
pub(crate) mod adaboost;


/// Booster trait
pub use self::core::Booster;

// Empirical Risk Minimization
pub use self::adaboost::{
    AdaBoost,
    AdaBoostConfig,
    FitOutcome,
    FitResult,
    FitTrace,
    RoundRecord,
};
