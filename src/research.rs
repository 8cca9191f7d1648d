//! Tools for studying boosting beyond a single fit.
//! - [`Logger`] runs a booster and measures
//!   the running time and train/test loss per round.
//! - [`RademacherEstimator`] estimates the empirical Rademacher complexity
//!   of the decision stumps.

/// Defines the logger and its trait.
pub mod logger;

/// Defines loss functions for the logger.
pub mod loss_functions;

/// Estimates the Rademacher complexity.
pub mod rademacher;


pub use logger::{Logger, CurrentHypothesis};
pub use loss_functions::zero_one_loss;
pub use rademacher::{
    rademacher_complexity,
    max_correlation,
    RademacherEstimator,
};
