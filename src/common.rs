//! Defines some common functions used in this library.

/// Defines the constants shared by the booster and the weak learner.
pub mod constants;

/// Defines some useful functions such as weighted error calculation.
pub(crate) mod utils;

/// Defines some checker functions.
pub(crate) mod checker;
