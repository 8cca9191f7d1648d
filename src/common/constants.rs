/// Added to denominators so that a zero sum never divides.
pub const DEFAULT_TOLERANCE:  f64   = 1e-10;
/// Number of boosting rounds used when the caller does not set one.
pub const DEFAULT_ESTIMATORS: usize = 100;
/// A weak hypothesis with this weighted error or more
/// is no better than random guessing.
pub const ERROR_THRESHOLD:    f64   = 0.5;
/// Accepted deviation of `sum(dist)` from `1`.
pub const SIMPLEX_TOLERANCE:  f64   = 1e-5;
/// The candidate signs of a decision stump, in search order.
pub const SIGNS:              [i64; 2] = [-1, 1];
