//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data

use crate::Sample;
use crate::error::{BoostError, Result};
use super::constants::SIMPLEX_TOLERANCE;


/// Check whether the training sample is valid or not.
#[inline(always)]
pub(crate) fn check_sample(sample: &Sample) -> Result<()> {
    let (n_sample, n_feature) = sample.shape();

    // `Sample` guarantees these on construction,
    // but a sample built through `set_target` may lose its last feature.
    if n_sample == 0 {
        return Err(BoostError::EmptySample);
    }
    if n_feature == 0 {
        return Err(BoostError::NoFeature);
    }

    sample.is_valid_binary_instance()
}


/// Check the numerical tolerance.
#[inline(always)]
pub(crate) fn check_tolerance(tolerance: f64) -> Result<()> {
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(BoostError::InvalidTolerance(tolerance));
    }
    Ok(())
}


/// Check the margin parameter `rho`.
#[inline(always)]
pub(crate) fn check_rho(rho: f64) -> Result<()> {
    if !rho.is_finite() || rho <= 0.0 {
        return Err(BoostError::InvalidRho(rho));
    }
    Ok(())
}


/// Check whether `dist` is a probability vector over `n_sample` examples.
#[inline(always)]
pub(crate) fn check_distribution(dist: &[f64], n_sample: usize)
    -> Result<()>
{
    if dist.len() != n_sample {
        let message = format!(
            "expected {n_sample} weights, got {}", dist.len()
        );
        return Err(BoostError::InvalidDistribution(message));
    }

    if let Some(d) = dist.iter().find(|d| !d.is_finite() || **d < 0.0) {
        let message = format!("weights must be finite and >= 0, got {d}");
        return Err(BoostError::InvalidDistribution(message));
    }

    let sum = dist.iter().sum::<f64>();
    if (sum - 1f64).abs() > SIMPLEX_TOLERANCE {
        let message = format!("sum(dist[..]) = {sum}");
        return Err(BoostError::InvalidDistribution(message));
    }
    Ok(())
}
