//! Empirical Rademacher complexity of the decision stump class.
use rand::prelude::*;
use rand::rngs::StdRng;
use rayon::prelude::*;

use crate::Sample;
use crate::error::{BoostError, Result};

const DEFAULT_SUBSET_SIZE: usize = 1_000;


/// Estimate the empirical Rademacher complexity of the decision stumps
/// over `sample`.
/// See [`RademacherEstimator`] for the details.
/// The Monte-Carlo branch draws from a fresh, OS-seeded generator.
pub fn rademacher_complexity(sample: &Sample, subset_size: usize)
    -> Result<f64>
{
    RademacherEstimator::init(sample)
        .subset_size(subset_size)
        .estimate()
}


/// Estimates the empirical Rademacher complexity
/// ```text
/// E_sigma [ max_h (1/m) sum_i sigma_i h(x_i) ]
/// ```
/// of the threshold labelings induced by sorting each feature.
///
/// For each feature and each `k` in `0..m`,
/// the labeling that puts `-1` on the `k` examples
/// with the smallest values and `+1` on the rest is a hypothesis,
/// and so is its negation.
///
/// If `2^m > subset_size`,
/// the expectation is replaced by the average over `subset_size`
/// uniformly drawn sign vectors.
/// Otherwise, all `2^m` sign vectors are enumerated.
/// The cost is `O(min(subset_size, 2^m) * m^2 * n_feature)`,
/// so keep `subset_size` within reach.
///
/// ```
/// use stumpboost::prelude::*;
/// use stumpboost::research::RademacherEstimator;
///
/// let rows = vec![vec![0.5, 1.0], vec![-1.0, 2.0], vec![2.0, -3.0]];
/// let sample = Sample::from_rows_unlabeled(&rows).unwrap();
///
/// let complexity = RademacherEstimator::init(&sample)
///     .subset_size(64)
///     .estimate()
///     .unwrap();
/// assert!((complexity - 5.0 / 6.0).abs() < 1e-12);
/// ```
pub struct RademacherEstimator<'a> {
    sample: &'a Sample,
    subset_size: usize,
    seed: Option<u64>,
}


impl<'a> RademacherEstimator<'a> {
    /// Initialize the estimator on `sample`.
    /// Labels are not used, so `sample` may be unlabeled.
    pub fn init(sample: &'a Sample) -> Self {
        Self {
            sample,
            subset_size: DEFAULT_SUBSET_SIZE,
            seed: None,
        }
    }


    /// Set the number of random sign vectors.
    /// Default is `1000`.
    pub fn subset_size(mut self, subset_size: usize) -> Self {
        self.subset_size = subset_size;
        self
    }


    /// Fix the seed of the Monte-Carlo branch.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }


    /// Returns the estimate, a value in `[0, 1]`.
    pub fn estimate(&self) -> Result<f64> {
        if self.subset_size == 0 {
            return Err(BoostError::ZeroSubsetSize);
        }

        let n_sample = self.sample.shape().0;
        let hypotheses = hypothesis_vectors(self.sample);

        if enumerates_all(n_sample, self.subset_size) {
            Ok(exhaustive(&hypotheses, n_sample))
        } else {
            Ok(self.sampled(&hypotheses, n_sample))
        }
    }


    fn sampled(&self, hypotheses: &[Vec<i64>], n_sample: usize) -> f64 {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut signs = vec![0_i64; n_sample];
        let mut total = 0.0;
        for _ in 0..self.subset_size {
            signs.iter_mut()
                .for_each(|s| { *s = if rng.gen::<bool>() { 1 } else { -1 }; });
            total += max_correlation(hypotheses, &signs);
        }
        total / self.subset_size as f64
    }
}


/// Returns `true` if `2^n_sample <= subset_size`.
#[inline]
fn enumerates_all(n_sample: usize, subset_size: usize) -> bool {
    n_sample < 64 && (1_u64 << n_sample) <= subset_size as u64
}


/// Enumerates every sign vector.
/// The `pos`-th example takes the `pos`-th bit of the counter
/// from the most significant one.
/// Callers guarantee `n_sample < 64`.
fn exhaustive(hypotheses: &[Vec<i64>], n_sample: usize) -> f64 {
    let n_vectors = 1_u64 << n_sample;

    let mut signs = vec![0_i64; n_sample];
    let mut total = 0.0;
    for counter in 0..n_vectors {
        signs.iter_mut()
            .enumerate()
            .for_each(|(pos, s)| {
                let bit = (counter >> (n_sample - 1 - pos)) & 1;
                *s = if bit == 1 { 1 } else { -1 };
            });
        total += max_correlation(hypotheses, &signs);
    }
    total / n_vectors as f64
}


/// Builds the `2 * n_sample * n_feature` labelings.
fn hypothesis_vectors(sample: &Sample) -> Vec<Vec<i64>> {
    let (n_sample, n_feature) = sample.shape();

    let mut hypotheses = Vec::with_capacity(2 * n_sample * n_feature);
    for feature in sample.features() {
        let sorted = feature.sorted_indices();
        for k in 0..n_sample {
            let mut labels = vec![1_i64; n_sample];
            sorted[..k].iter()
                .for_each(|&i| { labels[i] = -1; });

            let negated = labels.iter().map(|l| -l).collect::<Vec<_>>();
            hypotheses.push(labels);
            hypotheses.push(negated);
        }
    }
    hypotheses
}


/// Returns `max_h (h · signs) / signs.len()`
/// over the rows `h` of `hypotheses`.
/// Returns `-inf` if `hypotheses` is empty.
pub fn max_correlation(hypotheses: &[Vec<i64>], signs: &[i64]) -> f64 {
    hypotheses.par_iter()
        .map(|h| {
            h.iter()
                .zip(signs)
                .map(|(a, b)| a * b)
                .sum::<i64>()
        })
        .max()
        .map_or(f64::NEG_INFINITY, |dot| dot as f64 / signs.len() as f64)
}
