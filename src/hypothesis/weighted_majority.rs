use crate::{
    common::{checker, constants::DEFAULT_TOLERANCE},
    error::Result,
    Classifier,
    Sample,
};


/// A struct that the boosting algorithms in this library return.
/// The combined hypothesis is
/// ```text
/// f(x) = sum_k alpha_k * h_k(x) / (sum_k alpha_k + tolerance)
/// ```
/// where `alpha_k > 0` is the weight on the `k`-th hypothesis `h_k`.
/// The `tolerance` keeps an empty combination well-defined;
/// its confidence is `0.0` for every example.
///
/// The pairs are kept in the order the booster produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedMajority<H> {
    /// Weights on each hypothesis in `self.hypotheses`.
    pub(crate) weights: Vec<f64>,
    /// Set of hypotheses.
    pub(crate) hypotheses: Vec<H>,
    /// Added to `sum(weights)` before dividing.
    pub(crate) tolerance: f64,
}


impl<H> WeightedMajority<H> {
    /// Construct an empty combined hypothesis.
    #[inline]
    pub fn new(tolerance: f64) -> Self {
        Self {
            weights: Vec::new(),
            hypotheses: Vec::new(),
            tolerance,
        }
    }


    /// Append a pair `(weight, H)` to the current combined hypothesis.
    #[inline]
    pub fn push(&mut self, weight: f64, hypothesis: H) {
        self.weights.push(weight);
        self.hypotheses.push(hypothesis);
    }


    /// Returns `sum(weights) + tolerance`.
    #[inline]
    pub fn alpha_norm(&self) -> f64 {
        self.weights.iter().sum::<f64>() + self.tolerance
    }


    /// Returns the weights on the hypotheses.
    pub fn weights(&self) -> &[f64] {
        &self.weights[..]
    }


    /// Returns the hypotheses.
    pub fn hypotheses(&self) -> &[H] {
        &self.hypotheses[..]
    }


    /// Returns the number of hypotheses.
    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }


    /// Returns `true` if no hypothesis is combined.
    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }


    /// Decompose the combined hypothesis
    /// into the two vectors `Vec<f64>` and `Vec<H>`
    #[inline]
    pub fn decompose(self) -> (Vec<f64>, Vec<H>) {
        (self.weights, self.hypotheses)
    }
}


impl<H> Default for WeightedMajority<H> {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE)
    }
}


impl<H> WeightedMajority<H>
    where H: Classifier,
{
    /// Returns the normalized score `f(x)` of every example.
    /// This is an alias of [`Classifier::confidence_all`].
    #[inline]
    pub fn raw_scores(&self, sample: &Sample) -> Vec<f64> {
        self.confidence_all(sample)
    }


    /// Returns `min_i |f(x_i)|`,
    /// the smallest score magnitude over `sample`.
    pub fn margin_l1(&self, sample: &Sample) -> f64 {
        self.confidence_all(sample)
            .into_iter()
            .map(f64::abs)
            .fold(f64::INFINITY, f64::min)
    }


    /// Returns the average ramp loss over `sample`:
    /// ```text
    /// 1                  if y f(x) <= 0,
    /// 1 - y f(x) / rho   if 0 < y f(x) <= rho,
    /// 0                  otherwise.
    /// ```
    /// `sample` must be labeled and `rho` must be positive.
    pub fn margin_loss(&self, sample: &Sample, rho: f64) -> Result<f64> {
        checker::check_rho(rho)?;
        sample.is_valid_binary_instance()?;

        let n_sample = sample.shape().0 as f64;
        let loss = sample.target()
            .iter()
            .zip(self.confidence_all(sample))
            .map(|(y, fx)| {
                let margin = y * fx;
                if margin <= 0.0 {
                    1.0
                } else if margin <= rho {
                    1.0 - margin / rho
                } else {
                    0.0
                }
            })
            .sum::<f64>();
        Ok(loss / n_sample)
    }
}


impl<H> Classifier for WeightedMajority<H>
    where H: Classifier,
{
    fn confidence(&self, sample: &Sample, row: usize) -> f64 {
        let score = self.weights.iter()
            .zip(&self.hypotheses[..])
            .map(|(w, h)| *w * h.confidence(sample, row))
            .sum::<f64>();
        score / self.alpha_norm()
    }
}
