//! This file provides some common functions
//! such as weighted error calculation.
use crate::{Sample, Classifier};


/// Returns the weighted error of the given predictions,
/// i.e., the total mass of `dist` on the misclassified examples.
/// The sum runs in example order, so that every caller
/// obtains a bit-identical value for the same predictions.
#[inline(always)]
pub(crate) fn weighted_error<I>(
    predictions: I,
    target: &[f64],
    dist: &[f64],
) -> f64
    where I: Iterator<Item = i64>,
{
    predictions.zip(target)
        .zip(dist)
        .map(|((p, &y), &d)| ((p as f64 - y) / 2.0).abs() * d)
        .sum::<f64>()
}


/// Returns the weighted error of a single hypothesis
/// for the given distribution.
#[inline(always)]
pub(crate) fn weighted_error_of_hypothesis<H>(
    sample: &Sample,
    dist: &[f64],
    h: &H,
) -> f64
    where H: Classifier,
{
    let n_sample = sample.shape().0;
    let predictions = (0..n_sample).map(|i| h.predict(sample, i));
    weighted_error(predictions, sample.target(), dist)
}


/// Returns the margin vector `y_i * f(x_i)` of a hypothesis.
#[inline(always)]
pub(crate) fn margins_of_hypothesis<H>(sample: &Sample, h: &H)
    -> Vec<f64>
    where H: Classifier,
{
    let targets = sample.target();

    targets.iter()
        .enumerate()
        .map(|(i, y)| y * h.confidence(sample, i))
        .collect()
}


/// Divide every item by `sum(items) + tolerance`.
#[inline(always)]
pub(crate) fn normalize(items: &mut [f64], tolerance: f64) {
    let z = items.iter().sum::<f64>() + tolerance;

    items.iter_mut()
        .for_each(|item| { *item /= z; });
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_error_sums_misclassified_mass() {
        let predictions = vec![1_i64, -1, 1, 1];
        let target = [1.0, 1.0, -1.0, 1.0];
        let dist = [0.1, 0.2, 0.3, 0.4];

        let err = weighted_error(predictions.into_iter(), &target, &dist);
        assert!((err - 0.5).abs() < 1e-15);
    }

    #[test]
    fn normalize_keeps_proportions() {
        let mut items = vec![1.0, 3.0];
        normalize(&mut items, 0.0);
        assert_eq!(items, vec![0.25, 0.75]);
    }
}
