use crate::{Sample, Classifier};


/// The fraction of the examples in `sample` that `f` misclassifies.
/// `sample` must be labeled.
pub fn zero_one_loss<H>(sample: &Sample, f: &H) -> f64
    where H: Classifier
{
    let n_sample = sample.shape().0 as f64;

    let target = sample.target();

    f.predict_all(sample)
        .into_iter()
        .zip(target)
        .map(|(hx, &y)| if hx != y as i64 { 1.0 } else { 0.0 })
        .sum::<f64>()
        / n_sample
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::weak_learner::DStumpClassifier;

    #[test]
    fn counts_mistakes() {
        let rows = vec![vec![-1.0], vec![0.5], vec![2.0], vec![3.0]];
        let sample = Sample::from_rows(&rows, vec![-1.0, -1.0, 1.0, -1.0])
            .unwrap();

        // Predicts [-1, 1, 1, 1].
        let h = DStumpClassifier::new(0, 1, 0.0);
        assert_eq!(zero_one_loss(&sample, &h), 0.5);
    }
}
