use stumpboost::prelude::*;
use stumpboost::BoostError;
use stumpboost::research::{
    rademacher_complexity,
    RademacherEstimator,
};


fn reference_sample() -> Sample {
    let rows = vec![
        vec![ 0.6476239,  -0.81753611, -1.61389785, -0.21274028],
        vec![-2.37482060,  0.82768797, -0.38732682, -0.30230275],
        vec![ 1.51783379,  1.22140561, -0.51080514, -1.18063218],
        vec![-0.98740462,  0.99958558, -1.70627019,  1.9507754 ],
        vec![-1.43411205,  1.50037656, -1.04855297, -1.42001794],
        vec![ 0.29484027, -0.79249401, -1.25279536,  0.77749036],
    ];
    Sample::from_rows_unlabeled(&rows).unwrap()
}


#[test]
fn exhaustive_small_sample() {
    let rows = vec![vec![0.5, 1.0], vec![-1.0, 2.0], vec![2.0, -3.0]];
    let sample = Sample::from_rows_unlabeled(&rows).unwrap();

    let complexity = rademacher_complexity(&sample, 8).unwrap();
    assert!((complexity - 0.8333333333333334).abs() < 1e-12);

    // Enumeration does not depend on the seed.
    let again = RademacherEstimator::init(&sample)
        .subset_size(1_000)
        .seed(5)
        .estimate()
        .unwrap();
    assert_eq!(complexity, again);
}


#[test]
fn exhaustive_reference_sample() {
    let sample = reference_sample();
    let complexity = rademacher_complexity(&sample, 64).unwrap();
    assert!((complexity - 0.8333333333333329).abs() < 1e-12);
}


#[test]
fn labels_are_ignored() {
    let rows = vec![vec![0.5, 1.0], vec![-1.0, 2.0], vec![2.0, -3.0]];
    let unlabeled = Sample::from_rows_unlabeled(&rows).unwrap();
    let labeled = Sample::from_rows(&rows, vec![1.0, -1.0, 1.0]).unwrap();

    assert_eq!(
        rademacher_complexity(&unlabeled, 8).unwrap(),
        rademacher_complexity(&labeled, 8).unwrap()
    );
}


#[test]
fn seeded_monte_carlo_is_reproducible() {
    let sample = reference_sample();

    // `2^6 > 20`, so this samples sign vectors.
    let estimate = |seed| {
        RademacherEstimator::init(&sample)
            .subset_size(20)
            .seed(seed)
            .estimate()
            .unwrap()
    };
    assert_eq!(estimate(1), estimate(1));
    assert_eq!(estimate(2), estimate(2));
}


#[test]
fn estimates_lie_in_the_unit_interval() {
    let rows = (0..24)
        .map(|i| vec![(i as f64).sin(), (i as f64 * 0.7).cos(), i as f64])
        .collect::<Vec<_>>();
    let sample = Sample::from_rows_unlabeled(&rows).unwrap();

    for seed in 0..5 {
        let complexity = RademacherEstimator::init(&sample)
            .subset_size(50)
            .seed(seed)
            .estimate()
            .unwrap();
        assert!((0.0..=1.0).contains(&complexity));
    }

    let complexity = rademacher_complexity(&sample, 50).unwrap();
    assert!((0.0..=1.0).contains(&complexity));
}


#[test]
fn zero_subset_size_is_rejected() {
    let sample = reference_sample();
    assert!(matches!(
        rademacher_complexity(&sample, 0),
        Err(BoostError::ZeroSubsetSize)
    ));
}
