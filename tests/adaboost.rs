use stumpboost::prelude::*;
use stumpboost::BoostError;


fn reference_sample() -> Sample {
    let rows = vec![
        vec![ 0.6476239,  -0.81753611, -1.61389785, -0.21274028],
        vec![-2.37482060,  0.82768797, -0.38732682, -0.30230275],
        vec![ 1.51783379,  1.22140561, -0.51080514, -1.18063218],
        vec![-0.98740462,  0.99958558, -1.70627019,  1.9507754 ],
        vec![-1.43411205,  1.50037656, -1.04855297, -1.42001794],
        vec![ 0.29484027, -0.79249401, -1.25279536,  0.77749036],
    ];
    let target = vec![1.0, -1.0, -1.0, 1.0, 1.0, -1.0];
    Sample::from_rows(&rows, target).unwrap()
}


/// Tests for `AdaBoost`.
#[cfg(test)]
pub mod adaboost_tests {
    use super::*;

    #[test]
    fn reference_dataset() {
        let sample = reference_sample();

        for strategy in [SearchStrategy::Sequential, SearchStrategy::Parallel] {
            let mut booster = AdaBoost::init(&sample)
                .n_estimators(150);
            let wl = DStump::new().strategy(strategy);

            let result = booster.run(&wl).unwrap();
            assert_eq!(result.outcome, FitOutcome::IterationsExhausted);
            assert_eq!(booster.terminated(), 150);
            assert!(result.trace.is_none());

            let f = result.hypothesis;
            assert_eq!(f.len(), 150);
            assert_eq!(f.predict_all(&sample), vec![1, -1, -1, 1, 1, -1]);

            let margin = f.margin_l1(&sample);
            assert!((margin - 0.4470041227968159).abs() < 1e-9);
            assert_eq!(f.margin_loss(&sample, margin).unwrap(), 0.0);
        }
    }


    #[test]
    fn separable_dataset_stops_in_the_first_round() {
        let rows = vec![vec![-2.0], vec![-1.0], vec![0.0], vec![1.0], vec![2.0]];
        let target = vec![-1.0, -1.0, -1.0, 1.0, 1.0];
        let sample = Sample::from_rows(&rows, target).unwrap();

        let mut booster = AdaBoost::init(&sample).trace(true);
        let result = booster.run(&DStump::new()).unwrap();

        assert_eq!(result.outcome, FitOutcome::ErrorFreeClassifierFound);
        assert_eq!(result.outcome.name(), "ERROR_FREE_CLASSIFIER_FOUND");
        assert_eq!(booster.terminated(), 1);

        let f: Ensemble = result.hypothesis;
        assert_eq!(f.hypotheses(), &[DStumpClassifier::new(0, 1, 0.0)]);
        assert_eq!(f.weights(), &[1.0]);
        assert_eq!(f.predict_all(&sample), vec![-1, -1, -1, 1, 1]);

        let trace = result.trace.unwrap();
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.records()[0].round, 1);
        assert_eq!(trace.records()[0].minimal_error, 0.0);
    }


    #[test]
    fn chance_level_stump_is_discarded() {
        // A constant feature cannot beat random guessing.
        let rows = vec![vec![1.0], vec![1.0], vec![1.0], vec![1.0]];
        let sample = Sample::from_rows(&rows, vec![1.0, -1.0, 1.0, -1.0])
            .unwrap();

        let mut booster = AdaBoost::init(&sample).trace(true);
        let result = booster.run(&DStump::new()).unwrap();

        assert_eq!(result.outcome, FitOutcome::ErrorThresholdExceeded);
        assert_eq!(result.outcome.to_string(), "ERROR_LEVEL_EXCEEDED");
        assert!(result.hypothesis.is_empty());
        assert!(result.trace.unwrap().is_empty());

        // An empty vote scores 0, which is predicted as +1.
        let f = result.hypothesis;
        assert_eq!(f.raw_scores(&sample), vec![0.0; 4]);
        assert_eq!(f.predict_all(&sample), vec![1; 4]);
    }


    #[test]
    fn trace_keeps_probability_vectors() {
        let sample = reference_sample();
        let mut booster = AdaBoost::init(&sample)
            .n_estimators(40)
            .trace(true);
        let wl = DStump::new();
        let result = booster.run(&wl).unwrap();

        let trace = result.trace.unwrap();
        assert_eq!(trace.len(), result.hypothesis.len());

        let mut last_elapsed = std::time::Duration::ZERO;
        for (k, record) in trace.records().iter().enumerate() {
            assert_eq!(record.round, k + 1);
            assert!(record.elapsed >= last_elapsed);
            last_elapsed = record.elapsed;

            assert!(record.distribution.iter().all(|&d| d >= 0.0));
            let sum = record.distribution.iter().sum::<f64>();
            assert!((sum - 1.0).abs() < 1e-6);
        }
    }


    #[test]
    fn trace_replays_the_search() {
        let sample = reference_sample();
        let wl = DStump::new();
        let result = AdaBoost::init(&sample)
            .n_estimators(25)
            .trace(true)
            .run(&wl)
            .unwrap();

        let trace = result.trace.unwrap();
        let stumps = result.hypothesis.hypotheses();
        for (record, stump) in trace.records().iter().zip(stumps) {
            let (h, error) = wl.search(&sample, &record.distribution);
            assert_eq!(&h, stump);
            assert_eq!(error, record.minimal_error);
        }
    }


    #[test]
    fn weights_follow_the_error() {
        let sample = reference_sample();
        let tolerance = 1e-10;
        let result = AdaBoost::init(&sample)
            .n_estimators(10)
            .tolerance(tolerance)
            .trace(true)
            .run(&DStump::new())
            .unwrap();

        let trace = result.trace.unwrap();
        for (record, &alpha) in trace.records().iter().zip(result.hypothesis.weights()) {
            let e = record.minimal_error;
            let expected = 0.5 * ((1.0 - e) / (e + tolerance)).ln();
            assert_eq!(alpha, expected);
            assert!(alpha > 0.0);
        }
    }


    #[test]
    fn initial_distribution_is_used_in_the_first_round() {
        let sample = reference_sample();
        let dist = vec![0.3, 0.1, 0.1, 0.2, 0.2, 0.1];

        let result = AdaBoost::init(&sample)
            .n_estimators(3)
            .initial_distribution(dist.clone())
            .trace(true)
            .run(&DStump::new())
            .unwrap();

        let trace = result.trace.unwrap();
        assert_eq!(trace.records()[0].distribution, dist);
    }


    #[test]
    fn invalid_inputs_are_rejected() {
        let rows = vec![vec![0.0], vec![1.0]];
        let wl = DStump::new();

        let sample = Sample::from_rows(&rows, vec![1.0, 0.5]).unwrap();
        let result = AdaBoost::init(&sample).run(&wl);
        assert!(matches!(
            result,
            Err(BoostError::InvalidLabel { row: 1, label }) if label == 0.5
        ));

        let sample = Sample::from_rows_unlabeled(&rows).unwrap();
        let result = AdaBoost::init(&sample).run(&wl);
        assert!(matches!(result, Err(BoostError::MissingTarget)));

        let sample = Sample::from_rows(&rows, vec![1.0, -1.0]).unwrap();
        let result = AdaBoost::init(&sample).n_estimators(0).run(&wl);
        assert!(matches!(result, Err(BoostError::ZeroEstimators)));

        let result = AdaBoost::init(&sample).tolerance(-1.0).run(&wl);
        assert!(matches!(result, Err(BoostError::InvalidTolerance(_))));

        let result = AdaBoost::init(&sample)
            .initial_distribution(vec![0.9, 0.9])
            .run(&wl);
        assert!(matches!(result, Err(BoostError::InvalidDistribution(_))));

        let result = AdaBoost::init(&sample)
            .initial_distribution(vec![1.0])
            .run(&wl);
        assert!(matches!(result, Err(BoostError::InvalidDistribution(_))));
    }


    #[test]
    fn shape_errors_are_reported_on_construction() {
        let ragged = vec![vec![0.0, 1.0], vec![1.0]];
        assert!(matches!(
            Sample::from_rows(&ragged, vec![1.0, -1.0]),
            Err(BoostError::RaggedRow { row: 1, expected: 2, got: 1 })
        ));

        let rows = vec![vec![0.0], vec![1.0]];
        assert!(matches!(
            Sample::from_rows(&rows, vec![1.0]),
            Err(BoostError::TargetLength { n_sample: 2, n_target: 1 })
        ));

        let empty: Vec<Vec<f64>> = Vec::new();
        assert!(matches!(
            Sample::from_rows(&empty, Vec::new()),
            Err(BoostError::EmptySample)
        ));
    }


    #[test]
    fn margin_loss_rejects_bad_rho() {
        let sample = reference_sample();
        let f = AdaBoostConfig::default().fit(&sample).unwrap().hypothesis;

        assert!(matches!(
            f.margin_loss(&sample, 0.0),
            Err(BoostError::InvalidRho(_))
        ));
        assert!(matches!(
            f.margin_loss(&sample, f64::NAN),
            Err(BoostError::InvalidRho(_))
        ));
    }


    #[test]
    fn rerunning_starts_from_scratch() {
        let sample = reference_sample();
        let wl = DStump::new();
        let mut booster = AdaBoost::init(&sample).n_estimators(20);

        let first = booster.run(&wl).unwrap();
        let second = booster.run(&wl).unwrap();
        assert_eq!(first.outcome, second.outcome);
        assert_eq!(first.hypothesis, second.hypothesis);
    }


    #[test]
    fn config_from_json() {
        let sample = reference_sample();
        let config = AdaBoostConfig::from_json(
            r#"{ "n_estimators": 150, "strategy": "parallel", "trace": true }"#
        ).unwrap();
        assert_eq!(config.tolerance, 1e-10);

        let result = config.fit(&sample).unwrap();
        assert_eq!(result.outcome, FitOutcome::IterationsExhausted);
        assert_eq!(result.trace.map(|t| t.len()), Some(150));
        assert_eq!(
            result.hypothesis.predict_all(&sample),
            vec![1, -1, -1, 1, 1, -1]
        );
    }
}
