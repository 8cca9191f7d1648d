use stumpboost::prelude::*;
use stumpboost::research::{Logger, zero_one_loss};


#[test]
fn logs_one_line_per_round() {
    let rows = vec![
        vec![ 0.6476239,  -0.81753611, -1.61389785, -0.21274028],
        vec![-2.37482060,  0.82768797, -0.38732682, -0.30230275],
        vec![ 1.51783379,  1.22140561, -0.51080514, -1.18063218],
        vec![-0.98740462,  0.99958558, -1.70627019,  1.9507754 ],
        vec![-1.43411205,  1.50037656, -1.04855297, -1.42001794],
        vec![ 0.29484027, -0.79249401, -1.25279536,  0.77749036],
    ];
    let target = vec![1.0, -1.0, -1.0, 1.0, 1.0, -1.0];
    let train = Sample::from_rows(&rows, target).unwrap();

    let booster = AdaBoost::init(&train).n_estimators(12);
    let weak_learner = DStump::new();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log.csv");

    let mut logger = Logger::new(
            booster, weak_learner, zero_one_loss, &train, &train
        )
        .print_every(5);
    let result = logger.run(&path).unwrap();
    assert_eq!(result.outcome, FitOutcome::IterationsExhausted);

    let content = std::fs::read_to_string(&path).unwrap();
    let lines = content.lines().collect::<Vec<_>>();

    // The header, twelve rounds, and the round that stops the loop.
    assert_eq!(lines[0], "Round,TrainLoss,TestLoss,Time");
    assert_eq!(lines.len(), 14);
    assert!(lines[1].starts_with("1,"));

    let last = lines[13].split(',').collect::<Vec<_>>();
    assert_eq!(last[0], "13");
    assert_eq!(last[1], "0");
    assert_eq!(last[1], last[2]);
}


#[test]
fn invalid_booster_is_reported() {
    let rows = vec![vec![0.0], vec![1.0]];
    let train = Sample::from_rows(&rows, vec![1.0, 2.0]).unwrap();

    let booster = AdaBoost::init(&train);
    let dir = tempfile::tempdir().unwrap();

    let mut logger = Logger::new(
        booster, DStump::new(), zero_one_loss, &train, &train
    );
    assert!(logger.run(dir.path().join("log.csv")).is_err());
}
