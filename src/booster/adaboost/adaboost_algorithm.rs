//! Provides [`AdaBoost`](AdaBoost) by Freund & Schapire, 1995.
use tracing::{debug, info, trace, warn};

use crate::{
    Booster,
    WeakLearner,
    Classifier,
    WeightedMajority,
    Sample,

    common::{checker, utils},
    common::constants::{
        DEFAULT_ESTIMATORS,
        DEFAULT_TOLERANCE,
        ERROR_THRESHOLD,
    },
    error::{BoostError, Result},
    research::CurrentHypothesis,
};
use super::fit_result::{FitOutcome, FitResult, FitTrace, RoundRecord};

use std::fmt;
use std::ops::ControlFlow;
use std::time::Instant;


/// Defines `AdaBoost`.
/// This struct is based on the book:
/// [Boosting: Foundations and Algorithms](https://direct.mit.edu/books/oa-monograph/5342/BoostingFoundations-and-Algorithms)
/// by Robert E. Schapire and Yoav Freund.
///
/// In each round, `AdaBoost` asks the weak learner for the hypothesis `h`
/// with minimal weighted error `e`, and
/// - stops with [`FitOutcome::ErrorThresholdExceeded`] if `e >= 0.5`,
///   discarding `h`,
/// - otherwise appends `h` with weight
///   `alpha = 0.5 * ln((1 - e) / (e + tolerance))`
///   (`alpha = 1` if `e == 0`),
/// - stops with [`FitOutcome::ErrorFreeClassifierFound`] if `e == 0`,
/// - otherwise updates the distribution by
///   `d_i <- d_i * exp(-alpha * y_i * h(x_i))` and
///   normalizes it by `sum(d) + tolerance`.
///
/// If `n_estimators` rounds pass, `AdaBoost` stops
/// with [`FitOutcome::IterationsExhausted`].
///
/// # Example
/// The following code shows a small example
/// for running [`AdaBoost`](AdaBoost).
/// See also:
/// - [`DStump`]
/// - [`DStumpClassifier`]
/// - [`WeightedMajority<F>`]
/// - [`Sample`]
///
/// [`DStump`]: crate::weak_learner::DStump
/// [`DStumpClassifier`]: crate::weak_learner::DStumpClassifier
/// [`WeightedMajority<F>`]: crate::hypothesis::WeightedMajority
///
///
/// ```
/// use stumpboost::prelude::*;
///
/// let rows = vec![
///     vec![-2.0, 0.3],
///     vec![-1.0, 0.1],
///     vec![ 1.0, 0.2],
///     vec![ 2.0, 0.4],
/// ];
/// let sample = Sample::from_rows(&rows, vec![-1.0, -1.0, 1.0, 1.0])
///     .unwrap();
///
/// // Initialize `AdaBoost` with at most 150 rounds.
/// let mut booster = AdaBoost::init(&sample)
///     .n_estimators(150)
///     .trace(true);
///
/// // Set the weak learner.
/// let weak_learner = DStump::new()
///     .strategy(SearchStrategy::Parallel);
///
/// // Run `AdaBoost` and obtain the resulting hypothesis `f`.
/// let result = booster.run(&weak_learner).unwrap();
/// assert_eq!(result.outcome, FitOutcome::ErrorFreeClassifierFound);
///
/// // Get the predictions on the training set.
/// let f = result.hypothesis;
/// assert_eq!(f.predict_all(&sample), vec![-1, -1, 1, 1]);
/// ```
pub struct AdaBoost<'a, H> {
    // Training sample
    sample: &'a Sample,

    // Distribution on sample.
    dist: Vec<f64>,

    // Caller-supplied distribution for the first round.
    initial_dist: Option<Vec<f64>>,

    // Tolerance parameter
    tolerance: f64,

    // The combined hypothesis built so far.
    hypothesis: WeightedMajority<H>,

    // Max iteration.
    n_estimators: usize,

    // Why the loop stopped.
    outcome: FitOutcome,

    // Per-round log. `Some` only if tracing is requested.
    trace: Option<FitTrace>,
    trace_requested: bool,

    // The time `preprocess` is called.
    started: Instant,

    // Terminated iteration.
    terminated: usize,
}


impl<'a, H> AdaBoost<'a, H> {
    /// Initialize the `AdaBoost`.
    /// This method sets some parameters `AdaBoost` holds.
    /// The parameters are validated when the boosting starts.
    pub fn init(sample: &'a Sample) -> Self {
        let n_sample = sample.shape().0;

        let uni = 1.0 / n_sample as f64;
        AdaBoost {
            sample,

            dist: vec![uni; n_sample],
            initial_dist: None,
            tolerance: DEFAULT_TOLERANCE,

            hypothesis: WeightedMajority::new(DEFAULT_TOLERANCE),

            n_estimators: DEFAULT_ESTIMATORS,
            outcome: FitOutcome::IterationsExhausted,

            trace: None,
            trace_requested: false,

            started: Instant::now(),
            terminated: usize::MAX,
        }
    }


    /// Set the maximal number of boosting rounds.
    /// Default is `100`.
    pub fn n_estimators(mut self, n_estimators: usize) -> Self {
        self.n_estimators = n_estimators;
        self
    }


    /// Set the tolerance parameter.
    /// This value is added to the denominators of
    /// `alpha` and of the distribution normalizer.
    /// Default is `1e-10`.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }


    /// Set the distribution for the first round.
    /// By default, the first round uses the uniform distribution.
    pub fn initial_distribution(mut self, dist: Vec<f64>) -> Self {
        self.initial_dist = Some(dist);
        self
    }


    /// Collect a [`FitTrace`] if `flag` is `true`.
    /// Default is `false`.
    pub fn trace(mut self, flag: bool) -> Self {
        self.trace_requested = flag;
        self
    }


    /// Returns the current distribution over the examples.
    pub fn distribution(&self) -> &[f64] {
        &self.dist[..]
    }


    /// Returns the number of rounds run by the last call of `run`.
    /// Returns `usize::MAX` before the loop stops.
    pub fn terminated(&self) -> usize {
        self.terminated
    }


    /// Returns the weight on a hypothesis of weighted error `error`.
    #[inline]
    fn alpha(&self, error: f64) -> f64 {
        if error == 0.0 {
            1.0
        } else {
            0.5 * ((1.0 - error) / (error + self.tolerance)).ln()
        }
    }


    /// Multiply `exp(- alpha * y_i h(x_i))` to `self.dist`
    /// and normalize it.
    #[inline]
    fn update_params(&mut self, margins: Vec<f64>, alpha: f64) {
        self.dist.iter_mut()
            .zip(margins)
            .for_each(|(d, yh)| { *d *= (-alpha * yh).exp(); });

        utils::normalize(&mut self.dist[..], self.tolerance);
    }


    fn stop(&mut self, outcome: FitOutcome, iteration: usize)
        -> ControlFlow<usize>
    {
        self.outcome = outcome;
        self.terminated = iteration;
        ControlFlow::Break(iteration)
    }
}


impl<H: Clone> CurrentHypothesis for AdaBoost<'_, H> {
    type Output = WeightedMajority<H>;

    fn current_hypothesis(&self) -> Self::Output {
        self.hypothesis.clone()
    }
}


impl<H> Booster<H> for AdaBoost<'_, H>
    where H: Classifier + fmt::Debug,
{
    type Output = FitResult<H>;


    fn name(&self) -> &str {
        "AdaBoost"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let (n_sample, n_feature) = self.sample.shape();
        let info = Vec::from([
            ("# of examples", format!("{n_sample}")),
            ("# of features", format!("{n_feature}")),
            ("Estimators", format!("{}", self.n_estimators)),
            ("Tolerance", format!("{}", self.tolerance)),
            ("Trace", format!("{}", self.trace_requested)),
        ]);
        Some(info)
    }


    fn preprocess(&mut self) -> Result<()> {
        checker::check_sample(self.sample)?;
        checker::check_tolerance(self.tolerance)?;
        if self.n_estimators == 0 {
            return Err(BoostError::ZeroEstimators);
        }

        // Initialize parameters
        let (n_sample, n_feature) = self.sample.shape();
        self.dist = match &self.initial_dist {
            Some(dist) => {
                checker::check_distribution(dist, n_sample)?;
                dist.clone()
            },
            None => {
                let uni = 1.0 / n_sample as f64;
                vec![uni; n_sample]
            },
        };

        self.hypothesis = WeightedMajority::new(self.tolerance);
        self.outcome = FitOutcome::IterationsExhausted;
        self.trace = self.trace_requested.then(FitTrace::new);
        self.terminated = usize::MAX;

        info!(
            n_sample,
            n_feature,
            n_estimators = self.n_estimators,
            "fit started"
        );
        self.started = Instant::now();
        Ok(())
    }


    fn boost<W>(
        &mut self,
        weak_learner: &W,
        iteration: usize,
    ) -> ControlFlow<usize>
        where W: WeakLearner<Hypothesis = H>,
    {
        if self.n_estimators < iteration {
            return self.stop(FitOutcome::IterationsExhausted, self.n_estimators);
        }


        // Get a new hypothesis
        let h = weak_learner.produce(self.sample, &self.dist);
        let error = utils::weighted_error_of_hypothesis(
            self.sample, &self.dist, &h
        );


        // `h` is no better than random guessing.
        if error >= ERROR_THRESHOLD {
            warn!(
                iteration,
                error,
                "weak hypothesis is no better than random guessing"
            );
            return self.stop(FitOutcome::ErrorThresholdExceeded, iteration);
        }


        let alpha = self.alpha(error);
        debug!(iteration, error, alpha, "boosting round");
        trace!(iteration, hypothesis = ?h, "weak hypothesis");


        if let Some(log) = self.trace.as_mut() {
            log.push(RoundRecord {
                round: iteration,
                elapsed: self.started.elapsed(),
                minimal_error: error,
                distribution: self.dist.clone(),
            });
        }


        // If `h` predicted all the examples in `sample` correctly,
        // there is nothing left to reweight.
        if error == 0.0 {
            self.hypothesis.push(alpha, h);
            return self.stop(FitOutcome::ErrorFreeClassifierFound, iteration);
        }


        // Each element in `margins` is the product of
        // the predicted vector and the correct vector
        let margins = utils::margins_of_hypothesis(self.sample, &h);
        self.hypothesis.push(alpha, h);
        self.update_params(margins, alpha);

        ControlFlow::Continue(())
    }


    fn postprocess(&mut self) -> FitResult<H> {
        info!(
            outcome = %self.outcome,
            n_hypotheses = self.hypothesis.len(),
            "fit finished"
        );

        let hypothesis = std::mem::replace(
            &mut self.hypothesis,
            WeightedMajority::new(self.tolerance),
        );

        FitResult {
            outcome: self.outcome,
            hypothesis,
            trace: self.trace.take(),
        }
    }
}
