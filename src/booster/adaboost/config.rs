//! Plain settings for a stump-based `AdaBoost` run.
use serde::{Serialize, Deserialize};

use crate::{
    Booster,
    Sample,
    common::constants::{DEFAULT_ESTIMATORS, DEFAULT_TOLERANCE},
    error::Result,
    weak_learner::{DStump, DStumpClassifier, SearchStrategy},
};
use super::{AdaBoost, FitResult};


/// The settings of [`AdaBoost`] with the [`DStump`] weak learner.
/// Missing fields take their default values,
/// so that a caller can keep the settings in a JSON file.
///
/// ```
/// use stumpboost::prelude::*;
///
/// let config = AdaBoostConfig::from_json(
///     r#"{ "n_estimators": 150, "strategy": "parallel" }"#
/// ).unwrap();
/// assert_eq!(config.n_estimators, 150);
/// assert_eq!(config.strategy, SearchStrategy::Parallel);
/// assert!(!config.trace);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaBoostConfig {
    /// The maximal number of boosting rounds.
    pub n_estimators: usize,
    /// Added to the denominators in the boosting updates.
    pub tolerance: f64,
    /// How the weak learner scans the features.
    pub strategy: SearchStrategy,
    /// Collect the per-round trace.
    pub trace: bool,
}


impl Default for AdaBoostConfig {
    fn default() -> Self {
        Self {
            n_estimators: DEFAULT_ESTIMATORS,
            tolerance: DEFAULT_TOLERANCE,
            strategy: SearchStrategy::default(),
            trace: false,
        }
    }
}


impl AdaBoostConfig {
    /// Read the settings from a JSON string.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }


    /// Build the booster for `sample`.
    pub fn booster<'a>(&self, sample: &'a Sample)
        -> AdaBoost<'a, DStumpClassifier>
    {
        AdaBoost::init(sample)
            .n_estimators(self.n_estimators)
            .tolerance(self.tolerance)
            .trace(self.trace)
    }


    /// Build the weak learner.
    pub fn weak_learner(&self) -> DStump {
        DStump::new().strategy(self.strategy)
    }


    /// Run `AdaBoost` over decision stumps on `sample`.
    /// Invalid input is rejected before the first round.
    pub fn fit(&self, sample: &Sample) -> Result<FitResult<DStumpClassifier>> {
        let weak_learner = self.weak_learner();
        self.booster(sample).run(&weak_learner)
    }
}
