//! Defines `AdaBoost`.
//! This struct is based on the book: 
//! [Boosting: Foundations and Algorithms](https://direct.mit.edu/books/oa-monograph/5342/BoostingFoundations-and-Algorithms)
//! by Robert E. Schapire and Yoav Freund.
pub mod adaboost_algorithm;
pub mod fit_result;
pub mod config;

pub use adaboost_algorithm::AdaBoost;
pub use fit_result::{FitOutcome, FitResult, FitTrace, RoundRecord};
pub use config::AdaBoostConfig;
