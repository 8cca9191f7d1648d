use colored::Colorize;

use crate::{
    Sample,
    Booster,
    WeakLearner,
    error::{BoostError, Result},
};

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::time::Instant;
use std::ops::ControlFlow;

const DEFAULT_ROUND: usize = 100;
const DEFAULT_TIMELIMIT_MILLIS: u128 = u128::MAX;
const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;
const HEADER: &str = "Round,TrainLoss,TestLoss,Time\n";


/// Implementing this trait allows you to use [`Logger`] to
/// log the behavior of a booster.
pub trait CurrentHypothesis {
    /// The combined hypothesis type.
    type Output;

    /// Returns the combined hypothesis at current state.
    fn current_hypothesis(&self) -> Self::Output;
}


/// Struct `Logger` provides a generic function that
/// logs train/test loss values and running time
/// for each round of boosting.
///
/// ```no_run
/// use stumpboost::prelude::*;
/// use stumpboost::research::{Logger, zero_one_loss};
///
/// let train = SampleReader::new()
///     .file("train.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
/// let test = SampleReader::new()
///     .file("test.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// let booster = AdaBoost::init(&train).n_estimators(500);
/// let weak_learner = DStump::new().strategy(SearchStrategy::Parallel);
///
/// let mut logger = Logger::new(
///         booster, weak_learner, zero_one_loss, &train, &test
///     )
///     .print_every(50)
///     .time_limit_as_secs(60);
/// let result = logger.run("adaboost.csv").unwrap();
/// println!("{}", result.outcome);
/// ```
pub struct Logger<'a, B, W, G> {
    booster: B,
    weak_learner: W,
    loss_func: G,
    train: &'a Sample,
    test: &'a Sample,
    time_limit: u128,
    round: usize,
}


impl<'a, B, W, G> Logger<'a, B, W, G> {
    /// Create a new instance of `Logger`.
    pub fn new(
        booster: B,
        weak_learner: W,
        loss_func: G,
        train: &'a Sample,
        test: &'a Sample,
    ) -> Self
    {
        Self {
            booster,
            weak_learner,
            loss_func,
            train,
            test,
            time_limit: DEFAULT_TIMELIMIT_MILLIS,
            round: DEFAULT_ROUND,
        }
    }


    /// Set the time limit for boosting algorithm as milliseconds.
    /// If the boosting algorithm reaches this limit,
    /// breaks immediately.
    #[inline(always)]
    pub fn time_limit_as_millis(mut self, time_limit: u128) -> Self {
        self.time_limit = time_limit;
        self
    }


    /// Set the time limit for boosting algorithm as seconds.
    #[inline(always)]
    pub fn time_limit_as_secs(mut self, time_limit: u64) -> Self {
        self.time_limit = time_limit as u128 * 1_000;
        self
    }


    /// Set the interval to print the current status.
    /// By default, the method `run` prints its status every `100` rounds.
    /// If you don't want to print the log,
    /// set `usize::MAX`.
    #[inline(always)]
    pub fn print_every(mut self, round: usize) -> Self {
        self.round = round;
        self
    }
}


impl<H, B, W, G, S> Logger<'_, B, W, G>
    where B: Booster<H> + CurrentHypothesis<Output = S>,
          W: WeakLearner<Hypothesis = H>,
          G: Fn(&Sample, &S) -> f64,
{
    #[inline(always)]
    fn print_log_header(&self) {
        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "".bold().red(),
            "TRAIN".bold().green(),
            "TEST".bold().yellow(),
            "ACC.".bold().cyan(),
        );
        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\n",
            "ROUND".bold().red(),
            "LOSS".bold().green(),
            "LOSS".bold().yellow(),
            "TIME".bold().cyan(),
        );
    }


    fn print_info(info: Option<Vec<(&str, String)>>) {
        let Some(info) = info else { return; };
        let line = info.into_iter()
            .map(|(key, val)| {
                format!(
                    "    + {:<STAT_WIDTH$}\t{:>width$}",
                    key,
                    val.bold().yellow(),
                    width = STAT_WIDTH - 8
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        println!("{line}");
    }


    /// print current settings.
    #[inline(always)]
    fn print_stats(&self) {
        let limit = if self.time_limit != u128::MAX {
            time_format(self.time_limit)
        } else {
            "Nothing".into()
        };
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        println!(
            "\n{header}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Booster".bold(),
            self.booster.name().bold().green(),
        );
        Self::print_info(self.booster.info());

        println!(
            "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Weak Learner".bold(),
            self.weak_learner.name().bold().green(),
        );
        Self::print_info(self.weak_learner.info());

        println!(
            "\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            {:=^FULL_WIDTH$}\n\
            ",
            "Time Limit".bold(),
            limit.bold().green(),
            "".bold(),
        );
    }


    /// Run the given boosting algorithm with logging.
    /// Note that this method is almost the same as `Booster::run`.
    /// This method measures running time per iteration
    /// and writes one CSV line per round to `filename`.
    pub fn run<P: AsRef<Path>>(&mut self, filename: P)
        -> Result<<B as Booster<H>>::Output>
    {
        let path = filename.as_ref();
        let io_error = |source| BoostError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::create(path).map_err(io_error)?;
        file.write_all(HEADER.as_bytes()).map_err(io_error)?;


        // ---------------------------------------------------------------------
        // Pre-processing
        self.booster.preprocess()?;
        self.print_stats();

        // Cumulative time
        let mut time_acc = 0;
        let mut write_error = None;

        // ---------------------------------------------------------------------
        // Boosting step
        if self.round != usize::MAX { self.print_log_header(); }
        let _ = (1..).try_for_each(|iter| {
            let now = Instant::now();

            let flow = self.booster.boost(&self.weak_learner, iter);

            time_acc += now.elapsed().as_millis();

            let f = self.booster.current_hypothesis();
            let train = (self.loss_func)(self.train, &f);
            let test = (self.loss_func)(self.test, &f);

            let line = format!("{iter},{train},{test},{time_acc}\n");
            if let Err(e) = file.write_all(line.as_bytes()) {
                write_error = Some(e);
                return ControlFlow::Break(iter);
            }

            if time_acc > self.time_limit {
                println!(
                    "{} {}\t\t{}\t{}\t{}\n",
                    "[TLE]".bold().bright_red(),
                    format!("{:>WIDTH$}", iter).bold().red(),
                    format!("{:>WIDTH$.PREC_WIDTH$}", train).bold().green(),
                    format!("{:>WIDTH$.PREC_WIDTH$}", test).bold().yellow(),
                    time_format(time_acc).bold().cyan(),
                );
                return ControlFlow::Break(iter);
            }

            if self.round != usize::MAX && iter % self.round == 0 {
                println!(
                    "{} {}\t\t{}\t{}\t{}",
                    "[LOG]".bold().magenta(),
                    format!("{:>WIDTH$}", iter).red(),
                    format!("{:>WIDTH$.PREC_WIDTH$}", train).green(),
                    format!("{:>WIDTH$.PREC_WIDTH$}", test).yellow(),
                    time_format(time_acc).bold().cyan(),
                );
            }

            if flow.is_break() && self.round != usize::MAX {
                println!(
                    "{} {}\t\t{}\t{}\t{}\n",
                    "[FIN]".bold().bright_green(),
                    format!("{:>WIDTH$}", iter).red(),
                    format!("{:>WIDTH$.PREC_WIDTH$}", train).bold().green(),
                    format!("{:>WIDTH$.PREC_WIDTH$}", test).bold().yellow(),
                    time_format(time_acc).bold().cyan(),
                );
            }
            flow
        });

        let f = self.booster.postprocess();
        match write_error {
            Some(e) => Err(io_error(e)),
            None => Ok(f),
        }
    }
}


fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{:0>3}s", millisec);
    }
    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {:0>2}.{:0>3}s", sec, millisec);
    }
    let min = sec / 60;
    let sec = sec % 60;
    if min < 60 {
        return format!(" {:0>2}m {:0>2}s", min, sec);
    }
    let hours = min / 60;
    let min = min % 60;
    format!(" {:0>2}h {:0>2}m", hours, min)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_format_units() {
        assert_eq!(time_format(42), "  0.042s");
        assert_eq!(time_format(12_345), " 12.345s");
        assert_eq!(time_format(125_000), " 02m 05s");
        assert_eq!(time_format(3_780_000), " 01h 03m");
    }
}
