//! Repeated independent runs and their summary statistics.

use super::config::TrialConfig;
use crate::error::SearchError;
use crate::hc::{HcResult, RestartResult};
use crate::sa::SaResult;
use crate::tabu::TabuResult;
use std::fmt;
use std::time::{Duration, Instant};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The figures of a single run that a trial batch aggregates.
pub trait Trial {
    fn evaluations(&self) -> usize;

    fn best_cost(&self) -> f64;

    fn final_temperature(&self) -> Option<f64> {
        None
    }
}

impl<S> Trial for HcResult<S> {
    fn evaluations(&self) -> usize {
        self.evaluations
    }

    fn best_cost(&self) -> f64 {
        self.best_cost
    }
}

impl<S> Trial for RestartResult<S> {
    fn evaluations(&self) -> usize {
        self.evaluations
    }

    fn best_cost(&self) -> f64 {
        self.best_cost
    }
}

impl<S> Trial for SaResult<S> {
    fn evaluations(&self) -> usize {
        self.evaluations
    }

    fn best_cost(&self) -> f64 {
        self.best_cost
    }

    fn final_temperature(&self) -> Option<f64> {
        Some(self.final_temperature)
    }
}

impl<S> Trial for TabuResult<S> {
    fn evaluations(&self) -> usize {
        self.evaluations
    }

    fn best_cost(&self) -> f64 {
        self.best_cost
    }
}

/// One finished trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialRecord {
    pub evaluations: usize,
    pub best_cost: f64,
    pub final_temperature: Option<f64>,
    pub elapsed: Duration,
}

impl TrialRecord {
    fn from_trial<T: Trial>(trial: &T, elapsed: Duration) -> Self {
        Self {
            evaluations: trial.evaluations(),
            best_cost: trial.best_cost(),
            final_temperature: trial.final_temperature(),
            elapsed,
        }
    }
}

/// Summary of a trial batch.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialStats {
    /// Number of runs aggregated.
    pub trials: usize,
    /// Lowest best cost over all runs.
    pub min_best_cost: f64,
    /// Mean best cost.
    pub mean_best_cost: f64,
    /// Sample standard deviation of the best cost (0 for a single run).
    pub std_best_cost: f64,
    /// Mean number of evaluations per run.
    pub mean_evaluations: f64,
    /// Sum of wall-clock times.
    pub total_time: Duration,
    /// Mean wall-clock time per run.
    pub mean_time: Duration,
    /// Mean final temperature, for annealing runs.
    pub mean_final_temperature: Option<f64>,
}

impl TrialStats {
    /// Aggregates records. Returns `None` for an empty slice.
    pub fn from_records(records: &[TrialRecord]) -> Option<Self> {
        let n = records.len();
        if n == 0 {
            return None;
        }
        let nf = n as f64;

        let costs: Vec<f64> = records.iter().map(|r| r.best_cost).collect();
        let mean_best_cost = costs.iter().sum::<f64>() / nf;
        let std_best_cost = if n > 1 {
            let ss: f64 = costs.iter().map(|c| (c - mean_best_cost).powi(2)).sum();
            (ss / (nf - 1.0)).sqrt()
        } else {
            0.0
        };

        let total_time: Duration = records.iter().map(|r| r.elapsed).sum();
        let temperatures: Vec<f64> = records.iter().filter_map(|r| r.final_temperature).collect();
        let mean_final_temperature = (!temperatures.is_empty())
            .then(|| temperatures.iter().sum::<f64>() / temperatures.len() as f64);

        Some(Self {
            trials: n,
            min_best_cost: costs.iter().copied().fold(f64::INFINITY, f64::min),
            mean_best_cost,
            std_best_cost,
            mean_evaluations: records.iter().map(|r| r.evaluations as f64).sum::<f64>() / nf,
            total_time,
            mean_time: total_time / n as u32,
            mean_final_temperature,
        })
    }
}

impl fmt::Display for TrialStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "trials: {}", self.trials)?;
        writeln!(f, "best cost found: {}", self.min_best_cost)?;
        writeln!(f, "total time: {:?}", self.total_time)?;
        writeln!(f, "mean time: {:?}", self.mean_time)?;
        writeln!(
            f,
            "mean best cost: {} (std {})",
            self.mean_best_cost, self.std_best_cost
        )?;
        write!(f, "mean evaluations: {}", self.mean_evaluations)?;
        if let Some(t) = self.mean_final_temperature {
            write!(f, "\nmean final temperature: {t}")?;
        }
        Ok(())
    }
}

/// Runs a batch of independent searches.
pub struct TrialRunner;

impl TrialRunner {
    /// Calls `run` once per trial with that trial's seed and aggregates the results.
    ///
    /// Runs share nothing; with `parallel` set (and the `parallel` feature
    /// enabled) they execute on the rayon pool. The first failing run
    /// aborts the batch.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_localsearch::sa::{SaConfig, SaRunner};
    /// use u_localsearch::trials::{TrialConfig, TrialRunner};
    /// use u_localsearch::FnProblem;
    ///
    /// let problem = FnProblem::new(
    ///     || 20_i64,
    ///     |&x: &i64| [x - 1, x + 1],
    ///     |&x: &i64, _: &()| (x * x) as f64,
    /// );
    /// let stats = TrialRunner::run(&TrialConfig::new(10), |seed| {
    ///     let config = SaConfig::default().with_max_evaluations(200).with_seed(seed);
    ///     SaRunner::run(&problem, &config, &())
    /// })
    /// .unwrap();
    /// assert_eq!(stats.trials, 10);
    /// assert!(stats.mean_final_temperature.is_some());
    /// ```
    pub fn run<T, E, F>(config: &TrialConfig, run: F) -> Result<TrialStats, SearchError<E>>
    where
        T: Trial,
        F: Fn(u64) -> Result<T, SearchError<E>> + Sync,
        E: Send,
    {
        config.validate()?;

        let timed = |index: usize| -> Result<TrialRecord, SearchError<E>> {
            let start = Instant::now();
            let trial = run(config.trial_seed(index))?;
            Ok(TrialRecord::from_trial(&trial, start.elapsed()))
        };

        #[cfg(feature = "parallel")]
        let records: Vec<TrialRecord> = if config.parallel {
            (0..config.trials)
                .into_par_iter()
                .map(timed)
                .collect::<Result<_, _>>()?
        } else {
            (0..config.trials).map(timed).collect::<Result<_, _>>()?
        };

        #[cfg(not(feature = "parallel"))]
        let records: Vec<TrialRecord> = (0..config.trials).map(timed).collect::<Result<_, _>>()?;

        let stats = TrialStats::from_records(&records).ok_or(crate::error::ConfigError::ZeroTrials)?;
        tracing::info!(
            event = "trials_end",
            trials = stats.trials,
            min_best_cost = stats.min_best_cost,
            mean_best_cost = stats.mean_best_cost,
            std_best_cost = stats.std_best_cost,
            mean_evaluations = stats.mean_evaluations
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FnProblem;
    use crate::error::ConfigError;
    use crate::hc::{HcConfig, HcRunner};
    use crate::sa::{SaConfig, SaRunner};
    use std::convert::Infallible;

    struct Fixed {
        evaluations: usize,
        cost: f64,
    }

    impl Trial for Fixed {
        fn evaluations(&self) -> usize {
            self.evaluations
        }

        fn best_cost(&self) -> f64 {
            self.cost
        }
    }

    fn record(evaluations: usize, best_cost: f64, millis: u64) -> TrialRecord {
        TrialRecord {
            evaluations,
            best_cost,
            final_temperature: None,
            elapsed: Duration::from_millis(millis),
        }
    }

    #[test]
    fn test_stats_from_records() {
        let stats = TrialStats::from_records(&[
            record(10, 2.0, 10),
            record(20, 4.0, 20),
            record(30, 6.0, 30),
        ])
        .unwrap();

        assert_eq!(stats.trials, 3);
        assert_eq!(stats.min_best_cost, 2.0);
        assert!((stats.mean_best_cost - 4.0).abs() < 1e-12);
        assert!((stats.std_best_cost - 2.0).abs() < 1e-12);
        assert!((stats.mean_evaluations - 20.0).abs() < 1e-12);
        assert_eq!(stats.total_time, Duration::from_millis(60));
        assert_eq!(stats.mean_time, Duration::from_millis(20));
        assert!(stats.mean_final_temperature.is_none());
    }

    #[test]
    fn test_stats_single_and_empty() {
        let stats = TrialStats::from_records(&[record(5, 1.5, 1)]).unwrap();
        assert_eq!(stats.std_best_cost, 0.0);
        assert!(TrialStats::from_records(&[]).is_none());
    }

    #[test]
    fn test_runner_passes_distinct_seeds() {
        let config = TrialConfig::new(4).with_seed(9);
        let stats = TrialRunner::run(&config, |seed| {
            Ok::<_, SearchError<Infallible>>(Fixed {
                evaluations: 1,
                cost: (seed % 1_000) as f64,
            })
        })
        .unwrap();

        let expected: Vec<f64> = (0..4).map(|i| (config.trial_seed(i) % 1_000) as f64).collect();
        let min = expected.iter().copied().fold(f64::INFINITY, f64::min);
        assert_eq!(stats.min_best_cost, min);
    }

    #[test]
    fn test_runner_zero_trials() {
        let err = TrialRunner::run(&TrialConfig::new(0), |_| {
            Ok::<_, SearchError<Infallible>>(Fixed {
                evaluations: 1,
                cost: 0.0,
            })
        })
        .unwrap_err();
        assert!(matches!(err, SearchError::Config(ConfigError::ZeroTrials)));
    }

    #[test]
    fn test_runner_propagates_failure() {
        let err = TrialRunner::run(&TrialConfig::new(3), |_| {
            HcRunner::run(
                &FnProblem::new(|| 0_i32, |_: &i32| None, |&x: &i32, _: &()| x as f64),
                &HcConfig::default().with_max_evaluations(0),
                &(),
            )
        })
        .unwrap_err();
        assert!(matches!(err, SearchError::Config(ConfigError::ZeroEvaluations)));
    }

    #[test]
    fn test_annealing_batch_is_reproducible() {
        let problem = FnProblem::new(
            || 30_i64,
            |&x: &i64| [x - 2, x + 1, x - 1],
            |&x: &i64, _: &()| ((x * 7) % 13) as f64,
        );
        let batch = |parallel: bool| {
            let config = TrialConfig::new(8).with_seed(5).with_parallel(parallel);
            TrialRunner::run(&config, |seed| {
                let sa = SaConfig::default().with_max_evaluations(150).with_seed(seed);
                SaRunner::run(&problem, &sa, &())
            })
            .unwrap()
        };

        let a = batch(false);
        let b = batch(true);
        assert_eq!(a.min_best_cost, b.min_best_cost);
        assert_eq!(a.mean_best_cost, b.mean_best_cost);
        assert_eq!(a.mean_evaluations, b.mean_evaluations);
        assert_eq!(a.mean_final_temperature, b.mean_final_temperature);
        assert_eq!(a.mean_evaluations, 150.0);
    }

    #[test]
    fn test_display_mentions_temperature_only_for_annealing() {
        let mut r = record(10, 1.0, 5);
        let plain = TrialStats::from_records(&[r]).unwrap().to_string();
        assert!(!plain.contains("temperature"));

        r.final_temperature = Some(0.5);
        let annealed = TrialStats::from_records(&[r]).unwrap().to_string();
        assert!(annealed.contains("mean final temperature: 0.5"));
    }
}
