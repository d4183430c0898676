//! Hill climbing execution.
//!
//! # Algorithm
//!
//! 1. Generate and evaluate an initial solution
//! 2. Walk the neighbors of the current solution in order and move to the
//!    first one that is at least as good (first improvement)
//! 3. Stop when a full pass finds no such neighbor or the budget is spent
//!
//! The restart variant repeats this from fresh initial solutions and keeps
//! the best result across rounds.

use super::config::{HcConfig, RestartBudget, RestartConfig};
use crate::core::driver::{drive, Limits, MovePolicy};
use crate::core::{
    Algorithm, LocalSearchProblem, SearchEvent, SearchMonitor, Termination, TracingMonitor,
};
use crate::error::{ConfigError, SearchError};
use crate::random::rng_from;

/// Result of a Hill Climbing run.
#[derive(Debug, Clone)]
pub struct HcResult<S> {
    /// Best solution found.
    pub best: S,
    /// Cost of the best solution.
    pub best_cost: f64,
    /// Objective evaluations performed, the initial one included.
    pub evaluations: usize,
    /// Number of moves made.
    pub moves: usize,
    /// Why the climb stopped.
    pub termination: Termination,
}

/// Result of Hill Climbing with Restart.
#[derive(Debug, Clone)]
pub struct RestartResult<S> {
    /// Best solution over all rounds.
    pub best: S,
    /// Cost of the best solution.
    pub best_cost: f64,
    /// Objective evaluations summed over all rounds.
    pub evaluations: usize,
    /// Number of rounds run.
    pub rounds: usize,
    /// Round (0-based) that produced the best solution.
    pub best_round: usize,
}

/// Accepts the first neighbor that does not worsen the current score.
pub(crate) struct FirstImprovement;

impl<S> MovePolicy<S> for FirstImprovement {
    fn algorithm(&self) -> Algorithm {
        Algorithm::HillClimbing
    }

    fn accept(&mut self, current_score: f64, _candidate: &S, candidate_score: f64) -> bool {
        candidate_score <= current_score
    }

    fn continue_after_rejection(&self, _candidates: usize) -> bool {
        false
    }
}

/// Hill Climbing runner.
pub struct HcRunner;

impl HcRunner {
    /// Runs hill climbing, logging through `tracing`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_localsearch::hc::{HcConfig, HcRunner};
    /// use u_localsearch::FnProblem;
    ///
    /// // Minimize (x - 7)^2 with unit steps.
    /// let problem = FnProblem::new(
    ///     || 30_i64,
    ///     |&x: &i64| [x - 1, x + 1],
    ///     |&x: &i64, _: &()| ((x - 7) * (x - 7)) as f64,
    /// );
    /// let result = HcRunner::run(&problem, &HcConfig::default(), &()).unwrap();
    /// assert_eq!(result.best, 7);
    /// ```
    pub fn run<P: LocalSearchProblem>(
        problem: &P,
        config: &HcConfig,
        params: &P::Params,
    ) -> Result<HcResult<P::Solution>, SearchError<P::Error>> {
        Self::run_with_monitor(problem, config, params, &mut TracingMonitor)
    }

    /// Runs hill climbing, reporting to `monitor`.
    pub fn run_with_monitor<P, M>(
        problem: &P,
        config: &HcConfig,
        params: &P::Params,
        monitor: &mut M,
    ) -> Result<HcResult<P::Solution>, SearchError<P::Error>>
    where
        P: LocalSearchProblem,
        M: SearchMonitor,
    {
        config.validate()?;
        let mut rng = rng_from(config.seed);

        let initial = problem
            .initial_solution(&mut rng)
            .map_err(SearchError::Problem)?;
        let outcome = drive(
            problem,
            params,
            initial,
            limits(config, config.max_evaluations),
            &mut FirstImprovement,
            monitor,
        )
        .map_err(SearchError::Problem)?;

        Ok(HcResult {
            best: outcome.best,
            best_cost: outcome.best_score,
            evaluations: outcome.evaluations,
            moves: outcome.moves,
            termination: outcome.termination,
        })
    }

    /// Runs Hill Climbing with Restart, logging through `tracing`.
    pub fn run_with_restart<P: LocalSearchProblem>(
        problem: &P,
        config: &RestartConfig,
        params: &P::Params,
    ) -> Result<RestartResult<P::Solution>, SearchError<P::Error>> {
        Self::run_with_restart_and_monitor(problem, config, params, &mut TracingMonitor)
    }

    /// Runs Hill Climbing with Restart, reporting to `monitor`.
    ///
    /// Every round starts from a fresh `initial_solution` and owns its own
    /// objective tracking. Only the best-of-all-rounds comparison carries
    /// over; ties keep the earlier round.
    pub fn run_with_restart_and_monitor<P, M>(
        problem: &P,
        config: &RestartConfig,
        params: &P::Params,
        monitor: &mut M,
    ) -> Result<RestartResult<P::Solution>, SearchError<P::Error>>
    where
        P: LocalSearchProblem,
        M: SearchMonitor,
    {
        config.validate()?;
        let hc = &config.hill_climb;
        let mut rng = rng_from(hc.seed);

        let mut best = None::<(P::Solution, f64, usize)>;
        let mut evaluations = 0usize;
        let mut rounds = 0usize;

        while let Some(round_budget) = next_round_budget(config, rounds, evaluations) {
            let initial = problem
                .initial_solution(&mut rng)
                .map_err(SearchError::Problem)?;
            let outcome = drive(
                problem,
                params,
                initial,
                limits(hc, round_budget),
                &mut FirstImprovement,
                monitor,
            )
            .map_err(SearchError::Problem)?;

            evaluations += outcome.evaluations;
            let improved = best
                .as_ref()
                .is_none_or(|&(_, best_cost, _)| outcome.best_score < best_cost);
            if improved {
                best = Some((outcome.best, outcome.best_score, rounds));
            }
            monitor.record(&SearchEvent::RoundFinished {
                round: rounds,
                evaluations: outcome.evaluations,
                best_score: outcome.best_score,
            });
            rounds += 1;
        }

        // validate() guarantees at least one round ran.
        let (best, best_cost, best_round) = best.ok_or(ConfigError::EmptyRestartBudget)?;
        monitor.record(&SearchEvent::Finished {
            algorithm: Algorithm::HillClimbingRestart,
            evaluations,
            best_score: best_cost,
            termination: Termination::RestartsExhausted,
        });

        Ok(RestartResult {
            best,
            best_cost,
            evaluations,
            rounds,
            best_round,
        })
    }
}

fn limits(config: &HcConfig, max_evaluations: usize) -> Limits {
    Limits {
        max_evaluations,
        delta_max: config.delta_max,
    }
}

/// Evaluation budget for the next round, or `None` once restarts are spent.
fn next_round_budget(config: &RestartConfig, rounds: usize, used: usize) -> Option<usize> {
    let per_round = config.hill_climb.max_evaluations;
    match config.budget {
        RestartBudget::Rounds(n) => (rounds < n).then_some(per_round),
        RestartBudget::Evaluations(total) => {
            let remaining = total.saturating_sub(used);
            (remaining > 0).then_some(remaining.min(per_round))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EventLog, FnProblem, NoOpMonitor};
    use rand::Rng;
    use std::cell::Cell;

    /// `objective(i) = -i`, `move(i) = [i + 1]`, `init() = 1`: every move improves.
    fn counting_up() -> impl LocalSearchProblem<Solution = i64, Params = ()> {
        FnProblem::new(
            || 1_i64,
            |&i: &i64| std::iter::once(i + 1),
            |&i: &i64, _: &()| -(i as f64),
        )
    }

    #[test]
    fn test_simple_hillclimb_spends_budget() {
        let max_evaluations = 250;
        let config = HcConfig::default().with_max_evaluations(max_evaluations);
        let result = HcRunner::run(&counting_up(), &config, &()).unwrap();

        assert_eq!(result.evaluations, max_evaluations);
        assert_eq!(result.best, max_evaluations as i64);
        assert_eq!(result.best_cost, -(max_evaluations as f64));
        assert_eq!(result.termination, Termination::BudgetExhausted);
    }

    #[test]
    fn test_peak_hillclimb_stops_at_peak() {
        let problem = FnProblem::new(
            || 1_i64,
            |&i: &i64| if i < 100 { Some(i + 1) } else { None },
            |&i: &i64, _: &()| -(i as f64),
        );

        for max_evaluations in [100, 101, 500, 10_000] {
            let config = HcConfig::default().with_max_evaluations(max_evaluations);
            let result = HcRunner::run(&problem, &config, &()).unwrap();

            assert!(result.evaluations <= max_evaluations);
            assert_eq!(result.evaluations, 100);
            assert_eq!(result.best, 100);
            assert_eq!(result.best_cost, -100.0);
        }
    }

    #[test]
    fn test_peak_termination_reason() {
        let problem = FnProblem::new(
            || 1_i64,
            |&i: &i64| if i < 100 { Some(i + 1) } else { None },
            |&i: &i64, _: &()| -(i as f64),
        );
        let config = HcConfig::default().with_max_evaluations(1_000);
        let result = HcRunner::run(&problem, &config, &()).unwrap();
        assert_eq!(result.termination, Termination::Stalled);
        assert_eq!(result.moves, 99);
    }

    #[test]
    fn test_accepts_equal_scores() {
        // A plateau: every neighbor scores the same, so the climber keeps walking.
        let problem = FnProblem::new(|| 0_i32, |&x: &i32| [x + 1], |_: &i32, _: &()| 1.0);
        let config = HcConfig::default().with_max_evaluations(20);
        let result = HcRunner::run(&problem, &config, &()).unwrap();

        assert_eq!(result.moves, 19);
        // First found wins among equal scores.
        assert_eq!(result.best, 0);
    }

    #[test]
    fn test_first_improvement_not_best_improvement() {
        let problem = FnProblem::new(
            || 10_i32,
            |&x: &i32| vec![x - 1, x - 10],
            |&x: &i32, _: &()| x as f64,
        );
        let mut log = EventLog::new();
        let config = HcConfig::default().with_max_evaluations(3);
        let result = HcRunner::run_with_monitor(&problem, &config, &(), &mut log).unwrap();

        // 10 -> 9 (first candidate) -> 8; the -10 neighbors are never reached.
        assert_eq!(log.moves(), vec![9.0, 8.0]);
        assert_eq!(result.best, 8);
    }

    #[test]
    fn test_accepted_scores_non_increasing() {
        let problem = FnProblem::new(
            || 40_i64,
            |&x: &i64| [x + 3, x - 2, x + 1, x - 1],
            |&x: &i64, _: &()| ((x * x) % 97) as f64,
        );
        let mut log = EventLog::new();
        let config = HcConfig::default().with_max_evaluations(400);
        HcRunner::run_with_monitor(&problem, &config, &(), &mut log).unwrap();

        for pair in log.moves().windows(2) {
            assert!(pair[1] <= pair[0], "accepted scores went up: {pair:?}");
        }
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let calls = Cell::new(0);
        let problem = FnProblem::new(
            || {
                calls.set(calls.get() + 1);
                0_i32
            },
            |_: &i32| None,
            |&x: &i32, _: &()| x as f64,
        );
        let config = HcConfig::default().with_max_evaluations(0);
        let err = HcRunner::run(&problem, &config, &()).unwrap_err();

        assert!(matches!(err, SearchError::Config(ConfigError::ZeroEvaluations)));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_problem_error_propagates() {
        use std::io;

        struct BrokenMoves;

        impl LocalSearchProblem for BrokenMoves {
            type Solution = u8;
            type Params = ();
            type Error = io::Error;
            type Neighbors<'a> = std::iter::Empty<u8>;

            fn initial_solution<R: Rng>(&self, _rng: &mut R) -> io::Result<u8> {
                Ok(0)
            }

            fn neighbors<'a>(&'a self, _: &'a u8) -> io::Result<Self::Neighbors<'a>> {
                Err(io::Error::new(io::ErrorKind::InvalidData, "no moves"))
            }

            fn cost(&self, &x: &u8, _: &()) -> io::Result<f64> {
                Ok(x as f64)
            }
        }

        let err = HcRunner::run(&BrokenMoves, &HcConfig::default(), &()).unwrap_err();
        let inner = err.into_problem().unwrap();
        assert_eq!(inner.kind(), io::ErrorKind::InvalidData);
    }

    // ---- Restart ----

    /// Random start in [0, 100), climbs down by one until the nearest multiple of 10.
    struct Valleys;

    impl LocalSearchProblem for Valleys {
        type Solution = u32;
        type Params = ();
        type Error = std::convert::Infallible;
        type Neighbors<'a> = std::option::IntoIter<u32>;

        fn initial_solution<R: Rng>(&self, rng: &mut R) -> Result<u32, Self::Error> {
            Ok(rng.random_range(0..100))
        }

        fn neighbors<'a>(&'a self, &x: &'a u32) -> Result<Self::Neighbors<'a>, Self::Error> {
            Ok((x % 10 != 0).then(|| x - 1).into_iter())
        }

        fn cost(&self, &x: &u32, _: &()) -> Result<f64, Self::Error> {
            // Deeper valleys further right.
            Ok((x % 10) as f64 - (x / 10) as f64)
        }
    }

    #[test]
    fn test_restart_runs_requested_rounds() {
        let config = RestartConfig::new(HcConfig::default().with_seed(42))
            .with_budget(RestartBudget::Rounds(25));
        let mut log = EventLog::new();
        let result =
            HcRunner::run_with_restart_and_monitor(&Valleys, &config, &(), &mut log).unwrap();

        assert_eq!(result.rounds, 25);
        let round_events = log
            .events()
            .iter()
            .filter(|e| matches!(e, SearchEvent::RoundFinished { .. }))
            .count();
        assert_eq!(round_events, 25);
        assert_eq!(log.termination(), Some(Termination::RestartsExhausted));
    }

    #[test]
    fn test_restart_keeps_best_across_rounds() {
        let config = RestartConfig::new(HcConfig::default().with_seed(42))
            .with_budget(RestartBudget::Rounds(40));
        let mut log = EventLog::new();
        let result =
            HcRunner::run_with_restart_and_monitor(&Valleys, &config, &(), &mut log).unwrap();

        let round_best = log
            .events()
            .iter()
            .filter_map(|e| match *e {
                SearchEvent::RoundFinished { best_score, .. } => Some(best_score),
                _ => None,
            })
            .fold(f64::INFINITY, f64::min);
        assert_eq!(result.best_cost, round_best);
        assert_eq!(result.best % 10, 0);
    }

    #[test]
    fn test_restart_shared_evaluation_budget() {
        let config = RestartConfig::new(HcConfig::default().with_max_evaluations(7).with_seed(3))
            .with_budget(RestartBudget::Evaluations(50));
        let result = HcRunner::run_with_restart(&Valleys, &config, &()).unwrap();

        assert!(result.evaluations <= 50);
        assert!(result.rounds >= 50 / 7);
    }

    #[test]
    fn test_restart_exact_shared_budget_with_endless_climb() {
        // Every round spends its full budget, so rounds = ceil(total / per_round).
        let config = RestartConfig::new(HcConfig::default().with_max_evaluations(30))
            .with_budget(RestartBudget::Evaluations(100));
        let result = HcRunner::run_with_restart_and_monitor(
            &counting_up(),
            &config,
            &(),
            &mut NoOpMonitor,
        )
        .unwrap();

        assert_eq!(result.evaluations, 100);
        assert_eq!(result.rounds, 4);
        assert_eq!(result.best, 30);
        assert_eq!(result.best_round, 0);
    }

    #[test]
    fn test_restart_is_reproducible() {
        let config = RestartConfig::new(HcConfig::default().with_seed(9))
            .with_budget(RestartBudget::Rounds(10));
        let a = HcRunner::run_with_restart(&Valleys, &config, &()).unwrap();
        let b = HcRunner::run_with_restart(&Valleys, &config, &()).unwrap();

        assert_eq!(a.best, b.best);
        assert_eq!(a.evaluations, b.evaluations);
        assert_eq!(a.best_round, b.best_round);
    }
}
