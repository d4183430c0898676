//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Generate the initial solution and make it tabu
//! 2. At each step, walk the neighbors of the current solution and move to
//!    the first one that is strictly better and not tabu
//! 3. Make the adopted solution tabu
//! 4. Terminate when the budget is spent or a full pass finds no admissible move
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search, Part I", *ORSA Journal on Computing* 1(3), 190-206.

use super::config::TabuConfig;
use super::types::TabuList;
use crate::core::driver::{drive, Limits, MovePolicy};
use crate::core::{Algorithm, LocalSearchProblem, SearchMonitor, Termination, TracingMonitor};
use crate::error::SearchError;
use crate::random::rng_from;

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
pub struct TabuResult<S> {
    /// Best solution found.
    pub best: S,
    /// Cost of the best solution.
    pub best_cost: f64,
    /// Objective evaluations performed, the initial one included.
    pub evaluations: usize,
    /// Number of moves made.
    pub moves: usize,
    /// Final size of the tabu list (initial solution included).
    pub tabu_len: usize,
    /// Whether the budget ran out or the search ran out of admissible moves.
    pub termination: Termination,
}

/// Strict improvement restricted to solutions never adopted before.
struct TabuPolicy<S> {
    tabu: TabuList<S>,
}

impl<S: Clone + PartialEq> MovePolicy<S> for TabuPolicy<S> {
    fn algorithm(&self) -> Algorithm {
        Algorithm::TabuSearch
    }

    fn accept(&mut self, current_score: f64, candidate: &S, candidate_score: f64) -> bool {
        candidate_score < current_score && !self.tabu.contains(candidate)
    }

    fn on_move(&mut self, current: &S) {
        self.tabu.push(current.clone());
    }

    fn continue_after_rejection(&self, _candidates: usize) -> bool {
        false
    }
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search on the given problem, logging through `tracing`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_localsearch::tabu::{TabuConfig, TabuRunner};
    /// use u_localsearch::FnProblem;
    ///
    /// let problem = FnProblem::new(
    ///     || vec![3, 1, 2, 0],
    ///     |perm: &Vec<u8>| {
    ///         let perm = perm.clone();
    ///         (0..perm.len()).flat_map(move |i| {
    ///             let perm = perm.clone();
    ///             (i + 1..perm.len()).map(move |j| {
    ///                 let mut next = perm.clone();
    ///                 next.swap(i, j);
    ///                 next
    ///             })
    ///         })
    ///     },
    ///     |perm: &Vec<u8>, _: &()| {
    ///         perm.iter().enumerate().filter(|&(i, &v)| i != v as usize).count() as f64
    ///     },
    /// );
    /// let result = TabuRunner::run(&problem, &TabuConfig::default(), &()).unwrap();
    /// assert_eq!(result.best, vec![0, 1, 2, 3]);
    /// ```
    pub fn run<P: LocalSearchProblem>(
        problem: &P,
        config: &TabuConfig,
        params: &P::Params,
    ) -> Result<TabuResult<P::Solution>, SearchError<P::Error>> {
        Self::run_with_monitor(problem, config, params, &mut TracingMonitor)
    }

    /// Executes Tabu Search, reporting to `monitor`.
    pub fn run_with_monitor<P, M>(
        problem: &P,
        config: &TabuConfig,
        params: &P::Params,
        monitor: &mut M,
    ) -> Result<TabuResult<P::Solution>, SearchError<P::Error>>
    where
        P: LocalSearchProblem,
        M: SearchMonitor,
    {
        config.validate()?;
        let mut rng = rng_from(config.seed);

        let initial = problem
            .initial_solution(&mut rng)
            .map_err(SearchError::Problem)?;
        let mut policy = TabuPolicy {
            tabu: TabuList::new(),
        };
        let outcome = drive(
            problem,
            params,
            initial,
            Limits {
                max_evaluations: config.max_evaluations,
                delta_max: config.delta_max,
            },
            &mut policy,
            monitor,
        )
        .map_err(SearchError::Problem)?;

        if outcome.termination == Termination::Stalled {
            tracing::debug!(
                evaluations = outcome.evaluations,
                "tabu search ran out of admissible moves before its budget"
            );
        }

        Ok(TabuResult {
            best: outcome.best,
            best_cost: outcome.best_score,
            evaluations: outcome.evaluations,
            moves: outcome.moves,
            tabu_len: policy.tabu.len(),
            termination: outcome.termination,
        })
    }
}
