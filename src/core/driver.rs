//! The control loop shared by every local search strategy.
//!
//! # Algorithm
//!
//! 1. Evaluate the initial solution (first unit of budget)
//! 2. Pull validated neighbors of the current solution one at a time:
//!    a. Stop immediately if the budget is spent
//!    b. Evaluate the neighbor and ask the policy whether to move
//!    c. On a move, drop the rest of the neighborhood and start over
//! 3. After a pass without a move, the policy decides whether to go on
//! 4. Report the best solution the objective ever saw, which need not be
//!    the final current solution

use super::budget::EvaluationBudget;
use super::monitor::{SearchEvent, SearchMonitor};
use super::objective::TrackedObjective;
use super::types::{Algorithm, LocalSearchProblem, Termination};

/// Acceptance and continuation rules plugged into [`drive`].
pub(crate) trait MovePolicy<S> {
    fn algorithm(&self) -> Algorithm;

    /// Decides whether to adopt an evaluated candidate.
    fn accept(&mut self, current_score: f64, candidate: &S, candidate_score: f64) -> bool;

    /// Called with the initial solution and with every adopted candidate.
    fn on_move(&mut self, _current: &S) {}

    /// Called after every pass that the budget did not cut short.
    fn end_pass<M: SearchMonitor>(&mut self, _monitor: &mut M) {}

    /// Whether a pass that evaluated `candidates` neighbors without moving
    /// should be followed by another pass from the same solution.
    fn continue_after_rejection(&self, candidates: usize) -> bool;
}

/// Budget and validator bounds for one run of the loop.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Limits {
    pub max_evaluations: usize,
    pub delta_max: u32,
}

#[derive(Debug, Clone)]
pub(crate) struct DriveOutcome<S> {
    pub best: S,
    pub best_score: f64,
    pub evaluations: usize,
    pub moves: usize,
    pub termination: Termination,
}

/// Runs one local search from `initial` until the budget is spent or the
/// policy gives up.
pub(crate) fn drive<P, A, M>(
    problem: &P,
    params: &P::Params,
    initial: P::Solution,
    limits: Limits,
    policy: &mut A,
    monitor: &mut M,
) -> Result<DriveOutcome<P::Solution>, P::Error>
where
    P: LocalSearchProblem,
    A: MovePolicy<P::Solution>,
    M: SearchMonitor,
{
    let algorithm = policy.algorithm();
    let mut objective = TrackedObjective::new(problem);
    let mut budget = EvaluationBudget::new(limits.max_evaluations);

    let mut current_score = objective.evaluate(&initial, params)?;
    budget.consume();
    policy.on_move(&initial);
    let mut current = initial;
    let mut moves = 0usize;
    monitor.record(&SearchEvent::Started {
        algorithm,
        score: current_score,
    });

    let termination = loop {
        if budget.is_exhausted() {
            break Termination::BudgetExhausted;
        }

        let mut candidates = 0usize;
        let mut cut_short = false;
        let mut accepted = None;
        let neighbors = problem
            .neighbors(&current)?
            .filter(|candidate| problem.is_valid(candidate, limits.delta_max));

        for candidate in neighbors {
            if budget.is_exhausted() {
                cut_short = true;
                break;
            }
            let improvements = objective.improvements();
            let score = objective.evaluate(&candidate, params)?;
            budget.consume();
            candidates += 1;
            if objective.improvements() > improvements {
                monitor.record(&SearchEvent::NewBest {
                    evaluations: budget.used(),
                    score,
                });
            }
            if policy.accept(current_score, &candidate, score) {
                accepted = Some((candidate, score));
                break;
            }
        }

        if cut_short {
            break Termination::BudgetExhausted;
        }
        match accepted {
            Some((next, next_score)) => {
                policy.on_move(&next);
                current = next;
                current_score = next_score;
                moves += 1;
                monitor.record(&SearchEvent::Moved {
                    evaluations: budget.used(),
                    score: current_score,
                });
            }
            None if !policy.continue_after_rejection(candidates) => {
                break Termination::Stalled;
            }
            None => {}
        }
        policy.end_pass(monitor);
    };

    let evaluations = budget.used();
    let (best, best_score) = objective
        .into_best()
        .unwrap_or((current, current_score));
    monitor.record(&SearchEvent::Finished {
        algorithm,
        evaluations,
        best_score,
        termination,
    });

    Ok(DriveOutcome {
        best,
        best_score,
        evaluations,
        moves,
        termination,
    })
}
