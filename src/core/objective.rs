//! Objective evaluation with best-so-far tracking.

use super::types::LocalSearchProblem;

/// Wraps a problem's objective and remembers the best solution it has scored.
///
/// After any call, if a best is recorded then its score is the lowest score
/// ever returned, and it is the first solution that reached that score.
/// The tracked best is only updated by [`evaluate`](Self::evaluate).
pub struct TrackedObjective<'p, P: LocalSearchProblem> {
    problem: &'p P,
    best: Option<(P::Solution, f64)>,
    improvements: usize,
}

impl<'p, P: LocalSearchProblem> TrackedObjective<'p, P> {
    pub fn new(problem: &'p P) -> Self {
        Self {
            problem,
            best: None,
            improvements: 0,
        }
    }

    /// Scores `solution` and records it if it beats the best strictly.
    ///
    /// The score is returned whether or not the best changed. Objective
    /// failures propagate and leave the tracked best untouched.
    pub fn evaluate(
        &mut self,
        solution: &P::Solution,
        params: &P::Params,
    ) -> Result<f64, P::Error> {
        let score = self.problem.cost(solution, params)?;
        let improved = match &self.best {
            None => true,
            Some((_, best_score)) => score < *best_score,
        };
        if improved {
            self.best = Some((solution.clone(), score));
            self.improvements += 1;
        }
        Ok(score)
    }

    pub fn best(&self) -> Option<&P::Solution> {
        self.best.as_ref().map(|(s, _)| s)
    }

    pub fn best_score(&self) -> Option<f64> {
        self.best.as_ref().map(|&(_, score)| score)
    }

    /// Number of times the best was replaced (the first evaluation counts).
    pub fn improvements(&self) -> usize {
        self.improvements
    }

    pub fn into_best(self) -> Option<(P::Solution, f64)> {
        self.best
    }
}
