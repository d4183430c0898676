//! Evaluation budget accounting.

/// Counts objective evaluations against a fixed maximum.
///
/// The counter only moves when an evaluation has actually happened, so
/// [`used`](Self::used) never exceeds the maximum and never includes a
/// candidate that was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationBudget {
    used: usize,
    max: usize,
}

impl EvaluationBudget {
    pub fn new(max: usize) -> Self {
        Self { used: 0, max }
    }

    /// Records one evaluation.
    pub fn consume(&mut self) {
        debug_assert!(self.used < self.max, "evaluation past budget");
        self.used += 1;
    }

    pub fn is_exhausted(&self) -> bool {
        self.used >= self.max
    }

    pub fn used(&self) -> usize {
        self.used
    }

    pub fn remaining(&self) -> usize {
        self.max.saturating_sub(self.used)
    }
}
