//! Error types shared by every search entry point.

use thiserror::Error;

/// A search parameter that violates its documented range.
///
/// These are caller errors: runners validate their configuration before
/// touching the problem and fail fast instead of running a degenerate
/// search.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The evaluation budget must allow at least the initial evaluation.
    #[error("max_evaluations must be at least 1")]
    ZeroEvaluations,

    /// The geometric cooling factor must lie strictly inside (0, 1).
    #[error("alpha must be in (0, 1), got {0}")]
    InvalidAlpha(f64),

    /// The starting temperature must be a positive finite number.
    #[error("start_temperature must be positive and finite, got {0}")]
    InvalidStartTemperature(f64),

    /// A restart budget must allow at least one round.
    #[error("restart budget must allow at least one round")]
    EmptyRestartBudget,

    /// A trial batch must contain at least one trial.
    #[error("at least one trial is required")]
    ZeroTrials,
}

/// Failure of a search invocation.
///
/// Errors raised by the problem (initial solution, move operator or
/// objective) are never retried and come back untouched in
/// [`SearchError::Problem`].
#[derive(Debug, Error)]
pub enum SearchError<E> {
    /// The configuration was rejected before the search started.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The problem's own collaborator failed.
    #[error(transparent)]
    Problem(E),
}

impl<E> SearchError<E> {
    /// Returns the problem error, if this is one.
    pub fn into_problem(self) -> Option<E> {
        match self {
            SearchError::Problem(e) => Some(e),
            SearchError::Config(_) => None,
        }
    }
}
