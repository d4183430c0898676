//! Building blocks shared by all local search strategies.
//!
//! - [`LocalSearchProblem`]: the collaborators a search consumes
//! - [`TrackedObjective`]: objective evaluation with best-so-far memory
//! - [`EvaluationBudget`]: evaluation counting
//! - [`SearchMonitor`]: injected diagnostics sink

mod budget;
pub(crate) mod driver;
mod monitor;
mod objective;
mod types;

pub use budget::EvaluationBudget;
pub use monitor::{EventLog, NoOpMonitor, SearchEvent, SearchMonitor, TracingMonitor};
pub use objective::TrackedObjective;
pub use types::{AcceptAll, Algorithm, FnProblem, LocalSearchProblem, Termination};
