//! Budgeted local search over user-defined solution spaces.
//!
//! Provides generic implementations of single-solution trajectory searches:
//!
//! - **Hill Climbing (HC)**: First-improvement descent, optionally restarted
//!   from fresh initial solutions under a shared budget.
//! - **Simulated Annealing (SA)**: Metropolis acceptance with a geometric
//!   cooling schedule.
//! - **Tabu Search (TS)**: Strict-improvement descent that never adopts a
//!   solution twice.
//! - **Trials**: Repeated independent runs with summary statistics.
//!
//! Every search minimizes. The caller supplies the solution space through
//! [`LocalSearchProblem`] (or the closure adapter [`FnProblem`]): an initial
//! solution, a lazy move operator, an objective and an optional neighbor
//! validator bounded by `delta_max`. The only stopping currency is the
//! number of objective evaluations.
//!
//! # Example
//!
//! ```
//! use u_localsearch::hc::{HcConfig, HcRunner};
//! use u_localsearch::FnProblem;
//!
//! // Maximize i on 0..=100 by minimizing -i.
//! let problem = FnProblem::new(
//!     || 0_u32,
//!     |&i: &u32| (i < 100).then(|| i + 1),
//!     |&i: &u32, _: &()| -(i as f64),
//! );
//! let result = HcRunner::run(&problem, &HcConfig::default().with_max_evaluations(1000), &())
//!     .unwrap();
//! assert_eq!(result.best, 100);
//! ```

pub mod core;
pub mod error;
pub mod hc;
pub mod random;
pub mod sa;
pub mod tabu;
pub mod trials;

pub use crate::core::{Algorithm, FnProblem, LocalSearchProblem, SearchMonitor, Termination};
pub use error::{ConfigError, SearchError};
