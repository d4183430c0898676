//! Hill Climbing (HC), with and without random restart.
//!
//! A greedy single-solution trajectory method: move to the first neighbor
//! that is at least as good as the current solution, and stop at a local
//! optimum. The restart variant reruns the climb from fresh starting
//! solutions to escape that optimum.
//!
//! # References
//!
//! - Russell, S. & Norvig, P. (2010). *Artificial Intelligence: A Modern
//!   Approach*, 3rd ed., §4.1.1 "Hill-climbing search".

mod config;
mod runner;

pub use config::{HcConfig, RestartBudget, RestartConfig};
pub use runner::{HcResult, HcRunner, RestartResult};
