//! Tabu Search (TS).
//!
//! A single-solution trajectory metaheuristic that remembers every solution
//! it has adopted (the tabu list) and refuses to adopt any of them again.
//! Moves must strictly improve the current score, so the search can run out
//! of admissible moves before its budget; that is a normal way to finish.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search, Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search, Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod runner;
mod types;

pub use config::TabuConfig;
pub use runner::{TabuResult, TabuRunner};
pub use types::TabuList;
