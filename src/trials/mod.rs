//! Repeated independent runs.
//!
//! Stochastic searches are judged over many runs, not one. [`TrialRunner`]
//! calls a run closure once per trial with a distinct derived seed, times
//! each call, and condenses the results into [`TrialStats`].

mod config;
mod runner;

pub use config::TrialConfig;
pub use runner::{Trial, TrialRecord, TrialRunner, TrialStats};
