//! Hill climbing configuration.

use crate::error::ConfigError;

/// Configuration parameters for Hill Climbing.
///
/// # Examples
///
/// ```
/// use u_localsearch::hc::HcConfig;
///
/// let config = HcConfig::default()
///     .with_max_evaluations(1000)
///     .with_delta_max(3)
///     .with_seed(7);
/// assert_eq!(config.max_evaluations, 1000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HcConfig {
    /// Maximum number of objective evaluations, the initial one included.
    pub max_evaluations: usize,
    /// Bound forwarded to the neighbor validator.
    pub delta_max: u32,
    /// Seed for the RNG handed to `initial_solution` (None for random).
    pub seed: Option<u64>,
}

impl Default for HcConfig {
    fn default() -> Self {
        Self {
            max_evaluations: 100,
            delta_max: 3,
            seed: None,
        }
    }
}

impl HcConfig {
    /// Sets the evaluation budget.
    pub fn with_max_evaluations(mut self, n: usize) -> Self {
        self.max_evaluations = n;
        self
    }

    /// Sets the validator bound.
    pub fn with_delta_max(mut self, delta_max: u32) -> Self {
        self.delta_max = delta_max;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_evaluations == 0 {
            return Err(ConfigError::ZeroEvaluations);
        }
        Ok(())
    }
}

/// How long Hill Climbing with Restart keeps starting new rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RestartBudget {
    /// Run exactly this many rounds, each with the full per-round budget.
    Rounds(usize),
    /// Share this many evaluations across rounds. The last round gets
    /// whatever is left, capped by the per-round budget.
    Evaluations(usize),
}

/// Configuration for Hill Climbing with Restart.
///
/// # Examples
///
/// ```
/// use u_localsearch::hc::{HcConfig, RestartBudget, RestartConfig};
///
/// let config = RestartConfig::new(HcConfig::default().with_max_evaluations(200))
///     .with_budget(RestartBudget::Evaluations(5_000));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestartConfig {
    /// Per-round settings. `max_evaluations` bounds every single round.
    pub hill_climb: HcConfig,
    /// When to stop starting new rounds.
    pub budget: RestartBudget,
}

impl Default for RestartConfig {
    fn default() -> Self {
        Self::new(HcConfig::default())
    }
}

impl RestartConfig {
    /// Ten rounds of `hill_climb`.
    pub fn new(hill_climb: HcConfig) -> Self {
        Self {
            hill_climb,
            budget: RestartBudget::Rounds(10),
        }
    }

    /// Sets the restart budget.
    pub fn with_budget(mut self, budget: RestartBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.hill_climb.validate()?;
        match self.budget {
            RestartBudget::Rounds(0) | RestartBudget::Evaluations(0) => {
                Err(ConfigError::EmptyRestartBudget)
            }
            _ => Ok(()),
        }
    }
}
