//! Tabu Search configuration.

use crate::error::ConfigError;

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_localsearch::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_evaluations(1000)
///     .with_delta_max(2);
/// assert_eq!(config.max_evaluations, 1000);
/// assert_eq!(config.delta_max, 2);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Maximum number of objective evaluations, the initial one included.
    pub max_evaluations: usize,
    /// Bound forwarded to the neighbor validator.
    pub delta_max: u32,
    /// Random seed for the initial solution (None for random).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_evaluations: 100,
            delta_max: 3,
            seed: None,
        }
    }
}

impl TabuConfig {
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
