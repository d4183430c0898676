//! SA configuration.

use crate::error::ConfigError;

/// Configuration for the Simulated Annealing algorithm.
///
/// Temperatures follow the geometric (Kirkpatrick) schedule
/// `T_k = start_temperature * alpha^k`, one step per neighbor pass.
///
/// # Examples
///
/// ```
/// use u_localsearch::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_max_evaluations(5_000)
///     .with_start_temperature(100.0)
///     .with_alpha(0.98)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Maximum number of objective evaluations, the initial one included.
    ///
    /// This is the only stopping rule: annealing never gives up for lack
    /// of improving moves.
    pub max_evaluations: usize,

    /// Initial temperature. Higher values accept more uphill moves early on.
    pub start_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    ///
    /// Typical `alpha`: 0.9–0.99.
    pub alpha: f64,

    /// Bound forwarded to the neighbor validator.
    pub delta_max: u32,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            max_evaluations: 100,
            start_temperature: 100.0,
            alpha: 0.95,
            delta_max: 3,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_max_evaluations(mut self, n: usize) -> Self {
        self.max_evaluations = n;
        self
    }

    pub fn with_start_temperature(mut self, t: f64) -> Self {
        self.start_temperature = t;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_delta_max(mut self, delta_max: u32) -> Self {
        self.delta_max = delta_max;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_evaluations == 0 {
            return Err(ConfigError::ZeroEvaluations);
        }
        if !(self.start_temperature > 0.0 && self.start_temperature.is_finite()) {
            return Err(ConfigError::InvalidStartTemperature(self.start_temperature));
        }
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(ConfigError::InvalidAlpha(self.alpha));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert_eq!(config.max_evaluations, 100);
        assert!((config.start_temperature - 100.0).abs() < 1e-10);
        assert!((config.alpha - 0.95).abs() < 1e-10);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(SaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        for t in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = SaConfig::default().with_start_temperature(t);
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidStartTemperature(_))),
                "temperature {t} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_bad_alpha() {
        for alpha in [0.0, 1.0, 1.5, -0.2, f64::NAN] {
            let config = SaConfig::default().with_alpha(alpha);
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidAlpha(_))),
                "alpha {alpha} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_zero_evaluations() {
        let config = SaConfig::default().with_max_evaluations(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroEvaluations));
    }
}
