//! Trial batch configuration.

use crate::error::ConfigError;

/// Configuration for a batch of independent search runs.
///
/// # Examples
///
/// ```
/// use u_localsearch::trials::TrialConfig;
///
/// let config = TrialConfig::new(100).with_seed(7).with_parallel(true);
/// assert_eq!(config.trials, 100);
/// assert_ne!(config.trial_seed(0), config.trial_seed(1));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialConfig {
    /// Number of independent runs.
    pub trials: usize,

    /// Base seed. Trial `i` receives [`trial_seed(i)`](Self::trial_seed).
    pub seed: u64,

    /// Whether to run trials in parallel using rayon.
    ///
    /// Only honored when the `parallel` feature is enabled.
    pub parallel: bool,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self::new(100)
    }
}

impl TrialConfig {
    pub fn new(trials: usize) -> Self {
        Self {
            trials,
            seed: 42,
            parallel: false,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Seed for trial `index`. Distinct indices give unrelated streams.
    pub fn trial_seed(&self, index: usize) -> u64 {
        // SplitMix64 finalizer over base + golden-ratio stride.
        let mut z = self
            .seed
            .wrapping_add((index as u64).wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trials == 0 {
            return Err(ConfigError::ZeroTrials);
        }
        Ok(())
    }
}
