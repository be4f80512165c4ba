//! Search configuration.

use crate::error::ConfigError;

/// Configuration for a search run or an evaluation over many boards.
///
/// # Examples
///
/// ```
/// use hillclimb::search::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_max_steps(200)
///     .with_seed(42);
/// assert_eq!(config.max_steps, 200);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Maximum number of strategy steps before the run is declared
    /// exhausted.
    pub max_steps: usize,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,

    /// Whether to evaluate independent boards in parallel using rayon.
    ///
    /// Requires the `parallel` feature. A single search is always
    /// sequential.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_steps: 500_000,
            seed: None,
            parallel: false,
        }
    }
}

impl SearchConfig {
    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.parallel && !cfg!(feature = "parallel") {
            return Err(ConfigError::Invalid(
                "parallel evaluation requires the `parallel` feature".into(),
            ));
        }
        Ok(())
    }
}
