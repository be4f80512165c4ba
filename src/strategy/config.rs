//! Simulated annealing configuration.

use crate::error::ConfigError;

/// How the temperature evolves across the steps of one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperatureSchedule {
    /// Every step starts again from the initial temperature and applies
    /// one cooling factor, so all steps of a run see the same
    /// temperature: `T = max(T0 * rate, T_min)`.
    #[default]
    PerStep,

    /// The temperature is carried between steps and cooled once per
    /// step: `T_{k+1} = max(T_k * rate, T_min)`. Reset at the start of
    /// each run.
    Continuous,
}

/// Acceptance probability for a move that does not improve fitness
/// (`delta >= 0`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Acceptance {
    /// `min(exp(delta / T), 1)`. The exponent is never negative for a
    /// non-improving move, so every sampled move is accepted.
    #[default]
    PositiveExponent,

    /// Metropolis criterion `min(exp(-delta / T), 1)`: worse moves are
    /// accepted less often as they get worse and as `T` drops.
    Metropolis,
}

impl Acceptance {
    /// Probability of accepting a move with fitness change `delta` at
    /// temperature `temperature`.
    pub fn probability(self, delta: f64, temperature: f64) -> f64 {
        let exponent = match self {
            Acceptance::PositiveExponent => delta / temperature,
            Acceptance::Metropolis => -delta / temperature,
        };
        exponent.exp().min(1.0)
    }
}

/// Configuration for [`SimulatedAnnealing`](super::SimulatedAnnealing).
///
/// # Examples
///
/// ```
/// use hillclimb::strategy::{Acceptance, AnnealingConfig, TemperatureSchedule};
///
/// let config = AnnealingConfig::default()
///     .with_cooling_rate(0.99)
///     .with_schedule(TemperatureSchedule::Continuous)
///     .with_acceptance(Acceptance::Metropolis);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealingConfig {
    /// Start temperature. `None` uses the family's size-based default
    /// (board length for the 8-puzzle, n² for n-queens).
    pub initial_temperature: Option<f64>,

    /// Geometric cooling factor in (0, 1).
    pub cooling_rate: f64,

    /// Floor the temperature never drops below.
    pub min_temperature: f64,

    pub schedule: TemperatureSchedule,

    pub acceptance: Acceptance,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: None,
            cooling_rate: 0.95,
            min_temperature: 0.02,
            schedule: TemperatureSchedule::default(),
            acceptance: Acceptance::default(),
        }
    }
}

impl AnnealingConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = Some(t);
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_schedule(mut self, schedule: TemperatureSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn with_acceptance(mut self, acceptance: Acceptance) -> Self {
        self.acceptance = acceptance;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(t) = self.initial_temperature {
            if t <= 0.0 {
                return Err(ConfigError::Invalid(
                    "initial_temperature must be positive".into(),
                ));
            }
        }
        if self.min_temperature <= 0.0 {
            return Err(ConfigError::Invalid(
                "min_temperature must be positive".into(),
            ));
        }
        if self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err(ConfigError::Invalid(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        Ok(())
    }

    /// Cools `temperature` by one step, respecting the floor.
    pub fn cool(&self, temperature: f64) -> f64 {
        (temperature * self.cooling_rate).max(self.min_temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnnealingConfig::default();
        assert!(config.initial_temperature.is_none());
        assert!((config.cooling_rate - 0.95).abs() < 1e-12);
        assert!((config.min_temperature - 0.02).abs() < 1e-12);
        assert_eq!(config.schedule, TemperatureSchedule::PerStep);
        assert_eq!(config.acceptance, Acceptance::PositiveExponent);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_rate() {
        assert!(AnnealingConfig::default()
            .with_cooling_rate(1.0)
            .validate()
            .is_err());
        assert!(AnnealingConfig::default()
            .with_cooling_rate(0.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_bad_temperatures() {
        assert!(AnnealingConfig::default()
            .with_initial_temperature(0.0)
            .validate()
            .is_err());
        assert!(AnnealingConfig::default()
            .with_min_temperature(-1.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_cool_respects_floor() {
        let config = AnnealingConfig::default();
        assert!((config.cool(9.0) - 8.55).abs() < 1e-12);
        assert!((config.cool(0.01) - 0.02).abs() < 1e-12);
    }

    #[test]
    fn test_acceptance_probabilities() {
        assert!((Acceptance::PositiveExponent.probability(3.0, 1.0) - 1.0).abs() < 1e-12);
        assert!((Acceptance::PositiveExponent.probability(0.0, 1.0) - 1.0).abs() < 1e-12);
        let p = Acceptance::Metropolis.probability(1.0, 1.0);
        assert!((p - (-1.0f64).exp()).abs() < 1e-12);
        assert!(Acceptance::Metropolis.probability(10.0, 0.02) < 1e-100);
    }
}
