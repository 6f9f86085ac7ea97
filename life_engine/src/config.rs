//! Simulation parameters consumed from the environment.

use crate::error::ConfigError;

/// Startup parameters: grid dimensions, worker count, initial live
/// fraction and an optional RNG seed for reproducible runs.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub width: usize,
    pub height: usize,
    pub workers: usize,
    pub live_fraction: f64,
    pub seed: Option<u64>,
}

impl SimConfig {
    /// Reject invalid parameters before any round executes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.workers == 0 {
            return Err(ConfigError::ZeroWorkers);
        }
        if !(0.0..=1.0).contains(&self.live_fraction) {
            return Err(ConfigError::LiveFraction(self.live_fraction));
        }
        Ok(())
    }

    pub fn cells(&self) -> usize {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> SimConfig {
        SimConfig {
            width: 100,
            height: 80,
            workers: 4,
            live_fraction: 0.2,
            seed: None,
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(base().validate().is_ok());
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert!(matches!(
            SimConfig { width: 0, ..base() }.validate(),
            Err(ConfigError::ZeroWidth)
        ));
        assert!(matches!(
            SimConfig { height: 0, ..base() }.validate(),
            Err(ConfigError::ZeroHeight)
        ));
        assert!(matches!(
            SimConfig { workers: 0, ..base() }.validate(),
            Err(ConfigError::ZeroWorkers)
        ));
    }

    #[test]
    fn live_fraction_bounds() {
        for bad in [-0.1, 1.1, f64::NAN] {
            assert!(matches!(
                SimConfig { live_fraction: bad, ..base() }.validate(),
                Err(ConfigError::LiveFraction(_))
            ));
        }
        for ok in [0.0, 0.2, 1.0] {
            assert!(SimConfig { live_fraction: ok, ..base() }.validate().is_ok());
        }
    }
}
