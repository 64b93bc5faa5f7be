use displaydoc::Display;
use thiserror::Error;

/// The configuration of the recommendation engine.
#[derive(Clone, Debug)]
pub struct Config {
    exploration: f32,
}

/// Potential errors of the engine configuration.
#[derive(Copy, Clone, Debug, Display, Error)]
pub enum Error {
    /// Invalid exploration probability, expected value from the unit interval
    Exploration,
}

impl Config {
    /// The probability of scoring a candidate by exploration instead of
    /// popularity.
    pub fn exploration(&self) -> f32 {
        self.exploration
    }

    /// Sets the exploration probability.
    ///
    /// # Errors
    /// Fails if the probability is outside of the unit interval.
    pub fn with_exploration(self, exploration: f32) -> Result<Self, Error> {
        if (0. ..=1.).contains(&exploration) {
            Ok(Self { exploration })
        } else {
            Err(Error::Exploration)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { exploration: 0.1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_exploration_accepts_unit_interval() {
        assert!(Config::default().with_exploration(0.).is_ok());
        assert!(Config::default().with_exploration(0.3).is_ok());
        assert!(Config::default().with_exploration(1.).is_ok());
    }

    #[test]
    fn test_with_exploration_rejects_outside_unit_interval() {
        assert!(matches!(
            Config::default().with_exploration(-0.1).unwrap_err(),
            Error::Exploration,
        ));
        assert!(matches!(
            Config::default().with_exploration(1.1).unwrap_err(),
            Error::Exploration,
        ));
        assert!(matches!(
            Config::default().with_exploration(f32::NAN).unwrap_err(),
            Error::Exploration,
        ));
    }
}
