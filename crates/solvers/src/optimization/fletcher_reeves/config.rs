use crate::optimization::{self, ConfigError};

/// Restart interval used by [`Config::default`] and [`From<optimization::Config>`].
pub const DEFAULT_RESTART_INTERVAL: usize = 10;

/// Configuration for the Fletcher-Reeves solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    base: optimization::Config,
    restart_interval: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::from(optimization::Config::default())
    }
}

impl From<optimization::Config> for Config {
    fn from(base: optimization::Config) -> Self {
        Self {
            base,
            restart_interval: DEFAULT_RESTART_INTERVAL,
        }
    }
}

impl Config {
    /// Creates a new Fletcher-Reeves config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Tolerance`] or [`ConfigError::MaxIters`] for an
    /// invalid tolerance or budget, and [`ConfigError::RestartInterval`] if
    /// `restart_interval` is zero.
    pub fn new(
        tolerance: f64,
        max_iters: usize,
        restart_interval: usize,
    ) -> Result<Self, ConfigError> {
        let base = optimization::Config::new(tolerance, max_iters)?;
        if restart_interval == 0 {
            return Err(ConfigError::RestartInterval);
        }
        Ok(Self {
            base,
            restart_interval,
        })
    }

    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.base.tolerance()
    }

    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.base.max_iters()
    }

    #[must_use]
    pub fn restart_interval(&self) -> usize {
        self.restart_interval
    }

    /// Returns whether the 0-based iteration `index` resets the direction.
    pub(super) fn restarts_after(&self, index: usize) -> bool {
        index > 0 && index % self.restart_interval == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_restart_interval() {
        assert_eq!(Config::new(1e-5, 100, 0), Err(ConfigError::RestartInterval));
    }

    #[test]
    fn base_errors_come_first() {
        assert_eq!(Config::new(0.0, 100, 0), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(1e-5, 0, 5), Err(ConfigError::MaxIters));
    }

    #[test]
    fn default_restarts_every_ten() {
        let config = Config::default();

        assert_eq!(config.restart_interval(), 10);
        assert_eq!(config.max_iters(), 100);
        assert!(!config.restarts_after(0));
        assert!(!config.restarts_after(9));
        assert!(config.restarts_after(10));
        assert!(config.restarts_after(20));
    }
}
