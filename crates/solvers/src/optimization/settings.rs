use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

use super::{Config, ConfigError};

/// Start point and config for a run, built once at the input boundary.
///
/// Front ends collect these values as text. [`Settings::parse`] turns them
/// into typed, validated fields so the solvers never see raw input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings<const N: usize> {
    /// Starting point.
    pub start: [f64; N],

    /// Tolerance and iteration budget.
    pub config: Config,
}

/// Errors that can occur when parsing [`Settings`] from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("invalid start coordinate {text:?}")]
    Coordinate {
        text: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("expected {expected} start coordinates, found {found}")]
    Dimension { expected: usize, found: usize },

    #[error("invalid tolerance {text:?}")]
    Tolerance {
        text: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("invalid iteration budget {text:?}")]
    MaxIters {
        text: String,
        #[source]
        source: ParseIntError,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl<const N: usize> Settings<N> {
    /// Creates settings from already-typed values.
    #[must_use]
    pub fn new(start: [f64; N], config: Config) -> Self {
        Self { start, config }
    }

    /// Parses settings from user-entered text.
    ///
    /// `start` is a comma-separated list of exactly `N` numbers, for example
    /// `"0.0, 0.0"`. Surrounding whitespace is ignored everywhere.
    ///
    /// # Errors
    ///
    /// Returns an error if any field fails to parse, if `start` has the wrong
    /// number of coordinates, or if the parsed tolerance or budget violates
    /// the [`Config`] preconditions.
    pub fn parse(start: &str, tolerance: &str, max_iters: &str) -> Result<Self, SettingsError> {
        let coords = start
            .split(',')
            .map(str::trim)
            .map(|text| {
                text.parse::<f64>()
                    .map_err(|source| SettingsError::Coordinate {
                        text: text.to_owned(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let start: [f64; N] = coords
            .as_slice()
            .try_into()
            .map_err(|_| SettingsError::Dimension {
                expected: N,
                found: coords.len(),
            })?;

        let tolerance_text = tolerance.trim();
        let tolerance =
            tolerance_text
                .parse::<f64>()
                .map_err(|source| SettingsError::Tolerance {
                    text: tolerance_text.to_owned(),
                    source,
                })?;

        let max_iters_text = max_iters.trim();
        let max_iters =
            max_iters_text
                .parse::<i64>()
                .map_err(|source| SettingsError::MaxIters {
                    text: max_iters_text.to_owned(),
                    source,
                })?;

        // Negative budgets are rejected by the config, same as zero.
        let max_iters = usize::try_from(max_iters).unwrap_or(0);

        Ok(Self {
            start,
            config: Config::new(tolerance, max_iters)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_front_end_defaults() {
        let settings = Settings::<2>::parse("0.0, 0.0", "1e-5", "100").expect("valid input");

        assert_eq!(settings.start, [0.0, 0.0]);
        assert_eq!(settings.config, Config::new(1e-5, 100).unwrap());
    }

    #[test]
    fn typed_and_parsed_settings_agree() {
        let typed = Settings::new([1.0, 2.0], Config::default());
        let parsed = Settings::parse(" 1, 2 ", "1e-5", "100").expect("valid input");

        assert_eq!(typed, parsed);
    }

    #[test]
    fn rejects_wrong_dimension() {
        let err = Settings::<2>::parse("1, 2, 3", "1e-5", "100").unwrap_err();
        assert_eq!(
            err,
            SettingsError::Dimension {
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn rejects_garbage_coordinates() {
        let err = Settings::<2>::parse("1, two", "1e-5", "100").unwrap_err();
        assert!(matches!(err, SettingsError::Coordinate { ref text, .. } if text == "two"));
    }

    #[test]
    fn non_positive_values_surface_config_errors() {
        let err = Settings::<1>::parse("1", "0", "100").unwrap_err();
        assert_eq!(err, SettingsError::Config(ConfigError::Tolerance));

        let err = Settings::<1>::parse("1", "1e-5", "-3").unwrap_err();
        assert_eq!(err, SettingsError::Config(ConfigError::MaxIters));

        let err = Settings::<1>::parse("1", "1e-5", "0").unwrap_err();
        assert_eq!(err, SettingsError::Config(ConfigError::MaxIters));
    }

    #[test]
    fn rejects_fractional_budget() {
        let err = Settings::<1>::parse("1", "1e-5", "2.5").unwrap_err();
        assert!(matches!(err, SettingsError::MaxIters { .. }));
    }
}
