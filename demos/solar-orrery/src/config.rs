//! Runtime configuration — the tunable constants of the visualization.
//! Loaded from JSON when the host provides overrides, otherwise defaults.

use serde::{Deserialize, Serialize};
use std::fmt;

fn default_time_scale() -> f64 {
    0.0001
}

fn default_trail_capacity() -> usize {
    5000
}

fn default_focus_distance() -> f32 {
    50.0
}

fn default_orbit_path_resolution() -> usize {
    360
}

/// All tunable simulation constants. Every field has a default, so a
/// partial JSON document overrides only what it names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Scale from elapsed real milliseconds to solver time units.
    /// At the default 0.0001, one period unit is 10,000 real milliseconds.
    #[serde(default = "default_time_scale")]
    pub time_scale: f64,
    /// Maximum samples retained per trail.
    #[serde(default = "default_trail_capacity")]
    pub trail_capacity: usize,
    /// Camera offset distance from the focused body.
    #[serde(default = "default_focus_distance")]
    pub focus_distance: f32,
    /// Initial point allocation per orbit-path polyline.
    #[serde(default = "default_orbit_path_resolution")]
    pub orbit_path_resolution: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            time_scale: default_time_scale(),
            trail_capacity: default_trail_capacity(),
            focus_distance: default_focus_distance(),
            orbit_path_resolution: default_orbit_path_resolution(),
        }
    }
}

/// Rejected configuration value, reported at startup.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonPositiveTimeScale(f64),
    ZeroTrailCapacity,
    NonPositiveFocusDistance(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveTimeScale(v) => {
                write!(f, "time_scale must be positive, got {v}")
            }
            Self::ZeroTrailCapacity => write!(f, "trail_capacity must be at least 1"),
            Self::NonPositiveFocusDistance(v) => {
                write!(f, "focus_distance must be positive, got {v}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl SimConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reject out-of-range values before the simulation starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.time_scale <= 0.0 {
            return Err(ConfigError::NonPositiveTimeScale(self.time_scale));
        }
        if self.trail_capacity == 0 {
            return Err(ConfigError::ZeroTrailCapacity);
        }
        if self.focus_distance <= 0.0 {
            return Err(ConfigError::NonPositiveFocusDistance(self.focus_distance));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_constants() {
        let config = SimConfig::default();
        assert_eq!(config.time_scale, 0.0001);
        assert_eq!(config.trail_capacity, 5000);
        assert_eq!(config.focus_distance, 50.0);
        assert_eq!(config.orbit_path_resolution, 360);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let config = SimConfig::from_json(r#"{ "trail_capacity": 100 }"#).unwrap();
        assert_eq!(config.trail_capacity, 100);
        assert_eq!(config.time_scale, 0.0001);
        assert_eq!(config.focus_distance, 50.0);
    }

    #[test]
    fn invalid_values_fail_validation() {
        let mut config = SimConfig::default();
        config.time_scale = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveTimeScale(0.0)));

        let mut config = SimConfig::default();
        config.trail_capacity = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroTrailCapacity));

        let mut config = SimConfig::default();
        config.focus_distance = -1.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveFocusDistance(-1.0))
        );
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SimConfig::from_json("{ not json").is_err());
    }
}
