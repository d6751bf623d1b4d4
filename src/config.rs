//! TOML scenario configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::model::{Leg, Locations};

/// Top-level scenario configuration parsed from TOML.
///
/// Captures everything [`crate::engine::plan`] needs: the three named
/// locations, the two route legs, cycle hours already used, and an
/// optional start date (defaults to today when absent).
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TripScenario {
    pub locations: Locations,
    /// Exactly two legs: origin→pickup, pickup→dropoff.
    pub legs: Vec<Leg>,
    /// Hours already used in the rolling 70-hour/8-day cycle.
    #[serde(default)]
    pub cycle_used: f64,
    /// Trip start date, `YYYY-MM-DD`. Defaults to today when absent.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

/// Configuration error with field path and constraint description.
///
/// Distinct from [`crate::error::EngineError`]: this is caught at load
/// time, before the engine ever constructs state.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g. `"legs"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl TripScenario {
    /// A short, unremarkable local trip: no breaks, rests, or fuel stops needed.
    pub fn baseline() -> Self {
        Self {
            locations: Locations {
                current: loc("Los Angeles, CA", 34.0522, -118.2437),
                pickup: loc("Bakersfield, CA", 35.3733, -119.0187),
                dropoff: loc("Fresno, CA", 36.7378, -119.7871),
            },
            legs: vec![
                Leg { distance_miles: 110.0, duration_hours: 1.69 },
                Leg { distance_miles: 110.0, duration_hours: 1.69 },
            ],
            cycle_used: 0.0,
            start_date: None,
        }
    }

    /// A long haul that forces a 10-hour rest partway through the first leg.
    pub fn long_haul() -> Self {
        Self {
            locations: Locations {
                current: loc("Los Angeles, CA", 34.0522, -118.2437),
                pickup: loc("Denver, CO", 39.7392, -104.9903),
                dropoff: loc("Kansas City, MO", 39.0997, -94.5786),
            },
            legs: vec![
                Leg { distance_miles: 1015.0, duration_hours: 15.62 },
                Leg { distance_miles: 605.0, duration_hours: 9.31 },
            ],
            cycle_used: 0.0,
            start_date: None,
        }
    }

    /// A trip with little cycle headroom left, forcing a 34-hour restart.
    pub fn cycle_exhausted() -> Self {
        Self {
            locations: Locations {
                current: loc("Seattle, WA", 47.6062, -122.3321),
                pickup: loc("Boise, ID", 43.6150, -116.2023),
                dropoff: loc("Salt Lake City, UT", 40.7608, -111.8910),
            },
            legs: vec![
                Leg { distance_miles: 2000.0, duration_hours: 30.77 },
                Leg { distance_miles: 500.0, duration_hours: 7.69 },
            ],
            cycle_used: 65.0,
            start_date: None,
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "long_haul", "cycle_exhausted"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "long_haul" => Ok(Self::long_haul()),
            "cycle_exhausted" => Ok(Self::cycle_exhausted()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.legs.len() != 2 {
            errors.push(ConfigError {
                field: "legs".into(),
                message: format!("must contain exactly 2 legs, got {}", self.legs.len()),
            });
        }
        for (i, leg) in self.legs.iter().enumerate() {
            if leg.distance_miles < 0.0 {
                errors.push(ConfigError {
                    field: format!("legs[{i}].distance_miles"),
                    message: "must be >= 0".into(),
                });
            }
            if leg.duration_hours < 0.0 {
                errors.push(ConfigError {
                    field: format!("legs[{i}].duration_hours"),
                    message: "must be >= 0".into(),
                });
            }
        }
        if !(0.0..=70.0).contains(&self.cycle_used) {
            errors.push(ConfigError {
                field: "cycle_used".into(),
                message: "must be in [0.0, 70.0]".into(),
            });
        }

        errors
    }
}

fn loc(name: &str, lat: f64, lng: f64) -> crate::model::Location {
    crate::model::Location { name: name.to_string(), lat, lng }
}
