use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CaddieError;

/// Yards in one meter.
pub const YARDS_PER_METER: f64 = 1.09361;

/// mph in one m/s, as used by the wind speed fields.
pub const MPH_PER_MPS: f64 = 2.237;

/// Yards per meter used for the elevation option labels only.
pub const LABEL_YARDS_PER_METER: f64 = 1.0936;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn toggled(self) -> Self {
        match self {
            UnitSystem::Metric => UnitSystem::Imperial,
            UnitSystem::Imperial => UnitSystem::Metric,
        }
    }

    /// Distance in display units to meters.
    pub fn distance_to_meters(self, value: f64) -> f64 {
        match self {
            UnitSystem::Metric => value,
            UnitSystem::Imperial => yards_to_meters(value),
        }
    }

    /// Meters to distance in display units.
    pub fn distance_from_meters(self, meters: f64) -> f64 {
        match self {
            UnitSystem::Metric => meters,
            UnitSystem::Imperial => meters_to_yards(meters),
        }
    }

    /// Wind speed in display units (m/s or mph) to m/s.
    pub fn wind_to_mps(self, value: f64) -> f64 {
        match self {
            UnitSystem::Metric => value,
            UnitSystem::Imperial => mph_to_mps(value),
        }
    }

    pub fn distance_unit(self) -> &'static str {
        match self {
            UnitSystem::Metric => "m",
            UnitSystem::Imperial => "yd",
        }
    }

    pub fn wind_unit(self) -> &'static str {
        match self {
            UnitSystem::Metric => "m/s",
            UnitSystem::Imperial => "mph",
        }
    }

    pub fn temperature_unit(self) -> &'static str {
        match self {
            UnitSystem::Metric => "°C",
            UnitSystem::Imperial => "°F",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Metric => write!(f, "Metric"),
            UnitSystem::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = CaddieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" | "m" | "meters" => Ok(UnitSystem::Metric),
            "imperial" | "yd" | "yards" => Ok(UnitSystem::Imperial),
            _ => Err(CaddieError::UnknownOption {
                kind: "unit system",
                value: s.to_string(),
            }),
        }
    }
}

pub fn meters_to_yards(meters: f64) -> f64 {
    meters * YARDS_PER_METER
}

pub fn yards_to_meters(yards: f64) -> f64 {
    yards / YARDS_PER_METER
}

pub fn mps_to_mph(mps: f64) -> f64 {
    mps * MPH_PER_MPS
}

pub fn mph_to_mps(mph: f64) -> f64 {
    mph / MPH_PER_MPS
}

/// Whole-degree Fahrenheit for a Celsius reading.
pub fn celsius_to_fahrenheit(celsius: f64) -> i64 {
    round_half_up(celsius * 9.0 / 5.0 + 32.0)
}

/// Rounds to the nearest integer with halves going towards +infinity.
///
/// `f64::round` sends -2.5 to -3; the displayed distances follow the
/// half-up convention so that -2.5 shows as -2.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
