//! Categorical shot inputs.
//!
//! Every category is a plain lookup: a variant maps to a fixed offset in
//! meters (or, for wind, to how the wind multiplier is applied). Each type
//! defaults to its neutral variant, and the empty string parses to that
//! default so an untouched picker contributes nothing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CaddieError;
use crate::units::{celsius_to_fahrenheit, round_half_up, UnitSystem, LABEL_YARDS_PER_METER};

fn unknown(kind: &'static str, value: &str) -> CaddieError {
    CaddieError::UnknownOption {
        kind,
        value: value.to_string(),
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_ascii_lowercase().replace(['_', ' '], "-")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindDirection {
    Headwind,
    Tailwind,
    CrosswindLeft,
    CrosswindRight,
    #[default]
    None,
}

impl WindDirection {
    pub const ALL: [WindDirection; 5] = [
        WindDirection::Headwind,
        WindDirection::Tailwind,
        WindDirection::CrosswindLeft,
        WindDirection::CrosswindRight,
        WindDirection::None,
    ];

    pub fn code(self) -> &'static str {
        match self {
            WindDirection::Headwind => "headw",
            WindDirection::Tailwind => "tailw",
            WindDirection::CrosswindLeft => "leftw",
            WindDirection::CrosswindRight => "rightw",
            WindDirection::None => "",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WindDirection::Headwind => "Head",
            WindDirection::Tailwind => "Tail",
            WindDirection::CrosswindLeft => "Left",
            WindDirection::CrosswindRight => "Right",
            WindDirection::None => "None",
        }
    }

    /// Applies the speed-band multiplier to a distance in meters.
    ///
    /// Crosswinds from either side count for half the headwind effect and
    /// do not move the aim point.
    pub fn apply(self, distance_m: f64, multiplier: f64) -> f64 {
        match self {
            WindDirection::Headwind => distance_m * multiplier,
            WindDirection::Tailwind => distance_m / multiplier,
            WindDirection::CrosswindLeft | WindDirection::CrosswindRight => {
                distance_m * (1.0 + (multiplier - 1.0) / 2.0)
            }
            WindDirection::None => distance_m,
        }
    }
}

impl FromStr for WindDirection {
    type Err = CaddieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "headw" | "head" | "headwind" => Ok(WindDirection::Headwind),
            "tailw" | "tail" | "tailwind" => Ok(WindDirection::Tailwind),
            "leftw" | "left" | "crosswind-left" => Ok(WindDirection::CrosswindLeft),
            "rightw" | "right" | "crosswind-right" => Ok(WindDirection::CrosswindRight),
            "" | "none" | "calm" => Ok(WindDirection::None),
            _ => Err(unknown("wind direction", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Lie {
    #[default]
    Fairway,
    Rough,
    Sand,
    Tee,
}

impl Lie {
    pub const ALL: [Lie; 4] = [Lie::Fairway, Lie::Rough, Lie::Sand, Lie::Tee];

    pub fn offset_m(self) -> f64 {
        match self {
            Lie::Fairway => 0.0,
            Lie::Rough => -6.0,
            Lie::Sand => 5.0,
            Lie::Tee => -3.0,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Lie::Fairway => "fairway",
            Lie::Rough => "rough",
            Lie::Sand => "sand",
            Lie::Tee => "tee",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Lie::Fairway => "Fairway",
            Lie::Rough => "Rough",
            Lie::Sand => "Sand",
            Lie::Tee => "Tee Box",
        }
    }
}

impl FromStr for Lie {
    type Err = CaddieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "" | "fairway" => Ok(Lie::Fairway),
            "rough" => Ok(Lie::Rough),
            "sand" | "bunker" => Ok(Lie::Sand),
            "tee" | "tee-box" => Ok(Lie::Tee),
            _ => Err(unknown("lie", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PinPosition {
    Front,
    #[default]
    Middle,
    Back,
}

impl PinPosition {
    pub const ALL: [PinPosition; 3] = [PinPosition::Front, PinPosition::Middle, PinPosition::Back];

    pub fn offset_m(self) -> f64 {
        match self {
            PinPosition::Front => -1.0,
            PinPosition::Middle => 0.0,
            PinPosition::Back => 1.0,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            PinPosition::Front => "front",
            PinPosition::Middle => "middle",
            PinPosition::Back => "back",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PinPosition::Front => "Front",
            PinPosition::Middle => "Middle",
            PinPosition::Back => "Back",
        }
    }
}

impl FromStr for PinPosition {
    type Err = CaddieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "front" => Ok(PinPosition::Front),
            "" | "middle" | "center" => Ok(PinPosition::Middle),
            "back" => Ok(PinPosition::Back),
            _ => Err(unknown("pin position", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissPreference {
    #[default]
    None,
    Left,
    Right,
    Short,
    Long,
}

impl MissPreference {
    pub const ALL: [MissPreference; 5] = [
        MissPreference::None,
        MissPreference::Left,
        MissPreference::Right,
        MissPreference::Short,
        MissPreference::Long,
    ];

    /// Only a short or long miss biases the distance.
    pub fn offset_m(self) -> f64 {
        match self {
            MissPreference::Long => 5.0,
            MissPreference::Short => -5.0,
            MissPreference::None | MissPreference::Left | MissPreference::Right => 0.0,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            MissPreference::None => "none",
            MissPreference::Left => "left",
            MissPreference::Right => "right",
            MissPreference::Short => "short",
            MissPreference::Long => "long",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MissPreference::None => "No preference",
            MissPreference::Left => "Left",
            MissPreference::Right => "Right",
            MissPreference::Short => "Short",
            MissPreference::Long => "Long",
        }
    }
}

impl FromStr for MissPreference {
    type Err = CaddieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "" | "none" => Ok(MissPreference::None),
            "left" => Ok(MissPreference::Left),
            "right" => Ok(MissPreference::Right),
            "short" => Ok(MissPreference::Short),
            "long" => Ok(MissPreference::Long),
            _ => Err(unknown("miss preference", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Elevation {
    SteepUphill,
    ModerateUphill,
    #[default]
    Flat,
    ModerateDownhill,
    SteepDownhill,
}

impl Elevation {
    pub const ALL: [Elevation; 5] = [
        Elevation::SteepUphill,
        Elevation::ModerateUphill,
        Elevation::Flat,
        Elevation::ModerateDownhill,
        Elevation::SteepDownhill,
    ];

    pub fn offset_m(self) -> f64 {
        match self {
            Elevation::SteepUphill => 6.0,
            Elevation::ModerateUphill => 3.0,
            Elevation::Flat => 0.0,
            Elevation::ModerateDownhill => -3.0,
            Elevation::SteepDownhill => -6.0,
        }
    }

    /// Height difference the option stands for, in meters.
    pub fn nominal_height_m(self) -> i64 {
        match self {
            Elevation::SteepUphill => 10,
            Elevation::ModerateUphill => 5,
            Elevation::Flat => 0,
            Elevation::ModerateDownhill => -5,
            Elevation::SteepDownhill => -10,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Elevation::SteepUphill => "hill10",
            Elevation::ModerateUphill => "hill",
            Elevation::Flat => "nohill",
            Elevation::ModerateDownhill => "hill5",
            Elevation::SteepDownhill => "hillneg10",
        }
    }

    pub fn label(self, units: UnitSystem) -> String {
        let meters = self.nominal_height_m();
        match units {
            UnitSystem::Metric => format!("{} m", meters),
            UnitSystem::Imperial => {
                format!("{} yd", round_half_up(meters as f64 * LABEL_YARDS_PER_METER))
            }
        }
    }
}

impl FromStr for Elevation {
    type Err = CaddieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "hill10" | "steep-uphill" | "steep-up" => Ok(Elevation::SteepUphill),
            "hill" | "uphill" | "moderate-uphill" => Ok(Elevation::ModerateUphill),
            "" | "nohill" | "flat" => Ok(Elevation::Flat),
            "hill5" | "downhill" | "moderate-downhill" => Ok(Elevation::ModerateDownhill),
            "hillneg10" | "steep-downhill" | "steep-down" => Ok(Elevation::SteepDownhill),
            _ => Err(unknown("elevation", s)),
        }
    }
}

/// Discrete air temperature bands, named by their Celsius value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AirTemperature {
    #[serde(rename = "10c")]
    C10,
    #[serde(rename = "15c")]
    C15,
    #[default]
    #[serde(rename = "20c")]
    C20,
    #[serde(rename = "25c")]
    C25,
    #[serde(rename = "30c")]
    C30,
}

impl AirTemperature {
    pub const ALL: [AirTemperature; 5] = [
        AirTemperature::C10,
        AirTemperature::C15,
        AirTemperature::C20,
        AirTemperature::C25,
        AirTemperature::C30,
    ];

    /// Cold air carries less, so colder bands ask for more distance.
    pub fn offset_m(self) -> f64 {
        match self {
            AirTemperature::C10 => 4.0,
            AirTemperature::C15 => 2.0,
            AirTemperature::C20 => 0.0,
            AirTemperature::C25 => -2.0,
            AirTemperature::C30 => -4.0,
        }
    }

    pub fn celsius(self) -> i64 {
        match self {
            AirTemperature::C10 => 10,
            AirTemperature::C15 => 15,
            AirTemperature::C20 => 20,
            AirTemperature::C25 => 25,
            AirTemperature::C30 => 30,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            AirTemperature::C10 => "10c",
            AirTemperature::C15 => "15c",
            AirTemperature::C20 => "20c",
            AirTemperature::C25 => "25c",
            AirTemperature::C30 => "30c",
        }
    }

    pub fn label(self, units: UnitSystem) -> String {
        match units {
            UnitSystem::Metric => format!("{}°C", self.celsius()),
            UnitSystem::Imperial => format!("{}°F", celsius_to_fahrenheit(self.celsius() as f64)),
        }
    }
}

impl FromStr for AirTemperature {
    type Err = CaddieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = normalize(s);
        let digits = norm.trim_end_matches("°c").trim_end_matches('c');
        match digits {
            "" | "20" => Ok(AirTemperature::C20),
            "10" => Ok(AirTemperature::C10),
            "15" => Ok(AirTemperature::C15),
            "25" => Ok(AirTemperature::C25),
            "30" => Ok(AirTemperature::C30),
            _ => Err(unknown("air temperature", s)),
        }
    }
}

macro_rules! display_via_code {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.code())
                }
            }
        )*
    };
}

display_via_code!(WindDirection, Lie, PinPosition, MissPreference, Elevation, AirTemperature);
