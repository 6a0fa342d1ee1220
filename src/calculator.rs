//! Club recommendation.
//!
//! The working distance is carried in meters from input to output: the raw
//! target is converted once on the way in, every adjustment is a metric
//! offset, and the result is converted back to the display unit at the end.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::clubs::ClubDistanceTable;
use crate::conditions::{AirTemperature, Elevation, Lie, MissPreference, PinPosition, WindDirection};
use crate::error::{CaddieError, Result};
use crate::units::{round_half_up, UnitSystem};

/// A best club within this many meters of the target needs no swing qualifier.
pub const MATCH_TOLERANCE_M: f64 = 2.0;

pub const INVALID_INPUT_TEXT: &str = "Invalid input";
pub const NO_CLUB_TEXT: &str = "No club found";

/// Shot parameters as entered, with the numeric fields still as text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShotInput {
    pub target_distance: String,
    pub wind_speed: String,
    pub wind_direction: WindDirection,
    pub elevation: Elevation,
    pub pin_position: PinPosition,
    pub lie: Lie,
    pub air_temperature: AirTemperature,
    pub miss_preference: MissPreference,
    pub unit_system: UnitSystem,
}

/// Validated conditions for one calculation, numbers in the display unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotConditions {
    pub target_distance: f64,
    pub wind_speed: f64,
    pub wind_direction: WindDirection,
    pub elevation: Elevation,
    pub pin_position: PinPosition,
    pub lie: Lie,
    pub air_temperature: AirTemperature,
    pub miss_preference: MissPreference,
    pub unit_system: UnitSystem,
}

impl ShotConditions {
    /// Neutral conditions: no wind, flat fairway lie, middle pin, 20°C.
    pub fn new(target_distance: f64, unit_system: UnitSystem) -> Self {
        Self {
            target_distance,
            wind_speed: 0.0,
            wind_direction: WindDirection::None,
            elevation: Elevation::Flat,
            pin_position: PinPosition::Middle,
            lie: Lie::Fairway,
            air_temperature: AirTemperature::C20,
            miss_preference: MissPreference::None,
            unit_system,
        }
    }

    pub fn with_wind(mut self, speed: f64, direction: WindDirection) -> Self {
        self.wind_speed = speed;
        self.wind_direction = direction;
        self
    }

    pub fn parse(input: &ShotInput) -> Result<Self> {
        Ok(Self {
            target_distance: parse_number("target distance", &input.target_distance)?,
            wind_speed: parse_number("wind speed", &input.wind_speed)?,
            wind_direction: input.wind_direction,
            elevation: input.elevation,
            pin_position: input.pin_position,
            lie: input.lie,
            air_temperature: input.air_temperature,
            miss_preference: input.miss_preference,
            unit_system: input.unit_system,
        })
    }
}

/// Parses a numeric text field. Only finite numbers are accepted.
pub fn parse_number(field: &'static str, text: &str) -> Result<f64> {
    leading_number(text).ok_or_else(|| CaddieError::InvalidInput {
        field,
        value: text.to_string(),
    })
}

/// Reads the number at the start of `text`, ignoring whatever follows it,
/// so `"150m"` and `" 150 yd"` both read as 150.
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// optional exponent. Returns `None` when no digits lead the text or the
/// value is not finite.
pub fn leading_number(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut has_digits = int_end > end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        if has_digits || frac_end > end + 1 {
            has_digits = true;
            end = frac_end;
        }
    }
    if !has_digits {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwingQualifier {
    /// Target is longer than the club's stock carry.
    Full,
    /// Target is shorter than the club's stock carry.
    Eased,
}

impl SwingQualifier {
    pub fn percent(self) -> u8 {
        match self {
            SwingQualifier::Full => 100,
            SwingQualifier::Eased => 85,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recommendation {
    Club {
        club: String,
        swing: Option<SwingQualifier>,
    },
    NoClubFound,
    InvalidInput,
}

impl Recommendation {
    pub fn club(&self) -> Option<&str> {
        match self {
            Recommendation::Club { club, .. } => Some(club),
            _ => None,
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Club {
                club,
                swing: Some(q),
            } => write!(f, "{}% {}", q.percent(), club),
            Recommendation::Club { club, swing: None } => f.write_str(club),
            Recommendation::NoClubFound => f.write_str(NO_CLUB_TEXT),
            Recommendation::InvalidInput => f.write_str(INVALID_INPUT_TEXT),
        }
    }
}

impl Serialize for Recommendation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShotResult {
    /// Adjusted distance in the display unit, rounded to a whole number.
    pub adjusted_distance: i64,
    #[serde(rename = "recommended_club")]
    pub recommendation: Recommendation,
}

impl ShotResult {
    pub fn invalid() -> Self {
        Self {
            adjusted_distance: 0,
            recommendation: Recommendation::InvalidInput,
        }
    }

    /// The recommendation as shown to the player, e.g. `"85% 8-iron"`.
    pub fn recommended_club(&self) -> String {
        self.recommendation.to_string()
    }
}

/// Wind multiplier for a wind speed in m/s.
pub fn wind_multiplier(speed_mps: f64) -> f64 {
    if speed_mps < 5.0 {
        1.048
    } else if speed_mps < 10.0 {
        1.132
    } else {
        1.21
    }
}

/// Effective distance in meters after wind and every fixed offset.
pub fn adjusted_distance_m(conditions: &ShotConditions) -> f64 {
    let units = conditions.unit_system;
    let mut dist = units.distance_to_meters(conditions.target_distance);

    let multiplier = wind_multiplier(units.wind_to_mps(conditions.wind_speed));
    dist = conditions.wind_direction.apply(dist, multiplier);
    log::debug!(
        "[WIND] {} x{:.3} -> {:.2} m",
        conditions.wind_direction.label(),
        multiplier,
        dist
    );

    dist += conditions.lie.offset_m();
    dist += conditions.pin_position.offset_m();
    dist += conditions.miss_preference.offset_m();
    dist += conditions.elevation.offset_m();
    dist += conditions.air_temperature.offset_m();
    log::debug!(
        "[ADJUST] lie={} pin={} miss={} hill={} temp={} -> {:.2} m",
        conditions.lie,
        conditions.pin_position,
        conditions.miss_preference,
        conditions.elevation,
        conditions.air_temperature,
        dist
    );

    dist
}

/// Closest configured club to `target_m`, with its carry in meters.
///
/// Clubs are tried in bag order and only a strictly smaller difference
/// replaces the current best, so the earlier club wins a tie.
pub fn closest_club<'a>(
    target_m: f64,
    table: &'a ClubDistanceTable,
    units: UnitSystem,
) -> Option<(&'a str, f64)> {
    let mut best: Option<(&str, f64)> = None;
    let mut min_diff = f64::INFINITY;

    for (club, club_m) in table.configured_meters(units) {
        let diff = (club_m - target_m).abs();
        if diff < min_diff {
            min_diff = diff;
            best = Some((club, club_m));
        }
    }

    best
}

/// Recommendation for already-validated conditions.
pub fn recommend(conditions: &ShotConditions, table: &ClubDistanceTable) -> ShotResult {
    let units = conditions.unit_system;
    let adjusted_m = adjusted_distance_m(conditions);

    let recommendation = match closest_club(adjusted_m, table, units) {
        Some((club, club_m)) => {
            let diff = adjusted_m - club_m;
            let swing = if diff > MATCH_TOLERANCE_M {
                Some(SwingQualifier::Full)
            } else if diff < -MATCH_TOLERANCE_M {
                Some(SwingQualifier::Eased)
            } else {
                None
            };
            log::debug!(
                "[CLUB] {} carries {:.1} m, target {:.1} m (diff {:+.1})",
                club,
                club_m,
                adjusted_m,
                diff
            );
            Recommendation::Club {
                club: club.to_string(),
                swing,
            }
        }
        None => {
            log::warn!("{}", CaddieError::NoConfiguredClub);
            Recommendation::NoClubFound
        }
    };

    ShotResult {
        adjusted_distance: round_half_up(units.distance_from_meters(adjusted_m)),
        recommendation,
    }
}

/// Validates `input` and recommends a club.
///
/// Never fails: unparsable numbers give `ShotResult::invalid()` and an
/// empty bag gives a "No club found" recommendation.
pub fn calculate(input: &ShotInput, table: &ClubDistanceTable) -> ShotResult {
    match ShotConditions::parse(input) {
        Ok(conditions) => recommend(&conditions, table),
        Err(e) => {
            log::warn!("[INPUT] {}", e);
            ShotResult::invalid()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seven_iron() -> ClubDistanceTable {
        vec![("7-iron", 155.0)].into_iter().collect()
    }

    fn input(distance: &str, wind: &str) -> ShotInput {
        ShotInput {
            target_distance: distance.to_string(),
            wind_speed: wind.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_wind_multiplier_bands() {
        assert_eq!(wind_multiplier(0.0), 1.048);
        assert_eq!(wind_multiplier(4.99), 1.048);
        assert_eq!(wind_multiplier(5.0), 1.132);
        assert_eq!(wind_multiplier(9.99), 1.132);
        assert_eq!(wind_multiplier(10.0), 1.21);
        assert_eq!(wind_multiplier(30.0), 1.21);
    }

    #[test]
    fn test_neutral_shot() {
        let result = calculate(&input("150", "0"), &seven_iron());
        assert_eq!(result.adjusted_distance, 150);
        assert_eq!(result.recommendation.club(), Some("7-iron"));
        assert_eq!(result.recommended_club(), "85% 7-iron");
    }

    #[test]
    fn test_within_tolerance_has_no_qualifier() {
        let result = calculate(&input("154", "0"), &seven_iron());
        assert_eq!(result.recommended_club(), "7-iron");
        let result = calculate(&input("157", "0"), &seven_iron());
        assert_eq!(result.recommended_club(), "7-iron");
    }

    #[test]
    fn test_headwind_scenario() {
        let mut shot = input("150", "12");
        shot.wind_direction = WindDirection::Headwind;
        let result = calculate(&shot, &seven_iron());
        assert_eq!(result.adjusted_distance, 182);
        assert_eq!(result.recommended_club(), "100% 7-iron");
    }

    #[test]
    fn test_every_offset_applies() {
        let shot = ShotInput {
            target_distance: "150".into(),
            wind_speed: "0".into(),
            wind_direction: WindDirection::None,
            elevation: Elevation::SteepUphill,
            pin_position: PinPosition::Back,
            lie: Lie::Sand,
            air_temperature: AirTemperature::C10,
            miss_preference: MissPreference::Long,
            unit_system: UnitSystem::Metric,
        };
        // 150 + 5 + 1 + 5 + 6 + 4
        assert_eq!(calculate(&shot, &seven_iron()).adjusted_distance, 171);
    }

    #[test]
    fn test_invalid_input() {
        let result = calculate(&input("abc", "0"), &seven_iron());
        assert_eq!(result, ShotResult::invalid());
        assert_eq!(result.recommended_club(), "Invalid input");

        assert_eq!(calculate(&input("150", ""), &seven_iron()), ShotResult::invalid());
        assert_eq!(calculate(&input("inf", "0"), &seven_iron()), ShotResult::invalid());
        assert_eq!(calculate(&input("m150", "0"), &seven_iron()), ShotResult::invalid());
    }

    #[test]
    fn test_trailing_unit_text_is_ignored() {
        let plain = calculate(&input("150", "0"), &seven_iron());
        assert_eq!(calculate(&input("150m", "0"), &seven_iron()), plain);
        assert_eq!(calculate(&input(" 150 ", "0 m/s"), &seven_iron()), plain);
        assert_eq!(calculate(&input("150 yd", "0"), &seven_iron()).adjusted_distance, 150);
    }

    #[test]
    fn test_leading_number() {
        assert_eq!(leading_number("150m"), Some(150.0));
        assert_eq!(leading_number(" 150 "), Some(150.0));
        assert_eq!(leading_number("12.5mph"), Some(12.5));
        assert_eq!(leading_number("-3"), Some(-3.0));
        assert_eq!(leading_number("+.5"), Some(0.5));
        assert_eq!(leading_number("150."), Some(150.0));
        assert_eq!(leading_number("1e2yd"), Some(100.0));
        assert_eq!(leading_number("2e"), Some(2.0));
        assert_eq!(leading_number("7-iron"), Some(7.0));
        assert_eq!(leading_number("abc"), None);
        assert_eq!(leading_number(""), None);
        assert_eq!(leading_number("."), None);
        assert_eq!(leading_number("-"), None);
        assert_eq!(leading_number("inf"), None);
        assert_eq!(leading_number("1e999"), None);
    }

    #[test]
    fn test_no_club_found() {
        let empty: ClubDistanceTable = vec![("driver", 0.0)].into_iter().collect();
        let result = calculate(&input("150", "3"), &empty);
        assert_eq!(result.recommendation, Recommendation::NoClubFound);
        assert_eq!(result.adjusted_distance, 150);
    }

    #[test]
    fn test_tie_goes_to_first_club() {
        let table: ClubDistanceTable =
            vec![("8-iron", 145.0), ("7-iron", 155.0)].into_iter().collect();
        let result = recommend(&ShotConditions::new(150.0, UnitSystem::Metric), &table);
        assert_eq!(result.recommendation.club(), Some("8-iron"));
    }

    #[test]
    fn test_imperial_converts_in_and_out() {
        let table: ClubDistanceTable = vec![("7-iron", 170.0)].into_iter().collect();
        let conditions = ShotConditions::new(170.0, UnitSystem::Imperial);
        let result = recommend(&conditions, &table);
        assert_eq!(result.adjusted_distance, 170);
        assert_eq!(result.recommended_club(), "7-iron");
    }

    #[test]
    fn test_imperial_wind_speed_is_mph() {
        // 23 mph is just over 10 m/s
        let conditions = ShotConditions::new(100.0, UnitSystem::Imperial)
            .with_wind(23.0, WindDirection::Headwind);
        assert!((adjusted_distance_m(&conditions) - 100.0 / 1.09361 * 1.21).abs() < 1e-9);
    }

    #[test]
    fn test_result_serializes_as_strings() {
        let result = calculate(&input("150", "0"), &seven_iron());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["adjusted_distance"], 150);
        assert_eq!(json["recommended_club"], "85% 7-iron");
    }
}
