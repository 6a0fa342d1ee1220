use crate::calculator::{calculate, leading_number, ShotInput, ShotResult};
use crate::clubs::ClubDistanceTable;
use crate::conditions::{AirTemperature, Elevation};
use crate::profile::Profile;
use crate::units::{mph_to_mps, mps_to_mph, round_half_up, UnitSystem};

/// State the caddie screen keeps between calculations.
///
/// Holds the active unit system, the bag, and the shot fields as the player
/// typed them. Each calculation snapshots this into a `ShotInput` and hands
/// it to the pure calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct CaddieSession {
    clubs: ClubDistanceTable,
    shot: ShotInput,
}

impl Default for CaddieSession {
    fn default() -> Self {
        Self::new(ClubDistanceTable::default_bag(), UnitSystem::Metric)
    }
}

impl CaddieSession {
    pub fn new(clubs: ClubDistanceTable, unit_system: UnitSystem) -> Self {
        Self {
            clubs,
            shot: ShotInput {
                unit_system,
                ..ShotInput::default()
            },
        }
    }

    pub fn from_profile(profile: Profile) -> Self {
        Self::new(profile.clubs, profile.unit_system)
    }

    pub fn to_profile(&self) -> Profile {
        Profile {
            unit_system: self.unit_system(),
            clubs: self.clubs.clone(),
        }
    }

    pub fn unit_system(&self) -> UnitSystem {
        self.shot.unit_system
    }

    pub fn clubs(&self) -> &ClubDistanceTable {
        &self.clubs
    }

    pub fn shot(&self) -> &ShotInput {
        &self.shot
    }

    pub fn shot_mut(&mut self) -> &mut ShotInput {
        &mut self.shot
    }

    /// Sets a club's carry from text; anything that is not a number
    /// leaves the club unconfigured.
    pub fn set_club_distance(&mut self, club: &str, text: &str) {
        self.clubs.set(club, leading_number(text).unwrap_or(0.0));
    }

    /// Switches metric/imperial and converts the bag and any numeric
    /// shot fields so they keep describing the same physical values.
    pub fn toggle_units(&mut self) {
        let from = self.unit_system();
        let to = from.toggled();

        self.clubs.convert_units(from, to);

        if let Some(distance) = leading_number(&self.shot.target_distance) {
            let meters = from.distance_to_meters(distance);
            self.shot.target_distance = round_half_up(to.distance_from_meters(meters)).to_string();
        }

        if let Some(speed) = leading_number(&self.shot.wind_speed) {
            let converted = match to {
                UnitSystem::Imperial => mps_to_mph(speed),
                UnitSystem::Metric => mph_to_mps(speed),
            };
            self.shot.wind_speed = format!("{:.1}", converted);
        }

        self.shot.unit_system = to;
        log::debug!("[UNITS] switched to {}", to);
    }

    pub fn calculate(&self) -> ShotResult {
        calculate(&self.shot, &self.clubs)
    }

    /// Elevation choices as (code, label) in the active unit system.
    pub fn elevation_options(&self) -> Vec<(&'static str, String)> {
        Elevation::ALL
            .iter()
            .map(|e| (e.code(), e.label(self.unit_system())))
            .collect()
    }

    /// Temperature choices as (code, label) in the active unit system.
    pub fn temperature_options(&self) -> Vec<(&'static str, String)> {
        AirTemperature::ALL
            .iter()
            .map(|t| (t.code(), t.label(self.unit_system())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::WindDirection;

    #[test]
    fn test_set_club_distance_text() {
        let mut session = CaddieSession::default();
        session.set_club_distance("7-iron", "160");
        assert_eq!(session.clubs().get("7-iron"), Some(160.0));
        session.set_club_distance("7-iron", "seven");
        assert_eq!(session.clubs().get("7-iron"), Some(0.0));
        session.set_club_distance("Hybrid", "200");
        assert_eq!(session.clubs().get("Hybrid"), Some(200.0));
        session.set_club_distance("7-iron", "150m");
        assert_eq!(session.clubs().get("7-iron"), Some(150.0));
    }

    #[test]
    fn test_toggle_converts_fields() {
        let mut session = CaddieSession::default();
        session.shot_mut().target_distance = "150".into();
        session.shot_mut().wind_speed = "10".into();
        session.toggle_units();

        assert_eq!(session.unit_system(), UnitSystem::Imperial);
        assert_eq!(session.shot().target_distance, "164");
        assert_eq!(session.shot().wind_speed, "22.4");
        assert_eq!(session.clubs().get("driver"), Some(273.0));
        assert_eq!(session.clubs().get("7-iron"), Some(170.0));

        session.toggle_units();
        assert_eq!(session.unit_system(), UnitSystem::Metric);
        assert_eq!(session.shot().target_distance, "150");
        assert_eq!(session.shot().wind_speed, "10.0");
        assert_eq!(session.clubs().get("7-iron"), Some(155.0));
    }

    #[test]
    fn test_toggle_leaves_text_fields_that_are_not_numbers() {
        let mut session = CaddieSession::default();
        session.shot_mut().target_distance = "far".into();
        session.toggle_units();
        assert_eq!(session.shot().target_distance, "far");
        assert_eq!(session.shot().wind_speed, "");

        session.shot_mut().target_distance = "164 yd".into();
        session.toggle_units();
        assert_eq!(session.shot().target_distance, "150");
        assert_eq!(session.shot().wind_speed, "");
    }

    #[test]
    fn test_calculate_uses_session_state() {
        let mut session = CaddieSession::default();
        session.shot_mut().target_distance = "150".into();
        session.shot_mut().wind_speed = "12".into();
        session.shot_mut().wind_direction = WindDirection::Headwind;
        let result = session.calculate();
        assert_eq!(result.adjusted_distance, 182);
        assert_eq!(result.recommended_club(), "5-iron");
    }

    #[test]
    fn test_option_labels_follow_units() {
        let mut session = CaddieSession::default();
        assert_eq!(session.temperature_options()[0], ("10c", "10°C".to_string()));
        session.toggle_units();
        assert_eq!(session.temperature_options()[0], ("10c", "50°F".to_string()));
        assert_eq!(session.elevation_options()[0], ("hill10", "11 yd".to_string()));
    }

    #[test]
    fn test_profile_round_trip() {
        let mut session = CaddieSession::default();
        session.toggle_units();
        let again = CaddieSession::from_profile(session.to_profile());
        assert_eq!(again.unit_system(), UnitSystem::Imperial);
        assert_eq!(again.clubs(), session.clubs());
    }
}
