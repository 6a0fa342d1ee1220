use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::clubs::ClubDistanceTable;
use crate::error::Result;
use crate::units::UnitSystem;

/// A player's saved caddie settings.
///
/// ```json
/// { "unit_system": "imperial", "clubs": { "driver": 270, "7-iron": 165 } }
/// ```
///
/// Club distances are in `unit_system` and keep the order they appear in.
/// Without a `clubs` key the default bag is used, converted into
/// `unit_system`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ProfileFile")]
pub struct Profile {
    pub unit_system: UnitSystem,
    pub clubs: ClubDistanceTable,
}

#[derive(Deserialize)]
struct ProfileFile {
    #[serde(default)]
    unit_system: UnitSystem,
    clubs: Option<ClubDistanceTable>,
}

impl From<ProfileFile> for Profile {
    fn from(file: ProfileFile) -> Self {
        let clubs = file.clubs.unwrap_or_else(|| {
            let mut bag = ClubDistanceTable::default_bag();
            bag.convert_units(UnitSystem::Metric, file.unit_system);
            bag
        });
        Self {
            unit_system: file.unit_system,
            clubs,
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::Metric,
            clubs: ClubDistanceTable::default_bag(),
        }
    }
}

impl Profile {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let profile = Self::from_json(&text)?;
        log::info!(
            "Loaded profile {} ({}, {} of {} clubs configured)",
            path.display(),
            profile.unit_system,
            profile.clubs.configured_count(),
            profile.clubs.len()
        );
        Ok(profile)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        log::info!("Saved profile to {}", path.display());
        Ok(())
    }
}
