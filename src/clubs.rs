use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::units::{round_half_up, UnitSystem};

/// The bag the caddie starts with, carry distances in meters.
pub const DEFAULT_BAG_METERS: &[(&str, f64)] = &[
    ("driver", 250.0),
    ("3-wood", 230.0),
    ("5-wood", 215.0),
    ("3-iron", 210.0),
    ("4-iron", 195.0),
    ("5-iron", 180.0),
    ("6-iron", 165.0),
    ("7-iron", 155.0),
    ("8-iron", 145.0),
    ("9-iron", 135.0),
    ("P-Wedge", 120.0),
    ("S-Wedge", 105.0),
];

/// Carry distance per club in the active display unit.
///
/// Entries keep insertion order, which is also the order clubs are tried in
/// when two of them are equally close to a target. A distance of zero marks
/// the club as unconfigured.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClubDistanceTable {
    entries: Vec<(String, f64)>,
}

impl ClubDistanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_bag() -> Self {
        DEFAULT_BAG_METERS.iter().copied().collect()
    }

    /// Sets a club's distance, keeping its position if it is already in the bag.
    pub fn set(&mut self, club: impl Into<String>, distance: f64) {
        let club = club.into();
        match self.entries.iter_mut().find(|(name, _)| *name == club) {
            Some(entry) => entry.1 = distance,
            None => self.entries.push((club, distance)),
        }
    }

    pub fn get(&self, club: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == club)
            .map(|(_, d)| *d)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, d)| (name.as_str(), *d))
    }

    /// Clubs that have a usable distance, in bag order.
    pub fn configured(&self) -> impl Iterator<Item = (&str, f64)> {
        self.iter().filter(|(_, d)| is_configured(*d))
    }

    pub fn configured_count(&self) -> usize {
        self.configured().count()
    }

    /// Configured clubs with their distances converted to meters.
    pub fn configured_meters(&self, units: UnitSystem) -> Vec<(&str, f64)> {
        self.configured()
            .map(|(name, d)| (name, units.distance_to_meters(d)))
            .collect()
    }

    /// Re-expresses every configured distance in the other unit system,
    /// rounded to whole units. Unconfigured entries are left at their value.
    pub fn convert_units(&mut self, from: UnitSystem, to: UnitSystem) {
        if from == to {
            return;
        }
        for (_, distance) in self.entries.iter_mut() {
            if is_configured(*distance) {
                let meters = from.distance_to_meters(*distance);
                *distance = round_half_up(to.distance_from_meters(meters)) as f64;
            }
        }
    }
}

fn is_configured(distance: f64) -> bool {
    distance.is_finite() && distance > 0.0
}

impl<S: Into<String>> FromIterator<(S, f64)> for ClubDistanceTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut table = ClubDistanceTable::new();
        for (club, distance) in iter {
            table.set(club, distance);
        }
        table
    }
}

impl Serialize for ClubDistanceTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (club, distance) in &self.entries {
            map.serialize_entry(club, distance)?;
        }
        map.end()
    }
}

struct TableVisitor;

impl<'de> Visitor<'de> for TableVisitor {
    type Value = ClubDistanceTable;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of club name to carry distance")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = ClubDistanceTable::new();
        while let Some((club, distance)) = access.next_entry::<String, Option<f64>>()? {
            table.set(club, distance.unwrap_or(0.0));
        }
        Ok(table)
    }
}

impl<'de> Deserialize<'de> for ClubDistanceTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TableVisitor)
    }
}
