//! Golf caddie: recommends a club for a shot from the player's carry
//! distances and the conditions (wind, lie, slope, pin, temperature and
//! which way the player would rather miss).

pub mod calculator;
pub mod clubs;
pub mod conditions;
pub mod error;
pub mod profile;
pub mod session;
pub mod units;

pub use calculator::{calculate, recommend, Recommendation, ShotConditions, ShotInput, ShotResult};
pub use clubs::ClubDistanceTable;
pub use error::CaddieError;
pub use profile::Profile;
pub use session::CaddieSession;
pub use units::UnitSystem;
