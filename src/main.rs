use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use caddie::conditions::{AirTemperature, Elevation, Lie, MissPreference, PinPosition, WindDirection};
use caddie::{CaddieSession, Profile, ShotResult, UnitSystem};

#[derive(Parser, Debug)]
#[command(name = "caddie-rs")]
#[command(about = "Golf caddie - club recommendation for the shot in front of you", long_about = None)]
struct Args {
    /// Distance to the pin (m, or yd in imperial units)
    #[arg(short, long)]
    distance: Option<String>,

    /// Wind speed (m/s, or mph in imperial units)
    #[arg(short, long, default_value = "0")]
    wind_speed: String,

    /// Wind direction: headw, tailw, leftw, rightw
    #[arg(long)]
    wind: Option<WindDirection>,

    /// Lie: fairway, rough, sand, tee
    #[arg(short, long)]
    lie: Option<Lie>,

    /// Pin position: front, middle, back
    #[arg(short, long)]
    pin: Option<PinPosition>,

    /// Preferred miss: none, left, right, short, long
    #[arg(short, long)]
    miss: Option<MissPreference>,

    /// Elevation: hill10, hill, nohill, hill5, hillneg10
    #[arg(short, long)]
    elevation: Option<Elevation>,

    /// Air temperature band: 10c, 15c, 20c, 25c, 30c
    #[arg(short, long)]
    temperature: Option<AirTemperature>,

    /// Enter and show distances in yards and wind in mph, converting the
    /// profile's club distances if it is metric
    #[arg(long)]
    imperial: bool,

    /// Enter and show distances in meters and wind in m/s, converting the
    /// profile's club distances if it is imperial
    #[arg(long, conflicts_with = "imperial")]
    metric: bool,

    /// Player profile (JSON) with unit system and club distances
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Override a club distance, e.g. --club 7-iron=150 (repeatable)
    #[arg(long = "club", value_name = "NAME=DIST")]
    clubs: Vec<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Show the elevation and temperature choices and exit
    #[arg(long)]
    options: bool,

    /// Write the resulting profile (after overrides) to this path
    #[arg(long)]
    save_profile: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let profile = match &args.profile {
        Some(path) => Profile::load(path)
            .with_context(|| format!("Failed to load profile {}", path.display()))?,
        None => Profile::default(),
    };

    let mut session = CaddieSession::from_profile(profile);

    // Toggling converts the profile bag into the requested unit
    let wanted = if args.imperial {
        UnitSystem::Imperial
    } else if args.metric {
        UnitSystem::Metric
    } else {
        session.unit_system()
    };
    if session.unit_system() != wanted {
        session.toggle_units();
    }

    for entry in &args.clubs {
        let (name, value) = entry
            .split_once('=')
            .with_context(|| format!("Club override {:?} must look like NAME=DIST", entry))?;
        session.set_club_distance(name.trim(), value);
    }

    if let Some(path) = &args.save_profile {
        session
            .to_profile()
            .save(path)
            .with_context(|| format!("Failed to save profile {}", path.display()))?;
    }

    if args.options {
        print_options(&session);
        return Ok(());
    }

    {
        let shot = session.shot_mut();
        shot.target_distance = args.distance.clone().unwrap_or_default();
        shot.wind_speed = args.wind_speed.clone();
        shot.wind_direction = args.wind.unwrap_or_default();
        shot.lie = args.lie.unwrap_or_default();
        shot.pin_position = args.pin.unwrap_or_default();
        shot.miss_preference = args.miss.unwrap_or_default();
        shot.elevation = args.elevation.unwrap_or_default();
        shot.air_temperature = args.temperature.unwrap_or_default();
    }

    let result = session.calculate();

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).context("Failed to serialize result")?
        );
    } else {
        print_result(&session, &result);
    }

    Ok(())
}

fn print_options(session: &CaddieSession) {
    let units = session.unit_system();
    println!("Units: {}", units);
    println!();
    println!("Hill Elevation ({}):", units.distance_unit());
    for (code, label) in session.elevation_options() {
        println!("  {:<10} {}", code, label);
    }
    println!("Air Temperature ({}):", units.temperature_unit());
    for (code, label) in session.temperature_options() {
        println!("  {:<10} {}", code, label);
    }
    println!("Clubs ({}):", units.distance_unit());
    for (club, distance) in session.clubs().iter() {
        if distance > 0.0 {
            println!("  {:<10} {:.0}", club, distance);
        } else {
            println!("  {:<10} -", club);
        }
    }
}

fn print_result(session: &CaddieSession, result: &ShotResult) {
    let units = session.unit_system();
    let shot = session.shot();

    println!();
    println!("{}", "-".repeat(40));
    println!(
        "  Target:       {} {}",
        shot.target_distance.trim(),
        units.distance_unit()
    );
    if shot.wind_direction != WindDirection::None {
        println!(
            "  Wind:         {} {} {}",
            shot.wind_speed.trim(),
            units.wind_unit(),
            shot.wind_direction.label()
        );
    }
    println!("  Lie:          {}", shot.lie.label());
    println!(
        "  Plays as:     {} {}",
        result.adjusted_distance,
        units.distance_unit()
    );
    println!("  Club:         {}", result.recommended_club());
    println!("{}", "-".repeat(40));
    println!();
}
