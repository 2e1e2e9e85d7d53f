//! Demo Mode - Synthetic race data generator
//!
//! Produces a fixed driver roster and randomized lap, pit-stop and team
//! radio records for use when the telemetry API is unavailable or when the
//! dashboard is configured to run offline. The roster never changes between
//! calls; everything else is re-rolled on every request.

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::format::format_time;
use crate::model::{Driver, DriverNumber, LapData, PitStop, SessionKey, TeamRadio};

/// Session key stamped on every synthetic record
pub const MOCK_SESSION_KEY: SessionKey = 9001;

/// Audio reference attached to synthetic radio messages
pub const PLACEHOLDER_AUDIO_URL: &str = "https://example.com/audio/placeholder.mp3";

const HEADSHOT_BASE: &str =
    "https://media.formula1.com/d_driver_fallback_image.png/content/dam/fom-website/drivers";

const RADIO_MESSAGES: [&str; 9] = [
    "Box this lap, confirm.",
    "Great job, keep pushing.",
    "We need to manage these tires until the end.",
    "You're P2, gap to leader is 4.5 seconds.",
    "We're looking at a two-stop strategy.",
    "Yellow flag in sector 2, be careful.",
    "Rain expected in 10 minutes.",
    "Push now, we need to build a gap.",
    "Car behind is 1.2 seconds and closing.",
];

/// Lights-out time of the synthetic race; every generated timestamp is later
pub fn reference_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 14, 0, 0)
        .single()
        .unwrap_or_default()
}

/// The fixed synthetic roster, in no particular order
pub fn roster() -> Vec<Driver> {
    [
        (1, "VER", "Max", "Verstappen", "Red Bull Racing", "#0600EF", "NLD", 1, 92.532),
        (11, "PER", "Sergio", "Perez", "Red Bull Racing", "#0600EF", "MEX", 5, 93.124),
        (44, "HAM", "Lewis", "Hamilton", "Mercedes", "#00D2BE", "GBR", 4, 92.987),
        (63, "RUS", "George", "Russell", "Mercedes", "#00D2BE", "GBR", 7, 93.201),
        (16, "LEC", "Charles", "Leclerc", "Ferrari", "#DC0000", "MON", 2, 92.634),
        (55, "SAI", "Carlos", "Sainz", "Ferrari", "#DC0000", "ESP", 3, 92.765),
        (4, "NOR", "Lando", "Norris", "McLaren", "#FF8700", "GBR", 6, 93.089),
        (81, "PIA", "Oscar", "Piastri", "McLaren", "#FF8700", "AUS", 8, 93.245),
    ]
    .into_iter()
    .map(
        |(number, acronym, first, last, team, color, country, position, fastest)| Driver {
            driver_number: number,
            name_acronym: acronym.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            team_name: team.to_string(),
            team_color: color.to_string(),
            headshot_url: headshot_url(first, last),
            country_code: country.to_string(),
            session_key: MOCK_SESSION_KEY,
            championship_position: Some(position),
            fastest_lap_time: Some(fastest),
        },
    )
    .collect()
}

/// Formula One media path for a driver portrait, e.g.
/// `M/MAXVER01_Max_Verstappen/maxver01.png`
fn headshot_url(first: &str, last: &str) -> String {
    let code: String = first.chars().take(3).chain(last.chars().take(3)).collect();
    let initial = first.chars().next().unwrap_or_default();
    format!(
        "{}/{}/{}01_{}_{}/{}01.png",
        HEADSHOT_BASE,
        initial,
        code.to_uppercase(),
        first,
        last,
        code.to_lowercase()
    )
}

/// Look up a roster driver by number
pub fn roster_driver(driver_number: DriverNumber) -> Option<Driver> {
    roster()
        .into_iter()
        .find(|d| d.driver_number == driver_number)
}

/// Generate a race distance of lap telemetry for a driver
///
/// Lap count is in [30, 50). Each sector is sampled around a 30/40/30 split
/// of a base lap time in [90, 95) seconds and the lap duration is the sum of
/// the three sectors.
pub fn generate_lap_data<R: Rng + ?Sized>(
    rng: &mut R,
    driver_number: DriverNumber,
) -> Vec<LapData> {
    let lap_count = rng.gen_range(30..50);

    (1..=lap_count)
        .map(|lap_number| {
            let base_lap_time = rng.gen_range(90.0..95.0);
            let sector_1_time = to_millis(base_lap_time * 0.3 + rng.gen_range(0.0..0.5));
            let sector_2_time = to_millis(base_lap_time * 0.4 + rng.gen_range(0.0..0.5));
            let sector_3_time = to_millis(base_lap_time * 0.3 + rng.gen_range(0.0..0.5));
            let lap_duration = sector_1_time + sector_2_time + sector_3_time;

            LapData {
                driver_number,
                lap_number,
                lap_duration,
                lap_time: format_time(Some(lap_duration)),
                sector_1_time,
                sector_2_time,
                sector_3_time,
                i1_speed: rng.gen_range(270..300),
                i2_speed: rng.gen_range(250..290),
                st_speed: rng.gen_range(280..320),
                session_key: MOCK_SESSION_KEY,
            }
        })
        .collect()
}

/// Generate 1-3 pit stops at increasing laps
pub fn generate_pit_stops<R: Rng + ?Sized>(
    rng: &mut R,
    driver_number: DriverNumber,
) -> Vec<PitStop> {
    let stops = rng.gen_range(1..=3u32);

    (0..stops)
        .map(|i| {
            // Window width (10) stays below the spacing (15) so laps never overlap
            let lap_number = 10 + i * 15 + rng.gen_range(0..10);

            PitStop {
                driver_number,
                lap_number,
                pit_duration: rng.gen_range(20.0..30.0),
                session_key: MOCK_SESSION_KEY,
                timestamp: race_time_at_lap(rng, lap_number),
            }
        })
        .collect()
}

/// Generate 3-8 team radio messages from the canned phrase pool
pub fn generate_team_radio<R: Rng + ?Sized>(
    rng: &mut R,
    driver_number: DriverNumber,
) -> Vec<TeamRadio> {
    let count = rng.gen_range(3..=8);

    (0..count)
        .map(|_| {
            let lap = rng.gen_range(1..=50);
            let timestamp = race_time_at_lap(rng, lap);
            let message = RADIO_MESSAGES[rng.gen_range(0..RADIO_MESSAGES.len())];

            TeamRadio {
                driver_number,
                audio_url: PLACEHOLDER_AUDIO_URL.to_string(),
                message: message.to_string(),
                session_key: MOCK_SESSION_KEY,
                timestamp,
            }
        })
        .collect()
}

/// Estimate wall-clock time at a lap: 90s per lap plus up to a minute
fn race_time_at_lap<R: Rng + ?Sized>(rng: &mut R, lap: u32) -> DateTime<Utc> {
    let elapsed_ms = i64::from(lap) * 90_000 + rng.gen_range(0..60_000);
    reference_start() + Duration::milliseconds(elapsed_ms)
}

fn to_millis(seconds: f64) -> f64 {
    (seconds * 1000.0).round() / 1000.0
}

/// Synthetic data source owning its random number generator
///
/// Seed it for reproducible output in tests; the default draws from OS
/// entropy.
pub struct DemoGenerator {
    rng: Mutex<StdRng>,
}

impl Default for DemoGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoGenerator {
    /// Create a generator seeded from OS entropy
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Create a generator with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Wrap an existing generator
    pub fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Synthetic session keys (always a single session)
    pub fn session_keys(&self) -> Vec<SessionKey> {
        vec![MOCK_SESSION_KEY]
    }

    /// The fixed roster
    pub fn drivers(&self) -> Vec<Driver> {
        roster()
    }

    /// Recorded fastest lap of a roster driver
    pub fn fastest_lap(&self, driver_number: DriverNumber) -> Option<f64> {
        roster_driver(driver_number).and_then(|d| d.fastest_lap_time)
    }

    /// A fresh race distance of laps; see [`generate_lap_data`]
    pub fn lap_data(&self, driver_number: DriverNumber) -> Vec<LapData> {
        generate_lap_data(&mut *self.lock(), driver_number)
    }

    /// Fresh pit stops; see [`generate_pit_stops`]
    pub fn pit_stops(&self, driver_number: DriverNumber) -> Vec<PitStop> {
        generate_pit_stops(&mut *self.lock(), driver_number)
    }

    /// Fresh team radio; see [`generate_team_radio`]
    pub fn team_radio(&self, driver_number: DriverNumber) -> Vec<TeamRadio> {
        generate_team_radio(&mut *self.lock(), driver_number)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StdRng> {
        // The RNG holds no invariants a panicking holder could break
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_roster_is_stable() {
        assert_eq!(roster(), roster());
        assert_eq!(roster().len(), 8);
    }

    #[test]
    fn test_roster_positions_are_unique() {
        let positions: HashSet<u32> = roster()
            .iter()
            .filter_map(|d| d.championship_position)
            .collect();
        assert_eq!(positions, (1..=8).collect());
    }

    #[test]
    fn test_headshot_follows_media_layout() {
        let max = roster_driver(1).map(|d| d.headshot_url);
        assert_eq!(
            max.as_deref(),
            Some(
                "https://media.formula1.com/d_driver_fallback_image.png/content/dam/fom-website\
                 /drivers/M/MAXVER01_Max_Verstappen/maxver01.png"
            )
        );
    }

    #[test]
    fn test_seeded_generators_agree() {
        let a = DemoGenerator::seeded(7);
        let b = DemoGenerator::seeded(7);
        assert_eq!(a.lap_data(1), b.lap_data(1));
        assert_eq!(a.pit_stops(1), b.pit_stops(1));
        assert_eq!(a.team_radio(1), b.team_radio(1));
    }

    #[test]
    fn test_lap_time_matches_duration() {
        let laps = DemoGenerator::seeded(3).lap_data(16);
        for lap in laps {
            assert_eq!(lap.lap_time, format_time(Some(lap.lap_duration)));
            assert!(lap.lap_time.starts_with("1:3"), "{}", lap.lap_time);
        }
    }

    #[test]
    fn test_radio_uses_canned_phrases() {
        let radio = DemoGenerator::seeded(11).team_radio(44);
        assert!((3..=8).contains(&radio.len()));
        for msg in radio {
            assert!(RADIO_MESSAGES.contains(&msg.message.as_str()));
            assert_eq!(msg.audio_url, PLACEHOLDER_AUDIO_URL);
            assert!(msg.timestamp > reference_start());
        }
    }
}
