//! Data Model
//!
//! Immutable records returned by the data-access layer. Field names follow
//! the telemetry API's JSON so remote payloads decode directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Permanent car number identifying a driver
pub type DriverNumber = u32;

/// Opaque identifier of a competitive session
pub type SessionKey = u32;

/// A driver entered in a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    /// Car number
    pub driver_number: DriverNumber,
    /// Three-letter code shown on timing screens (e.g. "VER")
    #[serde(default, deserialize_with = "nullable")]
    pub name_acronym: String,
    /// Given name
    #[serde(default, deserialize_with = "nullable")]
    pub first_name: String,
    /// Family name
    #[serde(default, deserialize_with = "nullable")]
    pub last_name: String,
    /// Constructor the driver races for
    #[serde(default, deserialize_with = "nullable")]
    pub team_name: String,
    /// Display colour hint, "#RRGGBB" for roster entries
    #[serde(default, alias = "team_colour", deserialize_with = "nullable")]
    pub team_color: String,
    /// Portrait image URL
    #[serde(default, deserialize_with = "nullable")]
    pub headshot_url: String,
    /// Three-letter nationality code
    #[serde(default, deserialize_with = "nullable")]
    pub country_code: String,
    /// Session the record was reported in
    pub session_key: SessionKey,
    /// Absent until standings are joined onto the driver
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub championship_position: Option<u32>,
    /// Seconds; absent until computed from lap data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fastest_lap_time: Option<f64>,
}

impl Driver {
    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Timing and speed-trap telemetry for one lap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapData {
    /// Car number
    pub driver_number: DriverNumber,
    /// 1-based lap index within the session
    pub lap_number: u32,
    /// Total lap time in seconds
    #[serde(default, deserialize_with = "nullable")]
    pub lap_duration: f64,
    /// Display form of the lap time ("m:ss.mmm")
    #[serde(default)]
    pub lap_time: String,
    /// Sector 1 time, seconds
    #[serde(default, deserialize_with = "nullable")]
    pub sector_1_time: f64,
    /// Sector 2 time, seconds
    #[serde(default, deserialize_with = "nullable")]
    pub sector_2_time: f64,
    /// Sector 3 time, seconds
    #[serde(default, deserialize_with = "nullable")]
    pub sector_3_time: f64,
    /// Intermediate 1 speed (km/h)
    #[serde(default, deserialize_with = "nullable")]
    pub i1_speed: u32,
    /// Intermediate 2 speed (km/h)
    #[serde(default, deserialize_with = "nullable")]
    pub i2_speed: u32,
    /// Speed trap (km/h)
    #[serde(default, deserialize_with = "nullable")]
    pub st_speed: u32,
    /// Session the lap was driven in
    pub session_key: SessionKey,
}

/// A single pit stop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitStop {
    /// Car number
    pub driver_number: DriverNumber,
    /// Lap on which the car entered the pits
    pub lap_number: u32,
    /// Time spent in the pit lane, seconds. Zero when the API sent null;
    /// the client drops such records.
    #[serde(default, deserialize_with = "nullable")]
    pub pit_duration: f64,
    /// Session the stop was made in
    pub session_key: SessionKey,
    /// Pit entry time
    #[serde(alias = "date")]
    pub timestamp: DateTime<Utc>,
}

/// A team radio message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRadio {
    /// Car number
    pub driver_number: DriverNumber,
    /// Recording of the message
    #[serde(alias = "recording_url")]
    pub audio_url: String,
    /// Transcript
    #[serde(default, deserialize_with = "nullable")]
    pub message: String,
    /// Session the message was sent in
    pub session_key: SessionKey,
    /// When the message was sent
    #[serde(alias = "date")]
    pub timestamp: DateTime<Utc>,
}

/// A driver's position in the championship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingEntry {
    /// Car number
    pub driver_number: DriverNumber,
    /// 1 for the leader
    pub position: u32,
}

/// Decode `null` as the type's default. The API leaves many fields null
/// (e.g. the out-lap has no duration).
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
