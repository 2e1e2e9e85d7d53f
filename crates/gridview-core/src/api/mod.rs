//! Telemetry API
//!
//! Read-only access to the remote Formula One telemetry service. The
//! [`TelemetryApi`] trait has one method per endpoint so the data-access
//! layer can be driven by the real HTTP client or by an in-memory fake.

mod client;
mod error;

pub use client::{OpenF1Client, DEFAULT_BASE_URL};
pub use error::ApiError;

use async_trait::async_trait;

use crate::model::{Driver, DriverNumber, LapData, PitStop, SessionKey, StandingEntry, TeamRadio};

/// One call per remote endpoint. Implementations report transport and
/// decoding failures; they do not treat empty payloads as errors.
#[async_trait]
pub trait TelemetryApi: Send + Sync {
    /// Session keys for a season
    async fn sessions(&self, year: i32) -> Result<Vec<SessionKey>, ApiError>;

    /// Drivers entered in a session
    async fn drivers(&self, session_key: SessionKey) -> Result<Vec<Driver>, ApiError>;

    /// Laps driven by a driver in a session
    async fn laps(
        &self,
        driver_number: DriverNumber,
        session_key: SessionKey,
    ) -> Result<Vec<LapData>, ApiError>;

    /// Pit stops made by a driver in a session
    async fn pit_stops(
        &self,
        driver_number: DriverNumber,
        session_key: SessionKey,
    ) -> Result<Vec<PitStop>, ApiError>;

    /// Team radio recorded for a driver in a session
    async fn team_radio(
        &self,
        driver_number: DriverNumber,
        session_key: SessionKey,
    ) -> Result<Vec<TeamRadio>, ApiError>;

    /// Drivers' championship standings for a season
    async fn championship_standings(&self, year: i32) -> Result<Vec<StandingEntry>, ApiError>;
}
