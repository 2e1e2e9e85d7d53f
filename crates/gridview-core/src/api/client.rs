//! HTTP client for the OpenF1 API
//!
//! ## Endpoints
//!
//! - `sessions?year=`
//! - `drivers?session_key=`
//! - `laps?driver_number=&session_key=`
//! - `pit?driver_number=&session_key=`
//! - `team_radio?driver_number=&session_key=`
//! - `championship/drivers?year=`

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{ApiError, TelemetryApi};
use crate::format::format_time;
use crate::model::{Driver, DriverNumber, LapData, PitStop, SessionKey, StandingEntry, TeamRadio};

/// Public OpenF1 endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.openf1.org/v1";

/// Session listing entry; only the key is used
#[derive(Debug, Deserialize)]
struct SessionRecord {
    session_key: SessionKey,
}

/// Telemetry API client over HTTPS
#[derive(Debug, Clone)]
pub struct OpenF1Client {
    client: reqwest::Client,
    base_url: String,
}

impl OpenF1Client {
    /// Create a client for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("GridView/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        OpenF1Client {
            client,
            base_url: base_url.into(),
        }
    }

    /// Base URL requests are made against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of an endpoint path
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint_url(path);
        tracing::debug!(%url, ?query, "Requesting telemetry");

        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: path.to_string(),
                status,
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode {
            endpoint: path.to_string(),
            message: e.to_string(),
        })
    }
}

impl Default for OpenF1Client {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn driver_query(
    driver_number: DriverNumber,
    session_key: SessionKey,
) -> [(&'static str, String); 2] {
    [
        ("driver_number", driver_number.to_string()),
        ("session_key", session_key.to_string()),
    ]
}

/// Drop stops the API reported without a pit-lane time
fn timed_stops(stops: Vec<PitStop>) -> Vec<PitStop> {
    stops
        .into_iter()
        .filter(|stop| stop.pit_duration.is_finite() && stop.pit_duration > 0.0)
        .collect()
}

#[async_trait]
impl TelemetryApi for OpenF1Client {
    async fn sessions(&self, year: i32) -> Result<Vec<SessionKey>, ApiError> {
        let sessions: Vec<SessionRecord> =
            self.get_json("sessions", &[("year", year.to_string())]).await?;
        Ok(sessions.into_iter().map(|s| s.session_key).collect())
    }

    async fn drivers(&self, session_key: SessionKey) -> Result<Vec<Driver>, ApiError> {
        self.get_json("drivers", &[("session_key", session_key.to_string())])
            .await
    }

    async fn laps(
        &self,
        driver_number: DriverNumber,
        session_key: SessionKey,
    ) -> Result<Vec<LapData>, ApiError> {
        let mut laps: Vec<LapData> = self
            .get_json("laps", &driver_query(driver_number, session_key))
            .await?;

        // The API does not send a display string
        for lap in laps.iter_mut().filter(|l| l.lap_time.is_empty()) {
            lap.lap_time = format_time(Some(lap.lap_duration));
        }
        Ok(laps)
    }

    async fn pit_stops(
        &self,
        driver_number: DriverNumber,
        session_key: SessionKey,
    ) -> Result<Vec<PitStop>, ApiError> {
        let stops = self
            .get_json("pit", &driver_query(driver_number, session_key))
            .await?;
        Ok(timed_stops(stops))
    }

    async fn team_radio(
        &self,
        driver_number: DriverNumber,
        session_key: SessionKey,
    ) -> Result<Vec<TeamRadio>, ApiError> {
        self.get_json("team_radio", &driver_query(driver_number, session_key))
            .await
    }

    async fn championship_standings(&self, year: i32) -> Result<Vec<StandingEntry>, ApiError> {
        self.get_json("championship/drivers", &[("year", year.to_string())])
            .await
    }
}
