//! Data Access
//!
//! The six retrieval operations used by the dashboard. Every operation
//! follows the same two-tier policy:
//!
//! 1. With `use_mock_data` set, answer from the demo generator immediately.
//! 2. Otherwise call the telemetry API. If any request fails, or all of them
//!    succeed with zero records, answer from the demo generator when
//!    `mock_data_on_failure` is set and with [`Outcome::Empty`] when not.
//!
//! No operation returns an error. The [`Outcome`] tag records which path
//! produced the data. Nothing is cached; every call fetches or generates
//! afresh.

mod fanout;
mod outcome;

pub use fanout::{concat_branches, fan_out, join_positionally, Branch};
pub use outcome::{DataSource, Outcome};

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use crate::api::{ApiError, OpenF1Client, TelemetryApi};
use crate::config::DataConfig;
use crate::demo::DemoGenerator;
use crate::model::{Driver, DriverNumber, LapData, PitStop, SessionKey, StandingEntry, TeamRadio};

/// Data-access layer over the telemetry API and the demo generator
///
/// Clones share the API client and the generator.
#[derive(Clone)]
pub struct DataService {
    api: Arc<dyn TelemetryApi>,
    demo: Arc<DemoGenerator>,
    config: DataConfig,
}

impl DataService {
    /// Service backed by the OpenF1 client at `config.base_url`
    pub fn new(config: DataConfig) -> Self {
        let api = OpenF1Client::new(config.base_url.clone());
        Self::with_parts(config, Arc::new(api), DemoGenerator::new())
    }

    /// Service with an injected API and generator
    pub fn with_parts(config: DataConfig, api: Arc<dyn TelemetryApi>, demo: DemoGenerator) -> Self {
        Self {
            api,
            demo: Arc::new(demo),
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &DataConfig {
        &self.config
    }

    /// Session keys for the configured season
    pub async fn session_keys(&self) -> Outcome<Vec<SessionKey>> {
        self.resolve("session keys", self.remote_session_keys(), || {
            self.demo.session_keys()
        })
        .await
    }

    /// All drivers of the season, one record per driver number, with
    /// championship position and fastest lap joined on
    pub async fn drivers(&self) -> Outcome<Vec<Driver>> {
        self.resolve("drivers", self.remote_drivers(), || self.demo.drivers())
            .await
    }

    /// Championship position of every classified driver
    pub async fn championship_standings(&self) -> Outcome<Vec<StandingEntry>> {
        let year = self.config.season;
        let remote = async move {
            let standings = self.api.championship_standings(year).await?;
            if standings.is_empty() {
                return Err(ApiError::empty("championship standings"));
            }
            Ok(standings)
        };

        self.resolve("championship standings", remote, || {
            self.demo
                .drivers()
                .into_iter()
                .filter_map(|d| {
                    d.championship_position.map(|position| StandingEntry {
                        driver_number: d.driver_number,
                        position,
                    })
                })
                .collect()
        })
        .await
    }

    /// Fastest lap of a driver in seconds, across all sessions
    pub async fn fastest_lap(&self, driver_number: DriverNumber) -> Outcome<Option<f64>> {
        let remote = async move {
            let laps = self.remote_laps(driver_number).await?;
            let fastest = laps
                .iter()
                .map(|lap| lap.lap_duration)
                .filter(|d| d.is_finite() && *d > 0.0)
                .min_by(f64::total_cmp)
                .ok_or_else(|| ApiError::empty("timed laps"))?;
            Ok::<_, ApiError>(Some(fastest))
        };

        self.resolve("fastest lap", remote, || self.demo.fastest_lap(driver_number))
            .await
    }

    /// Lap telemetry of a driver across all sessions
    pub async fn lap_data(&self, driver_number: DriverNumber) -> Outcome<Vec<LapData>> {
        self.resolve("lap data", self.remote_laps(driver_number), || {
            self.demo.lap_data(driver_number)
        })
        .await
    }

    /// Pit stops of a driver across all sessions
    pub async fn pit_stops(&self, driver_number: DriverNumber) -> Outcome<Vec<PitStop>> {
        let remote = async move {
            let sessions = self.remote_session_keys().await?;
            let api = self.api.clone();
            let branches = fan_out(&sessions, move |key| {
                let api = api.clone();
                async move { api.pit_stops(driver_number, key).await }
            })
            .await;
            concat_branches(branches, "pit stops")
        };

        self.resolve("pit stops", remote, || self.demo.pit_stops(driver_number))
            .await
    }

    /// Team radio of a driver across all sessions
    pub async fn team_radio(&self, driver_number: DriverNumber) -> Outcome<Vec<TeamRadio>> {
        let remote = async move {
            let sessions = self.remote_session_keys().await?;
            let api = self.api.clone();
            let branches = fan_out(&sessions, move |key| {
                let api = api.clone();
                async move { api.team_radio(driver_number, key).await }
            })
            .await;
            concat_branches(branches, "team radio")
        };

        self.resolve("team radio", remote, || self.demo.team_radio(driver_number))
            .await
    }

    /// Apply the two-tier policy to one operation
    ///
    /// `remote` is only polled when demo data is not preferred.
    async fn resolve<T, Fut, S>(&self, what: &str, remote: Fut, synthetic: S) -> Outcome<T>
    where
        Fut: Future<Output = Result<T, ApiError>>,
        S: FnOnce() -> T,
    {
        if self.config.use_mock_data {
            tracing::debug!("Using demo {what}");
            return Outcome::Synthetic(synthetic());
        }

        match remote.await {
            Ok(value) => Outcome::Live(value),
            Err(e) => {
                tracing::warn!("Failed to fetch {what}: {e}");
                if self.config.mock_data_on_failure {
                    tracing::info!("Using demo {what} as fallback");
                    Outcome::Fallback(synthetic())
                } else {
                    Outcome::Empty
                }
            }
        }
    }

    async fn remote_session_keys(&self) -> Result<Vec<SessionKey>, ApiError> {
        let keys = self.api.sessions(self.config.season).await?;
        if keys.is_empty() {
            return Err(ApiError::empty("session keys"));
        }
        Ok(keys)
    }

    async fn remote_laps(&self, driver_number: DriverNumber) -> Result<Vec<LapData>, ApiError> {
        let sessions = self.remote_session_keys().await?;
        let api = self.api.clone();
        let branches = fan_out(&sessions, move |key| {
            let api = api.clone();
            async move { api.laps(driver_number, key).await }
        })
        .await;
        concat_branches(branches, "lap data")
    }

    /// Drivers from every session, deduplicated, with standings and fastest
    /// laps joined on. Costs one request per session, one for standings and
    /// a fastest-lap fan-out per driver.
    async fn remote_drivers(&self) -> Result<Vec<Driver>, ApiError> {
        let sessions = self.remote_session_keys().await?;
        let api = self.api.clone();
        let branches = fan_out(&sessions, move |key| {
            let api = api.clone();
            async move { api.drivers(key).await }
        })
        .await;
        let drivers = dedup_drivers(concat_branches(branches, "drivers")?);

        let standings = self.championship_standings().await.into_inner();

        let handles = drivers
            .iter()
            .map(|driver| {
                let service = self.clone();
                let number = driver.driver_number;
                tokio::spawn(async move {
                    Ok::<_, ApiError>(service.fastest_lap(number).await.into_inner())
                })
            })
            .collect();
        let fastest_laps = join_positionally(handles).await;

        drivers
            .into_iter()
            .zip(fastest_laps)
            .map(|(driver, fastest)| Ok(join_driver(driver, &standings, fastest?)))
            .collect()
    }
}

/// One record per driver number: first-seen order, last-seen values
pub fn dedup_drivers(drivers: Vec<Driver>) -> Vec<Driver> {
    let mut index: HashMap<DriverNumber, usize> = HashMap::new();
    let mut unique: Vec<Driver> = Vec::new();

    for driver in drivers {
        match index.get(&driver.driver_number) {
            Some(&i) => unique[i] = driver,
            None => {
                index.insert(driver.driver_number, unique.len());
                unique.push(driver);
            }
        }
    }
    unique
}

/// Attach championship position and fastest lap to a driver
pub fn join_driver(
    mut driver: Driver,
    standings: &[StandingEntry],
    fastest_lap: Option<f64>,
) -> Driver {
    driver.championship_position = standings
        .iter()
        .find(|s| s.driver_number == driver.driver_number)
        .map(|s| s.position);
    driver.fastest_lap_time = fastest_lap;
    driver
}
