//! Dashboard Module
//!
//! View models consumed by the presentation layer: the standings list, the
//! per-driver detail view, and the series plotted on its charts.

use std::cmp::Ordering;

use serde::Serialize;
use thiserror::Error;

use crate::data::{DataService, DataSource};
use crate::format::{format_ordinal, format_time};
use crate::model::{Driver, DriverNumber, LapData, PitStop, TeamRadio};

/// Errors surfaced to the user by the dashboard
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    /// No driver with this number in the returned roster
    #[error("Driver not found")]
    DriverNotFound(DriverNumber),
}

/// Order drivers by championship position, unclassified drivers last
///
/// The sort is stable: equal positions keep their input order.
pub fn sort_by_championship(drivers: &mut [Driver]) {
    drivers.sort_by(|a, b| match (a.championship_position, b.championship_position) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// Summary shown on a driver's card in the standings grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverCard {
    /// Car number
    pub driver_number: DriverNumber,
    /// "First Last"
    pub name: String,
    /// Three-letter code
    pub acronym: String,
    /// Constructor name
    pub team_name: String,
    /// Accent colour for the card
    pub team_color: String,
    /// Portrait image URL
    pub headshot_url: String,
    /// e.g. "1st", or "N/A"
    pub position: String,
    /// e.g. "1:32.531", or "N/A"
    pub fastest_lap: String,
}

impl From<&Driver> for DriverCard {
    fn from(driver: &Driver) -> Self {
        Self {
            driver_number: driver.driver_number,
            name: driver.full_name(),
            acronym: driver.name_acronym.clone(),
            team_name: driver.team_name.clone(),
            team_color: driver.team_color.clone(),
            headshot_url: driver.headshot_url.clone(),
            position: format_ordinal(driver.championship_position),
            fastest_lap: format_time(driver.fastest_lap_time),
        }
    }
}

/// Speed samples of one lap
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpeedPoint {
    /// Lap number (x axis)
    pub lap: u32,
    /// Intermediate 1 speed, km/h
    pub i1_speed: u32,
    /// Intermediate 2 speed, km/h
    pub i2_speed: u32,
    /// Speed trap, km/h
    pub st_speed: u32,
}

/// Lap and sector times of one lap, seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LapTimePoint {
    /// Lap number (x axis)
    pub lap: u32,
    /// Whole lap
    pub lap_time: f64,
    /// Sector 1
    pub sector_1: f64,
    /// Sector 2
    pub sector_2: f64,
    /// Sector 3
    pub sector_3: f64,
}

/// Speed-trap chart data, one point per lap
pub fn speed_series(laps: &[LapData]) -> Vec<SpeedPoint> {
    laps.iter()
        .map(|lap| SpeedPoint {
            lap: lap.lap_number,
            i1_speed: lap.i1_speed,
            i2_speed: lap.i2_speed,
            st_speed: lap.st_speed,
        })
        .collect()
}

/// Lap and sector time chart data, one point per lap
pub fn lap_time_series(laps: &[LapData]) -> Vec<LapTimePoint> {
    laps.iter()
        .map(|lap| LapTimePoint {
            lap: lap.lap_number,
            lap_time: lap.lap_duration,
            sector_1: lap.sector_1_time,
            sector_2: lap.sector_2_time,
            sector_3: lap.sector_3_time,
        })
        .collect()
}

/// Everything shown on a driver's detail page
#[derive(Debug, Clone, Serialize)]
pub struct DriverDetail {
    /// The driver, with standings and fastest lap joined on
    pub driver: Driver,
    /// Lap telemetry across all sessions
    pub laps: Vec<LapData>,
    /// Ordered by lap number
    pub pit_stops: Vec<PitStop>,
    /// Team radio across all sessions
    pub team_radio: Vec<TeamRadio>,
    /// Provenance of each part
    #[serde(skip)]
    pub sources: DetailSources,
}

/// Which path produced each part of a [`DriverDetail`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailSources {
    /// Driver list the driver was looked up in
    pub drivers: DataSource,
    /// Lap telemetry
    pub laps: DataSource,
    /// Pit stops
    pub pit_stops: DataSource,
    /// Team radio
    pub team_radio: DataSource,
}

impl DriverDetail {
    /// Summary card for the header
    pub fn card(&self) -> DriverCard {
        DriverCard::from(&self.driver)
    }

    /// See [`speed_series`]
    pub fn speed_series(&self) -> Vec<SpeedPoint> {
        speed_series(&self.laps)
    }

    /// See [`lap_time_series`]
    pub fn lap_time_series(&self) -> Vec<LapTimePoint> {
        lap_time_series(&self.laps)
    }
}

impl DataService {
    /// Drivers ordered for the standings grid
    pub async fn standings_grid(&self) -> Vec<Driver> {
        let mut drivers = self.drivers().await.into_inner();
        sort_by_championship(&mut drivers);
        drivers
    }

    /// Load a driver's detail page
    ///
    /// The driver must be in the returned roster. Laps, pit stops and team
    /// radio are then fetched concurrently.
    pub async fn driver_detail(
        &self,
        driver_number: DriverNumber,
    ) -> Result<DriverDetail, DashboardError> {
        let drivers = self.drivers().await;
        let drivers_source = drivers.source();

        let driver = drivers
            .into_inner()
            .into_iter()
            .find(|d| d.driver_number == driver_number)
            .ok_or(DashboardError::DriverNotFound(driver_number))?;

        let (laps, pit_stops, team_radio) = tokio::join!(
            self.lap_data(driver_number),
            self.pit_stops(driver_number),
            self.team_radio(driver_number),
        );

        let sources = DetailSources {
            drivers: drivers_source,
            laps: laps.source(),
            pit_stops: pit_stops.source(),
            team_radio: team_radio.source(),
        };

        let mut pit_stops = pit_stops.into_inner();
        pit_stops.sort_by_key(|stop| stop.lap_number);

        Ok(DriverDetail {
            driver,
            laps: laps.into_inner(),
            pit_stops,
            team_radio: team_radio.into_inner(),
            sources,
        })
    }
}
