//! # GridView Core Library
//!
//! Core functionality for the GridView Formula One dashboard.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//!
//! This library provides:
//! - Driver, lap, pit-stop and team radio records for one season
//! - An HTTP client for the OpenF1 telemetry API
//! - A demo data generator for offline use
//! - A data-access layer that falls back to demo data when the API fails
//! - Display formatting and dashboard view models
//!
//! ## Example
//!
//! ```rust,ignore
//! use gridview_core::prelude::*;
//!
//! let service = DataService::new(DataConfig::live());
//!
//! // Standings, best first
//! for driver in service.standings_grid().await {
//!     let card = DriverCard::from(&driver);
//!     println!("{} {} {}", card.position, card.name, card.fastest_lap);
//! }
//!
//! // Everything for one driver
//! let detail = service.driver_detail(44).await?;
//! println!("{} laps", detail.laps.len());
//! ```

pub mod api;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod demo;
pub mod format;
pub mod model;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::api::{ApiError, OpenF1Client, TelemetryApi};
    pub use crate::config::{ConfigError, DataConfig};
    pub use crate::dashboard::{
        sort_by_championship, DashboardError, DriverCard, DriverDetail, LapTimePoint, SpeedPoint,
    };
    pub use crate::data::{DataService, DataSource, Outcome};
    pub use crate::demo::DemoGenerator;
    pub use crate::format::{format_date, format_ordinal, format_time};
    pub use crate::model::{
        Driver, DriverNumber, LapData, PitStop, SessionKey, StandingEntry, TeamRadio,
    };
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
