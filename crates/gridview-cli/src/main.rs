//! GridView terminal front end
//!
//! ```text
//! gridview [--config PATH] [--live] [--no-fallback] [--json] standings
//! gridview [--config PATH] [--live] [--no-fallback] [--json] driver NUMBER
//! gridview [--config PATH] [--live] [--no-fallback] [--json] sessions
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use gridview_core::dashboard::{DashboardError, DriverCard, DriverDetail};
use gridview_core::data::DataService;
use gridview_core::format::{format_ordinal, format_time, format_timestamp};
use gridview_core::prelude::DataConfig;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: gridview [--config PATH] [--live] [--no-fallback] [--json] \
                     <standings | driver NUMBER | sessions>";

enum Command {
    Standings,
    Driver(u32),
    Sessions,
}

struct Args {
    config: Option<PathBuf>,
    live: bool,
    no_fallback: bool,
    json: bool,
    command: Command,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut config = None;
    let mut live = false;
    let mut no_fallback = false;
    let mut json = false;
    let mut command = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                config = Some(PathBuf::from(path));
            }
            "--live" => live = true,
            "--no-fallback" => no_fallback = true,
            "--json" => json = true,
            "standings" => command = Some(Command::Standings),
            "sessions" => command = Some(Command::Sessions),
            "driver" => {
                let number = args.next().context("driver needs a car number")?;
                let number = number
                    .parse()
                    .with_context(|| format!("invalid car number '{number}'"))?;
                command = Some(Command::Driver(number));
            }
            other => bail!("unexpected argument '{other}'\n{USAGE}"),
        }
    }

    Ok(Args {
        config,
        live,
        no_fallback,
        json,
        command: command.context(USAGE)?,
    })
}

fn load_config(args: &Args) -> Result<DataConfig> {
    let config = match &args.config {
        Some(path) => DataConfig::from_file(path)?,
        None => DataConfig::load()?,
    };
    let mut config = config.with_env_overrides()?;

    if args.live {
        config = config.with_mock_data(false);
    }
    if args.no_fallback {
        config = config.with_fallback(false);
    }
    Ok(config)
}

fn print_standings(drivers: &[gridview_core::model::Driver]) {
    println!("{:<6} {:<4} {:<22} {:<18} {}", "POS", "NO", "DRIVER", "TEAM", "FASTEST");
    for driver in drivers {
        let card = DriverCard::from(driver);
        println!(
            "{:<6} {:<4} {:<22} {:<18} {}",
            card.position, card.driver_number, card.name, card.team_name, card.fastest_lap
        );
    }
}

fn print_detail(detail: &DriverDetail) {
    let driver = &detail.driver;
    println!("{} | {} | #{}", driver.full_name(), driver.team_name, driver.driver_number);
    println!(
        "Position: {}  Fastest Lap: {}  Country: {}",
        format_ordinal(driver.championship_position),
        format_time(driver.fastest_lap_time),
        driver.country_code
    );

    println!("\nLaps ({})", detail.sources.laps);
    if detail.laps.is_empty() {
        println!("  No telemetry data available for this driver.");
    }
    for lap in &detail.laps {
        println!(
            "  {:>3}  {}  S1 {:>7.3}  S2 {:>7.3}  S3 {:>7.3}  {:>3}/{:>3}/{:>3} km/h",
            lap.lap_number,
            format_time(Some(lap.lap_duration)),
            lap.sector_1_time,
            lap.sector_2_time,
            lap.sector_3_time,
            lap.i1_speed,
            lap.i2_speed,
            lap.st_speed
        );
    }

    println!("\nPit Stops ({})", detail.sources.pit_stops);
    if detail.pit_stops.is_empty() {
        println!("  No pit stop data available for this driver.");
    }
    for stop in &detail.pit_stops {
        println!(
            "  Lap {:>3}  {:>6.2}s  {}",
            stop.lap_number,
            stop.pit_duration,
            format_timestamp(stop.timestamp)
        );
    }

    // Team radio is only shown when there is something to show
    if !detail.team_radio.is_empty() {
        println!("\nTeam Radio ({})", detail.sources.team_radio);
        for radio in &detail.team_radio {
            println!("  {}  {}", format_timestamp(radio.timestamp), radio.message);
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    tracing::debug!(?config, "Loaded configuration");
    let service = DataService::new(config);

    match args.command {
        Command::Standings => {
            let drivers = service.standings_grid().await;
            if args.json {
                let cards: Vec<DriverCard> = drivers.iter().map(DriverCard::from).collect();
                println!("{}", serde_json_pretty(&cards)?);
            } else {
                print_standings(&drivers);
            }
        }
        Command::Driver(number) => match service.driver_detail(number).await {
            Ok(detail) if args.json => println!("{}", serde_json_pretty(&detail)?),
            Ok(detail) => print_detail(&detail),
            Err(DashboardError::DriverNotFound(_)) => {
                eprintln!("Driver not found. Run `gridview standings` to list drivers.");
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Sessions => {
            let outcome = service.session_keys().await;
            if args.json {
                // {"source": "live", "data": [...]}
                println!("{}", serde_json_pretty(&outcome)?);
                return Ok(ExitCode::SUCCESS);
            }
            println!("Sessions ({})", outcome.source());
            for key in outcome.into_inner() {
                println!("  {key}");
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn serde_json_pretty<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize output")
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    run(args).await
}
