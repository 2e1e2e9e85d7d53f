use gridview_core::demo::{
    generate_lap_data, generate_pit_stops, generate_team_radio, reference_start, roster,
    DemoGenerator, MOCK_SESSION_KEY,
};
use gridview_core::dashboard::sort_by_championship;
use gridview_core::model::Driver;
use rand::rngs::StdRng;
use rand::SeedableRng;

const SEEDS: std::ops::Range<u64> = 0..200;

#[test]
fn test_sectors_sum_to_lap_duration() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        for lap in generate_lap_data(&mut rng, 1) {
            assert_eq!(
                lap.sector_1_time + lap.sector_2_time + lap.sector_3_time,
                lap.lap_duration,
                "seed {} lap {}",
                seed,
                lap.lap_number
            );
        }
    }
}

#[test]
fn test_speeds_within_bands() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        for lap in generate_lap_data(&mut rng, 16) {
            assert!((270..300).contains(&lap.i1_speed), "i1 {}", lap.i1_speed);
            assert!((250..290).contains(&lap.i2_speed), "i2 {}", lap.i2_speed);
            assert!((280..320).contains(&lap.st_speed), "st {}", lap.st_speed);
        }
    }
}

#[test]
fn test_lap_numbers_contiguous() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let laps = generate_lap_data(&mut rng, 44);

        assert!((30..50).contains(&laps.len()), "{} laps", laps.len());
        for (i, lap) in laps.iter().enumerate() {
            assert_eq!(lap.lap_number as usize, i + 1);
            assert_eq!(lap.driver_number, 44);
            assert_eq!(lap.session_key, MOCK_SESSION_KEY);
        }
    }
}

#[test]
fn test_pit_stop_shape() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let stops = generate_pit_stops(&mut rng, 55);

        assert!((1..=3).contains(&stops.len()), "{} stops", stops.len());
        assert!(stops.windows(2).all(|w| w[0].lap_number < w[1].lap_number));
        for stop in &stops {
            assert!(stop.pit_duration >= 20.0 && stop.pit_duration < 30.0);
            assert!(stop.timestamp > reference_start());
        }
    }
}

#[test]
fn test_team_radio_shape() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let radio = generate_team_radio(&mut rng, 63);

        assert!((3..=8).contains(&radio.len()));
        for msg in &radio {
            assert!(!msg.message.is_empty());
            assert!(msg.timestamp > reference_start());
        }
    }
}

#[test]
fn test_generator_output_varies_between_calls() {
    let demo = DemoGenerator::seeded(1);
    let first = demo.lap_data(1);
    let second = demo.lap_data(1);
    assert_ne!(first, second);
}

#[test]
fn test_roster_covers_distinct_teams_and_countries() {
    let drivers = roster();
    let mut teams: Vec<&str> = drivers.iter().map(|d| d.team_name.as_str()).collect();
    teams.sort_unstable();
    teams.dedup();
    assert_eq!(teams.len(), 4);

    let mut countries: Vec<&str> = drivers.iter().map(|d| d.country_code.as_str()).collect();
    countries.sort_unstable();
    countries.dedup();
    assert!(countries.len() >= 5);
}

#[test]
fn test_roster_sorts_by_position() {
    let mut drivers = roster();
    let positions: Vec<Option<u32>> = drivers.iter().map(|d| d.championship_position).collect();
    assert_eq!(
        positions,
        [1, 5, 4, 7, 2, 3, 6, 8].into_iter().map(Some).collect::<Vec<_>>()
    );

    sort_by_championship(&mut drivers);
    let acronyms: Vec<&str> = drivers.iter().map(|d| d.name_acronym.as_str()).collect();
    assert_eq!(acronyms, ["VER", "LEC", "SAI", "HAM", "PER", "NOR", "RUS", "PIA"]);
}

#[test]
fn test_sort_is_stable_with_missing_positions() {
    let mut drivers: Vec<Driver> = roster();
    drivers[1].championship_position = None; // PER
    drivers[3].championship_position = None; // RUS
    drivers[6].championship_position = Some(1); // NOR ties VER

    sort_by_championship(&mut drivers);
    let acronyms: Vec<&str> = drivers.iter().map(|d| d.name_acronym.as_str()).collect();
    assert_eq!(acronyms, ["VER", "NOR", "LEC", "SAI", "HAM", "PIA", "PER", "RUS"]);
}
