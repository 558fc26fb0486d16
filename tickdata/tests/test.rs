use std::fs;
use std::path::PathBuf;

use rust_decimal::Decimal;

use tickdata::config::GeneratorConfig;
use tickdata::error::TickError;
use tickdata::tick::parse_instant;
use tickdata::{generator, reader, vwap};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(name)
}

fn seeded_config(rows: u64) -> GeneratorConfig {
    let mut config = GeneratorConfig::new(rows, parse_instant("2024-10-20T10:00:00Z").unwrap());
    config.seed = Some(7);
    config
}

#[test]
fn test_generated_file_has_header_plus_n_rows() {
    let path = temp_path("tickdata-test-lines.csv");
    let rows = generator::write_csv_file(&seeded_config(250), &path).unwrap();
    assert_eq!(rows, 250);

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 251);
    assert_eq!(
        contents.lines().next().unwrap(),
        "Timestamp,Currency-pair,Price,Volume"
    );
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_invalid_config_leaves_no_file_behind() {
    let path = temp_path("tickdata-test-no-file.csv");
    let res = generator::write_csv_file(&seeded_config(0), &path);
    assert!(matches!(res, Err(TickError::InvalidCount)));
    assert!(!path.exists());
}

#[test]
fn test_same_seed_writes_identical_files() {
    let path_a = temp_path("tickdata-test-seed-a.csv");
    let path_b = temp_path("tickdata-test-seed-b.csv");
    let config = seeded_config(100);
    generator::write_csv_file(&config, &path_a).unwrap();
    generator::write_csv_file(&config, &path_b).unwrap();

    let a = fs::read_to_string(&path_a).unwrap();
    let b = fs::read_to_string(&path_b).unwrap();
    assert_eq!(a, b);
    fs::remove_file(&path_a).unwrap();
    fs::remove_file(&path_b).unwrap();
}

#[test]
fn test_generated_file_round_trips_through_reader() {
    let path = temp_path("tickdata-test-roundtrip.csv");
    let mut config = seeded_config(500);
    config.currency_pairs = vec!["USD/JPY".to_string(), "EUR/GBP".to_string()];
    generator::write_csv_file(&config, &path).unwrap();

    let ticks = reader::read_ticks_file(&path).unwrap();
    assert_eq!(ticks.len(), 500);
    assert_eq!(ticks[0].timestamp, config.start);
    for window in ticks.windows(2) {
        let delta = (window[1].timestamp - window[0].timestamp).num_seconds();
        assert!((1..=5).contains(&delta));
    }
    for tick in &ticks {
        assert!(config.currency_pairs.contains(&tick.currency_pair));
        assert!((500..=3000).contains(&tick.volume));
    }
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_fixture_hourly_vwaps() {
    let ticks = reader::read_ticks_file("../resources/input/ticks-small.csv").unwrap();
    assert_eq!(ticks.len(), 4);

    let series = vwap::hourly_vwaps(&ticks);
    assert_eq!(series.len(), 2);

    // (100 * 1000 + 200 * 3000) / 4000 for the 10:00 hour, a lone tick at 11:00
    let usd_jpy = &series["USD/JPY"];
    assert_eq!(
        usd_jpy,
        &vec![
            (
                parse_instant("2024-10-20T10:00:00Z").unwrap(),
                Decimal::from(175)
            ),
            (
                parse_instant("2024-10-20T11:00:00Z").unwrap(),
                Decimal::from(150)
            ),
        ]
    );
    assert_eq!(series["EUR/GBP"][0].1, Decimal::from(80));
}

#[test]
fn test_fixture_bad_rows_are_skipped() {
    let ticks = reader::read_ticks_file("../resources/input/bad-ticks.csv").unwrap();
    assert_eq!(ticks.len(), 2);
    assert_eq!(ticks[0].currency_pair, "USD/JPY");
    assert_eq!(ticks[1].currency_pair, "GBP/USD");
}
