//! Generates a large random tick file, then times a full read + hourly VWAP
//! pass over it. Run with `cargo run --example benchmark`.

use std::error::Error;
use std::time::Instant;

use log::warn;

use tickdata::config::GeneratorConfig;
use tickdata::{generator, reader, tick, vwap};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let path = std::env::temp_dir().join("tickdata-benchmark.csv");
    let mut config = GeneratorConfig::new(1_000_000, tick::parse_instant("2024-10-20T10:00:00Z")?);
    config.seed = Some(42);

    let start = Instant::now();
    let rows = generator::write_csv_file(&config, &path)?;
    warn!("Generating {rows} rows took: {:.2?}", start.elapsed());

    let start_reading = Instant::now();
    let ticks = reader::read_ticks_file(&path)?;
    warn!("Reading took: {:.2?}", start_reading.elapsed());

    let start_vwap = Instant::now();
    let series = vwap::hourly_vwaps(&ticks);
    warn!(
        "Hourly VWAPs for {} pairs took: {:.2?}",
        series.len(),
        start_vwap.elapsed()
    );

    warn!("Total took: {:.2?}", start.elapsed());

    Ok(())
}
