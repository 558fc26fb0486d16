use std::convert::TryFrom;
use std::io;
use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::GeneratorConfig;
use crate::error::TickError;
use crate::tick::{Price, Tick};

/// Streams randomly sampled [`Tick`]s.
///
/// The timestamp walk is inherently sequential (each value depends on its
/// predecessor), so ticks are handed out one at a time through [`Iterator`]
/// rather than materialized up front. The iterator yields exactly the
/// configured number of rows.
pub struct TickGenerator {
    rng: StdRng,
    currency_pairs: Vec<String>,
    price_bounds: (f64, f64),
    volume_bounds: (u32, u32),
    next_timestamp: DateTime<Utc>,
    remaining: u64,
}

impl TickGenerator {
    /// # Errors
    /// Errors when `config` fails [`GeneratorConfig::validate`]
    pub fn new(config: &GeneratorConfig) -> Result<Self, TickError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(TickGenerator {
            rng,
            currency_pairs: config.currency_pairs.clone(),
            price_bounds: config.price_bounds,
            volume_bounds: config.volume_bounds,
            next_timestamp: config.start,
            remaining: config.rows,
        })
    }

    fn sample_tick(&mut self) -> Result<Tick, TickError> {
        let timestamp = self.next_timestamp;
        let step = Duration::seconds(self.rng.gen_range(1..=5));
        self.next_timestamp = timestamp
            .checked_add_signed(step)
            .ok_or(TickError::TimestampOverflow)?;

        let currency_pair = self
            .currency_pairs
            .choose(&mut self.rng)
            .cloned()
            .ok_or(TickError::EmptyInstrumentSet)?;

        let (price_min, price_max) = self.price_bounds;
        let price = Price::try_from(self.rng.gen_range(price_min..price_max) * 100.0)?;

        let (volume_min, volume_max) = self.volume_bounds;
        let volume = self.rng.gen_range(volume_min..=volume_max);

        Ok(Tick::new(timestamp, currency_pair, price, volume))
    }
}

impl Iterator for TickGenerator {
    type Item = Result<Tick, TickError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.sample_tick())
    }
}

/// Generates the configured dataset and streams it to `writer` as CSV,
/// header row first.
///
/// Returns the number of data rows written.
///
/// # Errors
/// Errors on invalid configuration or when writing fails; a failed run may
/// leave a truncated stream behind and must simply be re-run.
pub fn write_csv<W: io::Write>(config: &GeneratorConfig, writer: W) -> Result<u64, TickError> {
    let generator = TickGenerator::new(config)?;
    write_rows(generator, csv::Writer::from_writer(writer))
}

/// Like [`write_csv`], writing to `path` and overwriting any existing file.
///
/// # Errors
/// Errors on invalid configuration (checked before the file is created, so a
/// bad run leaves no output behind) or when the destination is not writable.
pub fn write_csv_file<P: AsRef<Path>>(
    config: &GeneratorConfig,
    path: P,
) -> Result<u64, TickError> {
    let generator = TickGenerator::new(config)?;
    write_rows(generator, csv::Writer::from_path(path)?)
}

fn write_rows<W: io::Write>(
    generator: TickGenerator,
    mut writer: csv::Writer<W>,
) -> Result<u64, TickError> {
    let mut rows = 0u64;
    for tick in generator {
        writer.serialize(tick?)?;
        rows += 1;
    }
    writer.flush()?;
    Ok(rows)
}
