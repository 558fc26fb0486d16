use chrono::{DateTime, Utc};

use crate::error::TickError;

/// The closed set of pairs used when no explicit set is configured
pub const DEFAULT_CURRENCY_PAIRS: [&str; 25] = [
    "USD/JPY", "EUR/GBP", "AUD/USD", "CAD/JPY", "EUR/USD", "GBP/USD", "EUR/AUD", "USD/CAD",
    "NZD/JPY", "CHF/USD", "GBP/JPY", "USD/CHF", "EUR/JPY", "AUD/JPY", "GBP/AUD", "CAD/USD",
    "NZD/USD", "EUR/CHF", "GBP/CHF", "AUD/NZD", "JPY/CHF", "EUR/NZD", "GBP/NZD", "CAD/CHF",
    "AUD/CHF",
];

/// Sampling range for the price column, before scaling by 100
pub const DEFAULT_PRICE_BOUNDS: (f64, f64) = (0.5, 1.5);

/// Sampling range for the volume column, inclusive on both ends
pub const DEFAULT_VOLUME_BOUNDS: (u32, u32) = (500, 3000);

/// Parameters for one generation run.
///
/// Fields are public so callers can override individual knobs after
/// [`GeneratorConfig::new`]; [`GeneratorConfig::validate`] is run before any
/// output file is created.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Total number of data rows to generate
    pub rows: u64,
    /// First timestamp of the sequence; all others are at or after this instant
    pub start: DateTime<Utc>,
    pub currency_pairs: Vec<String>,
    pub price_bounds: (f64, f64),
    pub volume_bounds: (u32, u32),
    /// Fix for reproducible datasets; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    #[must_use]
    pub fn new(rows: u64, start: DateTime<Utc>) -> Self {
        GeneratorConfig {
            rows,
            start,
            currency_pairs: DEFAULT_CURRENCY_PAIRS
                .iter()
                .map(ToString::to_string)
                .collect(),
            price_bounds: DEFAULT_PRICE_BOUNDS,
            volume_bounds: DEFAULT_VOLUME_BOUNDS,
            seed: None,
        }
    }

    /// # Errors
    /// Errors when the configuration cannot produce a valid dataset:
    /// 1. `rows` is zero
    /// 2. the currency pair set is empty
    /// 3. either bounds pair is not `0 < min < max`
    pub fn validate(&self) -> Result<(), TickError> {
        if self.rows == 0 {
            return Err(TickError::InvalidCount);
        }
        if self.currency_pairs.is_empty() {
            return Err(TickError::EmptyInstrumentSet);
        }

        let (price_min, price_max) = self.price_bounds;
        // NaN bounds fail the comparison chain as well
        if !(price_min > 0.0 && price_min < price_max && price_max.is_finite()) {
            return Err(TickError::InvalidPriceBounds);
        }

        let (volume_min, volume_max) = self.volume_bounds;
        if volume_min == 0 || volume_min >= volume_max {
            return Err(TickError::InvalidVolumeBounds);
        }

        Ok(())
    }
}
