use std::collections::HashMap;

use chrono::{DateTime, Utc};
use log::warn;
use rust_decimal::Decimal;

use crate::error::TickError;
use crate::tick::Tick;

const SECONDS_PER_HOUR: i64 = 3600;

/// Chronologically sorted `(beginning of hour, VWAP)` points for one pair
pub type VwapSeries = Vec<(DateTime<Utc>, Decimal)>;

/// Volume weighted average price of a set of ticks.
///
/// # Errors
/// Errors when the total volume is zero (which includes an empty set) or when
/// accumulation overflows
pub fn vwap<'a>(ticks: impl IntoIterator<Item = &'a Tick>) -> Result<Decimal, TickError> {
    let mut volume_price = Decimal::ZERO;
    let mut total_volume = Decimal::ZERO;

    for tick in ticks {
        let volume = Decimal::from(tick.volume);
        volume_price = tick
            .price
            .as_decimal()
            .checked_mul(volume)
            .and_then(|vp| volume_price.checked_add(vp))
            .ok_or(TickError::Overflow)?;
        total_volume = total_volume
            .checked_add(volume)
            .ok_or(TickError::Overflow)?;
    }

    volume_price
        .checked_div(total_volume)
        .ok_or(TickError::ZeroVolume)
}

/// Calculates hourly VWAPs for each unique currency pair in `ticks`.
///
/// Ticks are bucketed by the UTC hour containing them. A bucket with zero
/// total volume is erroneous data; it is logged and skipped so one bad hour
/// does not take down the whole computation.
#[must_use]
pub fn hourly_vwaps(ticks: &[Tick]) -> HashMap<String, VwapSeries> {
    let mut buckets: HashMap<(&str, i64), Vec<&Tick>> = HashMap::new();
    for tick in ticks {
        let hour = tick.timestamp.timestamp().div_euclid(SECONDS_PER_HOUR);
        buckets
            .entry((tick.currency_pair.as_str(), hour))
            .or_default()
            .push(tick);
    }

    let mut series: HashMap<String, VwapSeries> = HashMap::new();
    for ((pair, hour), bucket) in buckets {
        let Some(beginning_hour) = DateTime::from_timestamp(hour * SECONDS_PER_HOUR, 0) else {
            continue;
        };
        match vwap(bucket) {
            Ok(value) => series
                .entry(pair.to_string())
                .or_default()
                .push((beginning_hour, value)),
            Err(e) => warn!("Skipping {pair} bucket at {beginning_hour}: {e}"),
        }
    }

    // Sort each series so callers can perform a sequential, chronological read
    for points in series.values_mut() {
        points.sort_by_key(|&(hour, _)| hour);
    }
    series
}
