use std::convert::TryFrom;

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::TickError;

pub const PRICE_DECIMAL_PLACES: u32 = 2;

/// ISO-8601 UTC instant with second resolution, e.g. `2024-10-20T10:00:00Z`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// One simulated trade observation.
///
/// The serde renames pin the CSV header to
/// `Timestamp,Currency-pair,Price,Volume`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tick {
    #[serde(rename = "Timestamp", with = "iso8601_second")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "Currency-pair")]
    pub currency_pair: String,
    #[serde(rename = "Price")]
    pub price: Price,
    #[serde(rename = "Volume")]
    pub volume: u32,
}

/// A trade price, rescaled to exactly [`PRICE_DECIMAL_PLACES`] fractional digits
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "Decimal")]
pub struct Price(Decimal);

impl TryFrom<Decimal> for Price {
    type Error = TickError;
    fn try_from(mut decimal: Decimal) -> Result<Self, Self::Error> {
        if decimal >= Decimal::ZERO {
            decimal.rescale(PRICE_DECIMAL_PLACES);
            Ok(Price(decimal))
        } else {
            Err(TickError::InvalidPrice)
        }
    }
}

impl TryFrom<f64> for Price {
    type Error = TickError;
    fn try_from(price: f64) -> Result<Self, Self::Error> {
        Price::try_from(Decimal::from_f64(price).ok_or(TickError::InvalidPrice)?)
    }
}

impl Price {
    #[must_use]
    pub fn as_decimal(self) -> Decimal {
        self.0
    }
}

impl Tick {
    #[must_use]
    pub fn new(timestamp: DateTime<Utc>, currency_pair: String, price: Price, volume: u32) -> Self {
        Tick {
            timestamp,
            currency_pair,
            price,
            volume,
        }
    }
}

/// # Errors
/// Errors when `s` is not a second-resolution ISO-8601 UTC instant
pub fn parse_instant(s: &str) -> Result<DateTime<Utc>, TickError> {
    let naive = NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)?;
    Ok(DateTime::from_naive_utc_and_offset(naive, Utc))
}

#[must_use]
pub fn format_instant(instant: DateTime<Utc>) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}

pub(crate) mod iso8601_second {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(instant: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&instant.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let naive =
            NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)?;
        Ok(DateTime::from_naive_utc_and_offset(naive, Utc))
    }
}
