use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TickError {
    #[error("CSV Error")]
    CsvError(#[from] csv::Error),
    #[error("I/O Error")]
    IoError(#[from] io::Error),
    #[error("Invalid timestamp")]
    BadTimestamp(#[from] chrono::ParseError),
    #[error("Record count must be a positive integer")]
    InvalidCount,
    #[error("Price bounds must satisfy 0 < min < max")]
    InvalidPriceBounds,
    #[error("Volume bounds must satisfy 0 < min < max")]
    InvalidVolumeBounds,
    #[error("Currency pair set cannot be empty")]
    EmptyInstrumentSet,
    #[error("Prices must not be negative")]
    InvalidPrice,
    #[error("Timestamp arithmetic overflowed")]
    TimestampOverflow,
    #[error("Numeric overflow while accumulating trade data")]
    Overflow,
    #[error("Erroneous data - total volume of trades is zero")]
    ZeroVolume,
}
