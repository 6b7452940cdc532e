//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("Invalid range: [{start}, {end}) is not a minute-of-day interval")]
    InvalidRange { start: u32, end: u32 },

    #[error("Invalid clock time: {hours}:{minutes:02}")]
    InvalidClockTime { hours: u32, minutes: u32 },
}

pub type Result<T> = std::result::Result<T, SlotError>;
