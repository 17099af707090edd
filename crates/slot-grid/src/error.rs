//! Error types for slot-grid operations.
//!
//! Only input construction can fail. Allocation itself never errors:
//! out-of-range and overflowing events are reported as data (an absent
//! slot), not as failures.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid end-of-day marker: {0}")]
    InvalidMarker(String),
}

pub type Result<T> = std::result::Result<T, GridError>;
