//! FILENAME: records/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("invalid data point: {0}")]
    InvalidDataPoint(String),

    #[error("result store error: {0}")]
    Store(String),
}
