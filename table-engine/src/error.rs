//! FILENAME: table-engine/src/error.rs

use thiserror::Error;

use records::{PatientId, RecordError};

#[derive(Error, Debug)]
pub enum TableError {
    #[error("record error: {0}")]
    Record(#[from] RecordError),

    #[error("patient {0} reappears after its group ended")]
    RegroupedPatient(PatientId),
}
