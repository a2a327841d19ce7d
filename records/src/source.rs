//! FILENAME: records/src/source.rs
//! The boundary to the results store.
//!
//! The reshaping engine never talks to a database directly; it consumes
//! whatever a `DataPointSource` returns for a filter. `MemorySource` is the
//! in-process implementation used by tests and by callers that already hold
//! the points. It returns matches ordered by clinic id then patient id, the
//! same order the production store yields through its compound index, so
//! adjacent grouping can run directly on the fetched slice.

use serde::{Deserialize, Serialize};

use crate::datapoint::DataPoint;
use crate::error::RecordError;
use crate::filter::ResultFilter;

/// A collaborator that can produce the flat observation records matching a
/// filter. Implementations own the connection details; consumers only see
/// the returned points.
pub trait DataPointSource {
    fn fetch(&self, filter: &ResultFilter) -> Result<Vec<DataPoint>, RecordError>;
}

/// In-memory source backed by a plain Vec of points.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemorySource {
    points: Vec<DataPoint>,
}

impl MemorySource {
    pub fn new(points: Vec<DataPoint>) -> Self {
        MemorySource { points }
    }

    /// Appends one point. Insertion order is preserved within a patient,
    /// which last-write-wins merging relies on.
    pub fn push(&mut self, point: DataPoint) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl DataPointSource for MemorySource {
    fn fetch(&self, filter: &ResultFilter) -> Result<Vec<DataPoint>, RecordError> {
        let mut matches: Vec<DataPoint> = self
            .points
            .iter()
            .filter(|point| filter.matches(point))
            .cloned()
            .collect();

        // Stable sort: points of one patient keep their insertion order.
        matches.sort_by_key(|point| (point.clinic_id, point.patient_id));

        Ok(matches)
    }
}
