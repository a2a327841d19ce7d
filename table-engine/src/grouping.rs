//! FILENAME: table-engine/src/grouping.rs
//! Grouping passes - from a flat point stream to per-patient sparse rows.
//!
//! Two strategies:
//! - `group_adjacent`: one streaming pass. A row covers exactly one
//!   contiguous run of points sharing a patient id; the pass relies on the
//!   store returning points ordered by patient (the compound-index order)
//!   and never re-sorts. A patient id that reappears after its run ended
//!   starts a fresh row. `group_adjacent_strict` rejects that instead.
//! - `group_by_patient`: a full group-by keyed on patient id, independent
//!   of input order, iterating in first-seen order.

use rustc_hash::{FxHashMap, FxHashSet};

use records::{DataPoint, PatientId};

use crate::error::TableError;
use crate::view::SparseRow;

// ============================================================================
// ORDERED ACCUMULATOR
// ============================================================================

/// Insertion-ordered accumulator mapping patient id to its sparse row.
///
/// The map only holds slot positions; the rows themselves live in a Vec,
/// so iteration follows the order in which patients were first seen,
/// never hash order.
#[derive(Debug, Clone, Default)]
pub struct PatientGroups {
    /// Patient id -> slot in `rows`.
    index: FxHashMap<PatientId, usize>,

    /// Row storage in first-seen order.
    rows: Vec<SparseRow>,
}

impl PatientGroups {
    pub fn new() -> Self {
        PatientGroups {
            index: FxHashMap::default(),
            rows: Vec::new(),
        }
    }

    /// Merges one point into its patient's row, creating the row on first
    /// sight. Last write wins per field name.
    pub fn insert(&mut self, point: &DataPoint) {
        let slot = match self.index.get(&point.patient_id) {
            Some(&slot) => slot,
            None => {
                let slot = self.rows.len();
                self.rows.push(SparseRow::new(point.patient_id));
                self.index.insert(point.patient_id, slot);
                slot
            }
        };
        self.rows[slot].set(&point.field_name, point.field_value.clone());
    }

    /// Looks up the row for a patient.
    pub fn get(&self, patient_id: PatientId) -> Option<&SparseRow> {
        self.index.get(&patient_id).map(|&slot| &self.rows[slot])
    }

    /// Number of distinct patients seen.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in first-seen order.
    pub fn rows(&self) -> &[SparseRow] {
        &self.rows
    }

    /// Consumes the accumulator, yielding rows in first-seen order.
    pub fn into_rows(self) -> Vec<SparseRow> {
        self.rows
    }
}

// ============================================================================
// GROUPING PASSES
// ============================================================================

/// Full group-by: merges every point into its patient's row no matter
/// where it sits in the stream. Fails fast on a malformed point.
pub fn group_by_patient(points: &[DataPoint]) -> Result<PatientGroups, TableError> {
    let mut groups = PatientGroups::new();
    for point in points {
        point.validate()?;
        groups.insert(point);
    }
    Ok(groups)
}

/// Streaming pass: merges each contiguous run of points sharing a patient
/// id into one sparse row.
///
/// A new row begins exactly when the patient id differs from the previous
/// point's, so a patient id reappearing after its run ended produces a
/// second row for that patient. Callers that fetch in compound-index order
/// never see that; callers that need it rejected use
/// `group_adjacent_strict`.
pub fn group_adjacent(points: &[DataPoint]) -> Result<Vec<SparseRow>, TableError> {
    let mut rows: Vec<SparseRow> = Vec::new();
    let mut prev_id: Option<PatientId> = None;

    for point in points {
        point.validate()?;

        if prev_id != Some(point.patient_id) {
            rows.push(SparseRow::new(point.patient_id));
        }
        prev_id = Some(point.patient_id);

        if let Some(row) = rows.last_mut() {
            row.set(&point.field_name, point.field_value.clone());
        }
    }

    Ok(rows)
}

/// Like `group_adjacent`, but treats the input as pre-grouped by patient
/// and reports the first patient id that reappears after its run ended.
pub fn group_adjacent_strict(points: &[DataPoint]) -> Result<Vec<SparseRow>, TableError> {
    let rows = group_adjacent(points)?;

    let mut seen: FxHashSet<PatientId> = FxHashSet::default();
    for row in &rows {
        if !seen.insert(row.patient_id) {
            return Err(TableError::RegroupedPatient(row.patient_id));
        }
    }

    Ok(rows)
}
