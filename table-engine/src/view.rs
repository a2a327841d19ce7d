//! FILENAME: table-engine/src/view.rs
//! Table View - Renderable output.
//!
//! This module holds the row shapes the grouping passes and the build
//! engine produce:
//! - `SparseRow`: only the observed fields, in first-occurrence order
//! - `TableRow` / `TableView`: the dense, fixed-shape table reconciled
//!   against a `TableDefinition`
//! - `BuildStats`: counters describing what a build consumed and dropped

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use records::{FieldValue, PatientId};

// ============================================================================
// SPARSE ROW
// ============================================================================

/// Per-patient merge of the observed fields only.
///
/// Fields keep the order of their first occurrence; a repeated field name
/// overwrites the value in place (last write wins).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseRow {
    pub patient_id: PatientId,
    fields: Vec<(String, FieldValue)>,
}

impl SparseRow {
    pub fn new(patient_id: PatientId) -> Self {
        SparseRow {
            patient_id,
            fields: Vec::new(),
        }
    }

    /// Inserts or overwrites one field. An overwritten field keeps its
    /// original position.
    pub fn set(&mut self, field_name: &str, value: FieldValue) {
        match self
            .fields
            .iter_mut()
            .find(|(name, _)| name == field_name)
        {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((field_name.to_string(), value)),
        }
    }

    /// Looks up a field by name.
    pub fn get(&self, field_name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == field_name)
            .map(|(_, value)| value)
    }

    /// Observed fields in first-occurrence order.
    pub fn fields(&self) -> &[(String, FieldValue)] {
        &self.fields
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// ============================================================================
// DENSE ROW
// ============================================================================

/// One row of the dense table: one value per declared column, in declared
/// column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub patient_id: PatientId,
    /// Cell values aligned with `TableView::columns`. Stored inline up to
    /// eight columns, spilling to the heap beyond that.
    pub values: SmallVec<[FieldValue; 8]>,
}

impl TableRow {
    /// Creates a row with every cell set to the fill value.
    pub fn filled(patient_id: PatientId, column_count: usize, fill: &FieldValue) -> Self {
        TableRow {
            patient_id,
            values: smallvec![fill.clone(); column_count],
        }
    }

    /// Cell value at a column position.
    pub fn value(&self, column: usize) -> Option<&FieldValue> {
        self.values.get(column)
    }
}

// ============================================================================
// TABLE VIEW
// ============================================================================

/// The complete dense table: the declared columns plus one row per
/// declared patient, both in declared order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableView {
    /// Column names, copied from the definition.
    pub columns: Vec<String>,

    /// Rows in declared roster order.
    pub rows: Vec<TableRow>,

    /// Counters from the build that produced this view.
    pub stats: BuildStats,
}

impl TableView {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Looks up a row by patient id.
    pub fn row(&self, patient_id: PatientId) -> Option<&TableRow> {
        self.rows.iter().find(|row| row.patient_id == patient_id)
    }

    /// Looks up one cell by patient id and column name.
    pub fn cell(&self, patient_id: PatientId, field_name: &str) -> Option<&FieldValue> {
        let column = self.columns.iter().position(|c| c == field_name)?;
        self.row(patient_id).and_then(|row| row.value(column))
    }
}

// ============================================================================
// BUILD STATISTICS
// ============================================================================

/// Statistics about one table build.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildStats {
    /// Points the build consumed.
    pub source_points: usize,

    /// Points merged into a declared row and column.
    pub kept_points: usize,

    /// Points dropped because their patient is not on the roster.
    pub dropped_patients: usize,

    /// Points dropped because their field is not a declared column.
    pub dropped_fields: usize,

    /// Distinct roster patients with at least one kept observation.
    pub grouped_patients: usize,

    /// Time taken to build the view in milliseconds.
    pub build_time_ms: u64,
}

impl BuildStats {
    /// Total points dropped during screening.
    pub fn dropped_points(&self) -> usize {
        self.dropped_patients + self.dropped_fields
    }
}
