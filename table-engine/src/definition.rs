//! FILENAME: table-engine/src/definition.rs
//! Table Definition - The serializable configuration.
//!
//! This module contains the types that DESCRIBE a dense results table.
//! These structures are designed to be:
//! - Serializable (dashboards save and reload their table setups)
//! - Immutable snapshots of the declared output shape
//!
//! The definition declares which columns every row must carry, which
//! patients must appear as rows, and which value fills a cell that has no
//! observation. The builder never widens a table beyond this shape.

use serde::{Deserialize, Serialize};

use records::{FieldValue, PatientId};

// ============================================================================
// TABLE DEFINITION
// ============================================================================

/// The complete, serializable definition of a dense results table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDefinition {
    /// Column names, in display order. Every row carries exactly these
    /// cells, in exactly this order.
    pub columns: Vec<String>,

    /// Patient ids, in display order. The output has exactly one row per
    /// entry, whether or not the store holds observations for it.
    pub patients: Vec<PatientId>,

    /// The value written into cells with no observation.
    #[serde(default)]
    pub fill: FieldValue,
}

impl TableDefinition {
    /// Creates a definition with the `Null` fill.
    pub fn new(columns: Vec<String>, patients: Vec<PatientId>) -> Self {
        TableDefinition {
            columns,
            patients,
            fill: FieldValue::Null,
        }
    }

    /// Replaces the fill value.
    pub fn with_fill(mut self, fill: FieldValue) -> Self {
        self.fill = fill;
        self
    }

    /// Returns the number of declared columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns the number of declared patients.
    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    /// Position of a column name in the declared order.
    pub fn column_index(&self, field_name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == field_name)
    }
}
