//! FILENAME: records/src/datapoint.rs
//! PURPOSE: Defines the flat observation record produced by the results store.
//! CONTEXT: This file contains the `DataPoint` struct and the `FieldValue`
//! enum. One data point is one observation: which patient, which field, what
//! value, at which clinic. A single table build may consume a large number of
//! these, so the types stay lightweight.

use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// Unique identifier for a patient across the results store.
pub type PatientId = u64;

/// Unique identifier for a clinic.
pub type ClinicId = u64;

/// The value carried by a single observation, or the fill written into
/// cells that have no observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Null,
    Text(String),
    Number(f64),
    Boolean(bool),
}

impl FieldValue {
    /// Constructor for a text value.
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Returns true for the `Null` marker.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Returns the display form of the value as a String.
    /// Used by frontends that render every cell as text.
    pub fn display_value(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => {
                // Format without unnecessary decimal places
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{:.0}", n)
                } else {
                    format!("{}", n)
                }
            }
            FieldValue::Boolean(b) => {
                if *b {
                    "TRUE".to_string()
                } else {
                    "FALSE".to_string()
                }
            }
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Null
    }
}

/// One observation from the results store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub patient_id: PatientId,
    pub field_name: String,
    pub field_value: FieldValue,
    pub clinic_id: ClinicId,
}

impl DataPoint {
    pub fn new(
        patient_id: PatientId,
        field_name: impl Into<String>,
        field_value: FieldValue,
        clinic_id: ClinicId,
    ) -> Self {
        DataPoint {
            patient_id,
            field_name: field_name.into(),
            field_value,
            clinic_id,
        }
    }

    /// Shorthand for the common case of a text observation.
    pub fn text(
        patient_id: PatientId,
        field_name: impl Into<String>,
        value: impl Into<String>,
        clinic_id: ClinicId,
    ) -> Self {
        DataPoint::new(
            patient_id,
            field_name,
            FieldValue::Text(value.into()),
            clinic_id,
        )
    }

    /// Checks the record shape. The ids are plain integers and cannot be
    /// absent, so the representable malformation is a blank field name.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.field_name.trim().is_empty() {
            return Err(RecordError::InvalidDataPoint(format!(
                "data point for patient {} has an empty field name",
                self.patient_id
            )));
        }
        Ok(())
    }
}
