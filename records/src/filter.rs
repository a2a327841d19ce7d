//! FILENAME: records/src/filter.rs
//! Result-store query filter.
//!
//! The store supports exactly two optional predicates: clinic id and
//! patient id. A predicate that is not set matches everything, so the
//! default filter selects the whole store.

use serde::{Deserialize, Serialize};

use crate::datapoint::{ClinicId, DataPoint, PatientId};

/// The filter handed to a `DataPointSource`. Both predicates are optional
/// and combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultFilter {
    #[serde(default)]
    pub clinic_id: Option<ClinicId>,

    #[serde(default)]
    pub patient_id: Option<PatientId>,
}

impl ResultFilter {
    /// Creates the match-everything filter.
    pub fn all() -> Self {
        ResultFilter::default()
    }

    /// Creates a filter for one clinic.
    pub fn clinic(clinic_id: ClinicId) -> Self {
        ResultFilter {
            clinic_id: Some(clinic_id),
            patient_id: None,
        }
    }

    /// Creates a filter for one patient, across clinics.
    pub fn patient(patient_id: PatientId) -> Self {
        ResultFilter {
            clinic_id: None,
            patient_id: Some(patient_id),
        }
    }

    /// Narrows this filter to one patient.
    pub fn with_patient(mut self, patient_id: PatientId) -> Self {
        self.patient_id = Some(patient_id);
        self
    }

    /// Returns true when the point passes every predicate that is set.
    pub fn matches(&self, point: &DataPoint) -> bool {
        if let Some(clinic_id) = self.clinic_id {
            if point.clinic_id != clinic_id {
                return false;
            }
        }
        if let Some(patient_id) = self.patient_id {
            if point.patient_id != patient_id {
                return false;
            }
        }
        true
    }
}
