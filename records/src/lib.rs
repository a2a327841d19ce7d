//! FILENAME: records/src/lib.rs
//! PURPOSE: Main library entry point for the clinic results data model.
//! CONTEXT: Declares the crate modules and re-exports the observation
//! record types, the query filter, and the store boundary consumed by the
//! table-building engine.

pub mod datapoint;
pub mod error;
pub mod filter;
pub mod source;

// Re-export commonly used types at the crate root
pub use datapoint::{ClinicId, DataPoint, FieldValue, PatientId};
pub use error::RecordError;
pub use filter::ResultFilter;
pub use source::{DataPointSource, MemorySource};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_creates_data_points() {
        let point = DataPoint::text(1, "a", "1", 1);
        assert_eq!(point.patient_id, 1);
        assert_eq!(point.clinic_id, 1);
        assert_eq!(point.field_name, "a");
        assert_eq!(point.field_value, FieldValue::Text("1".to_string()));
        assert!(point.validate().is_ok());
    }

    #[test]
    fn it_rejects_blank_field_names() {
        let empty = DataPoint::new(7, "", FieldValue::Null, 1);
        assert!(matches!(
            empty.validate().unwrap_err(),
            RecordError::InvalidDataPoint(_)
        ));

        // Whitespace-only names are just as malformed
        let blank = DataPoint::new(7, "   ", FieldValue::Number(1.0), 1);
        assert!(blank.validate().is_err());
    }

    #[test]
    fn integration_test_filtered_fetch() {
        let source = MemorySource::new(vec![
            DataPoint::text(2, "a", "x", 2),
            DataPoint::text(1, "a", "1", 1),
            DataPoint::text(1, "b", "2", 1),
        ]);

        let all = source.fetch(&ResultFilter::all()).unwrap();
        assert_eq!(all.len(), 3);
        // Compound-index order: clinic first, then patient
        assert_eq!(all[0].clinic_id, 1);
        assert_eq!(all[1].clinic_id, 1);
        assert_eq!(all[2].clinic_id, 2);

        let clinic = source.fetch(&ResultFilter::clinic(1)).unwrap();
        assert_eq!(clinic.len(), 2);
        assert!(clinic.iter().all(|point| point.clinic_id == 1));

        let one = source
            .fetch(&ResultFilter::clinic(2).with_patient(2))
            .unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].field_value, FieldValue::text("x"));

        let none = source
            .fetch(&ResultFilter::clinic(1).with_patient(99))
            .unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_fetch_keeps_insertion_order_within_a_patient() {
        let mut source = MemorySource::default();
        source.push(DataPoint::text(1, "a", "old", 1));
        source.push(DataPoint::text(1, "a", "new", 1));
        assert_eq!(source.len(), 2);

        let fetched = source.fetch(&ResultFilter::all()).unwrap();
        assert_eq!(fetched[0].field_value, FieldValue::text("old"));
        assert_eq!(fetched[1].field_value, FieldValue::text("new"));
    }

    #[test]
    fn test_sources_surface_store_failures() {
        struct DownSource;

        impl DataPointSource for DownSource {
            fn fetch(&self, _filter: &ResultFilter) -> Result<Vec<DataPoint>, RecordError> {
                Err(RecordError::Store("connection refused".to_string()))
            }
        }

        let err = DownSource.fetch(&ResultFilter::all()).unwrap_err();
        assert!(matches!(err, RecordError::Store(_)));
        assert_eq!(err.to_string(), "result store error: connection refused");
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::Null.display_value(), "");
        assert_eq!(FieldValue::text("7.1").display_value(), "7.1");
        assert_eq!(FieldValue::Number(120.0).display_value(), "120");
        assert_eq!(FieldValue::Number(1.5).display_value(), "1.5");
        assert_eq!(FieldValue::Boolean(true).display_value(), "TRUE");
        assert_eq!(FieldValue::Boolean(false).display_value(), "FALSE");
        assert!(FieldValue::Null.is_null());
        assert!(!FieldValue::Number(0.0).is_null());
    }

    #[test]
    fn test_data_point_json_round_trip() {
        let point = DataPoint::new(3, "hb", FieldValue::Number(11.2), 1);
        let json = serde_json::to_string(&point).unwrap();
        let back: DataPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(point, back);
    }
}
