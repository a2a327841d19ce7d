//! FILENAME: tests/common/mod.rs
//! Fixtures for table-engine integration tests.

use records::{DataPoint, FieldValue, MemorySource};
use table_engine::TableDefinition;

/// The three-observation store used across the build tests: two results
/// for patient 1 and one for patient 3, all at clinic 1.
pub struct ResultsFixture;

impl ResultsFixture {
    pub fn points() -> Vec<DataPoint> {
        vec![
            DataPoint::text(1, "a", "1", 1),
            DataPoint::text(1, "b", "2", 1),
            DataPoint::text(3, "a", "3", 1),
        ]
    }

    /// Five-patient roster with three declared columns and the Null fill.
    pub fn definition() -> TableDefinition {
        TableDefinition::new(
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            vec![1, 2, 3, 4, 5],
        )
    }

    pub fn source() -> MemorySource {
        MemorySource::new(Self::points())
    }

    /// A store spanning two clinics. Patient 1 has results at both, so an
    /// unfiltered fetch interleaves its runs.
    pub fn two_clinic_points() -> Vec<DataPoint> {
        vec![
            DataPoint::text(1, "a", "c1-a", 1),
            DataPoint::text(2, "a", "c1-2a", 1),
            DataPoint::text(1, "b", "c2-b", 2),
            DataPoint::text(3, "a", "c2-3a", 2),
        ]
    }

    pub fn two_clinic_source() -> MemorySource {
        MemorySource::new(Self::two_clinic_points())
    }
}

/// Shorthand for the text value a cell assertion expects.
pub fn text(value: &str) -> FieldValue {
    FieldValue::Text(value.to_string())
}
