//! FILENAME: table-engine/src/lib.rs
//! Dense results-table subsystem.
//!
//! This crate turns the flat observation records a clinic store returns
//! into per-patient rows. It depends on `records` for the shared model
//! types (DataPoint, FieldValue, ResultFilter) and nothing else of the
//! application.
//!
//! Layers:
//! - `definition`: Serializable configuration (what the table IS)
//! - `grouping`: Ordered accumulator and streaming passes (HOW points merge)
//! - `view`: Renderable output (WHAT we display)
//! - `engine`: Build engine (HOW the declared shape gets reconciled)

pub mod definition;
pub mod engine;
pub mod error;
pub mod grouping;
pub mod view;

// Re-export main types for convenience
pub use definition::*;
pub use engine::{build_table, fetch_table, TableBuilder};
pub use error::TableError;
pub use grouping::{group_adjacent, group_adjacent_strict, group_by_patient, PatientGroups};
pub use view::*;
