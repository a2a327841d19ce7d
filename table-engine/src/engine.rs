//! FILENAME: table-engine/src/engine.rs
//! Table Engine - Builds the dense view from fetched points.
//!
//! This module takes a TableDefinition (the declared shape) and a point
//! stream and produces a TableView (rows ready for rendering).
//!
//! Build steps:
//! 1. Screen each point against the declared roster and columns,
//!    counting what gets dropped
//! 2. Group the kept points by patient (full group-by, last write wins)
//! 3. Reconcile: one row per declared patient, fill first, observed
//!    values on top
//! 4. Assemble the view with the declared column order and build stats

use std::time::Instant;

use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use records::{DataPoint, DataPointSource, PatientId, ResultFilter};

use crate::definition::TableDefinition;
use crate::error::TableError;
use crate::grouping::PatientGroups;
use crate::view::{BuildStats, TableRow, TableView};

// ============================================================================
// TABLE BUILDER
// ============================================================================

/// The build engine for dense tables. Feed it points in any number of
/// batches, then call `build` once.
pub struct TableBuilder<'a> {
    definition: &'a TableDefinition,

    /// Screened points grouped by patient.
    groups: PatientGroups,

    /// Declared column name -> column position, precomputed for screening.
    column_index: FxHashMap<String, usize>,

    /// Declared roster as a set, precomputed for screening.
    roster: FxHashSet<PatientId>,

    stats: BuildStats,
    started: Instant,
}

impl<'a> TableBuilder<'a> {
    /// Creates a builder for one definition.
    pub fn new(definition: &'a TableDefinition) -> Self {
        let column_index: FxHashMap<String, usize> = definition
            .columns
            .iter()
            .enumerate()
            .map(|(position, name)| (name.clone(), position))
            .collect();

        let roster: FxHashSet<PatientId> = definition.patients.iter().copied().collect();

        TableBuilder {
            definition,
            groups: PatientGroups::new(),
            column_index,
            roster,
            stats: BuildStats::default(),
            started: Instant::now(),
        }
    }

    /// Feeds points into the build. Points outside the declared roster or
    /// columns are dropped here and counted; a malformed point fails the
    /// whole build.
    pub fn add_points(&mut self, points: &[DataPoint]) -> Result<(), TableError> {
        for point in points {
            point.validate()?;
            self.stats.source_points += 1;

            if !self.roster.contains(&point.patient_id) {
                self.stats.dropped_patients += 1;
                continue;
            }
            if !self.column_index.contains_key(&point.field_name) {
                self.stats.dropped_fields += 1;
                continue;
            }

            self.stats.kept_points += 1;
            self.groups.insert(point);
        }
        Ok(())
    }

    /// Reconciles the grouped points against the declared shape and
    /// returns the rendered view.
    pub fn build(mut self) -> TableView {
        let mut rows = Vec::with_capacity(self.definition.patient_count());

        for &patient_id in &self.definition.patients {
            let mut row = TableRow::filled(
                patient_id,
                self.definition.column_count(),
                &self.definition.fill,
            );

            if let Some(observed) = self.groups.get(patient_id) {
                for (field_name, value) in observed.fields() {
                    if let Some(&column) = self.column_index.get(field_name) {
                        row.values[column] = value.clone();
                    }
                }
            }

            rows.push(row);
        }

        self.stats.grouped_patients = self.groups.len();
        self.stats.build_time_ms = self.started.elapsed().as_millis() as u64;

        debug!(
            "built {}x{} table: {} points kept, {} dropped ({} off-roster, {} undeclared fields)",
            rows.len(),
            self.definition.column_count(),
            self.stats.kept_points,
            self.stats.dropped_points(),
            self.stats.dropped_patients,
            self.stats.dropped_fields,
        );

        TableView {
            columns: self.definition.columns.clone(),
            rows,
            stats: self.stats,
        }
    }
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// One-shot dense build over an already-fetched point slice.
pub fn build_table(
    points: &[DataPoint],
    definition: &TableDefinition,
) -> Result<TableView, TableError> {
    let mut builder = TableBuilder::new(definition);
    builder.add_points(points)?;
    Ok(builder.build())
}

/// Fetches the points selected by `filter` from the source, then builds
/// the dense view for `definition`.
pub fn fetch_table(
    source: &dyn DataPointSource,
    filter: &ResultFilter,
    definition: &TableDefinition,
) -> Result<TableView, TableError> {
    let points = source.fetch(filter)?;
    debug!(
        "fetched {} points (clinic: {:?}, patient: {:?})",
        points.len(),
        filter.clinic_id,
        filter.patient_id
    );
    build_table(&points, definition)
}
