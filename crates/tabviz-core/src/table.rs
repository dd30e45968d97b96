//! Tabular snapshots: ordered rows plus optional column metadata.
//!
//! A snapshot is always derived from a fixture constant; transitions produce
//! or mutate the *instance's* snapshot and never touch the fixture itself.
//! Row order is meaningful and preserved by every operation here.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::id::RowId;
use crate::row::RowRecord;

// ---------------------------------------------------------------------------
// Column metadata
// ---------------------------------------------------------------------------

/// Metadata for one column, used by variants that operate on columns
/// (column subset selection).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMeta {
    pub name: String,
    /// Whether a column-subset selection keeps this column.
    pub keep: bool,
}

impl ColumnMeta {
    pub fn new(name: &str, keep: bool) -> Self {
        Self {
            name: name.to_string(),
            keep,
        }
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// The current ordered set of row records for one variant instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSnapshot {
    rows: Vec<RowRecord>,
    columns: Vec<ColumnMeta>,
}

impl TableSnapshot {
    /// Build a snapshot from rows, with no column metadata.
    ///
    /// Panics in debug builds if two rows share an id; fixtures are
    /// constructed in code, so a collision is a construction bug.
    pub fn from_rows(rows: Vec<RowRecord>) -> Self {
        let snapshot = Self {
            rows,
            columns: Vec::new(),
        };
        debug_assert!(snapshot.validate().is_ok());
        snapshot
    }

    /// Build a snapshot with column metadata.
    pub fn with_columns(rows: Vec<RowRecord>, columns: Vec<ColumnMeta>) -> Self {
        let snapshot = Self { rows, columns };
        debug_assert!(snapshot.validate().is_ok());
        snapshot
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[RowRecord] {
        &self.rows
    }

    pub fn columns(&self) -> &[ColumnMeta] {
        &self.columns
    }

    /// Look up a row by id.
    pub fn row(&self, id: RowId) -> Option<&RowRecord> {
        self.rows.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.row(id).is_some()
    }

    /// Number of null rows.
    pub fn null_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_null()).count()
    }

    /// Remove the row with the given id. Returns whether a row was removed;
    /// removing an absent id is a no-op, so callers can re-invoke freely.
    pub fn remove_row(&mut self, id: RowId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| r.id != id);
        before != self.rows.len()
    }

    /// Keep only rows matching the predicate, preserving order.
    pub fn retain_rows(&mut self, mut pred: impl FnMut(&RowRecord) -> bool) {
        self.rows.retain(|r| pred(r));
    }

    /// Apply an in-place edit to every row.
    pub fn for_each_row_mut(&mut self, mut edit: impl FnMut(&mut RowRecord)) {
        for row in &mut self.rows {
            edit(row);
        }
        debug_assert!(self.validate().is_ok());
    }

    /// Remove every row whose value duplicates an earlier row's value,
    /// preserving first occurrences and their order. Returns the removed
    /// ids. Afterwards no two rows share a value.
    pub fn remove_duplicate_values(&mut self) -> Vec<RowId> {
        let mut seen: Vec<&RowRecord> = Vec::with_capacity(self.rows.len());
        let mut removed = Vec::new();
        for row in &self.rows {
            if seen.iter().any(|kept| kept.value == row.value) {
                removed.push(row.id);
            } else {
                seen.push(row);
            }
        }
        if !removed.is_empty() {
            self.rows.retain(|r| !removed.contains(&r.id));
        }
        removed
    }

    /// Defensive invariant check: row ids must be unique.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (i, row) in self.rows.iter().enumerate() {
            if self.rows[..i].iter().any(|r| r.id == row.id) {
                return Err(CoreError::DuplicateRowId { id: row.id });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::{CellValue, RowRecord};

    fn snapshot() -> TableSnapshot {
        TableSnapshot::from_rows(vec![
            RowRecord::new(RowId(1), "Alice"),
            RowRecord::new(RowId(2), "Bob"),
            RowRecord::new(RowId(3), "Alice"),
            RowRecord::new(RowId(4), "Charlie"),
        ])
    }

    #[test]
    fn remove_row_is_idempotent() {
        let mut table = snapshot();
        assert!(table.remove_row(RowId(3)));
        assert!(!table.remove_row(RowId(3)));
        assert_eq!(table.row_count(), 3);
    }

    #[test]
    fn remove_duplicate_values_keeps_first_occurrence() {
        let mut table = snapshot();
        let removed = table.remove_duplicate_values();
        assert_eq!(removed, vec![RowId(3)]);
        assert!(table.contains(RowId(1)));
        let values: Vec<_> = table.rows().iter().map(|r| r.value.clone()).collect();
        assert_eq!(
            values,
            vec![
                CellValue::from("Alice"),
                CellValue::from("Bob"),
                CellValue::from("Charlie"),
            ]
        );
    }

    #[test]
    fn remove_duplicate_values_on_unique_table_is_noop() {
        let mut table = snapshot();
        table.remove_duplicate_values();
        let before = table.clone();
        assert!(table.remove_duplicate_values().is_empty());
        assert_eq!(table, before);
    }

    #[test]
    fn null_count_counts_only_null_rows() {
        let table = TableSnapshot::from_rows(vec![
            RowRecord::new(RowId(1), 100),
            RowRecord::null(RowId(2)),
            RowRecord::new(RowId(3), 300),
            RowRecord::null(RowId(4)),
        ]);
        assert_eq!(table.null_count(), 2);
    }

    #[test]
    fn retain_preserves_order() {
        let mut table = TableSnapshot::from_rows(vec![
            RowRecord::new(RowId(1), 100),
            RowRecord::null(RowId(2)),
            RowRecord::new(RowId(3), 300),
            RowRecord::null(RowId(4)),
        ]);
        table.retain_rows(|r| !r.is_null());
        let ids: Vec<_> = table.rows().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![RowId(1), RowId(3)]);
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let table = TableSnapshot {
            rows: vec![
                RowRecord::new(RowId(1), 100),
                RowRecord::new(RowId(1), 200),
            ],
            columns: Vec::new(),
        };
        assert!(matches!(
            table.validate(),
            Err(CoreError::DuplicateRowId { id: RowId(1) })
        ));
    }

    #[test]
    fn snapshots_serialize() {
        let table = snapshot();
        let json = serde_json::to_string(&table).unwrap();
        let back: TableSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(table, back);
    }
}
