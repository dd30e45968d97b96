//! Row records and cell values.

use serde::{Deserialize, Serialize};

use crate::id::RowId;

// ---------------------------------------------------------------------------
// Cell values
// ---------------------------------------------------------------------------

/// The contents of a single cell.
///
/// Nullness is a variant rather than a separate flag, so a snapshot can
/// never hold a row whose null marker disagrees with its stored value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// Whether this cell is null.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Display form used by renderers. Null renders as the literal `null`.
    pub fn display(&self) -> String {
        match self {
            CellValue::Null => "null".to_string(),
            CellValue::Int(v) => v.to_string(),
            CellValue::Float(v) => format!("{v:.2}"),
            CellValue::Text(s) => s.clone(),
        }
    }

    /// The integer payload, if this is an `Int` cell.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            CellValue::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// Row records
// ---------------------------------------------------------------------------

/// Display tag attached to a row. Fixtures mark rows the renderer should
/// call out (the duplicate row in the drop-duplicates demo).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowStatus {
    #[default]
    Normal,
    Duplicate,
}

/// One row of a demo table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowRecord {
    pub id: RowId,
    pub value: CellValue,
    pub status: RowStatus,
    /// Set when a null-fill transition wrote this row's value.
    pub filled: bool,
    /// Set on fixture rows that cannot coerce to a number.
    pub is_error: bool,
}

impl RowRecord {
    /// A plain row with default status and no flags.
    pub fn new(id: RowId, value: impl Into<CellValue>) -> Self {
        Self {
            id,
            value: value.into(),
            status: RowStatus::Normal,
            filled: false,
            is_error: false,
        }
    }

    /// A null row.
    pub fn null(id: RowId) -> Self {
        Self::new(id, CellValue::Null)
    }

    pub fn with_status(mut self, status: RowStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_error(mut self) -> Self {
        self.is_error = true;
        self
    }

    /// Whether this row's cell is null.
    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_rows_have_null_values() {
        let row = RowRecord::null(RowId(2));
        assert!(row.is_null());
        assert_eq!(row.value, CellValue::Null);
    }

    #[test]
    fn null_flag_cannot_disagree_with_value() {
        // A filled row stops being null the moment its value is written;
        // there is no second flag to forget to clear.
        let mut row = RowRecord::null(RowId(2));
        row.value = CellValue::Int(0);
        row.filled = true;
        assert!(!row.is_null());
    }

    #[test]
    fn display_forms() {
        assert_eq!(CellValue::Null.display(), "null");
        assert_eq!(CellValue::Int(100).display(), "100");
        assert_eq!(CellValue::Float(12.99).display(), "12.99");
        assert_eq!(CellValue::from("abc").display(), "abc");
    }

    #[test]
    fn default_status_is_normal() {
        let row = RowRecord::new(RowId(1), 100);
        assert_eq!(row.status, RowStatus::Normal);
        assert!(!row.filled);
        assert!(!row.is_error);
    }
}
