use serde::{Deserialize, Serialize};

/// Identifies a row within one snapshot. Cheap to copy and compare.
///
/// Row ids are stable for the lifetime of a variant instance: removing a
/// row retires its id, it is never reassigned to a later row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RowId(pub u32);

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
