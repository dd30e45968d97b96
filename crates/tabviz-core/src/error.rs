use crate::id::RowId;

/// Errors from the core model. These indicate construction bugs (a fixture
/// or transition produced an invalid snapshot); they are surfaced by
/// [`crate::table::TableSnapshot::validate`] and asserted in debug builds.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Two rows in one snapshot share an id.
    #[error("duplicate row id {id} in snapshot")]
    DuplicateRowId { id: RowId },
}
