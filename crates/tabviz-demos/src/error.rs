use std::path::PathBuf;

/// Errors that can occur in the demo engine.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    /// The operation catalog has no entries. A catalog must have at least
    /// one descriptor to serve as the unknown-id fallback.
    #[error("operation catalog is empty")]
    EmptyCatalog,

    /// Two catalog entries share an operation id.
    #[error("duplicate operation id '{id}' in catalog")]
    DuplicateOperation { id: String },

    /// Failed to parse a catalog file.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// An I/O error occurred while loading the catalog.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
