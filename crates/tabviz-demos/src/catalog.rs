//! The operation catalog.
//!
//! Descriptors are display metadata supplied by the hosting application;
//! the engine reads only `id` (the reset key) and `category` (variant-group
//! routing). The catalog ships as a RON manifest; [`Catalog::builtin`]
//! embeds the one under `catalog/operations.ron`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::DemoError;

/// Variant-group category of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Category {
    Cleaning,
    Slicing,
    Engineering,
    Logic,
    Training,
}

/// Metadata record describing one modeled operation. Immutable; supplied by
/// the hosting application and used for display text and routing only.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OperationDescriptor {
    pub id: String,
    pub category: Category,
    pub name: String,
    pub description: String,
    pub business_logic: String,
    pub code_prototype: String,
}

/// Ordered, validated set of operation descriptors.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    operations: Vec<OperationDescriptor>,
}

impl Catalog {
    /// Parse a catalog from RON text and validate it: at least one entry,
    /// no duplicate ids.
    pub fn from_ron(source: &str, origin: &Path) -> Result<Self, DemoError> {
        let catalog: Catalog = ron::from_str(source).map_err(|e| DemoError::Parse {
            file: origin.to_path_buf(),
            detail: e.to_string(),
        })?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a RON file on disk.
    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_ron(&content, path)
    }

    /// The catalog embedded in this crate.
    pub fn builtin() -> Result<Self, DemoError> {
        Self::from_ron(
            include_str!("../catalog/operations.ron"),
            &PathBuf::from("catalog/operations.ron"),
        )
    }

    fn validate(&self) -> Result<(), DemoError> {
        if self.operations.is_empty() {
            return Err(DemoError::EmptyCatalog);
        }
        for (i, op) in self.operations.iter().enumerate() {
            if self.operations[..i].iter().any(|o| o.id == op.id) {
                return Err(DemoError::DuplicateOperation { id: op.id.clone() });
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn operations(&self) -> &[OperationDescriptor] {
        &self.operations
    }

    /// Look up a descriptor by id.
    pub fn get(&self, id: &str) -> Option<&OperationDescriptor> {
        self.operations.iter().find(|op| op.id == id)
    }

    /// Look up a descriptor by id, falling back to the first entry when the
    /// id is unknown. Validation guarantees a first entry exists.
    pub fn resolve(&self, id: &str) -> &OperationDescriptor {
        self.get(id).unwrap_or(&self.operations[0])
    }

    /// Descriptors in a category, in catalog order.
    pub fn in_category(&self, category: Category) -> Vec<&OperationDescriptor> {
        self.operations
            .iter()
            .filter(|op| op.category == category)
            .collect()
    }
}
