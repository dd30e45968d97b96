//! Category dispatch: from a descriptor to the variant state machine that
//! models it.
//!
//! A tagged dispatch table replaces the long identity-comparison chain the
//! demos would otherwise accumulate: each known operation id maps to a
//! constructor, grouped by category, and the match is exhaustive over
//! [`VariantState`]. Unknown categories and unknown ids within a category
//! produce `None` -- the manager then renders nothing rather than failing.

use crate::catalog::{Category, OperationDescriptor};
use crate::variants::cleaning::{
    CastType, ColumnLabels, DetectNull, DropDuplicates, DropNullRows, FillNull, FixedArray,
    ReadLoad, ToNumeric,
};
use crate::variants::slicing::{ColumnSubset, LabelPosition, QueryFilter};

/// Known operation ids, as they appear in the catalog.
pub mod ids {
    pub const READ_CSV: &str = "read_csv";
    pub const DROP_DUPLICATES: &str = "drop_duplicates";
    pub const ISNULL: &str = "isnull";
    pub const FILLNA: &str = "fillna";
    pub const DROPNA: &str = "dropna";
    pub const TO_NUMERIC: &str = "to_numeric";
    pub const ASTYPE: &str = "astype";
    pub const NP_ARRAY: &str = "np_array";
    pub const COLUMNS: &str = "columns";
    pub const LOC_ILOC: &str = "loc_iloc";
    pub const QUERY: &str = "query";
    pub const SUBSET: &str = "subset";
}

/// The state machine of the active demo, one arm per modeled operation.
#[derive(Debug)]
pub enum VariantState {
    ReadLoad(ReadLoad),
    DropDuplicates(DropDuplicates),
    DetectNull(DetectNull),
    FillNull(FillNull),
    DropNullRows(DropNullRows),
    ToNumeric(ToNumeric),
    CastType(CastType),
    FixedArray(FixedArray),
    ColumnLabels(ColumnLabels),
    LabelPosition(LabelPosition),
    QueryFilter(QueryFilter),
    ColumnSubset(ColumnSubset),
}

/// Build a fresh variant instance for a descriptor. Every call constructs
/// from fixture defaults; the caller replaces the previous instance, which
/// is what guarantees clean reset on operation change.
pub fn build_variant(descriptor: &OperationDescriptor) -> Option<VariantState> {
    match descriptor.category {
        Category::Cleaning => cleaning_variant(&descriptor.id),
        Category::Slicing => slicing_variant(&descriptor.id),
        // No internal variants for these categories yet.
        Category::Engineering | Category::Logic | Category::Training => None,
    }
}

fn cleaning_variant(id: &str) -> Option<VariantState> {
    let variant = match id {
        ids::READ_CSV => VariantState::ReadLoad(ReadLoad::new()),
        ids::DROP_DUPLICATES => VariantState::DropDuplicates(DropDuplicates::new()),
        ids::ISNULL => VariantState::DetectNull(DetectNull::new()),
        ids::FILLNA => VariantState::FillNull(FillNull::new()),
        ids::DROPNA => VariantState::DropNullRows(DropNullRows::new()),
        ids::TO_NUMERIC => VariantState::ToNumeric(ToNumeric::new()),
        ids::ASTYPE => VariantState::CastType(CastType::new()),
        ids::NP_ARRAY => VariantState::FixedArray(FixedArray::new()),
        ids::COLUMNS => VariantState::ColumnLabels(ColumnLabels::new()),
        _ => return None,
    };
    Some(variant)
}

fn slicing_variant(id: &str) -> Option<VariantState> {
    let variant = match id {
        ids::LOC_ILOC => VariantState::LabelPosition(LabelPosition::new()),
        ids::QUERY => VariantState::QueryFilter(QueryFilter::new()),
        ids::SUBSET => VariantState::ColumnSubset(ColumnSubset::new()),
        _ => return None,
    };
    Some(variant)
}
