//! Headless integration tests for the cleaning demo group.
//!
//! These drive every cleaning variant through the DemoManager the way a
//! hosting UI would: select an operation, fire its primary transition,
//! and read the resulting state and events back.

use tabviz_core::{CellValue, DemoEvent, RowId};
use tabviz_demos::variants::cleaning::NAN_MARKER;
use tabviz_demos::{DemoManager, VariantState, ids};

fn manager() -> DemoManager {
    DemoManager::with_builtin_catalog().unwrap()
}

/// Panics unless the active variant matches the given arm.
macro_rules! expect_variant {
    ($mgr:expr, $arm:path) => {
        match $mgr.variant() {
            Some($arm(demo)) => demo,
            other => panic!("unexpected variant: {other:?}"),
        }
    };
}

// ============================================================================
// Read-load
// ============================================================================

#[test]
fn read_csv_expand_materializes_fixture_and_reports_success() {
    let mut mgr = manager();
    mgr.select(ids::READ_CSV);
    mgr.drain_events();

    mgr.activate();
    let demo = expect_variant!(mgr, VariantState::ReadLoad);
    assert!(demo.is_expanded());
    assert_eq!(demo.rows().len(), 3);
    assert_eq!(demo.rows()[0].name, "Alice");
    assert_eq!(mgr.drain_events(), vec![DemoEvent::FixtureLoaded { rows: 3 }]);
}

#[test]
fn read_csv_reset_collapses_without_touching_data() {
    let mut mgr = manager();
    mgr.select(ids::READ_CSV);
    mgr.activate();
    mgr.reset_demo();
    let demo = expect_variant!(mgr, VariantState::ReadLoad);
    assert!(!demo.is_expanded());
    // The fixture itself is a constant; expanding again shows the same rows.
    mgr.activate();
    let demo = expect_variant!(mgr, VariantState::ReadLoad);
    assert_eq!(demo.rows()[2].score, 92);
}

// ============================================================================
// Duplicate removal
// ============================================================================

#[test]
fn drop_duplicates_execute_removes_one_row_and_is_idempotent() {
    let mut mgr = manager();
    mgr.select(ids::DROP_DUPLICATES);
    mgr.drain_events();

    mgr.activate();
    let demo = expect_variant!(mgr, VariantState::DropDuplicates);
    assert_eq!(demo.table().row_count(), 3);
    assert!(!demo.table().contains(RowId(3)));

    mgr.activate();
    let demo = expect_variant!(mgr, VariantState::DropDuplicates);
    assert_eq!(demo.table().row_count(), 3);
    assert_eq!(
        mgr.drain_events(),
        vec![DemoEvent::RowRemoved { id: RowId(3) }]
    );
}

// ============================================================================
// Null handling
// ============================================================================

#[test]
fn isnull_toggles_detection_and_reports_count() {
    let mut mgr = manager();
    mgr.select(ids::ISNULL);

    mgr.activate();
    let demo = expect_variant!(mgr, VariantState::DetectNull);
    assert!(demo.detection_active());
    assert_eq!(demo.null_count(), 2);
    let verdicts = demo.verdicts().unwrap();
    assert_eq!(verdicts.iter().filter(|(_, is_null)| *is_null).count(), 2);

    mgr.activate();
    let demo = expect_variant!(mgr, VariantState::DetectNull);
    assert!(!demo.detection_active());
    assert_eq!(demo.table().row_count(), 4);
}

#[test]
fn fillna_fills_then_disables() {
    let mut mgr = manager();
    mgr.select(ids::FILLNA);
    mgr.drain_events();

    mgr.activate();
    let demo = expect_variant!(mgr, VariantState::FillNull);
    assert_eq!(demo.table().null_count(), 0);
    assert_eq!(demo.filled_count(), 2);
    assert!(!demo.can_execute());

    // Second activation is a guarded no-op: no new event.
    mgr.activate();
    assert_eq!(mgr.drain_events(), vec![DemoEvent::NullsFilled { count: 2 }]);
}

#[test]
fn dropna_drops_nulls_preserving_survivor_order() {
    let mut mgr = manager();
    mgr.select(ids::DROPNA);
    mgr.drain_events();

    mgr.activate();
    let demo = expect_variant!(mgr, VariantState::DropNullRows);
    let ids: Vec<_> = demo.table().rows().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![RowId(1), RowId(3)]);
    assert_eq!(demo.dropped_count(), 2);

    mgr.activate();
    let demo = expect_variant!(mgr, VariantState::DropNullRows);
    assert_eq!(demo.table().row_count(), 2);
    assert_eq!(mgr.drain_events(), vec![DemoEvent::RowsDropped { count: 2 }]);
}

// ============================================================================
// Coercion, casting, array conversion, label extraction
// ============================================================================

#[test]
fn to_numeric_marks_error_rows_as_nan() {
    let mut mgr = manager();
    mgr.select(ids::TO_NUMERIC);

    mgr.activate();
    let demo = expect_variant!(mgr, VariantState::ToNumeric);
    assert!(demo.is_coerced());
    assert_eq!(
        demo.table().row(RowId(2)).unwrap().value,
        CellValue::from(NAN_MARKER)
    );
    assert_eq!(
        demo.table().row(RowId(1)).unwrap().value,
        CellValue::from("123")
    );
}

#[test]
fn astype_round_trips_between_dtypes() {
    let mut mgr = manager();
    mgr.select(ids::ASTYPE);

    mgr.activate();
    let demo = expect_variant!(mgr, VariantState::CastType);
    assert_eq!(demo.dtype().label(), "int64");
    assert_eq!(demo.display_values(), vec!["12", "45", "7"]);

    mgr.activate();
    let demo = expect_variant!(mgr, VariantState::CastType);
    assert_eq!(demo.dtype().label(), "float64");
    assert_eq!(demo.display_values(), vec!["12.99", "45.50", "7.01"]);
}

#[test]
fn np_array_and_columns_are_pure_display_toggles() {
    let mut mgr = manager();

    mgr.select(ids::NP_ARRAY);
    mgr.activate();
    let demo = expect_variant!(mgr, VariantState::FixedArray);
    assert_eq!(demo.elements(), &[1, 2, 3]);

    mgr.select(ids::COLUMNS);
    mgr.activate();
    let demo = expect_variant!(mgr, VariantState::ColumnLabels);
    assert_eq!(demo.extracted(), Some(&["Name", "Age", "City"][..]));
    mgr.activate();
    let demo = expect_variant!(mgr, VariantState::ColumnLabels);
    assert!(demo.extracted().is_none());
}
