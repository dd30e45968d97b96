//! Guided tour: drives every demo in the built-in catalog headlessly and
//! prints what a renderer would show after each transition.
//!
//! Run with: `cargo run -p tabviz-examples --example guided_tour`

use tabviz_demos::{DemoManager, VariantState, ids};

fn main() {
    let mut mgr = DemoManager::with_builtin_catalog().expect("load built-in catalog");

    for descriptor in mgr.catalog().operations().to_vec() {
        println!("=== {} [{:?}] ===", descriptor.name, descriptor.category);
        println!("    {}", descriptor.code_prototype);

        mgr.select(&descriptor.id);
        if mgr.variant().is_none() {
            println!("    (no interactive demo for this category)\n");
            continue;
        }

        // Hover demos react to the pointer, everything else to activation.
        if descriptor.id == ids::LOC_ILOC {
            mgr.hover_cell(2, 1);
        } else {
            mgr.activate();
        }
        // Let any scheduled phase (the query filter's removal) fire.
        mgr.advance(500);

        print_state(&mgr);
        for event in mgr.drain_events() {
            println!("    event: {event:?}");
        }
        println!();
    }
}

fn print_state(mgr: &DemoManager) {
    match mgr.variant() {
        Some(VariantState::ReadLoad(demo)) => {
            for row in demo.rows() {
                println!("    {} | {} | {}", row.id, row.name, row.score);
            }
        }
        Some(VariantState::DropDuplicates(demo)) => print_table(demo.table()),
        Some(VariantState::DetectNull(demo)) => {
            for (id, is_null) in demo.verdicts().unwrap_or_default() {
                println!("    row {id}: {}", if is_null { "TRUE" } else { "FALSE" });
            }
        }
        Some(VariantState::FillNull(demo)) => print_table(demo.table()),
        Some(VariantState::DropNullRows(demo)) => print_table(demo.table()),
        Some(VariantState::ToNumeric(demo)) => print_table(demo.table()),
        Some(VariantState::CastType(demo)) => {
            println!("    [{}] {}", demo.dtype().label(), demo.display_values().join(", "));
        }
        Some(VariantState::FixedArray(demo)) => {
            println!("    {:?} as {:?}", demo.elements(), demo.layout());
        }
        Some(VariantState::ColumnLabels(demo)) => {
            println!("    {}", demo.index_repr());
        }
        Some(VariantState::LabelPosition(demo)) => {
            if let Some(expr) = demo.expression() {
                println!("    {}  ->  {}", expr.position, expr.label);
            }
        }
        Some(VariantState::QueryFilter(demo)) => {
            println!("    phase {:?}: {:?}", demo.phase(), demo.surviving_values());
        }
        Some(VariantState::ColumnSubset(demo)) => {
            let names: Vec<_> = demo.visible_columns().iter().map(|c| c.name.as_str()).collect();
            println!("    columns: {names:?}");
        }
        None => {}
    }
}

fn print_table(table: &tabviz_core::TableSnapshot) {
    for row in table.rows() {
        println!("    #{} {}", row.id, row.value.display());
    }
}
