//! The demo manager: owns the catalog, the active variant instance, the
//! transition scheduler, and the event log.
//!
//! # Reset on operation change
//!
//! The manager never reaches into a variant to reset it on selection.
//! Variant instances live in a [`SlotMap`]; selecting a different operation
//! removes the old slot and inserts a freshly built instance. The old key
//! is dead from that moment, so any scheduled task still carrying it fails
//! to resolve and is dropped -- residual state and late timers are ruled
//! out by construction rather than by cleanup code.
//!
//! # Timed phases
//!
//! [`DemoManager::activate`] on the conditional filter schedules its
//! phase-2 task with the instance key and the filter's generation token.
//! [`DemoManager::advance`] drives the simulated clock and delivers due
//! tasks; a task whose key no longer resolves, or whose token no longer
//! matches, is recorded as [`DemoEvent::StaleTaskDropped`] and has no other
//! effect.

use slotmap::{SlotMap, new_key_type};

use tabviz_core::{DemoEvent, EventLog, Generation, Millis, Scheduler};

use crate::catalog::{Catalog, OperationDescriptor};
use crate::dispatch::{VariantState, build_variant};
use crate::error::DemoError;
use crate::variants::slicing::PHASE_TWO_DELAY_MS;

new_key_type! {
    /// Identifies one variant instance in the manager's arena. Keys die
    /// with their slot, which is what invalidates in-flight tasks on
    /// operation change.
    pub struct InstanceKey;
}

/// A delayed phase transition, bound to the instance and generation that
/// scheduled it.
#[derive(Debug, Clone, Copy)]
struct PhaseTask {
    key: InstanceKey,
    token: Generation,
}

/// Owns and coordinates the demo engine state for one hosting surface.
pub struct DemoManager {
    catalog: Catalog,
    instances: SlotMap<InstanceKey, VariantState>,
    active: Option<InstanceKey>,
    active_id: Option<String>,
    scheduler: Scheduler<PhaseTask>,
    events: EventLog,
}

impl DemoManager {
    /// Create a manager over a validated catalog. No operation is selected
    /// until the host calls [`DemoManager::select`].
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            instances: SlotMap::with_key(),
            active: None,
            active_id: None,
            scheduler: Scheduler::new(),
            events: EventLog::new(),
        }
    }

    /// Create a manager over the built-in catalog.
    pub fn with_builtin_catalog() -> Result<Self, DemoError> {
        Ok(Self::new(Catalog::builtin()?))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Select the active operation. Unknown ids resolve to the catalog's
    /// first entry. Selecting the already-active id is a no-op; selecting
    /// a different id discards the previous instance wholesale and builds
    /// a fresh one from its fixture. Categories with no internal variant
    /// leave no active instance (the host renders nothing).
    pub fn select(&mut self, function_id: &str) {
        let descriptor = self.catalog.resolve(function_id).clone();
        if self.active_id.as_deref() == Some(descriptor.id.as_str()) {
            return;
        }
        if let Some(old) = self.active.take() {
            self.instances.remove(old);
        }
        self.active = build_variant(&descriptor).map(|v| self.instances.insert(v));
        self.active_id = Some(descriptor.id.clone());
        self.events.push(DemoEvent::OperationSelected { id: descriptor.id });
    }

    /// The descriptor of the selected operation, if any.
    pub fn active_descriptor(&self) -> Option<&OperationDescriptor> {
        self.active_id.as_deref().and_then(|id| self.catalog.get(id))
    }

    /// The active variant's state, if the selected category has one.
    pub fn variant(&self) -> Option<&VariantState> {
        self.active.and_then(|key| self.instances.get(key))
    }

    /// Mutable access to the active variant, for hosts that drive
    /// transitions directly. Timed transitions should go through
    /// [`DemoManager::activate`] so phase tasks get scheduled.
    pub fn variant_mut(&mut self) -> Option<&mut VariantState> {
        self.active.and_then(|key| self.instances.get_mut(key))
    }

    /// Current simulated time.
    pub fn now(&self) -> Millis {
        self.scheduler.now()
    }

    /// Scheduled phase tasks not yet fired (stale ones included).
    pub fn pending_phases(&self) -> usize {
        self.scheduler.pending()
    }

    /// Drain buffered engine events, oldest first.
    pub fn drain_events(&mut self) -> Vec<DemoEvent> {
        self.events.drain()
    }

    /// Advance the simulated clock and deliver due phase tasks. Tasks whose
    /// instance or generation is gone are dropped silently (logged as
    /// [`DemoEvent::StaleTaskDropped`]).
    pub fn advance(&mut self, dt: Millis) {
        for task in self.scheduler.advance(dt) {
            let applied = match self.instances.get_mut(task.key) {
                Some(VariantState::QueryFilter(filter)) => {
                    filter.apply_phase_two(task.token, &mut self.events)
                }
                _ => false,
            };
            if !applied {
                self.events.push(DemoEvent::StaleTaskDropped);
            }
        }
    }

    /// Run the active demo's primary transition: expand for read-load,
    /// execute for the mutating demos, toggle for the display demos, and
    /// trigger (plus phase-2 scheduling) for the conditional filter. With
    /// no active variant this is a no-op.
    pub fn activate(&mut self) {
        let Some(key) = self.active else { return };
        let Some(variant) = self.instances.get_mut(key) else {
            return;
        };
        match variant {
            VariantState::ReadLoad(demo) => {
                demo.expand(&mut self.events);
            }
            VariantState::DropDuplicates(demo) => {
                demo.execute(&mut self.events);
            }
            VariantState::DetectNull(demo) => {
                demo.toggle();
            }
            VariantState::FillNull(demo) => {
                demo.execute(&mut self.events);
            }
            VariantState::DropNullRows(demo) => {
                demo.execute(&mut self.events);
            }
            VariantState::ToNumeric(demo) => {
                demo.execute(&mut self.events);
            }
            VariantState::CastType(demo) => {
                demo.toggle();
            }
            VariantState::FixedArray(demo) => {
                demo.toggle();
            }
            VariantState::ColumnLabels(demo) => {
                demo.toggle();
            }
            // Pointer-driven only; there is no click transition.
            VariantState::LabelPosition(_) => {}
            VariantState::QueryFilter(filter) => {
                if let Some(token) = filter.trigger(&mut self.events) {
                    self.scheduler
                        .schedule(PHASE_TWO_DELAY_MS, PhaseTask { key, token });
                }
            }
            VariantState::ColumnSubset(demo) => {
                demo.toggle();
            }
        }
    }

    /// Reset the active demo to its fixture defaults. For the conditional
    /// filter this also stales any pending phase-2 task.
    pub fn reset_demo(&mut self) {
        let Some(variant) = self.variant_mut() else {
            return;
        };
        match variant {
            VariantState::ReadLoad(demo) => demo.reset(),
            VariantState::DropDuplicates(demo) => demo.reset(),
            VariantState::DetectNull(demo) => demo.reset(),
            VariantState::FillNull(demo) => demo.reset(),
            VariantState::DropNullRows(demo) => demo.reset(),
            VariantState::ToNumeric(demo) => demo.reset(),
            VariantState::CastType(demo) => demo.reset(),
            VariantState::FixedArray(demo) => demo.reset(),
            VariantState::ColumnLabels(demo) => demo.reset(),
            VariantState::LabelPosition(demo) => demo.reset(),
            VariantState::QueryFilter(demo) => demo.reset(),
            VariantState::ColumnSubset(demo) => demo.reset(),
        }
        self.events.push(DemoEvent::DemoReset);
    }

    // --- Pointer input (label/position demo only) ---

    pub fn hover_row(&mut self, row: usize) {
        if let Some(VariantState::LabelPosition(demo)) = self.variant_mut() {
            demo.hover_row(row);
        }
    }

    pub fn hover_col(&mut self, col: usize) {
        if let Some(VariantState::LabelPosition(demo)) = self.variant_mut() {
            demo.hover_col(col);
        }
    }

    pub fn hover_cell(&mut self, row: usize, col: usize) {
        if let Some(VariantState::LabelPosition(demo)) = self.variant_mut() {
            demo.hover_cell(row, col);
        }
    }

    pub fn clear_hover(&mut self) {
        if let Some(VariantState::LabelPosition(demo)) = self.variant_mut() {
            demo.clear_hover();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::ids;
    use crate::variants::slicing::QueryPhase;

    fn manager() -> DemoManager {
        DemoManager::with_builtin_catalog().unwrap()
    }

    #[test]
    fn select_builds_the_matching_variant() {
        let mut mgr = manager();
        mgr.select(ids::FILLNA);
        assert!(matches!(mgr.variant(), Some(VariantState::FillNull(_))));
        assert_eq!(mgr.active_descriptor().unwrap().id, ids::FILLNA);
    }

    #[test]
    fn unknown_id_falls_back_to_first_catalog_entry() {
        let mut mgr = manager();
        mgr.select("definitely_not_an_operation");
        let first = mgr.catalog().operations()[0].id.clone();
        assert_eq!(mgr.active_descriptor().unwrap().id, first);
    }

    #[test]
    fn unrecognized_category_renders_nothing() {
        let mut mgr = manager();
        mgr.select("train_test_split");
        assert!(mgr.variant().is_none());
        assert_eq!(mgr.active_descriptor().unwrap().id, "train_test_split");
        // Interactions on an empty selection must not panic.
        mgr.activate();
        mgr.reset_demo();
        mgr.advance(1000);
    }

    #[test]
    fn reselecting_the_active_operation_keeps_state() {
        let mut mgr = manager();
        mgr.select(ids::READ_CSV);
        mgr.activate();
        mgr.select(ids::READ_CSV);
        match mgr.variant() {
            Some(VariantState::ReadLoad(demo)) => assert!(demo.is_expanded()),
            other => panic!("expected ReadLoad, got {other:?}"),
        }
    }

    #[test]
    fn switching_operations_discards_all_prior_state() {
        let mut mgr = manager();
        mgr.select(ids::READ_CSV);
        mgr.activate();
        mgr.select(ids::DROP_DUPLICATES);
        match mgr.variant() {
            Some(VariantState::DropDuplicates(demo)) => {
                assert_eq!(demo.table().row_count(), 4);
            }
            other => panic!("expected DropDuplicates, got {other:?}"),
        }
        // Switching back rebuilds read-load from scratch: collapsed again.
        mgr.select(ids::READ_CSV);
        match mgr.variant() {
            Some(VariantState::ReadLoad(demo)) => assert!(!demo.is_expanded()),
            other => panic!("expected ReadLoad, got {other:?}"),
        }
    }

    #[test]
    fn query_phase_two_fires_at_exactly_500ms() {
        let mut mgr = manager();
        mgr.select(ids::QUERY);
        mgr.activate();
        mgr.advance(499);
        match mgr.variant() {
            Some(VariantState::QueryFilter(f)) => {
                assert_eq!(f.phase(), QueryPhase::Marked);
                assert_eq!(f.table().row_count(), 8);
            }
            other => panic!("expected QueryFilter, got {other:?}"),
        }
        mgr.advance(1);
        match mgr.variant() {
            Some(VariantState::QueryFilter(f)) => {
                assert_eq!(f.phase(), QueryPhase::Filtered);
                assert_eq!(f.surviving_values(), vec![60, 80, 90, 55]);
            }
            other => panic!("expected QueryFilter, got {other:?}"),
        }
    }

    #[test]
    fn reset_before_deadline_suppresses_phase_two() {
        let mut mgr = manager();
        mgr.select(ids::QUERY);
        mgr.activate();
        mgr.advance(200);
        mgr.reset_demo();
        mgr.advance(300);
        match mgr.variant() {
            Some(VariantState::QueryFilter(f)) => {
                assert_eq!(f.phase(), QueryPhase::Idle);
                assert_eq!(f.table().row_count(), 8);
            }
            other => panic!("expected QueryFilter, got {other:?}"),
        }
        assert!(mgr.drain_events().contains(&DemoEvent::StaleTaskDropped));
    }

    #[test]
    fn switching_operations_before_deadline_suppresses_phase_two() {
        let mut mgr = manager();
        mgr.select(ids::QUERY);
        mgr.activate();
        mgr.select(ids::FILLNA);
        mgr.advance(500);
        // The fill demo is untouched by the stale filter task.
        match mgr.variant() {
            Some(VariantState::FillNull(demo)) => {
                assert_eq!(demo.table().row_count(), 4);
                assert_eq!(demo.table().null_count(), 2);
            }
            other => panic!("expected FillNull, got {other:?}"),
        }
        assert!(mgr.drain_events().contains(&DemoEvent::StaleTaskDropped));
    }

    #[test]
    fn hover_input_reaches_only_the_selection_demo() {
        let mut mgr = manager();
        mgr.select(ids::LOC_ILOC);
        mgr.hover_cell(2, 1);
        match mgr.variant() {
            Some(VariantState::LabelPosition(demo)) => {
                assert!(demo.expression().is_some());
            }
            other => panic!("expected LabelPosition, got {other:?}"),
        }
        mgr.select(ids::FILLNA);
        // No-ops on non-hover demos.
        mgr.hover_row(1);
        mgr.clear_hover();
    }
}
