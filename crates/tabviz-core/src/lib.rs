//! Tabviz Core -- shared state model for the demo engine.
//!
//! This crate provides the building blocks every demo variant is assembled
//! from: row records and tabular snapshots, a simulated-clock transition
//! scheduler, a typed event log, and the defensive invariant checks that
//! back them.
//!
//! # Determinism
//!
//! Nothing in this crate reads wall-clock time or randomness. Time advances
//! only through [`clock::Scheduler::advance`], so multi-phase transitions
//! (the conditional row filter's delayed removal) are exactly reproducible
//! in tests.
//!
//! # Key Types
//!
//! - [`row::RowRecord`] -- One row of a demo table. Nullness is a value
//!   variant, not a flag, so a null marker can never disagree with the
//!   stored value.
//! - [`table::TableSnapshot`] -- Ordered rows plus optional column metadata.
//!   Derived from fixture constants; fixtures themselves are never mutated.
//! - [`clock::Scheduler`] -- Millisecond-granular task queue over a
//!   simulated clock, with generation tokens for stale-task rejection.
//! - [`event::EventLog`] -- Bounded buffer of typed [`event::DemoEvent`]s,
//!   the engine's observability surface.

pub mod clock;
pub mod error;
pub mod event;
pub mod id;
pub mod row;
pub mod table;

pub use clock::{Generation, Millis, Scheduler};
pub use error::CoreError;
pub use event::{DemoEvent, EventLog};
pub use id::RowId;
pub use row::{CellValue, RowRecord, RowStatus};
pub use table::{ColumnMeta, TableSnapshot};
