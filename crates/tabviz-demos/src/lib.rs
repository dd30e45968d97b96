//! Tabviz Demos -- the demo state engine.
//!
//! One state machine per modeled data-manipulation operation, a catalog of
//! operation descriptors, and a manager that routes a selected operation id
//! to the right variant and guarantees clean reset on every switch.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tabviz_demos::DemoManager;
//!
//! let mut mgr = DemoManager::with_builtin_catalog()?;
//! mgr.select("query");
//! mgr.activate();          // phase 1: rows marked pass/fail
//! mgr.advance(500);        // phase 2: failing rows removed
//! let state = mgr.variant();
//! ```
//!
//! # Architecture
//!
//! - [`catalog`] -- `OperationDescriptor` records loaded from a RON
//!   manifest; display metadata plus the id/category the engine routes on.
//! - [`variants`] -- self-contained per-operation state machines over
//!   fixed fixtures ([`variants::cleaning`], [`variants::slicing`]).
//! - [`dispatch`] -- the tagged id-to-constructor table.
//! - [`manager`] -- instance arena, simulated clock, scheduled phase
//!   delivery, and the host-facing interaction API.

pub mod catalog;
pub mod dispatch;
pub mod error;
pub mod manager;
pub mod variants;

pub use catalog::{Catalog, Category, OperationDescriptor};
pub use dispatch::{VariantState, build_variant, ids};
pub use error::DemoError;
pub use manager::{DemoManager, InstanceKey};
