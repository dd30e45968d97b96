//! Per-operation demo state machines, grouped by catalog category.

pub mod cleaning;
pub mod slicing;
