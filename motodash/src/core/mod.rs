//! Deterministic, pure logic for the instrument cluster.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! values and return deterministic outputs suitable for tests.

pub mod gear_table;
pub mod policy;
pub mod record;
pub mod registry;
pub mod state;
pub mod variant;
