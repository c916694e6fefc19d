//! Motorcycle instrument cluster simulator.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic cluster logic (gear table, gear/RPM
//!   policy, model catalogue, persisted record). No I/O.
//! - **[`io`]**: Side-effecting operations (config and saved state on disk).
//!
//! [`dashboard`] exposes the press/tick/release/save events a front end
//! drives, and [`session`] is the line-oriented terminal front end.

pub mod core;
pub mod dashboard;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
