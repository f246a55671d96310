//! Election, voting policy, and session engine for the Rollcall
//! legislature simulation.
//!
//! This crate owns the whole simulation core: a [`Legislature`] is
//! elected once from a [`ChamberConfig`], and each call to
//! [`Legislature::hold_session`] runs one bill through sponsorship,
//! party lines, the roll call, and the passage decision.
//!
//! # Modules
//!
//! - [`chamber`] -- The [`Legislature`]: population owner and session
//!   engine.
//! - [`config`] -- Configuration loading from `rollcall-config.yaml`
//!   into a strongly-typed struct.
//! - [`decision`] -- Party-line and legislator ballot policy.
//! - [`election`] -- Random generation of parties and legislators.
//! - [`naming`] -- Word pools, shuffling, and bill-name synthesis.
//!
//! [`Legislature`]: chamber::Legislature
//! [`Legislature::hold_session`]: chamber::Legislature::hold_session
//! [`ChamberConfig`]: config::ChamberConfig

pub mod chamber;
pub mod config;
pub mod decision;
pub mod election;
pub mod naming;

// Re-export primary types at crate root.
pub use chamber::{BILL_DRIFT_LIMIT, Legislature, SessionError};
pub use config::{ChamberConfig, ConfigError};
pub use election::ElectionError;
