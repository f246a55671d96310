//! Shared type definitions for the Rollcall legislature simulation.
//!
//! This crate is the single source of truth for the types that cross the
//! boundary between the simulation engine and its consumers. Types defined
//! here flow downstream to `TypeScript` via `ts-rs` for the chamber view.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for parties and legislators
//! - [`compass`] -- The 2-D political-compass plane and its [`Point`] type
//! - [`enums`] -- The [`Vote`] ballot positions and the abstention policy
//! - [`structs`] -- Entity structs and the per-session result payload
//!
//! [`Point`]: compass::Point
//! [`Vote`]: enums::Vote

pub mod compass;
pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use compass::{COMPASS_BOUND, Point};
pub use enums::{AbstainPolicy, Vote};
pub use ids::{LegislatorId, PartyId};
pub use structs::{Legislator, Party, SessionResult, VoteRecord};
