//! Core entity structs: parties, legislators, vote records, and the
//! per-session result payload.
//!
//! Parties and legislators share the same identity core (name, compass
//! position, issue set, vote history) but remain distinct types: their
//! decision policies differ, and only legislators sponsor bills. The
//! `party` / `members` fields form an exact inverse relation, stored as
//! IDs on both sides -- see [`crate::ids`].

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::compass::Point;
use crate::enums::Vote;
use crate::ids::{LegislatorId, PartyId};

/// One entry in an actor's vote history.
///
/// Rendered as `"<bill> - <vote>"` in the chamber view, matching the
/// [`core::fmt::Display`] impl.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct VoteRecord {
    /// Name of the bill that was voted on.
    pub bill: String,
    /// The position taken.
    pub vote: Vote,
}

impl core::fmt::Display for VoteRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} - {}", self.bill, self.vote)
    }
}

/// A political party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Party {
    /// Unique identifier.
    pub id: PartyId,
    /// Display name.
    pub name: String,
    /// Display color; carries no behavior.
    pub color: String,
    /// Compass position, fixed at election time.
    pub compass: Point,
    /// Issues the party identifies with (duplicates removed).
    pub issues: BTreeSet<String>,
    /// Party lines taken so far, in session order.
    pub vote_history: Vec<VoteRecord>,
    /// Legislators whose assigned party is this one, in seating order.
    ///
    /// Exact inverse of each member's [`Legislator::party`] field.
    pub members: Vec<LegislatorId>,
}

/// A single legislator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Legislator {
    /// Unique identifier.
    pub id: LegislatorId,
    /// Display name.
    pub name: String,
    /// The party joined at election time; never reassigned.
    pub party: PartyId,
    /// Compass position, fixed at election time.
    pub compass: Point,
    /// Issues the legislator cares about: their personally rolled issues
    /// unioned with their party's. The legislator abstains on anything
    /// outside this set.
    pub issues: BTreeSet<String>,
    /// Votes cast so far, in session order.
    pub vote_history: Vec<VoteRecord>,
    /// Names of the bills this legislator has sponsored.
    pub bills_introduced: Vec<String>,
}

/// The outcome of one legislative session, returned for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SessionResult {
    /// The generated bill name.
    pub name: String,
    /// The legislator who introduced the bill.
    pub sponsor: LegislatorId,
    /// The sponsor's display name.
    pub sponsor_name: String,
    /// The issue the bill addresses (always held by the sponsor).
    pub issue: String,
    /// The bill's compass position: the sponsor's, perturbed.
    pub compass: Point,
    /// Whether the bill passed and became law.
    pub passed: bool,
    /// Number of AYE votes (the sponsor's forced AYE included).
    pub aye: u32,
    /// Number of NAY votes.
    pub nay: u32,
    /// Number of abstentions, derived as seats minus votes cast.
    pub abstain: u32,
    /// Every legislator's position on the bill.
    pub votes: BTreeMap<LegislatorId, Vote>,
    /// Every party's deterministic line on the bill.
    pub party_lines: BTreeMap<PartyId, Vote>,
}
