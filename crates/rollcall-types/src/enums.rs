//! Enumeration types for the Rollcall simulation.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single actor's position on a bill.
///
/// Serialized in the upper-case form the chamber view renders
/// (`"AYE"` / `"NAY"` / `"ABSTAIN"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "bindings/")]
pub enum Vote {
    /// In favor of the bill.
    Aye,
    /// Against the bill.
    Nay,
    /// Not voting; abstentions are excluded from the passage tally.
    Abstain,
}

impl core::fmt::Display for Vote {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            Self::Aye => "AYE",
            Self::Nay => "NAY",
            Self::Abstain => "ABSTAIN",
        };
        write!(f, "{label}")
    }
}

/// What a legislator does with a bill whose issue they do not hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum AbstainPolicy {
    /// Sit the vote out entirely.
    #[default]
    Abstain,
    /// Fall back to the party's deterministic line.
    PartyLine,
}
