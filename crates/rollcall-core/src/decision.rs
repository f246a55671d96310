//! Voting decision policy for parties and legislators.
//!
//! Parties are disciplined: their line on a bill is a pure function of
//! the bill's issue and compass position, reproducible on every call.
//! Legislators are not: when a bill touches one of their issues, the
//! acceptable distance is re-rolled per ballot, so the same legislator
//! can land differently on an identical bill. The sponsor's forced AYE
//! lives in the session protocol, not here.

use rand::Rng;

use rollcall_types::{AbstainPolicy, Legislator, Party, Point, Vote};

/// Distance threshold for the party line.
///
/// A party votes AYE when the bill sits *farther* than this from the
/// party's own compass position. Inherited behavior: far means agree.
pub const PARTY_LINE_THRESHOLD: f64 = 7.5;

/// Lower bound of a legislator's per-ballot acceptance threshold.
pub const WAVER_FLOOR: f64 = 5.0;

/// Upper bound (exclusive) of a legislator's per-ballot acceptance
/// threshold.
pub const WAVER_CEILING: f64 = 10.0;

/// Decide a party's line on a bill. Deterministic.
///
/// A bill on an issue the party does not hold gets an ABSTAIN. Otherwise
/// the line is AYE exactly when the bill's compass distance from the
/// party exceeds [`PARTY_LINE_THRESHOLD`], and NAY otherwise.
pub fn party_line(party: &Party, bill_issue: &str, bill_compass: Point) -> Vote {
    if !party.issues.contains(bill_issue) {
        return Vote::Abstain;
    }
    if party.compass.distance_to(bill_compass) > PARTY_LINE_THRESHOLD {
        Vote::Aye
    } else {
        Vote::Nay
    }
}

/// Decide a legislator's ballot on a bill.
///
/// A bill on an issue outside the legislator's personal set is handled
/// by `policy`: an outright ABSTAIN by default, or the party's
/// deterministic line under [`AbstainPolicy::PartyLine`]. On a held
/// issue, an acceptance threshold is drawn uniformly from
/// `[WAVER_FLOOR, WAVER_CEILING)`; the ballot is NAY when the bill sits
/// farther than the threshold, AYE otherwise. Repeated calls on the same
/// bill may disagree with each other.
pub fn ballot(
    legislator: &Legislator,
    party: &Party,
    bill_issue: &str,
    bill_compass: Point,
    policy: AbstainPolicy,
    rng: &mut impl Rng,
) -> Vote {
    if !legislator.issues.contains(bill_issue) {
        return match policy {
            AbstainPolicy::Abstain => Vote::Abstain,
            AbstainPolicy::PartyLine => party_line(party, bill_issue, bill_compass),
        };
    }
    let threshold = rng.random_range(WAVER_FLOOR..WAVER_CEILING);
    if legislator.compass.distance_to(bill_compass) > threshold {
        Vote::Nay
    } else {
        Vote::Aye
    }
}
