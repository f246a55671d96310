//! The legislature: population owner and session engine.
//!
//! A [`Legislature`] is elected once from a [`ChamberConfig`] and lives
//! for the duration of one simulation run. Membership and party
//! assignment are frozen at election time; sessions only append (to
//! vote histories, to sponsors' introduced-bill lists, to the law book)
//! and increment the session counter. Each session runs to completion
//! synchronously; there is exactly one logical thread of control through
//! the engine.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::info;

use rollcall_types::{
    AbstainPolicy, Legislator, LegislatorId, Party, PartyId, SessionResult, Vote, VoteRecord,
};

use crate::config::ChamberConfig;
use crate::decision;
use crate::election::{self, ElectionError};
use crate::naming;

/// Half-width of the perturbation square applied to a sponsor's compass
/// to place a bill.
pub const BILL_DRIFT_LIMIT: f64 = 5.0;

/// Errors that can occur while holding a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The session counter would overflow.
    #[error("session counter overflow: cannot hold more than u32::MAX sessions")]
    SessionOverflow,

    /// The chamber has no legislators to sponsor or vote.
    #[error("legislature has no legislators")]
    NoLegislators,

    /// The chosen sponsor holds no issues, so no bill issue can be drawn.
    #[error("sponsor {name} holds no issues")]
    EmptyIssueSet {
        /// The sponsor's display name.
        name: String,
    },

    /// A legislator references a party that is not in the chamber.
    #[error("legislator {name} references an unknown party")]
    UnknownParty {
        /// The legislator's display name.
        name: String,
    },
}

/// A legislature: the full population of parties and legislators, plus
/// the accumulated session history.
#[derive(Debug, Clone)]
pub struct Legislature {
    parties: Vec<Party>,
    legislators: Vec<Legislator>,
    issues: Vec<String>,
    laws: Vec<String>,
    sessions: u32,
    abstain_policy: AbstainPolicy,
    elected_at: DateTime<Utc>,
}

impl Legislature {
    /// Elect a new legislature from the given configuration, using the
    /// thread-local random source.
    ///
    /// # Errors
    ///
    /// Returns [`ElectionError`] if any pool is empty or any count is
    /// zero (see [`ChamberConfig`]).
    pub fn new(config: &ChamberConfig) -> Result<Self, ElectionError> {
        Self::new_with(config, &mut rand::rng())
    }

    /// Elect a new legislature with an injected random source, so tests
    /// can seed the election.
    ///
    /// # Errors
    ///
    /// Returns [`ElectionError`] if any pool is empty or any count is
    /// zero.
    pub fn new_with(config: &ChamberConfig, rng: &mut impl Rng) -> Result<Self, ElectionError> {
        let (parties, legislators) = election::elect(config, rng)?;
        Ok(Self {
            parties,
            legislators,
            issues: config.issue_names.clone(),
            laws: Vec::new(),
            sessions: 0,
            abstain_policy: if config.delegate_to_party {
                AbstainPolicy::PartyLine
            } else {
                AbstainPolicy::Abstain
            },
            elected_at: Utc::now(),
        })
    }

    /// Assemble a legislature from explicit parts (useful for testing
    /// engineered scenarios and for state restoration).
    ///
    /// # Errors
    ///
    /// Returns [`ElectionError::InvalidConfig`] if any legislator
    /// references a party that is not in `parties`.
    pub fn from_parts(
        parties: Vec<Party>,
        legislators: Vec<Legislator>,
        issues: Vec<String>,
        abstain_policy: AbstainPolicy,
    ) -> Result<Self, ElectionError> {
        for legislator in &legislators {
            if !parties.iter().any(|party| party.id == legislator.party) {
                return Err(ElectionError::InvalidConfig {
                    reason: format!(
                        "legislator {} references a party not in the chamber",
                        legislator.name
                    ),
                });
            }
        }
        Ok(Self {
            parties,
            legislators,
            issues,
            laws: Vec::new(),
            sessions: 0,
            abstain_policy,
            elected_at: Utc::now(),
        })
    }

    /// Hold one session using the thread-local random source.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] on counter overflow or a degenerate
    /// population (see [`Self::hold_session_with`]).
    pub fn hold_session(&mut self) -> Result<SessionResult, SessionError> {
        self.hold_session_with(&mut rand::rng())
    }

    /// Hold one session: a random sponsor introduces a random bill and
    /// the whole chamber votes.
    ///
    /// The session is a single transaction; once tallied, results are
    /// final and every history touched is append-only. The returned
    /// [`SessionResult`] carries everything a renderer needs.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::SessionOverflow`] if the session counter
    /// is exhausted, [`SessionError::NoLegislators`] on an empty
    /// chamber, or [`SessionError::EmptyIssueSet`] if the sponsor holds
    /// no issues (both population errors are unreachable for a
    /// legislature built by [`Self::new`]).
    #[allow(clippy::too_many_lines)]
    pub fn hold_session_with(&mut self, rng: &mut impl Rng) -> Result<SessionResult, SessionError> {
        self.sessions = self
            .sessions
            .checked_add(1)
            .ok_or(SessionError::SessionOverflow)?;

        let bill = naming::bill_name(rng);

        // Sponsor, bill issue, and bill position.
        let sponsor = naming::pick(&self.legislators, rng).ok_or(SessionError::NoLegislators)?;
        let sponsor_id = sponsor.id;
        let sponsor_name = sponsor.name.clone();
        let issue = pick_issue(sponsor, rng)?;
        let compass = sponsor.compass + naming::random_compass(BILL_DRIFT_LIMIT, rng);

        if let Some(entry) = self
            .legislators
            .iter_mut()
            .find(|legislator| legislator.id == sponsor_id)
        {
            entry.bills_introduced.push(bill.clone());
        }

        // Party lines are decided once per session and recorded.
        let mut party_lines = BTreeMap::new();
        for party in &mut self.parties {
            let line = decision::party_line(party, &issue, compass);
            party.vote_history.push(VoteRecord { bill: bill.clone(), vote: line });
            party_lines.insert(party.id, line);
        }

        // Roll call. The sponsor always backs their own bill.
        let mut votes = BTreeMap::new();
        let mut aye: u32 = 0;
        let mut nay: u32 = 0;
        for legislator in &self.legislators {
            let vote = if legislator.id == sponsor_id {
                Vote::Aye
            } else {
                let party = self
                    .parties
                    .iter()
                    .find(|party| party.id == legislator.party)
                    .ok_or_else(|| SessionError::UnknownParty {
                        name: legislator.name.clone(),
                    })?;
                decision::ballot(legislator, party, &issue, compass, self.abstain_policy, rng)
            };
            match vote {
                Vote::Aye => aye = aye.saturating_add(1),
                Vote::Nay => nay = nay.saturating_add(1),
                Vote::Abstain => {}
            }
            votes.insert(legislator.id, vote);
        }

        for legislator in &mut self.legislators {
            if let Some(vote) = votes.get(&legislator.id) {
                legislator
                    .vote_history
                    .push(VoteRecord { bill: bill.clone(), vote: *vote });
            }
        }

        let seats = u32::try_from(self.legislators.len()).unwrap_or(u32::MAX);
        let abstain = seats.saturating_sub(aye).saturating_sub(nay);
        let passed = passage(aye, nay);
        if passed {
            self.laws.push(bill.clone());
        }

        info!(
            session = self.sessions,
            bill = %bill,
            sponsor = %sponsor_name,
            issue = %issue,
            aye,
            nay,
            abstain,
            passed,
            "Session concluded"
        );

        Ok(SessionResult {
            name: bill,
            sponsor: sponsor_id,
            sponsor_name,
            issue,
            compass,
            passed,
            aye,
            nay,
            abstain,
            votes,
            party_lines,
        })
    }

    /// The chamber's parties, in registration order.
    pub fn parties(&self) -> &[Party] {
        &self.parties
    }

    /// The chamber's legislators, in seating order.
    pub fn legislators(&self) -> &[Legislator] {
        &self.legislators
    }

    /// The issue universe this chamber was elected under.
    pub fn issues(&self) -> &[String] {
        &self.issues
    }

    /// Names of the bills that passed, in session order.
    pub fn laws(&self) -> &[String] {
        &self.laws
    }

    /// Number of sessions held so far.
    pub const fn sessions(&self) -> u32 {
        self.sessions
    }

    /// The abstention policy this chamber votes under.
    pub const fn abstain_policy(&self) -> AbstainPolicy {
        self.abstain_policy
    }

    /// When this legislature was elected.
    pub const fn elected_at(&self) -> DateTime<Utc> {
        self.elected_at
    }

    /// Look up a party by ID.
    pub fn party(&self, id: PartyId) -> Option<&Party> {
        self.parties.iter().find(|party| party.id == id)
    }

    /// Look up a legislator by ID.
    pub fn legislator(&self, id: LegislatorId) -> Option<&Legislator> {
        self.legislators.iter().find(|legislator| legislator.id == id)
    }

    /// Percentage of sessions that produced a law; `0.0` before the
    /// first session. Reading this never changes it.
    pub fn percent_passed(&self) -> f64 {
        if self.sessions == 0 {
            return 0.0;
        }
        let laws = u32::try_from(self.laws.len()).unwrap_or(u32::MAX);
        f64::from(laws) / f64::from(self.sessions) * 100.0
    }

    /// Number of sessions whose bill did not pass.
    pub fn failed(&self) -> u32 {
        let laws = u32::try_from(self.laws.len()).unwrap_or(u32::MAX);
        self.sessions.saturating_sub(laws)
    }
}

/// Draw the bill's issue uniformly from the sponsor's own issue set, so
/// the sponsor always cares about their bill.
fn pick_issue(sponsor: &Legislator, rng: &mut impl Rng) -> Result<String, SessionError> {
    if sponsor.issues.is_empty() {
        return Err(SessionError::EmptyIssueSet {
            name: sponsor.name.clone(),
        });
    }
    let index = rng.random_range(0..sponsor.issues.len());
    sponsor
        .issues
        .iter()
        .nth(index)
        .cloned()
        .ok_or_else(|| SessionError::EmptyIssueSet {
            name: sponsor.name.clone(),
        })
}

/// Passage rule: strictly more than half of the votes cast (AYE + NAY)
/// are AYE. A division with no votes cast (every seat abstaining) is
/// defined as not passed rather than left to a division by zero.
fn passage(aye: u32, nay: u32) -> bool {
    let cast = aye.saturating_add(nay);
    if cast == 0 {
        return false;
    }
    u64::from(aye).saturating_mul(2) > u64::from(cast)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeSet;

    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rollcall_types::{COMPASS_BOUND, Point};

    use super::*;

    #[test]
    fn passage_requires_a_strict_majority_of_votes_cast() {
        assert!(passage(3, 2));
        assert!(!passage(2, 2));
        assert!(!passage(2, 3));
        assert!(passage(1, 0));
        assert!(!passage(0, 1));
    }

    #[test]
    fn unanimous_abstention_is_defined_as_not_passed() {
        // The division has no votes cast; the guard must answer false
        // instead of dividing by zero.
        assert!(!passage(0, 0));
    }

    fn lone_party(issues: &[&str]) -> Party {
        Party {
            id: PartyId::new(),
            name: String::from("Unity Party"),
            color: String::from("blue"),
            compass: Point::new(0.0, 0.0),
            issues: issues.iter().map(|issue| String::from(*issue)).collect(),
            vote_history: Vec::new(),
            members: Vec::new(),
        }
    }

    fn seat(name: &str, party: &mut Party, issues: &[&str]) -> Legislator {
        let legislator = Legislator {
            id: LegislatorId::new(),
            name: String::from(name),
            party: party.id,
            compass: Point::new(0.0, 0.0),
            issues: issues.iter().map(|issue| String::from(*issue)).collect(),
            vote_history: Vec::new(),
            bills_introduced: Vec::new(),
        };
        party.members.push(legislator.id);
        legislator
    }

    #[test]
    fn from_parts_rejects_unknown_party_reference() {
        let mut party = lone_party(&[]);
        let legislator = seat("Ada Quill", &mut party, &["Health"]);
        // Drop the party from the chamber but keep the reference.
        let result = Legislature::from_parts(
            Vec::new(),
            vec![legislator],
            vec![String::from("Health")],
            AbstainPolicy::Abstain,
        );
        assert!(matches!(result, Err(ElectionError::InvalidConfig { .. })));
    }

    #[test]
    fn non_sponsors_without_the_issue_abstain() {
        // Three seats with pairwise-disjoint issues: whoever sponsors,
        // the other two abstain, and the sponsor's forced AYE carries
        // the division 1-0.
        let mut party = lone_party(&[]);
        let a = seat("Ada Quill", &mut party, &["Health"]);
        let b = seat("Bram Hollis", &mut party, &["Defense"]);
        let c = seat("Cora Vance", &mut party, &["Trade"]);
        let issues = vec![
            String::from("Health"),
            String::from("Defense"),
            String::from("Trade"),
        ];
        let mut legislature =
            Legislature::from_parts(vec![party], vec![a, b, c], issues, AbstainPolicy::Abstain)
                .unwrap();

        let mut rng = SmallRng::seed_from_u64(33);
        for _ in 0..5 {
            let result = legislature.hold_session_with(&mut rng).unwrap();
            assert_eq!(result.aye, 1);
            assert_eq!(result.nay, 0);
            assert_eq!(result.abstain, 2);
            assert!(result.passed);
            let sponsor_vote = result.votes.get(&result.sponsor).copied();
            assert_eq!(sponsor_vote, Some(Vote::Aye));
        }
    }

    #[test]
    fn session_appends_history_everywhere_it_should() {
        let mut party = lone_party(&["Health"]);
        let a = seat("Ada Quill", &mut party, &["Health"]);
        let b = seat("Bram Hollis", &mut party, &["Health"]);
        let mut legislature = Legislature::from_parts(
            vec![party],
            vec![a, b],
            vec![String::from("Health")],
            AbstainPolicy::Abstain,
        )
        .unwrap();

        let mut rng = SmallRng::seed_from_u64(34);
        let result = legislature.hold_session_with(&mut rng).unwrap();

        // Every legislator has exactly one history entry for the bill.
        for legislator in legislature.legislators() {
            assert_eq!(legislator.vote_history.len(), 1);
            let record = legislator.vote_history.first().unwrap();
            assert_eq!(record.bill, result.name);
        }
        // The party recorded its line.
        let party = legislature.parties().first().unwrap();
        assert_eq!(party.vote_history.len(), 1);
        // The sponsor recorded the introduction.
        let sponsor = legislature.legislator(result.sponsor).unwrap();
        assert_eq!(sponsor.bills_introduced, vec![result.name.clone()]);
    }

    #[test]
    fn bill_compass_stays_clamped_to_the_chart() {
        let mut party = lone_party(&[]);
        let a = seat("Edge Case", &mut party, &["Health"]);
        let mut legislature = Legislature::from_parts(
            vec![party],
            vec![a],
            vec![String::from("Health")],
            AbstainPolicy::Abstain,
        )
        .unwrap();
        // Force the sponsor to a corner so the drift would overshoot.
        if let Some(seat) = legislature.legislators.first_mut() {
            seat.compass = Point::new(COMPASS_BOUND, -COMPASS_BOUND);
        }

        let mut rng = SmallRng::seed_from_u64(35);
        for _ in 0..20 {
            let result = legislature.hold_session_with(&mut rng).unwrap();
            assert!(result.compass.x <= COMPASS_BOUND && result.compass.x >= -COMPASS_BOUND);
            assert!(result.compass.y <= COMPASS_BOUND && result.compass.y >= -COMPASS_BOUND);
        }
    }

    #[test]
    fn empty_sponsor_issue_set_is_a_session_error() {
        let mut party = lone_party(&[]);
        let a = seat("Issueless", &mut party, &[]);
        let mut legislature = Legislature::from_parts(
            vec![party],
            vec![a],
            Vec::new(),
            AbstainPolicy::Abstain,
        )
        .unwrap();

        let mut rng = SmallRng::seed_from_u64(36);
        assert!(matches!(
            legislature.hold_session_with(&mut rng),
            Err(SessionError::EmptyIssueSet { .. })
        ));
    }

    #[test]
    fn accessors_are_idempotent_between_sessions() {
        let mut party = lone_party(&["Health"]);
        let a = seat("Ada Quill", &mut party, &["Health"]);
        let mut legislature = Legislature::from_parts(
            vec![party],
            vec![a],
            vec![String::from("Health")],
            AbstainPolicy::Abstain,
        )
        .unwrap();
        let mut rng = SmallRng::seed_from_u64(37);
        let _ = legislature.hold_session_with(&mut rng).unwrap();

        let first = legislature.percent_passed();
        let second = legislature.percent_passed();
        assert!((first - second).abs() < f64::EPSILON);
        assert_eq!(legislature.failed(), legislature.failed());
    }

    #[test]
    fn set_backed_issue_sets_deduplicate_on_construction() {
        let issues: BTreeSet<String> =
            ["Health", "Health", "Trade"].iter().map(|s| String::from(*s)).collect();
        assert_eq!(issues.len(), 2);
    }
}
