//! Election: random generation of the chamber's parties and legislators.
//!
//! One pass produces the fully-wired population. The name and color
//! pools are shuffled first so repeated elections are independent of
//! input ordering; actors then cycle through the shuffled pools by
//! index, so a chamber larger than its pool silently reuses names.
//! Every legislator joins the party whose compass position is nearest
//! their own, and the membership relation is recorded on both sides.

use std::collections::BTreeSet;

use rand::Rng;
use tracing::info;

use rollcall_types::{COMPASS_BOUND, Legislator, LegislatorId, Party, PartyId, Point};

use crate::config::ChamberConfig;
use crate::naming;

/// Errors that can occur while electing a chamber.
#[derive(Debug, thiserror::Error)]
pub enum ElectionError {
    /// A pool the election draws from has no entries.
    #[error("required pool is empty: {pool}")]
    EmptyPool {
        /// Which pool was empty.
        pool: &'static str,
    },

    /// A sizing parameter was zero or otherwise unusable.
    #[error("invalid election configuration: {reason}")]
    InvalidConfig {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

/// Elect a chamber: generate parties, then legislators, and wire the
/// membership relation.
///
/// Returns the parties and legislators in generation order. The caller
/// (the legislature constructor) owns both collections from here on.
///
/// # Errors
///
/// Returns [`ElectionError`] if any required pool is empty or any count
/// is zero. Election never silently substitutes defaults; resolving
/// absent pools to the built-in lists is the configuration layer's job.
pub(crate) fn elect(
    config: &ChamberConfig,
    rng: &mut impl Rng,
) -> Result<(Vec<Party>, Vec<Legislator>), ElectionError> {
    validate(config)?;

    let mut legislator_names = config.legislator_names.clone();
    let mut party_names = config.party_names.clone();
    let mut colors = config.colors.clone();
    naming::shuffle(&mut legislator_names, rng);
    naming::shuffle(&mut party_names, rng);
    naming::shuffle(&mut colors, rng);

    let parties = generate_parties(config, &party_names, &colors, rng)?;
    let (parties, legislators) =
        generate_legislators(config, parties, &legislator_names, rng)?;

    info!(
        seats = legislators.len(),
        parties = parties.len(),
        issues = config.issue_names.len(),
        "Elected a new legislature"
    );

    Ok((parties, legislators))
}

/// Fail fast on configurations that would generate a corrupt chamber.
fn validate(config: &ChamberConfig) -> Result<(), ElectionError> {
    if config.seats == 0 {
        return Err(ElectionError::InvalidConfig {
            reason: String::from("seats must be at least 1"),
        });
    }
    if config.parties == 0 {
        return Err(ElectionError::InvalidConfig {
            reason: String::from("parties must be at least 1"),
        });
    }
    if config.issue_selections == 0 {
        return Err(ElectionError::InvalidConfig {
            reason: String::from("issue_selections must be at least 1"),
        });
    }
    if config.legislator_names.is_empty() {
        return Err(ElectionError::EmptyPool { pool: "legislator_names" });
    }
    if config.party_names.is_empty() {
        return Err(ElectionError::EmptyPool { pool: "party_names" });
    }
    if config.colors.is_empty() {
        return Err(ElectionError::EmptyPool { pool: "colors" });
    }
    if config.issue_names.is_empty() {
        return Err(ElectionError::EmptyPool { pool: "issue_names" });
    }
    Ok(())
}

/// Generate the configured number of parties with random compass
/// positions and issue affinities.
fn generate_parties(
    config: &ChamberConfig,
    names: &[String],
    colors: &[String],
    rng: &mut impl Rng,
) -> Result<Vec<Party>, ElectionError> {
    let count = usize::try_from(config.parties).map_err(|_conversion_err| {
        ElectionError::InvalidConfig {
            reason: format!("party count {} exceeds usize range", config.parties),
        }
    })?;

    let mut parties = Vec::with_capacity(count);
    for index in 0..count {
        parties.push(Party {
            id: PartyId::new(),
            name: cycled(names, index, "party_names")?,
            color: cycled(colors, index, "colors")?,
            compass: naming::random_compass(COMPASS_BOUND, rng),
            issues: draw_issues(&config.issue_names, config.issue_selections, rng),
            vote_history: Vec::new(),
            members: Vec::new(),
        });
    }
    Ok(parties)
}

/// Generate the configured number of legislators, assign each to the
/// party with the nearest compass position, and register the
/// memberships.
fn generate_legislators(
    config: &ChamberConfig,
    mut parties: Vec<Party>,
    names: &[String],
    rng: &mut impl Rng,
) -> Result<(Vec<Party>, Vec<Legislator>), ElectionError> {
    let count = usize::try_from(config.seats).map_err(|_conversion_err| {
        ElectionError::InvalidConfig {
            reason: format!("seat count {} exceeds usize range", config.seats),
        }
    })?;

    let mut legislators = Vec::with_capacity(count);
    for index in 0..count {
        let compass = naming::random_compass(COMPASS_BOUND, rng);
        let party_index = nearest_party(&parties, compass)?;
        let party = parties
            .get_mut(party_index)
            .ok_or_else(|| ElectionError::InvalidConfig {
                reason: format!("party index {party_index} out of bounds"),
            })?;

        // Personal issue draws, unioned with the party's issues.
        let mut issues = draw_issues(&config.issue_names, config.issue_selections, rng);
        issues.extend(party.issues.iter().cloned());

        let legislator = Legislator {
            id: LegislatorId::new(),
            name: cycled(names, index, "legislator_names")?,
            party: party.id,
            compass,
            issues,
            vote_history: Vec::new(),
            bills_introduced: Vec::new(),
        };
        party.members.push(legislator.id);
        legislators.push(legislator);
    }
    Ok((parties, legislators))
}

/// Index of the party whose compass is nearest the given point.
///
/// Left-to-right scan with a strict `<` comparison, so the earliest
/// generated party wins distance ties.
fn nearest_party(parties: &[Party], compass: Point) -> Result<usize, ElectionError> {
    let mut best: Option<(usize, f64)> = None;
    for (index, party) in parties.iter().enumerate() {
        let distance = compass.distance_to(party.compass);
        match best {
            Some((_, best_distance)) if distance < best_distance => {
                best = Some((index, distance));
            }
            None => best = Some((index, distance)),
            Some(_) => {}
        }
    }
    best.map(|(index, _)| index)
        .ok_or_else(|| ElectionError::InvalidConfig {
            reason: String::from("cannot assign a party in a chamber with no parties"),
        })
}

/// Draw `selections` issues uniformly with replacement from the issue
/// universe; the set dedupes repeats.
fn draw_issues(pool: &[String], selections: u32, rng: &mut impl Rng) -> BTreeSet<String> {
    let mut issues = BTreeSet::new();
    for _ in 0..selections {
        if let Some(issue) = naming::pick(pool, rng) {
            issues.insert(issue.clone());
        }
    }
    issues
}

/// Pool entry for position `index`, cycling by modulo when the pool is
/// shorter than the population. Duplicates are accepted silently.
fn cycled(pool: &[String], index: usize, pool_name: &'static str) -> Result<String, ElectionError> {
    if pool.is_empty() {
        return Err(ElectionError::EmptyPool { pool: pool_name });
    }
    let wrapped = index.checked_rem(pool.len()).unwrap_or(0);
    pool.get(wrapped)
        .cloned()
        .ok_or_else(|| ElectionError::InvalidConfig {
            reason: format!("{pool_name} index {wrapped} out of bounds"),
        })
}
