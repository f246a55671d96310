//! Command-line runner for the Rollcall legislature simulation.
//!
//! This is the engine's stand-in for a graphical chamber view: it loads
//! configuration, elects a legislature, holds the configured number of
//! sessions, and logs each bill's fate plus a closing summary.
//!
//! # Startup sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `rollcall-config.yaml` (or the path given
//!    as the first argument); a missing file elects the default chamber
//! 3. Elect the legislature
//! 4. Hold sessions and log each result
//! 5. Log the closing summary

mod error;

use std::path::Path;

use rollcall_core::{ChamberConfig, Legislature};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

/// Default configuration path, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "rollcall-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns [`CliError`] if configuration loading, the election, or any
/// session fails.
fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("rollcall starting");

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from(DEFAULT_CONFIG_PATH));
    let config = load_config(Path::new(&path))?;
    info!(
        seats = config.seats,
        parties = config.parties,
        issue_selections = config.issue_selections,
        sessions = config.sessions,
        delegate_to_party = config.delegate_to_party,
        "Configuration loaded"
    );

    let mut legislature = Legislature::new(&config)?;
    for party in legislature.parties() {
        debug!(
            party = %party.name,
            color = %party.color,
            members = party.members.len(),
            issues = ?party.issues,
            "Party registered"
        );
    }

    for _ in 0..config.sessions {
        let result = legislature.hold_session()?;
        for (party_id, line) in &result.party_lines {
            if let Some(party) = legislature.party(*party_id) {
                debug!(party = %party.name, line = %line, bill = %result.name, "Party line");
            }
        }
        let verdict = if result.passed { "PASSED" } else { "FAILED" };
        info!(
            bill = %result.name,
            sponsor = %result.sponsor_name,
            issue = %result.issue,
            aye = result.aye,
            nay = result.nay,
            abstain = result.abstain,
            "Bill {verdict}"
        );
    }

    info!(
        sessions = legislature.sessions(),
        laws = legislature.laws().len(),
        failed = legislature.failed(),
        percent_passed = legislature.percent_passed(),
        "Simulation complete"
    );

    Ok(())
}

/// Load configuration from the given path, falling back to the default
/// chamber when no file exists.
fn load_config(path: &Path) -> Result<ChamberConfig, CliError> {
    if path.exists() {
        Ok(ChamberConfig::from_file(path)?)
    } else {
        info!(path = %path.display(), "No config file found; using defaults");
        Ok(ChamberConfig::default())
    }
}
