//! Configuration loading and the typed chamber configuration.
//!
//! The canonical configuration lives in `rollcall-config.yaml` at the
//! project root. This module defines a strongly-typed struct mirroring
//! the YAML structure and provides a loader that reads the file. All
//! fields have defaults, so an empty file (or no file at all) elects a
//! sensible chamber; validation of the resolved values happens at
//! election time, not here.

use std::path::Path;

use serde::Deserialize;

use crate::naming;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        #[from]
        source: serde_yml::Error,
    },
}

/// Chamber configuration: sizing, issue selection, abstention policy,
/// and the name/color/issue pools the election draws from.
///
/// The pool fields default to the built-in word lists in
/// [`crate::naming`]; supplying a custom list replaces the built-in one
/// entirely.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChamberConfig {
    /// Number of legislators to elect.
    #[serde(default = "default_seats")]
    pub seats: u32,

    /// Number of parties to register.
    #[serde(default = "default_parties")]
    pub parties: u32,

    /// Number of issue draws (with replacement) per actor.
    #[serde(default = "default_issue_selections")]
    pub issue_selections: u32,

    /// Number of sessions the CLI holds before exiting.
    #[serde(default = "default_sessions")]
    pub sessions: u32,

    /// When `true`, a legislator confronted with a bill outside their
    /// personal issues votes the party line instead of abstaining.
    #[serde(default)]
    pub delegate_to_party: bool,

    /// Pool of legislator names to elect from.
    #[serde(default = "default_legislator_names")]
    pub legislator_names: Vec<String>,

    /// Pool of party names to register from.
    #[serde(default = "default_party_names")]
    pub party_names: Vec<String>,

    /// Pool of party display colors.
    #[serde(default = "default_colors")]
    pub colors: Vec<String>,

    /// The issue universe actors draw their affinities from.
    #[serde(default = "default_issue_names")]
    pub issue_names: Vec<String>,
}

impl Default for ChamberConfig {
    fn default() -> Self {
        Self {
            seats: default_seats(),
            parties: default_parties(),
            issue_selections: default_issue_selections(),
            sessions: default_sessions(),
            delegate_to_party: false,
            legislator_names: default_legislator_names(),
            party_names: default_party_names(),
            colors: default_colors(),
            issue_names: default_issue_names(),
        }
    }
}

impl ChamberConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }
}

const fn default_seats() -> u32 {
    50
}

const fn default_parties() -> u32 {
    4
}

const fn default_issue_selections() -> u32 {
    3
}

const fn default_sessions() -> u32 {
    10
}

fn default_legislator_names() -> Vec<String> {
    naming::LEGISLATOR_NAMES
        .iter()
        .map(|name| String::from(*name))
        .collect()
}

/// Default party names: one `"<Noun> Party"` per noun in the bill-name
/// pool.
fn default_party_names() -> Vec<String> {
    naming::NOUNS
        .iter()
        .map(|noun| naming::title_case(&format!("{noun} party")))
        .collect()
}

fn default_colors() -> Vec<String> {
    ["red", "green", "blue", "orange", "purple"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_issue_names() -> Vec<String> {
    naming::ISSUES.iter().map(|issue| String::from(*issue)).collect()
}
