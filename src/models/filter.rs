use std::fmt::{self, Display, Formatter};

use anyhow::{Error, anyhow};
use serde::{Deserialize, Serialize};

/// What to do when more than one accepted kind appears in the same message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Publish for the first accepted kind found, in configured order.
    #[default]
    First,
    /// Publish once for every accepted kind found.
    All,
}

impl MatchPolicy {
    /// Blank means the default; anything other than `first` or `all` is rejected.
    pub fn parse(s: &str) -> Result<Self, Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "first" => Ok(MatchPolicy::First),
            "all" => Ok(MatchPolicy::All),
            other => Err(anyhow!(
                "Unknown MATCH_POLICY '{}', expected 'first' or 'all'",
                other
            )),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MatchPolicy::First => "first",
            MatchPolicy::All => "all",
        }
    }
}

impl Display for MatchPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Settings the filter is constructed with. Immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    pub accepted_kinds: Vec<String>,
    pub destination: Option<String>,
    pub subject_prefix: String,
    pub match_policy: MatchPolicy,
}

impl FilterConfig {
    pub fn new(accepted_kinds: Vec<String>, destination: impl Into<String>) -> Self {
        Self {
            accepted_kinds,
            destination: Some(destination.into()),
            subject_prefix: crate::config::DEFAULT_SUBJECT_PREFIX.to_string(),
            match_policy: MatchPolicy::default(),
        }
    }

    pub fn with_subject_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.subject_prefix = prefix.into();
        self
    }

    pub fn with_match_policy(mut self, policy: MatchPolicy) -> Self {
        self.match_policy = policy;
        self
    }
}
