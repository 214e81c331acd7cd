use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

use crate::{
    models::filter::{FilterConfig, MatchPolicy},
    utils::parse_accepted_kinds,
};

pub const DEFAULT_SUBJECT_PREFIX: &str = "AWS CloudFormation Notification";

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    #[serde(default)]
    pub accepted_kinds: Option<String>,
    #[serde(default)]
    pub destination_channel: Option<String>,
    #[serde(default = "default_subject_prefix")]
    pub subject_prefix: String,
    #[serde(default)]
    pub match_policy: Option<String>,

    #[serde(default)]
    pub aws_region: Option<String>,

    #[serde(default)]
    pub sns_endpoint: Option<String>,
    #[serde(default = "default_publish_timeout_seconds")]
    pub publish_timeout_seconds: u64,

    #[serde(default)]
    pub aws_lambda_runtime_api: Option<String>,
    #[serde(default = "default_server_port")]
    pub server_port: u16,
}

fn default_subject_prefix() -> String {
    DEFAULT_SUBJECT_PREFIX.to_string()
}

fn default_publish_timeout_seconds() -> u64 {
    10
}

fn default_server_port() -> u16 {
    8080
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let config = envy::from_env::<Self>()
            .map_err(|e| anyhow!("Invalid or missing environmental variable: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Builds a config from explicit key/value pairs instead of the process environment.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let pairs = vars.into_iter().map(|(k, v)| (k.into(), v.into()));

        let config = envy::from_iter::<_, Self>(pairs)
            .map_err(|e| anyhow!("Invalid or missing configuration value: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that would otherwise be silently reinterpreted.
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(policy) = self.match_policy.as_deref() {
            MatchPolicy::parse(policy)?;
        }

        Ok(())
    }

    pub fn filter_config(&self) -> FilterConfig {
        FilterConfig {
            accepted_kinds: self
                .accepted_kinds
                .as_deref()
                .map(parse_accepted_kinds)
                .unwrap_or_default(),
            destination: self
                .destination_channel
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(String::from),
            subject_prefix: self.subject_prefix.trim().to_string(),
            match_policy: self
                .match_policy
                .as_deref()
                .and_then(|p| MatchPolicy::parse(p).ok())
                .unwrap_or_default(),
        }
    }

    pub fn runs_in_lambda(&self) -> bool {
        self.aws_lambda_runtime_api
            .as_deref()
            .is_some_and(|api| !api.is_empty())
    }
}
