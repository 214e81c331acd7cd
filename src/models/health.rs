use serde::{Deserialize, Serialize};

use crate::models::filter::MatchPolicy;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: HealthStatus,
    pub timestamp: String,
    pub accepted_kinds: usize,
    pub destination_configured: bool,
    pub match_policy: MatchPolicy,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
