use serde::{Deserialize, Serialize};

/// A single message bound for the destination channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishRequest {
    pub destination: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// The event concerns a child resource, not the stack itself.
    NotStackResource,
    /// None of the accepted kinds appear in the message.
    NoAcceptedKind,
}

/// Result of evaluating an event, before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Ignore(IgnoreReason),
    Publish(Vec<PublishRequest>),
}

/// What an invocation did. Reported back to the host; never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum HandleOutcome {
    Published {
        subjects: Vec<String>,
        delivered: usize,
        failed: usize,
    },
    Ignored {
        reason: IgnoreReason,
    },
    Aborted {
        reason: String,
    },
}

impl HandleOutcome {
    pub fn delivered(&self) -> usize {
        match self {
            HandleOutcome::Published { delivered, .. } => *delivered,
            _ => 0,
        }
    }
}
