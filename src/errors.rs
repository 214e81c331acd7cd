use thiserror::Error;

/// Reasons an invocation ends without delivering a notification.
///
/// None of these are fatal to the hosting process. The filter logs them and
/// reports them in its outcome; the trigger source never sees them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("required setting {0} is not configured")]
    ConfigurationMissing(&'static str),

    #[error("malformed event: {0}")]
    MalformedEvent(String),

    #[error("publish to {destination} failed: {reason}")]
    PublishFailure { destination: String, reason: String },
}

impl FilterError {
    pub fn publish_failure(destination: &str, reason: impl Into<String>) -> Self {
        FilterError::PublishFailure {
            destination: destination.to_string(),
            reason: reason.into(),
        }
    }
}
