pub mod sns;

use async_trait::async_trait;

use crate::{errors::FilterError, models::outcome::PublishRequest};

/// A channel notifications can be forwarded to.
///
/// Implementations send exactly once per call; callers don't retry.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Returns the message id assigned by the channel.
    async fn publish(&self, request: &PublishRequest) -> Result<String, FilterError>;
}
