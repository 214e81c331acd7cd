use std::time::Duration;

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, retry::RetryConfig, timeout::TimeoutConfig};
use aws_sdk_sns::{
    Client,
    error::{DisplayErrorContext, ProvideErrorMetadata, SdkError},
};
use tracing::{debug, info};

use crate::{
    clients::Publisher,
    config::Config,
    errors::FilterError,
    models::{outcome::PublishRequest, validation::validate_topic_arn},
};

/// Publishes to SNS topics with a single attempt per message.
pub struct SnsClient {
    client: Client,
}

impl SnsClient {
    /// Builds a client from the default credential and region chain.
    pub async fn new(config: &Config) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .retry_config(RetryConfig::disabled())
            .timeout_config(
                TimeoutConfig::builder()
                    .operation_timeout(Duration::from_secs(config.publish_timeout_seconds))
                    .build(),
            );

        if let Some(region) = config.aws_region.as_deref().filter(|r| !r.is_empty()) {
            loader = loader.region(Region::new(region.to_string()));
        }

        if let Some(endpoint) = config.sns_endpoint.as_deref().filter(|e| !e.is_empty()) {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;

        info!(
            region = %sdk_config
                .region()
                .map(|r| r.to_string())
                .unwrap_or_else(|| "<unset>".to_string()),
            endpoint = config.sns_endpoint.as_deref().unwrap_or("<default>"),
            "SNS client initialized"
        );

        Self {
            client: Client::new(&sdk_config),
        }
    }

    pub fn from_conf(sns_config: aws_sdk_sns::Config) -> Self {
        Self {
            client: Client::from_conf(sns_config),
        }
    }
}

#[async_trait]
impl Publisher for SnsClient {
    async fn publish(&self, request: &PublishRequest) -> Result<String, FilterError> {
        validate_topic_arn(&request.destination)
            .map_err(|e| FilterError::publish_failure(&request.destination, e.to_string()))?;

        debug!(
            topic_arn = %request.destination,
            subject = %request.subject,
            "Sending SNS publish request"
        );

        let output = self
            .client
            .publish()
            .topic_arn(&request.destination)
            .subject(&request.subject)
            .message(&request.body)
            .send()
            .await
            .map_err(|e| FilterError::publish_failure(&request.destination, describe_sdk_error(&e)))?;

        output
            .message_id()
            .map(String::from)
            .ok_or_else(|| {
                FilterError::publish_failure(&request.destination, "SNS response carried no MessageId")
            })
    }
}

fn describe_sdk_error<E, R>(error: &SdkError<E, R>) -> String
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    match error.as_service_error() {
        Some(service_error) => format!(
            "{}: {}",
            service_error.code().unwrap_or("Unknown"),
            service_error.message().unwrap_or("no message")
        ),
        None => DisplayErrorContext(error).to_string(),
    }
}
