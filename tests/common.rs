use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU32, Ordering},
};

use async_trait::async_trait;
use serde_json::{Value, json};
use stack_notifier::{
    clients::Publisher,
    errors::FilterError,
    filter::NotificationFilter,
    models::{filter::FilterConfig, outcome::PublishRequest},
};

pub const TOPIC_ARN: &str = "arn:aws:sns:us-east-1:123456789012:stack-notifications";

/// Captures every publish instead of sending it.
#[derive(Default)]
pub struct RecordingPublisher {
    published: Mutex<Vec<PublishRequest>>,
    counter: AtomicU32,
}

impl RecordingPublisher {
    pub fn published(&self) -> Vec<PublishRequest> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl Publisher for RecordingPublisher {
    async fn publish(&self, request: &PublishRequest) -> Result<String, FilterError> {
        self.published.lock().unwrap().push(request.clone());
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        Ok(format!("msg-{}", n))
    }
}

/// Rejects every publish, counting attempts.
#[derive(Default)]
pub struct FailingPublisher {
    pub attempts: AtomicU32,
}

#[async_trait]
impl Publisher for FailingPublisher {
    async fn publish(&self, request: &PublishRequest) -> Result<String, FilterError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(FilterError::publish_failure(
            &request.destination,
            "topic does not exist",
        ))
    }
}

pub fn default_config() -> FilterConfig {
    FilterConfig::new(
        vec!["CREATE_COMPLETE".to_string(), "UPDATE_COMPLETE".to_string()],
        TOPIC_ARN,
    )
}

pub fn recording_filter(config: FilterConfig) -> (NotificationFilter, Arc<RecordingPublisher>) {
    let publisher = Arc::new(RecordingPublisher::default());
    let filter = NotificationFilter::new(config, publisher.clone());
    (filter, publisher)
}

/// A message as CloudFormation writes it for a stack-level event.
pub fn stack_message(status: &str) -> String {
    format!(
        "StackId='arn:aws:cloudformation:us-east-1:123456789012:stack/web-app/1a2b3c4d'\n\
         Timestamp='2024-01-15T12:00:00.000Z'\n\
         EventId='1a2b3c4d-5e6f'\n\
         LogicalResourceId='web-app'\n\
         Namespace='123456789012'\n\
         PhysicalResourceId='arn:aws:cloudformation:us-east-1:123456789012:stack/web-app/1a2b3c4d'\n\
         PrincipalId='AIDAEXAMPLE'\n\
         ResourceProperties='null'\n\
         ResourceStatus='{}'\n\
         ResourceStatusReason=''\n\
         ResourceType='AWS::CloudFormation::Stack'\n\
         StackName='web-app'\n\
         ClientRequestToken='null'\n",
        status
    )
}

/// A message about a resource inside the stack.
pub fn child_resource_message(status: &str) -> String {
    format!(
        "StackId='arn:aws:cloudformation:us-east-1:123456789012:stack/web-app/1a2b3c4d'\n\
         LogicalResourceId='AssetsBucket'\n\
         ResourceStatus='{}'\n\
         ResourceType='AWS::S3::Bucket'\n\
         StackName='web-app'\n",
        status
    )
}

pub fn sns_event(message: &str) -> Value {
    json!({
        "Records": [{
            "EventSource": "aws:sns",
            "EventVersion": "1.0",
            "Sns": {
                "Type": "Notification",
                "MessageId": "95df01b4-ee98-5cb9-9903-4c221d41eb5e",
                "TopicArn": "arn:aws:sns:us-east-1:123456789012:stack-events",
                "Subject": "AWS CloudFormation Notification",
                "Message": message,
                "Timestamp": "2024-01-15T12:00:00.000Z"
            }
        }]
    })
}
