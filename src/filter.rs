use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::{
    clients::Publisher,
    errors::FilterError,
    models::{
        event::SnsEvent,
        filter::{FilterConfig, MatchPolicy},
        notification::StackNotification,
        outcome::{Decision, HandleOutcome, IgnoreReason, PublishRequest},
    },
    utils::{format_subject, is_stack_resource_event, normalize_message},
};

/// Forwards stack lifecycle notifications whose kind is on the allow-list.
///
/// Holds no per-event state, so one instance can serve concurrent invocations.
#[derive(Clone)]
pub struct NotificationFilter {
    config: FilterConfig,
    publisher: Arc<dyn Publisher>,
}

impl NotificationFilter {
    pub fn new(config: FilterConfig, publisher: Arc<dyn Publisher>) -> Self {
        info!(
            accepted_kinds = ?config.accepted_kinds,
            destination = config.destination.as_deref().unwrap_or("<unset>"),
            match_policy = %config.match_policy,
            "Notification filter initialized"
        );

        Self { config, publisher }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Decides what an event should produce without sending anything.
    pub fn evaluate(&self, event: &Value) -> Result<Decision, FilterError> {
        if self.config.accepted_kinds.is_empty() {
            return Err(FilterError::ConfigurationMissing("ACCEPTED_KINDS"));
        }

        let destination = self
            .config
            .destination
            .as_deref()
            .ok_or(FilterError::ConfigurationMissing("DESTINATION_CHANNEL"))?;

        let message = extract_message(event)?;
        let normalized = normalize_message(&message);

        if !is_stack_resource_event(&normalized) {
            return Ok(Decision::Ignore(IgnoreReason::NotStackResource));
        }

        let mut matching = self
            .config
            .accepted_kinds
            .iter()
            .filter(|kind| normalized.contains(kind.as_str()));

        let matched: Vec<&String> = match self.config.match_policy {
            MatchPolicy::First => matching.next().into_iter().collect(),
            MatchPolicy::All => matching.collect(),
        };

        if matched.is_empty() {
            return Ok(Decision::Ignore(IgnoreReason::NoAcceptedKind));
        }

        let requests = matched
            .into_iter()
            .map(|kind| PublishRequest {
                destination: destination.to_string(),
                subject: format_subject(&self.config.subject_prefix, kind),
                body: message.clone(),
            })
            .collect();

        Ok(Decision::Publish(requests))
    }

    /// Handles one invocation. Every failure is logged and folded into the outcome.
    pub async fn handle(&self, event: &Value) -> HandleOutcome {
        let requests = match self.evaluate(event) {
            Ok(Decision::Publish(requests)) => requests,
            Ok(Decision::Ignore(reason)) => {
                debug!(reason = ?reason, "Event ignored");
                return HandleOutcome::Ignored { reason };
            }
            Err(e) => {
                warn!(error = %e, "Event dropped without publishing");
                return HandleOutcome::Aborted {
                    reason: e.to_string(),
                };
            }
        };

        if let Some(first) = requests.first() {
            let fields = StackNotification::parse(&first.body);
            info!(
                stack_name = fields.stack_name().unwrap_or("<unknown>"),
                resource_status = fields.resource_status().unwrap_or("<unknown>"),
                publishes = requests.len(),
                "Forwarding stack notification"
            );
        }

        let mut subjects = Vec::with_capacity(requests.len());
        let mut delivered = 0;
        let mut failed = 0;

        for request in &requests {
            match self.publisher.publish(request).await {
                Ok(message_id) => {
                    info!(
                        destination = %request.destination,
                        subject = %request.subject,
                        message_id = %message_id,
                        "Notification published"
                    );
                    delivered += 1;
                }
                Err(e) => {
                    error!(
                        destination = %request.destination,
                        subject = %request.subject,
                        error = %e,
                        "Notification publish failed, not retrying"
                    );
                    failed += 1;
                }
            }
            subjects.push(request.subject.clone());
        }

        HandleOutcome::Published {
            subjects,
            delivered,
            failed,
        }
    }

    /// Like [`handle`](Self::handle) but for a raw request body.
    pub async fn handle_payload(&self, payload: &[u8]) -> HandleOutcome {
        match serde_json::from_slice::<Value>(payload) {
            Ok(event) => self.handle(&event).await,
            Err(e) => {
                let e = FilterError::MalformedEvent(format!("payload is not JSON: {}", e));
                warn!(error = %e, "Event dropped without publishing");
                HandleOutcome::Aborted {
                    reason: e.to_string(),
                }
            }
        }
    }
}

/// Pulls the notification text out of the first record of the envelope.
pub fn extract_message(event: &Value) -> Result<String, FilterError> {
    let envelope =
        SnsEvent::deserialize(event).map_err(|e| FilterError::MalformedEvent(e.to_string()))?;

    if envelope.records.len() > 1 {
        debug!(
            records = envelope.records.len(),
            "Event carries several records, using the first"
        );
    }

    envelope
        .records
        .into_iter()
        .next()
        .map(|record| record.sns.message)
        .ok_or_else(|| FilterError::MalformedEvent("event has no records".to_string()))
}
