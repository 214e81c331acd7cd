use anyhow::{Error, Result, anyhow};
use lambda_runtime::{LambdaEvent, service_fn};
use serde_json::Value;
use tracing::{Instrument, info, info_span};

use crate::{filter::NotificationFilter, models::outcome::HandleOutcome};

/// Serves invocations until the host shuts the runtime down.
pub async fn run_lambda_runtime(filter: NotificationFilter) -> Result<(), Error> {
    info!("Lambda runtime loop started");

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let filter = filter.clone();
        async move { handle_invocation(&filter, event).await }
    }))
    .await
    .map_err(|e| anyhow!("Lambda runtime stopped: {}", e))
}

/// Handles one invocation. The outcome becomes the invocation's response; it is never an error.
pub async fn handle_invocation(
    filter: &NotificationFilter,
    event: LambdaEvent<Value>,
) -> Result<HandleOutcome, lambda_runtime::Error> {
    let LambdaEvent { payload, context } = event;

    let span = info_span!(
        "invocation",
        request_id = %context.request_id,
        deadline_ms = context.deadline,
    );

    let outcome = filter.handle(&payload).instrument(span.clone()).await;

    span.in_scope(|| info!(outcome = ?outcome, "Invocation finished"));

    Ok(outcome)
}
