use std::sync::Arc;

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use chrono::Utc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

use crate::{
    config::Config,
    filter::NotificationFilter,
    models::{
        health::{HealthCheckResponse, HealthStatus},
        outcome::HandleOutcome,
        response::ApiResponse,
    },
};

pub struct AppState {
    filter: NotificationFilter,
}

pub fn router(filter: NotificationFilter) -> Router {
    let state = Arc::new(AppState { filter });

    Router::new()
        .route("/health", get(health_check))
        .route("/events", post(receive_event))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_api_server(
    config: &Config,
    filter: NotificationFilter,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = router(filter);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = TcpListener::bind(&addr).await?;

    info!(address = %addr, "Local event server started");

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let config = state.filter.config();

    let destination_configured = config.destination.is_some();
    let has_kinds = !config.accepted_kinds.is_empty();

    let error = match (has_kinds, destination_configured) {
        (true, true) => None,
        (false, _) => Some("ACCEPTED_KINDS is not configured".to_string()),
        (true, false) => Some("DESTINATION_CHANNEL is not configured".to_string()),
    };

    let health = HealthCheckResponse {
        status: if error.is_none() {
            HealthStatus::Healthy
        } else {
            HealthStatus::Degraded
        },
        timestamp: Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        accepted_kinds: config.accepted_kinds.len(),
        destination_configured,
        match_policy: config.match_policy,
        error,
    };

    (StatusCode::OK, Json(health))
}

/// Accepts an event the way the host would deliver it. Always answers 202.
async fn receive_event(State(state): State<Arc<AppState>>, body: Bytes) -> impl IntoResponse {
    let request_id = Uuid::new_v4();

    let outcome = state
        .filter
        .handle_payload(&body)
        .instrument(info_span!("invocation", request_id = %request_id))
        .await;

    let response = match &outcome {
        HandleOutcome::Aborted { reason } => {
            ApiResponse::error(reason.clone(), "Event dropped".to_string())
        }
        _ => ApiResponse::success(outcome.clone(), "Event processed".to_string()),
    };

    (StatusCode::ACCEPTED, Json(response))
}
