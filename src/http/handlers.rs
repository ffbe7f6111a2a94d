//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, State},
    response::sse::{Event, Sse},
    Json,
};
use futures::stream::Stream;
use std::convert::Infallible;
use std::time::Duration;

use uuid::Uuid;

use super::dto::{
    HealthResponse, ReassignmentResult, SnapshotBody, StaffingRequest, StaffingResponse,
    TimeOffBody,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::ProjectId;
use crate::services::profitability::{BaselineOutcome, SnapshotOutcome, TrendsReport};
use crate::services::reassignment::handle_time_off;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the store is
/// reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let store_status = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        store: store_status,
    }))
}

// =============================================================================
// Reassignment
// =============================================================================

/// POST /v1/time-off
///
/// Run the reassignment pipeline for one time-off notification. Always
/// returns 200 with a structured result; `success = false` in the body means
/// the request could not be evaluated.
pub async fn submit_time_off(
    State(state): State<AppState>,
    Json(body): Json<TimeOffBody>,
) -> HandlerResult<ReassignmentResult> {
    if body.start > body.end {
        return Err(AppError::BadRequest(
            "Time-off start must not be after its end".to_string(),
        ));
    }
    let request = body.into();
    let result = handle_time_off(&state.repository, &state.bus, &request).await;
    Ok(Json(result))
}

// =============================================================================
// Profitability
// =============================================================================

/// POST /v1/projects/{project_id}/baseline
///
/// Record (or report the existing) baseline snapshot for a project.
pub async fn create_baseline(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
    Json(body): Json<SnapshotBody>,
) -> HandlerResult<BaselineOutcome> {
    let outcome = state
        .tracker
        .create_baseline(ProjectId::new(project_id), &body.agent, &body.action)
        .await?;
    Ok(Json(outcome))
}

/// POST /v1/projects/{project_id}/snapshot
///
/// Snapshot a project after an automated change and return its delta.
pub async fn snapshot_after_change(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
    Json(body): Json<SnapshotBody>,
) -> HandlerResult<SnapshotOutcome> {
    let outcome = state
        .tracker
        .snapshot_after_change(ProjectId::new(project_id), &body.agent, &body.action)
        .await?;
    Ok(Json(outcome))
}

/// GET /v1/projects/{project_id}/trends
///
/// Latest snapshot and its delta against the current baseline.
pub async fn get_trends(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
) -> HandlerResult<TrendsReport> {
    let report = state.tracker.trends(ProjectId::new(project_id)).await?;
    Ok(Json(report))
}

// =============================================================================
// Orchestrated dispatch
// =============================================================================

/// POST /v1/requests
///
/// Structured front door: route any staffing request to the right engine.
pub async fn dispatch_request(
    State(state): State<AppState>,
    Json(request): Json<StaffingRequest>,
) -> HandlerResult<StaffingResponse> {
    let response = state.orchestrator.dispatch(request).await?;
    Ok(Json(response))
}

// =============================================================================
// Event streaming
// =============================================================================

/// GET /v1/events/stream
///
/// Stream business events via Server-Sent Events (SSE). Each event is one
/// JSON object with `type`, `agent_id`, `timestamp`, `message`.
pub async fn stream_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let (client_id, mut rx) = state.broadcaster.register_client();
    log::info!("SSE client {:?} connected", client_id);

    let stream = async_stream::stream! {
        // Dropping this stream drops the receiver; the broadcaster prunes
        // the dead sender on its next emit.
        while let Some(event) = rx.recv().await {
            let data = serde_json::to_string(&event).unwrap_or_default();
            yield Ok(Event::default().data(data));
        }
    };

    Sse::new(stream).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}
