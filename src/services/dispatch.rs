//! Request routing.
//!
//! Incoming staffing requests are a closed set, so routing is a pure match
//! on the request variant rather than any intent classification. The
//! orchestrator owns the two engines and forwards each request to the right
//! one, emitting an `update` event per dispatched request.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::ProjectId;
use crate::db::StaffingRepository;
use crate::events::bus::{AgentId, BusinessEvent, BusinessEventType, EventBus};
use crate::models::staffing::TimeOffRequest;
use crate::services::profitability::{
    BaselineOutcome, ProfitabilityTracker, SnapshotOutcome, TrackerError, TrendsReport,
};
use crate::services::reassignment::{handle_time_off, ReassignmentResult};

/// A structured staffing request. The closed set of operations the
/// orchestrator accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "request", rename_all = "snake_case")]
pub enum StaffingRequest {
    TimeOff(TimeOffRequest),
    CreateBaseline {
        project_id: ProjectId,
        agent: String,
        action: String,
    },
    SnapshotAfterChange {
        project_id: ProjectId,
        agent: String,
        action: String,
    },
    Trends { project_id: ProjectId },
}

/// Which engine serves a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    ResourceManagement,
    Profitability,
}

/// Pure routing function from request variant to handler.
pub fn route(request: &StaffingRequest) -> HandlerKind {
    match request {
        StaffingRequest::TimeOff(_) => HandlerKind::ResourceManagement,
        StaffingRequest::CreateBaseline { .. }
        | StaffingRequest::SnapshotAfterChange { .. }
        | StaffingRequest::Trends { .. } => HandlerKind::Profitability,
    }
}

/// Response union matching [`StaffingRequest`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "response", rename_all = "snake_case")]
pub enum StaffingResponse {
    Reassignment(ReassignmentResult),
    Baseline(BaselineOutcome),
    Snapshot(SnapshotOutcome),
    Trends(TrendsReport),
}

/// Front door to both engines.
pub struct Orchestrator {
    repo: Arc<dyn StaffingRepository>,
    bus: EventBus,
    tracker: Arc<ProfitabilityTracker>,
}

impl Orchestrator {
    pub fn new(
        repo: Arc<dyn StaffingRepository>,
        bus: EventBus,
        tracker: Arc<ProfitabilityTracker>,
    ) -> Self {
        Self { repo, bus, tracker }
    }

    /// Route and execute one request.
    ///
    /// Reassignment outcomes are always `Ok` — failure there is structured
    /// inside [`ReassignmentResult`]. Tracker failures surface as
    /// [`TrackerError`].
    pub async fn dispatch(
        &self,
        request: StaffingRequest,
    ) -> Result<StaffingResponse, TrackerError> {
        let handler = route(&request);
        self.bus
            .emit(BusinessEvent::new(
                BusinessEventType::Update,
                AgentId::Orchestrator,
                format!("Dispatching {} request", describe(&request)),
            ))
            .await;
        log::debug!("Routing {} request to {:?}", describe(&request), handler);

        match request {
            StaffingRequest::TimeOff(time_off) => Ok(StaffingResponse::Reassignment(
                handle_time_off(&self.repo, &self.bus, &time_off).await,
            )),
            StaffingRequest::CreateBaseline {
                project_id,
                agent,
                action,
            } => Ok(StaffingResponse::Baseline(
                self.tracker
                    .create_baseline(project_id, &agent, &action)
                    .await?,
            )),
            StaffingRequest::SnapshotAfterChange {
                project_id,
                agent,
                action,
            } => Ok(StaffingResponse::Snapshot(
                self.tracker
                    .snapshot_after_change(project_id, &agent, &action)
                    .await?,
            )),
            StaffingRequest::Trends { project_id } => Ok(StaffingResponse::Trends(
                self.tracker.trends(project_id).await?,
            )),
        }
    }
}

fn describe(request: &StaffingRequest) -> &'static str {
    match request {
        StaffingRequest::TimeOff(_) => "time-off",
        StaffingRequest::CreateBaseline { .. } => "baseline",
        StaffingRequest::SnapshotAfterChange { .. } => "snapshot",
        StaffingRequest::Trends { .. } => "trends",
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod dispatch_tests;
