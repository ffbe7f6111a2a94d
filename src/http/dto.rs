//! Data Transfer Objects for the HTTP API.
//!
//! Most response types are re-exported from the core library since they
//! already derive Serialize/Deserialize; this module adds the request
//! bodies and thin wrappers the REST surface needs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::StafferId;
use crate::models::staffing::{TimeOffKind, TimeOffRequest};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // Events
    AgentId, BusinessEvent, BusinessEventType,
    // Reassignment
    CandidateAssignment, ReassignmentResult,
    // Profitability
    BaselineOutcome, ProfitabilityDelta, ProfitabilitySnapshot, SnapshotOutcome, TrendsReport,
};
pub use crate::services::dispatch::{StaffingRequest, StaffingResponse};

/// Request body for a time-off notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeOffBody {
    /// Full name of the staffer taking time off
    pub staffer_name: String,
    /// Staffer UUID, when the caller already knows it
    #[serde(default)]
    pub staffer_id: Option<StafferId>,
    /// Number of hours requested
    pub time_off_hours: f64,
    /// Start of the absence (UTC)
    pub start: DateTime<Utc>,
    /// End of the absence (UTC)
    pub end: DateTime<Utc>,
    /// Absence kind (default: pto)
    #[serde(default)]
    pub kind: TimeOffKind,
}

impl From<TimeOffBody> for TimeOffRequest {
    fn from(body: TimeOffBody) -> Self {
        Self {
            staffer_name: body.staffer_name,
            staffer_id: body.staffer_id,
            time_off_hours: body.time_off_hours,
            start: body.start,
            end: body.end,
            kind: body.kind,
        }
    }
}

/// Request body for baseline and post-change snapshot endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotBody {
    /// Which subsystem is asking (recorded on the snapshot)
    #[serde(default = "default_agent")]
    pub agent: String,
    /// What change triggered the snapshot
    pub action: String,
}

fn default_agent() -> String {
    "system".to_string()
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Store connection status
    pub store: String,
}
