//! Public API surface for the staffing backend.
//!
//! This file consolidates the entity id newtypes and re-exports the DTO types
//! produced by the service layer. All types derive Serialize/Deserialize for
//! JSON serialization.

pub use crate::events::bus::{AgentId, BusinessEvent, BusinessEventType};
pub use crate::models::interval::Window;
pub use crate::models::profitability::{ProfitabilityDelta, ProfitabilitySnapshot};
pub use crate::models::staffing::{
    CandidateAssignment, StafferRecord, TaskAssignment, TimeOffKind, TimeOffRequest,
};
pub use crate::services::profitability::{BaselineOutcome, SnapshotOutcome, TrendsReport};
pub use crate::services::reassignment::ReassignmentResult;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Staffer identifier (UUID primary key in the external store).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StafferId(pub Uuid);

/// Project identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub Uuid);

/// Project task identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(pub Uuid);

/// Profitability snapshot identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SnapshotId(pub Uuid);

impl StafferId {
    pub fn new(value: Uuid) -> Self {
        StafferId(value)
    }

    pub fn generate() -> Self {
        StafferId(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl ProjectId {
    pub fn new(value: Uuid) -> Self {
        ProjectId(value)
    }

    pub fn generate() -> Self {
        ProjectId(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl TaskId {
    pub fn new(value: Uuid) -> Self {
        TaskId(value)
    }

    pub fn generate() -> Self {
        TaskId(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl SnapshotId {
    pub fn new(value: Uuid) -> Self {
        SnapshotId(value)
    }

    pub fn generate() -> Self {
        SnapshotId(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for StafferId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<StafferId> for Uuid {
    fn from(id: StafferId) -> Self {
        id.0
    }
}
impl From<ProjectId> for Uuid {
    fn from(id: ProjectId) -> Self {
        id.0
    }
}
impl From<TaskId> for Uuid {
    fn from(id: TaskId) -> Self {
        id.0
    }
}
impl From<SnapshotId> for Uuid {
    fn from(id: SnapshotId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod api_tests;
