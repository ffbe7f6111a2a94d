//! Core staffing domain types.
//!
//! These mirror the external store's records. All of them are read-only to
//! this crate: assignments are mutated only by the external executor that
//! consumes a [`crate::services::reassignment::ReassignmentResult`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{ProjectId, StafferId, TaskId};
use crate::models::interval::Window;

/// Kind of declared absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimeOffKind {
    #[default]
    Pto,
    Sick,
    Holiday,
    Other,
}

/// A staffer's planned absence, as submitted by the caller.
///
/// Immutable; consumed once per reassignment run. The staffer may be
/// identified by id or, failing that, resolved by full name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeOffRequest {
    /// Full name of the staffer taking time off.
    pub staffer_name: String,
    /// UUID of the staffer, if already known.
    pub staffer_id: Option<StafferId>,
    /// Number of hours requested.
    pub time_off_hours: f64,
    /// Start of the absence (UTC).
    pub start: DateTime<Utc>,
    /// End of the absence (UTC).
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub kind: TimeOffKind,
}

impl TimeOffRequest {
    /// The absence window as a closed interval.
    pub fn window(&self) -> Window {
        Window::new(self.start, self.end)
    }
}

/// A staffing resource as recorded in the external store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StafferRecord {
    pub id: StafferId,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    /// Fractional FTE capacity, e.g. 1.0 for full time.
    pub capacity: f64,
    /// Higher means more senior. Absent when the store has no seniority row.
    pub seniority_level: Option<i32>,
    pub time_zone: Option<String>,
}

impl StafferRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// A committed staffer-to-task link with the task details needed for
/// impact analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskAssignment {
    pub task_id: TaskId,
    pub task_name: String,
    pub project_id: ProjectId,
    pub project_name: Option<String>,
    pub estimated_hours: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub current_staffer_id: StafferId,
}

/// A proposed substitute for one affected task assignment.
///
/// Produced fresh per reassignment run; never persisted by this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateAssignment {
    pub original_staffer_id: StafferId,
    pub original_staffer_name: String,
    pub new_staffer_id: StafferId,
    pub new_staffer_name: String,
    pub task_id: TaskId,
    pub task_name: String,
    pub project_id: ProjectId,
    pub project_name: Option<String>,
    /// Human-readable description of the matching criteria.
    pub assignment_reason: String,
    /// Confidence in the match, always within `[0.0, 1.0]`.
    pub confidence_score: f64,
}
