//! In-memory repository for unit testing and local development.
//!
//! Backed by `parking_lot::RwLock`-guarded maps. Locks are held only for the
//! duration of each synchronous map operation, never across an await point.
//! The seed methods (`add_staffer`, `add_time_off`, ...) stand in for the
//! external store's own write path; the profitability figure per project is
//! settable because the production calculation is delegated to the store.

use std::collections::HashMap;

use parking_lot::RwLock;

use async_trait::async_trait;

use crate::api::{ProjectId, SnapshotId, StafferId, TaskId};
use crate::db::repository::{
    ErrorContext, RepositoryError, RepositoryResult, StaffingRepository,
};
use crate::models::interval::Window;
use crate::models::profitability::ProfitabilitySnapshot;
use crate::models::staffing::{StafferRecord, TaskAssignment};

#[derive(Default)]
struct LocalState {
    staffers: Vec<StafferRecord>,
    time_off: HashMap<StafferId, Vec<Window>>,
    assignments: Vec<TaskAssignment>,
    team_memberships: HashMap<StafferId, Vec<ProjectId>>,
    profitability: HashMap<ProjectId, f64>,
    snapshots: Vec<ProfitabilitySnapshot>,
}

/// In-memory implementation of [`StaffingRepository`].
#[derive(Default)]
pub struct LocalRepository {
    state: RwLock<LocalState>,
}

impl LocalRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Seed API (test/local-dev write path) ====================

    /// Add a staffer record.
    pub fn add_staffer(&self, staffer: StafferRecord) {
        self.state.write().staffers.push(staffer);
    }

    /// Record a time-off window for a staffer.
    pub fn add_time_off(&self, staffer_id: StafferId, window: Window) {
        self.state
            .write()
            .time_off
            .entry(staffer_id)
            .or_default()
            .push(window);
    }

    /// Add a committed task assignment.
    pub fn add_assignment(&self, assignment: TaskAssignment) {
        self.state.write().assignments.push(assignment);
    }

    /// Put a staffer on a project team.
    pub fn add_team_membership(&self, staffer_id: StafferId, project_id: ProjectId) {
        self.state
            .write()
            .team_memberships
            .entry(staffer_id)
            .or_default()
            .push(project_id);
    }

    /// Set the profitability figure the delegated calculation returns for a
    /// project. Projects without a figure report the store as unavailable.
    pub fn set_profitability(&self, project_id: ProjectId, value: f64) {
        self.state.write().profitability.insert(project_id, value);
    }

    /// Number of persisted snapshots (test observability).
    pub fn snapshot_count(&self) -> usize {
        self.state.read().snapshots.len()
    }
}

#[async_trait]
impl StaffingRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }

    async fn find_staffer_by_id(&self, id: StafferId) -> RepositoryResult<StafferRecord> {
        self.state
            .read()
            .staffers
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    "Staffer not found",
                    ErrorContext::new("find_staffer_by_id")
                        .with_entity("staffer")
                        .with_entity_id(id),
                )
            })
    }

    async fn find_staffer_by_name(&self, name: &str) -> RepositoryResult<StafferRecord> {
        let state = self.state.read();
        let trimmed = name.trim();

        // Exact "First Last" match first.
        if let Some((first, last)) = trimmed.split_once(' ') {
            let last = last.trim();
            if let Some(found) = state
                .staffers
                .iter()
                .find(|s| s.first_name == first && s.last_name == last)
            {
                return Ok(found.clone());
            }
        }

        // Fallback: case-insensitive substring on either name part.
        let needle = trimmed.to_lowercase();
        state
            .staffers
            .iter()
            .find(|s| {
                s.first_name.to_lowercase().contains(&needle)
                    || s.last_name.to_lowercase().contains(&needle)
            })
            .cloned()
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("No staffer matching '{}'", trimmed),
                    ErrorContext::new("find_staffer_by_name").with_entity("staffer"),
                )
            })
    }

    async fn list_staffers(&self) -> RepositoryResult<Vec<StafferRecord>> {
        Ok(self.state.read().staffers.clone())
    }

    async fn list_time_off(&self, staffer_id: StafferId) -> RepositoryResult<Vec<Window>> {
        Ok(self
            .state
            .read()
            .time_off
            .get(&staffer_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn list_task_assignments(
        &self,
        staffer_id: StafferId,
    ) -> RepositoryResult<Vec<TaskAssignment>> {
        Ok(self
            .state
            .read()
            .assignments
            .iter()
            .filter(|a| a.current_staffer_id == staffer_id)
            .cloned()
            .collect())
    }

    async fn list_team_projects(&self, staffer_id: StafferId) -> RepositoryResult<Vec<ProjectId>> {
        Ok(self
            .state
            .read()
            .team_memberships
            .get(&staffer_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn compute_profitability(&self, project_id: ProjectId) -> RepositoryResult<f64> {
        self.state
            .read()
            .profitability
            .get(&project_id)
            .copied()
            .ok_or_else(|| {
                RepositoryError::ConnectionError {
                    message: "Profitability calculation unavailable".to_string(),
                    context: ErrorContext::new("compute_profitability")
                        .with_entity("project")
                        .with_entity_id(project_id)
                        .retryable(),
                }
            })
    }

    async fn insert_snapshot(
        &self,
        snapshot: ProfitabilitySnapshot,
    ) -> RepositoryResult<ProfitabilitySnapshot> {
        self.state.write().snapshots.push(snapshot.clone());
        Ok(snapshot)
    }

    async fn get_snapshot(&self, id: SnapshotId) -> RepositoryResult<ProfitabilitySnapshot> {
        self.state
            .read()
            .snapshots
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    "Snapshot not found",
                    ErrorContext::new("get_snapshot")
                        .with_entity("snapshot")
                        .with_entity_id(id),
                )
            })
    }

    async fn latest_baseline_for_project(
        &self,
        project_id: ProjectId,
    ) -> RepositoryResult<Option<ProfitabilitySnapshot>> {
        Ok(self
            .state
            .read()
            .snapshots
            .iter()
            .filter(|s| s.project_id == project_id && s.is_baseline())
            .max_by_key(|s| s.created_at)
            .cloned())
    }

    async fn latest_snapshot_for_project(
        &self,
        project_id: ProjectId,
    ) -> RepositoryResult<Option<ProfitabilitySnapshot>> {
        // created_at ties broken by insertion order: later inserts win.
        let state = self.state.read();
        Ok(state
            .snapshots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.project_id == project_id)
            .max_by_key(|(idx, s)| (s.created_at, *idx))
            .map(|(_, s)| s.clone()))
    }

    async fn create_assignment(
        &self,
        staffer_id: StafferId,
        task_id: TaskId,
    ) -> RepositoryResult<()> {
        let mut state = self.state.write();
        let existing = state
            .assignments
            .iter()
            .position(|a| a.task_id == task_id)
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    "Task has no assignment to transfer",
                    ErrorContext::new("create_assignment")
                        .with_entity("task_assignment")
                        .with_entity_id(task_id),
                )
            })?;
        state.assignments[existing].current_staffer_id = staffer_id;
        Ok(())
    }

    async fn remove_assignment(
        &self,
        staffer_id: StafferId,
        task_id: TaskId,
    ) -> RepositoryResult<()> {
        let mut state = self.state.write();
        let before = state.assignments.len();
        state
            .assignments
            .retain(|a| !(a.task_id == task_id && a.current_staffer_id == staffer_id));
        if state.assignments.len() == before {
            return Err(RepositoryError::not_found_with_context(
                "Assignment not found",
                ErrorContext::new("remove_assignment")
                    .with_entity("task_assignment")
                    .with_entity_id(task_id),
            ));
        }
        Ok(())
    }
}
