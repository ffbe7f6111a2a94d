//! Repository trait for the external staffing store.
//!
//! The trait is a narrow read/write contract: staffers, time
//! off, task assignments, team memberships, the delegated profitability
//! calculation, and append-only profitability snapshots. Implementations must
//! be `Send + Sync` to work with async Rust.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::api::{ProjectId, SnapshotId, StafferId, TaskId};
use crate::models::interval::Window;
use crate::models::profitability::ProfitabilitySnapshot;
use crate::models::staffing::{StafferRecord, TaskAssignment};

/// Repository trait for staffing and profitability data.
///
/// Read operations back the decision engine; snapshot operations back the
/// profitability tracker. The two assignment writes exist for the external
/// executor that applies accepted recommendations — the decision engine
/// itself never calls them.
#[async_trait]
pub trait StaffingRepository: Send + Sync {
    // ==================== Health ====================

    /// Check that the store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    // ==================== Staffers ====================

    /// Fetch a staffer by id.
    ///
    /// # Returns
    /// * `Ok(StafferRecord)` - The staffer
    /// * `Err(RepositoryError::NotFound)` - If no such staffer exists
    async fn find_staffer_by_id(&self, id: StafferId) -> RepositoryResult<StafferRecord>;

    /// Resolve a staffer by full name.
    ///
    /// Matches "First Last" exactly first, then falls back to a
    /// case-insensitive substring match on either name part.
    async fn find_staffer_by_name(&self, name: &str) -> RepositoryResult<StafferRecord>;

    /// List every staffer in the store.
    async fn list_staffers(&self) -> RepositoryResult<Vec<StafferRecord>>;

    // ==================== Availability inputs ====================

    /// List a staffer's recorded time-off windows.
    async fn list_time_off(&self, staffer_id: StafferId) -> RepositoryResult<Vec<Window>>;

    /// List a staffer's committed task assignments with task details.
    async fn list_task_assignments(
        &self,
        staffer_id: StafferId,
    ) -> RepositoryResult<Vec<TaskAssignment>>;

    /// List the projects whose teams a staffer belongs to.
    async fn list_team_projects(&self, staffer_id: StafferId) -> RepositoryResult<Vec<ProjectId>>;

    // ==================== Profitability ====================

    /// Compute a project's current total profitability.
    ///
    /// The calculation itself is delegated to the store (an external
    /// function in production); this trait only surfaces the number.
    async fn compute_profitability(&self, project_id: ProjectId) -> RepositoryResult<f64>;

    /// Persist a profitability snapshot. Snapshots are append-only.
    async fn insert_snapshot(
        &self,
        snapshot: ProfitabilitySnapshot,
    ) -> RepositoryResult<ProfitabilitySnapshot>;

    /// Fetch a snapshot by id.
    async fn get_snapshot(&self, id: SnapshotId) -> RepositoryResult<ProfitabilitySnapshot>;

    /// Latest baseline snapshot (`baseline_id == None`) for a project, newest
    /// first, or `None` when the project has no baseline yet.
    async fn latest_baseline_for_project(
        &self,
        project_id: ProjectId,
    ) -> RepositoryResult<Option<ProfitabilitySnapshot>>;

    /// Most recent snapshot of any kind for a project.
    async fn latest_snapshot_for_project(
        &self,
        project_id: ProjectId,
    ) -> RepositoryResult<Option<ProfitabilitySnapshot>>;

    // ==================== Executor write contract ====================

    /// Create a staffer-to-task assignment. Invoked only by the external
    /// executor that applies accepted recommendations.
    async fn create_assignment(
        &self,
        staffer_id: StafferId,
        task_id: TaskId,
    ) -> RepositoryResult<()>;

    /// Remove a staffer-to-task assignment. Executor-only, like
    /// [`Self::create_assignment`].
    async fn remove_assignment(
        &self,
        staffer_id: StafferId,
        task_id: TaskId,
    ) -> RepositoryResult<()>;
}
