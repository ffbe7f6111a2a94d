//! Profitability baseline/delta tracking.
//!
//! Per project the tracker is a two-state machine: no baseline, then
//! baseline exists for the rest of the tracking session (the tracker's own
//! lifetime). The first snapshot for a project is its baseline; every later
//! snapshot references the latest baseline and carries a signed delta
//! against it. Snapshots are append-only in the store.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;

use crate::api::{ProjectId, SnapshotId};
use crate::db::{RepositoryError, StaffingRepository};
use crate::events::bus::{AgentId, BusinessEvent, BusinessEventType, EventBus};
use crate::models::profitability::{ProfitabilityDelta, ProfitabilitySnapshot};

/// Agent name recorded on auto-created baselines.
const AUTO_BASELINE_AGENT: &str = "system";
/// Action recorded on auto-created baselines.
const AUTO_BASELINE_ACTION: &str = "auto_baseline_before_change";

/// Why a tracker operation failed. The caller's pipeline survives all of
/// these; prior snapshots are never touched by a failed operation.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The delegated profitability calculation was unreachable.
    #[error("profitability calculation failed for project {project_id}: {source}")]
    ComputeFailed {
        project_id: ProjectId,
        source: RepositoryError,
    },
    /// The snapshot store rejected a read or append.
    #[error("snapshot store error for project {project_id}: {source}")]
    StoreFailed {
        project_id: ProjectId,
        source: RepositoryError,
    },
}

/// Result of a baseline request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineOutcome {
    pub snapshot: ProfitabilitySnapshot,
    /// True when the baseline already existed in this session and no new
    /// snapshot was persisted.
    pub baseline_exists: bool,
}

/// Result of a post-change snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotOutcome {
    pub snapshot: ProfitabilitySnapshot,
    pub baseline: ProfitabilitySnapshot,
    pub delta: ProfitabilityDelta,
    /// True when this call had to create the baseline first.
    pub auto_baseline_created: bool,
}

/// Latest snapshot and its delta against the current baseline, or an
/// explicit statement that tracking has not started for the project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TrendsReport {
    NoBaseline { project_id: ProjectId },
    Available {
        baseline: ProfitabilitySnapshot,
        latest: ProfitabilitySnapshot,
        delta: ProfitabilityDelta,
    },
}

/// Session-scoped profitability tracker.
///
/// One instance per tracking session; tests instantiate a fresh tracker per
/// case. The baselined-project set is guarded by an async mutex held across
/// the compute-and-persist sequence, so concurrent first touches of the same
/// project still produce exactly one baseline.
pub struct ProfitabilityTracker {
    repo: Arc<dyn StaffingRepository>,
    bus: EventBus,
    baselined: Mutex<HashSet<ProjectId>>,
}

impl ProfitabilityTracker {
    pub fn new(repo: Arc<dyn StaffingRepository>, bus: EventBus) -> Self {
        Self {
            repo,
            bus,
            baselined: Mutex::new(HashSet::new()),
        }
    }

    /// Record the reference snapshot for a project.
    ///
    /// Idempotent within the session: the second and later calls return the
    /// existing baseline with `baseline_exists = true` and persist nothing.
    pub async fn create_baseline(
        &self,
        project_id: ProjectId,
        agent: &str,
        action: &str,
    ) -> Result<BaselineOutcome, TrackerError> {
        let mut baselined = self.baselined.lock().await;
        self.baseline_locked(&mut baselined, project_id, agent, action)
            .await
    }

    /// Snapshot a project after an automated change and compute its delta.
    ///
    /// A project touched for the first time gets an auto-created baseline
    /// (agent `system`) before the change snapshot.
    pub async fn snapshot_after_change(
        &self,
        project_id: ProjectId,
        agent: &str,
        action: &str,
    ) -> Result<SnapshotOutcome, TrackerError> {
        let mut baselined = self.baselined.lock().await;
        let baseline_outcome = self
            .baseline_locked(
                &mut baselined,
                project_id,
                AUTO_BASELINE_AGENT,
                AUTO_BASELINE_ACTION,
            )
            .await?;
        let baseline = baseline_outcome.snapshot;
        let auto_baseline_created = !baseline_outcome.baseline_exists;

        let current = self.compute(project_id).await?;
        let snapshot = ProfitabilitySnapshot {
            id: SnapshotId::generate(),
            project_id,
            baseline_id: Some(baseline.id),
            total_profitability: current,
            triggered_by_agent: Some(agent.to_string()),
            triggered_by_action: Some(action.to_string()),
            created_at: Utc::now(),
        };
        let snapshot = self
            .repo
            .insert_snapshot(snapshot)
            .await
            .map_err(|source| TrackerError::StoreFailed { project_id, source })?;
        drop(baselined);

        let delta = ProfitabilityDelta::between(current, baseline.total_profitability);
        self.bus
            .emit(BusinessEvent::new(
                BusinessEventType::Update,
                AgentId::Profitability,
                format!("{} after '{}'", delta.describe(), action),
            ))
            .await;

        Ok(SnapshotOutcome {
            snapshot,
            baseline,
            delta,
            auto_baseline_created,
        })
    }

    /// Latest snapshot for a project with its delta against the latest
    /// baseline.
    pub async fn trends(&self, project_id: ProjectId) -> Result<TrendsReport, TrackerError> {
        let baseline = self
            .repo
            .latest_baseline_for_project(project_id)
            .await
            .map_err(|source| TrackerError::StoreFailed { project_id, source })?;
        let Some(baseline) = baseline else {
            return Ok(TrendsReport::NoBaseline { project_id });
        };

        let latest = self
            .repo
            .latest_snapshot_for_project(project_id)
            .await
            .map_err(|source| TrackerError::StoreFailed { project_id, source })?
            // A baseline exists, so at least one snapshot exists.
            .unwrap_or_else(|| baseline.clone());

        let delta = ProfitabilityDelta::between(
            latest.total_profitability,
            baseline.total_profitability,
        );
        Ok(TrendsReport::Available {
            baseline,
            latest,
            delta,
        })
    }

    async fn baseline_locked(
        &self,
        baselined: &mut HashSet<ProjectId>,
        project_id: ProjectId,
        agent: &str,
        action: &str,
    ) -> Result<BaselineOutcome, TrackerError> {
        if baselined.contains(&project_id) {
            let existing = self
                .repo
                .latest_baseline_for_project(project_id)
                .await
                .map_err(|source| TrackerError::StoreFailed { project_id, source })?;
            if let Some(snapshot) = existing {
                return Ok(BaselineOutcome {
                    snapshot,
                    baseline_exists: true,
                });
            }
            // Session set out of step with the store; fall through and
            // re-create.
            log::warn!(
                "Baseline marked created for project {} but absent from store; re-creating",
                project_id
            );
        }

        let value = self.compute(project_id).await?;
        let snapshot = ProfitabilitySnapshot {
            id: SnapshotId::generate(),
            project_id,
            baseline_id: None,
            total_profitability: value,
            triggered_by_agent: Some(agent.to_string()),
            triggered_by_action: Some(action.to_string()),
            created_at: Utc::now(),
        };
        let snapshot = self
            .repo
            .insert_snapshot(snapshot)
            .await
            .map_err(|source| TrackerError::StoreFailed { project_id, source })?;
        baselined.insert(project_id);

        self.bus
            .emit(BusinessEvent::new(
                BusinessEventType::Update,
                AgentId::Profitability,
                format!(
                    "Baseline profitability ${:.2} recorded for project {}",
                    value, project_id
                ),
            ))
            .await;

        Ok(BaselineOutcome {
            snapshot,
            baseline_exists: false,
        })
    }

    async fn compute(&self, project_id: ProjectId) -> Result<f64, TrackerError> {
        self.repo
            .compute_profitability(project_id)
            .await
            .map_err(|source| TrackerError::ComputeFailed { project_id, source })
    }
}

#[cfg(test)]
#[path = "profitability_tests.rs"]
mod profitability_tests;
