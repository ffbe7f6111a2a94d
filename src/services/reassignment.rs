//! The time-off reassignment pipeline.
//!
//! One run per [`TimeOffRequest`]: resolve the staffer, find every task
//! assignment overlapping the absence window, and propose the best available
//! substitute per task. The pipeline is read-only toward the store — the
//! returned [`ReassignmentResult`] is the instruction set for an external
//! executor, never applied here.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::db::{RepositoryError, StaffingRepository};
use crate::events::bus::{AgentId, BusinessEvent, BusinessEventType, EventBus};
use crate::models::interval::task_overlaps_window;
use crate::models::staffing::{CandidateAssignment, StafferRecord, TimeOffRequest};
use crate::services::availability::find_available_staffers;
use crate::services::ranking::rank_candidates;

/// Aggregate outcome of one time-off run. Immutable after construction.
///
/// `success = true` covers every completed scan, including one that found
/// no substitute for any task (warnings carry the detail). `success = false`
/// means the request could not even be evaluated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReassignmentResult {
    pub success: bool,
    pub message: String,
    /// Overlapping assignments found, resolved or not.
    pub affected_tasks_count: usize,
    /// One proposed substitute per resolved task, in task discovery order.
    pub new_assignments: Vec<CandidateAssignment>,
    /// Tasks left unresolved, one entry each.
    pub warnings: Vec<String>,
    /// Follow-up guidance for the caller.
    pub recommendations: Vec<String>,
}

impl ReassignmentResult {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            affected_tasks_count: 0,
            new_assignments: Vec::new(),
            warnings: Vec::new(),
            recommendations: Vec::new(),
        }
    }
}

/// Confidence assigned to a candidate at the given rank position.
///
/// Top candidate scores 0.9, each rank below loses 0.05, floored at 0.3.
/// Always within `[0.0, 1.0]`.
pub(crate) fn confidence_for_rank(rank: usize) -> f64 {
    (0.9 - 0.05 * rank as f64).max(0.3)
}

fn describe_match(candidate: &StafferRecord, pool_size: usize) -> String {
    let seniority = match candidate.seniority_level {
        Some(level) => format!("seniority level {}", level),
        None => "unranked seniority".to_string(),
    };
    format!(
        "Best match of {} available team member{}: {} with {} and {:.0}% capacity",
        pool_size,
        if pool_size == 1 { "" } else { "s" },
        candidate.title,
        seniority,
        candidate.capacity * 100.0
    )
}

/// Run the full reassignment pipeline for one time-off request.
///
/// Emits a `pto_conflict` event when affected tasks are found, one
/// `staff_reassignment` event per proposed substitute, and an `error` event
/// when the request cannot be evaluated at all.
pub async fn handle_time_off(
    repo: &Arc<dyn StaffingRepository>,
    bus: &EventBus,
    request: &TimeOffRequest,
) -> ReassignmentResult {
    // Resolve the staffer: by id when given, by name otherwise.
    let staffer = match resolve_staffer(repo, request).await {
        Ok(staffer) => staffer,
        Err(err) => {
            let message = format!(
                "Could not resolve staffer '{}': {}",
                request.staffer_name, err
            );
            log::warn!("{}", message);
            bus.emit(BusinessEvent::new(
                BusinessEventType::Error,
                AgentId::ResourceManagement,
                message.clone(),
            ))
            .await;
            return ReassignmentResult::failure(message);
        }
    };
    let staffer_name = staffer.full_name();

    let assignments = match repo.list_task_assignments(staffer.id).await {
        Ok(assignments) => assignments,
        Err(err) => {
            let message = format!(
                "Could not load task assignments for {}: {}",
                staffer_name, err
            );
            log::warn!("{}", message);
            bus.emit(BusinessEvent::new(
                BusinessEventType::Error,
                AgentId::ResourceManagement,
                message.clone(),
            ))
            .await;
            return ReassignmentResult::failure(message);
        }
    };

    let window = request.window();
    let affected: Vec<_> = assignments
        .into_iter()
        .filter(|a| task_overlaps_window(a.start_date, a.due_date, &window))
        .collect();

    if affected.is_empty() {
        return ReassignmentResult {
            success: true,
            message: format!(
                "{} has no task assignments during the requested time off",
                staffer_name
            ),
            affected_tasks_count: 0,
            new_assignments: Vec::new(),
            warnings: Vec::new(),
            recommendations: Vec::new(),
        };
    }

    bus.emit(BusinessEvent::new(
        BusinessEventType::PtoConflict,
        AgentId::ResourceManagement,
        format!(
            "{} has {} task{} due during their time off",
            staffer_name,
            affected.len(),
            if affected.len() == 1 { "" } else { "s" }
        ),
    ))
    .await;

    let mut proposed = Vec::new();
    let mut warnings = Vec::new();

    for task in &affected {
        let project_filter = [task.project_id];
        let available =
            find_available_staffers(repo, staffer.id, &window, Some(&project_filter)).await;
        let ranked = rank_candidates(available);
        let pool_size = ranked.len();

        match ranked.into_iter().next() {
            Some(candidate) => {
                let assignment = CandidateAssignment {
                    original_staffer_id: staffer.id,
                    original_staffer_name: staffer_name.clone(),
                    new_staffer_id: candidate.id,
                    new_staffer_name: candidate.full_name(),
                    task_id: task.task_id,
                    task_name: task.task_name.clone(),
                    project_id: task.project_id,
                    project_name: task.project_name.clone(),
                    assignment_reason: describe_match(&candidate, pool_size),
                    confidence_score: confidence_for_rank(0),
                };
                bus.emit(BusinessEvent::new(
                    BusinessEventType::StaffReassignment,
                    AgentId::ResourceManagement,
                    format!(
                        "Recommend reassigning '{}' from {} to {}",
                        task.task_name,
                        staffer_name,
                        assignment.new_staffer_name
                    ),
                ))
                .await;
                proposed.push(assignment);
            }
            None => {
                warnings.push(format!(
                    "No available substitute found for task '{}' (currently assigned to {})",
                    task.task_name, staffer_name
                ));
            }
        }
    }

    let mut recommendations = Vec::new();
    if !proposed.is_empty() {
        recommendations.push(format!(
            "Review and apply {} proposed reassignment{}",
            proposed.len(),
            if proposed.len() == 1 { "" } else { "s" }
        ));
    }
    if !warnings.is_empty() {
        recommendations.push(format!(
            "Escalate {} unresolved task{} to a staffing manager",
            warnings.len(),
            if warnings.len() == 1 { "" } else { "s" }
        ));
    }

    ReassignmentResult {
        success: true,
        message: format!(
            "Found {} affected task{} for {}; proposed {} reassignment{}",
            affected.len(),
            if affected.len() == 1 { "" } else { "s" },
            staffer_name,
            proposed.len(),
            if proposed.len() == 1 { "" } else { "s" }
        ),
        affected_tasks_count: affected.len(),
        new_assignments: proposed,
        warnings,
        recommendations,
    }
}

async fn resolve_staffer(
    repo: &Arc<dyn StaffingRepository>,
    request: &TimeOffRequest,
) -> Result<StafferRecord, RepositoryError> {
    match request.staffer_id {
        Some(id) => repo.find_staffer_by_id(id).await,
        None => repo.find_staffer_by_name(&request.staffer_name).await,
    }
}

#[cfg(test)]
#[path = "reassignment_tests.rs"]
mod reassignment_tests;
