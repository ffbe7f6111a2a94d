//! Availability filtering for substitute selection.
//!
//! A staffer is available for a window iff none of their recorded time-off
//! windows overlaps it and, when a project filter is supplied, they belong
//! to at least one of those project teams. Store errors degrade to "not
//! available" — a candidate we cannot verify is never proposed.

use std::sync::Arc;

use crate::api::{ProjectId, StafferId};
use crate::db::StaffingRepository;
use crate::models::interval::Window;
use crate::models::staffing::StafferRecord;

/// Decide whether one staffer is free for the given window.
///
/// `project_filter = None` means availability depends on the calendar only.
pub async fn is_staffer_available(
    repo: &Arc<dyn StaffingRepository>,
    staffer_id: StafferId,
    window: &Window,
    project_filter: Option<&[ProjectId]>,
) -> bool {
    let time_off = match repo.list_time_off(staffer_id).await {
        Ok(windows) => windows,
        Err(err) => {
            log::warn!(
                "Failed to load time off for staffer {}, treating as unavailable: {}",
                staffer_id,
                err
            );
            return false;
        }
    };
    if time_off.iter().any(|existing| existing.overlaps(window)) {
        return false;
    }

    if let Some(projects) = project_filter {
        let memberships = match repo.list_team_projects(staffer_id).await {
            Ok(projects) => projects,
            Err(err) => {
                log::warn!(
                    "Failed to load team memberships for staffer {}, treating as unavailable: {}",
                    staffer_id,
                    err
                );
                return false;
            }
        };
        if !projects.iter().any(|p| memberships.contains(p)) {
            return false;
        }
    }

    true
}

/// Collect every staffer free for the window, excluding the one being
/// replaced.
///
/// Candidates come back in store order; ranking is a separate step. A store
/// failure listing staffers yields an empty candidate set.
pub async fn find_available_staffers(
    repo: &Arc<dyn StaffingRepository>,
    exclude: StafferId,
    window: &Window,
    project_filter: Option<&[ProjectId]>,
) -> Vec<StafferRecord> {
    let staffers = match repo.list_staffers().await {
        Ok(staffers) => staffers,
        Err(err) => {
            log::warn!("Failed to list staffers for availability scan: {}", err);
            return Vec::new();
        }
    };

    let mut available = Vec::new();
    for staffer in staffers {
        if staffer.id == exclude {
            continue;
        }
        if is_staffer_available(repo, staffer.id, window, project_filter).await {
            available.push(staffer);
        }
    }
    available
}

#[cfg(test)]
#[path = "availability_tests.rs"]
mod availability_tests;
