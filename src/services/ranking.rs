//! Candidate ranking for substitute selection.

use crate::models::staffing::StafferRecord;

/// Order available candidates for substitute selection.
///
/// Sort key: seniority level descending (absent seniority ranks as 0),
/// then capacity descending, then staffer id ascending. The last key makes
/// the order fully deterministic regardless of store return order. The
/// input is consumed and returned re-ordered; nothing is dropped or added.
pub fn rank_candidates(mut candidates: Vec<StafferRecord>) -> Vec<StafferRecord> {
    candidates.sort_by(|a, b| {
        let a_seniority = a.seniority_level.unwrap_or(0);
        let b_seniority = b.seniority_level.unwrap_or(0);
        b_seniority
            .cmp(&a_seniority)
            .then_with(|| {
                b.capacity
                    .partial_cmp(&a.capacity)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .then_with(|| a.id.value().cmp(&b.id.value()))
    });
    candidates
}

#[cfg(test)]
#[path = "ranking_tests.rs"]
mod ranking_tests;
