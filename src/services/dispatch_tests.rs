//! Tests for request routing and the orchestrator.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};

    use crate::api::ProjectId;
    use crate::db::{LocalRepository, StaffingRepository};
    use crate::events::bus::EventBus;
    use crate::models::staffing::{TimeOffKind, TimeOffRequest};
    use crate::services::dispatch::{
        route, HandlerKind, Orchestrator, StaffingRequest, StaffingResponse,
    };
    use crate::services::profitability::ProfitabilityTracker;

    fn time_off_request() -> TimeOffRequest {
        TimeOffRequest {
            staffer_name: "Maria Garcia".to_string(),
            staffer_id: None,
            time_off_hours: 8.0,
            start: Utc.with_ymd_and_hms(2025, 8, 20, 0, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2025, 8, 20, 23, 59, 59).unwrap(),
            kind: TimeOffKind::Pto,
        }
    }

    fn orchestrator(local: &Arc<LocalRepository>) -> Orchestrator {
        let repo: Arc<dyn StaffingRepository> = Arc::clone(local) as Arc<dyn StaffingRepository>;
        let bus = EventBus::new();
        let tracker = Arc::new(ProfitabilityTracker::new(Arc::clone(&repo), bus.clone()));
        Orchestrator::new(repo, bus, tracker)
    }

    #[test]
    fn test_route_is_a_pure_match_on_the_variant() {
        let project_id = ProjectId::generate();
        assert_eq!(
            route(&StaffingRequest::TimeOff(time_off_request())),
            HandlerKind::ResourceManagement
        );
        assert_eq!(
            route(&StaffingRequest::CreateBaseline {
                project_id,
                agent: "profitability".to_string(),
                action: "initial_baseline".to_string(),
            }),
            HandlerKind::Profitability
        );
        assert_eq!(
            route(&StaffingRequest::SnapshotAfterChange {
                project_id,
                agent: "resource_management".to_string(),
                action: "task_reassignment".to_string(),
            }),
            HandlerKind::Profitability
        );
        assert_eq!(
            route(&StaffingRequest::Trends { project_id }),
            HandlerKind::Profitability
        );
    }

    #[tokio::test]
    async fn dispatch_time_off_returns_a_reassignment_result() {
        let local = Arc::new(LocalRepository::new());
        let orchestrator = orchestrator(&local);

        // Unknown staffer: a structured failure, not an Err.
        let response = orchestrator
            .dispatch(StaffingRequest::TimeOff(time_off_request()))
            .await
            .unwrap();
        match response {
            StaffingResponse::Reassignment(result) => {
                assert!(!result.success);
                assert!(result.message.contains("Maria Garcia"));
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[tokio::test]
    async fn dispatch_baseline_then_trends() {
        let local = Arc::new(LocalRepository::new());
        let project_id = ProjectId::generate();
        local.set_profitability(project_id, 100_000.0);
        let orchestrator = orchestrator(&local);

        let response = orchestrator
            .dispatch(StaffingRequest::CreateBaseline {
                project_id,
                agent: "profitability".to_string(),
                action: "initial_baseline".to_string(),
            })
            .await
            .unwrap();
        match response {
            StaffingResponse::Baseline(outcome) => assert!(!outcome.baseline_exists),
            other => panic!("unexpected response: {:?}", other),
        }

        let response = orchestrator
            .dispatch(StaffingRequest::Trends { project_id })
            .await
            .unwrap();
        assert!(matches!(response, StaffingResponse::Trends(_)));
    }

    #[tokio::test]
    async fn dispatch_surfaces_tracker_errors() {
        let local = Arc::new(LocalRepository::new());
        let orchestrator = orchestrator(&local);

        // No profitability figure configured for the project.
        let err = orchestrator
            .dispatch(StaffingRequest::CreateBaseline {
                project_id: ProjectId::generate(),
                agent: "profitability".to_string(),
                action: "initial_baseline".to_string(),
            })
            .await;
        assert!(err.is_err());
    }
}
