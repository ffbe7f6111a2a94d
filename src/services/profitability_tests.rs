//! Tests for the profitability tracker state machine.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use futures::FutureExt;
    use parking_lot::Mutex;

    use crate::api::ProjectId;
    use crate::db::{LocalRepository, StaffingRepository};
    use crate::events::bus::{BusinessEvent, EventBus};
    use crate::services::profitability::{ProfitabilityTracker, TrackerError, TrendsReport};

    fn tracker_with(
        local: &Arc<LocalRepository>,
    ) -> (Arc<ProfitabilityTracker>, EventBus) {
        let repo: Arc<dyn StaffingRepository> = Arc::clone(local) as Arc<dyn StaffingRepository>;
        let bus = EventBus::new();
        (Arc::new(ProfitabilityTracker::new(repo, bus.clone())), bus)
    }

    #[tokio::test]
    async fn baseline_is_idempotent_within_a_session() {
        let local = Arc::new(LocalRepository::new());
        let project = ProjectId::generate();
        local.set_profitability(project, 100_000.0);
        let (tracker, _bus) = tracker_with(&local);

        let first = tracker
            .create_baseline(project, "profitability", "initial_baseline")
            .await
            .unwrap();
        let second = tracker
            .create_baseline(project, "profitability", "initial_baseline")
            .await
            .unwrap();

        assert!(!first.baseline_exists);
        assert!(second.baseline_exists);
        assert_eq!(first.snapshot.id, second.snapshot.id);
        assert_eq!(local.snapshot_count(), 1);
    }

    #[tokio::test]
    async fn concurrent_first_touch_creates_exactly_one_baseline() {
        let local = Arc::new(LocalRepository::new());
        let project = ProjectId::generate();
        local.set_profitability(project, 50_000.0);
        let (tracker, _bus) = tracker_with(&local);

        let mut tasks = Vec::new();
        for _ in 0..8 {
            let tracker = Arc::clone(&tracker);
            tasks.push(tokio::spawn(async move {
                tracker
                    .create_baseline(project, "profitability", "initial_baseline")
                    .await
                    .unwrap()
            }));
        }
        let outcomes: Vec<_> = futures::future::join_all(tasks)
            .await
            .into_iter()
            .map(|r| r.unwrap())
            .collect();

        assert_eq!(local.snapshot_count(), 1);
        assert_eq!(outcomes.iter().filter(|o| !o.baseline_exists).count(), 1);
    }

    #[tokio::test]
    async fn snapshot_after_change_reports_a_signed_delta() {
        let local = Arc::new(LocalRepository::new());
        let project = ProjectId::generate();
        local.set_profitability(project, 100_000.0);
        let (tracker, _bus) = tracker_with(&local);

        tracker
            .create_baseline(project, "profitability", "initial_baseline")
            .await
            .unwrap();
        local.set_profitability(project, 97_000.0);

        let outcome = tracker
            .snapshot_after_change(project, "resource_management", "task_reassignment")
            .await
            .unwrap();

        assert!(!outcome.auto_baseline_created);
        assert_eq!(outcome.delta.change_amount, -3_000.0);
        assert!((outcome.delta.change_percentage.unwrap() + 3.0).abs() < 1e-9);
        assert!(!outcome.delta.is_improvement);
        assert_eq!(outcome.snapshot.baseline_id, Some(outcome.baseline.id));
        assert_eq!(
            outcome.snapshot.triggered_by_agent.as_deref(),
            Some("resource_management")
        );
    }

    #[tokio::test]
    async fn first_change_snapshot_auto_creates_a_system_baseline() {
        let local = Arc::new(LocalRepository::new());
        let project = ProjectId::generate();
        local.set_profitability(project, 80_000.0);
        let (tracker, _bus) = tracker_with(&local);

        let outcome = tracker
            .snapshot_after_change(project, "resource_management", "task_reassignment")
            .await
            .unwrap();

        assert!(outcome.auto_baseline_created);
        assert!(outcome.baseline.is_baseline());
        assert_eq!(outcome.baseline.triggered_by_agent.as_deref(), Some("system"));
        assert_eq!(
            outcome.baseline.triggered_by_action.as_deref(),
            Some("auto_baseline_before_change")
        );
        // Baseline plus change snapshot.
        assert_eq!(local.snapshot_count(), 2);
        assert_eq!(outcome.delta.change_amount, 0.0);
        assert!(!outcome.delta.is_improvement);
    }

    #[tokio::test]
    async fn trends_without_baseline_is_explicit() {
        let local = Arc::new(LocalRepository::new());
        let project = ProjectId::generate();
        let (tracker, _bus) = tracker_with(&local);

        match tracker.trends(project).await.unwrap() {
            TrendsReport::NoBaseline { project_id } => assert_eq!(project_id, project),
            TrendsReport::Available { .. } => panic!("expected no baseline"),
        }
    }

    #[tokio::test]
    async fn trends_reports_latest_snapshot_against_latest_baseline() {
        let local = Arc::new(LocalRepository::new());
        let project = ProjectId::generate();
        local.set_profitability(project, 200_000.0);
        let (tracker, _bus) = tracker_with(&local);

        tracker
            .create_baseline(project, "profitability", "initial_baseline")
            .await
            .unwrap();
        local.set_profitability(project, 210_000.0);
        tracker
            .snapshot_after_change(project, "resource_management", "task_reassignment")
            .await
            .unwrap();

        match tracker.trends(project).await.unwrap() {
            TrendsReport::Available {
                baseline,
                latest,
                delta,
            } => {
                assert!(baseline.is_baseline());
                assert_eq!(latest.total_profitability, 210_000.0);
                assert_eq!(delta.change_amount, 10_000.0);
                assert!(delta.is_improvement);
            }
            TrendsReport::NoBaseline { .. } => panic!("expected trend data"),
        }
    }

    #[tokio::test]
    async fn unreachable_calculation_fails_without_touching_snapshots() {
        let local = Arc::new(LocalRepository::new());
        // No profitability figure set: the delegated calculation is down.
        let project = ProjectId::generate();
        let (tracker, _bus) = tracker_with(&local);

        let err = tracker
            .create_baseline(project, "profitability", "initial_baseline")
            .await
            .unwrap_err();
        assert!(matches!(err, TrackerError::ComputeFailed { .. }));
        assert_eq!(local.snapshot_count(), 0);

        // A later successful call still works; no poisoned state.
        local.set_profitability(project, 10_000.0);
        let outcome = tracker
            .create_baseline(project, "profitability", "initial_baseline")
            .await
            .unwrap();
        assert!(!outcome.baseline_exists);
        assert_eq!(local.snapshot_count(), 1);
    }

    #[tokio::test]
    async fn tracker_emits_update_events_on_the_bus() {
        let local = Arc::new(LocalRepository::new());
        let project = ProjectId::generate();
        local.set_profitability(project, 100_000.0);
        let (tracker, bus) = tracker_with(&local);

        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);
        bus.subscribe(move |ev: BusinessEvent| {
            let log = Arc::clone(&log);
            async move {
                log.lock().push(ev.message);
            }
            .boxed()
        })
        .await;

        tracker
            .create_baseline(project, "profitability", "initial_baseline")
            .await
            .unwrap();
        local.set_profitability(project, 97_000.0);
        tracker
            .snapshot_after_change(project, "resource_management", "task_reassignment")
            .await
            .unwrap();

        let messages = seen.lock();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains("Baseline"));
        assert!(messages[1].contains("declined"));
    }
}
