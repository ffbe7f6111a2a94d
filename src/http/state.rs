//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::StaffingRepository;
use crate::events::broadcaster::EventBroadcaster;
use crate::events::bus::EventBus;
use crate::services::dispatch::Orchestrator;
use crate::services::profitability::ProfitabilityTracker;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for store operations
    pub repository: Arc<dyn StaffingRepository>,
    /// Process-wide event bus
    pub bus: EventBus,
    /// Session-scoped profitability tracker
    pub tracker: Arc<ProfitabilityTracker>,
    /// Bus-to-SSE fan-out
    pub broadcaster: EventBroadcaster,
    /// Request dispatcher over both engines
    pub orchestrator: Arc<Orchestrator>,
}

impl AppState {
    /// Wire the full service stack around one repository and one bus.
    pub async fn new(repository: Arc<dyn StaffingRepository>) -> Self {
        let bus = EventBus::new();
        let tracker = Arc::new(ProfitabilityTracker::new(
            Arc::clone(&repository),
            bus.clone(),
        ));
        let broadcaster = EventBroadcaster::start(bus.clone()).await;
        let orchestrator = Arc::new(Orchestrator::new(
            Arc::clone(&repository),
            bus.clone(),
            Arc::clone(&tracker),
        ));
        Self {
            repository,
            bus,
            tracker,
            broadcaster,
            orchestrator,
        }
    }
}
