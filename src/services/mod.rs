//! Business logic: the reassignment decision engine, the profitability
//! tracker, and the request dispatcher that routes between them.
//!
//! Services hold no storage of their own; every read goes through the
//! [`crate::db::StaffingRepository`] trait and every notification goes out
//! on the [`crate::events::EventBus`].

pub mod availability;
pub mod dispatch;
pub mod profitability;
pub mod ranking;
pub mod reassignment;

pub use availability::{find_available_staffers, is_staffer_available};
pub use dispatch::{HandlerKind, Orchestrator, StaffingRequest, StaffingResponse};
pub use profitability::{
    BaselineOutcome, ProfitabilityTracker, SnapshotOutcome, TrackerError, TrendsReport,
};
pub use ranking::rank_candidates;
pub use reassignment::{handle_time_off, ReassignmentResult};
