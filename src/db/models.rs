//! Shared data models re-exported for database layer consumers.

pub use crate::api::{ProjectId, SnapshotId, StafferId, TaskId};
pub use crate::models::interval::Window;
pub use crate::models::profitability::{ProfitabilityDelta, ProfitabilitySnapshot};
pub use crate::models::staffing::{StafferRecord, TaskAssignment};
