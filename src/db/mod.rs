//! Data access for staffing and profitability records.
//!
//! This module provides abstractions for the external store via the
//! Repository pattern, allowing different storage backends to be swapped
//! easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (HTTP handlers, server binary)       │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services/) - Business Logic             │
//! │  - Availability filtering and candidate ranking          │
//! │  - Reassignment recommendation building                  │
//! │  - Profitability baseline/delta tracking                 │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! # Contract
//!
//! The store schema itself is out of scope: this crate reads staffers, time
//! off, task assignments, and team memberships, and appends profitability
//! snapshots. Assignment writes exist on the trait but are invoked only by
//! the external executor that applies accepted recommendations — the decision
//! engine itself never writes assignments.

#[cfg(not(feature = "local-repo"))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod models;
pub mod repositories;
pub mod repository;

pub use factory::{RepositoryFactory, RepositoryType};
#[cfg(feature = "local-repo")]
pub use repositories::LocalRepository;
pub use repository::{
    ErrorContext, RepositoryError, RepositoryResult, StaffingRepository,
};
