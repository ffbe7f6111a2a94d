//! # PSA Rust Backend
//!
//! Staffing automation engine for professional-service projects.
//!
//! When a staffer takes time off, this crate finds the committed task
//! assignments that overlap the absence window, filters and ranks qualified
//! substitutes, and emits auditable reassignment recommendations. A
//! profitability tracker snapshots each project's profitability before and
//! after automated changes, and both engines publish `BusinessEvent`s onto an
//! in-process event bus that external observers (e.g. a live dashboard over
//! SSE) consume.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Entity id newtypes and the consolidated DTO surface
//! - [`models`]: Pure domain types and the interval overlap evaluator
//! - [`db`]: Repository trait, in-memory backend, and factory
//! - [`events`]: The event bus and the SSE broadcaster
//! - [`services`]: Availability, ranking, reassignment, profitability, dispatch
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Guarantees
//!
//! - Overlap detection uses closed intervals; tasks with missing dates are
//!   conservatively treated as affected.
//! - At most one live profitability baseline exists per project per tracking
//!   session, even under concurrent first touch.
//! - Events reach every subscriber in a single global emission order.

pub mod api;

pub mod db;
pub mod models;

pub mod events;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
