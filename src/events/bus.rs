//! The event bus — how the decision engines reach external observers.
//!
//! The bus is an explicit service object: constructed once at process start
//! and passed by handle to producers and consumers. It lives for the whole
//! process and has no teardown; subscribers that go away must unsubscribe
//! themselves (the bus does not detect liveness).
//!
//! Delivery policy (deliberate, asserted by tests): `emit` holds a single
//! async mutex across the entire fan-out, so concurrent producers serialize
//! into one global emission order, and every handler is awaited in
//! subscription order before `emit` returns. A slow in-process handler
//! therefore delays the producer — consumers that front slow sinks (e.g. an
//! SSE connection) must decouple through their own queue, see
//! [`crate::events::broadcaster::EventBroadcaster`].

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

/// Kind of business event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessEventType {
    StaffReassignment,
    PtoConflict,
    TaskReassignment,
    Update,
    Error,
}

/// Which subsystem produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentId {
    Orchestrator,
    ResourceManagement,
    ProjectManagement,
    Profitability,
    System,
}

/// A notification unit delivered to every live subscriber.
///
/// Wire shape: `type`, `agent_id`, `timestamp` (ISO-8601 UTC), `message`.
/// No other fields are guaranteed to consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessEvent {
    #[serde(rename = "type")]
    pub kind: BusinessEventType,
    pub agent_id: AgentId,
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

impl BusinessEvent {
    /// Create an event stamped with the current instant.
    pub fn new(kind: BusinessEventType, agent_id: AgentId, message: impl Into<String>) -> Self {
        Self {
            kind,
            agent_id,
            timestamp: Utc::now(),
            message: message.into(),
        }
    }
}

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Handler = Arc<dyn Fn(BusinessEvent) -> BoxFuture<'static, ()> + Send + Sync>;

struct BusInner {
    next_id: u64,
    subscribers: Vec<(SubscriberId, Handler)>,
}

/// Process-wide publish/subscribe hub for [`BusinessEvent`]s.
///
/// Cheap to clone; clones share the same subscriber list.
#[derive(Clone)]
pub struct EventBus {
    inner: Arc<Mutex<BusInner>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(BusInner {
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Register a delivery target. The handler is awaited for every event
    /// emitted after this call returns (subscribe-before-emit visibility).
    pub async fn subscribe<F>(&self, handler: F) -> SubscriberId
    where
        F: Fn(BusinessEvent) -> BoxFuture<'static, ()> + Send + Sync + 'static,
    {
        let mut inner = self.inner.lock().await;
        let id = SubscriberId(inner.next_id);
        inner.next_id += 1;
        inner.subscribers.push((id, Arc::new(handler)));
        id
    }

    /// Remove a delivery target. Unknown ids are ignored.
    pub async fn unsubscribe(&self, id: SubscriberId) {
        let mut inner = self.inner.lock().await;
        inner.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    /// Deliver an event to every currently-subscribed handler.
    ///
    /// The subscriber lock is held across the whole fan-out: events from
    /// concurrent producers form a single global order, and each handler is
    /// awaited sequentially before `emit` returns.
    pub async fn emit(&self, event: BusinessEvent) {
        let inner = self.inner.lock().await;
        for (_, handler) in inner.subscribers.iter() {
            handler(event.clone()).await;
        }
    }

    /// Number of live subscribers (test observability).
    pub async fn subscriber_count(&self) -> usize {
        self.inner.lock().await.subscribers.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "bus_tests.rs"]
mod bus_tests;
