//! Event notification: the in-process bus and the SSE broadcaster.

pub mod broadcaster;
pub mod bus;

pub use broadcaster::EventBroadcaster;
pub use bus::{AgentId, BusinessEvent, BusinessEventType, EventBus, SubscriberId};
