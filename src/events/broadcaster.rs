//! Fan-out from the event bus to streaming clients.
//!
//! The bus awaits every subscriber inline, so a slow SSE connection must not
//! sit directly on it. The broadcaster subscribes once and forwards each
//! event into per-client unbounded channels: enqueueing never blocks the
//! bus, and a stalled client only grows its own queue.

use std::collections::HashMap;
use std::sync::Arc;

use futures::FutureExt;
use parking_lot::Mutex;
use tokio::sync::mpsc;

use super::bus::{BusinessEvent, EventBus, SubscriberId};

/// Handle identifying one streaming client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientId(u64);

struct Clients {
    next_id: u64,
    senders: HashMap<ClientId, mpsc::UnboundedSender<BusinessEvent>>,
}

/// Bridges the [`EventBus`] to any number of streaming clients.
#[derive(Clone)]
pub struct EventBroadcaster {
    clients: Arc<Mutex<Clients>>,
    subscription: SubscriberId,
    bus: EventBus,
}

impl EventBroadcaster {
    /// Subscribe to the bus and start forwarding events to clients.
    pub async fn start(bus: EventBus) -> Self {
        let clients = Arc::new(Mutex::new(Clients {
            next_id: 0,
            senders: HashMap::new(),
        }));

        let forward_to = Arc::clone(&clients);
        let subscription = bus
            .subscribe(move |event: BusinessEvent| {
                let clients = Arc::clone(&forward_to);
                async move {
                    let mut guard = clients.lock();
                    // Send failure means the receiver is gone; prune it.
                    guard
                        .senders
                        .retain(|_, sender| sender.send(event.clone()).is_ok());
                }
                .boxed()
            })
            .await;

        Self {
            clients,
            subscription,
            bus,
        }
    }

    /// Register a new client and return its event stream.
    pub fn register_client(&self) -> (ClientId, mpsc::UnboundedReceiver<BusinessEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut guard = self.clients.lock();
        let id = ClientId(guard.next_id);
        guard.next_id += 1;
        guard.senders.insert(id, tx);
        (id, rx)
    }

    /// Remove a client. Unknown ids are ignored.
    pub fn drop_client(&self, id: ClientId) {
        self.clients.lock().senders.remove(&id);
    }

    /// Number of connected clients (test observability).
    pub fn client_count(&self) -> usize {
        self.clients.lock().senders.len()
    }

    /// Detach from the bus. Registered clients receive no further events.
    pub async fn shutdown(&self) {
        self.bus.unsubscribe(self.subscription).await;
    }
}

#[cfg(test)]
#[path = "broadcaster_tests.rs"]
mod broadcaster_tests;
