//! Tests for the event bus delivery contract.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use futures::FutureExt;
    use parking_lot::Mutex;

    use crate::events::bus::{AgentId, BusinessEvent, BusinessEventType, EventBus};

    fn event(message: &str) -> BusinessEvent {
        BusinessEvent::new(BusinessEventType::Update, AgentId::System, message)
    }

    #[tokio::test]
    async fn delivers_to_all_subscribers() {
        let bus = EventBus::new();
        let seen_a = Arc::new(Mutex::new(Vec::new()));
        let seen_b = Arc::new(Mutex::new(Vec::new()));

        for seen in [&seen_a, &seen_b] {
            let seen = Arc::clone(seen);
            bus.subscribe(move |ev: BusinessEvent| {
                let seen = Arc::clone(&seen);
                async move {
                    seen.lock().push(ev.message);
                }
                .boxed()
            })
            .await;
        }

        bus.emit(event("one")).await;
        bus.emit(event("two")).await;

        assert_eq!(*seen_a.lock(), vec!["one", "two"]);
        assert_eq!(*seen_b.lock(), vec!["one", "two"]);
    }

    #[tokio::test]
    async fn emit_awaits_each_handler_before_returning() {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let log = Arc::clone(&seen);
        bus.subscribe(move |ev: BusinessEvent| {
            let log = Arc::clone(&log);
            async move {
                // A deliberately slow handler; emit must not return early.
                tokio::time::sleep(Duration::from_millis(500)).await;
                log.lock().push(ev.message);
            }
            .boxed()
        })
        .await;

        let start = tokio::time::Instant::now();
        bus.emit(event("slow")).await;
        assert!(start.elapsed() >= Duration::from_millis(500));
        assert_eq!(*seen.lock(), vec!["slow"]);
    }

    #[tokio::test]
    async fn concurrent_emitters_produce_one_global_order() {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let log = Arc::clone(&seen);
        bus.subscribe(move |ev: BusinessEvent| {
            let log = Arc::clone(&log);
            async move {
                // Yield inside the handler so interleaving would show up if
                // emissions were not serialized.
                tokio::task::yield_now().await;
                log.lock().push(format!("{}-start", ev.message));
                tokio::task::yield_now().await;
                log.lock().push(format!("{}-end", ev.message));
            }
            .boxed()
        })
        .await;

        let mut tasks = Vec::new();
        for i in 0..8 {
            let bus = bus.clone();
            tasks.push(tokio::spawn(async move {
                bus.emit(event(&format!("e{}", i))).await;
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        let log = seen.lock();
        assert_eq!(log.len(), 16);
        // Every event's start/end pair is adjacent: no interleaved delivery.
        for pair in log.chunks(2) {
            let name = pair[0].strip_suffix("-start").unwrap();
            assert_eq!(pair[1], format!("{}-end", name));
        }
    }

    #[tokio::test]
    async fn unsubscribe_stops_delivery() {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let log = Arc::clone(&seen);
        let id = bus
            .subscribe(move |ev: BusinessEvent| {
                let log = Arc::clone(&log);
                async move {
                    log.lock().push(ev.message);
                }
                .boxed()
            })
            .await;

        bus.emit(event("before")).await;
        bus.unsubscribe(id).await;
        bus.emit(event("after")).await;

        assert_eq!(*seen.lock(), vec!["before"]);
        assert_eq!(bus.subscriber_count().await, 0);
    }

    #[tokio::test]
    async fn emit_without_subscribers_is_a_no_op() {
        let bus = EventBus::new();
        bus.emit(event("nobody home")).await;
        assert_eq!(bus.subscriber_count().await, 0);
    }

    #[test]
    fn event_wire_shape() {
        let ev = BusinessEvent::new(
            BusinessEventType::PtoConflict,
            AgentId::ResourceManagement,
            "Maria Garcia has 3 tasks due during her time off",
        );
        let json = serde_json::to_value(&ev).unwrap();
        assert_eq!(json["type"], "pto_conflict");
        assert_eq!(json["agent_id"], "resource_management");
        assert_eq!(
            json["message"],
            "Maria Garcia has 3 tasks due during her time off"
        );
        assert!(json["timestamp"].is_string());
    }
}
