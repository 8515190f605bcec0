use std::sync::Arc;
use std::time::Duration;

use agentflow::engine::FlowEngine;
use agentflow::event_bus::{
    ChannelSink, EventBus, EventEmitter, EventHub, FlowEvent, FlowEventKind, MemorySink,
};
use agentflow::types::NodeId;
use tokio::sync::mpsc;
use tokio::time::sleep;

mod common;
use common::*;

#[tokio::test]
async fn bus_fans_events_out_to_all_sinks() {
    let memory_a = MemorySink::new();
    let memory_b = MemorySink::new();
    let bus = EventBus::with_sinks(vec![
        Box::new(memory_a.clone()),
        Box::new(memory_b.clone()),
    ]);
    bus.listen_for_events();

    let sender = bus.get_sender();
    sender.send(FlowEvent::info("one")).unwrap();
    sender.send(FlowEvent::info("two")).unwrap();

    sleep(Duration::from_millis(50)).await;
    assert_eq!(memory_a.snapshot().len(), 2);
    assert_eq!(memory_b.snapshot().len(), 2);

    bus.stop_listener().await;
}

#[tokio::test]
async fn channel_sink_forwards_to_async_consumers() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let bus = EventBus::with_sink(ChannelSink::new(tx));
    bus.listen_for_events();

    bus.get_sender()
        .send(FlowEvent::node_info(NodeId::from("n1"), "hello"))
        .unwrap();

    let event = tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("event within timeout")
        .expect("channel open");
    assert_eq!(event.node_id().map(|id| id.as_str()), Some("n1"));

    bus.stop_listener().await;
}

#[tokio::test]
async fn listen_for_events_is_idempotent() {
    let memory = MemorySink::new();
    let bus = EventBus::with_sink(memory.clone());
    bus.listen_for_events();
    bus.listen_for_events(); // second call must not double-deliver

    bus.get_sender().send(FlowEvent::info("once")).unwrap();
    sleep(Duration::from_millis(50)).await;
    assert_eq!(memory.snapshot().len(), 1);

    bus.stop_listener().await;
}

#[tokio::test]
async fn engine_forwards_events_through_the_bus() {
    let memory = MemorySink::new();
    let bus = EventBus::with_sink(memory.clone());
    bus.listen_for_events();

    let engine =
        FlowEngine::new(Arc::new(EchoInvoker)).with_emitter(Arc::new(bus.get_emitter()));
    let graph = linear_graph("echo");
    let report = engine.run(&graph, "hi").await;

    sleep(Duration::from_millis(50)).await;
    let seen = memory.snapshot();
    // Sinks observe exactly the report's event log, in order.
    assert_eq!(seen.len(), report.events().len());
    assert_eq!(
        seen.iter().map(|e| e.label()).collect::<Vec<_>>(),
        report.events().iter().map(|e| e.label()).collect::<Vec<_>>()
    );

    bus.stop_listener().await;
}

#[tokio::test]
async fn hub_subscribers_see_the_run_as_a_stream() {
    let hub = EventHub::new(64);
    let mut stream = hub.subscribe();

    let engine = FlowEngine::new(Arc::new(EchoInvoker)).with_emitter(Arc::new(hub.emitter()));
    let graph = linear_graph("echo");
    let report = engine.run(&graph, "hi").await;
    assert!(report.status().is_completed());

    let mut labels = Vec::new();
    while let Some(event) = stream.next_timeout(Duration::from_millis(100)).await {
        let done = matches!(event.kind, FlowEventKind::Completed { .. });
        labels.push(event.label());
        if done {
            break;
        }
    }
    assert_eq!(labels, vec!["info", "processing", "node_output", "completed"]);
}

#[tokio::test]
async fn hub_async_stream_adapter_yields_events() {
    use futures_util::StreamExt;

    let hub = EventHub::new(8);
    let stream = hub.subscribe();

    hub.publish(FlowEvent::info("a")).unwrap();
    hub.publish(FlowEvent::completed("done")).unwrap();

    let events: Vec<FlowEvent> = stream.into_async_stream().take(2).collect().await;
    assert_eq!(events.len(), 2);
    assert!(matches!(
        events[1].kind,
        FlowEventKind::Completed { .. }
    ));
}

#[tokio::test]
async fn emitter_failure_does_not_affect_the_run() {
    #[derive(Debug)]
    struct ClosedEmitter;
    impl EventEmitter for ClosedEmitter {
        fn emit(
            &self,
            _event: FlowEvent,
        ) -> Result<(), agentflow::event_bus::EmitterError> {
            Err(agentflow::event_bus::EmitterError::Closed)
        }
    }

    let engine = FlowEngine::new(Arc::new(EchoInvoker)).with_emitter(Arc::new(ClosedEmitter));
    let report = engine.run(&linear_graph("echo"), "hi").await;

    assert_eq!(report.output(), Some("hi"));
    assert_eq!(report.events().len(), 4);
}

#[test]
fn event_json_has_the_normalized_shape() {
    let event = FlowEvent::node_output(
        NodeId::from("research"),
        "summary",
        vec![agentflow::invoker::Citation::new("https://x.test", "X")],
    );
    let json = event.to_json_value();

    assert_eq!(json["type"], "node_output");
    assert_eq!(json["node_id"], "research");
    assert_eq!(json["message"], "summary");
    assert_eq!(json["citations"][0]["uri"], "https://x.test");
    assert!(json["timestamp"].is_string());

    let completed = FlowEvent::completed("final");
    let json = completed.to_json_value();
    assert_eq!(json["type"], "completed");
    assert!(json["node_id"].is_null());
}
