#![allow(dead_code)]

use agentflow::engine::{FlowError, RunReport};
use agentflow::event_bus::FlowEventKind;

/// The event discriminant labels, in emission order.
pub fn event_labels(report: &RunReport) -> Vec<&'static str> {
    report.events().iter().map(|e| e.label()).collect()
}

/// The event kinds, in emission order, for determinism comparisons that
/// should ignore timestamps.
pub fn event_kinds(report: &RunReport) -> Vec<FlowEventKind> {
    report.events().iter().map(|e| e.kind.clone()).collect()
}

/// Assert the run failed, with the failure at the given node.
pub fn assert_failed_at<'a>(report: &'a RunReport, node_id: &str) -> &'a FlowError {
    let err = report
        .error()
        .unwrap_or_else(|| panic!("expected a failed run, got {:?}", report.status()));
    assert_eq!(
        err.node_id().map(|id| id.as_str()),
        Some(node_id),
        "unexpected failing node for {err}"
    );
    err
}

/// Assert the final event is an `Error` event naming the given node.
pub fn assert_error_event_last(report: &RunReport, node_id: &str) {
    let last = report.events().last().expect("run emitted no events");
    match &last.kind {
        FlowEventKind::Error { node_id: id, .. } => {
            assert_eq!(id.as_ref().map(|n| n.as_str()), Some(node_id));
        }
        other => panic!("expected trailing error event, got {other:?}"),
    }
}
