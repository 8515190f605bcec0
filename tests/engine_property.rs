#[macro_use]
extern crate proptest;

use proptest::prelude::{Strategy, prop};

// Generators shared by engine property tests

/// Generate payload text: printable ASCII with at least one
/// non-whitespace character.
fn payload_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~]{0,32}[!-~][ -~]{0,32}").unwrap()
}

/// Generate branch keywords: short alphanumeric tokens.
fn keyword_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z0-9]{0,8}").unwrap()
}

mod common;
use common::*;

use std::sync::Arc;

use agentflow::engine::{EngineConfig, FlowEngine, FlowError};
use agentflow::graphs::FlowGraphBuilder;
use proptest::prelude::any;

fn block_on<F: std::future::Future<Output = ()>>(fut: F) {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    rt.block_on(fut);
}

proptest! {
    /// Property: identical graph, input, and invoker responses produce
    /// identical event kinds, outputs, and step counts across runs.
    #[test]
    fn prop_runs_are_deterministic(payload in payload_strategy()) {
        block_on(async move {
            let graph = linear_graph("echo");
            let engine = FlowEngine::new(Arc::new(EchoInvoker));

            let first = engine.run(&graph, &payload).await;
            let second = engine.run(&graph, &payload).await;

            // The run-start info event embeds a fresh run id, so compare
            // everything after it.
            assert_eq!(event_kinds(&first)[1..], event_kinds(&second)[1..]);
            assert_eq!(first.output(), second.output());
            assert_eq!(first.steps(), second.steps());
        });
    }
}

proptest! {
    /// Property: a conditional node routes to the branch whose keyword the
    /// agent's output contains, regardless of case, and fails with
    /// NoMatchingBranch when no keyword appears.
    #[test]
    fn prop_branch_routing_matches_containment(
        keyword in keyword_strategy(),
        output in payload_strategy(),
        uppercase in any::<bool>(),
    ) {
        block_on(async move {
            let graph = FlowGraphBuilder::new()
                .add_start("start")
                .add_conditional("cond", "pick")
                .add_end("hit")
                .add_end("miss")
                .add_edge("start", "cond")
                .add_branch("cond", "hit", keyword.clone())
                .build();

            let spoken = if uppercase { output.to_uppercase() } else { output.clone() };
            let invoker = ScriptedInvoker::new().with_output("pick", spoken.clone());
            let engine = FlowEngine::new(Arc::new(invoker));
            let report = engine.run(&graph, "seed").await;

            let expect_match = spoken.to_lowercase().contains(&keyword.to_lowercase());
            if expect_match {
                assert_eq!(report.output(), Some(spoken.as_str()));
            } else {
                let err = assert_failed_at(&report, "cond");
                assert!(matches!(err, FlowError::NoMatchingBranch { .. }));
            }
        });
    }
}

proptest! {
    /// Property: every run halts within node_count + extra_iterations
    /// steps, whatever the graph shape.
    #[test]
    fn prop_step_count_is_bounded(
        chain_len in 1usize..8,
        close_the_loop in any::<bool>(),
        extra in 0usize..16,
    ) {
        block_on(async move {
            let mut builder = FlowGraphBuilder::new().add_start("start");
            let mut prev = "start".to_string();
            for i in 0..chain_len {
                let id = format!("agent{i}");
                builder = builder.add_agent(id.clone(), "step").add_edge(prev, id.clone());
                prev = id;
            }
            builder = if close_the_loop {
                builder.add_edge(prev, "agent0")
            } else {
                builder.add_end("end").add_edge(prev, "end")
            };
            let graph = builder.build();

            let config = EngineConfig {
                extra_iterations: extra,
                ..EngineConfig::default()
            };
            let engine = FlowEngine::new(Arc::new(EchoInvoker)).with_config(config);
            let report = engine.run(&graph, "seed").await;

            let bound = (graph.node_count() + extra) as u64;
            assert!(report.steps() <= bound, "took {} steps, bound {}", report.steps(), bound);
            if close_the_loop {
                assert!(report.error().is_some());
            } else {
                assert_eq!(report.output(), Some("seed"));
            }
        });
    }
}

proptest! {
    /// Property: whitespace-only input always fails with EmptyInput and
    /// never reaches the invoker.
    #[test]
    fn prop_blank_input_never_runs(blank in prop::string::string_regex("[ \\t\\n]{0,16}").unwrap()) {
        block_on(async move {
            let invoker = Arc::new(RecordingInvoker::new());
            let engine = FlowEngine::new(invoker.clone());
            let report = engine.run(&linear_graph("echo"), &blank).await;

            assert!(matches!(report.error(), Some(FlowError::EmptyInput)));
            assert!(invoker.calls().is_empty());
        });
    }
}
