//! # Agentflow: Flow Execution Engine for Agent Pipelines
//!
//! Agentflow executes directed graphs of AI-agent steps as a pipeline: a
//! single text payload travels node-to-node, each agent node transforms it
//! through one language-model invocation, and conditional nodes branch by
//! matching keywords against the model's output.
//!
//! ## Core Concepts
//!
//! - **Graph**: an immutable-per-run snapshot of typed nodes and ordered
//!   edges, built with [`graphs::FlowGraphBuilder`]
//! - **Invoker**: the language-model client, injected as the
//!   [`invoker::AgentInvoker`] trait so runs are deterministic under test
//! - **Engine**: [`engine::FlowEngine`] walks the graph sequentially and
//!   classifies every failure with the node at which it stopped
//! - **Events**: typed [`event_bus::FlowEvent`]s stream to sinks and
//!   subscribers; the presentation layer consumes events, never engine
//!   internals
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use agentflow::engine::FlowEngine;
//! use agentflow::graphs::FlowGraphBuilder;
//! use agentflow::invoker::{AgentReply, FnInvoker};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let graph = FlowGraphBuilder::new()
//!     .add_start("start")
//!     .add_conditional("triage", "Reply APPROVE or REJECT")
//!     .add_end("approved")
//!     .add_end("rejected")
//!     .add_edge("start", "triage")
//!     .add_branch("triage", "approved", "APPROVE")
//!     .add_branch("triage", "rejected", "REJECT")
//!     .build();
//!
//! let invoker = FnInvoker::new(|_role, _input, _search| {
//!     let reply = AgentReply::text("Decision: APPROVE");
//!     async move { Ok(reply) }
//! });
//!
//! let engine = FlowEngine::new(Arc::new(invoker));
//! let report = engine.run(&graph, "please review").await;
//! assert_eq!(report.output(), Some("Decision: APPROVE"));
//! # }
//! ```
//!
//! ## Observing a Run
//!
//! Subscribe before running to consume the event sequence live:
//!
//! ```rust
//! use std::sync::Arc;
//! use agentflow::engine::FlowEngine;
//! use agentflow::event_bus::EventHub;
//! use agentflow::graphs::FlowGraphBuilder;
//! use agentflow::invoker::{AgentReply, FnInvoker};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let hub = EventHub::new(64);
//! let mut stream = hub.subscribe();
//!
//! let graph = FlowGraphBuilder::new()
//!     .add_start("start")
//!     .add_agent("echo", "Echo the input")
//!     .add_end("done")
//!     .add_edge("start", "echo")
//!     .add_edge("echo", "done")
//!     .build();
//!
//! let invoker = FnInvoker::new(|_role, input: &str, _search| {
//!     let reply = AgentReply::text(input);
//!     async move { Ok(reply) }
//! });
//!
//! let engine = FlowEngine::new(Arc::new(invoker)).with_emitter(Arc::new(hub.emitter()));
//! let report = engine.run(&graph, "hi").await;
//!
//! // The run log mirrors what subscribers saw.
//! assert!(report.status().is_completed());
//! while let Ok(event) = stream.try_recv() {
//!     println!("{event}");
//! }
//! # }
//! ```
//!
//! ## Module Guide
//!
//! - [`types`] - Node identifiers and kinds
//! - [`graphs`] - Graph structure and builder
//! - [`invoker`] - Agent invocation service trait and adapters
//! - [`engine`] - Traversal, branching, failure taxonomy, run reports
//! - [`event_bus`] - Event types, sinks, and subscriber streams
//! - [`telemetry`] - Formatters and tracing setup

pub mod engine;
pub mod event_bus;
pub mod graphs;
pub mod invoker;
pub mod telemetry;
pub mod types;
