//! The flow execution engine: graph traversal, branch resolution, and
//! failure classification.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use tracing::instrument;
use uuid::Uuid;

use super::config::{EngineConfig, MultiEdgePolicy};
use super::errors::FlowError;
use super::report::{RunReport, RunStatus};
use crate::event_bus::{EventEmitter, FlowEvent};
use crate::graphs::{FlowEdge, FlowGraph, FlowNode};
use crate::invoker::AgentInvoker;
use crate::types::NodeKind;

/// Executes flow graphs against an injected [`AgentInvoker`].
///
/// The engine owns nothing mutable between runs: each call to
/// [`run`](Self::run) builds its own run state, walks the graph node by
/// node, and produces an immutable [`RunReport`]. Given the same graph,
/// input, and invoker responses, two runs produce identical event
/// sequences; the only nondeterminism enters through the invoker.
///
/// Traversal is strictly sequential. Each node's input is the previous
/// node's output, so at most one invocation is in flight per run, and the
/// invocation await is the engine's only suspension point. Callers may
/// cancel cooperatively by dropping the run future between awaits.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use agentflow::engine::FlowEngine;
/// use agentflow::graphs::FlowGraphBuilder;
/// use agentflow::invoker::{AgentReply, FnInvoker};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let graph = FlowGraphBuilder::new()
///     .add_start("start")
///     .add_agent("shout", "Uppercase the input")
///     .add_end("done")
///     .add_edge("start", "shout")
///     .add_edge("shout", "done")
///     .build();
///
/// let invoker = FnInvoker::new(|_role, input: &str, _search| {
///     let reply = AgentReply::text(input.to_uppercase());
///     async move { Ok(reply) }
/// });
///
/// let engine = FlowEngine::new(Arc::new(invoker));
/// let report = engine.run(&graph, "hello").await;
/// assert_eq!(report.output(), Some("HELLO"));
/// # }
/// ```
pub struct FlowEngine {
    invoker: Arc<dyn AgentInvoker>,
    config: EngineConfig,
    emitter: Option<Arc<dyn EventEmitter>>,
}

impl FlowEngine {
    /// Create an engine with default configuration and no event emitter.
    ///
    /// Events are always collected into the [`RunReport`]; an emitter only
    /// adds live forwarding (see [`with_emitter`](Self::with_emitter)).
    #[must_use]
    pub fn new(invoker: Arc<dyn AgentInvoker>) -> Self {
        Self {
            invoker,
            config: EngineConfig::default(),
            emitter: None,
        }
    }

    /// Replace the engine configuration.
    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Forward events to `emitter` as they are produced, in addition to
    /// logging them in the report. Emitter failures never affect the run.
    #[must_use]
    pub fn with_emitter(mut self, emitter: Arc<dyn EventEmitter>) -> Self {
        self.emitter = Some(emitter);
        self
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Execute the graph with the given initial payload.
    ///
    /// Never panics and never returns early: every outcome, including
    /// structural problems detected mid-walk, is classified into the
    /// report's [`RunStatus`]. The event log ends with exactly one
    /// `Completed` or `Error` event mirroring the status.
    #[instrument(skip(self, graph, input), fields(nodes = graph.node_count()))]
    pub async fn run(&self, graph: &FlowGraph, input: &str) -> RunReport {
        let run_id = Uuid::new_v4();
        let mut events = Vec::new();
        let mut steps = 0u64;

        tracing::info!(%run_id, "flow run started");
        self.emit(&mut events, FlowEvent::info(format!("run {run_id} started")));

        match self.traverse(graph, input, &mut events, &mut steps).await {
            Ok(output) => {
                self.emit(&mut events, FlowEvent::completed(output.clone()));
                tracing::info!(%run_id, steps, "flow run completed");
                RunReport::new(run_id, RunStatus::Completed { output }, events, steps)
            }
            Err(err) => {
                self.emit(
                    &mut events,
                    FlowEvent::error(err.node_id().cloned(), err.to_string()),
                );
                tracing::warn!(%run_id, steps, error = %err, "flow run failed");
                RunReport::new(run_id, RunStatus::Failed(err), events, steps)
            }
        }
    }

    /// Like [`run`](Self::run), but surfaces the failure as `Err` and
    /// discards the event log.
    pub async fn run_checked(&self, graph: &FlowGraph, input: &str) -> Result<String, FlowError> {
        self.run(graph, input).await.into_result()
    }

    /// The traversal loop. Returns the final payload on success; any
    /// failure halts immediately with its classification.
    async fn traverse(
        &self,
        graph: &FlowGraph,
        input: &str,
        events: &mut Vec<FlowEvent>,
        steps: &mut u64,
    ) -> Result<String, FlowError> {
        // Fail fast before any node is visited.
        let start = Self::sole_start_node(graph)?;
        if input.trim().is_empty() {
            return Err(FlowError::EmptyInput);
        }

        let bound = self.config.iteration_bound(graph.node_count());
        let mut current = start.id.clone();
        let mut payload = input.to_string();
        let mut visited = FxHashSet::default();

        loop {
            if *steps >= bound {
                return Err(FlowError::FlowTooLong {
                    node_id: current,
                    steps: *steps,
                });
            }
            *steps += 1;

            let node = graph
                .node(&current)
                .ok_or_else(|| FlowError::CorruptGraph {
                    node_id: current.clone(),
                    detail: "current node is missing from the graph".to_string(),
                })?;

            // A second visit to any non-end node is fatal, regardless of
            // payload content.
            if !visited.insert(node.id.clone()) && !node.kind.is_end() {
                return Err(FlowError::CycleDetected { node_id: current });
            }

            if node.kind.is_end() {
                return Ok(payload);
            }

            if node.kind.is_agent() {
                self.emit(events, FlowEvent::processing(node.id.clone(), node.role.clone()));
                let reply = self
                    .invoker
                    .invoke(&node.role, &payload, node.use_search)
                    .await
                    .map_err(|source| FlowError::AgentInvocationFailed {
                        node_id: node.id.clone(),
                        source,
                    })?;
                payload = reply.text.clone();
                self.emit(
                    events,
                    FlowEvent::node_output(node.id.clone(), reply.text, reply.citations),
                );
            }

            let edge = if node.kind == NodeKind::ConditionalAgent {
                self.select_branch(graph, node, &payload)?
            } else {
                self.select_single_edge(graph, node)?
            };

            let target = graph
                .node(&edge.target)
                .ok_or_else(|| FlowError::CorruptGraph {
                    node_id: node.id.clone(),
                    detail: format!("edge {} targets unknown node {}", edge.id, edge.target),
                })?;
            if target.kind.is_start() {
                return Err(FlowError::CorruptGraph {
                    node_id: node.id.clone(),
                    detail: format!("edge {} routes into start node {}", edge.id, target.id),
                });
            }

            current = target.id.clone();
        }
    }

    /// Resolve the single start node, or classify the graph as invalid.
    fn sole_start_node(graph: &FlowGraph) -> Result<&FlowNode, FlowError> {
        let starts = graph.start_nodes();
        match starts.as_slice() {
            [start] => Ok(start),
            [] => Err(FlowError::InvalidGraph {
                node_id: None,
                reason: "no start node".to_string(),
            }),
            many => Err(FlowError::InvalidGraph {
                node_id: None,
                reason: format!("{} start nodes, expected exactly one", many.len()),
            }),
        }
    }

    /// Resolve the single outgoing edge of a start or plain agent node.
    fn select_single_edge<'g>(
        &self,
        graph: &'g FlowGraph,
        node: &'g FlowNode,
    ) -> Result<&'g FlowEdge, FlowError> {
        let mut outgoing = graph.edges_from(&node.id);
        let Some(first) = outgoing.next() else {
            return Err(FlowError::DeadEnd {
                node_id: node.id.clone(),
            });
        };
        if outgoing.next().is_some() {
            match self.config.multi_edge_policy {
                MultiEdgePolicy::Reject => {
                    return Err(FlowError::InvalidGraph {
                        node_id: Some(node.id.clone()),
                        reason: format!(
                            "non-conditional node {} has multiple outgoing edges",
                            node.id
                        ),
                    });
                }
                MultiEdgePolicy::FirstEdge => {
                    tracing::warn!(
                        node = %node.id,
                        edge = %first.id,
                        "multiple outgoing edges; following the first declared edge"
                    );
                }
            }
        }
        Ok(first)
    }

    /// Select the first declared branch whose keyword matches the output.
    ///
    /// First-declared wins when several keywords match; this tie-break is
    /// part of the engine's contract, not an accident of iteration order.
    fn select_branch<'g>(
        &self,
        graph: &'g FlowGraph,
        node: &'g FlowNode,
        output: &str,
    ) -> Result<&'g FlowEdge, FlowError> {
        for edge in graph.edges_from(&node.id) {
            if edge.matches(output) {
                tracing::debug!(
                    node = %node.id,
                    edge = %edge.id,
                    keyword = edge.keyword.as_deref().unwrap_or_default(),
                    "branch keyword matched"
                );
                return Ok(edge);
            }
        }
        Err(FlowError::NoMatchingBranch {
            node_id: node.id.clone(),
        })
    }

    /// Append the event to the run log and forward it to the emitter.
    fn emit(&self, events: &mut Vec<FlowEvent>, event: FlowEvent) {
        if let Some(emitter) = &self.emitter {
            if let Err(err) = emitter.emit(event.clone()) {
                tracing::debug!(error = %err, "event emitter rejected event");
            }
        }
        events.push(event);
    }
}
