//! FlowGraphBuilder implementation for constructing flow graphs.
//!
//! This module contains the fluent API used by tests and embedders to
//! assemble the same graph structure the visual editor produces.

use super::edges::FlowEdge;
use super::graph::{FlowGraph, FlowNode};
use crate::types::{NodeId, NodeKind};

/// Builder for constructing flow graphs with a fluent API.
///
/// The builder mirrors what the visual editor emits: a set of typed nodes
/// and an ordered edge list. It performs no validation; the engine owns
/// run-time detection of structural problems (missing start, dead ends,
/// dangling edge targets) so that errors always name the offending node.
///
/// Edge ids are generated (`e0`, `e1`, ...) in declaration order unless the
/// caller supplies explicit edges via [`add_flow_edge`](Self::add_flow_edge).
///
/// # Examples
///
/// ```rust
/// use agentflow::graphs::FlowGraphBuilder;
///
/// let graph = FlowGraphBuilder::new()
///     .add_start("start")
///     .add_agent("summarize", "Summarize the input in one sentence")
///     .add_end("done")
///     .add_edge("start", "summarize")
///     .add_edge("summarize", "done")
///     .build();
///
/// assert_eq!(graph.node_count(), 3);
/// ```
///
/// ## Conditional Branching
///
/// ```rust
/// use agentflow::graphs::FlowGraphBuilder;
///
/// let graph = FlowGraphBuilder::new()
///     .add_start("start")
///     .add_conditional("triage", "Answer YES or NO: is this spam?")
///     .add_end("spam")
///     .add_end("inbox")
///     .add_edge("start", "triage")
///     .add_branch("triage", "spam", "YES")
///     .add_branch("triage", "inbox", "NO")
///     .build();
/// ```
#[derive(Default)]
pub struct FlowGraphBuilder {
    nodes: Vec<FlowNode>,
    edges: Vec<FlowEdge>,
}

impl FlowGraphBuilder {
    /// Creates a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a start node.
    #[must_use]
    pub fn add_start(self, id: impl Into<NodeId>) -> Self {
        self.add_node(FlowNode::new(id, NodeKind::Start, "Start"))
    }

    /// Adds an end node.
    #[must_use]
    pub fn add_end(self, id: impl Into<NodeId>) -> Self {
        self.add_node(FlowNode::new(id, NodeKind::End, "End"))
    }

    /// Adds an agent node with the given role text.
    #[must_use]
    pub fn add_agent(self, id: impl Into<NodeId>, role: impl Into<String>) -> Self {
        self.add_node(FlowNode::new(id, NodeKind::Agent, role))
    }

    /// Adds an agent node whose invocations request search augmentation.
    #[must_use]
    pub fn add_search_agent(self, id: impl Into<NodeId>, role: impl Into<String>) -> Self {
        self.add_node(FlowNode::new(id, NodeKind::Agent, role).with_search())
    }

    /// Adds a conditional agent node with the given role text.
    #[must_use]
    pub fn add_conditional(self, id: impl Into<NodeId>, role: impl Into<String>) -> Self {
        self.add_node(FlowNode::new(id, NodeKind::ConditionalAgent, role))
    }

    /// Adds a fully specified node.
    #[must_use]
    pub fn add_node(mut self, node: FlowNode) -> Self {
        self.nodes.push(node);
        self
    }

    /// Adds a plain edge between two nodes.
    #[must_use]
    pub fn add_edge(mut self, source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        let id = format!("e{}", self.edges.len());
        self.edges.push(FlowEdge::new(id, source, target));
        self
    }

    /// Adds a branch edge labeled with a keyword.
    ///
    /// Branches are matched against the source agent's output in the order
    /// they were added; the first match wins.
    #[must_use]
    pub fn add_branch(
        mut self,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        keyword: impl Into<String>,
    ) -> Self {
        let id = format!("e{}", self.edges.len());
        self.edges.push(FlowEdge::branch(id, source, target, keyword));
        self
    }

    /// Adds a fully specified edge, preserving its id.
    #[must_use]
    pub fn add_flow_edge(mut self, edge: FlowEdge) -> Self {
        self.edges.push(edge);
        self
    }

    /// Assembles the final immutable graph.
    #[must_use]
    pub fn build(self) -> FlowGraph {
        FlowGraph::from_parts(self.nodes, self.edges)
    }
}
