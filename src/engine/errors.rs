//! Failure taxonomy for flow runs.
//!
//! Every way a run can halt short of an end node maps to exactly one
//! [`FlowError`] variant, and every variant that can name a node does, so
//! callers can highlight exactly where execution stopped.

use miette::Diagnostic;
use thiserror::Error;

use crate::invoker::InvokerError;
use crate::types::NodeId;

/// Classified reason a run failed.
///
/// The engine never throws opaque errors: each failure halts the run
/// immediately and is surfaced through
/// [`RunStatus::Failed`](super::RunStatus) with the variant below. Retries
/// are a caller concern; the engine is stateless across runs and safe to
/// re-invoke after any of these.
#[derive(Debug, Error, Diagnostic)]
pub enum FlowError {
    /// The graph has no start node, more than one, or a non-conditional
    /// node fans out where a single path is required.
    #[error("invalid graph: {reason}")]
    #[diagnostic(
        code(agentflow::engine::invalid_graph),
        help("A runnable flow needs exactly one start node and a single outgoing edge per non-conditional node.")
    )]
    InvalidGraph {
        node_id: Option<NodeId>,
        reason: String,
    },

    /// The initial payload was blank.
    #[error("initial input is empty")]
    #[diagnostic(
        code(agentflow::engine::empty_input),
        help("Provide a non-blank initial payload before running the flow.")
    )]
    EmptyInput,

    /// A non-end node was reached a second time in the same run.
    #[error("cycle detected: node {node_id} was visited twice")]
    #[diagnostic(
        code(agentflow::engine::cycle_detected),
        help("Break the loop in the editor; the engine runs each node at most once.")
    )]
    CycleDetected { node_id: NodeId },

    /// A start or plain agent node has no outgoing edge.
    #[error("dead end at node {node_id}: no outgoing edge")]
    #[diagnostic(code(agentflow::engine::dead_end))]
    DeadEnd { node_id: NodeId },

    /// A conditional agent's output matched none of its branch keywords.
    #[error("no branch keyword matched the output of node {node_id}")]
    #[diagnostic(
        code(agentflow::engine::no_matching_branch),
        help("Branch keywords are case-insensitive substrings of the node's output; add a branch that the model's phrasing can hit.")
    )]
    NoMatchingBranch { node_id: NodeId },

    /// The invocation service rejected or errored for this node.
    #[error("agent invocation failed at node {node_id}: {source}")]
    #[diagnostic(code(agentflow::engine::invocation_failed))]
    AgentInvocationFailed {
        node_id: NodeId,
        #[source]
        #[diagnostic_source]
        source: InvokerError,
    },

    /// An edge references a nonexistent node, or routes into a start node.
    #[error("corrupt graph at node {node_id}: {detail}")]
    #[diagnostic(code(agentflow::engine::corrupt_graph))]
    CorruptGraph { node_id: NodeId, detail: String },

    /// The traversal safety bound was exhausted before reaching an end.
    #[error("flow exceeded the iteration bound after {steps} steps at node {node_id}")]
    #[diagnostic(
        code(agentflow::engine::flow_too_long),
        help("The bound is node_count + extra_iterations; raise it via EngineConfig if the flow is legitimately this long.")
    )]
    FlowTooLong { node_id: NodeId, steps: u64 },
}

impl FlowError {
    /// The node at which execution stopped, where one exists.
    #[must_use]
    pub fn node_id(&self) -> Option<&NodeId> {
        match self {
            FlowError::InvalidGraph { node_id, .. } => node_id.as_ref(),
            FlowError::EmptyInput => None,
            FlowError::CycleDetected { node_id }
            | FlowError::DeadEnd { node_id }
            | FlowError::NoMatchingBranch { node_id }
            | FlowError::AgentInvocationFailed { node_id, .. }
            | FlowError::CorruptGraph { node_id, .. }
            | FlowError::FlowTooLong { node_id, .. } => Some(node_id),
        }
    }

    /// Stable snake_case label for the variant, used in logs and events.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            FlowError::InvalidGraph { .. } => "invalid_graph",
            FlowError::EmptyInput => "empty_input",
            FlowError::CycleDetected { .. } => "cycle_detected",
            FlowError::DeadEnd { .. } => "dead_end",
            FlowError::NoMatchingBranch { .. } => "no_matching_branch",
            FlowError::AgentInvocationFailed { .. } => "agent_invocation_failed",
            FlowError::CorruptGraph { .. } => "corrupt_graph",
            FlowError::FlowTooLong { .. } => "flow_too_long",
        }
    }
}
