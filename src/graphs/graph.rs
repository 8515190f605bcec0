//! Immutable flow graph snapshot consumed by the engine.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::edges::FlowEdge;
use crate::types::{NodeId, NodeKind};

/// A single node in a flow graph.
///
/// Agent nodes carry the role text passed to the invocation service and a
/// flag requesting search augmentation. Start and end nodes keep their
/// `role` as free-form description text; the engine never sends it anywhere.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowNode {
    /// Unique identifier within the graph.
    pub id: NodeId,
    /// What the engine does when traversal reaches this node.
    pub kind: NodeKind,
    /// Role/instruction text for agents, description text otherwise.
    pub role: String,
    /// Whether agent invocations should request search augmentation.
    pub use_search: bool,
}

impl FlowNode {
    pub fn new(id: impl Into<NodeId>, kind: NodeKind, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            role: role.into(),
            use_search: false,
        }
    }

    /// Enable search augmentation for this node's invocations.
    #[must_use]
    pub fn with_search(mut self) -> Self {
        self.use_search = true;
        self
    }
}

/// An immutable-per-run snapshot of a composed flow.
///
/// The graph is produced by the editor (or [`FlowGraphBuilder`] in code)
/// and handed to the engine, which only reads it. Structural problems are
/// deliberately not rejected here: the editor is expected to prevent most
/// of them, and whatever slips through is detected and classified by the
/// engine at run time so the caller learns exactly which node is at fault.
///
/// Edge declaration order is preserved; it is the documented tie-break for
/// conditional branches whose keywords both match.
///
/// [`FlowGraphBuilder`]: super::FlowGraphBuilder
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FlowGraph {
    nodes: FxHashMap<NodeId, FlowNode>,
    /// All edges, in declaration order.
    edges: Vec<FlowEdge>,
}

impl FlowGraph {
    /// Assemble a graph from parts. Later nodes with a duplicate id
    /// overwrite earlier ones, mirroring editor behavior where a node id
    /// exists once.
    pub fn from_parts(nodes: Vec<FlowNode>, edges: Vec<FlowEdge>) -> Self {
        let nodes = nodes.into_iter().map(|n| (n.id.clone(), n)).collect();
        Self { nodes, edges }
    }

    /// Look up a node by id.
    #[must_use]
    pub fn node(&self, id: &NodeId) -> Option<&FlowNode> {
        self.nodes.get(id)
    }

    /// Number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate over all nodes (arbitrary order).
    pub fn nodes(&self) -> impl Iterator<Item = &FlowNode> {
        self.nodes.values()
    }

    /// All nodes of kind [`NodeKind::Start`].
    ///
    /// A well-formed graph has exactly one; the engine reports
    /// anything else as an invalid graph rather than guessing.
    pub fn start_nodes(&self) -> Vec<&FlowNode> {
        let mut starts: Vec<&FlowNode> = self
            .nodes
            .values()
            .filter(|n| n.kind.is_start())
            .collect();
        // Node storage is a hash map; sort for a stable report order.
        starts.sort_by(|a, b| a.id.as_str().cmp(b.id.as_str()));
        starts
    }

    /// Outgoing edges of a node, in declaration order.
    pub fn edges_from<'a>(&'a self, id: &'a NodeId) -> impl Iterator<Item = &'a FlowEdge> {
        self.edges.iter().filter(move |e| &e.source == id)
    }

    /// All edges, in declaration order.
    #[must_use]
    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }
}
