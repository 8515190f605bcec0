//! Flow graph definition for agent pipeline execution.
//!
//! This module provides the graph structure consumed by the
//! [`FlowEngine`](crate::engine::FlowEngine): typed nodes, an ordered edge
//! list, and a fluent [`FlowGraphBuilder`] mirroring what the visual editor
//! produces.
//!
//! # Core Concepts
//!
//! - **Nodes**: one [`FlowNode`] per step, classified by
//!   [`NodeKind`](crate::types::NodeKind)
//! - **Edges**: [`FlowEdge`] connections; branch edges carry a keyword
//! - **Declaration order**: edges keep their creation order, which is the
//!   documented tie-break for conditional branch matching
//! - **No edit-time validation**: structural problems are detected by the
//!   engine at run time and reported with the failing node id
//!
//! # Quick Start
//!
//! ```rust
//! use agentflow::graphs::FlowGraphBuilder;
//!
//! let graph = FlowGraphBuilder::new()
//!     .add_start("start")
//!     .add_agent("rewrite", "Rewrite the input in formal English")
//!     .add_end("done")
//!     .add_edge("start", "rewrite")
//!     .add_edge("rewrite", "done")
//!     .build();
//! ```

mod builder;
mod edges;
mod graph;

pub use builder::FlowGraphBuilder;
pub use edges::FlowEdge;
pub use graph::{FlowGraph, FlowNode};
