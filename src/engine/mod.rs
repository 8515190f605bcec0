//! Flow execution engine: traversal, branching, and failure taxonomy.
//!
//! This is the core of the crate. A [`FlowEngine`] walks a
//! [`FlowGraph`](crate::graphs::FlowGraph) from its start node, carrying a
//! single text payload: each agent node transforms the payload through one
//! awaited call to the injected
//! [`AgentInvoker`](crate::invoker::AgentInvoker), and each conditional
//! agent picks its outgoing edge by keyword match against its own output.
//!
//! # Guarantees
//!
//! - **Exactly one terminal outcome** per run: `Completed` with the end
//!   node's payload, or `Failed` with a [`FlowError`] naming the node at
//!   which execution stopped.
//! - **Immediate halt on failure**: no partial continuation, no automatic
//!   retries. Re-running is always safe; the engine keeps no state between
//!   runs.
//! - **Determinism**: the traversal path and event sequence are a pure
//!   function of the graph, the input, and the invoker's responses.
//! - **Bounded**: cycle detection rejects any second visit to a non-end
//!   node, and a hard iteration bound of `node_count + extra_iterations`
//!   backstops pathological graphs.

mod config;
mod errors;
mod report;
mod runner;

pub use config::{EngineConfig, MultiEdgePolicy};
pub use errors::FlowError;
pub use report::{RunReport, RunStatus};
pub use runner::FlowEngine;
