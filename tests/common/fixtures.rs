#![allow(dead_code)]

use agentflow::graphs::{FlowGraph, FlowGraphBuilder};

/// `start -> agent -> end`.
pub fn linear_graph(role: &str) -> FlowGraph {
    FlowGraphBuilder::new()
        .add_start("start")
        .add_agent("agent", role)
        .add_end("end")
        .add_edge("start", "agent")
        .add_edge("agent", "end")
        .build()
}

/// `start -> cond -> {yes_end via "YES", no_end via "NO"}`.
pub fn branch_graph(role: &str) -> FlowGraph {
    FlowGraphBuilder::new()
        .add_start("start")
        .add_conditional("cond", role)
        .add_end("yes_end")
        .add_end("no_end")
        .add_edge("start", "cond")
        .add_branch("cond", "yes_end", "YES")
        .add_branch("cond", "no_end", "NO")
        .build()
}

/// `start -> a -> b -> a`: traversal revisits `a`.
pub fn cycle_graph() -> FlowGraph {
    FlowGraphBuilder::new()
        .add_start("start")
        .add_agent("a", "agent a")
        .add_agent("b", "agent b")
        .add_edge("start", "a")
        .add_edge("a", "b")
        .add_edge("b", "a")
        .build()
}

/// `start -> agent` with no edge out of the agent.
pub fn dead_end_graph() -> FlowGraph {
    FlowGraphBuilder::new()
        .add_start("start")
        .add_agent("agent", "stuck")
        .add_edge("start", "agent")
        .build()
}
