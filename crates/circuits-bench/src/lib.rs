//! Graph generator, invariant checkers and benchmark utilities for
//! `circuits-core`.
//!
//! Everything here is deterministic: the same [`GeneratorConfig`] always
//! yields the same graph, so benchmark runs and property tests are
//! reproducible.

use circuits_core::AdjacencyList;
use petgraph::graph::{DiGraph, NodeIndex};

pub mod correctness;
pub mod generator;

pub use generator::{GeneratedGraph, GeneratorConfig, SizeTier, complete_digraph, generate_graph};

/// Copies `graph` into a petgraph `DiGraph` with the same vertex indices.
///
/// Used as the baseline input for `petgraph::algo::tarjan_scc`.
pub fn to_petgraph(graph: &AdjacencyList) -> DiGraph<(), ()> {
    let mut g = DiGraph::with_capacity(graph.len(), graph.edge_count());
    let nodes: Vec<NodeIndex> = (0..graph.len()).map(|_| g.add_node(())).collect();
    for (v, successors) in graph.iter() {
        for &w in successors {
            g.add_edge(nodes[v], nodes[w], ());
        }
    }
    g
}
