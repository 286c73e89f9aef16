//! Directed graph generator.
//!
//! Produces graphs whose strongly connected components are small, dense
//! clusters joined by acyclic bridge edges. Every elementary cycle therefore
//! stays inside one cluster, which keeps the cycle count bounded no matter
//! how many vertices a tier has.

pub mod topology;

use circuits_core::{AdjacencyList, CycleError};
use rand::SeedableRng;
use rand::rngs::StdRng;

use topology::build_clustered_graph;

/// Configuration for the graph generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Total number of vertices.
    pub vertices: usize,
    /// Vertices per cluster; the last cluster may be smaller.
    pub cluster_size: usize,
    /// Probability of each ordered pair inside a cluster being an edge.
    pub cluster_density: f64,
    /// Number of bridge edges, each from a lower cluster to a higher one.
    pub bridges: usize,
    /// Probability of a self-loop on each vertex.
    pub self_loop_probability: f64,
    /// Randomly permute vertex indices so clusters are not contiguous.
    pub shuffle: bool,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 60 vertices in clusters of 4
    Small,
    /// 600 vertices in clusters of 5
    Medium,
    /// 3000 vertices in clusters of 6
    Large,
    /// 10000 vertices in clusters of 6
    XLarge,
}

impl SizeTier {
    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let (vertices, cluster_size) = match self {
            SizeTier::Small => (60, 4),
            SizeTier::Medium => (600, 5),
            SizeTier::Large => (3_000, 6),
            SizeTier::XLarge => (10_000, 6),
        };
        GeneratorConfig {
            seed,
            vertices,
            cluster_size,
            cluster_density: 0.5,
            bridges: vertices,
            self_loop_probability: 0.0,
            shuffle: true,
        }
    }
}

/// A generated graph together with the cluster each vertex was placed in.
#[derive(Debug, Clone)]
pub struct GeneratedGraph {
    /// The graph itself.
    pub graph: AdjacencyList,
    /// `cluster[v]` is the cluster index of vertex `v`.
    pub cluster: Vec<usize>,
}

/// Generates a clustered graph from the given configuration.
///
/// All randomness is deterministic, seeded from `config.seed`.
///
/// # Errors
///
/// Returns a [`CycleError`] if a topology strategy produced an edge outside
/// the vertex range.
pub fn generate_graph(config: &GeneratorConfig) -> Result<GeneratedGraph, CycleError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    build_clustered_graph(config, &mut rng)
}

/// The complete digraph on `n` vertices, without self-loops.
///
/// # Errors
///
/// Returns [`CycleError::GraphTooLarge`] if `n` vertices cannot be allocated.
pub fn complete_digraph(n: usize) -> Result<AdjacencyList, CycleError> {
    let edges: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| (0..n).filter(move |&j| j != i).map(move |j| (i, j)))
        .collect();
    AdjacencyList::from_edges(n, &edges)
}
