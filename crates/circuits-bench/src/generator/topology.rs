//! Topology strategies: dense clusters, acyclic bridges, self-loops, and
//! optional index shuffling.

use circuits_core::{AdjacencyList, CycleError};
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::{GeneratedGraph, GeneratorConfig};

/// Builds the full graph described by `config`.
///
/// # Errors
///
/// Returns the [`CycleError`] from [`AdjacencyList::from_edges`] if a
/// strategy emits an edge outside the vertex range.
pub fn build_clustered_graph(
    config: &GeneratorConfig,
    rng: &mut StdRng,
) -> Result<GeneratedGraph, CycleError> {
    let n = config.vertices;
    let cluster_size = config.cluster_size.max(1);

    // Positions are laid out cluster by cluster; `index[p]` is the vertex
    // index assigned to position `p`.
    let mut index: Vec<usize> = (0..n).collect();
    if config.shuffle {
        index.shuffle(rng);
    }

    let mut cluster = vec![0; n];
    for (position, &v) in index.iter().enumerate() {
        cluster[v] = position / cluster_size;
    }

    let mut edges: Vec<(usize, usize)> = Vec::new();
    build_cluster_edges(rng, &index, cluster_size, config.cluster_density, &mut edges);
    build_bridges(rng, &index, cluster_size, config.bridges, &mut edges);
    build_self_loops(rng, n, config.self_loop_probability, &mut edges);

    let graph = AdjacencyList::from_edges(n, &edges)?;
    Ok(GeneratedGraph { graph, cluster })
}

/// Adds a Hamiltonian ring to every cluster, so each one is strongly
/// connected, then sprinkles chords with probability `density`.
fn build_cluster_edges(
    rng: &mut StdRng,
    index: &[usize],
    cluster_size: usize,
    density: f64,
    edges: &mut Vec<(usize, usize)>,
) {
    let density = density.clamp(0.0, 1.0);
    for members in index.chunks(cluster_size) {
        if members.len() < 2 {
            continue;
        }
        for (i, &from) in members.iter().enumerate() {
            edges.push((from, members[(i + 1) % members.len()]));
        }
        for &from in members {
            for &to in members {
                if from != to && rng.gen_bool(density) {
                    edges.push((from, to));
                }
            }
        }
    }
}

/// Adds `count` edges, each from a vertex in an earlier cluster to one in a
/// strictly later cluster. These never close a cycle.
fn build_bridges(
    rng: &mut StdRng,
    index: &[usize],
    cluster_size: usize,
    count: usize,
    edges: &mut Vec<(usize, usize)>,
) {
    let n = index.len();
    if n <= cluster_size {
        return;
    }
    for _ in 0..count {
        let from_pos = rng.gen_range(0..n - cluster_size);
        let first_later = (from_pos / cluster_size + 1) * cluster_size;
        let to_pos = rng.gen_range(first_later..n);
        edges.push((index[from_pos], index[to_pos]));
    }
}

fn build_self_loops(rng: &mut StdRng, n: usize, probability: f64, edges: &mut Vec<(usize, usize)>) {
    let probability = probability.clamp(0.0, 1.0);
    if probability == 0.0 {
        return;
    }
    for v in 0..n {
        if rng.gen_bool(probability) {
            edges.push((v, v));
        }
    }
}
