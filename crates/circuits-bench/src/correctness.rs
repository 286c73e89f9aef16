//! Post-operation invariant checkers for correctness validation.

use std::collections::HashSet;

use circuits_core::{AdjacencyList, SccResult};

/// Verifies enumeration output:
/// - every cycle is non-empty and starts at its smallest vertex
/// - no vertex repeats inside a cycle
/// - every consecutive pair, including the closing pair, is a real edge
/// - no cycle is reported twice
pub fn check_cycle_invariants(graph: &AdjacencyList, cycles: &[Vec<usize>]) -> Result<(), String> {
    let mut seen: HashSet<&[usize]> = HashSet::with_capacity(cycles.len());
    for (i, cycle) in cycles.iter().enumerate() {
        let Some(&first) = cycle.first() else {
            return Err(format!("cycle {i} is empty"));
        };
        if cycle.iter().any(|&v| v < first) {
            return Err(format!("cycle {i} {cycle:?} does not start at its smallest vertex"));
        }
        let unique: HashSet<usize> = cycle.iter().copied().collect();
        if unique.len() != cycle.len() {
            return Err(format!("cycle {i} {cycle:?} repeats a vertex"));
        }
        let closing = cycle.iter().skip(1).chain(std::iter::once(&first));
        for (&from, &to) in cycle.iter().zip(closing) {
            if !graph.has_edge(from, to) {
                return Err(format!("cycle {i} {cycle:?} uses missing edge {from} -> {to}"));
            }
        }
        if !seen.insert(cycle.as_slice()) {
            return Err(format!("cycle {i} {cycle:?} reported twice"));
        }
    }
    Ok(())
}

/// Verifies that every cycle stays inside one cluster of a generated graph.
pub fn check_cycles_within_clusters(cluster: &[usize], cycles: &[Vec<usize>]) -> Result<(), String> {
    for cycle in cycles {
        let mut ids = cycle.iter().map(|&v| cluster.get(v));
        let first = ids.next().flatten();
        if ids.any(|id| id != first) {
            return Err(format!("cycle {cycle:?} crosses clusters"));
        }
    }
    Ok(())
}

/// Verifies a restricted SCC query result:
/// - the anchor is at or above the cursor and is the smallest member
/// - the component has at least two members
/// - every component edge exists in `graph`
/// - every member reaches the anchor and is reachable from it
pub fn check_component(graph: &AdjacencyList, cursor: usize, result: &SccResult) -> Result<(), String> {
    let anchor = result.anchor();
    let members = result.members();

    if anchor < cursor {
        return Err(format!("anchor {anchor} is below cursor {cursor}"));
    }
    if members.first() != Some(&anchor) {
        return Err(format!("anchor {anchor} is not the smallest member of {members:?}"));
    }
    if members.len() < 2 {
        return Err(format!("component {members:?} is trivial"));
    }

    let adjacency = result.adjacency();
    for (v, successors) in adjacency.iter() {
        for &w in successors {
            if !graph.has_edge(v, w) {
                return Err(format!("component edge {v} -> {w} is not in the graph"));
            }
        }
    }

    let mut reverse: Vec<Vec<usize>> = vec![Vec::new(); adjacency.len()];
    for (v, successors) in adjacency.iter() {
        for &w in successors {
            reverse[w].push(v);
        }
    }
    let forward = reachable(anchor, |v| adjacency.successors(v));
    let backward = reachable(anchor, |v| reverse.get(v).map_or(&[][..], Vec::as_slice));
    for &m in &members {
        if !forward.contains(&m) || !backward.contains(&m) {
            return Err(format!("member {m} is not strongly connected to anchor {anchor}"));
        }
    }
    Ok(())
}

fn reachable<'a, F>(start: usize, successors: F) -> HashSet<usize>
where
    F: Fn(usize) -> &'a [usize],
{
    let mut seen = HashSet::from([start]);
    let mut pending = vec![start];
    while let Some(v) = pending.pop() {
        for &w in successors(v) {
            if seen.insert(w) {
                pending.push(w);
            }
        }
    }
    seen
}

/// Number of elementary cycles in the complete digraph on `n` vertices:
/// Σ_{k=2..n} C(n, k)·(k − 1)!.
pub fn complete_digraph_cycle_count(n: usize) -> usize {
    (2..=n)
        .map(|k| {
            let choose = (0..k).fold(1usize, |acc, i| acc * (n - i) / (i + 1));
            choose * (1..k).product::<usize>()
        })
        .sum()
}
