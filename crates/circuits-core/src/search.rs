//! Johnson's elementary cycle enumeration.
//!
//! The driver walks a cursor upward through the vertex indices. At each step
//! the [`RestrictedSccFinder`] supplies the lowest non-trivial SCC at or above
//! the cursor; the blocking path search then emits every elementary cycle
//! through that SCC's anchor and the cursor moves past the anchor. Each
//! cycle is therefore found exactly once, from its smallest vertex.
//!
//! # Blocking
//!
//! A vertex is blocked while it sits on the current path or has been shown
//! unable to reach the anchor without crossing the path. When a vertex turns
//! out to be a dead end, it is recorded in the deferred lists of its
//! successors; once any of them is unblocked, the dead end is reopened too.
//! This keeps the total work at Θ((V + E)·(C + 1)) for C cycles.
//!
//! Both the path search and unblocking run on explicit work stacks.
use serde::Serialize;
use tracing::debug;

use crate::adjacency::AdjacencyList;
use crate::error::CycleError;
use crate::scc::{RestrictedSccFinder, SccResult};


// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Enumerates every elementary cycle of the graph described by `matrix`,
/// materialized through `labels`.
///
/// `labels[i]` names vertex `i`. Each returned cycle lists its labels in
/// traversal order starting from the cycle's smallest vertex; the closing
/// edge back to the first label is implied. Cycles appear in discovery order.
///
/// A self-loop is reported as a one-label cycle only when its vertex also
/// anchors a component of two or more vertices; a vertex whose only cycle is
/// its own self-loop is never reported.
///
/// # Errors
///
/// - [`CycleError::LabelCountMismatch`] if `labels.len()` differs from the
///   number of matrix rows.
/// - [`CycleError::NotSquare`] if any row is not `labels.len()` long.
/// - [`CycleError::InternalInvariant`] if the search detects a bug.
pub fn enumerate_cycles<L: Clone, R: AsRef<[bool]>>(
    labels: &[L],
    matrix: &[R],
) -> Result<Vec<Vec<L>>, CycleError> {
    if labels.len() != matrix.len() {
        return Err(CycleError::LabelCountMismatch {
            labels: labels.len(),
            vertices: matrix.len(),
        });
    }
    let graph = AdjacencyList::from_matrix(matrix)?;
    let cycles = enumerate_cycle_indices(&graph)?;
    cycles
        .iter()
        .map(|cycle| label_cycle(cycle, labels))
        .collect()
}

/// Enumerates every elementary cycle of `graph` as vertex indices.
///
/// # Errors
///
/// Returns [`CycleError::InternalInvariant`] only if the search detects a bug.
pub fn enumerate_cycle_indices(graph: &AdjacencyList) -> Result<Vec<Vec<usize>>, CycleError> {
    CycleSearch::new(graph).run().map(|output| output.cycles)
}

/// Maps a cycle of vertex indices to the corresponding labels.
fn label_cycle<L: Clone>(cycle: &[usize], labels: &[L]) -> Result<Vec<L>, CycleError> {
    cycle
        .iter()
        .map(|&v| {
            labels
                .get(v)
                .cloned()
                .ok_or_else(|| CycleError::InternalInvariant {
                    detail: format!("vertex {v} has no label ({} labels)", labels.len()),
                })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// CycleSearch
// ---------------------------------------------------------------------------

/// Counters describing one completed enumeration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchSummary {
    /// Components handed to the path search (one per anchor).
    pub components: usize,
    /// Cursor restarts performed by the SCC finder.
    pub restarts: usize,
    /// Elementary cycles found.
    pub cycles: usize,
}

/// Result of [`CycleSearch::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutput {
    /// Cycles as vertex indices, in discovery order.
    pub cycles: Vec<Vec<usize>>,
    /// Counters for the run.
    pub summary: SearchSummary,
}

/// One enumeration over a fixed graph.
///
/// Owns its blocking state; [`CycleSearch::run`] and
/// [`CycleSearch::for_each_cycle`] consume the search so the state is never
/// shared between enumerations.
#[derive(Debug)]
pub struct CycleSearch<'g> {
    graph: &'g AdjacencyList,
    state: SearchState,
}

impl<'g> CycleSearch<'g> {
    /// Prepares a search over `graph`.
    pub fn new(graph: &'g AdjacencyList) -> Self {
        Self {
            graph,
            state: SearchState::new(graph.len()),
        }
    }

    /// Runs the outer Johnson loop to completion and collects every cycle.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::InternalInvariant`] if the path stack is found
    /// in an inconsistent state.
    pub fn run(self) -> Result<SearchOutput, CycleError> {
        let mut cycles = Vec::new();
        let summary = self.for_each_cycle(|cycle| cycles.push(cycle.to_vec()))?;
        Ok(SearchOutput { cycles, summary })
    }

    /// Runs the outer Johnson loop, handing each cycle to `emit` as soon as
    /// it is found.
    ///
    /// The slice borrows the search's path buffer and is only valid for the
    /// duration of the call.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::InternalInvariant`] if the path stack is found
    /// in an inconsistent state.
    pub fn for_each_cycle<F>(mut self, mut emit: F) -> Result<SearchSummary, CycleError>
    where
        F: FnMut(&[usize]),
    {
        debug!(
            vertices = self.graph.len(),
            edges = self.graph.edge_count(),
            "enumerating elementary cycles"
        );

        let mut finder = RestrictedSccFinder::new(self.graph);
        let mut summary = SearchSummary::default();
        let mut cursor = 0;

        while let Some(scc) = finder.find(cursor) {
            let anchor = scc.anchor();

            self.state.reset_members(&scc);
            let found = self
                .state
                .cycles_through(anchor, scc.adjacency(), &mut emit)?;

            debug!(
                anchor,
                members = scc.members().len(),
                cycles = found,
                "component searched"
            );
            summary.components += 1;
            summary.cycles += found;
            cursor = anchor + 1;
        }

        summary.restarts = finder.restarts();
        debug!(
            components = summary.components,
            restarts = summary.restarts,
            cycles = summary.cycles,
            "enumeration complete"
        );

        Ok(summary)
    }
}

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

struct PathFrame {
    vertex: usize,
    next: usize,
    found: bool,
}

/// Mutable working buffers of Johnson's algorithm.
#[derive(Debug)]
struct SearchState {
    blocked: Vec<bool>,
    /// `blocked_by[w]` lists the vertices to reopen once `w` is unblocked.
    blocked_by: Vec<Vec<usize>>,
    path: Vec<usize>,
}

impl SearchState {
    fn new(vertices: usize) -> Self {
        Self {
            blocked: vec![false; vertices],
            blocked_by: vec![Vec::new(); vertices],
            path: Vec::new(),
        }
    }

    /// Clears the blocking state of every member of `scc`.
    fn reset_members(&mut self, scc: &SccResult) {
        for v in scc.members() {
            self.blocked[v] = false;
            self.blocked_by[v].clear();
        }
    }

    fn enter(&mut self, vertex: usize) {
        self.path.push(vertex);
        self.blocked[vertex] = true;
    }

    fn leave(&mut self, vertex: usize) -> Result<(), CycleError> {
        match self.path.pop() {
            Some(top) if top == vertex => Ok(()),
            other => Err(CycleError::InternalInvariant {
                detail: format!("expected vertex {vertex} on top of the path, found {other:?}"),
            }),
        }
    }

    /// Records that `vertex` should be reopened when `successor` is.
    fn defer(&mut self, successor: usize, vertex: usize) {
        let list = &mut self.blocked_by[successor];
        if !list.contains(&vertex) {
            list.push(vertex);
        }
    }

    /// Unblocks `vertex` and, transitively, every blocked vertex deferred
    /// behind it.
    fn unblock(&mut self, vertex: usize) {
        self.blocked[vertex] = false;
        let mut pending = vec![vertex];
        while let Some(u) = pending.pop() {
            for w in std::mem::take(&mut self.blocked_by[u]) {
                if self.blocked[w] {
                    self.blocked[w] = false;
                    pending.push(w);
                }
            }
        }
    }

    /// Emits every elementary cycle through `anchor` using only the edges in
    /// `adjacency`, returning how many were emitted.
    fn cycles_through<F: FnMut(&[usize])>(
        &mut self,
        anchor: usize,
        adjacency: &AdjacencyList,
        emit: &mut F,
    ) -> Result<usize, CycleError> {
        let mut count = 0;
        self.enter(anchor);
        let mut frames = vec![PathFrame {
            vertex: anchor,
            next: 0,
            found: false,
        }];

        while let Some(frame) = frames.last_mut() {
            let v = frame.vertex;

            if let Some(&w) = adjacency.successors(v).get(frame.next) {
                frame.next += 1;
                if w == anchor {
                    emit(self.path.as_slice());
                    count += 1;
                    frame.found = true;
                } else if !self.blocked[w] {
                    self.enter(w);
                    frames.push(PathFrame {
                        vertex: w,
                        next: 0,
                        found: false,
                    });
                }
                continue;
            }

            let found = frame.found;
            frames.pop();
            if found {
                self.unblock(v);
            } else {
                for &w in adjacency.successors(v) {
                    self.defer(w, v);
                }
            }
            self.leave(v)?;

            if let Some(parent) = frames.last_mut() {
                parent.found |= found;
            }
        }

        Ok(count)
    }
}
