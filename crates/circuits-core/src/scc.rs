//! Restricted strongly-connected-component search.
//!
//! [`RestrictedSccFinder::find`] answers one question for the cycle driver:
//! within the subgraph induced by the vertices `>= cursor`, which non-trivial
//! SCC holds the smallest vertex index, and what are its internal edges?
//!
//! # Algorithm
//!
//! Each query builds the induced subgraph and scans roots upward from the
//! cursor. At the first unvisited root it runs one complete Tarjan DFS,
//! which may close several components. Components with fewer than two
//! members are discarded; the rest accumulate for the remainder of the query.
//! Among the accumulated components the one holding the globally smallest
//! vertex is selected:
//!
//! - if it contains neither `cursor` nor `cursor + 1`, every piece of state is
//!   thrown away and the query starts over from `cursor + 1`;
//! - otherwise its induced adjacency is returned, anchored at its smallest
//!   vertex that still has outgoing edges.
//!
//! The restart discipline is what keeps the cycle driver's cursor monotonic
//! and guarantees every anchor it sees is the lowest vertex of a non-trivial
//! component in the remaining graph.
//!
//! The DFS keeps an explicit frame stack instead of recursing, so search
//! depth is bounded by heap memory rather than the thread's call stack.
use serde::Serialize;
use tracing::trace;

use crate::adjacency::AdjacencyList;


// ---------------------------------------------------------------------------
// SccResult
// ---------------------------------------------------------------------------

/// One non-trivial SCC reported by [`RestrictedSccFinder::find`].
///
/// `adjacency` spans every vertex of the full graph; vertices
/// outside the component have empty successor lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SccResult {
    anchor: usize,
    adjacency: AdjacencyList,
}

impl SccResult {
    /// Smallest member index with outgoing edges inside the component.
    pub fn anchor(&self) -> usize {
        self.anchor
    }

    /// Edges of the full graph with both endpoints in the component.
    pub fn adjacency(&self) -> &AdjacencyList {
        &self.adjacency
    }

    /// Component members in ascending order.
    pub fn members(&self) -> Vec<usize> {
        self.adjacency
            .iter()
            .skip(self.anchor)
            .filter(|(_, successors)| !successors.is_empty())
            .map(|(v, _)| v)
            .collect()
    }

    /// Returns `true` if `vertex` belongs to the component.
    pub fn contains(&self, vertex: usize) -> bool {
        !self.adjacency.successors(vertex).is_empty()
    }
}

// ---------------------------------------------------------------------------
// RestrictedSccFinder
// ---------------------------------------------------------------------------

/// Answers lowest-component queries against a fixed graph.
#[derive(Debug)]
pub struct RestrictedSccFinder<'g> {
    graph: &'g AdjacencyList,
    restarts: usize,
}

impl<'g> RestrictedSccFinder<'g> {
    /// Creates a finder over `graph`.
    pub fn new(graph: &'g AdjacencyList) -> Self {
        Self { graph, restarts: 0 }
    }

    /// Total number of cursor restarts performed by all queries so far.
    pub fn restarts(&self) -> usize {
        self.restarts
    }

    /// Finds the lowest non-trivial SCC among the vertices `>= cursor`.
    ///
    /// Returns `None` when no component of two or more vertices exists at or
    /// above the cursor, including when `cursor >= n`.
    pub fn find(&mut self, cursor: usize) -> Option<SccResult> {
        let n = self.graph.len();
        let mut cursor = cursor;

        'restart: while cursor < n {
            let subgraph = self.graph.induced_from(cursor);
            let mut tarjan = Tarjan::new(&subgraph);

            for root in cursor..n {
                if tarjan.is_visited(root) {
                    continue;
                }
                tarjan.visit_from(root);

                let Some(lowest) = tarjan.lowest_component() else {
                    continue;
                };

                if !lowest.contains(&cursor) && !lowest.contains(&(cursor + 1)) {
                    trace!(cursor, next = cursor + 1, "lowest component skips cursor, restarting");
                    self.restarts += 1;
                    cursor += 1;
                    continue 'restart;
                }

                let mut members = vec![false; n];
                for &v in lowest {
                    members[v] = true;
                }
                let adjacency = subgraph.restricted_to(&members);
                let anchor = adjacency
                    .iter()
                    .find(|(_, successors)| !successors.is_empty())
                    .map(|(v, _)| v);
                if let Some(anchor) = anchor {
                    trace!(cursor, anchor, size = lowest.len(), "component selected");
                    return Some(SccResult { anchor, adjacency });
                }
            }

            return None;
        }

        None
    }
}

// ---------------------------------------------------------------------------
// Tarjan DFS state
// ---------------------------------------------------------------------------

/// Marker for a vertex that has not been discovered yet.
const UNVISITED: usize = 0;

struct Frame {
    vertex: usize,
    next: usize,
}

/// Tarjan bookkeeping for one restricted query.
///
/// Discovery numbers start at 1 so that [`UNVISITED`] can double as the
/// "not yet seen" marker.
struct Tarjan<'g> {
    graph: &'g AdjacencyList,
    number: Vec<usize>,
    lowlink: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<usize>,
    counter: usize,
    components: Vec<Vec<usize>>,
}

impl<'g> Tarjan<'g> {
    fn new(graph: &'g AdjacencyList) -> Self {
        let n = graph.len();
        Self {
            graph,
            number: vec![UNVISITED; n],
            lowlink: vec![0; n],
            on_stack: vec![false; n],
            stack: Vec::new(),
            counter: 0,
            components: Vec::new(),
        }
    }

    fn is_visited(&self, vertex: usize) -> bool {
        self.number[vertex] != UNVISITED
    }

    fn discover(&mut self, vertex: usize) {
        self.counter += 1;
        self.number[vertex] = self.counter;
        self.lowlink[vertex] = self.counter;
        self.stack.push(vertex);
        self.on_stack[vertex] = true;
    }

    /// Runs one complete DFS from `root`, closing every component it finishes.
    fn visit_from(&mut self, root: usize) {
        self.discover(root);
        let mut frames = vec![Frame {
            vertex: root,
            next: 0,
        }];

        while let Some(frame) = frames.last_mut() {
            let v = frame.vertex;

            if let Some(&w) = self.graph.successors(v).get(frame.next) {
                frame.next += 1;
                if !self.is_visited(w) {
                    self.discover(w);
                    frames.push(Frame { vertex: w, next: 0 });
                } else if self.number[w] < self.number[v] && self.on_stack[w] {
                    self.lowlink[v] = self.lowlink[v].min(self.number[w]);
                }
                continue;
            }

            frames.pop();
            if self.lowlink[v] == self.number[v] && !self.stack.is_empty() {
                self.close_component(v);
            }
            if let Some(parent) = frames.last() {
                let p = parent.vertex;
                self.lowlink[p] = self.lowlink[p].min(self.lowlink[v]);
            }
        }
    }

    /// Pops the stack down to and including `root`.
    fn close_component(&mut self, root: usize) {
        let mut component = Vec::new();
        while let Some(w) = self.stack.pop() {
            self.on_stack[w] = false;
            component.push(w);
            if w == root {
                break;
            }
        }
        if component.len() > 1 {
            trace!(root, size = component.len(), "component closed");
            self.components.push(component);
        }
    }

    /// The accumulated component holding the smallest vertex index.
    fn lowest_component(&self) -> Option<&[usize]> {
        self.components
            .iter()
            .filter_map(|c| c.iter().min().map(|&m| (m, c)))
            .min_by_key(|&(m, _)| m)
            .map(|(_, c)| c.as_slice())
    }
}
