//! Adjacency-list representation of a directed graph over vertices `0..n`.
//!
//! [`AdjacencyList`] is the only graph structure the search algorithms read.
//! Successor lists are always sorted ascending and free of duplicates, so the
//! order in which cycles are discovered depends only on the graph itself.
use serde::Serialize;

use crate::error::CycleError;

/// Per-vertex ordered successor lists.
///
/// Built once from a boolean matrix ([`AdjacencyList::from_matrix`]) or an
/// edge list ([`AdjacencyList::from_edges`]) and immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AdjacencyList {
    successors: Vec<Vec<usize>>,
}

impl AdjacencyList {
    /// Converts an n×n boolean adjacency matrix into successor lists.
    ///
    /// `list[i]` holds every `j` with `matrix[i][j] == true`, ascending.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::NotSquare`] for the first row whose length is not
    /// equal to the number of rows.
    pub fn from_matrix<R: AsRef<[bool]>>(matrix: &[R]) -> Result<Self, CycleError> {
        let n = matrix.len();
        let mut successors = Vec::with_capacity(n);
        for (row, entries) in matrix.iter().enumerate() {
            let entries = entries.as_ref();
            if entries.len() != n {
                return Err(CycleError::NotSquare {
                    row,
                    len: entries.len(),
                    expected: n,
                });
            }
            successors.push(
                entries
                    .iter()
                    .enumerate()
                    .filter_map(|(j, &edge)| edge.then_some(j))
                    .collect(),
            );
        }
        Ok(Self { successors })
    }

    /// Builds successor lists for `vertices` vertices from `(from, to)` pairs.
    ///
    /// Duplicate edges are collapsed and every list is sorted, so the result
    /// equals what [`AdjacencyList::from_matrix`] yields for the same graph.
    ///
    /// # Errors
    ///
    /// - [`CycleError::VertexOutOfRange`] if either endpoint of an edge is
    ///   `>= vertices`.
    /// - [`CycleError::GraphTooLarge`] if the successor table for `vertices`
    ///   cannot be allocated.
    pub fn from_edges(vertices: usize, edges: &[(usize, usize)]) -> Result<Self, CycleError> {
        let mut successors: Vec<Vec<usize>> = Vec::new();
        successors
            .try_reserve_exact(vertices)
            .map_err(|_| CycleError::GraphTooLarge { vertices })?;
        successors.resize_with(vertices, Vec::new);
        for &(from, to) in edges {
            for vertex in [from, to] {
                if vertex >= vertices {
                    return Err(CycleError::VertexOutOfRange { vertex, vertices });
                }
            }
            successors[from].push(to);
        }
        for list in &mut successors {
            list.sort_unstable();
            list.dedup();
        }
        Ok(Self { successors })
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.successors.len()
    }

    /// Returns `true` for the graph with no vertices.
    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }

    /// Successors of `vertex` in ascending order.
    ///
    /// Out-of-range vertices have no successors.
    pub fn successors(&self, vertex: usize) -> &[usize] {
        self.successors
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(Vec::len).sum()
    }

    /// Returns `true` if the edge `from → to` exists.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.successors(from).binary_search(&to).is_ok()
    }

    /// Iterates over `(vertex, successors)` pairs in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.successors
            .iter()
            .enumerate()
            .map(|(v, list)| (v, list.as_slice()))
    }

    /// The subgraph induced by the vertices `>= cursor`.
    ///
    /// Vertices below the cursor keep their slot but lose every edge, and
    /// edges into them are dropped.
    pub(crate) fn induced_from(&self, cursor: usize) -> Self {
        let successors = self
            .successors
            .iter()
            .enumerate()
            .map(|(v, list)| {
                if v < cursor {
                    Vec::new()
                } else {
                    list.iter().copied().filter(|&w| w >= cursor).collect()
                }
            })
            .collect();
        Self { successors }
    }

    /// The subgraph induced by the vertices flagged in `members`.
    pub(crate) fn restricted_to(&self, members: &[bool]) -> Self {
        let is_member = |v: usize| members.get(v).copied().unwrap_or(false);
        let successors = self
            .successors
            .iter()
            .enumerate()
            .map(|(v, list)| {
                if is_member(v) {
                    list.iter().copied().filter(|&w| is_member(w)).collect()
                } else {
                    Vec::new()
                }
            })
            .collect();
        Self { successors }
    }
}
