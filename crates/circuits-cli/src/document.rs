//! JSON graph documents accepted by every subcommand.
//!
//! A document carries either a boolean adjacency `matrix` or an `edges` list
//! of `[from, to]` index pairs, plus optional vertex `labels`:
//!
//! ```json
//! { "labels": ["a", "b"], "matrix": [[false, true], [true, false]] }
//! { "vertices": 2, "edges": [[0, 1], [1, 0]] }
//! ```
//!
//! Labels default to the decimal vertex indices. A declared `vertices` count
//! may not exceed the byte limit applied to the document itself.
use serde::Deserialize;
use tracing::debug;

use circuits_core::{AdjacencyList, CycleError};

use crate::error::CliError;

/// The document exactly as written on disk.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDocument {
    labels: Option<Vec<String>>,
    vertices: Option<usize>,
    matrix: Option<Vec<Vec<bool>>>,
    edges: Option<Vec<(usize, usize)>>,
}

/// A validated graph with one label per vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphDocument {
    /// `labels[i]` names vertex `i`.
    pub labels: Vec<String>,
    /// The graph's successor lists.
    pub graph: AdjacencyList,
}

impl GraphDocument {
    /// Label of `vertex`, falling back to its index.
    pub fn label(&self, vertex: usize) -> String {
        self.labels
            .get(vertex)
            .cloned()
            .unwrap_or_else(|| vertex.to_string())
    }
}

/// Parses and validates a graph document read from `source`.
///
/// # Errors
///
/// - [`CliError::ParseFailed`] if `content` is not JSON of the expected shape.
/// - [`CliError::InvalidGraph`] if the matrix is not square, an edge endpoint
///   is out of range, the label count disagrees with the vertex count,
///   `vertices` exceeds `max_vertices`, or the document names both or neither
///   of `matrix` and `edges`.
pub fn parse_document(
    content: &str,
    source: &str,
    max_vertices: u64,
) -> Result<GraphDocument, CliError> {
    let raw: RawDocument = serde_json::from_str(content).map_err(|e| CliError::ParseFailed {
        source: source.to_owned(),
        detail: e.to_string(),
    })?;

    let invalid = |detail: &str| CliError::InvalidGraph {
        source: source.to_owned(),
        detail: detail.to_owned(),
    };
    let from_core = |err: CycleError| CliError::from_cycle_error(source, &err);

    if let Some(declared) = raw.vertices.filter(|&d| d as u64 > max_vertices) {
        return Err(invalid(&format!(
            "`vertices` is {declared}, above the limit of {max_vertices}"
        )));
    }

    let (graph, vertices) = match (raw.matrix, raw.edges) {
        (Some(_), Some(_)) => return Err(invalid("document has both `matrix` and `edges`")),
        (None, None) => return Err(invalid("document needs either `matrix` or `edges`")),
        (Some(matrix), None) => {
            let graph = AdjacencyList::from_matrix(&matrix).map_err(from_core)?;
            if let Some(declared) = raw.vertices.filter(|&d| d != graph.len()) {
                return Err(invalid(&format!(
                    "`vertices` is {declared} but the matrix has {} rows",
                    graph.len()
                )));
            }
            let n = graph.len();
            (graph, n)
        }
        (None, Some(edges)) => {
            let n = match (&raw.labels, raw.vertices) {
                (Some(labels), Some(declared)) if labels.len() != declared => {
                    return Err(from_core(CycleError::LabelCountMismatch {
                        labels: labels.len(),
                        vertices: declared,
                    }));
                }
                (_, Some(declared)) => declared,
                (Some(labels), None) => labels.len(),
                (None, None) => {
                    return Err(invalid("an `edges` document needs `labels` or `vertices`"));
                }
            };
            let graph = AdjacencyList::from_edges(n, &edges).map_err(from_core)?;
            (graph, n)
        }
    };

    let labels = match raw.labels {
        Some(labels) if labels.len() != vertices => {
            return Err(from_core(CycleError::LabelCountMismatch {
                labels: labels.len(),
                vertices,
            }));
        }
        Some(labels) => labels,
        None => (0..vertices).map(|v| v.to_string()).collect(),
    };

    debug!(
        source,
        vertices,
        edges = graph.edge_count(),
        "graph document loaded"
    );
    Ok(GraphDocument { labels, graph })
}
