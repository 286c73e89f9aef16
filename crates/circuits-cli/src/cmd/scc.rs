//! Implementation of `circuits scc <file> [--from N]`.
//!
//! Reports the strongly connected component the cycle search would visit
//! first when starting at vertex `N`: the lowest component of two or more
//! vertices among the vertices `>= N`.
//!
//! Output (human mode):
//!
//! ```text
//! anchor: <label>
//! members: <label>, <label>, ...
//! ```
//!
//! Output (JSON mode): `{"anchor": ..., "members": [...], "edges": [[from, to], ...]}`
//! where `edges` are vertex indices.
//!
//! Exit codes: 0 = component found, 1 = no component at or above `N`.
use circuits_core::{RestrictedSccFinder, SccResult};
use serde_json::json;
use tracing::debug;

use crate::OutputFormat;
use crate::cmd::{stdout_error, write_json};
use crate::document::GraphDocument;
use crate::error::CliError;

/// Runs the `scc` command.
///
/// # Errors
///
/// - [`CliError::NoComponent`] if no component exists at or above `from`.
/// - [`CliError::IoError`] if stdout cannot be written.
pub fn run(doc: &GraphDocument, from: usize, format: &OutputFormat) -> Result<(), CliError> {
    let mut finder = RestrictedSccFinder::new(&doc.graph);
    let result = finder.find(from).ok_or(CliError::NoComponent { from })?;
    debug!(
        from,
        anchor = result.anchor(),
        restarts = finder.restarts(),
        "component found"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, doc, &result),
        OutputFormat::Json => print_json(&mut out, doc, &result),
    }
    .map_err(|e| stdout_error(&e))
}

fn member_labels(doc: &GraphDocument, result: &SccResult) -> Vec<String> {
    result.members().into_iter().map(|v| doc.label(v)).collect()
}

fn print_human<W: std::io::Write>(
    w: &mut W,
    doc: &GraphDocument,
    result: &SccResult,
) -> std::io::Result<()> {
    writeln!(w, "anchor: {}", doc.label(result.anchor()))?;
    writeln!(w, "members: {}", member_labels(doc, result).join(", "))
}

fn print_json<W: std::io::Write>(
    w: &mut W,
    doc: &GraphDocument,
    result: &SccResult,
) -> std::io::Result<()> {
    let edges: Vec<[usize; 2]> = result
        .adjacency()
        .iter()
        .flat_map(|(v, successors)| successors.iter().map(move |&s| [v, s]))
        .collect();
    write_json(
        w,
        &json!({
            "anchor": doc.label(result.anchor()),
            "members": member_labels(doc, result),
            "edges": edges,
        }),
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::document::parse_document;

    /// 0 is a source; 1-2-3 form a ring with a chord 3 → 2.
    fn doc() -> GraphDocument {
        parse_document(
            r#"{"labels":["src","p","q","r"],"edges":[[0,1],[1,2],[2,3],[3,1],[3,2]]}"#,
            "ring.json",
            1024,
        )
        .expect("valid document")
    }

    fn find(doc: &GraphDocument, from: usize) -> SccResult {
        RestrictedSccFinder::new(&doc.graph)
            .find(from)
            .expect("component")
    }

    #[test]
    fn human_output_names_anchor_and_members() {
        let doc = doc();
        let mut buf = Vec::new();
        print_human(&mut buf, &doc, &find(&doc, 0)).expect("write");
        let text = String::from_utf8(buf).expect("utf-8");
        assert_eq!(text, "anchor: p\nmembers: p, q, r\n");
    }

    #[test]
    fn json_output_lists_internal_edges() {
        let doc = doc();
        let mut buf = Vec::new();
        print_json(&mut buf, &doc, &find(&doc, 0)).expect("write");
        let value: serde_json::Value = serde_json::from_slice(&buf).expect("json");
        assert_eq!(value["anchor"], "p");
        assert_eq!(value["members"], json!(["p", "q", "r"]));
        assert_eq!(value["edges"], json!([[1, 2], [2, 3], [3, 1], [3, 2]]));
    }

    #[test]
    fn cursor_inside_component_drops_lower_members() {
        let doc = doc();
        let result = find(&doc, 2);
        assert_eq!(result.anchor(), 2);
        assert_eq!(member_labels(&doc, &result), vec!["q", "r"]);
    }

    #[test]
    fn run_reports_missing_component() {
        let doc = doc();
        let err = run(&doc, 4, &OutputFormat::Human).expect_err("no component");
        assert!(matches!(err, CliError::NoComponent { from: 4 }));
        assert_eq!(err.exit_code(), 1);
    }
}
