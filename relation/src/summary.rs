//! Human-readable rendering of a [`RelationResult`].

use crate::protocol::{Edge, RelationResult};

const HEADER: &str = "Here’s how your words are related:";

fn edge_line(edge: &Edge) -> String {
    format!(
        "• {} → {} ({}): {}",
        edge.from, edge.to, edge.relation, edge.why
    )
}

/// One bullet per edge, then a blank line and the isolated words (`none` when empty).
pub fn summarize(result: &RelationResult) -> String {
    let lines: Vec<String> = result.edges.iter().map(edge_line).collect();
    let isolated = if result.isolated.is_empty() {
        "none".to_string()
    } else {
        result.isolated.join(", ")
    };
    format!("{}\n{}\n\nIsolated words: {}", HEADER, lines.join("\n"), isolated)
}
