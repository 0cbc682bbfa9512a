//! Graphviz DOT rendering of adjacency maps.

use crate::graph::AdjacencyMap;
use std::collections::HashSet;
use std::fmt::{Display, Write};
use std::hash::Hash;

/// Generate a Graphviz DOT representation of an adjacency map.
///
/// - reachable nodes are lightgreen
/// - unreachable nodes are lightcoral
/// - neighbors without an entry of their own are drawn dashed
///
/// Nodes and edges are sorted by label so the output is stable across runs.
pub fn generate_dot<T>(graph: &AdjacencyMap<T>, unreachable: &HashSet<T>) -> String
where
    T: Display + Eq + Hash,
{
    let edge_count: usize = graph.values().map(Vec::len).sum();
    let mut dot = String::with_capacity(graph.len() * 64 + edge_count * 32 + 128);

    if let Err(e) = write_dot_content(&mut dot, graph, unreachable) {
        tracing::error!(error = %e, "failed to render DOT");
        return "digraph graphwalk {\n}\n".to_string();
    }
    dot
}

fn write_dot_content<T>(
    dot: &mut String,
    graph: &AdjacencyMap<T>,
    unreachable: &HashSet<T>,
) -> std::fmt::Result
where
    T: Display + Eq + Hash,
{
    writeln!(dot, "digraph graphwalk {{")?;
    writeln!(dot, "  rankdir=LR;")?;
    writeln!(dot, "  node [shape=ellipse, style=filled];")?;
    writeln!(dot)?;

    let mut keys: Vec<&T> = graph.keys().collect();
    keys.sort_by_cached_key(|k| k.to_string());

    for key in &keys {
        let color = if unreachable.contains(*key) {
            "lightcoral"
        } else {
            "lightgreen"
        };
        writeln!(dot, "  \"{}\" [fillcolor={}];", escape(*key), color)?;
    }

    let mut dangling: Vec<String> = graph
        .values()
        .flatten()
        .filter(|n| !graph.contains_key(*n))
        .map(|n| escape(n))
        .collect();
    dangling.sort();
    dangling.dedup();
    for name in &dangling {
        writeln!(dot, "  \"{}\" [style=dashed];", name)?;
    }

    writeln!(dot)?;

    for key in &keys {
        let from = escape(*key);
        for to in &graph[*key] {
            writeln!(dot, "  \"{}\" -> \"{}\";", from, escape(to))?;
        }
    }

    writeln!(dot, "}}")?;
    Ok(())
}

fn escape<T: Display>(label: &T) -> String {
    label.to_string().replace('\\', "\\\\").replace('"', "\\\"")
}
