//! Word-graph queries over `VertexGraph<String>`.
//!
//! Word length is measured in `char`s, not bytes.

use std::ops::ControlFlow;

use tracing::debug;

use crate::common::GraphTraversal;
use crate::error::GraphwalkResult;
use crate::sink::LineSink;
use crate::vertex::{VertexGraph, VertexId};

/// Words reachable from `start` (itself included) that are strictly shorter
/// than `max_len`, in depth-first pre-order.
///
/// An absent or foreign `start` yields nothing.
pub fn short_words(graph: &VertexGraph<String>, start: Option<VertexId>, max_len: usize) -> Vec<&str> {
    let Some(start) = start.filter(|s| graph.contains(*s)) else {
        return Vec::new();
    };

    let mut words = Vec::new();
    let _ = graph.walk_preorder(start, |id| {
        if let Some(word) = graph.data(*id) {
            if word.chars().count() < max_len {
                words.push(word.as_str());
            }
        }
        ControlFlow::<()>::Continue(())
    });

    debug!(start = start.index(), max_len, matched = words.len(), "short_words");
    words
}

/// Emits every reachable word shorter than `max_len` to `sink`, one per line.
///
/// Nothing is emitted (and nothing traversed) for an absent start.
pub fn print_short_words<S>(
    graph: &VertexGraph<String>,
    start: Option<VertexId>,
    max_len: usize,
    sink: &mut S,
) -> GraphwalkResult<()>
where
    S: LineSink + ?Sized,
{
    for word in short_words(graph, start, max_len) {
        sink.emit_line(word)?;
    }
    Ok(())
}

/// Longest word reachable from `start`, itself included.
///
/// Ties keep the first word met in pre-order. Returns `""` for an absent
/// start or when every reachable word is empty.
pub fn longest_word(graph: &VertexGraph<String>, start: Option<VertexId>) -> &str {
    let Some(start) = start.filter(|s| graph.contains(*s)) else {
        return "";
    };

    let mut longest = "";
    let mut longest_len = 0;
    let _ = graph.walk_preorder(start, |id| {
        if let Some(word) = graph.data(*id) {
            let len = word.chars().count();
            if len > longest_len {
                longest = word.as_str();
                longest_len = len;
            }
        }
        ControlFlow::<()>::Continue(())
    });

    debug!(start = start.index(), longest_len, "longest_word");
    longest
}
