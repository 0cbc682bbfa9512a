//! Self-loop detection over generic vertex graphs.

use std::fmt::Display;
use std::ops::ControlFlow;

use tracing::debug;

use crate::common::GraphTraversal;
use crate::error::GraphwalkResult;
use crate::sink::LineSink;
use crate::vertex::{VertexGraph, VertexId};

/// Values of reachable vertices that list themselves as a neighbor, in
/// pre-order. Self-loops are matched by identity, so a neighbor holding an
/// equal value does not count.
pub fn self_loopers<T>(graph: &VertexGraph<T>, start: Option<VertexId>) -> Vec<&T> {
    let Some(start) = start.filter(|s| graph.contains(*s)) else {
        return Vec::new();
    };

    let mut loopers = Vec::new();
    let _ = graph.walk_preorder(start, |id| {
        if graph.has_self_loop(*id) {
            if let Some(data) = graph.data(*id) {
                loopers.push(data);
            }
        }
        ControlFlow::<()>::Continue(())
    });

    debug!(start = start.index(), found = loopers.len(), "self_loopers");
    loopers
}

/// Emits the value of every reachable self-looping vertex to `sink`.
pub fn print_self_loopers<T, S>(
    graph: &VertexGraph<T>,
    start: Option<VertexId>,
    sink: &mut S,
) -> GraphwalkResult<()>
where
    T: Display,
    S: LineSink + ?Sized,
{
    for value in self_loopers(graph, start) {
        sink.emit_line(&value.to_string())?;
    }
    Ok(())
}
