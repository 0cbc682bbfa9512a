//! Shared graph traversal abstraction.
//!
//! Every query in this crate is "visit a node, mark it seen, explore unseen
//! neighbors". That loop lives here once, as a default method, and each graph
//! representation only describes its nodes, its edges and how it remembers
//! what it has seen.

use std::ops::ControlFlow;

use tracing::trace;

use super::visited::VisitedSet;

/// Trait for depth-first traversal over a directed graph.
///
/// # Type Parameters
/// - `Node`: The node handle (`VertexId`, `Airport`, a map key)
/// - `Visited`: The visited-set strategy for that handle
///
/// # Example
/// ```ignore
/// impl GraphTraversal for CityMap {
///     type Node = String;
///     type Visited = HashSet<String>;
///
///     fn neighbors(&self, node: &String) -> Vec<String> {
///         self.roads.get(node).cloned().unwrap_or_default()
///     }
///
///     fn contains_node(&self, node: &String) -> bool {
///         self.roads.contains_key(node)
///     }
///
///     fn visited_set(&self) -> HashSet<String> {
///         HashSet::new()
///     }
/// }
///
/// let order = map.preorder("home".to_string());
/// ```
pub trait GraphTraversal {
    /// The type used to identify nodes in the graph.
    type Node: Clone + std::fmt::Debug;

    /// Visited-set strategy used by a single traversal.
    type Visited: VisitedSet<Self::Node>;

    /// Returns the outgoing neighbors of a node, in edge order.
    ///
    /// Nodes without outgoing edges (or unknown to the graph) yield an
    /// empty list.
    fn neighbors(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Checks if the graph contains a node.
    fn contains_node(&self, node: &Self::Node) -> bool;

    /// Allocates a fresh, empty visited set for one traversal.
    fn visited_set(&self) -> Self::Visited;

    /// Depth-first, pre-order walk from `start`.
    ///
    /// `visit` is called exactly once per reachable node, before any of that
    /// node's neighbors, and neighbors are explored in edge order. Returning
    /// `ControlFlow::Break` stops the walk immediately and the break value is
    /// handed back to the caller.
    ///
    /// Uses an explicit stack: neighbors are pushed in reverse and a node is
    /// marked when popped, which reproduces the order of the recursive
    /// formulation without its depth limit.
    fn walk_preorder<B, F>(&self, start: Self::Node, mut visit: F) -> ControlFlow<B>
    where
        F: FnMut(&Self::Node) -> ControlFlow<B>,
    {
        let mut visited = self.visited_set();
        let mut stack = vec![start];

        while let Some(node) = stack.pop() {
            if !visited.mark(&node) {
                continue;
            }
            trace!(node = ?node, "visit");

            if let ControlFlow::Break(b) = visit(&node) {
                return ControlFlow::Break(b);
            }

            let neighbors = self.neighbors(&node);
            stack.extend(
                neighbors
                    .into_iter()
                    .rev()
                    .filter(|n| !visited.is_marked(n)),
            );
        }

        ControlFlow::Continue(())
    }

    /// All nodes reachable from `start` (start included), in pre-order.
    fn preorder(&self, start: Self::Node) -> Vec<Self::Node> {
        let mut order = Vec::new();
        let _ = self.walk_preorder(start, |node| {
            order.push(node.clone());
            ControlFlow::<()>::Continue(())
        });
        order
    }
}
