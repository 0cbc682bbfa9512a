//! Adjacency-map graphs and reachability over them.
//!
//! The node universe of an [`AdjacencyMap`] is its key set. A neighbor that
//! has no entry of its own is still a valid node to step onto; it simply has
//! no outgoing edges.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use crate::common::GraphTraversal;

/// Key to ordered neighbor keys.
pub type AdjacencyMap<T> = HashMap<T, Vec<T>>;

/// Borrowed [`GraphTraversal`] view over an [`AdjacencyMap`].
#[derive(Debug, Clone, Copy)]
pub struct AdjacencyView<'a, T> {
    map: &'a AdjacencyMap<T>,
}

impl<'a, T> AdjacencyView<'a, T> {
    pub fn new(map: &'a AdjacencyMap<T>) -> Self {
        Self { map }
    }
}

impl<T> GraphTraversal for AdjacencyView<'_, T>
where
    T: Clone + Eq + Hash + Debug,
{
    type Node = T;
    type Visited = HashSet<T>;

    fn neighbors(&self, node: &T) -> Vec<T> {
        self.map.get(node).cloned().unwrap_or_default()
    }

    fn contains_node(&self, node: &T) -> bool {
        self.map.contains_key(node)
    }

    fn visited_set(&self) -> HashSet<T> {
        HashSet::new()
    }
}

/// Builds an adjacency map from directed edges plus standalone nodes.
///
/// Every edge endpoint and every listed node becomes a key; neighbor lists
/// keep edge order and duplicates.
pub fn build_adjacency<T, E, N>(edges: E, nodes: N) -> AdjacencyMap<T>
where
    T: Clone + Eq + Hash,
    E: IntoIterator<Item = (T, T)>,
    N: IntoIterator<Item = T>,
{
    let mut map: AdjacencyMap<T> = HashMap::new();
    for node in nodes {
        map.entry(node).or_default();
    }
    for (from, to) in edges {
        map.entry(to.clone()).or_default();
        map.entry(from).or_default().push(to);
    }
    map
}

/// All nodes reachable from `start`, start included.
///
/// May contain neighbor keys that are not map entries.
pub fn reachable_from<T>(map: &AdjacencyMap<T>, start: &T) -> HashSet<T>
where
    T: Clone + Eq + Hash + Debug,
{
    let reachable: HashSet<T> = AdjacencyView::new(map)
        .preorder(start.clone())
        .into_iter()
        .collect();
    debug!(start = ?start, reachable = reachable.len(), "reachable_from");
    reachable
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: Vec<(&'static str, Vec<&'static str>)>) -> AdjacencyMap<&'static str> {
        entries.into_iter().collect()
    }

    #[test]
    fn test_build_adjacency_registers_endpoints() {
        let g = build_adjacency([("a", "b"), ("a", "c"), ("a", "b")], ["lonely"]);
        assert_eq!(g["a"], vec!["b", "c", "b"]);
        assert!(g["b"].is_empty());
        assert!(g["c"].is_empty());
        assert!(g["lonely"].is_empty());
        assert_eq!(g.len(), 4);
    }

    #[test]
    fn test_reachable_from_includes_start() {
        let g = map(vec![("a", vec!["b"]), ("b", vec![]), ("c", vec![])]);
        let r = reachable_from(&g, &"a");
        assert_eq!(r, HashSet::from(["a", "b"]));
    }

    #[test]
    fn test_reachable_through_missing_entry() {
        // "ghost" is a neighbor but not a key
        let g = map(vec![("a", vec!["ghost"]), ("b", vec![])]);
        let r = reachable_from(&g, &"a");
        assert!(r.contains("ghost"));
        assert!(!r.contains("b"));
    }

    #[test]
    fn test_view_contains_node() {
        let g = map(vec![("a", vec!["ghost"])]);
        let view = AdjacencyView::new(&g);
        assert!(view.contains_node(&"a"));
        assert!(!view.contains_node(&"ghost"));
        assert_eq!(view.preorder("a"), vec!["a", "ghost"]);
    }
}
