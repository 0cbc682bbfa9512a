//! Unreachable key detection over adjacency maps.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::{debug, warn};

use crate::graph::{reachable_from, AdjacencyMap};

/// Keys of `graph` that cannot be reached from `start`.
///
/// The start itself is always reachable (zero-edge path), so it never shows
/// up in the result.
///
/// The two degenerate inputs are asymmetric and both are intentional:
/// - no map at all: empty set
/// - a map without `start` as an entry: every key of the map
pub fn unreachable<T>(graph: Option<&AdjacencyMap<T>>, start: &T) -> HashSet<T>
where
    T: Clone + Eq + Hash + Debug,
{
    let Some(graph) = graph else {
        return HashSet::new();
    };
    if !graph.contains_key(start) {
        warn!(start = ?start, keys = graph.len(), "start is not a key of the graph");
        return graph.keys().cloned().collect();
    }

    let reachable = reachable_from(graph, start);
    let dead: HashSet<T> = graph
        .keys()
        .filter(|k| !reachable.contains(*k))
        .cloned()
        .collect();

    debug!(start = ?start, keys = graph.len(), unreachable = dead.len(), "unreachable");
    dead
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: Vec<(&'static str, Vec<&'static str>)>) -> AdjacencyMap<&'static str> {
        entries.into_iter().collect()
    }

    #[test]
    fn test_chain_all_reachable() {
        let g = map(vec![("A", vec!["B"]), ("B", vec!["C"]), ("C", vec![])]);
        assert!(unreachable(Some(&g), &"A").is_empty());
    }

    #[test]
    fn test_disconnected_key() {
        let g = map(vec![("A", vec!["B"]), ("C", vec![])]);
        assert_eq!(unreachable(Some(&g), &"A"), HashSet::from(["C"]));
    }

    #[test]
    fn test_absent_graph_is_empty() {
        assert!(unreachable::<&str>(None, &"A").is_empty());
    }

    #[test]
    fn test_missing_start_returns_all_keys() {
        let g = map(vec![("A", vec!["B"]), ("B", vec![])]);
        assert_eq!(unreachable(Some(&g), &"Z"), HashSet::from(["A", "B"]));
    }

    #[test]
    fn test_start_only_reachable_from_others() {
        // B -> A but A has no way back
        let g = map(vec![("A", vec![]), ("B", vec!["A"])]);
        assert_eq!(unreachable(Some(&g), &"A"), HashSet::from(["B"]));
    }

    #[test]
    fn test_neighbor_without_entry_leads_nowhere() {
        let g = map(vec![("A", vec!["ghost"]), ("B", vec![])]);
        assert_eq!(unreachable(Some(&g), &"A"), HashSet::from(["B"]));
    }

    #[test]
    fn test_cycles_and_self_loops() {
        let g = map(vec![
            ("A", vec!["A", "B"]),
            ("B", vec!["A"]),
            ("C", vec!["C", "A"]),
        ]);
        assert_eq!(unreachable(Some(&g), &"A"), HashSet::from(["C"]));
        assert!(unreachable(Some(&g), &"C").is_empty());
    }

    #[test]
    fn test_integer_keys() {
        let g: AdjacencyMap<u32> = [(1, vec![2]), (2, vec![]), (3, vec![1])].into_iter().collect();
        assert_eq!(unreachable(Some(&g), &1), HashSet::from([3]));
    }
}
