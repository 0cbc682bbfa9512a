//! End-to-end scenarios for graphwalk-core.

use crate::*;
use std::collections::HashSet;

fn words_graph(words: &[&str], edges: &[(usize, usize)]) -> (VertexGraph<String>, Vec<VertexId>) {
    let mut g = VertexGraph::with_capacity(words.len());
    let ids: Vec<_> = words.iter().map(|w| g.add_vertex(w.to_string())).collect();
    for &(from, to) in edges {
        g.add_edge(ids[from], ids[to]).unwrap();
    }
    (g, ids)
}

fn flights(routes: &[(&str, &str)]) -> FlightNetwork {
    let mut net = FlightNetwork::new();
    for (from, to) in routes {
        net.add_flight(&Airport::new(*from), &Airport::new(*to));
    }
    net
}

// Scenario: cat -> elephant -> dog
#[test]
fn test_longest_word_scenario() {
    let (g, ids) = words_graph(&["cat", "elephant", "dog"], &[(0, 1), (1, 2)]);
    assert_eq!(longest_word(&g, Some(ids[0])), "elephant");
    assert_eq!(longest_word(&g, Some(ids[2])), "dog");
}

// Scenario: X lists itself and Y; Y has no self-loop
#[test]
fn test_self_loopers_scenario() {
    let mut g = VertexGraph::new();
    let x = g.add_vertex("X".to_string());
    let y = g.add_vertex("Y".to_string());
    g.add_edge(x, x).unwrap();
    g.add_edge(x, y).unwrap();

    let mut out = WriteSink::new(Vec::new());
    print_self_loopers(&g, Some(x), &mut out).unwrap();
    assert_eq!(String::from_utf8(out.into_inner()).unwrap(), "X\n");
}

#[test]
fn test_unreachable_scenarios() {
    let chain: AdjacencyMap<&str> = [("A", vec!["B"]), ("B", vec!["C"]), ("C", vec![])]
        .into_iter()
        .collect();
    assert_eq!(unreachable(Some(&chain), &"A"), HashSet::new());

    let split: AdjacencyMap<&str> = [("A", vec!["B"]), ("C", vec![])].into_iter().collect();
    assert_eq!(unreachable(Some(&split), &"A"), HashSet::from(["C"]));

    assert_eq!(unreachable::<&str>(None, &"A"), HashSet::new());
    assert_eq!(
        unreachable(Some(&split), &"nope"),
        split.keys().copied().collect::<HashSet<_>>()
    );
}

#[test]
fn test_can_reach_properties() {
    let net = flights(&[("SEA", "SFO"), ("SFO", "SEA"), ("SFO", "JFK")]);
    let sea = Airport::new("SEA");
    let jfk = Airport::new("JFK");

    assert!(can_reach(&net, Some(&sea), Some(&sea)));
    assert!(can_reach(&net, Some(&sea), Some(&jfk)));
    assert!(!can_reach(&net, Some(&jfk), Some(&sea)));
    assert!(!can_reach(&net, None, Some(&sea)));
    assert!(!can_reach(&net, Some(&sea), None));
}

// Every query must terminate on a graph where every vertex is on a cycle
// and some vertices loop onto themselves, and visit each vertex once.
#[test]
fn test_all_queries_terminate_on_cycles() {
    let (mut g, ids) = words_graph(
        &["ab", "abcd", "a", "abc"],
        &[(0, 1), (1, 2), (2, 3), (3, 0), (2, 0)],
    );
    g.add_edge(ids[1], ids[1]).unwrap();
    g.add_edge(ids[3], ids[3]).unwrap();

    assert_eq!(g.preorder(ids[0]), ids);
    assert_eq!(short_words(&g, Some(ids[0]), 3), vec!["ab", "a"]);
    assert_eq!(longest_word(&g, Some(ids[2])), "abcd");
    assert_eq!(
        self_loopers(&g, Some(ids[0])),
        vec![&"abcd".to_string(), &"abc".to_string()]
    );
}

#[test]
fn test_short_words_has_no_duplicates_with_multi_edges() {
    let (g, ids) = words_graph(
        &["hub", "x", "y"],
        &[(0, 1), (0, 1), (0, 2), (2, 1), (1, 0)],
    );

    let mut out: Vec<String> = Vec::new();
    print_short_words(&g, Some(ids[0]), 4, &mut out).unwrap();
    assert_eq!(out, vec!["hub", "x", "y"]);
}

#[test]
fn test_longest_word_dominates_every_reachable_value() {
    let words = ["tree", "a", "forest", "grove", "leaf", "meadows"];
    let (g, ids) = words_graph(&words, &[(0, 1), (0, 2), (2, 3), (3, 4), (4, 0)]);

    let longest = longest_word(&g, Some(ids[0]));
    for id in g.preorder(ids[0]) {
        assert!(longest.len() >= g.data(id).unwrap().len());
    }
    // "meadows" is not reachable
    assert_eq!(longest, "forest");
}

#[test]
fn test_queries_are_stateless_between_calls() {
    let (g, ids) = words_graph(&["one", "two"], &[(0, 1)]);
    let first = short_words(&g, Some(ids[0]), 10);
    let second = short_words(&g, Some(ids[0]), 10);
    assert_eq!(first, second);
}

#[cfg(feature = "dot")]
#[test]
fn test_dot_marks_unreachable_nodes() {
    let g = build_adjacency([("A", "B")], ["C"]);
    let dead = unreachable(Some(&g), &"A");
    let dot = generate_dot(&g, &dead);
    assert!(dot.contains("\"C\" [fillcolor=lightcoral];"));
}
