//! Airport/flight network.
//!
//! Airports are compared by code, so visited tracking and destination
//! matching are value-based. Routes are stored in a `petgraph` directed
//! graph so callers can also run petgraph's own algorithms over it.

use std::collections::{HashMap, HashSet};
use std::fmt;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use serde::{Deserialize, Serialize};

use crate::common::GraphTraversal;

/// An airport, identified by its code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Airport {
    code: String,
}

impl Airport {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// Directed graph of airports connected by outbound flights.
#[derive(Debug, Clone, Default)]
pub struct FlightNetwork {
    graph: DiGraph<Airport, ()>,
    index: HashMap<Airport, NodeIndex>,
}

impl FlightNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an airport. Adding a known code is a no-op.
    pub fn add_airport(&mut self, airport: Airport) -> NodeIndex {
        if let Some(&idx) = self.index.get(&airport) {
            return idx;
        }
        let idx = self.graph.add_node(airport.clone());
        self.index.insert(airport, idx);
        idx
    }

    /// Adds an outbound flight `from -> to`, registering either airport if needed.
    pub fn add_flight(&mut self, from: &Airport, to: &Airport) {
        let a = self.add_airport(from.clone());
        let b = self.add_airport(to.clone());
        self.graph.add_edge(a, b, ());
    }

    pub fn contains(&self, airport: &Airport) -> bool {
        self.index.contains_key(airport)
    }

    /// Destinations of the outbound flights of `airport`, in the order the
    /// flights were added. Unknown airports have no flights.
    pub fn outbound_flights(&self, airport: &Airport) -> Vec<Airport> {
        let Some(&idx) = self.index.get(airport) else {
            return Vec::new();
        };
        // petgraph yields the most recently added edge first
        let mut out: Vec<Airport> = self
            .graph
            .neighbors_directed(idx, Direction::Outgoing)
            .map(|n| self.graph[n].clone())
            .collect();
        out.reverse();
        out
    }

    pub fn airport_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn flight_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Node index of an airport in [`FlightNetwork::as_graph`].
    pub fn node_index(&self, airport: &Airport) -> Option<NodeIndex> {
        self.index.get(airport).copied()
    }

    /// The underlying petgraph graph.
    pub fn as_graph(&self) -> &DiGraph<Airport, ()> {
        &self.graph
    }
}

impl GraphTraversal for FlightNetwork {
    type Node = Airport;
    type Visited = HashSet<Airport>;

    fn neighbors(&self, node: &Airport) -> Vec<Airport> {
        self.outbound_flights(node)
    }

    fn contains_node(&self, node: &Airport) -> bool {
        self.contains(node)
    }

    fn visited_set(&self) -> HashSet<Airport> {
        HashSet::new()
    }
}
