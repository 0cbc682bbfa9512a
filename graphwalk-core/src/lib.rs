//! graphwalk-core: depth-first traversal queries over small in-memory graphs
//!
//! Three graph representations, one traversal primitive ("visit a node, mark
//! it seen, explore unseen neighbors") and five narrow questions asked with it.
//!
//! # Queries
//!
//! - [`short_words`] / [`print_short_words`]: reachable words shorter than `k`
//! - [`longest_word`]: longest reachable word, first in pre-order on ties
//! - [`self_loopers`] / [`print_self_loopers`]: reachable vertices that list themselves
//! - [`can_reach`]: airport-to-airport reachability over outbound flights
//! - [`unreachable`]: adjacency-map keys not reachable from a start key
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use graphwalk_core::prelude::*;
//!
//! let mut g = VertexGraph::new();
//! let cat = g.add_vertex("cat".to_string());
//! let elephant = g.add_vertex("elephant".to_string());
//! g.add_edge(cat, elephant)?;
//!
//! assert_eq!(longest_word(&g, Some(cat)), "elephant");
//! ```
//!
//! # Module Organization
//!
//! - [`common`]: the [`GraphTraversal`] trait and visited-set strategies
//! - [`vertex`]: identity-based vertex graph
//! - [`flights`]: value-based airport network (petgraph-backed)
//! - [`graph`]: adjacency maps
//! - [`words`], [`self_loops`], [`reach`], [`detect`]: the queries
//! - [`sink`]: line output for the printing queries
//! - [`config`], [`report`], [`logging`], [`error`]: ambient plumbing
//!
//! # Cargo Features
//!
//! - `dot` (default): Graphviz rendering of adjacency maps

pub mod common;
pub mod config;
pub mod detect;
pub mod error;
pub mod flights;
pub mod graph;
pub mod logging;
pub mod prelude;
pub mod reach;
pub mod report;
pub mod self_loops;
pub mod sink;
pub mod vertex;
pub mod words;

#[cfg(feature = "dot")]
pub mod visualize;

pub use common::{GraphTraversal, IdentitySet, VisitedSet};

// Error types
pub use error::{GraphwalkError, GraphwalkResult};

// Configuration
pub use config::{load_config, load_config_file, GraphwalkConfig, OutputConfig, DEFAULT_THRESHOLD};

// Graph representations
pub use flights::{Airport, FlightNetwork};
pub use graph::{build_adjacency, reachable_from, AdjacencyMap, AdjacencyView};
pub use vertex::{Vertex, VertexGraph, VertexId};

// Queries
pub use detect::unreachable;
pub use reach::can_reach;
pub use self_loops::{print_self_loopers, self_loopers};
pub use words::{longest_word, print_short_words, short_words};

// Output
pub use logging::{init_structured_logging, log_error, log_event, log_info, log_warn};
pub use report::{print_json, print_plain, write_json, write_plain, write_reach_json};
pub use sink::{LineSink, WriteSink};

#[cfg(feature = "dot")]
pub use visualize::generate_dot;

#[cfg(test)]
mod tests;
