//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use graphwalk_core::prelude::*;
//! ```

pub use crate::error::{GraphwalkError, GraphwalkResult};

// Graph representations and traversal
pub use crate::common::GraphTraversal;
pub use crate::flights::{Airport, FlightNetwork};
pub use crate::graph::AdjacencyMap;
pub use crate::vertex::{VertexGraph, VertexId};

// Queries
pub use crate::detect::unreachable;
pub use crate::reach::can_reach;
pub use crate::self_loops::{print_self_loopers, self_loopers};
pub use crate::words::{longest_word, print_short_words, short_words};

// Output
pub use crate::sink::{LineSink, WriteSink};
