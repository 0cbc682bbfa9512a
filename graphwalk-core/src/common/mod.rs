//! Traversal machinery shared by every graph representation.
//!
//! Each representation implements [`GraphTraversal`] once and picks the
//! visited-set strategy that matches how its nodes are identified.

mod graph_trait;
mod visited;

pub use graph_trait::GraphTraversal;
pub use visited::{IdentitySet, VisitedSet};
