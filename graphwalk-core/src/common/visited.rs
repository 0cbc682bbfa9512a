//! Visited sets for graph traversals.
//!
//! Two strategies, deliberately kept apart:
//! - [`IdentitySet`]: dense flags over arena slots. Two vertices carrying the
//!   same value are still two different slots.
//! - `HashSet<N>`: keyed by node value. Two airports with the same code are
//!   the same node.

use std::collections::HashSet;
use std::hash::Hash;

use crate::vertex::VertexId;

/// A set that records which nodes a traversal has already seen.
pub trait VisitedSet<N> {
    /// Marks `node` as visited.
    ///
    /// Returns `true` iff the node was not visited before this call.
    fn mark(&mut self, node: &N) -> bool;

    /// Checks whether `node` has been marked.
    fn is_marked(&self, node: &N) -> bool;

    /// Number of distinct nodes marked so far.
    fn marked_count(&self) -> usize;
}

impl<N: Clone + Eq + Hash> VisitedSet<N> for HashSet<N> {
    fn mark(&mut self, node: &N) -> bool {
        if self.contains(node) {
            return false;
        }
        self.insert(node.clone())
    }

    fn is_marked(&self, node: &N) -> bool {
        self.contains(node)
    }

    fn marked_count(&self) -> usize {
        self.len()
    }
}

/// Identity-keyed visited set for [`VertexId`] handles.
#[derive(Debug, Clone, Default)]
pub struct IdentitySet {
    flags: Vec<bool>,
    count: usize,
}

impl IdentitySet {
    /// Creates a set sized for a graph with `slots` vertices.
    pub fn with_capacity(slots: usize) -> Self {
        Self {
            flags: vec![false; slots],
            count: 0,
        }
    }
}

impl VisitedSet<VertexId> for IdentitySet {
    fn mark(&mut self, node: &VertexId) -> bool {
        let idx = node.index();
        if idx >= self.flags.len() {
            self.flags.resize(idx + 1, false);
        }
        if self.flags[idx] {
            return false;
        }
        self.flags[idx] = true;
        self.count += 1;
        true
    }

    fn is_marked(&self, node: &VertexId) -> bool {
        self.flags.get(node.index()).copied().unwrap_or(false)
    }

    fn marked_count(&self) -> usize {
        self.count
    }
}
