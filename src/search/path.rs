//! Path accumulator
//!
//! Tracks the node sequence of one candidate route plus a visited set
//! for O(1) membership tests. The search extends a single accumulator in
//! place and undoes each append on the way back out, so path state costs
//! nothing per branch; cloning happens only when a route is recorded.

use crate::graph::{Exchange, NodeId};
use crate::search::dfs::MaxHops;
use std::collections::HashSet;
use std::fmt;

/// A route through the graph, one node per market crossed plus the start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    nodes: Vec<NodeId>,
    visited: HashSet<NodeId>,
}

impl Path {
    /// Empty path with room for the deepest legal route
    pub fn new() -> Self {
        let deepest = MaxHops::CEILING.get() as usize + 1;
        Self {
            nodes: Vec::with_capacity(deepest),
            visited: HashSet::with_capacity(deepest),
        }
    }

    /// Append a node and mark it visited.
    ///
    /// Appending a node already on the path is a caller bug; the search
    /// never does it.
    pub fn append(&mut self, id: NodeId) {
        debug_assert!(!self.visited.contains(&id), "node {} appended twice", id);
        self.nodes.push(id);
        self.visited.insert(id);
    }

    /// Undo the most recent append
    pub(crate) fn pop(&mut self) -> Option<NodeId> {
        let id = self.nodes.pop()?;
        self.visited.remove(&id);
        Some(id)
    }

    /// O(1) membership test
    #[inline]
    pub fn is_visited(&self, id: NodeId) -> bool {
        self.visited.contains(&id)
    }

    #[inline(always)]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Markets crossed: one less than the node count, 0 when empty
    #[inline]
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Render the route against the graph it came from
    pub fn display<'a>(&'a self, exchange: &'a Exchange) -> PathDisplay<'a> {
        PathDisplay {
            path: self,
            exchange,
        }
    }
}

impl Default for Path {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowed display adapter resolving node ids to their assets
pub struct PathDisplay<'a> {
    path: &'a Path,
    exchange: &'a Exchange,
}

impl fmt::Display for PathDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return write!(f, "(empty path)");
        }
        for (i, &id) in self.path.nodes().iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            match self.exchange.node(id) {
                Some(node) => write!(f, "{}", node.asset())?,
                None => write!(f, "{}", id)?,
            }
        }
        Ok(())
    }
}
