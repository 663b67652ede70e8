//! The exchange graph
//!
//! An arena of asset nodes plus an asset-to-id index. Node ids are
//! handed out densely in first-seen order and never change; lookups
//! never create nodes unless asked to.

use crate::core::{Asset, Offer};
use crate::graph::node::{Node, NodeId};
use std::collections::HashMap;

/// Node, market and offer counts for one graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphStats {
    pub nodes: usize,
    pub markets: usize,
    pub offers: usize,
}

/// In-memory order book graph
#[derive(Debug, Clone, Default)]
pub struct Exchange {
    nodes: Vec<Node>,
    index: HashMap<Asset, NodeId>,
}

impl Exchange {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Id of the node holding `asset`, creating the node on first sight.
    ///
    /// Idempotent: the id returned for an asset never changes, whatever
    /// order assets show up in.
    pub fn get_or_create_node(&mut self, asset: &Asset) -> NodeId {
        if let Some(&id) = self.index.get(asset) {
            return id;
        }
        assert!(self.nodes.len() < u32::MAX as usize, "node arena full");
        let id = NodeId::from_raw(self.nodes.len() as u32);
        self.nodes.push(Node::new(asset.clone()));
        self.index.insert(asset.clone(), id);
        id
    }

    /// Non-creating lookup
    #[inline]
    pub fn node_id(&self, asset: &Asset) -> Option<NodeId> {
        self.index.get(asset).copied()
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Whether `id` addresses a node of this graph
    #[inline(always)]
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    #[inline(always)]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes with their ids, in creation order
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId::from_raw(i as u32), node))
    }

    /// Insert one offer, creating both endpoints as needed.
    ///
    /// Returns the (selling, buying) node ids. Self-markets and
    /// duplicate offers are stored as given.
    pub fn add_offer(&mut self, selling: &Asset, buying: &Asset, offer: Offer) -> (NodeId, NodeId) {
        let from = self.get_or_create_node(selling);
        let to = self.get_or_create_node(buying);
        self.nodes[from.index()].push_offer(to, offer);
        (from, to)
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            nodes: self.nodes.len(),
            markets: self.nodes.iter().map(Node::out_degree).sum(),
            offers: self.nodes.iter().map(Node::offer_count).sum(),
        }
    }
}
