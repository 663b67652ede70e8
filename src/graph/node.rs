//! Graph vertices and market edges
//!
//! A node owns its asset and its outgoing markets. Each market is the
//! edge toward one buying asset: the offers selling this node's asset
//! for that one, sorted by price ascending at all times.

use crate::core::{Asset, Offer};
use std::fmt;

/// Index of a node in the exchange arena
///
/// Ids are dense, start at 0 and stay stable for the lifetime of the
/// graph they came from. An id from one graph means nothing to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    #[inline(always)]
    pub const fn from_raw(id: u32) -> Self {
        Self(id)
    }

    #[inline(always)]
    pub const fn as_raw(&self) -> u32 {
        self.0
    }

    /// Position in the arena
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One outgoing edge: the offer book toward a single buying asset
#[derive(Debug, Clone)]
pub struct Market {
    to: NodeId,
    offers: Vec<Offer>,
}

impl Market {
    #[inline(always)]
    pub const fn to(&self) -> NodeId {
        self.to
    }

    /// Offers sorted by price ascending; equal prices keep arrival order
    #[inline(always)]
    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }
}

/// A vertex of the exchange graph
#[derive(Debug, Clone)]
pub struct Node {
    asset: Asset,
    markets: Vec<Market>,
}

impl Node {
    pub(crate) fn new(asset: Asset) -> Self {
        Self {
            asset,
            markets: Vec::new(),
        }
    }

    #[inline(always)]
    pub fn asset(&self) -> &Asset {
        &self.asset
    }

    /// Outgoing markets, in the order their first offer arrived
    #[inline(always)]
    pub fn markets(&self) -> &[Market] {
        &self.markets
    }

    /// The market toward `to`, if any offer ever targeted it
    pub fn market_to(&self, to: NodeId) -> Option<&Market> {
        self.markets.iter().find(|m| m.to == to)
    }

    #[inline(always)]
    pub fn out_degree(&self) -> usize {
        self.markets.len()
    }

    pub(crate) fn offer_count(&self) -> usize {
        self.markets.iter().map(|m| m.offers.len()).sum()
    }

    /// Insert at the sorted position; an equal price lands after the
    /// offers already resting at it.
    pub(crate) fn push_offer(&mut self, to: NodeId, offer: Offer) {
        let idx = match self.markets.iter().position(|m| m.to == to) {
            Some(idx) => idx,
            None => {
                self.markets.push(Market {
                    to,
                    offers: Vec::new(),
                });
                self.markets.len() - 1
            }
        };
        let offers = &mut self.markets[idx].offers;
        let at = offers.partition_point(|resting| resting.price() <= offer.price());
        offers.insert(at, offer);
    }
}
