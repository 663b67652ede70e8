//! Exchange graph
//!
//! This module contains the order book graph:
//! - NodeId, Node, Market: arena-indexed vertices and their offer books
//! - Exchange: the graph container
//! - OfferRow loading from snapshots

pub mod exchange;
pub mod node;
pub mod snapshot;

pub use exchange::{Exchange, GraphStats};
pub use node::{Market, Node, NodeId};
pub use snapshot::{GraphError, LoadStats, OfferRow};
