//! In-memory path finding over a decentralized exchange order book
//!
//! Builds a directed asset graph from offer snapshots and enumerates
//! conversion routes from a source asset to a destination set, bounded
//! by a validated hop count. Pure and synchronous: no I/O happens here.

pub mod config;
pub mod core;
pub mod graph;
pub mod search;

// Re-export commonly used types
pub use self::core::{Asset, Offer, Price};
pub use config::{Config, ConfigError, SearchConfig};
pub use graph::{Exchange, GraphError, GraphStats, LoadStats, NodeId, OfferRow};
pub use search::{
    find_paths, find_paths_between, find_paths_parallel, find_paths_with_stats, MaxHops, Path,
    SearchError, SearchStats,
};

use thiserror::Error;

/// Main error type for the path finder
#[derive(Error, Debug)]
pub enum PathfinderError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PathfinderError>;
