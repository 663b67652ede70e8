//! Bounded path search
//!
//! This module contains the route enumeration machinery:
//! - Path: the accumulator a search extends and backtracks in place
//! - MaxHops: validated hop bound
//! - find_paths and friends: the depth-first enumeration itself

pub mod dfs;
pub mod path;

pub use dfs::{
    find_paths, find_paths_between, find_paths_parallel, find_paths_with_stats, MaxHops,
    SearchError, SearchStats,
};
pub use path::{Path, PathDisplay};
