//! Bounded depth-first path enumeration
//!
//! Walks the graph from a source toward a destination set, crossing at
//! most `max_hops` markets. A branch ends at the first destination it
//! reaches, so no result has a destination anywhere but its final node,
//! and no path ever revisits a node.

use crate::core::Asset;
use crate::graph::{Exchange, NodeId};
use crate::search::path::Path;
use std::fmt;
use thiserror::Error;

/// Hop bound for one search
///
/// Validated at construction: the settlement layer refuses routes
/// crossing more than [`MaxHops::CEILING`] markets, so no search is
/// allowed to look past that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MaxHops(u8);

impl MaxHops {
    /// Hard ceiling on route length
    pub const CEILING: Self = Self(6);

    /// Default bound; deeper routes are rarely executable in practice
    pub const DEFAULT: Self = Self(4);

    /// Create a bound. `None` above the ceiling.
    #[inline]
    pub const fn new(hops: u8) -> Option<Self> {
        if hops > Self::CEILING.0 {
            return None;
        }
        Some(Self(hops))
    }

    #[inline(always)]
    pub const fn get(&self) -> u8 {
        self.0
    }
}

impl Default for MaxHops {
    #[inline(always)]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for MaxHops {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors for searches whose inputs don't belong to the graph
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// An id from another graph, or from before a rebuild
    #[error("node {0} is not part of this graph")]
    NodeNotInGraph(NodeId),

    /// The graph has never seen this asset
    #[error("asset {0} not found in graph")]
    AssetNotFound(Asset),
}

/// Traversal counters for one search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Nodes entered, counting re-entries on distinct branches
    pub nodes_visited: u64,
    pub paths_found: usize,
}

/// Destination membership with O(1) lookup over the arena index space
struct DestinationSet {
    members: Vec<bool>,
}

impl DestinationSet {
    fn new(node_count: usize, destinations: &[NodeId]) -> Self {
        let mut members = vec![false; node_count];
        for id in destinations {
            members[id.index()] = true;
        }
        Self { members }
    }

    #[inline(always)]
    fn contains(&self, id: NodeId) -> bool {
        self.members[id.index()]
    }
}

/// Every simple path from `source` to a destination within `max_hops`
/// markets.
///
/// Deterministic: branches expand in market creation order, and a branch
/// ends at the first destination it reaches. Worst case visits O(b^h)
/// nodes for branching factor b and hop bound h, which is why the bound
/// is validated rather than open-ended.
///
/// # Errors
/// [`SearchError::NodeNotInGraph`] when `source` or any destination is
/// not an id of this graph. Checked up front; the traversal itself
/// cannot fail.
pub fn find_paths(
    exchange: &Exchange,
    source: NodeId,
    destinations: &[NodeId],
    max_hops: MaxHops,
) -> Result<Vec<Path>, SearchError> {
    find_paths_with_stats(exchange, source, destinations, max_hops).map(|(paths, _)| paths)
}

/// [`find_paths`] plus traversal counters
pub fn find_paths_with_stats(
    exchange: &Exchange,
    source: NodeId,
    destinations: &[NodeId],
    max_hops: MaxHops,
) -> Result<(Vec<Path>, SearchStats), SearchError> {
    check_membership(exchange, source, destinations)?;

    let targets = DestinationSet::new(exchange.node_count(), destinations);
    let mut path = Path::new();
    let mut found = Vec::new();
    let mut stats = SearchStats::default();
    visit(
        exchange, source, &targets, max_hops, &mut path, &mut found, &mut stats,
    );
    debug_assert!(path.is_empty());

    tracing::debug!(
        "Path search from {} over {} destinations: {} paths, {} nodes visited (max {} hops)",
        source,
        destinations.len(),
        found.len(),
        stats.nodes_visited,
        max_hops
    );
    Ok((found, stats))
}

/// Asset-level entry: resolve both assets, then search.
///
/// # Errors
/// [`SearchError::AssetNotFound`] for assets the graph has never seen;
/// lookups here never create nodes.
pub fn find_paths_between(
    exchange: &Exchange,
    source: &Asset,
    destination: &Asset,
    max_hops: MaxHops,
) -> Result<Vec<Path>, SearchError> {
    let from = exchange
        .node_id(source)
        .ok_or_else(|| SearchError::AssetNotFound(source.clone()))?;
    let to = exchange
        .node_id(destination)
        .ok_or_else(|| SearchError::AssetNotFound(destination.clone()))?;
    find_paths(exchange, from, &[to], max_hops)
}

/// [`find_paths`] with the top-level branches fanned out across scoped
/// threads.
///
/// Each branch searches an independent clone of the root path, and the
/// per-branch results concatenate in branch order, so the output is
/// exactly the sequential output.
pub fn find_paths_parallel(
    exchange: &Exchange,
    source: NodeId,
    destinations: &[NodeId],
    max_hops: MaxHops,
) -> Result<Vec<Path>, SearchError> {
    check_membership(exchange, source, destinations)?;

    let targets = DestinationSet::new(exchange.node_count(), destinations);
    let mut root = Path::new();
    root.append(source);
    if targets.contains(source) {
        return Ok(vec![root]);
    }
    if max_hops.get() == 0 {
        return Ok(Vec::new());
    }

    let source_node = exchange
        .node(source)
        .expect("graph edges stay within the arena");
    let branches: Vec<NodeId> = source_node
        .markets()
        .iter()
        .map(|m| m.to())
        .filter(|&to| !root.is_visited(to))
        .collect();

    let root = &root;
    let targets = &targets;
    let found = crossbeam_utils::thread::scope(|scope| {
        let handles: Vec<_> = branches
            .iter()
            .map(|&next| {
                scope.spawn(move |_| {
                    let mut path = root.clone();
                    let mut found = Vec::new();
                    let mut stats = SearchStats::default();
                    visit(
                        exchange, next, targets, max_hops, &mut path, &mut found, &mut stats,
                    );
                    found
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|handle| handle.join().expect("search branch panicked"))
            .collect::<Vec<_>>()
    })
    .expect("search scope panicked");

    tracing::debug!(
        "Parallel path search from {}: {} paths across {} branches",
        source,
        found.len(),
        branches.len()
    );
    Ok(found)
}

fn check_membership(
    exchange: &Exchange,
    source: NodeId,
    destinations: &[NodeId],
) -> Result<(), SearchError> {
    if !exchange.contains(source) {
        return Err(SearchError::NodeNotInGraph(source));
    }
    for &id in destinations {
        if !exchange.contains(id) {
            return Err(SearchError::NodeNotInGraph(id));
        }
    }
    Ok(())
}

fn visit(
    exchange: &Exchange,
    node: NodeId,
    targets: &DestinationSet,
    max_hops: MaxHops,
    path: &mut Path,
    found: &mut Vec<Path>,
    stats: &mut SearchStats,
) {
    stats.nodes_visited += 1;
    path.append(node);

    if targets.contains(node) {
        // First destination hit ends the branch
        found.push(path.clone());
        stats.paths_found += 1;
    } else if path.hops() < max_hops.get() as usize {
        let current = exchange
            .node(node)
            .expect("graph edges stay within the arena");
        for market in current.markets() {
            if !path.is_visited(market.to()) {
                visit(
                    exchange,
                    market.to(),
                    targets,
                    max_hops,
                    path,
                    found,
                    stats,
                );
            }
        }
    }

    path.pop();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Offer, Price};

    fn credit(code: &str) -> Asset {
        Asset::credit(code, "acme")
    }

    fn add_edge(ex: &mut Exchange, from: &str, to: &str) {
        let offer = Offer::new(100, Price::new(1, 2).unwrap()).unwrap();
        ex.add_offer(&credit(from), &credit(to), offer);
    }

    fn node(ex: &Exchange, code: &str) -> NodeId {
        ex.node_id(&credit(code)).unwrap()
    }

    #[test]
    fn test_direct_and_two_hop_routes() {
        let mut ex = Exchange::new();
        add_edge(&mut ex, "A", "B");
        add_edge(&mut ex, "B", "C");
        add_edge(&mut ex, "A", "C");
        let (a, b, c) = (node(&ex, "A"), node(&ex, "B"), node(&ex, "C"));

        let paths = find_paths(&ex, a, &[c], MaxHops::DEFAULT).unwrap();

        assert_eq!(paths.len(), 2);
        // A's market toward B was created first, so the two-hop route
        // comes out ahead of the direct one
        assert_eq!(paths[0].nodes(), &[a, b, c]);
        assert_eq!(paths[1].nodes(), &[a, c]);
    }

    #[test]
    fn test_branch_stops_at_first_destination() {
        let mut ex = Exchange::new();
        add_edge(&mut ex, "A", "B");
        add_edge(&mut ex, "B", "C");
        let (a, b, c) = (node(&ex, "A"), node(&ex, "B"), node(&ex, "C"));

        let paths = find_paths(&ex, a, &[b, c], MaxHops::DEFAULT).unwrap();

        // B ends the only branch; C is never reached through it
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].nodes(), &[a, b]);
    }

    #[test]
    fn test_source_as_destination_short_circuits() {
        let mut ex = Exchange::new();
        add_edge(&mut ex, "A", "B");
        let (a, b) = (node(&ex, "A"), node(&ex, "B"));

        let paths = find_paths(&ex, a, &[a, b], MaxHops::DEFAULT).unwrap();

        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].nodes(), &[a]);
        assert_eq!(paths[0].hops(), 0);
    }

    #[test]
    fn test_cycle_terminates_with_bounded_visits() {
        let mut ex = Exchange::new();
        add_edge(&mut ex, "A", "B");
        add_edge(&mut ex, "B", "C");
        add_edge(&mut ex, "C", "A");
        let unreachable = ex.get_or_create_node(&credit("D"));
        let a = node(&ex, "A");

        let (paths, stats) =
            find_paths_with_stats(&ex, a, &[unreachable], MaxHops::DEFAULT).unwrap();

        assert!(paths.is_empty());
        // A, B and C once each; the edge back to A is skipped as visited
        assert_eq!(stats.nodes_visited, 3);
        assert_eq!(stats.paths_found, 0);
    }

    #[test]
    fn test_zero_max_hops() {
        let mut ex = Exchange::new();
        add_edge(&mut ex, "A", "B");
        let (a, b) = (node(&ex, "A"), node(&ex, "B"));
        let zero = MaxHops::new(0).unwrap();

        let at_source = find_paths(&ex, a, &[a], zero).unwrap();
        assert_eq!(at_source.len(), 1);
        assert_eq!(at_source[0].nodes(), &[a]);

        let elsewhere = find_paths(&ex, a, &[b], zero).unwrap();
        assert!(elsewhere.is_empty());
    }

    #[test]
    fn test_hop_bound_limits_depth() {
        let mut ex = Exchange::new();
        add_edge(&mut ex, "A", "B");
        add_edge(&mut ex, "B", "C");
        add_edge(&mut ex, "C", "D");
        let (a, d) = (node(&ex, "A"), node(&ex, "D"));

        let two = MaxHops::new(2).unwrap();
        assert!(find_paths(&ex, a, &[d], two).unwrap().is_empty());

        let c = node(&ex, "C");
        let within = find_paths(&ex, a, &[c], two).unwrap();
        assert_eq!(within.len(), 1);
        assert_eq!(within[0].hops(), 2);

        let three = MaxHops::new(3).unwrap();
        let exact = find_paths(&ex, a, &[d], three).unwrap();
        assert_eq!(exact.len(), 1);
        assert_eq!(exact[0].nodes(), &[a, node(&ex, "B"), c, d]);
    }

    #[test]
    fn test_multiple_destinations_collects_all() {
        let mut ex = Exchange::new();
        add_edge(&mut ex, "A", "B");
        add_edge(&mut ex, "A", "C");
        let (a, b, c) = (node(&ex, "A"), node(&ex, "B"), node(&ex, "C"));

        let paths = find_paths(&ex, a, &[b, c], MaxHops::DEFAULT).unwrap();

        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].nodes(), &[a, b]);
        assert_eq!(paths[1].nodes(), &[a, c]);
    }

    #[test]
    fn test_self_market_never_loops() {
        let mut ex = Exchange::new();
        add_edge(&mut ex, "A", "A");
        add_edge(&mut ex, "A", "B");
        let (a, b) = (node(&ex, "A"), node(&ex, "B"));

        let paths = find_paths(&ex, a, &[b], MaxHops::DEFAULT).unwrap();

        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].nodes(), &[a, b]);
    }

    #[test]
    fn test_no_route_returns_empty() {
        let mut ex = Exchange::new();
        add_edge(&mut ex, "A", "B");
        let isolated = ex.get_or_create_node(&credit("Z"));
        let a = node(&ex, "A");

        assert!(find_paths(&ex, a, &[isolated], MaxHops::DEFAULT)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_stale_ids_rejected() {
        let mut ex = Exchange::new();
        add_edge(&mut ex, "A", "B");
        let a = node(&ex, "A");
        let stale = NodeId::from_raw(99);

        assert_eq!(
            find_paths(&ex, stale, &[a], MaxHops::DEFAULT),
            Err(SearchError::NodeNotInGraph(stale))
        );
        assert_eq!(
            find_paths(&ex, a, &[a, stale], MaxHops::DEFAULT),
            Err(SearchError::NodeNotInGraph(stale))
        );
    }

    #[test]
    fn test_unknown_asset_rejected() {
        let mut ex = Exchange::new();
        add_edge(&mut ex, "A", "B");

        let err = find_paths_between(&ex, &credit("A"), &credit("Z"), MaxHops::DEFAULT);
        assert_eq!(err, Err(SearchError::AssetNotFound(credit("Z"))));

        let err = find_paths_between(&ex, &Asset::Native, &credit("B"), MaxHops::DEFAULT);
        assert_eq!(err, Err(SearchError::AssetNotFound(Asset::Native)));
    }

    #[test]
    fn test_find_paths_between_resolves_assets() {
        let mut ex = Exchange::new();
        add_edge(&mut ex, "A", "B");
        add_edge(&mut ex, "B", "C");

        let paths = find_paths_between(&ex, &credit("A"), &credit("C"), MaxHops::DEFAULT).unwrap();

        assert_eq!(paths.len(), 1);
        assert_eq!(
            paths[0].display(&ex).to_string(),
            "A:acme -> B:acme -> C:acme"
        );
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut ex = Exchange::new();
        // Diamond with a tail and a cycle back to the source
        add_edge(&mut ex, "A", "B");
        add_edge(&mut ex, "A", "C");
        add_edge(&mut ex, "B", "D");
        add_edge(&mut ex, "C", "D");
        add_edge(&mut ex, "D", "E");
        add_edge(&mut ex, "D", "A");
        let (a, d, e) = (node(&ex, "A"), node(&ex, "D"), node(&ex, "E"));

        for bound in 0..=MaxHops::CEILING.get() {
            let max_hops = MaxHops::new(bound).unwrap();
            for dests in [&[d][..], &[e][..], &[d, e][..], &[a][..]] {
                let sequential = find_paths(&ex, a, dests, max_hops).unwrap();
                let parallel = find_paths_parallel(&ex, a, dests, max_hops).unwrap();
                assert_eq!(sequential, parallel);
            }
        }
    }

    #[test]
    fn test_parallel_rejects_stale_ids() {
        let mut ex = Exchange::new();
        add_edge(&mut ex, "A", "B");
        let a = node(&ex, "A");
        let stale = NodeId::from_raw(7);

        assert_eq!(
            find_paths_parallel(&ex, a, &[stale], MaxHops::DEFAULT),
            Err(SearchError::NodeNotInGraph(stale))
        );
    }

    #[test]
    fn test_max_hops_validation() {
        assert_eq!(MaxHops::new(0).unwrap().get(), 0);
        assert_eq!(MaxHops::new(6).unwrap().get(), 6);
        assert!(MaxHops::new(7).is_none());
        assert!(MaxHops::new(u8::MAX).is_none());
        assert_eq!(MaxHops::default(), MaxHops::DEFAULT);
        assert_eq!(MaxHops::DEFAULT.get(), 4);
        assert_eq!(MaxHops::CEILING.get(), 6);
    }
}
