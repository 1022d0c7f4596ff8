//! Memoised graph for the active map.

use tracing::{debug, info};

use crate::{Adjacency, NavGraph, NavGraphBuilder, pads_for_map};

/// Holds the graph of the most recently requested map.
///
/// Asking for the same map id again returns the cached graph; a different
/// id rebuilds from the static pad table and replaces the cache wholesale.
/// Each session owns its own cache, so independent sessions never see each
/// other's graphs.
#[derive(Default)]
pub struct GraphCache {
    map_id:    Option<String>,
    graph:     NavGraph,
    adjacency: Adjacency,
    builds:    u64,
}

impl GraphCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache that builds graphs with a non-default adjacency policy.
    pub fn with_adjacency(adjacency: Adjacency) -> Self {
        Self { adjacency, ..Self::default() }
    }

    /// Return the graph for `map_id`, rebuilding only on a map change.
    ///
    /// Unknown map ids produce an empty graph, not an error.
    pub fn graph_for(&mut self, map_id: &str) -> &NavGraph {
        if self.map_id.as_deref() == Some(map_id) {
            debug!(map_id, "nav graph cache hit");
            return &self.graph;
        }

        let pads = pads_for_map(map_id);
        let mut b = NavGraphBuilder::with_capacity(pads.len()).adjacency(self.adjacency);
        for pad in pads {
            b.add_node(pad.position, pad.kind);
        }
        self.graph = b.build();
        self.map_id = Some(map_id.to_owned());
        self.builds += 1;
        info!(map_id, pads = self.graph.node_count(), "loaded boost pads for map");
        &self.graph
    }

    /// The cached `(map_id, graph)` pair, if any map has been requested.
    pub fn current(&self) -> Option<(&str, &NavGraph)> {
        self.map_id.as_deref().map(|id| (id, &self.graph))
    }

    /// Drop the cached graph so the next request rebuilds.
    pub fn invalidate(&mut self) {
        self.map_id = None;
        self.graph = NavGraph::empty();
    }

    /// Number of graph builds performed so far.
    pub fn build_count(&self) -> u64 {
        self.builds
    }
}
