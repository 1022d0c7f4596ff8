//! Navigation graph over one map's boost pads.
//!
//! # Data layout
//!
//! Nodes live in a `Vec<PickupNode>` indexed by `PadId`; adjacency is a
//! parallel `Vec<Vec<PadId>>`.  Edges carry no data of their own: the cost
//! of `a → b` is the straight-line distance between the two pad positions,
//! computed on demand.
//!
//! # Adjacency policy
//!
//! The default [`Adjacency::Complete`] connects every pad to every other pad.
//! Pad counts are small (≤ 16 on soccar maps), so the O(n²) build is paid
//! once per map change and no pad is ever unreachable.
//! [`Adjacency::KNearest`] keeps only each pad's `k` closest neighbours and
//! can leave the graph disconnected.

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use tracing::debug;

use bm_core::{PadId, PadKind, Vec3};

use crate::PadSpec;

/// A pickup node as loaded for the active map.  Immutable once built.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickupNode {
    pub id:       PadId,
    pub position: Vec3,
    pub kind:     PadKind,
}

/// How [`NavGraphBuilder::build`] connects nodes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Adjacency {
    /// Every node is a neighbour of every other node.
    #[default]
    Complete,
    /// Each node is linked to its `k` nearest nodes; links are made
    /// symmetric, so a node may end up with more than `k` neighbours.
    KNearest(usize),
}

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree used by [`Adjacency::KNearest`].
#[derive(Clone)]
struct NodeEntry {
    point: [f32; 3],
    id:    PadId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f32; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f32; 3]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        let dz = self.point[2] - point[2];
        dx * dx + dy * dy + dz * dz
    }
}

// ── NavGraph ──────────────────────────────────────────────────────────────────

/// Undirected pad graph.
///
/// Do not construct directly; use [`NavGraphBuilder`] or
/// [`NavGraph::from_layout`], which uphold the invariant: every `PadId` in
/// `adjacency` is a valid index into `nodes`, and `b ∈ adjacency[a]` ⇔
/// `a ∈ adjacency[b]`.  The router skips neighbour ids outside the graph
/// instead of panicking.
#[derive(Clone, Debug, Default)]
pub struct NavGraph {
    /// Nodes in load order.  Indexed by `PadId`.
    pub nodes: Vec<PickupNode>,
    /// Sorted, de-duplicated neighbour lists.  Indexed by `PadId`.
    pub adjacency: Vec<Vec<PadId>>,
}

impl NavGraph {
    /// A graph with no nodes: the "routing unavailable" signal.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a graph from a static pad table with the default adjacency.
    pub fn from_layout(pads: &[PadSpec]) -> Self {
        let mut b = NavGraphBuilder::with_capacity(pads.len());
        for pad in pads {
            b.add_node(pad.position, pad.kind);
        }
        b.build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: PadId) -> bool {
        id.index() < self.nodes.len()
    }

    // ── Node access ───────────────────────────────────────────────────────

    pub fn node(&self, id: PadId) -> Option<&PickupNode> {
        self.nodes.get(id.index())
    }

    pub fn position(&self, id: PadId) -> Option<Vec3> {
        self.node(id).map(|n| n.position)
    }

    /// Neighbours of `id`; empty for an id outside the graph.
    #[inline]
    pub fn neighbors(&self, id: PadId) -> &[PadId] {
        self.adjacency.get(id.index()).map_or(&[], Vec::as_slice)
    }

    /// Straight-line distance between two nodes.
    ///
    /// # Panics
    /// Panics if either id is outside the graph.  Routing only calls this
    /// with ids it has already validated.
    #[inline]
    pub fn edge_cost(&self, a: PadId, b: PadId) -> f32 {
        self.nodes[a.index()].position.distance(self.nodes[b.index()].position)
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Return the node closest to `point`, or `None` for an empty graph.
    ///
    /// Linear scan with a strict `<` comparison, so among equidistant nodes
    /// the one with the lowest index wins.
    pub fn nearest(&self, point: Vec3) -> Option<PadId> {
        let mut best: Option<(PadId, f32)> = None;
        for node in &self.nodes {
            let d = node.position.distance(point);
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((node.id, d));
            }
        }
        best.map(|(id, _)| id)
    }

    /// [`nearest`](Self::nearest), with [`PadId::INVALID`] for an empty graph.
    pub fn nearest_or_invalid(&self, point: Vec3) -> PadId {
        self.nearest(point).unwrap_or(PadId::INVALID)
    }
}

// ── NavGraphBuilder ───────────────────────────────────────────────────────────

/// Construct a [`NavGraph`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use bm_core::{PadKind, Vec3};
/// use bm_pads::NavGraphBuilder;
///
/// let mut b = NavGraphBuilder::new();
/// b.add_node(Vec3::new(0.0, 0.0, 0.0), PadKind::Minor);
/// b.add_node(Vec3::new(100.0, 0.0, 0.0), PadKind::Major);
/// b.add_node(Vec3::new(100.0, 100.0, 0.0), PadKind::Minor);
/// let g = b.build();
/// assert_eq!(g.node_count(), 3);
/// assert_eq!(g.edge_count(), 3); // complete
/// ```
#[derive(Default)]
pub struct NavGraphBuilder {
    nodes:     Vec<PickupNode>,
    adjacency: Adjacency,
}

impl NavGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize) -> Self {
        Self { nodes: Vec::with_capacity(nodes), adjacency: Adjacency::Complete }
    }

    /// Select the adjacency policy (default: [`Adjacency::Complete`]).
    pub fn adjacency(mut self, adjacency: Adjacency) -> Self {
        self.adjacency = adjacency;
        self
    }

    /// Add a node and return its `PadId` (sequential from 0).
    pub fn add_node(&mut self, position: Vec3, kind: PadKind) -> PadId {
        let id = PadId(self.nodes.len() as u32);
        self.nodes.push(PickupNode { id, position, kind });
        id
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Consume the builder and produce a [`NavGraph`].
    ///
    /// `Complete` is O(n²); `KNearest(k)` is O(n log n + n·k).
    pub fn build(self) -> NavGraph {
        let n = self.nodes.len();
        let mut adjacency: Vec<Vec<PadId>> = vec![Vec::new(); n];

        match self.adjacency {
            Adjacency::Complete => {
                for i in 0..n {
                    for j in i + 1..n {
                        adjacency[i].push(PadId(j as u32));
                        adjacency[j].push(PadId(i as u32));
                    }
                }
            }
            Adjacency::KNearest(k) => {
                let entries: Vec<NodeEntry> = self
                    .nodes
                    .iter()
                    .map(|node| NodeEntry { point: node.position.to_array(), id: node.id })
                    .collect();
                let tree = RTree::bulk_load(entries);

                for node in &self.nodes {
                    let nearest = tree
                        .nearest_neighbor_iter(&node.position.to_array())
                        .filter(|e| e.id != node.id)
                        .take(k);
                    for e in nearest {
                        adjacency[node.id.index()].push(e.id);
                        adjacency[e.id.index()].push(node.id);
                    }
                }
            }
        }

        for list in &mut adjacency {
            list.sort_unstable();
            list.dedup();
        }

        debug!(nodes = n, policy = ?self.adjacency, "built nav graph");
        NavGraph { nodes: self.nodes, adjacency }
    }
}
