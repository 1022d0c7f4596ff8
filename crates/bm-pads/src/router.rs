//! Routing trait and the default best-first implementation.
//!
//! # One loop, two strategies
//!
//! [`BestFirstRouter`] runs a single priority-queue search.  The queue
//! priority is `g(n)` for [`Strategy::UniformCost`] (Dijkstra) and
//! `g(n) + h(n)` for [`Strategy::AStar`], where `h` is the straight-line
//! distance to the goal.  Because every edge cost is itself a straight-line
//! distance, `h` never overestimates and satisfies the triangle inequality,
//! so both strategies return a minimum-cost route.
//!
//! # Tie-breaking
//!
//! Heap entries are ordered by `(priority, PadId)`: among equal priorities
//! the lowest `PadId` is expanded first.  A node's predecessor is replaced
//! only on a strictly lower cost, so the first equal-cost route found (via
//! the lowest-index frontier node) is the one returned.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use tracing::debug;

use bm_core::{PadId, Vec3};

use crate::{NavGraph, PadError, PadResult};

// ── RoutePlan ─────────────────────────────────────────────────────────────────

/// Ordered pad ids from start to goal.  Empty means "no route".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutePlan {
    pub nodes: Vec<PadId>,
}

impl RoutePlan {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn start(&self) -> Option<PadId> {
        self.nodes.first().copied()
    }

    pub fn goal(&self) -> Option<PadId> {
        self.nodes.last().copied()
    }

    /// Sum of edge costs along the route in `graph`.
    ///
    /// Nodes not present in `graph` (a plan held across a map change) are
    /// skipped.
    pub fn total_cost(&self, graph: &NavGraph) -> f32 {
        self.segments(graph).map(|(a, b)| a.distance(b)).sum()
    }

    /// World-space segments between consecutive route nodes.
    pub fn segments<'a>(&'a self, graph: &'a NavGraph) -> impl Iterator<Item = (Vec3, Vec3)> + 'a {
        let points: Vec<Vec3> = self.nodes.iter().filter_map(|&id| graph.position(id)).collect();
        (1..points.len()).map(move |i| (points[i - 1], points[i]))
    }
}

// ── Strategy / Router ─────────────────────────────────────────────────────────

/// Search strategy for [`Router::route`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Dijkstra: priority is the accumulated cost.
    #[default]
    UniformCost,
    /// A*: accumulated cost plus straight-line distance to the goal.
    AStar,
}

impl Strategy {
    pub fn from_heuristic(use_heuristic: bool) -> Self {
        if use_heuristic { Strategy::AStar } else { Strategy::UniformCost }
    }
}

/// Pluggable routing engine.
pub trait Router: Send + Sync {
    /// Compute a minimum-cost route from `start` to `goal`.
    ///
    /// `start == goal` yields the single-node route `[start]`.
    fn route(
        &self,
        graph: &NavGraph,
        start: PadId,
        goal: PadId,
        strategy: Strategy,
    ) -> PadResult<RoutePlan>;
}

/// Priority-queue best-first search.  See the module docs.
pub struct BestFirstRouter;

impl Router for BestFirstRouter {
    fn route(
        &self,
        graph: &NavGraph,
        start: PadId,
        goal: PadId,
        strategy: Strategy,
    ) -> PadResult<RoutePlan> {
        best_first(graph, start, goal, strategy)
    }
}

/// Infallible convenience used by the session: any routing failure becomes
/// an empty plan, which callers check before drawing.
pub fn find_path(graph: &NavGraph, start: PadId, goal: PadId, use_heuristic: bool) -> RoutePlan {
    match BestFirstRouter.route(graph, start, goal, Strategy::from_heuristic(use_heuristic)) {
        Ok(plan) => plan,
        Err(e) => {
            debug!(error = %e, "route request yielded no path");
            RoutePlan::empty()
        }
    }
}

// ── Search internals ──────────────────────────────────────────────────────────

/// Total-ordered `f32` for the heap.
#[derive(Copy, Clone, Debug)]
struct Cost(f32);

impl PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

fn best_first(
    graph: &NavGraph,
    start: PadId,
    goal: PadId,
    strategy: Strategy,
) -> PadResult<RoutePlan> {
    if graph.is_empty() {
        return Err(PadError::EmptyGraph);
    }
    for id in [start, goal] {
        if !graph.contains(id) {
            return Err(PadError::NodeNotFound(id));
        }
    }
    if start == goal {
        return Ok(RoutePlan { nodes: vec![start] });
    }

    let goal_pos = graph.nodes[goal.index()].position;
    let estimate = |id: PadId| match strategy {
        Strategy::UniformCost => 0.0,
        Strategy::AStar => graph.nodes[id.index()].position.distance(goal_pos),
    };

    let n = graph.node_count();
    // dist[v] = best known cost to reach v.
    let mut dist = vec![f32::INFINITY; n];
    let mut prev = vec![PadId::INVALID; n];
    let mut closed = vec![false; n];

    dist[start.index()] = 0.0;

    // Reverse makes BinaryHeap (max) behave as a min-heap; PadId breaks ties.
    let mut heap: BinaryHeap<Reverse<(Cost, PadId)>> = BinaryHeap::new();
    heap.push(Reverse((Cost(estimate(start)), start)));

    while let Some(Reverse((_, node))) = heap.pop() {
        // Skip stale heap entries.
        if closed[node.index()] {
            continue;
        }
        closed[node.index()] = true;

        if node == goal {
            return Ok(reconstruct(&prev, start, goal));
        }

        let g = dist[node.index()];
        for &next in graph.neighbors(node) {
            if !graph.contains(next) || closed[next.index()] {
                continue;
            }
            let candidate = g + graph.edge_cost(node, next);
            if candidate < dist[next.index()] {
                dist[next.index()] = candidate;
                prev[next.index()] = node;
                heap.push(Reverse((Cost(candidate + estimate(next)), next)));
            }
        }
    }

    Err(PadError::NoRoute { from: start, to: goal })
}

fn reconstruct(prev: &[PadId], start: PadId, goal: PadId) -> RoutePlan {
    let mut nodes = vec![goal];
    let mut cur = goal;
    while cur != start {
        cur = prev[cur.index()];
        nodes.push(cur);
    }
    nodes.reverse();
    RoutePlan { nodes }
}
