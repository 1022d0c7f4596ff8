//! Unit tests for bm-pads.
//!
//! All tests use hand-built graphs or the static tables; no host needed.

#[cfg(test)]
mod helpers {
    use bm_core::{PadKind, Vec3};
    use crate::{Adjacency, NavGraph, NavGraphBuilder};

    /// Unit square with side 100:
    ///
    ///   3:(0,100)   2:(100,100)
    ///   0:(0,0)     1:(100,0)
    pub fn square(adjacency: Adjacency) -> NavGraph {
        let mut b = NavGraphBuilder::new().adjacency(adjacency);
        b.add_node(Vec3::new(0.0, 0.0, 0.0), PadKind::Minor);
        b.add_node(Vec3::new(100.0, 0.0, 0.0), PadKind::Minor);
        b.add_node(Vec3::new(100.0, 100.0, 0.0), PadKind::Major);
        b.add_node(Vec3::new(0.0, 100.0, 0.0), PadKind::Minor);
        b.build()
    }

    /// The same square with only its four sides as edges.  Built by hand
    /// because no adjacency policy produces exactly this shape.
    pub fn square_sides() -> NavGraph {
        let mut g = square(Adjacency::Complete);
        g.adjacency = vec![
            vec![bm_core::PadId(1), bm_core::PadId(3)],
            vec![bm_core::PadId(0), bm_core::PadId(2)],
            vec![bm_core::PadId(1), bm_core::PadId(3)],
            vec![bm_core::PadId(0), bm_core::PadId(2)],
        ];
        g
    }

    /// Two far-apart pairs; `KNearest(1)` leaves them disconnected.
    pub fn two_islands() -> NavGraph {
        let mut b = NavGraphBuilder::new().adjacency(Adjacency::KNearest(1));
        b.add_node(Vec3::new(0.0, 0.0, 0.0), PadKind::Minor);
        b.add_node(Vec3::new(10.0, 0.0, 0.0), PadKind::Minor);
        b.add_node(Vec3::new(5_000.0, 0.0, 0.0), PadKind::Minor);
        b.add_node(Vec3::new(5_010.0, 0.0, 0.0), PadKind::Minor);
        b.build()
    }
}

// ── Layout tables ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod layout {
    use bm_core::PadKind;
    use crate::pads_for_map;

    #[test]
    fn standard_map_has_sixteen_pads() {
        let pads = pads_for_map("Stadium_P");
        assert_eq!(pads.len(), 16);
        assert_eq!(pads.iter().filter(|p| p.kind == PadKind::Major).count(), 8);
    }

    #[test]
    fn variants_share_layout() {
        assert_eq!(pads_for_map("beach_p_night"), pads_for_map("stadium_p"));
        assert_eq!(pads_for_map("snowystadium_p").len(), 16);
    }

    #[test]
    fn hoops_and_dropshot() {
        assert_eq!(pads_for_map("HoopsStadium_P").len(), 8);
        assert!(pads_for_map("dropshot_p").is_empty());
    }

    #[test]
    fn unknown_map_is_empty_not_error() {
        assert!(pads_for_map("no_such_map").is_empty());
        assert!(pads_for_map("").is_empty());
    }
}

// ── Graph construction ────────────────────────────────────────────────────────

#[cfg(test)]
mod graph {
    use bm_core::{PadId, PadKind, Vec3};
    use crate::{Adjacency, NavGraph, NavGraphBuilder, pads_for_map};

    #[test]
    fn empty_build() {
        let g = NavGraphBuilder::new().build();
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn complete_graph_edge_count() {
        let g = NavGraph::from_layout(pads_for_map("stadium_p"));
        assert_eq!(g.node_count(), 16);
        assert_eq!(g.edge_count(), 16 * 15 / 2);
        for id in 0..16 {
            assert_eq!(g.neighbors(PadId(id)).len(), 15);
        }
    }

    #[test]
    fn neighbors_are_valid_and_symmetric() {
        for g in [
            NavGraph::from_layout(pads_for_map("stadium_p")),
            super::helpers::two_islands(),
        ] {
            for node in &g.nodes {
                for &nb in g.neighbors(node.id) {
                    assert!(g.contains(nb));
                    assert_ne!(nb, node.id, "no self loops");
                    assert!(g.neighbors(nb).contains(&node.id), "{nb} -> {} missing", node.id);
                }
            }
        }
    }

    #[test]
    fn k_nearest_links_only_close_nodes() {
        let g = super::helpers::two_islands();
        assert_eq!(g.neighbors(PadId(0)), &[PadId(1)]);
        assert_eq!(g.neighbors(PadId(2)), &[PadId(3)]);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn neighbors_of_unknown_id_is_empty() {
        let g = super::helpers::square(Adjacency::Complete);
        assert!(g.neighbors(PadId(99)).is_empty());
        assert!(g.node(PadId::INVALID).is_none());
    }

    #[test]
    fn nearest_example() {
        let g = super::helpers::square(Adjacency::Complete);
        assert_eq!(g.nearest(Vec3::new(5.0, 5.0, 0.0)), Some(PadId(0)));
        assert_eq!(g.nearest(Vec3::new(90.0, 95.0, 0.0)), Some(PadId(2)));
    }

    #[test]
    fn nearest_tie_goes_to_lowest_index() {
        let g = super::helpers::square(Adjacency::Complete);
        // Centre is equidistant from all four corners.
        assert_eq!(g.nearest(Vec3::new(50.0, 50.0, 0.0)), Some(PadId(0)));
        // Midpoint of the 1–2 side.
        assert_eq!(g.nearest(Vec3::new(100.0, 50.0, 0.0)), Some(PadId(1)));
    }

    #[test]
    fn nearest_single_node_always_wins() {
        let mut b = NavGraphBuilder::new();
        b.add_node(Vec3::new(1.0, 2.0, 3.0), PadKind::Major);
        let g = b.build();
        for q in [Vec3::ZERO, Vec3::new(-1e6, 5e5, 0.0), Vec3::new(1.0, 2.0, 3.0)] {
            assert_eq!(g.nearest(q), Some(PadId(0)));
        }
    }

    #[test]
    fn nearest_on_empty_graph() {
        let g = NavGraph::empty();
        assert_eq!(g.nearest(Vec3::ZERO), None);
        assert_eq!(g.nearest_or_invalid(Vec3::ZERO), PadId::INVALID);
    }
}

// ── Graph cache ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod cache {
    use crate::GraphCache;

    #[test]
    fn same_map_is_not_rebuilt() {
        let mut c = GraphCache::new();
        assert_eq!(c.graph_for("stadium_p").node_count(), 16);
        assert_eq!(c.graph_for("stadium_p").node_count(), 16);
        assert_eq!(c.build_count(), 1);
    }

    #[test]
    fn map_change_rebuilds() {
        let mut c = GraphCache::new();
        c.graph_for("stadium_p");
        assert_eq!(c.graph_for("hoopsstadium_p").node_count(), 8);
        assert_eq!(c.build_count(), 2);
        assert_eq!(c.current().map(|(id, _)| id), Some("hoopsstadium_p"));
    }

    #[test]
    fn unknown_map_yields_empty_graph() {
        let mut c = GraphCache::new();
        assert!(c.graph_for("mystery_p").is_empty());
        // Still memoised.
        c.graph_for("mystery_p");
        assert_eq!(c.build_count(), 1);
    }

    #[test]
    fn independent_caches_do_not_share_state() {
        let mut a = GraphCache::new();
        let mut b = GraphCache::new();
        a.graph_for("stadium_p");
        assert!(b.current().is_none());
        assert!(b.graph_for("dropshot_p").is_empty());
        assert_eq!(a.graph_for("stadium_p").node_count(), 16);
        assert_eq!(a.build_count(), 1);
    }

    #[test]
    fn invalidate_forces_rebuild() {
        let mut c = GraphCache::new();
        c.graph_for("stadium_p");
        c.invalidate();
        assert!(c.current().is_none());
        c.graph_for("stadium_p");
        assert_eq!(c.build_count(), 2);
    }
}

// ── Routing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use bm_core::PadId;
    use crate::{Adjacency, BestFirstRouter, NavGraph, PadError, Router, Strategy, find_path};

    #[test]
    fn same_node_is_single_element_route() {
        let g = super::helpers::square(Adjacency::Complete);
        for s in 0..4 {
            for h in [false, true] {
                assert_eq!(find_path(&g, PadId(s), PadId(s), h).nodes, vec![PadId(s)]);
            }
        }
    }

    #[test]
    fn complete_square_takes_the_diagonal() {
        let g = super::helpers::square(Adjacency::Complete);
        let plan = find_path(&g, PadId(0), PadId(2), false);
        assert_eq!(plan.nodes, vec![PadId(0), PadId(2)]);
        assert!((plan.total_cost(&g) - 141.421_36).abs() < 1e-3);
    }

    #[test]
    fn sides_only_square_prefers_lowest_index_neighbor() {
        let g = super::helpers::square_sides();
        // 0→1→2 and 0→3→2 both cost 200.
        for h in [false, true] {
            let plan = find_path(&g, PadId(0), PadId(2), h);
            assert_eq!(plan.nodes, vec![PadId(0), PadId(1), PadId(2)]);
            assert_eq!(plan.total_cost(&g), 200.0);
        }
    }

    #[test]
    fn route_endpoints() {
        let g = super::helpers::square_sides();
        let plan = find_path(&g, PadId(3), PadId(1), true);
        assert_eq!(plan.start(), Some(PadId(3)));
        assert_eq!(plan.goal(), Some(PadId(1)));
        assert_eq!(plan.len(), 3);
    }

    #[test]
    fn invalid_indices_yield_empty() {
        let g = super::helpers::square(Adjacency::Complete);
        assert!(find_path(&g, PadId(0), PadId(4), false).is_empty());
        assert!(find_path(&g, PadId::INVALID, PadId(1), true).is_empty());
        assert_eq!(
            BestFirstRouter.route(&g, PadId(9), PadId(1), Strategy::UniformCost),
            Err(PadError::NodeNotFound(PadId(9)))
        );
    }

    #[test]
    fn empty_graph_yields_empty() {
        let g = NavGraph::empty();
        assert!(find_path(&g, PadId(0), PadId(0), false).is_empty());
        assert_eq!(
            BestFirstRouter.route(&g, PadId(0), PadId(0), Strategy::AStar),
            Err(PadError::EmptyGraph)
        );
    }

    #[test]
    fn dangling_neighbour_is_ignored() {
        let mut g = super::helpers::square_sides();
        g.adjacency[0].push(PadId(9));
        g.adjacency[1].push(PadId::INVALID);
        for h in [false, true] {
            assert_eq!(find_path(&g, PadId(0), PadId(2), h).nodes, vec![PadId(0), PadId(1), PadId(2)]);
        }
    }

    #[test]
    fn disconnected_graph_has_no_route() {
        let g = super::helpers::two_islands();
        for strategy in [Strategy::UniformCost, Strategy::AStar] {
            assert_eq!(
                BestFirstRouter.route(&g, PadId(0), PadId(3), strategy),
                Err(PadError::NoRoute { from: PadId(0), to: PadId(3) })
            );
        }
        assert!(find_path(&g, PadId(0), PadId(3), false).is_empty());
        // Within an island routing still works.
        assert_eq!(find_path(&g, PadId(2), PadId(3), true).nodes, vec![PadId(2), PadId(3)]);
    }

    #[test]
    fn sparse_chain_routes_through_every_node() {
        use bm_core::{PadKind, Vec3};
        use crate::NavGraphBuilder;

        // A chain along the X axis with k = 1: the only path is the chain.
        let mut b = NavGraphBuilder::new().adjacency(Adjacency::KNearest(1));
        for x in [0.0, 100.0, 250.0, 450.0] {
            b.add_node(Vec3::new(x, 0.0, 0.0), PadKind::Minor);
        }
        let g = b.build();
        let plan = find_path(&g, PadId(0), PadId(3), true);
        assert_eq!(plan.nodes, vec![PadId(0), PadId(1), PadId(2), PadId(3)]);
        assert_eq!(plan.total_cost(&g), 450.0);
    }

    #[test]
    fn plan_segments_follow_positions() {
        let g = super::helpers::square_sides();
        let plan = find_path(&g, PadId(0), PadId(2), false);
        let segs: Vec<_> = plan.segments(&g).collect();
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].0, g.nodes[0].position);
        assert_eq!(segs[1].1, g.nodes[2].position);
    }
}

// ── Optimality property ───────────────────────────────────────────────────────

#[cfg(test)]
mod optimality {
    use proptest::prelude::*;

    use bm_core::{PadId, PadKind, Vec3};
    use crate::{Adjacency, BestFirstRouter, NavGraph, NavGraphBuilder, Router};
    use crate::Strategy as Search;

    fn graph_from(points: &[(f32, f32, f32)], adjacency: Adjacency) -> NavGraph {
        let mut b = NavGraphBuilder::new().adjacency(adjacency);
        for &(x, y, z) in points {
            b.add_node(Vec3::new(x, y, z), PadKind::Minor);
        }
        b.build()
    }

    fn arb_points() -> impl Strategy<Value = Vec<(f32, f32, f32)>> {
        prop::collection::vec(
            (-4096.0f32..4096.0, -5120.0f32..5120.0, 0.0f32..2000.0),
            1..24,
        )
    }

    proptest! {
        #[test]
        fn astar_and_dijkstra_agree_on_cost(
            points in arb_points(),
            k in 1usize..5,
            complete in any::<bool>(),
            s in any::<prop::sample::Index>(),
            t in any::<prop::sample::Index>(),
        ) {
            let adjacency = if complete { Adjacency::Complete } else { Adjacency::KNearest(k) };
            let g = graph_from(&points, adjacency);
            let start = PadId(s.index(points.len()) as u32);
            let goal = PadId(t.index(points.len()) as u32);

            let ucs = BestFirstRouter.route(&g, start, goal, Search::UniformCost);
            let astar = BestFirstRouter.route(&g, start, goal, Search::AStar);

            match (ucs, astar) {
                (Ok(a), Ok(b)) => {
                    let (ca, cb) = (a.total_cost(&g), b.total_cost(&g));
                    prop_assert!((ca - cb).abs() <= 1e-3 * ca.max(1.0), "{ca} vs {cb}");
                    prop_assert_eq!(a.start(), Some(start));
                    prop_assert_eq!(a.goal(), Some(goal));
                    prop_assert_eq!(b.start(), Some(start));
                    prop_assert_eq!(b.goal(), Some(goal));
                }
                (Err(a), Err(b)) => prop_assert_eq!(a, b),
                (a, b) => prop_assert!(false, "strategies disagree: {a:?} vs {b:?}"),
            }
        }

        #[test]
        fn complete_graph_route_is_never_longer_than_direct(
            points in arb_points(),
            s in any::<prop::sample::Index>(),
            t in any::<prop::sample::Index>(),
        ) {
            let g = graph_from(&points, Adjacency::Complete);
            let start = PadId(s.index(points.len()) as u32);
            let goal = PadId(t.index(points.len()) as u32);
            let plan = BestFirstRouter.route(&g, start, goal, Search::AStar).unwrap();
            let direct = g.edge_cost(start, goal);
            prop_assert!(plan.total_cost(&g) <= direct + 1e-3 * direct.max(1.0));
        }
    }
}
