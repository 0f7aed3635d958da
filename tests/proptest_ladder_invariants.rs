//! Property-based invariant tests for ladder generation and tracing.
//!
//! 1. No lane is touched by two rungs in the same row.
//! 2. Every rung joins two adjacent lanes inside the ladder.
//! 3. The last row is empty.
//! 4. Tracing every lane yields a permutation of the lanes.
//! 5. Geometric tracing agrees with the geometry-free walk.
//! 6. Tracing is deterministic.
//! 7. The same seed always produces the same ladder.
//! 8. Waypoints move either straight down or straight across.

use std::collections::HashSet;

use ghost_leg::settings::Canvas;
use ghost_leg::sim::{LadderGraph, Layout, is_permutation, trace};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

fn ladder(seed: u64, lanes: usize, rows: usize) -> LadderGraph {
    let mut rng = Pcg32::seed_from_u64(seed);
    LadderGraph::generate_with_rows(lanes, rows, &mut rng).expect("valid shape")
}

proptest! {
    #[test]
    fn rows_never_reuse_a_lane(seed in any::<u64>(), lanes in 2usize..=12, rows in 1usize..=20) {
        let graph = ladder(seed, lanes, rows);
        for (row, rungs) in graph.rows().enumerate() {
            let mut used = HashSet::new();
            for rung in rungs {
                prop_assert_eq!(rung.to, rung.from + 1);
                prop_assert!(rung.to < lanes);
                prop_assert!(used.insert(rung.from), "row {} reuses lane {}", row, rung.from);
                prop_assert!(used.insert(rung.to), "row {} reuses lane {}", row, rung.to);
            }
        }
        prop_assert!(graph.row(graph.row_count() - 1).is_empty());
        prop_assert!(graph.validate().is_ok());
    }
}

proptest! {
    #[test]
    fn tracing_is_a_bijection(seed in any::<u64>(), lanes in 2usize..=12) {
        let graph = ladder(seed, lanes, 10);
        let layout = Layout::for_graph(&graph, &Canvas::default());
        let terminals: Vec<usize> = (0..lanes)
            .map(|lane| trace(&graph, &layout, lane).unwrap().terminal_lane)
            .collect();
        prop_assert!(is_permutation(&terminals), "not a permutation: {:?}", terminals);
        prop_assert_eq!(terminals, graph.mapping());
    }
}

proptest! {
    #[test]
    fn tracing_is_deterministic(seed in any::<u64>(), lanes in 2usize..=8, pick in any::<prop::sample::Index>()) {
        let graph = ladder(seed, lanes, 10);
        let layout = Layout::for_graph(&graph, &Canvas::default());
        let lane = pick.index(lanes);
        let first = trace(&graph, &layout, lane).unwrap();
        let second = trace(&graph, &layout, lane).unwrap();
        prop_assert_eq!(first.terminal_lane, graph.destination(lane).unwrap());
        prop_assert_eq!(first, second);
    }
}

proptest! {
    #[test]
    fn same_seed_same_ladder(seed in any::<u64>(), lanes in 2usize..=8) {
        prop_assert_eq!(ladder(seed, lanes, 10), ladder(seed, lanes, 10));
    }
}

proptest! {
    #[test]
    fn waypoints_are_axis_aligned(seed in any::<u64>(), lanes in 2usize..=8, pick in any::<prop::sample::Index>()) {
        let graph = ladder(seed, lanes, 10);
        let layout = Layout::for_graph(&graph, &Canvas::default());
        let path = trace(&graph, &layout, pick.index(lanes)).unwrap();

        prop_assert_eq!(path.waypoints[0].y, layout.top_y());
        prop_assert_eq!(path.waypoints.last().unwrap().y, layout.bottom_y());
        for pair in path.waypoints.windows(2) {
            let down = pair[0].x == pair[1].x && pair[1].y > pair[0].y;
            let across = pair[0].y == pair[1].y && pair[0].x != pair[1].x;
            prop_assert!(down || across, "bad step {:?} -> {:?}", pair[0], pair[1]);
        }
    }
}

proptest! {
    #[test]
    fn out_of_range_lane_is_rejected(seed in any::<u64>(), lanes in 2usize..=8, extra in 0usize..5) {
        let graph = ladder(seed, lanes, 10);
        let layout = Layout::for_graph(&graph, &Canvas::default());
        prop_assert!(trace(&graph, &layout, lanes + extra).is_err());
        prop_assert!(graph.destination(lanes + extra).is_err());
    }
}
