//! Unit tests for gn-mobility.

use gn_core::{AgentId, MoveConfig, NodeId, Vec3};
use gn_spatial::{AStar, Grid, GridBuilder, Route, Router, SpatialError, SpatialResult};

use crate::{MobilityEngine, MobilityError, MobilityStore, MovementState};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Single row of 5 nodes, node `(x, 0)` at world `(x, 0, 0)`.
fn row_grid() -> Grid {
    GridBuilder::new(5, 1)
        .with_positions(|x, y| Vec3::new(x as f32, 0.0, y as f32))
        .build()
        .unwrap()
}

/// 1 unit per second, 0.1 unit arrival tolerance.
fn slow() -> MoveConfig {
    MoveConfig { move_speed: 1.0, arrive_tolerance: 0.1 }
}

fn engine(agent_count: usize) -> MobilityEngine<AStar> {
    MobilityEngine::new(AStar::new(), agent_count, slow())
}

/// Router that never finds anything.
#[derive(Default)]
struct NeverRoutes;

impl Router for NeverRoutes {
    fn route(&mut self, _: &Grid, _: NodeId, _: NodeId) -> SpatialResult<Option<Route>> {
        Ok(None)
    }
}

/// Router that always rejects its input.
struct Rejects;

impl Router for Rejects {
    fn route(&mut self, _: &Grid, start: NodeId, _: NodeId) -> SpatialResult<Option<Route>> {
        Err(SpatialError::NodeNotFound(start))
    }
}

// ── MovementState ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod movement_state {
    use super::*;

    #[test]
    fn advance_keeps_own_height() {
        let mut s = MovementState::at(Vec3::new(0.0, 2.0, 0.0));
        let reached = s.advance_towards(Vec3::new(1.0, 0.01, 0.0), 0.25, 0.1);
        assert!(!reached);
        assert!((s.position.x - 0.25).abs() < 1e-6);
        assert_eq!(s.position.y, 2.0);
    }

    #[test]
    fn advance_reports_arrival_within_tolerance() {
        let mut s = MovementState::at(Vec3::new(0.0, 0.0, 0.0));
        assert!(s.advance_towards(Vec3::new(0.0, 5.0, 0.5), 0.45, 0.1));
        assert_eq!(s.position.y, 0.0);
    }
}

// ── MobilityStore ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod mobility_store {
    use super::*;

    #[test]
    fn new_all_stationary() {
        let store = MobilityStore::new(3);
        assert_eq!(store.agent_count(), 3);
        for i in 0..3 {
            assert_eq!(store.states[i], MovementState::default());
            assert!(!store.is_moving(AgentId(i as u32)));
        }
        assert!(store.routes.is_empty());
    }

    #[test]
    fn remaining_follows_progress() {
        let mut store = MobilityStore::new(1);
        let a = AgentId(0);
        store.set_route(a, Route { nodes: vec![NodeId(1), NodeId(2), NodeId(3)], cost: 3.0 });
        assert_eq!(store.remaining(a), &[NodeId(1), NodeId(2), NodeId(3)]);
        store.states[0].next_index = 2;
        assert_eq!(store.remaining(a), &[NodeId(3)]);
        store.clear_route(a);
        assert!(store.remaining(a).is_empty());
        assert_eq!(store.states[0].next_index, 0);
    }

    #[test]
    fn place_drops_route() {
        let mut store = MobilityStore::new(1);
        store.set_route(AgentId(0), Route { nodes: vec![NodeId(1)], cost: 1.0 });
        store.place(AgentId(0), Vec3::new(3.0, 0.0, 0.0));
        assert!(!store.is_moving(AgentId(0)));
        assert_eq!(store.position(AgentId(0)), Some(Vec3::new(3.0, 0.0, 0.0)));
    }

    #[test]
    fn unknown_agent_has_nothing() {
        let store = MobilityStore::new(1);
        assert!(store.position(AgentId(5)).is_none());
        assert!(store.remaining(AgentId(5)).is_empty());
    }
}

// ── MobilityEngine ────────────────────────────────────────────────────────────

#[cfg(test)]
mod mobility_engine {
    use super::*;

    #[test]
    fn set_destination_snaps_both_ends() {
        let grid = row_grid();
        let mut eng = engine(1);
        eng.place(AgentId(0), Vec3::new(0.2, 0.0, 0.3)).unwrap();
        assert!(eng.set_destination(AgentId(0), Vec3::new(4.3, 0.0, -0.2), &grid).unwrap());
        let expected: Vec<_> = (1..5).map(|x| grid.id_at(x, 0).unwrap()).collect();
        assert_eq!(eng.remaining(AgentId(0)), expected.as_slice());
        assert!(eng.is_moving(AgentId(0)));
    }

    #[test]
    fn walks_route_one_node_per_second() {
        let grid = row_grid();
        let mut eng = engine(1);
        let a = AgentId(0);
        eng.place(a, Vec3::ZERO).unwrap();
        eng.set_destination(a, Vec3::new(4.0, 0.0, 0.0), &grid).unwrap();

        for frame in 1..4 {
            assert!(eng.step(&grid, 1.0).is_empty(), "arrived early at frame {frame}");
            assert_eq!(eng.remaining(a).len(), 4 - frame);
        }
        assert_eq!(eng.step(&grid, 1.0), vec![a]);
        assert!(!eng.is_moving(a));
        assert_eq!(eng.position(a), Some(Vec3::new(4.0, 0.0, 0.0)));

        // Nothing left to do.
        assert!(eng.step(&grid, 1.0).is_empty());
    }

    #[test]
    fn partial_frames_accumulate() {
        let grid = row_grid();
        let mut eng = engine(1);
        let a = AgentId(0);
        eng.place(a, Vec3::ZERO).unwrap();
        eng.set_destination(a, Vec3::new(1.0, 0.0, 0.0), &grid).unwrap();

        assert!(eng.step(&grid, 0.5).is_empty());
        assert!((eng.position(a).unwrap().x - 0.5).abs() < 1e-6);
        assert_eq!(eng.step(&grid, 0.5), vec![a]);
    }

    #[test]
    fn same_node_destination_arrives_without_moving() {
        let grid = row_grid();
        let mut eng = engine(1);
        let a = AgentId(0);
        eng.place(a, Vec3::new(2.1, 0.0, 0.0)).unwrap();
        assert!(eng.set_destination(a, Vec3::new(1.9, 0.0, 0.0), &grid).unwrap());
        assert!(eng.remaining(a).is_empty());
        assert_eq!(eng.step(&grid, 1.0), vec![a]);
        assert_eq!(eng.position(a), Some(Vec3::new(2.1, 0.0, 0.0)));
    }

    #[test]
    fn arrivals_sorted_by_agent() {
        let grid = row_grid();
        let mut eng = engine(3);
        for i in [2u32, 0, 1] {
            eng.place(AgentId(i), Vec3::new(i as f32, 0.0, 0.0)).unwrap();
            eng.set_destination(AgentId(i), Vec3::new(i as f32 + 1.0, 0.0, 0.0), &grid).unwrap();
        }
        assert_eq!(eng.step(&grid, 1.0), vec![AgentId(0), AgentId(1), AgentId(2)]);
    }

    #[test]
    fn no_route_stops_agent() {
        let grid = row_grid();
        let mut eng = MobilityEngine::new(NeverRoutes, 1, slow());
        let a = AgentId(0);
        eng.store.set_route(a, Route { nodes: vec![NodeId(1)], cost: 1.0 });
        assert!(!eng.set_destination(a, Vec3::new(4.0, 0.0, 0.0), &grid).unwrap());
        assert!(!eng.is_moving(a));
    }

    #[test]
    fn router_errors_propagate() {
        let grid = row_grid();
        let mut eng = MobilityEngine::new(Rejects, 1, slow());
        let err = eng.set_destination(AgentId(0), Vec3::ZERO, &grid).unwrap_err();
        assert!(matches!(err, MobilityError::Routing(SpatialError::NodeNotFound(_))));
    }

    #[test]
    fn unknown_agent_errors() {
        let grid = row_grid();
        let mut eng = engine(1);
        assert!(matches!(
            eng.place(AgentId(1), Vec3::ZERO),
            Err(MobilityError::AgentNotFound(AgentId(1)))
        ));
        assert!(matches!(
            eng.set_destination(AgentId(9), Vec3::ZERO, &grid),
            Err(MobilityError::AgentNotFound(AgentId(9)))
        ));
    }

    #[test]
    fn batch_destinations() {
        let grid = row_grid();
        let mut eng = engine(3);
        for i in 0..3u32 {
            eng.place(AgentId(i), Vec3::ZERO).unwrap();
        }
        let found = eng
            .set_destinations(
                &grid,
                &[
                    (AgentId(0), Vec3::new(4.0, 0.0, 0.0)),
                    (AgentId(1), Vec3::new(2.0, 0.0, 0.0)),
                    (AgentId(2), Vec3::ZERO),
                ],
            )
            .unwrap();
        assert_eq!(found, vec![true, true, true]);
        assert_eq!(eng.remaining(AgentId(0)).len(), 4);
        assert_eq!(eng.remaining(AgentId(1)).len(), 2);
        assert!(eng.remaining(AgentId(2)).is_empty());
    }

    #[test]
    fn batch_rejects_unknown_agent_before_routing() {
        let grid = row_grid();
        let mut eng = engine(1);
        let result = eng.set_destinations(
            &grid,
            &[(AgentId(0), Vec3::new(3.0, 0.0, 0.0)), (AgentId(4), Vec3::ZERO)],
        );
        assert!(matches!(result, Err(MobilityError::AgentNotFound(AgentId(4)))));
        assert!(!eng.is_moving(AgentId(0)));
    }
}
