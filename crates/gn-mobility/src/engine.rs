//! High-level mobility engine: turns world destinations into routes and steps
//! agents along them.

use gn_core::{AgentId, MoveConfig, NodeId, Vec3};
use gn_spatial::{Grid, Route, Router};

use crate::{MobilityError, MobilityResult, MobilityStore};

/// Wraps a [`Router`] and [`MobilityStore`] to provide a frame-driven
/// movement API.
///
/// # Type parameter
///
/// `R` must implement [`Router`] (e.g. [`gn_spatial::AStar`]).  Swap it at
/// compile time for a different search with no runtime overhead.
pub struct MobilityEngine<R: Router> {
    /// The path search.
    pub router: R,

    /// All per-agent movement state and route cache.
    pub store: MobilityStore,

    pub config: MoveConfig,
}

impl<R: Router> MobilityEngine<R> {
    /// Create a new engine with all agents stationary at the origin.
    pub fn new(router: R, agent_count: usize, config: MoveConfig) -> Self {
        Self {
            router,
            store: MobilityStore::new(agent_count),
            config,
        }
    }

    fn check(&self, agent: AgentId) -> MobilityResult<()> {
        if self.store.contains(agent) {
            Ok(())
        } else {
            Err(MobilityError::AgentNotFound(agent))
        }
    }

    /// Teleport `agent` to `position`, dropping any route (initial placement).
    pub fn place(&mut self, agent: AgentId, position: Vec3) -> MobilityResult<()> {
        self.check(agent)?;
        self.store.place(agent, position);
        Ok(())
    }

    pub fn position(&self, agent: AgentId) -> Option<Vec3> {
        self.store.position(agent)
    }

    pub fn is_moving(&self, agent: AgentId) -> bool {
        self.store.is_moving(agent)
    }

    /// Nodes still ahead of `agent`, the current waypoint first.
    pub fn remaining(&self, agent: AgentId) -> &[NodeId] {
        self.store.remaining(agent)
    }

    /// Send `agent` toward the world position `destination`.
    ///
    /// Both the agent's position and the destination are snapped to their
    /// nearest grid nodes before searching.  Returns `Ok(true)` if a route
    /// was found and stored, `Ok(false)` if none exists, in which case the
    /// agent stops where it is.
    pub fn set_destination(
        &mut self,
        agent:       AgentId,
        destination: Vec3,
        grid:        &Grid,
    ) -> MobilityResult<bool> {
        self.check(agent)?;
        let (from, to) = self.endpoints(agent, destination, grid);
        let route = self.router.route(grid, from, to)?;
        Ok(self.apply_route(agent, destination, route))
    }

    fn endpoints(&self, agent: AgentId, destination: Vec3, grid: &Grid) -> (NodeId, NodeId) {
        let here = self.store.states[agent.index()].position;
        (grid.closest_node(here), grid.closest_node(destination))
    }

    fn apply_route(&mut self, agent: AgentId, destination: Vec3, route: Option<Route>) -> bool {
        match route {
            Some(route) => {
                self.store.set_route(agent, route);
                true
            }
            None => {
                log::info!("no route for {agent} to {destination}");
                self.store.clear_route(agent);
                false
            }
        }
    }

    /// Advance every routed agent by one frame of `dt_secs` seconds.
    ///
    /// Each agent moves at most `move_speed * dt_secs` toward its current
    /// waypoint and switches to the next one once within
    /// `arrive_tolerance`.  Returns the agents that finished their route
    /// this frame in ascending `AgentId` order; their routes are dropped.
    pub fn step(&mut self, grid: &Grid, dt_secs: f32) -> Vec<AgentId> {
        let max_delta = self.config.move_speed * dt_secs;
        let tolerance = self.config.arrive_tolerance;
        let MobilityStore { states, routes } = &mut self.store;

        let mut finished = Vec::new();
        for (&agent, route) in routes.iter() {
            let state = &mut states[agent.index()];
            let Some(&waypoint) = route.nodes.get(state.next_index) else {
                finished.push(agent);
                continue;
            };
            let Some(pos) = grid.position(waypoint) else {
                log::warn!("{agent} route node {waypoint} is not on this grid; stopping");
                finished.push(agent);
                continue;
            };
            if state.advance_towards(pos, max_delta, tolerance) {
                state.next_index += 1;
                if state.next_index >= route.len() {
                    finished.push(agent);
                }
            }
        }

        finished.sort_unstable();
        for &agent in &finished {
            self.store.clear_route(agent);
        }
        finished
    }
}

// ── Batch destinations ────────────────────────────────────────────────────────

#[cfg(not(feature = "parallel"))]
impl<R: Router> MobilityEngine<R> {
    /// Route several agents at once.  Returns one `found` flag per request.
    ///
    /// All agent ids are checked before any route changes.
    pub fn set_destinations(
        &mut self,
        grid:     &Grid,
        requests: &[(AgentId, Vec3)],
    ) -> MobilityResult<Vec<bool>> {
        for &(agent, _) in requests {
            self.check(agent)?;
        }
        requests
            .iter()
            .map(|&(agent, dest)| self.set_destination(agent, dest, grid))
            .collect()
    }
}

#[cfg(feature = "parallel")]
impl<R: Router + Default> MobilityEngine<R> {
    /// Route several agents at once.  Returns one `found` flag per request.
    ///
    /// Searches run on Rayon's pool with one `R::default()` engine per
    /// worker, all reading the same grid.  All agent ids are checked before
    /// any route changes.
    pub fn set_destinations(
        &mut self,
        grid:     &Grid,
        requests: &[(AgentId, Vec3)],
    ) -> MobilityResult<Vec<bool>> {
        use rayon::prelude::*;

        for &(agent, _) in requests {
            self.check(agent)?;
        }
        let queries: Vec<(AgentId, Vec3, NodeId, NodeId)> = requests
            .iter()
            .map(|&(agent, dest)| {
                let (from, to) = self.endpoints(agent, dest, grid);
                (agent, dest, from, to)
            })
            .collect();

        let routes: Vec<_> = queries
            .par_iter()
            .map_init(R::default, |router, &(_, _, from, to)| router.route(grid, from, to))
            .collect();

        let mut found = Vec::with_capacity(routes.len());
        for ((agent, dest, _, _), route) in queries.into_iter().zip(routes) {
            found.push(self.apply_route(agent, dest, route?));
        }
        Ok(found)
    }
}
