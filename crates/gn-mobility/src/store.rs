//! The `MobilityStore` — per-agent movement state and sparse route cache.

use rustc_hash::FxHashMap;

use gn_core::{AgentId, NodeId, Vec3};
use gn_spatial::Route;

use crate::MovementState;

/// Holds movement state for every agent plus routes for agents in motion.
///
/// The `states` vector is indexed by `AgentId` and is always length
/// `agent_count`.  The `routes` map is sparse — only agents currently
/// following a route have an entry.  Routes are removed on arrival.
pub struct MobilityStore {
    /// Per-agent movement state, indexed by `AgentId`.
    pub states: Vec<MovementState>,

    /// Sparse route cache: `AgentId → Route` for agents in motion.
    pub routes: FxHashMap<AgentId, Route>,
}

impl MobilityStore {
    /// Create a store with all agents stationary at the origin.
    pub fn new(agent_count: usize) -> Self {
        Self {
            states: vec![MovementState::default(); agent_count],
            routes: FxHashMap::default(),
        }
    }

    #[inline]
    pub fn agent_count(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        agent.index() < self.states.len()
    }

    #[inline]
    pub fn position(&self, agent: AgentId) -> Option<Vec3> {
        self.states.get(agent.index()).map(|s| s.position)
    }

    /// Move `agent` to `position` and forget any route it was following.
    pub fn place(&mut self, agent: AgentId, position: Vec3) {
        self.states[agent.index()] = MovementState::at(position);
        self.routes.remove(&agent);
    }

    /// Start following `route` from its first node.
    pub fn set_route(&mut self, agent: AgentId, route: Route) {
        self.states[agent.index()].next_index = 0;
        self.routes.insert(agent, route);
    }

    /// Stop where the agent stands.
    pub fn clear_route(&mut self, agent: AgentId) {
        self.states[agent.index()].next_index = 0;
        self.routes.remove(&agent);
    }

    /// Returns `true` if `agent` is currently following a route.
    #[inline]
    pub fn is_moving(&self, agent: AgentId) -> bool {
        self.routes.contains_key(&agent)
    }

    /// Route nodes `agent` has not reached yet, the current waypoint first.
    pub fn remaining(&self, agent: AgentId) -> &[NodeId] {
        match (self.routes.get(&agent), self.states.get(agent.index())) {
            (Some(route), Some(state)) => route.nodes.get(state.next_index..).unwrap_or(&[]),
            _ => &[],
        }
    }
}
