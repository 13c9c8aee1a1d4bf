//! Per-agent movement state.

use gn_core::Vec3;

/// The movement state for a single agent.
///
/// The route itself lives in the store's sparse route map; this struct only
/// tracks where the agent is and how far along that route it has got.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovementState {
    /// Current world-space position.
    pub position: Vec3,

    /// Index into the agent's route of the node it is heading to.  Zero when
    /// the agent has no route.
    pub next_index: usize,
}

impl MovementState {
    /// Construct a stationary state at `position`.
    #[inline]
    pub fn at(position: Vec3) -> Self {
        Self { position, next_index: 0 }
    }

    /// Step toward `waypoint` on the ground plane.
    ///
    /// The waypoint's height is replaced by the agent's own, so agents glide
    /// at a constant height regardless of node offsets.  Returns `true` once
    /// the agent is within `tolerance` of the waypoint (XZ distance).
    pub fn advance_towards(&mut self, waypoint: Vec3, max_delta: f32, tolerance: f32) -> bool {
        let target = waypoint.with_y(self.position.y);
        self.position = self.position.move_towards(target, max_delta);
        self.position.distance_xz(target) < tolerance
    }
}

impl Default for MovementState {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}
