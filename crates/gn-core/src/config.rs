//! Grid-generation and movement configuration.
//!
//! Typically loaded from a JSON file by the application crate (with the
//! `serde` feature) and validated once before anything is built from it.

use crate::{NavError, NavResult};

// ── GridConfig ────────────────────────────────────────────────────────────────

/// How many nodes to lay over the plane, and how far above it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// Node count along the plane's x axis.  Default: 10.
    pub nodes_x: u32,

    /// Node count along the plane's z axis (the grid's `y`).  Default: 10.
    pub nodes_z: u32,

    /// Height above the plane at which node positions are placed.
    pub vertical_offset: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            nodes_x:         10,
            nodes_z:         10,
            vertical_offset: 0.01,
        }
    }
}

// ── MoveConfig ────────────────────────────────────────────────────────────────

/// Per-agent movement parameters used by the mobility engine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MoveConfig {
    /// World units per second.
    pub move_speed: f32,

    /// Ground-plane distance at which a route node counts as reached.
    pub arrive_tolerance: f32,
}

impl Default for MoveConfig {
    fn default() -> Self {
        Self {
            move_speed:       10.0,
            arrive_tolerance: 0.1,
        }
    }
}

// ── NavConfig ─────────────────────────────────────────────────────────────────

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    pub grid:     GridConfig,
    pub movement: MoveConfig,
}

impl NavConfig {
    /// Reject values the grid builder or mobility engine cannot work with.
    pub fn validate(&self) -> NavResult<()> {
        let g = &self.grid;
        if g.nodes_x == 0 || g.nodes_z == 0 {
            return Err(NavError::InvalidDimensions { width: g.nodes_x, height: g.nodes_z });
        }
        if !g.vertical_offset.is_finite() || g.vertical_offset < 0.0 {
            return Err(NavError::Config(format!(
                "vertical_offset must be finite and >= 0, got {}",
                g.vertical_offset
            )));
        }
        let m = &self.movement;
        if !(m.move_speed.is_finite() && m.move_speed > 0.0) {
            return Err(NavError::Config(format!(
                "move_speed must be > 0, got {}",
                m.move_speed
            )));
        }
        if !(m.arrive_tolerance.is_finite() && m.arrive_tolerance > 0.0) {
            return Err(NavError::Config(format!(
                "arrive_tolerance must be > 0, got {}",
                m.arrive_tolerance
            )));
        }
        Ok(())
    }
}
