//! `gn-core` — foundational types for the `gridnav` pathfinding workspace.
//!
//! This crate is a dependency of every other `gn-*` crate.  It intentionally
//! has no `gn-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`, `AgentId`                                   |
//! | [`geo`]         | `Vec3` world position, `PlaneBounds`                  |
//! | [`config`]      | `GridConfig`, `MoveConfig`, `NavConfig`               |
//! | [`error`]       | `NavError`, `NavResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{GridConfig, MoveConfig, NavConfig};
pub use error::{NavError, NavResult};
pub use geo::{PlaneBounds, Vec3};
pub use ids::{AgentId, NodeId};
