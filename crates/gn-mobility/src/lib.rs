//! `gn-mobility` — agent movement along grid routes.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`state`]   | `MovementState` — per-agent position and route progress           |
//! | [`store`]   | `MobilityStore` — `Vec<MovementState>` + sparse route cache       |
//! | [`engine`]  | `MobilityEngine<R>` — destination routing + per-frame stepping    |
//! | [`error`]   | `MobilityError`, `MobilityResult<T>`                              |
//!
//! # Movement model
//!
//! 1. `MobilityEngine::set_destination` snaps the agent's position and the
//!    requested world position to their nearest grid nodes, then asks the
//!    [`Router`][gn_spatial::Router] for a route between them.
//! 2. Each frame, `MobilityEngine::step(grid, dt)` moves every routed agent
//!    toward its current waypoint on the ground plane at `move_speed`.
//! 3. Within `arrive_tolerance` of a waypoint the agent targets the next
//!    one; after the last it is reported as arrived and its route dropped.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | `set_destinations` searches on Rayon's thread pool.    |
//! | `serde`    | Derives `Serialize`/`Deserialize` on `MovementState`.  |

pub mod engine;
pub mod error;
pub mod state;
pub mod store;

#[cfg(test)]
mod tests;

pub use engine::MobilityEngine;
pub use error::{MobilityError, MobilityResult};
pub use state::MovementState;
pub use store::MobilityStore;
