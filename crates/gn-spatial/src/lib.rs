//! `gn-spatial` — node grid, nearest-node lookup, and A* search.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`grid`]    | `Node`, `Grid` (flat arena + nearest-node scan), `GridBuilder` |
//! | [`search`]  | `AStar`, `NodeState`, `Route`, `Router` trait, `euclidean`  |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Node`.                 |
//!
//! # Quick-start
//!
//! ```
//! use gn_spatial::{AStar, GridBuilder};
//!
//! let grid = GridBuilder::new(3, 3).build().unwrap();
//! let start = grid.id_at(0, 0).unwrap();
//! let target = grid.id_at(2, 2).unwrap();
//!
//! let route = AStar::new().find_path(&grid, start, target).unwrap().unwrap();
//! assert_eq!(route.nodes, vec![grid.id_at(1, 1).unwrap(), target]);
//! ```

pub mod error;
pub mod grid;
pub mod search;


pub use error::{SpatialError, SpatialResult};
pub use grid::{Grid, GridBuilder, Node};
pub use search::{AStar, NodeState, Route, Router, euclidean};
