//! Board geometry and teleports.
//!
//! - `path`: boustrophedon square-to-coordinate layout
//! - `teleport`: immutable snake and ladder tables

pub mod path;
pub mod teleport;

pub use path::{generate_path, BoardPath, GridCell, PathPoint};
pub use teleport::{Teleport, TeleportKind, TeleportTable};
