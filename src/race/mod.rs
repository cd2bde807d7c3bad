//! Race data and track geometry
//!
//! Pure and synchronous: no rendering or platform dependencies.

pub mod layout;
pub mod state;

pub use layout::{BoundingBox, Viewport, compute_boxes};
pub use state::{GameState, RacePhase, RobotEntry};
