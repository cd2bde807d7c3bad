//! Track layout
//!
//! Maps robot slots and scores onto pixel boxes for the current viewport:
//! - one column per robot, avatar centred in its column
//! - score 0 sits on the bottom edge, the winning score touches the top edge
//! - avatar side is a tenth of the smaller viewport dimension

use glam::DVec2;

use super::state::GameState;
use crate::consts::ROBOT_SIDE_DIVISOR;

/// Drawable area in CSS pixels, read fresh on every pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Avatar side length for this viewport
    #[inline]
    pub fn robot_side(&self) -> f64 {
        (self.height / ROBOT_SIDE_DIVISOR).min(self.width / ROBOT_SIDE_DIVISOR)
    }
}

/// Square region for one avatar, valid for a single render pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub side: f64,
}

impl BoundingBox {
    #[inline]
    pub fn origin(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    #[inline]
    pub fn center_x(&self) -> f64 {
        self.x + self.side / 2.0
    }
}

/// Lay out every robot in `state`, in slot order.
///
/// Returns `None` when there is nothing sensible to draw (no robots, or a
/// winning score of zero), rather than producing infinite or NaN geometry.
pub fn compute_boxes(state: &GameState, viewport: Viewport) -> Option<Vec<BoundingBox>> {
    if !state.is_drawable() {
        return None;
    }

    let side = viewport.robot_side();
    let column_width = viewport.width / state.robots.len() as f64;
    let row_height = (viewport.height - side) / f64::from(state.winning_score);

    let boxes = state
        .robots
        .iter()
        .enumerate()
        .map(|(i, robot)| BoundingBox {
            x: i as f64 * column_width + column_width / 2.0 - side / 2.0,
            y: viewport.height - row_height * f64::from(robot.score) - side,
            side,
        })
        .collect();

    Some(boxes)
}
