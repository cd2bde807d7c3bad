//! 2D canvas rendering
//!
//! Draws straight into an immediate-mode surface; nothing is retained between
//! passes.

pub mod banner;
pub mod recording;
pub mod robot;
pub mod surface;

pub use recording::{DrawCommand, RecordingStage, RecordingSurface};
pub use robot::{Body, Eye, NameLabel, Robot};
pub use surface::{Stage, Surface, TextAlign};

use crate::palette::robot_color;
use crate::race::{BoundingBox, GameState, Viewport};
use crate::settings::Settings;

/// Draw every robot into its box, then the status line on top
pub fn draw_track<S: Surface + ?Sized>(
    state: &GameState,
    boxes: &[BoundingBox],
    viewport: Viewport,
    settings: &Settings,
    surface: &mut S,
) {
    for (i, (robot, bounds)) in state.robots.iter().zip(boxes).enumerate() {
        Robot {
            bounds: *bounds,
            color: robot_color(i),
            name: &robot.name,
            font_family: &settings.font_family,
        }
        .render(surface);
    }

    if settings.status_banner {
        banner::render_banner(state, viewport, &settings.font_family, surface);
    }
}
