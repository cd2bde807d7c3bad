//! Drawing seams
//!
//! `Surface` is the small slice of the 2D canvas API the track needs.
//! `Stage` is the element hosting it: it knows its container's size and hands
//! out the surface for one pass.

use glam::DVec2;

use crate::error::RenderError;
use crate::race::Viewport;

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Immediate-mode 2D drawing target
pub trait Surface {
    fn set_fill_color(&mut self, color: &str);
    /// Glow applied to every following fill; a blur of 0 turns it off
    fn set_shadow(&mut self, color: &str, blur: f64);
    fn fill_rect(&mut self, origin: DVec2, size: DVec2);
    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);
    fn fill_text(&mut self, text: &str, at: DVec2);

    /// Fill an axis-aligned square
    fn fill_square(&mut self, origin: DVec2, side: f64) {
        self.fill_rect(origin, DVec2::splat(side));
    }
}

/// Host element for the track
pub trait Stage {
    type Surface: Surface;

    /// Size the drawing buffer to the container and return the new viewport.
    /// Resizing wipes whatever was drawn before.
    fn fit_to_container(&mut self) -> Viewport;

    /// Drawing context for this pass
    fn surface(&mut self) -> Result<&mut Self::Surface, RenderError>;
}
