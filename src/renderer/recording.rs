//! In-memory surface
//!
//! Records draw calls instead of producing pixels. Backs the native preview
//! binary and the rendering tests.

use std::fmt;

use glam::DVec2;

use super::surface::{Stage, Surface, TextAlign};
use crate::error::RenderError;
use crate::race::Viewport;

/// One recorded canvas call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillColor(String),
    Shadow { color: String, blur: f64 },
    FillRect { origin: DVec2, size: DVec2 },
    Font(String),
    TextAlign(TextAlign),
    FillText { text: String, at: DVec2 },
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCommand::FillColor(c) => write!(f, "fillStyle = {}", c),
            DrawCommand::Shadow { color, blur } => write!(f, "shadow = {} {:.1}", color, blur),
            DrawCommand::FillRect { origin, size } => write!(
                f,
                "fillRect({:.2}, {:.2}, {:.2}, {:.2})",
                origin.x, origin.y, size.x, size.y
            ),
            DrawCommand::Font(font) => write!(f, "font = {}", font),
            DrawCommand::TextAlign(align) => write!(f, "textAlign = {}", align.as_str()),
            DrawCommand::FillText { text, at } => {
                write!(f, "fillText({:?}, {:.2}, {:.2})", text, at.x, at.y)
            }
        }
    }
}

/// Surface that keeps every call it receives
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All filled rectangles, in draw order
    pub fn rects(&self) -> Vec<(DVec2, DVec2)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect { origin, size } => Some((*origin, *size)),
                _ => None,
            })
            .collect()
    }

    /// All drawn text, in draw order
    pub fn texts(&self) -> Vec<(&str, DVec2)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, at } => Some((text.as_str(), *at)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn set_fill_color(&mut self, color: &str) {
        self.commands.push(DrawCommand::FillColor(color.to_string()));
    }

    fn set_shadow(&mut self, color: &str, blur: f64) {
        self.commands.push(DrawCommand::Shadow {
            color: color.to_string(),
            blur,
        });
    }

    fn fill_rect(&mut self, origin: DVec2, size: DVec2) {
        self.commands.push(DrawCommand::FillRect { origin, size });
    }

    fn set_font(&mut self, font: &str) {
        self.commands.push(DrawCommand::Font(font.to_string()));
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.commands.push(DrawCommand::TextAlign(align));
    }

    fn fill_text(&mut self, text: &str, at: DVec2) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            at,
        });
    }
}

/// Fixed-size stage around a recording surface
#[derive(Debug, Clone)]
pub struct RecordingStage {
    pub viewport: Viewport,
    /// `None` simulates a host without 2D support
    pub surface: Option<RecordingSurface>,
    /// Number of times the buffer was resized (and wiped)
    pub fits: usize,
}

impl RecordingStage {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            surface: Some(RecordingSurface::new()),
            fits: 0,
        }
    }

    /// Stage whose surface cannot be drawn on
    pub fn without_context(viewport: Viewport) -> Self {
        Self {
            viewport,
            surface: None,
            fits: 0,
        }
    }

    /// Recorded commands of the last pass (empty without a context)
    pub fn commands(&self) -> &[DrawCommand] {
        self.surface.as_ref().map(|s| s.commands.as_slice()).unwrap_or(&[])
    }
}

impl Stage for RecordingStage {
    type Surface = RecordingSurface;

    fn fit_to_container(&mut self) -> Viewport {
        self.fits += 1;
        if let Some(surface) = self.surface.as_mut() {
            surface.commands.clear();
        }
        self.viewport
    }

    fn surface(&mut self) -> Result<&mut RecordingSurface, RenderError> {
        self.surface.as_mut().ok_or(RenderError::NoContext)
    }
}
