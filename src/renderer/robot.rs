//! Robot avatar
//!
//! A robot is a glowing square body with two square eyes and its name along
//! the bottom edge. Every part takes absolute pixel geometry; the composite
//! derives that geometry from a single bounding box.

use glam::DVec2;

use super::surface::{Surface, TextAlign};
use crate::consts::*;
use crate::palette::Color;
use crate::race::BoundingBox;

/// Square eye: dark sclera with a centred light pupil
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Eye {
    pub origin: DVec2,
    pub side: f64,
}

impl Eye {
    #[inline]
    pub fn pupil_side(&self) -> f64 {
        self.side / PUPIL_DIVISOR
    }

    /// Offset of the pupil from the sclera's top-left corner, on both axes
    #[inline]
    pub fn pupil_offset(&self) -> f64 {
        self.side / 2.0 - self.pupil_side() / 2.0
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.set_fill_color(SCLERA_COLOR);
        surface.fill_square(self.origin, self.side);

        surface.set_fill_color(PUPIL_COLOR);
        surface.fill_square(
            self.origin + DVec2::splat(self.pupil_offset()),
            self.pupil_side(),
        );
    }
}

/// Solid body painted in layers of increasing glow
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub origin: DVec2,
    pub side: f64,
    pub color: Color,
}

impl Body {
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.set_fill_color(self.color.as_css());
        // Neutral halo first, then the robot's own colour on top.
        for blur in BODY_NEUTRAL_GLOW {
            surface.set_shadow(GLOW_COLOR, blur);
            surface.fill_square(self.origin, self.side);
        }
        for blur in BODY_COLOR_GLOW {
            surface.set_shadow(self.color.as_css(), blur);
            surface.fill_square(self.origin, self.side);
        }
        surface.set_shadow(GLOW_COLOR, 0.0);
    }
}

/// Centred name with a white glow
#[derive(Debug, Clone, PartialEq)]
pub struct NameLabel<'a> {
    /// Baseline centre
    pub anchor: DVec2,
    /// Side of the robot the label belongs to
    pub robot_side: f64,
    pub name: &'a str,
    pub font_family: &'a str,
}

impl NameLabel<'_> {
    #[inline]
    pub fn font_size(&self) -> f64 {
        self.robot_side / NAME_FONT_DIVISOR
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.set_fill_color(TEXT_COLOR);
        surface.set_shadow(GLOW_COLOR, NAME_GLOW);
        surface.set_text_align(TextAlign::Center);
        surface.set_font(&format!("{}px {}", self.font_size(), self.font_family));
        surface.fill_text(self.name, self.anchor);
        surface.set_shadow(GLOW_COLOR, 0.0);
    }
}

/// Full avatar for one robot
#[derive(Debug, Clone, PartialEq)]
pub struct Robot<'a> {
    pub bounds: BoundingBox,
    pub color: Color,
    pub name: &'a str,
    pub font_family: &'a str,
}

impl<'a> Robot<'a> {
    /// Width of one eye column; the face is eleven columns wide
    #[inline]
    fn column(&self) -> f64 {
        self.bounds.side / FACE_COLUMNS
    }

    pub fn body(&self) -> Body {
        Body {
            origin: self.bounds.origin(),
            side: self.bounds.side,
            color: self.color,
        }
    }

    /// Left and right eye
    pub fn eyes(&self) -> [Eye; 2] {
        let column = self.column();
        let side = column * EYE_COLUMNS;
        let y = self.bounds.y + column * EYE_TOP_COLUMNS;
        let right_x = (self.bounds.x + self.bounds.side) - side - column;
        [
            Eye {
                origin: DVec2::new(self.bounds.x + column, y),
                side,
            },
            Eye {
                origin: DVec2::new(right_x, y),
                side,
            },
        ]
    }

    pub fn label(&self) -> NameLabel<'a> {
        NameLabel {
            anchor: DVec2::new(
                self.bounds.center_x(),
                (self.bounds.y + self.bounds.side) - self.column(),
            ),
            robot_side: self.bounds.side,
            name: self.name,
            font_family: self.font_family,
        }
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.body().render(surface);
        for eye in self.eyes() {
            eye.render(surface);
        }
        self.label().render(surface);
    }
}
