//! Robot Race track - browser view of a server-run robot race
//!
//! Core modules:
//! - `race`: Snapshot types and track layout (pure)
//! - `renderer`: Robot avatars drawn onto a 2D surface
//! - `controller`: Mounted track: state in, scoring intents out
//! - `protocol`: Typed messages at the transport boundary
//! - `platform`: Browser bindings (canvas, listeners, clipboard)

pub mod controller;
pub mod error;
pub mod palette;
pub mod platform;
pub mod protocol;
pub mod race;
pub mod renderer;
pub mod settings;

pub use controller::RaceTrack;
pub use error::{ProtocolError, RenderError};
pub use settings::Settings;

/// Drawing constants
pub mod consts {
    /// Avatar side is the smaller viewport dimension divided by this
    pub const ROBOT_SIDE_DIVISOR: f64 = 10.0;

    /// The face is this many columns wide
    pub const FACE_COLUMNS: f64 = 11.0;
    /// Eye side, in columns
    pub const EYE_COLUMNS: f64 = 4.0;
    /// Gap above the eyes, in columns
    pub const EYE_TOP_COLUMNS: f64 = 1.75;
    /// Sclera side / pupil side
    pub const PUPIL_DIVISOR: f64 = 2.5;

    /// Robot side / name font size
    pub const NAME_FONT_DIVISOR: f64 = 6.0;
    /// Status banner font is twice a name's at this divisor
    pub const BANNER_FONT_DIVISOR: f64 = 6.0;

    /// Body glow radii (px) drawn in the neutral glow colour
    pub const BODY_NEUTRAL_GLOW: [f64; 2] = [10.0, 15.0];
    /// Body glow radii (px) drawn in the robot's own colour
    pub const BODY_COLOR_GLOW: [f64; 2] = [20.0, 40.0];
    /// Glow radius behind text
    pub const NAME_GLOW: f64 = 10.0;

    pub const GLOW_COLOR: &str = "white";
    pub const TEXT_COLOR: &str = "#444";
    pub const SCLERA_COLOR: &str = "#2b2b2b";
    pub const PUPIL_COLOR: &str = "#d3d3d3";
}
