//! Robot colours
//!
//! Colours are handed out by slot index and wrap around the palette, so any
//! number of robots gets a repeating pattern.

/// A CSS colour string as understood by the 2D canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub &'static str);

impl Color {
    pub fn as_css(&self) -> &'static str {
        self.0
    }
}

/// Body colours, assigned left to right
pub const ROBOT_PALETTE: [Color; 4] = [
    Color("cyan"),
    Color("magenta"),
    Color("yellow"),
    Color("white"),
];

/// Pick an item by index, wrapping around forever.
///
/// ```
/// use robot_race_track::palette::cycle;
/// assert_eq!(*cycle(&["cyan", "magenta", "yellow"], 5), "yellow");
/// ```
///
/// Panics if `items` is empty.
#[inline]
pub fn cycle<T>(items: &[T], index: usize) -> &T {
    &items[index % items.len()]
}

/// Colour for the robot in slot `index`
#[inline]
pub fn robot_color(index: usize) -> Color {
    *cycle(&ROBOT_PALETTE, index)
}
