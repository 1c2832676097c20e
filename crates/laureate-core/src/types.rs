// File: crates/laureate-core/src/types.rs
// Summary: Shared types and constants (canvas size, margins).

/// Default canvas width in logical units.
pub const WIDTH: i32 = 800;
/// Default canvas height in logical units.
pub const HEIGHT: i32 = 400;

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(70, 30, 50, 60)
    }
}

/// Size of the plot area left after subtracting `insets` from a canvas.
/// Saturates at zero when the margins exceed the canvas.
pub fn plot_size(width: i32, height: i32, insets: &Insets) -> (f32, f32) {
    let w = (width - insets.hsum() as i32).max(0);
    let h = (height - insets.vsum() as i32).max(0);
    (w as f32, h as f32)
}
