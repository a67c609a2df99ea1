// File: crates/plot-core/src/types.rs
// Summary: Shared types and constants (figure size, paddings).

/// Default figure width in inches.
pub const FIG_WIDTH_IN: f32 = 10.0;
/// Default figure height in inches.
pub const FIG_HEIGHT_IN: f32 = 6.0;
/// Raster resolution used to turn inches into pixels.
pub const DPI: f32 = 100.0;

/// Default surface width in pixels.
pub const WIDTH: i32 = (FIG_WIDTH_IN * DPI) as i32;
/// Default surface height in pixels.
pub const HEIGHT: i32 = (FIG_HEIGHT_IN * DPI) as i32;

/// Screen margins between the figure edge and the plot area, in pixels.
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

    /// Insets proportional to a figure size, using the usual subplot fractions
    /// (left 0.125, right 0.9, bottom 0.11, top 0.88).
    pub fn for_figure(width: i32, height: i32) -> Self {
        let w = width.max(0) as f32;
        let h = height.max(0) as f32;
        Self::new(
            (w * 0.125).round() as u32,
            (w * 0.1).round() as u32,
            (h * 0.12).round() as u32,
            (h * 0.11).round() as u32,
        )
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::for_figure(WIDTH, HEIGHT)
    }
}
