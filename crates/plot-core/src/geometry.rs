// File: crates/plot-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Plot area left after removing `insets` from a `width x height` surface.
    /// Never inverted: oversized insets collapse to a zero-size rect.
    pub fn plot_area(width: i32, height: i32, insets: &Insets) -> Self {
        let left = clamp(insets.left as i32, 0, width);
        let top = clamp(insets.top as i32, 0, height);
        let right = clamp(width - insets.right as i32, left, width);
        let bottom = clamp(height - insets.bottom as i32, top, height);
        Self::from_ltrb(left, top, right, bottom)
    }

    pub fn to_skia(&self) -> skia_safe::Rect {
        skia_safe::Rect::from_ltrb(self.left as f32, self.top as f32, self.right as f32, self.bottom as f32)
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_area_for_default_figure() {
        let r = RectI32::plot_area(1000, 600, &Insets::default());
        assert_eq!(r, RectI32::from_ltrb(125, 72, 900, 534));
        assert_eq!((r.width(), r.height()), (775, 462));
    }

    #[test]
    fn oversized_insets_collapse() {
        let r = RectI32::plot_area(100, 50, &Insets::new(80, 80, 40, 40));
        assert_eq!(r.width(), 0);
        assert_eq!(r.height(), 0);
    }
}
