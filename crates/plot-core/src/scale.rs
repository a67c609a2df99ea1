// File: crates/plot-core/src/scale.rs
// Summary: Linear data-to-pixel transform for one axis.

/// Maps the data range `[min, max]` onto the pixel range `[px_start, px_end]`.
/// `px_end` may be smaller than `px_start` (screen Y grows downwards).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub min: f64,
    pub max: f64,
    pub px_start: f32,
    pub px_end: f32,
}

impl LinearScale {
    pub fn new(min: f64, max: f64, px_start: f32, px_end: f32) -> Self {
        let mut s = Self { min, max, px_start, px_end };
        if (s.max - s.min).abs() < 1e-12 { s.max = s.min + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.min) / (self.max - self.min);
        self.px_start + t as f32 * (self.px_end - self.px_start)
    }
}
