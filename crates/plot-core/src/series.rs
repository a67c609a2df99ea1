// File: crates/plot-core/src/series.rs
// Summary: Line series model: (x, y) pairs and stroke width.

#[derive(Clone, Debug)]
pub struct Series {
    pub data_xy: Vec<(f64, f64)>,
    pub stroke_width: f32,
}

impl Series {
    pub fn line(data: Vec<(f64, f64)>) -> Self {
        Self { data_xy: data, stroke_width: 1.5 }
    }

    /// Data extents as `((x_min, x_max), (y_min, y_max))`, skipping non-finite points.
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let mut finite = self.data_xy.iter().filter(|(x, y)| x.is_finite() && y.is_finite());
        let &(x0, y0) = finite.next()?;
        let init = ((x0, x0), (y0, y0));
        Some(finite.fold(init, |((xl, xh), (yl, yh)), &(x, y)| {
            ((xl.min(x), xh.max(x)), (yl.min(y), yh.max(y)))
        }))
    }
}
