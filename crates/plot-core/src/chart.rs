// File: crates/plot-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use skia_safe as skia;
use tracing::{debug, trace, warn};

use crate::error::{PlotError, Result};
use crate::geometry::RectI32;
use crate::scale::LinearScale;
use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::Axis;

/// Outward tick mark length in pixels.
const TICK_LEN: f32 = 5.0;
/// Gap between tick marks, tick labels and axis labels.
const LABEL_PAD: f32 = 5.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text (title, axis labels, tick labels). Tests turn it off for
    /// pixels that do not depend on installed fonts.
    pub draw_labels: bool,
    pub title_size: f32,
    pub label_size: f32,
    pub tick_size: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
            // 12pt / 10pt / 10pt at 100 dpi
            title_size: 16.7,
            label_size: 13.9,
            tick_size: 13.9,
        }
    }
}

pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub grid: bool,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            grid: false,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Union of the finite data extents of every series.
    pub fn data_bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        self.series
            .iter()
            .filter_map(Series::bounds)
            .reduce(|((axl, axh), (ayl, ayh)), ((bxl, bxh), (byl, byh))| {
                ((axl.min(bxl), axh.max(bxh)), (ayl.min(byl), ayh.max(byh)))
            })
    }

    /// Fit both axes to the data, padded by `margin` of each span per side.
    /// Leaves the axes untouched when there is no finite data.
    pub fn autoscale_axes(&mut self, margin: f64) {
        let Some(((x0, x1), (y0, y1))) = self.data_bounds() else {
            warn!("autoscale requested on a chart without finite data");
            return;
        };
        let (x0, x1) = widen_flat(x0, x1);
        let (y0, y1) = widen_flat(y0, y1);
        self.x_axis = Axis::new(std::mem::take(&mut self.x_axis.label), x0, x1).with_margin(margin);
        self.y_axis = Axis::new(std::mem::take(&mut self.y_axis.label), y0, y1).with_margin(margin);
        trace!(
            x_min = self.x_axis.min,
            x_max = self.x_axis.max,
            y_min = self.y_axis.min,
            y_max = self.y_axis.max,
            "autoscaled axes"
        );
    }

    /// Render to unpremultiplied RGBA8. Returns `(pixels, width, height, row_stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.rasterize(opts)?;
        let (w, h) = (opts.width as u32, opts.height as u32);
        let stride = w as usize * 4;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(PlotError::ReadPixels);
        }
        Ok((pixels, w, h, stride))
    }

    /// Render the chart and PNG-encode it into an in-memory buffer.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let mut buffer = Cursor::new(Vec::new());
        PngEncoder::new(&mut buffer).write_image(&pixels, w, h, ExtendedColorType::Rgba8)?;
        let png = buffer.into_inner();
        debug!(width = w, height = h, bytes = png.len(), "encoded chart PNG");
        Ok(png)
    }

    /// Create a CPU raster surface and paint the chart into it.
    fn rasterize(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(PlotError::Surface { width: opts.width, height: opts.height })?;
        self.paint(surface.canvas(), opts);
        Ok(surface)
    }

    fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let area = RectI32::plot_area(opts.width, opts.height, &opts.insets);
        let mut fill = skia::Paint::default();
        fill.set_color(theme.plot_background);
        canvas.draw_rect(area.to_skia(), &fill);

        let sx = LinearScale::new(self.x_axis.min, self.x_axis.max, area.left as f32, area.right as f32);
        let sy = LinearScale::new(self.y_axis.min, self.y_axis.max, area.bottom as f32, area.top as f32);
        let x_ticks = self.x_axis.tick_labels();
        let y_ticks = self.y_axis.tick_labels();

        if self.grid {
            draw_grid(canvas, &area, &sx, &sy, &x_ticks, &y_ticks, theme);
        }

        // Series
        canvas.save();
        canvas.clip_rect(area.to_skia(), None, true);
        for s in &self.series {
            draw_line_series(canvas, &sx, &sy, s, theme);
        }
        canvas.restore();

        draw_spines(canvas, &area, theme);
        draw_tick_marks(canvas, &area, &sx, &sy, &x_ticks, &y_ticks, theme);

        if opts.draw_labels {
            let shaper = TextShaper::new();
            draw_labels(canvas, &shaper, &area, &sx, &sy, &x_ticks, &y_ticks, self, opts);
        }
        debug!(series = self.series.len(), grid = self.grid, labels = opts.draw_labels, "painted chart");
    }
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

fn widen_flat(lo: f64, hi: f64) -> (f64, f64) {
    if (hi - lo).abs() < 1e-9 { (lo - 0.5, hi + 0.5) } else { (lo, hi) }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(
    canvas: &skia::Canvas,
    area: &RectI32,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &[(f64, String)],
    y_ticks: &[(f64, String)],
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (l, t, r, b) = (area.left as f32, area.top as f32, area.right as f32, area.bottom as f32);
    // verticals
    for (x, _) in x_ticks {
        let px = sx.to_px(*x);
        canvas.draw_line((px, t), (px, b), &paint);
    }
    // horizontals
    for (y, _) in y_ticks {
        let py = sy.to_px(*y);
        canvas.draw_line((l, py), (r, py), &paint);
    }
}

fn draw_spines(canvas: &skia::Canvas, area: &RectI32, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.axis_line);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    canvas.draw_rect(area.to_skia(), &paint);
}

fn draw_tick_marks(
    canvas: &skia::Canvas,
    area: &RectI32,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &[(f64, String)],
    y_ticks: &[(f64, String)],
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.tick);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (l, b) = (area.left as f32, area.bottom as f32);
    for (x, _) in x_ticks {
        let px = sx.to_px(*x);
        canvas.draw_line((px, b), (px, b + TICK_LEN), &paint);
    }
    for (y, _) in y_ticks {
        let py = sy.to_px(*y);
        canvas.draw_line((l - TICK_LEN, py), (l, py), &paint);
    }
}

fn draw_line_series(
    canvas: &skia::Canvas,
    sx: &LinearScale,
    sy: &LinearScale,
    series: &Series,
    theme: &Theme,
) {
    let mut points = series
        .data_xy
        .iter()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|&(x, y)| (sx.to_px(x), sy.to_px(y)));
    let Some(first) = points.next() else {
        return;
    };

    let mut path = skia::Path::new();
    path.move_to(first);
    let mut segments = 0usize;
    for p in points {
        path.line_to(p);
        segments += 1;
    }
    if segments == 0 {
        return;
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(series.stroke_width);
    stroke.set_stroke_join(skia::paint::Join::Round);
    stroke.set_stroke_cap(skia::paint::Cap::Round);
    stroke.set_color(theme.line_stroke);

    canvas.draw_path(&path, &stroke);
    trace!(segments, "drew line series");
}

#[allow(clippy::too_many_arguments)]
fn draw_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    area: &RectI32,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &[(f64, String)],
    y_ticks: &[(f64, String)],
    chart: &Chart,
    opts: &RenderOptions,
) {
    let theme = &opts.theme;
    let (l, t, r, b) = (area.left as f32, area.top as f32, area.right as f32, area.bottom as f32);

    // Tick labels
    let tick_top = b + TICK_LEN + LABEL_PAD;
    for (x, text) in x_ticks {
        shaper.draw_centered(canvas, text, sx.to_px(*x), tick_top, opts.tick_size, theme.axis_label);
    }
    let mut widest_y_tick = 0.0f32;
    for (y, text) in y_ticks {
        widest_y_tick = widest_y_tick.max(shaper.measure_width(text, opts.tick_size));
        shaper.draw_right_middle(canvas, text, l - TICK_LEN - LABEL_PAD, sy.to_px(*y), opts.tick_size, theme.axis_label);
    }

    // Axis labels
    let tick_h = shaper.line_height(opts.tick_size);
    if !chart.x_axis.label.is_empty() {
        let top = tick_top + tick_h + LABEL_PAD;
        shaper.draw_centered(canvas, &chart.x_axis.label, (l + r) * 0.5, top, opts.label_size, theme.axis_label);
    }
    if !chart.y_axis.label.is_empty() {
        let label_h = shaper.line_height(opts.label_size);
        let left = (l - TICK_LEN - LABEL_PAD - widest_y_tick - LABEL_PAD - label_h).max(2.0);
        shaper.draw_vertical(canvas, &chart.y_axis.label, left, (t + b) * 0.5, opts.label_size, theme.axis_label);
    }

    // Title
    if !chart.title.is_empty() {
        let title_h = shaper.line_height(opts.title_size);
        let top = (t - 8.0 - title_h).max(0.0);
        shaper.draw_centered(canvas, &chart.title, (l + r) * 0.5, top, opts.title_size, theme.title);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_chart() -> Chart {
        let mut chart = Chart::new();
        chart.add_series(Series::line(vec![(0.0, 1.0), (5.0, 3.0)]));
        chart.add_series(Series::line(vec![(2.0, -1.0), (3.0, 6.0)]));
        chart
    }

    #[test]
    fn data_bounds_union_all_series() {
        assert_eq!(line_chart().data_bounds(), Some(((0.0, 5.0), (-1.0, 6.0))));
        assert_eq!(Chart::new().data_bounds(), None);
    }

    #[test]
    fn autoscale_pads_by_margin_and_keeps_labels() {
        let mut chart = line_chart();
        chart.x_axis.label = "X-axis".into();
        chart.autoscale_axes(0.1);
        assert!((chart.x_axis.min + 0.5).abs() < 1e-12);
        assert!((chart.x_axis.max - 5.5).abs() < 1e-12);
        assert!((chart.y_axis.min + 1.7).abs() < 1e-12);
        assert!((chart.y_axis.max - 6.7).abs() < 1e-12);
        assert_eq!(chart.x_axis.label, "X-axis");
    }

    #[test]
    fn autoscale_widens_flat_data() {
        let mut chart = Chart::new();
        chart.add_series(Series::line(vec![(1.0, 2.0), (1.0, 2.0)]));
        chart.autoscale_axes(0.0);
        assert_eq!((chart.x_axis.min, chart.x_axis.max), (0.5, 1.5));
        assert_eq!((chart.y_axis.min, chart.y_axis.max), (1.5, 2.5));
    }

    #[test]
    fn autoscale_without_data_is_noop() {
        let mut chart = Chart::new();
        chart.autoscale_axes(0.05);
        assert_eq!(chart.x_axis, Axis::default_x());
    }

    #[test]
    fn zero_sized_surface_is_an_error() {
        let opts = RenderOptions { width: 0, height: 0, draw_labels: false, ..RenderOptions::default() };
        let err = line_chart().render_to_png_bytes(&opts).unwrap_err();
        assert!(matches!(err, PlotError::Surface { width: 0, height: 0 }));
    }
}
