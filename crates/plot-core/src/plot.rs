// File: crates/plot-core/src/plot.rs
// Summary: Sine plot generator: sample -> chart -> PNG -> base64.

use tracing::{debug, debug_span};

use crate::chart::{Chart, RenderOptions};
use crate::encode;
use crate::error::Result;
use crate::sample::{SineSample, DOMAIN, SAMPLE_COUNT};
use crate::types::{Insets, DPI, FIG_HEIGHT_IN, FIG_WIDTH_IN};

/// Relative padding added around the data on both axes.
pub const AXIS_MARGIN: f64 = 0.05;

/// Hard-coded parameters of the sine plot.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotSpec {
    pub sample_count: usize,
    pub domain: (f64, f64),
    /// Figure size in inches.
    pub fig_size: (f32, f32),
    pub dpi: f32,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub grid: bool,
}

impl Default for PlotSpec {
    fn default() -> Self {
        Self {
            sample_count: SAMPLE_COUNT,
            domain: DOMAIN,
            fig_size: (FIG_WIDTH_IN, FIG_HEIGHT_IN),
            dpi: DPI,
            title: "Sine Wave".to_string(),
            x_label: "X-axis".to_string(),
            y_label: "Y-axis".to_string(),
            grid: true,
        }
    }
}

impl PlotSpec {
    /// Figure size in pixels.
    pub fn pixel_size(&self) -> (i32, i32) {
        (
            (self.fig_size.0 * self.dpi).round() as i32,
            (self.fig_size.1 * self.dpi).round() as i32,
        )
    }

    pub fn sample(&self) -> SineSample {
        SineSample::new(self.domain.0, self.domain.1, self.sample_count)
    }

    pub fn render_options(&self) -> RenderOptions {
        let (width, height) = self.pixel_size();
        RenderOptions {
            width,
            height,
            insets: Insets::for_figure(width, height),
            ..RenderOptions::default()
        }
    }

    /// Titled, labelled line chart of the sample with padded axes.
    pub fn build_chart(&self) -> Chart {
        let mut chart = Chart::new();
        chart.title = self.title.clone();
        chart.grid = self.grid;
        chart.x_axis.label = self.x_label.clone();
        chart.y_axis.label = self.y_label.clone();
        chart.add_series(self.sample().into_series());
        chart.autoscale_axes(AXIS_MARGIN);
        chart
    }

    pub fn render_png(&self) -> Result<Vec<u8>> {
        self.render_png_with(&self.render_options())
    }

    /// Render with explicit options (the chart is still built from `self`).
    pub fn render_png_with(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let _span = debug_span!("render_sine_plot", samples = self.sample_count).entered();
        self.build_chart().render_to_png_bytes(opts)
    }

    pub fn render_base64(&self) -> Result<String> {
        let png = self.render_png()?;
        let encoded = encode::to_base64(&png);
        debug!(png_bytes = png.len(), base64_len = encoded.len(), "encoded sine plot");
        Ok(encoded)
    }
}

/// Render the fixed sine plot and return it as base64-encoded PNG text.
pub fn generate_plot() -> Result<String> {
    PlotSpec::default().render_base64()
}
