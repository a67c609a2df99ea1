// File: crates/plot-core/src/lib.rs
// Summary: Core library entry point; exports the sine plot generator and the chart pieces behind it.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod sample;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod theme;
pub mod text;
pub mod encode;
pub mod error;
pub mod plot;
pub mod telemetry;

pub use chart::{Chart, RenderOptions};
pub use series::Series;
pub use axis::Axis;
pub use sample::SineSample;
pub use theme::Theme;
pub use text::TextShaper;
pub use error::PlotError;
pub use plot::{generate_plot, PlotSpec};
