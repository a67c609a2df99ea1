// File: crates/plot-core/src/error.rs
// Summary: Error type for rendering and encoding failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("failed to read pixels back from the raster surface")]
    ReadPixels,

    #[error("PNG encode failed")]
    PngEncode(#[from] image::ImageError),

    #[error("invalid base64 payload")]
    Base64(#[from] base64::DecodeError),
}

pub type Result<T> = std::result::Result<T, PlotError>;
