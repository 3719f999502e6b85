// File: crates/graph-core/src/error.rs
// Summary: Render error taxonomy for the rasterization pipeline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("failed to encode PNG")]
    Encode,

    #[error("failed to read back RGBA pixels")]
    ReadPixels,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
