// File: crates/graph-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and rendering.

pub mod axis;
pub mod chart;
pub mod error;
pub mod grid;
pub mod series;
pub mod style;
pub mod types;

pub use axis::Axis;
pub use chart::{Chart, RenderOptions};
pub use error::RenderError;
pub use series::{Marker, Series};
pub use style::Style;
pub use types::Insets;
