// File: crates/graph-core/src/style.rs
// Summary: Colors and stroke metrics for chart rendering.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Style {
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub text: skia::Color,
    pub line_stroke: skia::Color,
    pub line_width: f32,
    pub marker_radius: f32,
    pub tick_font_size: f32,
    pub label_font_size: f32,
    pub title_font_size: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 221, 221, 221),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            text: skia::Color::from_argb(255, 20, 20, 30),
            line_stroke: skia::Color::from_argb(255, 0x1f, 0x77, 0xb4),
            line_width: 2.0,
            marker_radius: 4.0,
            tick_font_size: 12.0,
            label_font_size: 14.0,
            title_font_size: 18.0,
        }
    }
}
