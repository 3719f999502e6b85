// File: crates/graph-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use skia_safe as skia;

use crate::axis::Axis;
use crate::error::RenderError;
use crate::grid::{format_tick, nice_ticks};
use crate::series::{Marker, Series};
use crate::style::Style;
use crate::types::{Insets, HEIGHT, WIDTH};

/// Rough tick counts to aim for on each axis.
const X_TICK_TARGET: usize = 6;
const Y_TICK_TARGET: usize = 6;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub style: Style,
    pub draw_grid: bool,
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            style: Style::default(),
            draw_grid: true,
            draw_labels: true,
        }
    }
}

pub struct Chart {
    pub title: Option<String>,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: None,
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axis ranges to the data across all series, expanding each
    /// range by `pad_frac` on both ends. Axes with no data keep their range.
    pub fn autoscale_axes(&mut self, pad_frac: f64) {
        let mut xb: Option<(f64, f64)> = None;
        let mut yb: Option<(f64, f64)> = None;
        for s in &self.series {
            xb = merge(xb, s.x_bounds());
            yb = merge(yb, s.y_bounds());
        }
        if let Some((lo, hi)) = xb {
            (self.x_axis.min, self.x_axis.max) = padded(lo, hi, pad_frac);
        }
        if let Some((lo, hi)) = yb {
            (self.y_axis.min, self.y_axis.max) = padded(lo, hi, pad_frac);
        }
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<(), RenderError> {
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, data)?;
        Ok(())
    }

    /// Render the chart and return the encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        let mut surface = self.raster(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart and return unpremultiplied RGBA8 pixels plus
    /// (width, height, row stride in bytes).
    pub fn render_to_rgba8(
        &self,
        opts: &RenderOptions,
    ) -> Result<(Vec<u8>, i32, i32, usize), RenderError> {
        let mut surface = self.raster(opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.canvas().read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::ReadPixels);
        }
        Ok((pixels, opts.width, opts.height, stride))
    }

    fn raster(&self, opts: &RenderOptions) -> Result<skia::Surface, RenderError> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(RenderError::Surface { width: opts.width, height: opts.height })?;
        self.draw(surface.canvas(), opts);
        Ok(surface)
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        canvas.clear(opts.style.background);

        // Paddings & plot rect
        let plot_left = opts.insets.left as i32;
        let plot_right = opts.width - opts.insets.right as i32;
        let plot_top = opts.insets.top as i32;
        let plot_bottom = opts.height - opts.insets.bottom as i32;

        let x_ticks = nice_ticks(self.x_axis.min, self.x_axis.max, X_TICK_TARGET);
        let y_ticks = nice_ticks(self.y_axis.min, self.y_axis.max, Y_TICK_TARGET);

        if opts.draw_grid {
            draw_grid(
                canvas,
                plot_left, plot_top, plot_right, plot_bottom,
                &self.x_axis, &self.y_axis,
                &x_ticks, &y_ticks,
                &opts.style,
            );
        }
        draw_axes(canvas, plot_left, plot_top, plot_right, plot_bottom, &opts.style);
        if opts.draw_labels {
            draw_labels(
                canvas,
                plot_left, plot_top, plot_right, plot_bottom,
                self, opts,
                &x_ticks, &y_ticks,
            );
        }

        for s in &self.series {
            draw_line_series(
                canvas,
                plot_left, plot_top, plot_right, plot_bottom,
                &self.x_axis, &self.y_axis,
                s,
                &opts.style,
            );
        }
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

fn merge(a: Option<(f64, f64)>, b: Option<(f64, f64)>) -> Option<(f64, f64)> {
    match (a, b) {
        (Some((alo, ahi)), Some((blo, bhi))) => Some((alo.min(blo), ahi.max(bhi))),
        (some, None) | (None, some) => some,
    }
}

fn padded(lo: f64, hi: f64, pad_frac: f64) -> (f64, f64) {
    let span = hi - lo;
    if span <= 0.0 {
        // single-value range, widen to a unit span
        (lo - 0.5, hi + 0.5)
    } else {
        (lo - span * pad_frac, hi + span * pad_frac)
    }
}

// ---- helpers ----------------------------------------------------------------

#[allow(clippy::too_many_arguments)]
fn draw_grid(
    canvas: &skia::Canvas,
    l: i32, t: i32, r: i32, b: i32,
    x_axis: &Axis, y_axis: &Axis,
    x_ticks: &[f64], y_ticks: &[f64],
    style: &Style,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(style.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let sx = scale_x(l, r, x_axis);
    let sy = scale_y(t, b, y_axis);

    // grid lines follow the tick positions
    for &tx in x_ticks {
        let px = sx(tx);
        canvas.draw_line((px, t as f32), (px, b as f32), &paint);
    }
    for &ty in y_ticks {
        let py = sy(ty);
        canvas.draw_line((l as f32, py), (r as f32, py), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32, style: &Style) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(style.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    // X and Y axis lines
    canvas.draw_line((l as f32, b as f32), (r as f32, b as f32), &axis_paint);
    canvas.draw_line((l as f32, t as f32), (l as f32, b as f32), &axis_paint);
}

#[allow(clippy::too_many_arguments)]
fn draw_labels(
    canvas: &skia::Canvas,
    l: i32, t: i32, r: i32, b: i32,
    chart: &Chart,
    opts: &RenderOptions,
    x_ticks: &[f64], y_ticks: &[f64],
) {
    let style = &opts.style;
    let mut paint_text = skia::Paint::default();
    paint_text.set_color(style.text);
    paint_text.set_anti_alias(true);

    let mut tick_font = skia::Font::default();
    tick_font.set_size(style.tick_font_size);

    let sx = scale_x(l, r, &chart.x_axis);
    let sy = scale_y(t, b, &chart.y_axis);

    // tick labels: centered under the x axis, right-aligned left of the y axis
    for &tx in x_ticks {
        let text = format_tick(tx);
        let (w, _) = tick_font.measure_str(&text, Some(&paint_text));
        canvas.draw_str(
            &text,
            (sx(tx) - w * 0.5, b as f32 + style.tick_font_size + 6.0),
            &tick_font,
            &paint_text,
        );
    }
    for &ty in y_ticks {
        let text = format_tick(ty);
        let (w, _) = tick_font.measure_str(&text, Some(&paint_text));
        canvas.draw_str(
            &text,
            (l as f32 - w - 8.0, sy(ty) + style.tick_font_size * 0.35),
            &tick_font,
            &paint_text,
        );
    }

    // axis labels
    let mut label_font = skia::Font::default();
    label_font.set_size(style.label_font_size);

    if !chart.x_axis.label.is_empty() {
        let (w, _) = label_font.measure_str(&chart.x_axis.label, Some(&paint_text));
        canvas.draw_str(
            &chart.x_axis.label,
            ((l + r) as f32 * 0.5 - w * 0.5, b as f32 + style.tick_font_size + style.label_font_size + 14.0),
            &label_font,
            &paint_text,
        );
    }
    if !chart.y_axis.label.is_empty() {
        // rotated 90 degrees, reading bottom-to-top along the axis
        let (w, _) = label_font.measure_str(&chart.y_axis.label, Some(&paint_text));
        canvas.save();
        canvas.translate((style.label_font_size + 6.0, (t + b) as f32 * 0.5 + w * 0.5));
        canvas.rotate(-90.0, None);
        canvas.draw_str(&chart.y_axis.label, (0.0, 0.0), &label_font, &paint_text);
        canvas.restore();
    }

    // title, centered over the plot
    if let Some(title) = &chart.title {
        let mut title_font = skia::Font::default();
        title_font.set_size(style.title_font_size);
        let (w, _) = title_font.measure_str(title, Some(&paint_text));
        canvas.draw_str(
            title,
            (opts.width as f32 * 0.5 - w * 0.5, style.title_font_size + 8.0),
            &title_font,
            &paint_text,
        );
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_line_series(
    canvas: &skia::Canvas,
    l: i32, t: i32, r: i32, b: i32,
    x_axis: &Axis, y_axis: &Axis,
    series: &Series,
    style: &Style,
) {
    let sx = scale_x(l, r, x_axis);
    let sy = scale_y(t, b, y_axis);

    let points: Vec<(f32, f32)> = series
        .data
        .iter()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|&(x, y)| (sx(x), sy(y)))
        .collect();

    if points.len() >= 2 {
        let mut path = skia::Path::new();
        path.move_to(points[0]);
        for &p in points.iter().skip(1) {
            path.line_to(p);
        }

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(style.line_width);
        stroke.set_color(style.line_stroke);

        canvas.draw_path(&path, &stroke);
    }

    // markers still render for a lone point
    if series.marker == Marker::Circle {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(style.line_stroke);

        for &p in &points {
            canvas.draw_circle(p, style.marker_radius, &fill);
        }
    }
}

fn scale_x(l: i32, r: i32, axis: &Axis) -> impl Fn(f64) -> f32 + '_ {
    let span = axis.span();
    let min = axis.min;
    move |x: f64| l as f32 + ((x - min) / span) as f32 * (r - l) as f32
}

fn scale_y(t: i32, b: i32, axis: &Axis) -> impl Fn(f64) -> f32 + '_ {
    let span = axis.span();
    let min = axis.min;
    move |y: f64| b as f32 - ((y - min) / span) as f32 * (b - t) as f32
}
