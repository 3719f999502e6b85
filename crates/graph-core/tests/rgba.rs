// File: crates/graph-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use graph_core::{Axis, Chart, RenderOptions, Series};

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::with_data(vec![(0.0, 0.0), (4.0, 4.0)]));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel is untouched background: opaque white
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn render_is_deterministic() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::with_data(vec![(0.0, 1.0), (2.0, 3.0), (4.0, 2.0)]));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let (a, ..) = chart.render_to_rgba8(&opts).expect("first render");
    let (b, ..) = chart.render_to_rgba8(&opts).expect("second render");
    assert_eq!(a, b, "re-rendering the same chart must yield identical pixels");
}
