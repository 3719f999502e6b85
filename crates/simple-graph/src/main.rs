// File: crates/simple-graph/src/main.rs
// Summary: Renders the fixed five-point line graph to simple_graph.png.

use anyhow::{Context, Result};
use graph_core::{Chart, Marker, RenderOptions, Series};
use std::path::Path;

fn main() -> Result<()> {
    // Sample data
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y = [2.0, 3.0, 5.0, 7.0, 11.0];
    let points: Vec<(f64, f64)> = x.into_iter().zip(y).collect();

    let mut chart = Chart::new();
    chart.title = Some("Simple Line Graph".to_string());
    chart.x_axis.label = "X values".to_string();
    chart.y_axis.label = "Y values".to_string();
    chart.add_series(Series::with_data(points).with_marker(Marker::Circle));
    chart.autoscale_axes(0.05);

    let out = Path::new("simple_graph.png");
    chart
        .render_to_png(&RenderOptions::default(), out)
        .with_context(|| format!("failed to write {}", out.display()))?;
    println!("Wrote {}", out.display());

    Ok(())
}
