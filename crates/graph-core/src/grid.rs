// File: crates/graph-core/src/grid.rs
// Summary: Grid/tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Hard cap on ticks per axis; anything above this is rounding pathology,
/// not a layout we can draw.
const MAX_TICKS: usize = 256;

/// Tick positions covering `[min, max]` at a step of 1, 2 or 5 times a power
/// of ten, aiming for roughly `target` ticks. Empty on degenerate input.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || min >= max || target < 2 {
        return Vec::new();
    }
    let step = nice_step((max - min) / target as f64);
    let first = (min / step).ceil();
    let last = (max / step).floor();

    // Integer counter: stepping `first` by 1.0 stalls once tick indices pass
    // 2^53, e.g. for axes out near 1e16.
    let count = last - first;
    if !count.is_finite() || count < 0.0 || count > MAX_TICKS as f64 {
        return Vec::new();
    }
    let mut ticks = Vec::with_capacity(count as usize + 1);
    for i in 0..=count as i64 {
        let v = (first + i as f64) * step;
        // snap values that are within rounding noise of zero
        ticks.push(if v.abs() < step * 1e-9 { 0.0 } else { v });
    }
    ticks
}

fn nice_step(raw: f64) -> f64 {
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let mult = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    mult * mag
}

/// Format a tick value without trailing zeros, so integer ticks read as "1".
pub fn format_tick(v: f64) -> String {
    let r = (v * 1e6).round() / 1e6;
    let r = if r == 0.0 { 0.0 } else { r };
    if r == r.trunc() {
        format!("{:.0}", r)
    } else {
        format!("{}", r)
    }
}
