// File: crates/graph-core/src/series.rs
// Summary: Line series model with per-point markers.

/// Symbol drawn at each data point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    None,
    Circle,
}

#[derive(Clone, Debug)]
pub struct Series {
    pub data: Vec<(f64, f64)>,
    pub marker: Marker,
}

impl Series {
    pub fn with_data(data: Vec<(f64, f64)>) -> Self {
        Self { data, marker: Marker::None }
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    /// Min/max over finite x values, or None when there are none.
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        bounds(self.data.iter().map(|&(x, _)| x))
    }

    /// Min/max over finite y values, or None when there are none.
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        bounds(self.data.iter().map(|&(_, y)| y))
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values.filter(|v| v.is_finite()) {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if lo <= hi { Some((lo, hi)) } else { None }
}
