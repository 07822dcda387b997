//! 2D bounds in the engine's string form

use std::fmt;

use serde_json::Value;

/// Rectangular extent rendered as `([minx,maxx],[miny,maxy])`.
///
/// Several reader and filter options (`bounds`, crop windows, raster extents)
/// take this string form rather than a JSON structure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

impl Bounds {
    pub fn new(minx: f64, miny: f64, maxx: f64, maxy: f64) -> Self {
        Self {
            minx,
            miny,
            maxx,
            maxy,
        }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "([{},{}],[{},{}])",
            self.minx, self.maxx, self.miny, self.maxy
        )
    }
}

impl From<Bounds> for Value {
    fn from(bounds: Bounds) -> Self {
        Value::String(bounds.to_string())
    }
}
