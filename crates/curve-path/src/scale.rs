// File: crates/curve-path/src/scale.rs
// Summary: Domain -> device affine transform (per-axis scale + offset) and its inverse.

use crate::geometry::{DeviceRect, Point};
use crate::types::ValueRange;

/// One axis of the transform: `device = scale * domain + offset`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisScale {
    pub scale: f64,
    pub offset: f64,
}

impl AxisScale {
    /// Map `min` to `lo_px` and `max` to `hi_px`. `min > max` mirrors the axis.
    /// A zero-width span is widened to one unit so the mapping stays finite.
    pub fn new(mut min: f64, mut max: f64, lo_px: f64, hi_px: f64) -> Self {
        if min.is_infinite() && max.is_infinite() {
            // empty range, nothing was accumulated
            min = 0.0;
            max = 1.0;
        }
        if max - min == 0.0 {
            max = min + 1.0;
        }
        let scale = (hi_px - lo_px) / (max - min);
        Self { scale, offset: lo_px - min * scale }
    }
    #[inline]
    pub fn to_device(&self, v: f64) -> f64 {
        self.scale * v + self.offset
    }
    #[inline]
    pub fn from_device(&self, px: f64) -> f64 {
        (px - self.offset) / self.scale
    }
}

/// Affine map from function-domain points into a device rectangle.
/// Built once the domain and value ranges are final.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceTransform {
    pub x: AxisScale,
    pub y: AxisScale,
}

impl DeviceTransform {
    pub fn new(domain: (f64, f64), values: ValueRange, rect: &DeviceRect) -> Self {
        Self {
            x: AxisScale::new(domain.0, domain.1, rect.top_left.x, rect.bottom_right.x),
            y: AxisScale::new(values.min, values.max, rect.top_left.y, rect.bottom_right.y),
        }
    }
    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        Point::new(self.x.to_device(p.x), self.y.to_device(p.y))
    }
    #[inline]
    pub fn invert(&self, p: Point) -> Point {
        Point::new(self.x.from_device(p.x), self.y.from_device(p.y))
    }
}
