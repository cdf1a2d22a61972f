// File: crates/curve-path/src/geometry.rs
// Summary: Point and device rectangle types shared by the builders and transforms.

/// A 2D point. Whether it lives in function-domain or device space depends on
/// which side of the transform it was produced on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Midpoint of the segment `self`-`other`.
    #[inline]
    pub fn midpoint(&self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Target rectangle in device coordinates, given by two opposite corners.
/// Contract: `top_left` maps the domain/value minimum, `bottom_right` the maximum.
/// The corners are not reordered, so a "bottom" above the "top" flips the axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceRect {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl DeviceRect {
    pub const fn from_corners(top_left: Point, bottom_right: Point) -> Self {
        Self { top_left, bottom_right }
    }
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { top_left: Point::new(left, top), bottom_right: Point::new(right, bottom) }
    }
}
