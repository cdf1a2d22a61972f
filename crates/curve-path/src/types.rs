// File: crates/curve-path/src/types.rs
// Summary: Shared types and constants (samples, value range, fit tolerances).

use crate::fit::quad_eval;

/// Secant-vs-tangent slope tolerance for treating a segment as already linear.
pub const COLINEAR_TOLERANCE: f64 = 1e-5;
/// Below this derivative difference the end tangents count as parallel.
pub const EQUAL_DERIVATIVE_TOLERANCE: f64 = 1e-6;
/// Minimum |y0 - 2*y1 + y2| for a quadratic to have an interior y-extremum.
pub const EXTREMUM_TOLERANCE: f64 = 1e-6;

/// A function sample: abscissa, value and derivative at `x`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub dy: f64,
}

impl Sample {
    pub const fn new(x: f64, y: f64, dy: f64) -> Self {
        Self { x, y, dy }
    }

    /// Evaluate `f` and `df` at `x`.
    #[inline]
    pub fn eval<F, D>(f: &F, df: &D, x: f64) -> Self
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        Self { x, y: f(x), dy: df(x) }
    }
}

/// Running (min, max) of the values a path reaches.
/// Starts empty at (+inf, -inf) and only ever grows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::empty()
    }
}

impl ValueRange {
    pub const fn empty() -> Self {
        Self { min: f64::INFINITY, max: f64::NEG_INFINITY }
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    #[inline]
    pub fn include(&mut self, y: f64) {
        if self.min > y { self.min = y; }
        if self.max < y { self.max = y; }
    }

    /// Extend by both endpoints of a straight segment.
    pub fn include_linear(&mut self, y0: f64, y1: f64) {
        self.include(y0);
        self.include(y1);
    }

    /// Extend by a quadratic segment `y0`-`y1`-`y2`, including its interior
    /// extremum when the curve bulges past its endpoints.
    pub fn include_quadratic(&mut self, y0: f64, y1: f64, y2: f64, tolerance: f64) {
        self.include_linear(y0, y2);
        let dt = y0 - 2.0 * y1 + y2;
        if dt.abs() > tolerance {
            let t = (y0 - y1) / dt;
            if (0.0..=1.0).contains(&t) {
                self.include(quad_eval(y0, y1, y2, t));
            }
        }
    }
}
