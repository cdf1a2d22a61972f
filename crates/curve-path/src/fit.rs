// File: crates/curve-path/src/fit.rs
// Summary: Quadratic Bézier control-point solver matching end tangents of a sampled function.

use crate::error::{CurveError, CurveResult};
use crate::geometry::Point;
use crate::options::FitOptions;
use crate::types::Sample;

/// Solve the single control point of the quadratic from `s0` to `s2` whose
/// tangents at both ends equal `s0.dy` and `s2.dy`.
///
/// - If the secant slope matches both derivatives (within
///   `colinear_tolerance`) the segment is straight and the midpoint is returned.
/// - Equal derivatives with a non-colinear chord have no solution:
///   [`CurveError::NonlinearEqualDerivatives`].
/// - A solution whose x falls outside the segment's x-interval is rejected with
///   [`CurveError::ControlPointOutOfRange`].
pub fn solve_control_point(s0: Sample, s2: Sample, opts: &FitOptions) -> CurveResult<Point> {
    let Sample { x: x0, y: y0, dy: dy0 } = s0;
    let Sample { x: x2, y: y2, dy: dy2 } = s2;

    let secant = (y2 - y0) / (x2 - x0);
    if (secant - dy0).abs() < opts.colinear_tolerance && (secant - dy2).abs() < opts.colinear_tolerance {
        return Ok(Point::new(x0, y0).midpoint(Point::new(x2, y2)));
    }

    let dyd = dy0 - dy2;
    if dyd.abs() < opts.equal_derivative_tolerance {
        return Err(CurveError::NonlinearEqualDerivatives { x0, x2 });
    }

    let x1 = (dy0 * x0 - dy2 * x2 + y2 - y0) / dyd;
    let (lo, hi) = if x0 <= x2 { (x0, x2) } else { (x2, x0) };
    if x1 < lo || x1 > hi {
        return Err(CurveError::ControlPointOutOfRange { x0, x1, x2 });
    }

    let y1 = (dy0 * (dy2 * (x0 - x2) + y2) - dy2 * y0) / dyd;
    Ok(Point::new(x1, y1))
}

/// Evaluate a quadratic Bézier coordinate at parameter `t`.
#[inline]
pub fn quad_eval(p0: f64, p1: f64, p2: f64, t: f64) -> f64 {
    let u = 1.0 - t;
    u * u * p0 + 2.0 * u * t * p1 + t * t * p2
}
