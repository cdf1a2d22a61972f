// File: crates/curve-path/src/error.rs
// Summary: Error type for control-point solving and input validation.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// The endpoints share a tangent but the chord is not colinear with it;
    /// no single quadratic has both boundary tangents.
    #[error("nonlinear points with equal derivatives on [{x0}, {x2}]")]
    NonlinearEqualDerivatives { x0: f64, x2: f64 },

    /// The solved control point falls outside the segment's x-interval.
    #[error("control point x={x1} outside function interval [{x0}, {x2}]")]
    ControlPointOutOfRange { x0: f64, x1: f64, x2: f64 },

    /// Parallel sample sequences differ in length. `dys` is `None` for the linear mode.
    #[error("sample lengths are not the same (x: {xs}, y: {ys}, dy: {dys:?})")]
    LengthMismatch { xs: usize, ys: usize, dys: Option<usize> },
}

pub type CurveResult<T> = Result<T, CurveError>;
