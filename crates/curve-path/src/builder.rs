// File: crates/curve-path/src/builder.rs
// Summary: Curve path builder: linear and quadratic path fitting, adaptive subdivision,
//          value-range accumulation and the final domain -> device mapping.
// Notes:
// - Geometry is buffered in domain coordinates (`DomainPath`) until the value
//   range is closed; only then is the device transform built and applied.

use crate::error::{CurveError, CurveResult};
use crate::fit::solve_control_point;
use crate::geometry::{DeviceRect, Point};
use crate::options::FitOptions;
use crate::path::Path;
use crate::scale::DeviceTransform;
use crate::types::{Sample, ValueRange};

/// A path in function-domain coordinates together with the ranges needed to
/// map it into a device rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct DomainPath {
    path: Path,
    domain: (f64, f64),
    values: ValueRange,
}

impl DomainPath {
    fn empty() -> Self {
        Self { path: Path::new(), domain: (0.0, 1.0), values: ValueRange::empty() }
    }

    pub fn path(&self) -> &Path { &self.path }
    /// (first x, last x) of the sampled domain.
    pub fn domain(&self) -> (f64, f64) { self.domain }
    /// Closed value range over every emitted segment.
    pub fn values(&self) -> ValueRange { self.values }

    pub fn transform(&self, rect: &DeviceRect) -> DeviceTransform {
        DeviceTransform::new(self.domain, self.values, rect)
    }

    /// Map every point into `rect`.
    pub fn into_device(self, rect: &DeviceRect) -> Path {
        let t = self.transform(rect);
        log::trace!(
            "mapping {} commands: x [{}, {}] y [{}, {}] -> {:?}",
            self.path.len(), self.domain.0, self.domain.1, self.values.min, self.values.max, rect
        );
        self.path.map_points(|p| t.apply(p))
    }
}

/// Fits paths into a fixed device rectangle with a given set of tolerances.
#[derive(Clone, Copy, Debug)]
pub struct CurvePathBuilder {
    pub rect: DeviceRect,
    pub options: FitOptions,
}

impl CurvePathBuilder {
    pub fn new(top_left: Point, bottom_right: Point) -> Self {
        Self::in_rect(DeviceRect::from_corners(top_left, bottom_right))
    }

    pub fn in_rect(rect: DeviceRect) -> Self {
        Self { rect, options: FitOptions::default() }
    }

    pub fn with_options(mut self, options: FitOptions) -> Self {
        self.options = options;
        self
    }

    /// Polyline through `(xs[i], ys[i])`.
    pub fn linear(&self, xs: &[f64], ys: &[f64]) -> CurveResult<Path> {
        Ok(self.fit_linear(xs, ys)?.into_device(&self.rect))
    }

    /// One quadratic per consecutive sample pair; any solver failure is returned.
    pub fn quadratic_array(&self, xs: &[f64], ys: &[f64], dys: &[f64]) -> CurveResult<Path> {
        Ok(self.fit_quadratic_array(xs, ys, dys)?.into_device(&self.rect))
    }

    /// Quadratics over `sample_count - 1` equal intervals of `[x_start, x_end]`,
    /// bisecting any interval a single quadratic cannot represent.
    pub fn quadratic_function<F, D>(&self, f: F, df: D, x_start: f64, x_end: f64, sample_count: usize) -> Path
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        self.fit_quadratic_function(f, df, x_start, x_end, sample_count)
            .into_device(&self.rect)
    }

    pub fn fit_linear(&self, xs: &[f64], ys: &[f64]) -> CurveResult<DomainPath> {
        if xs.len() != ys.len() {
            return Err(CurveError::LengthMismatch { xs: xs.len(), ys: ys.len(), dys: None });
        }
        let (Some(&x0), Some(&y0)) = (xs.first(), ys.first()) else {
            return Ok(DomainPath::empty());
        };

        let mut values = ValueRange::empty();
        values.include(y0);
        let mut path = Path::starting_at(Point::new(x0, y0));
        for (x, y) in xs.windows(2).zip(ys.windows(2)) {
            values.include_linear(y[0], y[1]);
            path.line_to(Point::new(x[1], y[1]));
        }
        Ok(DomainPath { path, domain: (x0, xs[xs.len() - 1]), values })
    }

    pub fn fit_quadratic_array(&self, xs: &[f64], ys: &[f64], dys: &[f64]) -> CurveResult<DomainPath> {
        if xs.len() != ys.len() || xs.len() != dys.len() {
            return Err(CurveError::LengthMismatch { xs: xs.len(), ys: ys.len(), dys: Some(dys.len()) });
        }
        if xs.is_empty() {
            return Ok(DomainPath::empty());
        }

        let tol = self.options.extremum_tolerance;
        let mut s0 = Sample::new(xs[0], ys[0], dys[0]);
        let mut values = ValueRange::empty();
        values.include(s0.y);
        let mut path = Path::starting_at(Point::new(s0.x, s0.y));
        for i in 1..xs.len() {
            let s2 = Sample::new(xs[i], ys[i], dys[i]);
            let ctrl = solve_control_point(s0, s2, &self.options)?;
            values.include_quadratic(s0.y, ctrl.y, s2.y, tol);
            path.quad_to(ctrl, Point::new(s2.x, s2.y));
            s0 = s2;
        }
        Ok(DomainPath { path, domain: (xs[0], xs[xs.len() - 1]), values })
    }

    pub fn fit_quadratic_function<F, D>(&self, f: F, df: D, x_start: f64, x_end: f64, sample_count: usize) -> DomainPath
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        if sample_count == 0 {
            return DomainPath::empty();
        }

        let mut s0 = Sample::eval(&f, &df, x_start);
        let mut fitter = Subdivider {
            f: &f,
            df: &df,
            options: &self.options,
            path: Path::starting_at(Point::new(s0.x, s0.y)),
            values: ValueRange::empty(),
            subdivisions: 0,
        };
        fitter.values.include(s0.y);

        // Accumulated stepping (x0 + dx) rather than x_start + i * dx.
        let dx = (x_end - x_start) / (sample_count - 1) as f64;
        for _ in 1..sample_count {
            let s2 = Sample::eval(&f, &df, s0.x + dx);
            fitter.append_interval(s0, s2);
            s0 = s2;
        }

        log::trace!(
            "fitted {} segments over [{}, {}] with {} subdivisions",
            fitter.path.segment_count(), x_start, x_end, fitter.subdivisions
        );
        DomainPath { path: fitter.path, domain: (x_start, x_end), values: fitter.values }
    }
}

/// Recursive "solve, else bisect" worker for the function-sampling builder.
struct Subdivider<'a, F, D> {
    f: &'a F,
    df: &'a D,
    options: &'a FitOptions,
    path: Path,
    values: ValueRange,
    subdivisions: usize,
}

impl<F, D> Subdivider<'_, F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    fn append_interval(&mut self, s0: Sample, s2: Sample) {
        let err = match solve_control_point(s0, s2, self.options) {
            Ok(ctrl) => return self.push_quad(s0, ctrl, s2),
            Err(err) => err,
        };

        let xm = (s0.x + s2.x) / 2.0;
        let (lo, hi) = if s0.x <= s2.x { (s0.x, s2.x) } else { (s2.x, s0.x) };
        if !(xm > lo && xm < hi) {
            // Interval can no longer be halved; close it with a straight segment.
            log::warn!("cannot subdivide [{}, {}] further ({}); emitting a line", s0.x, s2.x, err);
            let ctrl = Point::new(s0.x, s0.y).midpoint(Point::new(s2.x, s2.y));
            return self.push_quad(s0, ctrl, s2);
        }

        if self.options.debug {
            log::debug!("dividing between {} and {} ({})", s0.x, s2.x, err);
        } else {
            log::trace!("dividing between {} and {} ({})", s0.x, s2.x, err);
        }
        self.subdivisions += 1;

        let sm = Sample::eval(self.f, self.df, xm);
        self.append_interval(s0, sm);
        self.append_interval(sm, s2);
    }

    fn push_quad(&mut self, s0: Sample, ctrl: Point, s2: Sample) {
        self.values.include_quadratic(s0.y, ctrl.y, s2.y, self.options.extremum_tolerance);
        self.path.quad_to(ctrl, Point::new(s2.x, s2.y));
    }
}

/// Polyline through the samples, mapped into the `top_left`/`bottom_right` rectangle.
/// Empty input yields an empty path; a single sample yields a lone `MoveTo`.
pub fn build_linear_path(xs: &[f64], ys: &[f64], top_left: Point, bottom_right: Point) -> CurveResult<Path> {
    CurvePathBuilder::new(top_left, bottom_right).linear(xs, ys)
}

/// Quadratic path through `(xs, ys)` matching the derivatives `dys` at every sample.
/// Fails without partial output if any segment has no valid control point.
pub fn build_quadratic_array_path(
    xs: &[f64],
    ys: &[f64],
    dys: &[f64],
    top_left: Point,
    bottom_right: Point,
) -> CurveResult<Path> {
    CurvePathBuilder::new(top_left, bottom_right).quadratic_array(xs, ys, dys)
}

/// Quadratic path of `f` (with exact derivative `df`) over `[x_start, x_end]`.
/// Never fails: unrepresentable intervals are bisected. `debug` logs each bisection.
#[allow(clippy::too_many_arguments)]
pub fn build_quadratic_function_path<F, D>(
    f: F,
    df: D,
    x_start: f64,
    x_end: f64,
    sample_count: usize,
    top_left: Point,
    bottom_right: Point,
    debug: bool,
) -> Path
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let options = FitOptions::default().with_debug(debug);
    CurvePathBuilder::new(top_left, bottom_right)
        .with_options(options)
        .quadratic_function(f, df, x_start, x_end, sample_count)
}
