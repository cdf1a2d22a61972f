// File: crates/curve-path/tests/function_path.rs
// Purpose: Function-sampling builder scenarios: straight lines, sine, subdivision, boundaries.

use std::f64::consts::PI;

use curve_path::{
    build_linear_path, build_quadratic_array_path, build_quadratic_function_path, CurveError, CurvePathBuilder, FitOptions,
    IconLayout, PathCommand, Point, Waveform,
};

fn quad_ctrls(cmds: &[PathCommand]) -> Vec<(Point, Point)> {
    cmds.iter()
        .filter_map(|c| match *c {
            PathCommand::QuadTo { ctrl, to } => Some((ctrl, to)),
            _ => None,
        })
        .collect()
}

#[test]
fn identity_function_is_a_straight_diagonal() {
    let path = build_quadratic_function_path(
        |x| x,
        |_| 1.0,
        -1.0,
        1.0,
        3,
        Point::new(0.0, 0.0),
        Point::new(10.0, 10.0),
        false,
    );

    let cmds = path.commands();
    assert_eq!(cmds.len(), 3);
    assert_eq!(cmds[0], PathCommand::MoveTo(Point::new(0.0, 0.0)));
    assert_eq!(
        quad_ctrls(cmds),
        vec![
            (Point::new(2.5, 2.5), Point::new(5.0, 5.0)),
            (Point::new(7.5, 7.5), Point::new(10.0, 10.0)),
        ]
    );
}

#[test]
fn identity_function_with_flipped_rect_runs_bottom_left_to_top_right() {
    let path = build_quadratic_function_path(
        |x| x,
        |_| 1.0,
        -1.0,
        1.0,
        3,
        Point::new(0.0, 10.0),
        Point::new(10.0, 0.0),
        false,
    );

    let cmds = path.commands();
    assert_eq!(cmds[0], PathCommand::MoveTo(Point::new(0.0, 10.0)));
    assert_eq!(cmds.last().map(|c| c.end()), Some(Point::new(10.0, 0.0)));
    // degenerate-linear: every control point sits on the diagonal
    for (ctrl, _) in quad_ctrls(cmds) {
        assert!((ctrl.x + ctrl.y - 10.0).abs() < 1e-12, "{:?} off the diagonal", ctrl);
    }
}

#[test]
fn sine_half_period_needs_no_subdivision() {
    let path = build_quadratic_function_path(
        f64::sin,
        f64::cos,
        0.0,
        PI,
        5,
        Point::new(0.0, 0.0),
        Point::new(100.0, 100.0),
        false,
    );
    assert_eq!(path.segment_count(), 4);
    for (ctrl, _) in quad_ctrls(path.commands()) {
        assert!(ctrl.x >= 0.0 && ctrl.x <= 100.0 + 1e-9);
    }
}

#[test]
fn equal_derivatives_are_subdivided_instead_of_failing() {
    let two_pi = 2.0 * PI;
    let tl = Point::new(0.0, 0.0);
    let br = Point::new(10.0, 10.0);

    let res = build_quadratic_array_path(&[0.0, two_pi], &[0.0, two_pi.sin()], &[1.0, two_pi.cos()], tl, br);
    assert!(matches!(res, Err(CurveError::NonlinearEqualDerivatives { .. })));

    let path = build_quadratic_function_path(f64::sin, f64::cos, 0.0, two_pi, 2, tl, br, false);
    assert!(path.segment_count() >= 2, "got {} segments", path.segment_count());
}

#[test]
fn cubic_inflection_is_split_at_the_midpoint() {
    let path = CurvePathBuilder::new(Point::new(0.0, 0.0), Point::new(2.0, 2.0))
        .quadratic_function(|x| x * x * x, |x| 3.0 * x * x, -1.0, 1.0, 2);

    let quads = quad_ctrls(path.commands());
    assert_eq!(quads.len(), 2);
    // split point x = 0 maps to the rect centre
    assert_eq!(quads[0].1, Point::new(1.0, 1.0));
    assert_eq!(quads[1].1, Point::new(2.0, 2.0));
}

#[test]
fn zero_width_domain_terminates() {
    let path = CurvePathBuilder::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0))
        .quadratic_function(|x| x, |_| 1.0, 0.5, 0.5, 4);
    assert_eq!(path.segment_count(), 3);
    assert!(path.points().all(|p| p.x.is_finite() && p.y.is_finite()));
}

#[test]
fn sample_count_boundaries() {
    let tl = Point::new(0.0, 0.0);
    let br = Point::new(1.0, 1.0);

    let none = build_quadratic_function_path(f64::sin, f64::cos, 0.0, 1.0, 0, tl, br, false);
    assert!(none.is_empty());

    let single = build_quadratic_function_path(f64::sin, f64::cos, 0.0, 1.0, 1, tl, br, false);
    assert_eq!(single.segment_count(), 0);
    assert!(single.len() <= 1);
}

#[test]
fn debug_flag_does_not_change_output() {
    let w = Waveform::launcher();
    let layout = IconLayout::launcher();
    let rect = layout.curve_rect();
    let build = |debug| {
        build_quadratic_function_path(
            |x| w.value(x),
            |x| w.derivative(x),
            layout.domain.0,
            layout.domain.1,
            layout.sample_count,
            rect.top_left,
            rect.bottom_right,
            debug,
        )
    };
    assert_eq!(build(false), build(true));
}

#[test]
fn repeated_builds_are_identical() {
    let w = Waveform::launcher();
    let builder = CurvePathBuilder::in_rect(IconLayout::status().curve_rect())
        .with_options(FitOptions::default());
    let a = builder.quadratic_function(|x| w.value(x), |x| w.derivative(x), -1.0, 1.0 / 3.0, 22);
    let b = builder.quadratic_function(|x| w.value(x), |x| w.derivative(x), -1.0, 1.0 / 3.0, 22);
    assert_eq!(a, b);
    assert_eq!(a.to_svg_data(), b.to_svg_data());
}

#[test]
fn repeated_array_builds_are_identical() {
    let rect = IconLayout::launcher().curve_rect();
    let xs = [0.0, 0.25 * PI, 0.5 * PI, 0.75 * PI, PI];
    let ys: Vec<f64> = xs.iter().map(|x| x.sin()).collect();
    let dys: Vec<f64> = xs.iter().map(|x| x.cos()).collect();

    let a = build_linear_path(&xs, &ys, rect.top_left, rect.bottom_right).expect("linear");
    let b = build_linear_path(&xs, &ys, rect.top_left, rect.bottom_right).expect("linear");
    assert_eq!(a, b);
    assert_eq!(a.to_svg_data(), b.to_svg_data());

    let a = build_quadratic_array_path(&xs, &ys, &dys, rect.top_left, rect.bottom_right).expect("quadratic");
    let b = build_quadratic_array_path(&xs, &ys, &dys, rect.top_left, rect.bottom_right).expect("quadratic");
    assert_eq!(a, b);
    assert_eq!(a.to_svg_data(), b.to_svg_data());
}

#[test]
fn launcher_waveform_spans_the_curve_rect() {
    let layout = IconLayout::launcher();
    let rect = layout.curve_rect();
    let w = Waveform::launcher();
    let path = CurvePathBuilder::in_rect(rect).quadratic_function(
        |x| w.value(x),
        |x| w.derivative(x),
        layout.domain.0,
        layout.domain.1,
        layout.sample_count,
    );

    assert!(path.segment_count() >= layout.sample_count - 1);
    let first = path.commands()[0].end();
    let last = path.commands()[path.len() - 1].end();
    assert!((first.x - rect.top_left.x).abs() < 1e-9);
    assert!((last.x - rect.bottom_right.x).abs() < 1e-9);
}
