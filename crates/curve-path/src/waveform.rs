// File: crates/curve-path/src/waveform.rs
// Summary: Damped sine waveform drawn on the launcher and status icons, with its exact derivative.

use std::f64::consts::PI;

/// `f(x) = sin(c*x) * (1 - a*x^2) * exp(-d*x^2)`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Waveform {
    pub a: f64,
    pub c: f64,
    pub d: f64,
}

impl Waveform {
    pub const fn new(a: f64, c: f64, d: f64) -> Self {
        Self { a, c, d }
    }

    /// Parameters used by both icons.
    pub fn launcher() -> Self {
        Self::new(0.5, 3.0 * PI, 0.28)
    }

    pub fn value(&self, x: f64) -> f64 {
        (self.c * x).sin() * (1.0 - self.a * x * x) * (-self.d * x * x).exp()
    }

    pub fn derivative(&self, x: f64) -> f64 {
        let Self { a, c, d } = *self;
        let x2 = x * x;
        (-d * x2).exp()
            * (c * (1.0 - a * x2) * (c * x).cos() + 2.0 * x * (-d + a * (-1.0 + d * x2)) * (c * x).sin())
    }
}
