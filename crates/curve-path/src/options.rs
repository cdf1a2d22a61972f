// File: crates/curve-path/src/options.rs
// Summary: Fit options (solver tolerances and diagnostics switch).

use crate::types::{COLINEAR_TOLERANCE, EQUAL_DERIVATIVE_TOLERANCE, EXTREMUM_TOLERANCE};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitOptions {
    pub colinear_tolerance: f64,
    pub equal_derivative_tolerance: f64,
    pub extremum_tolerance: f64,
    /// Log every subdivision at debug level. Has no effect on the produced path.
    pub debug: bool,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            colinear_tolerance: COLINEAR_TOLERANCE,
            equal_derivative_tolerance: EQUAL_DERIVATIVE_TOLERANCE,
            extremum_tolerance: EXTREMUM_TOLERANCE,
            debug: false,
        }
    }
}

impl FitOptions {
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
