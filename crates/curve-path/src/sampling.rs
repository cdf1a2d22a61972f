// File: crates/curve-path/src/sampling.rs
// Summary: Sampling helpers turning (f, df) into the parallel arrays used by the array builders.

use crate::types::Sample;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Parallel x / y / dy sequences.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Samples {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub dys: Vec<f64>,
}

impl Samples {
    pub fn len(&self) -> usize { self.xs.len() }
    pub fn is_empty(&self) -> bool { self.xs.is_empty() }

    pub fn push(&mut self, s: Sample) {
        self.xs.push(s.x);
        self.ys.push(s.y);
        self.dys.push(s.dy);
    }
}

impl FromIterator<Sample> for Samples {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        let mut out = Samples::default();
        for s in iter { out.push(s); }
        out
    }
}

/// Evaluate `f` and `df` at each of `xs`.
pub fn sample_function<F, D>(f: F, df: D, xs: &[f64]) -> Samples
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    xs.iter().map(|&x| Sample::eval(&f, &df, x)).collect()
}
