// File: crates/curve-path/src/lib.rs
// Summary: Core library entry point; exports the curve path builder API.

pub mod builder;
pub mod error;
pub mod fit;
pub mod geometry;
pub mod layout;
pub mod options;
pub mod path;
pub mod sampling;
pub mod scale;
pub mod types;
pub mod waveform;

pub use builder::{
    build_linear_path, build_quadratic_array_path, build_quadratic_function_path, CurvePathBuilder,
    DomainPath,
};
pub use error::{CurveError, CurveResult};
pub use geometry::{DeviceRect, Point};
pub use layout::IconLayout;
pub use options::FitOptions;
pub use path::{Path, PathCommand};
pub use sampling::{linspace, sample_function, Samples};
pub use scale::DeviceTransform;
pub use types::{Sample, ValueRange};
pub use waveform::Waveform;
