// File: crates/curve-path/src/layout.rs
// Summary: Icon layout presets (size, padding, stroke, button) and the curve rectangle they imply.

use crate::geometry::{DeviceRect, Point};

/// Geometry of a square icon with the waveform running into a round button
/// on the right edge.
/// Contract: all lengths are in device pixels and non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconLayout {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub stroke: f64,
    pub button_radius: f64,
    /// Sampled waveform domain.
    pub domain: (f64, f64),
    pub sample_count: usize,
}

impl IconLayout {
    /// 192x192 launcher icon.
    pub fn launcher() -> Self {
        Self {
            width: 192.0,
            height: 192.0,
            padding: 18.0,
            stroke: 10.0,
            button_radius: 20.0,
            domain: (-1.0, 1.0),
            sample_count: 22,
        }
    }

    /// 24x24 notification icon showing the first two thirds of the waveform.
    pub fn status() -> Self {
        Self {
            width: 24.0,
            height: 24.0,
            padding: 2.0,
            stroke: 2.0,
            button_radius: 2.5,
            domain: (-1.0, 1.0 / 3.0),
            sample_count: 22,
        }
    }

    /// Rectangle the curve is fitted into; the stroke stays inside the padding
    /// and the curve ends at the button centre.
    pub fn curve_rect(&self) -> DeviceRect {
        let half = self.stroke / 2.0;
        DeviceRect::from_ltrb(
            self.padding + half,
            self.padding + half,
            self.width - self.button_radius - self.padding,
            self.height - self.padding - half,
        )
    }

    pub fn button_center(&self) -> Point {
        Point::new(self.curve_rect().bottom_right.x, self.height / 2.0)
    }

    /// Radius of the background disc.
    pub fn outer_radius(&self) -> f64 {
        self.width / 2.0 - self.padding / 2.0
    }
}

impl Default for IconLayout {
    fn default() -> Self {
        Self::launcher()
    }
}
