// File: crates/curve-path-skia/src/lib.rs
// Summary: Skia bridge: curve path -> skia::Path, and the stroke styles the icons draw it with.

use curve_path::{Path, PathCommand, Point};
use skia_safe as skia;

#[inline]
fn to_skia_point(p: Point) -> skia::Point {
    skia::Point::new(p.x as f32, p.y as f32)
}

/// Replay the commands onto a new Skia path (device coordinates are narrowed to f32).
pub fn to_skia_path(path: &Path) -> skia::Path {
    let mut out = skia::Path::new();
    for cmd in path.commands() {
        match *cmd {
            PathCommand::MoveTo(p) => {
                out.move_to(to_skia_point(p));
            }
            PathCommand::LineTo(p) => {
                out.line_to(to_skia_point(p));
            }
            PathCommand::QuadTo { ctrl, to } => {
                out.quad_to(to_skia_point(ctrl), to_skia_point(to));
            }
        }
    }
    log::trace!("converted {} commands into a skia path with {} points", path.len(), out.count_points());
    out
}

/// Stroke style for the waveform; the curve is never filled.
#[derive(Clone, Copy, Debug)]
pub struct CurveStroke {
    pub color: skia::Color,
    pub width: f32,
    pub cap: skia::paint::Cap,
}

impl CurveStroke {
    /// Red 500 with round caps, as on the launcher icon.
    pub fn launcher() -> Self {
        Self { color: skia::Color::from_argb(255, 244, 67, 54), width: 10.0, cap: skia::paint::Cap::Round }
    }

    /// White with butt caps, as on the notification icon.
    pub fn status() -> Self {
        Self { color: skia::Color::from_argb(255, 255, 255, 255), width: 2.0, cap: skia::paint::Cap::Butt }
    }

    pub fn paint(&self) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(self.width);
        paint.set_stroke_cap(self.cap);
        paint.set_color(self.color);
        paint
    }
}
