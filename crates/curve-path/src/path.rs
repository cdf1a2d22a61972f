// File: crates/curve-path/src/path.rs
// Summary: Path command model and SVG path-data serialization.

use std::fmt;

use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { ctrl: Point, to: Point },
}

impl PathCommand {
    /// End point of the command (the pen position afterwards).
    pub fn end(&self) -> Point {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
            PathCommand::QuadTo { to, .. } => to,
        }
    }

    fn map(self, f: &impl Fn(Point) -> Point) -> Self {
        match self {
            PathCommand::MoveTo(p) => PathCommand::MoveTo(f(p)),
            PathCommand::LineTo(p) => PathCommand::LineTo(f(p)),
            PathCommand::QuadTo { ctrl, to } => PathCommand::QuadTo { ctrl: f(ctrl), to: f(to) },
        }
    }
}

/// Ordered drawing commands. Non-empty paths start with a single `MoveTo`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self { commands: Vec::new() }
    }

    pub(crate) fn starting_at(p: Point) -> Self {
        Self { commands: vec![PathCommand::MoveTo(p)] }
    }

    pub(crate) fn line_to(&mut self, p: Point) {
        self.commands.push(PathCommand::LineTo(p));
    }

    pub(crate) fn quad_to(&mut self, ctrl: Point, to: Point) {
        self.commands.push(PathCommand::QuadTo { ctrl, to });
    }

    /// Apply `f` to every point, control points included.
    pub(crate) fn map_points(self, f: impl Fn(Point) -> Point) -> Self {
        Self { commands: self.commands.into_iter().map(|c| c.map(&f)).collect() }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of drawn segments (everything after the initial `MoveTo`).
    pub fn segment_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| !matches!(c, PathCommand::MoveTo(_)))
            .count()
    }

    /// All points in command order, control points included.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands
            .iter()
            .flat_map(|c| match *c {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => [Some(p), None],
                PathCommand::QuadTo { ctrl, to } => [Some(ctrl), Some(to)],
            })
            .flatten()
    }

    /// SVG `d` attribute value, e.g. `M0 10 Q2.5 7.5 5 5`.
    pub fn to_svg_data(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match c {
                PathCommand::MoveTo(p) => write!(f, "M{} {}", p.x, p.y)?,
                PathCommand::LineTo(p) => write!(f, "L{} {}", p.x, p.y)?,
                PathCommand::QuadTo { ctrl, to } => {
                    write!(f, "Q{} {} {} {}", ctrl.x, ctrl.y, to.x, to.y)?
                }
            }
        }
        Ok(())
    }
}
