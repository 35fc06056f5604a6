//! Drawable path and line descriptors, and view boxes

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::projection::{Point2D, ProjectedPoint};

/// Padding used around a drawing when the caller does not pick one.
pub const DEFAULT_PADDING: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "lowercase")]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Close,
}

/// A closed outline, convertible to SVG path data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathDescriptor {
    pub commands: Vec<PathCommand>,
}

impl PathDescriptor {
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// SVG `d` attribute, e.g. `M 0 0 L 10 0 L 10 10 Z`.
    pub fn to_svg_d(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PathDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match command {
                PathCommand::MoveTo { x, y } => write!(f, "M {x} {y}")?,
                PathCommand::LineTo { x, y } => write!(f, "L {x} {y}")?,
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

/// One straight segment between two projected vertices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Screen-space rectangle in SVG `viewBox` order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// SVG `viewBox` attribute value.
    pub fn to_svg_attr(&self) -> String {
        format!("{} {} {} {}", self.min_x, self.min_y, self.width, self.height)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x
            && x <= self.min_x + self.width
            && y >= self.min_y
            && y <= self.min_y + self.height
    }
}

/// Outline of one face through the projected vertices it references.
///
/// A face with fewer than three vertices, or with an index that has no
/// projected vertex, gives an empty path.
pub fn describe_face_path(projected: &[ProjectedPoint], face: &[usize]) -> PathDescriptor {
    let Some(points) = face
        .iter()
        .map(|&i| projected.get(i))
        .collect::<Option<Vec<_>>>()
    else {
        return PathDescriptor::default();
    };
    let [start, rest @ ..] = points.as_slice() else {
        return PathDescriptor::default();
    };
    if rest.len() < 2 {
        return PathDescriptor::default();
    }

    let mut commands = Vec::with_capacity(face.len() + 1);
    commands.push(PathCommand::MoveTo {
        x: start.x,
        y: start.y,
    });
    commands.extend(rest.iter().map(|p| PathCommand::LineTo { x: p.x, y: p.y }));
    commands.push(PathCommand::Close);

    PathDescriptor { commands }
}

pub fn describe_edge_line(p1: &ProjectedPoint, p2: &ProjectedPoint) -> LineSegment {
    LineSegment {
        x1: p1.x,
        y1: p1.y,
        x2: p2.x,
        y2: p2.y,
    }
}

/// Bounding box of all projected vertices grown by `padding` on every side.
///
/// With no vertices the box is centered on the origin.
pub fn calculate_view_box_3d(projected: &[ProjectedPoint], padding: f64) -> ViewBox {
    if projected.is_empty() {
        return ViewBox {
            min_x: -padding,
            min_y: -padding,
            width: 2.0 * padding,
            height: 2.0 * padding,
        };
    }

    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in projected {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    ViewBox {
        min_x: min_x - padding,
        min_y: min_y - padding,
        width: max_x - min_x + 2.0 * padding,
        height: max_y - min_y + 2.0 * padding,
    }
}

/// Square box around a projected sphere outline.
pub fn calculate_sphere_view_box(center: &Point2D, radius: f64, padding: f64) -> ViewBox {
    let extent = radius + padding;
    ViewBox {
        min_x: center.x - extent,
        min_y: center.y - extent,
        width: 2.0 * extent,
        height: 2.0 * extent,
    }
}
