//! Affine transforms over primitive control data.
//!
//! Transforms map parameter lists (endpoints, vertices, control points), not
//! rasterized pixels. Every function maps each point independently, keeping
//! order and count.

use crate::geometry::{to_pixel, Point};

/// Shift every point by `(dx, dy)`.
///
/// Coordinates saturate at the `i32` range instead of wrapping.
pub fn translate(points: &[Point], dx: i32, dy: i32) -> Vec<Point> {
    points
        .iter()
        .map(|p| Point::new(p.x.saturating_add(dx), p.y.saturating_add(dy)))
        .collect()
}

/// Rotate every point about `(cx, cy)` by `degrees`.
///
/// Positive angles turn clockwise on a y-down screen. Each point is rebuilt
/// from its polar offset to the center, then truncated.
///
/// Not meaningful for an ellipse's bounding-box corners; see
/// [`Primitive::rotate`](crate::primitive::Primitive::rotate).
pub fn rotate(points: &[Point], cx: i32, cy: i32, degrees: f64) -> Vec<Point> {
    let theta = degrees.to_radians();
    let (cxf, cyf) = (f64::from(cx), f64::from(cy));

    points
        .iter()
        .map(|p| {
            let ox = f64::from(p.x) - cxf;
            let oy = f64::from(p.y) - cyf;
            let radius = ox.hypot(oy);
            let angle = oy.atan2(ox) + theta;
            Point::from_f64(cxf + radius * angle.cos(), cyf + radius * angle.sin())
        })
        .collect()
}

/// Scale every point about `(cx, cy)` by `factor`.
///
/// Negative factors mirror through the center; zero collapses onto it.
pub fn scale(points: &[Point], cx: i32, cy: i32, factor: f64) -> Vec<Point> {
    let (cxf, cyf) = (f64::from(cx), f64::from(cy));
    points
        .iter()
        .map(|p| {
            Point::new(
                to_pixel(cxf + factor * (f64::from(p.x) - cxf)),
                to_pixel(cyf + factor * (f64::from(p.y) - cyf)),
            )
        })
        .collect()
}

/// A stored affine transform that can be replayed on any point list.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Affine {
    /// Shift by `(dx, dy)`.
    Translate {
        /// Horizontal offset.
        dx: i32,
        /// Vertical offset.
        dy: i32,
    },
    /// Clockwise rotation about a center.
    Rotate {
        /// Center x.
        cx: i32,
        /// Center y.
        cy: i32,
        /// Angle in degrees.
        degrees: f64,
    },
    /// Uniform scale about a center.
    Scale {
        /// Center x.
        cx: i32,
        /// Center y.
        cy: i32,
        /// Scale factor.
        factor: f64,
    },
}

impl Affine {
    /// Transform name, for diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Translate { .. } => "translate",
            Self::Rotate { .. } => "rotate",
            Self::Scale { .. } => "scale",
        }
    }

    /// Apply this transform to every point.
    #[must_use]
    pub fn apply(&self, points: &[Point]) -> Vec<Point> {
        match *self {
            Self::Translate { dx, dy } => translate(points, dx, dy),
            Self::Rotate { cx, cy, degrees } => rotate(points, cx, cy, degrees),
            Self::Scale { cx, cy, factor } => scale(points, cx, cy, factor),
        }
    }
}
