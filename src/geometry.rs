//! Geometric primitives for rasterization.
//!
//! Provides the integer pixel coordinate type, the clip window, and the single
//! float-to-pixel conversion used by every component.

use crate::error::{Error, Result};

/// Convert a real coordinate to a pixel coordinate, truncating toward zero.
///
/// Every float result in the crate goes through here so that all components
/// share one rounding rule.
#[inline]
#[must_use]
pub fn to_pixel(value: f64) -> i32 {
    value.trunc() as i32
}

/// A 2D point with integer pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[i32; 2]", into = "[i32; 2]"))]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Create a point from real coordinates via [`to_pixel`].
    #[must_use]
    pub fn from_f64(x: f64, y: f64) -> Self {
        Self::new(to_pixel(x), to_pixel(y))
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.hypot(dy)
    }

    /// True when the two points touch in the 8-neighbourhood (or coincide).
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        (self.x - other.x).abs() <= 1 && (self.y - other.y).abs() <= 1
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[i32; 2]> for Point {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for [i32; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// Axis-aligned clipping window with inclusive bounds.
///
/// Serialized as `[x_min, y_min, x_max, y_max]`. Deserialization validates
/// like [`ClipWindow::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[i32; 4]", into = "[i32; 4]"))]
pub struct ClipWindow {
    x_min: i32,
    y_min: i32,
    x_max: i32,
    y_max: i32,
}

impl ClipWindow {
    /// Create a clip window.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidClipWindow`] if `x_min > x_max` or `y_min > y_max`.
    pub fn new(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Result<Self> {
        if x_min > x_max || y_min > y_max {
            return Err(Error::InvalidClipWindow {
                x_min,
                y_min,
                x_max,
                y_max,
            });
        }
        Ok(Self::new_unchecked(x_min, y_min, x_max, y_max))
    }

    /// Create a clip window without checking the min/max ordering.
    ///
    /// Clipping against an inverted window produces unspecified (but memory
    /// safe) results.
    #[must_use]
    pub const fn new_unchecked(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Create a clip window from two opposite corners in any order.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new_unchecked(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    /// Left edge.
    #[must_use]
    pub const fn x_min(&self) -> i32 {
        self.x_min
    }

    /// Bottom edge (top edge in y-down screen space).
    #[must_use]
    pub const fn y_min(&self) -> i32 {
        self.y_min
    }

    /// Right edge.
    #[must_use]
    pub const fn x_max(&self) -> i32 {
        self.x_max
    }

    /// Top edge (bottom edge in y-down screen space).
    #[must_use]
    pub const fn y_max(&self) -> i32 {
        self.y_max
    }

    /// Check if a point lies inside the window (bounds inclusive).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x_min
            && point.x <= self.x_max
            && point.y >= self.y_min
            && point.y <= self.y_max
    }
}

impl TryFrom<[i32; 4]> for ClipWindow {
    type Error = Error;

    fn try_from([x_min, y_min, x_max, y_max]: [i32; 4]) -> Result<Self> {
        Self::new(x_min, y_min, x_max, y_max)
    }
}

impl From<ClipWindow> for [i32; 4] {
    fn from(w: ClipWindow) -> Self {
        [w.x_min, w.y_min, w.x_max, w.y_max]
    }
}

/// Smallest box containing every point, as `(min, max)` corners.
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn bounding_box(points: &[Point]) -> Option<(Point, Point)> {
    let first = *points.first()?;
    Some(points.iter().fold((first, first), |(lo, hi), p| {
        (
            Point::new(lo.x.min(p.x), lo.y.min(p.y)),
            Point::new(hi.x.max(p.x), hi.y.max(p.y)),
        )
    }))
}
