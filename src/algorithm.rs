//! Algorithm selectors.
//!
//! Each algorithm family is a closed enum. The string tags accepted by
//! [`FromStr`] and produced by [`Display`](fmt::Display) are exact and
//! case-sensitive:
//!
//! | Family | Tags |
//! |--------|------|
//! | line   | `DDA`, `Bresenham` |
//! | curve  | `Bezier`, `B-spline` |
//! | clip   | `Cohen-Sutherland`, `Liang-Barsky` |

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Line stepping algorithm, shared by lines and polygons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineAlgorithm {
    /// Incremental floating-point digital differential analyzer.
    #[cfg_attr(feature = "serde", serde(rename = "DDA"))]
    Dda,
    /// Integer-only decision-variable stepping.
    #[default]
    Bresenham,
}

impl LineAlgorithm {
    /// All variants, in tag order.
    pub const ALL: [Self; 2] = [Self::Dda, Self::Bresenham];

    /// The exact tag string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dda => "DDA",
            Self::Bresenham => "Bresenham",
        }
    }
}

/// Parametric curve algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveAlgorithm {
    /// Bezier curve of degree `n - 1` through Bernstein evaluation.
    #[default]
    Bezier,
    /// Uniform cubic B-spline.
    #[cfg_attr(feature = "serde", serde(rename = "B-spline"))]
    BSpline,
}

impl CurveAlgorithm {
    /// All variants, in tag order.
    pub const ALL: [Self; 2] = [Self::Bezier, Self::BSpline];

    /// The exact tag string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bezier => "Bezier",
            Self::BSpline => "B-spline",
        }
    }

    /// Minimum number of control points that yields a non-empty curve.
    #[must_use]
    pub const fn min_control_points(self) -> usize {
        match self {
            Self::Bezier => 2,
            Self::BSpline => 4,
        }
    }
}

/// Line clipping algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClipAlgorithm {
    /// Region outcode refinement.
    #[cfg_attr(feature = "serde", serde(rename = "Cohen-Sutherland"))]
    CohenSutherland,
    /// Parametric half-plane intersection.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "Liang-Barsky"))]
    LiangBarsky,
}

impl ClipAlgorithm {
    /// All variants, in tag order.
    pub const ALL: [Self; 2] = [Self::CohenSutherland, Self::LiangBarsky];

    /// The exact tag string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CohenSutherland => "Cohen-Sutherland",
            Self::LiangBarsky => "Liang-Barsky",
        }
    }
}

fn parse_tag<T: Copy>(
    family: &'static str,
    tag: &str,
    all: &[T],
    name: fn(T) -> &'static str,
) -> Result<T, Error> {
    all.iter().copied().find(|&v| name(v) == tag).ok_or_else(|| Error::UnknownAlgorithm {
        family,
        tag: tag.to_string(),
    })
}

impl FromStr for LineAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_tag("line", s, &Self::ALL, Self::as_str)
    }
}

impl FromStr for CurveAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_tag("curve", s, &Self::ALL, Self::as_str)
    }
}

impl FromStr for ClipAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_tag("clip", s, &Self::ALL, Self::as_str)
    }
}

impl fmt::Display for LineAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for CurveAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ClipAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
