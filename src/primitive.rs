//! Typed primitives over the raw rasterizers.
//!
//! A [`Primitive`] bundles a parameter list with its algorithm, validates the
//! point count once at construction, and dispatches to the matching
//! rasterizer, transform or clipper.

use std::fmt;
use std::str::FromStr;

use crate::algorithm::{ClipAlgorithm, CurveAlgorithm, LineAlgorithm};
use crate::clip::{clip_line, ClipOutcome};
use crate::config::RasterConfig;
use crate::error::{Error, Result};
use crate::geometry::{ClipWindow, Point};
use crate::render::{
    rasterize_curve_with_density, rasterize_ellipse, rasterize_line, rasterize_polygon,
};
use crate::transform::Affine;

/// Primitive kind, parsed from `line`, `polygon`, `ellipse` or `curve`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PrimitiveKind {
    /// Line segment.
    Line,
    /// Closed polygon.
    Polygon,
    /// Axis-aligned ellipse.
    Ellipse,
    /// Parametric curve.
    Curve,
}

impl PrimitiveKind {
    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Polygon => "polygon",
            Self::Ellipse => "ellipse",
            Self::Curve => "curve",
        }
    }
}

impl FromStr for PrimitiveKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "line" => Ok(Self::Line),
            "polygon" => Ok(Self::Polygon),
            "ellipse" => Ok(Self::Ellipse),
            "curve" => Ok(Self::Curve),
            other => Err(Error::UnknownPrimitive(other.to_string())),
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vector primitive with its control data and algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum Primitive {
    /// Line segment from `start` to `end`.
    Line {
        /// Start point.
        start: Point,
        /// End point.
        end: Point,
        /// Stepping algorithm.
        algorithm: LineAlgorithm,
    },
    /// Closed polygon through `vertices`.
    Polygon {
        /// Vertices in drawing order.
        vertices: Vec<Point>,
        /// Edge stepping algorithm.
        algorithm: LineAlgorithm,
    },
    /// Ellipse inscribed in a bounding box.
    Ellipse {
        /// First box corner.
        top_left: Point,
        /// Opposite box corner.
        bottom_right: Point,
    },
    /// Parametric curve over `control_points`.
    Curve {
        /// Control points.
        control_points: Vec<Point>,
        /// Curve algorithm.
        algorithm: CurveAlgorithm,
    },
}

impl Primitive {
    /// Build a primitive from a raw parameter list.
    ///
    /// Lines and ellipses take exactly 2 points, polygons at least 1, curves
    /// any number. Algorithms come from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PointCount`] when `params` has the wrong length.
    pub fn from_params(
        kind: PrimitiveKind,
        params: &[Point],
        config: &RasterConfig,
    ) -> Result<Self> {
        let count_error = |expected| Error::PointCount {
            kind: kind.as_str(),
            expected,
            actual: params.len(),
        };

        match kind {
            PrimitiveKind::Line => match *params {
                [start, end] => Ok(Self::Line {
                    start,
                    end,
                    algorithm: config.line_algorithm,
                }),
                _ => Err(count_error("2")),
            },
            PrimitiveKind::Ellipse => match *params {
                [top_left, bottom_right] => Ok(Self::Ellipse {
                    top_left,
                    bottom_right,
                }),
                _ => Err(count_error("2")),
            },
            PrimitiveKind::Polygon if params.is_empty() => Err(count_error("at least 1")),
            PrimitiveKind::Polygon => Ok(Self::Polygon {
                vertices: params.to_vec(),
                algorithm: config.line_algorithm,
            }),
            PrimitiveKind::Curve => Ok(Self::Curve {
                control_points: params.to_vec(),
                algorithm: config.curve_algorithm,
            }),
        }
    }

    /// The kind of this primitive.
    #[must_use]
    pub const fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Line { .. } => PrimitiveKind::Line,
            Self::Polygon { .. } => PrimitiveKind::Polygon,
            Self::Ellipse { .. } => PrimitiveKind::Ellipse,
            Self::Curve { .. } => PrimitiveKind::Curve,
        }
    }

    /// The parameter list: endpoints, vertices, box corners or control points.
    #[must_use]
    pub fn params(&self) -> Vec<Point> {
        match self {
            Self::Line { start, end, .. } => vec![*start, *end],
            Self::Polygon { vertices, .. } => vertices.clone(),
            Self::Ellipse {
                top_left,
                bottom_right,
            } => vec![*top_left, *bottom_right],
            Self::Curve { control_points, .. } => control_points.clone(),
        }
    }

    /// Rasterize to pixel coordinates.
    ///
    /// Only the curve density is read from `config`; algorithms are the ones
    /// stored on the primitive. The clip algorithm is read by [`Self::clip`].
    #[must_use]
    pub fn rasterize(&self, config: &RasterConfig) -> Vec<Point> {
        match self {
            Self::Line {
                start,
                end,
                algorithm,
            } => rasterize_line(*start, *end, *algorithm),
            Self::Polygon {
                vertices,
                algorithm,
            } => rasterize_polygon(vertices, *algorithm),
            Self::Ellipse {
                top_left,
                bottom_right,
            } => rasterize_ellipse(*top_left, *bottom_right),
            Self::Curve {
                control_points,
                algorithm,
            } => rasterize_curve_with_density(
                control_points,
                *algorithm,
                config.effective_curve_density(),
            ),
        }
    }

    /// Apply an affine transform to the parameter list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedTransform`] for a rotation of an ellipse,
    /// whose two box corners cannot represent a rotated shape.
    pub fn transform(&self, affine: &Affine) -> Result<Self> {
        if let (Self::Ellipse { .. }, Affine::Rotate { .. }) = (self, affine) {
            log::debug!("refusing to rotate an ellipse bounding box");
            return Err(Error::UnsupportedTransform {
                kind: PrimitiveKind::Ellipse.as_str(),
                transform: affine.name(),
            });
        }

        let mapped = affine.apply(&self.params());
        Ok(self.with_params(mapped))
    }

    /// Translate by `(dx, dy)`.
    #[must_use]
    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        self.with_params(Affine::Translate { dx, dy }.apply(&self.params()))
    }

    /// Rotate clockwise by `degrees` about `(cx, cy)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedTransform`] for ellipses.
    pub fn rotate(&self, cx: i32, cy: i32, degrees: f64) -> Result<Self> {
        self.transform(&Affine::Rotate { cx, cy, degrees })
    }

    /// Scale by `factor` about `(cx, cy)`.
    #[must_use]
    pub fn scale(&self, cx: i32, cy: i32, factor: f64) -> Self {
        self.with_params(Affine::Scale { cx, cy, factor }.apply(&self.params()))
    }

    /// Clip a line primitive against `window` with the configured clip
    /// algorithm.
    ///
    /// Returns `None` for every other kind.
    #[must_use]
    pub fn clip(&self, window: &ClipWindow, config: &RasterConfig) -> Option<ClipOutcome> {
        self.clip_with(window, config.clip_algorithm)
    }

    /// Clip a line primitive against `window` with an explicit algorithm.
    ///
    /// Returns `None` for every other kind.
    #[must_use]
    pub fn clip_with(&self, window: &ClipWindow, algorithm: ClipAlgorithm) -> Option<ClipOutcome> {
        match self {
            Self::Line { start, end, .. } => Some(clip_line(*start, *end, window, algorithm)),
            _ => None,
        }
    }

    /// Same primitive and algorithm with a replaced, same-length parameter list.
    fn with_params(&self, params: Vec<Point>) -> Self {
        // Transforms preserve the point count, so two-point kinds always
        // receive two points.
        match self {
            Self::Line { algorithm, .. } => match *params.as_slice() {
                [start, end] => Self::Line {
                    start,
                    end,
                    algorithm: *algorithm,
                },
                _ => self.clone(),
            },
            Self::Ellipse { .. } => match *params.as_slice() {
                [top_left, bottom_right] => Self::Ellipse {
                    top_left,
                    bottom_right,
                },
                _ => self.clone(),
            },
            Self::Polygon { algorithm, .. } => Self::Polygon {
                vertices: params,
                algorithm: *algorithm,
            },
            Self::Curve { algorithm, .. } => Self::Curve {
                control_points: params,
                algorithm: *algorithm,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("ellipse".parse::<PrimitiveKind>(), Ok(PrimitiveKind::Ellipse));
        assert_eq!(
            "circle".parse::<PrimitiveKind>(),
            Err(Error::UnknownPrimitive("circle".to_string()))
        );
        assert_eq!(PrimitiveKind::Curve.to_string(), "curve");
    }

    #[test]
    fn test_from_params_validates_counts() {
        let config = RasterConfig::default();
        let three = pts(&[(0, 0), (1, 1), (2, 2)]);

        assert_eq!(
            Primitive::from_params(PrimitiveKind::Line, &three, &config),
            Err(Error::PointCount {
                kind: "line",
                expected: "2",
                actual: 3
            })
        );
        assert!(Primitive::from_params(PrimitiveKind::Ellipse, &three[..1], &config).is_err());
        assert!(Primitive::from_params(PrimitiveKind::Polygon, &[], &config).is_err());
        assert!(Primitive::from_params(PrimitiveKind::Polygon, &three, &config).is_ok());
        assert!(Primitive::from_params(PrimitiveKind::Curve, &[], &config).is_ok());
    }

    #[test]
    fn test_from_params_uses_config_algorithms() {
        let config = RasterConfig::new()
            .line_algorithm(LineAlgorithm::Dda)
            .curve_algorithm(CurveAlgorithm::BSpline);
        let line = Primitive::from_params(PrimitiveKind::Line, &pts(&[(0, 0), (3, 1)]), &config)
            .expect("two points");
        assert!(matches!(line, Primitive::Line { algorithm: LineAlgorithm::Dda, .. }));

        let curve = Primitive::from_params(PrimitiveKind::Curve, &pts(&[(0, 0)]), &config)
            .expect("any count");
        assert!(matches!(curve, Primitive::Curve { algorithm: CurveAlgorithm::BSpline, .. }));
    }

    #[test]
    fn test_rasterize_dispatches() {
        let config = RasterConfig::default();
        let line = Primitive::Line {
            start: Point::new(0, 0),
            end: Point::new(5, 2),
            algorithm: LineAlgorithm::Bresenham,
        };
        assert_eq!(
            line.rasterize(&config),
            rasterize_line(Point::new(0, 0), Point::new(5, 2), LineAlgorithm::Bresenham)
        );

        let ellipse = Primitive::Ellipse {
            top_left: Point::new(-2, -1),
            bottom_right: Point::new(2, 1),
        };
        assert_eq!(
            ellipse.rasterize(&config),
            rasterize_ellipse(Point::new(-2, -1), Point::new(2, 1))
        );
    }

    #[test]
    fn test_transforms_keep_algorithm() {
        let poly = Primitive::Polygon {
            vertices: pts(&[(0, 0), (4, 0), (0, 4)]),
            algorithm: LineAlgorithm::Dda,
        };
        let moved = poly.translate(1, 2);
        assert_eq!(moved.params(), pts(&[(1, 2), (5, 2), (1, 6)]));
        assert_eq!(moved.kind(), PrimitiveKind::Polygon);
        assert!(matches!(moved, Primitive::Polygon { algorithm: LineAlgorithm::Dda, .. }));

        let grown = poly.scale(0, 0, 2.0);
        assert_eq!(grown.params(), pts(&[(0, 0), (8, 0), (0, 8)]));

        let turned = poly.rotate(0, 0, 0.0).expect("polygons rotate");
        assert_eq!(turned, poly);
    }

    #[test]
    fn test_ellipse_rotation_refused() {
        let ellipse = Primitive::Ellipse {
            top_left: Point::new(0, 0),
            bottom_right: Point::new(10, 6),
        };
        assert_eq!(
            ellipse.rotate(5, 3, 30.0),
            Err(Error::UnsupportedTransform {
                kind: "ellipse",
                transform: "rotate"
            })
        );
        assert_eq!(ellipse.translate(1, 1).params(), pts(&[(1, 1), (11, 7)]));
    }

    #[test]
    fn test_clip_only_for_lines() {
        let window = ClipWindow::new(0, 0, 10, 10).expect("valid window");
        let line = Primitive::Line {
            start: Point::new(-5, 5),
            end: Point::new(5, 5),
            algorithm: LineAlgorithm::Bresenham,
        };
        assert_eq!(
            line.clip_with(&window, ClipAlgorithm::CohenSutherland),
            Some(ClipOutcome::Accepted(Point::new(0, 5), Point::new(5, 5)))
        );

        let curve = Primitive::Curve {
            control_points: pts(&[(0, 0), (5, 5)]),
            algorithm: CurveAlgorithm::Bezier,
        };
        assert_eq!(curve.clip_with(&window, ClipAlgorithm::LiangBarsky), None);
        assert_eq!(curve.clip(&window, &RasterConfig::default()), None);
    }

    #[test]
    fn test_clip_uses_configured_algorithm() {
        let window = ClipWindow::new(0, 0, 10, 10).expect("valid window");
        let line = Primitive::Line {
            start: Point::new(-4, 2),
            end: Point::new(16, 12),
            algorithm: LineAlgorithm::Dda,
        };

        for alg in ClipAlgorithm::ALL {
            let config = RasterConfig::new().clip_algorithm(alg);
            assert_eq!(line.clip(&window, &config), line.clip_with(&window, alg));
        }
        assert_eq!(
            line.clip(&window, &RasterConfig::default()),
            line.clip_with(&window, ClipAlgorithm::LiangBarsky)
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_primitive_yaml_is_tagged_by_kind() {
        let yaml = "kind: line\nstart: [0, 0]\nend: [5, 2]\nalgorithm: DDA\n";
        let line: Primitive = serde_yaml_ng::from_str(yaml).expect("valid primitive");
        assert_eq!(
            line,
            Primitive::Line {
                start: Point::new(0, 0),
                end: Point::new(5, 2),
                algorithm: LineAlgorithm::Dda,
            }
        );

        let text = serde_yaml_ng::to_string(&line).expect("serialize");
        assert!(text.contains("kind: line"), "{text}");
        assert_eq!(serde_yaml_ng::from_str::<Primitive>(&text).expect("round trip"), line);

        let curve = Primitive::Curve {
            control_points: pts(&[(0, 0), (4, 8), (8, 0), (12, 8)]),
            algorithm: CurveAlgorithm::BSpline,
        };
        let text = serde_yaml_ng::to_string(&curve).expect("serialize");
        assert!(text.contains("B-spline"), "{text}");
        assert_eq!(serde_yaml_ng::from_str::<Primitive>(&text).expect("round trip"), curve);

        assert!(serde_yaml_ng::from_str::<Primitive>("kind: spiral\n").is_err());
    }
}
