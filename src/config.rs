//! Rasterization defaults.
//!
//! A [`RasterConfig`] supplies the algorithm used when a primitive is built
//! without an explicit choice, plus the curve sampling density. With the
//! `config` feature it can be parsed from YAML:
//!
//! ```yaml
//! line_algorithm: DDA
//! curve_algorithm: B-spline
//! clip_algorithm: Cohen-Sutherland
//! curve_density: 2.0
//! ```
//!
//! Missing keys fall back to their defaults.

use crate::algorithm::{ClipAlgorithm, CurveAlgorithm, LineAlgorithm};
use crate::render::DEFAULT_DENSITY;

#[cfg(feature = "config")]
use crate::error::{Error, Result};

/// Rasterization settings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RasterConfig {
    /// Line stepping algorithm for lines and polygons.
    #[cfg_attr(feature = "serde", serde(default))]
    pub line_algorithm: LineAlgorithm,

    /// Curve algorithm.
    #[cfg_attr(feature = "serde", serde(default))]
    pub curve_algorithm: CurveAlgorithm,

    /// Line clipping algorithm.
    #[cfg_attr(feature = "serde", serde(default))]
    pub clip_algorithm: ClipAlgorithm,

    /// Curve samples per unit of derivative bound (values below 1 act as 1).
    #[cfg_attr(feature = "serde", serde(default = "default_curve_density"))]
    pub curve_density: f64,
}

fn default_curve_density() -> f64 {
    DEFAULT_DENSITY
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            line_algorithm: LineAlgorithm::default(),
            curve_algorithm: CurveAlgorithm::default(),
            clip_algorithm: ClipAlgorithm::default(),
            curve_density: default_curve_density(),
        }
    }
}

impl RasterConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line algorithm.
    #[must_use]
    pub fn line_algorithm(mut self, algorithm: LineAlgorithm) -> Self {
        self.line_algorithm = algorithm;
        self
    }

    /// Set the curve algorithm.
    #[must_use]
    pub fn curve_algorithm(mut self, algorithm: CurveAlgorithm) -> Self {
        self.curve_algorithm = algorithm;
        self
    }

    /// Set the clip algorithm.
    #[must_use]
    pub fn clip_algorithm(mut self, algorithm: ClipAlgorithm) -> Self {
        self.clip_algorithm = algorithm;
        self
    }

    /// Set the curve sampling density.
    #[must_use]
    pub fn curve_density(mut self, density: f64) -> Self {
        self.curve_density = density;
        self
    }

    /// The effective curve density, never below 1.0.
    #[must_use]
    pub fn effective_curve_density(&self) -> f64 {
        if self.curve_density.is_nan() {
            DEFAULT_DENSITY
        } else {
            self.curve_density.max(1.0)
        }
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] with the failing line if parsing fails,
    /// including unknown algorithm tags.
    #[cfg(feature = "config")]
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }
}
