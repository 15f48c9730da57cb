//! # cg-raster
//!
//! Scan conversion, affine transforms and line clipping for 2D vector
//! primitives.
//!
//! cg-raster is the numerical core of a vector graphics editor: it turns line
//! segments, polygons, ellipses and parametric curves into the integer pixel
//! coordinates that approximate them. Drawing those pixels, event handling
//! and persistence belong to the caller.
//!
//! ## Features
//!
//! - **Lines**: DDA and Bresenham stepping
//! - **Polygons**: closed edge cycles over either line algorithm
//! - **Ellipses**: two-region midpoint algorithm
//! - **Curves**: Bezier and uniform cubic B-spline, always 8-connected
//! - **Transforms**: translate, rotate and scale over control data
//! - **Clipping**: Cohen-Sutherland and Liang-Barsky
//!
//! Every function is pure and deterministic. Real-valued intermediates are
//! converted to pixels by truncation toward zero ([`geometry::to_pixel`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use cg_raster::prelude::*;
//!
//! let pixels = rasterize_line(Point::new(0, 0), Point::new(5, 2), LineAlgorithm::Bresenham);
//! assert_eq!(pixels.len(), 6);
//!
//! let window = ClipWindow::new(0, 0, 10, 10)?;
//! let clipped = clip_line(
//!     Point::new(-5, 5),
//!     Point::new(15, 5),
//!     &window,
//!     ClipAlgorithm::LiangBarsky,
//! );
//! assert_eq!(clipped, ClipOutcome::Accepted(Point::new(0, 5), Point::new(10, 5)));
//! # Ok::<(), cg_raster::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialize/Deserialize for points, windows, tags and primitives
//! - `config`: YAML parsing of [`config::RasterConfig`] (default, implies `serde`)

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in rasterization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Algorithm selectors and their string tags.
pub mod algorithm;

/// Pixel coordinates, clip windows and the shared truncation rule.
pub mod geometry;

/// Rasterization defaults.
pub mod config;

// ============================================================================
// Rasterization, Transforms and Clipping
// ============================================================================

/// Rasterizers for lines, polygons, ellipses and curves.
pub mod render;

/// Affine transforms over primitive control data.
pub mod transform;

/// Line clipping against a rectangular window.
pub mod clip;

/// Typed primitives dispatching to the rasterizers.
pub mod primitive;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for cg-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use cg_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algorithm::{ClipAlgorithm, CurveAlgorithm, LineAlgorithm};
    pub use crate::clip::{clip_line, ClipOutcome};
    pub use crate::config::RasterConfig;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{to_pixel, ClipWindow, Point};
    pub use crate::primitive::{Primitive, PrimitiveKind};
    pub use crate::render::{
        rasterize_curve, rasterize_ellipse, rasterize_line, rasterize_polygon, rasterize_polyline,
    };
    pub use crate::transform::{rotate, scale, translate, Affine};
}

// ============================================================================
// Tests
// ============================================================================
