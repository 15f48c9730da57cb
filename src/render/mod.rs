//! Rasterization of vector primitives into pixel coordinates.
//!
//! # Algorithms
//!
//! - **DDA / Bresenham lines**: floating-point and integer-only stepping
//! - **Polygons**: closed cycles of line edges
//! - **Midpoint ellipse**: two-region decision-variable stepping with 4-way symmetry
//! - **Bezier / uniform cubic B-spline curves**: derivative-bounded parametric sampling
//!
//! All rasterizers return plain `Vec<Point>`; nothing here draws to a surface.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Van Aken, J. R. (1984). "An Efficient Ellipse-Drawing Algorithm." IEEE CG&A.

mod curve;
mod ellipse;
mod line;
mod polygon;

pub use curve::{
    rasterize_curve, rasterize_curve_with_density, BSpline, Bezier, CurveEvaluator,
    DEFAULT_DENSITY,
};
pub use ellipse::rasterize_ellipse;
pub use line::{rasterize_line, Bresenham, Dda, LineStepper};
pub use polygon::{rasterize_polygon, rasterize_polyline};
