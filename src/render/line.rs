//! Line segment rasterization.
//!
//! Two steppers are provided:
//!
//! - **DDA**: walks the dominant axis one pixel at a time and accumulates the
//!   real-valued slope on the other axis, truncating each sample.
//! - **Bresenham**: integer-only decision variable; the slow axis advances
//!   whenever the accumulated error passes the fast-axis length.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

use crate::algorithm::LineAlgorithm;
use crate::geometry::{to_pixel, Point};

/// A line stepping algorithm.
///
/// Implementations only see non-degenerate segments (`p0 != p1`); the
/// single-point case is handled once in [`rasterize_line`].
pub trait LineStepper {
    /// Produce the pixels from `p0` to `p1`, both inclusive.
    fn step(&self, p0: Point, p1: Point) -> Vec<Point>;
}

/// Digital differential analyzer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dda;

/// Bresenham's integer line algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bresenham;

impl LineStepper for Dda {
    fn step(&self, p0: Point, p1: Point) -> Vec<Point> {
        let dx = p1.x - p0.x;
        let dy = p1.y - p0.y;
        let steps = dx.abs().max(dy.abs());

        let inc_x = f64::from(dx) / f64::from(steps);
        let inc_y = f64::from(dy) / f64::from(steps);
        let (x0, y0) = (f64::from(p0.x), f64::from(p0.y));

        (0..=steps)
            .map(|i| {
                let i = f64::from(i);
                Point::new(to_pixel(x0 + i * inc_x), to_pixel(y0 + i * inc_y))
            })
            .collect()
    }
}

impl LineStepper for Bresenham {
    fn step(&self, p0: Point, p1: Point) -> Vec<Point> {
        let dx = (p1.x - p0.x).abs();
        let dy = (p1.y - p0.y).abs();
        let sx = if p0.x < p1.x { 1 } else { -1 };
        let sy = if p0.y < p1.y { 1 } else { -1 };

        // Fast-axis-only step; the slow axis component is zeroed.
        let (fast, slow, fast_step) = if dx > dy {
            (dx, dy, (sx, 0))
        } else {
            (dy, dx, (0, sy))
        };
        let diagonal = fast == slow;

        let mut err = fast / 2;
        let mut x = p0.x;
        let mut y = p0.y;
        let mut pixels = Vec::with_capacity(fast as usize + 1);

        loop {
            pixels.push(Point::new(x, y));

            if x == p1.x && y == p1.y {
                break;
            }

            err += slow;
            if err > fast || diagonal {
                err -= fast;
                x += sx;
                y += sy;
            } else {
                x += fast_step.0;
                y += fast_step.1;
            }
        }

        pixels
    }
}

impl LineAlgorithm {
    /// Run this algorithm's stepper on a non-degenerate segment.
    fn stepper(self) -> &'static dyn LineStepper {
        match self {
            Self::Dda => &Dda,
            Self::Bresenham => &Bresenham,
        }
    }
}

/// Rasterize the segment `p0 -> p1`.
///
/// Pixels are ordered from start to end. A zero-length segment yields the
/// single point `[p0]`.
///
/// Both coordinate spans `p1 - p0` must fit in an `i32`, which holds for any
/// endpoints within `-2^30..2^30`. The output holds one pixel per unit of
/// the longer span.
///
/// # Arguments
///
/// * `p0` - Start point
/// * `p1` - End point
/// * `algorithm` - Stepping algorithm
pub fn rasterize_line(p0: Point, p1: Point, algorithm: LineAlgorithm) -> Vec<Point> {
    if p0 == p1 {
        return vec![p0];
    }
    log::trace!("rasterizing line {p0:?} -> {p1:?} with {algorithm}");
    algorithm.stepper().step(p0, p1)
}

// ============================================================================
// Tests
// ============================================================================
