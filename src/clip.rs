//! Line clipping against a rectangular window.
//!
//! Two algorithms are provided:
//!
//! - **Cohen-Sutherland**: classifies endpoints by 4-bit region outcodes and
//!   moves an outside endpoint onto one flagged boundary per iteration.
//! - **Liang-Barsky**: intersects the parametric segment with the four
//!   half-planes of the window, narrowing a `[t_enter, t_exit]` interval.
//!
//! Both agree on which segments are rejected. Accepted endpoints are clamped
//! into the window before truncation, so clipping an already clipped segment
//! returns it unchanged.

use crate::algorithm::ClipAlgorithm;
use crate::geometry::{to_pixel, ClipWindow, Point};

/// Result of clipping a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClipOutcome {
    /// The visible part of the segment, start to end.
    Accepted(Point, Point),
    /// No part of the segment lies inside the window.
    Rejected,
}

impl ClipOutcome {
    /// The clipped endpoints as a two-element list, or `None` if rejected.
    #[must_use]
    pub fn points(&self) -> Option<[Point; 2]> {
        match *self {
            Self::Accepted(p0, p1) => Some([p0, p1]),
            Self::Rejected => None,
        }
    }

    /// True when no part of the segment is visible.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }
}

/// A line clipping algorithm.
pub trait LineClipper {
    /// Clip the segment `p0 -> p1` against `window`.
    fn clip(&self, p0: Point, p1: Point, window: &ClipWindow) -> ClipOutcome;
}

/// Cohen-Sutherland outcode clipping.
#[derive(Debug, Clone, Copy, Default)]
pub struct CohenSutherland;

/// Liang-Barsky parametric clipping.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiangBarsky;

// ============================================================================
// Shared helpers
// ============================================================================

/// Window bounds as floats: `(x_min, y_min, x_max, y_max)`.
fn bounds(window: &ClipWindow) -> (f64, f64, f64, f64) {
    (
        f64::from(window.x_min()),
        f64::from(window.y_min()),
        f64::from(window.x_max()),
        f64::from(window.y_max()),
    )
}

/// Clamp a clipped endpoint into the window and convert it to a pixel.
fn to_window_pixel(x: f64, y: f64, window: &ClipWindow) -> Point {
    let (x_min, y_min, x_max, y_max) = bounds(window);
    Point::new(
        to_pixel(x.max(x_min).min(x_max)),
        to_pixel(y.max(y_min).min(y_max)),
    )
}

// ============================================================================
// Cohen-Sutherland
// ============================================================================

const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 1 << 1;
const BOTTOM: u8 = 1 << 2;
const TOP: u8 = 1 << 3;

/// Region outcode of `(x, y)`.
///
/// ```text
///        |        |
///  1001  |  1000  | 1010      TOP    (y > y_max)
/// -------+--------+------- y_max
///  0001  |  0000  | 0010
/// -------+--------+------- y_min
///  0101  |  0100  | 0110      BOTTOM (y < y_min)
///      x_min    x_max
/// ```
fn outcode(x: f64, y: f64, window: &ClipWindow) -> u8 {
    let (x_min, y_min, x_max, y_max) = bounds(window);
    let mut code = INSIDE;
    if x < x_min {
        code |= LEFT;
    } else if x > x_max {
        code |= RIGHT;
    }
    if y < y_min {
        code |= BOTTOM;
    } else if y > y_max {
        code |= TOP;
    }
    code
}

/// Each endpoint moves at most once per axis, so two endpoints need at most
/// four moves.
const MAX_REFINEMENTS: usize = 4;

impl LineClipper for CohenSutherland {
    fn clip(&self, p0: Point, p1: Point, window: &ClipWindow) -> ClipOutcome {
        let (x_min, y_min, x_max, y_max) = bounds(window);

        // Intersections are always taken on the original line so that a
        // moved endpoint never accumulates rounding from earlier moves.
        let (ox, oy) = (f64::from(p0.x), f64::from(p0.y));
        let dx = f64::from(p1.x) - ox;
        let dy = f64::from(p1.y) - oy;

        let (mut x0, mut y0) = (ox, oy);
        let (mut x1, mut y1) = (f64::from(p1.x), f64::from(p1.y));
        let mut code0 = outcode(x0, y0, window);
        let mut code1 = outcode(x1, y1, window);

        for _ in 0..MAX_REFINEMENTS {
            if code0 | code1 == INSIDE {
                break;
            }
            if code0 & code1 != INSIDE {
                return ClipOutcome::Rejected;
            }

            let out = if code0 == INSIDE { code1 } else { code0 };

            // The segment crosses the flagged boundary, so the divisor along
            // that axis is nonzero.
            let (x, y) = if out & TOP != 0 {
                (ox + dx * (y_max - oy) / dy, y_max)
            } else if out & BOTTOM != 0 {
                (ox + dx * (y_min - oy) / dy, y_min)
            } else if out & RIGHT != 0 {
                (x_max, oy + dy * (x_max - ox) / dx)
            } else {
                (x_min, oy + dy * (x_min - ox) / dx)
            };

            if out == code0 {
                (x0, y0) = (x, y);
                code0 = outcode(x0, y0, window);
            } else {
                (x1, y1) = (x, y);
                code1 = outcode(x1, y1, window);
            }
        }

        if code0 | code1 == INSIDE {
            ClipOutcome::Accepted(
                to_window_pixel(x0, y0, window),
                to_window_pixel(x1, y1, window),
            )
        } else {
            log::debug!("cohen-sutherland: endpoints still outside after {MAX_REFINEMENTS} moves");
            ClipOutcome::Rejected
        }
    }
}

// ============================================================================
// Liang-Barsky
// ============================================================================

impl LineClipper for LiangBarsky {
    fn clip(&self, p0: Point, p1: Point, window: &ClipWindow) -> ClipOutcome {
        let (x_min, y_min, x_max, y_max) = bounds(window);
        let (x0, y0) = (f64::from(p0.x), f64::from(p0.y));
        let dx = f64::from(p1.x) - x0;
        let dy = f64::from(p1.y) - y0;

        // (p, q) per half-plane: left, right, bottom, top.
        let constraints = [
            (-dx, x0 - x_min),
            (dx, x_max - x0),
            (-dy, y0 - y_min),
            (dy, y_max - y0),
        ];

        let mut t_enter = 0.0_f64;
        let mut t_exit = 1.0_f64;

        for (p, q) in constraints {
            if p == 0.0 {
                if q < 0.0 {
                    return ClipOutcome::Rejected;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                t_enter = t_enter.max(r);
            } else {
                t_exit = t_exit.min(r);
            }
            if t_enter > t_exit {
                return ClipOutcome::Rejected;
            }
        }

        ClipOutcome::Accepted(
            to_window_pixel(x0 + t_enter * dx, y0 + t_enter * dy, window),
            to_window_pixel(x0 + t_exit * dx, y0 + t_exit * dy, window),
        )
    }
}

impl ClipAlgorithm {
    fn clipper(self) -> &'static dyn LineClipper {
        match self {
            Self::CohenSutherland => &CohenSutherland,
            Self::LiangBarsky => &LiangBarsky,
        }
    }
}

/// Clip the segment `p0 -> p1` against `window`.
///
/// Segments entirely inside are returned unchanged; segments with no visible
/// part yield [`ClipOutcome::Rejected`].
pub fn clip_line(
    p0: Point,
    p1: Point,
    window: &ClipWindow,
    algorithm: ClipAlgorithm,
) -> ClipOutcome {
    let outcome = algorithm.clipper().clip(p0, p1, window);
    if outcome.is_rejected() {
        log::debug!("{algorithm} rejected segment {p0:?} -> {p1:?} against {window:?}");
    }
    outcome
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn point() -> impl Strategy<Value = Point> {
        (-60i32..60, -60i32..60).prop_map(Point::from)
    }

    fn window() -> impl Strategy<Value = ClipWindow> {
        (-30i32..30, -30i32..30, 0i32..40, 0i32..40)
            .prop_map(|(x, y, w, h)| ClipWindow::new_unchecked(x, y, x + w, y + h))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        /// Both algorithms classify every segment the same way.
        #[test]
        fn prop_algorithms_agree_on_rejection(p0 in point(), p1 in point(), w in window()) {
            let cs = clip_line(p0, p1, &w, ClipAlgorithm::CohenSutherland);
            let lb = clip_line(p0, p1, &w, ClipAlgorithm::LiangBarsky);
            prop_assert_eq!(cs.is_rejected(), lb.is_rejected(), "cs={:?} lb={:?}", cs, lb);
        }

        /// Accepted endpoints lie inside the window and re-clip to themselves.
        #[test]
        fn prop_clip_idempotent(p0 in point(), p1 in point(), w in window()) {
            for alg in ClipAlgorithm::ALL {
                if let ClipOutcome::Accepted(a, b) = clip_line(p0, p1, &w, alg) {
                    prop_assert!(w.contains(a) && w.contains(b));
                    prop_assert_eq!(clip_line(a, b, &w, alg), ClipOutcome::Accepted(a, b));
                }
            }
        }

        /// Segments with both endpoints inside are never altered.
        #[test]
        fn prop_inside_unchanged(w in window(), fx in 0.0f64..=1.0, fy in 0.0f64..=1.0,
                                 gx in 0.0f64..=1.0, gy in 0.0f64..=1.0) {
            let at = |fx: f64, fy: f64| Point::new(
                w.x_min() + (f64::from(w.x_max() - w.x_min()) * fx) as i32,
                w.y_min() + (f64::from(w.y_max() - w.y_min()) * fy) as i32,
            );
            let (a, b) = (at(fx, fy), at(gx, gy));
            for alg in ClipAlgorithm::ALL {
                prop_assert_eq!(clip_line(a, b, &w, alg), ClipOutcome::Accepted(a, b));
            }
        }
    }
}
