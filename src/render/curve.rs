//! Parametric curve rasterization.
//!
//! Curves are sampled densely enough that consecutive samples are less than
//! one unit apart, then truncated to pixels with consecutive repeats removed.
//! The sample count comes from a bound on the curve's derivative:
//!
//! - Bezier of degree `n`: `|B'(t)| <= n * max |P[i+1] - P[i]|`
//! - Uniform cubic B-spline segment: `|Q'(t)| <= max |P[i+1] - P[i]|`
//!
//! so `floor(bound) + 1` steps per unit of `t` keeps every step shorter than
//! one pixel.

use crate::algorithm::CurveAlgorithm;
use crate::geometry::{to_pixel, Point};

/// Default sampling density (samples per unit of derivative bound).
pub const DEFAULT_DENSITY: f64 = 1.0;

/// A parametric curve evaluator.
pub trait CurveEvaluator {
    /// Sample the curve defined by `control` with at least `density` samples
    /// per unit of derivative bound. Returns real-valued positions in order.
    fn sample(&self, control: &[Point], density: f64) -> Vec<(f64, f64)>;
}

/// Bezier curve evaluation through Bernstein polynomials.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bezier;

/// Uniform cubic B-spline evaluation.
#[derive(Debug, Clone, Copy, Default)]
pub struct BSpline;

/// Longest distance between consecutive control points.
fn max_leg(control: &[Point]) -> f64 {
    control
        .windows(2)
        .map(|w| w[0].distance(w[1]))
        .fold(0.0, f64::max)
}

/// Upper bound on samples per curve or spline segment.
const MAX_STEPS: u32 = 1 << 20;

fn step_count(bound: f64, density: f64) -> u32 {
    let steps = (bound * density).floor();
    // Zero bound times infinite density.
    if steps.is_nan() {
        return 1;
    }
    steps.min(f64::from(MAX_STEPS - 1)) as u32 + 1
}

/// Binomial coefficients `C(n, 0..=n)`.
fn binomials(n: usize) -> Vec<f64> {
    let mut row = Vec::with_capacity(n + 1);
    let mut c = 1.0;
    row.push(c);
    for k in 1..=n {
        c = c * (n + 1 - k) as f64 / k as f64;
        row.push(c);
    }
    row
}

impl CurveEvaluator for Bezier {
    fn sample(&self, control: &[Point], density: f64) -> Vec<(f64, f64)> {
        if control.len() < CurveAlgorithm::Bezier.min_control_points() {
            return Vec::new();
        }

        let n = control.len() - 1;
        let coeffs = binomials(n);
        let steps = step_count(n as f64 * max_leg(control), density);

        (0..=steps)
            .map(|k| {
                let t = f64::from(k) / f64::from(steps);
                let s = 1.0 - t;
                control
                    .iter()
                    .zip(&coeffs)
                    .enumerate()
                    .fold((0.0, 0.0), |(x, y), (i, (p, c))| {
                        let basis = c * s.powi((n - i) as i32) * t.powi(i as i32);
                        (x + basis * f64::from(p.x), y + basis * f64::from(p.y))
                    })
            })
            .collect()
    }
}

/// Uniform cubic B-spline blending functions at `t`, scaled by 6.
fn bspline_basis(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    let s = 1.0 - t;
    [
        s * s * s,
        3.0 * t3 - 6.0 * t2 + 4.0,
        -3.0 * t3 + 3.0 * t2 + 3.0 * t + 1.0,
        t3,
    ]
}

fn bspline_point(window: &[Point], t: f64) -> (f64, f64) {
    let basis = bspline_basis(t);
    let (x, y) = window
        .iter()
        .zip(basis)
        .fold((0.0, 0.0), |(x, y), (p, w)| (x + w * f64::from(p.x), y + w * f64::from(p.y)));
    (x / 6.0, y / 6.0)
}

impl CurveEvaluator for BSpline {
    fn sample(&self, control: &[Point], density: f64) -> Vec<(f64, f64)> {
        if control.len() < CurveAlgorithm::BSpline.min_control_points() {
            return Vec::new();
        }

        let mut samples = Vec::new();
        for window in control.windows(4) {
            let steps = step_count(max_leg(window), density);
            samples.extend(
                (0..steps).map(|k| bspline_point(window, f64::from(k) / f64::from(steps))),
            );
        }

        // t = 1 of the last segment closes the curve.
        if let Some(last) = control.windows(4).last() {
            samples.push(bspline_point(last, 1.0));
        }
        samples
    }
}

impl CurveAlgorithm {
    fn evaluator(self) -> &'static dyn CurveEvaluator {
        match self {
            Self::Bezier => &Bezier,
            Self::BSpline => &BSpline,
        }
    }
}

/// Rasterize a curve at the default density.
///
/// Fewer than 2 control points for Bezier, or fewer than 4 for B-spline,
/// yields an empty result.
pub fn rasterize_curve(control_points: &[Point], algorithm: CurveAlgorithm) -> Vec<Point> {
    rasterize_curve_with_density(control_points, algorithm, DEFAULT_DENSITY)
}

/// Rasterize a curve with an explicit sampling density.
///
/// `density` is clamped to at least `1.0`; higher values sample more finely
/// without changing the connectivity guarantee.
pub fn rasterize_curve_with_density(
    control_points: &[Point],
    algorithm: CurveAlgorithm,
    density: f64,
) -> Vec<Point> {
    if control_points.len() < algorithm.min_control_points() {
        log::debug!(
            "{algorithm} needs {} control points, got {}",
            algorithm.min_control_points(),
            control_points.len()
        );
        return Vec::new();
    }

    let density = if density.is_nan() { DEFAULT_DENSITY } else { density.max(1.0) };
    log::trace!("rasterizing {algorithm} curve with {} control points", control_points.len());

    let mut pixels: Vec<Point> = Vec::new();
    for (x, y) in algorithm.evaluator().sample(control_points, density) {
        let p = Point::new(to_pixel(x), to_pixel(y));
        if pixels.last() != Some(&p) {
            pixels.push(p);
        }
    }
    pixels
}
