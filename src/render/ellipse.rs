//! Axis-aligned ellipse rasterization.
//!
//! Implements the two-region midpoint algorithm. Only the first quadrant arc
//! is stepped; every step is mirrored into the other three quadrants.
//!
//! Region 1 covers the part of the arc where the slope magnitude is at most
//! one (x is the fast axis), region 2 the remainder down to the major axis
//! (y is the fast axis).

use crate::geometry::{to_pixel, Point};

/// Rasterize the ellipse inscribed in the box spanned by two opposite corners.
///
/// The output is unsorted. Pixels near the quadrant boundaries may be emitted
/// more than once.
///
/// A box with zero width or zero height degenerates to its horizontal or
/// vertical extent, one pixel per unit; a zero-size box yields its center.
pub fn rasterize_ellipse(top_left: Point, bottom_right: Point) -> Vec<Point> {
    let x_min = top_left.x.min(bottom_right.x);
    let x_max = top_left.x.max(bottom_right.x);
    let y_min = top_left.y.min(bottom_right.y);
    let y_max = top_left.y.max(bottom_right.y);

    let a = f64::from(x_max - x_min) / 2.0;
    let b = f64::from(y_max - y_min) / 2.0;
    let mx = to_pixel(f64::from(x_min) + a);
    let my = to_pixel(f64::from(y_min) + b);

    if x_min == x_max || y_min == y_max {
        log::debug!("degenerate ellipse box {top_left:?} -> {bottom_right:?}");
        return match (x_min == x_max, y_min == y_max) {
            (true, true) => vec![Point::new(mx, my)],
            (false, true) => (x_min..=x_max).map(|x| Point::new(x, my)).collect(),
            _ => (y_min..=y_max).map(|y| Point::new(mx, y)).collect(),
        };
    }

    let sqa = a * a;
    let sqb = b * b;
    let mut pixels = Vec::new();
    let mut plot = |x: i32, y: i32| {
        pixels.extend_from_slice(&[
            Point::new(mx + x, my + y),
            Point::new(mx + x, my - y),
            Point::new(mx - x, my + y),
            Point::new(mx - x, my - y),
        ]);
    };

    let mut x: i32 = 0;
    let mut y: i32 = to_pixel(b);

    // Region 1
    let mut p1 = sqb - sqa * b + 0.25 * sqa;
    while sqb * f64::from(x) < sqa * f64::from(y) {
        plot(x, y);
        x += 1;
        if p1 < 0.0 {
            p1 += 2.0 * sqb * f64::from(x) + sqb;
        } else {
            y -= 1;
            p1 += 2.0 * sqb * f64::from(x) - 2.0 * sqa * f64::from(y) + sqb;
        }
    }

    // Region 2
    let half_x = f64::from(x) + 0.5;
    let below = f64::from(y - 1);
    let mut p2 = sqb * half_x * half_x + sqa * below * below - sqa * sqb;
    while y >= 0 {
        plot(x, y);
        y -= 1;
        if p2 > 0.0 {
            p2 += -2.0 * sqa * f64::from(y) + sqa;
        } else {
            x += 1;
            p2 += 2.0 * sqb * f64::from(x) - 2.0 * sqa * f64::from(y) + sqa;
        }
    }

    pixels
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn as_set(pixels: &[Point]) -> HashSet<Point> {
        pixels.iter().copied().collect()
    }

    #[test]
    fn test_small_ellipse_is_symmetric() {
        let pixels = rasterize_ellipse(Point::new(-2, -1), Point::new(2, 1));
        let set = as_set(&pixels);
        let center = Point::new(0, 0);

        for p in &set {
            let mx = Point::new(2 * center.x - p.x, p.y);
            let my = Point::new(p.x, 2 * center.y - p.y);
            assert!(set.contains(&mx), "missing x-mirror of {p:?}");
            assert!(set.contains(&my), "missing y-mirror of {p:?}");
        }
        assert!(set.contains(&Point::new(2, 0)));
        assert!(set.contains(&Point::new(0, 1)));
        assert!(set.contains(&Point::new(0, -1)));
    }

    #[test]
    fn test_exact_small_ellipse_output() {
        // a = 2, b = 1: region 1 emits (0,1) and (1,1); region 2 emits (2,0).
        let pixels = rasterize_ellipse(Point::new(-2, -1), Point::new(2, 1));
        let expected: Vec<Point> = [(0, 1), (1, 1), (2, 0)]
            .iter()
            .flat_map(|&(x, y)| {
                [
                    Point::new(x, y),
                    Point::new(x, -y),
                    Point::new(-x, y),
                    Point::new(-x, -y),
                ]
            })
            .collect();
        assert_eq!(pixels, expected);
    }

    #[test]
    fn test_quadrant_duplicates_are_kept() {
        let pixels = rasterize_ellipse(Point::new(-2, -1), Point::new(2, 1));
        // (0, 1) is emitted as (+0, 1) and (-0, 1).
        assert_eq!(pixels.iter().filter(|&&p| p == Point::new(0, 1)).count(), 2);
    }

    #[test]
    fn test_circle_stays_near_radius() {
        let r = 20.0;
        let pixels = rasterize_ellipse(Point::new(30, 30), Point::new(70, 70));
        for p in &pixels {
            let d = f64::from(p.x - 50).hypot(f64::from(p.y - 50));
            assert!((d - r).abs() <= 1.0, "{p:?} is {d} from center");
        }
        assert!(pixels.contains(&Point::new(70, 50)));
        assert!(pixels.contains(&Point::new(50, 30)));
    }

    #[test]
    fn test_corner_order_does_not_matter() {
        let a = rasterize_ellipse(Point::new(0, 0), Point::new(10, 6));
        let b = rasterize_ellipse(Point::new(10, 6), Point::new(0, 0));
        let c = rasterize_ellipse(Point::new(0, 6), Point::new(10, 0));
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_odd_box_truncates_center() {
        // a = 2.5, b = 1.5: center is (2, 1).
        let pixels = rasterize_ellipse(Point::new(0, 0), Point::new(5, 3));
        assert!(pixels.contains(&Point::new(2, 2)));
        assert!(pixels.contains(&Point::new(2, 0)));
    }

    #[test]
    fn test_degenerate_boxes() {
        assert_eq!(
            rasterize_ellipse(Point::new(4, 4), Point::new(4, 4)),
            vec![Point::new(4, 4)]
        );

        let flat = rasterize_ellipse(Point::new(0, 2), Point::new(4, 2));
        assert_eq!(flat, (0..=4).map(|x| Point::new(x, 2)).collect::<Vec<_>>());

        let thin = rasterize_ellipse(Point::new(1, 5), Point::new(1, 2));
        assert_eq!(thin, (2..=5).map(|y| Point::new(1, y)).collect::<Vec<_>>());
    }
}
