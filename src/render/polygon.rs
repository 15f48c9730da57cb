//! Polygon and polyline rasterization.
//!
//! Both are plain concatenations of per-edge line rasterizations. Vertices
//! shared by consecutive edges are emitted once per edge.

use crate::algorithm::LineAlgorithm;
use crate::geometry::Point;
use crate::render::line::rasterize_line;

/// Rasterize a closed polygon.
///
/// Edge `i` runs from the previous vertex to vertex `i`, so the edges are
/// `(v[n-1], v[0]), (v[0], v[1]), ..., (v[n-2], v[n-1])`. A single vertex
/// yields that vertex once; an empty slice yields no pixels.
pub fn rasterize_polygon(vertices: &[Point], algorithm: LineAlgorithm) -> Vec<Point> {
    let n = vertices.len();
    log::trace!("rasterizing polygon with {n} vertices using {algorithm}");

    (0..n)
        .flat_map(|i| {
            let prev = vertices[(i + n - 1) % n];
            rasterize_line(prev, vertices[i], algorithm)
        })
        .collect()
}

/// Rasterize an open chain of segments `(v[0], v[1]), ..., (v[n-2], v[n-1])`.
///
/// A single vertex yields that vertex once.
pub fn rasterize_polyline(vertices: &[Point], algorithm: LineAlgorithm) -> Vec<Point> {
    match vertices {
        [] => Vec::new(),
        [only] => vec![*only],
        _ => vertices
            .windows(2)
            .flat_map(|edge| rasterize_line(edge[0], edge[1], algorithm))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_is_three_concatenated_edges() {
        let tri = [Point::new(0, 0), Point::new(4, 0), Point::new(0, 4)];

        for alg in LineAlgorithm::ALL {
            let mut expected = rasterize_line(tri[2], tri[0], alg);
            expected.extend(rasterize_line(tri[0], tri[1], alg));
            expected.extend(rasterize_line(tri[1], tri[2], alg));

            let pixels = rasterize_polygon(&tri, alg);
            assert_eq!(pixels, expected);
            // 5 + 5 + 5 pixels; each vertex appears twice.
            assert_eq!(pixels.len(), 15);
            for v in tri {
                assert_eq!(pixels.iter().filter(|&&p| p == v).count(), 2);
            }
        }
    }

    #[test]
    fn test_first_edge_closes_the_cycle() {
        let square = [Point::new(0, 0), Point::new(2, 0), Point::new(2, 2), Point::new(0, 2)];
        let pixels = rasterize_polygon(&square, LineAlgorithm::Bresenham);
        assert_eq!(pixels[0], Point::new(0, 2));
        assert_eq!(pixels[2], Point::new(0, 0));
        assert_eq!(pixels.last(), Some(&Point::new(0, 2)));
    }

    #[test]
    fn test_degenerate_polygons() {
        let p = Point::new(3, 3);
        assert_eq!(rasterize_polygon(&[p], LineAlgorithm::Dda), vec![p]);
        assert!(rasterize_polygon(&[], LineAlgorithm::Dda).is_empty());

        let q = Point::new(5, 3);
        let two = rasterize_polygon(&[p, q], LineAlgorithm::Bresenham);
        let mut expected = rasterize_line(q, p, LineAlgorithm::Bresenham);
        expected.extend(rasterize_line(p, q, LineAlgorithm::Bresenham));
        assert_eq!(two, expected);
    }

    #[test]
    fn test_polyline_is_open() {
        let chain = [Point::new(0, 0), Point::new(3, 0), Point::new(3, 2)];
        let pixels = rasterize_polyline(&chain, LineAlgorithm::Bresenham);
        assert_eq!(pixels.first(), Some(&Point::new(0, 0)));
        assert_eq!(pixels.last(), Some(&Point::new(3, 2)));
        assert_eq!(pixels.len(), 4 + 3);
        assert_eq!(rasterize_polyline(&chain[..1], LineAlgorithm::Dda), vec![chain[0]]);
    }
}
