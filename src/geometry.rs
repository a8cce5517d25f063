//! Geometry utilities for star paths

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{PasteError, PasteResult};

/// Point in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Star with `points` tips inscribed in a circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarSpec {
    pub points: usize,
    pub center: Point,
    pub radius: f64,
}

impl StarSpec {
    pub fn new(points: usize, x: f64, y: f64, radius: f64) -> Self {
        Self {
            points,
            center: Point::new(x, y),
            radius,
        }
    }

    /// Chord path for this star, see [`star_points`]
    pub fn path(&self) -> PasteResult<Vec<Point>> {
        star_points(self.points, self.center.x, self.center.y, self.radius)
    }
}

fn check_vertex_count(n: usize) -> PasteResult<()> {
    if n == 0 {
        return Err(PasteError::InvalidGeometry(
            "vertex count must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Vertices of a regular polygon in natural order, starting at the top
/// of the circle and going clockwise in canvas (y-down) coordinates.
pub fn polygon_vertices(n: usize, cx: f64, cy: f64, r: f64) -> PasteResult<Vec<Point>> {
    check_vertex_count(n)?;
    let step = 2.0 * PI / n as f64;
    Ok((0..n)
        .map(|i| {
            let angle = i as f64 * step - PI / 2.0;
            Point::new(cx + r * angle.cos(), cy + r * angle.sin())
        })
        .collect())
}

/// Closed chord path of `n + 1` points.
///
/// Output index `i` visits vertex `(2 * i) % n`, so the last point repeats
/// the first. For n = 5 this traces the classic pentagram.
pub fn star_points(n: usize, cx: f64, cy: f64, r: f64) -> PasteResult<Vec<Point>> {
    let vertices = polygon_vertices(n, cx, cy, r)?;
    Ok((0..=n).map(|i| vertices[(i * 2) % n]).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn test_star_visits_chord_order() {
        let vertices = polygon_vertices(5, 0.0, 0.0, 10.0).unwrap();
        let path = star_points(5, 0.0, 0.0, 10.0).unwrap();
        assert_eq!(path.len(), 6);
        for (point, index) in path.iter().zip([0, 2, 4, 1, 3, 0]) {
            assert!(close(*point, vertices[index]));
        }
    }

    #[test]
    fn test_first_vertex_is_top() {
        let vertices = polygon_vertices(4, 50.0, 50.0, 10.0).unwrap();
        assert!(close(vertices[0], Point::new(50.0, 40.0)));
        assert!(close(vertices[1], Point::new(60.0, 50.0)));
    }

    #[test]
    fn test_zero_vertices_is_invalid() {
        for (cx, cy, r) in [(0.0, 0.0, 10.0), (5.0, -3.0, 0.0)] {
            assert!(matches!(
                star_points(0, cx, cy, r),
                Err(PasteError::InvalidGeometry(_))
            ));
        }
        assert!(StarSpec::new(0, 1.0, 1.0, 1.0).path().is_err());
    }

    #[test]
    fn test_even_count_overlaps() {
        // 2 and 6 share a factor, so only even vertices are visited
        let vertices = polygon_vertices(6, 0.0, 0.0, 1.0).unwrap();
        let path = star_points(6, 0.0, 0.0, 1.0).unwrap();
        assert_eq!(path.len(), 7);
        for (point, index) in path.iter().zip([0, 2, 4, 0, 2, 4, 0]) {
            assert!(close(*point, vertices[index]));
        }
    }

    #[test]
    fn test_single_vertex() {
        let path = star_points(1, 0.0, 0.0, 2.0).unwrap();
        assert_eq!(path.len(), 2);
        assert!(close(path[0], Point::new(0.0, -2.0)));
        assert!(close(path[1], path[0]));
    }
}
