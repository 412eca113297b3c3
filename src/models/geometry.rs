// src/models/geometry.rs
//
// Hexagon outlines and the viewport they are laid out in.
// All coordinates are screen coordinates: origin top-left, y grows downward.

use nannou::prelude::*;

use crate::error::{HoneycombError, Result};

/// The drawable area handed to us by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Result<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(HoneycombError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn center(&self) -> Point2 {
        pt2(self.width / 2.0, self.height / 2.0)
    }

    /// Shared radius of all seven hexagons, a sixth of the height.
    pub fn base_radius(&self) -> f32 {
        self.height / 6.0
    }
}

/// A pointy-top regular hexagon as six vertices in rotational order,
/// starting at the bottom vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexagonOutline {
    vertices: [Point2; 6],
}

impl HexagonOutline {
    pub fn vertices(&self) -> &[Point2; 6] {
        &self.vertices
    }

    /// The vertices followed by the first one again, closing the polygon.
    pub fn closed_path(&self) -> impl Iterator<Item = Point2> + '_ {
        self.vertices.iter().chain(self.vertices.first()).copied()
    }

    pub fn is_degenerate(&self) -> bool {
        self.vertices.iter().all(|v| *v == self.vertices[0])
    }
}

pub fn hexagon_outline(center: Point2, radius: f32) -> Result<HexagonOutline> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(HoneycombError::InvalidRadius(radius));
    }

    let triangle_height = 3.0_f32.sqrt() * radius / 2.0;
    let half = radius / 2.0;
    let (x, y) = (center.x, center.y);

    Ok(HexagonOutline {
        vertices: [
            pt2(x, y + radius),
            pt2(x - triangle_height, y + half),
            pt2(x - triangle_height, y - half),
            pt2(x, y - radius),
            pt2(x + triangle_height, y - half),
            pt2(x + triangle_height, y + half),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    mod viewport_tests {
        use super::*;

        #[test]
        fn test_viewport_derived_values() {
            let viewport = Viewport::new(240.0, 360.0).unwrap();
            assert_eq!(viewport.center(), pt2(120.0, 180.0));
            assert_eq!(viewport.base_radius(), 60.0);
        }

        #[test]
        fn test_viewport_rejects_empty_sizes() {
            assert!(Viewport::new(0.0, 100.0).is_err());
            assert!(Viewport::new(100.0, -1.0).is_err());
            assert!(Viewport::new(f32::NAN, 100.0).is_err());
            assert_eq!(
                Viewport::new(10.0, 0.0),
                Err(HoneycombError::InvalidViewport {
                    width: 10.0,
                    height: 0.0
                })
            );
        }
    }

    mod outline_tests {
        use super::*;

        #[test]
        fn test_outline_vertex_positions() {
            let outline = hexagon_outline(pt2(100.0, 50.0), 20.0).unwrap();
            let v = outline.vertices();
            let h = 3.0_f32.sqrt() * 10.0;

            assert_eq!(v[0], pt2(100.0, 70.0));
            assert!(approx(v[1].x, 100.0 - h) && approx(v[1].y, 60.0));
            assert!(approx(v[2].x, 100.0 - h) && approx(v[2].y, 40.0));
            assert_eq!(v[3], pt2(100.0, 30.0));
            assert!(approx(v[4].x, 100.0 + h) && approx(v[4].y, 40.0));
            assert!(approx(v[5].x, 100.0 + h) && approx(v[5].y, 60.0));
        }

        #[test]
        fn test_outline_is_regular_and_bounded_by_radius() {
            let center = pt2(-3.5, 12.25);
            let radius = 37.0;
            let outline = hexagon_outline(center, radius).unwrap();
            let v = outline.vertices();

            let max_distance = v
                .iter()
                .map(|p| p.distance(center))
                .fold(0.0_f32, f32::max);
            assert!(approx(max_distance, radius));

            for i in 0..6 {
                let side = v[i].distance(v[(i + 1) % 6]);
                assert!(approx(side, radius), "side {} is {}", i, side);
            }
        }

        #[test]
        fn test_outline_is_convex_with_consistent_winding() {
            let outline = hexagon_outline(pt2(0.0, 0.0), 5.0).unwrap();
            let v = outline.vertices();
            let signs: Vec<bool> = (0..6)
                .map(|i| {
                    let a = v[(i + 1) % 6] - v[i];
                    let b = v[(i + 2) % 6] - v[(i + 1) % 6];
                    a.perp_dot(b) > 0.0
                })
                .collect();
            assert!(signs.iter().all(|s| *s == signs[0]));
        }

        #[test]
        fn test_closed_path_returns_to_start() {
            let outline = hexagon_outline(pt2(1.0, 2.0), 3.0).unwrap();
            let path: Vec<Point2> = outline.closed_path().collect();
            assert_eq!(path.len(), 7);
            assert_eq!(path[0], path[6]);
        }

        #[test]
        fn test_zero_radius_is_degenerate_but_valid() {
            let outline = hexagon_outline(pt2(4.0, 4.0), 0.0).unwrap();
            assert!(outline.is_degenerate());
            assert!(outline.vertices().iter().all(|p| *p == pt2(4.0, 4.0)));
        }

        #[test]
        fn test_invalid_radius_is_rejected() {
            assert_eq!(
                hexagon_outline(pt2(0.0, 0.0), -1.0),
                Err(HoneycombError::InvalidRadius(-1.0))
            );
            assert!(hexagon_outline(pt2(0.0, 0.0), f32::INFINITY).is_err());
        }
    }
}
