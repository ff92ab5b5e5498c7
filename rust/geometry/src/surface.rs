// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Triangulated surface output
//!
//! The extraction target: triangles whose vertices are the original
//! coordinates attached at insertion time, not the projected 2D positions.

use nalgebra::Vector3;

use crate::coordinate::Coordinate;

/// Triangle referencing original coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub v0: Coordinate,
    pub v1: Coordinate,
    pub v2: Coordinate,
}

impl Triangle {
    /// Create a new triangle
    pub fn new(v0: Coordinate, v1: Coordinate, v2: Coordinate) -> Self {
        Self { v0, v1, v2 }
    }

    /// Triangle area; 2D coordinates are treated as z = 0
    ///
    /// Returns 0.0 when any vertex is the empty coordinate.
    pub fn area(&self) -> f64 {
        match (self.v0.point3(), self.v1.point3(), self.v2.point3()) {
            (Some(a), Some(b), Some(c)) => (b - a).cross(&(c - a)).norm() * 0.5,
            _ => 0.0,
        }
    }

    /// Unit normal, or `None` for degenerate or empty-vertex triangles
    pub fn normal(&self) -> Option<Vector3<f64>> {
        let a = self.v0.point3()?;
        let b = self.v1.point3()?;
        let c = self.v2.point3()?;
        let normal = (b - a).cross(&(c - a));
        let length = normal.norm();
        (length > 0.0).then(|| normal / length)
    }
}

/// Growable triangle soup
#[derive(Debug, Clone, Default)]
pub struct TriangulatedSurface {
    triangles: Vec<Triangle>,
}

impl TriangulatedSurface {
    /// Create an empty surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty surface with preallocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    /// Reserve room for `additional` more triangles
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.triangles.reserve(additional);
    }

    /// Append a triangle
    #[inline]
    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Number of triangles
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// True if the surface holds no triangles
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Iterate the triangles
    pub fn iter(&self) -> impl Iterator<Item = &Triangle> {
        self.triangles.iter()
    }

    /// Triangles as a slice
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_triangle_area() {
        let triangle = Triangle::new(
            Coordinate::xy(0.0, 0.0),
            Coordinate::xy(2.0, 0.0),
            Coordinate::xy(0.0, 2.0),
        );
        assert_relative_eq!(triangle.area(), 2.0);
    }

    #[test]
    fn test_empty_vertex_has_no_area() {
        let triangle = Triangle::new(
            Coordinate::Empty,
            Coordinate::xy(2.0, 0.0),
            Coordinate::xy(0.0, 2.0),
        );
        assert_eq!(triangle.area(), 0.0);
        assert!(triangle.normal().is_none());
    }

    #[test]
    fn test_planar_triangle_normal() {
        let triangle = Triangle::new(
            Coordinate::xy(0.0, 0.0),
            Coordinate::xy(1.0, 0.0),
            Coordinate::xy(0.0, 1.0),
        );
        let normal = triangle.normal().unwrap();
        assert_relative_eq!(normal, Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_triangle_has_no_normal() {
        let triangle = Triangle::new(
            Coordinate::xy(0.0, 0.0),
            Coordinate::xy(1.0, 1.0),
            Coordinate::xy(2.0, 2.0),
        );
        assert!(triangle.normal().is_none());
    }

    #[test]
    fn test_surface_accumulates_triangles() {
        let mut surface = TriangulatedSurface::with_capacity(2);
        assert!(surface.is_empty());

        surface.reserve(2);
        surface.add_triangle(Triangle::new(
            Coordinate::xy(0.0, 0.0),
            Coordinate::xy(1.0, 0.0),
            Coordinate::xy(0.0, 1.0),
        ));
        surface.add_triangle(Triangle::new(
            Coordinate::xy(1.0, 0.0),
            Coordinate::xy(1.0, 1.0),
            Coordinate::xy(0.0, 1.0),
        ));

        assert_eq!(surface.num_triangles(), 2);
        let total: f64 = surface.iter().map(Triangle::area).sum();
        assert_relative_eq!(total, 1.0);
    }
}
