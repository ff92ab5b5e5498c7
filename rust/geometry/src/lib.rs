// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # TIN-Lite Geometry
//!
//! Constrained Delaunay triangulation and surface extraction, built on the
//! [spade](https://docs.rs/spade) engine and nalgebra for the math.
//!
//! Points (2D, or 3D flattened through a projection plane) and forced edges
//! go in; faces are classified against the constrained boundaries by a
//! nesting-level flood fill; the interior comes back out as a
//! [`TriangulatedSurface`] of original coordinates.
//!
//! ```rust
//! use nalgebra::Point2;
//! use tin_lite_geometry::triangulate_polygon;
//!
//! let outer = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(0.0, 10.0),
//! ];
//! let surface = triangulate_polygon(&outer, &[]).unwrap();
//! assert_eq!(surface.num_triangles(), 2);
//! ```

pub mod coordinate;
pub mod error;
pub mod projection;
pub mod surface;
pub mod terrain;
pub mod triangulation;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector2, Vector3};

pub use coordinate::Coordinate;
pub use error::{Error, Result};
pub use projection::{Plane, ProjectionPlane};
pub use surface::{Triangle, TriangulatedSurface};
pub use terrain::triangulate_grid;
pub use triangulation::{triangulate_polygon, ConstrainedTriangulation, VertexHandle};
