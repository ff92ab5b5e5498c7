// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Terrain surfaces from raster grids
//!
//! Bridges the raster model to the triangulation: every valid sample
//! becomes a 3D vertex, and the resulting TIN keeps the sample elevations
//! in its output coordinates.

use tin_lite_core::Grid;
use tracing::debug;

use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::surface::TriangulatedSurface;
use crate::triangulation::ConstrainedTriangulation;

/// Triangulate all non-NODATA grid samples into a TIN
///
/// Samples are triangulated by their georeferenced x/y position; the
/// elevation travels along in the original coordinate and reappears in the
/// extracted triangles. A grid with fewer than three valid samples yields
/// an empty surface.
pub fn triangulate_grid(grid: &Grid) -> Result<TriangulatedSurface> {
    let mut triangulation = ConstrainedTriangulation::new();
    for [x, y, z] in grid.points() {
        triangulation.add_vertex(Coordinate::xyz(x, y, z))?;
    }

    debug!(
        vertices = triangulation.num_vertices(),
        triangles = triangulation.num_triangles(),
        "triangulated raster grid"
    );
    triangulation.triangulated_surface()
}
