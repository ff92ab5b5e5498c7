// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end pipeline: ASC text -> raster grid -> triangulated surface.

use approx::assert_relative_eq;
use tin_lite_core::parse_asc;
use tin_lite_geometry::{triangulate_grid, Triangle};

const DEM: &str = "\
ncols         4
nrows         3
xllcorner     100.0
yllcorner     200.0
cellsize      10.0
NODATA_value  -9999
1 2 3 4
5 6 7 8
9 10 11 12";

#[test]
fn test_full_grid_becomes_tin() {
    let grid = parse_asc(DEM).unwrap();
    assert_eq!(grid.nrows(), 3);
    assert_eq!(grid.ncols(), 4);

    let surface = triangulate_grid(&grid).unwrap();
    // 2 (nrows - 1) (ncols - 1) triangles for a fully populated grid
    assert_eq!(surface.num_triangles(), 12);
}

#[test]
fn test_tin_covers_sampled_extent() {
    let grid = parse_asc(DEM).unwrap();
    let surface = triangulate_grid(&grid).unwrap();

    // Cell centers span 3 x 2 cells of 10 x 10 each; the planar footprint of
    // the TIN is that rectangle projected along z
    let footprint: f64 = surface
        .iter()
        .map(|triangle| {
            let flatten = |v: tin_lite_geometry::Coordinate| {
                let p = v.point3().unwrap();
                tin_lite_geometry::Coordinate::xy(p.x, p.y)
            };
            Triangle::new(flatten(triangle.v0), flatten(triangle.v1), flatten(triangle.v2)).area()
        })
        .sum();
    assert_relative_eq!(footprint, 600.0, epsilon = 1e-9);
}

#[test]
fn test_elevations_and_georeferencing_survive() {
    let grid = parse_asc(DEM).unwrap();
    let surface = triangulate_grid(&grid).unwrap();

    let mut min_x = f64::INFINITY;
    let mut max_z = f64::NEG_INFINITY;
    for triangle in surface.iter() {
        for vertex in [triangle.v0, triangle.v1, triangle.v2] {
            let point = vertex.point3().unwrap();
            min_x = min_x.min(point.x);
            max_z = max_z.max(point.z);
        }
    }

    // First cell center: xllcorner + cellsize / 2
    assert_relative_eq!(min_x, 105.0, epsilon = 1e-9);
    assert_eq!(max_z, 12.0);
}

#[test]
fn test_nodata_holes_reduce_triangles() {
    let patchy = "\
ncols 3
nrows 3
xllcorner 0.0
yllcorner 0.0
cellsize 1.0
NODATA_value -9999
-9999 1 2
3 4 5
6 7 8";

    let grid = parse_asc(patchy).unwrap();
    let surface = triangulate_grid(&grid).unwrap();
    assert_eq!(surface.num_triangles(), 7);
}
