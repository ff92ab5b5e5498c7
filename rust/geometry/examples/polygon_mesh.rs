// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh a square with a square hole and print the resulting triangles.
//!
//! Run with: `cargo run --example polygon_mesh`

use nalgebra::Point2;
use tin_lite_geometry::{triangulate_polygon, Triangle};

fn main() {
    let outer = vec![
        Point2::new(0.0, 0.0),
        Point2::new(10.0, 0.0),
        Point2::new(10.0, 10.0),
        Point2::new(0.0, 10.0),
    ];
    let hole = vec![
        Point2::new(3.0, 3.0),
        Point2::new(7.0, 3.0),
        Point2::new(7.0, 7.0),
        Point2::new(3.0, 7.0),
    ];

    let surface = triangulate_polygon(&outer, &[hole]).expect("triangulation failed");

    println!("Interior triangles: {}", surface.num_triangles());
    let area: f64 = surface.iter().map(Triangle::area).sum();
    println!("Interior area:      {area}");

    for (index, triangle) in surface.iter().enumerate() {
        let a = triangle.v0.point2().unwrap();
        let b = triangle.v1.point2().unwrap();
        let c = triangle.v2.point2().unwrap();
        println!(
            "  #{index}: ({}, {}) ({}, {}) ({}, {})",
            a.x, a.y, b.x, b.y, c.x, c.y
        );
    }
}
