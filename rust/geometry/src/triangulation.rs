// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Constrained Delaunay triangulation with domain classification
//!
//! Wraps the [spade](https://docs.rs/spade) engine behind a
//! coordinate-oriented API: callers insert original (possibly 3D)
//! coordinates and constraint edges, classify faces against the constrained
//! boundaries, and extract the interior as a [`TriangulatedSurface`].

use std::collections::VecDeque;

use nalgebra::Point2;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use spade::handles::{
    FixedDirectedEdgeHandle, FixedFaceHandle, FixedVertexHandle, PossiblyOuterTag,
};
use spade::{ConstrainedDelaunayTriangulation, Point2 as SpadePoint2, Triangulation};
use tracing::debug;

use crate::coordinate::Coordinate;
use crate::error::{Error, Result};
use crate::projection::{Plane, ProjectionPlane};
use crate::surface::{Triangle, TriangulatedSurface};

/// Engine-side vertex identity
///
/// Stable across insertions and constraints, invalidated by
/// [`ConstrainedTriangulation::clear`].
pub type VertexHandle = FixedVertexHandle;

type Engine = ConstrainedDelaunayTriangulation<SpadePoint2<f64>>;
type FaceKey = FixedFaceHandle<PossiblyOuterTag>;
type NestingLevels = FxHashMap<FaceKey, i32>;

/// Nesting level of faces not yet reached by domain classification
const UNCLASSIFIED: i32 = -1;

/// Constrained Delaunay triangulation over original coordinates
///
/// The engine triangulates projected 2D positions; this wrapper keeps two
/// side tables keyed by stable engine handles: the original coordinate of
/// every inserted vertex, and the nesting level of every face computed by
/// [`mark_domains`](Self::mark_domains).
pub struct ConstrainedTriangulation {
    cdt: Engine,
    projection_plane: ProjectionPlane,
    originals: FxHashMap<VertexHandle, Coordinate>,
    nesting_levels: NestingLevels,
}

impl ConstrainedTriangulation {
    /// Create an empty triangulation over the ground plane
    pub fn new() -> Self {
        Self {
            cdt: Engine::new(),
            projection_plane: ProjectionPlane::Ground,
            originals: FxHashMap::default(),
            nesting_levels: NestingLevels::default(),
        }
    }

    /// Create an empty triangulation projecting through an explicit plane
    pub fn with_projection_plane(plane: Plane) -> Self {
        let mut triangulation = Self::new();
        triangulation.set_projection_plane(plane);
        triangulation
    }

    /// Insert a vertex and register its original coordinate
    ///
    /// The position handed to the engine is the coordinate projected
    /// through the current projection plane; the coordinate stored on the
    /// returned handle is the original, unprojected one. Inserting a
    /// position that coincides with an existing vertex merges with it and
    /// overwrites its registered coordinate.
    pub fn add_vertex(&mut self, coordinate: Coordinate) -> Result<VertexHandle> {
        let position = self
            .projection_plane
            .project(&coordinate)
            .ok_or(Error::EmptyCoordinate)?;
        let vertex = self.cdt.insert(SpadePoint2::new(position.x, position.y))?;
        self.originals.insert(vertex, coordinate);
        Ok(vertex)
    }

    /// Force an edge between two vertices
    ///
    /// A constraint from a vertex to itself is silently ignored. When the
    /// new edge crosses an existing constraint, the engine splits both at
    /// the crossing point; the synthesized vertex has no original
    /// coordinate, which [`get_triangles`](Self::get_triangles) later
    /// reports as [`Error::ConstraintIntersection`]. Exactly-overlapping
    /// constraint configurations panic inside the engine.
    pub fn add_constraint(&mut self, source: VertexHandle, target: VertexHandle) {
        if source == target {
            return;
        }
        self.cdt
            .add_constraint_and_split(source, target, |position| position);
    }

    /// Discard all vertices, constraints, and annotations
    ///
    /// Every previously returned handle is invalidated.
    pub fn clear(&mut self) {
        self.cdt = Engine::new();
        self.originals.clear();
        self.nesting_levels.clear();
    }

    /// Number of vertices
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.cdt.num_vertices()
    }

    /// Number of finite faces
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.cdt.num_inner_faces()
    }

    /// Set the plane used to flatten 3D coordinates
    ///
    /// Panics on a degenerate plane.
    pub fn set_projection_plane(&mut self, plane: Plane) {
        assert!(plane.normal.norm() > 0.0, "degenerate projection plane");
        self.projection_plane = ProjectionPlane::Oblique(plane);
    }

    /// The plane in effect; the ground plane when none was set
    pub fn projection_plane(&self) -> Plane {
        self.projection_plane.plane()
    }

    /// Classify every face with its nesting level
    ///
    /// Faces connected by unconstrained edges share a level; crossing a
    /// constrained edge increments it by one. The unbounded outer face is
    /// level 0, so odd levels are interior and even levels are exterior or
    /// holes. Levels are stored until the next call; they become stale on
    /// any insertion or constraint, and callers re-run this before relying
    /// on them.
    pub fn mark_domains(&mut self) {
        self.nesting_levels.clear();
        let outer = self.cdt.outer_face().fix();
        let mut border = VecDeque::new();
        Self::flood_fill(&self.cdt, &mut self.nesting_levels, outer, 0, &mut border);
        while let Some((edge, level)) = border.pop_front() {
            let neighbor = self.cdt.directed_edge(edge).rev().face().fix();
            if !self.nesting_levels.contains_key(&neighbor) {
                Self::flood_fill(
                    &self.cdt,
                    &mut self.nesting_levels,
                    neighbor,
                    level,
                    &mut border,
                );
            }
        }
        debug!(faces = self.nesting_levels.len(), "classified face domains");
    }

    /// Label one constraint-bounded region, deferring crossings
    ///
    /// Breadth-first over the face adjacency graph: every face reachable
    /// from `start` without crossing a constrained edge gets `level`; each
    /// constrained edge met on the way is queued so the caller can continue
    /// on its far side at `level + 1`.
    fn flood_fill(
        engine: &Engine,
        levels: &mut NestingLevels,
        start: FaceKey,
        level: i32,
        border: &mut VecDeque<(FixedDirectedEdgeHandle, i32)>,
    ) {
        let mut queue = VecDeque::new();
        queue.push_back(start);
        while let Some(face) = queue.pop_front() {
            if levels.contains_key(&face) {
                continue;
            }
            levels.insert(face, level);
            for edge in Self::face_edges(engine, face) {
                let neighbor = engine.directed_edge(edge).rev().face().fix();
                if levels.contains_key(&neighbor) {
                    continue;
                }
                if engine.is_constraint_edge(edge.as_undirected()) {
                    border.push_back((edge, level + 1));
                } else {
                    queue.push_back(neighbor);
                }
            }
        }
    }

    /// Edges bordering a face, oriented with the face on their left
    fn face_edges(engine: &Engine, face: FaceKey) -> SmallVec<[FixedDirectedEdgeHandle; 3]> {
        match face.as_inner() {
            Some(inner) => engine
                .face(inner)
                .adjacent_edges()
                .iter()
                .map(|edge| edge.fix())
                .collect(),
            // The outer face borders exactly the convex hull edges
            None => engine
                .convex_hull()
                .map(|edge| {
                    if edge.face().fix() == face {
                        edge.fix()
                    } else {
                        edge.rev().fix()
                    }
                })
                .collect(),
        }
    }

    fn nesting_level(&self, face: FaceKey) -> i32 {
        self.nesting_levels
            .get(&face)
            .copied()
            .unwrap_or(UNCLASSIFIED)
    }

    fn original(&self, vertex: VertexHandle) -> Result<Coordinate> {
        self.originals
            .get(&vertex)
            .copied()
            .ok_or(Error::ConstraintIntersection)
    }

    /// Append the finite faces to `surface` as original-coordinate triangles
    ///
    /// With `filter_exterior_parts`, faces at even nesting levels (exterior
    /// and holes) are skipped; call [`mark_domains`](Self::mark_domains)
    /// first, or every face will still count as unclassified and pass the
    /// filter. Fails with [`Error::ConstraintIntersection`] when a face
    /// vertex has no original coordinate; triangles appended before the
    /// failing face remain in `surface`.
    pub fn get_triangles(
        &self,
        surface: &mut TriangulatedSurface,
        filter_exterior_parts: bool,
    ) -> Result<()> {
        surface.reserve(self.num_triangles());
        for face in self.cdt.all_faces() {
            let Some(inner) = face.as_inner() else {
                continue;
            };
            if filter_exterior_parts && self.nesting_level(face.fix()) % 2 == 0 {
                continue;
            }
            let [v0, v1, v2] = inner.vertices();
            let triangle = Triangle::new(
                self.original(v0.fix())?,
                self.original(v1.fix())?,
                self.original(v2.fix())?,
            );
            surface.add_triangle(triangle);
        }
        Ok(())
    }

    /// All finite faces as a fresh, unfiltered surface
    pub fn triangulated_surface(&self) -> Result<TriangulatedSurface> {
        let mut surface = TriangulatedSurface::new();
        self.get_triangles(&mut surface, false)?;
        Ok(surface)
    }
}

impl Default for ConstrainedTriangulation {
    fn default() -> Self {
        Self::new()
    }
}

/// Mesh a polygon with optional holes
///
/// Each ring is inserted as a closed constraint loop; holes with fewer than
/// three points are ignored. Returns only the interior triangles.
pub fn triangulate_polygon(
    outer: &[Point2<f64>],
    holes: &[Vec<Point2<f64>>],
) -> Result<TriangulatedSurface> {
    if outer.len() < 3 {
        return Err(Error::InvalidPolygon(
            "need at least 3 points in outer boundary".to_string(),
        ));
    }

    let mut triangulation = ConstrainedTriangulation::new();
    insert_ring(&mut triangulation, outer)?;
    for hole in holes.iter().filter(|hole| hole.len() >= 3) {
        insert_ring(&mut triangulation, hole)?;
    }

    triangulation.mark_domains();

    let mut surface = TriangulatedSurface::new();
    triangulation.get_triangles(&mut surface, true)?;
    Ok(surface)
}

/// Insert a ring's vertices and close it with constraints
///
/// A ring that repeats its first point at the end merges into the same
/// vertex handle, and the closing self-constraint is a no-op.
fn insert_ring(
    triangulation: &mut ConstrainedTriangulation,
    ring: &[Point2<f64>],
) -> Result<()> {
    let mut handles = Vec::with_capacity(ring.len());
    for point in ring {
        handles.push(triangulation.add_vertex(Coordinate::from(*point))?);
    }
    for i in 0..handles.len() {
        triangulation.add_constraint(handles[i], handles[(i + 1) % handles.len()]);
    }
    Ok(())
}
