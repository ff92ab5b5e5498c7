// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use spade::InsertionError;
use thiserror::Error;

/// Result type for triangulation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during triangulation and surface extraction
#[derive(Error, Debug)]
pub enum Error {
    /// An empty coordinate was passed where a position is required
    #[error("cannot insert an empty coordinate into the triangulation")]
    EmptyCoordinate,

    /// A face vertex has no original coordinate; constraints crossed at a
    /// point that is not an inserted vertex
    #[error("cannot convert triangulation to surface (constraint intersection found)")]
    ConstraintIntersection,

    /// The triangulation engine rejected a vertex position
    #[error("vertex insertion failed: {0}")]
    Insertion(#[from] InsertionError),

    /// A polygon ring cannot be meshed
    #[error("invalid polygon: {0}")]
    InvalidPolygon(String),
}
