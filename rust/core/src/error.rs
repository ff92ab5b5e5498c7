// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for raster parsing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading raster grids
#[derive(Error, Debug)]
pub enum Error {
    /// A header key or its value was missing or malformed
    #[error("expecting {0} <{0}>")]
    ExpectedHeaderField(&'static str),

    /// A data token was missing or not numeric
    #[error("fail to read data({0},{1}) value")]
    InvalidValue(usize, usize),

    /// Underlying reader failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
