// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # TIN-Lite Core
//!
//! Raster data model and ESRI ASCII grid (`.asc`) parsing for TIN-Lite.
//!
//! ## Overview
//!
//! This crate provides the input side of the DEM-to-TIN pipeline:
//!
//! - **Raster model**: [`Grid`] holds row-major elevation samples together
//!   with a georeferencing [`Envelope`] and a [`PixelConvention`]; NODATA
//!   cells are stored as `NaN`.
//! - **ASC reader**: [`parse_asc`] / [`read_asc`] parse the plain-text
//!   `ncols`/`nrows`/`xllcorner`/`yllcorner`/`cellsize`/`NODATA_value`
//!   header followed by the row-major sample block.
//!
//! ## Quick Start
//!
//! ```rust
//! use tin_lite_core::parse_asc;
//!
//! let content = "\
//! ncols 2
//! nrows 2
//! xllcorner 0.0
//! yllcorner 0.0
//! cellsize 10.0
//! NODATA_value -9999
//! 1.0 2.0
//! -9999 4.0";
//!
//! let grid = parse_asc(content).unwrap();
//! assert_eq!(grid.ncols(), 2);
//! assert!(grid.value(1, 0).is_nan());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: enable serialization support for the raster model types

pub mod asc;
pub mod error;
pub mod grid;

pub use asc::{parse_asc, read_asc};
pub use error::{Error, Result};
pub use grid::{Envelope, Grid, PixelConvention};
