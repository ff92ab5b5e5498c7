// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Raster grid data model
//!
//! A georeferenced matrix of elevation samples. NODATA cells are stored as
//! `NaN` so that downstream consumers can filter them with `is_nan()`.

/// Where a sample sits within its raster cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PixelConvention {
    /// Samples sit on cell corners; the envelope spans the outermost samples
    PixelIsPoint,
    /// Samples are cell averages; positions are cell centers
    PixelIsArea,
}

/// Georeferencing rectangle of a grid
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Envelope {
    /// Western bound
    pub x_min: f64,
    /// Eastern bound
    pub x_max: f64,
    /// Southern bound
    pub y_min: f64,
    /// Northern bound
    pub y_max: f64,
}

impl Envelope {
    /// Create a new envelope
    #[inline]
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// East-west extent
    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// North-south extent
    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

/// Georeferenced raster of `f64` samples
///
/// Samples are stored row-major with row 0 at the northern edge, matching
/// the ASC file layout.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    data: Vec<f64>,
    nrows: usize,
    ncols: usize,
    limits: Envelope,
    pixel_convention: PixelConvention,
}

impl Grid {
    /// Create a grid from row-major sample data
    ///
    /// Panics if `data.len() != nrows * ncols`.
    pub fn new(
        data: Vec<f64>,
        nrows: usize,
        ncols: usize,
        limits: Envelope,
        pixel_convention: PixelConvention,
    ) -> Self {
        assert!(
            data.len() == nrows * ncols,
            "grid data length {} does not match {}x{}",
            data.len(),
            nrows,
            ncols
        );
        Self {
            data,
            nrows,
            ncols,
            limits,
            pixel_convention,
        }
    }

    /// Number of rows
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Georeferencing rectangle
    #[inline]
    pub fn limits(&self) -> &Envelope {
        &self.limits
    }

    /// Sample placement convention
    #[inline]
    pub fn pixel_convention(&self) -> PixelConvention {
        self.pixel_convention
    }

    /// True if the grid holds no samples
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sample at `(row, col)`; `NaN` marks NODATA
    ///
    /// Panics on out-of-range indices.
    #[inline]
    pub fn value(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.nrows && col < self.ncols, "grid index out of range");
        self.data[row * self.ncols + col]
    }

    /// East-west sample step
    pub fn dx(&self) -> f64 {
        match self.pixel_convention {
            PixelConvention::PixelIsPoint => {
                if self.ncols > 1 {
                    self.limits.width() / (self.ncols - 1) as f64
                } else {
                    0.0
                }
            }
            PixelConvention::PixelIsArea => self.limits.width() / self.ncols as f64,
        }
    }

    /// North-south sample step
    pub fn dy(&self) -> f64 {
        match self.pixel_convention {
            PixelConvention::PixelIsPoint => {
                if self.nrows > 1 {
                    self.limits.height() / (self.nrows - 1) as f64
                } else {
                    0.0
                }
            }
            PixelConvention::PixelIsArea => self.limits.height() / self.nrows as f64,
        }
    }

    /// X position of a column
    pub fn x(&self, col: usize) -> f64 {
        match self.pixel_convention {
            PixelConvention::PixelIsPoint => self.limits.x_min + col as f64 * self.dx(),
            PixelConvention::PixelIsArea => self.limits.x_min + (col as f64 + 0.5) * self.dx(),
        }
    }

    /// Y position of a row (row 0 is the northern edge)
    pub fn y(&self, row: usize) -> f64 {
        match self.pixel_convention {
            PixelConvention::PixelIsPoint => self.limits.y_max - row as f64 * self.dy(),
            PixelConvention::PixelIsArea => self.limits.y_max - (row as f64 + 0.5) * self.dy(),
        }
    }

    /// Georeferenced sample as `[x, y, z]`, or `None` for NODATA cells
    pub fn point(&self, row: usize, col: usize) -> Option<[f64; 3]> {
        let z = self.value(row, col);
        if z.is_nan() {
            None
        } else {
            Some([self.x(col), self.y(row), z])
        }
    }

    /// Iterate all non-NODATA samples as `[x, y, z]`
    pub fn points(&self) -> impl Iterator<Item = [f64; 3]> + '_ {
        (0..self.nrows)
            .flat_map(move |row| (0..self.ncols).map(move |col| (row, col)))
            .filter_map(move |(row, col)| self.point(row, col))
    }
}
