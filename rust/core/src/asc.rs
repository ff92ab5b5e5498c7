// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ESRI ASCII grid (`.asc`) reader
//!
//! The format is a six-entry key/value header followed by `nrows * ncols`
//! whitespace-separated samples in row-major order:
//!
//! ```text
//! ncols         4
//! nrows         6
//! xllcorner     0.0
//! yllcorner     0.0
//! cellsize      50.0
//! NODATA_value  -9999
//! -9999 -9999 5 2
//! ...
//! ```
//!
//! Samples equal to `NODATA_value` are mapped to `NaN`.

use std::io::Read;

use crate::error::{Error, Result};
use crate::grid::{Envelope, Grid, PixelConvention};

/// Parse an ASC document from a string
pub fn parse_asc(input: &str) -> Result<Grid> {
    let mut tokens = input.split_ascii_whitespace();

    let ncols = header_count(&mut tokens, "ncols")?;
    let nrows = header_count(&mut tokens, "nrows")?;
    let xllcorner = header_value(&mut tokens, "xllcorner")?;
    let yllcorner = header_value(&mut tokens, "yllcorner")?;
    let cellsize = header_value(&mut tokens, "cellsize")?;
    let nodata = header_value(&mut tokens, "NODATA_value")?;

    let mut data = Vec::with_capacity(nrows * ncols);
    for row in 0..nrows {
        for col in 0..ncols {
            let value: f64 = tokens
                .next()
                .and_then(|token| fast_float::parse(token).ok())
                .ok_or(Error::InvalidValue(row, col))?;
            data.push(if value == nodata { f64::NAN } else { value });
        }
    }

    let limits = Envelope::new(
        xllcorner,
        xllcorner + cellsize * ncols as f64,
        yllcorner,
        yllcorner + cellsize * nrows as f64,
    );
    Ok(Grid::new(
        data,
        nrows,
        ncols,
        limits,
        PixelConvention::PixelIsArea,
    ))
}

/// Read an ASC document from any reader
pub fn read_asc<R: Read>(mut reader: R) -> Result<Grid> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_asc(&content)
}

/// Match a header key and return its raw value token
fn header_token<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    key: &'static str,
) -> Result<&'a str> {
    match tokens.next() {
        Some(token) if token == key => tokens.next().ok_or(Error::ExpectedHeaderField(key)),
        _ => Err(Error::ExpectedHeaderField(key)),
    }
}

fn header_count<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    key: &'static str,
) -> Result<usize> {
    header_token(tokens, key)?
        .parse()
        .map_err(|_| Error::ExpectedHeaderField(key))
}

fn header_value<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    key: &'static str,
) -> Result<f64> {
    fast_float::parse(header_token(tokens, key)?).map_err(|_| Error::ExpectedHeaderField(key))
}
