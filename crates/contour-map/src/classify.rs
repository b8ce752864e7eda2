//! Isoband cell classification (marching squares, ternary variant).
//!
//! Every 2x2 neighbourhood of the dense grid is a cell. Against a band
//! `[lower, upper]` each corner is below, inside or above, and the four
//! digits (bottom-left, bottom-right, top-right, top-left) form a base-3
//! code in `0..=80`. Codes 0 and 80 (all below / all above) draw nothing.

use crate::color::Hsb;
use crate::error::{ContourError, Result};
use crate::grid::Grid;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ambiguous codes whose polygon topology depends on the cell centre.
///
/// Kept as a fixed table rather than derived.
pub const SADDLE_CODES: [u8; 14] = [10, 11, 19, 20, 23, 30, 33, 47, 50, 57, 60, 61, 69, 70];

/// Classification of a value against a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum BandClass {
    Below = 0,
    Inside = 1,
    Above = 2,
}

impl BandClass {
    /// Classify `value` against the closed band `[lower, upper]`.
    #[inline]
    pub fn classify(value: f64, lower: f64, upper: f64) -> Self {
        if value < lower {
            BandClass::Below
        } else if value <= upper {
            BandClass::Inside
        } else {
            BandClass::Above
        }
    }

    pub fn digit(self) -> u8 {
        self as u8
    }

    pub fn from_digit(digit: u8) -> Result<Self> {
        match digit {
            0 => Ok(BandClass::Below),
            1 => Ok(BandClass::Inside),
            2 => Ok(BandClass::Above),
            d => Err(ContourError::invalid_argument(format!(
                "ternary digit must be 0, 1 or 2, got {}",
                d
            ))),
        }
    }
}

/// Cell corners in code digit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    BottomLeft,
    BottomRight,
    TopRight,
    TopLeft,
}

impl Corner {
    /// All corners in digit order (weights 1, 3, 9, 27).
    pub const ALL: [Corner; 4] = [
        Corner::BottomLeft,
        Corner::BottomRight,
        Corner::TopRight,
        Corner::TopLeft,
    ];

    /// Position of this corner's digit in the code.
    pub fn index(self) -> usize {
        match self {
            Corner::BottomLeft => 0,
            Corner::BottomRight => 1,
            Corner::TopRight => 2,
            Corner::TopLeft => 3,
        }
    }

    /// Offset `(row, col)` of this corner from the cell's top-left sample.
    pub fn offset(self) -> (usize, usize) {
        match self {
            Corner::BottomLeft => (1, 0),
            Corner::BottomRight => (1, 1),
            Corner::TopRight => (0, 1),
            Corner::TopLeft => (0, 0),
        }
    }
}

/// A base-3 classification code in `0..=80`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCode(u8);

impl CellCode {
    pub const MAX: u8 = 80;

    /// Every corner below the band.
    pub const ALL_BELOW: CellCode = CellCode(0);

    /// Every corner above the band.
    pub const ALL_ABOVE: CellCode = CellCode(80);

    pub fn new(code: u8) -> Result<Self> {
        if code > Self::MAX {
            return Err(ContourError::invalid_argument(format!(
                "classification code {} is outside 0..=80",
                code
            )));
        }
        Ok(Self(code))
    }

    /// Encode ternary digits in corner order (bottom-left first).
    pub fn from_digits(digits: &[u8]) -> Result<Self> {
        if digits.len() != Corner::ALL.len() {
            return Err(ContourError::invalid_argument(format!(
                "expected 4 ternary digits, got {}",
                digits.len()
            )));
        }

        let mut code = 0u32;
        let mut weight = 1u32;
        for &digit in digits {
            code += BandClass::from_digit(digit)?.digit() as u32 * weight;
            weight *= 3;
        }

        Self::new(u8::try_from(code).map_err(|_| {
            ContourError::invalid_argument(format!("classification code {} overflows", code))
        })?)
    }

    pub fn from_classes(classes: [BandClass; 4]) -> Result<Self> {
        Self::from_digits(&classes.map(BandClass::digit))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Decode back into per-corner classes (bottom-left first).
    pub fn classes(self) -> [BandClass; 4] {
        let mut rest = self.0;
        let mut classes = [BandClass::Below; 4];
        for class in classes.iter_mut() {
            *class = match rest % 3 {
                0 => BandClass::Below,
                1 => BandClass::Inside,
                _ => BandClass::Above,
            };
            rest /= 3;
        }
        classes
    }

    /// Class of a single corner.
    pub fn corner(self, corner: Corner) -> BandClass {
        self.classes()[corner.index()]
    }

    /// True for the all-below / all-above codes that contribute nothing.
    pub fn is_empty(self) -> bool {
        self == Self::ALL_BELOW || self == Self::ALL_ABOVE
    }

    pub fn is_saddle(self) -> bool {
        SADDLE_CODES.binary_search(&self.0).is_ok()
    }
}

impl fmt::Display for CellCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Grid position of a cell: its top-left sample in the dense grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// One classified cell for one band, ready for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellAssignment {
    /// Index of the band (`boundaries[band]..=boundaries[band + 1]`).
    pub band: usize,
    pub cell: CellPosition,
    pub code: CellCode,
    /// Class of the corner mean; set for saddle codes only.
    pub saddle: Option<BandClass>,
    pub color: Hsb,
}

/// Corner values of a cell in digit order (bottom-left first).
pub fn corner_values(dense: &Grid, cell: CellPosition) -> [f64; 4] {
    Corner::ALL.map(|corner| {
        let (dr, dc) = corner.offset();
        dense.get(cell.row + dr, cell.col + dc)
    })
}

/// Classify a single cell against `[lower, upper]`.
///
/// Returns `None` for codes 0 and 80, otherwise the code and, for saddle
/// codes, the class of the mean of the four corners.
pub fn classify_cell(
    dense: &Grid,
    cell: CellPosition,
    lower: f64,
    upper: f64,
) -> Result<Option<(CellCode, Option<BandClass>)>> {
    let corners = corner_values(dense, cell);

    let mut digits = [0u8; 4];
    let mut sum = 0.0;
    for (digit, &value) in digits.iter_mut().zip(corners.iter()) {
        *digit = BandClass::classify(value, lower, upper).digit();
        sum += value;
    }

    let code = CellCode::from_digits(&digits)?;
    if code.is_empty() {
        return Ok(None);
    }

    let saddle = code
        .is_saddle()
        .then(|| BandClass::classify(sum / 4.0, lower, upper));

    Ok(Some((code, saddle)))
}

/// Classify every cell of `dense` against every band.
///
/// Emissions are ordered band-major, then row-major within a band.
///
/// # Arguments
/// * `dense` - Upsampled grid
/// * `boundaries` - Ascending band boundaries (N + 1 values)
/// * `colors` - One colour per band (N values)
pub fn classify(dense: &Grid, boundaries: &[f64], colors: &[Hsb]) -> Result<Vec<CellAssignment>> {
    if boundaries.len() < 2 || colors.len() != boundaries.len() - 1 {
        return Err(ContourError::invalid_configuration(format!(
            "{} colors cannot paint the bands of {} boundaries",
            colors.len(),
            boundaries.len()
        )));
    }

    let (cell_rows, cell_cols) = dense.cell_dims();
    let mut assignments = Vec::new();

    for (band, (bounds, &color)) in boundaries.windows(2).zip(colors).enumerate() {
        let (lower, upper) = (bounds[0], bounds[1]);

        // Collecting an indexed parallel iterator keeps row order.
        let rows: Vec<Vec<CellAssignment>> = (0..cell_rows)
            .into_par_iter()
            .map(|row| -> Result<Vec<CellAssignment>> {
                let mut out = Vec::new();
                for col in 0..cell_cols {
                    let cell = CellPosition::new(row, col);
                    if let Some((code, saddle)) = classify_cell(dense, cell, lower, upper)? {
                        out.push(CellAssignment {
                            band,
                            cell,
                            code,
                            saddle,
                            color,
                        });
                    }
                }
                Ok(out)
            })
            .collect::<Result<_>>()?;

        let before = assignments.len();
        assignments.extend(rows.into_iter().flatten());
        tracing::trace!(band, lower, upper, cells = assignments.len() - before, "Classified band");
    }

    tracing::debug!(
        bands = colors.len(),
        cell_rows,
        cell_cols,
        emitted = assignments.len(),
        "Classified cells"
    );

    Ok(assignments)
}
