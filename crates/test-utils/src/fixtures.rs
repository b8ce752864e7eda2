//! Common test fixtures for contour map tests.
//!
//! Reference grids with known band boundaries and classifications, plus
//! helpers for writing delimited sample files.

use std::io::Write;
use tempfile::NamedTempFile;

/// Reference grids with hand-checked results.
pub mod grids {
    /// Flat 2x2 field: a single zero-width band `[0, 0]` containing every corner.
    pub fn flat_2x2() -> Vec<Vec<f64>> {
        vec![vec![0.0, 0.0], vec![0.0, 0.0]]
    }

    /// Left column 0, right column 10.
    ///
    /// With step 5 and factor 1 the bands are `[0, 5]`, `[5, 10]` and
    /// `[10, 10]`. The first sees BL=Inside, BR=Above, TR=Above, TL=Inside
    /// (code 52); the other two see code 12.
    pub fn left_right_2x2() -> Vec<Vec<f64>> {
        vec![vec![0.0, 10.0], vec![0.0, 10.0]]
    }

    /// Diagonal saddle: TL and BR low, TR and BL high.
    pub fn saddle_2x2(low: f64, high: f64) -> Vec<Vec<f64>> {
        vec![vec![low, high], vec![high, low]]
    }

    /// Small grid of uniform random samples in `[0, 1)`.
    pub fn demo_5x4() -> Vec<Vec<f64>> {
        vec![
            vec![0.12, 0.48, 0.91, 0.33, 0.05],
            vec![0.64, 0.27, 0.58, 0.76, 0.41],
            vec![0.83, 0.15, 0.02, 0.69, 0.97],
            vec![0.36, 0.55, 0.88, 0.21, 0.44],
        ]
    }
}

/// Render rows as delimited text, one row per line.
pub fn to_delimited(rows: &[Vec<f64>], delimiter: &str) -> String {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(delimiter)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write text to a temporary file that is deleted when dropped.
pub fn write_temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("failed to write temp file");
    file.flush().expect("failed to flush temp file");
    file
}

/// Write rows to a temporary delimited sample file.
pub fn write_delimited_file(rows: &[Vec<f64>], delimiter: &str) -> NamedTempFile {
    write_temp_file(&to_delimited(rows, delimiter))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_delimited() {
        let text = to_delimited(&grids::left_right_2x2(), "\t");
        assert_eq!(text, "0\t10\n0\t10");
    }

    #[test]
    fn test_write_delimited_file() {
        let file = write_delimited_file(&grids::saddle_2x2(0.0, 1.5), ",");
        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents, "0,1.5\n1.5,0");
    }

    #[test]
    fn test_demo_grid_rectangular() {
        let grid = grids::demo_5x4();
        assert_eq!(grid.len(), 4);
        assert!(grid.iter().all(|row| row.len() == 5));
    }
}
