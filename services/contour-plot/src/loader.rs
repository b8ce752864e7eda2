//! Delimited-text sample files.
//!
//! One grid row per line, values separated by a delimiter (tab by
//! default). Blank lines are skipped and values are trimmed.

use contour_map::{ContourError, Grid};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}, column {column}: cannot parse '{value}' as a number")]
    Parse {
        line: usize,
        column: usize,
        value: String,
    },

    #[error("Empty delimiter")]
    EmptyDelimiter,

    #[error("Invalid grid: {0}")]
    Grid(#[from] ContourError),
}

/// Read a sample grid from a delimited text file.
pub fn load_grid<P: AsRef<Path>>(path: P, delimiter: &str) -> Result<Grid, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let grid = parse_grid(&text, delimiter)?;
    tracing::debug!(
        path = %path.display(),
        rows = grid.rows(),
        cols = grid.cols(),
        "Loaded sample grid"
    );
    Ok(grid)
}

/// Parse delimited text into a grid. Line and column numbers in errors are 1-based.
pub fn parse_grid(text: &str, delimiter: &str) -> Result<Grid, LoadError> {
    if delimiter.is_empty() {
        return Err(LoadError::EmptyDelimiter);
    }

    let mut rows = Vec::new();
    for (line_idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let row = line
            .split(delimiter)
            .enumerate()
            .map(|(col_idx, raw)| {
                let value = raw.trim();
                value.parse::<f64>().map_err(|_| LoadError::Parse {
                    line: line_idx + 1,
                    column: col_idx + 1,
                    value: value.to_string(),
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;
        rows.push(row);
    }

    Ok(Grid::from_rows(rows)?)
}

/// Interpret escape sequences and names commonly typed for delimiters.
pub fn unescape_delimiter(raw: &str) -> String {
    match raw {
        "\\t" | "tab" => "\t".to_string(),
        "comma" => ",".to_string(),
        "space" => " ".to_string(),
        "semicolon" => ";".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{fixtures::grids, to_delimited, write_delimited_file, write_temp_file};

    #[test]
    fn test_parse_tab_delimited() {
        let grid = parse_grid("1\t2\t3\n4\t5\t6\n", "\t").unwrap();
        assert_eq!((grid.rows(), grid.cols()), (2, 3));
        assert_eq!(grid.get(1, 2), 6.0);
    }

    #[test]
    fn test_blank_lines_and_whitespace() {
        let grid = parse_grid("\n 1 , 2 \n\n3,4\r\n   \n", ",").unwrap();
        assert_eq!(grid.values(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_parse_error_location() {
        let err = parse_grid("1\t2\n\n3\tabc\n", "\t").unwrap_err();
        match err {
            LoadError::Parse {
                line,
                column,
                value,
            } => {
                assert_eq!((line, column), (3, 2));
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = parse_grid("1,2\n3\n", ",").unwrap_err();
        assert!(matches!(err, LoadError::Grid(ContourError::MalformedGrid(_))));
    }

    #[test]
    fn test_too_small_rejected() {
        assert!(matches!(
            parse_grid("1,2\n", ","),
            Err(LoadError::Grid(_))
        ));
        assert!(matches!(parse_grid("", ","), Err(LoadError::Grid(_))));
    }

    #[test]
    fn test_empty_delimiter_rejected() {
        assert!(matches!(parse_grid("1", ""), Err(LoadError::EmptyDelimiter)));
    }

    #[test]
    fn test_load_from_file() {
        let rows = grids::demo_5x4();
        let file = write_delimited_file(&rows, "\t");
        let grid = load_grid(file.path(), "\t").unwrap();
        assert_eq!((grid.rows(), grid.cols()), (4, 5));
        assert_eq!(grid.get(2, 4), 0.97);

        let semi = write_temp_file(&to_delimited(&rows, ";"));
        assert_eq!(load_grid(semi.path(), ";").unwrap(), grid);
    }

    #[test]
    fn test_missing_file() {
        let err = load_grid("/nonexistent/samples.txt", "\t").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/samples.txt"));
    }

    #[test]
    fn test_unescape_delimiter() {
        assert_eq!(unescape_delimiter("\\t"), "\t");
        assert_eq!(unescape_delimiter("tab"), "\t");
        assert_eq!(unescape_delimiter("comma"), ",");
        assert_eq!(unescape_delimiter("|"), "|");
    }
}
