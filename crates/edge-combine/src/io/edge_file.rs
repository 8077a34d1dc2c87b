//! Plain-text `.edge` matrix reader and writer.
//!
//! One matrix row per line, values separated by any run of whitespace.
//! Blank lines are ignored so a trailing newline never turns into an empty row.
use std::fs;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};
use log::debug;
use ndarray::Array2;
use tempfile::NamedTempFile;

use crate::error::EdgeError;

/// Default number of decimals written for each value.
pub const DEFAULT_PRECISION: usize = 5;

/// Read a square `.edge` file into a dense matrix.
pub fn read_edge_file<P: AsRef<Path>>(path: P) -> Result<Array2<f64>, EdgeError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| EdgeError::io(path, e))?;
    let matrix = parse_edge_str(path, &content)?;
    debug!("Read {} ({} x {})", path.display(), matrix.nrows(), matrix.ncols());
    Ok(matrix)
}

/// Parse the contents of an `.edge` file. `path` is only used in error messages.
pub fn parse_edge_str(path: &Path, content: &str) -> Result<Array2<f64>, EdgeError> {
    let mut values = Vec::new();
    let mut rows = 0;
    let mut cols = 0;

    for (line_idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let before = values.len();
        for token in line.split_whitespace() {
            let value = token.parse::<f64>().map_err(|_| EdgeError::Parse {
                path: path.to_path_buf(),
                line: line_idx + 1,
                token: token.to_string(),
            })?;
            values.push(value);
        }

        let found = values.len() - before;
        if rows == 0 {
            cols = found;
        } else if found != cols {
            return Err(EdgeError::Ragged {
                path: path.to_path_buf(),
                line: line_idx + 1,
                expected: cols,
                found,
            });
        }
        rows += 1;
    }

    if rows == 0 {
        return Err(EdgeError::EmptyMatrix(path.to_path_buf()));
    }
    if rows != cols {
        return Err(EdgeError::Shape {
            path: path.to_path_buf(),
            rows,
            cols,
        });
    }

    // rows * cols == values.len() by construction
    Array2::from_shape_vec((rows, cols), values).map_err(|_| EdgeError::Shape {
        path: path.to_path_buf(),
        rows,
        cols,
    })
}

/// Format one value with exactly `precision` decimals.
///
/// Rust rounds the exact binary value to nearest with ties to even, so
/// `0.125` becomes `0.12` at two decimals.
pub fn format_value(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}

/// Render every matrix row as a space separated line, without the newline.
pub fn format_edge_rows(matrix: &Array2<f64>, precision: usize) -> Vec<String> {
    matrix
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .map(|&v| format_value(v, precision))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Write `matrix` to `path`, replacing any existing file.
///
/// Rows go to a temporary file next to `path` which is renamed into place once
/// everything has been flushed. If anything fails the destination is left as it
/// was and the temporary file is removed.
pub fn write_edge_file<P: AsRef<Path>>(
    matrix: &Array2<f64>,
    path: P,
    precision: usize,
) -> Result<(), EdgeError> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| EdgeError::io(dir, e))?;
    {
        let mut writer = WriterBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .from_writer(tmp.as_file_mut());

        for row in matrix.rows() {
            writer
                .write_record(row.iter().map(|&v| format_value(v, precision)))
                .map_err(|e| EdgeError::io(path, e.into()))?;
        }
        writer.flush().map_err(|e| EdgeError::io(path, e))?;
    }
    tmp.as_file_mut()
        .flush()
        .map_err(|e| EdgeError::io(path, e))?;

    tmp.persist(path).map_err(|e| EdgeError::io(path, e.error))?;
    debug!(
        "Wrote {} x {} matrix to {}",
        matrix.nrows(),
        matrix.ncols(),
        path.display()
    );
    Ok(())
}
