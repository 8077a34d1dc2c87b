//! Discovery, loading and ordering of the matrices found in a folder.
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use ndarray::Array2;

use crate::config::{SortMode, EDGE_EXTENSION};
use crate::error::EdgeError;
use crate::io::read_edge_file;

/// A square matrix together with the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedMatrix {
    /// File name including the extension, e.g. `graph_a.edge`.
    pub name: String,
    pub path: PathBuf,
    pub data: Array2<f64>,
}

impl NamedMatrix {
    /// Wrap an in-memory matrix, rejecting non-square data.
    pub fn new(name: impl Into<String>, data: Array2<f64>) -> Result<Self, EdgeError> {
        let name = name.into();
        let (rows, cols) = data.dim();
        if rows != cols {
            return Err(EdgeError::Shape {
                path: PathBuf::from(&name),
                rows,
                cols,
            });
        }
        Ok(Self {
            path: PathBuf::from(&name),
            name,
            data,
        })
    }

    /// Load and validate a matrix from an `.edge` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, EdgeError> {
        let path = path.as_ref();
        let data = read_edge_file(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self {
            name,
            path: path.to_path_buf(),
            data,
        })
    }

    pub fn size(&self) -> usize {
        self.data.nrows()
    }
}

/// Matrices in processing order.
pub type MatrixSet = Vec<NamedMatrix>;

/// List the `.edge` files in `folder`, leaving out `output_name`.
///
/// Only regular files directly inside `folder` are considered. The result is
/// sorted by file name so discovery order does not depend on the filesystem.
pub fn discover_edge_files<P: AsRef<Path>>(
    folder: P,
    output_name: &str,
) -> Result<Vec<PathBuf>, EdgeError> {
    let folder = folder.as_ref();
    let entries = fs::read_dir(folder).map_err(|e| EdgeError::io(folder, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| EdgeError::io(folder, e))?;
        let path = entry.path();

        if path.extension().and_then(|ext| ext.to_str()) != Some(EDGE_EXTENSION) {
            continue;
        }
        if entry.file_name() == output_name {
            debug!("Skipping output file {}", path.display());
            continue;
        }
        let file_type = entry.file_type().map_err(|e| EdgeError::io(&path, e))?;
        if !is_regular_file(&path, file_type) {
            continue;
        }
        paths.push(path);
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!("Discovered {} .edge files in {}", paths.len(), folder.display());
    Ok(paths)
}

fn is_regular_file(path: &Path, file_type: fs::FileType) -> bool {
    if file_type.is_symlink() {
        return path.is_file();
    }
    file_type.is_file()
}

/// Load every path in order. The first failure aborts the whole set.
pub fn load_matrix_set(paths: &[PathBuf]) -> Result<MatrixSet, EdgeError> {
    paths.iter().map(NamedMatrix::from_file).collect()
}

/// Reorder `set` in place according to `mode`. Both orders are stable.
pub fn sort_matrix_set(set: &mut MatrixSet, mode: SortMode) {
    match mode {
        SortMode::Size => set.sort_by(|a, b| b.size().cmp(&a.size())),
        SortMode::Alphabetical => set.sort_by_cached_key(|m| m.name.to_lowercase()),
    }
}

/// Sorted copy of `set`, leaving the input untouched.
pub fn sorted_matrix_set(set: &[NamedMatrix], mode: SortMode) -> MatrixSet {
    let mut sorted = set.to_vec();
    sort_matrix_set(&mut sorted, mode);
    sorted
}
