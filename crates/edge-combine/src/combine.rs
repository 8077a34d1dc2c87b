//! The folder-to-file pipeline: discover, load, sort, assemble, write.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use ndarray::Array2;

use crate::config::{CombineOptions, SortMode};
use crate::error::EdgeError;
use crate::io::write_edge_file;
use crate::math::{block_diag, block_offsets};
use crate::matrix_set::{discover_edge_files, load_matrix_set, sort_matrix_set, NamedMatrix};

/// Where one input matrix ended up in the combined matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockInfo {
    pub name: String,
    pub size: usize,
    pub offset: usize,
}

/// Outcome of a successful [`combine_edge_folder`] run.
#[derive(Debug, Clone)]
pub struct CombineReport {
    pub output_path: PathBuf,
    pub sort_mode: SortMode,
    /// Blocks in the order they were placed.
    pub blocks: Vec<BlockInfo>,
    /// Row (and column) count of the combined matrix.
    pub dimension: usize,
}

/// Assemble already ordered matrices into one block-diagonal matrix.
pub fn combine_matrix_set(set: &[NamedMatrix]) -> Result<(Array2<f64>, Vec<BlockInfo>), EdgeError> {
    let blocks: Vec<&Array2<f64>> = set.iter().map(|m| &m.data).collect();
    let combined = block_diag(&blocks)?;

    let sizes: Vec<usize> = set.iter().map(NamedMatrix::size).collect();
    let info = set
        .iter()
        .zip(block_offsets(&sizes))
        .map(|(m, offset)| BlockInfo {
            name: m.name.clone(),
            size: m.size(),
            offset,
        })
        .collect();

    Ok((combined, info))
}

/// Combine every `.edge` file in `folder` into `folder/output_name`.
///
/// `output_name` itself is never read as an input, so repeated runs do not
/// fold the previous result back in. Nothing is written unless every input
/// loads and validates.
pub fn combine_edge_folder<P: AsRef<Path>>(
    folder: P,
    output_name: &str,
    precision: usize,
    sort_mode: SortMode,
) -> Result<CombineReport> {
    let options = CombineOptions::new(output_name, precision, sort_mode);
    combine_with_options(folder, &options)
}

/// Same as [`combine_edge_folder`] with the settings bundled in [`CombineOptions`].
pub fn combine_with_options<P: AsRef<Path>>(
    folder: P,
    options: &CombineOptions,
) -> Result<CombineReport> {
    let folder = folder.as_ref();
    validate_output_name(&options.output_name)?;

    let paths = discover_edge_files(folder, &options.output_name)?;
    if paths.is_empty() {
        return Err(EdgeError::EmptyInput(folder.to_path_buf()).into());
    }

    let mut set = load_matrix_set(&paths)?;
    sort_matrix_set(&mut set, options.sort_mode);

    let (combined, blocks) = combine_matrix_set(&set)?;
    info!(
        "Combined {} matrices ({}) into {} x {}",
        blocks.len(),
        options.sort_mode.description(),
        combined.nrows(),
        combined.ncols()
    );

    let output_path = folder.join(&options.output_name);
    write_edge_file(&combined, &output_path, options.precision).with_context(|| {
        format!(
            "Failed to write combined matrix to {}",
            output_path.display()
        )
    })?;
    info!("Saved combined matrix to {}", output_path.display());

    Ok(CombineReport {
        output_path,
        sort_mode: options.sort_mode,
        dimension: combined.nrows(),
        blocks,
    })
}

fn validate_output_name(name: &str) -> Result<(), EdgeError> {
    let is_bare = Path::new(name)
        .file_name()
        .map(|file_name| file_name == name)
        .unwrap_or(false);
    if name.is_empty() || !is_bare {
        return Err(EdgeError::InvalidOutputName(name.to_string()));
    }
    Ok(())
}
