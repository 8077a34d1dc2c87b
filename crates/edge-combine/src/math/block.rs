use ndarray::{s, Array2};

use crate::error::EdgeError;

/// Starting row/column of every block when `sizes` are laid out along the diagonal.
pub fn block_offsets(sizes: &[usize]) -> Vec<usize> {
    sizes
        .iter()
        .scan(0, |offset, &size| {
            let start = *offset;
            *offset += size;
            Some(start)
        })
        .collect()
}

/// Build a block-diagonal matrix from square `blocks`, in the given order.
///
/// The result is `total × total` where `total` is the sum of the block sizes.
/// Cells outside the diagonal blocks are exactly zero and cells inside them are
/// copied from the source unchanged. No blocks gives a `0 × 0` matrix.
///
/// # Errors
///
/// Returns [`EdgeError::Shape`] if a block is not square. The path of the
/// error is the block's position, since in-memory blocks have no file name.
pub fn block_diag(blocks: &[&Array2<f64>]) -> Result<Array2<f64>, EdgeError> {
    for (idx, block) in blocks.iter().enumerate() {
        let (rows, cols) = block.dim();
        if rows != cols {
            return Err(EdgeError::Shape {
                path: format!("block #{}", idx).into(),
                rows,
                cols,
            });
        }
    }

    let total: usize = blocks.iter().map(|b| b.nrows()).sum();
    let mut combined = Array2::<f64>::zeros((total, total));

    let mut offset = 0;
    for block in blocks {
        let size = block.nrows();
        combined
            .slice_mut(s![offset..offset + size, offset..offset + size])
            .assign(*block);
        offset += size;
    }

    Ok(combined)
}
