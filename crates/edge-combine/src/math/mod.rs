//! Dense matrix helpers built on `ndarray`.
//!
//! Everything here works on `Array2<f64>` and does no I/O, so the assembly
//! step can be tested without touching the filesystem.
pub mod block;

pub use block::{block_diag, block_offsets};
