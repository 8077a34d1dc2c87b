//! edge-combine: block-diagonal assembly of square `.edge` matrices.
//!
//! A folder of whitespace-delimited adjacency matrices is read, ordered by size
//! or by name, and written back as a single matrix with every input on the main
//! diagonal and zeros everywhere else.
//!
//! The stages are kept in separate modules so each can be used and tested on
//! its own: [`io`] reads and writes files, [`matrix_set`] discovers and orders
//! inputs, [`math`] assembles the blocks and [`combine`] ties them together.
pub mod combine;
pub mod config;
pub mod error;
pub mod io;
pub mod math;
pub mod matrix_set;

pub use combine::{combine_edge_folder, combine_with_options, BlockInfo, CombineReport};
pub use config::{CombineOptions, SortMode};
pub use error::EdgeError;
pub use matrix_set::{MatrixSet, NamedMatrix};
