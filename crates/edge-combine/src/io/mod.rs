//! IO utilities for `.edge` matrix files.

pub mod edge_file;

pub use edge_file::{
    format_edge_rows, format_value, parse_edge_str, read_edge_file, write_edge_file,
    DEFAULT_PRECISION,
};
