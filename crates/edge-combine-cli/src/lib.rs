//! Command line front-end for `edge-combine`.
pub mod cli;
pub mod input;
pub mod summary;
