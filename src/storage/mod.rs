//! Storage module for dumping matrices to delimited text.

mod csv;

pub use csv::{format_general, save_matrix, write_matrix};
