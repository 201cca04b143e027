//! Core dense matrix type shared by the algorithm engines.

mod matrix;

pub use matrix::Matrix;
