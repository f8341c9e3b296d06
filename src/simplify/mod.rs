//! Collecting linear combinations of Lyndon words into canonical form.

mod collect;

pub use collect::{collect, from_coefficients, homogeneous_degree, normalize};
