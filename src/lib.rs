//! Free Lie algebra computations in the Lyndon basis: enumeration of
//! Lyndon words, their bracket forms, the Lie bracket on linear
//! combinations, and lazily evaluated Lie series.

pub mod error;
pub mod expr;
pub mod format;
pub mod lyndon;
pub mod parser;
pub mod series;
pub mod simplify;

pub use error::{LieError, Result};
pub use expr::{Expr, Rational, add, formal_bracket, neg, rational, scale, sub, word, zero};
pub use format::pretty;
pub use lyndon::{
    Alphabet, Factorization, Generator, LyndonWord, adjoint, bracket, lyndon_words,
    lyndon_words_of_length, witt_dimension,
};
pub use parser::{parse_expr, parse_word};
pub use series::{LieSeries, RandomSeriesConfig};
pub use simplify::{collect, homogeneous_degree, normalize};
