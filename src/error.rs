use thiserror::Error;

pub type Result<T> = std::result::Result<T, LieError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LieError {
    #[error("not a Lyndon word: {0:?}")]
    InvalidLyndonWord(String),
    #[error("bracket only defined for linear combinations of Lyndon words, got {0}")]
    UnsupportedBracketOperand(String),
    #[error("not a free Lie algebra element: {0}")]
    NonLieTerm(String),
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),
    #[error("degree must be positive, got {0}")]
    InvalidDegree(usize),
    #[error("parse error: {0}")]
    Parse(String),
}
