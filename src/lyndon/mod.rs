//! Lyndon words: generation, factorization, and the word-level Lie bracket.

mod alphabet;
mod bracket;
mod generate;
mod witt;
mod word;

pub use alphabet::Alphabet;
pub use bracket::{adjoint, bracket};
pub use generate::{Generator, lyndon_words, lyndon_words_of_length};
pub use witt::witt_dimension;
pub use word::{Factorization, LyndonWord};
