use std::fmt;

use crate::error::{LieError, Result};
use crate::expr::{Expr, formal_bracket};

/// A word that is strictly smaller than each of its proper right factors.
///
/// Ordering and equality are those of the underlying string, so symbols
/// compare by code point.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct LyndonWord {
    word: String,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Factorization {
    Letter(LyndonWord),
    Pair(LyndonWord, LyndonWord),
}

impl LyndonWord {
    pub fn new(word: impl Into<String>) -> Result<Self> {
        let word = word.into();
        if word.is_empty() || !is_lyndon(&word) {
            return Err(LieError::InvalidLyndonWord(word));
        }
        Ok(Self { word })
    }

    pub(crate) fn new_unchecked(word: String) -> Self {
        debug_assert!(is_lyndon(&word), "{word:?} is not a Lyndon word");
        Self { word }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn deg(&self) -> usize {
        self.word.chars().count()
    }

    /// Splits `w` as `(w1, w2)` where `w2` is the minimal proper right factor.
    pub fn standard_factorization(&self) -> Option<(LyndonWord, LyndonWord)> {
        let split = right_factors(&self.word).min_by_key(|&i| &self.word[i..])?;
        let (left, right) = self.word.split_at(split);
        Some((
            LyndonWord::new_unchecked(left.to_string()),
            LyndonWord::new_unchecked(right.to_string()),
        ))
    }

    pub fn lyndon_factorization(&self) -> Factorization {
        match self.standard_factorization() {
            Some((w1, w2)) => Factorization::Pair(w1, w2),
            None => Factorization::Letter(self.clone()),
        }
    }

    /// Bracketed rendering, e.g. `aab` becomes `[a,[a,b]]`.
    pub fn bracket_form(&self) -> String {
        match self.standard_factorization() {
            Some((w1, w2)) => format!("[{},{}]", w1.bracket_form(), w2.bracket_form()),
            None => self.word.clone(),
        }
    }

    pub fn bracket_expr(&self) -> Expr {
        match self.standard_factorization() {
            Some((w1, w2)) => formal_bracket(w1.bracket_expr(), w2.bracket_expr()),
            None => Expr::Word(self.clone()),
        }
    }

    pub fn lw_adjoint(&self, z: &LyndonWord) -> Result<Expr> {
        super::adjoint(self, z)
    }

    pub(crate) fn concat(&self, other: &LyndonWord) -> Result<LyndonWord> {
        LyndonWord::new(format!("{}{}", self.word, other.word))
    }
}

impl fmt::Display for LyndonWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bracket_form())
    }
}

fn right_factors(word: &str) -> impl Iterator<Item = usize> + '_ {
    word.char_indices().skip(1).map(|(i, _)| i)
}

fn is_lyndon(word: &str) -> bool {
    right_factors(word).all(|i| word < &word[i..])
}
