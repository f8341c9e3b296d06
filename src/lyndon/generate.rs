use tracing::debug;

use super::Alphabet;
use crate::error::{LieError, Result};

/// Duval's algorithm: every Lyndon word of length at most `max_len`, in
/// increasing lexicographic order.
#[derive(Clone, Debug)]
pub struct Generator {
    alphabet: Alphabet,
    max_len: usize,
    // Indices into the alphabet.
    word: Vec<usize>,
    started: bool,
}

impl Generator {
    pub fn new(max_len: usize, alphabet: &Alphabet) -> Result<Self> {
        if max_len == 0 {
            return Err(LieError::InvalidDegree(max_len));
        }
        debug!(max_len, symbols = alphabet.len(), "generating Lyndon words");
        Ok(Self {
            alphabet: alphabet.clone(),
            max_len,
            word: vec![0],
            started: false,
        })
    }

    fn render(&self) -> String {
        let symbols = self.alphabet.symbols();
        self.word.iter().map(|&i| symbols[i]).collect()
    }
}

impl Iterator for Generator {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let last = self.word.last_mut()?;
        if self.started {
            *last += 1;
        } else {
            *last = 0;
            self.started = true;
        }
        let current = self.render();

        let period = self.word.len();
        while self.word.len() < self.max_len {
            self.word.push(self.word[self.word.len() - period]);
        }
        let top = self.alphabet.len() - 1;
        while self.word.last() == Some(&top) {
            self.word.pop();
        }
        Some(current)
    }
}

pub fn lyndon_words(max_len: usize, alphabet: &Alphabet) -> Result<Generator> {
    Generator::new(max_len, alphabet)
}

pub fn lyndon_words_of_length(len: usize, alphabet: &Alphabet) -> Result<Vec<String>> {
    Ok(Generator::new(len, alphabet)?
        .filter(|w| w.chars().count() == len)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_letters_up_to_three() {
        let alph = Alphabet::new("ab").unwrap();
        let words: Vec<String> = Generator::new(3, &alph).unwrap().collect();
        assert_eq!(words, vec!["a", "aab", "ab", "abb", "b"]);
    }

    #[test]
    fn single_letter_alphabet() {
        let alph = Alphabet::new("x").unwrap();
        let words: Vec<String> = Generator::new(4, &alph).unwrap().collect();
        assert_eq!(words, vec!["x"]);
    }

    #[test]
    fn zero_length_is_rejected() {
        let alph = Alphabet::new("ab").unwrap();
        assert_eq!(Generator::new(0, &alph).unwrap_err(), LieError::InvalidDegree(0));
    }
}
