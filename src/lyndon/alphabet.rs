use crate::error::{LieError, Result};

/// Symbols strictly increasing by code point, matching `LyndonWord` ordering.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    pub fn new(symbols: &str) -> Result<Self> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.is_empty() {
            return Err(LieError::InvalidAlphabet("empty alphabet".into()));
        }
        if let Some(pair) = symbols.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(LieError::InvalidAlphabet(format!(
                "symbols must be distinct and increasing, found {:?} before {:?}",
                pair[0], pair[1]
            )));
        }
        Ok(Self { symbols })
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_alphabets() {
        assert!(Alphabet::new("").is_err());
        assert!(Alphabet::new("aa").is_err());
        assert!(Alphabet::new("ba").is_err());
        let alph = Alphabet::new("abc").unwrap();
        assert_eq!(alph.symbols(), ['a', 'b', 'c']);
        assert_eq!(alph.len(), 3);
    }
}
