use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::LieSeries;
use crate::expr::{Expr, zero};
use crate::lyndon::{Alphabet, LyndonWord, lyndon_words_of_length};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomSeriesConfig {
    pub seed: u64,
    pub terms: usize,
}

impl Default for RandomSeriesConfig {
    fn default() -> Self {
        Self { seed: 0, terms: 4 }
    }
}

impl LieSeries {
    // Each degree draws from its own ChaCha stream, independent of access order.
    pub fn random(alphabet: &Alphabet, config: &RandomSeriesConfig) -> LieSeries {
        let alphabet = alphabet.clone();
        let config = config.clone();
        LieSeries::new(move |d| {
            let words = lyndon_words_of_length(d, &alphabet)?;
            if words.is_empty() {
                return Ok(zero());
            }
            let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
            rng.set_stream(d as u64);
            Ok((0..config.terms)
                .map(|_| {
                    let pick = &words[rng.gen_range(0..words.len())];
                    Expr::Word(LyndonWord::new_unchecked(pick.clone()))
                })
                .sum())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplify::{collect, homogeneous_degree};

    #[test]
    fn terms_are_homogeneous() {
        let alph = Alphabet::new("ab").unwrap();
        let s = LieSeries::random(&alph, &RandomSeriesConfig::default());
        for d in 1..=5 {
            let term = s.ser(d).unwrap();
            assert_eq!(homogeneous_degree(&term).unwrap(), Some(d));
            let total: i64 = collect(&term)
                .unwrap()
                .values()
                .map(|c| i64::try_from(c.to_integer()).unwrap())
                .sum();
            assert_eq!(total, 4);
        }
    }

    #[test]
    fn default_config_draws_four_words() {
        assert_eq!(RandomSeriesConfig::default(), RandomSeriesConfig { seed: 0, terms: 4 });
    }

    #[test]
    fn same_seed_same_series() {
        let alph = Alphabet::new("abc").unwrap();
        let config = RandomSeriesConfig { seed: 7, terms: 3 };
        let s1 = LieSeries::random(&alph, &config);
        let s2 = LieSeries::random(&alph, &config);
        assert_eq!(s1.ser(4).unwrap(), s2.ser(4).unwrap());
        assert_eq!(s1.ser(2).unwrap(), s2.ser(2).unwrap());
    }

    #[test]
    fn single_letter_alphabet_vanishes_above_degree_one() {
        let alph = Alphabet::new("a").unwrap();
        let s = LieSeries::random(&alph, &RandomSeriesConfig::default());
        assert!(s.ser(3).unwrap().is_zero());
    }
}
