use num_bigint::BigInt;
use rlie::{
    Alphabet, Factorization, LieError, LyndonWord, lyndon_words, lyndon_words_of_length,
    witt_dimension,
};

fn alphabet(symbols: &str) -> Alphabet {
    Alphabet::new(symbols).expect("valid alphabet")
}

fn lw(word: &str) -> LyndonWord {
    LyndonWord::new(word).expect("Lyndon word")
}

fn brute_force_lyndon(word: &str) -> bool {
    !word.is_empty() && (1..word.len()).all(|i| word < &word[i..])
}

#[test]
fn generates_two_letter_words_up_to_three() {
    let words: Vec<String> = lyndon_words(3, &alphabet("ab")).unwrap().collect();
    assert_eq!(words, vec!["a", "aab", "ab", "abb", "b"]);
}

#[test]
fn generated_words_are_sorted_unique_and_lyndon() {
    let words: Vec<String> = lyndon_words(6, &alphabet("abc")).unwrap().collect();
    for pair in words.windows(2) {
        assert!(pair[0] < pair[1], "{} should precede {}", pair[0], pair[1]);
    }
    for w in &words {
        assert!(LyndonWord::new(w.as_str()).is_ok(), "{w} is not Lyndon");
    }
}

#[test]
fn generator_counts_match_witt_dimensions() {
    for (symbols, max_len) in [("ab", 8), ("abc", 5), ("abcd", 4)] {
        let alph = alphabet(symbols);
        for n in 1..=max_len {
            let count = lyndon_words_of_length(n, &alph).unwrap().len();
            assert_eq!(
                witt_dimension(n, alph.len()),
                BigInt::from(count),
                "length {n} over {symbols}"
            );
        }
    }
}

#[test]
fn generator_matches_brute_force_enumeration() {
    let mut expected = Vec::new();
    let symbols = ['a', 'b', 'c'];
    for len in 1..=4u32 {
        for code in 0..3usize.pow(len) {
            let mut rest = code;
            let word: String = (0..len)
                .map(|_| {
                    let c = symbols[rest % 3];
                    rest /= 3;
                    c
                })
                .collect();
            if brute_force_lyndon(&word) {
                expected.push(word);
            }
        }
    }
    expected.sort();
    let words: Vec<String> = lyndon_words(4, &alphabet("abc")).unwrap().collect();
    assert_eq!(words, expected);
}

#[test]
fn construction_rejects_non_lyndon_words() {
    for w in ["ba", "abab", "aa", "aba", "cab"] {
        assert_eq!(LyndonWord::new(w), Err(LieError::InvalidLyndonWord(w.to_string())));
    }
    assert_eq!(lw("aabb").deg(), 4);
}

#[test]
fn factorization_concatenates_back() {
    for w in lyndon_words(6, &alphabet("abc")).unwrap().filter(|w| w.len() > 1) {
        let word = lw(&w);
        let Factorization::Pair(w1, w2) = word.lyndon_factorization() else {
            panic!("{w} should split");
        };
        assert_eq!(format!("{}{}", w1.word(), w2.word()), w);
        let min_suffix = (1..w.len()).map(|i| &w[i..]).min().unwrap();
        assert_eq!(w2.word(), min_suffix);
    }
}

#[test]
fn letters_do_not_split() {
    assert_eq!(lw("a").lyndon_factorization(), Factorization::Letter(lw("a")));
}

#[test]
fn bracket_forms() {
    let cases = [
        ("a", "a"),
        ("ab", "[a,b]"),
        ("aab", "[a,[a,b]]"),
        ("abb", "[[a,b],b]"),
        ("aabab", "[[a,[a,b]],[a,b]]"),
        ("abc", "[a,[b,c]]"),
        ("acb", "[[a,c],b]"),
    ];
    for (word, expected) in cases {
        assert_eq!(lw(word).bracket_form(), expected, "bracket form of {word}");
        assert_eq!(lw(word).to_string(), expected);
    }
}
