// Integration tests for the word tables and the spelling rules built on them.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

use extenso_match::lexicon::{HUNDRED, TEENS, TENS, UNITS, words_for};

#[test]
fn word_tables_are_unique_and_lowercase() {
    let mut seen = HashSet::new();
    for w in UNITS.iter().chain(TEENS.iter()).chain(TENS[2..].iter()) {
        assert!(seen.insert(*w), "duplicate word '{}' across tables", w);
        assert!(!w.is_empty());
        assert!(w.chars().all(|c| c.is_lowercase()), "word '{}' is not lowercase", w);
    }
    assert!(!seen.contains(HUNDRED));
}

#[test]
fn every_number_up_to_hundred_is_spelled_distinctly() {
    let mut seen = HashSet::new();
    for n in 0..=100u8 {
        let w = words_for(n).unwrap();
        assert!(seen.insert(w.clone()), "'{}' spelled twice (at {})", w, n);
    }
    assert_eq!(seen.len(), 101);
}

#[test]
fn round_tens_are_the_bare_tens_word() {
    for tens in 2..=9u8 {
        let n = tens * 10;
        assert_eq!(words_for(n).unwrap(), TENS[tens as usize]);
        assert!(!words_for(n).unwrap().contains(" e "));
    }
}

#[test]
fn compound_tens_join_with_e() {
    for n in 20..=99u8 {
        if n % 10 == 0 {
            continue;
        }
        let expected = format!("{} e {}", TENS[(n / 10) as usize], UNITS[(n % 10) as usize]);
        assert_eq!(words_for(n).unwrap(), expected);
    }
}

#[test]
fn boundary_words() {
    assert_eq!(words_for(0).unwrap(), "zero");
    assert_eq!(words_for(9).unwrap(), "nove");
    assert_eq!(words_for(10).unwrap(), "dez");
    assert_eq!(words_for(15).unwrap(), "quinze");
    assert_eq!(words_for(19).unwrap(), "dezenove");
    assert_eq!(words_for(21).unwrap(), "vinte e um");
    assert_eq!(words_for(30).unwrap(), "trinta");
    assert_eq!(words_for(100).unwrap(), "cem");
    assert!(words_for(101).is_err());
}
