//! Portuguese word forms for the numbers 0 through 100.
//!
//! Board cells show these words; the tray shows the numerals. The tables are
//! public so tests (and any future quiz mode) can check them directly.

use crate::error::{GameError, Result};

/// Largest number that has a word form.
pub const MAX_SPELLABLE: u8 = 100;

/// Zero through nine. Also used as the units part of compound tens.
pub const UNITS: [&str; 10] = [
    "zero", "um", "dois", "três", "quatro", "cinco", "seis", "sete", "oito", "nove",
];

/// Ten through nineteen. These never decompose into tens + units.
pub const TEENS: [&str; 10] = [
    "dez", "onze", "doze", "treze", "quatorze", "quinze", "dezesseis", "dezessete", "dezoito",
    "dezenove",
];

/// Tens words indexed by the tens digit. Indices 0 and 1 are covered by
/// `UNITS` / `TEENS` and are never looked up here.
pub const TENS: [&str; 10] = [
    "", "dez", "vinte", "trinta", "quarenta", "cinquenta", "sessenta", "setenta", "oitenta",
    "noventa",
];

/// Exactly one hundred ("cem", not "cento").
pub const HUNDRED: &str = "cem";

/// Connective between tens and units: "vinte e um".
const CONNECTIVE: &str = " e ";

/// Spell `n` out in words.
///
/// Fails with [`GameError::OutOfRange`] for anything above 100.
pub fn words_for(n: u8) -> Result<String> {
    let words = match n {
        0..=9 => UNITS[n as usize].to_string(),
        10..=19 => TEENS[(n - 10) as usize].to_string(),
        MAX_SPELLABLE => HUNDRED.to_string(),
        20..=99 => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                units => format!("{tens}{CONNECTIVE}{}", UNITS[units as usize]),
            }
        }
        _ => return Err(GameError::OutOfRange(f64::from(n))),
    };
    Ok(words)
}

/// Spell a number that arrives untyped (a JS number). Fractions, negatives,
/// NaN and anything above 100 are rejected rather than narrowed to `u8`.
pub fn words_for_number(n: f64) -> Result<String> {
    if n.fract() != 0.0 || !(0.0..=f64::from(MAX_SPELLABLE)).contains(&n) {
        return Err(GameError::OutOfRange(n));
    }
    words_for(n as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_and_teens() {
        assert_eq!(words_for(0).unwrap(), "zero");
        assert_eq!(words_for(3).unwrap(), "três");
        assert_eq!(words_for(9).unwrap(), "nove");
        assert_eq!(words_for(10).unwrap(), "dez");
        assert_eq!(words_for(14).unwrap(), "quatorze");
        assert_eq!(words_for(15).unwrap(), "quinze");
        assert_eq!(words_for(19).unwrap(), "dezenove");
    }

    #[test]
    fn test_round_tens_have_no_connective() {
        assert_eq!(words_for(20).unwrap(), "vinte");
        assert_eq!(words_for(30).unwrap(), "trinta");
        assert_eq!(words_for(90).unwrap(), "noventa");
    }

    #[test]
    fn test_compound_tens() {
        assert_eq!(words_for(21).unwrap(), "vinte e um");
        assert_eq!(words_for(47).unwrap(), "quarenta e sete");
        assert_eq!(words_for(99).unwrap(), "noventa e nove");
    }

    #[test]
    fn test_hundred_is_singular_form() {
        assert_eq!(words_for(100).unwrap(), "cem");
    }

    #[test]
    fn test_above_hundred_is_rejected() {
        assert!(matches!(words_for(101), Err(GameError::OutOfRange(n)) if n == 101.0));
        assert!(matches!(words_for(u8::MAX), Err(GameError::OutOfRange(n)) if n == 255.0));
    }

    #[test]
    fn test_untyped_numbers_are_not_narrowed() {
        assert_eq!(words_for_number(42.0).unwrap(), "quarenta e dois");
        assert_eq!(words_for_number(100.0).unwrap(), "cem");
        assert_eq!(words_for_number(0.0).unwrap(), "zero");
        // 300 and 356 would wrap to 44 and 100 as u8.
        assert!(matches!(words_for_number(300.0), Err(GameError::OutOfRange(n)) if n == 300.0));
        assert!(words_for_number(356.0).is_err());
        assert!(matches!(words_for_number(-1.0), Err(GameError::OutOfRange(n)) if n == -1.0));
        assert!(words_for_number(2.5).is_err());
        assert!(words_for_number(f64::NAN).is_err());
        assert!(words_for_number(f64::INFINITY).is_err());
    }
}
