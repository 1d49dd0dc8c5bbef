//! Password Generator Module
//!
//! Builds random passwords from a character set selected by complexity tier.

use rand::Rng;

use crate::error::{AppError, Result};

// == Alphabets ==
pub const DIGITS: &str = "0123456789";
pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const SYMBOLS: &str = "!@#$%^&*()_-+=<>?/{}[]|";

// == Bounds ==
pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 30;
pub const MIN_COMPLEXITY: u8 = 1;
pub const MAX_COMPLEXITY: u8 = 3;

// == Complexity ==
/// Character classes eligible for a generated password.
///
/// Each tier is a superset of the one below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Complexity {
    /// Tier 1: digits only
    Digits,
    /// Tier 2: digits and letters
    Alphanumeric,
    /// Tier 3: digits, letters and symbols
    Symbols,
}

impl Complexity {
    /// Returns the alphabet for this tier as raw bytes.
    pub fn alphabet(self) -> Vec<u8> {
        let mut chars = DIGITS.as_bytes().to_vec();
        if self >= Complexity::Alphanumeric {
            chars.extend_from_slice(LETTERS.as_bytes());
        }
        if self >= Complexity::Symbols {
            chars.extend_from_slice(SYMBOLS.as_bytes());
        }
        chars
    }

    /// Numeric tier, 1 through 3.
    pub fn tier(self) -> u8 {
        match self {
            Complexity::Digits => 1,
            Complexity::Alphanumeric => 2,
            Complexity::Symbols => 3,
        }
    }
}

impl TryFrom<u8> for Complexity {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Complexity::Digits),
            2 => Ok(Complexity::Alphanumeric),
            3 => Ok(Complexity::Symbols),
            other => Err(AppError::Validation(format!(
                "Complexity must be between {} and {}, got {}",
                MIN_COMPLEXITY, MAX_COMPLEXITY, other
            ))),
        }
    }
}

// == Validation ==
/// Checks generation parameters before anything is generated.
///
/// Accepts raw wire integers; negative or oversized values are rejected.
pub fn validate_generation_params(length: i64, complexity: i64) -> Result<(usize, Complexity)> {
    if length < MIN_LENGTH as i64 || length > MAX_LENGTH as i64 {
        return Err(AppError::Validation(format!(
            "Password length must be between {} and {} characters, got {}",
            MIN_LENGTH, MAX_LENGTH, length
        )));
    }
    let tier = u8::try_from(complexity).map_err(|_| {
        AppError::Validation(format!(
            "Complexity must be between {} and {}, got {}",
            MIN_COMPLEXITY, MAX_COMPLEXITY, complexity
        ))
    })?;
    Ok((length as usize, Complexity::try_from(tier)?))
}

// == Generate ==
/// Generates a password of exactly `length` characters for the given tier.
///
/// Draws from the thread-local CSPRNG. Bounds are the caller's concern.
pub fn generate(length: usize, complexity: Complexity) -> String {
    let alphabet = complexity.alphabet();
    let mut rng = rand::rng();
    (0..length)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn in_alphabet(password: &str, complexity: Complexity) -> bool {
        let alphabet = complexity.alphabet();
        password.bytes().all(|b| alphabet.contains(&b))
    }

    #[test]
    fn test_digits_only_password() {
        let password = generate(8, Complexity::Digits);
        assert_eq!(password.len(), 8);
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_symbols_password_uses_full_alphabet() {
        let password = generate(10, Complexity::Symbols);
        assert_eq!(password.chars().count(), 10);
        assert!(in_alphabet(&password, Complexity::Symbols));
    }

    #[test]
    fn test_alphabets_are_nested() {
        let digits = Complexity::Digits.alphabet();
        let alnum = Complexity::Alphanumeric.alphabet();
        let full = Complexity::Symbols.alphabet();

        assert_eq!(digits.len(), 10);
        assert_eq!(alnum.len(), 62);
        assert_eq!(full.len(), 62 + SYMBOLS.len());
        assert!(digits.iter().all(|b| alnum.contains(b)));
        assert!(alnum.iter().all(|b| full.contains(b)));
    }

    #[test]
    fn test_complexity_try_from() {
        assert_eq!(Complexity::try_from(1).unwrap(), Complexity::Digits);
        assert_eq!(Complexity::try_from(2).unwrap(), Complexity::Alphanumeric);
        assert_eq!(Complexity::try_from(3).unwrap(), Complexity::Symbols);
        assert!(matches!(Complexity::try_from(0), Err(AppError::Validation(_))));
        assert!(matches!(Complexity::try_from(4), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_validate_boundaries() {
        assert!(validate_generation_params(4, 1).is_ok());
        assert!(validate_generation_params(30, 3).is_ok());
        assert!(matches!(
            validate_generation_params(3, 2),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            validate_generation_params(31, 2),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            validate_generation_params(8, 0),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            validate_generation_params(8, 4),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            validate_generation_params(8, 259),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            validate_generation_params(-8, 2),
            Err(AppError::Validation(_))
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_length_and_alphabet(length in 4usize..=30, tier in 1u8..=3) {
            let complexity = Complexity::try_from(tier).unwrap();
            let password = generate(length, complexity);
            prop_assert_eq!(password.len(), length);
            prop_assert!(in_alphabet(&password, complexity));
        }
    }
}
