//! `Romanizer` construction and the positional alphabet-pairing maps.

use std::collections::HashMap;

use kartuli_data::{MKHEDRULI, NATIONAL, SchemeDef};
use log::debug;

use crate::error::Error;

/// Bidirectional Georgian <-> Latin mapping engine.
///
/// A `Romanizer` pairs the fixed Mkhedruli alphabet with a romanization
/// scheme, position by position, and holds both lookup maps. The maps are
/// built once here and never mutated afterward, so a shared `Romanizer`
/// can serve lookups from any number of threads.
#[derive(Debug, Clone)]
pub struct Romanizer {
    letters: Vec<String>,
    pub(crate) to_latin: HashMap<char, String>,
    pub(crate) to_georgian: HashMap<char, char>,
}

impl Romanizer {
    /// Romanizer for the default national scheme.
    pub fn national() -> Self {
        Self::build(NATIONAL.iter().map(|letter| (*letter).to_string()).collect())
    }

    /// Romanizer with custom romanization letters, one per Georgian letter.
    ///
    /// # Errors
    /// Fails when fewer than 33 letters are supplied, or when any letter is
    /// empty.
    pub fn with_letters(letters: Vec<String>) -> Result<Self, Error> {
        validate_letters(&letters)?;
        Ok(Self::build(letters))
    }

    /// Romanizer from a comma-separated letter list, e.g. `"a,b,g,d,..."`.
    ///
    /// # Errors
    /// Same validation as [`Romanizer::with_letters`].
    pub fn from_comma_list(list: &str) -> Result<Self, Error> {
        Self::with_letters(list.split(',').map(|token| token.trim().to_string()).collect())
    }

    /// Romanizer from a scheme definition (usually loaded from a TOML file).
    ///
    /// # Errors
    /// Same validation as [`Romanizer::with_letters`].
    pub fn from_def(def: &SchemeDef) -> Result<Self, Error> {
        Self::with_letters(def.letters.clone())
    }

    fn build(letters: Vec<String>) -> Self {
        let alphabet_len = MKHEDRULI.chars().count();
        if letters.len() > alphabet_len {
            debug!(
                "scheme has {} letters; the {} past the alphabet are unused",
                letters.len(),
                letters.len() - alphabet_len
            );
        }

        let mut to_latin = HashMap::with_capacity(alphabet_len);
        let mut to_georgian = HashMap::with_capacity(alphabet_len);
        for (georgian, latin) in MKHEDRULI.chars().zip(&letters) {
            to_latin.insert(georgian, latin.clone());
            // Reverse lookups happen one input character at a time, so only
            // single-character letters can ever match; on duplicate letters
            // the later pairing wins.
            let mut chars = latin.chars();
            if let (Some(first), None) = (chars.next(), chars.next()) {
                to_georgian.insert(first, georgian);
            }
        }

        Self {
            letters,
            to_latin,
            to_georgian,
        }
    }

    /// The fixed 33-letter Mkhedruli alphabet.
    pub fn georgian_alphabet(&self) -> &'static str {
        MKHEDRULI
    }

    /// The romanization letters paired with the alphabet.
    pub fn latin_letters(&self) -> &[String] {
        &self.letters
    }

    /// Georgian letter -> romanization letter.
    pub fn to_latin_map(&self) -> &HashMap<char, String> {
        &self.to_latin
    }

    /// Latin letter -> Georgian letter (single-character letters only).
    pub fn to_georgian_map(&self) -> &HashMap<char, char> {
        &self.to_georgian
    }
}

impl Default for Romanizer {
    fn default() -> Self {
        Self::national()
    }
}

fn validate_letters(letters: &[String]) -> Result<(), Error> {
    let expected = MKHEDRULI.chars().count();
    if letters.len() < expected {
        return Err(Error::SchemeTooShort {
            expected,
            actual: letters.len(),
        });
    }
    if let Some(position) = letters.iter().position(|letter| letter.trim().is_empty()) {
        return Err(Error::EmptyLetter { position });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn national_pairs_position_by_position() {
        let romanizer = Romanizer::national();
        assert_eq!(romanizer.to_latin_map().get(&'ა').map(String::as_str), Some("a"));
        assert_eq!(romanizer.to_latin_map().get(&'ჟ').map(String::as_str), Some("zh"));
        assert_eq!(romanizer.to_latin_map().get(&'ყ').map(String::as_str), Some("y"));
        assert_eq!(romanizer.to_latin_map().get(&'ჰ').map(String::as_str), Some("h"));
    }

    #[test]
    fn reverse_map_resolves_duplicates_to_later_pairing() {
        let romanizer = Romanizer::national();
        // თ and ტ both romanize as "t"; ტ sits later in the alphabet.
        assert_eq!(romanizer.to_georgian_map().get(&'t'), Some(&'ტ'));
        assert_eq!(romanizer.to_georgian_map().get(&'p'), Some(&'ფ'));
        assert_eq!(romanizer.to_georgian_map().get(&'k'), Some(&'ქ'));
    }

    #[test]
    fn reverse_map_skips_multi_character_letters() {
        let romanizer = Romanizer::national();
        assert_eq!(romanizer.to_georgian_map().get(&'z'), Some(&'ზ'));
        // "zh", "gh", "sh" etc. have no single-character reverse entry.
        assert!(!romanizer.to_georgian_map().values().any(|ka| *ka == 'ჟ'));
    }

    #[test]
    fn short_scheme_is_rejected() {
        let err = Romanizer::from_comma_list("a,b,c").expect_err("should reject 3 letters");
        assert!(matches!(
            err,
            Error::SchemeTooShort { expected: 33, actual: 3 }
        ));
    }

    #[test]
    fn empty_letter_is_rejected() {
        let mut letters: Vec<String> = (0..33).map(|n| format!("l{n}")).collect();
        letters[7] = "  ".to_string();
        let err = Romanizer::with_letters(letters).expect_err("should reject empty letter");
        assert!(matches!(err, Error::EmptyLetter { position: 7 }));
    }

    #[test]
    fn comma_list_builds_a_full_scheme() {
        let list = NATIONAL.join(",");
        let romanizer = Romanizer::from_comma_list(&list).expect("comma list ok");
        assert_eq!(romanizer.latin_letters().len(), 33);
        assert_eq!(romanizer.to_latin_map().get(&'ღ').map(String::as_str), Some("gh"));
    }

    #[test]
    fn extra_letters_beyond_the_alphabet_are_ignored() {
        let mut letters: Vec<String> = NATIONAL.iter().map(|l| (*l).to_string()).collect();
        letters.push("extra".to_string());
        let romanizer = Romanizer::with_letters(letters).expect("long scheme ok");
        assert_eq!(romanizer.to_latin_map().len(), 33);
        assert!(!romanizer.to_latin_map().values().any(|l| l == "extra"));
    }
}
