//! Character-by-character transliteration with an explicit fallback
//! policy.

use crate::scheme::Romanizer;

/// Which way to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Georgian script to romanization letters.
    ToLatin,
    /// Latin letters back to Georgian script.
    ToGeorgian,
}

/// What to emit for a character that has no entry in the active map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Fallback {
    /// Emit the original character unchanged.
    #[default]
    PassThrough,
    /// Emit a single space.
    Space,
    /// Emit a caller-supplied replacement, which may be more than one
    /// character.
    Literal(String),
}

impl Romanizer {
    /// Convert `text` between the Georgian and Latin alphabets.
    ///
    /// The input is walked one Unicode scalar value at a time; lookups are
    /// case-sensitive. A character without a map entry never fails -- it
    /// resolves through `fallback`.
    pub fn transliterate(&self, text: &str, direction: Direction, fallback: &Fallback) -> String {
        // Georgian output is three UTF-8 bytes per letter, so reserve ahead
        // for that direction.
        let mut out = match direction {
            Direction::ToLatin => String::with_capacity(text.len()),
            Direction::ToGeorgian => String::with_capacity(text.len().saturating_mul(3)),
        };

        for ch in text.chars() {
            match direction {
                Direction::ToLatin => match self.to_latin.get(&ch) {
                    Some(latin) => out.push_str(latin),
                    None => push_fallback(&mut out, ch, fallback),
                },
                Direction::ToGeorgian => match self.to_georgian.get(&ch) {
                    Some(georgian) => out.push(*georgian),
                    None => push_fallback(&mut out, ch, fallback),
                },
            }
        }

        out
    }

    /// Georgian -> Latin with the pass-through policy.
    pub fn to_latin(&self, text: &str) -> String {
        self.transliterate(text, Direction::ToLatin, &Fallback::PassThrough)
    }

    /// Latin -> Georgian with the pass-through policy.
    pub fn to_georgian(&self, text: &str) -> String {
        self.transliterate(text, Direction::ToGeorgian, &Fallback::PassThrough)
    }
}

fn push_fallback(out: &mut String, original: char, fallback: &Fallback) {
    match fallback {
        Fallback::PassThrough => out.push(original),
        Fallback::Space => out.push(' '),
        Fallback::Literal(value) => out.push_str(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn georgian_text_romanizes() {
        let romanizer = Romanizer::national();
        assert_eq!(romanizer.to_latin("მე მიყვარს ანი"), "me miyvars ani");
    }

    #[test]
    fn latin_text_converts_back() {
        let romanizer = Romanizer::national();
        // "sh" is a digraph in the forward direction only; per-character
        // conversion maps s and h separately.
        assert_eq!(romanizer.to_georgian("lasha da ana"), "ლასჰა და ანა");
    }

    #[test]
    fn space_fallback_blanks_unmapped_characters() {
        let romanizer = Romanizer::national();
        let converted =
            romanizer.transliterate("I Love You Python And Django", Direction::ToGeorgian, &Fallback::Space);
        assert_eq!(converted, "   ოვე  ოუ  ყტჰონ  ნდ  ჯანგო");
    }

    #[test]
    fn literal_fallback_may_be_multi_character() {
        let romanizer = Romanizer::national();
        let fallback = Fallback::Literal("?!".to_string());
        assert_eq!(
            romanizer.transliterate("აQ", Direction::ToLatin, &fallback),
            "a?!"
        );
    }

    #[test]
    fn empty_input_stays_empty() {
        let romanizer = Romanizer::national();
        assert_eq!(romanizer.to_latin(""), "");
        assert_eq!(romanizer.to_georgian(""), "");
    }

    #[test]
    fn unmapped_text_passes_through_unchanged() {
        let romanizer = Romanizer::national();
        // None of these characters appear in either alphabet.
        let input = "12,. !? 更新 ΑΒΓ";
        assert_eq!(romanizer.transliterate(input, Direction::ToLatin, &Fallback::PassThrough), input);
    }

    #[test]
    fn lookups_are_case_sensitive() {
        let romanizer = Romanizer::national();
        // Uppercase letters are not map keys; they pass through.
        assert_eq!(romanizer.to_georgian("laSa"), "ლაSა");
    }

    #[test]
    fn mapped_alphabet_round_trips_through_single_char_letters() {
        let romanizer = Romanizer::national();
        for (latin, georgian) in romanizer.to_georgian_map() {
            let there = romanizer.to_georgian(&latin.to_string());
            assert_eq!(there, georgian.to_string());
            let back = romanizer.to_latin(&there);
            assert_eq!(back, latin.to_string());
        }
    }
}
