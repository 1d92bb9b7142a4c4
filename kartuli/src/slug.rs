//! Slug generation: substitution scan, optional transliteration, and the
//! NFKD cleanup pipeline.

use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use kartuli_data::{georgian_substitute, latin_substitute};

use crate::error::Error;
use crate::scheme::Romanizer;

lazy_static! {
    /// Everything that is not a word character, whitespace, or hyphen.
    static ref NON_WORD: Regex = Regex::new(r"[^\w\s-]").unwrap();
    /// Runs of hyphens and whitespace, collapsed to one hyphen.
    static ref SEPARATOR_RUN: Regex = Regex::new(r"[-\s]+").unwrap();
}

/// Which substitution table the slug scan consults.
///
/// Exactly one table applies per call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SlugTable {
    /// Known Unicode symbols to their ASCII spellings.
    #[default]
    Latin,
    /// Other Georgian script forms (Asomtavruli, Mtavruli, Nuskhuri) to
    /// Mkhedruli.
    Georgian,
}

/// Options for [`Romanizer::slugify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugOptions {
    /// Convert Georgian letters to Latin through the alphabet map before
    /// cleanup.
    pub transliterate: bool,
    /// ASCII-lowercase the result after substitution, before cleanup.
    pub lowercase: bool,
    /// Run the final cleanup: strip non-word characters, trim, collapse
    /// separator runs to single hyphens. Off, the substituted (and cased)
    /// string is returned as-is, which is useful for previewing the
    /// intermediate transformation.
    pub collapse: bool,
    /// Substitution table consulted for characters outside the ASCII-safe
    /// set.
    pub table: SlugTable,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            transliterate: false,
            lowercase: false,
            collapse: true,
            table: SlugTable::Latin,
        }
    }
}

impl Romanizer {
    /// Build a URL-safe slug from `text`.
    ///
    /// Characters the selected substitution table does not cover pass
    /// through the scan untouched; scripts with no table entries (CJK, for
    /// one) therefore survive into the slug rather than being dropped.
    pub fn slugify(&self, text: &str, options: &SlugOptions) -> String {
        let substituted = self.substitute(text, options);
        let cased = if options.lowercase {
            substituted.to_ascii_lowercase()
        } else {
            substituted
        };
        if !options.collapse {
            return cased;
        }

        // NFKD splits accented letters from their marks; dropping the marks
        // leaves the base letters. Letters with no decomposition come out
        // of the iterator unchanged.
        let folded: String = cased.nfkd().filter(|ch| !is_combining_mark(*ch)).collect();
        let stripped = NON_WORD.replace_all(&folded, "");
        let trimmed = stripped.trim_matches(|ch: char| ch.is_whitespace() || ch == '-');
        SEPARATOR_RUN.replace_all(trimmed, "-").into_owned()
    }

    /// Decode `bytes` as UTF-8, then slugify.
    ///
    /// # Errors
    /// Fails with [`Error::Encoding`] when `bytes` is not valid UTF-8.
    pub fn slugify_bytes(&self, bytes: &[u8], options: &SlugOptions) -> Result<String, Error> {
        let text = std::str::from_utf8(bytes)?;
        Ok(self.slugify(text, options))
    }

    /// Single pass over the input characters. ASCII alphanumerics,
    /// whitespace, and hyphens are kept as-is; everything else goes through
    /// the selected substitution table and, when enabled, the alphabet
    /// map.
    fn substitute(&self, text: &str, options: &SlugOptions) -> String {
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            if ch.is_ascii_alphanumeric() || ch.is_whitespace() || ch == '-' {
                out.push(ch);
                continue;
            }
            self.substitute_char(ch, options, &mut out);
        }
        out
    }

    fn substitute_char(&self, ch: char, options: &SlugOptions, out: &mut String) {
        let ch = match options.table {
            SlugTable::Georgian => georgian_substitute(ch).unwrap_or(ch),
            SlugTable::Latin => {
                if let Some(ascii) = latin_substitute(ch) {
                    out.push_str(ascii);
                    return;
                }
                ch
            }
        };
        if options.transliterate {
            if let Some(latin) = self.to_latin.get(&ch) {
                out.push_str(latin);
                return;
            }
        }
        out.push(ch);
    }
}
