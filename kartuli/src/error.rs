//! Error types for the kartuli toolkit.

use std::str::Utf8Error;

use thiserror::Error;

/// Errors surfaced by `Romanizer` construction and byte-input decoding.
///
/// Lookup misses during transliteration or substitution are never errors;
/// they resolve through the caller's fallback policy and always produce a
/// value.
#[derive(Debug, Error)]
pub enum Error {
    /// A custom scheme supplied fewer letters than the Georgian alphabet
    /// has.
    #[error("romanization scheme has {actual} letters, needs at least {expected}")]
    SchemeTooShort { expected: usize, actual: usize },
    /// A custom scheme contains an empty or whitespace-only letter.
    #[error("romanization scheme letter at position {position} is empty")]
    EmptyLetter { position: usize },
    /// Byte input could not be decoded as UTF-8.
    #[error("input is not valid UTF-8: {0}")]
    Encoding(#[from] Utf8Error),
}
