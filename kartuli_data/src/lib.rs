//! Shared alphabet and substitution-table data for the kartuli toolkit.

pub mod alphabets;
pub mod defs;
pub mod tables;

pub use alphabets::{MKHEDRULI, NATIONAL};
pub use defs::SchemeDef;
pub use tables::{georgian_substitute, latin_substitute};
