//! Loading custom romanization schemes from TOML files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use kartuli_data::SchemeDef;
use log::info;

use crate::scheme::Romanizer;

/// Build a [`Romanizer`] from a TOML scheme file.
///
/// The file carries a [`SchemeDef`]: an optional `name` and a `letters`
/// array paired positionally with the Georgian alphabet.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or scheme validation.
pub fn load_scheme(path: &Path) -> Result<Romanizer> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("while reading scheme file '{}'", path.display()))?;
    let def: SchemeDef = toml::from_str(&raw)
        .with_context(|| format!("while parsing scheme file '{}'", path.display()))?;
    let romanizer =
        Romanizer::from_def(&def).context("while building romanizer from scheme definition")?;
    info!(
        "loaded romanization scheme '{}' with {} letters",
        def.name.as_deref().unwrap_or("unnamed"),
        def.letters.len()
    );
    Ok(romanizer)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_scheme(letters: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file ok");
        writeln!(file, "name = \"test scheme\"").expect("write ok");
        writeln!(file, "letters = [{letters}]").expect("write ok");
        file
    }

    #[test]
    fn scheme_file_builds_a_romanizer() {
        let letters = kartuli_data::NATIONAL
            .iter()
            .map(|l| format!("\"{l}\""))
            .collect::<Vec<_>>()
            .join(", ");
        let file = write_scheme(&letters);
        let romanizer = load_scheme(file.path()).expect("load ok");
        assert_eq!(romanizer.to_latin("ანი"), "ani");
    }

    #[test]
    fn short_scheme_file_is_rejected() {
        let file = write_scheme("\"a\", \"b\"");
        let err = load_scheme(file.path()).expect_err("short scheme should fail");
        assert!(err.to_string().contains("romanizer"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_scheme(Path::new("no/such/scheme.toml")).expect_err("missing file");
        assert!(err.to_string().contains("while reading scheme file"));
    }
}
