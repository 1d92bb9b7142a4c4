//! Serde definitions for romanization scheme files.

use serde::{Deserialize, Serialize};

/// A custom romanization scheme as described in a TOML file.
///
/// `letters` pairs positionally with the Mkhedruli alphabet and must have
/// at least 33 entries; the toolkit validates that when it builds its
/// maps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeDef {
    /// Display name of the scheme.
    #[serde(default)]
    pub name: Option<String>,
    /// Romanization letters, one per Georgian letter.
    pub letters: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_def_roundtrips_through_toml() {
        let def = SchemeDef {
            name: Some("iso-9984".to_string()),
            letters: vec!["a".to_string(), "b".to_string()],
        };
        let raw = toml::to_string(&def).expect("serialize ok");
        let back: SchemeDef = toml::from_str(&raw).expect("parse ok");
        assert_eq!(back, def);
    }

    #[test]
    fn name_is_optional() {
        let def: SchemeDef = toml::from_str("letters = [\"a\", \"b\"]").expect("parse ok");
        assert_eq!(def.name, None);
        assert_eq!(def.letters.len(), 2);
    }
}
