//! Checked construction of a usable [`Language`] from a raw grammar handle.
//!
//! [`crate::language`] hands out whatever the generated parser tables describe.
//! [`load`] decides whether the linked tree-sitter library can drive those
//! tables.

use thiserror::Error;
use tree_sitter::{
    Language, LanguageError, Parser, LANGUAGE_VERSION, MIN_COMPATIBLE_LANGUAGE_VERSION,
};

/// Errors that can occur when loading a grammar into the runtime.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LoadError {
    #[error("language ABI version {version} is outside the supported range {min}..={max}")]
    UnsupportedVersion {
        version: usize,
        min: usize,
        max: usize,
    },

    #[error("language defines no node kinds")]
    Empty,

    #[error("parser rejected language: {0}")]
    Rejected(#[from] LanguageError),
}

/// Wraps a raw grammar handle, returning it only if this runtime can use it.
pub fn load(language: Language) -> Result<Language, LoadError> {
    if let Err(err) = validate(&language) {
        tracing::warn!(%err, "rejecting grammar");
        return Err(err);
    }

    tracing::debug!(
        version = language.version(),
        node_kinds = language.node_kind_count(),
        fields = language.field_count(),
        "loaded grammar"
    );
    Ok(language)
}

/// Returns a [`Parser`] already configured for the wfg grammar.
pub fn new_parser() -> Result<Parser, LoadError> {
    let language = load(crate::language())?;
    let mut parser = Parser::new();
    parser.set_language(&language)?;
    Ok(parser)
}

/// Checks an ABI version against the range this tree-sitter build accepts.
pub fn check_version(version: usize) -> Result<(), LoadError> {
    if (MIN_COMPATIBLE_LANGUAGE_VERSION..=LANGUAGE_VERSION).contains(&version) {
        Ok(())
    } else {
        Err(LoadError::UnsupportedVersion {
            version,
            min: MIN_COMPATIBLE_LANGUAGE_VERSION,
            max: LANGUAGE_VERSION,
        })
    }
}

/// Checks that a language defines node kinds beyond the builtin end symbol.
pub fn check_node_kinds(count: usize) -> Result<(), LoadError> {
    // Only the builtin end symbol means the tables were never filled in.
    if count <= 1 {
        return Err(LoadError::Empty);
    }
    Ok(())
}

fn validate(language: &Language) -> Result<(), LoadError> {
    check_version(language.version())?;
    check_node_kinds(language.node_kind_count())
}
