//! Rust bindings for the `tree-sitter-wfg` grammar.
//!
//! wfg describes synthetic traffic scenarios: the streams to generate, the
//! events to inject into them, and the detection rates expected back. This
//! crate links the generated parser and exposes it as a `tree_sitter::Language`.
//!
//! ```
//! let mut parser = tree_sitter_wfg::new_parser().expect("Error loading Wfg grammar");
//! let tree = parser.parse("scenario smoke { traffic {} }", None).unwrap();
//! assert_eq!(tree.root_node().kind(), "source_file");
//! ```

use tree_sitter::Language;

mod load;

pub use load::{check_node_kinds, check_version, load, new_parser, LoadError};

extern "C" {
    fn tree_sitter_wfg() -> Language;
}

/// Returns the Tree-sitter [`Language`] for this grammar.
///
/// The handle is not checked against the linked runtime; use [`load`] or
/// [`new_parser`] for that.
pub fn language() -> Language {
    unsafe { tree_sitter_wfg() }
}

/// The content of the [`node-types.json`][] file for this grammar.
///
/// [`node-types.json`]: https://tree-sitter.github.io/tree-sitter/using-parsers#static-node-types
pub const NODE_TYPES: &str = include_str!("../../src/node-types.json");

/// The syntax highlighting query for this grammar.
pub const HIGHLIGHTS_QUERY: &str = include_str!("../../queries/highlights.scm");
