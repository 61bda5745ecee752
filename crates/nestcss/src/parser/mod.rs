//! Nested CSS parsing and flattening.
//!
//! - [`parse`]: Main entry point, strips comments and builds a [`RuleTree`]
//! - [`strip_comments`]: Removes `/* ... */` spans before scanning
//! - [`Scanner`]: The character-level tree builder
//! - [`flatten()`]: Turns a [`RuleTree`] into flat CSS lines
//!
//! ## Submodules
//!
//! - [`scanner`]: String-aware scanner and its [`ScanState`]
//! - [`tree`]: Arena-backed rule tree ([`RuleTree`], [`Node`], [`NodeId`])
//! - [`flatten`]: Selector composition and line emission
//!
//! ## Example
//!
//! ```rust
//! use nestcss::parser::parse;
//!
//! let tree = parse(".card { padding: 4px; .title { font-weight: bold; } }");
//! let (card_id, card) = tree.children(tree.root()).next().unwrap();
//!
//! assert_eq!(card.selector, ".card");
//! assert_eq!(card.properties, vec!["padding: 4px;"]);
//! assert_eq!(tree.node(card_id).children.len(), 1);
//! ```

pub mod flatten;
pub mod scanner;
pub mod tree;

pub use crate::parser::flatten::{MAX_NESTING_DEPTH, flatten};
pub use crate::parser::scanner::{ScanState, Scanner};
pub use crate::parser::tree::{Node, NodeId, ROOT_SELECTOR, RuleTree};

/// Parses nested CSS into a rule tree. Never fails; see [`Scanner::scan`].
pub fn parse(source: &str) -> RuleTree {
    let clean_source = strip_comments(source);
    let tree = Scanner::new(&clean_source).scan();
    log::debug!(
        "parsed {} rule(s), {} level(s) deep",
        tree.rule_count(),
        tree.max_depth()
    );
    tree
}

/// Removes every `/* ... */` span, shortest match first.
///
/// Comment markers inside string literals are removed too, since this runs
/// before the scanner tracks quotes. An unterminated `/*` is kept as text.
pub fn strip_comments(source: &str) -> String {
    let mut clean_source = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = rest.find("/*") {
        let Some(len) = rest[start + 2..].find("*/") else {
            break;
        };
        clean_source.push_str(&rest[..start]);
        rest = &rest[start + 2 + len + 2..];
    }
    clean_source.push_str(rest);

    clean_source
}
