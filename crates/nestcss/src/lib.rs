//! # nestcss - Nested CSS Expander
//!
//! Expands SCSS-style nested CSS into flat, standard CSS.
//!
//! Rules may be written inside other rules. A nested selector is joined to its
//! parent with a descendant combinator, or substituted in place where it starts
//! with `&`. At-rules such as `@media` may appear at any level. This crate
//! provides:
//!
//! - **Parsing**: Build a [`RuleTree`](parser::RuleTree) from source text,
//!   tolerating unbalanced braces and quoted `{`, `}` and `;`
//! - **Flattening**: Emit flat CSS blocks with fully composed selectors
//! - **Documents**: Rewrite the `<style>` blocks of an HTML document
//!
//! ## Quick Start
//!
//! ```rust
//! use nestcss::expand;
//!
//! let source = r#"
//!     .card {
//!         padding: 8px;
//!         &:hover { color: red; }
//!     }
//! "#;
//!
//! let flat = expand(source).expect("shallow nesting");
//! assert_eq!(
//!     flat,
//!     ".card {\n  padding: 8px;\n}\n.card:hover {\n  color: red;\n}"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`parser`]: Scanner, rule tree and flattener
//! - [`document`]: `<style>` block location and substitution
//! - [`error`]: Error types

pub mod document;
pub mod error;
pub mod parser;

pub use document::{BlockFailure, Substitution, substitute_style_blocks};
pub use error::NestCssError;
pub use parser::{MAX_NESTING_DEPTH, flatten, parse};

/// Parses and flattens nested CSS, joining the output lines with `\n`.
pub fn expand(source: &str) -> error::Result<String> {
    let tree = parse(source);
    Ok(flatten(&tree)?.join("\n"))
}
