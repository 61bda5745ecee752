//! Error types for nested CSS expansion.
//!
//! The scanner never fails: unbalanced braces and unterminated strings are
//! absorbed while building the rule tree. The only failure left is a rule tree
//! too deep to flatten.

use thiserror::Error;

/// Errors that can occur while expanding nested CSS.
///
/// # Examples
///
/// ```rust
/// use nestcss::{MAX_NESTING_DEPTH, NestCssError, expand};
///
/// let css = ".a { ".repeat(MAX_NESTING_DEPTH + 1);
/// let err = expand(&css).unwrap_err();
/// assert!(matches!(err, NestCssError::NestingTooDeep { .. }));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NestCssError {
    /// Rules are nested deeper than the flattener will recurse.
    #[error("rules nested {depth} levels deep, the limit is {limit}")]
    NestingTooDeep { depth: usize, limit: usize },
}

pub type Result<T> = std::result::Result<T, NestCssError>;
