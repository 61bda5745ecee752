//! Nested rule flattening.
//!
//! This module walks a [`RuleTree`] and emits flat CSS, one output line per
//! string, with every nested selector fully resolved.
//!
//! ## Nesting Syntax
//!
//! ```css
//! .button {
//!     color: white;
//!     &:hover { background: blue; }
//!     .icon { width: 1em; }
//!     @media print { display: none; }
//! }
//! ```
//!
//! This flattens to:
//!
//! ```css
//! .button {
//!   color: white;
//! }
//! .button:hover {
//!   background: blue;
//! }
//! .button .icon {
//!   width: 1em;
//! }
//! @media print {
//!   .button {
//!     display: none;
//!   }
//! }
//! ```
//!
//! ## Flattening Rules
//!
//! - `&` is replaced in place by the parent selector, no space inserted
//! - Nested without `&` implies the descendant combinator (a single space)
//! - At-rules are emitted verbatim and pass the parent selector through to
//!   their contents; their own declarations are wrapped in that selector
//! - A rule with no declarations of its own emits no block
//! - Comma-separated parents are joined as plain text, not multiplied out:
//!   `.a, .b { &:hover {} }` composes to `.a, .b:hover`

use crate::error::{NestCssError, Result};
use crate::parser::tree::{NodeId, RuleTree};

/// Deepest rule nesting [`flatten`] will follow.
pub const MAX_NESTING_DEPTH: usize = 512;

const INDENT: &str = "  ";

/// Flattens a rule tree into lines of CSS, in depth-first source order.
///
/// # Examples
///
/// ```
/// use nestcss::parser::{flatten, parse};
///
/// let lines = flatten(&parse(".a { .b { color: blue; } }")).unwrap();
/// assert_eq!(lines, vec![".a .b {", "  color: blue;", "}"]);
/// ```
pub fn flatten(tree: &RuleTree) -> Result<Vec<String>> {
    let mut output = Vec::new();
    emit(tree, tree.root(), "", 0, &mut output)?;
    Ok(output)
}

fn emit(
    tree: &RuleTree,
    id: NodeId,
    prefix: &str,
    depth: usize,
    output: &mut Vec<String>,
) -> Result<()> {
    if depth > MAX_NESTING_DEPTH {
        return Err(NestCssError::NestingTooDeep {
            depth,
            limit: MAX_NESTING_DEPTH,
        });
    }

    if tree.is_root(id) {
        return emit_children(tree, id, prefix, depth, output);
    }

    let node = tree.node(id);

    if node.is_at_rule() {
        output.push(format!("{} {{", node.selector));
        if !node.properties.is_empty() {
            if prefix.is_empty() {
                for property in &node.properties {
                    output.push(format!("{INDENT}{property}"));
                }
            } else {
                // `.box { @media x { color: red } }` => `@media x { .box { color: red } }`
                output.push(format!("{INDENT}{prefix} {{"));
                for property in &node.properties {
                    output.push(format!("{INDENT}{INDENT}{property}"));
                }
                output.push(format!("{INDENT}}}"));
            }
        }
        emit_children(tree, id, prefix, depth, output)?;
        output.push("}".to_string());
        return Ok(());
    }

    let selector = compose_selector(prefix, &node.selector);
    if !node.properties.is_empty() {
        output.push(format!("{selector} {{"));
        for property in &node.properties {
            output.push(format!("{INDENT}{property}"));
        }
        output.push("}".to_string());
    }

    emit_children(tree, id, &selector, depth, output)
}

fn emit_children(
    tree: &RuleTree,
    id: NodeId,
    prefix: &str,
    depth: usize,
    output: &mut Vec<String>,
) -> Result<()> {
    for &child in &tree.node(id).children {
        emit(tree, child, prefix, depth + 1, output)?;
    }
    Ok(())
}

/// Resolves a nested selector against the selector of its enclosing rule.
///
/// ```
/// use nestcss::parser::flatten::compose_selector;
///
/// assert_eq!(compose_selector("", ".a"), ".a");
/// assert_eq!(compose_selector(".btn", "&:hover"), ".btn:hover");
/// assert_eq!(compose_selector(".list", "li"), ".list li");
/// assert_eq!(compose_selector(".list", "> li"), ".list > li");
/// ```
pub fn compose_selector(prefix: &str, selector: &str) -> String {
    if prefix.is_empty() {
        selector.to_string()
    } else if let Some(rest) = selector.strip_prefix('&') {
        format!("{prefix}{rest}")
    } else {
        format!("{prefix} {selector}")
    }
}
