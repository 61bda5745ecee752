//! Character scanner that builds a [`RuleTree`] from nested CSS.
//!
//! The scanner walks the source once, left to right. Text accumulates in a
//! buffer until a structural character (`{`, `}` or `;`) decides what it was:
//! a selector, a final declaration, or a terminated declaration. Quoted strings
//! suspend structural handling so `content: "a{b};"` stays a single declaration.

use crate::parser::tree::{NodeId, RuleTree};

/// Lexical state of the scanner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanState {
    Normal,
    /// Inside a string literal opened by the given quote character.
    InString(char),
}

/// Single-pass tree builder.
///
/// # Examples
///
/// ```
/// use nestcss::parser::Scanner;
///
/// let tree = Scanner::new(".a { color: red; &:hover { color: blue; } }").scan();
/// assert_eq!(tree.rule_count(), 2);
/// ```
pub struct Scanner<'a> {
    input: &'a str,
    tree: RuleTree,
    stack: Vec<NodeId>,
    buffer: String,
    state: ScanState,
    /// The two characters before the one being scanned, most recent first.
    prev: Option<char>,
    prev2: Option<char>,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over already comment-stripped input.
    pub fn new(input: &'a str) -> Self {
        let tree = RuleTree::new();
        let root = tree.root();
        Self {
            input,
            tree,
            stack: vec![root],
            buffer: String::new(),
            state: ScanState::Normal,
            prev: None,
            prev2: None,
        }
    }

    /// Consumes the input and returns the finished tree.
    ///
    /// Blocks still open at the end of input are left as they are and any
    /// unterminated buffered text is dropped.
    pub fn scan(mut self) -> RuleTree {
        let input = self.input;
        for c in input.chars() {
            self.step(c);
            self.prev2 = self.prev;
            self.prev = Some(c);
        }

        if !self.buffer.trim().is_empty() {
            log::trace!("dropping unterminated text at end of input: {:?}", self.buffer.trim());
        }
        if self.stack.len() > 1 {
            log::trace!("{} block(s) left open at end of input", self.stack.len() - 1);
        }

        self.tree
    }

    fn current(&self) -> NodeId {
        // The root is never popped.
        self.stack[self.stack.len() - 1]
    }

    fn step(&mut self, c: char) {
        match self.state {
            ScanState::InString(quote) => {
                if c == quote && !self.quote_is_escaped() {
                    self.state = ScanState::Normal;
                }
                self.buffer.push(c);
            }
            ScanState::Normal => match c {
                '"' | '\'' => {
                    self.state = ScanState::InString(c);
                    self.buffer.push(c);
                }
                '{' => self.open_block(),
                '}' => self.close_block(),
                ';' => {
                    self.buffer.push(c);
                    self.flush_property();
                }
                _ => self.buffer.push(c),
            },
        }
    }

    /// Only looks two characters back, so `\\\"` is read as an unescaped quote.
    fn quote_is_escaped(&self) -> bool {
        self.prev == Some('\\') && self.prev2 != Some('\\')
    }

    fn open_block(&mut self) {
        let selector = self.take_buffer();
        let parent = self.current();
        let child = self.tree.add_child(parent, selector);
        self.stack.push(child);
    }

    fn close_block(&mut self) {
        self.flush_property();
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    fn flush_property(&mut self) {
        let property = self.take_buffer();
        if !property.is_empty() {
            let current = self.current();
            self.tree.add_property(current, property);
        }
    }

    /// Returns the trimmed buffer and clears it.
    fn take_buffer(&mut self) -> String {
        let text = self.buffer.trim().to_string();
        self.buffer.clear();
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(input: &str) -> RuleTree {
        Scanner::new(input).scan()
    }

    #[test]
    fn scan_single_rule() {
        let tree = scan(".a { color: red; margin: 0 }");
        let (_, a) = tree.children(tree.root()).next().unwrap();
        assert_eq!(a.selector, ".a");
        assert_eq!(a.properties, vec!["color: red;", "margin: 0"]);
    }

    #[test]
    fn scan_string_keeps_structural_chars() {
        let tree = scan(r#".a { content: "a;b{c}"; }"#);
        assert_eq!(tree.rule_count(), 1);
        let (_, a) = tree.children(tree.root()).next().unwrap();
        assert_eq!(a.properties, vec![r#"content: "a;b{c}";"#]);
    }

    #[test]
    fn scan_single_quoted_string() {
        let tree = scan(".a { content: '}'; }");
        let (_, a) = tree.children(tree.root()).next().unwrap();
        assert_eq!(a.properties, vec!["content: '}';"]);
    }

    #[test]
    fn scan_other_quote_inside_string() {
        let tree = scan(r#".a { content: "it's"; }"#);
        let (_, a) = tree.children(tree.root()).next().unwrap();
        assert_eq!(a.properties, vec![r#"content: "it's";"#]);
    }

    #[test]
    fn scan_escaped_quote_stays_in_string() {
        let tree = scan(r#".a { content: "x\";y"; }"#);
        let (_, a) = tree.children(tree.root()).next().unwrap();
        assert_eq!(a.properties, vec![r#"content: "x\";y";"#]);
    }

    #[test]
    fn scan_escaped_backslash_closes_string() {
        let tree = scan(r#".a { content: "x\\"; color: red; }"#);
        let (_, a) = tree.children(tree.root()).next().unwrap();
        assert_eq!(a.properties, vec![r#"content: "x\\";"#, "color: red;"]);
    }

    #[test]
    fn scan_extra_close_brace_is_absorbed() {
        let tree = scan("} .a { color: red; } }");
        assert_eq!(tree.rule_count(), 1);
    }

    #[test]
    fn scan_unterminated_text_is_dropped() {
        let tree = scan(".a { color: red; margin: 0");
        let (_, a) = tree.children(tree.root()).next().unwrap();
        assert_eq!(a.properties, vec!["color: red;"]);
    }

    #[test]
    fn scan_top_level_declaration_goes_to_root() {
        let tree = scan("color: red;");
        assert_eq!(tree.node(tree.root()).properties, vec!["color: red;"]);
    }

    #[test]
    fn scan_unterminated_string_swallows_rest() {
        let tree = scan(r#".a { content: "abc; } .b { color: red; }"#);
        assert_eq!(tree.rule_count(), 1);
        let (_, a) = tree.children(tree.root()).next().unwrap();
        assert!(a.properties.is_empty());
    }
}
