//! `<style>` block substitution in host documents.
//!
//! Finds every `<style ...>` ... `</style>` region of an HTML document
//! (ASCII case-insensitive, shortest body first) and replaces the body with
//! its flattened CSS. The opening and closing tags are kept exactly as written.
//!
//! ```rust
//! use nestcss::document::substitute_style_blocks;
//!
//! let html = "<style media=\"screen\">.a { .b { color: red; } }</style>";
//! let result = substitute_style_blocks(html);
//!
//! assert_eq!(
//!     result.output,
//!     "<style media=\"screen\">\n.a .b {\n  color: red;\n}\n</style>"
//! );
//! assert!(result.failures.is_empty());
//! ```

use crate::error::NestCssError;
use crate::expand;

use nom::{
    IResult,
    bytes::complete::{tag_no_case, take_till},
    character::complete::char,
    combinator::recognize,
    sequence::tuple,
};

const CLOSE_TAG: &str = "</style>";

/// A style block that could not be expanded and was left as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockFailure {
    /// Zero-based position of the block among all matched blocks.
    pub index: usize,
    /// Byte offset of the opening tag in the input document.
    pub offset: usize,
    pub error: NestCssError,
}

/// Result of rewriting a document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Substitution {
    pub output: String,
    /// Blocks that were replaced with flattened CSS.
    pub expanded: usize,
    pub failures: Vec<BlockFailure>,
}

/// A located `<style>` region, as byte ranges into the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct StyleBlock<'a> {
    start: usize,
    end: usize,
    open_tag: &'a str,
    body: &'a str,
    close_tag: &'a str,
}

/// Rewrites the body of every non-blank `<style>` block to flat CSS.
pub fn substitute_style_blocks(document: &str) -> Substitution {
    let mut result = Substitution {
        output: String::with_capacity(document.len()),
        ..Default::default()
    };
    let mut copied_up_to = 0;

    for (index, block) in StyleBlocks::new(document).enumerate() {
        result.output.push_str(&document[copied_up_to..block.start]);
        copied_up_to = block.end;

        if block.body.trim().is_empty() {
            result.output.push_str(&document[block.start..block.end]);
            continue;
        }

        match expand(block.body) {
            Ok(css) => {
                result.output.push_str(block.open_tag);
                result.output.push('\n');
                result.output.push_str(&css);
                result.output.push('\n');
                result.output.push_str(block.close_tag);
                result.expanded += 1;
            }
            Err(error) => {
                log::debug!("leaving style block {index} at byte {} as is: {error}", block.start);
                result.output.push_str(&document[block.start..block.end]);
                result.failures.push(BlockFailure {
                    index,
                    offset: block.start,
                    error,
                });
            }
        }
    }
    result.output.push_str(&document[copied_up_to..]);

    log::debug!(
        "expanded {} style block(s), {} failure(s)",
        result.expanded,
        result.failures.len()
    );
    result
}

/// Iterator over the `<style>` regions of a document, in order.
struct StyleBlocks<'a> {
    document: &'a str,
    pos: usize,
}

impl<'a> StyleBlocks<'a> {
    fn new(document: &'a str) -> Self {
        Self { document, pos: 0 }
    }
}

impl<'a> Iterator for StyleBlocks<'a> {
    type Item = StyleBlock<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.pos + find_ignore_ascii_case(&self.document[self.pos..], "<style")?;
        // Without a `>` or a `</style>` after this point, no later block can match either.
        let Ok((after_open, open_tag)) = parse_open_tag(&self.document[start..]) else {
            self.pos = self.document.len();
            return None;
        };
        let Some(body_len) = find_ignore_ascii_case(after_open, CLOSE_TAG) else {
            self.pos = self.document.len();
            return None;
        };

        let body_start = start + open_tag.len();
        let close_start = body_start + body_len;
        let end = close_start + CLOSE_TAG.len();
        self.pos = end;

        Some(StyleBlock {
            start,
            end,
            open_tag,
            body: &self.document[body_start..close_start],
            close_tag: &self.document[close_start..end],
        })
    }
}

/// Parses `<style`, any attributes, and the closing `>`.
fn parse_open_tag(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        tag_no_case("<style"),
        take_till(|c: char| c == '>'),
        char('>'),
    )))(input)
}

/// Byte offset of the first ASCII case-insensitive match of `needle`.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let needle = needle.as_bytes();
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(document: &str) -> Vec<StyleBlock<'_>> {
        StyleBlocks::new(document).collect()
    }

    #[test]
    fn open_tag_with_attributes() {
        let (rest, tag) = parse_open_tag("<style type=\"text/css\">body").unwrap();
        assert_eq!(tag, "<style type=\"text/css\">");
        assert_eq!(rest, "body");
    }

    #[test]
    fn open_tag_is_case_insensitive() {
        let (_, tag) = parse_open_tag("<STYLE>").unwrap();
        assert_eq!(tag, "<STYLE>");
    }

    #[test]
    fn open_tag_needs_closing_bracket() {
        assert!(parse_open_tag("<style type=x").is_err());
    }

    #[test]
    fn finds_blocks_in_order() {
        let doc = "<style>a</style><p></p><Style id=\"x\">b</STYLE>";
        let found = blocks(doc);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].body, "a");
        assert_eq!(found[1].open_tag, "<Style id=\"x\">");
        assert_eq!(found[1].body, "b");
        assert_eq!(found[1].close_tag, "</STYLE>");
        assert_eq!(found[1].end, doc.len());
    }

    #[test]
    fn body_ends_at_first_close_tag() {
        let found = blocks("<style>a</style>b</style>");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].body, "a");
    }

    #[test]
    fn unclosed_block_is_not_matched() {
        assert!(blocks("<style>.a { color: red; }").is_empty());
    }

    #[test]
    fn find_handles_multibyte_text() {
        assert_eq!(find_ignore_ascii_case("héllo <STYLE>", "<style"), Some(7));
        assert_eq!(find_ignore_ascii_case("ab", "<style"), None);
    }
}
