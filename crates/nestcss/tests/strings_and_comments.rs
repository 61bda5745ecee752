//! Integration tests for quoted strings and comment stripping.

use nestcss::{expand, parse};

#[test]
fn test_string_with_structural_characters() {
    let tree = parse(r#".a { content: "a;b{c}"; }"#);
    assert_eq!(tree.rule_count(), 1);

    let (_, a) = tree.children(tree.root()).next().unwrap();
    assert_eq!(a.selector, ".a");
    assert_eq!(a.properties, vec![r#"content: "a;b{c}";"#]);
}

#[test]
fn test_string_in_selector() {
    let css = r#"a[href$=".pdf{"] { &::after { content: "}"; } }"#;
    assert_eq!(
        expand(css).unwrap(),
        "a[href$=\".pdf{\"]::after {\n  content: \"}\";\n}"
    );
}

#[test]
fn test_url_with_semicolon_in_quotes() {
    let css = ".logo { background: url('data:image/svg+xml;utf8,<svg/>'); }";
    assert_eq!(
        expand(css).unwrap(),
        ".logo {\n  background: url('data:image/svg+xml;utf8,<svg/>');\n}"
    );
}

#[test]
fn test_block_comments() {
    let css = r#"
        .a {
            /* this is a comment */
            color: red;
        }
    "#;
    assert_eq!(expand(css).unwrap(), ".a {\n  color: red;\n}");
}

#[test]
fn test_comment_containing_braces() {
    let css = ".a { /* } .b { */ color: red; }";
    assert_eq!(expand(css).unwrap(), ".a {\n  color: red;\n}");
}

#[test]
fn test_multiline_block_comment() {
    let css = r#"
        /*
         * Header
         */
        .a { color: red; }
        /* between */
        .b { color: blue; } /* trailing */
    "#;
    assert_eq!(
        expand(css).unwrap(),
        ".a {\n  color: red;\n}\n.b {\n  color: blue;\n}"
    );
}

#[test]
fn test_comment_marker_inside_string_is_stripped() {
    // Comments are removed before quotes are tracked.
    let css = r#".a { content: "/* x */"; }"#;
    assert_eq!(expand(css).unwrap(), ".a {\n  content: \"\";\n}");
}

#[test]
fn test_unterminated_comment_is_scanned_as_text() {
    let css = ".a { color: red; } /* .b { color: blue; }";
    let tree = parse(css);

    // The leftover `/* .b` becomes a selector; nothing is lost or raised.
    assert_eq!(tree.rule_count(), 2);
    let (_, b) = tree.children(tree.root()).nth(1).unwrap();
    assert_eq!(b.selector, "/* .b");
}
