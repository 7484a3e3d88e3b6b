//! Integration tests for stylesheet assembly.

use restyle_css::assemble;

#[test]
fn test_parts_separated_by_one_blank_line() {
    let output = assemble(["/* header */", ":root {}", "body {}"], "button {}\n");
    assert_eq!(output, "/* header */\n\n:root {}\n\nbody {}\n\nbutton {}\n");
}

#[test]
fn test_trailing_block_is_verbatim() {
    let trailing = "  /* indented */\n\n\nkeep   spacing\n";
    let output = assemble(["a {}"], trailing);
    assert!(output.ends_with(trailing));
    assert_eq!(output, format!("a {{}}\n\n{trailing}"));
}

#[test]
fn test_empty_parts_are_skipped() {
    let output = assemble(["", ":root {}", "", "body {}"], "x {}");
    assert_eq!(output, ":root {}\n\nbody {}\n\nx {}");
}

#[test]
fn test_empty_trailing_ends_with_newline() {
    assert_eq!(assemble(["a {}", "b {}"], ""), "a {}\n\nb {}\n");
}

#[test]
fn test_only_trailing() {
    assert_eq!(assemble([""], "x {}\n"), "x {}\n");
}
