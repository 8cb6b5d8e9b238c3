use super::*;

fn compact() -> SourceWriter {
    SourceWriter::new("  ", NewLineKind::LineFeed, true)
}

fn indented() -> SourceWriter {
    SourceWriter::new("    ", NewLineKind::LineFeed, false)
}

#[test]
fn test_keywords_are_separated() {
    let mut writer = compact();
    writer.write_keyword("typeof", TokenFlags::TRAILING_SPACE_RECOMMENDED);
    writer.write_identifier("v", TokenFlags::empty());
    writer.write_keyword("in", TokenFlags::SURROUNDING_SPACE_RECOMMENDED);
    writer.write_identifier("o", TokenFlags::empty());
    assert_eq!(writer.finish(), "typeof v in o");
}

#[test]
fn test_compact_drops_recommended_space() {
    let mut writer = compact();
    writer.write_keyword("case", TokenFlags::TRAILING_SPACE_RECOMMENDED);
    writer.write_literal("'A'", TokenFlags::empty());
    writer.write_punctuator(":", TokenFlags::empty());
    writer.write_keyword("return", TokenFlags::TRAILING_SPACE_RECOMMENDED);
    writer.write_literal("'aa'", TokenFlags::empty());
    assert_eq!(writer.finish(), "case'A':return'aa'");
}

#[test]
fn test_indented_keeps_recommended_space() {
    let mut writer = indented();
    writer.write_identifier("a", TokenFlags::empty());
    writer.write_punctuator("===", TokenFlags::SURROUNDING_SPACE_RECOMMENDED);
    writer.write_identifier("b", TokenFlags::empty());
    writer.write_punctuator(",", TokenFlags::TRAILING | TokenFlags::TRAILING_SPACE_RECOMMENDED);
    writer.write_identifier("c", TokenFlags::empty());
    assert_eq!(writer.finish(), "a === b, c");
}

#[test]
fn test_trailing_token_drops_pending_space() {
    let mut writer = indented();
    writer.write_punctuator("[", TokenFlags::LEADING);
    writer.write_identifier("a", TokenFlags::empty());
    writer.write_punctuator(",", TokenFlags::TRAILING | TokenFlags::TRAILING_SPACE_RECOMMENDED);
    writer.write_punctuator(",", TokenFlags::TRAILING | TokenFlags::TRAILING_SPACE_RECOMMENDED);
    writer.write_identifier("b", TokenFlags::empty());
    writer.write_punctuator("]", TokenFlags::empty());
    assert_eq!(writer.finish(), "[a,, b]");
}

#[test]
fn test_operator_gluing() {
    let mut writer = compact();
    writer.write_identifier("a", TokenFlags::empty());
    writer.write_punctuator("+", TokenFlags::SURROUNDING_SPACE_RECOMMENDED);
    writer.write_punctuator("+", TokenFlags::empty());
    writer.write_identifier("b", TokenFlags::empty());
    writer.write_punctuator("-", TokenFlags::SURROUNDING_SPACE_RECOMMENDED);
    writer.write_punctuator("--", TokenFlags::empty());
    writer.write_identifier("c", TokenFlags::empty());
    writer.write_punctuator("/", TokenFlags::SURROUNDING_SPACE_RECOMMENDED);
    writer.write_literal("/re/", TokenFlags::empty());
    assert_eq!(writer.finish(), "a+ +b- --c/ /re/");
}

#[test]
fn test_line_breaks_and_indentation() {
    let mut writer = indented();
    writer.request_line_break();
    writer.write_keyword("if", TokenFlags::TRAILING_SPACE_RECOMMENDED);
    writer.write_punctuator("(", TokenFlags::LEADING);
    writer.write_identifier("x", TokenFlags::empty());
    writer.write_punctuator(")", TokenFlags::empty());
    writer.write_punctuator("{", TokenFlags::LEADING_SPACE_RECOMMENDED);
    writer.increase_indent();
    writer.request_line_break();
    writer.write_identifier("y", TokenFlags::empty());
    writer.write_punctuator(";", TokenFlags::TRAILING);
    writer.decrease_indent();
    writer.request_line_break();
    writer.write_punctuator("}", TokenFlags::empty());
    writer.request_line_break();
    assert_eq!(writer.finish(), "if (x) {\n    y;\n}\n");
}

#[test]
fn test_crlf_newlines() {
    let mut writer = SourceWriter::new("\t", NewLineKind::CarriageReturnLineFeed, false);
    writer.write_identifier("a", TokenFlags::empty());
    writer.increase_indent();
    writer.request_line_break();
    writer.write_identifier("b", TokenFlags::empty());
    assert_eq!(writer.finish(), "a\r\n\tb");
}

#[test]
fn test_separator_rules() {
    assert!(needs_separator('n', 'x'));
    assert!(needs_separator('1', 'i'));
    assert!(needs_separator('$', '_'));
    assert!(!needs_separator(')', 'x'));
    assert!(!needs_separator('n', '\''));
    assert!(!needs_separator('+', '-'));
}
