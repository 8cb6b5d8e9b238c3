use super::*;

#[test]
fn test_newline_text() {
    assert_eq!(NewLineKind::LineFeed.as_str(), "\n");
    assert_eq!(NewLineKind::CarriageReturnLineFeed.as_str(), "\r\n");
    assert_eq!(NewLineKind::default(), NewLineKind::LineFeed);
}

#[test]
fn test_newline_from_config_value() {
    let kind: NewLineKind = serde_json::from_str("\"crlf\"").unwrap();
    assert_eq!(kind, NewLineKind::CarriageReturnLineFeed);
    let kind: NewLineKind = serde_json::from_str("\"linefeed\"").unwrap();
    assert_eq!(kind, NewLineKind::LineFeed);
}
