//! Literal serialization.
//!
//! Pure text functions: no writer state, no options beyond the quote
//! preference. The emitter decides where the text goes.

use std::fmt::Write as _;

use jsgen_ast::{Literal, LiteralValue};

use crate::options::QuoteStyle;

/// Render a literal to source text.
///
/// Strings and big integers keep their recorded raw spelling when it is a
/// well-formed token; everything else is derived from the value.
#[must_use]
pub fn literal_text(literal: &Literal, quote: QuoteStyle) -> String {
    match &literal.value {
        LiteralValue::Null => "null".to_string(),
        LiteralValue::Boolean(true) => "true".to_string(),
        LiteralValue::Boolean(false) => "false".to_string(),
        LiteralValue::Number(value) => number_text(*value),
        LiteralValue::String(value) => match literal.raw.as_deref() {
            Some(raw) if is_quoted_token(raw) => raw.to_string(),
            _ => quote_string(value, quote),
        },
        LiteralValue::BigInt(digits) => match literal.raw.as_deref() {
            Some(raw) if raw.ends_with('n') => raw.to_string(),
            _ => format!("{digits}n"),
        },
        LiteralValue::RegExp { pattern, flags } => format!("/{pattern}/{flags}"),
    }
}

/// `raw` opens and closes with the same quote character.
fn is_quoted_token(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() >= 2
        && matches!(bytes[0], b'\'' | b'"')
        && bytes[bytes.len() - 1] == bytes[0]
}

// =============================================================================
// Numbers
// =============================================================================

/// ECMAScript `Number::toString` over the shortest round-trip digits.
///
/// Non-finite values get a spelling that evaluates back to the same number.
#[must_use]
pub fn number_text(value: f64) -> String {
    // Never `NaN` or `Infinity`: those are shadowable identifiers.
    if value.is_nan() {
        return "(0/0)".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-1e400" } else { "1e400" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let mut out = String::new();
    if value < 0.0 {
        out.push('-');
    }

    // `{:e}` yields the shortest digits that round-trip, e.g. `1.2345e2`.
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let k = digits.len() as i32;
    let n = exponent + 1;

    if k <= n && n <= 21 {
        out.push_str(&digits);
        out.extend(std::iter::repeat_n('0', (n - k) as usize));
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        out.push_str(int_part);
        out.push('.');
        out.push_str(frac_part);
    } else if -6 < n && n <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat_n('0', (-n) as usize));
        out.push_str(&digits);
    } else {
        let e = n - 1;
        let (first, rest) = digits.split_at(1);
        out.push_str(first);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        out.push('e');
        out.push(if e < 0 { '-' } else { '+' });
        let _ = write!(out, "{}", e.abs());
    }
    out
}

// =============================================================================
// Strings
// =============================================================================

/// Quote and escape a decoded string value.
///
/// The preferred quote is used unless the value contains it and not the
/// alternative, which keeps escapes to a minimum.
#[must_use]
pub fn quote_string(value: &str, preferred: QuoteStyle) -> String {
    let quote = choose_quote(value, preferred);
    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    escape_into(&mut out, value, quote);
    out.push(quote);
    out
}

fn choose_quote(value: &str, preferred: QuoteStyle) -> char {
    let bytes = value.as_bytes();
    let singles = memchr::memchr_iter(b'\'', bytes).count();
    let doubles = memchr::memchr_iter(b'"', bytes).count();
    match preferred {
        QuoteStyle::Single if singles > 0 && doubles == 0 => '"',
        QuoteStyle::Single => '\'',
        QuoteStyle::Double if doubles > 0 && singles == 0 => '\'',
        QuoteStyle::Double => '"',
    }
}

fn escape_into(out: &mut String, value: &str, quote: char) {
    // Fast path: nothing to escape.
    let bytes = value.as_bytes();
    if memchr::memchr3(b'\\', quote as u8, b'\n', bytes).is_none()
        && !value.chars().any(needs_escape)
    {
        out.push_str(value);
        return;
    }

    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\u{b}' => out.push_str("\\v"),
            '\0' => {
                // `\0` followed by a digit would read as a legacy octal escape.
                if chars.peek().is_some_and(char::is_ascii_digit) {
                    out.push_str("\\x00");
                } else {
                    out.push_str("\\0");
                }
            }
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
}

fn needs_escape(ch: char) -> bool {
    (ch as u32) < 0x20 || matches!(ch, '\u{7f}' | '\u{2028}' | '\u{2029}')
}

#[cfg(test)]
#[path = "../tests/literals.rs"]
mod tests;
