//! Token sink.
//!
//! `SourceWriter` turns a stream of tokens plus [`TokenFlags`] into text. It
//! owns indentation and pending whitespace, and it alone decides when two
//! tokens would glue together (`a in b`, `a+ +b`). It knows nothing about
//! AST nodes.

use bitflags::bitflags;
use jsgen_common::NewLineKind;

bitflags! {
    /// Adjacency hints attached to a single token.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TokenFlags: u8 {
        /// Token opens a construct (`(`, `{`, `[`).
        const LEADING = 1 << 0;
        /// Token attaches to what precedes it (`;`, `,`); a pending
        /// recommended space is dropped.
        const TRAILING = 1 << 1;
        /// Token separates two parts of one construct (`;` in a `for` header).
        const IN_BETWEEN = 1 << 2;
        const LEADING_SPACE_RECOMMENDED = 1 << 3;
        const TRAILING_SPACE_RECOMMENDED = 1 << 4;
        const SURROUNDING_SPACE_RECOMMENDED =
            Self::LEADING_SPACE_RECOMMENDED.bits() | Self::TRAILING_SPACE_RECOMMENDED.bits();
    }
}

pub struct SourceWriter {
    output: String,
    indent_unit: String,
    new_line: &'static str,
    indent_level: u32,
    compact: bool,
    pending_space: bool,
    pending_line_break: bool,
    last_char: Option<char>,
}

impl SourceWriter {
    #[must_use]
    pub fn new(indent_unit: &str, new_line: NewLineKind, compact: bool) -> Self {
        Self {
            output: String::with_capacity(1024),
            indent_unit: indent_unit.to_string(),
            new_line: new_line.as_str(),
            indent_level: 0,
            compact,
            pending_space: false,
            pending_line_break: false,
            last_char: None,
        }
    }

    // =========================================================================
    // Tokens
    // =========================================================================

    pub fn write_keyword(&mut self, keyword: &str, flags: TokenFlags) {
        self.write_token(keyword, flags);
    }

    pub fn write_identifier(&mut self, name: &str, flags: TokenFlags) {
        self.write_token(name, flags);
    }

    pub fn write_punctuator(&mut self, punctuator: &str, flags: TokenFlags) {
        self.write_token(punctuator, flags);
    }

    pub fn write_literal(&mut self, text: &str, flags: TokenFlags) {
        self.write_token(text, flags);
    }

    /// Verbatim text. Still separated from a preceding token when gluing
    /// would change the lexing.
    pub fn write_raw(&mut self, text: &str, flags: TokenFlags) {
        self.write_token(text, flags);
    }

    fn write_token(&mut self, text: &str, flags: TokenFlags) {
        let Some(first) = text.chars().next() else {
            return;
        };

        if self.pending_line_break && !self.output.is_empty() {
            self.output.push_str(self.new_line);
            for _ in 0..self.indent_level {
                self.output.push_str(&self.indent_unit);
            }
            self.last_char = None;
        } else if let Some(last) = self.last_char {
            let recommended = !self.compact
                && !flags.contains(TokenFlags::TRAILING)
                && (self.pending_space || flags.contains(TokenFlags::LEADING_SPACE_RECOMMENDED));
            if recommended || needs_separator(last, first) {
                self.output.push(' ');
            }
        }

        self.output.push_str(text);
        self.last_char = text.chars().next_back();
        self.pending_line_break = false;
        self.pending_space = flags.contains(TokenFlags::TRAILING_SPACE_RECOMMENDED);
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Ask for a recommended space before the next token.
    pub fn request_space(&mut self) {
        self.pending_space = true;
    }

    /// Start the next token on a fresh, indented line.
    pub fn request_line_break(&mut self) {
        self.pending_line_break = true;
    }

    pub fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn decrease_indent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    #[must_use]
    pub const fn is_compact(&self) -> bool {
        self.compact
    }

    /// Consume the writer. A pending line break becomes a final newline.
    #[must_use]
    pub fn finish(mut self) -> String {
        if self.pending_line_break && !self.output.is_empty() {
            self.output.push_str(self.new_line);
        }
        self.output
    }
}

/// Whether writing `next` straight after `last` would merge two tokens or
/// open a comment.
#[must_use]
pub fn needs_separator(last: char, next: char) -> bool {
    if is_identifier_part(last) && is_identifier_part(next) {
        return true;
    }
    matches!(
        (last, next),
        ('+', '+') | ('-', '-') | ('/', '/') | ('/', '*') | ('<', '!')
    )
}

fn is_identifier_part(ch: char) -> bool {
    ch == '_' || ch == '$' || ch == '\\' || ch.is_alphanumeric() || ch == '\u{200c}' || ch == '\u{200d}'
}

#[cfg(test)]
#[path = "../tests/source_writer.rs"]
mod tests;
