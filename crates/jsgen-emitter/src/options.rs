//! Formatting policy.

use std::borrow::Cow;
use std::sync::Arc;

use jsgen_common::NewLineKind;
use serde::{Deserialize, Serialize};

use crate::terminator::{DefaultTerminator, StatementTerminator};

/// Overall layout family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatStyle {
    /// Single line, only the spaces needed to keep tokens apart.
    #[default]
    Compact,
    /// K&R layout: one statement per line, braces on the header line.
    Indented,
}

/// Quote used for strings that have no recorded raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    #[default]
    Single,
    Double,
}

/// Parentheses around a lone identifier arrow parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArrowParens {
    /// `x => x`
    #[default]
    AsNeeded,
    /// `(x) => x`
    Always,
}

/// Configuration for one generation pass.
#[derive(Debug, Clone)]
pub struct WriterOptions {
    pub style: FormatStyle,
    /// Indentation unit; must be whitespace.
    pub indent: Cow<'static, str>,
    /// `{ }` instead of `{\n}` for empty blocks and bodies.
    pub keep_empty_block_body_in_line: bool,
    /// `if (x) y;` instead of putting `y;` on its own indented line.
    pub keep_single_statement_body_in_line: bool,
    /// An object literal with at least this many members (and at least one)
    /// puts each member on its own line.
    pub multi_line_object_literal_threshold: usize,
    /// Same rule for array literals.
    pub multi_line_array_literal_threshold: usize,
    pub new_line: NewLineKind,
    pub quote: QuoteStyle,
    pub arrow_parens: ArrowParens,
    pub terminator: Arc<dyn StatementTerminator>,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self::compact()
    }
}

impl WriterOptions {
    #[must_use]
    pub fn compact() -> Self {
        Self {
            style: FormatStyle::Compact,
            indent: Cow::Borrowed("  "),
            keep_empty_block_body_in_line: true,
            keep_single_statement_body_in_line: false,
            multi_line_object_literal_threshold: 2,
            multi_line_array_literal_threshold: 7,
            new_line: NewLineKind::LineFeed,
            quote: QuoteStyle::Single,
            arrow_parens: ArrowParens::AsNeeded,
            terminator: Arc::new(DefaultTerminator),
        }
    }

    #[must_use]
    pub fn indented() -> Self {
        Self {
            style: FormatStyle::Indented,
            ..Self::compact()
        }
    }

    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<Cow<'static, str>>) -> Self {
        self.indent = indent.into();
        self
    }

    #[must_use]
    pub fn with_keep_empty_block_body_in_line(mut self, keep: bool) -> Self {
        self.keep_empty_block_body_in_line = keep;
        self
    }

    #[must_use]
    pub fn with_keep_single_statement_body_in_line(mut self, keep: bool) -> Self {
        self.keep_single_statement_body_in_line = keep;
        self
    }

    #[must_use]
    pub fn with_object_threshold(mut self, threshold: usize) -> Self {
        self.multi_line_object_literal_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_array_threshold(mut self, threshold: usize) -> Self {
        self.multi_line_array_literal_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_new_line(mut self, new_line: NewLineKind) -> Self {
        self.new_line = new_line;
        self
    }

    #[must_use]
    pub fn with_quote(mut self, quote: QuoteStyle) -> Self {
        self.quote = quote;
        self
    }

    #[must_use]
    pub fn with_arrow_parens(mut self, arrow_parens: ArrowParens) -> Self {
        self.arrow_parens = arrow_parens;
        self
    }

    #[must_use]
    pub fn with_terminator(mut self, terminator: impl StatementTerminator + 'static) -> Self {
        self.terminator = Arc::new(terminator);
        self
    }

    #[must_use]
    pub fn is_compact(&self) -> bool {
        self.style == FormatStyle::Compact
    }

    /// Reject settings that would produce text that does not reparse.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !self.indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err("indent must consist of spaces and tabs");
        }
        Ok(())
    }
}
