//! Layout decisions on top of the token sink.
//!
//! `JsWriter` is created once per generation pass. The printer tells it
//! where statements, blocks and literal members begin and end; the writer
//! turns that into line breaks and indentation according to the
//! [`WriterOptions`], and asks the configured terminator whether a
//! statement gets its `;`.

use crate::context::{StatementFlags, WriteContext};
use crate::options::WriterOptions;
use crate::source_writer::{SourceWriter, TokenFlags};

/// How a single-statement body sits relative to its header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyLayout {
    /// `{ ... }` on the header line.
    Block,
    /// Own line, one level deeper (indented style).
    Nested,
    /// Same line after a space: `else if`, `label: stmt`.
    Inline,
}

pub struct JsWriter<'o> {
    out: SourceWriter,
    options: &'o WriterOptions,
}

impl<'o> JsWriter<'o> {
    #[must_use]
    pub fn new(options: &'o WriterOptions) -> Self {
        Self {
            out: SourceWriter::new(&options.indent, options.new_line, options.is_compact()),
            options,
        }
    }

    #[must_use]
    pub const fn options(&self) -> &'o WriterOptions {
        self.options
    }

    #[must_use]
    pub fn is_compact(&self) -> bool {
        self.options.is_compact()
    }

    // =========================================================================
    // Tokens
    // =========================================================================

    pub fn write_keyword(&mut self, keyword: &str, flags: TokenFlags) {
        self.out.write_keyword(keyword, flags);
    }

    pub fn write_identifier(&mut self, name: &str, flags: TokenFlags) {
        self.out.write_identifier(name, flags);
    }

    pub fn write_punctuator(&mut self, punctuator: &str, flags: TokenFlags) {
        self.out.write_punctuator(punctuator, flags);
    }

    pub fn write_literal(&mut self, text: &str, flags: TokenFlags) {
        self.out.write_literal(text, flags);
    }

    pub fn write_raw(&mut self, text: &str, flags: TokenFlags) {
        self.out.write_raw(text, flags);
    }

    /// `,` between list members on one line.
    pub fn write_list_separator(&mut self) {
        self.out.write_punctuator(
            ",",
            TokenFlags::TRAILING | TokenFlags::TRAILING_SPACE_RECOMMENDED,
        );
    }

    pub fn space(&mut self) {
        self.out.request_space();
    }

    /// A line break, for the indented style only.
    pub fn line_break(&mut self) {
        if !self.is_compact() {
            self.out.request_line_break();
        }
    }

    // =========================================================================
    // Statements
    // =========================================================================

    pub fn start_statement_list_item(&mut self, _index: usize, _count: usize) {
        self.line_break();
    }

    pub fn end_statement_list_item(
        &mut self,
        index: usize,
        count: usize,
        flags: StatementFlags,
        context: &WriteContext<'_>,
    ) {
        if self
            .options
            .terminator
            .terminate_list_item(index, count, flags, context)
        {
            self.write_terminator();
        }
    }

    pub fn end_statement(&mut self, flags: StatementFlags, context: &WriteContext<'_>) {
        if self.options.terminator.terminate_statement(flags, context) {
            self.write_terminator();
        }
    }

    fn write_terminator(&mut self) {
        self.out.write_punctuator(";", TokenFlags::TRAILING);
    }

    pub fn start_statement_body(&mut self, layout: BodyLayout) {
        match layout {
            BodyLayout::Block => {}
            BodyLayout::Inline => self.space(),
            BodyLayout::Nested => {
                if self.is_compact() {
                    return;
                }
                if self.options.keep_single_statement_body_in_line {
                    self.space();
                } else {
                    self.out.increase_indent();
                    self.out.request_line_break();
                }
            }
        }
    }

    pub fn end_statement_body(&mut self, layout: BodyLayout) {
        if layout == BodyLayout::Nested
            && !self.is_compact()
            && !self.options.keep_single_statement_body_in_line
        {
            self.out.decrease_indent();
        }
    }

    /// Prepare for `else` / `while` after a body laid out as `layout`.
    pub fn start_continuation(&mut self, layout: BodyLayout) {
        if layout == BodyLayout::Nested && !self.options.keep_single_statement_body_in_line {
            self.line_break();
        }
    }

    /// Called once after the whole program.
    pub fn end_program(&mut self) {
        self.line_break();
    }

    // =========================================================================
    // Blocks
    // =========================================================================

    /// `{` of a block, function body, class body or switch body holding
    /// `count` items.
    pub fn start_block(&mut self, count: usize) {
        self.out
            .write_punctuator("{", TokenFlags::LEADING | TokenFlags::LEADING_SPACE_RECOMMENDED);
        if self.is_compact() {
            return;
        }
        if count > 0 {
            self.out.increase_indent();
        } else if self.options.keep_empty_block_body_in_line {
            self.space();
        } else {
            self.out.request_line_break();
        }
    }

    pub fn end_block(&mut self, count: usize) {
        if !self.is_compact() && count > 0 {
            self.out.decrease_indent();
            self.out.request_line_break();
        }
        self.out.write_punctuator("}", TokenFlags::empty());
    }

    pub fn start_class_member(&mut self) {
        self.line_break();
    }

    /// Statements of a `case` clause go one level below the label.
    pub fn start_case_body(&mut self) {
        if !self.is_compact() {
            self.out.increase_indent();
        }
    }

    pub fn end_case_body(&mut self) {
        if !self.is_compact() {
            self.out.decrease_indent();
        }
    }

    // =========================================================================
    // Literals and braced lists
    // =========================================================================

    /// `{` of an object literal. Returns whether members go one per line.
    pub fn start_object(&mut self, count: usize) -> bool {
        let multi_line = self.breaks(count, self.options.multi_line_object_literal_threshold);
        self.start_list("{", multi_line, TokenFlags::TRAILING_SPACE_RECOMMENDED);
        multi_line
    }

    pub fn end_object(&mut self, multi_line: bool) {
        self.end_list("}", multi_line, TokenFlags::LEADING_SPACE_RECOMMENDED);
    }

    /// `[` of an array literal. Returns whether elements go one per line.
    pub fn start_array(&mut self, count: usize) -> bool {
        let multi_line = self.breaks(count, self.options.multi_line_array_literal_threshold);
        self.start_list("[", multi_line, TokenFlags::empty());
        multi_line
    }

    pub fn end_array(&mut self, multi_line: bool) {
        self.end_list("]", multi_line, TokenFlags::empty());
    }

    /// `{` of an import/export list or object pattern; always one line.
    pub fn start_braces(&mut self) {
        self.start_list("{", false, TokenFlags::TRAILING_SPACE_RECOMMENDED);
    }

    pub fn end_braces(&mut self) {
        self.end_list("}", false, TokenFlags::LEADING_SPACE_RECOMMENDED);
    }

    /// Separator between members of a list opened by `start_object` or
    /// `start_array`.
    pub fn write_member_separator(&mut self, multi_line: bool) {
        if multi_line {
            self.out.write_punctuator(",", TokenFlags::TRAILING);
            self.out.request_line_break();
        } else {
            self.write_list_separator();
        }
    }

    fn breaks(&self, count: usize, threshold: usize) -> bool {
        !self.is_compact() && count > 0 && count >= threshold
    }

    fn start_list(&mut self, open: &str, multi_line: bool, inline_flags: TokenFlags) {
        if multi_line {
            self.out.write_punctuator(open, TokenFlags::LEADING);
            self.out.increase_indent();
            self.out.request_line_break();
        } else {
            self.out.write_punctuator(open, TokenFlags::LEADING | inline_flags);
        }
    }

    fn end_list(&mut self, close: &str, multi_line: bool, inline_flags: TokenFlags) {
        if multi_line {
            self.out.decrease_indent();
            self.out.request_line_break();
            self.out.write_punctuator(close, TokenFlags::empty());
        } else {
            self.out.write_punctuator(close, inline_flags);
        }
    }

    #[must_use]
    pub fn finish(self) -> String {
        self.out.finish()
    }
}
