use jsgen_ast::Identifier;

use super::{EmitResult, Printer};
use crate::source_writer::TokenFlags;

impl Printer<'_> {
    // =========================================================================
    // Token shortcuts
    // =========================================================================

    pub(super) fn keyword(&mut self, keyword: &str, flags: TokenFlags) {
        self.writer.write_keyword(keyword, flags);
    }

    pub(super) fn punct(&mut self, punctuator: &str, flags: TokenFlags) {
        self.writer.write_punctuator(punctuator, flags);
    }

    pub(super) fn identifier(&mut self, id: &Identifier) {
        self.writer.write_identifier(&id.name, TokenFlags::empty());
    }

    /// `#name`
    pub(super) fn private_name(&mut self, id: &Identifier) {
        let text = format!("#{}", id.name);
        self.writer.write_identifier(&text, TokenFlags::empty());
    }

    pub(super) fn open_paren(&mut self) {
        self.punct("(", TokenFlags::LEADING);
    }

    pub(super) fn close_paren(&mut self) {
        self.punct(")", TokenFlags::empty());
    }

    /// `=` between a binding and its value.
    pub(super) fn equals(&mut self) {
        self.punct("=", TokenFlags::SURROUNDING_SPACE_RECOMMENDED);
    }

    // =========================================================================
    // Lists
    // =========================================================================

    /// Emit `items` separated by `, `.
    pub(super) fn emit_comma_separated<T>(
        &mut self,
        items: &[T],
        mut emit: impl FnMut(&mut Self, &T) -> EmitResult,
    ) -> EmitResult {
        for (index, item) in items.iter().enumerate() {
            if index > 0 {
                self.writer.write_list_separator();
            }
            emit(self, item)?;
        }
        Ok(())
    }

    /// Emit bracketed elements that may contain holes (`[a, , b]`).
    ///
    /// A trailing hole needs its own comma, otherwise the list would
    /// shrink by one on reparse.
    pub(super) fn emit_elements_with_holes<T>(
        &mut self,
        elements: &[Option<T>],
        multi_line: bool,
        mut emit: impl FnMut(&mut Self, &T) -> EmitResult,
    ) -> EmitResult {
        for (index, element) in elements.iter().enumerate() {
            if index > 0 {
                self.writer.write_member_separator(multi_line);
            }
            if let Some(element) = element {
                emit(self, element)?;
            }
        }
        if matches!(elements.last(), Some(None)) {
            self.punct(",", TokenFlags::TRAILING);
        }
        Ok(())
    }
}
