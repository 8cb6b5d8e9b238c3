//! Function, arrow and parameter list emission.

use jsgen_ast::{ArrowBody, ArrowFunction, Function, Pattern};

use super::{EmitResult, ExprFlags, Printer};
use crate::context::NodeRef;
use crate::options::ArrowParens;
use crate::precedence::Precedence;
use crate::source_writer::TokenFlags;

impl Printer<'_> {
    /// `function name(params) { body }`, declaration or expression.
    pub(super) fn emit_function(&mut self, function: &Function) -> EmitResult {
        if function.is_async {
            self.keyword("async", TokenFlags::TRAILING_SPACE_RECOMMENDED);
        }
        self.keyword("function", TokenFlags::empty());
        if function.is_generator {
            let flags = if function.id.is_some() {
                TokenFlags::TRAILING_SPACE_RECOMMENDED
            } else {
                TokenFlags::empty()
            };
            self.punct("*", flags);
        }
        if let Some(id) = &function.id {
            self.identifier(id);
        }
        self.emit_function_tail(function)
    }

    /// `async` and `*` in front of a method name.
    pub(super) fn emit_method_modifiers(&mut self, function: &Function) {
        if function.is_async {
            self.keyword("async", TokenFlags::TRAILING_SPACE_RECOMMENDED);
        }
        if function.is_generator {
            self.punct("*", TokenFlags::empty());
        }
    }

    /// Parameter list and body.
    pub(super) fn emit_function_tail(&mut self, function: &Function) -> EmitResult {
        self.emit_params(&function.params)?;
        self.emit_statement_block(NodeRef::Function(function), "body", &function.body.body)
    }

    #[tracing::instrument(level = "trace", skip(self, params), fields(param_count = params.len()))]
    pub(super) fn emit_params(&mut self, params: &[Pattern]) -> EmitResult {
        self.open_paren();
        let count = params.len();
        for (index, param) in params.iter().enumerate() {
            if index > 0 {
                self.writer.write_list_separator();
            }
            self.emit_binding_element(param, index + 1 == count)?;
        }
        self.close_paren();
        Ok(())
    }

    pub(super) fn emit_arrow(&mut self, arrow: &ArrowFunction, flags: ExprFlags) -> EmitResult {
        if arrow.is_async {
            self.keyword("async", TokenFlags::TRAILING_SPACE_RECOMMENDED);
        }
        match (arrow.params.as_slice(), self.writer.options().arrow_parens) {
            ([Pattern::Identifier(id)], ArrowParens::AsNeeded) => self.identifier(id),
            (params, _) => self.emit_params(params)?,
        }
        self.punct("=>", TokenFlags::SURROUNDING_SPACE_RECOMMENDED);
        match &arrow.body {
            ArrowBody::Block(block) => {
                self.emit_statement_block(NodeRef::Arrow(arrow), "body", &block.body)
            }
            ArrowBody::Expression(expression) => self.emit_expression(
                expression,
                Precedence::Assign,
                ExprFlags::ARROW_BODY_START | flags.rest(),
            ),
        }
    }
}
