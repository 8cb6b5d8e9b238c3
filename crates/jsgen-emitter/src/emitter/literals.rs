//! Literals, templates and object literal members.

use jsgen_ast::{
    Expression, Function, Literal, NodeKind, Property, PropertyKey, PropertyKind, TemplateLiteral,
};

use super::{EmitResult, ExprFlags, Printer};
use crate::error::GenerateError;
use crate::literals::literal_text;
use crate::precedence::Precedence;
use crate::source_writer::TokenFlags;

impl Printer<'_> {
    pub(super) fn emit_literal(&mut self, literal: &Literal) {
        let text = literal_text(literal, self.writer.options().quote);
        self.writer.write_literal(&text, TokenFlags::empty());
    }

    /// Template chunks are written from their raw text; substitutions are
    /// full expressions.
    pub(super) fn emit_template_literal(&mut self, template: &TemplateLiteral) -> EmitResult {
        let Some((head, rest)) = template.quasis.split_first() else {
            return Err(malformed_template());
        };
        if rest.len() != template.expressions.len() {
            return Err(malformed_template());
        }

        let mut chunk = String::with_capacity(head.raw.len() + 2);
        chunk.push('`');
        chunk.push_str(&head.raw);
        let mut chunk_flags = TokenFlags::empty();
        for (expression, quasi) in template.expressions.iter().zip(rest) {
            chunk.push_str("${");
            self.writer.write_raw(&chunk, chunk_flags);
            self.emit_expression(expression, Precedence::Lowest, ExprFlags::empty())?;

            chunk.clear();
            chunk.push('}');
            chunk.push_str(&quasi.raw);
            chunk_flags = TokenFlags::TRAILING;
        }
        chunk.push('`');
        self.writer.write_raw(&chunk, chunk_flags);
        Ok(())
    }

    pub(super) fn emit_property_key(&mut self, key: &PropertyKey) -> EmitResult {
        match key {
            PropertyKey::Identifier(id) => self.identifier(id),
            PropertyKey::PrivateName(id) => self.private_name(id),
            PropertyKey::Literal(literal) => self.emit_literal(literal),
            PropertyKey::Computed(expression) => {
                self.punct("[", TokenFlags::LEADING);
                self.emit_expression(expression, Precedence::Assign, ExprFlags::empty())?;
                self.punct("]", TokenFlags::empty());
            }
        }
        Ok(())
    }

    // =========================================================================
    // Object literal members
    // =========================================================================

    pub(super) fn emit_property(&mut self, property: &Property) -> EmitResult {
        match property.kind {
            PropertyKind::Get | PropertyKind::Set => {
                let function = method_value(property, "accessor value must be a function")?;
                let keyword = if property.kind == PropertyKind::Get {
                    "get"
                } else {
                    "set"
                };
                self.keyword(keyword, TokenFlags::TRAILING_SPACE_RECOMMENDED);
                self.emit_property_key(&property.key)?;
                self.emit_function_tail(function)
            }
            PropertyKind::Init if property.method => {
                let function = method_value(property, "method value must be a function")?;
                self.emit_method_modifiers(function);
                self.emit_property_key(&property.key)?;
                self.emit_function_tail(function)
            }
            PropertyKind::Init => {
                if !(property.shorthand && is_shorthand(&property.key, &property.value)) {
                    self.emit_property_key(&property.key)?;
                    self.punct(":", TokenFlags::TRAILING_SPACE_RECOMMENDED);
                }
                self.emit_expression(&property.value, Precedence::Assign, ExprFlags::empty())
            }
        }
    }
}

fn malformed_template() -> GenerateError {
    GenerateError::malformed(
        NodeKind::TemplateLiteral,
        "template needs exactly one more chunk than substitutions",
    )
}

fn method_value<'a>(property: &'a Property, reason: &'static str) -> Result<&'a Function, GenerateError> {
    match &property.value {
        Expression::Function(function) => Ok(function),
        _ => Err(GenerateError::malformed(NodeKind::Property, reason)),
    }
}

fn is_shorthand(key: &PropertyKey, value: &Expression) -> bool {
    matches!(
        (key, value),
        (PropertyKey::Identifier(key), Expression::Identifier(value)) if key.name == value.name
    )
}
