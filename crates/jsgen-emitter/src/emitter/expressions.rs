//! Expression emission and parenthesization.

use jsgen_ast::{
    BinaryOperator, Expression, LogicalOperator, MemberProperty, NodeKind, ObjectMember, Pattern,
};

use super::{EmitResult, ExprFlags, Printer};
use crate::error::GenerateError;
use crate::precedence::{
    self, Precedence, binary_operand_minimums, is_bare_integer_object, is_chain,
    is_let_computed_member, logical_operand_minimums, mixes_coalesce,
};
use crate::source_writer::TokenFlags;

impl Printer<'_> {
    /// Emit `expression` into a slot that accepts `minimum` or tighter.
    pub(super) fn emit_expression(
        &mut self,
        expression: &Expression,
        minimum: Precedence,
        flags: ExprFlags,
    ) -> EmitResult {
        self.enter()?;
        if needs_wrapping(expression, minimum, flags) {
            self.open_paren();
            self.emit_expression_unwrapped(expression, Precedence::Lowest, ExprFlags::empty())?;
            self.close_paren();
        } else {
            self.emit_expression_unwrapped(expression, minimum, flags)?;
        }
        self.leave();
        Ok(())
    }

    /// Emit `expression` in parentheses regardless of precedence.
    pub(super) fn emit_parenthesized(&mut self, expression: &Expression) -> EmitResult {
        self.open_paren();
        self.emit_expression(expression, Precedence::Lowest, ExprFlags::empty())?;
        self.close_paren();
        Ok(())
    }

    /// Argument, array element or other comma-list slot; spread is allowed.
    pub(super) fn emit_list_element(&mut self, expression: &Expression) -> EmitResult {
        if let Expression::Spread { argument } = expression {
            self.punct("...", TokenFlags::empty());
            return self.emit_expression(argument, Precedence::Assign, ExprFlags::empty());
        }
        self.emit_expression(expression, Precedence::Assign, ExprFlags::empty())
    }

    fn emit_expression_unwrapped(
        &mut self,
        expression: &Expression,
        minimum: Precedence,
        flags: ExprFlags,
    ) -> EmitResult {
        match expression {
            Expression::Identifier(id) => self.identifier(id),
            Expression::PrivateName(id) => self.private_name(id),
            Expression::Literal(literal) => self.emit_literal(literal),
            Expression::This => self.keyword("this", TokenFlags::empty()),
            Expression::Super => self.keyword("super", TokenFlags::empty()),
            Expression::Array { elements } => return self.emit_array(elements),
            Expression::Object { properties } => return self.emit_object(properties),
            Expression::Function(function) => return self.emit_function(function),
            Expression::Arrow(arrow) => return self.emit_arrow(arrow, flags),
            Expression::Class(class) => return self.emit_class(class),
            Expression::Template(template) => return self.emit_template_literal(template),
            Expression::TaggedTemplate { tag, quasi } => {
                self.emit_callee_like(tag, flags.leftmost() | (flags & ExprFlags::FORBID_CALL))?;
                return self.emit_template_literal(quasi);
            }
            Expression::Unary { operator, argument } => {
                if operator.is_keyword() {
                    self.keyword(operator.as_str(), TokenFlags::TRAILING_SPACE_RECOMMENDED);
                } else {
                    self.punct(operator.as_str(), TokenFlags::empty());
                }
                return self.emit_expression(argument, Precedence::Prefix, ExprFlags::empty());
            }
            Expression::Update {
                operator,
                prefix,
                argument,
            } => {
                if *prefix {
                    self.punct(operator.as_str(), TokenFlags::empty());
                    return self.emit_expression(argument, Precedence::Call, ExprFlags::empty());
                }
                self.emit_expression(argument, Precedence::Call, flags.leftmost())?;
                self.punct(operator.as_str(), TokenFlags::empty());
            }
            Expression::Binary {
                operator,
                left,
                right,
            } => return self.emit_binary(*operator, left, right, flags),
            Expression::Logical {
                operator,
                left,
                right,
            } => return self.emit_logical(*operator, left, right, flags),
            Expression::Assignment {
                operator,
                left,
                right,
            } => {
                if !operator.is_plain() && !is_simple_target(left) {
                    return Err(GenerateError::malformed(
                        NodeKind::AssignmentExpression,
                        "compound assignment needs an identifier or member target",
                    ));
                }
                self.emit_assignment_target(left, flags.leftmost())?;
                self.punct(operator.as_str(), TokenFlags::SURROUNDING_SPACE_RECOMMENDED);
                return self.emit_expression(right, Precedence::Assign, flags.rest());
            }
            Expression::Conditional {
                test,
                consequent,
                alternate,
            } => {
                self.emit_expression(test, Precedence::Coalesce, flags.leftmost())?;
                self.punct("?", TokenFlags::SURROUNDING_SPACE_RECOMMENDED);
                self.emit_expression(consequent, Precedence::Assign, ExprFlags::empty())?;
                self.punct(":", TokenFlags::SURROUNDING_SPACE_RECOMMENDED);
                return self.emit_expression(alternate, Precedence::Assign, flags.rest());
            }
            Expression::Call {
                callee,
                arguments,
                optional,
            } => {
                self.emit_callee_like(callee, flags.leftmost())?;
                if *optional {
                    self.punct("?.", TokenFlags::empty());
                }
                return self.emit_arguments(arguments);
            }
            Expression::New { callee, arguments } => {
                self.keyword("new", TokenFlags::TRAILING_SPACE_RECOMMENDED);
                if is_chain(callee) {
                    self.emit_parenthesized(callee)?;
                } else {
                    self.emit_expression(callee, Precedence::Member, ExprFlags::FORBID_CALL)?;
                }
                // `new X` binds looser than a member access or call; print
                // the empty list whenever the slot needs the tighter form.
                if !arguments.is_empty() || minimum > Precedence::New {
                    return self.emit_arguments(arguments);
                }
            }
            Expression::Member {
                object,
                property,
                optional,
            } => return self.emit_member(object, property, *optional, flags),
            Expression::Sequence { expressions } => {
                if expressions.is_empty() {
                    return Err(GenerateError::malformed(
                        NodeKind::SequenceExpression,
                        "sequence needs at least one expression",
                    ));
                }
                for (index, item) in expressions.iter().enumerate() {
                    let item_flags = if index == 0 {
                        flags.leftmost()
                    } else {
                        self.writer.write_list_separator();
                        flags.rest()
                    };
                    self.emit_expression(item, Precedence::Assign, item_flags)?;
                }
            }
            Expression::Spread { .. } => {
                return Err(GenerateError::malformed(
                    NodeKind::SpreadElement,
                    "spread is only valid in argument lists, arrays and objects",
                ));
            }
            Expression::Yield { argument, delegate } => {
                match argument {
                    Some(argument) => {
                        if *delegate {
                            self.keyword("yield", TokenFlags::empty());
                            self.punct("*", TokenFlags::TRAILING_SPACE_RECOMMENDED);
                        } else {
                            self.keyword("yield", TokenFlags::TRAILING_SPACE_RECOMMENDED);
                        }
                        return self.emit_expression(argument, Precedence::Assign, flags.rest());
                    }
                    None if *delegate => {
                        return Err(GenerateError::malformed(
                            NodeKind::YieldExpression,
                            "delegating yield needs an argument",
                        ));
                    }
                    None => self.keyword("yield", TokenFlags::empty()),
                }
            }
            Expression::Await { argument } => {
                self.keyword("await", TokenFlags::TRAILING_SPACE_RECOMMENDED);
                return self.emit_expression(argument, Precedence::Prefix, ExprFlags::empty());
            }
            Expression::Chain { expression } => {
                if !matches!(
                    **expression,
                    Expression::Member { .. } | Expression::Call { .. }
                ) {
                    return Err(GenerateError::malformed(
                        NodeKind::ChainExpression,
                        "optional chain must wrap a member or call expression",
                    ));
                }
                return self.emit_expression_unwrapped(expression, minimum, flags);
            }
            Expression::Import { source, options } => {
                self.keyword("import", TokenFlags::empty());
                self.open_paren();
                self.emit_expression(source, Precedence::Assign, ExprFlags::empty())?;
                if let Some(options) = options {
                    self.writer.write_list_separator();
                    self.emit_expression(options, Precedence::Assign, ExprFlags::empty())?;
                }
                self.close_paren();
            }
            Expression::MetaProperty { meta, property } => {
                self.identifier(meta);
                self.punct(".", TokenFlags::empty());
                self.identifier(property);
            }
            Expression::Extension(extension) => {
                return Err(GenerateError::UnsupportedNode {
                    kind: extension.kind.clone(),
                });
            }
        }
        Ok(())
    }

    // =========================================================================
    // Operators
    // =========================================================================

    fn emit_binary(
        &mut self,
        operator: BinaryOperator,
        left: &Expression,
        right: &Expression,
        flags: ExprFlags,
    ) -> EmitResult {
        let (left_minimum, right_minimum) = binary_operand_minimums(operator);
        self.emit_expression(left, left_minimum, flags.leftmost())?;
        if operator.is_keyword() {
            self.keyword(operator.as_str(), TokenFlags::SURROUNDING_SPACE_RECOMMENDED);
        } else {
            self.punct(operator.as_str(), TokenFlags::SURROUNDING_SPACE_RECOMMENDED);
        }
        self.emit_expression(right, right_minimum, flags.rest())
    }

    fn emit_logical(
        &mut self,
        operator: LogicalOperator,
        left: &Expression,
        right: &Expression,
        flags: ExprFlags,
    ) -> EmitResult {
        let (mut left_minimum, mut right_minimum) = logical_operand_minimums(operator);
        if mixes_coalesce(operator, left) {
            left_minimum = Precedence::Primary;
        }
        if mixes_coalesce(operator, right) {
            right_minimum = Precedence::Primary;
        }
        self.emit_expression(left, left_minimum, flags.leftmost())?;
        self.punct(operator.as_str(), TokenFlags::SURROUNDING_SPACE_RECOMMENDED);
        self.emit_expression(right, right_minimum, flags.rest())
    }

    // =========================================================================
    // Calls and members
    // =========================================================================

    /// Callee, tag or member object: a left-hand-side slot that must not
    /// swallow an optional chain.
    fn emit_callee_like(&mut self, expression: &Expression, flags: ExprFlags) -> EmitResult {
        if is_chain(expression) {
            return self.emit_parenthesized(expression);
        }
        self.emit_expression(expression, Precedence::Call, flags)
    }

    pub(super) fn emit_arguments(&mut self, arguments: &[Expression]) -> EmitResult {
        self.open_paren();
        self.emit_comma_separated(arguments, Self::emit_list_element)?;
        self.close_paren();
        Ok(())
    }

    fn emit_member(
        &mut self,
        object: &Expression,
        property: &MemberProperty,
        optional: bool,
        flags: ExprFlags,
    ) -> EmitResult {
        let object_flags = flags.leftmost() | (flags & ExprFlags::FORBID_CALL);
        let dotted = !matches!(property, MemberProperty::Computed(_));
        if (dotted && is_bare_integer_object(object))
            || (flags.intersects(ExprFlags::STATEMENT_START | ExprFlags::FOR_HEAD_START)
                && is_let_computed_member(object, property))
        {
            self.emit_parenthesized(object)?;
        } else {
            self.emit_callee_like(object, object_flags)?;
        }

        match property {
            MemberProperty::Identifier(id) => {
                self.punct(if optional { "?." } else { "." }, TokenFlags::empty());
                self.identifier(id);
            }
            MemberProperty::PrivateName(id) => {
                self.punct(if optional { "?." } else { "." }, TokenFlags::empty());
                self.private_name(id);
            }
            MemberProperty::Computed(expression) => {
                if optional {
                    self.punct("?.", TokenFlags::empty());
                }
                self.punct("[", TokenFlags::LEADING);
                self.emit_expression(expression, Precedence::Lowest, ExprFlags::empty())?;
                self.punct("]", TokenFlags::empty());
            }
        }
        Ok(())
    }

    // =========================================================================
    // Array and object literals
    // =========================================================================

    fn emit_array(&mut self, elements: &[Option<Expression>]) -> EmitResult {
        let multi_line = self.writer.start_array(elements.len());
        self.emit_elements_with_holes(elements, multi_line, Self::emit_list_element)?;
        self.writer.end_array(multi_line);
        Ok(())
    }

    fn emit_object(&mut self, members: &[ObjectMember]) -> EmitResult {
        let multi_line = self.writer.start_object(members.len());
        for (index, member) in members.iter().enumerate() {
            if index > 0 {
                self.writer.write_member_separator(multi_line);
            }
            match member {
                ObjectMember::Property(property) => self.emit_property(property)?,
                ObjectMember::Spread(argument) => {
                    self.punct("...", TokenFlags::empty());
                    self.emit_expression(argument, Precedence::Assign, ExprFlags::empty())?;
                }
            }
        }
        self.writer.end_object(multi_line);
        Ok(())
    }
}

/// Parentheses demanded by the slot rather than by operator precedence.
fn needs_wrapping(expression: &Expression, minimum: Precedence, flags: ExprFlags) -> bool {
    if precedence::needs_parens(expression, minimum) {
        return true;
    }
    match expression {
        // `{` would open a block; `function`/`class` would start a declaration.
        Expression::Object { .. } => {
            flags.intersects(ExprFlags::STATEMENT_START | ExprFlags::ARROW_BODY_START)
        }
        Expression::Function(_) | Expression::Class(_) => {
            flags.intersects(ExprFlags::STATEMENT_START | ExprFlags::EXPORT_DEFAULT_START)
        }
        Expression::Assignment { left, .. } => {
            matches!(**left, Pattern::Object { .. })
                && flags.intersects(ExprFlags::STATEMENT_START | ExprFlags::ARROW_BODY_START)
        }
        Expression::Binary {
            operator: BinaryOperator::In,
            ..
        } => flags.contains(ExprFlags::FORBID_IN),
        Expression::Call { .. } | Expression::Chain { .. } | Expression::Import { .. } => {
            flags.contains(ExprFlags::FORBID_CALL)
        }
        _ => false,
    }
}

/// Target of a compound assignment such as `+=`.
fn is_simple_target(pattern: &Pattern) -> bool {
    match pattern {
        Pattern::Identifier(_) => true,
        Pattern::Expression(expression) => {
            matches!(**expression, Expression::Identifier(_) | Expression::Member { .. })
        }
        _ => false,
    }
}
