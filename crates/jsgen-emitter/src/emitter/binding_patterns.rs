//! Binding Pattern Emission Module
//!
//! Destructuring in declarations and parameters, plus the assignment
//! targets that share the same shapes (`[a, b] = c`, `({ x } = y)`).

use jsgen_ast::{Expression, NodeKind, ObjectPatternMember, Pattern, PropertyKey};

use super::{EmitResult, ExprFlags, Printer};
use crate::error::GenerateError;
use crate::precedence::Precedence;
use crate::source_writer::TokenFlags;

/// Whether a pattern binds names or assigns to existing references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PatternTarget {
    Binding,
    Assignment,
}

impl Printer<'_> {
    /// Pattern in a `var`/`let`/`const` declarator or `catch` clause.
    pub(super) fn emit_binding_pattern(&mut self, pattern: &Pattern) -> EmitResult {
        self.emit_pattern(pattern, PatternTarget::Binding, ExprFlags::empty())
    }

    /// Parameter; a rest element is only accepted as the last one.
    pub(super) fn emit_binding_element(&mut self, pattern: &Pattern, is_last: bool) -> EmitResult {
        self.emit_pattern_element(pattern, is_last, PatternTarget::Binding)
    }

    /// Left side of an assignment or a `for`-in/of head.
    pub(super) fn emit_assignment_target(
        &mut self,
        pattern: &Pattern,
        flags: ExprFlags,
    ) -> EmitResult {
        if matches!(pattern, Pattern::Assignment { .. }) {
            return Err(GenerateError::malformed(
                NodeKind::AssignmentExpression,
                "a default value is not an assignment target",
            ));
        }
        self.emit_pattern(pattern, PatternTarget::Assignment, flags)
    }

    fn emit_pattern(
        &mut self,
        pattern: &Pattern,
        target: PatternTarget,
        flags: ExprFlags,
    ) -> EmitResult {
        self.enter()?;
        match pattern {
            Pattern::Identifier(id) => self.identifier(id),
            Pattern::Object { properties } => self.emit_object_pattern(properties, target)?,
            Pattern::Array { elements } => self.emit_array_pattern(elements, target)?,
            Pattern::Assignment { left, right } => {
                self.emit_pattern(left, target, flags)?;
                self.equals();
                self.emit_expression(right, Precedence::Assign, flags.rest())?;
            }
            Pattern::Rest { .. } => {
                return Err(GenerateError::malformed(
                    NodeKind::RestElement,
                    "rest element outside a parameter list or pattern",
                ));
            }
            Pattern::Expression(expression) => {
                if target == PatternTarget::Binding {
                    return Err(GenerateError::malformed(
                        expression.kind(),
                        "binding pattern cannot hold an expression",
                    ));
                }
                if !matches!(
                    **expression,
                    Expression::Identifier(_) | Expression::Member { .. }
                ) {
                    return Err(GenerateError::malformed(
                        expression.kind(),
                        "assignment target must be an identifier or member expression",
                    ));
                }
                self.emit_expression(expression, Precedence::Call, flags)?;
            }
        }
        self.leave();
        Ok(())
    }

    fn emit_pattern_element(
        &mut self,
        pattern: &Pattern,
        is_last: bool,
        target: PatternTarget,
    ) -> EmitResult {
        let Pattern::Rest { argument } = pattern else {
            return self.emit_pattern(pattern, target, ExprFlags::empty());
        };
        if !is_last {
            return Err(GenerateError::malformed(
                NodeKind::RestElement,
                "rest element must be last",
            ));
        }
        self.punct("...", TokenFlags::empty());
        self.emit_pattern(argument, target, ExprFlags::empty())
    }

    // =========================================================================
    // Binding Patterns
    // =========================================================================

    /// `{ a, b: c, ...rest }`
    fn emit_object_pattern(
        &mut self,
        members: &[ObjectPatternMember],
        target: PatternTarget,
    ) -> EmitResult {
        self.writer.start_braces();
        let count = members.len();
        for (index, member) in members.iter().enumerate() {
            if index > 0 {
                self.writer.write_list_separator();
            }
            match member {
                ObjectPatternMember::Property {
                    key,
                    value,
                    shorthand,
                } => {
                    if !(*shorthand && is_shorthand(key, value)) {
                        self.emit_property_key(key)?;
                        self.punct(":", TokenFlags::TRAILING_SPACE_RECOMMENDED);
                    }
                    self.emit_pattern(value, target, ExprFlags::empty())?;
                }
                ObjectPatternMember::Rest { argument } => {
                    if index + 1 != count {
                        return Err(GenerateError::malformed(
                            NodeKind::RestElement,
                            "rest element must be last",
                        ));
                    }
                    self.punct("...", TokenFlags::empty());
                    self.emit_pattern(argument, target, ExprFlags::empty())?;
                }
            }
        }
        self.writer.end_braces();
        Ok(())
    }

    /// `[a, , ...rest]`
    fn emit_array_pattern(
        &mut self,
        elements: &[Option<Pattern>],
        target: PatternTarget,
    ) -> EmitResult {
        self.punct("[", TokenFlags::LEADING);
        let count = elements.len();
        for (index, element) in elements.iter().enumerate() {
            if index > 0 {
                self.writer.write_list_separator();
            }
            if let Some(element) = element {
                self.emit_pattern_element(element, index + 1 == count, target)?;
            }
        }
        if matches!(elements.last(), Some(None)) {
            self.punct(",", TokenFlags::TRAILING);
        }
        self.punct("]", TokenFlags::empty());
        Ok(())
    }
}

/// `{ a }` and `{ a = 1 }` are written without the key.
fn is_shorthand(key: &PropertyKey, value: &Pattern) -> bool {
    let PropertyKey::Identifier(key) = key else {
        return false;
    };
    match value {
        Pattern::Identifier(id) => id.name == key.name,
        Pattern::Assignment { left, .. } => {
            matches!(&**left, Pattern::Identifier(id) if id.name == key.name)
        }
        _ => false,
    }
}
