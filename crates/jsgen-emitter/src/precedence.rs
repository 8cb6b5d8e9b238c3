//! Operator precedence and the parenthesization decision.
//!
//! Every expression has a binding strength. A child slot asks for a minimum
//! strength; a child that binds looser than that gets wrapped in parentheses.
//! Associativity is folded into the minimums: the non-associative side of an
//! operator asks for one level above the operator itself.

use jsgen_ast::{
    BinaryOperator, Expression, LiteralValue, LogicalOperator, MemberProperty,
};

/// Binding strength, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    Lowest,
    Comma,
    /// Assignment, arrow functions and `yield`
    Assign,
    Conditional,
    Coalesce,
    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equality,
    Relational,
    Shift,
    Additive,
    Multiplicative,
    Exponentiation,
    /// Unary operators, prefix update, `await`
    Prefix,
    /// Postfix update
    Postfix,
    /// `new X` without an argument list
    New,
    Call,
    Member,
    Primary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

impl Precedence {
    /// The next stronger level; `Primary` saturates.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Lowest => Self::Comma,
            Self::Comma => Self::Assign,
            Self::Assign => Self::Conditional,
            Self::Conditional => Self::Coalesce,
            Self::Coalesce => Self::LogicalOr,
            Self::LogicalOr => Self::LogicalAnd,
            Self::LogicalAnd => Self::BitwiseOr,
            Self::BitwiseOr => Self::BitwiseXor,
            Self::BitwiseXor => Self::BitwiseAnd,
            Self::BitwiseAnd => Self::Equality,
            Self::Equality => Self::Relational,
            Self::Relational => Self::Shift,
            Self::Shift => Self::Additive,
            Self::Additive => Self::Multiplicative,
            Self::Multiplicative => Self::Exponentiation,
            Self::Exponentiation => Self::Prefix,
            Self::Prefix => Self::Postfix,
            Self::Postfix => Self::New,
            Self::New => Self::Call,
            Self::Call => Self::Member,
            Self::Member | Self::Primary => Self::Primary,
        }
    }

    #[must_use]
    pub const fn of_binary(operator: BinaryOperator) -> Self {
        match operator {
            BinaryOperator::Equality
            | BinaryOperator::Inequality
            | BinaryOperator::StrictEquality
            | BinaryOperator::StrictInequality => Self::Equality,
            BinaryOperator::LessThan
            | BinaryOperator::LessEqualThan
            | BinaryOperator::GreaterThan
            | BinaryOperator::GreaterEqualThan
            | BinaryOperator::In
            | BinaryOperator::Instanceof => Self::Relational,
            BinaryOperator::ShiftLeft
            | BinaryOperator::ShiftRight
            | BinaryOperator::ShiftRightZeroFill => Self::Shift,
            BinaryOperator::Addition | BinaryOperator::Subtraction => Self::Additive,
            BinaryOperator::Multiplication
            | BinaryOperator::Division
            | BinaryOperator::Remainder => Self::Multiplicative,
            BinaryOperator::Exponential => Self::Exponentiation,
            BinaryOperator::BitwiseOr => Self::BitwiseOr,
            BinaryOperator::BitwiseXor => Self::BitwiseXor,
            BinaryOperator::BitwiseAnd => Self::BitwiseAnd,
        }
    }

    #[must_use]
    pub const fn of_logical(operator: LogicalOperator) -> Self {
        match operator {
            LogicalOperator::Or => Self::LogicalOr,
            LogicalOperator::And => Self::LogicalAnd,
            LogicalOperator::Coalesce => Self::Coalesce,
        }
    }

    /// Binding strength of `expression` as it will be printed.
    ///
    /// `new X` with no arguments reports `Member`: the emitter prints the
    /// empty argument list whenever the looser `New` form would need
    /// parentheses.
    #[must_use]
    pub fn of_expression(expression: &Expression) -> Self {
        match expression {
            Expression::Sequence { .. } => Self::Comma,
            Expression::Assignment { .. } | Expression::Arrow(_) | Expression::Yield { .. } => {
                Self::Assign
            }
            Expression::Conditional { .. } => Self::Conditional,
            Expression::Logical { operator, .. } => Self::of_logical(*operator),
            Expression::Binary { operator, .. } => Self::of_binary(*operator),
            Expression::Unary { .. } | Expression::Await { .. } => Self::Prefix,
            Expression::Update { prefix, .. } => {
                if *prefix {
                    Self::Prefix
                } else {
                    Self::Postfix
                }
            }
            Expression::Spread { .. } => Self::Comma,
            Expression::Call { .. } | Expression::Chain { .. } | Expression::Import { .. } => {
                Self::Call
            }
            Expression::New { .. }
            | Expression::Member { .. }
            | Expression::TaggedTemplate { .. } => Self::Member,
            Expression::Literal(literal) => match literal.value {
                LiteralValue::Number(value)
                    if value.is_sign_negative() && value != 0.0 && !value.is_nan() =>
                {
                    Self::Prefix
                }
                _ => Self::Primary,
            },
            Expression::Identifier(_)
            | Expression::PrivateName(_)
            | Expression::This
            | Expression::Super
            | Expression::Array { .. }
            | Expression::Object { .. }
            | Expression::Function(_)
            | Expression::Class(_)
            | Expression::Template(_)
            | Expression::MetaProperty { .. }
            | Expression::Extension(_) => Self::Primary,
        }
    }
}

#[must_use]
pub const fn binary_associativity(operator: BinaryOperator) -> Associativity {
    match operator {
        BinaryOperator::Exponential => Associativity::Right,
        _ => Associativity::Left,
    }
}

/// Minimum precedences for the `(left, right)` operands of a binary operator.
#[must_use]
pub const fn binary_operand_minimums(operator: BinaryOperator) -> (Precedence, Precedence) {
    let precedence = Precedence::of_binary(operator);
    match binary_associativity(operator) {
        Associativity::Left => (precedence, precedence.next()),
        // `-a ** b` is a syntax error, so the left side must bind at least
        // as tight as a postfix expression.
        Associativity::Right => (Precedence::Postfix, precedence),
    }
}

/// Minimum precedences for the `(left, right)` operands of a logical operator.
#[must_use]
pub const fn logical_operand_minimums(operator: LogicalOperator) -> (Precedence, Precedence) {
    let precedence = Precedence::of_logical(operator);
    (precedence, precedence.next())
}

/// `??` cannot be mixed with `||` or `&&` without explicit grouping.
#[must_use]
pub fn mixes_coalesce(parent: LogicalOperator, child: &Expression) -> bool {
    let Expression::Logical { operator, .. } = child else {
        return false;
    };
    (parent == LogicalOperator::Coalesce) != (*operator == LogicalOperator::Coalesce)
}

/// Whether `child` must be wrapped when printed in a slot asking for `minimum`.
#[must_use]
pub fn needs_parens(child: &Expression, minimum: Precedence) -> bool {
    Precedence::of_expression(child) < minimum
}

/// `1.toString()` would lex as a malformed number; such objects are wrapped.
#[must_use]
pub fn is_bare_integer_object(expression: &Expression) -> bool {
    let Expression::Literal(literal) = expression else {
        return false;
    };
    // Numbers print in canonical form, which has neither `.` nor an exponent
    // exactly for integers below 1e21.
    match literal.value {
        LiteralValue::Number(value) => {
            value.is_finite() && value.fract() == 0.0 && value.abs() < 1e21
        }
        _ => false,
    }
}

/// An optional chain cannot be continued by an enclosing member, call or tag
/// without changing where the short-circuit ends.
#[must_use]
pub const fn is_chain(expression: &Expression) -> bool {
    matches!(expression, Expression::Chain { .. })
}

/// `let[` at the start of a statement is a lexical declaration.
#[must_use]
pub fn is_let_computed_member(object: &Expression, property: &MemberProperty) -> bool {
    matches!(property, MemberProperty::Computed(_))
        && matches!(object, Expression::Identifier(id) if id.name == "let")
}

#[cfg(test)]
#[path = "../tests/precedence.rs"]
mod tests;
