use super::*;
use jsgen_ast::{Expression, UnaryOperator, UpdateOperator};

#[test]
fn test_levels_are_ordered() {
    assert!(Precedence::Comma < Precedence::Assign);
    assert!(Precedence::Assign < Precedence::Conditional);
    assert!(Precedence::Coalesce < Precedence::LogicalOr);
    assert!(Precedence::LogicalOr < Precedence::LogicalAnd);
    assert!(Precedence::Additive < Precedence::Multiplicative);
    assert!(Precedence::New < Precedence::Call);
    assert_eq!(Precedence::Primary.next(), Precedence::Primary);
    assert_eq!(Precedence::Additive.next(), Precedence::Multiplicative);
}

#[test]
fn test_left_associative_operands() {
    let (left, right) = binary_operand_minimums(BinaryOperator::Subtraction);
    assert_eq!(left, Precedence::Additive);
    assert_eq!(right, Precedence::Multiplicative);

    // a - b - c keeps its left operand bare, a - (b - c) wraps the right one.
    let inner = Expression::binary(
        Expression::id("b"),
        BinaryOperator::Subtraction,
        Expression::id("c"),
    );
    assert!(!needs_parens(&inner, left));
    assert!(needs_parens(&inner, right));
}

#[test]
fn test_exponent_is_right_associative() {
    assert_eq!(
        binary_associativity(BinaryOperator::Exponential),
        Associativity::Right
    );
    let (left, right) = binary_operand_minimums(BinaryOperator::Exponential);
    let power = Expression::binary(
        Expression::id("a"),
        BinaryOperator::Exponential,
        Expression::id("b"),
    );
    assert!(needs_parens(&power, left));
    assert!(!needs_parens(&power, right));

    let negated = Expression::unary(UnaryOperator::Minus, Expression::id("a"));
    assert!(needs_parens(&negated, left));
}

#[test]
fn test_coalesce_mixing() {
    let or = Expression::logical_or(Expression::id("a"), Expression::id("b"));
    assert!(mixes_coalesce(LogicalOperator::Coalesce, &or));
    assert!(!mixes_coalesce(LogicalOperator::And, &or));

    let coalesce = Expression::logical(
        Expression::id("a"),
        LogicalOperator::Coalesce,
        Expression::id("b"),
    );
    assert!(mixes_coalesce(LogicalOperator::Or, &coalesce));
    assert!(!mixes_coalesce(LogicalOperator::Coalesce, &coalesce));
}

#[test]
fn test_expression_levels() {
    let sequence = Expression::sequence(vec![Expression::id("a"), Expression::id("b")]);
    assert_eq!(Precedence::of_expression(&sequence), Precedence::Comma);
    assert!(needs_parens(&sequence, Precedence::Assign));
    assert!(!needs_parens(&sequence, Precedence::Lowest));

    let postfix = Expression::postfix(UpdateOperator::Increment, Expression::id("a"));
    assert_eq!(Precedence::of_expression(&postfix), Precedence::Postfix);

    let negative = Expression::number(-1.0);
    assert_eq!(Precedence::of_expression(&negative), Precedence::Prefix);
    assert_eq!(
        Precedence::of_expression(&Expression::number(1.0)),
        Precedence::Primary
    );
}

#[test]
fn test_integer_member_object() {
    assert!(is_bare_integer_object(&Expression::number(1.0)));
    assert!(!is_bare_integer_object(&Expression::number(1.5)));
    assert!(!is_bare_integer_object(&Expression::number(1e21)));
    assert!(!is_bare_integer_object(&Expression::id("a")));
}

#[test]
fn test_let_computed_member() {
    let index = MemberProperty::Computed(Box::new(Expression::number(0.0)));
    assert!(is_let_computed_member(&Expression::id("let"), &index));
    assert!(!is_let_computed_member(&Expression::id("a"), &index));
}
