//! Tests for node kinds, builders and the JSON interchange form.

use super::*;

#[test]
fn test_statement_kinds() {
    assert_eq!(
        Statement::do_while(Statement::block(vec![]), Expression::id("x")).kind(),
        NodeKind::DoWhileStatement
    );
    assert_eq!(Statement::Empty.kind(), NodeKind::EmptyStatement);
    assert_eq!(
        Statement::expr_stmt(Expression::id("a")).kind(),
        NodeKind::ExpressionStatement
    );
    assert_eq!(NodeKind::ForOfStatement.to_string(), "ForOfStatement");
}

#[test]
fn test_pattern_kind_of_member_target() {
    let target = Pattern::from(Expression::prop(Expression::This, "g"));
    assert_eq!(target.kind(), NodeKind::MemberExpression);
    let target = Pattern::from(Expression::id("a"));
    assert!(matches!(target, Pattern::Identifier(_)));
}

#[test]
fn test_quoted_literal_keeps_raw() {
    let literal = Literal::quoted("'cc'");
    assert_eq!(literal.raw.as_deref(), Some("'cc'"));
    assert_eq!(literal.value, LiteralValue::String("cc".to_string()));
}

#[test]
fn test_directive_records_value() {
    let Statement::Expression { directive, .. } = Statement::directive("'use strict'") else {
        panic!("expected an expression statement");
    };
    assert_eq!(directive.as_deref(), Some("use strict"));
}

#[test]
fn test_template_marks_tail() {
    let template = TemplateLiteral::new(&["Tip ", ":"], vec![Expression::id("i")]);
    assert_eq!(template.quasis.len(), 2);
    assert!(!template.quasis[0].tail);
    assert!(template.quasis[1].tail);
}

#[test]
fn test_operator_spelling() {
    assert_eq!(BinaryOperator::StrictEquality.as_str(), "===");
    assert!(BinaryOperator::Instanceof.is_keyword());
    assert!(UnaryOperator::Typeof.is_keyword());
    assert!(!UnaryOperator::Minus.is_keyword());
    assert_eq!(LogicalOperator::Coalesce.as_str(), "??");
    assert_eq!(AssignmentOperator::ShiftRightZeroFill.as_str(), ">>>=");
}

#[test]
fn test_json_interchange() {
    let program = Program::script(vec![Statement::if_then(
        Expression::bool(true),
        Statement::block(vec![Statement::expr_stmt(Expression::call(
            Expression::id("p"),
            vec![],
        ))]),
        None,
    )]);
    let json = serde_json::to_string(&program).unwrap();
    let back: Program = serde_json::from_str(&json).unwrap();
    assert_eq!(back, program);
}

#[test]
fn test_json_defaults_optional_slots() {
    let json = r#"{"body":[{"Return":{}},{"Break":{}}]}"#;
    let program: Program = serde_json::from_str(json).unwrap();
    assert_eq!(program.source_type, SourceType::Script);
    assert_eq!(program.body[0], Statement::ret(None));
    assert_eq!(program.body[1], Statement::break_stmt(None));
}
