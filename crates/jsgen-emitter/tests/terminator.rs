use super::*;
use crate::context::NodeRef;
use jsgen_ast::{Expression, Program, Statement};

fn program() -> Program {
    Program::script(vec![
        Statement::do_while(Statement::block(vec![]), Expression::id("x")),
        Statement::expr_stmt(Expression::id("y")),
    ])
}

#[test]
fn test_default_follows_flags() {
    let program = program();
    let context = WriteContext::list_item(NodeRef::Program(&program), "body", &program.body, 0);
    let terminator = DefaultTerminator;
    assert!(!terminator.terminate_list_item(0, 2, StatementFlags::empty(), &context));
    assert!(terminator.terminate_list_item(0, 2, StatementFlags::NEEDS_SEMICOLON, &context));
    assert!(terminator.terminate_statement(StatementFlags::NEEDS_SEMICOLON, &context));
}

#[test]
fn test_force_terminator_by_kind() {
    let program = program();
    let terminator = ForceTerminator::new([NodeKind::DoWhileStatement]);

    let do_while = WriteContext::list_item(NodeRef::Program(&program), "body", &program.body, 0);
    assert_eq!(do_while.current().kind(), NodeKind::DoWhileStatement);
    assert!(terminator.terminate_list_item(0, 2, StatementFlags::empty(), &do_while));

    let expression = WriteContext::list_item(NodeRef::Program(&program), "body", &program.body, 1);
    assert!(!terminator.terminate_list_item(1, 2, StatementFlags::IS_RIGHT_MOST, &expression));
    assert_eq!(expression.index(), Some(1));
    assert_eq!(expression.list().map(<[Statement]>::len), Some(2));
}

#[test]
fn test_fn_terminator_sees_kind_and_flags() {
    let program = program();
    let terminator = FnTerminator::new(|kind: NodeKind, flags: StatementFlags| {
        kind == NodeKind::ExpressionStatement && !flags.contains(StatementFlags::IS_RIGHT_MOST)
    });
    let context = WriteContext::list_item(NodeRef::Program(&program), "body", &program.body, 1);
    assert!(terminator.terminate_list_item(1, 2, StatementFlags::NEEDS_SEMICOLON, &context));
    assert!(!terminator.terminate_list_item(
        1,
        2,
        StatementFlags::NEEDS_SEMICOLON | StatementFlags::IS_RIGHT_MOST,
        &context
    ));

    let single = WriteContext::statement(NodeRef::Program(&program), "body", &program.body[0]);
    assert!(!terminator.terminate_statement(StatementFlags::NEEDS_SEMICOLON, &single));
    assert_eq!(single.slot(), "body");
    assert!(single.list().is_none());
}
