//! Statement termination hooks.

use std::sync::Mutex;

use jsgen_ast::{
    Class, ClassMember, Expression as E, NodeKind, Program, Statement as S,
};
use jsgen_emitter::{
    FnTerminator, ForceTerminator, StatementFlags, StatementTerminator, WriteContext,
    WriterOptions, generate_with,
};

fn compact_with(terminator: impl StatementTerminator + 'static, program: &Program) -> String {
    let options = WriterOptions::compact().with_terminator(terminator);
    generate_with(program, &options).expect("program should generate")
}

fn do_while(test: &str) -> S {
    S::do_while(S::block(vec![]), E::id(test))
}

fn call_stmt(callee: &str) -> S {
    S::expr_stmt(E::call(E::id(callee), vec![]))
}

#[test]
fn test_default_leaves_do_while_open() {
    let program = Program::script(vec![do_while("x"), call_stmt("a")]);
    let code = jsgen_emitter::generate(&program).expect("program should generate");
    assert_eq!(code, "do{}while(x)a();");
}

#[test]
fn test_force_terminator_closes_do_while() {
    let program = Program::script(vec![do_while("x"), call_stmt("a")]);
    let code = compact_with(ForceTerminator::new([NodeKind::DoWhileStatement]), &program);
    assert_eq!(code, "do{}while(x);a();");
}

#[test]
fn test_fn_terminator_drops_last_semicolon() {
    let terminator = FnTerminator::new(|_kind: NodeKind, flags: StatementFlags| {
        flags.needs_semicolon() && !flags.contains(StatementFlags::IS_RIGHT_MOST)
    });
    let program = Program::script(vec![
        call_stmt("a"),
        S::func_decl("f", vec![], vec![call_stmt("b"), S::ret(Some(E::id("c")))]),
        call_stmt("d"),
    ]);
    assert_eq!(
        compact_with(terminator, &program),
        "a();function f(){b();return c}d()"
    );
}

#[test]
fn test_fn_terminator_does_not_touch_class_fields() {
    let terminator = FnTerminator::new(|_kind: NodeKind, _flags: StatementFlags| false);
    let program = Program::script(vec![S::class_decl(Class::new(
        Some("A"),
        None,
        vec![ClassMember::field("x", Some(E::number(1.0)))],
    ))]);
    assert_eq!(compact_with(terminator, &program), "class A{x=1;}");
}

/// Terminates `do…while` only at the top level of the program.
#[derive(Debug)]
struct TopLevelDoWhile;

impl StatementTerminator for TopLevelDoWhile {
    fn terminate_list_item(
        &self,
        _index: usize,
        _count: usize,
        flags: StatementFlags,
        context: &WriteContext<'_>,
    ) -> bool {
        flags.needs_semicolon()
            || (context.parent().kind() == NodeKind::Program
                && context.current().kind() == NodeKind::DoWhileStatement)
    }
}

#[test]
fn test_custom_terminator_sees_parent() {
    let program = Program::script(vec![
        do_while("x"),
        S::func_decl("f", vec![], vec![do_while("y")]),
    ]);
    assert_eq!(
        compact_with(TopLevelDoWhile, &program),
        "do{}while(x);function f(){do{}while(y)}"
    );
}

/// Records every hook call as `(slot, kind, index)`.
#[derive(Debug, Default)]
struct Recorder {
    calls: Mutex<Vec<(&'static str, NodeKind, Option<usize>)>>,
}

impl StatementTerminator for &'static Recorder {
    fn terminate_statement(&self, flags: StatementFlags, context: &WriteContext<'_>) -> bool {
        assert!(flags.contains(StatementFlags::IS_STATEMENT_BODY));
        self.record(context);
        flags.needs_semicolon()
    }

    fn terminate_list_item(
        &self,
        index: usize,
        count: usize,
        flags: StatementFlags,
        context: &WriteContext<'_>,
    ) -> bool {
        assert_eq!(context.index(), Some(index));
        assert_eq!(context.list().map(<[S]>::len), Some(count));
        assert_eq!(flags.contains(StatementFlags::IS_RIGHT_MOST), index + 1 == count);
        self.record(context);
        flags.needs_semicolon()
    }
}

impl Recorder {
    fn record(&self, context: &WriteContext<'_>) {
        self.calls.lock().expect("recorder lock").push((
            context.slot(),
            context.current().kind(),
            context.index(),
        ));
    }
}

#[test]
fn test_hooks_receive_slot_and_position() {
    let recorder: &'static Recorder = Box::leak(Box::default());
    let program = Program::script(vec![
        S::if_then(E::id("a"), call_stmt("b"), Some(call_stmt("c"))),
        S::while_loop(E::id("x"), S::block(vec![call_stmt("y")])),
    ]);
    let code = compact_with(recorder, &program);
    assert_eq!(code, "if(a)b();else c();while(x){y();}");

    let calls = recorder.calls.lock().expect("recorder lock").clone();
    assert_eq!(
        calls,
        vec![
            ("consequent", NodeKind::ExpressionStatement, None),
            ("alternate", NodeKind::ExpressionStatement, None),
            ("body", NodeKind::IfStatement, Some(0)),
            ("body", NodeKind::ExpressionStatement, Some(0)),
            ("body", NodeKind::BlockStatement, None),
            ("body", NodeKind::WhileStatement, Some(1)),
        ]
    );
}
