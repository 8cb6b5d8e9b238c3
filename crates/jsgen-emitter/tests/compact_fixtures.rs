//! Compact output for trees shaped like real minified bundles.

use jsgen_ast::{
    ArrowBody, ArrowFunction, BinaryOperator, BlockStatement, Class, ClassMember, Expression as E,
    ForHead, ForInit, Function, MethodDefinition, MethodKind, NodeKind, ObjectMember,
    ObjectPatternMember, Pattern, Program, PropertyKey, Statement as S, SwitchCase,
    UnaryOperator, UpdateOperator, VariableDeclaration, VariableDeclarator, VariableKind,
};
use jsgen_emitter::{ForceTerminator, WriterOptions, generate_with};

fn options() -> WriterOptions {
    WriterOptions::compact().with_terminator(ForceTerminator::new([NodeKind::DoWhileStatement]))
}

fn script(body: Vec<S>) -> String {
    generate_with(&Program::script(body), &options()).expect("script should generate")
}

fn module(body: Vec<S>) -> String {
    generate_with(&Program::module(body), &options()).expect("module should generate")
}

fn call(callee: &str, args: Vec<E>) -> E {
    E::call(E::id(callee), args)
}

fn method_call(object: E, method: &str, args: Vec<E>) -> E {
    E::call(E::prop(object, method), args)
}

fn strict_eq(left: E, right: E) -> E {
    E::binary(left, BinaryOperator::StrictEquality, right)
}

fn empty_object() -> E {
    E::object(vec![])
}

#[test]
fn test_control_flow_statements() {
    let code = script(vec![
        S::if_then(
            E::bool(true),
            S::block(vec![S::expr_stmt(call("p", vec![]))]),
            None,
        ),
        S::switch(
            E::id("foo"),
            vec![SwitchCase::case(
                E::quoted("'A'"),
                vec![S::expr_stmt(call("p", vec![])), S::break_stmt(None)],
            )],
        ),
        S::switch(
            E::id("foo"),
            vec![SwitchCase::default_case(vec![
                S::expr_stmt(call("p", vec![])),
                S::break_stmt(None),
            ])],
        ),
        S::for_loop(
            Some(ForInit::Variable(VariableDeclaration::new(
                VariableKind::Var,
                vec![VariableDeclarator::new(Pattern::id("a"), Some(E::array(vec![])))],
            ))),
            None,
            None,
            S::block(vec![]),
        ),
        S::for_of(
            ForHead::Variable(VariableDeclaration::new(
                VariableKind::Var,
                vec![VariableDeclarator::new(Pattern::id("elem"), None)],
            )),
            E::id("list"),
            S::block(vec![]),
        ),
    ]);
    assert_eq!(
        code,
        "if(true){p();}switch(foo){case'A':p();break;}switch(foo){default:p();break;}for(var a=[];;){}for(var elem of list){}"
    );
}

#[test]
fn test_raw_strings_and_template_arrows() {
    let code = script(vec![
        S::var_decl(
            VariableKind::Var,
            Pattern::id("s"),
            Some(E::quoted("\"a\\\r\nb\"")),
        ),
        S::expr_stmt(E::arrow(
            vec![Pattern::id("tip"), Pattern::id("i")],
            method_call(
                E::id("console"),
                "log",
                vec![E::binary(
                    E::template(&["Tip ", ":"], vec![E::id("i")]),
                    BinaryOperator::Addition,
                    E::id("tip"),
                )],
            ),
        )),
    ]);
    assert_eq!(
        code,
        "var s=\"a\\\r\nb\";(tip,i)=>console.log(`Tip ${i}:`+tip);"
    );
}

#[test]
fn test_exported_class_with_accessor() {
    let getter = ClassMember::Method(MethodDefinition {
        key: PropertyKey::id("is"),
        kind: MethodKind::Get,
        is_static: true,
        value: Function::new(None, vec![], vec![S::ret(Some(E::quoted("'aa'")))]),
    });
    let constructor = ClassMember::constructor(
        vec![Pattern::id("a"), Pattern::id("b")],
        vec![
            S::expr_stmt(E::call(E::Super, vec![E::id("a")])),
            S::expr_stmt(E::assign(
                E::prop(E::This, "_div"),
                method_call(E::id("document"), "createElement", vec![E::quoted("'div'")]),
            )),
        ],
    );
    let code = module(vec![S::export_decl(S::class_decl(Class::new(
        Some("aa"),
        Some(E::id("HTMLElement")),
        vec![constructor, getter],
    )))]);
    assert_eq!(
        code,
        "export class aa extends HTMLElement{constructor(a,b){super(a);this._div=document.createElement('div');}static get is(){return'aa';}}"
    );
}

#[test]
fn test_if_bodies_without_braces() {
    let define = |target: E, props: &str| {
        S::expr_stmt(call("_defineProperties", vec![target, E::id(props)]))
    };
    let code = script(vec![S::func_decl(
        "_createClass",
        vec![
            Pattern::id("Constructor"),
            Pattern::id("protoProps"),
            Pattern::id("staticProps"),
        ],
        vec![
            S::if_then(
                E::id("protoProps"),
                define(E::prop(E::id("Constructor"), "prototype"), "protoProps"),
                None,
            ),
            S::if_then(
                E::id("staticProps"),
                define(E::id("Constructor"), "staticProps"),
                None,
            ),
            S::ret(Some(E::id("Constructor"))),
        ],
    )]);
    assert_eq!(
        code,
        "function _createClass(Constructor,protoProps,staticProps){if(protoProps)_defineProperties(Constructor.prototype,protoProps);if(staticProps)_defineProperties(Constructor,staticProps);return Constructor;}"
    );
}

#[test]
fn test_nested_assignments_in_logical_chain() {
    let a_s = || E::elem(E::id("a"), E::id("S"));
    let a_uid = || E::prop(E::id("a"), "uniqueID");
    let o_uid = || E::elem(E::id("o"), a_uid());

    let test = E::conditional(
        E::id("x"),
        strict_eq(
            method_call(E::prop(E::id("a"), "nodeName"), "toLowerCase", vec![]),
            E::id("f"),
        ),
        strict_eq(E::number(1.0), E::prop(E::id("a"), "nodeType")),
    );
    let cache = E::assign(
        E::id("o"),
        E::logical_or(a_s(), E::assign(a_s(), empty_object())),
    );
    let outer = E::assign(
        E::id("i"),
        E::logical_or(
            E::elem(cache, a_uid()),
            E::assign(o_uid(), empty_object()),
        ),
    );
    let store = E::assign(
        E::elem(outer, E::id("h")),
        E::array(vec![E::id("k"), E::id("d")]),
    );
    let sequence = E::sequence(vec![
        E::logical_and(E::id("p"), store),
        strict_eq(E::id("a"), E::id("e")),
    ]);
    let condition = E::logical_and(
        E::logical_and(test, E::prefix(UpdateOperator::Increment, E::id("d"))),
        sequence,
    );

    let code = script(vec![S::if_then(condition, S::block(vec![]), None)]);
    assert_eq!(
        code,
        "if((x?a.nodeName.toLowerCase()===f:1===a.nodeType)&&++d&&(p&&((i=(o=a[S]||(a[S]={}))[a.uniqueID]||(o[a.uniqueID]={}))[h]=[k,d]),a===e)){}"
    );
}

#[test]
fn test_class_fields_and_super_call() {
    let code = script(vec![S::class_decl(Class::new(
        Some("a"),
        Some(E::id("b")),
        vec![
            ClassMember::constructor(
                vec![],
                vec![
                    S::expr_stmt(E::call(E::Super, vec![])),
                    S::expr_stmt(E::assign(E::prop(E::This, "g"), E::number(1.0))),
                ],
            ),
            ClassMember::field("q", Some(E::number(1.0))),
            ClassMember::field("r", Some(E::quoted("'cc'"))),
        ],
    ))]);
    assert_eq!(
        code,
        "class a extends b{constructor(){super();this.g=1;}q=1;r='cc';}"
    );
}

#[test]
fn test_assignment_chain_member_objects() {
    let a_s = || E::elem(E::id("a"), E::id("S"));
    let a_uid = || E::prop(E::id("a"), "uniqueID");

    let cache = E::assign(
        E::id("o"),
        E::logical_or(
            E::elem(E::assign(E::id("a"), E::id("c")), E::id("S")),
            E::assign(a_s(), empty_object()),
        ),
    );
    let outer = E::assign(
        E::id("i"),
        E::logical_or(
            E::elem(cache, a_uid()),
            E::assign(E::elem(E::id("o"), a_uid()), empty_object()),
        ),
    );
    let entry = E::assign(
        E::id("r"),
        E::logical_or(E::elem(outer, E::id("h")), E::array(vec![])),
    );
    let hit = E::assign(
        E::id("s"),
        E::logical_and(
            strict_eq(E::elem(entry, E::number(0.0)), E::id("k")),
            E::elem(E::id("r"), E::number(1.0)),
        ),
    );
    let code = script(vec![S::expr_stmt(E::sequence(vec![
        E::assign(
            E::id("d"),
            E::logical_and(hit, E::elem(E::id("r"), E::number(2.0))),
        ),
        E::assign(
            E::id("a"),
            E::logical_and(
                E::id("s"),
                E::elem(E::prop(E::id("c"), "childNodes"), E::id("s")),
            ),
        ),
    ]))]);
    assert_eq!(
        code,
        "d=(s=(r=(i=(o=(a=c)[S]||(a[S]={}))[a.uniqueID]||(o[a.uniqueID]={}))[h]||[])[0]===k&&r[1])&&r[2],a=s&&c.childNodes[s];"
    );
}

#[test]
fn test_sequence_as_assigned_value() {
    let v = || E::id("v");
    let a = || E::id("a");
    let not_not = |e: E| E::not(E::not(e));
    let detection = E::logical_and(
        E::logical_and(
            E::logical_and(
                not_not(E::prop(v(), "documentElement")),
                not_not(E::prop(v(), "head")),
            ),
            E::binary(
                E::quoted("'function'"),
                BinaryOperator::Equality,
                E::unary(UnaryOperator::Typeof, E::prop(v(), "addEventListener")),
            ),
        ),
        E::prop(v(), "createElement"),
    );
    let browser = E::logical_or(
        E::unary(
            UnaryOperator::BitwiseNot,
            method_call(a(), "indexOf", vec![E::quoted("'MSIE'")]),
        ),
        method_call(a(), "indexOf", vec![E::quoted("'Trident/'")]),
    );
    let code = script(vec![S::expr_stmt(E::assign(
        E::id("m"),
        E::sequence(vec![
            E::prop(E::id("z"), "document"),
            detection,
            browser,
            E::quoted("'___FONT_AWESOME___'"),
        ]),
    ))]);
    assert_eq!(
        code,
        "m=(z.document,!!v.documentElement&&!!v.head&&'function'==typeof v.addEventListener&&v.createElement,~a.indexOf('MSIE')||a.indexOf('Trident/'),'___FONT_AWESOME___');"
    );
}

#[test]
fn test_sequence_as_property_value() {
    let b = || E::id("b");
    let code = script(vec![S::var_decl(
        VariableKind::Var,
        Pattern::id("a"),
        Some(E::object(vec![ObjectMember::init(
            "children",
            E::sequence(vec![
                E::assign(b(), E::id("O")),
                E::conditional(
                    strict_eq(E::quoted("'g'"), E::prop(b(), "tag")),
                    E::prop(b(), "children"),
                    E::array(vec![b()]),
                ),
            ]),
        )])),
    )]);
    assert_eq!(code, "var a={children:(b=O,'g'===b.tag?b.children:[b])};");
}

#[test]
fn test_new_without_arguments_under_unary() {
    let code = script(vec![S::expr_stmt(E::assign(
        E::id("h"),
        E::binary(
            E::quoted("'M'"),
            BinaryOperator::Addition,
            method_call(
                E::unary(UnaryOperator::Plus, E::new_expr(E::id("Date"), vec![])),
                "toString",
                vec![E::number(36.0)],
            ),
        ),
    ))]);
    assert_eq!(code, "h='M'+(+new Date).toString(36);");
}

#[test]
fn test_async_arrow_with_block_body() {
    let handler = E::Arrow(ArrowFunction {
        params: vec![Pattern::id("e")],
        body: ArrowBody::Block(BlockStatement {
            body: vec![
                S::var_decl(
                    VariableKind::Const,
                    Pattern::id("files"),
                    Some(E::await_expr(call(
                        "readFiles",
                        vec![E::prop(E::id("input"), "files"), E::id("readMode")],
                    ))),
                ),
                S::expr_stmt(method_call(
                    E::prop(E::id("document"), "body"),
                    "removeChild",
                    vec![E::id("input")],
                )),
                S::expr_stmt(call("resolve", vec![E::id("files")])),
            ],
        }),
        is_async: true,
    });
    let code = script(vec![S::expr_stmt(E::assign(
        E::prop(E::id("input"), "onchange"),
        handler,
    ))]);
    assert_eq!(
        code,
        "input.onchange=async e=>{const files=await readFiles(input.files,readMode);document.body.removeChild(input);resolve(files);};"
    );
}

#[test]
fn test_exported_declarations() {
    let shady = || E::elem(E::id("window"), E::quoted("'ShadyDOM'"));
    let code = module(vec![
        S::export_decl(S::var_decl(
            VariableKind::Const,
            Pattern::id("Base"),
            Some(E::prop(
                call("LegacyElementMixin", vec![E::id("HTMLElement")]),
                "prototype",
            )),
        )),
        S::export_decl(S::var_decl(
            VariableKind::Const,
            Pattern::id("wrap"),
            Some(E::logical_or(
                E::logical_and(shady(), E::elem(shady(), E::quoted("'wrap'"))),
                E::arrow(vec![Pattern::id("node")], E::id("node")),
            )),
        )),
        S::export_named(vec![], None),
    ]);
    assert_eq!(
        code,
        "export const Base=LegacyElementMixin(HTMLElement).prototype;export const wrap=window['ShadyDOM']&&window['ShadyDOM']['wrap']||(node=>node);export{};"
    );
}

#[test]
fn test_object_destructuring_declaration() {
    let code = script(vec![S::var_decl(
        VariableKind::Let,
        Pattern::object(vec![ObjectPatternMember::shorthand("is")]),
        Some(call("getIsExtends", vec![E::id("element")])),
    )]);
    assert_eq!(code, "let{is}=getIsExtends(element);");
}

#[test]
fn test_immediately_invoked_arrow() {
    let code = script(vec![S::expr_stmt(E::call(
        E::arrow_block(
            vec![],
            vec![S::expr_stmt(E::assign(
                E::id("mutablePropertyChange"),
                E::prop(E::id("MutableData"), "_mutablePropertyChange"),
            ))],
        ),
        vec![],
    ))]);
    assert_eq!(
        code,
        "(()=>{mutablePropertyChange=MutableData._mutablePropertyChange;})();"
    );
}

#[test]
fn test_new_with_invoked_function_callee() {
    let locals = S::var_decls(
        VariableKind::Var,
        ["l", "h", "z"]
            .into_iter()
            .map(|name| VariableDeclarator::new(Pattern::id(name), None))
            .collect(),
    );
    let factory = E::call(
        E::func_expr(
            None,
            vec![],
            vec![locals, S::ret(Some(E::assign(E::id("l"), E::id("c"))))],
        ),
        vec![],
    );
    let code = script(vec![S::var_decls(
        VariableKind::Var,
        vec![
            VariableDeclarator::new(Pattern::id("Ol"), None),
            VariableDeclarator::new(Pattern::id("jl"), Some(E::new_expr(factory, vec![]))),
        ],
    )]);
    assert_eq!(code, "var Ol,jl=new(function(){var l,h,z;return l=c;}());");
}

#[test]
fn test_computed_method_in_object_literal() {
    let iterator = ObjectMember::method(
        PropertyKey::computed(E::prop(E::id("Symbol"), "iterator")),
        Function::new(None, vec![], vec![S::ret(Some(E::id("b")))]),
    );
    let code = script(vec![S::expr_stmt(E::array(vec![
        E::id("y"),
        E::object(vec![iterator, ObjectMember::init("a", E::number(5.0))]),
    ]))]);
    assert_eq!(code, "[y,{[Symbol.iterator](){return b;},a:5}];");
}

#[test]
fn test_forced_do_while_terminator() {
    let code = script(vec![
        S::do_while(S::block(vec![]), E::id("x")),
        S::do_while(S::expr_stmt(call("x", vec![])), E::id("y")),
    ]);
    assert_eq!(code, "do{}while(x);do x();while(y);");
}

#[test]
fn test_statement_start_needs_parens() {
    let code = script(vec![
        S::expr_stmt(E::object(vec![])),
        S::expr_stmt(E::call(E::func_expr(None, vec![], vec![]), vec![])),
        S::expr_stmt(E::assign(
            Pattern::object(vec![ObjectPatternMember::shorthand("a")]),
            E::id("b"),
        )),
        S::expr_stmt(E::string("not a directive")),
    ]);
    assert_eq!(
        code,
        "({});(function(){})();({a}=b);('not a directive');"
    );
}

#[test]
fn test_operator_tokens_do_not_merge() {
    let code = script(vec![
        S::expr_stmt(E::binary(
            E::id("a"),
            BinaryOperator::Addition,
            E::unary(UnaryOperator::Plus, E::id("b")),
        )),
        S::expr_stmt(E::binary(
            E::id("a"),
            BinaryOperator::Subtraction,
            E::prefix(UpdateOperator::Decrement, E::id("b")),
        )),
        S::expr_stmt(E::prop(E::number(1.0), "toString")),
        S::expr_stmt(E::binary(E::id("a"), BinaryOperator::In, E::id("b"))),
    ]);
    assert_eq!(code, "a+ +b;a- --b;(1).toString;a in b;");
}

#[test]
fn test_non_finite_numbers_keep_their_value() {
    let code = script(vec![
        S::expr_stmt(E::binary(
            E::id("a"),
            BinaryOperator::Addition,
            E::number(f64::INFINITY),
        )),
        S::expr_stmt(E::binary(
            E::id("a"),
            BinaryOperator::Subtraction,
            E::number(f64::NEG_INFINITY),
        )),
        S::expr_stmt(E::binary(
            E::number(f64::NEG_INFINITY),
            BinaryOperator::Exponential,
            E::number(2.0),
        )),
        S::expr_stmt(E::assign(Pattern::id("x"), E::number(f64::NAN))),
        S::expr_stmt(E::prop(E::number(f64::NAN), "y")),
    ]);
    assert_eq!(code, "a+1e400;a- -1e400;(-1e400)**2;x=(0/0);(0/0).y;");
}

#[test]
fn test_for_head_lookahead_restrictions() {
    let let_element = || E::elem(E::id("let"), E::id("a"));
    let code = script(vec![
        S::for_in(
            ForHead::Pattern(Pattern::Expression(Box::new(let_element()))),
            E::id("b"),
            S::block(vec![]),
        ),
        S::for_loop(
            Some(ForInit::Expression(E::assign(let_element(), E::number(1.0)))),
            None,
            None,
            S::block(vec![]),
        ),
        S::for_of(ForHead::Pattern(Pattern::id("async")), E::id("b"), S::block(vec![])),
        S::for_of(
            ForHead::Pattern(Pattern::Expression(Box::new(E::prop(E::id("let"), "x")))),
            E::id("b"),
            S::block(vec![]),
        ),
        // Neither restriction applies here.
        S::for_in(ForHead::Pattern(Pattern::id("async")), E::id("b"), S::block(vec![])),
        S::for_of(ForHead::Pattern(Pattern::id("a")), E::id("b"), S::block(vec![])),
    ]);
    assert_eq!(
        code,
        "for((let)[a]in b){}for((let)[a]=1;;){}for((async)of b){}for((let.x)of b){}\
for(async in b){}for(a of b){}"
    );
}
