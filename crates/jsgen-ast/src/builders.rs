//! Convenience constructors for building trees in code.
//!
//! Parsers fill the structs directly; these helpers keep hand-built trees
//! (tests, code generators, benches) readable.

use crate::declarations::{
    Class, ClassMember, ExportAllDeclaration, ExportDefaultDeclaration, ExportDefaultKind,
    ExportNamedDeclaration, ExportSpecifier, Function, ImportDeclaration, ImportSpecifier,
    MethodDefinition, MethodKind, ModuleExportName, PropertyDefinition, VariableDeclaration,
    VariableDeclarator, VariableKind,
};
use crate::expressions::{
    ArrowBody, ArrowFunction, Expression, Identifier, Literal, LiteralValue, MemberProperty,
    ObjectMember, Property, PropertyKey, PropertyKind, TemplateElement, TemplateLiteral,
};
use crate::operators::{
    AssignmentOperator, BinaryOperator, LogicalOperator, UnaryOperator, UpdateOperator,
};
use crate::patterns::{ObjectPatternMember, Pattern};
use crate::statements::{
    BlockStatement, CatchClause, ForHead, ForInit, Program, SourceType, Statement, SwitchCase,
};

impl Program {
    pub fn script(body: Vec<Statement>) -> Self {
        Self {
            source_type: SourceType::Script,
            body,
        }
    }

    pub fn module(body: Vec<Statement>) -> Self {
        Self {
            source_type: SourceType::Module,
            body,
        }
    }
}

impl Literal {
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            value: LiteralValue::String(value.into()),
            raw: None,
        }
    }

    /// String literal from its quoted source spelling, e.g. `'A'`.
    ///
    /// The value is the text between the quotes; escapes are kept as written.
    pub fn quoted(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let value = raw
            .get(1..raw.len().saturating_sub(1))
            .unwrap_or_default()
            .to_string();
        Self {
            value: LiteralValue::String(value),
            raw: Some(raw),
        }
    }

    pub fn number(value: f64) -> Self {
        Self {
            value: LiteralValue::Number(value),
            raw: None,
        }
    }
}

impl PropertyKey {
    pub fn id(name: impl Into<String>) -> Self {
        Self::Identifier(Identifier::new(name))
    }

    pub fn computed(expression: Expression) -> Self {
        Self::Computed(Box::new(expression))
    }
}

// =============================================================================
// Expressions
// =============================================================================

impl Expression {
    /// Create an identifier reference
    pub fn id(name: impl Into<String>) -> Self {
        Self::Identifier(Identifier::new(name))
    }

    /// String literal with no recorded raw text
    pub fn string(value: impl Into<String>) -> Self {
        Self::Literal(Literal::string(value))
    }

    /// String literal from its quoted spelling, see [`Literal::quoted`]
    pub fn quoted(raw: impl Into<String>) -> Self {
        Self::Literal(Literal::quoted(raw))
    }

    pub fn number(value: f64) -> Self {
        Self::Literal(Literal::number(value))
    }

    pub fn bool(value: bool) -> Self {
        Self::Literal(Literal {
            value: LiteralValue::Boolean(value),
            raw: None,
        })
    }

    pub fn null() -> Self {
        Self::Literal(Literal {
            value: LiteralValue::Null,
            raw: None,
        })
    }

    pub fn regex(pattern: impl Into<String>, flags: impl Into<String>) -> Self {
        Self::Literal(Literal {
            value: LiteralValue::RegExp {
                pattern: pattern.into(),
                flags: flags.into(),
            },
            raw: None,
        })
    }

    pub fn bigint(digits: impl Into<String>) -> Self {
        Self::Literal(Literal {
            value: LiteralValue::BigInt(digits.into()),
            raw: None,
        })
    }

    pub fn array(elements: Vec<Self>) -> Self {
        Self::Array {
            elements: elements.into_iter().map(Some).collect(),
        }
    }

    pub fn object(properties: Vec<ObjectMember>) -> Self {
        Self::Object { properties }
    }

    /// Create a call expression
    pub fn call(callee: Self, args: Vec<Self>) -> Self {
        Self::Call {
            callee: Box::new(callee),
            arguments: args,
            optional: false,
        }
    }

    pub fn new_expr(callee: Self, args: Vec<Self>) -> Self {
        Self::New {
            callee: Box::new(callee),
            arguments: args,
        }
    }

    /// Create a property access: `object.property`
    pub fn prop(object: Self, property: impl Into<String>) -> Self {
        Self::Member {
            object: Box::new(object),
            property: MemberProperty::Identifier(Identifier::new(property)),
            optional: false,
        }
    }

    /// Create an element access: `object[index]`
    pub fn elem(object: Self, index: Self) -> Self {
        Self::Member {
            object: Box::new(object),
            property: MemberProperty::Computed(Box::new(index)),
            optional: false,
        }
    }

    pub fn binary(left: Self, operator: BinaryOperator, right: Self) -> Self {
        Self::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn logical(left: Self, operator: LogicalOperator, right: Self) -> Self {
        Self::Logical {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn logical_or(left: Self, right: Self) -> Self {
        Self::logical(left, LogicalOperator::Or, right)
    }

    pub fn logical_and(left: Self, right: Self) -> Self {
        Self::logical(left, LogicalOperator::And, right)
    }

    /// Create a plain assignment: `target = value`
    pub fn assign(target: impl Into<Pattern>, value: Self) -> Self {
        Self::assign_op(AssignmentOperator::Assign, target, value)
    }

    pub fn assign_op(operator: AssignmentOperator, target: impl Into<Pattern>, value: Self) -> Self {
        Self::Assignment {
            operator,
            left: Box::new(target.into()),
            right: Box::new(value),
        }
    }

    pub fn conditional(test: Self, consequent: Self, alternate: Self) -> Self {
        Self::Conditional {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
        }
    }

    pub fn sequence(expressions: Vec<Self>) -> Self {
        Self::Sequence { expressions }
    }

    pub fn unary(operator: UnaryOperator, argument: Self) -> Self {
        Self::Unary {
            operator,
            argument: Box::new(argument),
        }
    }

    pub fn not(argument: Self) -> Self {
        Self::unary(UnaryOperator::LogicalNot, argument)
    }

    pub fn void_zero() -> Self {
        Self::unary(UnaryOperator::Void, Self::number(0.0))
    }

    pub fn prefix(operator: UpdateOperator, argument: Self) -> Self {
        Self::Update {
            operator,
            prefix: true,
            argument: Box::new(argument),
        }
    }

    pub fn postfix(operator: UpdateOperator, argument: Self) -> Self {
        Self::Update {
            operator,
            prefix: false,
            argument: Box::new(argument),
        }
    }

    pub fn spread(argument: Self) -> Self {
        Self::Spread {
            argument: Box::new(argument),
        }
    }

    /// Arrow with an expression body: `(params) => body`
    pub fn arrow(params: Vec<Pattern>, body: Self) -> Self {
        Self::Arrow(ArrowFunction {
            params,
            body: ArrowBody::Expression(Box::new(body)),
            is_async: false,
        })
    }

    /// Arrow with a block body: `(params) => { body }`
    pub fn arrow_block(params: Vec<Pattern>, body: Vec<Statement>) -> Self {
        Self::Arrow(ArrowFunction {
            params,
            body: ArrowBody::Block(BlockStatement { body }),
            is_async: false,
        })
    }

    /// Create a function expression
    pub fn func_expr(name: Option<&str>, params: Vec<Pattern>, body: Vec<Statement>) -> Self {
        Self::Function(Function::new(name, params, body))
    }

    pub fn class_expr(class: Class) -> Self {
        Self::Class(class)
    }

    /// Template literal whose raw text and cooked value coincide.
    pub fn template(quasis: &[&str], expressions: Vec<Self>) -> Self {
        Self::Template(TemplateLiteral::new(quasis, expressions))
    }

    pub fn tagged_template(tag: Self, quasi: TemplateLiteral) -> Self {
        Self::TaggedTemplate {
            tag: Box::new(tag),
            quasi,
        }
    }

    pub fn yield_expr(argument: Option<Self>, delegate: bool) -> Self {
        Self::Yield {
            argument: argument.map(Box::new),
            delegate,
        }
    }

    pub fn await_expr(argument: Self) -> Self {
        Self::Await {
            argument: Box::new(argument),
        }
    }

    pub fn chain(expression: Self) -> Self {
        Self::Chain {
            expression: Box::new(expression),
        }
    }

    pub fn import_expr(source: Self) -> Self {
        Self::Import {
            source: Box::new(source),
            options: None,
        }
    }

    pub fn meta_property(meta: impl Into<String>, property: impl Into<String>) -> Self {
        Self::MetaProperty {
            meta: Identifier::new(meta),
            property: Identifier::new(property),
        }
    }
}

impl TemplateLiteral {
    pub fn new(quasis: &[&str], expressions: Vec<Expression>) -> Self {
        let last = quasis.len().saturating_sub(1);
        Self {
            quasis: quasis
                .iter()
                .enumerate()
                .map(|(index, text)| TemplateElement {
                    raw: (*text).to_string(),
                    cooked: Some((*text).to_string()),
                    tail: index == last,
                })
                .collect(),
            expressions,
        }
    }
}

impl ObjectMember {
    /// `key: value`
    pub fn init(key: impl Into<String>, value: Expression) -> Self {
        Self::Property(Property::init(PropertyKey::id(key), value))
    }

    /// `name`
    pub fn shorthand(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::Property(Property {
            key: PropertyKey::id(name.clone()),
            value: Expression::id(name),
            kind: PropertyKind::Init,
            method: false,
            shorthand: true,
        })
    }

    /// `key(params) { body }`
    pub fn method(key: PropertyKey, function: Function) -> Self {
        Self::Property(Property {
            key,
            value: Expression::Function(function),
            kind: PropertyKind::Init,
            method: true,
            shorthand: false,
        })
    }
}

impl Property {
    pub fn init(key: PropertyKey, value: Expression) -> Self {
        Self {
            key,
            value,
            kind: PropertyKind::Init,
            method: false,
            shorthand: false,
        }
    }
}

// =============================================================================
// Patterns
// =============================================================================

impl Pattern {
    pub fn id(name: impl Into<String>) -> Self {
        Self::Identifier(Identifier::new(name))
    }

    pub fn object(properties: Vec<ObjectPatternMember>) -> Self {
        Self::Object { properties }
    }

    pub fn array(elements: Vec<Option<Self>>) -> Self {
        Self::Array { elements }
    }

    /// `target = default`
    pub fn with_default(self, default: Expression) -> Self {
        Self::Assignment {
            left: Box::new(self),
            right: Box::new(default),
        }
    }

    pub fn rest(argument: Self) -> Self {
        Self::Rest {
            argument: Box::new(argument),
        }
    }
}

impl ObjectPatternMember {
    /// `{ name }`
    pub fn shorthand(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::Property {
            key: PropertyKey::id(name.clone()),
            value: Pattern::id(name),
            shorthand: true,
        }
    }

    /// `{ key: value }`
    pub fn property(key: PropertyKey, value: Pattern) -> Self {
        Self::Property {
            key,
            value,
            shorthand: false,
        }
    }
}

// =============================================================================
// Declarations
// =============================================================================

impl Function {
    pub fn new(name: Option<&str>, params: Vec<Pattern>, body: Vec<Statement>) -> Self {
        Self {
            id: name.map(Identifier::new),
            params,
            body: BlockStatement { body },
            is_async: false,
            is_generator: false,
        }
    }

    #[must_use]
    pub fn into_async(mut self) -> Self {
        self.is_async = true;
        self
    }

    #[must_use]
    pub fn into_generator(mut self) -> Self {
        self.is_generator = true;
        self
    }
}

impl Class {
    pub fn new(name: Option<&str>, super_class: Option<Expression>, body: Vec<ClassMember>) -> Self {
        Self {
            id: name.map(Identifier::new),
            super_class: super_class.map(Box::new),
            body,
        }
    }
}

impl ClassMember {
    /// `constructor(params) { body }`
    pub fn constructor(params: Vec<Pattern>, body: Vec<Statement>) -> Self {
        Self::Method(MethodDefinition {
            key: PropertyKey::id("constructor"),
            kind: MethodKind::Constructor,
            is_static: false,
            value: Function::new(None, params, body),
        })
    }

    pub fn method(key: PropertyKey, function: Function) -> Self {
        Self::Method(MethodDefinition {
            key,
            kind: MethodKind::Method,
            is_static: false,
            value: function,
        })
    }

    /// `key = value;`
    pub fn field(key: impl Into<String>, value: Option<Expression>) -> Self {
        Self::Property(PropertyDefinition {
            key: PropertyKey::id(key),
            value,
            is_static: false,
        })
    }
}

impl VariableDeclaration {
    pub fn new(kind: VariableKind, declarations: Vec<VariableDeclarator>) -> Self {
        Self { kind, declarations }
    }
}

impl VariableDeclarator {
    pub fn new(id: impl Into<Pattern>, init: Option<Expression>) -> Self {
        Self {
            id: id.into(),
            init,
        }
    }
}

impl ModuleExportName {
    pub fn id(name: impl Into<String>) -> Self {
        Self::Identifier(Identifier::new(name))
    }
}

impl ImportSpecifier {
    /// `{ name }`
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::Named {
            imported: ModuleExportName::id(name.clone()),
            local: Identifier::new(name),
        }
    }

    pub fn default_import(local: impl Into<String>) -> Self {
        Self::Default {
            local: Identifier::new(local),
        }
    }

    pub fn namespace(local: impl Into<String>) -> Self {
        Self::Namespace {
            local: Identifier::new(local),
        }
    }
}

impl ExportSpecifier {
    /// `{ name }`
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            local: ModuleExportName::id(name.clone()),
            exported: ModuleExportName::id(name),
        }
    }
}

impl SwitchCase {
    pub fn case(test: Expression, consequent: Vec<Statement>) -> Self {
        Self {
            test: Some(test),
            consequent,
        }
    }

    pub fn default_case(consequent: Vec<Statement>) -> Self {
        Self {
            test: None,
            consequent,
        }
    }
}

// =============================================================================
// Statements
// =============================================================================

impl Statement {
    /// Create an expression statement
    pub fn expr_stmt(expression: Expression) -> Self {
        Self::Expression {
            expression,
            directive: None,
        }
    }

    /// Directive prologue entry from its quoted spelling, e.g. `'use strict'`
    pub fn directive(raw: impl Into<String>) -> Self {
        let literal = Literal::quoted(raw);
        let directive = match &literal.value {
            LiteralValue::String(value) => Some(value.clone()),
            _ => None,
        };
        Self::Expression {
            expression: Expression::Literal(literal),
            directive,
        }
    }

    pub fn block(body: Vec<Self>) -> Self {
        Self::Block(BlockStatement { body })
    }

    /// Create a return statement
    pub fn ret(argument: Option<Expression>) -> Self {
        Self::Return { argument }
    }

    pub fn if_then(test: Expression, consequent: Self, alternate: Option<Self>) -> Self {
        Self::If {
            test,
            consequent: Box::new(consequent),
            alternate: alternate.map(Box::new),
        }
    }

    pub fn while_loop(test: Expression, body: Self) -> Self {
        Self::While {
            test,
            body: Box::new(body),
        }
    }

    pub fn do_while(body: Self, test: Expression) -> Self {
        Self::DoWhile {
            body: Box::new(body),
            test,
        }
    }

    pub fn for_loop(
        init: Option<ForInit>,
        test: Option<Expression>,
        update: Option<Expression>,
        body: Self,
    ) -> Self {
        Self::For {
            init,
            test,
            update,
            body: Box::new(body),
        }
    }

    pub fn for_in(left: ForHead, right: Expression, body: Self) -> Self {
        Self::ForIn {
            left,
            right,
            body: Box::new(body),
        }
    }

    pub fn for_of(left: ForHead, right: Expression, body: Self) -> Self {
        Self::ForOf {
            left,
            right,
            body: Box::new(body),
            is_await: false,
        }
    }

    pub fn throw(argument: Expression) -> Self {
        Self::Throw { argument }
    }

    pub fn try_catch(block: Vec<Self>, param: Option<Pattern>, handler: Vec<Self>) -> Self {
        Self::Try {
            block: BlockStatement { body: block },
            handler: Some(CatchClause {
                param,
                body: BlockStatement { body: handler },
            }),
            finalizer: None,
        }
    }

    pub fn switch(discriminant: Expression, cases: Vec<SwitchCase>) -> Self {
        Self::Switch {
            discriminant,
            cases,
        }
    }

    pub fn labeled(label: impl Into<String>, body: Self) -> Self {
        Self::Labeled {
            label: Identifier::new(label),
            body: Box::new(body),
        }
    }

    pub fn break_stmt(label: Option<&str>) -> Self {
        Self::Break {
            label: label.map(Identifier::new),
        }
    }

    pub fn continue_stmt(label: Option<&str>) -> Self {
        Self::Continue {
            label: label.map(Identifier::new),
        }
    }

    /// Create a variable declaration with a single binding
    pub fn var_decl(kind: VariableKind, id: impl Into<Pattern>, init: Option<Expression>) -> Self {
        Self::VariableDeclaration(VariableDeclaration::new(
            kind,
            vec![VariableDeclarator::new(id, init)],
        ))
    }

    pub fn var_decls(kind: VariableKind, declarations: Vec<VariableDeclarator>) -> Self {
        Self::VariableDeclaration(VariableDeclaration::new(kind, declarations))
    }

    /// Create a function declaration
    pub fn func_decl(name: &str, params: Vec<Pattern>, body: Vec<Self>) -> Self {
        Self::FunctionDeclaration(Function::new(Some(name), params, body))
    }

    pub fn class_decl(class: Class) -> Self {
        Self::ClassDeclaration(class)
    }

    pub fn import(specifiers: Vec<ImportSpecifier>, source: impl Into<String>) -> Self {
        Self::ImportDeclaration(ImportDeclaration {
            specifiers,
            source: Literal::quoted(source),
            attributes: Vec::new(),
        })
    }

    /// `export declaration`
    pub fn export_decl(declaration: Self) -> Self {
        Self::ExportNamedDeclaration(ExportNamedDeclaration {
            declaration: Some(Box::new(declaration)),
            specifiers: Vec::new(),
            source: None,
            attributes: Vec::new(),
        })
    }

    /// `export { specifiers }` or `export { specifiers } from source`
    pub fn export_named(specifiers: Vec<ExportSpecifier>, source: Option<&str>) -> Self {
        Self::ExportNamedDeclaration(ExportNamedDeclaration {
            declaration: None,
            specifiers,
            source: source.map(Literal::quoted),
            attributes: Vec::new(),
        })
    }

    pub fn export_default(declaration: ExportDefaultKind) -> Self {
        Self::ExportDefaultDeclaration(ExportDefaultDeclaration { declaration })
    }

    pub fn export_all(exported: Option<&str>, source: impl Into<String>) -> Self {
        Self::ExportAllDeclaration(ExportAllDeclaration {
            exported: exported.map(ModuleExportName::id),
            source: Literal::quoted(source),
            attributes: Vec::new(),
        })
    }
}
