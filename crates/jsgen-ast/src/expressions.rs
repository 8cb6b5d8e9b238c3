//! Expression nodes.

use serde::{Deserialize, Serialize};

use crate::declarations::{Class, Function};
use crate::operators::{
    AssignmentOperator, BinaryOperator, LogicalOperator, UnaryOperator, UpdateOperator,
};
use crate::patterns::Pattern;
use crate::statements::BlockStatement;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A literal together with the lexical text the parser saw, when known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Literal {
    pub value: LiteralValue,
    #[serde(default)]
    pub raw: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LiteralValue {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    /// Decimal digits without the `n` suffix.
    BigInt(String),
    RegExp { pattern: String, flags: String },
}

/// A syntax extension node (JSX, Flow, ...) passed through by a parser.
///
/// The generator has no rule for these and reports them by `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionNode {
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// `foo`
    Identifier(Identifier),
    /// `#foo`, only valid as the left side of `in`
    PrivateName(Identifier),
    /// `1`, `'a'`, `/re/g`, `true`, `null`
    Literal(Literal),
    /// `this`
    This,
    /// `super`
    Super,
    /// `[a, , ...b]`; `None` is a hole
    Array { elements: Vec<Option<Expression>> },
    /// `{ a: 1, b, ...c }`
    Object { properties: Vec<ObjectMember> },
    /// `function name(params) { body }`
    Function(Function),
    /// `(params) => body`
    Arrow(ArrowFunction),
    /// `class Name extends Base { ... }`
    Class(Class),
    /// `` `a${b}c` ``
    Template(TemplateLiteral),
    /// ``tag`a${b}` ``
    TaggedTemplate {
        tag: Box<Expression>,
        quasi: TemplateLiteral,
    },
    /// `!x`, `typeof x`
    Unary {
        operator: UnaryOperator,
        argument: Box<Expression>,
    },
    /// `++x`, `x--`
    Update {
        operator: UpdateOperator,
        prefix: bool,
        argument: Box<Expression>,
    },
    /// `left op right`
    Binary {
        operator: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    /// `left || right`, `left && right`, `left ?? right`
    Logical {
        operator: LogicalOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    /// `target op= value`
    Assignment {
        operator: AssignmentOperator,
        left: Box<Pattern>,
        right: Box<Expression>,
    },
    /// `test ? consequent : alternate`
    Conditional {
        test: Box<Expression>,
        consequent: Box<Expression>,
        alternate: Box<Expression>,
    },
    /// `callee(args)` or `callee?.(args)`
    Call {
        callee: Box<Expression>,
        arguments: Vec<Expression>,
        optional: bool,
    },
    /// `new callee(args)`
    New {
        callee: Box<Expression>,
        arguments: Vec<Expression>,
    },
    /// `object.property`, `object[property]`, `object?.property`
    Member {
        object: Box<Expression>,
        property: MemberProperty,
        optional: bool,
    },
    /// `a, b, c`
    Sequence { expressions: Vec<Expression> },
    /// `...argument`, valid in argument lists and array literals
    Spread { argument: Box<Expression> },
    /// `yield argument`, `yield* argument`
    Yield {
        argument: Option<Box<Expression>>,
        delegate: bool,
    },
    /// `await argument`
    Await { argument: Box<Expression> },
    /// Boundary of an optional chain such as `a?.b.c`
    Chain { expression: Box<Expression> },
    /// `import(source)` or `import(source, options)`
    Import {
        source: Box<Expression>,
        options: Option<Box<Expression>>,
    },
    /// `new.target`, `import.meta`
    MetaProperty { meta: Identifier, property: Identifier },
    Extension(ExtensionNode),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MemberProperty {
    /// `.name`
    Identifier(Identifier),
    /// `.#name`
    PrivateName(Identifier),
    /// `[expression]`
    Computed(Box<Expression>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyKey {
    Identifier(Identifier),
    PrivateName(Identifier),
    Literal(Literal),
    Computed(Box<Expression>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyKind {
    Init,
    Get,
    Set,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub key: PropertyKey,
    pub value: Expression,
    pub kind: PropertyKind,
    /// `{ m() {} }`; `value` is then a function expression
    #[serde(default)]
    pub method: bool,
    /// `{ a }`
    #[serde(default)]
    pub shorthand: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObjectMember {
    Property(Property),
    Spread(Expression),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateElement {
    pub raw: String,
    #[serde(default)]
    pub cooked: Option<String>,
    pub tail: bool,
}

/// `quasis` always holds one more element than `expressions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateLiteral {
    pub quasis: Vec<TemplateElement>,
    pub expressions: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArrowBody {
    Block(BlockStatement),
    Expression(Box<Expression>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowFunction {
    pub params: Vec<Pattern>,
    pub body: ArrowBody,
    #[serde(default)]
    pub is_async: bool,
}
