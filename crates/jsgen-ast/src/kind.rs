//! Syntactic kind tags.
//!
//! Kind names follow ESTree so that errors and hooks speak the same
//! vocabulary as the parsers that produce these trees.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::expressions::{Expression, ObjectMember};
use crate::patterns::Pattern;
use crate::statements::{Program, Statement};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NodeKind {
    Program,
    // Statements
    ExpressionStatement,
    BlockStatement,
    EmptyStatement,
    DebuggerStatement,
    WithStatement,
    ReturnStatement,
    LabeledStatement,
    BreakStatement,
    ContinueStatement,
    IfStatement,
    SwitchStatement,
    SwitchCase,
    ThrowStatement,
    TryStatement,
    CatchClause,
    WhileStatement,
    DoWhileStatement,
    ForStatement,
    ForInStatement,
    ForOfStatement,
    FunctionDeclaration,
    VariableDeclaration,
    VariableDeclarator,
    ClassDeclaration,
    ImportDeclaration,
    ExportNamedDeclaration,
    ExportDefaultDeclaration,
    ExportAllDeclaration,
    // Expressions
    Identifier,
    PrivateIdentifier,
    Literal,
    ThisExpression,
    Super,
    ArrayExpression,
    ObjectExpression,
    Property,
    SpreadElement,
    FunctionExpression,
    ArrowFunctionExpression,
    ClassExpression,
    ClassBody,
    MethodDefinition,
    PropertyDefinition,
    StaticBlock,
    TemplateLiteral,
    TemplateElement,
    TaggedTemplateExpression,
    UnaryExpression,
    UpdateExpression,
    BinaryExpression,
    LogicalExpression,
    AssignmentExpression,
    ConditionalExpression,
    CallExpression,
    NewExpression,
    MemberExpression,
    SequenceExpression,
    YieldExpression,
    AwaitExpression,
    ChainExpression,
    ImportExpression,
    MetaProperty,
    // Patterns
    ObjectPattern,
    ArrayPattern,
    AssignmentPattern,
    RestElement,
    // Modules
    ImportSpecifier,
    ImportDefaultSpecifier,
    ImportNamespaceSpecifier,
    ImportAttribute,
    ExportSpecifier,
    /// Any node produced by a syntax extension.
    Extension,
}

impl NodeKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Program => "Program",
            Self::ExpressionStatement => "ExpressionStatement",
            Self::BlockStatement => "BlockStatement",
            Self::EmptyStatement => "EmptyStatement",
            Self::DebuggerStatement => "DebuggerStatement",
            Self::WithStatement => "WithStatement",
            Self::ReturnStatement => "ReturnStatement",
            Self::LabeledStatement => "LabeledStatement",
            Self::BreakStatement => "BreakStatement",
            Self::ContinueStatement => "ContinueStatement",
            Self::IfStatement => "IfStatement",
            Self::SwitchStatement => "SwitchStatement",
            Self::SwitchCase => "SwitchCase",
            Self::ThrowStatement => "ThrowStatement",
            Self::TryStatement => "TryStatement",
            Self::CatchClause => "CatchClause",
            Self::WhileStatement => "WhileStatement",
            Self::DoWhileStatement => "DoWhileStatement",
            Self::ForStatement => "ForStatement",
            Self::ForInStatement => "ForInStatement",
            Self::ForOfStatement => "ForOfStatement",
            Self::FunctionDeclaration => "FunctionDeclaration",
            Self::VariableDeclaration => "VariableDeclaration",
            Self::VariableDeclarator => "VariableDeclarator",
            Self::ClassDeclaration => "ClassDeclaration",
            Self::ImportDeclaration => "ImportDeclaration",
            Self::ExportNamedDeclaration => "ExportNamedDeclaration",
            Self::ExportDefaultDeclaration => "ExportDefaultDeclaration",
            Self::ExportAllDeclaration => "ExportAllDeclaration",
            Self::Identifier => "Identifier",
            Self::PrivateIdentifier => "PrivateIdentifier",
            Self::Literal => "Literal",
            Self::ThisExpression => "ThisExpression",
            Self::Super => "Super",
            Self::ArrayExpression => "ArrayExpression",
            Self::ObjectExpression => "ObjectExpression",
            Self::Property => "Property",
            Self::SpreadElement => "SpreadElement",
            Self::FunctionExpression => "FunctionExpression",
            Self::ArrowFunctionExpression => "ArrowFunctionExpression",
            Self::ClassExpression => "ClassExpression",
            Self::ClassBody => "ClassBody",
            Self::MethodDefinition => "MethodDefinition",
            Self::PropertyDefinition => "PropertyDefinition",
            Self::StaticBlock => "StaticBlock",
            Self::TemplateLiteral => "TemplateLiteral",
            Self::TemplateElement => "TemplateElement",
            Self::TaggedTemplateExpression => "TaggedTemplateExpression",
            Self::UnaryExpression => "UnaryExpression",
            Self::UpdateExpression => "UpdateExpression",
            Self::BinaryExpression => "BinaryExpression",
            Self::LogicalExpression => "LogicalExpression",
            Self::AssignmentExpression => "AssignmentExpression",
            Self::ConditionalExpression => "ConditionalExpression",
            Self::CallExpression => "CallExpression",
            Self::NewExpression => "NewExpression",
            Self::MemberExpression => "MemberExpression",
            Self::SequenceExpression => "SequenceExpression",
            Self::YieldExpression => "YieldExpression",
            Self::AwaitExpression => "AwaitExpression",
            Self::ChainExpression => "ChainExpression",
            Self::ImportExpression => "ImportExpression",
            Self::MetaProperty => "MetaProperty",
            Self::ObjectPattern => "ObjectPattern",
            Self::ArrayPattern => "ArrayPattern",
            Self::AssignmentPattern => "AssignmentPattern",
            Self::RestElement => "RestElement",
            Self::ImportSpecifier => "ImportSpecifier",
            Self::ImportDefaultSpecifier => "ImportDefaultSpecifier",
            Self::ImportNamespaceSpecifier => "ImportNamespaceSpecifier",
            Self::ImportAttribute => "ImportAttribute",
            Self::ExportSpecifier => "ExportSpecifier",
            Self::Extension => "Extension",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Program {
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        NodeKind::Program
    }
}

impl Statement {
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Expression { .. } => NodeKind::ExpressionStatement,
            Self::Block(_) => NodeKind::BlockStatement,
            Self::Empty => NodeKind::EmptyStatement,
            Self::Debugger => NodeKind::DebuggerStatement,
            Self::With { .. } => NodeKind::WithStatement,
            Self::Return { .. } => NodeKind::ReturnStatement,
            Self::Labeled { .. } => NodeKind::LabeledStatement,
            Self::Break { .. } => NodeKind::BreakStatement,
            Self::Continue { .. } => NodeKind::ContinueStatement,
            Self::If { .. } => NodeKind::IfStatement,
            Self::Switch { .. } => NodeKind::SwitchStatement,
            Self::Throw { .. } => NodeKind::ThrowStatement,
            Self::Try { .. } => NodeKind::TryStatement,
            Self::While { .. } => NodeKind::WhileStatement,
            Self::DoWhile { .. } => NodeKind::DoWhileStatement,
            Self::For { .. } => NodeKind::ForStatement,
            Self::ForIn { .. } => NodeKind::ForInStatement,
            Self::ForOf { .. } => NodeKind::ForOfStatement,
            Self::FunctionDeclaration(_) => NodeKind::FunctionDeclaration,
            Self::VariableDeclaration(_) => NodeKind::VariableDeclaration,
            Self::ClassDeclaration(_) => NodeKind::ClassDeclaration,
            Self::ImportDeclaration(_) => NodeKind::ImportDeclaration,
            Self::ExportNamedDeclaration(_) => NodeKind::ExportNamedDeclaration,
            Self::ExportDefaultDeclaration(_) => NodeKind::ExportDefaultDeclaration,
            Self::ExportAllDeclaration(_) => NodeKind::ExportAllDeclaration,
            Self::Extension(_) => NodeKind::Extension,
        }
    }
}

impl Expression {
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Identifier(_) => NodeKind::Identifier,
            Self::PrivateName(_) => NodeKind::PrivateIdentifier,
            Self::Literal(_) => NodeKind::Literal,
            Self::This => NodeKind::ThisExpression,
            Self::Super => NodeKind::Super,
            Self::Array { .. } => NodeKind::ArrayExpression,
            Self::Object { .. } => NodeKind::ObjectExpression,
            Self::Function(_) => NodeKind::FunctionExpression,
            Self::Arrow(_) => NodeKind::ArrowFunctionExpression,
            Self::Class(_) => NodeKind::ClassExpression,
            Self::Template(_) => NodeKind::TemplateLiteral,
            Self::TaggedTemplate { .. } => NodeKind::TaggedTemplateExpression,
            Self::Unary { .. } => NodeKind::UnaryExpression,
            Self::Update { .. } => NodeKind::UpdateExpression,
            Self::Binary { .. } => NodeKind::BinaryExpression,
            Self::Logical { .. } => NodeKind::LogicalExpression,
            Self::Assignment { .. } => NodeKind::AssignmentExpression,
            Self::Conditional { .. } => NodeKind::ConditionalExpression,
            Self::Call { .. } => NodeKind::CallExpression,
            Self::New { .. } => NodeKind::NewExpression,
            Self::Member { .. } => NodeKind::MemberExpression,
            Self::Sequence { .. } => NodeKind::SequenceExpression,
            Self::Spread { .. } => NodeKind::SpreadElement,
            Self::Yield { .. } => NodeKind::YieldExpression,
            Self::Await { .. } => NodeKind::AwaitExpression,
            Self::Chain { .. } => NodeKind::ChainExpression,
            Self::Import { .. } => NodeKind::ImportExpression,
            Self::MetaProperty { .. } => NodeKind::MetaProperty,
            Self::Extension(_) => NodeKind::Extension,
        }
    }
}

impl Pattern {
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Identifier(_) => NodeKind::Identifier,
            Self::Object { .. } => NodeKind::ObjectPattern,
            Self::Array { .. } => NodeKind::ArrayPattern,
            Self::Assignment { .. } => NodeKind::AssignmentPattern,
            Self::Rest { .. } => NodeKind::RestElement,
            Self::Expression(expression) => expression.kind(),
        }
    }
}

impl ObjectMember {
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Property(_) => NodeKind::Property,
            Self::Spread(_) => NodeKind::SpreadElement,
        }
    }
}
