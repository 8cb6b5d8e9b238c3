//! JavaScript syntax tree consumed by the jsgen code generator.
//!
//! The tree is plain owned data: enums per syntactic family, `Box` and `Vec`
//! children, no parent links. Parsers build it, the emitter only borrows it.
//!
//! Every type derives `serde::{Serialize, Deserialize}` with serde's default
//! (externally tagged) representation, so trees can be stored as JSON
//! fixtures or shipped between processes.

pub mod builders;
pub mod declarations;
pub mod expressions;
pub mod kind;
pub mod operators;
pub mod patterns;
pub mod statements;

pub use declarations::{
    Class, ClassMember, ExportAllDeclaration, ExportDefaultDeclaration, ExportDefaultKind,
    ExportNamedDeclaration, ExportSpecifier, Function, ImportAttribute, ImportDeclaration,
    ImportSpecifier, MethodDefinition, MethodKind, ModuleExportName, PropertyDefinition,
    VariableDeclaration, VariableDeclarator, VariableKind,
};
pub use expressions::{
    ArrowBody, ArrowFunction, Expression, ExtensionNode, Identifier, Literal, LiteralValue,
    MemberProperty, ObjectMember, Property, PropertyKey, PropertyKind, TemplateElement,
    TemplateLiteral,
};
pub use kind::NodeKind;
pub use operators::{
    AssignmentOperator, BinaryOperator, LogicalOperator, UnaryOperator, UpdateOperator,
};
pub use patterns::{ObjectPatternMember, Pattern};
pub use statements::{
    BlockStatement, CatchClause, ForHead, ForInit, Program, SourceType, Statement, SwitchCase,
};

#[cfg(test)]
#[path = "../tests/ast_tests.rs"]
mod tests;
