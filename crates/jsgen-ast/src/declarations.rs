//! Functions, classes, variables and module declarations.

use serde::{Deserialize, Serialize};

use crate::expressions::{Expression, Identifier, Literal, PropertyKey};
use crate::patterns::Pattern;
use crate::statements::{BlockStatement, Statement};

/// Shared by function declarations, function expressions and methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    #[serde(default)]
    pub id: Option<Identifier>,
    pub params: Vec<Pattern>,
    pub body: BlockStatement,
    #[serde(default)]
    pub is_async: bool,
    #[serde(default)]
    pub is_generator: bool,
}

/// Shared by class declarations and class expressions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    #[serde(default)]
    pub id: Option<Identifier>,
    #[serde(default)]
    pub super_class: Option<Box<Expression>>,
    pub body: Vec<ClassMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClassMember {
    Method(MethodDefinition),
    Property(PropertyDefinition),
    StaticBlock(BlockStatement),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MethodKind {
    Constructor,
    Method,
    Get,
    Set,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDefinition {
    pub key: PropertyKey,
    pub kind: MethodKind,
    #[serde(default)]
    pub is_static: bool,
    pub value: Function,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDefinition {
    pub key: PropertyKey,
    #[serde(default)]
    pub value: Option<Expression>,
    #[serde(default)]
    pub is_static: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

impl VariableKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Var => "var",
            Self::Let => "let",
            Self::Const => "const",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclarator {
    pub id: Pattern,
    #[serde(default)]
    pub init: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub kind: VariableKind,
    pub declarations: Vec<VariableDeclarator>,
}

// =============================================================================
// Modules
// =============================================================================

/// Name in an import or export list; ES2022 allows string names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ModuleExportName {
    Identifier(Identifier),
    String(Literal),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ImportSpecifier {
    /// `import local from '...'`
    Default { local: Identifier },
    /// `import * as local from '...'`
    Namespace { local: Identifier },
    /// `import { imported as local } from '...'`
    Named {
        imported: ModuleExportName,
        local: Identifier,
    },
}

/// `with { type: 'json' }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportAttribute {
    pub key: ModuleExportName,
    pub value: Literal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportDeclaration {
    pub specifiers: Vec<ImportSpecifier>,
    pub source: Literal,
    #[serde(default)]
    pub attributes: Vec<ImportAttribute>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSpecifier {
    pub local: ModuleExportName,
    pub exported: ModuleExportName,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportNamedDeclaration {
    /// A variable, function or class declaration.
    #[serde(default)]
    pub declaration: Option<Box<Statement>>,
    #[serde(default)]
    pub specifiers: Vec<ExportSpecifier>,
    #[serde(default)]
    pub source: Option<Literal>,
    #[serde(default)]
    pub attributes: Vec<ImportAttribute>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExportDefaultKind {
    Function(Function),
    Class(Class),
    Expression(Expression),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDefaultDeclaration {
    pub declaration: ExportDefaultKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportAllDeclaration {
    #[serde(default)]
    pub exported: Option<ModuleExportName>,
    pub source: Literal,
    #[serde(default)]
    pub attributes: Vec<ImportAttribute>,
}
