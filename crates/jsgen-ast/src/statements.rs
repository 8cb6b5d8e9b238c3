//! Program root and statement nodes.

use serde::{Deserialize, Serialize};

use crate::declarations::{
    Class, ExportAllDeclaration, ExportDefaultDeclaration, ExportNamedDeclaration, Function,
    ImportDeclaration, VariableDeclaration,
};
use crate::expressions::{Expression, ExtensionNode, Identifier};
use crate::patterns::Pattern;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SourceType {
    #[default]
    Script,
    Module,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    #[serde(default)]
    pub source_type: SourceType,
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BlockStatement {
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchCase {
    /// `None` for `default:`
    #[serde(default)]
    pub test: Option<Expression>,
    pub consequent: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchClause {
    #[serde(default)]
    pub param: Option<Pattern>,
    pub body: BlockStatement,
}

/// First clause of a C-style `for`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ForInit {
    Variable(VariableDeclaration),
    Expression(Expression),
}

/// Left side of `for-in` / `for-of`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ForHead {
    Variable(VariableDeclaration),
    Pattern(Pattern),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    /// `expression;` or a directive prologue entry such as `'use strict';`
    Expression {
        expression: Expression,
        #[serde(default)]
        directive: Option<String>,
    },
    /// `{ ... }`
    Block(BlockStatement),
    /// `;`
    Empty,
    /// `debugger;`
    Debugger,
    /// `with (object) body`
    With {
        object: Expression,
        body: Box<Statement>,
    },
    /// `return argument;`
    Return {
        #[serde(default)]
        argument: Option<Expression>,
    },
    /// `label: body`
    Labeled {
        label: Identifier,
        body: Box<Statement>,
    },
    /// `break label;`
    Break {
        #[serde(default)]
        label: Option<Identifier>,
    },
    /// `continue label;`
    Continue {
        #[serde(default)]
        label: Option<Identifier>,
    },
    /// `if (test) consequent else alternate`
    If {
        test: Expression,
        consequent: Box<Statement>,
        #[serde(default)]
        alternate: Option<Box<Statement>>,
    },
    /// `switch (discriminant) { cases }`
    Switch {
        discriminant: Expression,
        cases: Vec<SwitchCase>,
    },
    /// `throw argument;`
    Throw { argument: Expression },
    /// `try block catch (param) handler finally finalizer`
    Try {
        block: BlockStatement,
        #[serde(default)]
        handler: Option<CatchClause>,
        #[serde(default)]
        finalizer: Option<BlockStatement>,
    },
    /// `while (test) body`
    While {
        test: Expression,
        body: Box<Statement>,
    },
    /// `do body while (test)`
    DoWhile {
        body: Box<Statement>,
        test: Expression,
    },
    /// `for (init; test; update) body`
    For {
        #[serde(default)]
        init: Option<ForInit>,
        #[serde(default)]
        test: Option<Expression>,
        #[serde(default)]
        update: Option<Expression>,
        body: Box<Statement>,
    },
    /// `for (left in right) body`
    ForIn {
        left: ForHead,
        right: Expression,
        body: Box<Statement>,
    },
    /// `for (left of right) body`, `for await (...)`
    ForOf {
        left: ForHead,
        right: Expression,
        body: Box<Statement>,
        #[serde(default)]
        is_await: bool,
    },
    FunctionDeclaration(Function),
    VariableDeclaration(VariableDeclaration),
    ClassDeclaration(Class),
    ImportDeclaration(ImportDeclaration),
    ExportNamedDeclaration(ExportNamedDeclaration),
    ExportDefaultDeclaration(ExportDefaultDeclaration),
    ExportAllDeclaration(ExportAllDeclaration),
    Extension(ExtensionNode),
}
