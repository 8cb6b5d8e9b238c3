//! Per-call emission state exposed to termination hooks.

use bitflags::bitflags;
use jsgen_ast::{
    ArrowFunction, BlockStatement, Class, Function, NodeKind, Program, Statement, SwitchCase,
};

bitflags! {
    /// Facts the visitor computes about a statement before it is closed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StatementFlags: u8 {
        /// The grammar form is not self-terminating.
        const NEEDS_SEMICOLON = 1 << 0;
        /// Last item of its statement list.
        const IS_RIGHT_MOST = 1 << 1;
        /// Non-list body of `if`, a loop, `with` or a label.
        const IS_STATEMENT_BODY = 1 << 2;
    }
}

impl StatementFlags {
    #[must_use]
    pub const fn needs_semicolon(self) -> bool {
        self.contains(Self::NEEDS_SEMICOLON)
    }
}

/// A borrowed reference to the node that owns a statement or list.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Program(&'a Program),
    Statement(&'a Statement),
    Block(&'a BlockStatement),
    SwitchCase(&'a SwitchCase),
    Function(&'a Function),
    Arrow(&'a ArrowFunction),
    Class(&'a Class),
}

impl NodeRef<'_> {
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Program(_) => NodeKind::Program,
            Self::Statement(statement) => statement.kind(),
            Self::Block(_) => NodeKind::BlockStatement,
            Self::SwitchCase(_) => NodeKind::SwitchCase,
            Self::Function(_) => NodeKind::FunctionExpression,
            Self::Arrow(_) => NodeKind::ArrowFunctionExpression,
            Self::Class(_) => NodeKind::ClassBody,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Target<'a> {
    Statement(&'a Statement),
    ListItem {
        list: &'a [Statement],
        index: usize,
    },
}

/// Where the emitter currently is, as seen from a termination hook.
///
/// Built at the callback site and dropped right after; it only borrows the
/// tree.
#[derive(Debug, Clone, Copy)]
pub struct WriteContext<'a> {
    parent: NodeRef<'a>,
    slot: &'static str,
    target: Target<'a>,
}

impl<'a> WriteContext<'a> {
    /// Context for a statement in a single-statement slot (`body`,
    /// `consequent`, ...).
    #[must_use]
    pub(crate) const fn statement(parent: NodeRef<'a>, slot: &'static str, statement: &'a Statement) -> Self {
        Self {
            parent,
            slot,
            target: Target::Statement(statement),
        }
    }

    /// Context for the `index`-th item of a statement list.
    ///
    /// Only the emitter builds these, always with `index < list.len()`.
    #[must_use]
    pub(crate) const fn list_item(
        parent: NodeRef<'a>,
        slot: &'static str,
        list: &'a [Statement],
        index: usize,
    ) -> Self {
        Self {
            parent,
            slot,
            target: Target::ListItem { list, index },
        }
    }

    #[must_use]
    pub const fn parent(&self) -> NodeRef<'a> {
        self.parent
    }

    /// Name of the child slot being emitted, e.g. `"body"` or `"consequent"`.
    #[must_use]
    pub const fn slot(&self) -> &'static str {
        self.slot
    }

    /// The statement about to be closed.
    #[must_use]
    pub fn current(&self) -> &'a Statement {
        match self.target {
            Target::Statement(statement) => statement,
            Target::ListItem { list, index } => &list[index],
        }
    }

    /// The enclosing statement list, for list items.
    #[must_use]
    pub const fn list(&self) -> Option<&'a [Statement]> {
        match self.target {
            Target::Statement(_) => None,
            Target::ListItem { list, .. } => Some(list),
        }
    }

    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match self.target {
            Target::Statement(_) => None,
            Target::ListItem { index, .. } => Some(index),
        }
    }
}
