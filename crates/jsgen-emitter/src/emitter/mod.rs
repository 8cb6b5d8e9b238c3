//! AST visitor.
//!
//! `Printer` walks a borrowed tree and drives a [`JsWriter`]. Its methods are
//! spread over one file per syntactic family:
//!
//! - `statements`: statement lists, control flow, single-statement bodies
//! - `expressions`: operators, calls, members, parenthesization
//! - `functions`: functions, arrows, parameter lists, bodies
//! - `classes`: class heads, members, static blocks
//! - `module_emission`: `import` and `export`
//! - `binding_patterns`: destructuring and assignment targets
//! - `literals`: literals, templates, property keys
//! - `helpers`: token shortcuts and list plumbing

mod binding_patterns;
mod classes;
mod expressions;
mod functions;
mod helpers;
mod literals;
mod module_emission;
mod statements;

use bitflags::bitflags;
use jsgen_ast::{Expression, Program, Statement};
use jsgen_common::limits::MAX_EMIT_DEPTH;

use crate::context::NodeRef;
use crate::error::GenerateError;
use crate::options::WriterOptions;
use crate::precedence::Precedence;
use crate::writer::JsWriter;

pub(crate) type EmitResult = Result<(), GenerateError>;

bitflags! {
    /// Position facts an expression inherits from its parent slot.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub(crate) struct ExprFlags: u8 {
        /// First token of an expression statement.
        const STATEMENT_START = 1 << 0;
        /// First token of a concise arrow body.
        const ARROW_BODY_START = 1 << 1;
        /// First token after `export default`.
        const EXPORT_DEFAULT_START = 1 << 2;
        /// Inside a `for` header init, where a bare `in` would end the clause.
        const FORBID_IN = 1 << 3;
        /// Inside a `new` callee, where a call would take the argument list.
        const FORBID_CALL = 1 << 4;
        /// First token of a `for` init expression or `for`-in/of target.
        const FOR_HEAD_START = 1 << 5;
    }
}

impl ExprFlags {
    const STARTS: Self = Self::STATEMENT_START
        .union(Self::ARROW_BODY_START)
        .union(Self::EXPORT_DEFAULT_START)
        .union(Self::FOR_HEAD_START);

    /// Flags for the child that begins at the same token as its parent.
    pub(crate) const fn leftmost(self) -> Self {
        self.intersection(Self::STARTS.union(Self::FORBID_IN))
    }

    /// Flags for any later, unbracketed child.
    pub(crate) const fn rest(self) -> Self {
        self.intersection(Self::FORBID_IN)
    }
}

pub struct Printer<'o> {
    writer: JsWriter<'o>,
    depth: u32,
}

impl<'o> Printer<'o> {
    #[must_use]
    pub fn new(options: &'o WriterOptions) -> Self {
        Self {
            writer: JsWriter::new(options),
            depth: 0,
        }
    }

    pub fn emit_program(&mut self, program: &Program) -> EmitResult {
        self.emit_statement_list(NodeRef::Program(program), "body", &program.body)?;
        self.writer.end_program();
        Ok(())
    }

    /// Emit one statement as if it were a one-item program.
    pub fn emit_root_statement(&mut self, statement: &Statement) -> EmitResult {
        self.emit_statement_list(
            NodeRef::Statement(statement),
            "root",
            std::slice::from_ref(statement),
        )
    }

    pub fn emit_root_expression(&mut self, expression: &Expression) -> EmitResult {
        self.emit_expression(expression, Precedence::Lowest, ExprFlags::empty())
    }

    #[must_use]
    pub fn finish(self) -> String {
        self.writer.finish()
    }

    // =========================================================================
    // Depth guard
    // =========================================================================

    fn enter(&mut self) -> EmitResult {
        self.depth += 1;
        if self.depth > MAX_EMIT_DEPTH {
            return Err(GenerateError::NestingTooDeep {
                limit: MAX_EMIT_DEPTH,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
