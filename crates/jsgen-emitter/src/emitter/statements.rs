//! Statement emission.
//!
//! Every statement is written without its terminator. The caller closes it
//! through the writer's statement hooks, which consult the configured
//! `StatementTerminator` with the flags returned here.

use jsgen_ast::{
    BlockStatement, CatchClause, Expression, ForHead, ForInit, Literal, LiteralValue, NodeKind,
    Pattern, Statement, SwitchCase, VariableDeclaration, VariableDeclarator,
};

use super::{EmitResult, ExprFlags, Printer};
use crate::context::{NodeRef, StatementFlags, WriteContext};
use crate::error::GenerateError;
use crate::precedence::Precedence;
use crate::source_writer::TokenFlags;
use crate::writer::BodyLayout;

type StatementResult = Result<StatementFlags, GenerateError>;

const NEEDS_SEMICOLON: StatementFlags = StatementFlags::NEEDS_SEMICOLON;
const SELF_TERMINATED: StatementFlags = StatementFlags::empty();

impl Printer<'_> {
    // =========================================================================
    // Lists and bodies
    // =========================================================================

    pub(super) fn emit_statement_list<'a>(
        &mut self,
        parent: NodeRef<'a>,
        slot: &'static str,
        list: &'a [Statement],
    ) -> EmitResult {
        let count = list.len();
        for (index, statement) in list.iter().enumerate() {
            self.writer.start_statement_list_item(index, count);
            self.emit_list_item(parent, slot, list, index, statement)?;
        }
        Ok(())
    }

    fn emit_list_item<'a>(
        &mut self,
        parent: NodeRef<'a>,
        slot: &'static str,
        list: &'a [Statement],
        index: usize,
        statement: &'a Statement,
    ) -> EmitResult {
        let count = list.len();
        let mut flags = self.emit_statement(statement)?;
        if index + 1 == count {
            flags |= StatementFlags::IS_RIGHT_MOST;
        }
        let context = WriteContext::list_item(parent, slot, list, index);
        self.writer
            .end_statement_list_item(index, count, flags, &context);
        Ok(())
    }

    /// `{ ... }` around a statement list.
    pub(super) fn emit_statement_block<'a>(
        &mut self,
        parent: NodeRef<'a>,
        slot: &'static str,
        list: &'a [Statement],
    ) -> EmitResult {
        self.writer.start_block(list.len());
        self.emit_statement_list(parent, slot, list)?;
        self.writer.end_block(list.len());
        Ok(())
    }

    /// Single-statement body of `if`, a loop, `with` or a label.
    fn emit_body<'a>(
        &mut self,
        parent: &'a Statement,
        slot: &'static str,
        body: &'a Statement,
    ) -> Result<BodyLayout, GenerateError> {
        let layout = if matches!(body, Statement::Block(_)) {
            BodyLayout::Block
        } else {
            BodyLayout::Nested
        };
        self.emit_body_with(parent, slot, body, layout)?;
        Ok(layout)
    }

    fn emit_body_with<'a>(
        &mut self,
        parent: &'a Statement,
        slot: &'static str,
        body: &'a Statement,
        layout: BodyLayout,
    ) -> EmitResult {
        self.writer.start_statement_body(layout);
        let flags = self.emit_statement(body)? | StatementFlags::IS_STATEMENT_BODY;
        let context = WriteContext::statement(NodeRef::Statement(parent), slot, body);
        self.writer.end_statement(flags, &context);
        self.writer.end_statement_body(layout);
        Ok(())
    }

    /// Emit `statement` without its terminator and report how it must be
    /// closed.
    pub(super) fn emit_statement(&mut self, statement: &Statement) -> StatementResult {
        self.enter()?;
        let flags = self.emit_statement_unguarded(statement)?;
        self.leave();
        Ok(flags)
    }

    fn emit_statement_unguarded(&mut self, statement: &Statement) -> StatementResult {
        match statement {
            Statement::Expression {
                expression,
                directive,
            } => {
                match expression {
                    Expression::Literal(literal) if directive.is_some() => {
                        self.emit_literal(literal);
                    }
                    // A bare string would reparse as a directive.
                    _ if is_string_literal(expression) => self.emit_parenthesized(expression)?,
                    _ => {
                        self.emit_expression(
                            expression,
                            Precedence::Lowest,
                            ExprFlags::STATEMENT_START,
                        )?;
                    }
                }
                Ok(NEEDS_SEMICOLON)
            }
            Statement::Block(block) => {
                self.emit_statement_block(NodeRef::Block(block), "body", &block.body)?;
                Ok(SELF_TERMINATED)
            }
            Statement::Empty => {
                self.punct(";", TokenFlags::TRAILING);
                Ok(SELF_TERMINATED)
            }
            Statement::Debugger => {
                self.keyword("debugger", TokenFlags::empty());
                Ok(NEEDS_SEMICOLON)
            }
            Statement::With { object, body } => {
                self.keyword("with", TokenFlags::TRAILING_SPACE_RECOMMENDED);
                self.emit_parenthesized(object)?;
                self.emit_body(statement, "body", body)?;
                Ok(SELF_TERMINATED)
            }
            Statement::Return { argument } => {
                match argument {
                    Some(argument) => {
                        self.keyword("return", TokenFlags::TRAILING_SPACE_RECOMMENDED);
                        self.emit_expression(argument, Precedence::Lowest, ExprFlags::empty())?;
                    }
                    None => self.keyword("return", TokenFlags::empty()),
                }
                Ok(NEEDS_SEMICOLON)
            }
            Statement::Labeled { label, body } => {
                self.identifier(label);
                self.punct(":", TokenFlags::empty());
                self.emit_body_with(statement, "body", body, BodyLayout::Inline)?;
                Ok(SELF_TERMINATED)
            }
            Statement::Break { label } => {
                self.keyword("break", TokenFlags::empty());
                if let Some(label) = label {
                    self.identifier(label);
                }
                Ok(NEEDS_SEMICOLON)
            }
            Statement::Continue { label } => {
                self.keyword("continue", TokenFlags::empty());
                if let Some(label) = label {
                    self.identifier(label);
                }
                Ok(NEEDS_SEMICOLON)
            }
            Statement::If {
                test,
                consequent,
                alternate,
            } => self.emit_if(statement, test, consequent, alternate.as_deref()),
            Statement::Switch {
                discriminant,
                cases,
            } => self.emit_switch(discriminant, cases),
            Statement::Throw { argument } => {
                self.keyword("throw", TokenFlags::TRAILING_SPACE_RECOMMENDED);
                self.emit_expression(argument, Precedence::Lowest, ExprFlags::empty())?;
                Ok(NEEDS_SEMICOLON)
            }
            Statement::Try {
                block,
                handler,
                finalizer,
            } => self.emit_try(statement, block, handler.as_ref(), finalizer.as_ref()),
            Statement::While { test, body } => {
                self.keyword("while", TokenFlags::TRAILING_SPACE_RECOMMENDED);
                self.emit_parenthesized(test)?;
                self.emit_body(statement, "body", body)?;
                Ok(SELF_TERMINATED)
            }
            Statement::DoWhile { body, test } => {
                self.keyword("do", TokenFlags::empty());
                let layout = self.emit_body(statement, "body", body)?;
                self.writer.start_continuation(layout);
                self.keyword("while", TokenFlags::SURROUNDING_SPACE_RECOMMENDED);
                self.emit_parenthesized(test)?;
                Ok(SELF_TERMINATED)
            }
            Statement::For {
                init,
                test,
                update,
                body,
            } => {
                self.keyword("for", TokenFlags::TRAILING_SPACE_RECOMMENDED);
                self.open_paren();
                match init {
                    Some(ForInit::Variable(declaration)) => {
                        self.emit_variable_declaration(declaration, ExprFlags::FORBID_IN)?;
                    }
                    Some(ForInit::Expression(expression)) => {
                        self.emit_expression(
                            expression,
                            Precedence::Lowest,
                            ExprFlags::FORBID_IN | ExprFlags::FOR_HEAD_START,
                        )?;
                    }
                    None => {}
                }
                self.for_header_separator();
                if let Some(test) = test {
                    self.emit_expression(test, Precedence::Lowest, ExprFlags::empty())?;
                }
                self.for_header_separator();
                if let Some(update) = update {
                    self.emit_expression(update, Precedence::Lowest, ExprFlags::empty())?;
                }
                self.close_paren();
                self.emit_body(statement, "body", body)?;
                Ok(SELF_TERMINATED)
            }
            Statement::ForIn { left, right, body } => {
                self.keyword("for", TokenFlags::TRAILING_SPACE_RECOMMENDED);
                self.open_paren();
                self.emit_for_head(NodeKind::ForInStatement, left)?;
                self.keyword("in", TokenFlags::SURROUNDING_SPACE_RECOMMENDED);
                self.emit_expression(right, Precedence::Lowest, ExprFlags::empty())?;
                self.close_paren();
                self.emit_body(statement, "body", body)?;
                Ok(SELF_TERMINATED)
            }
            Statement::ForOf {
                left,
                right,
                body,
                is_await,
            } => {
                self.keyword("for", TokenFlags::TRAILING_SPACE_RECOMMENDED);
                if *is_await {
                    self.keyword("await", TokenFlags::TRAILING_SPACE_RECOMMENDED);
                }
                self.open_paren();
                self.emit_for_head(NodeKind::ForOfStatement, left)?;
                self.keyword("of", TokenFlags::SURROUNDING_SPACE_RECOMMENDED);
                self.emit_expression(right, Precedence::Assign, ExprFlags::empty())?;
                self.close_paren();
                self.emit_body(statement, "body", body)?;
                Ok(SELF_TERMINATED)
            }
            Statement::FunctionDeclaration(function) => {
                if function.id.is_none() {
                    return Err(GenerateError::malformed(
                        NodeKind::FunctionDeclaration,
                        "function declaration needs a name",
                    ));
                }
                self.emit_function(function)?;
                Ok(SELF_TERMINATED)
            }
            Statement::VariableDeclaration(declaration) => {
                self.emit_variable_declaration(declaration, ExprFlags::empty())?;
                Ok(NEEDS_SEMICOLON)
            }
            Statement::ClassDeclaration(class) => {
                if class.id.is_none() {
                    return Err(GenerateError::malformed(
                        NodeKind::ClassDeclaration,
                        "class declaration needs a name",
                    ));
                }
                self.emit_class(class)?;
                Ok(SELF_TERMINATED)
            }
            Statement::ImportDeclaration(import) => self.emit_import_declaration(import),
            Statement::ExportNamedDeclaration(export) => self.emit_export_named(export),
            Statement::ExportDefaultDeclaration(export) => self.emit_export_default(export),
            Statement::ExportAllDeclaration(export) => self.emit_export_all(export),
            Statement::Extension(extension) => Err(GenerateError::UnsupportedNode {
                kind: extension.kind.clone(),
            }),
        }
    }

    // =========================================================================
    // Control flow
    // =========================================================================

    fn emit_if<'a>(
        &mut self,
        statement: &'a Statement,
        test: &Expression,
        consequent: &'a Statement,
        alternate: Option<&'a Statement>,
    ) -> StatementResult {
        self.keyword("if", TokenFlags::TRAILING_SPACE_RECOMMENDED);
        self.emit_parenthesized(test)?;

        let layout = if alternate.is_some() && ends_with_open_if(consequent) {
            // Braces keep the `else` from binding to the inner `if`.
            self.writer.start_block(1);
            self.writer.start_statement_list_item(0, 1);
            self.emit_list_item(
                NodeRef::Statement(statement),
                "consequent",
                std::slice::from_ref(consequent),
                0,
                consequent,
            )?;
            self.writer.end_block(1);
            BodyLayout::Block
        } else {
            self.emit_body(statement, "consequent", consequent)?
        };

        if let Some(alternate) = alternate {
            self.writer.start_continuation(layout);
            self.keyword("else", TokenFlags::SURROUNDING_SPACE_RECOMMENDED);
            if matches!(alternate, Statement::If { .. }) {
                self.emit_body_with(statement, "alternate", alternate, BodyLayout::Inline)?;
            } else {
                self.emit_body(statement, "alternate", alternate)?;
            }
        }
        Ok(SELF_TERMINATED)
    }

    fn emit_switch(&mut self, discriminant: &Expression, cases: &[SwitchCase]) -> StatementResult {
        if cases.iter().filter(|case| case.test.is_none()).count() > 1 {
            return Err(GenerateError::malformed(
                NodeKind::SwitchStatement,
                "switch has more than one default clause",
            ));
        }

        self.keyword("switch", TokenFlags::TRAILING_SPACE_RECOMMENDED);
        self.emit_parenthesized(discriminant)?;
        self.writer.start_block(cases.len());
        for case in cases {
            self.writer.line_break();
            match &case.test {
                Some(test) => {
                    self.keyword("case", TokenFlags::TRAILING_SPACE_RECOMMENDED);
                    self.emit_expression(test, Precedence::Lowest, ExprFlags::empty())?;
                }
                None => self.keyword("default", TokenFlags::empty()),
            }
            self.punct(":", TokenFlags::empty());

            let parent = NodeRef::SwitchCase(case);
            if let [single @ Statement::Block(_)] = case.consequent.as_slice() {
                // `default: {` keeps the block on the label line.
                self.emit_list_item(parent, "consequent", &case.consequent, 0, single)?;
            } else {
                self.writer.start_case_body();
                self.emit_statement_list(parent, "consequent", &case.consequent)?;
                self.writer.end_case_body();
            }
        }
        self.writer.end_block(cases.len());
        Ok(SELF_TERMINATED)
    }

    fn emit_try<'a>(
        &mut self,
        statement: &'a Statement,
        block: &'a BlockStatement,
        handler: Option<&'a CatchClause>,
        finalizer: Option<&'a BlockStatement>,
    ) -> StatementResult {
        if handler.is_none() && finalizer.is_none() {
            return Err(GenerateError::malformed(
                NodeKind::TryStatement,
                "try statement needs a catch or finally clause",
            ));
        }

        let parent = NodeRef::Statement(statement);
        self.keyword("try", TokenFlags::empty());
        self.emit_statement_block(parent, "block", &block.body)?;
        if let Some(handler) = handler {
            self.keyword("catch", TokenFlags::SURROUNDING_SPACE_RECOMMENDED);
            if let Some(param) = &handler.param {
                self.open_paren();
                self.emit_binding_pattern(param)?;
                self.close_paren();
            }
            self.emit_statement_block(parent, "handler", &handler.body.body)?;
        }
        if let Some(finalizer) = finalizer {
            self.keyword("finally", TokenFlags::SURROUNDING_SPACE_RECOMMENDED);
            self.emit_statement_block(parent, "finalizer", &finalizer.body)?;
        }
        Ok(SELF_TERMINATED)
    }

    fn for_header_separator(&mut self) {
        self.punct(
            ";",
            TokenFlags::IN_BETWEEN | TokenFlags::TRAILING_SPACE_RECOMMENDED,
        );
    }

    fn emit_for_head(&mut self, kind: NodeKind, head: &ForHead) -> EmitResult {
        match head {
            ForHead::Variable(declaration) => {
                if declaration.declarations.len() != 1 {
                    return Err(GenerateError::malformed(
                        kind,
                        "loop head must declare exactly one binding",
                    ));
                }
                self.emit_variable_declaration(declaration, ExprFlags::FORBID_IN)
            }
            // `for(async of` and `for(let` cannot open a for-of target.
            ForHead::Pattern(pattern)
                if kind == NodeKind::ForOfStatement && is_ambiguous_for_of_target(pattern) =>
            {
                self.open_paren();
                self.emit_assignment_target(pattern, ExprFlags::empty())?;
                self.close_paren();
                Ok(())
            }
            ForHead::Pattern(pattern) => {
                self.emit_assignment_target(pattern, ExprFlags::FOR_HEAD_START)
            }
        }
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    pub(super) fn emit_variable_declaration(
        &mut self,
        declaration: &VariableDeclaration,
        flags: ExprFlags,
    ) -> EmitResult {
        if declaration.declarations.is_empty() {
            return Err(GenerateError::malformed(
                NodeKind::VariableDeclaration,
                "declaration needs at least one declarator",
            ));
        }
        self.keyword(
            declaration.kind.as_str(),
            TokenFlags::TRAILING_SPACE_RECOMMENDED,
        );
        self.emit_comma_separated(&declaration.declarations, |printer, declarator| {
            printer.emit_declarator(declarator, flags)
        })
    }

    fn emit_declarator(&mut self, declarator: &VariableDeclarator, flags: ExprFlags) -> EmitResult {
        self.emit_binding_pattern(&declarator.id)?;
        if let Some(init) = &declarator.init {
            self.equals();
            self.emit_expression(init, Precedence::Assign, flags.rest())?;
        }
        Ok(())
    }
}

/// Whether `statement` ends in an `if` without `else` that a following
/// `else` would attach to.
fn ends_with_open_if(statement: &Statement) -> bool {
    match statement {
        Statement::If {
            alternate: None, ..
        } => true,
        Statement::If {
            alternate: Some(alternate),
            ..
        } => ends_with_open_if(alternate),
        Statement::While { body, .. }
        | Statement::For { body, .. }
        | Statement::ForIn { body, .. }
        | Statement::ForOf { body, .. }
        | Statement::With { body, .. }
        | Statement::Labeled { body, .. } => ends_with_open_if(body),
        _ => false,
    }
}

fn is_string_literal(expression: &Expression) -> bool {
    matches!(
        expression,
        Expression::Literal(Literal {
            value: LiteralValue::String(_),
            ..
        })
    )
}

/// A for-of target that starts with `let`, or is exactly `async`.
fn is_ambiguous_for_of_target(pattern: &Pattern) -> bool {
    let mut expression = match pattern {
        Pattern::Identifier(id) => return matches!(id.name.as_str(), "let" | "async"),
        Pattern::Expression(expression) => &**expression,
        _ => return false,
    };
    if let Expression::Identifier(id) = expression {
        return matches!(id.name.as_str(), "let" | "async");
    }
    while let Expression::Member { object, .. } = expression {
        expression = &**object;
    }
    matches!(expression, Expression::Identifier(id) if id.name == "let")
}
