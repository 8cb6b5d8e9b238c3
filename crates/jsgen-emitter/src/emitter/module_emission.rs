//! Module Emission Module
//!
//! `import` and `export` declarations.

use jsgen_ast::{
    ExportAllDeclaration, ExportDefaultDeclaration, ExportDefaultKind, ExportNamedDeclaration,
    ExportSpecifier, Identifier, ImportAttribute, ImportDeclaration, ImportSpecifier, Literal,
    ModuleExportName, NodeKind, Statement,
};

use super::{ExprFlags, Printer};
use crate::context::StatementFlags;
use crate::error::GenerateError;
use crate::precedence::Precedence;
use crate::source_writer::TokenFlags;

type StatementResult = Result<StatementFlags, GenerateError>;

impl Printer<'_> {
    // =========================================================================
    // Imports
    // =========================================================================

    pub(super) fn emit_import_declaration(&mut self, import: &ImportDeclaration) -> StatementResult {
        let (default, namespace, named) = split_import_specifiers(&import.specifiers)?;

        self.keyword("import", TokenFlags::TRAILING_SPACE_RECOMMENDED);
        if default.is_some() || namespace.is_some() || !named.is_empty() {
            if let Some(local) = default {
                self.identifier(local);
                if namespace.is_some() || !named.is_empty() {
                    self.writer.write_list_separator();
                }
            }
            if let Some(local) = namespace {
                self.punct("*", TokenFlags::empty());
                self.keyword("as", TokenFlags::SURROUNDING_SPACE_RECOMMENDED);
                self.identifier(local);
            }
            if !named.is_empty() {
                self.writer.start_braces();
                self.emit_comma_separated(&named, |printer, (imported, local)| {
                    printer.emit_module_export_name(imported);
                    if !matches!(imported, ModuleExportName::Identifier(id) if id.name == local.name) {
                        printer.keyword("as", TokenFlags::SURROUNDING_SPACE_RECOMMENDED);
                        printer.identifier(local);
                    }
                    Ok(())
                })?;
                self.writer.end_braces();
            }
            self.keyword("from", TokenFlags::SURROUNDING_SPACE_RECOMMENDED);
        }
        self.emit_module_source(&import.source, &import.attributes)?;
        Ok(StatementFlags::NEEDS_SEMICOLON)
    }

    // =========================================================================
    // Exports
    // =========================================================================

    pub(super) fn emit_export_named(&mut self, export: &ExportNamedDeclaration) -> StatementResult {
        self.keyword("export", TokenFlags::TRAILING_SPACE_RECOMMENDED);

        if let Some(declaration) = &export.declaration {
            if !export.specifiers.is_empty() || export.source.is_some() {
                return Err(GenerateError::malformed(
                    NodeKind::ExportNamedDeclaration,
                    "export of a declaration cannot carry specifiers or a source",
                ));
            }
            return match &**declaration {
                Statement::FunctionDeclaration(_)
                | Statement::ClassDeclaration(_)
                | Statement::VariableDeclaration(_) => self.emit_statement(declaration),
                _ => Err(GenerateError::malformed(
                    NodeKind::ExportNamedDeclaration,
                    "only function, class and variable declarations can be exported",
                )),
            };
        }

        self.writer.start_braces();
        self.emit_comma_separated(&export.specifiers, |printer, specifier| {
            printer.emit_export_specifier(specifier);
            Ok(())
        })?;
        self.writer.end_braces();
        if let Some(source) = &export.source {
            self.keyword("from", TokenFlags::SURROUNDING_SPACE_RECOMMENDED);
            self.emit_module_source(source, &export.attributes)?;
        }
        Ok(StatementFlags::NEEDS_SEMICOLON)
    }

    pub(super) fn emit_export_default(
        &mut self,
        export: &ExportDefaultDeclaration,
    ) -> StatementResult {
        self.keyword("export", TokenFlags::TRAILING_SPACE_RECOMMENDED);
        self.keyword("default", TokenFlags::TRAILING_SPACE_RECOMMENDED);
        match &export.declaration {
            ExportDefaultKind::Function(function) => {
                self.emit_function(function)?;
                Ok(StatementFlags::empty())
            }
            ExportDefaultKind::Class(class) => {
                self.emit_class(class)?;
                Ok(StatementFlags::empty())
            }
            ExportDefaultKind::Expression(expression) => {
                self.emit_expression(
                    expression,
                    Precedence::Assign,
                    ExprFlags::EXPORT_DEFAULT_START,
                )?;
                Ok(StatementFlags::NEEDS_SEMICOLON)
            }
        }
    }

    pub(super) fn emit_export_all(&mut self, export: &ExportAllDeclaration) -> StatementResult {
        self.keyword("export", TokenFlags::TRAILING_SPACE_RECOMMENDED);
        self.punct("*", TokenFlags::empty());
        if let Some(exported) = &export.exported {
            self.keyword("as", TokenFlags::SURROUNDING_SPACE_RECOMMENDED);
            self.emit_module_export_name(exported);
        }
        self.keyword("from", TokenFlags::SURROUNDING_SPACE_RECOMMENDED);
        self.emit_module_source(&export.source, &export.attributes)?;
        Ok(StatementFlags::NEEDS_SEMICOLON)
    }

    // =========================================================================
    // Shared pieces
    // =========================================================================

    fn emit_export_specifier(&mut self, specifier: &ExportSpecifier) {
        self.emit_module_export_name(&specifier.local);
        if specifier.local != specifier.exported {
            self.keyword("as", TokenFlags::SURROUNDING_SPACE_RECOMMENDED);
            self.emit_module_export_name(&specifier.exported);
        }
    }

    fn emit_module_export_name(&mut self, name: &ModuleExportName) {
        match name {
            ModuleExportName::Identifier(id) => self.identifier(id),
            ModuleExportName::String(literal) => self.emit_literal(literal),
        }
    }

    /// `'source'` plus an optional `with { type: 'json' }` clause.
    fn emit_module_source(
        &mut self,
        source: &Literal,
        attributes: &[ImportAttribute],
    ) -> Result<(), GenerateError> {
        self.emit_literal(source);
        if attributes.is_empty() {
            return Ok(());
        }
        self.keyword("with", TokenFlags::SURROUNDING_SPACE_RECOMMENDED);
        self.writer.start_braces();
        self.emit_comma_separated(attributes, |printer, attribute| {
            printer.emit_module_export_name(&attribute.key);
            printer.punct(":", TokenFlags::TRAILING_SPACE_RECOMMENDED);
            printer.emit_literal(&attribute.value);
            Ok(())
        })?;
        self.writer.end_braces();
        Ok(())
    }
}

type ImportParts<'a> = (
    Option<&'a Identifier>,
    Option<&'a Identifier>,
    Vec<(&'a ModuleExportName, &'a Identifier)>,
);

/// Sort specifiers into the three slots an import clause allows:
/// `default, * as ns` or `default, { a, b as c }`.
fn split_import_specifiers(specifiers: &[ImportSpecifier]) -> Result<ImportParts<'_>, GenerateError> {
    let invalid = || {
        GenerateError::malformed(
            NodeKind::ImportDeclaration,
            "invalid combination of import specifiers",
        )
    };

    let mut default = None;
    let mut namespace = None;
    let mut named = Vec::new();
    for (index, specifier) in specifiers.iter().enumerate() {
        match specifier {
            ImportSpecifier::Default { local } => {
                if index != 0 {
                    return Err(invalid());
                }
                default = Some(local);
            }
            ImportSpecifier::Namespace { local } => {
                if namespace.is_some() || !named.is_empty() {
                    return Err(invalid());
                }
                namespace = Some(local);
            }
            ImportSpecifier::Named { imported, local } => {
                if namespace.is_some() {
                    return Err(invalid());
                }
                named.push((imported, local));
            }
        }
    }
    Ok((default, namespace, named))
}
