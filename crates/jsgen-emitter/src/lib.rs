//! JavaScript code generation from a `jsgen-ast` tree.
//!
//! The crate is layered bottom-up:
//!
//! - [`precedence`]: binding strengths and the parenthesization rule
//! - [`literals`]: canonical text for literal values
//! - [`source_writer`]: tokens to text, spacing and indentation
//! - [`writer`]: layout policy and statement termination hooks
//! - `emitter`: the AST visitor
//!
//! The functions at the crate root are the entry points. Every call builds
//! its own writer, so they can run concurrently over shared trees.

pub mod context;
mod emitter;
pub mod error;
pub mod literals;
pub mod options;
pub mod precedence;
pub mod source_writer;
pub mod terminator;
pub mod writer;

use std::io;

use jsgen_ast::{Expression, Program, Statement};
use tracing::{debug, trace};

pub use context::{NodeRef, StatementFlags, WriteContext};
pub use emitter::Printer;
pub use error::GenerateError;
pub use options::{ArrowParens, FormatStyle, QuoteStyle, WriterOptions};
pub use terminator::{DefaultTerminator, FnTerminator, ForceTerminator, StatementTerminator};

// =============================================================================
// Driver
// =============================================================================

/// Generate `program` with the default (compact) options.
pub fn generate(program: &Program) -> Result<String, GenerateError> {
    generate_with(program, &WriterOptions::default())
}

/// Generate `program` with explicit options.
#[tracing::instrument(level = "debug", skip_all, fields(statements = program.body.len(), style = ?options.style))]
pub fn generate_with(program: &Program, options: &WriterOptions) -> Result<String, GenerateError> {
    run(options, |printer| printer.emit_program(program))
}

/// Generate `program` into `sink`.
///
/// The text is produced in full before the first byte is written, so a
/// failed generation leaves `sink` untouched.
pub fn generate_to(
    program: &Program,
    options: &WriterOptions,
    mut sink: impl io::Write,
) -> Result<(), GenerateError> {
    let code = generate_with(program, options)?;
    sink.write_all(code.as_bytes())?;
    sink.flush()?;
    Ok(())
}

/// Compact output, or the default indented layout when `beautify` is set.
pub fn to_javascript_string(program: &Program, beautify: bool) -> Result<String, GenerateError> {
    let options = if beautify {
        WriterOptions::indented()
    } else {
        WriterOptions::compact()
    };
    generate_with(program, &options)
}

/// Generate a single expression, without a terminator.
#[tracing::instrument(level = "debug", skip_all, fields(kind = %expression.kind()))]
pub fn generate_expression(
    expression: &Expression,
    options: &WriterOptions,
) -> Result<String, GenerateError> {
    run(options, |printer| printer.emit_root_expression(expression))
}

/// Generate a single statement as a one-statement program.
#[tracing::instrument(level = "debug", skip_all, fields(kind = %statement.kind()))]
pub fn generate_statement(
    statement: &Statement,
    options: &WriterOptions,
) -> Result<String, GenerateError> {
    run(options, |printer| printer.emit_root_statement(statement))
}

fn run(
    options: &WriterOptions,
    emit: impl FnOnce(&mut Printer<'_>) -> Result<(), GenerateError>,
) -> Result<String, GenerateError> {
    options
        .validate()
        .map_err(|reason| GenerateError::InvalidOptions { reason })?;

    let mut printer = Printer::new(options);
    if let Err(error) = emit(&mut printer) {
        trace!(%error, "generation aborted");
        return Err(error);
    }
    let code = printer.finish();
    debug!(bytes = code.len(), "generated");
    Ok(code)
}
