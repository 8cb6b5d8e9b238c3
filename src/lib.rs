//! jsgen: JavaScript source generation from syntax trees.
//!
//! This crate re-exports the workspace members under one name:
//!
//! - [`ast`]: the tree the generator consumes
//! - [`emitter`]: the generator itself, with its options and terminators
//! - [`common`]: newline kinds and recursion limits
//!
//! ```
//! use jsgen::ast::{Expression, Program, Statement};
//!
//! let program = Program::script(vec![Statement::expr_stmt(Expression::call(
//!     Expression::id("main"),
//!     vec![],
//! ))]);
//! assert_eq!(jsgen::generate(&program).unwrap(), "main();");
//! ```

// Common types - newline convention and emitter limits
pub use jsgen_common as common;
pub use jsgen_common::NewLineKind;

// Syntax tree consumed by the generator
pub use jsgen_ast as ast;

// Generator - visitor, writer, options and termination strategies
pub use jsgen_emitter as emitter;
pub use jsgen_emitter::{
    ArrowParens, DefaultTerminator, FnTerminator, ForceTerminator, FormatStyle, GenerateError,
    QuoteStyle, StatementFlags, StatementTerminator, WriteContext, WriterOptions, generate,
    generate_expression, generate_statement, generate_to, generate_with, to_javascript_string,
};

// Tracing subscriber setup for hosts and benches
pub mod tracing_config;
#[cfg(test)]
#[path = "tests/tracing_config_tests.rs"]
mod tracing_config_tests;
