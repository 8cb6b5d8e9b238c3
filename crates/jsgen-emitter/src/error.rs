//! Generation errors.

use jsgen_ast::NodeKind;
use thiserror::Error;

/// Why a generation call produced no text.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The tree contains a node no emission rule covers, e.g. JSX.
    #[error("unsupported node kind `{kind}`")]
    UnsupportedNode { kind: String },

    /// The tree breaks a grammar rule the emitter cannot paper over.
    #[error("malformed {kind}: {reason}")]
    MalformedAst {
        kind: NodeKind,
        reason: &'static str,
    },

    #[error("nesting exceeds the maximum emit depth of {limit}")]
    NestingTooDeep { limit: u32 },

    #[error("invalid writer options: {reason}")]
    InvalidOptions { reason: &'static str },

    #[error("failed to write generated code")]
    Io(#[from] std::io::Error),
}

impl GenerateError {
    pub(crate) const fn malformed(kind: NodeKind, reason: &'static str) -> Self {
        Self::MalformedAst { kind, reason }
    }
}
