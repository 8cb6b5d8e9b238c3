//! Enums shared between the AST, the emitter and host configuration.

use serde::{Deserialize, Serialize};

/// Newline sequence written between output lines.
///
/// Only layout line breaks use this. Line terminators that live inside raw
/// string or template text are copied byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewLineKind {
    /// `\n`
    #[default]
    #[serde(alias = "lf")]
    LineFeed,
    /// `\r\n`
    #[serde(alias = "crlf")]
    CarriageReturnLineFeed,
}

impl NewLineKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LineFeed => "\n",
            Self::CarriageReturnLineFeed => "\r\n",
        }
    }
}

#[cfg(test)]
#[path = "../tests/common.rs"]
mod tests;
