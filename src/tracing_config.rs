//! Tracing configuration for inspecting generation passes.
//!
//! Supports three output formats controlled by `JSGEN_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `tree`: Hierarchical indented output via `tracing-tree`, one nested
//!   span per statement list and class body
//! - `json`: One JSON object per span/event
//!
//! ## Quick start
//!
//! ```bash
//! # Span tree of a generation pass
//! JSGEN_LOG=trace JSGEN_LOG_FORMAT=tree cargo bench --bench emitter_bench
//!
//! # Only the driver summaries
//! JSGEN_LOG="jsgen_emitter=debug" my-host
//! ```
//!
//! The subscriber is only initialised when `JSGEN_LOG` (or `RUST_LOG`) is set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a `JSGEN_LOG_FORMAT` value; unknown values mean [`LogFormat::Text`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("JSGEN_LOG_FORMAT").unwrap_or_default())
    }
}

/// Build an `EnvFilter` from `JSGEN_LOG`, falling back to `RUST_LOG`.
///
/// `JSGEN_LOG` takes precedence when both are set.
fn build_filter() -> EnvFilter {
    match std::env::var("JSGEN_LOG") {
        Ok(directives) => EnvFilter::builder().parse_lossy(directives),
        Err(_) => EnvFilter::from_default_env(),
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `JSGEN_LOG` nor `RUST_LOG` is set. Calling it
/// again, or after the host installed its own subscriber, is a no-op.
///
/// All output goes to stderr so it never mixes with generated code written
/// to stdout.
pub fn init_tracing() {
    if std::env::var_os("JSGEN_LOG").is_none() && std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    let filter = build_filter();
    let format = LogFormat::from_env();

    let installed = match format {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_span_retrace(true)
                .with_targets(true)
                .with_writer(std::io::stderr);

            Registry::default().with(filter).with(tree_layer).try_init()
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).try_init()
        }
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish()
            .try_init(),
    };

    if installed.is_ok() {
        tracing::debug!(?format, "tracing initialised");
    }
}
