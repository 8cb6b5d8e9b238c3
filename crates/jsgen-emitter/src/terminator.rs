//! Statement termination strategies.
//!
//! The visitor computes default [`StatementFlags`] for each statement; the
//! strategy held by the writer options turns them into the final "write a
//! `;`" decision. Strategies are shared across threads and must not keep
//! per-call state.

use std::fmt;

use jsgen_ast::NodeKind;
use rustc_hash::FxHashSet;

use crate::context::{StatementFlags, WriteContext};

pub trait StatementTerminator: Send + Sync + fmt::Debug {
    /// Decision for a statement that sits in a single-statement slot.
    fn terminate_statement(&self, flags: StatementFlags, context: &WriteContext<'_>) -> bool {
        let _ = context;
        flags.needs_semicolon()
    }

    /// Decision for the `index`-th of `count` items in a statement list.
    fn terminate_list_item(
        &self,
        index: usize,
        count: usize,
        flags: StatementFlags,
        context: &WriteContext<'_>,
    ) -> bool {
        let _ = (index, count, context);
        flags.needs_semicolon()
    }
}

/// Writes a terminator exactly where the grammar form needs one.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTerminator;

impl StatementTerminator for DefaultTerminator {}

/// Terminator decided by a pure function of statement kind and default flags.
pub struct FnTerminator<F> {
    decide: F,
}

impl<F> FnTerminator<F>
where
    F: Fn(NodeKind, StatementFlags) -> bool + Send + Sync,
{
    pub const fn new(decide: F) -> Self {
        Self { decide }
    }
}

impl<F> fmt::Debug for FnTerminator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTerminator").finish_non_exhaustive()
    }
}

impl<F> StatementTerminator for FnTerminator<F>
where
    F: Fn(NodeKind, StatementFlags) -> bool + Send + Sync,
{
    fn terminate_statement(&self, flags: StatementFlags, context: &WriteContext<'_>) -> bool {
        (self.decide)(context.current().kind(), flags)
    }

    fn terminate_list_item(
        &self,
        _index: usize,
        _count: usize,
        flags: StatementFlags,
        context: &WriteContext<'_>,
    ) -> bool {
        (self.decide)(context.current().kind(), flags)
    }
}

/// Always terminates the listed statement kinds, defaults otherwise.
///
/// `ForceTerminator::new([NodeKind::DoWhileStatement])` closes every
/// `do…while` with `;` even though the grammar lets it stand alone.
#[derive(Debug, Clone, Default)]
pub struct ForceTerminator {
    kinds: FxHashSet<NodeKind>,
}

impl ForceTerminator {
    pub fn new(kinds: impl IntoIterator<Item = NodeKind>) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
        }
    }

    fn forces(&self, context: &WriteContext<'_>) -> bool {
        self.kinds.contains(&context.current().kind())
    }
}

impl StatementTerminator for ForceTerminator {
    fn terminate_statement(&self, flags: StatementFlags, context: &WriteContext<'_>) -> bool {
        flags.needs_semicolon() || self.forces(context)
    }

    fn terminate_list_item(
        &self,
        _index: usize,
        _count: usize,
        flags: StatementFlags,
        context: &WriteContext<'_>,
    ) -> bool {
        flags.needs_semicolon() || self.forces(context)
    }
}

#[cfg(test)]
#[path = "../tests/terminator.rs"]
mod tests;
