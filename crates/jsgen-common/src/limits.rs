//! Centralized limits for the code generator.
//!
//! The emitter is a plain recursive descent over the AST. These limits keep a
//! pathological tree from overflowing the native stack; exceeding one is a
//! generation error, never a panic.

// =============================================================================
// Recursion Depth Limits (Emitter)
// =============================================================================

/// Maximum nesting depth of statements plus expressions during emission.
///
/// Each nested node adds a handful of frames to the call stack. At this depth
/// the emitter bails out with a `NestingTooDeep` error instead of continuing.
///
/// # JavaScript example
///
/// ```javascript
/// // Deeply nested unary / call / member chains:
/// !!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!x;
/// f(f(f(f(f(f(f(f(f(f(f(f(/* ... */))))))))))));
/// ```
pub const MAX_EMIT_DEPTH: u32 = 500;
