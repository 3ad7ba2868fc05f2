//! Pure Markdown text utilities.
//!
//! - [`escape`]: context-aware escaping of literal text
//! - [`calculate_fence_length`] / [`calculate_inline_code_ticks`]: code fences
//!   that never collide with their content
//!
//! ## Design Notes
//!
//! Escaping is applied exactly once, to text nodes, as the converter resolves
//! them. Converters assemble already-escaped fragments and never escape again.

mod escape;

pub use escape::{EscapeContext, calculate_fence_length, calculate_inline_code_ticks, escape};
