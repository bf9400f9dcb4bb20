//! Company-name tokenizing and recognition.
//!
//! - [`tokens`] — whitespace collapsing, lower-cased tokens, and the token
//!   vocabulary (`caf`, SoftSol / Solution variants).
//! - [`standardizer`] — entry point that turns a raw value into the canonical
//!   name or the empty-string sentinel.

pub mod standardizer;
pub mod tokens;
