//! `caf-standardizer` — map free-text company names to the canonical CAF SoftSol label.
//!
//! # Flow
//! 1. Accept any raw value as a [`models::RawInput`] (text, absent, or some other kind).
//! 2. Collapse whitespace and split into lower-cased tokens ([`name::tokens`]).
//! 3. Run the token tests and decide ([`name::standardizer`]).
//! 4. Return [`CANONICAL_NAME`] for a recognized entry, `""` for anything else.
//!
//! ```
//! use caf_standardizer::{standardize, CANONICAL_NAME};
//!
//! assert_eq!(standardize("caf   softsolution   india"), CANONICAL_NAME);
//! assert_eq!(standardize("Scaffold Solutions"), "");
//! assert_eq!(standardize(None::<&str>), "");
//! ```

pub mod models;
pub mod name;

pub use models::{Outcome, RawInput, Recognition, Rejection};
pub use name::standardizer::{evaluate, recognize, standardize};
pub use name::tokens::{collapse_whitespace, is_caf_token, is_softsol_variant, lowercase_tokens};

/// The single label every recognized variant is rewritten to.
pub const CANONICAL_NAME: &str = "CAF SoftSol India Pvt Ltd.";
