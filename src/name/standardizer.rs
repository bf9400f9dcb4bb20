use tracing::{debug, trace};

use crate::models::{Outcome, RawInput, Recognition, Rejection};
use crate::name::tokens::{collapse_whitespace, is_caf_token, is_softsol_variant, lowercase_tokens};

/// Standardize a raw company name.
///
/// Returns [`CANONICAL_NAME`](crate::CANONICAL_NAME) when the input contains a
/// `caf` token, otherwise `""`. Never panics, whatever the input.
pub fn standardize(raw: impl Into<RawInput>) -> String {
    evaluate(&raw.into()).label().to_string()
}

/// Run the full decision and keep the reason.
///
/// Handles:
/// - absent and non-text values → rejected up front
/// - blank text (whitespace only) → rejected
/// - text without an exact `caf` token → rejected
/// - anything with a `caf` token → recognized, whether or not a SoftSol
///   variant is present
pub fn evaluate(raw: &RawInput) -> Outcome {
    let text = match raw {
        RawInput::Text(text) => text,
        RawInput::Absent => return reject(Rejection::Absent),
        RawInput::Other(kind) => return reject(Rejection::NotText(*kind)),
    };

    let collapsed = collapse_whitespace(text);
    if collapsed.is_empty() {
        return reject(Rejection::Blank);
    }

    let tokens = lowercase_tokens(&collapsed);
    let recognition = recognize(&tokens);
    trace!(
        tokens = tokens.len(),
        has_caf = recognition.has_caf,
        has_softsol = recognition.has_softsol,
        input = %collapsed,
        "scanned name tokens"
    );

    if !recognition.has_caf {
        return reject(Rejection::MissingCafToken);
    }

    // has_softsol is reported but does not gate: has_caf already holds here.
    if recognition.has_softsol || recognition.has_caf {
        return Outcome::Recognized(recognition);
    }

    reject(Rejection::MissingCafToken)
}

/// Run both token tests over lower-cased tokens.
pub fn recognize(tokens: &[String]) -> Recognition {
    Recognition {
        has_caf: tokens.iter().any(|t| is_caf_token(t)),
        has_softsol: tokens.iter().any(|t| is_softsol_variant(t)),
    }
}

fn reject(reason: Rejection) -> Outcome {
    debug!(%reason, "company name not recognized");
    Outcome::Rejected(reason)
}
