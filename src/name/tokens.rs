/// Whether `c` separates tokens.
///
/// Unicode whitespace plus the ASCII information separators (U+001C..U+001F),
/// which spreadsheet exports sometimes leave between words.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Collapse every run of whitespace into one space and trim both ends.
///
/// Returns an empty string for blank input.
pub fn collapse_whitespace(raw: &str) -> String {
    let mut collapsed = String::with_capacity(raw.len());
    for segment in raw.split(is_separator).filter(|s| !s.is_empty()) {
        if !collapsed.is_empty() {
            collapsed.push(' ');
        }
        collapsed.push_str(segment);
    }
    collapsed
}

/// Split an already-collapsed string on single spaces and lower-case each token.
///
/// Punctuation stays attached: `"CAF,"` yields `"caf,"`.
pub fn lowercase_tokens(collapsed: &str) -> Vec<String> {
    if collapsed.is_empty() {
        return Vec::new();
    }
    collapsed.split(' ').map(str::to_lowercase).collect()
}

/// Exact match on the lower-cased `caf` token. Substrings do not count.
pub fn is_caf_token(token: &str) -> bool {
    token == "caf"
}

/// Whether a lower-cased token names the SoftSol product part of the company.
pub fn is_softsol_variant(token: &str) -> bool {
    let listed = matches!(
        token,
        "softsol" | "softsolution" | "solution" | "softsolutionindia" | "softsolindia"
    );

    listed || token.contains("softsol") || token.contains("softsolution") || token == "solution"
}
