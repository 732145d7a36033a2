//! Entry name matching.
//!
//! A pattern is either matched literally (case-insensitive equality) or, when
//! it contains `+`, split into tokens that must appear one after another in the
//! name. Between two tokens the only thing allowed is a run of repetitions of
//! the previous token's last character, so `lost+file` accepts `lostfile` and
//! `lostttfile` but rejects `lost_file`.

/// Separator that switches a pattern into token mode.
pub const TOKEN_SEPARATOR: char = '+';

/// A lowercased name pattern, ready to be matched against entry names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamePattern {
    pattern: String,
    token_mode: bool,
}

impl NamePattern {
    /// Lowercase `raw` once and detect token mode.
    pub fn new(raw: &str) -> Self {
        let pattern = raw.to_lowercase();
        let token_mode = pattern.contains(TOKEN_SEPARATOR);
        Self {
            pattern,
            token_mode,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn is_token_mode(&self) -> bool {
        self.token_mode
    }

    pub fn matches(&self, entry_name: &str) -> bool {
        matches(&self.pattern, self.token_mode, entry_name)
    }
}

/// Decide whether `entry_name` satisfies `pattern`.
///
/// `pattern` must already be lowercase; `entry_name` is lowercased here.
pub fn matches(pattern: &str, token_mode: bool, entry_name: &str) -> bool {
    if pattern.is_empty() {
        return true;
    }

    let name = entry_name.to_lowercase();
    if !token_mode {
        return name == pattern;
    }

    let tokens: Vec<&str> = pattern.split(TOKEN_SEPARATOR).collect();
    if tokens.iter().any(|t| t.is_empty()) {
        return false;
    }

    let Some(mut offset) = name.find(tokens[0]) else {
        return false;
    };

    for token in tokens {
        if !name[offset..].starts_with(token) {
            return false;
        }

        // Land on the token's last character, then swallow its whole run.
        let Some(boundary) = token.chars().next_back() else {
            return false;
        };
        offset += token.len() - boundary.len_utf8();
        while name[offset..].starts_with(boundary) {
            offset += boundary.len_utf8();
        }
    }

    true
}
