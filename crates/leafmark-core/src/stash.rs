//! Placeholder protection for substrings that must survive later passes.
//!
//! Tokens are delimited by a private-use-area character that users cannot
//! type from a chat box and that carries none of the entity-escaped
//! metacharacters, so a token passes every intermediate stage untouched.

pub(crate) const TOKEN_MARK: char = '\u{E000}';

pub(crate) fn br_token() -> String {
    format!("{}br{}", TOKEN_MARK, TOKEN_MARK)
}

/// An ordered token-to-payload store, built and fully consumed within a
/// single render call.
pub(crate) struct Stash {
    tag: &'static str,
    entries: Vec<(String, String)>,
}

impl Stash {
    pub(crate) fn new(tag: &'static str) -> Self {
        Self {
            tag,
            entries: Vec::new(),
        }
    }

    /// Stores `payload` and returns the token that stands in for it.
    pub(crate) fn store(&mut self, payload: String) -> String {
        let token = format!(
            "{}{}{}{}",
            TOKEN_MARK,
            self.tag,
            self.entries.len(),
            TOKEN_MARK
        );
        self.entries.push((token.clone(), payload));
        token
    }

    /// Replaces each stored token, first occurrence only, with
    /// `restore(payload)`. A token absent from `html` (possible only when
    /// user text collided with the private-use delimiter) is skipped; the
    /// output is then imprecise but the call never fails.
    pub(crate) fn restore_into(self, html: &str, restore: impl Fn(&str) -> String) -> String {
        let mut html = html.to_string();
        for (token, payload) in self.entries {
            let replacement = restore(&payload);
            html = html.replacen(&token, &replacement, 1);
        }
        html
    }
}
