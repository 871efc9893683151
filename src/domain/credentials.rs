use secrecy::Secret;

use super::{TestCase, latin1};

pub const USERNAME_MARKER: &str = "username:";
pub const PASSWORD_MARKER: &str = "password:";

const DEFAULT_USERNAME: &str = "user";
const DEFAULT_PASSWORD: &str = "pass";

/// How a test case was turned into credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMode {
    /// `username:` / `password:` lines, last match wins.
    Keyed,
    /// The raw buffer split at its midpoint.
    Positional,
}

impl ExtractionMode {
    /// Keyed only when both markers occur somewhere in the decoded text.
    pub fn select(text: &str) -> Self {
        if text.contains(USERNAME_MARKER) && text.contains(PASSWORD_MARKER) {
            Self::Keyed
        } else {
            Self::Positional
        }
    }
}

#[derive(Debug)]
pub struct Credentials {
    pub username: String,
    pub password: Secret<String>,
    pub mode: ExtractionMode,
}

impl Credentials {
    /// Maps a test case to a credential pair. Total and deterministic: the
    /// same bytes always give the same pair and no input makes this fail.
    pub fn extract(test_case: TestCase<'_>) -> Self {
        let text = latin1::decode(test_case.as_ref());

        match ExtractionMode::select(&text) {
            ExtractionMode::Keyed => Self::keyed(&text),
            ExtractionMode::Positional => Self::positional(test_case),
        }
    }

    fn keyed(text: &str) -> Self {
        let normalized = text.replace('\r', "");

        let mut username = DEFAULT_USERNAME;
        let mut password = DEFAULT_PASSWORD;
        for line in normalized.split('\n') {
            if let Some(rest) = line.strip_prefix(USERNAME_MARKER) {
                username = rest.trim();
            }
            if let Some(rest) = line.strip_prefix(PASSWORD_MARKER) {
                password = rest.trim();
            }
        }

        Self {
            username: username.to_string(),
            password: Secret::new(password.to_string()),
            mode: ExtractionMode::Keyed,
        }
    }

    fn positional(test_case: TestCase<'_>) -> Self {
        let bytes = test_case.as_ref();
        // `TestCase` is never empty, so the split point is always in bounds
        let split = (bytes.len() / 2).max(1);
        let (head, tail) = bytes.split_at(split);

        Self {
            username: latin1::decode(head),
            password: Secret::new(latin1::decode(tail)),
            mode: ExtractionMode::Positional,
        }
    }
}
