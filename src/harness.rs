use std::fmt::{self, Debug, Formatter};

use secrecy::ExposeSecret;

use crate::authentication::{self, AccessError, AuthError};
use crate::domain::{Credentials, TestCase};
use crate::utils;

pub const USERNAME_PREVIEW_CHARS: usize = 40;

/// An error that escaped the pipeline. For a fuzzing engine this is a crash.
#[derive(thiserror::Error)]
pub enum Finding {
    #[error("Authentication failed with an error.")]
    Authentication(#[from] AuthError),
    #[error("Access guard failed after a successful authentication.")]
    Access(#[from] AccessError),
}

impl Debug for Finding {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        utils::error_chain_fmt(self, f)
    }
}

/// What happened to a test case that produced no finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Zero-length input, nothing ran.
    Skipped,
    /// `authenticate` returned `false`.
    Rejected,
    /// `authenticate` returned `true` and the access guard passed.
    Granted,
}

/// `[FUZZ] username='<U>' password_len=<N>`, with the username cut to 40
/// characters (plus `…`) or `(null)` when absent.
pub fn diagnostic_line(username: Option<&str>, password_len: usize) -> String {
    let preview = match username {
        Some(username) => utils::truncate_for_log(username, USERNAME_PREVIEW_CHARS),
        None => "(null)".to_string(),
    };
    format!("[FUZZ] username='{preview}' password_len={password_len}")
}

/// Runs one test case through extraction, authentication and, on success,
/// the access guard. Errors are handed back untouched; callers driving a
/// fuzzer must treat any `Err` as fatal for the input.
pub fn run_test_case(data: &[u8]) -> Result<Verdict, Finding> {
    let Some(test_case) = TestCase::parse(data) else {
        return Ok(Verdict::Skipped);
    };

    let credentials = Credentials::extract(test_case);
    let username = credentials.username.as_str();
    let password = credentials.password.expose_secret().as_str();
    let password_len = password.chars().count();

    tracing::info!(
        password_len,
        mode = ?credentials.mode,
        "{}",
        diagnostic_line(Some(username), password_len)
    );

    if !authentication::authenticate(Some(username), Some(password))? {
        return Ok(Verdict::Rejected);
    }

    authentication::access(username)?;
    Ok(Verdict::Granted)
}
