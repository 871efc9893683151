/// Raised when an authenticated user trips the post-authentication check.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Post-authentication invariant violated for user {user:?}.")]
pub struct AccessError {
    pub user: String,
}

/// Guards the protected resource after a successful `authenticate`.
///
/// Fails for names starting with an uppercase `A` and ending in `!`. Matching
/// is case-sensitive, so the lowercase `admin` (the only name that
/// authenticates today) never reaches the failing branch.
#[tracing::instrument(name = "Access protected resource", level = "debug", skip_all)]
pub fn access(user: &str) -> Result<(), AccessError> {
    if user.starts_with('A') && user.ends_with('!') {
        return Err(AccessError {
            user: user.to_string(),
        });
    }
    Ok(())
}
