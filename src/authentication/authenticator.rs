pub const MAX_USERNAME_LENGTH: usize = 256;

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "admin";

/// Why `authenticate` refused to reach a verdict. A `false` verdict is not
/// an error.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Username and password must both be present.")]
    NullCredential,
    #[error("Username too long: {length} characters, at most 256 allowed.")]
    UsernameTooLong { length: usize },
    #[error("NUL in password.")]
    InvalidPasswordCharacter,
}

/// Checks run in order and the first failure is returned: absence, then
/// username length, then NUL in the password. Only `admin`/`admin` is
/// accepted, compared exactly.
#[tracing::instrument(name = "Authenticate", level = "debug", skip_all)]
pub fn authenticate(username: Option<&str>, password: Option<&str>) -> Result<bool, AuthError> {
    let (Some(username), Some(password)) = (username, password) else {
        return Err(AuthError::NullCredential);
    };

    let length = username.chars().count();
    if length > MAX_USERNAME_LENGTH {
        return Err(AuthError::UsernameTooLong { length });
    }

    if password.contains('\0') {
        return Err(AuthError::InvalidPasswordCharacter);
    }

    Ok(username == ADMIN_USERNAME && password == ADMIN_PASSWORD)
}
