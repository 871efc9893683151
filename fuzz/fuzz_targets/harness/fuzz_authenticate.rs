// IDE: This is a cargo-fuzz target, not a normal module
// Run with: cargo fuzz run fuzz_authenticate
// Purpose: Structured inputs straight into authenticate and access
// Focus: Validation ordering, absent values, only admin/admin authenticates
#![no_main]

use arbitrary::Arbitrary;
use authfuzz::authentication::{AuthError, MAX_USERNAME_LENGTH, access, authenticate};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct AuthInput {
    username: Option<String>,
    password: Option<String>,
}

fuzz_target!(|input: AuthInput| {
    let result = authenticate(input.username.as_deref(), input.password.as_deref());

    match (input.username.as_deref(), input.password.as_deref()) {
        (Some(username), Some(password)) => {
            let length = username.chars().count();
            if length > MAX_USERNAME_LENGTH {
                assert_eq!(result, Err(AuthError::UsernameTooLong { length }));
            } else if password.contains('\0') {
                assert_eq!(result, Err(AuthError::InvalidPasswordCharacter));
            } else {
                assert_eq!(result, Ok(username == "admin" && password == "admin"));
            }
        }
        _ => assert_eq!(result, Err(AuthError::NullCredential)),
    }

    if let Some(user) = input.username.as_deref() {
        let rejected = user.starts_with('A') && user.ends_with('!');
        assert_eq!(access(user).is_err(), rejected);
    }
});
