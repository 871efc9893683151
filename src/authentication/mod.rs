mod authenticator;
mod guard;

pub use authenticator::{AuthError, MAX_USERNAME_LENGTH, authenticate};
pub use guard::{AccessError, access};
