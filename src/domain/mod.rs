mod credentials;
pub mod latin1;
mod test_case;

pub use credentials::{Credentials, ExtractionMode, PASSWORD_MARKER, USERNAME_MARKER};
pub use test_case::TestCase;
