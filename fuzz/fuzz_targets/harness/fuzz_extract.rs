// IDE: This is a cargo-fuzz target, not a normal module
// Run with: cargo fuzz run fuzz_extract
// Purpose: Credential extraction must be total and deterministic
// Focus: Invalid UTF-8, NUL bytes, stray carriage returns, markers mid-line
#![no_main]

use authfuzz::domain::{Credentials, ExtractionMode, TestCase, latin1};
use libfuzzer_sys::fuzz_target;
use secrecy::ExposeSecret;

fuzz_target!(|data: &[u8]| {
    let Some(test_case) = TestCase::parse(data) else {
        return;
    };

    let first = Credentials::extract(test_case);
    let second = Credentials::extract(test_case);

    assert_eq!(first.username, second.username);
    assert_eq!(first.password.expose_secret(), second.password.expose_secret());
    assert_eq!(first.mode, second.mode);

    let text = latin1::decode(data);
    assert_eq!(first.mode, ExtractionMode::select(&text));

    if first.mode == ExtractionMode::Positional {
        let split = (data.len() / 2).max(1);
        assert_eq!(first.username.chars().count(), split);
        assert_eq!(
            first.password.expose_secret().chars().count(),
            data.len() - split
        );
    }
});
