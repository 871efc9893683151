// IDE: This is a cargo-fuzz target, not a normal module
// Run with: cargo fuzz run fuzz_credentials
// Purpose: End-to-end harness, bytes -> credentials -> authenticate -> access guard
// Any error escaping the pipeline is turned into a panic so libFuzzer records it as a crash
#![no_main]

use authfuzz::{configuration, harness, startup, telemetry};
use libfuzzer_sys::fuzz_target;

fuzz_target!(
    init: {
        if let Ok(config) = configuration::get_config() {
            let subscriber = telemetry::get_subscriber(
                config.telemetry.name.clone(),
                config.telemetry.env_filter.clone(),
                std::io::stderr,
            );
            let _ = telemetry::init_subscriber(subscriber);
            startup::announce(&config.harness.corpus_dir);
        }
    },
    |data: &[u8]| {
        if let Err(finding) = harness::run_test_case(data) {
            panic!("{finding:?}");
        }
    }
);
