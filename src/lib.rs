pub mod authentication;
pub mod configuration;
pub mod domain;
pub mod harness;
pub mod startup;
pub mod telemetry;
pub mod utils;
