use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct Configuration {
    pub harness: HarnessSettings,
    pub telemetry: TelemetrySettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct HarnessSettings {
    pub corpus_dir: PathBuf,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TelemetrySettings {
    pub name: String,
    pub env_filter: String,
}

pub fn get_config() -> Result<Configuration, config::ConfigError> {
    get_config_from(Path::new("config.yaml"))
}

/// Defaults, then `path` if it exists, then `AUTHFUZZ_*` environment
/// variables (`AUTHFUZZ_HARNESS__CORPUS_DIR=...`).
pub fn get_config_from(path: &Path) -> Result<Configuration, config::ConfigError> {
    let configs = config::Config::builder()
        .set_default("harness.corpus_dir", "corpus")?
        .set_default("telemetry.name", "authfuzz")?
        .set_default("telemetry.env_filter", "info")?
        .add_source(config::File::from(path).format(config::FileFormat::Yaml).required(false))
        .add_source(
            config::Environment::with_prefix("AUTHFUZZ")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    configs.try_deserialize::<Configuration>()
}
