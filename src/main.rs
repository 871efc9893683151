use anyhow::Context;
use authfuzz::configuration::get_config;
use authfuzz::startup::{self, CorpusReplay};
use authfuzz::telemetry::{get_subscriber, init_subscriber};

fn main() -> anyhow::Result<()> {
    let config = get_config().context("Failed to read configuration.")?;

    let subscriber = get_subscriber(
        config.telemetry.name.clone(),
        config.telemetry.env_filter.clone(),
        std::io::stderr,
    );
    init_subscriber(subscriber)?;

    startup::announce(&config.harness.corpus_dir);

    let replay = CorpusReplay::build(&config)?;
    let summary = replay.run_until_complete()?;

    tracing::info!(
        executed = summary.executed,
        skipped = summary.skipped,
        granted = summary.granted,
        rejected = summary.rejected,
        "Corpus replay finished without findings"
    );
    Ok(())
}
