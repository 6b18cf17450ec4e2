use anyhow::Context;
use clap::Parser;
use incident_atlas::config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    incident_atlas::logging::init(&config.log_filter)?;

    incident_atlas::app::run(config)
        .map_err(|e| anyhow::anyhow!(e.to_string()))
        .context("run incident atlas window")
}
