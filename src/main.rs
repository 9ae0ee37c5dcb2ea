use anyhow::Result;
use std::io;
use tracing_subscriber::EnvFilter;

use cardgen::{GenerationContext, GeneratorConfig, RngSource};

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries the interactive session only
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cardgen=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = GeneratorConfig::default();
    let ctx = GenerationContext::now();
    let mut rng = RngSource::thread();

    let stdin = io::stdin();
    let stdout = io::stdout();

    cardgen::run(&config, stdin.lock(), stdout.lock(), &mut rng, ctx)?;

    Ok(())
}
