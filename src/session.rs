// 🔁 Session - one straight-through run of the tool
// Collect input → generate + print each row → optional CSV export

use crate::config::GeneratorConfig;
use crate::context::GenerationContext;
use crate::input::{Prefix, Prompter};
use crate::profile::{CardProfile, ProfileGenerator};
use crate::report;
use crate::rng::RandomSource;
use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug)]
pub struct SessionOutcome {
    pub prefix: Prefix,
    pub profiles: Vec<CardProfile>,
    /// Set only when the user confirmed the save
    pub saved_to: Option<PathBuf>,
}

pub fn run<R: BufRead, W: Write>(
    config: &GeneratorConfig,
    input: R,
    output: W,
    rng: &mut dyn RandomSource,
    ctx: GenerationContext,
) -> Result<SessionOutcome> {
    let mut prompter = Prompter::new(input, output, config);

    report::print_banner(prompter.output())?;
    let prefix = prompter.read_prefix()?;
    let count = prompter.read_count()?;

    report::print_header(prompter.output(), count, &prefix)?;

    let mut profiles = Vec::with_capacity(count.min(config.default_count));
    for profile in ProfileGenerator::new(&prefix, ctx, rng).take(count) {
        report::print_row(prompter.output(), &profile)?;
        profiles.push(profile);
    }
    debug!(count = profiles.len(), prefix = %prefix, "batch generated");

    let saved_to = if prompter.confirm_save()? {
        let path = report::export_csv(&config.output_dir, &prefix, &profiles)?;
        writeln!(prompter.output(), "Results saved to {}", prefix.export_file_name())?;
        Some(path)
    } else {
        writeln!(prompter.output(), "Results were not saved to a file.")?;
        None
    };

    Ok(SessionOutcome {
        prefix,
        profiles,
        saved_to,
    })
}
