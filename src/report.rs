// 🖨️ Reporter / Exporter - console table + CSV file
// Table rows are streamed while the batch is generated, CSV is one shot

use crate::input::Prefix;
use crate::profile::CardProfile;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// CSV header, also the console column titles
pub const HEADER: [&str; 4] = ["Card Number", "Expiry", "CVV", "ZIP"];

/// Column widths for the console table
const WIDTHS: [usize; 4] = [16, 7, 3, 5];

// ============================================================================
// CONSOLE
// ============================================================================

pub fn print_banner<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "This tool generates realistic-looking credit card data for testing purposes.")?;
    writeln!(out, "** All generated data is fictional and NOT linked to real accounts. **\n")?;
    Ok(())
}

fn format_row(cells: [&str; 4]) -> String {
    format!(
        "{:<w0$}  {:<w1$}  {:<w2$}  {:<w3$}",
        cells[0],
        cells[1],
        cells[2],
        cells[3],
        w0 = WIDTHS[0],
        w1 = WIDTHS[1],
        w2 = WIDTHS[2],
        w3 = WIDTHS[3],
    )
}

/// Announcement, column titles and separator
pub fn print_header<W: Write>(out: &mut W, count: usize, prefix: &Prefix) -> Result<()> {
    writeln!(
        out,
        "\nGenerating {} fake card profile(s) using BIN prefix {}...",
        count, prefix
    )?;
    writeln!(out, "{}", format_row(HEADER))?;

    let separator = WIDTHS.iter().sum::<usize>() + 2 * (WIDTHS.len() - 1);
    writeln!(out, "{}", "-".repeat(separator))?;
    Ok(())
}

pub fn print_row<W: Write>(out: &mut W, profile: &CardProfile) -> Result<()> {
    let expiry = profile.expiry.to_string();
    writeln!(
        out,
        "{}",
        format_row([
            profile.number.as_str(),
            expiry.as_str(),
            profile.code3.as_str(),
            profile.code5.as_str(),
        ])
    )?;
    Ok(())
}

// ============================================================================
// CSV EXPORT
// ============================================================================

/// Header row plus one row per profile
pub fn write_csv<W: Write>(writer: W, profiles: &[CardProfile]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(HEADER).context("Failed to write CSV header")?;
    for profile in profiles {
        wtr.serialize(profile).context("Failed to write CSV row")?;
    }
    wtr.flush().context("Failed to flush CSV output")?;

    Ok(())
}

/// Write `<prefix>_cards.csv` into `dir`, returning the path written
///
/// Errors propagate; a partially written file is left in place.
pub fn export_csv(dir: &Path, prefix: &Prefix, profiles: &[CardProfile]) -> Result<PathBuf> {
    let path = dir.join(prefix.export_file_name());
    let file = std::fs::File::create(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    write_csv(file, profiles).with_context(|| format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), rows = profiles.len(), "profiles exported");
    Ok(path)
}
