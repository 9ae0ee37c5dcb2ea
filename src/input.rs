// ⌨️ Input Collector - prefix, count and save confirmation prompts
//
// Prefix input loops until valid. Count input never loops: anything
// unusable falls back to the default with a warning.

use crate::config::GeneratorConfig;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use std::ops::RangeInclusive;
use thiserror::Error;
use tracing::{debug, warn};

// ============================================================================
// PREFIX
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrefixError {
    #[error("Invalid input. Please enter only digits for the BIN.")]
    NotDigits,

    #[error("BIN length must be between {min} and {max} digits. Please try again.")]
    BadLength { min: usize, max: usize },
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input closed before a valid BIN was entered")]
    Closed,
}

/// Prefix - validated BIN, all digits, bounded length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix(String);

impl Prefix {
    /// Validate with the default 6..=12 bounds
    pub fn parse(raw: &str) -> Result<Self, PrefixError> {
        Self::parse_within(raw, &GeneratorConfig::default().prefix_len)
    }

    pub fn parse_within(raw: &str, len: &RangeInclusive<usize>) -> Result<Self, PrefixError> {
        let raw = raw.trim();

        if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(PrefixError::NotDigits);
        }
        if !len.contains(&raw.len()) {
            return Err(PrefixError::BadLength {
                min: *len.start(),
                max: *len.end(),
            });
        }

        Ok(Prefix(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `<prefix>_cards.csv`
    pub fn export_file_name(&self) -> String {
        format!("{}_cards.csv", self.0)
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// PROMPTER
// ============================================================================

pub struct Prompter<'c, R, W> {
    input: R,
    output: W,
    config: &'c GeneratorConfig,
}

impl<'c, R: BufRead, W: Write> Prompter<'c, R, W> {
    pub fn new(input: R, output: W, config: &'c GeneratorConfig) -> Self {
        Prompter {
            input,
            output,
            config,
        }
    }

    /// Writer the prompts go to, shared with the report
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print `prompt`, read one trimmed line. `None` on end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    /// Re-prompts until a valid prefix is entered
    pub fn read_prefix(&mut self) -> Result<Prefix> {
        let prompt = format!(
            "Enter BIN ({}–{} digits): ",
            self.config.min_prefix_len(),
            self.config.max_prefix_len()
        );

        loop {
            let Some(raw) = self.ask(&prompt)? else {
                return Err(InputError::Closed.into());
            };

            match Prefix::parse_within(&raw, &self.config.prefix_len) {
                Ok(prefix) => {
                    debug!(prefix = %prefix, "prefix accepted");
                    return Ok(prefix);
                }
                Err(e) => {
                    debug!(input = %raw, error = %e, "prefix rejected");
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }

    /// Empty, unparsable or < 1 all yield the default
    pub fn read_count(&mut self) -> Result<usize> {
        let default = self.config.default_count;
        let prompt = format!(
            "How many card profiles to generate? (Press Enter for default {}): ",
            default
        );

        let raw = self.ask(&prompt)?.unwrap_or_default();
        if raw.is_empty() {
            return Ok(default);
        }

        // Out-of-range integers are still integers: saturate high, reject low
        let parsed = match raw.parse::<i64>() {
            Ok(n) => Some(n),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Some(i64::MAX),
                IntErrorKind::NegOverflow => Some(i64::MIN),
                _ => None,
            },
        };

        match parsed {
            Some(n) if n >= 1 => Ok(usize::try_from(n).unwrap_or(usize::MAX)),
            Some(n) => {
                warn!(count = n, default, "count below 1, using default");
                writeln!(
                    self.output,
                    "Number of profiles must be at least 1. Defaulting to {}.",
                    default
                )?;
                Ok(default)
            }
            None => {
                warn!(input = %raw, default, "count not a number, using default");
                writeln!(
                    self.output,
                    "Invalid number. Defaulting to {} profiles.",
                    default
                )?;
                Ok(default)
            }
        }
    }

    /// Affirmative iff the answer starts with "y" (any case)
    pub fn confirm_save(&mut self) -> Result<bool> {
        let answer = self
            .ask("\nSave results to CSV file? (y/n): ")?
            .unwrap_or_default();

        Ok(answer.to_lowercase().starts_with('y'))
    }
}
