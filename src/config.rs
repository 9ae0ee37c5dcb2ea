// ⚙️ Generator configuration
// Central home for the tool's constants; not exposed to the user

use std::ops::RangeInclusive;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Profiles generated when the count prompt is empty or invalid
    pub default_count: usize,

    /// Accepted prefix (BIN) lengths
    pub prefix_len: RangeInclusive<usize>,

    /// Directory `<prefix>_cards.csv` is written into
    pub output_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            default_count: 100,
            prefix_len: 6..=12,
            output_dir: PathBuf::from("."),
        }
    }
}

impl GeneratorConfig {
    /// Same defaults, exporting somewhere else
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn min_prefix_len(&self) -> usize {
        *self.prefix_len.start()
    }

    pub fn max_prefix_len(&self) -> usize {
        *self.prefix_len.end()
    }
}
