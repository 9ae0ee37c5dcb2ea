// Card Profile Generator - Core Library
// Synthetic test card records: Luhn-valid numbers, expiry, CVV, ZIP

pub mod config;
pub mod context;
pub mod input;
pub mod luhn;
pub mod profile;
pub mod report;
pub mod rng;
pub mod session;

// Re-export commonly used types
pub use config::GeneratorConfig;
pub use context::GenerationContext;
pub use input::{InputError, Prefix, PrefixError, Prompter};
pub use luhn::{check_digit, complete, is_valid, CARD_LEN};
pub use profile::{CardProfile, Expiry, ProfileGenerator};
pub use report::{export_csv, write_csv};
pub use rng::{RandomSource, RngSource, ScriptedSource};
pub use session::{run, SessionOutcome};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
