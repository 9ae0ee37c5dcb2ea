// 💳 Field Generator - one synthetic card profile per draw
// Number via the Sequence Completer, expiry/CVV/ZIP drawn independently

use crate::context::GenerationContext;
use crate::input::Prefix;
use crate::luhn;
use crate::rng::RandomSource;
use serde::{Serialize, Serializer};
use std::fmt;

// ============================================================================
// CORE TYPES
// ============================================================================

/// Expiry - month/year pair, rendered MM/YY
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Expiry {
    // Field order matters for Ord: year first
    pub year: i32,
    pub month: u32,
}

impl fmt::Display for Expiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.year.rem_euclid(100))
    }
}

impl Serialize for Expiry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// CardProfile - one generated record
///
/// Field renames are the CSV header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardProfile {
    #[serde(rename = "Card Number")]
    pub number: String,

    #[serde(rename = "Expiry")]
    pub expiry: Expiry,

    #[serde(rename = "CVV")]
    pub code3: String,

    #[serde(rename = "ZIP")]
    pub code5: String,
}

// ============================================================================
// FIELD DRAWS
// ============================================================================

/// Expiry 1-5 years ahead
///
/// One year ahead only allows the current month or later.
pub fn generate_expiry(ctx: &GenerationContext, rng: &mut dyn RandomSource) -> Expiry {
    let years_ahead = rng.range_inclusive(1, 5);
    let month = if years_ahead == 1 {
        rng.range_inclusive(ctx.current_month, 12)
    } else {
        rng.range_inclusive(1, 12)
    };

    Expiry {
        year: ctx.current_year + years_ahead as i32,
        month,
    }
}

/// 3-digit security code, 000-999
pub fn generate_code3(rng: &mut dyn RandomSource) -> String {
    format!("{:03}", rng.range_inclusive(0, 999))
}

/// 5-digit postal code, 00000-99999
pub fn generate_code5(rng: &mut dyn RandomSource) -> String {
    format!("{:05}", rng.range_inclusive(0, 99_999))
}

// ============================================================================
// PROFILE GENERATOR
// ============================================================================

pub struct ProfileGenerator<'p, 'r> {
    prefix: &'p Prefix,
    ctx: GenerationContext,
    rng: &'r mut dyn RandomSource,
}

impl<'p, 'r> ProfileGenerator<'p, 'r> {
    pub fn new(prefix: &'p Prefix, ctx: GenerationContext, rng: &'r mut dyn RandomSource) -> Self {
        ProfileGenerator { prefix, ctx, rng }
    }

    /// Draw order: number, expiry, CVV, ZIP
    pub fn generate(&mut self) -> CardProfile {
        let number = luhn::complete(self.prefix.as_str(), &mut *self.rng);
        let expiry = generate_expiry(&self.ctx, &mut *self.rng);
        let code3 = generate_code3(&mut *self.rng);
        let code5 = generate_code5(&mut *self.rng);

        CardProfile {
            number,
            expiry,
            code3,
            code5,
        }
    }
}

impl Iterator for ProfileGenerator<'_, '_> {
    type Item = CardProfile;

    fn next(&mut self) -> Option<CardProfile> {
        Some(self.generate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{RngSource, ScriptedSource};
    use chrono::NaiveDate;

    fn context_in(month: u32) -> GenerationContext {
        GenerationContext::from_date(NaiveDate::from_ymd_opt(2026, month, 14).unwrap())
    }

    fn fixed_context() -> GenerationContext {
        context_in(10)
    }

    #[test]
    fn test_expiry_format() {
        assert_eq!(Expiry { year: 2027, month: 3 }.to_string(), "03/27");
        assert_eq!(Expiry { year: 2100, month: 12 }.to_string(), "12/00");
    }

    #[test]
    fn test_expiry_one_year_ahead_respects_current_month() {
        let ctx = fixed_context();
        // years_ahead = 1, month draw below current month gets clamped up
        let mut rng = ScriptedSource::new([1, 2]);

        let expiry = generate_expiry(&ctx, &mut rng);
        assert_eq!(expiry, Expiry { year: 2027, month: 10 });
    }

    #[test]
    fn test_expiry_one_year_ahead_in_december() {
        let ctx = context_in(12);

        // Only December is left in range, whatever the month draw
        for month_draw in [1, 6, 12] {
            let mut rng = ScriptedSource::new([1, month_draw]);
            let expiry = generate_expiry(&ctx, &mut rng);
            assert_eq!(expiry, Expiry { year: 2027, month: 12 });
        }

        let mut rng = RngSource::seeded(12);
        for _ in 0..500 {
            let expiry = generate_expiry(&ctx, &mut rng);
            if expiry.year == 2027 {
                assert_eq!(expiry.month, 12);
            }
        }
    }

    #[test]
    fn test_expiry_one_year_ahead_in_january() {
        let ctx = context_in(1);

        let mut rng = ScriptedSource::new([1, 1]);
        assert_eq!(generate_expiry(&ctx, &mut rng), Expiry { year: 2027, month: 1 });

        let mut rng = ScriptedSource::new([1, 12]);
        assert_eq!(generate_expiry(&ctx, &mut rng), Expiry { year: 2027, month: 12 });

        let now = Expiry { year: 2026, month: 1 };
        let mut rng = RngSource::seeded(1);
        for _ in 0..500 {
            assert!(generate_expiry(&ctx, &mut rng) > now);
        }
    }

    #[test]
    fn test_expiry_later_years_allow_any_month() {
        let ctx = fixed_context();
        let mut rng = ScriptedSource::new([3, 1]);

        let expiry = generate_expiry(&ctx, &mut rng);
        assert_eq!(expiry, Expiry { year: 2029, month: 1 });
    }

    #[test]
    fn test_expiry_always_strictly_in_future() {
        let ctx = fixed_context();
        let now = Expiry { year: ctx.current_year, month: ctx.current_month };
        let horizon = Expiry { year: ctx.current_year + 5, month: 12 };
        let mut rng = RngSource::seeded(99);

        for _ in 0..2_000 {
            let expiry = generate_expiry(&ctx, &mut rng);
            assert!(expiry > now, "{:?} not after {:?}", expiry, now);
            assert!(expiry <= horizon);
            assert!((1..=12).contains(&expiry.month));
        }
    }

    #[test]
    fn test_codes_are_fixed_width_digits() {
        let mut rng = RngSource::seeded(5);
        for _ in 0..1_000 {
            let cvv = generate_code3(&mut rng);
            let zip = generate_code5(&mut rng);
            assert_eq!(cvv.len(), 3);
            assert_eq!(zip.len(), 5);
            assert!(cvv.chars().all(|c| c.is_ascii_digit()));
            assert!(zip.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_codes_zero_padded() {
        let mut rng = ScriptedSource::new([7, 42]);
        assert_eq!(generate_code3(&mut rng), "007");
        assert_eq!(generate_code5(&mut rng), "00042");
    }

    #[test]
    fn test_generator_produces_valid_profiles() {
        let prefix = Prefix::parse("400000").unwrap();
        let mut rng = RngSource::seeded(1);
        let profiles: Vec<CardProfile> =
            ProfileGenerator::new(&prefix, fixed_context(), &mut rng).take(50).collect();

        assert_eq!(profiles.len(), 50);
        for p in &profiles {
            assert_eq!(p.number.len(), 16);
            assert!(p.number.starts_with("400000"));
            assert!(luhn::is_valid(&p.number));
        }
    }
}
