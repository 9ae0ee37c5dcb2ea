// 📅 Generation Context - "today", captured once per run

use chrono::{Datelike, Local, NaiveDate};

/// Immutable clock snapshot handed to the Field Generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationContext {
    pub current_year: i32,
    pub current_month: u32,
}

impl GenerationContext {
    /// Capture the local date right now
    pub fn now() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    /// Fixed date, for tests and reproducible batches
    pub fn from_date(date: NaiveDate) -> Self {
        GenerationContext {
            current_year: date.year(),
            current_month: date.month(),
        }
    }
}
