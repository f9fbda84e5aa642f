use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Factor
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Weekday,
    RandomChance,
    MoonPhase,
    CoffeeLevel,
    AssignmentLength,
}

impl Factor {
    pub fn as_str(self) -> &'static str {
        match self {
            Factor::Weekday => "weekday",
            Factor::RandomChance => "random_chance",
            Factor::MoonPhase => "moon_phase",
            Factor::CoffeeLevel => "coffee_level",
            Factor::AssignmentLength => "assignment_length",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FactorReading
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorReading {
    pub factor: Factor,
    pub active: bool,
}

impl FactorReading {
    pub fn new(factor: Factor, active: bool) -> Self {
        Self { factor, active }
    }
}

// ---------------------------------------------------------------------------
// Prediction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub will_delay: bool,
    /// Fraction of factors that read true.
    pub probability: f64,
    pub factors: Vec<FactorReading>,
    /// Only set by the assignment predictor, and only when delaying.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_days: Option<u32>,
}

impl Prediction {
    pub fn active_count(&self) -> usize {
        self.factors.iter().filter(|r| r.active).count()
    }
}

/// Share of readings that are active. Zero readings give 0.0.
pub fn probability_of(factors: &[FactorReading]) -> f64 {
    if factors.is_empty() {
        return 0.0;
    }
    let active = factors.iter().filter(|r| r.active).count();
    active as f64 / factors.len() as f64
}

/// Monday through Friday.
pub fn is_weekday(date: chrono::NaiveDate) -> bool {
    use chrono::Datelike;
    date.weekday().num_days_from_monday() < 5
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
