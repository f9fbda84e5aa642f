//! The daily predictor: four factors, one average, one decision.
//!
//! Decision rule: delay when more than half the factors read true, or when
//! a secondary draw lands below [`OVERRIDE_CHANCE`]. The override can only
//! turn "no delay" into "delay", never the reverse.

use crate::draw::Draws;
use crate::types::{is_weekday, probability_of, Factor, FactorReading, Prediction};
use chrono::NaiveDate;

/// `random_chance` reads true when a unit draw exceeds this.
pub const RANDOM_CHANCE_CUTOFF: f64 = 0.7;
/// `coffee_level` reads true when a 1..=10 roll exceeds this.
pub const COFFEE_CUTOFF: u32 = 5;
pub const COFFEE_MIN: u32 = 1;
pub const COFFEE_MAX: u32 = 10;
/// Probabilities strictly above this always delay.
pub const DELAY_THRESHOLD: f64 = 0.5;
/// Secondary draws below this delay regardless of probability.
pub const OVERRIDE_CHANCE: f64 = 0.3;

/// Read the four factors for `today`, in draw order.
pub fn read_factors<D: Draws + ?Sized>(today: NaiveDate, draws: &mut D) -> Vec<FactorReading> {
    let weekday = is_weekday(today);
    let random_chance = draws.unit() > RANDOM_CHANCE_CUTOFF;
    let moon_phase = draws.coin();
    let coffee_level = draws.roll(COFFEE_MIN, COFFEE_MAX) > COFFEE_CUTOFF;

    vec![
        FactorReading::new(Factor::Weekday, weekday),
        FactorReading::new(Factor::RandomChance, random_chance),
        FactorReading::new(Factor::MoonPhase, moon_phase),
        FactorReading::new(Factor::CoffeeLevel, coffee_level),
    ]
}

/// Apply the decision rule. The secondary draw is only taken when the
/// probability alone does not decide.
pub fn decide<D: Draws + ?Sized>(probability: f64, draws: &mut D) -> bool {
    probability > DELAY_THRESHOLD || draws.unit() < OVERRIDE_CHANCE
}

/// Predict whether the test will be delayed on `today`.
pub fn predict<D: Draws + ?Sized>(today: NaiveDate, draws: &mut D) -> Prediction {
    let factors = read_factors(today, draws);
    let probability = probability_of(&factors);
    let will_delay = decide(probability, draws);
    Prediction {
        will_delay,
        probability,
        factors,
        delay_days: None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
