//! Deterministic predictor keyed on an assignment name.
//!
//! The name is hashed into a 32-bit seed that drives three of the five
//! factors, so the same name on the same weekday always gets the same
//! answer. There is no random override here.

use crate::error::{PredictError, Result};
use crate::types::{is_weekday, probability_of, Factor, FactorReading, Prediction};
use chrono::NaiveDate;

/// Probabilities strictly above this delay.
pub const DELAY_THRESHOLD: f64 = 0.7;
/// Names longer than this (in UTF-16 units) count as long.
pub const LONG_NAME: usize = 10;
pub const MAX_DELAY_DAYS: u32 = 6;

/// Wrapping `h * 31 + unit` over the UTF-16 code units of `name`.
pub fn name_hash(name: &str) -> i32 {
    name.encode_utf16().fold(0i32, |h, unit| {
        h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit))
    })
}

/// `|hash * k| mod m`, computed without wrapping.
fn spread(hash: i32, k: i64, m: i64) -> i64 {
    (i64::from(hash) * k).abs() % m
}

pub fn read_factors(name: &str, today: NaiveDate) -> Vec<FactorReading> {
    let hash = name_hash(name);
    vec![
        FactorReading::new(Factor::Weekday, is_weekday(today)),
        FactorReading::new(Factor::RandomChance, spread(hash, 1, 10) > 3),
        FactorReading::new(Factor::MoonPhase, spread(hash, 7, 10) > 5),
        FactorReading::new(Factor::CoffeeLevel, spread(hash, 13, 10) + 1 > 5),
        FactorReading::new(
            Factor::AssignmentLength,
            name.encode_utf16().count() > LONG_NAME,
        ),
    ]
}

/// Predict whether the test for `name` will be delayed on `today`, and by
/// how many days.
pub fn predict(name: &str, today: NaiveDate) -> Result<Prediction> {
    if name.trim().is_empty() {
        return Err(PredictError::EmptyAssignment);
    }

    let factors = read_factors(name, today);
    let probability = probability_of(&factors);
    let will_delay = probability > DELAY_THRESHOLD;
    let delay_days = will_delay.then(|| {
        let days = spread(name_hash(name), 17, i64::from(MAX_DELAY_DAYS)) + 1;
        days as u32
    });

    Ok(Prediction {
        will_delay,
        probability,
        factors,
        delay_days,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn saturday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 24).unwrap()
    }

    #[test]
    fn hash_wraps_like_a_32_bit_int() {
        assert_eq!(name_hash(""), 0);
        assert_eq!(name_hash("a"), 97);
        assert_eq!(name_hash("Quiz"), 2_528_885);
        assert_eq!(name_hash("Macbeth Test"), -1_657_017_108);
        assert_eq!(name_hash("Chemistry Final"), 577_241_786);
    }

    #[test]
    fn four_of_five_delays_on_a_weekday() {
        let p = predict("Macbeth Test", monday()).unwrap();
        assert_eq!(p.active_count(), 4);
        assert!((p.probability - 0.8).abs() < 1e-9);
        assert!(p.will_delay);
        assert_eq!(p.delay_days, Some(1));

        let p = predict("Chemistry Final", monday()).unwrap();
        assert!(p.will_delay);
        assert_eq!(p.delay_days, Some(5));
    }

    #[test]
    fn weekend_drops_below_threshold() {
        let p = predict("Macbeth Test", saturday()).unwrap();
        assert!((p.probability - 0.6).abs() < 1e-9);
        assert!(!p.will_delay);
        assert_eq!(p.delay_days, None);
    }

    #[test]
    fn short_name_reads_length_factor_false() {
        let readings = read_factors("Quiz", monday());
        let length = readings
            .iter()
            .find(|r| r.factor == Factor::AssignmentLength)
            .unwrap();
        assert!(!length.active);
        let p = predict("Quiz", monday()).unwrap();
        assert!(!p.will_delay);
    }

    #[test]
    fn same_name_same_answer() {
        let a = predict("History Essay", monday()).unwrap();
        let b = predict("History Essay", monday()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(matches!(predict("", monday()), Err(PredictError::EmptyAssignment)));
        assert!(matches!(predict("   ", monday()), Err(PredictError::EmptyAssignment)));
    }
}
