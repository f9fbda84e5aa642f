//! Console report for a prediction.

use crate::error::Result;
use crate::types::Prediction;
use chrono::NaiveDate;
use std::io::Write;

pub const BANNER: &str = "🌨️ Mr. Marsh Test Delay Predictor ❄️";
pub const SEPARATOR_WIDTH: usize = 40;
pub const GOOD_NEWS_PREFIX: &str = "🎉 Good news! Mr. Marsh is likely to delay the test";
pub const GOOD_NEWS_FOLLOWUP: &str = "📚 Use this extra time to study... or relax!";
pub const BAD_NEWS: &str = "📝 Bad news! The test is probably happening as scheduled.";
pub const BAD_NEWS_FOLLOWUP: &str = "🧠 Better hit the books!";
pub const DISCLAIMER: &str = "Remember, this is just for fun! Always check official announcements.";

/// What the prediction was made for, when it was made for an assignment.
#[derive(Debug, Clone, Copy)]
pub struct Subject<'a> {
    pub assignment: &'a str,
    pub date: NaiveDate,
}

fn day_label(days: u32) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}

fn good_news(prediction: &Prediction) -> String {
    match prediction.delay_days {
        Some(days) => format!("{GOOD_NEWS_PREFIX} by {}!", day_label(days)),
        None => format!("{GOOD_NEWS_PREFIX}!"),
    }
}

/// Probability with exactly two decimals.
pub fn format_probability(probability: f64) -> String {
    format!("{probability:.2}")
}

/// Write the full report: banner, separator, outcome message, probability
/// and disclaimer.
pub fn render<W: Write + ?Sized>(
    out: &mut W,
    prediction: &Prediction,
    subject: Option<Subject<'_>>,
) -> Result<()> {
    writeln!(out, "{BANNER}")?;
    writeln!(out, "{}", "=".repeat(SEPARATOR_WIDTH))?;

    if let Some(s) = subject {
        writeln!(out, "Assignment: {} ({})", s.assignment, s.date.format("%A"))?;
    }

    if prediction.will_delay {
        writeln!(out, "{}", good_news(prediction))?;
        writeln!(out, "{GOOD_NEWS_FOLLOWUP}")?;
    } else {
        writeln!(out, "{BAD_NEWS}")?;
        writeln!(out, "{BAD_NEWS_FOLLOWUP}")?;
    }

    writeln!(
        out,
        "Probability of delay: {}",
        format_probability(prediction.probability)
    )?;
    writeln!(out)?;
    writeln!(out, "{DISCLAIMER}")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
