use crate::output::print_json;
use anyhow::Context;
use chrono::NaiveDate;
use delay_core::assignment;
use delay_core::report::{self, Subject};

pub fn run(name: &str, today: NaiveDate, json: bool) -> anyhow::Result<()> {
    tracing::debug!(assignment = name, %today, "predicting for assignment");

    let prediction = assignment::predict(name, today).context("cannot predict")?;

    for r in &prediction.factors {
        tracing::debug!(factor = %r.factor, active = r.active, "factor");
    }
    tracing::debug!(
        probability = prediction.probability,
        will_delay = prediction.will_delay,
        delay_days = ?prediction.delay_days,
        "decision"
    );

    if json {
        let value = serde_json::json!({
            "assignment": name,
            "date": today,
            "prediction": prediction,
        });
        return print_json(&value);
    }

    let subject = Subject {
        assignment: name,
        date: today,
    };
    let stdout = std::io::stdout();
    report::render(&mut stdout.lock(), &prediction, Some(subject))
        .context("failed to write report")?;
    Ok(())
}
