use crate::output::print_json;
use crate::source::random_source;
use anyhow::Context;
use chrono::NaiveDate;
use delay_core::{predictor, report};

pub fn run(today: NaiveDate, seed: Option<u64>, json: bool) -> anyhow::Result<()> {
    tracing::debug!(%today, ?seed, "predicting");

    let mut rng = random_source(seed);
    let prediction = predictor::predict(today, &mut rng);

    for r in &prediction.factors {
        tracing::debug!(factor = %r.factor, active = r.active, "factor");
    }
    tracing::debug!(
        probability = prediction.probability,
        will_delay = prediction.will_delay,
        "decision"
    );

    if json {
        return print_json(&prediction);
    }

    let stdout = std::io::stdout();
    report::render(&mut stdout.lock(), &prediction, None).context("failed to write report")?;
    Ok(())
}
