use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Resolve the date to predict for.
///
/// Priority:
/// 1. `--date` flag / `DELAY_PREDICTOR_DATE` env var (passed in as `explicit`)
/// 2. Today in local time
pub fn resolve_date(explicit: Option<NaiveDate>) -> NaiveDate {
    explicit.unwrap_or_else(|| chrono::Local::now().date_naive())
}

/// Seeded `StdRng` when a seed is given, otherwise the thread-local generator.
pub fn random_source(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(s) => Box::new(StdRng::seed_from_u64(s)),
        None => Box::new(rand::thread_rng()),
    }
}
