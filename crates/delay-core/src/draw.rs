use rand::Rng;

/// Source of the random draws a prediction consumes.
///
/// Every `rand::Rng` is a `Draws`, so callers pass `thread_rng()` or a
/// seeded `StdRng`; tests substitute a scripted sequence.
pub trait Draws {
    /// Uniform value in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Fair coin.
    fn coin(&mut self) -> bool;

    /// Uniform integer in `low..=high`.
    fn roll(&mut self, low: u32, high: u32) -> u32;
}

impl<R: Rng + ?Sized> Draws for R {
    fn unit(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn coin(&mut self) -> bool {
        self.gen::<bool>()
    }

    fn roll(&mut self, low: u32, high: u32) -> u32 {
        self.gen_range(low..=high)
    }
}

#[cfg(test)]
pub(crate) mod scripted {
    use super::Draws;
    use std::collections::VecDeque;

    /// Replays fixed values per draw kind; panics when a kind runs dry.
    #[derive(Debug, Default)]
    pub struct Scripted {
        units: VecDeque<f64>,
        coins: VecDeque<bool>,
        rolls: VecDeque<u32>,
    }

    impl Scripted {
        pub fn new(units: &[f64], coins: &[bool], rolls: &[u32]) -> Self {
            Self {
                units: units.iter().copied().collect(),
                coins: coins.iter().copied().collect(),
                rolls: rolls.iter().copied().collect(),
            }
        }

        pub fn is_drained(&self) -> bool {
            self.units.is_empty() && self.coins.is_empty() && self.rolls.is_empty()
        }
    }

    impl Draws for Scripted {
        fn unit(&mut self) -> f64 {
            self.units.pop_front().expect("unexpected unit draw")
        }

        fn coin(&mut self) -> bool {
            self.coins.pop_front().expect("unexpected coin draw")
        }

        fn roll(&mut self, low: u32, high: u32) -> u32 {
            let v = self.rolls.pop_front().expect("unexpected roll draw");
            assert!((low..=high).contains(&v), "scripted roll {v} outside {low}..={high}");
            v
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rng_draws_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let u = rng.unit();
            assert!((0.0..1.0).contains(&u));
            let r = rng.roll(1, 10);
            assert!((1..=10).contains(&r));
        }
    }

    #[test]
    fn coin_lands_both_ways() {
        let mut rng = StdRng::seed_from_u64(42);
        let heads = (0..200).filter(|_| rng.coin()).count();
        assert!(heads > 0 && heads < 200);
    }
}
