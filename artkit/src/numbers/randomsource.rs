use std::cell::RefCell;

use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Per-thread random generator shared by every distribution leaf built on
/// that thread. Each sample taken bumps the draw counter.
pub struct RandomSource {
    rng: StdRng,
    draws: u64,
}

thread_local! {
    static SOURCE: RefCell<RandomSource> = RefCell::new(RandomSource {
        rng: StdRng::from_entropy(),
        draws: 0,
    });
}

impl RandomSource {
    /// Reseed the current thread's generator. Leaves built afterwards draw a
    /// reproducible sequence; leaves built before keep their values.
    pub fn seed(seed: u64) {
        tracing::debug!(seed, "reseeding random source");
        SOURCE.with(|s| s.borrow_mut().rng = StdRng::seed_from_u64(seed));
    }

    /// Number of samples consumed on this thread so far.
    pub fn draws() -> u64 {
        SOURCE.with(|s| s.borrow().draws)
    }

    /* ---- sampling (one draw each) ---- */

    /// Uniform sample in `[0, 1)`.
    pub(crate) fn unit() -> f64 {
        Self::draw(|rng| rng.gen::<f64>())
    }

    /// Standard normal sample.
    pub(crate) fn standard_normal() -> f64 {
        Self::draw(|rng| rng.sample::<f64, _>(StandardNormal))
    }

    fn draw(f: impl FnOnce(&mut StdRng) -> f64) -> f64 {
        SOURCE.with(|s| {
            let mut s = s.borrow_mut();
            s.draws += 1;
            f(&mut s.rng)
        })
    }
}
