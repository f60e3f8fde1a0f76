//! Monte-Carlo shuffle hook.
//!
//! Extension point only: yields equity curves built from random reorderings
//! of a column, for resampling-style robustness work layered on top by
//! callers. No statistics are computed here.

use crate::domain::equity::equity_curve;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// A seeded source of shuffled equity curves.
///
/// The sequence is lazy, unbounded, and restartable: every call to
/// [`runs`](MonteCarlo::runs) starts the identical sequence again from the
/// seed.
#[derive(Debug, Clone)]
pub struct MonteCarlo {
    values: Vec<f64>,
    seed: u64,
}

impl MonteCarlo {
    pub fn new(values: Vec<f64>, seed: u64) -> Self {
        Self { values, seed }
    }

    /// Infinite iterator of equity curves over shuffled copies of the
    /// column. Callers bound it themselves, e.g. `mc.runs().take(1000)`.
    pub fn runs(&self) -> impl Iterator<Item = Vec<f64>> + '_ {
        let mut rng = StdRng::seed_from_u64(self.seed);
        std::iter::from_fn(move || {
            let mut shuffled = self.values.clone();
            shuffled.shuffle(&mut rng);
            Some(equity_curve(&shuffled))
        })
    }
}
