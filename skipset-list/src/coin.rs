use rand::{Rng, SeedableRng, rngs::StdRng};

pub mod prelude {
    #![allow(unused)]

    pub use super::{AlwaysHeads, AlwaysTails, CoinToss, RngCoin};
}

/// Source of the fair coin tosses that decide tower heights.
pub trait CoinToss {
    /// `true` grows the tower by one more level.
    fn toss(&mut self) -> bool;
}

/// A fair coin backed by a [`rand`] generator.
#[derive(Debug, Clone)]
pub struct RngCoin<R = StdRng> {
    rng: R,
}

impl<R: Rng> RngCoin<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngCoin<StdRng> {
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Same seed, same sequence of tower heights.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for RngCoin<StdRng> {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl<R: Rng> CoinToss for RngCoin<R> {
    fn toss(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }
}

/// Every tower grows as high as the list allows.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysHeads;

impl CoinToss for AlwaysHeads {
    fn toss(&mut self) -> bool {
        true
    }
}

/// No tower grows; the list degenerates into its bottom level.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysTails;

impl CoinToss for AlwaysTails {
    fn toss(&mut self) -> bool {
        false
    }
}
