use skipset_list::{coin::RngCoin, comparator::Comparator};

use crate::{
    SkipSet,
    error::{Error, Result},
    skip_set::DEFAULT_MAX_LEVELS,
};

#[derive(Debug, Clone)]
pub struct SkipSetOptions {
    max_levels: usize,

    seed: Option<u64>,
}

impl Default for SkipSetOptions {
    fn default() -> Self {
        Self {
            max_levels: DEFAULT_MAX_LEVELS,
            seed: None,
        }
    }
}

impl SkipSetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of levels, the bottom (data) level included. Fixed for the
    /// lifetime of the set.
    pub fn max_levels(&mut self, levels: usize) -> &mut Self {
        self.max_levels = levels;
        self
    }

    /// Seed for tower heights. Without one the generator is seeded from the OS.
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.seed = Some(seed);
        self
    }

    pub fn build<C>(&self, c: C) -> Result<SkipSet<C::Item, C>>
    where
        C: Comparator,
    {
        if self.max_levels < 1 {
            return Err(Error::InvalidMaxLevels(self.max_levels));
        }

        let coin = match self.seed {
            Some(seed) => RngCoin::seeded(seed),
            None => RngCoin::from_os_rng(),
        };
        Ok(SkipSet::with_coin(self.max_levels, c, coin))
    }
}
