use std::fmt;

use parking_lot::RwLock;
use skipset_list::prelude::*;

/// Level count used by [`SkipSet::default`] and [`SkipSetOptions`].
///
/// [`SkipSetOptions`]: crate::options::SkipSetOptions
pub const DEFAULT_MAX_LEVELS: usize = 16;

/// A thread-safe ordered set backed by a skip list.
///
/// One reader/writer lock guards the whole structure: `insert` and `remove`
/// hold it exclusively, every other operation shares it. The consumer passed
/// to [`range`](Self::range) runs with the shared lock held, so it must not
/// call back into a writer of the same set.
pub struct SkipSet<T, C = DefaultComparator<T>, R = RngCoin> {
    list: RwLock<SkipList<T, C, R>>,
}

impl<T, E, G> SkipSet<T, FnComparator<T, E, G>>
where
    E: Fn(&T, &T) -> bool,
    G: Fn(&T, &T) -> bool,
{
    /// Orders values by `equal_to` and `greater_than`.
    ///
    /// # Panics
    ///
    /// Panics if `max_levels` is zero.
    pub fn new(max_levels: usize, equal_to: E, greater_than: G) -> Self {
        Self::with_comparator(max_levels, FnComparator::new(equal_to, greater_than))
    }
}

impl<T, C> SkipSet<T, C>
where
    C: Comparator<Item = T>,
{
    /// # Panics
    ///
    /// Panics if `max_levels` is zero.
    pub fn with_comparator(max_levels: usize, c: C) -> Self {
        Self::with_coin(max_levels, c, RngCoin::default())
    }
}

impl<T, C, R> SkipSet<T, C, R>
where
    C: Comparator<Item = T>,
    R: CoinToss,
{
    /// Uses `coin` to decide tower heights.
    ///
    /// # Panics
    ///
    /// Panics if `max_levels` is zero.
    pub fn with_coin(max_levels: usize, c: C, coin: R) -> Self {
        let list = SkipList::with_coin(max_levels, c, coin);
        tracing::debug!("create skip set, max levels: {}", max_levels);
        Self {
            list: RwLock::new(list),
        }
    }

    /// Returns `false` if an equal value was already present.
    pub fn insert(&self, value: T) -> bool {
        let inserted = self.list.write().insert(value);
        if !inserted {
            tracing::trace!("insert skipped, value already present");
        }
        inserted
    }

    /// Returns `false` if no equal value was present.
    pub fn remove(&self, value: &T) -> bool {
        let removed = self.list.write().remove(value);
        if !removed {
            tracing::trace!("remove skipped, value not present");
        }
        removed
    }

    pub fn contains(&self, value: &T) -> bool {
        self.list.read().contains(value)
    }

    pub fn len(&self) -> usize {
        self.list.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.read().is_empty()
    }

    pub fn max_levels(&self) -> usize {
        self.list.read().max_levels()
    }

    /// Feeds `f` every value not less than `start` in ascending order,
    /// with a zero-based index, until `f` returns `false`.
    pub fn range<F>(&self, start: &T, f: F)
    where
        F: FnMut(usize, &T) -> bool,
    {
        self.list.read().range(start, f);
    }

    /// Snapshot of every value, ascending.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.list.read().to_vec().into_iter().cloned().collect()
    }
}

impl<T> Default for SkipSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::with_comparator(DEFAULT_MAX_LEVELS, DefaultComparator::default())
    }
}

impl<T, C, R> fmt::Display for SkipSet<T, C, R>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.list.read(), f)
    }
}

impl<T, C, R> fmt::Debug for SkipSet<T, C, R>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkipSet")
            .field("values", &*self.list.read())
            .finish()
    }
}
