use std::{fmt, marker::PhantomData};

use super::Comparator;

/// Orders values by a pair of caller-supplied closures.
pub struct FnComparator<T, E, G> {
    equal_to: E,
    greater_than: G,
    _marker: PhantomData<fn(&T, &T)>,
}

impl<T, E, G> FnComparator<T, E, G>
where
    E: Fn(&T, &T) -> bool,
    G: Fn(&T, &T) -> bool,
{
    pub fn new(equal_to: E, greater_than: G) -> Self {
        Self {
            equal_to,
            greater_than,
            _marker: PhantomData,
        }
    }
}

impl<T, E, G> Comparator for FnComparator<T, E, G>
where
    E: Fn(&T, &T) -> bool,
    G: Fn(&T, &T) -> bool,
{
    type Item = T;

    fn equal_to(&self, a: &Self::Item, b: &Self::Item) -> bool {
        (self.equal_to)(a, b)
    }

    fn greater_than(&self, a: &Self::Item, b: &Self::Item) -> bool {
        (self.greater_than)(a, b)
    }
}

impl<T, E, G> Clone for FnComparator<T, E, G>
where
    E: Clone,
    G: Clone,
{
    fn clone(&self) -> Self {
        Self {
            equal_to: self.equal_to.clone(),
            greater_than: self.greater_than.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, E, G> fmt::Debug for FnComparator<T, E, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnComparator").finish_non_exhaustive()
    }
}
