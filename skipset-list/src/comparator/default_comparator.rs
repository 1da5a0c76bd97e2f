use std::marker::PhantomData;

use super::Comparator;

/// Orders values by their [`Ord`] implementation.
#[derive(Debug)]
pub struct DefaultComparator<T> {
    _marker: PhantomData<fn(&T, &T)>,
}

impl<T> Default for DefaultComparator<T> {
    fn default() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Comparator for DefaultComparator<T>
where
    T: Ord,
{
    type Item = T;

    fn equal_to(&self, a: &Self::Item, b: &Self::Item) -> bool {
        a == b
    }

    fn greater_than(&self, a: &Self::Item, b: &Self::Item) -> bool {
        a > b
    }
}

impl<T> Clone for DefaultComparator<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DefaultComparator<T> {}
