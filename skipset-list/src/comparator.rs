mod default_comparator;
mod fn_comparator;

pub mod prelude {
    #![allow(unused)]

    pub use super::{
        Comparator, default_comparator::DefaultComparator, fn_comparator::FnComparator,
    };
}

/// The pair of predicates a skip list orders its values by.
///
/// `equal_to` and `greater_than` must agree on one total order: for any `a`
/// and `b`, exactly one of `equal_to(a, b)`, `greater_than(a, b)` and
/// `greater_than(b, a)` holds.
pub trait Comparator {
    type Item;

    fn equal_to(&self, a: &Self::Item, b: &Self::Item) -> bool;

    fn greater_than(&self, a: &Self::Item, b: &Self::Item) -> bool;
}
