mod arena;
mod search;

pub mod coin;
pub mod comparator;
pub mod skip_list;

pub mod prelude {
    pub use crate::coin::prelude::*;
    pub use crate::comparator::prelude::*;
    pub use crate::skip_list::SkipList;
}
