mod skip_set;

#[cfg(test)]
mod test_utils;

pub mod error;
pub mod options;

pub use skip_set::{DEFAULT_MAX_LEVELS, SkipSet};
pub use skipset_list::{coin, comparator};

pub mod prelude {
    pub use crate::{
        SkipSet, coin::prelude::*, comparator::prelude::*, error::Error,
        options::SkipSetOptions,
    };
}
