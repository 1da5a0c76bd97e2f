use std::fmt;

use crate::{
    arena::{NodeArena, NodeId},
    coin::prelude::*,
    comparator::prelude::*,
    search::{SearchResult, find},
};

/// An ordered set of distinct values kept in a multi-level skip list.
///
/// Not synchronised: mutation takes `&mut self`, reads take `&self`.
pub struct SkipList<T, C, R = RngCoin> {
    arena: NodeArena<T>,
    /// Level heads, bottom (data) level first.
    levels: Vec<NodeId>,
    len: usize,
    c: C,
    coin: R,
}

impl<T, C> SkipList<T, C>
where
    C: Comparator<Item = T>,
{
    /// # Panics
    ///
    /// Panics if `max_levels` is zero.
    pub fn new(max_levels: usize, c: C) -> Self {
        Self::with_coin(max_levels, c, RngCoin::default())
    }
}

impl<T, C, R> SkipList<T, C, R>
where
    C: Comparator<Item = T>,
    R: CoinToss,
{
    /// # Panics
    ///
    /// Panics if `max_levels` is zero.
    pub fn with_coin(max_levels: usize, c: C, coin: R) -> Self {
        assert!(max_levels > 0, "SkipList needs at least one level.");

        let mut arena = NodeArena::new();
        let mut levels = Vec::with_capacity(max_levels);
        let mut below = None;
        for _ in 0..max_levels {
            let head = arena.alloc(None, below);
            levels.push(head);
            below = Some(head);
        }

        Self {
            arena,
            levels,
            len: 0,
            c,
            coin,
        }
    }

    fn top(&self) -> NodeId {
        // non-empty, checked in `with_coin`
        self.levels[self.levels.len() - 1]
    }

    fn find(&self, value: &T) -> SearchResult {
        find(&self.arena, self.top(), value, &self.c)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn max_levels(&self) -> usize {
        self.levels.len()
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find(value).was_found()
    }

    /// Adds `value` unless an equal value is already present.
    /// Returns whether the list changed.
    pub fn insert(&mut self, value: T) -> bool {
        let r = self.find(&value);
        if r.was_found() {
            return false;
        }
        self.len += 1;

        let node = self.arena.alloc(Some(value), None);
        let right = self.arena[r.prev].next;
        self.arena.link(r.prev, node);
        if let Some(right) = right {
            self.arena.link(node, right);
        }

        // each level above is taken with probability 1/2, and only through
        // nodes the search actually came down from
        let mut top = node;
        let mut height = 1;
        let mut descends = r.descends.iter().rev();
        while height < self.levels.len() && self.coin.toss() {
            let Some(&from) = descends.next() else {
                break;
            };

            let index = self.arena.alloc(None, Some(top));
            let right = self.arena[from].next;
            self.arena.link(from, index);
            if let Some(right) = right {
                self.arena.link(index, right);
            }

            top = index;
            height += 1;
        }

        tracing::trace!(height, len = self.len, "insert into skip list");
        true
    }

    /// Removes the value equal to `value` together with its whole tower.
    /// Returns whether the list changed.
    pub fn remove(&mut self, value: &T) -> bool {
        let r = self.find(value);
        let Some(found) = r.found else {
            return false;
        };
        self.len -= 1;

        let mut height = 0;
        let mut cur = Some(r.prev);
        while let Some(id) = cur {
            cur = self.arena[id].down;
            self.arena.unlink(id);
            self.arena.release(id);
            height += 1;
        }
        debug_assert!(self.arena[found].value.is_none());

        tracing::trace!(height, len = self.len, "remove from skip list");
        true
    }

    /// Calls `f` with a running index and every value not less than
    /// `start`, in ascending order, until `f` returns `false`.
    pub fn range<F>(&self, start: &T, mut f: F)
    where
        F: FnMut(usize, &T) -> bool,
    {
        let r = self.find(start);
        let mut cur = Some(r.found.unwrap_or(r.prev));

        let mut i = 0;
        while let Some(id) = cur {
            cur = self.arena[id].next;

            let Some(value) = self.arena.logical_value(id) else {
                continue;
            };
            if self.c.greater_than(start, value) {
                continue;
            }
            if !f(i, value) {
                break;
            }
            i += 1;
        }
    }

    /// Collects the values of the bottom level in ascending order.
    pub fn to_vec(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len);
        let mut cur = self.arena[self.levels[0]].next;
        while let Some(id) = cur {
            if let Some(value) = self.arena[id].value.as_ref() {
                values.push(value);
            }
            cur = self.arena[id].next;
        }
        values
    }
}

/// One line per level, top level first: `L1: H -> 3 -> 7`.
impl<T, C, R> fmt::Display for SkipList<T, C, R>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (level, &head) in self.levels.iter().enumerate().rev() {
            write!(f, "L{level}: H")?;
            let mut cur = self.arena[head].next;
            while let Some(id) = cur {
                match self.arena.logical_value(id) {
                    Some(value) => write!(f, " -> {value}")?,
                    None => write!(f, " -> ?")?,
                }
                cur = self.arena[id].next;
            }
            if level > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl<T, C, R> fmt::Debug for SkipList<T, C, R>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = f.debug_set();
        let mut cur = self.arena[self.levels[0]].next;
        while let Some(id) = cur {
            if let Some(value) = self.arena[id].value.as_ref() {
                values.entry(value);
            }
            cur = self.arena[id].next;
        }
        values.finish()
    }
}
