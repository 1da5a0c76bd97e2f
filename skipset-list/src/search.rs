use crate::{
    arena::{NodeArena, NodeId},
    comparator::Comparator,
};

pub(crate) struct SearchResult {
    /// On a hit, the node where equality was first seen (the top of the
    /// matched column). On a miss, the rightmost bottom-level node strictly
    /// less than the target.
    pub(crate) prev: NodeId,

    /// The bottom-level node holding the equal value.
    pub(crate) found: Option<NodeId>,

    /// Every node the walk stepped down from, top level first.
    pub(crate) descends: Vec<NodeId>,
}

impl SearchResult {
    pub(crate) fn was_found(&self) -> bool {
        self.found.is_some()
    }
}

/// Walks right and down from `start` looking for `target`.
pub(crate) fn find<T, C>(
    arena: &NodeArena<T>,
    start: NodeId,
    target: &T,
    c: &C,
) -> SearchResult
where
    C: Comparator<Item = T>,
{
    let mut descends = Vec::new();
    let mut cur = start;
    // `start` is a sentinel, so it is always a valid fallback predecessor
    let mut prev = start;

    loop {
        let bottom = arena.bottom(cur);

        if let Some(value) = arena[bottom].value.as_ref() {
            if c.equal_to(value, target) {
                return SearchResult {
                    prev: cur,
                    found: Some(bottom),
                    descends,
                };
            }

            if c.greater_than(value, target) {
                // overshot: back up one node and go down from there
                debug_assert_eq!(arena[cur].prev, Some(prev));
                match arena[prev].down {
                    Some(down) => {
                        descends.push(prev);
                        cur = down;
                        continue;
                    }
                    None => {
                        return SearchResult {
                            prev,
                            found: None,
                            descends,
                        };
                    }
                }
            }
        }

        prev = cur;
        if let Some(next) = arena[cur].next {
            cur = next;
        } else if let Some(down) = arena[cur].down {
            descends.push(cur);
            cur = down;
        } else {
            return SearchResult {
                prev: cur,
                found: None,
                descends,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::find;
    use crate::{
        arena::{NodeArena, NodeId},
        comparator::prelude::*,
    };

    /// Two levels by hand:
    ///
    /// ```text
    /// L1: H1 ----------> i20
    /// L0: H0 -> 10 -> 20 -> 30
    /// ```
    fn build() -> (NodeArena<i32>, NodeId, [NodeId; 4]) {
        let mut arena = NodeArena::new();
        let h0 = arena.alloc(None, None);
        let h1 = arena.alloc(None, Some(h0));
        let n10 = arena.alloc(Some(10), None);
        let n20 = arena.alloc(Some(20), None);
        let n30 = arena.alloc(Some(30), None);
        arena.link(h0, n10);
        arena.link(n10, n20);
        arena.link(n20, n30);
        let i20 = arena.alloc(None, Some(n20));
        arena.link(h1, i20);
        (arena, h1, [h0, n10, n20, i20])
    }

    #[test]
    fn test_find_hit_on_index_level() {
        let (arena, top, [_, _, n20, i20]) = build();
        let r = find(&arena, top, &20, &DefaultComparator::default());
        assert!(r.was_found());
        assert_eq!(r.found, Some(n20));
        assert_eq!(r.prev, i20);
        assert!(r.descends.is_empty());
    }

    #[test]
    fn test_find_hit_below_index() {
        let (arena, top, [h0, n10, ..]) = build();
        let r = find(&arena, top, &10, &DefaultComparator::default());
        assert_eq!(r.found, Some(n10));
        assert_eq!(r.prev, n10);
        // overshot at i20, stepped down from the level 1 sentinel
        assert_eq!(r.descends.len(), 1);
        assert_eq!(arena[r.descends[0]].down, Some(h0));
    }

    #[test]
    fn test_find_miss_reports_insertion_point() {
        let (arena, top, [h0, n10, n20, i20]) = build();
        let cmp = DefaultComparator::default();

        let r = find(&arena, top, &15, &cmp);
        assert!(!r.was_found());
        assert_eq!(r.prev, n10);

        let r = find(&arena, top, &5, &cmp);
        assert_eq!(r.prev, h0);

        let r = find(&arena, top, &25, &cmp);
        assert_eq!(r.prev, n20);
        assert_eq!(r.descends, vec![i20]);

        let r = find(&arena, top, &99, &cmp);
        assert_eq!(arena[r.prev].value, Some(30));
    }

    #[test]
    fn test_find_on_empty_levels() {
        let mut arena = NodeArena::<i32>::new();
        let h0 = arena.alloc(None, None);
        let h1 = arena.alloc(None, Some(h0));
        let h2 = arena.alloc(None, Some(h1));

        let r = find(&arena, h2, &1, &DefaultComparator::default());
        assert!(!r.was_found());
        assert_eq!(r.prev, h0);
        assert_eq!(r.descends, vec![h2, h1]);
    }
}
