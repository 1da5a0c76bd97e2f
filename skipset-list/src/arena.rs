use std::ops::{Index, IndexMut};

/// Stable address of a node inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node of one level. Only bottom-level value nodes carry a value;
/// sentinels and index nodes reach theirs through `down`.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: Option<T>,
    pub(crate) prev: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
    pub(crate) down: Option<NodeId>,
}

impl<T> Node<T> {
    fn empty() -> Self {
        Self {
            value: None,
            prev: None,
            next: None,
            down: None,
        }
    }
}

/// Owns every node of a skip list. Released slots are reused by later
/// allocations, so ids stay small and nothing is freed behind the list's back.
#[derive(Debug)]
pub(crate) struct NodeArena<T> {
    nodes: Vec<Node<T>>,
    free: Vec<NodeId>,
}

impl<T> NodeArena<T> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn alloc(&mut self, value: Option<T>, down: Option<NodeId>) -> NodeId {
        let node = Node {
            value,
            down,
            ..Node::empty()
        };

        match self.free.pop() {
            Some(id) => {
                self[id] = node;
                id
            }
            None => {
                let id = NodeId(
                    u32::try_from(self.nodes.len()).expect("node arena exceeded u32::MAX nodes"),
                );
                self.nodes.push(node);
                id
            }
        }
    }

    /// Returns the slot to the free list and hands back the value it held.
    pub(crate) fn release(&mut self, id: NodeId) -> Option<T> {
        let node = std::mem::replace(&mut self[id], Node::empty());
        self.free.push(id);
        node.value
    }

    /// Number of nodes currently in use, sentinels included.
    pub(crate) fn live(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    /// Follows `down` links until none remain.
    pub(crate) fn bottom(&self, mut id: NodeId) -> NodeId {
        while let Some(down) = self[id].down {
            id = down;
        }
        id
    }

    /// The logical value of `id`: the value of the bottom of its column.
    pub(crate) fn logical_value(&self, id: NodeId) -> Option<&T> {
        self[self.bottom(id)].value.as_ref()
    }

    /// Makes `b` the right neighbour of `a`.
    pub(crate) fn link(&mut self, a: NodeId, b: NodeId) {
        self[a].next = Some(b);
        self[b].prev = Some(a);
    }

    /// Splices `id` out of its level, healing whichever neighbours exist.
    pub(crate) fn unlink(&mut self, id: NodeId) {
        let (left, right) = (self[id].prev.take(), self[id].next.take());
        match (left, right) {
            (Some(left), Some(right)) => self.link(left, right),
            (Some(left), None) => self[left].next = None,
            (None, Some(right)) => self[right].prev = None,
            (None, None) => {}
        }
    }
}

impl<T> Index<NodeId> for NodeArena<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.index()]
    }
}

impl<T> IndexMut<NodeId> for NodeArena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        &mut self.nodes[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::NodeArena;

    #[test]
    fn test_link_and_unlink() {
        let mut arena = NodeArena::new();
        let a = arena.alloc(Some(1), None);
        let b = arena.alloc(Some(2), None);
        let c = arena.alloc(Some(3), None);
        arena.link(a, b);
        arena.link(b, c);

        arena.unlink(b);
        assert_eq!(arena[a].next, Some(c));
        assert_eq!(arena[c].prev, Some(a));
        assert_eq!(arena[b].prev, None);
        assert_eq!(arena[b].next, None);

        arena.unlink(c);
        assert_eq!(arena[a].next, None);

        arena.link(a, c);
        arena.unlink(a);
        assert_eq!(arena[c].prev, None);
    }

    #[test]
    fn test_release_reuses_slots() {
        let mut arena = NodeArena::new();
        let a = arena.alloc(Some("a"), None);
        let b = arena.alloc(None, Some(a));
        assert_eq!(arena.live(), 2);
        assert_eq!(arena.logical_value(b), Some(&"a"));

        assert_eq!(arena.release(a), Some("a"));
        assert_eq!(arena.live(), 1);

        let c = arena.alloc(Some("c"), None);
        assert_eq!(c, a);
        assert_eq!(arena.live(), 2);
    }
}
