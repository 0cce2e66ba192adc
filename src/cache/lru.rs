//! LRU List Module
//!
//! Recency order for cache eviction, kept as a doubly linked list threaded
//! through a slab of nodes so every operation is O(1).

// == Node Handle ==
/// Stable handle to a key's position in an [`LruList`].
pub type NodeId = usize;

#[derive(Debug)]
struct Node<K> {
    key: K,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

// == LRU List ==
/// Tracks access order for LRU eviction strategy.
///
/// - Front (head) = Most recently used
/// - Back (tail) = Least recently used
///
/// Slots freed by removal are reused by later insertions, so a [`NodeId`]
/// is only meaningful while its key is still in the list.
#[derive(Debug)]
pub struct LruList<K> {
    nodes: Vec<Option<Node<K>>>,
    free: Vec<NodeId>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<K> Default for LruList<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> LruList<K> {
    // == Constructor ==
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }


    // == Push Front ==
    /// Inserts a key as the most recently used and returns its handle.
    pub fn push_front(&mut self, key: K) -> NodeId {
        let node = Node {
            key,
            prev: None,
            next: None,
        };
        let id = match self.free.pop() {
            Some(id) => {
                self.nodes[id] = Some(node);
                id
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        };
        self.link_front(id);
        self.len += 1;
        id
    }

    // == Move To Front ==
    /// Marks the key behind `id` as most recently used.
    pub fn move_to_front(&mut self, id: NodeId) {
        if self.head == Some(id) || self.node(id).is_none() {
            return;
        }
        self.unlink(id);
        self.link_front(id);
    }

    // == Remove ==
    /// Removes the key behind `id` and returns it.
    pub fn remove(&mut self, id: NodeId) -> Option<K> {
        self.node(id)?;
        self.unlink(id);
        let node = self.nodes.get_mut(id)?.take()?;
        self.free.push(id);
        self.len -= 1;
        Some(node.key)
    }

    // == Pop Back ==
    /// Returns and removes the least recently used key.
    pub fn pop_back(&mut self) -> Option<K> {
        let id = self.tail?;
        self.remove(id)
    }

    /// Returns the key behind `id`.
    pub fn get(&self, id: NodeId) -> Option<&K> {
        self.node(id).map(|node| &node.key)
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Iteration ==
    /// Iterates keys from most to least recently used.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    fn node(&self, id: NodeId) -> Option<&Node<K>> {
        self.nodes.get(id).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<K>> {
        self.nodes.get_mut(id).and_then(Option::as_mut)
    }

    fn link_front(&mut self, id: NodeId) {
        let old_head = self.head;
        if let Some(node) = self.node_mut(id) {
            node.prev = None;
            node.next = old_head;
        }
        match old_head {
            Some(head) => {
                if let Some(node) = self.node_mut(head) {
                    node.prev = Some(id);
                }
            }
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }

    fn unlink(&mut self, id: NodeId) {
        let (prev, next) = match self.node(id) {
            Some(node) => (node.prev, node.next),
            None => return,
        };
        match prev {
            Some(p) => {
                if let Some(node) = self.node_mut(p) {
                    node.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(n) => {
                if let Some(node) = self.node_mut(n) {
                    node.prev = prev;
                }
            }
            None => self.tail = prev,
        }
        if let Some(node) = self.node_mut(id) {
            node.prev = None;
            node.next = None;
        }
    }
}

// == Iterator ==
/// Iterator over an [`LruList`], most recently used first.
pub struct Iter<'a, K> {
    list: &'a LruList<K>,
    cursor: Option<NodeId>,
    remaining: usize,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.cursor?)?;
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn keys(list: &LruList<&'static str>) -> Vec<&'static str> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_lru_new() {
        let lru: LruList<&str> = LruList::new();
        assert!(lru.is_empty());
        assert_eq!(lru.len(), 0);
        assert_eq!(lru.iter().last(), None);
    }

    #[test]
    fn test_push_front_orders_mru_first() {
        let mut lru = LruList::new();

        lru.push_front("key1");
        lru.push_front("key2");
        lru.push_front("key3");

        assert_eq!(lru.len(), 3);
        assert_eq!(lru.iter().last(), Some(&"key1"));
        assert_eq!(keys(&lru), vec!["key3", "key2", "key1"]);
    }

    #[test]
    fn test_move_to_front() {
        let mut lru = LruList::new();

        let a = lru.push_front("a");
        lru.push_front("b");
        lru.push_front("c");

        lru.move_to_front(a);

        assert_eq!(lru.len(), 3);
        assert_eq!(lru.iter().last(), Some(&"b"));
        assert_eq!(keys(&lru), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_move_head_to_front_is_noop() {
        let mut lru = LruList::new();

        lru.push_front("a");
        let b = lru.push_front("b");
        lru.move_to_front(b);

        assert_eq!(keys(&lru), vec!["b", "a"]);
    }

    #[test]
    fn test_pop_back() {
        let mut lru = LruList::new();

        lru.push_front("key1");
        lru.push_front("key2");
        lru.push_front("key3");

        assert_eq!(lru.pop_back(), Some("key1"));
        assert_eq!(lru.len(), 2);
        assert_eq!(lru.pop_back(), Some("key2"));
        assert_eq!(lru.pop_back(), Some("key3"));
        assert_eq!(lru.pop_back(), None);
        assert!(lru.is_empty());
    }

    #[test]
    fn test_remove_middle() {
        let mut lru = LruList::new();

        lru.push_front("key1");
        let key2 = lru.push_front("key2");
        lru.push_front("key3");

        assert_eq!(lru.remove(key2), Some("key2"));
        assert_eq!(lru.len(), 2);
        assert_eq!(keys(&lru), vec!["key3", "key1"]);

        // Second removal of the same handle is a no-op
        assert_eq!(lru.remove(key2), None);
        assert_eq!(lru.len(), 2);
    }

    #[test]
    fn test_remove_only_element_resets_ends() {
        let mut lru = LruList::new();

        let a = lru.push_front("a");
        lru.remove(a);

        assert!(lru.is_empty());
        assert_eq!(lru.iter().last(), None);
        assert_eq!(lru.iter().count(), 0);

        lru.push_front("b");
        assert_eq!(keys(&lru), vec!["b"]);
    }

    #[test]
    fn test_slots_are_reused() {
        let mut lru = LruList::new();

        let a = lru.push_front("a");
        lru.push_front("b");
        lru.remove(a);
        let c = lru.push_front("c");

        assert_eq!(a, c);
        assert_eq!(lru.get(c), Some(&"c"));
        assert_eq!(keys(&lru), vec!["c", "b"]);
    }

    #[test]
    fn test_order_after_multiple_touches() {
        let mut lru = LruList::new();

        let a = lru.push_front("a");
        let b = lru.push_front("b");
        let c = lru.push_front("c");

        lru.move_to_front(a);
        lru.move_to_front(c);
        lru.move_to_front(b);

        assert_eq!(keys(&lru), vec!["b", "c", "a"]);
        assert_eq!(lru.pop_back(), Some("a"));
        assert_eq!(lru.pop_back(), Some("c"));
        assert_eq!(lru.pop_back(), Some("b"));
    }

    #[test]
    fn test_iter_exact_size() {
        let mut lru = LruList::new();
        lru.push_front(1);
        lru.push_front(2);

        assert_eq!(lru.iter().len(), 2);
    }
}
