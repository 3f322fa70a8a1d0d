use crate::error::{Error, Result};
use crate::node::{Link, Node};
use slab::Slab;

/// A doubly linked list of owned buffers with index-based access
///
/// Nodes live in a slab arena and link to each other by arena key. Every
/// element is a private copy of the slice handed to [`List::add`] or
/// [`List::insert`]. Out-of-range indices are clamped: `get` and `del` act on
/// the last element, `insert` appends.
#[derive(Debug)]
pub struct List<T = u8> {
    nodes: Slab<Node<T>>,
    head: Link,
    tail: Link,
    length: usize,
}

impl<T> List<T> {
    /// Creates a new empty list
    pub fn new() -> Self {
        List {
            nodes: Slab::new(),
            head: None,
            tail: None,
            length: 0,
        }
    }

    /// Creates an empty list with room for `capacity` nodes before the arena
    /// has to grow
    pub fn with_capacity(capacity: usize) -> Self {
        List {
            nodes: Slab::with_capacity(capacity),
            head: None,
            tail: None,
            length: 0,
        }
    }

    /// Returns the length of the list
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns true if the list is empty
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Number of nodes the arena can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Resets the list to the empty state.
    ///
    /// Unlike [`List::clear`] this does not walk the chain; the whole arena is
    /// dropped at once. Safe to call any number of times.
    pub fn init(&mut self) -> Result<()> {
        if !self.nodes.is_empty() {
            log::debug!("init discarding {} nodes", self.nodes.len());
        }
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.length = 0;
        Ok(())
    }

    /// Returns the element at `index`, or the last element if `index` is out
    /// of range. Returns `None` only when the list is empty.
    pub fn get(&self, index: usize) -> Option<&[T]> {
        let key = self.resolve(index)?;
        Some(self.nodes[key].payload())
    }

    /// Removes the element at `index` and returns it. An out-of-range index
    /// removes the last element. Returns `None` only when the list is empty.
    pub fn del(&mut self, index: usize) -> Option<Box<[T]>> {
        let key = self.resolve(index)?;
        self.unlink(key);
        Some(self.nodes.remove(key).into_payload())
    }

    /// Removes all elements from the list
    pub fn clear(&mut self) {
        let mut current = self.head;
        while let Some(key) = current {
            let node = self.nodes.remove(key);
            current = node.next;
            node.release();
        }

        self.head = None;
        self.tail = None;
        self.length = 0;
    }

    /// Maps `index` to the key of its node.
    ///
    /// Out-of-range indices select the tail. The walk starts from whichever
    /// end is closer, so at most `len / 2` links are followed.
    fn resolve(&self, index: usize) -> Option<usize> {
        if self.is_empty() {
            return None;
        }

        let index = if index >= self.length {
            log::debug!("index {} clamped to {}", index, self.length - 1);
            self.length - 1
        } else {
            index
        };

        if index >= self.length / 2 {
            let mut key = self.tail?;
            for _ in 0..(self.length - index - 1) {
                key = self.nodes[key].prev?;
            }
            Some(key)
        } else {
            let mut key = self.head?;
            for _ in 0..index {
                key = self.nodes[key].next?;
            }
            Some(key)
        }
    }

    /// Detaches the node at `key` from the chain, leaving it in the arena
    fn unlink(&mut self, key: usize) {
        let (prev, next) = {
            let node = &self.nodes[key];
            (node.prev, node.next)
        };

        match prev {
            Some(prev) => self.nodes[prev].next = next,
            // Removing head
            None => self.head = next,
        }
        match next {
            Some(next) => self.nodes[next].prev = prev,
            // Removing tail
            None => self.tail = prev,
        }

        self.length -= 1;
        log::trace!("unlinked node {}, {} remaining", key, self.length);
    }
}

impl<T: Clone> List<T> {
    /// Appends a copy of `data` to the back of the list
    ///
    /// [`Error::Allocation`] covers only the payload copy. Growing the node
    /// arena is infallible and aborts on out-of-memory like std collections.
    pub fn add(&mut self, data: &[T]) -> Result<()> {
        let node = Node::new(data)?;
        let key = self.nodes.insert(node);

        match self.tail {
            Some(tail) => {
                self.nodes[tail].next = Some(key);
                self.nodes[key].prev = Some(tail);
            }
            // Empty list
            None => self.head = Some(key),
        }
        self.tail = Some(key);

        self.length += 1;
        log::trace!("added node {} at index {}", key, self.length - 1);
        Ok(())
    }

    /// Inserts a copy of `data` so that it ends up at `index`, shifting the
    /// element there and everything after it back by one. An index at or past
    /// the end appends.
    ///
    /// As with [`List::add`], [`Error::Allocation`] covers only the payload
    /// copy, not arena growth.
    pub fn insert(&mut self, data: &[T], index: usize) -> Result<()> {
        if data.is_empty() {
            return Err(Error::NullInput);
        }
        if index >= self.length {
            if index > self.length {
                log::debug!("insert at {} past end {}, appending", index, self.length);
            }
            return self.add(data);
        }

        // Resolve the predecessor before allocating so a failed copy has
        // nothing to undo.
        let before = match index {
            0 => None,
            _ => self.resolve(index - 1),
        };

        let node = Node::new(data)?;
        let key = self.nodes.insert(node);

        match before {
            Some(before) => {
                // index < length, so the predecessor always has a successor
                let after = self.nodes[before].next;
                self.nodes[before].next = Some(key);
                self.nodes[key].prev = Some(before);
                self.nodes[key].next = after;
                if let Some(after) = after {
                    self.nodes[after].prev = Some(key);
                }
            }
            None => {
                let head = self.head;
                self.nodes[key].next = head;
                if let Some(head) = head {
                    self.nodes[head].prev = Some(key);
                }
                self.head = Some(key);
            }
        }

        self.length += 1;
        log::trace!("inserted node {} at index {}", key, index);
        Ok(())
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}
