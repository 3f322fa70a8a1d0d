use crate::error::{Error, Result};

/// Arena key of an adjacent node, `None` at either end of the chain
pub(crate) type Link = Option<usize>;

/// A node in the doubly linked list
///
/// Owns one copy of the caller's buffer. `prev` and `next` are keys into the
/// list's arena and carry no ownership of the neighbours.
#[derive(Debug)]
pub(crate) struct Node<T> {
    payload: Box<[T]>,
    pub(crate) prev: Link,
    pub(crate) next: Link,
}

impl<T: Clone> Node<T> {
    /// Copies `data` into a new, unlinked node.
    ///
    /// Storage is reserved fallibly and sized exactly to `data.len()`, so a
    /// failed allocation leaves nothing behind.
    pub(crate) fn new(data: &[T]) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::NullInput);
        }

        let mut buf = Vec::new();
        if buf.try_reserve_exact(data.len()).is_err() {
            log::warn!("payload allocation of {} elements failed", data.len());
            return Err(Error::Allocation { len: data.len() });
        }
        buf.extend_from_slice(data);

        log::trace!("allocated node with {} elements", data.len());
        Ok(Node {
            payload: buf.into_boxed_slice(),
            prev: None,
            next: None,
        })
    }
}

impl<T> Node<T> {
    pub(crate) fn payload(&self) -> &[T] {
        &self.payload
    }

    /// Destroys the node together with its payload
    pub(crate) fn release(mut self) {
        self.prev = None;
        self.next = None;
        log::trace!("released node with {} elements", self.payload.len());
    }

    /// Destroys the node and hands its payload to the caller
    pub(crate) fn into_payload(mut self) -> Box<[T]> {
        self.prev = None;
        self.next = None;
        self.payload
    }
}
