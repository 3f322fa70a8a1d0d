//! An index-addressable doubly linked list.
//!
//! Each element is an owned copy of a caller-supplied slice (`Box<[T]>`,
//! bytes by default). Nodes are kept in a slab arena and linked by key, so
//! splicing and unlinking stay O(1) while lookups walk from whichever end of
//! the chain is nearer.
//!
//! ```
//! use llist::List;
//!
//! let mut list = List::new();
//! list.add(b"A").unwrap();
//! list.add(b"B").unwrap();
//! list.add(b"C").unwrap();
//! assert_eq!(list.get(1), Some(&b"B"[..]));
//!
//! assert_eq!(list.del(0).as_deref(), Some(&b"A"[..]));
//! assert_eq!(list.get(0), Some(&b"B"[..]));
//! assert_eq!(list.len(), 2);
//! ```
//!
//! Indices past the end never fail: `get` and `del` act on the last element,
//! and `insert` appends.

pub mod error;
pub mod list;
mod node;

pub use error::{Error, Result};
pub use list::List;
