//! Indexed Collections
//!
//! This crate provides two small, independent in-memory data structures:
//!
//! - **Indexed min-heap**: a binary min-heap augmented with a value-to-position
//!   map, giving O(log n) removal of an *arbitrary* value (not just the
//!   minimum) without a linear scan, plus O(1) membership tests.
//! - **Prefix trie**: a 26-ary prefix tree over lowercase ASCII letters with
//!   insertion, exact lookup, prefix lookup, soft deletion, and sorted
//!   prefix-based word enumeration.
//!
//! Both structures are single-threaded and perform no I/O; neither provides
//! internal locking.
//!
//! # Example
//!
//! ```rust
//! use indexed_collections::{IndexedMinHeap, Trie};
//!
//! let mut heap = IndexedMinHeap::new();
//! heap.insert(5);
//! heap.insert(3);
//! heap.insert(8);
//! assert_eq!(heap.peek_min(), Some(&3));
//! heap.remove(&3);
//! assert_eq!(heap.peek_min(), Some(&5));
//!
//! let mut trie = Trie::new();
//! trie.insert("apple").unwrap();
//! trie.insert("app").unwrap();
//! assert!(trie.contains("app"));
//! assert!(trie.starts_with("appl"));
//! assert_eq!(trie.words_with_prefix("app"), vec!["app", "apple"]);
//! ```

pub mod indexed_heap;
pub mod trie;

// Re-export the main types for convenience
pub use indexed_heap::IndexedMinHeap;
pub use trie::{Trie, TrieError};
