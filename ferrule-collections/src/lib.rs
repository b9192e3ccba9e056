//! Owned collections with absence-aware results.
//!
//! Two containers built on top of `ferrule-core`: an ordered [`Vector`] and
//! an unordered [`Map`]. Lookups that can miss return
//! [`Maybe`](ferrule_core::Maybe) and traversal goes through the
//! [`Cursor`](ferrule_core::Cursor) contract.
//!
//! # Quick Start
//!
//! ```
//! use ferrule_collections::{Map, Vector};
//! use ferrule_core::{Cursor, Maybe};
//!
//! let mut orders: Vector<u64> = Vector::from([10, 20, 30, 40]);
//! let taken = orders.drain(1..3);
//! assert_eq!(orders.as_slice(), &[10, 40]);
//! assert_eq!(taken.count(), 2);
//!
//! let mut owners: Map<u64, &str> = Map::new();
//! assert_eq!(owners.insert(10, "alice"), Maybe::None);
//! assert_eq!(owners.insert(10, "bob"), Maybe::Some("alice"));
//! ```
//!
//! # Ownership Transfers
//!
//! Several operations move elements between containers rather than
//! copying them:
//!
//! ```text
//! append(&mut donor)   donor ──────────▶ self        donor left empty
//! split_off(at)        self[at..] ─────▶ new Vector  self keeps [..at]
//! splice(range, r)     self[range] ────▶ new Vector  r takes its place
//! drain(range)         self[range] ────▶ Drain       detached on return
//! Map::drain()         every entry ────▶ Drain       map empty on return
//! ```
//!
//! A [`Drain`] owns what it yields. Dropping it early drops the remaining
//! elements; the source container is unaffected either way.
//!
//! # Data Structures
//!
//! | Structure | Ordering | Key Operations |
//! |-----------|----------|----------------|
//! | [`Vector`] | Index order | O(1) push/pop/swap_remove, O(n) insert/remove/splice |
//! | [`Map`] | Unordered | O(1) average insert/get/remove, entry upsert |
//!
//! # Panics
//!
//! Out-of-range indices and inverted ranges are programming errors. They
//! panic at the call site with the offending value and the valid bound, the
//! same way slice indexing does.

#![warn(missing_docs)]

pub mod cursor;
pub mod map;
pub mod vector;

pub use cursor::{Drain, IntoCursor, Iter};
pub use map::{Entry, Map, OccupiedEntry, VacantEntry};
pub use vector::Vector;
