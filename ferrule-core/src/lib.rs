//! Optional and fallible value algebra with a pull-based cursor contract.
//!
//! This crate provides the two variant containers every other ferrule crate
//! speaks in, plus the iteration contract they expose:
//!
//! - [`Maybe<T>`] - a value or nothing
//! - [`Outcome<T, E>`] - a success value or a failure value
//! - [`Cursor`] - "produce the next element or signal end-of-sequence"
//!
//! # Why not `Option` and `Result`?
//!
//! The types mirror the std ones closely, but are named so they can live
//! next to the prelude without shadowing it. Both convert to and from their
//! std counterparts with `From`/`Into`, so crossing the boundary is free:
//!
//! ```
//! use ferrule_core::{Maybe, Outcome};
//!
//! let m: Maybe<u32> = Some(7).into();
//! assert_eq!(m, Maybe::Some(7));
//!
//! let r: Result<u32, std::fmt::Error> = Outcome::Ok(7).into();
//! assert_eq!(r, Ok(7));
//! ```
//!
//! # Free-function combinators
//!
//! Transformations that change the payload type (`map`, `and_then`, `or`,
//! ...) are free functions in the [`maybe`] and [`outcome`] modules rather
//! than methods. Each one consumes its input:
//!
//! ```
//! use ferrule_core::{Outcome, outcome};
//! use std::num::ParseIntError;
//!
//! fn parse(s: &str) -> Outcome<i64, ParseIntError> {
//!     s.parse::<i64>().into()
//! }
//!
//! let doubled = outcome::and_then(parse("21"), |n| Outcome::Ok(n * 2));
//! assert_eq!(doubled.unwrap(), 42);
//!
//! let fallback = outcome::map_or(parse("nope"), -1, |n| n * 2);
//! assert_eq!(fallback, -1);
//! ```
//!
//! # Cursors
//!
//! A [`Cursor`] is a single-pass, fused pull interface: once it returns
//! [`Maybe::None`] it keeps returning `None`. [`Once`] is the zero-or-one
//! element cursor behind [`Outcome::iter`]:
//!
//! ```
//! use ferrule_core::{Cursor, Maybe, Outcome};
//!
//! let ok: Outcome<u8, std::fmt::Error> = Outcome::Ok(3);
//! let mut cursor = ok.into_cursor();
//!
//! assert_eq!(cursor.next(), Maybe::Some(3));
//! assert_eq!(cursor.next(), Maybe::None);
//! assert_eq!(cursor.next(), Maybe::None);
//! ```
//!
//! # Fatal failures
//!
//! `expect`/`unwrap` on the wrong variant panics. These are precondition
//! violations, not control flow; use `unwrap_or`, `unwrap_or_else`,
//! `unwrap_or_default` or the combinators when absence is expected.

#![warn(missing_docs)]

pub mod cursor;
pub mod maybe;
pub mod outcome;

pub use cursor::{Cursor, FromStd, Once, StdIter, from_std};
pub use maybe::Maybe;
pub use outcome::Outcome;
