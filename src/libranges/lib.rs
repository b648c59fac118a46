// Copyright 2026 the range-algebra developers.

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Exact set algebra over ranges of any totally ordered domain.
//!
//! A [`Bound`](bound::Bound) is a single boundary, either a value with an
//! openness or infinite. A [`DirectedLimit`](limit::DirectedLimit) gives a
//! bound a side: a left limit is a lower bound, a right limit an upper
//! bound. Two directed limits make a [`Range`](range::Range), many ranges
//! make a [`RangeUnion`](union::RangeUnion) that can be normalized to the
//! minimal disjoint form. The [`parser`] module converts between ranges
//! and the bracket notation, e.g. `(-oo;0]` or `[1;2)`.
//!
//! All types are immutable values. Every operation is pure and safe to
//! call concurrently. The set operations are exposed both as inherent
//! methods and through the per-operation traits of [`ops`], so client
//! wrapper types can take part in the algebra by implementing
//! [`RangeLike`](ops::RangeLike).
//!
//! # Examples
//!
//! ```
//! use ranges::*;
//!
//! let a = Range::closed(1, 3).unwrap();
//! let b = Range::closed(2, 5).unwrap();
//! assert!(a.overlap(&b));
//! assert_eq!(Range::closed(2, 3).unwrap(), a.intersection(&b));
//! assert_eq!(1, a.union(&b).range_count());
//!
//! let parser = RangeParser::<FromStrParser<i32>>::new();
//! let parsed = parser.parse("(-oo;0]").unwrap();
//! assert!(parsed.contains(&-10) && !parsed.contains(&1));
//! ```

pub mod bound;
pub mod limit;
pub mod ops;
pub mod parser;
pub mod range;
pub mod union;

pub use crate::bound::{Bound, Openness};
pub use crate::limit::{narrower, wider, DirectedLimit, Side};
pub use crate::ops::*;
pub use crate::parser::{
  FromStrParser, ParseRangeError, RadixParser, RangeParse, RangeParser,
  ScalarParseError, ScalarParser, DEFAULT_SEPARATOR
};
pub use crate::range::{Range, RangeError};
pub use crate::union::RangeUnion;
