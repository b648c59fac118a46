// Copyright 2026 the range-algebra developers.

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Generic operations on ranges and range collections.
//!
//! Each set operation lives in its own trait so client types can implement
//! exactly the capabilities they support. [`RangeLike`] bundles the full
//! surface expected from an interval type; implementing it is what makes a
//! wrapper type usable inside a [`RangeUnion`](crate::union::RangeUnion).

use crate::limit::DirectedLimit;
use crate::union::RangeUnion;

/// Kind trait carrying the element type of a range or collection.
pub trait Collection {
  type Item;
}

// Basic set operations

pub trait Intersection<RHS = Self> {
  type Output;
  fn intersection(&self, rhs: &RHS) -> Self::Output;
}

pub trait Union<RHS = Self> {
  type Output;
  fn union(&self, rhs: &RHS) -> Self::Output;
}

pub trait Difference<RHS = Self> {
  type Output;
  fn difference(&self, rhs: &RHS) -> Self::Output;
}

pub trait Complement {
  type Output;
  fn complement(&self) -> Self::Output;
}

// Membership

pub trait Contains<Item> {
  fn contains(&self, value: &Item) -> bool;
}

pub trait Subset<RHS = Self> {
  fn is_subset(&self, rhs: &RHS) -> bool;
}

pub trait ProperSubset<RHS = Self> {
  fn is_proper_subset(&self, rhs: &RHS) -> bool;
}

pub trait Superset<RHS = Self> {
  fn is_superset(&self, rhs: &RHS) -> bool;
}

pub trait ProperSuperset<RHS = Self> {
  fn is_proper_superset(&self, rhs: &RHS) -> bool;
}

pub trait Overlap<RHS = Self> {
  fn overlap(&self, rhs: &RHS) -> bool;
}

// Construction

pub trait Empty {
  fn empty() -> Self;
}

pub trait Whole {
  fn whole() -> Self;
}

pub trait Singleton<Item> {
  fn singleton(value: Item) -> Self;
}

// Bound access

pub trait Bounded: Collection {
  fn left(&self) -> DirectedLimit<Self::Item>;
  fn right(&self) -> DirectedLimit<Self::Item>;
}

/// The full capability of an interval value.
///
/// [`Range`](crate::range::Range) implements it, and so can any client
/// wrapper that wants range behavior over its own representation.
pub trait RangeLike:
  Collection
  + Clone
  + PartialEq
  + Contains<<Self as Collection>::Item>
  + Overlap
  + Subset
  + ProperSubset
  + Superset
  + ProperSuperset
  + Intersection<Output = Self>
  + Union<Output = RangeUnion<Self>>
  + Difference<Output = RangeUnion<Self>>
  + Complement<Output = RangeUnion<Self>>
  + Bounded
  + Empty
  + Whole
{
  fn is_empty(&self) -> bool;
  fn is_infinite(&self) -> bool;
}
