// Copyright 2026 the range-algebra developers.

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! An ordered collection of ranges representing their set union.
//!
//! The collection may contain overlapping or mergeable neighbors;
//! [`RangeUnion::to_normalized`] reduces it to the minimal disjoint,
//! non-mergeable form. The container is generic over any [`RangeLike`]
//! implementor, so client wrapper types participate as well.

use crate::ops::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FromIterator;
use std::slice;
use std::vec;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeUnion<R> {
  ranges: Vec<R>,
  normalized: bool
}

impl<R> RangeUnion<R>
{
  /// A union of a single range, trivially normalized.
  pub fn from_range(range: R) -> RangeUnion<R> {
    RangeUnion { ranges: vec![range], normalized: true }
  }

  // Only for pairs known to be disjoint and non-mergeable.
  pub(crate) fn disjoint_pair(first: R, second: R) -> RangeUnion<R> {
    RangeUnion { ranges: vec![first, second], normalized: true }
  }

  pub fn range_count(&self) -> usize {
    self.ranges.len()
  }

  /// Whether no two contained ranges overlap or are mergeable neighbors.
  pub fn is_normalized(&self) -> bool {
    self.normalized
  }

  pub fn ranges(&self) -> &[R] {
    &self.ranges
  }

  pub fn iter(&self) -> slice::Iter<R> {
    self.ranges.iter()
  }
}

impl<R> Empty for RangeUnion<R>
{
  fn empty() -> RangeUnion<R> {
    RangeUnion { ranges: vec![], normalized: true }
  }
}

impl<R> From<Vec<R>> for RangeUnion<R>
{
  fn from(ranges: Vec<R>) -> RangeUnion<R> {
    let normalized = ranges.len() <= 1;
    RangeUnion { ranges, normalized }
  }
}

impl<R> FromIterator<R> for RangeUnion<R>
{
  fn from_iter<I>(iter: I) -> RangeUnion<R> where
   I: IntoIterator<Item = R>
  {
    RangeUnion::from(iter.into_iter().collect::<Vec<R>>())
  }
}

impl<R> IntoIterator for RangeUnion<R>
{
  type Item = R;
  type IntoIter = vec::IntoIter<R>;

  fn into_iter(self) -> vec::IntoIter<R> {
    self.ranges.into_iter()
  }
}

impl<'a, R> IntoIterator for &'a RangeUnion<R>
{
  type Item = &'a R;
  type IntoIter = slice::Iter<'a, R>;

  fn into_iter(self) -> slice::Iter<'a, R> {
    self.ranges.iter()
  }
}

// The normalization flag is a cache, not part of the value.
impl<R: PartialEq> PartialEq for RangeUnion<R>
{
  fn eq(&self, other: &RangeUnion<R>) -> bool {
    self.ranges == other.ranges
  }
}

impl<R: Eq> Eq for RangeUnion<R> {}

impl<R: RangeLike> RangeUnion<R>
{
  /// The union denotes an empty set: it holds no range, or only empty
  /// ranges.
  pub fn is_empty(&self) -> bool {
    self.ranges.iter().all(|r| r.is_empty())
  }
}

impl<R> RangeUnion<R> where
 R: RangeLike,
 R::Item: Ord + Clone
{
  /// The normalization algorithm. Sorts the ranges by their left limit,
  /// then folds left to right: each range is united with the top of a
  /// stack, replacing it on a collapse and being pushed otherwise.
  /// O(n log n).
  pub fn merge(mut ranges: Vec<R>) -> Vec<R> {
    ranges.sort_by(|a, b| a.left().cmp(&b.left()));
    let mut stack: Vec<R> = Vec::with_capacity(ranges.len());
    for range in ranges {
      match stack.pop() {
        None => stack.push(range),
        Some(top) => stack.extend(top.union(&range))
      }
    }
    stack
  }

  pub fn to_normalized(&self) -> RangeUnion<R> {
    if self.normalized {
      return self.clone();
    }
    RangeUnion { ranges: RangeUnion::merge(self.ranges.clone()), normalized: true }
  }
}

impl<R: RangeLike> Contains<<R as Collection>::Item> for RangeUnion<R>
{
  fn contains(&self, value: &R::Item) -> bool {
    self.ranges.iter().any(|r| r.contains(value))
  }
}

impl<R: RangeLike> Overlap for RangeUnion<R>
{
  fn overlap(&self, other: &RangeUnion<R>) -> bool {
    self.ranges.iter().any(|a| other.ranges.iter().any(|b| a.overlap(b)))
  }
}

impl<R: RangeLike> Intersection for RangeUnion<R>
{
  type Output = RangeUnion<R>;

  fn intersection(&self, other: &RangeUnion<R>) -> RangeUnion<R> {
    let mut result = Vec::new();
    for a in &self.ranges {
      for b in &other.ranges {
        let piece = a.intersection(b);
        if !piece.is_empty() {
          result.push(piece);
        }
      }
    }
    RangeUnion::from(result)
  }
}

impl<R: fmt::Display> fmt::Display for RangeUnion<R>
{
  fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
    write!(fmt, "{{")?;
    for (i, range) in self.ranges.iter().enumerate() {
      if i > 0 {
        write!(fmt, " ∪ ")?;
      }
      write!(fmt, "{}", range)?;
    }
    write!(fmt, "}}")
  }
}
