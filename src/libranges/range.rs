// Copyright 2026 the range-algebra developers.

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! An interval over a totally ordered domain, possibly open, half-open or
//! unbounded on either side.
//!
//! A `Range` is built from a left and a right [`DirectedLimit`] and is
//! validated at construction: the limits must have the proper sides and
//! must intersect. The empty range is a separate sentinel. All derived
//! operations (`intersection`, `union`, complements) return new values;
//! nothing is ever mutated.

use crate::bound::Bound;
use crate::limit::{narrower, wider, DirectedLimit, Side};
use crate::ops::*;
use crate::union::RangeUnion;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;

/// Rejected range construction.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum RangeError {
  #[error("the left limit of a range cannot be an upper bound")]
  LeftSideIsRight,
  #[error("the right limit of a range cannot be a lower bound")]
  RightSideIsLeft,
  #[error("the left and right limits do not intersect")]
  DisjointLimits
}

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
enum Inner<T> {
  Empty,
  NonEmpty { left: DirectedLimit<T>, right: DirectedLimit<T> }
}

/// An interval delimited by two directed limits, or the empty sentinel.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize)]
#[serde(transparent)]
pub struct Range<T> {
  inner: Inner<T>
}

// Deserialization goes through `new` so a decoded range upholds the same
// construction invariant as any other.
impl<'de, T> Deserialize<'de> for Range<T> where
 T: Deserialize<'de> + Ord
{
  fn deserialize<D>(deserializer: D) -> Result<Range<T>, D::Error> where
   D: Deserializer<'de>
  {
    match Inner::deserialize(deserializer)? {
      Inner::Empty => Ok(Range::empty()),
      Inner::NonEmpty { left, right } =>
        Range::new(left, right).map_err(serde::de::Error::custom)
    }
  }
}

impl<T: Ord> Range<T>
{
  /// Builds a range from its two limits. Fails if `left` is an upper
  /// bound, `right` is a lower bound, or the limits do not intersect
  /// (which covers undefined limits).
  pub fn new(left: DirectedLimit<T>, right: DirectedLimit<T>) -> Result<Range<T>, RangeError> {
    if left.side() == Side::Right {
      return Err(RangeError::LeftSideIsRight);
    }
    if right.side() == Side::Left {
      return Err(RangeError::RightSideIsLeft);
    }
    if !left.intersects(&right) {
      return Err(RangeError::DisjointLimits);
    }
    Ok(Range::from_limits(left, right))
  }

  /// Builds a range from two scalar bounds.
  pub fn bounded(left: Bound<T>, right: Bound<T>) -> Result<Range<T>, RangeError> {
    Range::new(DirectedLimit::left(left), DirectedLimit::right(right))
  }

  pub fn open(left: T, right: T) -> Result<Range<T>, RangeError> {
    Range::bounded(Bound::open(left), Bound::open(right))
  }

  pub fn closed(left: T, right: T) -> Result<Range<T>, RangeError> {
    Range::bounded(Bound::closed(left), Bound::closed(right))
  }

  // Limits already validated by the caller.
  fn from_limits(left: DirectedLimit<T>, right: DirectedLimit<T>) -> Range<T> {
    debug_assert!(left.intersects(&right), "range limits must intersect");
    Range { inner: Inner::NonEmpty { left, right } }
  }
}

impl<T> Range<T>
{
  pub fn left_value(&self) -> Option<&T> {
    match &self.inner {
      Inner::NonEmpty { left, .. } => left.value(),
      Inner::Empty => None
    }
  }

  pub fn right_value(&self) -> Option<&T> {
    match &self.inner {
      Inner::NonEmpty { right, .. } => right.value(),
      Inner::Empty => None
    }
  }

  fn limits(&self) -> Option<(&DirectedLimit<T>, &DirectedLimit<T>)> {
    match &self.inner {
      Inner::NonEmpty { left, right } => Some((left, right)),
      Inner::Empty => None
    }
  }

  fn empty_inner(&self) -> bool {
    matches!(self.inner, Inner::Empty)
  }

  fn whole_inner(&self) -> bool {
    match &self.inner {
      Inner::NonEmpty { left, right } => left.is_infinite() && right.is_infinite(),
      Inner::Empty => false
    }
  }

  /// Applies `f` to both limit values. `f` must preserve the ordering of
  /// the domain. The empty range maps to the empty range.
  pub fn map<U, F>(self, mut f: F) -> Range<U> where
   F: FnMut(T) -> U
  {
    match self.inner {
      Inner::Empty => Range { inner: Inner::Empty },
      Inner::NonEmpty { left, right } => Range {
        inner: Inner::NonEmpty { left: left.map(&mut f), right: right.map(&mut f) }
      }
    }
  }

  /// Shifts both limit values with an order-preserving transform.
  pub fn translate<F>(self, mut f: F) -> Range<T> where
   F: FnMut(T) -> T
  {
    match self.inner {
      Inner::Empty => self,
      Inner::NonEmpty { left, right } => Range {
        inner: Inner::NonEmpty { left: left.translate(&mut f), right: right.translate(&mut f) }
      }
    }
  }
}

impl<T> Collection for Range<T> {
  type Item = T;
}

impl<T> Empty for Range<T>
{
  fn empty() -> Range<T> {
    Range { inner: Inner::Empty }
  }
}

impl<T> Whole for Range<T>
{
  fn whole() -> Range<T> {
    Range {
      inner: Inner::NonEmpty {
        left: DirectedLimit::left_infinity(),
        right: DirectedLimit::right_infinity()
      }
    }
  }
}

impl<T: Ord + Clone> Singleton<T> for Range<T>
{
  fn singleton(value: T) -> Range<T> {
    Range::from_limits(
      DirectedLimit::left(Bound::closed(value.clone())),
      DirectedLimit::right(Bound::closed(value))
    )
  }
}

impl<T: Clone> Bounded for Range<T>
{
  fn left(&self) -> DirectedLimit<T> {
    match &self.inner {
      Inner::NonEmpty { left, .. } => left.clone(),
      Inner::Empty => DirectedLimit::undefined()
    }
  }

  fn right(&self) -> DirectedLimit<T> {
    match &self.inner {
      Inner::NonEmpty { right, .. } => right.clone(),
      Inner::Empty => DirectedLimit::undefined()
    }
  }
}

impl<T: Ord> Contains<T> for Range<T>
{
  fn contains(&self, value: &T) -> bool {
    match &self.inner {
      Inner::Empty => false,
      Inner::NonEmpty { left, right } => left.contains(value) && right.contains(value)
    }
  }
}

impl<T: Ord> Overlap for Range<T>
{
  fn overlap(&self, other: &Range<T>) -> bool {
    match (self.limits(), other.limits()) {
      (Some((sl, sr)), Some((ol, or_))) => {
        // The intersection test runs on the tightest pair of bounds.
        narrower(sl, ol).intersects(narrower(sr, or_))
      }
      _ => false
    }
  }
}

impl<T: Ord> Subset for Range<T>
{
  fn is_subset(&self, other: &Range<T>) -> bool {
    if self == other {
      return true;
    }
    match (self.limits(), other.limits()) {
      (None, _) => true,
      (_, None) => false,
      (Some((sl, sr)), Some((ol, or_))) => sl.is_subset_of(ol) && sr.is_subset_of(or_)
    }
  }
}

impl<T: Ord> ProperSubset for Range<T>
{
  fn is_proper_subset(&self, other: &Range<T>) -> bool {
    self != other && self.is_subset(other)
  }
}

impl<T: Ord> Superset for Range<T>
{
  fn is_superset(&self, other: &Range<T>) -> bool {
    other.is_subset(self)
  }
}

impl<T: Ord> ProperSuperset for Range<T>
{
  fn is_proper_superset(&self, other: &Range<T>) -> bool {
    self != other && other.is_subset(self)
  }
}

impl<T: Ord + Clone> Intersection for Range<T>
{
  type Output = Range<T>;

  fn intersection(&self, other: &Range<T>) -> Range<T> {
    if self.empty_inner() || other.empty_inner() {
      return Range::empty();
    }
    if self.whole_inner() {
      return other.clone();
    }
    if other.whole_inner() {
      return self.clone();
    }
    match (self.limits(), other.limits()) {
      (Some((sl, sr)), Some((ol, or_))) => {
        let left = narrower(sl, ol);
        let right = narrower(sr, or_);
        if left.intersects(right) {
          Range::from_limits(left.clone(), right.clone())
        } else {
          Range::empty()
        }
      }
      _ => unreachable!("empty operands are handled above")
    }
  }
}

impl<T: Ord + Clone> Union for Range<T>
{
  type Output = RangeUnion<Range<T>>;

  /// Set union of two ranges: a single merged range when they intersect or
  /// touch on a closed point, the two disjoint operands otherwise.
  fn union(&self, other: &Range<T>) -> RangeUnion<Range<T>> {
    let (sl, sr) = match self.limits() {
      Some(limits) => limits,
      None => return RangeUnion::from_range(other.clone())
    };
    let (ol, or_) = match other.limits() {
      Some(limits) => limits,
      None => return RangeUnion::from_range(self.clone())
    };
    let tight_left = narrower(sl, ol);
    let tight_right = narrower(sr, or_);
    if tight_left.is_complement_of(tight_right) || tight_left.intersects(tight_right) {
      let merged = Range::from_limits(wider(sl, ol).clone(), wider(sr, or_).clone());
      RangeUnion::from_range(merged)
    } else {
      RangeUnion::disjoint_pair(self.clone(), other.clone())
    }
  }
}

impl<T: Ord + Clone> Complement for Range<T>
{
  type Output = RangeUnion<Range<T>>;

  /// The absolute complement: everything outside this range.
  fn complement(&self) -> RangeUnion<Range<T>> {
    let (left, right) = match self.limits() {
      Some(limits) => limits,
      None => return RangeUnion::from_range(Range::whole())
    };
    let mut pieces = Vec::with_capacity(2);
    if !left.is_infinite() {
      pieces.push(Range::from_limits(DirectedLimit::left_infinity(), left.clone().complement()));
    }
    if !right.is_infinite() {
      pieces.push(Range::from_limits(right.clone().complement(), DirectedLimit::right_infinity()));
    }
    RangeUnion::from(pieces)
  }
}

impl<T: Ord + Clone> Range<T>
{
  /// Computes `other` minus `self`: the part of `other` not covered by
  /// this range, as zero, one or two pieces.
  pub fn complement_in(&self, other: &Range<T>) -> RangeUnion<Range<T>> {
    let (ol, or_) = match other.limits() {
      Some(limits) => limits,
      None => return RangeUnion::empty()
    };
    let (sl, sr) = match self.limits() {
      Some(limits) => limits,
      None => return RangeUnion::from_range(other.clone())
    };
    if self == other {
      return RangeUnion::empty();
    }
    if !self.overlap(other) {
      return RangeUnion::from_range(other.clone());
    }
    let mut pieces = Vec::with_capacity(2);
    if sl.is_proper_subset_of(ol) {
      pieces.push(Range::from_limits(ol.clone(), sl.clone().complement()));
    }
    if sr.is_proper_subset_of(or_) {
      pieces.push(Range::from_limits(sr.clone().complement(), or_.clone()));
    }
    RangeUnion::from(pieces)
  }
}

impl<T: Ord + Clone> Difference for Range<T>
{
  type Output = RangeUnion<Range<T>>;

  /// `self` minus `rhs`.
  fn difference(&self, rhs: &Range<T>) -> RangeUnion<Range<T>> {
    rhs.complement_in(self)
  }
}

impl<T: Ord + Clone> RangeLike for Range<T>
{
  fn is_empty(&self) -> bool {
    self.empty_inner()
  }

  fn is_infinite(&self) -> bool {
    self.whole_inner()
  }
}

impl<T: fmt::Display> fmt::Display for Range<T>
{
  fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
    match &self.inner {
      Inner::Empty => write!(fmt, "empty"),
      Inner::NonEmpty { left, right } => write!(fmt, "{};{}", left, right)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ops::*;

  fn closed(l: i32, r: i32) -> Range<i32> {
    Range::closed(l, r).unwrap()
  }

  fn open(l: i32, r: i32) -> Range<i32> {
    Range::open(l, r).unwrap()
  }

  fn bounded(l: Bound<i32>, r: Bound<i32>) -> Range<i32> {
    Range::bounded(l, r).unwrap()
  }

  #[test]
  fn construction_errors() {
    assert_eq!(
      Err(RangeError::LeftSideIsRight),
      Range::new(DirectedLimit::right(Bound::open(1)), DirectedLimit::right(Bound::open(2))));
    assert_eq!(
      Err(RangeError::RightSideIsLeft),
      Range::new(DirectedLimit::left(Bound::open(1)), DirectedLimit::left(Bound::open(2))));
    assert_eq!(Err(RangeError::DisjointLimits), Range::open(2, 1));
    assert_eq!(Err(RangeError::DisjointLimits), Range::open(1, 1));
    assert_eq!(
      Err(RangeError::DisjointLimits),
      Range::bounded(Bound::open(1), Bound::closed(1)));
    assert_eq!(
      Err(RangeError::DisjointLimits),
      Range::new(DirectedLimit::undefined(), DirectedLimit::right(Bound::open(1))));
    assert!(Range::closed(1, 1).is_ok());
    assert!(Range::open(1, 2).is_ok());
  }

  #[test]
  fn contains() {
    let r = closed(1, 3);
    assert!(r.contains(&1) && r.contains(&2) && r.contains(&3));
    assert!(!r.contains(&0) && !r.contains(&4));

    let r = open(1, 3);
    assert!(!r.contains(&1) && r.contains(&2) && !r.contains(&3));

    let r = Range::whole();
    assert!(r.contains(&i32::MIN) && r.contains(&0) && r.contains(&i32::MAX));

    assert!(!Range::<i32>::empty().contains(&0));
  }

  #[test]
  fn reflexive_subset() {
    for r in vec![closed(1, 3), open(1, 3), Range::whole(), Range::empty(), Range::singleton(5)] {
      assert!(r.is_subset(&r));
      assert!(r.is_superset(&r));
      assert!(!r.is_proper_subset(&r));
      assert!(!r.is_proper_superset(&r));
    }
  }

  #[test]
  fn empty_and_whole_subsets() {
    for r in vec![closed(1, 3), open(-5, 5), Range::singleton(0), Range::whole()] {
      assert!(Range::empty().is_subset(&r));
      assert!(Range::whole().is_superset(&r));
      assert!(r.is_superset(&Range::empty()));
    }
    assert!(Range::<i32>::empty().is_proper_subset(&closed(1, 3)));
    assert!(!Range::<i32>::empty().is_proper_subset(&Range::empty()));
    assert!(Range::<i32>::whole().is_proper_superset(&closed(1, 3)));
    assert!(!Range::<i32>::whole().is_proper_superset(&Range::whole()));
  }

  #[test]
  fn nested_subsets() {
    assert!(closed(2, 3).is_subset(&closed(1, 4)));
    assert!(open(1, 4).is_subset(&closed(1, 4)));
    assert!(open(1, 4).is_proper_subset(&closed(1, 4)));
    assert!(!closed(1, 4).is_subset(&open(1, 4)));
    assert!(closed(1, 4).is_proper_superset(&open(1, 4)));
    assert!(!closed(1, 4).is_subset(&closed(2, 8)));
    assert!(!closed(2, 8).is_subset(&closed(1, 4)));
  }

  #[test]
  fn overlap_cases() {
    let cases = vec![
      (1, closed(1, 3), closed(3, 5), true),
      (2, open(1, 3), open(3, 5), false),
      (3, closed(1, 3), open(3, 5), false),
      (4, open(1, 3), closed(3, 5), false),
      (5, closed(1, 5), closed(2, 3), true),
      (6, closed(1, 2), closed(4, 5), false),
      (7, Range::whole(), closed(1, 2), true),
      (8, Range::empty(), closed(1, 2), false),
      (9, Range::empty(), Range::empty(), false),
    ];

    for (id, a, b, expected) in cases {
      assert_eq!(expected, a.overlap(&b), "test #{} of overlap", id);
      assert_eq!(expected, b.overlap(&a), "test #{} of overlap (swapped)", id);
    }
  }

  #[test]
  fn intersection_cases() {
    let cases = vec![
      (1, closed(1, 5), closed(3, 8), closed(3, 5)),
      (2, closed(1, 5), closed(5, 8), Range::singleton(5)),
      (3, open(1, 5), open(3, 8), open(3, 5)),
      (4, closed(1, 2), closed(4, 5), Range::empty()),
      (5, Range::whole(), closed(1, 2), closed(1, 2)),
      (6, Range::empty(), closed(1, 2), Range::empty()),
      (7, closed(1, 8), open(2, 3), open(2, 3)),
      (8, open(1, 2), open(2, 3), Range::empty()),
    ];

    for (id, a, b, expected) in cases {
      assert_eq!(expected, a.intersection(&b), "test #{} of intersection", id);
      assert_eq!(expected, b.intersection(&a), "test #{} of intersection (swapped)", id);
    }
  }

  #[test]
  fn union_cases() {
    let cases = vec![
      (1, closed(1, 3), closed(2, 3), vec![closed(1, 3)]),
      (2, bounded(Bound::open(1), Bound::closed(2)), bounded(Bound::closed(2), Bound::open(3)),
        vec![open(1, 3)]),
      (3, open(1, 2), open(2, 3), vec![open(1, 2), open(2, 3)]),
      (4, closed(1, 2), closed(2, 3), vec![closed(1, 3)]),
      (5, closed(1, 2), closed(4, 5), vec![closed(1, 2), closed(4, 5)]),
      (6, Range::empty(), closed(1, 2), vec![closed(1, 2)]),
      (7, Range::empty(), Range::empty(), vec![Range::empty()]),
      (8, closed(1, 5), closed(2, 3), vec![closed(1, 5)]),
      (9, Range::whole(), closed(1, 2), vec![Range::whole()]),
      (10, bounded(Bound::open(1), Bound::open(2)), bounded(Bound::closed(2), Bound::open(3)),
        vec![open(1, 3)]),
    ];

    for (id, a, b, expected) in cases {
      let result: Vec<_> = a.union(&b).into_iter().collect();
      assert_eq!(expected, result, "test #{} of union", id);
    }
  }

  #[test]
  fn absolute_complement() {
    let result: Vec<_> = Range::<i32>::empty().complement().into_iter().collect();
    assert_eq!(vec![Range::whole()], result);

    let result: Vec<_> = Range::<i32>::whole().complement().into_iter().collect();
    assert!(result.is_empty());

    let result: Vec<_> = closed(1, 3).complement().into_iter().collect();
    assert_eq!(vec![
      Range::new(DirectedLimit::left_infinity(), DirectedLimit::right(Bound::open(1))).unwrap(),
      Range::new(DirectedLimit::left(Bound::open(3)), DirectedLimit::right_infinity()).unwrap(),
    ], result);

    // (-∞; 0] leaves a single piece on the right.
    let left_ray = Range::new(DirectedLimit::left_infinity(), DirectedLimit::right(Bound::closed(0))).unwrap();
    let result: Vec<_> = left_ray.complement().into_iter().collect();
    assert_eq!(vec![
      Range::new(DirectedLimit::left(Bound::open(0)), DirectedLimit::right_infinity()).unwrap(),
    ], result);
  }

  #[test]
  fn complement_in_cases() {
    let left_piece = bounded(Bound::closed(0), Bound::open(2));
    let right_piece = bounded(Bound::open(3), Bound::closed(10));
    let cases = vec![
      (1, closed(2, 3), closed(0, 10), vec![left_piece, right_piece]),
      (2, closed(0, 3), closed(0, 10), vec![right_piece]),
      (3, closed(1, 2), Range::empty(), vec![]),
      (4, Range::empty(), closed(1, 2), vec![closed(1, 2)]),
      (5, closed(1, 2), closed(1, 2), vec![]),
      (6, closed(1, 2), closed(5, 8), vec![closed(5, 8)]),
      (7, closed(0, 10), closed(2, 3), vec![]),
      (8, closed(5, 15), closed(0, 10), vec![bounded(Bound::closed(0), Bound::open(5))]),
      (9, Range::whole(), closed(0, 10), vec![]),
      (10, closed(0, 10), Range::whole(), vec![
        Range::new(DirectedLimit::left_infinity(), DirectedLimit::right(Bound::open(0))).unwrap(),
        Range::new(DirectedLimit::left(Bound::open(10)), DirectedLimit::right_infinity()).unwrap(),
      ]),
    ];

    for (id, subtracted, universe, expected) in cases {
      let result: Vec<_> = subtracted.complement_in(&universe).into_iter().collect();
      assert_eq!(expected, result, "test #{} of complement_in", id);
    }
  }

  #[test]
  fn difference_is_flipped_complement_in() {
    let a = closed(0, 10);
    let b = closed(2, 3);
    assert_eq!(b.complement_in(&a), a.difference(&b));
  }

  #[test]
  fn map_and_translate() {
    assert_eq!(closed(2, 6), closed(1, 3).map(|v| v * 2));
    assert_eq!(open(11, 13), open(1, 3).translate(|v| v + 10));
    assert_eq!(Range::<i32>::empty(), Range::<i32>::empty().map(|v| v * 2));
    assert_eq!(Range::<i32>::whole(), Range::<i32>::whole().translate(|v| v + 1));
  }

  #[test]
  fn values_and_sentinels() {
    let r = Range::singleton(5);
    assert_eq!(Some(&5), r.left_value());
    assert_eq!(Some(&5), r.right_value());
    assert!(r.contains(&5) && !r.contains(&4));

    assert!(Range::<i32>::empty().is_empty());
    assert!(!Range::<i32>::empty().is_infinite());
    assert!(Range::<i32>::whole().is_infinite());
    assert!(!Range::<i32>::whole().is_empty());
    assert!(!closed(1, 2).is_empty() && !closed(1, 2).is_infinite());

    assert_eq!(None, Range::<i32>::empty().left_value());
    assert_eq!(None, Range::<i32>::whole().left_value());
    assert_eq!(Some(&1), closed(1, 2).left_value());
  }

  #[test]
  fn display() {
    assert_eq!("[1;3]", closed(1, 3).to_string());
    assert_eq!("(1;3)", open(1, 3).to_string());
    assert_eq!("(1;3]", bounded(Bound::open(1), Bound::closed(3)).to_string());
    assert_eq!("(-∞;+∞)", Range::<i32>::whole().to_string());
    assert_eq!("empty", Range::<i32>::empty().to_string());
  }

  #[test]
  fn serde_round_trip() {
    let samples = vec![
      closed(1, 3),
      Range::empty(),
      Range::whole(),
      bounded(Bound::open(0), Bound::closed(9)),
    ];
    for r in samples {
      let json = serde_json::to_string(&r).unwrap();
      assert_eq!(r, serde_json::from_str::<Range<i32>>(&json).unwrap());
    }
  }

  #[test]
  fn deserialize_rejects_invalid_limits() {
    let json = serde_json::to_string(&closed(1, 2)).unwrap();
    assert_eq!(closed(1, 2), serde_json::from_str::<Range<i32>>(&json).unwrap());

    // [9;2] would contain nothing; decoding must reject it like `new` does.
    let disjoint = json.replace("\"value\":1", "\"value\":9");
    assert!(serde_json::from_str::<Range<i32>>(&disjoint).is_err());

    // Two upper bounds are not a range either.
    let wrong_side = json.replace("\"side\":\"Left\"", "\"side\":\"Right\"");
    assert!(serde_json::from_str::<Range<i32>>(&wrong_side).is_err());
  }
}
