// Copyright 2026 the range-algebra developers.

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A bound annotated with a side, the atomic unit of the range algebra.
//!
//! A `Left` limit is a lower bound: the values satisfying it lie to its
//! right. A `Right` limit is an upper bound. `Undefined` is a sentinel and
//! never a valid operand of the containment or intersection queries.

use crate::bound::{Bound, Openness};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// The side of a directed limit.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
pub enum Side {
  Undefined,
  Left,
  Right
}

impl Default for Side {
  fn default() -> Side {
    Side::Undefined
  }
}

/// A directed limit: a bound plus the side it is used on.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct DirectedLimit<T> {
  bound: Bound<T>,
  side: Side
}

impl<T> Default for DirectedLimit<T> {
  fn default() -> DirectedLimit<T> {
    DirectedLimit::undefined()
  }
}

impl<T> DirectedLimit<T>
{
  pub fn undefined() -> DirectedLimit<T> {
    DirectedLimit { bound: Bound::Infinite, side: Side::Undefined }
  }

  pub fn left(bound: Bound<T>) -> DirectedLimit<T> {
    DirectedLimit { bound, side: Side::Left }
  }

  pub fn right(bound: Bound<T>) -> DirectedLimit<T> {
    DirectedLimit { bound, side: Side::Right }
  }

  pub fn left_infinity() -> DirectedLimit<T> {
    DirectedLimit::left(Bound::Infinite)
  }

  pub fn right_infinity() -> DirectedLimit<T> {
    DirectedLimit::right(Bound::Infinite)
  }

  pub fn is_undefined(&self) -> bool {
    self.side == Side::Undefined
  }

  /// A defined limit with an infinite bound.
  pub fn is_infinite(&self) -> bool {
    !self.is_undefined() && self.bound.is_infinite()
  }

  pub fn side(&self) -> Side {
    self.side
  }

  pub fn bound(&self) -> &Bound<T> {
    &self.bound
  }

  pub fn value(&self) -> Option<&T> {
    self.bound.value()
  }

  pub fn openness(&self) -> Openness {
    self.bound.openness()
  }

  pub fn map<U, F>(self, f: F) -> DirectedLimit<U> where
   F: FnOnce(T) -> U
  {
    DirectedLimit { bound: self.bound.map(f), side: self.side }
  }

  pub fn translate<F>(self, f: F) -> DirectedLimit<T> where
   F: FnOnce(T) -> T
  {
    DirectedLimit { bound: self.bound.translate(f), side: self.side }
  }

  /// Flips both the openness of the bound and the side. An undefined limit
  /// stays undefined.
  pub fn complement(self) -> DirectedLimit<T> {
    let side = match self.side {
      Side::Undefined => return self,
      Side::Left => Side::Right,
      Side::Right => Side::Left
    };
    DirectedLimit { bound: self.bound.flipped(), side }
  }
}

impl<T: Ord> DirectedLimit<T>
{
  /// Whether `value` satisfies this limit. An infinite limit contains
  /// every value.
  ///
  /// # Panics
  /// Panics on an undefined limit; asking it for containment is a
  /// programming error.
  pub fn contains(&self, value: &T) -> bool {
    match self.side {
      Side::Left => self.bound.is_infinite() || self.bound.right_contains(value),
      Side::Right => self.bound.is_infinite() || self.bound.left_contains(value),
      Side::Undefined => panic!("cannot test containment on an undefined limit")
    }
  }

  /// Whether the half-lines delimited by the two limits share at least one
  /// point. Two limits on the same side always intersect; an undefined
  /// limit intersects nothing.
  pub fn intersects(&self, other: &DirectedLimit<T>) -> bool {
    if self.is_undefined() || other.is_undefined() {
      return false;
    }
    if self.side == other.side {
      return true;
    }
    if self.bound.is_infinite() || other.bound.is_infinite() {
      return true;
    }
    let (left, right) = if self.side == Side::Left { (self, other) } else { (other, self) };
    match (&left.bound, &right.bound) {
      (Bound::Finite { value: lv, openness: lo }, Bound::Finite { value: rv, openness: ro }) => {
        match lv.cmp(rv) {
          Ordering::Less => true,
          Ordering::Greater => false,
          Ordering::Equal => *lo == Openness::Closed && *ro == Openness::Closed
        }
      }
      _ => unreachable!("infinite bounds are handled above")
    }
  }

  /// Weak inclusion: every value satisfying `self` also satisfies `other`.
  pub fn is_subset_of(&self, other: &DirectedLimit<T>) -> bool {
    self.subset_relation(other, false)
  }

  pub fn is_proper_subset_of(&self, other: &DirectedLimit<T>) -> bool {
    self.subset_relation(other, true)
  }

  pub fn is_superset_of(&self, other: &DirectedLimit<T>) -> bool {
    other.is_subset_of(self)
  }

  pub fn is_proper_superset_of(&self, other: &DirectedLimit<T>) -> bool {
    other.is_proper_subset_of(self)
  }

  fn subset_relation(&self, other: &DirectedLimit<T>, proper: bool) -> bool {
    if self.is_undefined() || other.is_undefined() {
      return false;
    }
    match (self.bound.is_infinite(), other.bound.is_infinite()) {
      // An infinite limit admits every value. Two of them delimit the same
      // set whatever their sides.
      (true, true) => !proper,
      (true, false) => false,
      (false, true) => true,
      (false, false) => {
        if self.side != other.side {
          return false;
        }
        match (&self.bound, &other.bound) {
          (Bound::Finite { value: sv, openness: so }, Bound::Finite { value: ov, openness: oo }) => {
            let value_cmp = sv.cmp(ov);
            // On the left side a larger value delimits a smaller set,
            // mirrored on the right side.
            let strictly_narrower = match self.side {
              Side::Left => value_cmp == Ordering::Greater,
              Side::Right => value_cmp == Ordering::Less,
              Side::Undefined => unreachable!("undefined limits are rejected above")
            };
            if strictly_narrower {
              return true;
            }
            if value_cmp != Ordering::Equal {
              return false;
            }
            match (so, oo) {
              (Openness::Open, Openness::Closed) => true,
              (Openness::Closed, Openness::Open) => false,
              _ => !proper
            }
          }
          _ => unreachable!("both bounds are finite here")
        }
      }
    }
  }

  /// Whether the two limits touch exactly: equal finite value, opposite
  /// openness and opposite sides.
  pub fn is_complement_of(&self, other: &DirectedLimit<T>) -> bool {
    let opposite_sides = matches!(
      (self.side, other.side),
      (Side::Left, Side::Right) | (Side::Right, Side::Left)
    );
    if !opposite_sides {
      return false;
    }
    match (&self.bound, &other.bound) {
      (Bound::Finite { value: sv, openness: so }, Bound::Finite { value: ov, openness: oo }) => {
        sv == ov && *so == oo.flip()
      }
      _ => false
    }
  }

  // Tie-break rank for equal-valued finite limits: a point splits the line
  // into "ends before it", "touches it" and "starts after it".
  fn rank(&self) -> u8 {
    match (self.side, self.bound.openness()) {
      (Side::Right, Openness::Open) => 0,
      (Side::Right, Openness::Closed) => 1,
      (Side::Left, Openness::Closed) => 2,
      (Side::Left, Openness::Open) => 3,
      (Side::Undefined, _) => unreachable!("rank of an undefined limit")
    }
  }
}

impl<T: PartialEq> PartialEq for DirectedLimit<T>
{
  fn eq(&self, other: &DirectedLimit<T>) -> bool {
    if self.side != other.side {
      return false;
    }
    self.side == Side::Undefined || self.bound == other.bound
  }
}

impl<T: Eq> Eq for DirectedLimit<T> {}

impl<T: Hash> Hash for DirectedLimit<T>
{
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.side.hash(state);
    if self.side != Side::Undefined {
      self.bound.hash(state);
    }
  }
}

/// Total order of limits along the line, used for sorting before merging.
/// An undefined limit sorts before any defined one; a left infinity is the
/// smallest defined limit and a right infinity the largest.
impl<T: Ord> Ord for DirectedLimit<T>
{
  fn cmp(&self, other: &DirectedLimit<T>) -> Ordering {
    match (self.side, other.side) {
      (Side::Undefined, Side::Undefined) => Ordering::Equal,
      (Side::Undefined, _) => Ordering::Less,
      (_, Side::Undefined) => Ordering::Greater,
      _ => match (&self.bound, &other.bound) {
        (Bound::Infinite, Bound::Infinite) => match (self.side, other.side) {
          (Side::Left, Side::Right) => Ordering::Less,
          (Side::Right, Side::Left) => Ordering::Greater,
          _ => Ordering::Equal
        },
        (Bound::Infinite, _) => {
          if self.side == Side::Left { Ordering::Less } else { Ordering::Greater }
        }
        (_, Bound::Infinite) => {
          if other.side == Side::Left { Ordering::Greater } else { Ordering::Less }
        }
        (Bound::Finite { value: sv, .. }, Bound::Finite { value: ov, .. }) => {
          sv.cmp(ov).then_with(|| self.rank().cmp(&other.rank()))
        }
      }
    }
  }
}

impl<T: Ord> PartialOrd for DirectedLimit<T>
{
  fn partial_cmp(&self, other: &DirectedLimit<T>) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

/// Picks whichever of the two limits is the (non-proper) subset of the
/// other, i.e. the more restrictive one.
pub fn narrower<'a, T: Ord>(a: &'a DirectedLimit<T>, b: &'a DirectedLimit<T>) -> &'a DirectedLimit<T> {
  if a.is_subset_of(b) { a } else { b }
}

/// Picks whichever of the two limits is the (non-proper) superset of the
/// other.
pub fn wider<'a, T: Ord>(a: &'a DirectedLimit<T>, b: &'a DirectedLimit<T>) -> &'a DirectedLimit<T> {
  if a.is_superset_of(b) { a } else { b }
}

impl<T: fmt::Display> fmt::Display for DirectedLimit<T>
{
  fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
    match (self.side, &self.bound) {
      (Side::Undefined, _) => write!(fmt, "undefined"),
      (Side::Left, Bound::Infinite) => write!(fmt, "(-∞"),
      (Side::Right, Bound::Infinite) => write!(fmt, "+∞)"),
      (Side::Left, Bound::Finite { value, openness }) => {
        let bracket = match openness { Openness::Closed => '[', Openness::Open => '(' };
        write!(fmt, "{}{}", bracket, value)
      }
      (Side::Right, Bound::Finite { value, openness }) => {
        let bracket = match openness { Openness::Closed => ']', Openness::Open => ')' };
        write!(fmt, "{}{}", value, bracket)
      }
    }
  }
}
