// Copyright 2026 the range-algebra developers.

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A single boundary over a totally ordered domain: a value with an
//! openness, or infinite.

use serde::{Deserialize, Serialize};

/// Whether a finite bound excludes (`Open`) or includes (`Closed`) its own
/// value.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
pub enum Openness {
  Open,
  Closed
}

impl Default for Openness {
  fn default() -> Openness {
    Openness::Open
  }
}

impl Openness {
  pub fn flip(self) -> Openness {
    match self {
      Openness::Open => Openness::Closed,
      Openness::Closed => Openness::Open
    }
  }
}

/// A boundary of a range. An infinite bound carries no value and is
/// conventionally open; all infinite bounds of a domain are equal.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
pub enum Bound<T> {
  Finite { value: T, openness: Openness },
  Infinite
}

impl<T> Bound<T>
{
  pub fn finite(value: T, openness: Openness) -> Bound<T> {
    Bound::Finite { value, openness }
  }

  pub fn open(value: T) -> Bound<T> {
    Bound::finite(value, Openness::Open)
  }

  pub fn closed(value: T) -> Bound<T> {
    Bound::finite(value, Openness::Closed)
  }

  pub fn infinite() -> Bound<T> {
    Bound::Infinite
  }

  pub fn is_finite(&self) -> bool {
    matches!(self, Bound::Finite { .. })
  }

  pub fn is_infinite(&self) -> bool {
    matches!(self, Bound::Infinite)
  }

  pub fn value(&self) -> Option<&T> {
    match self {
      Bound::Finite { value, .. } => Some(value),
      Bound::Infinite => None
    }
  }

  /// The openness of the bound; infinite bounds report `Open`.
  pub fn openness(&self) -> Openness {
    match self {
      Bound::Finite { openness, .. } => *openness,
      Bound::Infinite => Openness::Open
    }
  }

  pub fn as_open(self) -> Bound<T> {
    match self {
      Bound::Finite { value, .. } => Bound::open(value),
      Bound::Infinite => Bound::Infinite
    }
  }

  pub fn as_closed(self) -> Bound<T> {
    match self {
      Bound::Finite { value, .. } => Bound::closed(value),
      Bound::Infinite => Bound::Infinite
    }
  }

  pub(crate) fn flipped(self) -> Bound<T> {
    match self {
      Bound::Finite { value, openness } => Bound::finite(value, openness.flip()),
      Bound::Infinite => Bound::Infinite
    }
  }

  /// Transforms the bound value, preserving openness. No-op on an infinite
  /// bound.
  pub fn map<U, F>(self, f: F) -> Bound<U> where
   F: FnOnce(T) -> U
  {
    match self {
      Bound::Finite { value, openness } => Bound::Finite { value: f(value), openness },
      Bound::Infinite => Bound::Infinite
    }
  }

  pub fn translate<F>(self, f: F) -> Bound<T> where
   F: FnOnce(T) -> T
  {
    self.map(f)
  }
}

impl<T: Ord> Bound<T>
{
  /// Whether `value` lies on the right side of this bound. An infinite
  /// bound contains nothing by this primitive; directed limits decide
  /// infinite containment themselves.
  pub fn right_contains(&self, value: &T) -> bool {
    match self {
      Bound::Finite { value: v, openness: Openness::Open } => value > v,
      Bound::Finite { value: v, openness: Openness::Closed } => value >= v,
      Bound::Infinite => false
    }
  }

  /// Whether `value` lies on the left side of this bound.
  pub fn left_contains(&self, value: &T) -> bool {
    match self {
      Bound::Finite { value: v, openness: Openness::Open } => value < v,
      Bound::Finite { value: v, openness: Openness::Closed } => value <= v,
      Bound::Infinite => false
    }
  }
}
