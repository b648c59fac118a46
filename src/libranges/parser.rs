// Copyright 2026 the range-algebra developers.

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Conversion between the bracket notation and [`Range`].
//!
//! The grammar is `<left-bracket><value><separator><value><right-bracket>`
//! where `(`/`)` denote open bounds and `[`/`]` closed ones. The separator
//! is a single configurable character, `;` by default. A value is either
//! an infinity token (`oo` or `∞`, case-insensitive, optionally signed
//! with `-` on the left and `+` on the right) or any token accepted by
//! the scalar parser of the domain type. Values are trimmed of
//! surrounding whitespace before the scalar parser sees them, so
//! `[ 1 ; 2 ]` reads as `[1;2]`. For example:
//!
//! ```text
//! [1;2]   (1;2]   (-oo;0]   [0;+∞)
//! ```
//!
//! The parser core knows nothing about the domain type beyond the infinity
//! tokens. Scalar parsing is delegated to a [`ScalarParser`]:
//! [`FromStrParser`] covers every `FromStr` type, and [`RadixParser`]
//! reads numeric types in an arbitrary radix.

use crate::bound::{Bound, Openness};
use crate::limit::DirectedLimit;
use crate::ops::Bounded;
use crate::range::{Range, RangeError};
use num_traits::Num;
use std::fmt::Display;
use std::marker::PhantomData;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_SEPARATOR: char = ';';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot interpret `{token}` as a scalar value")]
pub struct ScalarParseError {
  pub token: String
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRangeError {
  #[error("unrecognized left range descriptor `{token}` (expected `(` or `[`)")]
  UnrecognizedLeftDescriptor { token: String },
  #[error("unrecognized right range descriptor `{token}` (expected `)` or `]`)")]
  UnrecognizedRightDescriptor { token: String },
  #[error("separator `{separator}` not found in `{interior}`")]
  SeparatorNotFound { interior: String, separator: char },
  #[error(transparent)]
  Scalar(#[from] ScalarParseError),
  #[error(transparent)]
  Construction(#[from] RangeError)
}

/// Parses one scalar value of the domain type out of its textual form.
pub trait ScalarParser {
  type Scalar;

  fn parse(&self, text: &str) -> Result<Self::Scalar, ScalarParseError>;

  fn try_parse(&self, text: &str) -> Option<Self::Scalar> {
    self.parse(text).ok()
  }
}

/// Scalar parser backed by the type's `FromStr` implementation.
#[derive(Debug, Clone, Copy)]
pub struct FromStrParser<T> {
  scalar: PhantomData<T>
}

impl<T> FromStrParser<T> {
  pub fn new() -> FromStrParser<T> {
    FromStrParser { scalar: PhantomData }
  }
}

impl<T> Default for FromStrParser<T> {
  fn default() -> FromStrParser<T> {
    FromStrParser::new()
  }
}

impl<T: FromStr> ScalarParser for FromStrParser<T> {
  type Scalar = T;

  fn parse(&self, text: &str) -> Result<T, ScalarParseError> {
    text.parse().map_err(|_| ScalarParseError { token: text.to_string() })
  }
}

/// Scalar parser reading numeric values in a fixed radix, e.g. `ff` in
/// radix 16.
#[derive(Debug, Clone, Copy)]
pub struct RadixParser<T> {
  radix: u32,
  scalar: PhantomData<T>
}

impl<T> RadixParser<T> {
  pub fn new(radix: u32) -> RadixParser<T> {
    RadixParser { radix, scalar: PhantomData }
  }
}

impl<T: Num> ScalarParser for RadixParser<T> {
  type Scalar = T;

  fn parse(&self, text: &str) -> Result<T, ScalarParseError> {
    T::from_str_radix(text, self.radix)
      .map_err(|_| ScalarParseError { token: text.to_string() })
  }
}

/// The pluggable parsing capability over a domain type.
pub trait RangeParse<T> {
  fn parse(&self, text: &str) -> Result<Range<T>, ParseRangeError>;

  fn try_parse(&self, text: &str) -> Option<Range<T>>;
}

#[derive(Debug, Clone)]
pub struct RangeParser<P> {
  scalar: P,
  separator: char
}

impl<T: FromStr> RangeParser<FromStrParser<T>>
{
  pub fn new() -> RangeParser<FromStrParser<T>> {
    RangeParser::with_scalar_parser(FromStrParser::new())
  }
}

impl<T: FromStr> Default for RangeParser<FromStrParser<T>>
{
  fn default() -> RangeParser<FromStrParser<T>> {
    RangeParser::new()
  }
}

impl<P: ScalarParser> RangeParser<P>
{
  pub fn with_scalar_parser(scalar: P) -> RangeParser<P> {
    RangeParser { scalar, separator: DEFAULT_SEPARATOR }
  }

  pub fn separated_by(mut self, separator: char) -> RangeParser<P> {
    self.separator = separator;
    self
  }

  pub fn separator(&self) -> char {
    self.separator
  }
}

// Strips the optional sign, then matches `oo` (any case) or `∞`.
fn is_infinity_token(token: &str, sign: char) -> bool {
  let token = token.strip_prefix(sign).unwrap_or(token);
  token.eq_ignore_ascii_case("oo") || token == "∞"
}

impl<P> RangeParser<P> where
 P: ScalarParser,
 P::Scalar: Ord
{
  fn left_limit(&self, token: &str, openness: Openness)
    -> Result<DirectedLimit<P::Scalar>, ParseRangeError>
  {
    if is_infinity_token(token, '-') {
      return Ok(DirectedLimit::left_infinity());
    }
    let value = self.scalar.parse(token)?;
    Ok(DirectedLimit::left(Bound::finite(value, openness)))
  }

  fn right_limit(&self, token: &str, openness: Openness)
    -> Result<DirectedLimit<P::Scalar>, ParseRangeError>
  {
    if is_infinity_token(token, '+') {
      return Ok(DirectedLimit::right_infinity());
    }
    let value = self.scalar.parse(token)?;
    Ok(DirectedLimit::right(Bound::finite(value, openness)))
  }
}

impl<P> RangeParse<P::Scalar> for RangeParser<P> where
 P: ScalarParser,
 P::Scalar: Ord
{
  fn parse(&self, text: &str) -> Result<Range<P::Scalar>, ParseRangeError> {
    let first = text.chars().next().ok_or_else(||
      ParseRangeError::UnrecognizedLeftDescriptor { token: text.to_string() })?;
    let left_openness = match first {
      '(' => Openness::Open,
      '[' => Openness::Closed,
      _ => return Err(ParseRangeError::UnrecognizedLeftDescriptor {
        token: first.to_string() })
    };
    // `first` is a bracket, so a lone character cannot reach the slicing.
    let last = text.chars().last().filter(|_| text.chars().count() > 1)
      .ok_or_else(|| ParseRangeError::UnrecognizedRightDescriptor {
        token: text.to_string() })?;
    let right_openness = match last {
      ')' => Openness::Open,
      ']' => Openness::Closed,
      _ => return Err(ParseRangeError::UnrecognizedRightDescriptor {
        token: last.to_string() })
    };
    let interior = &text[first.len_utf8()..text.len() - last.len_utf8()];
    let at = interior.find(self.separator).ok_or_else(||
      ParseRangeError::SeparatorNotFound {
        interior: interior.to_string(),
        separator: self.separator
      })?;
    let left = self.left_limit(interior[..at].trim(), left_openness)?;
    let right = self.right_limit(
      interior[at + self.separator.len_utf8()..].trim(), right_openness)?;
    Ok(Range::new(left, right)?)
  }

  fn try_parse(&self, text: &str) -> Option<Range<P::Scalar>> {
    // Two brackets, a separator and at least one value take 4 characters.
    if text.chars().count() <= 3 {
      return None;
    }
    self.parse(text).ok()
  }
}

impl<P> RangeParser<P> where
 P: ScalarParser,
 P::Scalar: Clone + Display
{
  /// The bracket notation of a range, with this parser's separator.
  /// The empty range has no notation and formats as `empty`.
  pub fn format(&self, range: &Range<P::Scalar>) -> String {
    let (left, right) = (range.left(), range.right());
    if left.is_undefined() {
      return "empty".to_string();
    }
    format!("{}{}{}", left, self.separator, right)
  }
}
