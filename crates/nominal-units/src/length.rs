// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Length Units
//!
//! `Meter<T>` and `Kilometer<T>` share their representation but not their
//! identity: a kilometer count can never be passed where meters are expected.
//! Meters are validated to be non-negative; kilometers are unconstrained.

use nominal_core::prelude::*;
use nominal_core::strong_tag;

strong_tag! {
    /// Tag for lengths measured in meters.
    pub MeterTag => "Meter";
    /// Tag for lengths measured in kilometers.
    pub KilometerTag => "Kilometer";
}

/// Skills of `Meter`.
pub type MeterSkills = (IntegralArithmetic, Printable, EqualityComparable, NonNegative);

/// Skills of `Kilometer`.
pub type KilometerSkills = (IntegralArithmetic, Printable, EqualityComparable);

/// A non-negative length in meters.
///
/// # Examples
///
/// ```rust
/// # use nominal_units::length::Meter;
/// # use nominal_core::validate::ValidationError;
/// let m1 = Meter::<i64>::try_new(100).unwrap();
/// let m2 = Meter::<i64>::try_new(50).unwrap();
/// assert_eq!((m1 + m2).to_string(), "150");
/// assert_eq!(Meter::<i64>::try_new(-1), Err(ValidationError::Negative));
/// ```
pub type Meter<T> = StrongType<T, MeterTag, MeterSkills>;

/// A length in kilometers.
///
/// # Examples
///
/// ```rust
/// # use nominal_units::length::Kilometer;
/// let km = Kilometer::<i32>::new(56) + Kilometer::new(44);
/// assert_eq!(km, Kilometer::new(100));
/// ```
///
/// Kilometers are not meters:
///
/// ```compile_fail
/// # use nominal_units::length::{Kilometer, Meter};
/// fn runway(_length: Meter<i64>) {}
///
/// runway(Kilometer::<i64>::new(3));
/// ```
pub type Kilometer<T> = StrongType<T, KilometerTag, KilometerSkills>;
