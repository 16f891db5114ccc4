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

//! # Value Validation
//!
//! Validation hooks that a `StrongType` runs before committing a value.
//! A skill contributes its hook through `Skill::Validation`; skills without a
//! hook contribute `Unchecked`, which accepts everything and compiles away.
//!
//! ## Highlights
//!
//! - `Validator<V>` is the hook itself.
//! - `Total` marks checks that can never reject. It is sealed: only
//!   `Unchecked` and compositions of totals qualify, which is what gates the
//!   infallible `StrongType::new` family.
//! - `AdmitsDefault` gates the `Default` implementation and picks the value it
//!   produces, so a default-constructed strong type always passes its check.
//! - `NonNegative` is the ready-made check for quantities below zero.

use num_traits::Zero;
use std::cmp::Ordering;
use thiserror::Error;

/// The reason a candidate value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    /// The value is below zero.
    #[error("negative value detected")]
    Negative,
    /// The value cannot be ordered against zero (e.g. NaN).
    #[error("value is not comparable to zero")]
    Unordered,
    /// A custom validator rejected the value.
    #[error("value rejected: {0}")]
    Rejected(&'static str),
}

/// A validation hook run on every candidate value before it is stored.
///
/// # Examples
///
/// ```rust
/// # use nominal_core::validate::{ValidationError, Validator};
///
/// struct Even;
///
/// impl Validator<i32> for Even {
///     fn validate(value: &i32) -> Result<(), ValidationError> {
///         if value % 2 == 0 {
///             Ok(())
///         } else {
///             Err(ValidationError::Rejected("odd value"))
///         }
///     }
/// }
///
/// assert!(Even::validate(&4_i32).is_ok());
/// assert_eq!(Even::validate(&3_i32), Err(ValidationError::Rejected("odd value")));
/// ```
pub trait Validator<V: ?Sized> {
    /// Returns `Ok(())` if `value` may be stored.
    fn validate(value: &V) -> Result<(), ValidationError>;
}

mod sealed {
    pub trait Sealed {}
    pub trait SealedDefault {}
}

/// Marker for validation checks that accept every value.
///
/// This trait is sealed; it is implemented for `Unchecked` and for pairs of
/// total checks only.
pub trait Total: sealed::Sealed {}

/// Validation checks with a known admissible default value.
///
/// This trait is sealed; it is implemented for `Unchecked`, `NonNegative`, and
/// pairs of them. Strong types with a custom check have no `Default`.
pub trait AdmitsDefault<V>: sealed::SealedDefault {
    /// The value `Default` must produce, or `None` if `V::default()` passes.
    fn admitted_default() -> Option<V>;
}

/// The check of skills that do not validate. Accepts every value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Unchecked;

impl<V: ?Sized> Validator<V> for Unchecked {
    #[inline(always)]
    fn validate(_value: &V) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl sealed::Sealed for Unchecked {}
impl Total for Unchecked {}
impl sealed::SealedDefault for Unchecked {}

impl<V> AdmitsDefault<V> for Unchecked {
    #[inline(always)]
    fn admitted_default() -> Option<V> {
        None
    }
}

/// Rejects values below zero, and values that cannot be compared to zero.
///
/// Zero itself is accepted.
///
/// # Examples
///
/// ```rust
/// # use nominal_core::validate::{NonNegative, ValidationError, Validator};
///
/// assert!(NonNegative::validate(&0_i64).is_ok());
/// assert!(NonNegative::validate(&12_i64).is_ok());
/// assert_eq!(NonNegative::validate(&-1_i64), Err(ValidationError::Negative));
/// assert_eq!(NonNegative::validate(&f64::NAN), Err(ValidationError::Unordered));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct NonNegative;

impl<V> Validator<V> for NonNegative
where
    V: PartialOrd + Zero,
{
    #[inline]
    fn validate(value: &V) -> Result<(), ValidationError> {
        match value.partial_cmp(&V::zero()) {
            Some(Ordering::Less) => Err(ValidationError::Negative),
            Some(_) => Ok(()),
            None => Err(ValidationError::Unordered),
        }
    }
}

impl sealed::SealedDefault for NonNegative {}

// Zero, not `V::default()`: the default of a custom `V` may be negative.
impl<V> AdmitsDefault<V> for NonNegative
where
    V: PartialOrd + Zero,
{
    #[inline(always)]
    fn admitted_default() -> Option<V> {
        Some(V::zero())
    }
}

impl<V: ?Sized, A, B> Validator<V> for (A, B)
where
    A: Validator<V>,
    B: Validator<V>,
{
    #[inline(always)]
    fn validate(value: &V) -> Result<(), ValidationError> {
        A::validate(value)?;
        B::validate(value)
    }
}

impl<A: Total, B: Total> sealed::Sealed for (A, B) {}
impl<A: Total, B: Total> Total for (A, B) {}
impl<A: sealed::SealedDefault, B: sealed::SealedDefault> sealed::SealedDefault for (A, B) {}

impl<V, A, B> AdmitsDefault<V> for (A, B)
where
    A: AdmitsDefault<V>,
    B: AdmitsDefault<V>,
{
    #[inline(always)]
    fn admitted_default() -> Option<V> {
        A::admitted_default().or_else(B::admitted_default)
    }
}
