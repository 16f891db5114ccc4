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

//! # Strong Types (Zero-Cost)
//!
//! `StrongType<V, Tag, S>` wraps a value `V` under a phantom `Tag`, so two
//! quantities sharing a representation (meters and kilometers, both `i64`)
//! become distinct, non-interchangeable types. The skill set `S` opts into
//! operations (see `crate::skill`) and optionally a validation hook that runs
//! before any value is committed.
//!
//! ## Highlights
//!
//! - `#[repr(transparent)]` over `V`; tags and skills are phantom.
//! - No implicit conversion: there is no `From<V>`, every construction names
//!   the strong type explicitly.
//! - Skill sets without validation get the infallible `new`/`set`/`get_mut`
//!   API; validated sets only get the `try_*` API, so a check cannot be
//!   bypassed.
//! - Same-tag conversions between representations are explicit (`cast`).
//!
//! ## Usage
//!
//! ```rust
//! use nominal_core::strong::StrongType;
//! use nominal_core::skill::arithmetic::IntegralArithmetic;
//! use nominal_core::skill::compare::EqualityComparable;
//! use nominal_core::strong_tag;
//!
//! strong_tag! {
//!     pub MeterTag => "Meter";
//! }
//!
//! type Meter = StrongType<i64, MeterTag, (IntegralArithmetic, EqualityComparable)>;
//!
//! let total = Meter::new(100) + Meter::new(50);
//! assert_eq!(total, Meter::new(150));
//! assert_eq!(format!("{:?}", total), "Meter(150)");
//! ```
//!
//! A raw value is never accepted where a strong type is expected:
//!
//! ```compile_fail
//! use nominal_core::strong::StrongType;
//! use nominal_core::strong_tag;
//!
//! strong_tag! {
//!     pub MeterTag => "Meter";
//! }
//!
//! type Meter = StrongType<i64, MeterTag, ()>;
//!
//! fn walk(_distance: Meter) {}
//!
//! walk(100_i64);
//! ```
//!
//! Neither is a strong type with a different tag, even if the value type matches:
//!
//! ```compile_fail
//! use nominal_core::strong::StrongType;
//! use nominal_core::strong_tag;
//!
//! strong_tag! {
//!     pub MeterTag => "Meter";
//!     pub KilometerTag => "Kilometer";
//! }
//!
//! type Meter = StrongType<i64, MeterTag, ()>;
//! type Kilometer = StrongType<i64, KilometerTag, ()>;
//!
//! fn walk(_distance: Meter) {}
//!
//! walk(Kilometer::new(3));
//! ```
//!
//! Nor can a value that merely converts into `V`:
//!
//! ```compile_fail
//! use nominal_core::strong::StrongType;
//! use nominal_core::strong_tag;
//!
//! strong_tag! {
//!     pub MeterTag => "Meter";
//! }
//!
//! type Meter = StrongType<i64, MeterTag, ()>;
//!
//! fn walk(_distance: Meter) {}
//!
//! walk(100_i32.into());
//! ```

use crate::skill::Skill;
use crate::tag::StrongTag;
use crate::validate::{AdmitsDefault, Total, ValidationError, Validator};
use std::marker::PhantomData;

/// A value of type `V` with the nominal identity `Tag` and the skill set `S`.
///
/// # Examples
///
/// ```rust
/// # use nominal_core::strong::StrongType;
/// # use nominal_core::validate::{NonNegative, ValidationError};
/// # use nominal_core::strong_tag;
/// strong_tag! {
///     pub DepthTag => "Depth";
/// }
///
/// type Depth = StrongType<i32, DepthTag, NonNegative>;
///
/// let mut depth = Depth::try_new(12).unwrap();
/// assert_eq!(depth.try_set(-3), Err(ValidationError::Negative));
/// assert_eq!(*depth.get(), 12);
/// ```
#[repr(transparent)]
pub struct StrongType<V, Tag, S = ()> {
    value: V,
    _marker: PhantomData<fn() -> (Tag, S)>,
}

impl<V, Tag, S> StrongType<V, Tag, S> {
    /// Wraps `value` without running any check.
    ///
    /// Only for values that are valid by construction (already validated, or
    /// the skill set is total).
    #[inline(always)]
    pub(crate) const fn wrap(value: V) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Returns a reference to the underlying value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nominal_core::strong::StrongType;
    /// struct Tag;
    /// let s = StrongType::<String, Tag>::new("quay".to_string());
    /// assert_eq!(s.get(), "quay");
    /// ```
    #[inline(always)]
    pub const fn get(&self) -> &V {
        &self.value
    }

    /// Consumes the strong type and returns the underlying value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nominal_core::strong::StrongType;
    /// struct Tag;
    /// let s = StrongType::<String, Tag>::new("quay".to_string());
    /// let raw: String = s.into_inner();
    /// assert_eq!(raw, "quay");
    /// ```
    #[inline(always)]
    pub fn into_inner(self) -> V {
        self.value
    }

    /// Returns a strong reference type borrowing the underlying value.
    ///
    /// The view keeps the tag and the skill set, so it prints and compares like
    /// the original without copying the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nominal_core::strong::StrongType;
    /// # use nominal_core::skill::compare::EqualityComparable;
    /// struct Tag;
    /// type Name = StrongType<String, Tag, EqualityComparable>;
    ///
    /// let a = Name::new("berth".to_string());
    /// let b = Name::new("berth".to_string());
    /// assert!(a.view() == b.view());
    /// assert_eq!(*a.view().into_inner(), "berth");
    /// ```
    #[inline(always)]
    pub fn view(&self) -> StrongType<&V, Tag, S> {
        StrongType::wrap(&self.value)
    }

    /// Exchanges the values of `self` and `other`.
    ///
    /// Both values are valid before the exchange, so no check runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nominal_core::strong::StrongType;
    /// struct Tag;
    /// let mut a = StrongType::<i32, Tag>::new(1);
    /// let mut b = StrongType::<i32, Tag>::new(2);
    /// a.swap(&mut b);
    /// assert_eq!((*a.get(), *b.get()), (2, 1));
    /// ```
    #[inline(always)]
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.value, &mut other.value);
    }
}

impl<V, Tag, S> StrongType<V, Tag, S>
where
    S: Skill,
    S::Validation: Total,
{
    /// Creates a new strong type from `value`.
    ///
    /// Only available for skill sets without validation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nominal_core::strong::StrongType;
    /// struct Tag;
    /// let s = StrongType::<u64, Tag>::new(7);
    /// assert_eq!(*s.get(), 7);
    /// ```
    #[inline(always)]
    pub const fn new(value: V) -> Self {
        Self::wrap(value)
    }

    /// Creates a new strong type from any value losslessly convertible into `V`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nominal_core::strong::StrongType;
    /// struct Tag;
    /// let s = StrongType::<i64, Tag>::from_value(7_u8);
    /// assert_eq!(*s.get(), 7_i64);
    /// ```
    #[inline(always)]
    pub fn from_value<U>(value: U) -> Self
    where
        U: Into<V>,
    {
        Self::wrap(value.into())
    }

    /// Converts a strong type of the same tag and skills but another
    /// representation into this one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nominal_core::strong::StrongType;
    /// struct Tag;
    /// let narrow = StrongType::<i32, Tag>::new(-4);
    /// let wide = StrongType::<i64, Tag>::cast(narrow);
    /// assert_eq!(*wide.get(), -4_i64);
    /// ```
    #[inline(always)]
    pub fn cast<U>(other: StrongType<U, Tag, S>) -> Self
    where
        U: Into<V>,
    {
        Self::wrap(other.value.into())
    }

    /// Returns a mutable reference to the underlying value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nominal_core::strong::StrongType;
    /// struct Tag;
    /// let mut s = StrongType::<i32, Tag>::new(1);
    /// *s.get_mut() += 41;
    /// assert_eq!(*s.get(), 42);
    /// ```
    #[inline(always)]
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Replaces the underlying value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nominal_core::strong::StrongType;
    /// struct Tag;
    /// let mut s = StrongType::<i32, Tag>::new(1);
    /// s.set(-5);
    /// assert_eq!(*s.get(), -5);
    /// ```
    #[inline(always)]
    pub fn set(&mut self, value: V) {
        self.value = value;
    }

    /// Replaces the underlying value with the value of a strong type of the
    /// same tag and skills but another representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nominal_core::strong::StrongType;
    /// struct Tag;
    /// let mut wide = StrongType::<i64, Tag>::new(0);
    /// wide.assign(StrongType::<u8, Tag>::new(200));
    /// assert_eq!(*wide.get(), 200_i64);
    /// ```
    #[inline(always)]
    pub fn assign<U>(&mut self, other: StrongType<U, Tag, S>)
    where
        U: Into<V>,
    {
        self.value = other.value.into();
    }
}

impl<V, Tag, S> StrongType<V, Tag, S>
where
    S: Skill,
    S::Validation: Validator<V>,
{
    /// Runs the skill set's validation on `value`.
    #[inline]
    pub(crate) fn admit(value: &V) -> Result<(), ValidationError> {
        <S::Validation as Validator<V>>::validate(value).inspect_err(|error| {
            tracing::debug!(
                tag = std::any::type_name::<Tag>(),
                %error,
                "rejected strong type value"
            );
        })
    }

    /// Validates `value` and wraps it, panicking if it is rejected.
    #[inline]
    #[track_caller]
    pub(crate) fn admit_or_panic(value: V) -> Self {
        if let Err(error) = Self::admit(&value) {
            panic!(
                "invalid value for strong type `{}`: {}",
                std::any::type_name::<Tag>(),
                error
            );
        }
        Self::wrap(value)
    }

    /// Creates a new strong type, validating `value` first.
    ///
    /// # Errors
    ///
    /// Returns the validation error if the skill set rejects `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nominal_core::strong::StrongType;
    /// # use nominal_core::validate::{NonNegative, ValidationError};
    /// struct Tag;
    /// type Length = StrongType<f64, Tag, NonNegative>;
    ///
    /// assert!(Length::try_new(2.5).is_ok());
    /// assert_eq!(Length::try_new(-2.5).err(), Some(ValidationError::Negative));
    /// ```
    #[inline]
    pub fn try_new(value: V) -> Result<Self, ValidationError> {
        Self::admit(&value)?;
        Ok(Self::wrap(value))
    }

    /// Creates a new strong type from a value losslessly convertible into `V`,
    /// validating the converted value first.
    ///
    /// # Errors
    ///
    /// Returns the validation error if the skill set rejects the value.
    #[inline]
    pub fn try_from_value<U>(value: U) -> Result<Self, ValidationError>
    where
        U: Into<V>,
    {
        Self::try_new(value.into())
    }

    /// Converts a strong type of the same tag and skills but another
    /// representation into this one, validating the converted value.
    ///
    /// # Errors
    ///
    /// Returns the validation error if the skill set rejects the converted value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nominal_core::strong::StrongType;
    /// # use nominal_core::validate::NonNegative;
    /// struct Tag;
    /// let narrow = StrongType::<i32, Tag, NonNegative>::try_new(9).unwrap();
    /// let wide = StrongType::<i64, Tag, NonNegative>::try_cast(narrow).unwrap();
    /// assert_eq!(*wide.get(), 9_i64);
    /// ```
    #[inline]
    pub fn try_cast<U>(other: StrongType<U, Tag, S>) -> Result<Self, ValidationError>
    where
        U: Into<V>,
    {
        Self::try_new(other.value.into())
    }

    /// Replaces the underlying value if it passes validation.
    ///
    /// # Errors
    ///
    /// Returns the validation error if the skill set rejects `value`; the
    /// previous value is kept in that case.
    #[inline]
    pub fn try_set(&mut self, value: V) -> Result<(), ValidationError> {
        Self::admit(&value)?;
        self.value = value;
        Ok(())
    }

    /// Replaces the underlying value with the converted value of a strong type
    /// of the same tag and skills, if it passes validation.
    ///
    /// # Errors
    ///
    /// Returns the validation error if the skill set rejects the converted
    /// value; the previous value is kept in that case.
    #[inline]
    pub fn try_assign<U>(&mut self, other: StrongType<U, Tag, S>) -> Result<(), ValidationError>
    where
        U: Into<V>,
    {
        self.try_set(other.value.into())
    }

    /// Replaces the underlying value with a candidate, panicking if it is rejected.
    #[inline]
    #[track_caller]
    pub(crate) fn commit_or_panic(&mut self, value: V) {
        *self = Self::admit_or_panic(value);
    }
}

/// Exchanges the values of two strong types of the same instantiation.
///
/// # Examples
///
/// ```rust
/// # use nominal_core::strong::{swap, StrongType};
/// struct Tag;
/// let mut a = StrongType::<&str, Tag>::new("a");
/// let mut b = StrongType::<&str, Tag>::new("b");
/// swap(&mut a, &mut b);
/// assert_eq!((*a.get(), *b.get()), ("b", "a"));
/// ```
#[inline(always)]
pub fn swap<V, Tag, S>(a: &mut StrongType<V, Tag, S>, b: &mut StrongType<V, Tag, S>) {
    a.swap(b);
}

impl<V: Clone, Tag, S> Clone for StrongType<V, Tag, S> {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self::wrap(self.value.clone())
    }
}

impl<V: Copy, Tag, S> Copy for StrongType<V, Tag, S> {}

impl<V, Tag, S> Default for StrongType<V, Tag, S>
where
    V: Default,
    S: Skill,
    S::Validation: AdmitsDefault<V>,
{
    /// Returns `V::default()`, or zero for non-negative skill sets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nominal_core::strong::StrongType;
    /// # use nominal_core::validate::NonNegative;
    /// struct Tag;
    /// assert_eq!(*StrongType::<f64, Tag, NonNegative>::default().get(), 0.0);
    /// ```
    #[inline]
    fn default() -> Self {
        let value = <S::Validation as AdmitsDefault<V>>::admitted_default().unwrap_or_default();
        Self::wrap(value)
    }
}

impl<V, Tag, S> std::fmt::Debug for StrongType<V, Tag, S>
where
    V: std::fmt::Debug,
    Tag: StrongTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple(Tag::NAME).field(&self.value).finish()
    }
}
