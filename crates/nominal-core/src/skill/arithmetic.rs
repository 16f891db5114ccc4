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

//! # Arithmetic Skills
//!
//! `Addable` and `Subtractable` lift `+` and `-` of the underlying value to the
//! strong type: both operands are unwrapped, the operation is applied, and the
//! result is wrapped again under the same tag. `IntegralArithmetic` bundles
//! both.
//!
//! For validated skill sets the result is checked before it is stored. The
//! operators panic on a rejected result, like `std::time::Duration` does on
//! underflow; `try_add`/`try_sub` report the rejection instead, and
//! `checked_add`/`checked_sub` additionally catch overflow.

use crate::skill::{Off, On, Skill};
use crate::strong::StrongType;
use crate::validate::{Unchecked, ValidationError, Validator};
use num_traits::{CheckedAdd, CheckedSub};
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Enables `+`, `+=`, `try_add` and `checked_add`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Addable;

impl Skill for Addable {
    type Addition = On;
    type Subtraction = Off;
    type Printing = Off;
    type Equality = Off;
    type Ordering = Off;
    type Validation = Unchecked;
}

/// Enables `-`, `-=`, `try_sub` and `checked_sub`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Subtractable;

impl Skill for Subtractable {
    type Addition = Off;
    type Subtraction = On;
    type Printing = Off;
    type Equality = Off;
    type Ordering = Off;
    type Validation = Unchecked;
}

/// Addition and subtraction.
pub type IntegralArithmetic = (Addable, Subtractable);

macro_rules! impl_strong_op {
    (
        $switch:ident,
        $trait_name:ident, $method:ident,
        $assign_trait:ident, $assign_method:ident,
        $op:tt
    ) => {
        impl<V, Tag, S> $trait_name for StrongType<V, Tag, S>
        where
            V: $trait_name<Output = V>,
            S: Skill<$switch = On>,
            S::Validation: Validator<V>,
        {
            type Output = Self;

            /// # Panics
            ///
            /// Panics if the skill set's validation rejects the result.
            #[inline]
            #[track_caller]
            fn $method(self, rhs: Self) -> Self::Output {
                Self::admit_or_panic(self.into_inner() $op rhs.into_inner())
            }
        }

        impl<V, Tag, S> $assign_trait for StrongType<V, Tag, S>
        where
            V: $trait_name<Output = V> + Clone,
            S: Skill<$switch = On>,
            S::Validation: Validator<V>,
        {
            /// # Panics
            ///
            /// Panics if the skill set's validation rejects the result; `self`
            /// is left unchanged in that case.
            #[inline]
            #[track_caller]
            fn $assign_method(&mut self, rhs: Self) {
                let candidate = self.get().clone() $op rhs.into_inner();
                self.commit_or_panic(candidate);
            }
        }
    };
}

impl_strong_op!(Addition, Add, add, AddAssign, add_assign, +);
impl_strong_op!(Subtraction, Sub, sub, SubAssign, sub_assign, -);

impl<V, Tag, S> StrongType<V, Tag, S>
where
    S: Skill<Addition = On>,
    S::Validation: Validator<V>,
{
    /// Adds `rhs`, reporting a rejected result instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns the validation error if the skill set rejects the sum.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nominal_core::strong::StrongType;
    /// # use nominal_core::skill::arithmetic::Addable;
    /// # use nominal_core::validate::NonNegative;
    /// struct Tag;
    /// type Stock = StrongType<i32, Tag, (Addable, NonNegative)>;
    ///
    /// let a = Stock::try_new(3).unwrap();
    /// let b = Stock::try_new(4).unwrap();
    /// assert_eq!(a.try_add(b).map(Stock::into_inner), Ok(7));
    /// ```
    #[inline]
    pub fn try_add(self, rhs: Self) -> Result<Self, ValidationError>
    where
        V: Add<Output = V>,
    {
        Self::try_new(self.into_inner() + rhs.into_inner())
    }

    /// Adds `rhs`, returning `None` on overflow or if the sum is rejected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nominal_core::strong::StrongType;
    /// # use nominal_core::skill::arithmetic::Addable;
    /// struct Tag;
    /// type Count = StrongType<u8, Tag, Addable>;
    ///
    /// assert_eq!(Count::new(200).checked_add(&Count::new(55)).map(Count::into_inner), Some(255));
    /// assert!(Count::new(200).checked_add(&Count::new(56)).is_none());
    /// ```
    #[inline]
    pub fn checked_add(&self, rhs: &Self) -> Option<Self>
    where
        V: CheckedAdd,
    {
        let sum = self.get().checked_add(rhs.get())?;
        Self::try_new(sum).ok()
    }
}

impl<V, Tag, S> StrongType<V, Tag, S>
where
    S: Skill<Subtraction = On>,
    S::Validation: Validator<V>,
{
    /// Subtracts `rhs`, reporting a rejected result instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns the validation error if the skill set rejects the difference.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nominal_core::strong::StrongType;
    /// # use nominal_core::skill::arithmetic::Subtractable;
    /// # use nominal_core::validate::{NonNegative, ValidationError};
    /// struct Tag;
    /// type Stock = StrongType<i32, Tag, (Subtractable, NonNegative)>;
    ///
    /// let a = Stock::try_new(3).unwrap();
    /// let b = Stock::try_new(4).unwrap();
    /// assert_eq!(a.try_sub(b).err(), Some(ValidationError::Negative));
    /// ```
    #[inline]
    pub fn try_sub(self, rhs: Self) -> Result<Self, ValidationError>
    where
        V: Sub<Output = V>,
    {
        Self::try_new(self.into_inner() - rhs.into_inner())
    }

    /// Subtracts `rhs`, returning `None` on overflow or if the difference is rejected.
    #[inline]
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self>
    where
        V: CheckedSub,
    {
        let difference = self.get().checked_sub(rhs.get())?;
        Self::try_new(difference).ok()
    }
}
