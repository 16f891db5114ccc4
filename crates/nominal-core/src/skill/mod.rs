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

//! # Skills
//!
//! Stateless capability modules that a `StrongType` composes. A skill is a
//! zero-sized type implementing `Skill`; it switches capabilities on at the
//! type level and may contribute a validation check. Operators and formatting
//! are implemented for a `StrongType<V, Tag, S>` only when the corresponding
//! switch of `S` is `On`, so asking for a capability that was not composed in
//! is a compile-time error.
//!
//! ## Composition
//!
//! Tuples of skills are skills themselves, so skill sets nest freely:
//!
//! - A switch of a tuple is `On` if it is `On` for any member.
//! - The validation of a tuple runs the members' checks in order.
//! - `()` is the empty skill set.
//!
//! Composition is resolved entirely by the type checker; no skill adds a field,
//! a vtable, or a runtime branch.
//!
//! ## Submodules
//!
//! - `arithmetic`: `Addable`, `Subtractable`, and the `IntegralArithmetic` bundle.
//! - `compare`: `EqualityComparable` and `Orderable`.
//! - `print`: `Printable`.

pub mod arithmetic;
pub mod compare;
pub mod print;

use crate::validate::{NonNegative, Unchecked};

mod sealed {
    pub trait Sealed {}
}

/// A type-level boolean used to switch skill capabilities on or off.
pub trait Switch: sealed::Sealed {
    /// `true` for `On`.
    const ENABLED: bool;

    /// The logical OR of `Self` and `R`.
    type Or<R: Switch>: Switch;
}

/// The capability is available.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum On {}

/// The capability is not available.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Off {}

impl sealed::Sealed for On {}
impl sealed::Sealed for Off {}

impl Switch for On {
    const ENABLED: bool = true;
    type Or<R: Switch> = On;
}

impl Switch for Off {
    const ENABLED: bool = false;
    type Or<R: Switch> = R;
}

/// A stateless capability module composable onto a `StrongType`.
///
/// # Examples
///
/// A custom validating skill:
///
/// ```rust
/// # use nominal_core::skill::{Off, Skill};
/// # use nominal_core::validate::{ValidationError, Validator};
///
/// struct Percentage;
///
/// impl Skill for Percentage {
///     type Addition = Off;
///     type Subtraction = Off;
///     type Printing = Off;
///     type Equality = Off;
///     type Ordering = Off;
///     type Validation = Self;
/// }
///
/// impl Validator<u8> for Percentage {
///     fn validate(value: &u8) -> Result<(), ValidationError> {
///         if *value <= 100 {
///             Ok(())
///         } else {
///             Err(ValidationError::Rejected("percentage above 100"))
///         }
///     }
/// }
/// ```
pub trait Skill {
    /// Enables `+`, `+=`, `try_add` and `checked_add`.
    type Addition: Switch;
    /// Enables `-`, `-=`, `try_sub` and `checked_sub`.
    type Subtraction: Switch;
    /// Enables `Display`.
    type Printing: Switch;
    /// Enables `PartialEq`, `Eq` and `Hash`.
    type Equality: Switch;
    /// Enables `PartialOrd` and `Ord`.
    type Ordering: Switch;
    /// The check run before a value is committed; `Unchecked` if none.
    type Validation;
}

impl Skill for () {
    type Addition = Off;
    type Subtraction = Off;
    type Printing = Off;
    type Equality = Off;
    type Ordering = Off;
    type Validation = Unchecked;
}

/// Rejects values below zero on every construction and assignment.
impl Skill for NonNegative {
    type Addition = Off;
    type Subtraction = Off;
    type Printing = Off;
    type Equality = Off;
    type Ordering = Off;
    type Validation = NonNegative;
}

macro_rules! impl_skill_tuple {
    ($last:ident) => {
        impl<$last: Skill> Skill for ($last,) {
            type Addition = $last::Addition;
            type Subtraction = $last::Subtraction;
            type Printing = $last::Printing;
            type Equality = $last::Equality;
            type Ordering = $last::Ordering;
            type Validation = $last::Validation;
        }
    };
    ($head:ident, $($tail:ident),+) => {
        impl<$head: Skill, $($tail: Skill),+> Skill for ($head, $($tail),+) {
            type Addition =
                <$head::Addition as Switch>::Or<<($($tail,)+) as Skill>::Addition>;
            type Subtraction =
                <$head::Subtraction as Switch>::Or<<($($tail,)+) as Skill>::Subtraction>;
            type Printing =
                <$head::Printing as Switch>::Or<<($($tail,)+) as Skill>::Printing>;
            type Equality =
                <$head::Equality as Switch>::Or<<($($tail,)+) as Skill>::Equality>;
            type Ordering =
                <$head::Ordering as Switch>::Or<<($($tail,)+) as Skill>::Ordering>;
            type Validation = ($head::Validation, <($($tail,)+) as Skill>::Validation);
        }

        impl_skill_tuple!($($tail),+);
    };
}

impl_skill_tuple!(A, B, C, D, E, F, G, H);

#[cfg(test)]
mod tests {
    use super::arithmetic::{Addable, IntegralArithmetic, Subtractable};
    use super::compare::{EqualityComparable, Orderable};
    use super::print::Printable;
    use super::*;

    fn enabled<W: Switch>() -> bool {
        W::ENABLED
    }

    #[test]
    fn test_switch_or_truth_table() {
        assert!(enabled::<<On as Switch>::Or<On>>());
        assert!(enabled::<<On as Switch>::Or<Off>>());
        assert!(enabled::<<Off as Switch>::Or<On>>());
        assert!(!enabled::<<Off as Switch>::Or<Off>>());
    }

    #[test]
    fn test_empty_skill_set_enables_nothing() {
        assert!(!enabled::<<() as Skill>::Addition>());
        assert!(!enabled::<<() as Skill>::Subtraction>());
        assert!(!enabled::<<() as Skill>::Printing>());
        assert!(!enabled::<<() as Skill>::Equality>());
        assert!(!enabled::<<() as Skill>::Ordering>());
    }

    #[test]
    fn test_tuple_enables_union_of_members() {
        type Set = (Addable, Printable);
        assert!(enabled::<<Set as Skill>::Addition>());
        assert!(enabled::<<Set as Skill>::Printing>());
        assert!(!enabled::<<Set as Skill>::Subtraction>());
        assert!(!enabled::<<Set as Skill>::Equality>());
    }

    #[test]
    fn test_nested_bundle_is_flattened() {
        type Set = (IntegralArithmetic, EqualityComparable);
        assert!(enabled::<<Set as Skill>::Addition>());
        assert!(enabled::<<Set as Skill>::Subtraction>());
        assert!(enabled::<<Set as Skill>::Equality>());
        assert!(!enabled::<<Set as Skill>::Ordering>());
    }

    #[test]
    fn test_composition_is_order_independent() {
        type Forward = (Addable, Subtractable, Orderable, Printable);
        type Backward = (Printable, Orderable, Subtractable, Addable);
        assert_eq!(
            enabled::<<Forward as Skill>::Addition>(),
            enabled::<<Backward as Skill>::Addition>()
        );
        assert_eq!(
            enabled::<<Forward as Skill>::Equality>(),
            enabled::<<Backward as Skill>::Equality>()
        );
        assert_eq!(
            enabled::<<Forward as Skill>::Ordering>(),
            enabled::<<Backward as Skill>::Ordering>()
        );
    }

    #[test]
    fn test_eight_member_skill_set() {
        type Set = (
            Addable,
            Subtractable,
            Printable,
            EqualityComparable,
            Orderable,
            NonNegative,
            (),
            IntegralArithmetic,
        );
        assert!(enabled::<<Set as Skill>::Addition>());
        assert!(enabled::<<Set as Skill>::Ordering>());
    }
}
