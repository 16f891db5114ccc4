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

//! # Unit Literals
//!
//! Suffix-style shorthands for building units from numbers: `100_i64.m()`,
//! `56_i64.km()`, `2.5_f64.s()`. Every shorthand goes through the regular
//! constructors, so validated units come back as a `Result`.
//!
//! ## Usage
//!
//! ```rust
//! use nominal_units::literal::{LengthLiterals, TimeLiterals};
//! # use nominal_core::validate::ValidationError;
//!
//! # fn main() -> Result<(), ValidationError> {
//! let m3 = 100_i64.m()? + 50_i64.m()? - 108_i64.m()?;
//! assert_eq!(m3.to_string(), "42");
//!
//! let km3 = 56_i64.km() + 44_i64.km() - 58_i64.km();
//! assert_eq!(km3.to_string(), "42");
//!
//! assert!((-1_i64).m().is_err());
//! assert_eq!(1.5_f64.s()?.to_string(), "1.5");
//! # Ok(())
//! # }
//! ```

use crate::length::{Kilometer, Meter};
use crate::time::{MeterPerSecond, Second};
use nominal_core::validate::ValidationError;

/// Shorthands for length units.
pub trait LengthLiterals: Sized {
    /// `self` meters.
    ///
    /// # Errors
    ///
    /// Returns the validation error if `self` is negative.
    fn m(self) -> Result<Meter<Self>, ValidationError>;

    /// `self` kilometers.
    fn km(self) -> Kilometer<Self>;
}

/// Shorthands for time and velocity units.
pub trait TimeLiterals: Sized {
    /// `self` seconds.
    ///
    /// # Errors
    ///
    /// Returns the validation error if `self` is negative.
    fn s(self) -> Result<Second<Self>, ValidationError>;

    /// `self` meters per second.
    fn mps(self) -> MeterPerSecond<Self>;
}

macro_rules! impl_literals_for {
    ($($t:ty),+) => {
        $(
            impl LengthLiterals for $t {
                #[inline]
                fn m(self) -> Result<Meter<Self>, ValidationError> {
                    Meter::try_new(self)
                }

                #[inline]
                fn km(self) -> Kilometer<Self> {
                    Kilometer::new(self)
                }
            }

            impl TimeLiterals for $t {
                #[inline]
                fn s(self) -> Result<Second<Self>, ValidationError> {
                    Second::try_new(self)
                }

                #[inline]
                fn mps(self) -> MeterPerSecond<Self> {
                    MeterPerSecond::new(self)
                }
            }
        )+
    };
}

impl_literals_for!(i32, i64, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_literals_match_constructors() {
        assert_eq!(100_i64.m(), Meter::try_new(100_i64));
        assert_eq!(56_i32.km(), Kilometer::new(56_i32));
        assert_eq!(2.5_f64.m(), Meter::try_new(2.5_f64));
    }

    #[test]
    fn test_literals_do_not_bypass_validation() {
        assert_eq!((-3_i64).m(), Err(ValidationError::Negative));
        assert_eq!((-0.5_f32).s(), Err(ValidationError::Negative));
        assert_eq!(f64::NAN.m(), Err(ValidationError::Unordered));
    }

    #[test]
    fn test_unvalidated_literals_accept_negatives() {
        assert_eq!(*(-3_i64).km().get(), -3);
        assert_eq!(*(-4.0_f64).mps().get(), -4.0);
    }

    #[test]
    fn test_literal_scenario() {
        let m3 = 100_i64.m().unwrap() + 50_i64.m().unwrap() - 108_i64.m().unwrap();
        assert_eq!(*m3.get(), 42);
    }
}
