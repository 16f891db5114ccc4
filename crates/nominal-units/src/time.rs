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

//! # Time and Velocity Units
//!
//! `Second<T>` is a non-negative duration and `MeterPerSecond<T>` a velocity.
//! `velocity` is the only way to turn a length and a duration into a
//! velocity; the three types cannot be mixed otherwise.

use crate::length::Meter;
use nominal_core::prelude::*;
use nominal_core::strong_tag;
use num_traits::Zero;
use std::ops::Div;

strong_tag! {
    /// Tag for durations measured in seconds.
    pub SecondTag => "Second";
    /// Tag for velocities measured in meters per second.
    pub MeterPerSecondTag => "MeterPerSecond";
}

/// Skills of `Second`.
pub type SecondSkills = (IntegralArithmetic, Printable, Orderable, NonNegative);

/// Skills of `MeterPerSecond`.
pub type MeterPerSecondSkills = (IntegralArithmetic, Printable, Orderable);

/// A non-negative duration in seconds.
pub type Second<T> = StrongType<T, SecondTag, SecondSkills>;

/// A velocity in meters per second.
pub type MeterPerSecond<T> = StrongType<T, MeterPerSecondTag, MeterPerSecondSkills>;

/// Computes the velocity needed to cover `distance` in `time`.
///
/// # Errors
///
/// Returns `ValidationError::Rejected("zero elapsed time")` if `time` is zero.
/// No velocity covers a distance in zero time, so the quotient is rejected
/// like any other value a unit does not admit.
///
/// ```rust
/// # use nominal_core::validate::ValidationError;
/// # use nominal_units::length::Meter;
/// # use nominal_units::time::{velocity, Second};
/// let stalled = velocity(Meter::try_new(10_i64).unwrap(), Second::try_new(0).unwrap());
/// assert_eq!(stalled.err(), Some(ValidationError::Rejected("zero elapsed time")));
/// ```
///
/// # Examples
///
/// ```rust
/// # use nominal_units::length::Meter;
/// # use nominal_units::time::{velocity, MeterPerSecond, Second};
/// let v = velocity(Meter::try_new(100.0).unwrap(), Second::try_new(8.0).unwrap()).unwrap();
/// assert_eq!(v, MeterPerSecond::new(12.5));
/// ```
pub fn velocity<T>(distance: Meter<T>, time: Second<T>) -> Result<MeterPerSecond<T>, ValidationError>
where
    T: Div<Output = T> + Zero,
{
    if time.get().is_zero() {
        tracing::debug!("velocity requested over zero elapsed time");
        return Err(ValidationError::Rejected("zero elapsed time"));
    }
    Ok(MeterPerSecond::new(distance.into_inner() / time.into_inner()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_velocity_of_integers_truncates() {
        let v = velocity(Meter::try_new(100_i64).unwrap(), Second::try_new(30).unwrap()).unwrap();
        assert_eq!(*v.get(), 3);
    }

    #[test]
    fn test_velocity_rejects_zero_time() {
        let result = velocity(Meter::try_new(5.0_f64).unwrap(), Second::default());
        assert_eq!(result, Err(ValidationError::Rejected("zero elapsed time")));
    }

    #[test]
    fn test_seconds_are_ordered_and_non_negative() {
        let short = Second::<i64>::try_new(10).unwrap();
        let long = Second::<i64>::try_new(90).unwrap();
        assert!(short < long);
        assert_eq!(short.try_sub(long), Err(ValidationError::Negative));
        assert_eq!(long.try_sub(short).map(Second::into_inner), Ok(80));
    }

    #[test]
    fn test_velocity_display() {
        let v = MeterPerSecond::<f64>::new(12.5);
        assert_eq!(format!("{v} m/s"), "12.5 m/s");
    }
}
