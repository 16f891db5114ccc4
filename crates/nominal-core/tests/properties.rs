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

use nominal_core::prelude::*;
use nominal_core::strong_tag;
use proptest::prelude::*;
use static_assertions::{assert_impl_all, assert_not_impl_any};

strong_tag! {
    MeterTag => "Meter";
    KilometerTag => "Kilometer";
}

type Meter = StrongType<i64, MeterTag, (IntegralArithmetic, Printable, EqualityComparable, NonNegative)>;
type Kilometer = StrongType<i64, KilometerTag, (IntegralArithmetic, Printable, EqualityComparable)>;
type Bare = StrongType<i64, MeterTag>;
type Wide = StrongType<i128, KilometerTag, (IntegralArithmetic, Printable, EqualityComparable)>;

// Distinct tags never convert into each other, and raw values never convert implicitly.
assert_not_impl_any!(Meter: From<i64>, From<Kilometer>, From<Bare>, PartialEq<i64>, PartialEq<Kilometer>);
assert_not_impl_any!(Kilometer: From<i64>, From<i32>, From<Meter>, PartialEq<Meter>);
assert_not_impl_any!(Wide: From<Kilometer>);
assert_not_impl_any!(i64: From<Meter>, From<Kilometer>);

// Operations exist only where a skill enables them.
assert_not_impl_any!(Bare: std::ops::Add<Bare>, std::ops::Sub<Bare>, std::fmt::Display, PartialEq, PartialOrd, std::hash::Hash);
assert_not_impl_any!(Meter: std::ops::Add<Kilometer>, std::ops::Sub<Kilometer>, PartialOrd);
assert_impl_all!(Meter: std::ops::Add, std::ops::AddAssign, std::ops::Sub, std::ops::SubAssign, std::fmt::Display, Eq, std::hash::Hash, Copy, Send, Sync);

// Validated strong types expose no mutable alias; skill sets never add storage.
assert_impl_all!(Kilometer: Default);
assert_impl_all!(Meter: Default);
static_assertions::assert_eq_size!(Meter, i64);
static_assertions::assert_eq_size!(Kilometer, i64);

fn total_distance(legs: &[Kilometer]) -> Kilometer {
    legs.iter().copied().fold(Kilometer::default(), |acc, leg| acc + leg)
}

#[test]
fn test_meter_scenario() {
    let m1 = Meter::try_new(100).unwrap();
    let m2 = Meter::try_new(50).unwrap();
    let sum = m1 + m2;
    assert_eq!(*sum.get(), 150);
    let rest = sum - Meter::try_new(108).unwrap();
    assert_eq!(*rest.get(), 42);
    assert_eq!(rest.to_string(), "42");
}

#[test]
fn test_kilometer_scenario() {
    let km1 = Kilometer::new(56);
    let mut km2 = Kilometer::default();
    km2.set(44);
    let mut km3 = km1 + km2;
    km3 -= Kilometer::new(58);
    assert_eq!(km3, Kilometer::new(42));
    assert_ne!(Kilometer::new(100) - Kilometer::new(50), Kilometer::new(150));
}

#[test]
fn test_explicit_cast_within_tag() {
    let km = Kilometer::new(-12);
    let wide = Wide::cast(km);
    assert_eq!(*wide.get(), -12_i128);
}

#[test]
fn test_fold_over_strong_types() {
    let legs = [Kilometer::new(3), Kilometer::new(4), Kilometer::new(5)];
    assert_eq!(total_distance(&legs), Kilometer::new(12));
}

#[test]
fn test_rejected_assignment_is_not_observable() {
    let mut m = Meter::try_new(10).unwrap();
    assert_eq!(m.try_set(-1), Err(ValidationError::Negative));
    assert_eq!(m, Meter::try_new(10).unwrap());
}

proptest! {
    #[test]
    fn roundtrip_get_construct(v in any::<i64>()) {
        prop_assert_eq!(*Kilometer::new(v).get(), v);
        prop_assert_eq!(Kilometer::new(v).into_inner(), v);
        prop_assert_eq!(*Bare::new(v).view().into_inner(), v);
    }

    #[test]
    fn arithmetic_matches_underlying(a in -1_000_000_000_i64..1_000_000_000, b in -1_000_000_000_i64..1_000_000_000) {
        prop_assert_eq!(*(Kilometer::new(a) + Kilometer::new(b)).get(), a + b);
        prop_assert_eq!(*(Kilometer::new(a) - Kilometer::new(b)).get(), a - b);

        let mut acc = Kilometer::new(a);
        acc += Kilometer::new(b);
        acc -= Kilometer::new(b);
        prop_assert_eq!(acc, Kilometer::new(a));
    }

    #[test]
    fn validated_arithmetic_matches_underlying(a in 0_i64..1_000_000_000, b in 0_i64..1_000_000_000) {
        let (m1, m2) = (Meter::try_new(a).unwrap(), Meter::try_new(b).unwrap());
        prop_assert_eq!(*(m1 + m2).get(), a + b);
        match m1.try_sub(m2) {
            Ok(diff) => prop_assert_eq!(*diff.get(), a - b),
            Err(e) => {
                prop_assert!(a < b);
                prop_assert_eq!(e, ValidationError::Negative);
            }
        }
    }

    #[test]
    fn validation_gates_construction_and_assignment(prior in 0_i64..i64::MAX, candidate in any::<i64>()) {
        prop_assert_eq!(Meter::try_new(candidate).is_ok(), candidate >= 0);

        let mut m = Meter::try_new(prior).unwrap();
        let outcome = m.try_set(candidate);
        if candidate < 0 {
            prop_assert_eq!(outcome, Err(ValidationError::Negative));
            prop_assert_eq!(*m.get(), prior);
        } else {
            prop_assert_eq!(outcome, Ok(()));
            prop_assert_eq!(*m.get(), candidate);
        }
    }

    #[test]
    fn swap_exchanges_values(a in any::<i64>(), b in any::<i64>()) {
        let mut x = Kilometer::new(a);
        let mut y = Kilometer::new(b);
        nominal_core::strong::swap(&mut x, &mut y);
        prop_assert_eq!(*x.get(), b);
        prop_assert_eq!(*y.get(), a);
    }

    #[test]
    fn equality_reflects_value_only(a in any::<i64>(), b in any::<i64>()) {
        type Forward = StrongType<i64, MeterTag, (EqualityComparable, Printable, IntegralArithmetic)>;
        type Backward = StrongType<i64, MeterTag, (IntegralArithmetic, Printable, EqualityComparable)>;
        prop_assert_eq!(Forward::new(a) == Forward::new(b), a == b);
        prop_assert_eq!(Backward::new(a) == Backward::new(b), a == b);
        prop_assert_eq!(Kilometer::new(a) == Kilometer::new(b), a == b);
    }
}
