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

//! # Comparison Skills
//!
//! `EqualityComparable` compares strong types by their unwrapped values and
//! hashes consistently with that equality. `Orderable` adds ordering and
//! implies equality.

use crate::skill::{Off, On, Skill};
use crate::strong::StrongType;
use crate::validate::Unchecked;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Enables `PartialEq`, `Eq` and `Hash` on the unwrapped value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct EqualityComparable;

impl Skill for EqualityComparable {
    type Addition = Off;
    type Subtraction = Off;
    type Printing = Off;
    type Equality = On;
    type Ordering = Off;
    type Validation = Unchecked;
}

/// Enables `PartialOrd` and `Ord` on the unwrapped value, and equality with it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Orderable;

impl Skill for Orderable {
    type Addition = Off;
    type Subtraction = Off;
    type Printing = Off;
    type Equality = On;
    type Ordering = On;
    type Validation = Unchecked;
}

impl<V, Tag, S> PartialEq for StrongType<V, Tag, S>
where
    V: PartialEq,
    S: Skill<Equality = On>,
{
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<V, Tag, S> Eq for StrongType<V, Tag, S>
where
    V: Eq,
    S: Skill<Equality = On>,
{
}

impl<V, Tag, S> Hash for StrongType<V, Tag, S>
where
    V: Hash,
    S: Skill<Equality = On>,
{
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get().hash(state);
    }
}

impl<V, Tag, S> PartialOrd for StrongType<V, Tag, S>
where
    V: PartialOrd,
    S: Skill<Equality = On, Ordering = On>,
{
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.get().partial_cmp(other.get())
    }
}

impl<V, Tag, S> Ord for StrongType<V, Tag, S>
where
    V: Ord,
    S: Skill<Equality = On, Ordering = On>,
{
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        self.get().cmp(other.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::arithmetic::IntegralArithmetic;
    use crate::skill::print::Printable;
    use crate::tag::StrongTag;
    use std::collections::{BTreeSet, HashSet};

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    struct TestTag;

    impl StrongTag for TestTag {
        const NAME: &'static str = "TestUnit";
    }

    type Equal = StrongType<i32, TestTag, EqualityComparable>;
    type Ranked = StrongType<i32, TestTag, (Printable, Orderable)>;
    type Reordered = StrongType<i32, TestTag, (EqualityComparable, IntegralArithmetic)>;
    type Shuffled = StrongType<i32, TestTag, (IntegralArithmetic, EqualityComparable)>;

    #[test]
    fn test_equality_reflects_value() {
        assert_eq!(Equal::new(3), Equal::new(3));
        assert_ne!(Equal::new(3), Equal::new(4));
    }

    #[test]
    fn test_equality_independent_of_skill_order() {
        for (a, b) in [(1, 1), (1, 2), (-7, -7), (0, 9)] {
            assert_eq!(Reordered::new(a) == Reordered::new(b), a == b);
            assert_eq!(Shuffled::new(a) == Shuffled::new(b), a == b);
        }
    }

    #[test]
    fn test_ordering() {
        assert!(Ranked::new(1) < Ranked::new(2));
        assert_eq!(Ranked::new(5).max(Ranked::new(-5)), Ranked::new(5));
        let sorted: Vec<i32> = [3, 1, 2]
            .into_iter()
            .map(Ranked::new)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(Ranked::into_inner)
            .collect();
        assert_eq!(sorted, vec![1, 2, 3]);
    }

    #[test]
    fn test_partial_ordering_of_floats() {
        type Real = StrongType<f64, TestTag, Orderable>;
        assert!(Real::new(0.5) < Real::new(1.5));
        assert_eq!(Real::new(f64::NAN).partial_cmp(&Real::new(1.0)), None);
    }

    #[test]
    fn test_hash_agrees_with_equality() {
        let set: HashSet<Equal> = [1, 2, 2, 3].into_iter().map(Equal::new).collect();
        assert_eq!(set.len(), 3);
        assert!(set.contains(&Equal::new(2)));
    }
}
