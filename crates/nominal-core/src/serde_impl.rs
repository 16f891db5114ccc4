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

//! # Serde Support
//!
//! A strong type serializes exactly as its underlying value. Deserialization
//! runs the skill set's validation, so an invalid payload never produces a
//! strong type.

use crate::skill::Skill;
use crate::strong::StrongType;
use crate::validate::Validator;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

impl<V, Tag, S> Serialize for StrongType<V, Tag, S>
where
    V: Serialize,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        self.get().serialize(serializer)
    }
}

impl<'de, V, Tag, S> Deserialize<'de> for StrongType<V, Tag, S>
where
    V: Deserialize<'de>,
    S: Skill,
    S::Validation: Validator<V>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = V::deserialize(deserializer)?;
        Self::try_new(value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use crate::skill::compare::EqualityComparable;
    use crate::strong::StrongType;
    use crate::tag::StrongTag;
    use crate::validate::NonNegative;

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    struct TestTag;

    impl StrongTag for TestTag {
        const NAME: &'static str = "TestUnit";
    }

    type Guarded = StrongType<i64, TestTag, (EqualityComparable, NonNegative)>;

    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
    struct Leg {
        distance: Guarded,
    }

    #[test]
    fn test_serializes_transparently() {
        let leg = Leg {
            distance: Guarded::try_new(120).unwrap(),
        };
        assert_eq!(serde_json::to_string(&leg).unwrap(), r#"{"distance":120}"#);
    }

    #[test]
    fn test_deserialize_validates() {
        let leg: Leg = serde_json::from_str(r#"{"distance":7}"#).unwrap();
        assert_eq!(*leg.distance.get(), 7);

        let err = serde_json::from_str::<Leg>(r#"{"distance":-7}"#).unwrap_err();
        assert!(err.to_string().contains("negative value detected"));
    }
}
