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

//! # Strong Type Tags
//!
//! Zero-sized marker types that give otherwise identical `StrongType`
//! instantiations distinct identities. A tag carries no runtime data; it only
//! names the quantity for `Debug` output and diagnostics.

/// A trait to name tag types for debugging and display purposes.
///
/// Any type can act as a tag of a `StrongType`, but only tags implementing
/// `StrongTag` get a `Debug` representation of the form `NAME(value)`.
///
/// # Examples
///
/// ```rust
/// # use nominal_core::tag::StrongTag;
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
/// struct FurlongTag;
///
/// impl StrongTag for FurlongTag {
///     const NAME: &'static str = "Furlong";
/// }
///
/// assert_eq!(FurlongTag::NAME, "Furlong");
/// ```
pub trait StrongTag {
    const NAME: &'static str;
}

/// Declares one or more unit-like tag types together with their `StrongTag` names.
///
/// # Examples
///
/// ```rust
/// # use nominal_core::{strong_tag, tag::StrongTag};
///
/// strong_tag! {
///     /// Tag for furlongs.
///     pub FurlongTag => "Furlong";
///     pub FortnightTag => "Fortnight";
/// }
///
/// assert_eq!(FurlongTag::NAME, "Furlong");
/// assert_eq!(FortnightTag::NAME, "Fortnight");
/// ```
#[macro_export]
macro_rules! strong_tag {
    ($($(#[$meta:meta])* $vis:vis $name:ident => $display:literal;)+) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
            $vis struct $name;

            impl $crate::tag::StrongTag for $name {
                const NAME: &'static str = $display;
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::StrongTag;

    strong_tag! {
        LeagueTag => "League";
        FathomTag => "Fathom";
    }

    #[test]
    fn test_macro_declares_named_tags() {
        assert_eq!(LeagueTag::NAME, "League");
        assert_eq!(FathomTag::NAME, "Fathom");
        assert_eq!(LeagueTag, LeagueTag::default());
    }

    #[test]
    fn test_tags_are_zero_sized() {
        assert_eq!(std::mem::size_of::<LeagueTag>(), 0);
        assert_eq!(std::mem::size_of::<FathomTag>(), 0);
    }
}
