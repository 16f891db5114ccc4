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

//! # Nominal Core
//!
//! Phantom-tagged strong types with composable, statically dispatched skills.
//! A `StrongType<V, Tag, S>` gives a value `V` a distinct nominal identity
//! `Tag`, so quantities that share a representation cannot be mixed up, and
//! lets each strong type opt into exactly the operations it should support.
//!
//! ## Modules
//!
//! - `strong`: The `StrongType` wrapper itself: explicit construction,
//!   same-tag casts, borrow and consume accessors, validated assignment, swap.
//! - `tag`: The `StrongTag` naming trait and the `strong_tag!` macro.
//! - `skill`: The `Skill` trait, type-level `On`/`Off` switches, tuple
//!   composition, and the ready-made skills (`Addable`, `Subtractable`,
//!   `IntegralArithmetic`, `Printable`, `EqualityComparable`, `Orderable`).
//! - `validate`: Validation hooks (`Validator`, `Unchecked`, `NonNegative`)
//!   and `ValidationError`.
//!
//! ## Features
//!
//! - `serde`: transparent `Serialize` and validating `Deserialize`.
//!
//! ## Example
//!
//! ```rust
//! use nominal_core::prelude::*;
//! use nominal_core::strong_tag;
//!
//! strong_tag! {
//!     pub MeterTag => "Meter";
//! }
//!
//! type Meter<T> = StrongType<T, MeterTag, (IntegralArithmetic, Printable, EqualityComparable, NonNegative)>;
//!
//! # fn main() -> Result<(), ValidationError> {
//! let m1 = Meter::<i64>::try_new(100)?;
//! let m2 = Meter::<i64>::try_new(50)?;
//! let m3 = (m1 + m2) - Meter::try_new(108)?;
//! assert_eq!(m3.to_string(), "42");
//! assert_eq!(Meter::<i64>::try_new(-1), Err(ValidationError::Negative));
//! # Ok(())
//! # }
//! ```

pub mod skill;
pub mod strong;
pub mod tag;
pub mod validate;

#[cfg(feature = "serde")]
mod serde_impl;

/// The commonly used types and traits.
pub mod prelude {
    pub use crate::skill::arithmetic::{Addable, IntegralArithmetic, Subtractable};
    pub use crate::skill::compare::{EqualityComparable, Orderable};
    pub use crate::skill::print::Printable;
    pub use crate::skill::{Off, On, Skill};
    pub use crate::strong::StrongType;
    pub use crate::tag::StrongTag;
    pub use crate::validate::{NonNegative, Unchecked, ValidationError, Validator};
}
