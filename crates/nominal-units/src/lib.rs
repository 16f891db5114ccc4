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

//! # Nominal Units
//!
//! Concrete strong types built on `nominal_core`.
//!
//! ## Modules
//!
//! - `length`: `Meter<T>` (non-negative) and `Kilometer<T>`.
//! - `time`: `Second<T>` (non-negative), `MeterPerSecond<T>`, and `velocity`.
//! - `literal`: `100_i64.m()`-style shorthands that never bypass validation.
//!
//! ## Design Philosophy
//!
//! 1.  **Distinct identities**: every unit has its own tag, so units never mix
//!     even when they share a representation.
//! 2.  **Opt-in operations**: each unit lists the skills it supports; anything
//!     else is a compile error.
//! 3.  **Fail-fast**: physically impossible values (negative lengths and
//!     durations) are rejected at construction and on every assignment.

pub mod length;
pub mod literal;
pub mod time;
