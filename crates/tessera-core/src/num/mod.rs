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

//! # Numeric Helpers
//!
//! Integer stepping used by the discrete shifters of primitive axes. Steps
//! clamp at the numeric bounds of the type instead of overflowing, so the
//! extended window computed during a merge at `T::max_value()` stays valid.

use num_traits::{NumCast, PrimInt};

/// Moves `value` by `step` units, saturating at the bounds of `T`.
///
/// A step whose magnitude does not fit into `T` clamps directly to the
/// corresponding bound.
///
/// # Examples
///
/// ```rust
/// # use tessera_core::num::saturating_step;
///
/// assert_eq!(saturating_step(5i32, 1), 6);
/// assert_eq!(saturating_step(5i32, -1), 4);
/// assert_eq!(saturating_step(u8::MAX, 1), u8::MAX);
/// assert_eq!(saturating_step(0u8, -1), 0);
/// ```
#[inline]
pub fn saturating_step<T>(value: T, step: i64) -> T
where
    T: PrimInt,
{
    let magnitude = step.unsigned_abs();
    match <T as NumCast>::from(magnitude) {
        Some(delta) if step >= 0 => value.saturating_add(delta),
        Some(delta) => value.saturating_sub(delta),
        None if step >= 0 => T::max_value(),
        None => T::min_value(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_signed() {
        assert_eq!(saturating_step(0i16, 1), 1);
        assert_eq!(saturating_step(0i16, -1), -1);
        assert_eq!(saturating_step(i16::MAX, 1), i16::MAX);
        assert_eq!(saturating_step(i16::MIN, -1), i16::MIN);
    }

    #[test]
    fn test_step_unsigned() {
        assert_eq!(saturating_step(10u32, 5), 15);
        assert_eq!(saturating_step(3u32, -5), 0);
    }

    #[test]
    fn test_step_magnitude_exceeds_type() {
        assert_eq!(saturating_step(0u8, 1_000), u8::MAX);
        assert_eq!(saturating_step(0i8, -1_000), i8::MIN);
        assert_eq!(saturating_step(0i64, i64::MIN), i64::MIN);
    }

    #[test]
    fn test_step_zero() {
        assert_eq!(saturating_step(42u64, 0), 42);
    }
}
