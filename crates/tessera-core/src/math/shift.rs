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

//! # Discrete Shifters
//!
//! Difference and merge on closed intervals need the value immediately before
//! or after a boundary. A [`Shifter`] supplies that step for an axis type:
//! `shift(value, -1)` is the predecessor, `shift(value, 1)` the successor.
//!
//! Any closure `Fn(&T, i64) -> T` is a shifter. Types with a natural unit
//! step implement [`Discrete`] and can use the zero-sized [`DiscreteStep`].
//!
//! ```rust
//! use tessera_core::math::shift::{DiscreteStep, Shifter};
//!
//! let by_tens = |value: &i32, step: i64| value + 10 * step as i32;
//! assert_eq!(by_tens.shift(&5, 1), 15);
//! assert_eq!(DiscreteStep.shift(&5i32, -1), 4);
//! ```

use crate::num::saturating_step;

/// A pure function giving the discrete neighbour of a value on one axis.
///
/// Implementations must be total and side-effect free; the algebra calls
/// them an unspecified number of times.
pub trait Shifter<T> {
    /// Returns `value` moved by `step` discrete units.
    fn shift(&self, value: &T, step: i64) -> T;
}

impl<T, F> Shifter<T> for F
where
    F: Fn(&T, i64) -> T,
{
    #[inline]
    fn shift(&self, value: &T, step: i64) -> T {
        self(value, step)
    }
}

/// A type with a natural unit step.
///
/// Implementations saturate at the bounds of the type rather than wrapping
/// or panicking.
pub trait Discrete: Sized {
    /// Returns `self` moved by `step` units.
    fn step_by(&self, step: i64) -> Self;
}

/// Shifter that delegates to the [`Discrete`] impl of the axis type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DiscreteStep;

impl<T> Shifter<T> for DiscreteStep
where
    T: Discrete,
{
    #[inline]
    fn shift(&self, value: &T, step: i64) -> T {
        value.step_by(step)
    }
}

impl std::fmt::Display for DiscreteStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiscreteStep")
    }
}

macro_rules! impl_discrete_for {
    ($($t:ty),* $(,)?) => {
        $(
            impl Discrete for $t {
                #[inline(always)]
                fn step_by(&self, step: i64) -> Self {
                    saturating_step(*self, step)
                }
            }
        )*
    };
}

impl_discrete_for!(i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize);

/// Calendar days.
#[cfg(feature = "chrono")]
impl Discrete for chrono::NaiveDate {
    fn step_by(&self, step: i64) -> Self {
        let days = chrono::Days::new(step.unsigned_abs());
        let shifted = if step >= 0 {
            self.checked_add_days(days)
        } else {
            self.checked_sub_days(days)
        };
        shifted.unwrap_or(if step >= 0 {
            chrono::NaiveDate::MAX
        } else {
            chrono::NaiveDate::MIN
        })
    }
}
