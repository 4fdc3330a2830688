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

use proptest::prelude::*;
use std::collections::BTreeSet;
use tessera_core::math::interval::{ClosedInterval, coalesce};
use tessera_core::math::shift::DiscreteStep;
use tessera_core::num::saturating_step;

fn points(intervals: &[ClosedInterval<i32>]) -> BTreeSet<i32> {
    intervals
        .iter()
        .flat_map(|iv| *iv.begin()..=*iv.end())
        .collect()
}

fn intervals() -> impl Strategy<Value = Vec<ClosedInterval<i32>>> {
    prop::collection::vec(
        (0i32..40, 0i32..5).prop_map(|(begin, len)| ClosedInterval::new(begin, begin + len)),
        0..12,
    )
}

proptest! {
    #[test]
    fn coalesce_keeps_points_and_leaves_nothing_mergeable(input in intervals()) {
        let output = coalesce(input.clone(), &DiscreteStep);

        prop_assert_eq!(points(&output), points(&input));
        prop_assert!(output.len() <= input.len());
        for (i, a) in output.iter().enumerate() {
            for b in &output[i + 1..] {
                prop_assert!(a.merge(b, &DiscreteStep).is_none());
            }
        }
    }

    #[test]
    fn saturating_step_clamps_like_wide_arithmetic(value in any::<i8>(), step in -300i64..300) {
        let expected = (value as i64 + step).clamp(i8::MIN as i64, i8::MAX as i64) as i8;
        prop_assert_eq!(saturating_step(value, step), expected);
    }
}
