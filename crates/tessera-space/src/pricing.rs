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

//! # Pricing Boxes
//!
//! The booking-window × stay-length × season instantiation of
//! [`SpatialBox`]: offer and season axes are calendar dates stepped by one
//! day, the length axis counts nights.

use crate::axis::{AxisShifters, DiscreteShifters};
use crate::error::BoxError;
use crate::partition::Partition;
use crate::spatial_box::SpatialBox;
use chrono::NaiveDate;

/// Number of nights in a stay.
pub type Nights = u16;

/// A pricing or availability rule: booking window × nights × season.
pub type PricingBox<C> = SpatialBox<NaiveDate, Nights, NaiveDate, C>;

/// A disjoint set of pricing rules.
pub type PricingPartition<C> = Partition<NaiveDate, Nights, NaiveDate, C>;

/// Day steps on both date axes, unit steps on nights.
pub const PRICING_SHIFTERS: DiscreteShifters = AxisShifters::discrete();

/// Creates a pricing rule from raw bounds.
///
/// # Errors
///
/// Returns [`BoxError`] if any window ends before it begins.
///
/// # Examples
///
/// ```rust
/// # use chrono::NaiveDate;
/// # use tessera_space::pricing::pricing_rule;
///
/// let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
/// let rule = pricing_rule((day(1), day(10)), (2, 5), (day(1), day(31)), "base").unwrap();
/// assert!(rule.contains_point(&day(3), &4, &day(20)));
///
/// assert!(pricing_rule((day(10), day(1)), (2, 5), (day(1), day(31)), "base").is_err());
/// ```
#[inline]
pub fn pricing_rule<C>(
    offer: (NaiveDate, NaiveDate),
    nights: (Nights, Nights),
    season: (NaiveDate, NaiveDate),
    context: C,
) -> Result<PricingBox<C>, BoxError> {
    SpatialBox::try_from_bounds(offer, nights, season, context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::Axis;
    use crate::partition::distinct;

    fn day(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    #[test]
    fn test_invalid_nights() {
        let err = pricing_rule((day(1, 1), day(1, 2)), (5, 2), (day(1, 1), day(3, 1)), ())
            .unwrap_err();
        assert_eq!(err.axis(), Axis::Length);
    }

    #[test]
    fn test_rules_across_month_boundary() {
        let year = (day(1, 1), day(12, 31));
        let january = pricing_rule((day(1, 1), day(1, 31)), (1, 7), year, 100u32).unwrap();
        let promo = pricing_rule((day(1, 25), day(2, 5)), (1, 7), year, 10u32).unwrap();

        let flat = distinct(&[january, promo], |a, b| a - b, &PRICING_SHIFTERS);
        let summary: Vec<_> = flat
            .iter()
            .map(|b| (*b.offer().begin(), *b.offer().end(), *b.context()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (day(1, 1), day(1, 24), 100),
                (day(1, 25), day(1, 31), 90),
                (day(2, 1), day(2, 5), 10),
            ]
        );
    }
}
