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

//! Axis names and per-axis shifters.

use tessera_core::math::shift::DiscreteStep;

/// One of the three ordered dimensions of a [`SpatialBox`](crate::spatial_box::SpatialBox).
///
/// The declaration order is the peel order used by box difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// The booking (offer) window.
    Offer,
    /// The stay length window.
    Length,
    /// The season window.
    Season,
}

impl Axis {
    /// All axes in peel order.
    pub const ALL: [Axis; 3] = [Axis::Offer, Axis::Length, Axis::Season];
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Offer => write!(f, "offer"),
            Axis::Length => write!(f, "length"),
            Axis::Season => write!(f, "season"),
        }
    }
}

/// One shifter per axis, used by box difference and merge.
///
/// Each shifter must be the true discrete step of its axis type, otherwise
/// difference leaves gaps (or overlaps) and merge misjudges adjacency.
///
/// # Examples
///
/// ```rust
/// # use tessera_space::axis::AxisShifters;
/// # use tessera_core::math::shift::{DiscreteStep, Shifter};
///
/// let weekly = |value: &i32, step: i64| value + 7 * step as i32;
/// let shifters = AxisShifters::new(weekly, DiscreteStep, DiscreteStep);
/// assert_eq!(shifters.offer().shift(&0, 1), 7);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AxisShifters<SO, SL, SS> {
    offer: SO,
    length: SL,
    season: SS,
}

/// Shifters that use the natural unit step on every axis.
pub type DiscreteShifters = AxisShifters<DiscreteStep, DiscreteStep, DiscreteStep>;

impl<SO, SL, SS> AxisShifters<SO, SL, SS> {
    /// Bundles the three axis shifters.
    #[inline]
    pub const fn new(offer: SO, length: SL, season: SS) -> Self {
        Self {
            offer,
            length,
            season,
        }
    }

    /// Returns the offer-axis shifter.
    #[inline]
    pub const fn offer(&self) -> &SO {
        &self.offer
    }

    /// Returns the length-axis shifter.
    #[inline]
    pub const fn length(&self) -> &SL {
        &self.length
    }

    /// Returns the season-axis shifter.
    #[inline]
    pub const fn season(&self) -> &SS {
        &self.season
    }
}

impl DiscreteShifters {
    /// Natural unit steps on all three axes.
    #[inline]
    pub const fn discrete() -> Self {
        Self::new(DiscreteStep, DiscreteStep, DiscreteStep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::math::shift::Shifter;

    #[test]
    fn test_axis_order_and_display() {
        assert!(Axis::Offer < Axis::Length && Axis::Length < Axis::Season);
        let names: Vec<String> = Axis::ALL.iter().map(|a| a.to_string()).collect();
        assert_eq!(names, ["offer", "length", "season"]);
    }

    #[test]
    fn test_discrete_shifters() {
        let shifters = AxisShifters::discrete();
        assert_eq!(shifters.offer().shift(&1i32, 1), 2);
        assert_eq!(shifters.length().shift(&1u16, -1), 0);
        assert_eq!(shifters.season().shift(&1i64, 3), 4);
        assert_eq!(shifters, DiscreteShifters::default());
    }
}
