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

use crate::axis::Axis;
use crate::error::{BoxError, Result};
use tessera_core::math::interval::ClosedInterval;

/// An axis-aligned box over three ordered axes carrying an opaque context.
///
/// The box denotes the Cartesian product `offer × length × season`. It is
/// immutable: the copy methods (`with_offer`, `with_axes`, `map_context`,
/// ...) build a new box and leave `self` untouched.
///
/// The axis types only need a total order. Operations that must step across
/// a boundary (difference, merge) take an
/// [`AxisShifters`](crate::axis::AxisShifters) bundle.
///
/// # Examples
///
/// ```rust
/// # use tessera_space::spatial_box::SpatialBox;
/// # use tessera_core::math::interval::ClosedInterval;
///
/// let rule = SpatialBox::new(
///     ClosedInterval::new(1, 10),
///     ClosedInterval::new(2, 5),
///     ClosedInterval::new(100, 200),
///     "summer",
/// );
/// let widened = rule.with_length(ClosedInterval::new(1, 7));
/// assert_eq!(*rule.length(), ClosedInterval::new(2, 5));
/// assert_eq!(*widened.length(), ClosedInterval::new(1, 7));
/// assert_eq!(*widened.context(), "summer");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "O: serde::Serialize, L: serde::Serialize, \
                     S: serde::Serialize, C: serde::Serialize",
        deserialize = "O: Ord + serde::Deserialize<'de>, L: Ord + serde::Deserialize<'de>, \
                       S: Ord + serde::Deserialize<'de>, C: serde::Deserialize<'de>"
    ))
)]
pub struct SpatialBox<O, L, S, C> {
    offer: ClosedInterval<O>,
    length: ClosedInterval<L>,
    season: ClosedInterval<S>,
    context: C,
}

impl<O, L, S, C> SpatialBox<O, L, S, C> {
    /// Creates a box from already validated intervals.
    #[inline]
    pub const fn new(
        offer: ClosedInterval<O>,
        length: ClosedInterval<L>,
        season: ClosedInterval<S>,
        context: C,
    ) -> Self {
        Self {
            offer,
            length,
            season,
            context,
        }
    }

    /// Returns the offer-axis interval.
    #[inline]
    pub const fn offer(&self) -> &ClosedInterval<O> {
        &self.offer
    }

    /// Returns the length-axis interval.
    #[inline]
    pub const fn length(&self) -> &ClosedInterval<L> {
        &self.length
    }

    /// Returns the season-axis interval.
    #[inline]
    pub const fn season(&self) -> &ClosedInterval<S> {
        &self.season
    }

    /// Returns the context.
    #[inline]
    pub const fn context(&self) -> &C {
        &self.context
    }

    /// Consumes the box and returns its context.
    #[inline]
    pub fn into_context(self) -> C {
        self.context
    }

    /// Consumes the box and returns `(offer, length, season, context)`.
    #[inline]
    pub fn into_parts(self) -> (ClosedInterval<O>, ClosedInterval<L>, ClosedInterval<S>, C) {
        (self.offer, self.length, self.season, self.context)
    }

    /// Wraps the box into a single-element list.
    #[inline]
    pub fn into_list(self) -> Vec<Self> {
        vec![self]
    }
}

impl<O, L, S, C> SpatialBox<O, L, S, C>
where
    O: Ord,
    L: Ord,
    S: Ord,
{
    /// Creates a box from raw `(begin, end)` bounds, validating every axis.
    ///
    /// # Errors
    ///
    /// Returns [`BoxError::InvalidAxis`] naming the first axis, in peel
    /// order, whose bounds are inverted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_space::spatial_box::SpatialBox;
    /// # use tessera_space::axis::Axis;
    ///
    /// assert!(SpatialBox::try_from_bounds((1, 10), (2, 5), (0, 0), ()).is_ok());
    ///
    /// let err = SpatialBox::try_from_bounds((1, 10), (5, 2), (0, 0), ()).unwrap_err();
    /// assert_eq!(err.axis(), Axis::Length);
    /// ```
    pub fn try_from_bounds(
        offer: (O, O),
        length: (L, L),
        season: (S, S),
        context: C,
    ) -> Result<Self> {
        let offer = ClosedInterval::try_new(offer.0, offer.1).map_err(|source| {
            BoxError::InvalidAxis {
                axis: Axis::Offer,
                source,
            }
        })?;
        let length = ClosedInterval::try_new(length.0, length.1).map_err(|source| {
            BoxError::InvalidAxis {
                axis: Axis::Length,
                source,
            }
        })?;
        let season = ClosedInterval::try_new(season.0, season.1).map_err(|source| {
            BoxError::InvalidAxis {
                axis: Axis::Season,
                source,
            }
        })?;
        Ok(Self::new(offer, length, season, context))
    }

    /// Returns `true` if the point `(offer, length, season)` lies inside the box.
    #[inline]
    pub fn contains_point(&self, offer: &O, length: &L, season: &S) -> bool {
        self.offer.contains_point(offer)
            && self.length.contains_point(length)
            && self.season.contains_point(season)
    }

    /// Returns `true` if `self` and `other` cover exactly the same volume.
    #[inline]
    pub fn same_geometry<D>(&self, other: &SpatialBox<O, L, S, D>) -> bool {
        self.offer.equals(&other.offer)
            && self.length.equals(&other.length)
            && self.season.equals(&other.season)
    }
}

impl<O, L, S, C> SpatialBox<O, L, S, C>
where
    O: Clone,
    L: Clone,
    S: Clone,
{
    /// Returns a copy with the context replaced by `transformer(context)`.
    ///
    /// The geometry is copied unchanged.
    #[inline]
    pub fn map_context<D, F>(&self, transformer: F) -> SpatialBox<O, L, S, D>
    where
        F: FnOnce(&C) -> D,
    {
        SpatialBox::new(
            self.offer.clone(),
            self.length.clone(),
            self.season.clone(),
            transformer(&self.context),
        )
    }
}

impl<O, L, S, C> SpatialBox<O, L, S, C>
where
    O: Clone,
    L: Clone,
    S: Clone,
    C: Clone,
{
    /// Returns a copy with all three axes replaced and the context kept.
    #[inline]
    pub fn with_axes(
        &self,
        offer: ClosedInterval<O>,
        length: ClosedInterval<L>,
        season: ClosedInterval<S>,
    ) -> Self {
        Self::new(offer, length, season, self.context.clone())
    }

    /// Returns a copy with only the offer axis replaced.
    #[inline]
    pub fn with_offer(&self, offer: ClosedInterval<O>) -> Self {
        self.with_axes(offer, self.length.clone(), self.season.clone())
    }

    /// Returns a copy with only the length axis replaced.
    #[inline]
    pub fn with_length(&self, length: ClosedInterval<L>) -> Self {
        self.with_axes(self.offer.clone(), length, self.season.clone())
    }

    /// Returns a copy with only the season axis replaced.
    #[inline]
    pub fn with_season(&self, season: ClosedInterval<S>) -> Self {
        self.with_axes(self.offer.clone(), self.length.clone(), season)
    }
}

impl<O, L, S, C> std::fmt::Display for SpatialBox<O, L, S, C>
where
    O: std::fmt::Display,
    L: std::fmt::Display,
    S: std::fmt::Display,
    C: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.offer, self.length, self.season, self.context
        )
    }
}
