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

//! # Box Algebra
//!
//! Intersection, difference and adjacency merge of [`SpatialBox`]es,
//! expressed axis by axis in terms of the closed interval algebra.
//!
//! The list-level `*_many` forms are sequential folds, not cross products:
//! the working set is narrowed (or whittled down) by each element of the
//! second list in turn, left to right. When the inputs overlap themselves
//! this order is observable, so it is part of the contract.

use crate::axis::AxisShifters;
use crate::identity::{ContextEquivalence, ItemIdentity, SetIdentity, group_by_key};
use crate::spatial_box::SpatialBox;
use std::hash::Hash;
use tessera_core::algorithm::coalesce_pairs;
use tessera_core::math::interval::ClosedInterval;
use tessera_core::math::shift::Shifter;
use tracing::debug;

/// The per-axis overlap of two boxes.
pub type Overlap<O, L, S> = (ClosedInterval<O>, ClosedInterval<L>, ClosedInterval<S>);

impl<O, L, S, C> SpatialBox<O, L, S, C>
where
    O: Ord + Clone,
    L: Ord + Clone,
    S: Ord + Clone,
{
    /// Returns `true` if the boxes share at least one point.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.offer().intersects(other.offer())
            && self.length().intersects(other.length())
            && self.season().intersects(other.season())
    }

    /// Returns the per-axis intersection, or `None` if any axis is disjoint.
    pub fn overlap(&self, other: &Self) -> Option<Overlap<O, L, S>> {
        let offer = self.offer().intersection(other.offer());
        let length = self.length().intersection(other.length());
        let season = self.season().intersection(other.season());
        Some((offer?, length?, season?))
    }

    /// Intersects two boxes.
    ///
    /// Returns `None` if any axis intersection is empty. Otherwise the
    /// context of the result is `combiner(self.context(), other.context())`,
    /// in exactly that argument order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_space::spatial_box::SpatialBox;
    /// # use tessera_core::math::interval::ClosedInterval;
    ///
    /// let iv = |b, e| ClosedInterval::new(b, e);
    /// let a = SpatialBox::new(iv(0, 10), iv(0, 10), iv(0, 10), 2);
    /// let b = SpatialBox::new(iv(5, 15), iv(0, 3), iv(0, 10), 3);
    ///
    /// let i = a.intersect(&b, |x, y| x * 10 + y).unwrap();
    /// assert_eq!(*i.offer(), iv(5, 10));
    /// assert_eq!(*i.length(), iv(0, 3));
    /// assert_eq!(*i.context(), 23);
    /// ```
    pub fn intersect<F>(&self, other: &Self, combiner: F) -> Option<Self>
    where
        F: FnOnce(&C, &C) -> C,
    {
        let (offer, length, season) = self.overlap(other)?;
        Some(SpatialBox::new(
            offer,
            length,
            season,
            combiner(self.context(), other.context()),
        ))
    }
}

impl<O, L, S, C> SpatialBox<O, L, S, C>
where
    O: Ord + Clone,
    L: Ord + Clone,
    S: Ord + Clone,
    C: Clone,
{
    /// Returns the parts of `self` not covered by `other`.
    ///
    /// If the boxes do not intersect the result is `[self]`. Otherwise, with
    /// `I` the overlap, the axes are peeled in order:
    ///
    /// 1. offer remainders, other axes untouched;
    /// 2. length remainders, offer pinned to `I.offer`;
    /// 3. season remainders, offer and length pinned to `I`.
    ///
    /// The pinning keeps the pieces pairwise disjoint; together with `I`
    /// they reconstitute `self` exactly. At most six boxes are produced,
    /// each carrying a copy of `self`'s context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_space::spatial_box::SpatialBox;
    /// # use tessera_space::axis::AxisShifters;
    /// # use tessera_core::math::interval::ClosedInterval;
    ///
    /// let iv = |b, e| ClosedInterval::new(b, e);
    /// let outer = SpatialBox::new(iv(0, 9), iv(0, 9), iv(0, 9), ());
    /// let core = SpatialBox::new(iv(3, 5), iv(3, 5), iv(3, 5), ());
    ///
    /// let shell = outer.difference(&core, &AxisShifters::discrete());
    /// assert_eq!(shell.len(), 6);
    /// ```
    pub fn difference<SO, SL, SS>(
        &self,
        other: &Self,
        shifters: &AxisShifters<SO, SL, SS>,
    ) -> Vec<Self>
    where
        SO: Shifter<O>,
        SL: Shifter<L>,
        SS: Shifter<S>,
    {
        let Some((offer, length, season)) = self.overlap(other) else {
            return vec![self.clone()];
        };

        let mut result = Vec::new();
        result.extend(
            self.offer()
                .difference(&offer, shifters.offer())
                .into_iter()
                .map(|o| self.with_offer(o)),
        );
        result.extend(
            self.length()
                .difference(&length, shifters.length())
                .into_iter()
                .map(|l| self.with_axes(offer.clone(), l, self.season().clone())),
        );
        result.extend(
            self.season()
                .difference(&season, shifters.season())
                .into_iter()
                .map(|s| self.with_axes(offer.clone(), length.clone(), s)),
        );
        result
    }

    /// Coalesces two boxes that differ along exactly one axis.
    ///
    /// Succeeds only if one axis merges (equal, overlapping or adjacent)
    /// while the other two are equal; axes are tried in peel order. The
    /// result is `self` with only the merged axis replaced. The context is
    /// taken from `self` unchanged, so callers must only merge boxes whose
    /// contexts they consider identical.
    pub fn merge<SO, SL, SS>(
        &self,
        other: &Self,
        shifters: &AxisShifters<SO, SL, SS>,
    ) -> Option<Self>
    where
        SO: Shifter<O>,
        SL: Shifter<L>,
        SS: Shifter<S>,
    {
        let offers_equal = self.offer().equals(other.offer());
        let lengths_equal = self.length().equals(other.length());
        let seasons_equal = self.season().equals(other.season());

        if lengths_equal && seasons_equal {
            if let Some(offer) = self.offer().merge(other.offer(), shifters.offer()) {
                return Some(self.with_offer(offer));
            }
        }
        if offers_equal && seasons_equal {
            if let Some(length) = self.length().merge(other.length(), shifters.length()) {
                return Some(self.with_length(length));
            }
        }
        if offers_equal && lengths_equal {
            if let Some(season) = self.season().merge(other.season(), shifters.season()) {
                return Some(self.with_season(season));
            }
        }
        None
    }
}

/// Intersects every box of `boxes` with `other`, dropping empty results.
///
/// Contexts are combined as `combiner(box, other)`.
pub fn intersect_each<O, L, S, C, F>(
    boxes: &[SpatialBox<O, L, S, C>],
    other: &SpatialBox<O, L, S, C>,
    combiner: F,
) -> Vec<SpatialBox<O, L, S, C>>
where
    O: Ord + Clone,
    L: Ord + Clone,
    S: Ord + Clone,
    F: Fn(&C, &C) -> C,
{
    boxes
        .iter()
        .filter_map(|b| b.intersect(other, &combiner))
        .collect()
}

/// Intersects `other` with every box of `boxes`.
///
/// This is [`intersect_each`] with the list as receiver: contexts are
/// combined as `combiner(list_box, other)`.
#[inline]
pub fn intersect_all<O, L, S, C, F>(
    other: &SpatialBox<O, L, S, C>,
    boxes: &[SpatialBox<O, L, S, C>],
    combiner: F,
) -> Vec<SpatialBox<O, L, S, C>>
where
    O: Ord + Clone,
    L: Ord + Clone,
    S: Ord + Clone,
    F: Fn(&C, &C) -> C,
{
    intersect_each(boxes, other, combiner)
}

/// Narrows `boxes` by each box of `others` in turn, left to right.
pub fn intersect_many<O, L, S, C, F>(
    boxes: &[SpatialBox<O, L, S, C>],
    others: &[SpatialBox<O, L, S, C>],
    combiner: F,
) -> Vec<SpatialBox<O, L, S, C>>
where
    O: Ord + Clone,
    L: Ord + Clone,
    S: Ord + Clone,
    C: Clone,
    F: Fn(&C, &C) -> C,
{
    others.iter().fold(boxes.to_vec(), |acc, other| {
        intersect_each(&acc, other, &combiner)
    })
}

/// Subtracts `other` from every box of `boxes`.
pub fn difference_each<O, L, S, C, SO, SL, SS>(
    boxes: &[SpatialBox<O, L, S, C>],
    other: &SpatialBox<O, L, S, C>,
    shifters: &AxisShifters<SO, SL, SS>,
) -> Vec<SpatialBox<O, L, S, C>>
where
    O: Ord + Clone,
    L: Ord + Clone,
    S: Ord + Clone,
    C: Clone,
    SO: Shifter<O>,
    SL: Shifter<L>,
    SS: Shifter<S>,
{
    boxes
        .iter()
        .flat_map(|b| b.difference(other, shifters))
        .collect()
}

/// Subtracts every box of `others` from `boxed`, left to right.
pub fn difference_all<O, L, S, C, SO, SL, SS>(
    boxed: &SpatialBox<O, L, S, C>,
    others: &[SpatialBox<O, L, S, C>],
    shifters: &AxisShifters<SO, SL, SS>,
) -> Vec<SpatialBox<O, L, S, C>>
where
    O: Ord + Clone,
    L: Ord + Clone,
    S: Ord + Clone,
    C: Clone,
    SO: Shifter<O>,
    SL: Shifter<L>,
    SS: Shifter<S>,
{
    others.iter().fold(vec![boxed.clone()], |acc, other| {
        difference_each(&acc, other, shifters)
    })
}

/// Whittles `boxes` down by each box of `others` in turn, left to right.
pub fn difference_many<O, L, S, C, SO, SL, SS>(
    boxes: &[SpatialBox<O, L, S, C>],
    others: &[SpatialBox<O, L, S, C>],
    shifters: &AxisShifters<SO, SL, SS>,
) -> Vec<SpatialBox<O, L, S, C>>
where
    O: Ord + Clone,
    L: Ord + Clone,
    S: Ord + Clone,
    C: Clone,
    SO: Shifter<O>,
    SL: Shifter<L>,
    SS: Shifter<S>,
{
    others.iter().fold(boxes.to_vec(), |acc, other| {
        difference_each(&acc, other, shifters)
    })
}

/// Coalesces boxes whose contexts are equivalent.
///
/// Boxes are grouped by `equivalence` (groups in order of first appearance).
/// Within a group the first mergeable pair in row-major `(i, j)` order is
/// replaced by the merged box, appended at the end of the group, and the
/// scan restarts until no pair merges. Each merged box keeps the context of
/// the earlier box of its pair.
pub fn merge_by<O, L, S, C, E, SO, SL, SS>(
    boxes: Vec<SpatialBox<O, L, S, C>>,
    equivalence: &E,
    shifters: &AxisShifters<SO, SL, SS>,
) -> Vec<SpatialBox<O, L, S, C>>
where
    O: Ord + Clone,
    L: Ord + Clone,
    S: Ord + Clone,
    C: Clone,
    E: ContextEquivalence<C>,
    SO: Shifter<O>,
    SL: Shifter<L>,
    SS: Shifter<S>,
{
    let input_len = boxes.len();
    let groups = group_by_key(boxes, |b| equivalence.key(b.context()));
    let group_count = groups.len();

    let result: Vec<_> = groups
        .into_iter()
        .flat_map(|group| coalesce_pairs(group, |a, b| a.merge(b, shifters)))
        .collect();

    debug!(
        input = input_len,
        groups = group_count,
        output = result.len(),
        "merged boxes by context"
    );
    result
}

/// [`merge_by`] with contexts compared through a single identity key.
#[inline]
pub fn merge_items<O, L, S, C, K, F, SO, SL, SS>(
    boxes: Vec<SpatialBox<O, L, S, C>>,
    identify: F,
    shifters: &AxisShifters<SO, SL, SS>,
) -> Vec<SpatialBox<O, L, S, C>>
where
    O: Ord + Clone,
    L: Ord + Clone,
    S: Ord + Clone,
    C: Clone,
    F: Fn(&C) -> K,
    K: Eq + Hash,
    SO: Shifter<O>,
    SL: Shifter<L>,
    SS: Shifter<S>,
{
    merge_by(boxes, &ItemIdentity::new(identify), shifters)
}

/// [`merge_by`] for list contexts, compared by the set of item identities.
#[inline]
pub fn merge_item_lists<O, L, S, T, K, F, SO, SL, SS>(
    boxes: Vec<SpatialBox<O, L, S, Vec<T>>>,
    identify: F,
    shifters: &AxisShifters<SO, SL, SS>,
) -> Vec<SpatialBox<O, L, S, Vec<T>>>
where
    O: Ord + Clone,
    L: Ord + Clone,
    S: Ord + Clone,
    T: Clone,
    F: Fn(&T) -> K,
    K: Ord + Hash,
    SO: Shifter<O>,
    SL: Shifter<L>,
    SS: Shifter<S>,
{
    merge_by(boxes, &SetIdentity::new(identify), shifters)
}
