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

//! # Partition Reducer
//!
//! Flattens overlapping boxes into pairwise-disjoint partitions.
//!
//! [`join`] folds one new box into an existing disjoint partition;
//! [`distinct`] folds a whole list, in input order, starting from nothing.
//! At every point covered by `k` input boxes the resulting context is the
//! left fold of the combiner over those boxes in input order:
//! `combiner(combiner(c1, c2), c3)`. Supply an associative, commutative
//! combiner if the result must not depend on input order.
//!
//! [`Partition`] wraps the resulting list and offers the same operations as
//! methods.

use crate::algebra::{difference_each, intersect_each, merge_by};
use crate::axis::AxisShifters;
use crate::identity::ContextEquivalence;
use crate::spatial_box::SpatialBox;
use tessera_core::algorithm::are_pairwise_disjoint;
use tessera_core::math::shift::Shifter;
use tracing::{debug, trace};

/// Folds `new_box` into the disjoint `partition`.
///
/// The result is `differences ++ intersections ++ uncovered`, where
///
/// - `differences` are the parts of existing boxes outside `new_box`,
///   keeping their contexts;
/// - `intersections` are the overlaps with context
///   `combiner(existing, new_box)`;
/// - `uncovered` is what remains of `new_box` after subtracting every
///   intersection in turn, keeping `new_box`'s context.
///
/// If `partition` is pairwise disjoint, so is the result, and it covers
/// exactly `partition ∪ new_box`.
pub fn join<O, L, S, C, F, SO, SL, SS>(
    partition: &[SpatialBox<O, L, S, C>],
    new_box: &SpatialBox<O, L, S, C>,
    combiner: F,
    shifters: &AxisShifters<SO, SL, SS>,
) -> Vec<SpatialBox<O, L, S, C>>
where
    O: Ord + Clone,
    L: Ord + Clone,
    S: Ord + Clone,
    C: Clone,
    F: Fn(&C, &C) -> C,
    SO: Shifter<O>,
    SL: Shifter<L>,
    SS: Shifter<S>,
{
    let differences = difference_each(partition, new_box, shifters);
    let intersections = intersect_each(partition, new_box, &combiner);
    let uncovered = intersections
        .iter()
        .fold(new_box.clone().into_list(), |parts, intersection| {
            difference_each(&parts, intersection, shifters)
        });

    trace!(
        existing = partition.len(),
        differences = differences.len(),
        intersections = intersections.len(),
        uncovered = uncovered.len(),
        "joined box into partition"
    );

    let mut result =
        Vec::with_capacity(differences.len() + intersections.len() + uncovered.len());
    result.extend(differences);
    result.extend(intersections);
    result.extend(uncovered);
    result
}

/// Reduces `boxes` to a pairwise-disjoint partition.
///
/// Boxes are joined strictly in input order, starting from an empty
/// partition.
///
/// # Examples
///
/// ```rust
/// # use tessera_space::spatial_box::SpatialBox;
/// # use tessera_space::axis::AxisShifters;
/// # use tessera_space::partition::distinct;
/// # use tessera_core::math::interval::ClosedInterval;
///
/// let iv = |b, e| ClosedInterval::new(b, e);
/// let rules = vec![
///     SpatialBox::new(iv(0, 9), iv(1, 1), iv(0, 0), 1),
///     SpatialBox::new(iv(5, 14), iv(1, 1), iv(0, 0), 10),
/// ];
///
/// let flat = distinct(&rules, |a, b| a + b, &AxisShifters::discrete());
/// let summary: Vec<_> = flat.iter().map(|b| (*b.offer(), *b.context())).collect();
/// assert_eq!(summary, vec![(iv(0, 4), 1), (iv(5, 9), 11), (iv(10, 14), 10)]);
/// ```
pub fn distinct<O, L, S, C, F, SO, SL, SS>(
    boxes: &[SpatialBox<O, L, S, C>],
    combiner: F,
    shifters: &AxisShifters<SO, SL, SS>,
) -> Vec<SpatialBox<O, L, S, C>>
where
    O: Ord + Clone,
    L: Ord + Clone,
    S: Ord + Clone,
    C: Clone,
    F: Fn(&C, &C) -> C,
    SO: Shifter<O>,
    SL: Shifter<L>,
    SS: Shifter<S>,
{
    let result = boxes.iter().fold(Vec::new(), |partition, new_box| {
        join(&partition, new_box, &combiner, shifters)
    });
    debug!(
        input = boxes.len(),
        output = result.len(),
        "reduced boxes to disjoint partition"
    );
    result
}

/// Maps every context with `transformer`, leaving geometry untouched.
pub fn transform<O, L, S, C, D, F>(
    boxes: &[SpatialBox<O, L, S, C>],
    mut transformer: F,
) -> Vec<SpatialBox<O, L, S, D>>
where
    O: Clone,
    L: Clone,
    S: Clone,
    F: FnMut(&C) -> D,
{
    boxes
        .iter()
        .map(|b| b.map_context(&mut transformer))
        .collect()
}

/// A list of boxes kept pairwise disjoint by the reducer operations.
///
/// The type does not check disjointness itself; it holds whatever the
/// reducer produced. [`Partition::is_pairwise_disjoint`] verifies it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Partition<O, L, S, C> {
    boxes: Vec<SpatialBox<O, L, S, C>>,
}

impl<O, L, S, C> Default for Partition<O, L, S, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O, L, S, C> Partition<O, L, S, C> {
    /// Creates an empty partition.
    #[inline]
    pub const fn new() -> Self {
        Self { boxes: Vec::new() }
    }

    /// Returns the number of boxes.
    #[inline]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Returns `true` if the partition holds no boxes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Returns the boxes as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[SpatialBox<O, L, S, C>] {
        &self.boxes
    }

    /// Returns an iterator over the boxes.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, SpatialBox<O, L, S, C>> {
        self.boxes.iter()
    }

    /// Consumes the partition and returns its boxes.
    #[inline]
    pub fn into_vec(self) -> Vec<SpatialBox<O, L, S, C>> {
        self.boxes
    }
}

impl<O, L, S, C> Partition<O, L, S, C>
where
    O: Ord + Clone,
    L: Ord + Clone,
    S: Ord + Clone,
    C: Clone,
{
    /// Builds a partition from arbitrary, possibly overlapping boxes.
    ///
    /// See [`distinct`].
    pub fn from_boxes<F, SO, SL, SS>(
        boxes: &[SpatialBox<O, L, S, C>],
        combiner: F,
        shifters: &AxisShifters<SO, SL, SS>,
    ) -> Self
    where
        F: Fn(&C, &C) -> C,
        SO: Shifter<O>,
        SL: Shifter<L>,
        SS: Shifter<S>,
    {
        Self {
            boxes: distinct(boxes, combiner, shifters),
        }
    }

    /// Returns a new partition with `new_box` folded in.
    ///
    /// See [`join`].
    pub fn join<F, SO, SL, SS>(
        &self,
        new_box: &SpatialBox<O, L, S, C>,
        combiner: F,
        shifters: &AxisShifters<SO, SL, SS>,
    ) -> Self
    where
        F: Fn(&C, &C) -> C,
        SO: Shifter<O>,
        SL: Shifter<L>,
        SS: Shifter<S>,
    {
        Self {
            boxes: join(&self.boxes, new_box, combiner, shifters),
        }
    }

    /// Coalesces adjacent boxes with equivalent contexts.
    ///
    /// Merging never introduces overlap, so the result is still disjoint.
    /// See [`merge_by`].
    pub fn merge_by<E, SO, SL, SS>(
        self,
        equivalence: &E,
        shifters: &AxisShifters<SO, SL, SS>,
    ) -> Self
    where
        E: ContextEquivalence<C>,
        SO: Shifter<O>,
        SL: Shifter<L>,
        SS: Shifter<S>,
    {
        Self {
            boxes: merge_by(self.boxes, equivalence, shifters),
        }
    }

    /// Returns `true` if no two boxes intersect.
    pub fn is_pairwise_disjoint(&self) -> bool {
        are_pairwise_disjoint(&self.boxes, |a, b| a.intersects(b))
    }
}

impl<O, L, S, C> Partition<O, L, S, C>
where
    O: Clone,
    L: Clone,
    S: Clone,
{
    /// Maps every context, leaving geometry untouched.
    pub fn transform<D, F>(&self, transformer: F) -> Partition<O, L, S, D>
    where
        F: FnMut(&C) -> D,
    {
        Partition {
            boxes: transform(&self.boxes, transformer),
        }
    }
}

impl<O, L, S, C> IntoIterator for Partition<O, L, S, C> {
    type Item = SpatialBox<O, L, S, C>;
    type IntoIter = std::vec::IntoIter<SpatialBox<O, L, S, C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.boxes.into_iter()
    }
}

impl<'a, O, L, S, C> IntoIterator for &'a Partition<O, L, S, C> {
    type Item = &'a SpatialBox<O, L, S, C>;
    type IntoIter = std::slice::Iter<'a, SpatialBox<O, L, S, C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.boxes.iter()
    }
}
