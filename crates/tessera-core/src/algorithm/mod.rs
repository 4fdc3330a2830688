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

use tracing::trace;

/// Finds the first pair `(i, j)` with `i < j` for which `merge` succeeds.
///
/// Pairs are visited in row-major order, so the result is deterministic:
/// the smallest `i`, then the smallest `j` for that `i`.
pub fn first_mergeable_pair<T, F>(items: &[T], mut merge: F) -> Option<(usize, usize, T)>
where
    F: FnMut(&T, &T) -> Option<T>,
{
    for i in 0..items.len() {
        for j in (i + 1)..items.len() {
            if let Some(merged) = merge(&items[i], &items[j]) {
                return Some((i, j, merged));
            }
        }
    }
    None
}

/// Reduces `items` to a fixed point of pairwise merges.
///
/// Each round replaces the first mergeable pair (see [`first_mergeable_pair`])
/// with the merged value, appended at the end, and restarts the scan. The
/// loop stops once no pair merges. Worst-case cost is cubic in `items.len()`.
pub fn coalesce_pairs<T, F>(mut items: Vec<T>, mut merge: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Option<T>,
{
    let mut rounds = 0usize;
    while let Some((i, j, merged)) = first_mergeable_pair(&items, &mut merge) {
        // `j > i`, so removing `j` first keeps `i` in place.
        items.remove(j);
        items.remove(i);
        items.push(merged);
        rounds += 1;
        trace!(i, j, remaining = items.len(), "merged pair");
    }
    trace!(rounds, len = items.len(), "coalescing reached fixed point");
    items
}

/// Checks whether no two items of `items` intersect.
///
/// Returns `true` for empty and single-element slices.
#[inline]
pub fn are_pairwise_disjoint<T, F>(items: &[T], mut intersects: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    items
        .iter()
        .enumerate()
        .all(|(i, a)| items[i + 1..].iter().all(|b| !intersects(a, b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Merges two `(start, end)` pairs when they overlap or touch.
    fn merge_ranges(a: &(i64, i64), b: &(i64, i64)) -> Option<(i64, i64)> {
        if a.1 + 1 >= b.0 && b.1 + 1 >= a.0 {
            Some((a.0.min(b.0), a.1.max(b.1)))
        } else {
            None
        }
    }

    #[test]
    fn test_first_mergeable_pair_row_major() {
        let items = vec![(0, 1), (10, 11), (2, 3), (12, 13)];
        // (0, 2) merges before (1, 3) is ever considered.
        assert_eq!(
            first_mergeable_pair(&items, merge_ranges),
            Some((0, 2, (0, 3)))
        );
    }

    #[test]
    fn test_first_mergeable_pair_none() {
        let items = vec![(0, 1), (5, 6)];
        assert_eq!(first_mergeable_pair(&items, merge_ranges), None);

        let empty: Vec<(i64, i64)> = vec![];
        assert_eq!(first_mergeable_pair(&empty, merge_ranges), None);
    }

    #[test]
    fn test_coalesce_pairs_appends_merged() {
        let items = vec![(0, 1), (10, 11), (2, 3), (12, 13)];
        let result = coalesce_pairs(items, merge_ranges);
        assert_eq!(result, vec![(0, 3), (10, 13)]);
    }

    #[test]
    fn test_coalesce_pairs_chain() {
        let items = vec![(6, 7), (0, 1), (4, 5), (2, 3)];
        let result = coalesce_pairs(items, merge_ranges);
        assert_eq!(result, vec![(0, 7)]);
    }

    #[test]
    fn test_coalesce_pairs_fixed_point_untouched() {
        let items = vec![(0, 1), (5, 6), (9, 9)];
        assert_eq!(coalesce_pairs(items.clone(), merge_ranges), items);
    }

    #[test]
    fn test_are_pairwise_disjoint() {
        let overlaps = |a: &(i64, i64), b: &(i64, i64)| a.1 >= b.0 && b.1 >= a.0;

        assert!(are_pairwise_disjoint::<(i64, i64), _>(&[], overlaps));
        assert!(are_pairwise_disjoint(&[(0, 1)], overlaps));
        assert!(are_pairwise_disjoint(&[(0, 1), (2, 3), (9, 9)], overlaps));
        assert!(!are_pairwise_disjoint(&[(0, 1), (2, 3), (3, 9)], overlaps));
        // Non-adjacent positions are compared too
        assert!(!are_pairwise_disjoint(&[(0, 5), (7, 8), (4, 4)], overlaps));
    }
}
