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

//! # Context Equivalence
//!
//! List merge only coalesces boxes whose contexts are considered identical.
//! What "identical" means is up to the caller: a [`ContextEquivalence`] maps
//! a context to a hashable key, and boxes with equal keys form one merge
//! group.
//!
//! Two strategies cover the usual shapes of context:
//!
//! - [`ItemIdentity`]: the context is a single item identified by a key.
//! - [`SetIdentity`]: the context is a list of items; two lists are
//!   equivalent when they contain the same *set* of item keys, regardless of
//!   order or repetition.

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// An equivalence relation over contexts, expressed as a key function.
pub trait ContextEquivalence<C> {
    /// The canonical key of an equivalence class.
    type Key: Eq + Hash;

    /// Returns the key of the class `context` belongs to.
    fn key(&self, context: &C) -> Self::Key;
}

/// Equivalence by a scalar identity of the context.
///
/// # Examples
///
/// ```rust
/// # use tessera_space::identity::{ContextEquivalence, ItemIdentity};
///
/// let by_id = ItemIdentity::new(|rule: &(u32, char)| rule.0);
/// assert_eq!(by_id.key(&(7, 'a')), by_id.key(&(7, 'b')));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ItemIdentity<F> {
    identify: F,
}

impl<F> ItemIdentity<F> {
    /// Wraps an identity function.
    #[inline]
    pub const fn new(identify: F) -> Self {
        Self { identify }
    }
}

impl<C, K, F> ContextEquivalence<C> for ItemIdentity<F>
where
    F: Fn(&C) -> K,
    K: Eq + Hash,
{
    type Key = K;

    #[inline]
    fn key(&self, context: &C) -> K {
        (self.identify)(context)
    }
}

/// Equivalence of list contexts by the set of their item identities.
///
/// # Examples
///
/// ```rust
/// # use tessera_space::identity::{ContextEquivalence, SetIdentity};
///
/// let by_ids = SetIdentity::new(|id: &u32| *id);
/// assert_eq!(by_ids.key(&vec![3, 1, 3]), by_ids.key(&vec![1, 3]));
/// assert_ne!(by_ids.key(&vec![1, 2]), by_ids.key(&vec![1, 3]));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SetIdentity<F> {
    identify: F,
}

impl<F> SetIdentity<F> {
    /// Wraps the identity function applied to each list item.
    #[inline]
    pub const fn new(identify: F) -> Self {
        Self { identify }
    }
}

impl<T, K, F> ContextEquivalence<Vec<T>> for SetIdentity<F>
where
    F: Fn(&T) -> K,
    K: Ord + Hash,
{
    type Key = Vec<K>;

    fn key(&self, context: &Vec<T>) -> Vec<K> {
        let mut keys: Vec<K> = context.iter().map(&self.identify).collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }
}

/// Splits `items` into groups of equal key.
///
/// Groups appear in the order their first member appears in `items`, and
/// members keep their relative input order.
pub fn group_by_key<T, K, F>(items: Vec<T>, mut key: F) -> Vec<Vec<T>>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut slots: FxHashMap<K, usize> = FxHashMap::default();
    let mut groups: Vec<Vec<T>> = Vec::new();
    for item in items {
        let next = groups.len();
        let slot = *slots.entry(key(&item)).or_insert(next);
        if slot == next {
            groups.push(Vec::new());
        }
        groups[slot].push(item);
    }
    groups
}
