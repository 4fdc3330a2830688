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

//! # Tessera Space
//!
//! **Context-carrying hyperboxes and the disjoint partition reducer.**
//!
//! A [`SpatialBox`](spatial_box::SpatialBox) is the Cartesian product of three
//! closed intervals (the offer, length and season axes) tagged with an opaque
//! context. Rule sets expressed as boxes usually overlap; this crate flattens
//! them into pairwise-disjoint partitions whose contexts record how the
//! overlapping rules combine.
//!
//! ## Architecture
//!
//! * **`axis`**: Axis names and the per-axis shifter bundle (`AxisShifters`).
//! * **`spatial_box`**: The immutable box type and its field-wise copies.
//! * **`algebra`**: Box intersection, difference and adjacency merge, plus
//!   their list-level forms and the grouped fixed-point merge.
//! * **`identity`**: Context equivalence strategies that drive list merge.
//! * **`partition`**: `join`, `distinct`, `transform` and the `Partition`
//!   collection.
//! * **`pricing`**: The booking-window × nights × season instantiation
//!   (requires the `chrono` feature).
//!
//! ## Design Philosophy
//!
//! 1.  **Immutability**: Every operation borrows its inputs and returns fresh
//!     boxes. Nothing is mutated in place.
//! 2.  **Strategies as parameters**: Combiners, shifters and context
//!     equivalences are passed into each call. The algebra never inspects a
//!     context on its own.
//! 3.  **Order is observable**: Combiners are applied as `(existing, new)`
//!     and folds run in input order. Non-commutative combiners see exactly
//!     that order.

pub mod algebra;
pub mod axis;
pub mod error;
pub mod identity;
pub mod partition;
#[cfg(feature = "chrono")]
pub mod pricing;
pub mod spatial_box;
