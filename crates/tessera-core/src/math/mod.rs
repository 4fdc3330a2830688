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

//! # Math Primitives
//!
//! One-dimensional structures the box algebra is built from.
//!
//! ## Submodules
//!
//! - `interval`: A generic closed interval `[begin, end]` with validation,
//!   predicates (equality, intersection, containment), and the set-like
//!   operations intersection, difference and adjacency merge.
//! - `shift`: The `Shifter` abstraction for discrete successor and
//!   predecessor, with natural steps for primitive integers and calendar
//!   dates.
//!
//! ## Motivation
//!
//! Pricing rules are expressed over closed ranges ("from the 1st to the 10th
//! inclusive"). Difference and merge on closed ranges need to know the value
//! just before or after a boundary, which is exactly what a shifter supplies.

pub mod interval;
pub mod shift;
