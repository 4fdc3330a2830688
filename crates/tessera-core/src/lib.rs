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

//! # Tessera Core
//!
//! Foundational interval math for the Tessera box algebra. This crate holds
//! the one-dimensional building blocks that the multi-axis `tessera-space`
//! crate is expressed in terms of.
//!
//! ## Modules
//!
//! - `math`: The closed interval `[begin, end]` over any totally ordered
//!   type, with equality, overlap, intersection, difference and
//!   adjacency-aware merge, plus the `Shifter` abstraction that gives an
//!   axis its discrete successor/predecessor.
//! - `algorithm`: Generic list reductions shared by the interval and box
//!   layers, most importantly the first-pair fixed-point coalescing loop.
//! - `num`: Integer helpers used to step primitive axes without overflow.
//! - `error`: Construction-time validation errors.
//!
//! ## Purpose
//!
//! Every operation is pure: it borrows its inputs and returns fresh values.
//! Absence of a result (empty intersection, failed merge) is an `Option`,
//! never an error. The only fallible step is construction, where inverted
//! intervals are rejected.

pub mod algorithm;
pub mod error;
pub mod math;
pub mod num;
