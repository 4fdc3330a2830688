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

//! Errors raised while constructing boxes.

use crate::axis::Axis;
use tessera_core::error::IntervalError;
use thiserror::Error;

/// Error returned when a box cannot be constructed from raw bounds.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoxError {
    /// One of the three axes has inverted bounds.
    #[error("invalid {axis} axis")]
    InvalidAxis {
        axis: Axis,
        #[source]
        source: IntervalError,
    },
}

impl BoxError {
    /// Returns the axis that failed validation.
    #[inline]
    pub const fn axis(&self) -> Axis {
        match self {
            BoxError::InvalidAxis { axis, .. } => *axis,
        }
    }
}

/// Result type alias using [`BoxError`].
pub type Result<T> = std::result::Result<T, BoxError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_and_source() {
        let err = BoxError::InvalidAxis {
            axis: Axis::Season,
            source: IntervalError::Inverted,
        };
        assert_eq!(err.to_string(), "invalid season axis");
        assert_eq!(err.axis(), Axis::Season);
        assert!(err.source().is_some());
    }
}
