// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use crate::{
    geometry::Triangle2,
    kernel::orientation::{Orientation, orientation2d},
    numeric::scalar::Scalar,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindingError {
    /// The triangle is clockwise-wound and automatic correction was not
    /// requested.
    WrongWindingDirection,
}

impl fmt::Display for WindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindingError::WrongWindingDirection => {
                write!(f, "triangle has wrong winding direction")
            }
        }
    }
}

impl std::error::Error for WindingError {}

/// Orient `tri` counter-clockwise.
///
/// A counter-clockwise (or collinear) triangle is returned unchanged. A
/// clockwise one is corrected via [`Triangle2::reversed`] when
/// `allow_reversed` is set, and rejected otherwise. The orientation test
/// is an exact determinant sign, no tolerance.
pub fn normalize_winding<T>(
    tri: &Triangle2<T>,
    allow_reversed: bool,
) -> Result<Triangle2<T>, WindingError>
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    match orientation2d(&tri.a, &tri.b, &tri.c) {
        Orientation::Clockwise if allow_reversed => Ok(tri.reversed()),
        Orientation::Clockwise => Err(WindingError::WrongWindingDirection),
        _ => Ok(tri.clone()),
    }
}
