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

use crate::geometry::point_2::Point2;
use crate::numeric::scalar::Scalar;

/// Ordered vertex triple.
///
/// The vertex order is meaningful: it carries the winding. A
/// counter-clockwise triangle has positive signed area.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle2<T>
where
    T: Scalar,
{
    pub a: Point2<T>,
    pub b: Point2<T>,
    pub c: Point2<T>,
}

impl<T> Triangle2<T>
where
    T: Scalar,
{
    pub fn new(a: Point2<T>, b: Point2<T>, c: Point2<T>) -> Self {
        Self { a, b, c }
    }

    /// Vertices in order.
    pub fn vertices(&self) -> [&Point2<T>; 3] {
        [&self.a, &self.b, &self.c]
    }

    /// Same triangle with the opposite winding.
    ///
    /// Only the last two vertices are swapped; the first stays in place.
    pub fn reversed(&self) -> Self {
        Self {
            a: self.a.clone(),
            b: self.c.clone(),
            c: self.b.clone(),
        }
    }
}

impl<T> From<[[f64; 2]; 3]> for Triangle2<T>
where
    T: Scalar,
{
    fn from(vertices: [[f64; 2]; 3]) -> Self {
        Triangle2::new(vertices[0].into(), vertices[1].into(), vertices[2].into())
    }
}
