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

use std::ops::{Add, Div, Mul, Sub};

use crate::{
    geometry::{Point2, Triangle2},
    kernel::{
        orientation::orient2d,
        winding::{WindingError, normalize_winding},
    },
    numeric::scalar::Scalar,
};

/// True when `r` lies on the outer side of the directed edge `p -> q` of a
/// counter-clockwise triangle.
///
/// With `on_boundary` set, a point on the edge line itself still touches
/// the triangle, so only a determinant strictly below `eps` is outside;
/// without it the edge line counts as outside too.
fn outside_edge<T>(p: &Point2<T>, q: &Point2<T>, r: &Point2<T>, eps: &T, on_boundary: bool) -> bool
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    let d = orient2d(p, q, r);
    if on_boundary { d < *eps } else { d <= *eps }
}

/// True when some edge of `tri` has all three vertices of `other` on its
/// outer side.
fn separating_edge<T>(tri: &Triangle2<T>, other: &Triangle2<T>, eps: &T, on_boundary: bool) -> bool
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    let edges = tri.vertices();
    let points = other.vertices();

    for i in 0..3 {
        let p = edges[i];
        let q = edges[(i + 1) % 3];
        if points
            .iter()
            .all(|&r| outside_edge(p, q, r, eps, on_boundary))
        {
            return true;
        }
    }

    false
}

/// 2D triangle/triangle overlap with the default parameters: no tolerance,
/// clockwise input rejected, shared boundary counts as overlap.
pub fn tri_tri_overlap_2d<T>(t1: &Triangle2<T>, t2: &Triangle2<T>) -> Result<bool, WindingError>
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    tri_tri_overlap_2d_with(t1, t2, &T::zero(), false, true)
}

/// 2D triangle/triangle overlap.
///
/// Both triangles are wound counter-clockwise first (see
/// [`normalize_winding`]); a clockwise input aborts the whole call unless
/// `allow_reversed` is set. Two triangles are disjoint exactly when some
/// edge of one has all vertices of the other on its outer side, so each of
/// the six edges is tried in turn as a separating line, short-circuiting
/// on the first hit.
///
/// `eps` widens the outer half-plane of every edge; `on_boundary` decides
/// whether triangles that only share boundary points count as overlapping.
pub fn tri_tri_overlap_2d_with<T>(
    t1: &Triangle2<T>,
    t2: &Triangle2<T>,
    eps: &T,
    allow_reversed: bool,
    on_boundary: bool,
) -> Result<bool, WindingError>
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    let t1 = normalize_winding(t1, allow_reversed)?;
    let t2 = normalize_winding(t2, allow_reversed)?;

    if separating_edge(&t1, &t2, eps, on_boundary) || separating_edge(&t2, &t1, eps, on_boundary) {
        return Ok(false);
    }

    Ok(true)
}
