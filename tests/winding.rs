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

use trioverlap::geometry::Triangle2;
use trioverlap::kernel::overlap::tri_tri_overlap_2d_with;
use trioverlap::kernel::winding::{WindingError, normalize_winding};

fn tri(vertices: [[f64; 2]; 3]) -> Triangle2<f64> {
    vertices.into()
}

#[test]
fn ccw_triangle_is_unchanged() {
    let t = tri([[0.0, 0.0], [5.0, 0.0], [0.0, 5.0]]);
    assert_eq!(normalize_winding(&t, false), Ok(t.clone()));
    assert_eq!(normalize_winding(&t, true), Ok(t));
}

#[test]
fn collinear_triangle_is_unchanged() {
    // zero determinant passes, with either policy
    let t = tri([[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]]);
    assert_eq!(normalize_winding(&t, false), Ok(t.clone()));
    assert_eq!(normalize_winding(&t, true), Ok(t));
}

#[test]
fn cw_triangle_is_corrected_by_swapping_the_last_two_vertices() {
    let t = tri([[0.0, 0.0], [0.0, 5.0], [5.0, 0.0]]);
    let expected = tri([[0.0, 0.0], [5.0, 0.0], [0.0, 5.0]]);
    assert_eq!(normalize_winding(&t, true), Ok(expected));
}

#[test]
fn cw_triangle_is_rejected_without_opt_in() {
    let t = tri([[0.0, 0.0], [0.0, 5.0], [5.0, 0.0]]);
    assert_eq!(
        normalize_winding(&t, false),
        Err(WindingError::WrongWindingDirection)
    );
}

#[test]
fn overlap_result_does_not_depend_on_input_winding() {
    let pairs = [
        ([[0.0, 0.0], [5.0, 0.0], [0.0, 5.0]], [[0.0, 0.0], [5.0, 0.0], [0.0, 6.0]]),
        ([[0.0, 0.0], [5.0, 0.0], [0.0, 5.0]], [[-10.0, 0.0], [-5.0, 0.0], [-1.0, 6.0]]),
        ([[0.0, 0.0], [5.0, 0.0], [2.5, 5.0]], [[0.0, 4.0], [2.5, -1.0], [5.0, 4.0]]),
        ([[0.0, 0.0], [1.0, 1.0], [0.0, 2.0]], [[2.0, 1.0], [3.0, 0.0], [3.0, 2.0]]),
    ];

    for (a, b) in pairs {
        let t1 = tri(a);
        let t2 = tri(b);
        // full vertex reversal flips the winding
        let t1_rev = Triangle2::new(t1.c.clone(), t1.b.clone(), t1.a.clone());

        let forward = tri_tri_overlap_2d_with(&t1, &t2, &0.0, true, true).unwrap();
        let reversed = tri_tri_overlap_2d_with(&t1_rev, &t2, &0.0, true, true).unwrap();
        assert_eq!(forward, reversed);
    }
}
