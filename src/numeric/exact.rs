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

use num_traits::ToPrimitive;
use rug::Rational;

use crate::{
    numeric::scalar::Scalar,
    operations::{Abs, One, Zero},
};

use std::{
    cmp::Ordering,
    ops::{Add, Div, Mul, Neg, Sub},
};

/// Arbitrary-precision rational scalar.
///
/// Every determinant evaluated over `Exact` has an exact sign, so the
/// touching/overlapping distinction never depends on floating-point
/// rounding. Coordinates built from `f64` convert losslessly (every finite
/// double is a rational).
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct Exact(pub Rational);

impl Scalar for Exact {}

impl<'a, 'b> Add<&'b Exact> for &'a Exact {
    type Output = Exact;

    fn add(self, rhs: &'b Exact) -> Exact {
        // in-place API on rug::Rational: result = self + rhs
        let mut result = self.0.clone();
        result += &rhs.0;
        Exact(result)
    }
}

impl Add for Exact {
    type Output = Exact;
    fn add(self, rhs: Exact) -> Exact {
        &self + &rhs
    }
}

impl<'a, 'b> Sub<&'b Exact> for &'a Exact {
    type Output = Exact;

    fn sub(self, rhs: &'b Exact) -> Exact {
        let mut result = self.0.clone();
        result -= &rhs.0;
        Exact(result)
    }
}

impl Sub for Exact {
    type Output = Exact;
    fn sub(self, rhs: Exact) -> Exact {
        &self - &rhs
    }
}

impl<'a, 'b> Mul<&'b Exact> for &'a Exact {
    type Output = Exact;

    fn mul(self, rhs: &'b Exact) -> Exact {
        let mut result = self.0.clone();
        result *= &rhs.0;
        Exact(result)
    }
}

impl Mul for Exact {
    type Output = Exact;
    fn mul(self, rhs: Exact) -> Exact {
        &self * &rhs
    }
}

impl<'a, 'b> Div<&'b Exact> for &'a Exact {
    type Output = Exact;

    fn div(self, rhs: &'b Exact) -> Exact {
        let mut result = self.0.clone();
        result /= &rhs.0;
        Exact(result)
    }
}

impl Div for Exact {
    type Output = Exact;
    fn div(self, rhs: Exact) -> Exact {
        &self / &rhs
    }
}

impl Neg for Exact {
    type Output = Exact;

    fn neg(self) -> Exact {
        Exact(-self.0)
    }
}

impl From<i32> for Exact {
    fn from(value: i32) -> Self {
        Exact(Rational::from(value))
    }
}

impl From<f64> for Exact {
    fn from(value: f64) -> Self {
        // NaN and infinities have no rational value; they map to zero the
        // same way a default-constructed Rational would.
        Exact(Rational::from_f64(value).unwrap_or_default())
    }
}

impl From<Exact> for f64 {
    fn from(value: Exact) -> Self {
        value.0.to_f64()
    }
}

impl ToPrimitive for Exact {
    fn to_i64(&self) -> Option<i64> {
        Some(self.0.to_f64() as i64)
    }
    fn to_u64(&self) -> Option<u64> {
        Some(self.0.to_f64() as u64)
    }
    fn to_f32(&self) -> Option<f32> {
        Some(self.0.to_f64() as f32)
    }
    fn to_f64(&self) -> Option<f64> {
        Some(self.0.to_f64())
    }
}

impl Zero for Exact {
    fn zero() -> Self {
        Exact(Rational::new())
    }

    fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }

    fn is_positive(&self) -> bool {
        self.0.cmp0() == Ordering::Greater
    }

    fn is_negative(&self) -> bool {
        self.0.cmp0() == Ordering::Less
    }

    fn is_positive_or_zero(&self) -> bool {
        self.0.cmp0() != Ordering::Less
    }

    fn is_negative_or_zero(&self) -> bool {
        self.0.cmp0() != Ordering::Greater
    }
}

impl One for Exact {
    fn one() -> Self {
        Exact(Rational::from(1))
    }
}

impl Abs for Exact {
    fn abs(&self) -> Self {
        Exact(self.0.clone().abs())
    }
}
