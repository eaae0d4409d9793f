use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::integer::BigInteger;
use crate::rational::Rational;

/// The arithmetic a generic numeric consumer (a matrix, a polynomial) needs
/// from its scalar type.
///
/// `BigInteger` qualifies too, but its `/` truncates, so it only behaves as
/// a field when every division is exact.
pub trait Field:
    Clone
    + PartialEq
    + PartialOrd
    + From<i32>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    fn zero() -> Self {
        Self::from(0)
    }

    fn one() -> Self {
        Self::from(1)
    }

    /// `self^exp` by repeated squaring; `x^0` is one.
    fn pow(&self, mut exp: u32) -> Self {
        let mut base = self.clone();
        let mut acc = Self::one();
        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc * base.clone();
            }
            exp >>= 1;
            if exp > 0 {
                base = base.clone() * base;
            }
        }
        acc
    }
}

impl Field for BigInteger {}

impl Field for Rational {}
