//! Arbitrary-precision signed integers.

use std::cmp::Ordering;
use std::convert::TryFrom;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

use crate::error::{Error, Result};
use crate::magnitude::Magnitude;
use crate::signed::{Minus, Plus, Sign};

/// Sign and magnitude. Zero is always `Plus`, so the derived equality and
/// hashing agree with numeric equality.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct BigInteger {
    pub(crate) sign: Sign,
    pub(crate) mag: Magnitude,
}

impl BigInteger {
    pub(crate) fn from_parts(sign: Sign, mag: Magnitude) -> Self {
        let mut x = BigInteger { sign, mag };
        x.normalize();
        x
    }

    fn normalize(&mut self) {
        if self.mag.is_zero() {
            self.sign = Plus;
        }
    }

    pub fn zero() -> Self {
        BigInteger::default()
    }

    pub fn one() -> Self {
        BigInteger::from_u128(1)
    }

    pub fn from_i128(x: i128) -> Self {
        let sign = if x < 0 { Minus } else { Plus };
        BigInteger::from_parts(sign, Magnitude::from_u128(x.unsigned_abs()))
    }

    pub fn from_u128(x: u128) -> Self {
        BigInteger::from_parts(Plus, Magnitude::from_u128(x))
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn is_zero(&self) -> bool {
        self.mag.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }

    pub fn is_even(&self) -> bool {
        self.mag.is_even()
    }

    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> i8 {
        match self.sign {
            _ if self.is_zero() => 0,
            Minus => -1,
            Plus => 1,
        }
    }

    /// Copy with the sign cleared.
    pub fn abs(&self) -> Self {
        BigInteger {
            sign: Plus,
            mag: self.mag.clone(),
        }
    }

    pub fn increment(&mut self) {
        *self += &BigInteger::one();
    }

    pub fn decrement(&mut self) {
        *self -= &BigInteger::one();
    }

    /// Greatest common divisor of the magnitudes, by Euclid's algorithm.
    /// `gcd(0, 0)` is zero.
    pub fn gcd(&self, other: &BigInteger) -> BigInteger {
        let (mut a, mut b) = (self.mag.clone(), other.mag.clone());
        while !b.is_zero() {
            let (_, r) = a.div_rem(&b);
            a = b;
            b = r;
        }
        BigInteger::from_parts(Plus, a)
    }

    /// Truncating division and the matching remainder.
    ///
    /// The quotient rounds toward zero. The remainder is `a - (a / |b|) * |b|`,
    /// which carries the sign of `a` and is smaller than `|b|` in magnitude.
    pub fn div_rem(&self, other: &BigInteger) -> Result<(BigInteger, BigInteger)> {
        if other.is_zero() {
            log::debug!("rejected division of {} by zero", self);
            return Err(Error::DivisionByZero);
        }
        let (q, r) = self.mag.div_rem(&other.mag);
        Ok((
            BigInteger::from_parts(self.sign * other.sign, q),
            BigInteger::from_parts(self.sign, r),
        ))
    }

    pub fn checked_div(&self, other: &BigInteger) -> Result<BigInteger> {
        self.div_rem(other).map(|(q, _)| q)
    }

    pub fn checked_rem(&self, other: &BigInteger) -> Result<BigInteger> {
        self.div_rem(other).map(|(_, r)| r)
    }

    /// Adds `sign * mag` in place.
    fn add_signed(&mut self, sign: Sign, mag: &Magnitude) {
        if self.sign == sign {
            self.mag += mag;
            return;
        }
        match self.mag.cmp(mag) {
            Ordering::Equal => *self = BigInteger::zero(),
            Ordering::Greater => self.mag -= mag,
            Ordering::Less => {
                let mut diff = mag.clone();
                diff -= &self.mag;
                self.mag = diff;
                self.sign = sign;
            }
        }
        self.normalize();
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sign.cmp(&other.sign).then_with(|| {
            let ord = self.mag.cmp(&other.mag);
            match self.sign {
                Minus => ord.reverse(),
                Plus => ord,
            }
        })
    }
}

impl Neg for BigInteger {
    type Output = Self;
    fn neg(mut self) -> Self {
        self.sign = -self.sign;
        self.normalize();
        self
    }
}

impl<'a> Neg for &'a BigInteger {
    type Output = BigInteger;
    fn neg(self) -> BigInteger {
        -self.clone()
    }
}

impl<'a> AddAssign<&'a BigInteger> for BigInteger {
    fn add_assign(&mut self, other: &'a BigInteger) {
        self.add_signed(other.sign, &other.mag);
    }
}

impl<'a> SubAssign<&'a BigInteger> for BigInteger {
    fn sub_assign(&mut self, other: &'a BigInteger) {
        self.add_signed(-other.sign, &other.mag);
    }
}

impl<'a> MulAssign<&'a BigInteger> for BigInteger {
    fn mul_assign(&mut self, other: &'a BigInteger) {
        self.mag = &self.mag * &other.mag;
        self.sign = self.sign * other.sign;
        self.normalize();
    }
}

/// # Panics
///
/// Panics on a zero divisor, like the native integer operators. Use
/// `checked_div` to get an `Error::DivisionByZero` instead.
impl<'a> DivAssign<&'a BigInteger> for BigInteger {
    fn div_assign(&mut self, other: &'a BigInteger) {
        match self.div_rem(other) {
            Ok((q, _)) => *self = q,
            Err(err) => panic!("{}", err),
        }
    }
}

/// # Panics
///
/// Panics on a zero divisor. Use `checked_rem` to get an error instead.
impl<'a> RemAssign<&'a BigInteger> for BigInteger {
    fn rem_assign(&mut self, other: &'a BigInteger) {
        match self.div_rem(other) {
            Ok((_, r)) => *self = r,
            Err(err) => panic!("{}", err),
        }
    }
}

forward_binops! {
    BigInteger;
    Add, add, AddAssign, add_assign;
    Sub, sub, SubAssign, sub_assign;
    Mul, mul, MulAssign, mul_assign;
    Div, div, DivAssign, div_assign;
    Rem, rem, RemAssign, rem_assign;
}

macro_rules! from_native {
    ($via:ident, $wide:ty: $($n:ty),+) => {
        $(
            impl From<$n> for BigInteger {
                fn from(x: $n) -> Self {
                    BigInteger::$via(x as $wide)
                }
            }
        )+
    };
}

from_native!(from_i128, i128: i8, i16, i32, i64, i128, isize);
from_native!(from_u128, u128: u8, u16, u32, u64, u128, usize);

impl<'a> TryFrom<&'a BigInteger> for i128 {
    type Error = Error;
    fn try_from(x: &'a BigInteger) -> Result<i128> {
        let abs = x.mag.to_u128().ok_or(Error::OutOfRange)?;
        match x.sign {
            Plus => i128::try_from(abs).map_err(|_| Error::OutOfRange),
            // i128::MIN has no positive counterpart, hence the wrapping negation.
            Minus if abs <= 1 << 127 => Ok((abs as i128).wrapping_neg()),
            Minus => Err(Error::OutOfRange),
        }
    }
}

impl<'a> TryFrom<&'a BigInteger> for u128 {
    type Error = Error;
    fn try_from(x: &'a BigInteger) -> Result<u128> {
        match x.sign {
            Minus => Err(Error::OutOfRange),
            Plus => x.mag.to_u128().ok_or(Error::OutOfRange),
        }
    }
}

macro_rules! try_into_native {
    ($wide:ty: $($n:ty),+) => {
        $(
            impl<'a> TryFrom<&'a BigInteger> for $n {
                type Error = Error;
                fn try_from(x: &'a BigInteger) -> Result<$n> {
                    let wide = <$wide>::try_from(x)?;
                    <$n>::try_from(wide).map_err(|_| Error::OutOfRange)
                }
            }
        )+
    };
}

try_into_native!(i128: i8, i16, i32, i64, isize);
try_into_native!(u128: u8, u16, u32, u64, usize);
