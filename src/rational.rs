//! Exact fractions over `BigInteger`.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::integer::BigInteger;

/// Decimal places used by `Rational::to_f64`.
pub const F64_DIGITS: usize = 100;

/// Always in lowest terms with a positive denominator; zero is `0/1`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: BigInteger,
    denom: BigInteger,
}

impl Rational {
    /// Builds `numer / denom` in lowest terms.
    pub fn new(numer: BigInteger, denom: BigInteger) -> Result<Self> {
        if denom.is_zero() {
            log::debug!("rejected rational {}/0", numer);
            return Err(Error::DivisionByZero);
        }
        let mut r = Rational { numer, denom };
        r.reduce();
        Ok(r)
    }

    pub fn from_integer(numer: BigInteger) -> Self {
        Rational {
            numer,
            denom: BigInteger::one(),
        }
    }

    pub fn zero() -> Self {
        Rational::from_integer(BigInteger::zero())
    }

    pub fn one() -> Self {
        Rational::from_integer(BigInteger::one())
    }

    pub fn numer(&self) -> &BigInteger {
        &self.numer
    }

    pub fn denom(&self) -> &BigInteger {
        &self.denom
    }

    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.numer.is_negative()
    }

    pub fn is_integer(&self) -> bool {
        self.denom == BigInteger::one()
    }

    pub fn abs(&self) -> Self {
        Rational {
            numer: self.numer.abs(),
            denom: self.denom.clone(),
        }
    }

    pub fn recip(&self) -> Result<Self> {
        Rational::new(self.denom.clone(), self.numer.clone())
    }

    pub fn checked_div(&self, other: &Rational) -> Result<Self> {
        if other.is_zero() {
            log::debug!("rejected division of {} by zero", self);
            return Err(Error::DivisionByZero);
        }
        Rational::new(&self.numer * &other.denom, &self.denom * &other.numer)
    }

    /// Divides out the common factor and moves the sign to the numerator.
    /// The denominator must be nonzero.
    fn reduce(&mut self) {
        let g = self.numer.gcd(&self.denom);
        if g != BigInteger::one() {
            self.numer /= &g;
            self.denom /= &g;
        }
        if self.denom.is_negative() {
            self.numer = -&self.numer;
            self.denom = -&self.denom;
        }
    }

    /// Truncated decimal expansion with at most `precision` fractional
    /// digits.
    ///
    /// Trailing fractional zeros are dropped, and so is the `.` when nothing
    /// is left after it. A value that shows only zeros at this precision is
    /// printed as `0`, without a sign.
    pub fn as_decimal(&self, precision: usize) -> String {
        let (int_part, mut rem) = self.numer.mag.div_rem(&self.denom.mag);
        let mut out = int_part.to_string();

        // `precision` is an upper bound only; nothing is reserved up front.
        let mut frac = String::new();
        for _ in 0..precision {
            if rem.is_zero() {
                break;
            }
            let (digit, next) = rem.mul_small(10).div_rem(&self.denom.mag);
            frac.push_str(&digit.to_string());
            rem = next;
        }
        let frac = frac.trim_end_matches('0');
        if !frac.is_empty() {
            out.push('.');
            out.push_str(frac);
        }

        if self.is_negative() && out.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
            out.insert(0, '-');
        }
        out
    }

    pub fn to_f64(&self) -> f64 {
        // as_decimal always yields `-?digits(.digits)?`, which f64 accepts.
        self.as_decimal(F64_DIGITS).parse().unwrap_or(f64::NAN)
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational::zero()
    }
}

impl From<BigInteger> for Rational {
    fn from(numer: BigInteger) -> Self {
        Rational::from_integer(numer)
    }
}

macro_rules! from_native {
    ($($n:ty),+) => {
        $(
            impl From<$n> for Rational {
                fn from(x: $n) -> Self {
                    Rational::from_integer(BigInteger::from(x))
                }
            }
        )+
    };
}

from_native!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Accepts `a` or `a/b`; either part may carry a `-`.
impl FromStr for Rational {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('/') {
            Some((numer, denom)) => Rational::new(numer.parse()?, denom.parse()?),
            None => Ok(Rational::from_integer(s.parse()?)),
        }
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Both denominators are positive, so cross-multiplying keeps the order.
        (&self.numer * &other.denom).cmp(&(&other.numer * &self.denom))
    }
}

impl Neg for Rational {
    type Output = Self;
    fn neg(mut self) -> Self {
        self.numer = -self.numer;
        self
    }
}

impl<'a> Neg for &'a Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        -self.clone()
    }
}

impl<'a> AddAssign<&'a Rational> for Rational {
    fn add_assign(&mut self, other: &'a Rational) {
        self.numer = &self.numer * &other.denom + &other.numer * &self.denom;
        self.denom *= &other.denom;
        self.reduce();
    }
}

impl<'a> SubAssign<&'a Rational> for Rational {
    fn sub_assign(&mut self, other: &'a Rational) {
        self.numer = &self.numer * &other.denom - &other.numer * &self.denom;
        self.denom *= &other.denom;
        self.reduce();
    }
}

impl<'a> MulAssign<&'a Rational> for Rational {
    fn mul_assign(&mut self, other: &'a Rational) {
        self.numer *= &other.numer;
        self.denom *= &other.denom;
        self.reduce();
    }
}

/// # Panics
///
/// Panics when `other` is zero. Use `checked_div` to get an error instead.
impl<'a> DivAssign<&'a Rational> for Rational {
    fn div_assign(&mut self, other: &'a Rational) {
        match self.checked_div(other) {
            Ok(q) => *self = q,
            Err(err) => panic!("{}", err),
        }
    }
}

forward_binops! {
    Rational;
    Add, add, AddAssign, add_assign;
    Sub, sub, SubAssign, sub_assign;
    Mul, mul, MulAssign, mul_assign;
    Div, div, DivAssign, div_assign;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rat(s: &str) -> Rational {
        s.parse().unwrap()
    }

    fn int(s: &str) -> BigInteger {
        s.parse().unwrap()
    }

    #[test]
    fn construction_reduces() {
        let r = Rational::new(int("4"), int("8")).unwrap();
        assert_eq!(r.to_string(), "1/2");
        assert_eq!(Rational::new(int("3"), int("-6")).unwrap().to_string(), "-1/2");
        assert_eq!(Rational::new(int("-3"), int("-6")).unwrap().to_string(), "1/2");
        assert_eq!(Rational::new(int("10"), int("5")).unwrap().to_string(), "2");

        let z = Rational::new(int("0"), int("-17")).unwrap();
        assert_eq!(z, Rational::zero());
        assert_eq!(z.denom(), &BigInteger::one());
        assert!(!z.is_negative());
    }

    #[test]
    fn zero_denominator() {
        assert_eq!(Rational::new(int("1"), int("0")), Err(Error::DivisionByZero));
        assert_eq!("1/0".parse::<Rational>(), Err(Error::DivisionByZero));
        assert_eq!(Rational::zero().recip(), Err(Error::DivisionByZero));
        assert_eq!(rat("1/2").checked_div(&Rational::zero()), Err(Error::DivisionByZero));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn division_operator_panics_on_zero() {
        let _ = rat("1/2") / Rational::zero();
    }

    #[test]
    fn arithmetic() {
        assert_eq!(rat("1/2") + rat("1/3"), rat("5/6"));
        assert_eq!(rat("1/2") - rat("1/3"), rat("1/6"));
        assert_eq!(rat("1/3") - rat("1/2"), rat("-1/6"));
        assert_eq!(rat("2/3") * rat("9/4"), rat("3/2"));
        assert_eq!(rat("2/3") / rat("-4/9"), rat("-3/2"));
        assert_eq!(rat("1/2") + rat("-1/2"), Rational::zero());
        assert_eq!(-rat("5/7"), rat("-5/7"));
        assert_eq!(-Rational::zero(), Rational::zero());
        assert_eq!(rat("-3/4").recip().unwrap(), rat("-4/3"));
    }

    #[test]
    fn ordering() {
        assert!(rat("1/3") < rat("1/2"));
        assert!(rat("-1/2") < rat("-1/3"));
        assert!(rat("-1/2") < Rational::zero());
        assert!(rat("7/2") > rat("3"));
        assert_eq!(rat("2/4").cmp(&rat("1/2")), Ordering::Equal);
    }

    #[test]
    fn text_form() {
        assert_eq!(rat("6/3").to_string(), "2");
        assert_eq!(rat("-6/4").to_string(), "-3/2");
        assert_eq!(rat("1/-2").to_string(), "-1/2");
        assert_eq!(rat("-12").to_string(), "-12");
        assert!(rat("4/2").is_integer());
        assert!("1/".parse::<Rational>().is_err());
        assert!("a/2".parse::<Rational>().is_err());
        assert!("1/2/3".parse::<Rational>().is_err());
    }

    #[test]
    fn decimal_expansion() {
        assert_eq!(rat("1/3").as_decimal(5), "0.33333");
        assert_eq!(rat("1/2").as_decimal(5), "0.5");
        assert_eq!(rat("2/3").as_decimal(4), "0.6666");
        assert_eq!(rat("-7/4").as_decimal(1), "-1.7");
        assert_eq!(rat("-7/4").as_decimal(10), "-1.75");
        assert_eq!(rat("-7/4").as_decimal(0), "-1");
        assert_eq!(rat("1/8").as_decimal(0), "0");
        assert_eq!(rat("101/100").as_decimal(1), "1");
    }

    #[test]
    fn decimal_expansion_with_huge_precision_terminates() {
        assert_eq!(rat("1/2").as_decimal(usize::MAX), "0.5");
        assert_eq!(rat("-3/8").as_decimal(usize::MAX / 2), "-0.375");
        assert_eq!(rat("7").as_decimal(usize::MAX), "7");
    }

    #[test]
    fn decimal_expansion_without_fraction_keeps_integer_part() {
        assert_eq!(rat("5").as_decimal(3), "5");
        assert_eq!(rat("10").as_decimal(3), "10");
        assert_eq!(rat("-1000000000").as_decimal(2), "-1000000000");
        assert_eq!(Rational::zero().as_decimal(4), "0");
    }

    #[test]
    fn decimal_expansion_drops_sign_of_shown_zero() {
        assert_eq!(rat("-1/1000").as_decimal(2), "0");
        assert_eq!(rat("-1/2").as_decimal(0), "0");
        assert_eq!(rat("-1/1000").as_decimal(3), "-0.001");
    }

    #[test]
    fn float_conversion() {
        assert_eq!(rat("1/2").to_f64(), 0.5);
        assert_eq!(rat("-3/4").to_f64(), -0.75);
        assert!((rat("1/3").to_f64() - 1.0 / 3.0).abs() < 1e-15);
        assert_eq!(Rational::zero().to_f64(), 0.0);
    }
}
