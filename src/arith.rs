//! Schoolbook arithmetic on magnitudes.

use std::ops::{AddAssign, Mul, SubAssign};

use crate::magnitude::{Magnitude, BASE};

impl<'a> AddAssign<&'a Magnitude> for Magnitude {
    fn add_assign(&mut self, other: &'a Magnitude) {
        if self.limbs.len() < other.limbs.len() {
            self.limbs.resize(other.limbs.len(), 0);
        }
        let mut carry = 0;
        for (i, limb) in self.limbs.iter_mut().enumerate() {
            let sum = *limb + other.limbs.get(i).copied().unwrap_or(0) + carry;
            if sum >= BASE {
                *limb = sum - BASE;
                carry = 1;
            } else {
                *limb = sum;
                carry = 0;
            }
        }
        if carry != 0 {
            self.limbs.push(carry);
        }
        self.trim();
    }
}

/// The caller guarantees `self >= other`.
impl<'a> SubAssign<&'a Magnitude> for Magnitude {
    fn sub_assign(&mut self, other: &'a Magnitude) {
        debug_assert!(*self >= *other, "magnitude subtraction underflow");
        let mut borrow = 0;
        for (i, limb) in self.limbs.iter_mut().enumerate() {
            let mut diff = i64::from(*limb) - other.limbs.get(i).map_or(0, |&l| i64::from(l)) - borrow;
            if diff < 0 {
                diff += i64::from(BASE);
                borrow = 1;
            } else {
                borrow = 0;
            }
            *limb = diff as u32;
        }
        debug_assert_eq!(borrow, 0);
        self.trim();
    }
}

impl<'a, 'b> Mul<&'b Magnitude> for &'a Magnitude {
    type Output = Magnitude;
    fn mul(self, other: &'b Magnitude) -> Magnitude {
        if self.is_zero() || other.is_zero() {
            return Magnitude::zero();
        }

        let base = u64::from(BASE);
        // Every cell takes at most two additions below BASE per limb pair,
        // far from overflowing a u64 for any realistic length.
        let mut acc = vec![0u64; self.len() + other.len() + 1];
        for (i, &a) in self.limbs.iter().enumerate() {
            for (j, &b) in other.limbs.iter().enumerate() {
                let p = u64::from(a) * u64::from(b);
                acc[i + j] += p % base;
                acc[i + j + 1] += p / base;
            }
        }

        let mut carry = 0;
        let limbs = acc
            .into_iter()
            .map(|cell| {
                let v = cell + carry;
                carry = v / base;
                (v % base) as u32
            })
            .collect();
        debug_assert_eq!(carry, 0);
        Magnitude::from_limbs(limbs)
    }
}

impl Magnitude {
    /// Multiplies by a single digit below `BASE`.
    pub fn mul_small(&self, d: u32) -> Magnitude {
        debug_assert!(d < BASE);
        if d == 0 {
            return Magnitude::zero();
        }
        let base = u64::from(BASE);
        let mut carry = 0;
        let mut limbs: Vec<u32> = self
            .limbs
            .iter()
            .map(|&l| {
                let v = u64::from(l) * u64::from(d) + carry;
                carry = v / base;
                (v % base) as u32
            })
            .collect();
        if carry != 0 {
            limbs.push(carry as u32);
        }
        Magnitude::from_limbs(limbs)
    }

    /// Truncating long division, returning `(quotient, remainder)`.
    ///
    /// Each round aligns the divisor under the top of the running remainder
    /// by whole limbs and binary-searches the largest quotient digit that
    /// still fits, so every quotient limb is written exactly once.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero; the signed layers reject that first.
    pub fn div_rem(&self, divisor: &Magnitude) -> (Magnitude, Magnitude) {
        assert!(!divisor.is_zero(), "magnitude division by zero");
        if self < divisor {
            return (Magnitude::zero(), self.clone());
        }

        let mut rem = self.clone();
        let mut quotient = vec![0; self.len() - divisor.len() + 1];
        while rem >= *divisor {
            let mut shift = rem.len() - divisor.len();
            let mut shifted = divisor.shl_limbs(shift);
            if shifted > rem {
                shift -= 1;
                shifted = shifted.shr_limbs(1);
            }
            let digit = quotient_digit(&rem, &shifted);
            log::trace!("quotient limb {} = {}", shift, digit);
            rem -= &shifted.mul_small(digit);
            quotient[shift] = digit;
        }

        (Magnitude::from_limbs(quotient), rem)
    }
}

/// Largest `d` in `[0, BASE)` with `d * shifted <= rem`.
///
/// Always 30 steps, each a full `mul_small` of `shifted`, so one quotient
/// limb costs about `30 * shifted.len()` limb products.
fn quotient_digit(rem: &Magnitude, shifted: &Magnitude) -> u32 {
    let (mut lo, mut hi) = (0, BASE);
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if shifted.mul_small(mid) <= *rem {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    lo
}
