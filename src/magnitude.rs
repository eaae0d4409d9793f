//! Unsigned limb storage.
//!
//! A magnitude is a little-endian sequence of base `10^9` limbs. The
//! canonical form has no most-significant zero limbs, except that zero is
//! exactly one `0` limb. Every operation that can shrink a magnitude calls
//! `trim` before handing it back, so `Eq` and `Ord` can work on the raw limbs.

use std::cmp::Ordering;
use std::fmt;

/// Radix of one limb. Two limbs multiply into well under `u64::MAX`.
pub const BASE: u32 = 1_000_000_000;

/// Decimal digits held by one full limb.
pub const BASE_DIGITS: usize = 9;

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Magnitude {
    pub(crate) limbs: Vec<u32>,
}

impl Magnitude {
    pub fn zero() -> Self {
        Magnitude { limbs: vec![0] }
    }

    /// Builds a magnitude from little-endian limbs, each already below `BASE`.
    pub(crate) fn from_limbs(limbs: Vec<u32>) -> Self {
        debug_assert!(limbs.iter().all(|&l| l < BASE));
        let mut m = Magnitude { limbs };
        m.trim();
        m
    }

    pub fn from_u128(mut x: u128) -> Self {
        if x == 0 {
            return Magnitude::zero();
        }
        let mut limbs = Vec::with_capacity(5);
        while x != 0 {
            limbs.push((x % BASE as u128) as u32);
            x /= BASE as u128;
        }
        Magnitude { limbs }
    }

    pub fn to_u128(&self) -> Option<u128> {
        self.limbs.iter().rev().try_fold(0u128, |acc, &l| {
            acc.checked_mul(BASE as u128)?.checked_add(l as u128)
        })
    }

    pub fn limbs(&self) -> &[u32] {
        &self.limbs
    }

    pub fn len(&self) -> usize {
        self.limbs.len()
    }

    pub fn is_zero(&self) -> bool {
        self.limbs == [0]
    }

    pub fn is_even(&self) -> bool {
        // BASE is even, so only the lowest limb decides parity.
        self.limbs[0] % 2 == 0
    }

    /// Drops most-significant zero limbs, keeping at least one limb.
    pub fn trim(&mut self) {
        while self.limbs.len() > 1 && self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
        if self.limbs.is_empty() {
            self.limbs.push(0);
        }
    }

    /// Multiplies by `BASE^n`.
    pub fn shl_limbs(&self, n: usize) -> Self {
        if self.is_zero() {
            return Magnitude::zero();
        }
        let mut limbs = vec![0; n];
        limbs.extend_from_slice(&self.limbs);
        Magnitude { limbs }
    }

    /// Divides by `BASE^n`, discarding the low limbs.
    pub fn shr_limbs(&self, n: usize) -> Self {
        if self.limbs.len() <= n {
            return Magnitude::zero();
        }
        Magnitude {
            limbs: self.limbs[n..].to_vec(),
        }
    }
}

impl Default for Magnitude {
    fn default() -> Self {
        Magnitude::zero()
    }
}

impl fmt::Debug for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.limbs)
    }
}

impl PartialOrd for Magnitude {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Magnitude {
    fn cmp(&self, other: &Self) -> Ordering {
        self.limbs
            .len()
            .cmp(&other.limbs.len())
            .then_with(|| self.limbs.iter().rev().cmp(other.limbs.iter().rev()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_keeps_one_limb() {
        let m = Magnitude::from_limbs(vec![0, 0, 0]);
        assert_eq!(m.limbs(), &[0]);
        assert!(m.is_zero());

        let m = Magnitude::from_limbs(vec![7, 3, 0, 0]);
        assert_eq!(m.limbs(), &[7, 3]);

        let m = Magnitude::from_limbs(vec![]);
        assert!(m.is_zero());
    }

    #[test]
    fn native_round_trip() {
        for &x in &[0u128, 1, 999_999_999, 1_000_000_000, u64::MAX as u128, u128::MAX] {
            assert_eq!(Magnitude::from_u128(x).to_u128(), Some(x));
        }
        let too_big = Magnitude::from_u128(u128::MAX).shl_limbs(1);
        assert_eq!(too_big.to_u128(), None);
    }

    #[test]
    fn order_by_length_then_limbs() {
        let a = Magnitude::from_u128(999_999_999);
        let b = Magnitude::from_u128(1_000_000_000);
        let c = Magnitude::from_u128(1_000_000_001);
        assert!(a < b);
        assert!(b < c);
        assert_eq!(b.cmp(&b.clone()), Ordering::Equal);
        assert!(Magnitude::from_u128(2_000_000_000) > Magnitude::from_u128(1_999_999_999));
    }

    #[test]
    fn limb_shifts() {
        let m = Magnitude::from_u128(42);
        assert_eq!(m.shl_limbs(2).limbs(), &[0, 0, 42]);
        assert_eq!(m.shl_limbs(2).shr_limbs(2), m);
        assert!(m.shr_limbs(1).is_zero());
        assert!(Magnitude::zero().shl_limbs(3).is_zero());
    }

    #[test]
    fn parity() {
        assert!(Magnitude::zero().is_even());
        assert!(!Magnitude::from_u128(1_000_000_001).is_even());
        assert!(Magnitude::from_u128(3_000_000_002).is_even());
    }
}
