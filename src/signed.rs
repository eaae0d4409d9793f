use std::fmt;
use std::ops::{Mul, Neg};

pub use self::Sign::*;

/// Sign of a `BigInteger`. Zero always carries `Plus`.
///
/// `Minus` orders before `Plus`, which is what the total order on
/// `BigInteger` relies on.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    Minus,
    Plus,
}

impl Sign {
    pub fn is_negative(self) -> bool {
        self == Minus
    }
}

impl Default for Sign {
    fn default() -> Self {
        Plus
    }
}

/// Shown explicitly in `Debug` output of `BigInteger`, including `+`.
impl fmt::Debug for Sign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(if self.is_negative() { "-" } else { "+" })
    }
}

impl Neg for Sign {
    type Output = Self;
    fn neg(self) -> Self {
        if self.is_negative() {
            Plus
        } else {
            Minus
        }
    }
}

/// Sign of a product or quotient: like signs give `Plus`.
impl Mul for Sign {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        if self == other {
            Plus
        } else {
            Minus
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_product() {
        assert_eq!(Minus * Minus, Plus);
        assert_eq!(Minus * Plus, Minus);
        assert_eq!(Plus * Minus, Minus);
        assert_eq!(Plus * Plus, Plus);
        assert_eq!(-Minus, Plus);
        assert!(Minus < Plus);
        assert_eq!(Sign::default(), Plus);
    }
}
