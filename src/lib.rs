//! Exact arithmetic: arbitrary-precision signed integers stored as base
//! `10^9` limbs, and reduced fractions built on top of them.

#[macro_use]
mod macros;

mod arith;
mod decimal;
mod magnitude;

pub mod error;
pub mod field;
pub mod integer;
pub mod rational;
pub mod signed;

#[cfg(feature = "serde")]
mod serde_impls;

pub use error::{Error, ParseErrorKind, Result};
pub use field::Field;
pub use integer::BigInteger;
pub use magnitude::{BASE, BASE_DIGITS};
pub use rational::{Rational, F64_DIGITS};
pub use signed::Sign;

#[test]
fn test() {
    let mut harmonic = Rational::zero();
    for k in 1..=20 {
        harmonic += &Rational::new(BigInteger::one(), BigInteger::from(k)).unwrap();
    }
    println!("{:<12} = {}", "H(20)", harmonic);
    println!("{:<12} = {}", "~H(20)", harmonic.as_decimal(30));
    assert_eq!(harmonic.to_string(), "55835135/15519504");
    assert_eq!(harmonic.as_decimal(10), "3.5977396571");

    let mut factorial = BigInteger::one();
    let mut k = BigInteger::one();
    while k <= BigInteger::from(30) {
        factorial *= &k;
        k.increment();
    }
    println!("{:<12} = {}", "30!", factorial);
    assert_eq!(factorial.to_string(), "265252859812191058636308480000000");

    let (q, r) = factorial.div_rem(&BigInteger::from(-1_000_000_007)).unwrap();
    assert_eq!(q * BigInteger::from(-1_000_000_007) + r, factorial);
}
