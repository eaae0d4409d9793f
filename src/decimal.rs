//! Base-10 text for integers: `["-"] digit+`.

use std::fmt::{self, Write};
use std::str::FromStr;

use crate::error::{Error, ParseErrorKind};
use crate::integer::BigInteger;
use crate::magnitude::{Magnitude, BASE_DIGITS};
use crate::signed::{Minus, Plus};

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut limbs = self.limbs().iter().rev();
        if let Some(top) = limbs.next() {
            write!(f, "{}", top)?;
        }
        for limb in limbs {
            write!(f, "{:01$}", limb, BASE_DIGITS)?;
        }
        Ok(())
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut digits = String::with_capacity(self.mag.len() * BASE_DIGITS);
        write!(digits, "{}", self.mag)?;
        f.pad_integral(!self.is_negative(), "", &digits)
    }
}

/// Always shows the sign, so `+0` and `-7` read unambiguously in assertions.
impl fmt::Debug for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}{}", self.sign, self.mag)
    }
}

impl FromStr for BigInteger {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Error> {
        parse(s).map_err(|kind| {
            log::debug!("rejected integer literal {:?}: {}", s, kind);
            Error::from(kind)
        })
    }
}

fn parse(s: &str) -> Result<BigInteger, ParseErrorKind> {
    if s.is_empty() {
        return Err(ParseErrorKind::Empty);
    }
    let (sign, digits, offset) = match s.strip_prefix('-') {
        Some(rest) => (Minus, rest, 1),
        None => (Plus, s, 0),
    };
    if digits.is_empty() {
        return Err(ParseErrorKind::MissingDigits);
    }
    if let Some((i, found)) = digits.char_indices().find(|&(_, c)| !c.is_ascii_digit()) {
        return Err(ParseErrorKind::InvalidDigit {
            position: i + offset,
            found,
        });
    }

    // The rightmost group is the least significant limb; the leftover
    // leading group may be shorter.
    let limbs = digits
        .as_bytes()
        .rchunks(BASE_DIGITS)
        .map(|group| {
            group
                .iter()
                .fold(0, |acc, &b| acc * 10 + u32::from(b - b'0'))
        })
        .collect();
    Ok(BigInteger::from_parts(sign, Magnitude::from_limbs(limbs)))
}
