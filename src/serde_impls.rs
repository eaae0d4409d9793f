//! Both number types travel as their canonical decimal string.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::integer::BigInteger;
use crate::rational::Rational;

struct DecimalStrVisitor<T>(PhantomData<T>, &'static str);

impl<'de, T> de::Visitor<'de> for DecimalStrVisitor<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a string representing {}", self.1)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse()
            .map_err(|e| de::Error::custom(format!("could not parse {:?}: {}", v, e)))
    }
}

macro_rules! decimal_str_serde {
    ($($t:ty, $expecting:expr;)+) => {
        $(
            impl Serialize for $t {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.collect_str(self)
                }
            }

            impl<'de> Deserialize<'de> for $t {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    deserializer.deserialize_str(DecimalStrVisitor(PhantomData, $expecting))
                }
            }
        )+
    };
}

decimal_str_serde! {
    BigInteger, "an integer";
    Rational, "a fraction";
}
