//! Conversions, parsing and `num-traits` integration for `Int`.

use std::str::FromStr;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Bounded, Num, One, Signed, Zero};
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedRem, CheckedSub};

use super::Int;
use crate::Error;

impl<const LIMBS: usize> Int<LIMBS> {
    /// Interprets `bytes` as an unsigned big-endian integer.
    ///
    /// Leading zero bytes are ignored; anything beyond the width is an
    /// [`Error::Overflow`].
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self, Error> {
        Self::fit(BigInt::from_bytes_be(Sign::Plus, bytes))
    }

    /// Interprets `bytes` as an unsigned little-endian integer.
    pub fn from_le_bytes(bytes: &[u8]) -> Result<Self, Error> {
        Self::fit(BigInt::from_bytes_le(Sign::Plus, bytes))
    }

    /// Minimal big-endian bytes of the magnitude; zero encodes as `[0]`.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.0.magnitude().to_bytes_be()
    }

    /// Converts to another width, failing if the value does not fit.
    pub fn resize<const M: usize>(&self) -> Result<Int<M>, Error> {
        Int::fit(self.0.clone())
    }
}

impl<const LIMBS: usize> FromStr for Int<LIMBS> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Self::from_str_radix(s, 10)
    }
}

impl<const LIMBS: usize> From<u64> for Int<LIMBS> {
    fn from(value: u64) -> Self {
        Self(BigInt::from(value))
    }
}

impl<const LIMBS: usize> From<u32> for Int<LIMBS> {
    fn from(value: u32) -> Self {
        Self(BigInt::from(value))
    }
}

impl<const LIMBS: usize> From<i64> for Int<LIMBS> {
    fn from(value: i64) -> Self {
        Self(BigInt::from(value))
    }
}

impl<const LIMBS: usize> Zero for Int<LIMBS> {
    fn zero() -> Self {
        Self(BigInt::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<const LIMBS: usize> One for Int<LIMBS> {
    fn one() -> Self {
        Self(BigInt::one())
    }
}

impl<const LIMBS: usize> Num for Int<LIMBS> {
    type FromStrRadixErr = Error;

    /// Parses an optionally signed integer in the given radix (2..=36).
    ///
    /// Invalid characters, an empty string or a bare sign give
    /// [`Error::Parse`]; a well-formed literal that is too large for the
    /// width gives [`Error::Overflow`].
    fn from_str_radix(src: &str, radix: u32) -> Result<Self, Error> {
        if !(2..=36).contains(&radix) {
            return Err(Error::Parse);
        }
        let (sign, digits) = match src.as_bytes().first() {
            Some(b'-') => (Sign::Minus, &src[1..]),
            Some(b'+') => (Sign::Plus, &src[1..]),
            _ => (Sign::Plus, src),
        };
        // BigUint also takes `_` separators and a second sign; only digits are valid here
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return Err(Error::Parse);
        }
        let magnitude = BigUint::from_str_radix(digits, radix).map_err(|_| Error::Parse)?;
        Self::fit(BigInt::from_biguint(sign, magnitude))
    }
}

impl<const LIMBS: usize> Bounded for Int<LIMBS> {
    fn min_value() -> Self {
        Self(BigInt::from_biguint(Sign::Minus, Self::max_magnitude()))
    }

    fn max_value() -> Self {
        Self(BigInt::from_biguint(Sign::Plus, Self::max_magnitude()))
    }
}

impl<const LIMBS: usize> Signed for Int<LIMBS> {
    fn abs(&self) -> Self {
        Int::abs(self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            Self::zero()
        } else {
            self - other
        }
    }

    fn signum(&self) -> Self {
        Self(self.0.signum())
    }

    fn is_positive(&self) -> bool {
        Int::is_positive(self)
    }

    fn is_negative(&self) -> bool {
        Int::is_negative(self)
    }
}

macro_rules! impl_checked_trait {
    ($trait:ident, $method:ident) => {
        impl<const LIMBS: usize> $trait for Int<LIMBS> {
            fn $method(&self, v: &Self) -> Option<Self> {
                Int::$method(self, v).ok()
            }
        }
    };
}

impl_checked_trait!(CheckedAdd, checked_add);
impl_checked_trait!(CheckedSub, checked_sub);
impl_checked_trait!(CheckedMul, checked_mul);
impl_checked_trait!(CheckedDiv, checked_div);
impl_checked_trait!(CheckedRem, checked_rem);
