//! Fixed-width signed big integers.
//!
//! `Int<LIMBS>` is a [`BigInt`] whose magnitude is bounded by `LIMBS` 64-bit
//! limbs, so the representable range is
//! `-(2^(64*LIMBS) - 1) ..= 2^(64*LIMBS) - 1`. The width is part of the type:
//! the 2048-bit Diffie-Hellman modulus and its squared intermediates live in
//! one instantiation, the 64-bit private exponents in a two-limb one, and both
//! share this implementation.
//!
//! Arithmetic is exact. Every result is checked against the width; the
//! `checked_*` methods report [`Error::Overflow`] or [`Error::DivisionByZero`],
//! and the operator traits panic in the same situations, like the primitive
//! integers do with overflow checks enabled. Nothing wraps silently.
//!
//! [`Error::Overflow`]: crate::Error::Overflow
//! [`Error::DivisionByZero`]: crate::Error::DivisionByZero

mod conv;
mod ops;

use std::fmt;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Signed, Zero};

use crate::Error;

/// Fixed-width signed integer with `LIMBS` 64-bit limbs of magnitude.
///
/// `LIMBS` must be non-zero. The ordering, equality and hashing are those of
/// the underlying [`BigInt`], so they are numeric.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Int<const LIMBS: usize>(BigInt);

impl<const LIMBS: usize> Int<LIMBS> {
    /// Number of bits in the magnitude.
    pub const BITS: u32 = 64 * LIMBS as u32;

    /// Wraps `value`, failing if its magnitude needs more than `BITS` bits.
    pub(crate) fn fit(value: BigInt) -> Result<Self, Error> {
        if value.bits() > u64::from(Self::BITS) {
            return Err(Error::Overflow);
        }
        Ok(Self(value))
    }

    /// `2^BITS - 1`, the largest magnitude the width holds.
    fn max_magnitude() -> BigUint {
        (BigUint::one() << Self::BITS) - 1u32
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.sign() == Sign::Minus
    }

    /// Strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0.sign() == Sign::Plus
    }

    pub fn is_odd(&self) -> bool {
        self.0.trailing_zeros() == Some(0)
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Number of significant bits in the magnitude; zero for zero.
    pub fn bits(&self) -> u64 {
        self.0.bits()
    }

    /// `floor(self / 2)`.
    pub fn shr1(&self) -> Self {
        Self(&self.0 >> 1u32)
    }

    /// Renders the value in the given radix (2..=36) with lowercase digits.
    ///
    /// # Panics
    /// Panics if `radix` is outside `2..=36`.
    pub fn to_str_radix(&self, radix: u32) -> String {
        assert!((2..=36).contains(&radix), "radix must be in 2..=36");
        self.0.to_str_radix(radix)
    }
}

impl<const LIMBS: usize> fmt::Display for Int<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<const LIMBS: usize> fmt::Debug for Int<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Int<{}>({})", LIMBS, self)
    }
}

#[cfg(test)]
mod tests {
    use num_traits::Bounded;

    use super::*;

    type I2 = Int<2>;

    #[test]
    fn test_display() {
        assert_eq!(I2::zero().to_string(), "0");
        assert_eq!(I2::from(-42i64).to_string(), "-42");
        assert_eq!(I2::max_value().to_string(), "340282366920938463463374607431768211455");
        assert_eq!(format!("{:>6}", I2::from(42u64)), "    42");
        assert_eq!(format!("{:+}", I2::from(42u64)), "+42");
    }

    #[test]
    fn test_to_str_radix() {
        assert_eq!(I2::from(255u64).to_str_radix(16), "ff");
        assert_eq!(I2::from(-5i64).to_str_radix(2), "-101");
        assert_eq!(I2::zero().to_str_radix(36), "0");
        assert_eq!(I2::from(35u64).to_str_radix(36), "z");
        assert_eq!(I2::max_value().to_str_radix(16), "f".repeat(32));
    }

    #[test]
    #[should_panic(expected = "radix must be in 2..=36")]
    fn test_to_str_radix_rejects_bad_radix() {
        I2::one().to_str_radix(37);
    }

    #[test]
    fn test_predicates() {
        let neg = I2::from(-3i64);
        assert!(neg.is_negative());
        assert!(!neg.is_positive());
        assert!(neg.is_odd());
        assert!(!I2::from(-4i64).is_odd());
        assert_eq!(neg.abs(), I2::from(3u64));
        assert!(!I2::zero().is_positive());
        assert!(!I2::zero().is_negative());
        assert!(!I2::zero().is_odd());
        assert_eq!(I2::zero().bits(), 0);
        assert_eq!(I2::one().bits(), 1);
        assert_eq!(I2::max_value().bits(), 128);
        assert_eq!(I2::from(u64::MAX).shr1(), I2::from(u64::MAX >> 1));
    }

    #[test]
    fn test_width_is_enforced() {
        let top = BigInt::from_biguint(Sign::Plus, I2::max_magnitude());
        assert!(I2::fit(top.clone()).is_ok());
        assert!(I2::fit(-top.clone()).is_ok());
        assert_eq!(I2::fit(top + 1u32), Err(Error::Overflow));
    }

    #[test]
    fn test_negative_zero_is_normalised() {
        let z = -I2::zero();
        assert!(!z.is_negative());
        assert_eq!(z, I2::zero());
        assert_eq!(I2::from(-5i64) + I2::from(5u64), I2::zero());
    }
}
