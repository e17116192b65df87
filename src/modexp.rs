//! Modular exponentiation by repeated squaring.

use num_traits::{One, Zero};

use crate::{Error, Int};

/// Computes `base ^ exponent mod modulus`.
///
/// The exponent is consumed from its least significant bit upward and every
/// product is reduced immediately, so no intermediate value exceeds
/// `modulus^2`. The width `L` must therefore hold at least twice the bit
/// length of `modulus`; otherwise the multiplication reports
/// [`Error::Overflow`] rather than wrapping.
///
/// The result lies in `[0, modulus)`. A base congruent to zero yields zero
/// whatever the exponent, including a zero exponent.
///
/// # Errors
/// - [`Error::InvalidModulus`] if `modulus <= 0`
/// - [`Error::NegativeExponent`] if `exponent < 0`
/// - [`Error::Overflow`] if `L` is too narrow for `modulus^2`
pub fn mod_pow<const L: usize, const E: usize>(
    base: &Int<L>,
    exponent: &Int<E>,
    modulus: &Int<L>,
) -> Result<Int<L>, Error> {
    if !modulus.is_positive() {
        return Err(Error::InvalidModulus);
    }
    if exponent.is_negative() {
        return Err(Error::NegativeExponent);
    }

    let mut base = base.rem_euclid(modulus)?;
    if base.is_zero() {
        return Ok(Int::<L>::zero());
    }

    // 1 mod 1 is 0
    let mut result = Int::<L>::one().rem_euclid(modulus)?;
    let mut exponent = exponent.clone();
    while exponent.is_positive() {
        if exponent.is_odd() {
            result = result.checked_mul(&base)?.rem_euclid(modulus)?;
        }
        exponent = exponent.shr1();
        base = base.checked_mul(&base)?.rem_euclid(modulus)?;
    }

    Ok(result)
}

impl<const L: usize> Int<L> {
    /// `self ^ exponent mod modulus`; see [`mod_pow`].
    pub fn mod_pow<const E: usize>(
        &self,
        exponent: &Int<E>,
        modulus: &Self,
    ) -> Result<Self, Error> {
        mod_pow(self, exponent, modulus)
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use num_traits::Bounded;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    type I2 = Int<2>;
    type I8 = Int<8>;

    #[test]
    fn test_modpow_small() {
        let r = mod_pow(&I2::from(2u64), &I2::from(5u64), &I2::from(7u64)).unwrap();
        assert_eq!(r, I2::from(4u64));
        let r = mod_pow(&I2::from(4u64), &I2::from(13u64), &I2::from(497u64)).unwrap();
        assert_eq!(r, I2::from(445u64));
    }

    #[test]
    fn test_zero_base_short_circuits() {
        let m = I2::from(11u64);
        for e in [0u64, 1, 2, 1234] {
            assert_eq!(mod_pow(&I2::zero(), &I2::from(e), &m).unwrap(), I2::zero());
            // any multiple of the modulus reduces to zero too
            assert_eq!(mod_pow(&I2::from(33u64), &I2::from(e), &m).unwrap(), I2::zero());
        }
    }

    #[test]
    fn test_zero_exponent_gives_one() {
        for m in [2u64, 3, 97, u64::MAX] {
            let r = mod_pow(&I2::from(5u64), &I2::zero(), &I2::from(m)).unwrap();
            assert_eq!(r, I2::one());
        }
        // the accumulator is reduced too
        assert_eq!(mod_pow(&I2::from(5u64), &I2::zero(), &I2::one()).unwrap(), I2::zero());
    }

    #[test]
    fn test_negative_base_is_reduced_first() {
        // -2 = 5 mod 7, 5^3 = 125 = 6 mod 7
        let r = mod_pow(&I2::from(-2i64), &I2::from(3u64), &I2::from(7u64)).unwrap();
        assert_eq!(r, I2::from(6u64));
    }

    #[test]
    fn test_invalid_arguments() {
        let x = I2::from(3u64);
        assert_eq!(mod_pow(&x, &x, &I2::zero()), Err(Error::InvalidModulus));
        assert_eq!(mod_pow(&x, &x, &I2::from(-7i64)), Err(Error::InvalidModulus));
        assert_eq!(
            mod_pow(&x, &I2::from(-1i64), &I2::from(7u64)),
            Err(Error::NegativeExponent)
        );
        // the exponent sign is checked before the zero-base short circuit
        assert_eq!(
            mod_pow(&I2::zero(), &I2::from(-1i64), &I2::from(7u64)),
            Err(Error::NegativeExponent)
        );
    }

    #[test]
    fn test_too_narrow_width_overflows() {
        // a 128-bit modulus needs 256 bits for its squares
        let m = I2::max_value() - I2::from(58u64);
        let base = I2::max_value() - I2::from(100u64);
        assert_eq!(mod_pow(&base, &I2::from(2u64), &m), Err(Error::Overflow));
    }

    #[test]
    fn test_matches_num_bigint() {
        let mut rng = StdRng::seed_from_u64(33);
        for _ in 0..25 {
            let mut bytes = [0u8; 24];
            rng.fill(&mut bytes);
            let m = I8::from_be_bytes(&bytes).unwrap() + I8::from(2u64);
            let mut bytes = [0u8; 32];
            rng.fill(&mut bytes);
            let base = I8::from_be_bytes(&bytes).unwrap();
            let exp = I2::from(rng.gen::<u64>());

            let expected = base
                .to_string()
                .parse::<BigInt>()
                .unwrap()
                .modpow(
                    &exp.to_string().parse::<BigInt>().unwrap(),
                    &m.to_string().parse::<BigInt>().unwrap(),
                );
            assert_eq!(base.mod_pow(&exp, &m).unwrap().to_string(), expected.to_string());
        }
    }
}
