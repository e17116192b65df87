//! Exact arithmetic and operator traits for `Int`.
//!
//! Division truncates toward zero and the remainder takes the sign of the
//! dividend, matching `i64`. [`Int::rem_euclid`] gives the non-negative
//! residue used by modular arithmetic.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign};
use std::ops::{Neg, Rem, RemAssign, Sub, SubAssign};

use num_traits::Zero;

use super::Int;
use crate::Error;

impl<const LIMBS: usize> Int<LIMBS> {
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, Error> {
        Self::fit(&self.0 + &rhs.0)
    }

    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, Error> {
        Self::fit(&self.0 - &rhs.0)
    }

    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, Error> {
        Self::fit(&self.0 * &rhs.0)
    }

    /// Truncating division and remainder in one call.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self), Error> {
        if rhs.0.is_zero() {
            return Err(Error::DivisionByZero);
        }
        // |q| <= |self| and |r| < |rhs|, so neither can leave the width
        Ok((Self(&self.0 / &rhs.0), Self(&self.0 % &rhs.0)))
    }

    pub fn checked_div(&self, rhs: &Self) -> Result<Self, Error> {
        self.div_rem(rhs).map(|(q, _)| q)
    }

    pub fn checked_rem(&self, rhs: &Self) -> Result<Self, Error> {
        self.div_rem(rhs).map(|(_, r)| r)
    }

    /// Remainder in `[0, |rhs|)`.
    pub fn rem_euclid(&self, rhs: &Self) -> Result<Self, Error> {
        let r = self.checked_rem(rhs)?;
        if r.is_negative() {
            r.checked_add(&rhs.abs())
        } else {
            Ok(r)
        }
    }
}

impl<const LIMBS: usize> Neg for Int<LIMBS> {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl<'a, const LIMBS: usize> Neg for &'a Int<LIMBS> {
    type Output = Int<LIMBS>;

    fn neg(self) -> Int<LIMBS> {
        Int(-&self.0)
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $checked:ident) => {
        impl<'a, const LIMBS: usize> $trait<&'a Int<LIMBS>> for &'a Int<LIMBS> {
            type Output = Int<LIMBS>;

            fn $method(self, rhs: &'a Int<LIMBS>) -> Int<LIMBS> {
                match self.$checked(rhs) {
                    Ok(value) => value,
                    Err(err) => {
                        panic!("attempt to {} `Int<{}>`: {}", stringify!($method), LIMBS, err)
                    }
                }
            }
        }

        impl<const LIMBS: usize> $trait for Int<LIMBS> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                $trait::$method(&self, &rhs)
            }
        }

        impl<const LIMBS: usize> $assign_trait for Int<LIMBS> {
            fn $assign_method(&mut self, rhs: Self) {
                *self = $trait::$method(&*self, &rhs);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, checked_add);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, checked_sub);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, checked_mul);
impl_binary_op!(Div, div, DivAssign, div_assign, checked_div);
impl_binary_op!(Rem, rem, RemAssign, rem_assign, checked_rem);
