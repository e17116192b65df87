//! Error types.

use std::{error, fmt};

/// Errors raised by the integer arithmetic, the exponentiation routine and
/// the key exchange built on top of them.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Error {
    /// A literal contained a character that is not a digit of the radix,
    /// was empty, or the radix itself is unsupported.
    Parse,
    /// Division or remainder by zero.
    DivisionByZero,
    /// Modular exponentiation with a modulus that is not strictly positive.
    InvalidModulus,
    /// Modular exponentiation with a negative exponent.
    NegativeExponent,
    /// The exact result does not fit in the fixed width of the integer.
    Overflow,
    /// The randomness source could not supply the requested bytes.
    EntropyUnavailable,
    NetworkEmpty,
    WrongCounterparty,
    NoSharedSecret,
    KeyConfirmationFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse => write!(f, "invalid digit found in integer literal"),
            Self::DivisionByZero => write!(f, "attempt to divide by zero"),
            Self::InvalidModulus => write!(f, "modulus must be strictly positive"),
            Self::NegativeExponent => write!(f, "exponent must not be negative"),
            Self::Overflow => write!(f, "result does not fit in the integer width"),
            Self::EntropyUnavailable => write!(f, "randomness source unavailable"),
            Self::NetworkEmpty => write!(f, "no message waiting on the network"),
            Self::WrongCounterparty => write!(f, "message came from an unexpected sender"),
            Self::NoSharedSecret => write!(f, "no shared secret has been agreed yet"),
            Self::KeyConfirmationFailed => write!(f, "key confirmation tag mismatch"),
        }
    }
}

impl error::Error for Error {}
