//! Diffie-Hellman key exchange over the RFC 5114 2048-bit MODP group, built
//! on a fixed-width signed big integer and square-and-multiply modular
//! exponentiation.
//!
//! This is a correctness demonstration: nothing here is constant time and
//! no parameters are validated.

mod error;
pub use error::Error;

pub mod bigint;
pub use bigint::Int;

pub mod modexp;
pub use modexp::mod_pow;

pub mod params;
pub use params::*;

pub mod entropy;
pub use entropy::{EntropySource, FixedEntropy};

pub mod network;
pub use network::*;

pub mod participant;
pub use participant::*;

pub mod exchange;

pub mod util;
