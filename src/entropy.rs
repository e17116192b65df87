//! Source of random bytes for private exponents.
//!
//! Every [`rand::RngCore`] is an [`EntropySource`], so production code passes
//! [`rand::rngs::OsRng`] and tests pass a seeded generator or a
//! [`FixedEntropy`].

use rand::RngCore;

use crate::Error;

/// Supplies unpredictable bytes.
pub trait EntropySource {
    /// Fills `buf` completely or fails with [`Error::EntropyUnavailable`].
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), Error>;
}

impl<R: RngCore + ?Sized> EntropySource for R {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        self.try_fill_bytes(buf).map_err(|err| {
            log::warn!("entropy source failed: {}", err);
            Error::EntropyUnavailable
        })
    }
}

/// Draws `len` bytes from `source`.
pub fn random_bytes<S>(source: &mut S, len: usize) -> Result<Vec<u8>, Error>
where
    S: EntropySource + ?Sized,
{
    let mut buf = vec![0u8; len];
    source.fill(&mut buf)?;
    Ok(buf)
}

/// Replays a fixed byte string, then reports exhaustion.
#[derive(Debug, Clone)]
pub struct FixedEntropy {
    bytes: Vec<u8>,
    pos: usize,
}

impl FixedEntropy {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            pos: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }
}

impl EntropySource for FixedEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        if buf.len() > self.remaining() {
            return Err(Error::EntropyUnavailable);
        }
        buf.copy_from_slice(&self.bytes[self.pos..self.pos + buf.len()]);
        self.pos += buf.len();
        Ok(())
    }
}
