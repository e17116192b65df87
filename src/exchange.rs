//! The two-party exchange run by the binary.
//!
//! Alice and Bob draw private exponents, swap public values over a
//! [`NetworkSimulator`], derive the shared secret and confirm it. As a
//! negative control, the same fixed exponent is applied to both public values:
//! since they differ, the results must differ too.

use log::debug;

use crate::entropy::EntropySource;
use crate::{Error, Narrow, NetworkSimulator, Parameters, Participant};

/// Exponent applied to both public values for the negative control.
pub const CONTROL_EXPONENT: u64 = 1234;

/// What a run of the exchange observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub keys_match: bool,
    pub keys_confirmed: bool,
    pub bogus_keys_do_not_match: bool,
}

impl Outcome {
    pub fn passed(&self) -> bool {
        self.keys_match && self.keys_confirmed && self.bogus_keys_do_not_match
    }
}

pub fn run<S>(params: Parameters, entropy: &mut S) -> Result<Outcome, Error>
where
    S: EntropySource + ?Sized,
{
    let mut alice = Participant::new(params.clone(), "alice".into(), "bob".into(), entropy)?;
    let mut bob = Participant::new(params.clone(), "bob".into(), "alice".into(), entropy)?;

    let mut network = NetworkSimulator::new();
    alice.share_pk(&mut network)?;
    bob.receive_message(&mut network)?;
    bob.share_pk(&mut network)?;
    alice.receive_message(&mut network)?;

    let keys_match = match (alice.shared_secret(), bob.shared_secret()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    };

    let keys_confirmed =
        confirm(&alice, &mut bob, &mut network)? && confirm(&bob, &mut alice, &mut network)?;

    let control = Narrow::from(CONTROL_EXPONENT);
    let bogus_bob = bob.public_key().mod_pow(&control, &params.p)?;
    let bogus_alice = alice.public_key().mod_pow(&control, &params.p)?;
    let bogus_keys_do_not_match = bogus_bob != bogus_alice;

    let outcome = Outcome {
        keys_match,
        keys_confirmed,
        bogus_keys_do_not_match,
    };
    debug!("exchange finished: {:?}", outcome);
    Ok(outcome)
}

/// `sender` proves its key to `receiver`; a tag mismatch is an outcome,
/// not an error.
fn confirm(
    sender: &Participant,
    receiver: &mut Participant,
    network: &mut NetworkSimulator,
) -> Result<bool, Error> {
    sender.send_key_confirmation(network)?;
    match receiver.receive_message(network) {
        Ok(()) => Ok(receiver.is_confirmed()),
        Err(Error::KeyConfirmationFailed) => Ok(false),
        Err(err) => Err(err),
    }
}
