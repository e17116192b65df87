use log::{debug, trace};

use crate::entropy::{random_bytes, EntropySource};
use crate::util::{confirmation_tag, derive_session_key, verify_confirmation_tag};
use crate::{
    Error, MessageId, Narrow, NetworkMessage, NetworkSimulator, Parameters, Wide, PRIVATE_KEY_BYTES,
};

/// One side of the exchange: a private exponent, the public value derived
/// from it, and whatever has been agreed with the counterparty so far.
pub struct Participant {
    pub id: String,
    params: Parameters,
    secret: Narrow,
    pk: Wide,
    shared_secret: Option<Wide>,
    session_key: Option<[u8; 32]>,
    counterparty_id: String,
    peer_confirmed: bool,
}

impl Participant {
    /// Draws a 64-bit private exponent from `entropy` and derives the
    /// public value `g^secret mod p`.
    pub fn new<S: EntropySource + ?Sized>(
        params: Parameters,
        id: String,
        counterparty_id: String,
        entropy: &mut S,
    ) -> Result<Self, Error> {
        let bytes = random_bytes(entropy, PRIVATE_KEY_BYTES)?;
        let secret = Narrow::from_le_bytes(&bytes)?;
        Self::from_private(params, id, counterparty_id, secret)
    }

    pub fn from_private(
        params: Parameters,
        id: String,
        counterparty_id: String,
        secret: Narrow,
    ) -> Result<Self, Error> {
        let pk = params.g.mod_pow(&secret, &params.p)?;
        debug!("{} derived a {}-bit public value", id, pk.bits());
        Ok(Self {
            id,
            params,
            secret,
            pk,
            shared_secret: None,
            session_key: None,
            counterparty_id,
            peer_confirmed: false,
        })
    }

    pub fn public_key(&self) -> &Wide {
        &self.pk
    }

    pub fn compute_shared_secret(&self, received_public: &Wide) -> Result<Wide, Error> {
        received_public.mod_pow(&self.secret, &self.params.p)
    }

    pub fn shared_secret(&self) -> Option<&Wide> {
        self.shared_secret.as_ref()
    }

    /// Whether the counterparty proved it derived the same session key.
    pub fn is_confirmed(&self) -> bool {
        self.peer_confirmed
    }

    pub fn share_pk(&self, network: &mut NetworkSimulator) -> Result<(), Error> {
        network.send(NetworkMessage {
            sender_id: self.id.clone(),
            value: self.pk.to_be_bytes(),
            message_id: MessageId::PubKey,
        })
    }

    pub fn receive_message(&mut self, network: &mut NetworkSimulator) -> Result<(), Error> {
        let message = network.consume()?;
        if message.sender_id != self.counterparty_id {
            return Err(Error::WrongCounterparty);
        }
        match message.message_id {
            MessageId::PubKey => {
                let v = Wide::from_be_bytes(&message.value)?;
                let shared = self.compute_shared_secret(&v)?;
                self.session_key = Some(derive_session_key(&shared));
                self.shared_secret = Some(shared);
                debug!("{} agreed a shared secret with {}", self.id, self.counterparty_id);
            }
            MessageId::KeyConfirmation => {
                let key = self.session_key.as_ref().ok_or(Error::NoSharedSecret)?;
                if !verify_confirmation_tag(key, self.counterparty_id.as_bytes(), &message.value) {
                    return Err(Error::KeyConfirmationFailed);
                }
                trace!("{} confirmed the key of {}", self.id, self.counterparty_id);
                self.peer_confirmed = true;
            }
        }
        Ok(())
    }

    /// Sends HMAC(session_key, own id) so the counterparty can check it
    /// holds the same key.
    pub fn send_key_confirmation(&self, network: &mut NetworkSimulator) -> Result<(), Error> {
        let key = self.session_key.as_ref().ok_or(Error::NoSharedSecret)?;
        network.send(NetworkMessage {
            sender_id: self.id.clone(),
            value: confirmation_tag(key, self.id.as_bytes()),
            message_id: MessageId::KeyConfirmation,
        })
    }
}
