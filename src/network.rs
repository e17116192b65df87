use std::collections::VecDeque;

use crate::Error;

/// In-memory stand-in for the channel the public values travel over.
#[derive(Debug, Default)]
pub struct NetworkSimulator {
    messages: VecDeque<NetworkMessage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageId {
    PubKey,
    KeyConfirmation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkMessage {
    pub sender_id: String,
    pub message_id: MessageId,
    pub value: Vec<u8>,
}

impl NetworkSimulator {
    pub fn new() -> Self {
        Self {
            messages: VecDeque::new(),
        }
    }

    pub fn send(&mut self, message: NetworkMessage) -> Result<(), Error> {
        log::trace!(
            "{} sends {:?} ({} bytes)",
            message.sender_id,
            message.message_id,
            message.value.len()
        );
        self.messages.push_back(message);
        Ok(())
    }

    /// Takes the oldest pending message.
    pub fn consume(&mut self) -> Result<NetworkMessage, Error> {
        self.messages.pop_front().ok_or(Error::NetworkEmpty)
    }

    pub fn pending(&self) -> usize {
        self.messages.len()
    }
}
