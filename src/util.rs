use hmac::{Hmac, Mac};
use sha2::Digest;
use sha2::Sha256;

use crate::Wide;

pub type HmacSha256 = Hmac<Sha256>;

/// SHA-256 over the minimal big-endian encoding of the shared secret.
pub fn derive_session_key(shared_secret: &Wide) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(shared_secret.to_be_bytes());
    hasher.finalize().into()
}

/// HMAC-SHA256(session_key, label), proving knowledge of the key without
/// revealing it.
pub fn confirmation_tag(session_key: &[u8; 32], label: &[u8]) -> Vec<u8> {
    keyed_mac(session_key, label).finalize().into_bytes().to_vec()
}

/// Checks a tag received from a peer in constant time.
pub fn verify_confirmation_tag(session_key: &[u8; 32], label: &[u8], tag: &[u8]) -> bool {
    keyed_mac(session_key, label).verify_slice(tag).is_ok()
}

fn keyed_mac(session_key: &[u8; 32], label: &[u8]) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(session_key).expect("HMAC can take key of any size");
    mac.update(label);
    mac
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_key_depends_on_secret() {
        let a = derive_session_key(&Wide::from(1u64));
        let b = derive_session_key(&Wide::from(2u64));
        assert_ne!(a, b);
        // sha256(0x01)
        assert_eq!(a[..4], [0x4b, 0xf5, 0x12, 0x2f]);
    }

    #[test]
    fn test_tags_verify() {
        let key = derive_session_key(&Wide::from(99u64));
        let tag = confirmation_tag(&key, b"alice");
        assert_eq!(tag.len(), 32);
        assert!(verify_confirmation_tag(&key, b"alice", &tag));
        assert!(!verify_confirmation_tag(&key, b"bob", &tag));
        let other = derive_session_key(&Wide::from(100u64));
        assert!(!verify_confirmation_tag(&other, b"alice", &tag));
    }

    #[test]
    fn test_truncated_tag_is_rejected() {
        let key = derive_session_key(&Wide::from(99u64));
        let tag = confirmation_tag(&key, b"alice");
        assert!(!verify_confirmation_tag(&key, b"alice", &tag[..16]));
        assert!(!verify_confirmation_tag(&key, b"alice", &[]));
    }
}
