//! Payload encoding and decoding for the sync channel
//!
//! Payloads are raw UTF-8 bytes. Decoding distinguishes the two shapes by
//! content: the exact pull token, or a formatted charge level. Anything that
//! is neither is rejected so it never propagates to the display.

use heapless::{String, Vec};

use crate::level::ChargeLevel;

/// Topic path shared by both peers; traffic on any other path is ignored
pub const SYNC_TOPIC: &str = "batterywatchface_message_path";

/// Pull request token (exact match, case-sensitive)
pub const PULL_TOKEN: &str = "get_level";

/// Maximum topic path length accepted from the transport
pub const MAX_PATH_LEN: usize = 48;

/// Maximum payload length accepted from the transport
pub const MAX_DATA_LEN: usize = 16;

/// Errors that can occur while decoding or building messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PayloadError {
    /// Payload bytes are not valid UTF-8
    NotUtf8,
    /// Payload is neither the pull token nor a valid charge level
    MalformedLevel,
    /// Path or payload exceeds the maximum accepted size
    TooLong,
}

/// A decoded sync-channel payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Request for the receiver's current battery level
    PullRequest,
    /// The sender's own battery level
    Level(ChargeLevel),
}

impl Payload {
    /// Decode a payload received on the sync topic
    pub fn decode(data: &[u8]) -> Result<Self, PayloadError> {
        let text = core::str::from_utf8(data).map_err(|_| PayloadError::NotUtf8)?;
        if text == PULL_TOKEN {
            return Ok(Payload::PullRequest);
        }
        ChargeLevel::parse(text)
            .map(Payload::Level)
            .ok_or(PayloadError::MalformedLevel)
    }

    /// The wire bytes for this payload
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Payload::PullRequest => PULL_TOKEN.as_bytes(),
            Payload::Level(level) => level.as_str().as_bytes(),
        }
    }
}

/// An owned inbound message as delivered by the transport
///
/// Owns its path and data so it can travel through an inter-task channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Topic path the message arrived on
    pub path: String<MAX_PATH_LEN>,
    /// Raw payload bytes
    pub data: Vec<u8, MAX_DATA_LEN>,
}

impl Message {
    /// Build a message, rejecting oversized paths or payloads
    pub fn new(path: &str, data: &[u8]) -> Result<Self, PayloadError> {
        let mut owned_path = String::new();
        owned_path.push_str(path).map_err(|_| PayloadError::TooLong)?;

        let mut owned_data = Vec::new();
        owned_data
            .extend_from_slice(data)
            .map_err(|_| PayloadError::TooLong)?;

        Ok(Self {
            path: owned_path,
            data: owned_data,
        })
    }

    /// Whether this message belongs to the sync protocol
    pub fn is_sync_topic(&self) -> bool {
        self.path.as_str() == SYNC_TOPIC
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_pull_token() {
        assert_eq!(Payload::decode(b"get_level"), Ok(Payload::PullRequest));
    }

    #[test]
    fn test_pull_token_is_case_sensitive() {
        assert_eq!(
            Payload::decode(b"GET_LEVEL"),
            Err(PayloadError::MalformedLevel)
        );
    }

    #[test]
    fn test_decode_level() {
        let payload = Payload::decode(b"42%").unwrap();
        assert_eq!(
            payload,
            Payload::Level(ChargeLevel::parse("42%").unwrap())
        );
    }

    #[test]
    fn test_decode_unknown_sentinel() {
        let payload = Payload::decode(b"?").unwrap();
        assert!(matches!(payload, Payload::Level(l) if l.is_unknown()));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert_eq!(
            Payload::decode(b"hello"),
            Err(PayloadError::MalformedLevel)
        );
        assert_eq!(Payload::decode(&[0xFF, 0xFE]), Err(PayloadError::NotUtf8));
    }

    #[test]
    fn test_encode_roundtrip() {
        let original = Payload::Level(ChargeLevel::from_reading(42, 100));
        let decoded = Payload::decode(original.as_bytes()).unwrap();
        assert_eq!(decoded, original);

        assert_eq!(Payload::PullRequest.as_bytes(), b"get_level");
    }

    #[test]
    fn test_message_topic_match() {
        let ours = Message::new(SYNC_TOPIC, b"42%").unwrap();
        assert!(ours.is_sync_topic());

        let other = Message::new("some_other_app_path", b"42%").unwrap();
        assert!(!other.is_sync_topic());
    }

    #[test]
    fn test_message_rejects_oversized() {
        let long_path = [b'x'; MAX_PATH_LEN + 1];
        let long_path = core::str::from_utf8(&long_path).unwrap();
        assert_eq!(
            Message::new(long_path, b"42%"),
            Err(PayloadError::TooLong)
        );

        let long_data = [b'9'; MAX_DATA_LEN + 1];
        assert_eq!(
            Message::new(SYNC_TOPIC, &long_data),
            Err(PayloadError::TooLong)
        );
    }
}
