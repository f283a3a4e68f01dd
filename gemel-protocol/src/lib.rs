//! Battery Sync Channel Protocol
//!
//! This crate defines the message-path based protocol between the two paired
//! devices (handheld and wearable). The protocol is designed for simplicity:
//! both sides exchange short UTF-8 payloads on one well-known topic path.
//!
//! # Protocol Overview
//!
//! Every message is addressed to the fixed topic path [`SYNC_TOPIC`]; traffic
//! on any other path belongs to other applications and is ignored. There are
//! exactly two payload shapes, distinguished only by content:
//!
//! ```text
//! ┌──────────────┬───────────────────────────────────────────────┐
//! │ "get_level"  │ pull request: "tell me your battery level"    │
//! │ "<NN>%" / "?"│ push: the sender's formatted battery level    │
//! └──────────────┴───────────────────────────────────────────────┘
//! ```
//!
//! A push payload is the level exactly as it is displayed: at least two
//! digits, zero-padded (`"07%"`, `"42%"`, `"100%"`), or the `"?"` sentinel
//! when no reading exists. The protocol is level-based and last-write-wins;
//! there is no sequencing or acknowledgement.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod level;
pub mod payload;

pub use level::{ChargeLevel, MAX_LEVEL_LEN};
pub use payload::{Message, Payload, PayloadError, MAX_DATA_LEN, MAX_PATH_LEN, PULL_TOKEN, SYNC_TOPIC};
