//! Abstraction traits for the host's collaborators
//!
//! The concrete peer transport, the frame renderer, and the wall clock all
//! live in the host process. The link layer is written against these traits
//! and never sees platform types.

pub mod render;
pub mod transport;

pub use render::{FrameRenderer, WallClock};
pub use transport::{PeerNode, WearTransport, MAX_PEERS, MAX_PEER_ID_LEN};
