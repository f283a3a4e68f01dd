//! Peer transport abstraction
//!
//! Wraps whatever the platform provides for talking to the paired device.
//! One transport instance is one session; the connection manager owns it and
//! serializes access.

use heapless::{String, Vec};

/// Maximum peer identifier length
pub const MAX_PEER_ID_LEN: usize = 32;

/// Maximum simultaneously connected peers
pub const MAX_PEERS: usize = 4;

/// Opaque identifier of a connected peer
///
/// Obtained fresh on every enumeration; never cached across operations,
/// since peers join and leave between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerNode(String<MAX_PEER_ID_LEN>);

impl PeerNode {
    /// Wrap a platform peer id; `None` if it exceeds [`MAX_PEER_ID_LEN`]
    pub fn new(id: &str) -> Option<Self> {
        let mut owned = String::new();
        owned.push_str(id).ok()?;
        Some(Self(owned))
    }

    /// The platform-level identifier
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PeerNode {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=str}", self.as_str());
    }
}

/// Peer-to-peer transport session
///
/// Implemented by the host over the platform's peer messaging service.
/// Connect attempts may block for a long time; the link layer bounds them
/// with its own timeout.
#[allow(async_fn_in_trait)]
pub trait WearTransport {
    /// Error type for transport operations
    type Error: core::fmt::Debug;

    /// Establish the transport session
    async fn connect(&mut self) -> Result<(), Self::Error>;

    /// Tear the session down; must be idempotent
    fn disconnect(&mut self);

    /// Enumerate the peers currently reachable through this session
    ///
    /// An empty list is a normal result, not an error.
    async fn connected_peers(&mut self) -> Vec<PeerNode, MAX_PEERS>;

    /// Deliver `data` to one peer under the given topic path
    async fn send_to(
        &mut self,
        peer: &PeerNode,
        path: &str,
        data: &[u8],
    ) -> Result<(), Self::Error>;
}
