//! Best-effort broadcast to connected peers
//!
//! Enumerates peers fresh on every call and delivers to each independently.
//! One peer failing does not abort delivery to the others, and nothing is
//! surfaced to the caller: a missed status update is repaired by the next
//! push.

use log::{trace, warn};

use gemel_core::traits::WearTransport;

use crate::connection::ConnectionManager;

/// Fire-and-forget fan-out over an established session
///
/// Does not connect; the caller runs `ensure_connected` first.
pub struct Broadcaster<'a, T: WearTransport> {
    link: &'a ConnectionManager<T>,
}

impl<'a, T: WearTransport> Broadcaster<'a, T> {
    /// Borrow the connection for a broadcast
    pub fn new(link: &'a ConnectionManager<T>) -> Self {
        Self { link }
    }

    /// Deliver `data` under `path` to every currently connected peer
    pub async fn broadcast(&self, path: &str, data: &[u8]) {
        let mut transport = self.link.transport().await;

        let peers = transport.connected_peers().await;
        if peers.is_empty() {
            trace!("no peers connected, nothing to deliver");
            return;
        }

        for peer in &peers {
            if let Err(e) = transport.send_to(peer, path, data).await {
                warn!("delivery to {} failed: {:?}", peer.as_str(), e);
            }
        }
    }
}
