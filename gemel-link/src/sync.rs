//! Battery level sync service
//!
//! The one worker that talks to the transport. It drains two queues: relay
//! requests (payloads to push to the peers) and inbound messages from the
//! transport. A pull request is answered with the most recently formatted
//! local level; a push updates the peer's level in shared state.
//!
//! Writes to [`SharedBatteryState`] are serialized by this single worker;
//! ordering across devices is unspecified. The protocol is level-based and
//! last-write-wins, so that is sufficient.

use embassy_futures::select::{select, Either};
use log::{debug, warn};

use gemel_core::traits::WearTransport;
use gemel_protocol::{ChargeLevel, Message, Payload, SYNC_TOPIC};

use crate::broadcast::Broadcaster;
use crate::channels::{InboundQueue, RelayQueue, INBOUND_QUEUE, RELAY_QUEUE};
use crate::connection::ConnectionManager;
use crate::state::SharedBatteryState;

/// Sync protocol worker
pub struct SyncService<'a, T: WearTransport> {
    link: &'a ConnectionManager<T>,
    state: &'a SharedBatteryState,
    relay: &'a RelayQueue,
    inbound: &'a InboundQueue,
}

impl<'a, T: WearTransport> SyncService<'a, T> {
    /// Build a service over explicit queues
    pub fn new(
        link: &'a ConnectionManager<T>,
        state: &'a SharedBatteryState,
        relay: &'a RelayQueue,
        inbound: &'a InboundQueue,
    ) -> Self {
        Self {
            link,
            state,
            relay,
            inbound,
        }
    }

    /// Build a service over the global channels
    pub fn attached(link: &'a ConnectionManager<T>, state: &'a SharedBatteryState) -> Self {
        Self::new(link, state, &RELAY_QUEUE, &INBOUND_QUEUE)
    }

    /// Worker loop; spawn this in its own task
    pub async fn run(self) -> ! {
        debug!("sync service started");

        loop {
            match select(self.relay.receive(), self.inbound.receive()).await {
                Either::First(payload) => self.push_to_peers(&payload).await,
                Either::Second(message) => self.handle_message(&message).await,
            }
        }
    }

    /// Connect (best effort) and fan the payload out to every peer
    async fn push_to_peers(&self, payload: &Payload) {
        if let Err(e) = self.link.ensure_connected().await {
            // Still attempt delivery: enumeration just finds no peers
            warn!("connect failed before push: {:?}", e);
        }

        Broadcaster::new(self.link)
            .broadcast(SYNC_TOPIC, payload.as_bytes())
            .await;
    }

    /// Process one message received from the transport
    async fn handle_message(&self, message: &Message) {
        if !message.is_sync_topic() {
            // Some other application's traffic
            return;
        }

        match Payload::decode(&message.data) {
            Ok(Payload::PullRequest) => {
                // Answer with the last formatted level; never re-read the sensor
                let local = self.state.local();
                self.push_to_peers(&Payload::Level(local)).await;
            }
            Ok(Payload::Level(level)) => {
                debug!("peer level is {}", level);
                self.state.set_remote(level);
            }
            Err(e) => {
                warn!("malformed payload from peer: {:?}", e);
                self.state.set_remote(ChargeLevel::unknown());
            }
        }
    }
}

/// Handle a local battery reading from the host's sensor listener
///
/// Formats the reading, records it, then queues a push of the new level and
/// a pull of the peer's level, so staleness is bounded by one round trip
/// after any local change.
pub fn record_local_reading(
    state: &SharedBatteryState,
    relay: &RelayQueue,
    level: i32,
    scale: i32,
) {
    let charge = ChargeLevel::from_reading(level, scale);
    state.set_local(charge.clone());

    enqueue(relay, Payload::Level(charge));
    enqueue(relay, Payload::PullRequest);
}

fn enqueue(relay: &RelayQueue, payload: Payload) {
    if relay.try_send(payload).is_err() {
        warn!("relay queue full, dropping payload");
    }
}
