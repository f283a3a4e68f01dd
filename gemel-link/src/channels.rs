//! Inter-task communication channels
//!
//! Defines the static channels between the host's callbacks and the two
//! service loops, plus the enqueue helpers the host calls from its own
//! context. Enqueueing never blocks; a full queue drops the item with a
//! warning.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use log::warn;

use gemel_core::scheduler::FaceEvent;
use gemel_protocol::{Message, Payload};

/// Channel capacity for outbound relay requests
pub const RELAY_QUEUE_SIZE: usize = 8;

/// Channel capacity for inbound transport messages
pub const INBOUND_QUEUE_SIZE: usize = 8;

/// Channel capacity for face lifecycle events
pub const FACE_EVENT_QUEUE_SIZE: usize = 4;

/// Payloads waiting to be pushed to the peers
pub type RelayQueue = Channel<CriticalSectionRawMutex, Payload, RELAY_QUEUE_SIZE>;

/// Messages received from the transport
pub type InboundQueue = Channel<CriticalSectionRawMutex, Message, INBOUND_QUEUE_SIZE>;

/// Visibility, ambient-mode, and system-tick events from the face lifecycle
pub type FaceEventQueue = Channel<CriticalSectionRawMutex, FaceEvent, FACE_EVENT_QUEUE_SIZE>;

/// Outbound relay requests (host and sync service → sync service)
pub static RELAY_QUEUE: RelayQueue = Channel::new();

/// Inbound transport messages (host's message listener → sync service)
pub static INBOUND_QUEUE: InboundQueue = Channel::new();

/// Face lifecycle events (host's face callbacks → render service)
pub static FACE_EVENTS: FaceEventQueue = Channel::new();

/// Queue a payload for broadcast to the peers
pub fn relay_request(payload: Payload) {
    if RELAY_QUEUE.try_send(payload).is_err() {
        warn!("relay queue full, dropping payload");
    }
}

/// Hand a message received from the transport to the sync service
pub fn deliver_message(message: Message) {
    if INBOUND_QUEUE.try_send(message).is_err() {
        warn!("inbound queue full, dropping message");
    }
}

/// Report a face lifecycle change to the render service
pub fn post_face_event(event: FaceEvent) {
    if FACE_EVENTS.try_send(event).is_err() {
        warn!("face event queue full, dropping event");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use gemel_protocol::SYNC_TOPIC;

    // All three helpers share the global statics, so this is a single test.
    #[test]
    fn test_helpers_enqueue() {
        while RELAY_QUEUE.try_receive().is_ok() {}
        while INBOUND_QUEUE.try_receive().is_ok() {}
        while FACE_EVENTS.try_receive().is_ok() {}

        relay_request(Payload::PullRequest);
        assert_eq!(RELAY_QUEUE.try_receive().unwrap(), Payload::PullRequest);

        let message = Message::new(SYNC_TOPIC, b"42%").unwrap();
        deliver_message(message.clone());
        assert_eq!(INBOUND_QUEUE.try_receive().unwrap(), message);

        post_face_event(FaceEvent::VisibilityChanged(true));
        assert_eq!(
            FACE_EVENTS.try_receive().unwrap(),
            FaceEvent::VisibilityChanged(true)
        );
    }
}
