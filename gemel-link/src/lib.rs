//! Embassy async link layer for the Gemel battery sync face
//!
//! Wires the runtime-agnostic core logic to an executor: a sync service that
//! exchanges battery levels with the paired device, and a render service that
//! drives the once-a-second redraw. Both are libraries over the gemel-core
//! traits; the host process owns the executor, the concrete transport, the
//! renderer, and the battery sensor, and spawns each service's `run()` in a
//! task of its own.
//!
//! # Concurrency model
//!
//! The render service never blocks on anything but its own tick timer.
//! Connect attempts and message delivery block for up to the configured
//! timeout, so they run only on the sync service; the two meet solely in
//! [`SharedBatteryState`], which hands out atomic snapshots.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod broadcast;
pub mod channels;
pub mod connection;
pub mod render;
pub mod state;
pub mod sync;

pub use broadcast::Broadcaster;
pub use channels::{deliver_message, post_face_event, relay_request};
pub use connection::{ConnectionManager, LinkError};
pub use render::RenderService;
pub use state::SharedBatteryState;
pub use sync::{record_local_reading, SyncService};
