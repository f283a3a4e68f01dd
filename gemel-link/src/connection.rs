//! Transport connection manager
//!
//! Owns the one transport session and the connection state machine. Connect
//! attempts are bounded by the configured timeout and serialized through an
//! async mutex: a caller that finds an attempt in flight waits for it, then
//! observes the result instead of starting a second attempt.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::{Mutex, MutexGuard};
use embassy_time::{with_timeout, Duration};
use log::{debug, warn};
use portable_atomic::{AtomicU8, Ordering};

use gemel_core::config::LinkConfig;
use gemel_core::state::ConnectionState;
use gemel_core::traits::WearTransport;

/// Connection-level errors
///
/// Transient and non-fatal: callers proceed best-effort and the next
/// triggering event retries from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    /// Connect attempt exceeded the configured timeout
    ConnectTimeout,
    /// Transport reported a connect failure
    ConnectFailed,
}

/// Owner of the transport session
pub struct ConnectionManager<T: WearTransport> {
    transport: Mutex<CriticalSectionRawMutex, T>,
    // Mirror of the state machine for non-blocking reads
    state: AtomicU8,
    config: LinkConfig,
}

impl<T: WearTransport> ConnectionManager<T> {
    /// Take ownership of a transport session
    pub fn new(transport: T, config: LinkConfig) -> Self {
        Self {
            transport: Mutex::new(transport),
            state: AtomicU8::new(ConnectionState::Disconnected.as_u8()),
            config,
        }
    }

    /// Current connection state, without blocking
    pub fn state(&self) -> ConnectionState {
        ConnectionState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Whether a transport session is currently established
    pub fn is_connected(&self) -> bool {
        self.state().is_connected()
    }

    fn set_state(&self, state: ConnectionState) {
        self.state.store(state.as_u8(), Ordering::Release);
    }

    /// Establish the transport session if it is not already up
    ///
    /// Returns immediately when connected. Otherwise runs one connect
    /// attempt, bounded by the configured timeout. Concurrent callers are
    /// serialized: exactly one attempt runs, the rest wait and then see its
    /// outcome.
    pub async fn ensure_connected(&self) -> Result<(), LinkError> {
        let mut transport = self.transport.lock().await;
        if self.is_connected() {
            return Ok(());
        }

        self.set_state(ConnectionState::Connecting);
        let timeout = Duration::from_millis(self.config.connect_timeout_ms as u64);
        match with_timeout(timeout, transport.connect()).await {
            Ok(Ok(())) => {
                self.set_state(ConnectionState::Connected);
                debug!("transport connected");
                Ok(())
            }
            Ok(Err(e)) => {
                self.set_state(ConnectionState::Disconnected);
                warn!("transport connect failed: {:?}", e);
                Err(LinkError::ConnectFailed)
            }
            Err(_) => {
                self.set_state(ConnectionState::Disconnected);
                warn!(
                    "transport connect timed out after {} ms",
                    self.config.connect_timeout_ms
                );
                Err(LinkError::ConnectTimeout)
            }
        }
    }

    /// Tear the session down; idempotent
    ///
    /// Called on teardown. In-flight sends fail silently afterwards.
    pub async fn disconnect(&self) {
        let mut transport = self.transport.lock().await;
        if self.is_connected() {
            transport.disconnect();
            debug!("transport disconnected");
        }
        self.set_state(ConnectionState::Disconnected);
    }

    /// Exclusive transport access for the broadcast path
    pub(crate) async fn transport(&self) -> MutexGuard<'_, CriticalSectionRawMutex, T> {
        self.transport.lock().await
    }
}
