//! Configuration type definitions
//!
//! The link layer is configured in code by the host; nothing is persisted.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default bound on a blocking connect attempt
pub const DEFAULT_CONNECT_TIMEOUT_MS: u32 = 30_000;

/// Default interactive redraw interval
pub const DEFAULT_REDRAW_INTERVAL_MS: u32 = 1_000;

/// Link layer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinkConfig {
    /// Upper bound on a transport connect attempt (ms)
    pub connect_timeout_ms: u32,
    /// Interactive redraw interval (ms); ticks phase-align to its boundaries
    pub redraw_interval_ms: u32,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
            redraw_interval_ms: DEFAULT_REDRAW_INTERVAL_MS,
        }
    }
}
