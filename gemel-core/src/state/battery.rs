//! Last-known battery levels of both devices
//!
//! Both fields start as the unknown sentinel at process start; nothing is
//! persisted across restarts.

use gemel_protocol::ChargeLevel;

/// Last-known charge levels of this device and its peer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatteryLevels {
    /// This device's own level, as most recently formatted
    pub local: ChargeLevel,
    /// The paired device's level, as most recently pushed to us
    pub remote: ChargeLevel,
}

impl BatteryLevels {
    /// Both levels unknown
    pub fn new() -> Self {
        Self {
            local: ChargeLevel::unknown(),
            remote: ChargeLevel::unknown(),
        }
    }
}

impl Default for BatteryLevels {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unknown() {
        let levels = BatteryLevels::new();
        assert!(levels.local.is_unknown());
        assert!(levels.remote.is_unknown());
    }
}
