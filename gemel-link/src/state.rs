//! Shared battery state cell
//!
//! One owned instance, created by the host and handed by reference to the
//! sync service (writer), the sensor listener (writer), and the render
//! service (reader). The mutex guarantees a reader always sees a fully
//! formed level, never a partial write.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use gemel_core::state::BatteryLevels;
use gemel_protocol::ChargeLevel;

/// Process-lifetime record of both devices' last-known charge levels
pub struct SharedBatteryState {
    levels: Mutex<CriticalSectionRawMutex, RefCell<BatteryLevels>>,
}

impl SharedBatteryState {
    /// Both levels start unknown
    pub fn new() -> Self {
        Self {
            levels: Mutex::new(RefCell::new(BatteryLevels::new())),
        }
    }

    /// Atomic copy of both levels, for the renderer
    pub fn snapshot(&self) -> BatteryLevels {
        self.levels.lock(|levels| levels.borrow().clone())
    }

    /// This device's most recently formatted level
    pub fn local(&self) -> ChargeLevel {
        self.levels.lock(|levels| levels.borrow().local.clone())
    }

    /// Record this device's own level
    pub fn set_local(&self, level: ChargeLevel) {
        self.levels.lock(|levels| levels.borrow_mut().local = level);
    }

    /// Record the peer's pushed level (last write wins)
    pub fn set_remote(&self, level: ChargeLevel) {
        self.levels.lock(|levels| levels.borrow_mut().remote = level);
    }
}

impl Default for SharedBatteryState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unknown() {
        let state = SharedBatteryState::new();
        let snapshot = state.snapshot();
        assert!(snapshot.local.is_unknown());
        assert!(snapshot.remote.is_unknown());
    }

    #[test]
    fn test_writes_visible_in_snapshot() {
        let state = SharedBatteryState::new();
        state.set_local(ChargeLevel::from_reading(42, 100));
        state.set_remote(ChargeLevel::from_reading(7, 100));

        let snapshot = state.snapshot();
        assert_eq!(snapshot.local.as_str(), "42%");
        assert_eq!(snapshot.remote.as_str(), "07%");
    }

    #[test]
    fn test_reapplying_same_remote_is_noop() {
        let state = SharedBatteryState::new();
        let level = ChargeLevel::from_reading(42, 100);

        state.set_remote(level.clone());
        let first = state.snapshot();
        state.set_remote(level);
        assert_eq!(state.snapshot(), first);
    }
}
