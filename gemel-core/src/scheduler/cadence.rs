//! Redraw cadence state machine
//!
//! The face redraws once a second while it is visible and interactive, and
//! not at all while hidden or in power-save (ambient) mode. This machine
//! tracks those two flags and tells the driver loop what to do; the driver
//! owns the actual timer.
//!
//! Ticks are phase-aligned to wall-clock second boundaries so the displayed
//! seconds digit changes in step with real time.

/// Cadence states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CadenceState {
    /// No tick armed; waiting for the face to become interactive
    Idle,
    /// A tick is armed for the next second boundary
    Ticking,
}

/// Inputs to the cadence machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceEvent {
    /// The face became visible or hidden
    VisibilityChanged(bool),
    /// The face entered or left power-save (ambient) mode
    AmbientChanged(bool),
    /// The armed tick fired
    TickFired,
    /// The platform's own time tick (minute boundary in ambient mode)
    SystemTimeTick,
}

/// What the driver loop must do after applying an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CadenceCommand {
    /// Nothing to do
    None,
    /// Redraw once; the timer state is unchanged
    Redraw,
    /// Redraw now and arm a tick for the next second boundary
    RedrawAndArm,
    /// Cancel the armed tick
    Disarm,
}

/// Cadence state machine
///
/// Pure logic: the driver loop feeds it [`FaceEvent`]s and executes the
/// returned [`CadenceCommand`]s.
#[derive(Debug, Clone)]
pub struct RedrawCadence {
    state: CadenceState,
    visible: bool,
    ambient: bool,
}

impl Default for RedrawCadence {
    fn default() -> Self {
        Self::new()
    }
}

impl RedrawCadence {
    /// Create a cadence machine for a hidden, interactive face
    pub fn new() -> Self {
        Self {
            state: CadenceState::Idle,
            visible: false,
            ambient: false,
        }
    }

    /// Current state
    pub fn state(&self) -> CadenceState {
        self.state
    }

    /// The timer should only run while the face is visible and interactive
    pub fn should_tick(&self) -> bool {
        self.visible && !self.ambient
    }

    /// Apply an event and return the driver's next action
    pub fn apply(&mut self, event: FaceEvent) -> CadenceCommand {
        match event {
            FaceEvent::VisibilityChanged(visible) => {
                self.visible = visible;
                self.reevaluate()
            }
            FaceEvent::AmbientChanged(ambient) => {
                self.ambient = ambient;
                self.reevaluate()
            }
            FaceEvent::TickFired => {
                if self.state != CadenceState::Ticking {
                    return CadenceCommand::None;
                }
                // Always redraw on a fired tick; keep ticking only while the
                // predicate still holds.
                if self.should_tick() {
                    CadenceCommand::RedrawAndArm
                } else {
                    self.state = CadenceState::Idle;
                    CadenceCommand::Redraw
                }
            }
            FaceEvent::SystemTimeTick => CadenceCommand::Redraw,
        }
    }

    fn reevaluate(&mut self) -> CadenceCommand {
        match (self.state, self.should_tick()) {
            (CadenceState::Idle, true) => {
                self.state = CadenceState::Ticking;
                CadenceCommand::RedrawAndArm
            }
            (CadenceState::Ticking, false) => {
                self.state = CadenceState::Idle;
                CadenceCommand::Disarm
            }
            _ => CadenceCommand::None,
        }
    }
}

/// Delay until the next tick boundary
///
/// `interval_ms - (now_ms % interval_ms)`: on an exact boundary the delay is
/// a full interval, never zero.
pub fn delay_to_next_tick(now_ms: u64, interval_ms: u32) -> u64 {
    let interval = interval_ms as u64;
    interval - (now_ms % interval)
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    fn ticking() -> RedrawCadence {
        let mut cadence = RedrawCadence::new();
        assert_eq!(
            cadence.apply(FaceEvent::VisibilityChanged(true)),
            CadenceCommand::RedrawAndArm
        );
        cadence
    }

    #[test]
    fn test_visible_starts_ticking() {
        let cadence = ticking();
        assert_eq!(cadence.state(), CadenceState::Ticking);
        assert!(cadence.should_tick());
    }

    #[test]
    fn test_hidden_stops_ticking() {
        let mut cadence = ticking();
        assert_eq!(
            cadence.apply(FaceEvent::VisibilityChanged(false)),
            CadenceCommand::Disarm
        );
        assert_eq!(cadence.state(), CadenceState::Idle);
    }

    #[test]
    fn test_ambient_entry_stops_ticking() {
        let mut cadence = ticking();
        assert_eq!(
            cadence.apply(FaceEvent::AmbientChanged(true)),
            CadenceCommand::Disarm
        );
        assert_eq!(cadence.state(), CadenceState::Idle);
    }

    #[test]
    fn test_ambient_exit_resumes_ticking() {
        let mut cadence = ticking();
        cadence.apply(FaceEvent::AmbientChanged(true));

        assert_eq!(
            cadence.apply(FaceEvent::AmbientChanged(false)),
            CadenceCommand::RedrawAndArm
        );
        assert_eq!(cadence.state(), CadenceState::Ticking);
    }

    #[test]
    fn test_visible_in_ambient_stays_idle() {
        let mut cadence = RedrawCadence::new();
        cadence.apply(FaceEvent::AmbientChanged(true));

        assert_eq!(
            cadence.apply(FaceEvent::VisibilityChanged(true)),
            CadenceCommand::None
        );
        assert_eq!(cadence.state(), CadenceState::Idle);
    }

    #[test]
    fn test_tick_redraws_and_rearms() {
        let mut cadence = ticking();
        assert_eq!(cadence.apply(FaceEvent::TickFired), CadenceCommand::RedrawAndArm);
        assert_eq!(cadence.state(), CadenceState::Ticking);
    }

    #[test]
    fn test_stray_tick_while_idle_ignored() {
        let mut cadence = RedrawCadence::new();
        assert_eq!(cadence.apply(FaceEvent::TickFired), CadenceCommand::None);
    }

    #[test]
    fn test_system_tick_redraws_without_arming() {
        let mut cadence = RedrawCadence::new();
        assert_eq!(cadence.apply(FaceEvent::SystemTimeTick), CadenceCommand::Redraw);
        assert_eq!(cadence.state(), CadenceState::Idle);

        let mut cadence = ticking();
        assert_eq!(cadence.apply(FaceEvent::SystemTimeTick), CadenceCommand::Redraw);
        assert_eq!(cadence.state(), CadenceState::Ticking);
    }

    #[test]
    fn test_delay_is_phase_aligned() {
        assert_eq!(delay_to_next_tick(322, 1000), 678);
        assert_eq!(delay_to_next_tick(12_345_678, 1000), 322);
    }

    #[test]
    fn test_delay_on_exact_boundary_is_full_interval() {
        assert_eq!(delay_to_next_tick(0, 1000), 1000);
        assert_eq!(delay_to_next_tick(5000, 1000), 1000);
    }

    proptest! {
        #[test]
        fn prop_delay_lands_on_boundary(now in 0u64..=u32::MAX as u64, interval in 1u32..=60_000) {
            let delay = delay_to_next_tick(now, interval);
            prop_assert!(delay >= 1);
            prop_assert!(delay <= interval as u64);
            prop_assert_eq!((now + delay) % interval as u64, 0);
        }
    }
}
