//! Render scheduling service
//!
//! Drives the redraw cadence machine: while the face is visible and
//! interactive it redraws once a second, phase-aligned to wall-clock second
//! boundaries; hidden or ambient faces draw only on explicit events. This
//! loop owns the tick timer and never blocks on anything else — every path
//! that leaves the ticking state drops the armed timer.

use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Timer};
use log::debug;

use gemel_core::config::LinkConfig;
use gemel_core::scheduler::{
    delay_to_next_tick, CadenceCommand, CadenceState, FaceEvent, RedrawCadence,
};
use gemel_core::traits::{FrameRenderer, WallClock};

use crate::channels::{FaceEventQueue, FACE_EVENTS};
use crate::state::SharedBatteryState;

/// Redraw driver loop
pub struct RenderService<'a, R: FrameRenderer, C: WallClock> {
    cadence: RedrawCadence,
    renderer: R,
    clock: C,
    state: &'a SharedBatteryState,
    events: &'a FaceEventQueue,
    config: LinkConfig,
}

impl<'a, R: FrameRenderer, C: WallClock> RenderService<'a, R, C> {
    /// Build a service over an explicit event queue
    pub fn new(
        renderer: R,
        clock: C,
        state: &'a SharedBatteryState,
        events: &'a FaceEventQueue,
        config: LinkConfig,
    ) -> Self {
        Self {
            cadence: RedrawCadence::new(),
            renderer,
            clock,
            state,
            events,
            config,
        }
    }

    /// Build a service over the global face event channel
    pub fn attached(
        renderer: R,
        clock: C,
        state: &'a SharedBatteryState,
        config: LinkConfig,
    ) -> Self {
        Self::new(renderer, clock, state, &FACE_EVENTS, config)
    }

    /// Driver loop; spawn this in its own task
    pub async fn run(mut self) -> ! {
        debug!("render service started");

        loop {
            let event = match self.cadence.state() {
                CadenceState::Idle => self.events.receive().await,
                CadenceState::Ticking => {
                    let delay =
                        delay_to_next_tick(self.clock.wall_ms(), self.config.redraw_interval_ms);
                    match select(
                        Timer::after(Duration::from_millis(delay)),
                        self.events.receive(),
                    )
                    .await
                    {
                        Either::First(()) => FaceEvent::TickFired,
                        // The armed timer is dropped here, so any event that
                        // leaves the ticking state also cancels the tick
                        Either::Second(event) => event,
                    }
                }
            };
            self.apply(event);
        }
    }

    fn apply(&mut self, event: FaceEvent) {
        match self.cadence.apply(event) {
            CadenceCommand::Redraw | CadenceCommand::RedrawAndArm => self.redraw(),
            CadenceCommand::Disarm | CadenceCommand::None => {}
        }
    }

    fn redraw(&mut self) {
        let snapshot = self.state.snapshot();
        self.renderer.draw_frame(&snapshot, self.clock.wall_ms());
    }
}
