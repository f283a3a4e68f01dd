//! Redraw scheduling
//!
//! Decides when the face needs a redraw and whether the once-a-second tick
//! should keep running.

pub mod cadence;

pub use cadence::{delay_to_next_tick, CadenceCommand, CadenceState, FaceEvent, RedrawCadence};
