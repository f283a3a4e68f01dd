//! Runtime-agnostic core logic for the Gemel battery sync face
//!
//! This crate contains all application logic that does not depend on a
//! specific transport, renderer, or async runtime:
//!
//! - Abstraction traits (transport, frame renderer, wall clock)
//! - Connection state machine
//! - Redraw cadence state machine with phase-aligned delay math
//! - Shared battery record
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod scheduler;
pub mod state;
pub mod traits;
