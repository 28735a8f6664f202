//! Board-agnostic control logic for the washing machine firmware
//!
//! Everything that does not touch real hardware lives here:
//!
//! - The hardware seam trait (actuators, sensors, tone output, time)
//! - Debounced water-level sensing
//! - Audible signaling (heartbeats, announcements, fault alarms)
//! - The adaptive water loader and the fixed-hold drain
//! - Wash stage execution with thermistor-gated heating
//! - The fail-safe shutdown and terminal crash/done states
//!
//! Time reaches the logic only through the board trait, so the complete
//! timing model runs on the host under `cargo test` against a simulated
//! board with a virtual clock.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod board;
pub mod config;
pub mod machine;
pub mod state;

mod cycle;
mod drain;
mod failsafe;
mod loader;
mod sensor;
mod signal;

#[cfg(test)]
pub(crate) mod sim;

pub use board::{Actuator, Board};
pub use config::{Program, Stage, WasherConfig};
pub use machine::Washer;
pub use state::{Fault, Notice, Phase};
