//! Hardware seam: everything the control logic needs from the board.
//!
//! One implementor drives the real pins; tests inject a simulated board
//! with a virtual clock. Time is part of the seam: the control flow owns
//! the whole machine and blocks through every delay, so a board that
//! fakes `sleep_ms` can run a full wash program in microseconds.

/// Relay-style outputs under control of the wash program.
///
/// All six are binary and idempotent to write. The electrical convention
/// (these relay boards switch on at logic low) is the implementor's
/// business; the control logic deals in logical on/off only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Actuator {
    /// Water intake solenoid valve.
    IntakeValve,
    /// Circulation pump. Doubles as the agitator, and its turbulence
    /// suppresses the level probe, so it is the last output a shutdown
    /// stops.
    MainPump,
    /// Drain pump.
    DrainPump,
    /// Soap dispenser release.
    SoapDispenser,
    /// Water heater. First output any shutdown stops.
    Heater,
    /// Panel indicator light.
    IndicatorLamp,
}

/// The one trait a port implements.
pub trait Board {
    /// Drive one output to a logical state.
    fn set_actuator(&mut self, actuator: Actuator, on: bool);

    /// Raw water-level probe. True means the probe currently reads "no
    /// water at base level". Single reads are noisy under circulation;
    /// callers debounce.
    fn water_absent(&mut self) -> bool;

    /// Start/mode button, true while held.
    fn switch_pressed(&mut self) -> bool;

    /// Raw thermistor reading. No unit conversion anywhere: wash programs
    /// carry thresholds on the same raw scale the board reports.
    fn thermistor_raw(&mut self) -> u16;

    /// Start the fixed-frequency tone.
    fn tone_on(&mut self);

    /// Stop the tone.
    fn tone_off(&mut self);

    /// Monotonic milliseconds since power-up. Wraps after ~49 days;
    /// elapsed times are computed with `wrapping_sub`.
    fn now_ms(&self) -> u32;

    /// Block for `ms` milliseconds.
    fn sleep_ms(&mut self, ms: u32);
}
