//! Adaptive water loading.
//!
//! The tank has no volume sensor, only a binary base-level probe. One
//! measured fill time calibrates the whole load: fill to base level while
//! timing it, keep the valve open that long again, pump blind for a
//! further 2/3 of it, then top up under level control for at most another
//! 3/2 of it. Heartbeat beeps keep every phase audibly alive.

use crate::board::{Actuator, Board};
use crate::machine::Washer;
use crate::signal::BEEP_GAP_MS;
use crate::state::{Fault, Notice};

/// Heartbeat in the valve-only doubling phase: one slow blip.
const DOUBLE_FILL_BEEP_MS: u32 = 80;
/// Heartbeat once the pump runs: short blips.
const PUMPED_BEEP_MS: u32 = 50;

impl<B: Board> Washer<B> {
    /// Fill the tank. Returns with the intake valve closed, the main pump
    /// running and the level stable at or above base.
    ///
    /// `LoadTimeout` means base level never arrived within the bound;
    /// `TopUpFailed` means the level would not stabilise after the derived
    /// fill phases. Both are fatal to the program upstream.
    pub fn load(&mut self) -> Result<(), Fault> {
        let settle = self.cfg.load_reset_settle_ms;
        self.reset(settle);
        self.announce(Notice::Loading);

        // Base fill: valve open, poll until the probe agrees or the
        // authoritative timeout passes.
        let opened_at = self.now();
        self.set(Actuator::IntakeValve, true);
        while !self.is_loaded() && self.since(opened_at) < self.cfg.load_timeout_ms {
            let poll = self.cfg.level_poll_ms;
            self.sleep(poll);
        }
        // A lone dry reading never fails a load; dry AND out of time does.
        // The re-sample lets a loaded tank through even when the loop left
        // on a turbulent miss at the deadline.
        if !self.is_loaded() && self.since(opened_at) >= self.cfg.load_timeout_ms {
            return Err(Fault::LoadTimeout);
        }
        let load_time = self.since(opened_at);

        // Keep the valve open one more load_time to roughly double the
        // base volume. No pump yet, no level reads.
        let started = self.now();
        while self.since(started) < load_time {
            self.tones(1, DOUBLE_FILL_BEEP_MS, BEEP_GAP_MS);
            let pause = self.cfg.double_fill_pause_ms;
            self.sleep(pause);
        }

        // Enough water above base to start circulation.
        self.set(Actuator::MainPump, true);

        // Blind fill for 2/3 load_time: the probe is worthless while the
        // pump spins up, so nothing reads it here.
        let started = self.now();
        while self.since(started) < load_time * 2 / 3 {
            self.tones(2, PUMPED_BEEP_MS, BEEP_GAP_MS);
            let pause = self.cfg.pumped_fill_pause_ms;
            self.sleep(pause);
        }

        // Top-up: watch the probe again, stop as soon as it stabilises,
        // but never fill longer than another 3/2 load_time.
        let started = self.now();
        while !self.is_loaded() && self.since(started) < load_time * 3 / 2 {
            self.tones(1, PUMPED_BEEP_MS, BEEP_GAP_MS);
            let pause = self.cfg.top_up_pause_ms;
            self.sleep(pause);
        }
        // The heater gate downstream trusts this level; an unstable read
        // here is fatal, not something to wash through.
        if !self.is_loaded() {
            return Err(Fault::TopUpFailed);
        }

        self.set(Actuator::IntakeValve, false);
        let settle = self.cfg.valve_close_settle_ms;
        self.sleep(settle);
        Ok(())
    }
}
