//! Ordered shutdown, the crashed terminal state, and terminal signaling.

use crate::board::{Actuator, Board};
use crate::machine::Washer;
use crate::signal::BEEP_GAP_MS;
use crate::state::{Fault, Phase};

/// Done-state beacon burst: rapid chirps.
const DONE_BEACON_COUNT: u8 = 20;
const DONE_BEACON_ON_MS: u32 = 50;

impl<B: Board> Washer<B> {
    /// Drive every output off, in a fixed order, with `settle_ms` after
    /// each write.
    ///
    /// The order is a safety contract. The heater stops first: it must
    /// never stay powered once circulation is in doubt. The main pump
    /// stops last: around a drain handover its turbulence is what keeps
    /// the level probe suppressed, and releasing it early invites a false
    /// "loaded" read against a tub that is about to be pumped out.
    pub fn reset(&mut self, settle_ms: u32) {
        self.set(Actuator::Heater, false);
        self.sleep(settle_ms);
        self.set(Actuator::IntakeValve, false);
        self.sleep(settle_ms);
        self.set(Actuator::DrainPump, false);
        self.sleep(settle_ms);
        self.set(Actuator::SoapDispenser, false);
        self.sleep(settle_ms);
        self.set(Actuator::IndicatorLamp, false);
        self.sleep(settle_ms);
        self.set(Actuator::MainPump, false);
        self.sleep(settle_ms);
    }

    /// Enter the fault terminal state: full shutdown with the long crash
    /// settle, then `Crashed(fault)`. Only a power cycle leaves it; the
    /// caller keeps the machine audible with [`Washer::beacon`].
    pub fn crash(&mut self, fault: Fault) {
        let settle = self.cfg.crash_reset_settle_ms;
        self.reset(settle);
        self.phase = Phase::Crashed(fault);
    }

    /// One iteration of terminal-state signaling: the fault alarm and a
    /// long pause when crashed, a chirp burst and a short pause when done.
    /// Never moves an actuator, and does nothing in any other phase.
    pub fn beacon(&mut self) {
        match self.phase {
            Phase::Crashed(fault) => {
                self.alarm(fault);
                let pause = self.cfg.alarm_beacon_pause_ms;
                self.sleep(pause);
            }
            Phase::Done => {
                self.tones(DONE_BEACON_COUNT, DONE_BEACON_ON_MS, BEEP_GAP_MS);
                let pause = self.cfg.done_beacon_pause_ms;
                self.sleep(pause);
            }
            _ => {}
        }
    }
}
