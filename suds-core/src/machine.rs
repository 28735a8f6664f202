//! The machine facade: one owned board, one config, one lifecycle.

use crate::board::{Actuator, Board};
use crate::config::{Program, WasherConfig};
use crate::signal::BEEP_GAP_MS;
use crate::state::{Fault, Notice, Phase};

/// Press acknowledgement beeps when the start switch closes.
const SELECT_ACK_BEEPS: u8 = 3;
/// Confirmation burst when the hold gesture selects the rinse program.
const RINSE_CONFIRM_BEEPS: u8 = 5;
const RINSE_CONFIRM_ON_MS: u32 = 80;

/// The whole appliance. Owns the board exclusively; every control step is
/// a method here or in a sibling impl block (sensing, signaling, fail-safe,
/// loading, draining, stage execution).
pub struct Washer<B: Board> {
    pub(crate) board: B,
    pub(crate) cfg: WasherConfig,
    pub(crate) phase: Phase,
}

impl<B: Board> Washer<B> {
    pub fn new(board: B, cfg: WasherConfig) -> Self {
        Self {
            board,
            cfg,
            phase: Phase::Boot,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    pub fn config(&self) -> &WasherConfig {
        &self.cfg
    }

    pub(crate) fn set(&mut self, actuator: Actuator, on: bool) {
        self.board.set_actuator(actuator, on);
    }

    pub(crate) fn sleep(&mut self, ms: u32) {
        self.board.sleep_ms(ms);
    }

    pub(crate) fn now(&self) -> u32 {
        self.board.now_ms()
    }

    /// Elapsed ms since `start`, tolerant of counter wrap.
    pub(crate) fn since(&self, start: u32) -> u32 {
        self.board.now_ms().wrapping_sub(start)
    }

    /// Power-on sequence: force every output off, refuse a stuck start
    /// switch, drain any water left over from a previous life, then greet
    /// and go idle. A stuck switch or a failed recovery drain crashes.
    pub fn power_on(&mut self) -> Phase {
        match self.startup_checks() {
            Ok(()) => self.phase = Phase::Idle,
            Err(fault) => self.crash(fault),
        }
        self.phase
    }

    fn startup_checks(&mut self) -> Result<(), Fault> {
        self.reset(0);
        if self.switch_pressed() {
            return Err(Fault::SwitchStuck);
        }
        if self.is_loaded() {
            // Leftover water is recoverable. Sound the alarm so nobody
            // misses it, then try to get rid of it.
            self.alarm(Fault::DrainBlocked);
            self.drain()?;
        }
        self.announce(Notice::Welcome);
        Ok(())
    }

    /// Block until the start switch closes, then separate a short press
    /// (full wash) from a held press (rinse) with one fixed hold window.
    pub fn select_program(&mut self) -> Program {
        while !self.switch_pressed() {
            let poll = self.cfg.switch_poll_ms;
            self.sleep(poll);
        }
        self.beep(SELECT_ACK_BEEPS);
        let window = self.cfg.hold_window_ms;
        self.sleep(window);
        if self.switch_pressed() {
            self.tones(RINSE_CONFIRM_BEEPS, RINSE_CONFIRM_ON_MS, BEEP_GAP_MS);
            Program::Rinse
        } else {
            Program::FullWash
        }
    }

    /// Run every stage of `program` to completion. Any fault lands in the
    /// crashed terminal phase; success leaves the lamp on in `Done`.
    pub fn run_program(&mut self, program: Program) -> Phase {
        self.phase = Phase::Running;
        match self.run_stages(program) {
            Ok(()) => {
                self.set(Actuator::IndicatorLamp, true);
                self.phase = Phase::Done;
            }
            Err(fault) => self.crash(fault),
        }
        self.phase
    }

    fn run_stages(&mut self, program: Program) -> Result<(), Fault> {
        for stage in program.stages() {
            self.run_stage(*stage)?;
        }
        Ok(())
    }
}
