//! Simulated board for host tests: a virtual clock, scripted tank physics
//! and a full actuator/tone recorder.
//!
//! The clock only moves when the logic sleeps, so a complete wash program
//! runs in a few milliseconds of host time while every recorded timestamp
//! matches what a real board would have seen.

use std::vec::Vec;

use crate::board::{Actuator, Board};

const ACTUATOR_COUNT: usize = 6;

pub(crate) struct SimBoard {
    clock_ms: u32,
    /// Water reaches base level this long after the intake valve opens.
    /// `None` models a dead supply that never fills.
    fill_delay_ms: Option<u32>,
    /// Cumulative drain-pump running time that empties the tank. `None`
    /// models a blocked outlet.
    empty_after_drain_ms: Option<u32>,
    /// From this instant on the probe reads dry no matter what.
    level_lost_at: Option<u32>,
    /// Instants at which the probe misreads "dry" for a single sample.
    level_glitches: Vec<u32>,
    thermistor_base: u16,
    /// Timed thermistor changes, sorted by instant.
    thermistor_steps: Vec<(u32, u16)>,
    /// Start switch held during this half-open window.
    switch_window: Option<(u32, u32)>,

    tank_loaded: bool,
    valve_opened_at: Option<u32>,
    drain_run_ms: u32,
    outputs: [bool; ACTUATOR_COUNT],

    writes: Vec<(u32, Actuator, bool)>,
    tone_events: Vec<(u32, bool)>,
}

impl SimBoard {
    pub fn new() -> Self {
        Self {
            clock_ms: 0,
            fill_delay_ms: None,
            empty_after_drain_ms: Some(15_000),
            level_lost_at: None,
            level_glitches: Vec::new(),
            thermistor_base: 0,
            thermistor_steps: Vec::new(),
            switch_window: None,
            tank_loaded: false,
            valve_opened_at: None,
            drain_run_ms: 0,
            outputs: [false; ACTUATOR_COUNT],
            writes: Vec::new(),
            tone_events: Vec::new(),
        }
    }

    pub fn with_fill_delay(mut self, ms: u32) -> Self {
        self.fill_delay_ms = Some(ms);
        self
    }

    pub fn with_tank_loaded(mut self) -> Self {
        self.tank_loaded = true;
        self
    }

    pub fn with_blocked_drain(mut self) -> Self {
        self.empty_after_drain_ms = None;
        self
    }

    pub fn with_level_lost_at(mut self, at_ms: u32) -> Self {
        self.level_lost_at = Some(at_ms);
        self
    }

    pub fn with_thermistor(mut self, raw: u16) -> Self {
        self.thermistor_base = raw;
        self
    }

    pub fn with_thermistor_step(mut self, at_ms: u32, raw: u16) -> Self {
        self.thermistor_steps.push((at_ms, raw));
        self.thermistor_steps.sort_unstable_by_key(|&(at, _)| at);
        self
    }

    pub fn with_switch_held(mut self, from_ms: u32, to_ms: u32) -> Self {
        self.switch_window = Some((from_ms, to_ms));
        self
    }

    pub fn add_level_glitch(&mut self, at_ms: u32) {
        self.level_glitches.push(at_ms);
    }

    pub fn clock(&self) -> u32 {
        self.clock_ms
    }

    pub fn writes(&self) -> &[(u32, Actuator, bool)] {
        &self.writes
    }

    pub fn write_count(&self) -> usize {
        self.writes.len()
    }

    pub fn first_write(&self, actuator: Actuator, on: bool, from_ms: u32) -> Option<u32> {
        self.writes
            .iter()
            .find(|&&(at, a, o)| at >= from_ms && a == actuator && o == on)
            .map(|&(at, _, _)| at)
    }

    pub fn on_count(&self, actuator: Actuator) -> usize {
        self.writes
            .iter()
            .filter(|&&(_, a, on)| a == actuator && on)
            .count()
    }

    pub fn is_on(&self, actuator: Actuator) -> bool {
        self.outputs[actuator as usize]
    }

    /// Tone pulses as (start, length) pairs.
    pub fn tone_pulses(&self) -> Vec<(u32, u32)> {
        let mut pulses = Vec::new();
        let mut start = None;
        for &(at, on) in &self.tone_events {
            match (on, start) {
                (true, None) => start = Some(at),
                (false, Some(from)) => {
                    pulses.push((from, at - from));
                    start = None;
                }
                _ => {}
            }
        }
        pulses
    }

    /// Settle the tank model against the current clock and outputs. Runs
    /// after every write and every sleep, so fill and drain events land
    /// even when the logic is not reading the probe.
    fn refresh_tank(&mut self) {
        if !self.tank_loaded && self.outputs[Actuator::IntakeValve as usize] {
            if let (Some(opened), Some(delay)) = (self.valve_opened_at, self.fill_delay_ms) {
                if self.clock_ms.wrapping_sub(opened) >= delay {
                    self.tank_loaded = true;
                }
            }
        }
        if let Some(lost) = self.level_lost_at {
            if self.clock_ms >= lost {
                self.tank_loaded = false;
            }
        }
        if self.outputs[Actuator::DrainPump as usize] {
            if let Some(limit) = self.empty_after_drain_ms {
                if self.drain_run_ms >= limit {
                    self.tank_loaded = false;
                }
            }
        }
    }
}

impl Board for SimBoard {
    fn set_actuator(&mut self, actuator: Actuator, on: bool) {
        let index = actuator as usize;
        if actuator == Actuator::IntakeValve {
            if on && !self.outputs[index] {
                self.valve_opened_at = Some(self.clock_ms);
            } else if !on {
                self.valve_opened_at = None;
            }
        }
        if actuator == Actuator::DrainPump && on && !self.outputs[index] {
            self.drain_run_ms = 0;
        }
        self.outputs[index] = on;
        self.writes.push((self.clock_ms, actuator, on));
        self.refresh_tank();
    }

    fn water_absent(&mut self) -> bool {
        self.refresh_tank();
        if self.level_glitches.contains(&self.clock_ms) {
            return true;
        }
        !self.tank_loaded
    }

    fn switch_pressed(&mut self) -> bool {
        match self.switch_window {
            Some((from, to)) => self.clock_ms >= from && self.clock_ms < to,
            None => false,
        }
    }

    fn thermistor_raw(&mut self) -> u16 {
        let mut raw = self.thermistor_base;
        for &(at, value) in &self.thermistor_steps {
            if self.clock_ms >= at {
                raw = value;
            }
        }
        raw
    }

    fn tone_on(&mut self) {
        self.tone_events.push((self.clock_ms, true));
    }

    fn tone_off(&mut self) {
        self.tone_events.push((self.clock_ms, false));
    }

    fn now_ms(&self) -> u32 {
        self.clock_ms
    }

    fn sleep_ms(&mut self, ms: u32) {
        if self.outputs[Actuator::DrainPump as usize] {
            self.drain_run_ms += ms;
        }
        self.clock_ms = self.clock_ms.wrapping_add(ms);
        self.refresh_tank();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_tank_fills_only_while_the_valve_is_open() {
        let mut board = SimBoard::new().with_fill_delay(1_000);
        assert!(board.water_absent());
        board.sleep_ms(5_000);
        // No valve, no water.
        assert!(board.water_absent());

        board.set_actuator(Actuator::IntakeValve, true);
        board.sleep_ms(999);
        assert!(board.water_absent());
        board.sleep_ms(1);
        assert!(!board.water_absent());
    }

    #[test]
    fn the_drain_pump_needs_its_full_running_time() {
        let mut board = SimBoard::new().with_tank_loaded();
        board.set_actuator(Actuator::DrainPump, true);
        board.sleep_ms(14_999);
        assert!(!board.water_absent());
        board.sleep_ms(1);
        assert!(board.water_absent());
    }

    #[test]
    fn a_fresh_drain_engage_restarts_the_running_count() {
        let mut board = SimBoard::new().with_tank_loaded();
        board.set_actuator(Actuator::DrainPump, true);
        board.sleep_ms(10_000);
        board.set_actuator(Actuator::DrainPump, false);
        board.sleep_ms(60_000);
        assert!(!board.water_absent());
        // A fresh engage starts the count over.
        board.set_actuator(Actuator::DrainPump, true);
        board.sleep_ms(14_999);
        assert!(!board.water_absent());
        board.sleep_ms(1);
        assert!(board.water_absent());
    }

    #[test]
    fn tone_pulses_pair_up_starts_and_stops() {
        let mut board = SimBoard::new();
        board.tone_on();
        board.sleep_ms(150);
        board.tone_off();
        board.sleep_ms(50);
        board.tone_on();
        board.sleep_ms(80);
        board.tone_off();
        assert_eq!(board.tone_pulses(), [(0, 150), (200, 80)]);
    }

    #[test]
    fn thermistor_steps_apply_in_order() {
        let mut board = SimBoard::new()
            .with_thermistor(500)
            .with_thermistor_step(2_000, 700)
            .with_thermistor_step(1_000, 600);
        assert_eq!(board.thermistor_raw(), 500);
        board.sleep_ms(1_000);
        assert_eq!(board.thermistor_raw(), 600);
        board.sleep_ms(1_000);
        assert_eq!(board.thermistor_raw(), 700);
    }
}
