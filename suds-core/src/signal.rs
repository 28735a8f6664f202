//! Audible signaling: heartbeat beeps, status announcements, fault alarms.
//!
//! Two multi-beep encodings share the one tone output. An announcement
//! opens with two long beeps, an alarm with ten rapid ones; the prefixes
//! differ in both count and cadence so an operator can tell them apart
//! before the code beeps even start.

use crate::board::Board;
use crate::machine::Washer;
use crate::state::{Fault, Notice};

/// Default beep length (ms).
pub(crate) const BEEP_ON_MS: u32 = 150;
/// Default silence after each beep (ms).
pub(crate) const BEEP_GAP_MS: u32 = 50;

/// Announcement prefix: two long beeps.
const NOTICE_PREFIX_COUNT: u8 = 2;
const NOTICE_PREFIX_ON_MS: u32 = 350;
const NOTICE_PREFIX_GAP_MS: u32 = 220;

/// Alarm prefix: ten rapid beeps, then a breath before the code.
const ALARM_PREFIX_COUNT: u8 = 10;
const ALARM_PREFIX_ON_MS: u32 = 50;
const ALARM_PREFIX_GAP_MS: u32 = 50;
const ALARM_SEPARATOR_MS: u32 = 100;
/// Alarm code beeps: long and widely spaced, easy to count.
const ALARM_CODE_ON_MS: u32 = 500;
const ALARM_CODE_GAP_MS: u32 = 300;

impl<B: Board> Washer<B> {
    /// Emit `count` tones of `on_ms` each, with `gap_ms` of silence after
    /// every one.
    pub fn tones(&mut self, count: u8, on_ms: u32, gap_ms: u32) {
        for _ in 0..count {
            self.board.tone_on();
            self.board.sleep_ms(on_ms);
            self.board.tone_off();
            self.board.sleep_ms(gap_ms);
        }
    }

    /// `count` beeps at the default cadence.
    pub fn beep(&mut self, count: u8) {
        self.tones(count, BEEP_ON_MS, BEEP_GAP_MS);
    }

    /// Status announcement: the long two-beep prefix, then the message
    /// code at the default cadence.
    pub fn announce(&mut self, notice: Notice) {
        self.tones(NOTICE_PREFIX_COUNT, NOTICE_PREFIX_ON_MS, NOTICE_PREFIX_GAP_MS);
        self.beep(notice.code());
    }

    /// Fault alarm: the rapid ten-beep prefix, a short pause, then the
    /// error code as long, widely spaced beeps.
    pub fn alarm(&mut self, fault: Fault) {
        self.tones(ALARM_PREFIX_COUNT, ALARM_PREFIX_ON_MS, ALARM_PREFIX_GAP_MS);
        self.sleep(ALARM_SEPARATOR_MS);
        self.tones(fault.code(), ALARM_CODE_ON_MS, ALARM_CODE_GAP_MS);
    }
}
