//! Debounced level sensing and the raw switch read.

use crate::board::Board;
use crate::machine::Washer;

impl<B: Board> Washer<B> {
    /// Debounced tank level. Reports water only after `debounce_samples`
    /// consecutive agreeing reads, one per `debounce_sample_interval_ms`;
    /// the first "no water" sample returns false early.
    ///
    /// Circulation turbulence produces sporadic false negatives, so one
    /// false result is never authoritative on its own. Anything that fails
    /// on "no water" pairs this with a timeout or a re-sample.
    pub fn is_loaded(&mut self) -> bool {
        for _ in 0..self.cfg.debounce_samples {
            if self.board.water_absent() {
                return false;
            }
            let interval = self.cfg.debounce_sample_interval_ms;
            self.sleep(interval);
        }
        true
    }

    /// Raw start switch state, true while held. No debounce: only coarse
    /// press/hold gestures are built on it.
    pub fn switch_pressed(&mut self) -> bool {
        self.board.switch_pressed()
    }
}
