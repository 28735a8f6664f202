//! Fixed-duration draining with a post-condition check.

use crate::board::{Actuator, Board};
use crate::machine::Washer;
use crate::state::{Fault, Notice};

impl<B: Board> Washer<B> {
    /// Empty the tank: full shutdown with the long drain settle (the main
    /// pump must release the level probe before anything trusts it again),
    /// then a fixed drain hold, then verify the probe agrees the water is
    /// gone.
    ///
    /// The hold is not adaptive. A blocked outlet, a stuck valve or a
    /// lying probe all surface the same way: water still at base level
    /// after the hold, which is `DrainBlocked`.
    pub fn drain(&mut self) -> Result<(), Fault> {
        let settle = self.cfg.drain_reset_settle_ms;
        self.reset(settle);
        self.set(Actuator::DrainPump, true);
        self.announce(Notice::Draining);
        let hold = self.cfg.drain_hold_ms;
        self.sleep(hold);
        self.set(Actuator::DrainPump, false);
        if self.is_loaded() {
            return Err(Fault::DrainBlocked);
        }
        Ok(())
    }
}
