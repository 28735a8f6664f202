//! One wash stage: load, optional soap, the heater gate, timed agitation,
//! drain.

use crate::board::{Actuator, Board};
use crate::config::Stage;
use crate::machine::Washer;
use crate::state::Fault;

const MS_PER_MINUTE: u32 = 60_000;

impl<B: Board> Washer<B> {
    /// Run one stage to completion. The wash timer only counts time spent
    /// at temperature: while the water reads cold the timer restarts, the
    /// heater keeps working and a one-beep heartbeat marks every lap. A
    /// stage whose water never warms up within the heating window fails
    /// with `HeatTimeout`; the tank always drains through [`Washer::drain`]
    /// on success.
    pub fn run_stage(&mut self, stage: Stage) -> Result<(), Fault> {
        self.load()?;

        if stage.soap {
            self.set(Actuator::SoapDispenser, true);
            let pulse = self.cfg.soap_pulse_ms;
            self.sleep(pulse);
            self.set(Actuator::SoapDispenser, false);
            let settle = self.cfg.soap_settle_ms;
            self.sleep(settle);
        }

        // The level is stable and the pump is circulating: a thermistor
        // read is meaningful now. Engage the heater only when the stage
        // wants heat and the water is not already there.
        let mut reading = self.board.thermistor_raw();
        if let Some(threshold) = stage.temp_threshold {
            if reading < threshold {
                self.set(Actuator::Heater, true);
                let settle = self.cfg.heater_settle_ms;
                self.sleep(settle);
            }
        }

        let stage_start = self.now();
        let mut wash_start = self.now();
        let wash_ms = stage.wash_minutes * MS_PER_MINUTE;
        while self.since(wash_start) < wash_ms {
            match stage.temp_threshold {
                // Not at temperature yet: the wash timer does not run.
                Some(threshold) if reading <= threshold => {
                    reading = self.board.thermistor_raw();
                    wash_start = self.now();
                    self.beep(1);
                    if self.since(stage_start) > self.cfg.heater_timeout_ms {
                        return Err(Fault::HeatTimeout);
                    }
                }
                // At temperature, or a cold stage: the heater stays off
                // and is never re-engaged within the stage.
                _ => self.set(Actuator::Heater, false),
            }
            let half = self.cfg.agitate_half_period_ms;
            self.sleep(half);
            self.set(Actuator::IndicatorLamp, true);
            self.sleep(half);
            self.set(Actuator::IndicatorLamp, false);
        }

        self.drain()
    }
}
