//! Real-board implementation of the hardware seam for a Raspberry Pi Pico.
//!
//! Relay channels on these boards switch on at logic low, so every actuator
//! write is inverted here; the control logic only ever sees logical on/off.

use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_rp::gpio::{Input, Output};
use embassy_time::{block_for, Duration, Instant};

use suds_core::{Actuator, Board};

/// Wash programs carry thresholds on the 10-bit scale the boards were
/// calibrated against; the RP2040 ADC is 12-bit.
const ADC_SHIFT_TO_10BIT: u16 = 2;

pub struct PicoBoard {
    pub heater: Output<'static>,
    pub intake_valve: Output<'static>,
    pub drain_pump: Output<'static>,
    pub soap_dispenser: Output<'static>,
    pub indicator_lamp: Output<'static>,
    pub main_pump: Output<'static>,
    pub buzzer: Output<'static>,
    pub level_probe: Input<'static>,
    pub start_switch: Input<'static>,
    pub adc: Adc<'static, Blocking>,
    pub thermistor: Channel<'static>,
}

impl PicoBoard {
    fn relay_pin(&mut self, actuator: Actuator) -> &mut Output<'static> {
        match actuator {
            Actuator::Heater => &mut self.heater,
            Actuator::IntakeValve => &mut self.intake_valve,
            Actuator::DrainPump => &mut self.drain_pump,
            Actuator::SoapDispenser => &mut self.soap_dispenser,
            Actuator::IndicatorLamp => &mut self.indicator_lamp,
            Actuator::MainPump => &mut self.main_pump,
        }
    }
}

impl Board for PicoBoard {
    fn set_actuator(&mut self, actuator: Actuator, on: bool) {
        let pin = self.relay_pin(actuator);
        // Active-low relay modules: on means drive low.
        if on {
            pin.set_low();
        } else {
            pin.set_high();
        }
    }

    fn water_absent(&mut self) -> bool {
        // The probe asserts high while the tank sits below base level.
        self.level_probe.is_high()
    }

    fn switch_pressed(&mut self) -> bool {
        // Pull-up input, the button shorts to ground.
        self.start_switch.is_low()
    }

    fn thermistor_raw(&mut self) -> u16 {
        // A failed conversion reads as raw 0; the heating window bounds
        // how long a dead sensor can keep the heater engaged.
        match self.adc.blocking_read(&mut self.thermistor) {
            Ok(raw) => raw >> ADC_SHIFT_TO_10BIT,
            Err(_) => 0,
        }
    }

    fn tone_on(&mut self) {
        self.buzzer.set_high();
    }

    fn tone_off(&mut self) {
        self.buzzer.set_low();
    }

    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }

    fn sleep_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(ms as u64));
    }
}
