//! Suds - Washing Machine Controller Firmware
//!
//! Main firmware binary for RP2040-based washer controllers.
//!
//! One sequential control flow owns the whole machine: power-on checks,
//! press-or-hold program selection, the selected wash program, then the
//! terminal beacon loop (done chirps or the fault alarm) until power-off.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use {defmt_rtt as _, panic_probe as _};

use suds_core::{Phase, Washer, WasherConfig};

use crate::board::PicoBoard;

mod board;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Suds firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Relay outputs idle high: electrically off on active-low modules.
    let board = PicoBoard {
        heater: Output::new(p.PIN_2, Level::High),
        intake_valve: Output::new(p.PIN_3, Level::High),
        drain_pump: Output::new(p.PIN_4, Level::High),
        soap_dispenser: Output::new(p.PIN_5, Level::High),
        main_pump: Output::new(p.PIN_6, Level::High),
        indicator_lamp: Output::new(p.PIN_7, Level::High),
        buzzer: Output::new(p.PIN_8, Level::Low),
        level_probe: Input::new(p.PIN_14, Pull::None),
        start_switch: Input::new(p.PIN_15, Pull::Up),
        adc: Adc::new_blocking(p.ADC, AdcConfig::default()),
        thermistor: Channel::new_pin(p.PIN_26, Pull::None),
    };
    info!("Peripherals initialized");

    let mut washer = Washer::new(board, WasherConfig::default());

    if let Phase::Crashed(fault) = washer.power_on() {
        warn!("power-on check failed: {}", fault);
    } else {
        info!("ready, waiting for the start switch");
        let program = washer.select_program();
        info!("selected program: {}", program.label());
        match washer.run_program(program) {
            Phase::Crashed(fault) => warn!("program aborted: {}", fault),
            _ => info!("program finished"),
        }
    }

    // Terminal state: keep it audible until someone pulls the plug.
    loop {
        washer.beacon();
    }
}
