//! Timing/safety configuration and the built-in wash programs.
//!
//! Every duration the control flow uses lives here, with the unit in the
//! field name and the production value in `Default`. Tests run against the
//! same defaults; the virtual clock makes the long timeouts free.

/// All timing and sampling parameters. Milliseconds unless noted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WasherConfig {
    /// Consecutive agreeing samples before a level reading is trusted.
    /// Rejects probe glitches and pump turbulence.
    pub debounce_samples: u8,
    /// Pause between debounce samples (ms).
    pub debounce_sample_interval_ms: u32,
    /// Level poll interval while filling to base level (ms).
    pub level_poll_ms: u32,
    /// Authoritative fill failure bound (ms). A lone negative level
    /// reading never fails a load; this timeout does.
    pub load_timeout_ms: u32,
    /// Fixed drain pump hold (ms). Not adaptive; the post-condition check
    /// catches a blocked outlet.
    pub drain_hold_ms: u32,
    /// Heating window per stage (ms). Water not at temperature by then is
    /// a fatal fault.
    pub heater_timeout_ms: u32,
    /// Inter-step settle for the shutdown that opens a load (ms).
    pub load_reset_settle_ms: u32,
    /// Inter-step settle for the shutdown that opens a drain (ms). Long
    /// enough for the stopping main pump to release the level probe.
    pub drain_reset_settle_ms: u32,
    /// Inter-step settle for the crash-path shutdown (ms).
    pub crash_reset_settle_ms: u32,
    /// Settle after closing the intake valve (ms).
    pub valve_close_settle_ms: u32,
    /// Soap dispenser pulse width (ms).
    pub soap_pulse_ms: u32,
    /// Settle after the soap pulse (ms).
    pub soap_settle_ms: u32,
    /// Settle after engaging the heater (ms).
    pub heater_settle_ms: u32,
    /// Half of the indicator blink period during agitation (ms).
    pub agitate_half_period_ms: u32,
    /// Heartbeat pause in the valve-only doubling phase of a load (ms).
    pub double_fill_pause_ms: u32,
    /// Heartbeat pause in the blind pumped phase of a load (ms).
    pub pumped_fill_pause_ms: u32,
    /// Heartbeat pause in the level-watched top-up phase of a load (ms).
    pub top_up_pause_ms: u32,
    /// Start switch poll interval while idle (ms).
    pub switch_poll_ms: u32,
    /// Hold window separating the two programs after a press (ms).
    pub hold_window_ms: u32,
    /// Pause between alarm repetitions in the crashed state (ms).
    pub alarm_beacon_pause_ms: u32,
    /// Pause between beep bursts in the done state (ms).
    pub done_beacon_pause_ms: u32,
}

impl Default for WasherConfig {
    fn default() -> Self {
        Self {
            debounce_samples: 10,
            debounce_sample_interval_ms: 1,
            level_poll_ms: 10,
            load_timeout_ms: 200_000,
            drain_hold_ms: 22_000,
            heater_timeout_ms: 600_000,
            load_reset_settle_ms: 200,
            drain_reset_settle_ms: 1_000,
            crash_reset_settle_ms: 500,
            valve_close_settle_ms: 1_000,
            soap_pulse_ms: 200,
            soap_settle_ms: 1_000,
            heater_settle_ms: 1_000,
            agitate_half_period_ms: 1_000,
            double_fill_pause_ms: 1_000,
            pumped_fill_pause_ms: 800,
            top_up_pause_ms: 400,
            switch_poll_ms: 100,
            hold_window_ms: 2_000,
            alarm_beacon_pause_ms: 2_000,
            done_beacon_pause_ms: 100,
        }
    }
}

/// Parameters for one wash stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Stage {
    /// Minutes of at-temperature agitation.
    pub wash_minutes: u32,
    /// Pulse the soap dispenser once the tank is loaded.
    pub soap: bool,
    /// Raw thermistor threshold gating the heater; `None` washes cold.
    pub temp_threshold: Option<u16>,
}

/// Raw thermistor threshold for the heated stages. A calibration value on
/// the probe's own scale, not a unit of temperature.
pub const WARM_WASH_THRESHOLD: u16 = 950;

const FULL_WASH_STAGES: [Stage; 4] = [
    // Pre-wash.
    Stage {
        wash_minutes: 3,
        soap: false,
        temp_threshold: Some(WARM_WASH_THRESHOLD),
    },
    // Main wash, the only stage that takes soap.
    Stage {
        wash_minutes: 15,
        soap: true,
        temp_threshold: Some(WARM_WASH_THRESHOLD),
    },
    // Warm rinse.
    Stage {
        wash_minutes: 3,
        soap: false,
        temp_threshold: Some(WARM_WASH_THRESHOLD),
    },
    // Cold rinse.
    Stage {
        wash_minutes: 3,
        soap: false,
        temp_threshold: None,
    },
];

const RINSE_STAGES: [Stage; 1] = [Stage {
    wash_minutes: 5,
    soap: false,
    temp_threshold: None,
}];

/// The two selectable programs. Stage tables are fixed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Program {
    /// Soaped, heated four-stage wash.
    FullWash,
    /// Single cold rinse stage.
    Rinse,
}

impl Program {
    /// The stages this program runs, in order.
    pub fn stages(self) -> &'static [Stage] {
        match self {
            Program::FullWash => &FULL_WASH_STAGES,
            Program::Rinse => &RINSE_STAGES,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Program::FullWash => "full wash",
            Program::Rinse => "rinse",
        }
    }
}
