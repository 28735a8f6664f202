//! Lifecycle phases and the audible fault/notice code tables.

/// Fatal conditions. The discriminant doubles as the audible error code:
/// the count of long beeps at the end of the alarm pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fault {
    /// Start switch already closed at power-up.
    SwitchStuck = 1,
    /// Water still at base level after a full drain hold.
    DrainBlocked = 2,
    /// Base level not reached within the load timeout.
    LoadTimeout = 3,
    /// Level would not stabilise after the extended fill phases.
    TopUpFailed = 4,
    /// Water not at temperature within the heating window.
    HeatTimeout = 5,
}

impl Fault {
    /// Beep count announced by the alarm pattern.
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Status announcements. The discriminant is the audible message code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Notice {
    /// Power-on checks passed, waiting for the start switch.
    Welcome = 2,
    /// Water loader starting.
    Loading = 3,
    /// Drain hold starting.
    Draining = 4,
}

impl Notice {
    /// Beep count announced after the notice prefix.
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Where the machine is in its life.
///
/// `Done` and `Crashed` are terminal: actuators never move again and only
/// a power cycle leaves them. The beacon keeps them audible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Power applied, checks not yet run.
    Boot,
    /// Checks passed, waiting for a program selection.
    Idle,
    /// A wash program is executing.
    Running,
    /// Program finished; lamp on, done beacon.
    Done,
    /// Fatal fault; everything off, alarm beacon.
    Crashed(Fault),
}

impl Phase {
    /// True for the two states only a power cycle leaves.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Done | Phase::Crashed(_))
    }
}
