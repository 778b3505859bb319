//! Core module - the security controller and what drives it

mod activity;
mod controller;
mod event_bus;
mod scheduler;

pub use activity::{ActivityLog, ActivityLogEntry};
pub use controller::{ControllerSnapshot, SecurityController};
pub use event_bus::{ControllerEvent, EventBus, EventReceiver};
pub use scheduler::{Clock, ManualClock, SystemClock, TickScheduler};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Panel state flags.
///
/// `alarm_triggered` is only ever true while `armed` is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemState {
    pub armed: bool,
    pub alarm_triggered: bool,
    pub doors_locked: bool,
    pub lights_on: bool,
    pub camera_active: bool,
}

impl Default for SystemState {
    fn default() -> Self {
        Self {
            armed: false,
            alarm_triggered: false,
            doors_locked: true,
            lights_on: false,
            camera_active: false,
        }
    }
}

impl SystemState {
    pub fn arm_state(&self) -> ArmState {
        match (self.armed, self.alarm_triggered) {
            (false, _) => ArmState::Disarmed,
            (true, false) => ArmState::Armed,
            (true, true) => ArmState::Alarm,
        }
    }
}

/// System-level state machine position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArmState {
    Disarmed,
    Armed,
    /// Armed with an unresolved alarm; only `disarm` leaves it
    Alarm,
}

impl fmt::Display for ArmState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ArmState::Disarmed => "DISARMED",
            ArmState::Armed => "ARMED",
            ArmState::Alarm => "ALARM",
        })
    }
}
