// Copyright (c) 2026 bad-antics
// Licensed under the MIT License. See LICENSE file in the project root.
// https://github.com/bad-antics/smartguard-rs

//! Headless console - line commands mapped onto controller operations

use std::fmt::Write as _;
use std::str::FromStr;

use crate::core::SecurityController;
use crate::sensors::{Sensor, UnknownSensor};

/// One console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Arm,
    Disarm,
    Lock,
    Unlock,
    Lights(bool),
    Camera,
    Trigger(Sensor),
    Clear,
    /// `status`, or `status --json` for the serialized snapshot
    Status { json: bool },
    Log(Option<usize>),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error(transparent)]
    Sensor(#[from] UnknownSensor),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "" => Err(ParseCommandError::Empty),
            "arm" => Ok(Command::Arm),
            "disarm" => Ok(Command::Disarm),
            "lock" => Ok(Command::Lock),
            "unlock" => Ok(Command::Unlock),
            "lights" => match rest.to_lowercase().as_str() {
                "on" => Ok(Command::Lights(true)),
                "off" => Ok(Command::Lights(false)),
                _ => Err(ParseCommandError::Usage("lights on|off")),
            },
            "camera" => Ok(Command::Camera),
            "trigger" if rest.is_empty() => Err(ParseCommandError::Usage("trigger <sensor>")),
            "trigger" => Ok(Command::Trigger(rest.parse()?)),
            "clear" => Ok(Command::Clear),
            "status" => match rest {
                "" => Ok(Command::Status { json: false }),
                "--json" | "json" => Ok(Command::Status { json: true }),
                _ => Err(ParseCommandError::Usage("status [--json]")),
            },
            "log" if rest.is_empty() => Ok(Command::Log(None)),
            "log" => rest
                .parse()
                .map(|n| Command::Log(Some(n)))
                .map_err(|_| ParseCommandError::Usage("log [count]")),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(ParseCommandError::Unknown(other.to_string())),
        }
    }
}

pub const HELP: &str = "\
commands:
  arm | disarm          arm or disarm the system
  lock | unlock         lock or unlock all doors
  lights on|off         switch all lights
  camera                toggle the security camera
  trigger <sensor>      trip a sensor (e.g. `trigger front door`)
  clear                 reset all sensor flags
  status [--json]       show system state
  log [count]           show the activity log
  quit                  exit";

/// Applies `command` and returns the text to print.
pub fn execute(controller: &mut SecurityController, command: &Command) -> String {
    match command {
        Command::Arm => controller.arm(),
        Command::Disarm => controller.disarm(),
        Command::Lock => controller.lock_doors(),
        Command::Unlock => controller.unlock_doors(),
        Command::Lights(on) => controller.set_lights(*on),
        Command::Camera => controller.toggle_camera(),
        Command::Trigger(sensor) => {
            controller.trigger_sensor(*sensor);
        }
        Command::Clear => controller.clear_sensors(),
        Command::Status { json: false } => return status_text(controller),
        Command::Status { json: true } => {
            return serde_json::to_string_pretty(&controller.snapshot())
                .unwrap_or_else(|e| format!("failed to serialize status: {}", e));
        }
        Command::Log(limit) => {
            let entries = match limit {
                Some(n) => controller.get_log(*n),
                None => controller.recent_log(),
            };
            return entries
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("\n");
        }
        Command::Help => return HELP.to_string(),
        Command::Quit => return String::new(),
    }
    format!("System Status: {}", controller.arm_state())
}

fn status_text(controller: &SecurityController) -> String {
    let state = controller.state();
    let on_off = |b: bool, yes: &'static str, no: &'static str| if b { yes } else { no };

    let mut out = String::new();
    let _ = writeln!(out, "System Status: {}", controller.arm_state());
    let _ = writeln!(out, "Doors:  {}", on_off(state.doors_locked, "LOCKED", "UNLOCKED"));
    let _ = writeln!(out, "Lights: {}", on_off(state.lights_on, "ON", "OFF"));
    let _ = writeln!(out, "Camera: {}", on_off(state.camera_active, "ACTIVE", "INACTIVE"));
    for (sensor, triggered) in controller.sensors().iter() {
        let _ = writeln!(
            out,
            "  {:<20} {}",
            sensor.name(),
            on_off(triggered, "Triggered", "Secure")
        );
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::ArmState;
    use crate::sensors::ScriptedSource;

    #[test]
    fn test_parse_commands() {
        assert_eq!("arm".parse::<Command>(), Ok(Command::Arm));
        assert_eq!("  DISARM ".parse::<Command>(), Ok(Command::Disarm));
        assert_eq!("lights on".parse::<Command>(), Ok(Command::Lights(true)));
        assert_eq!("lights OFF".parse::<Command>(), Ok(Command::Lights(false)));
        assert_eq!(
            "trigger living room window".parse::<Command>(),
            Ok(Command::Trigger(Sensor::LivingRoomWindow))
        );
        assert_eq!("status".parse::<Command>(), Ok(Command::Status { json: false }));
        assert_eq!("status --json".parse::<Command>(), Ok(Command::Status { json: true }));
        assert_eq!("log".parse::<Command>(), Ok(Command::Log(None)));
        assert_eq!("log 10".parse::<Command>(), Ok(Command::Log(Some(10))));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Command>(), Err(ParseCommandError::Empty));
        assert!(matches!("dance".parse::<Command>(), Err(ParseCommandError::Unknown(_))));
        assert!(matches!("lights dim".parse::<Command>(), Err(ParseCommandError::Usage(_))));
        assert!(matches!("trigger".parse::<Command>(), Err(ParseCommandError::Usage(_))));
        assert!(matches!("trigger garage".parse::<Command>(), Err(ParseCommandError::Sensor(_))));
        assert!(matches!("log many".parse::<Command>(), Err(ParseCommandError::Usage(_))));
        assert!(matches!("status yaml".parse::<Command>(), Err(ParseCommandError::Usage(_))));
    }

    #[test]
    fn test_execute_drives_controller() {
        let mut c = SecurityController::with_source(&Config::default(), Box::new(ScriptedSource::new()));

        assert_eq!(execute(&mut c, &Command::Arm), "System Status: ARMED");
        assert_eq!(
            execute(&mut c, &Command::Trigger(Sensor::FrontDoor)),
            "System Status: ALARM"
        );
        assert_eq!(c.arm_state(), ArmState::Alarm);

        let status = execute(&mut c, &Command::Status { json: false });
        assert!(status.starts_with("System Status: ALARM"));
        assert!(status.contains("Front Door"));
        assert!(status.contains("Triggered"));

        let log = execute(&mut c, &Command::Log(Some(1)));
        assert!(log.ends_with("ALARM TRIGGERED: Front Door sensor triggered"));
        assert_eq!(log.lines().count(), 1);
    }

    #[test]
    fn test_status_json_reports_snapshot() {
        let mut c = SecurityController::with_source(&Config::default(), Box::new(ScriptedSource::new()));
        c.arm();
        c.unlock_doors();

        let out = execute(&mut c, &Command::Status { json: true });
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["arm_state"], "Alarm");
        assert_eq!(json["state"]["doors_locked"], false);
        assert_eq!(json["log_entries"], 3);
        assert!(json["triggered_sensors"].as_array().unwrap().is_empty());
    }
}
