// Copyright (c) 2026 bad-antics
// Licensed under the MIT License. See LICENSE file in the project root.
// https://github.com/bad-antics/smartguard-rs

//! Security controller - owns the panel state and applies every operation

use serde::Serialize;
use tracing::{debug, info, trace, warn};

use super::{ActivityLog, ActivityLogEntry, ArmState, EventBus, EventReceiver, SystemState};
use crate::config::Config;
use crate::sensors::{source_from_seed, Sensor, SensorRegistry, TriggerSource};

/// Read-only view of the controller for status output
#[derive(Debug, Clone, Serialize)]
pub struct ControllerSnapshot {
    pub arm_state: ArmState,
    pub state: SystemState,
    pub triggered_sensors: Vec<Sensor>,
    pub log_entries: usize,
}

/// The home security panel.
///
/// Every operation is synchronous and total. Callers that drive it from a
/// timer must run the tick on the same thread (or behind the same lock) as
/// user commands.
pub struct SecurityController {
    state: SystemState,
    sensors: SensorRegistry,
    log: ActivityLog,
    events: EventBus,
    source: Box<dyn TriggerSource + Send>,
    trigger_probability: f64,
    display_limit: usize,
    clear_sensors_on_disarm: bool,
}

impl SecurityController {
    /// Controller with the RNG described by `config.simulator.seed`
    pub fn new(config: &Config) -> Self {
        Self::with_source(config, source_from_seed(config.simulator.seed))
    }

    pub fn with_source(config: &Config, source: Box<dyn TriggerSource + Send>) -> Self {
        let state = SystemState {
            doors_locked: config.controller.doors_locked_at_start,
            ..SystemState::default()
        };
        Self {
            state,
            sensors: SensorRegistry::new(),
            log: ActivityLog::new(),
            events: EventBus::new(),
            source,
            trigger_probability: config.simulator.trigger_probability,
            display_limit: config.log.display_limit,
            clear_sensors_on_disarm: config.controller.clear_sensors_on_disarm,
        }
    }

    pub fn arm(&mut self) {
        self.state.armed = true;
        info!("System armed");
        self.log_activity("System armed");

        if self.sensors.any_triggered() {
            let names: Vec<&str> = self.sensors.triggered().map(|s| s.name()).collect();
            self.trigger_alarm(&format!("Sensor triggered while arming: {}", names.join(", ")));
        }
    }

    pub fn disarm(&mut self) {
        self.state.armed = false;
        self.state.alarm_triggered = false;
        if self.clear_sensors_on_disarm {
            self.sensors.clear_all();
        }
        info!("System disarmed");
        self.log_activity("System disarmed");
    }

    pub fn lock_doors(&mut self) {
        self.state.doors_locked = true;
        debug!("Doors locked");
        self.log_activity("All doors locked");
    }

    pub fn unlock_doors(&mut self) {
        self.state.doors_locked = false;
        debug!("Doors unlocked");
        self.log_activity("All doors unlocked");

        if self.state.armed {
            self.trigger_alarm("Door unlocked while system armed");
        }
    }

    pub fn set_lights(&mut self, on: bool) {
        self.state.lights_on = on;
        debug!(on, "Lights switched");
        self.log_activity(if on {
            "All lights turned on"
        } else {
            "All lights turned off"
        });
    }

    pub fn toggle_camera(&mut self) {
        self.state.camera_active = !self.state.camera_active;
        debug!(active = self.state.camera_active, "Camera toggled");
        self.log_activity(if self.state.camera_active {
            "Security camera activated"
        } else {
            "Security camera deactivated"
        });
    }

    /// Fires the alarm if armed; a pure no-op otherwise.
    ///
    /// The alarm stays up until [`disarm`](Self::disarm). Firing again while
    /// already alarmed logs and notifies again.
    pub fn trigger_alarm(&mut self, reason: &str) {
        if !self.state.armed {
            return;
        }

        self.state.alarm_triggered = true;
        warn!(reason, "ALARM TRIGGERED");
        self.log_activity(format!("ALARM TRIGGERED: {}", reason));
        self.events.publish_alarm(reason);
    }

    /// Marks a sensor as tripped and raises the alarm when armed.
    /// Returns whether the flag changed.
    pub fn trigger_sensor(&mut self, sensor: Sensor) -> bool {
        let changed = self.sensors.set(sensor, true);
        debug!(sensor = sensor.name(), "Sensor tripped");
        self.trigger_alarm(&format!("{} sensor triggered", sensor.name()));
        changed
    }

    pub fn clear_sensor(&mut self, sensor: Sensor) -> bool {
        self.sensors.set(sensor, false)
    }

    pub fn clear_sensors(&mut self) {
        self.sensors.clear_all();
    }

    /// One simulator step. While armed and quiet, a sensor trips with the
    /// configured probability. Returns the sensor that tripped, if any.
    pub fn simulate_tick(&mut self) -> Option<Sensor> {
        if !self.state.armed || self.state.alarm_triggered {
            return None;
        }

        let fired = self.source.trial(self.trigger_probability);
        trace!(fired, p = self.trigger_probability, "Simulator draw");
        if !fired {
            return None;
        }

        let sensor = Sensor::ALL[self.source.pick(Sensor::ALL.len())];
        self.sensors.set(sensor, true);
        self.trigger_alarm(&format!("{} sensor triggered", sensor.name()));
        Some(sensor)
    }

    /// The last `limit` log entries, oldest first
    pub fn get_log(&self, limit: usize) -> &[ActivityLogEntry] {
        self.log.recent(limit)
    }

    /// The entries the activity view shows
    pub fn recent_log(&self) -> &[ActivityLogEntry] {
        self.log.recent(self.display_limit)
    }

    pub fn subscribe(&mut self) -> EventReceiver {
        self.events.subscribe()
    }

    pub fn state(&self) -> &SystemState {
        &self.state
    }

    pub fn arm_state(&self) -> ArmState {
        self.state.arm_state()
    }

    pub fn sensors(&self) -> &SensorRegistry {
        &self.sensors
    }

    pub fn log(&self) -> &ActivityLog {
        &self.log
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            arm_state: self.arm_state(),
            state: self.state,
            triggered_sensors: self.sensors.triggered().collect(),
            log_entries: self.log.len(),
        }
    }

    fn log_activity(&mut self, message: impl Into<String>) {
        let entry = self.log.append(message);
        self.events.publish_log(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ControllerEvent;
    use crate::sensors::ScriptedSource;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn controller(source: ScriptedSource) -> SecurityController {
        SecurityController::with_source(&Config::default(), Box::new(source))
    }

    fn messages(c: &SecurityController) -> Vec<String> {
        c.get_log(usize::MAX).iter().map(|e| e.message.clone()).collect()
    }

    #[test]
    fn test_initial_state() {
        let c = controller(ScriptedSource::new());
        assert_eq!(c.arm_state(), ArmState::Disarmed);
        assert!(c.state().doors_locked);
        assert!(!c.state().lights_on);
        assert!(!c.state().camera_active);
        assert!(c.log().is_empty());
    }

    #[test]
    fn test_arm_with_clear_sensors() {
        let mut c = controller(ScriptedSource::new());
        c.arm();
        assert_eq!(c.arm_state(), ArmState::Armed);
        assert!(!c.state().alarm_triggered);
        assert_eq!(messages(&c), vec!["System armed"]);
    }

    #[test]
    fn test_arm_with_tripped_sensor_alarms_immediately() {
        let mut c = controller(ScriptedSource::new());
        assert!(c.trigger_sensor(Sensor::BackDoor));
        // Disarmed: flag set, nothing logged
        assert!(c.log().is_empty());
        assert_eq!(c.arm_state(), ArmState::Disarmed);

        c.arm();
        assert_eq!(c.arm_state(), ArmState::Alarm);
        assert_eq!(
            messages(&c),
            vec![
                "System armed",
                "ALARM TRIGGERED: Sensor triggered while arming: Back Door"
            ]
        );
    }

    #[test]
    fn test_rearm_relogs() {
        let mut c = controller(ScriptedSource::new());
        c.arm();
        c.arm();
        assert_eq!(messages(&c), vec!["System armed", "System armed"]);
        assert_eq!(c.arm_state(), ArmState::Armed);
    }

    #[test]
    fn test_disarm_from_every_state() {
        let mut c = controller(ScriptedSource::new());
        c.disarm();
        assert_eq!(c.arm_state(), ArmState::Disarmed);

        c.arm();
        c.disarm();
        assert_eq!(c.arm_state(), ArmState::Disarmed);

        c.arm();
        c.unlock_doors();
        assert_eq!(c.arm_state(), ArmState::Alarm);
        c.disarm();
        assert_eq!(c.arm_state(), ArmState::Disarmed);
        assert!(!c.state().alarm_triggered);
        assert_eq!(c.log().last().unwrap().message, "System disarmed");
    }

    #[test]
    fn test_disarm_clears_sensors_by_default() {
        let mut c = controller(ScriptedSource::new());
        c.trigger_sensor(Sensor::FrontDoor);
        c.disarm();
        assert!(!c.sensors().any_triggered());
    }

    #[test]
    fn test_disarm_can_keep_sensors() {
        let mut config = Config::default();
        config.controller.clear_sensors_on_disarm = false;
        let mut c = SecurityController::with_source(&config, Box::new(ScriptedSource::new()));
        c.trigger_sensor(Sensor::FrontDoor);
        c.disarm();
        assert!(c.sensors().is_triggered(Sensor::FrontDoor));
        c.arm();
        assert_eq!(c.arm_state(), ArmState::Alarm);
    }

    #[test]
    fn test_unlock_triggers_only_when_armed() {
        let mut c = controller(ScriptedSource::new());
        c.unlock_doors();
        assert_eq!(c.arm_state(), ArmState::Disarmed);
        assert!(!c.state().doors_locked);
        assert_eq!(messages(&c), vec!["All doors unlocked"]);

        c.lock_doors();
        c.arm();
        c.unlock_doors();
        assert_eq!(c.arm_state(), ArmState::Alarm);
    }

    #[test]
    fn test_toggles_log_their_action() {
        let mut c = controller(ScriptedSource::new());
        c.set_lights(true);
        c.set_lights(false);
        c.toggle_camera();
        c.toggle_camera();
        c.lock_doors();
        assert_eq!(
            messages(&c),
            vec![
                "All lights turned on",
                "All lights turned off",
                "Security camera activated",
                "Security camera deactivated",
                "All doors locked",
            ]
        );
        assert!(!c.state().camera_active);
        assert!(c.state().doors_locked);
    }

    #[test]
    fn test_trigger_alarm_disarmed_is_noop() {
        let mut c = controller(ScriptedSource::new());
        let mut rx = c.subscribe();
        let before = *c.state();
        c.trigger_alarm("anything");
        assert_eq!(*c.state(), before);
        assert!(c.log().is_empty());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_tick_disarmed_never_mutates() {
        let mut source = ScriptedSource::new();
        for _ in 0..100 {
            source = source.fire(0);
        }
        let mut c = controller(source);
        for _ in 0..100 {
            assert_eq!(c.simulate_tick(), None);
        }
        assert!(!c.sensors().any_triggered());
        assert!(c.log().is_empty());
    }

    #[test]
    fn test_tick_trips_picked_sensor() {
        let mut c = controller(ScriptedSource::new().miss().fire(4));
        c.arm();
        assert_eq!(c.simulate_tick(), None);
        assert_eq!(c.simulate_tick(), Some(Sensor::MotionKitchen));
        assert!(c.sensors().is_triggered(Sensor::MotionKitchen));
        assert_eq!(c.arm_state(), ArmState::Alarm);
        assert_eq!(
            c.log().last().unwrap().message,
            "ALARM TRIGGERED: Motion Kitchen sensor triggered"
        );
    }

    #[test]
    fn test_tick_skipped_while_alarmed() {
        let mut c = controller(ScriptedSource::new().fire(0).fire(1));
        c.arm();
        assert_eq!(c.simulate_tick(), Some(Sensor::FrontDoor));
        let logged = c.log().len();
        assert_eq!(c.simulate_tick(), None);
        assert_eq!(c.log().len(), logged);
        assert!(!c.sensors().is_triggered(Sensor::BackDoor));
    }

    #[test]
    fn test_tick_rate_converges() {
        let mut c = SecurityController::with_source(
            &Config::default(),
            Box::new(ChaCha8Rng::seed_from_u64(0x5eed)),
        );
        let trials = 20_000;
        let mut fired = 0;
        for _ in 0..trials {
            c.arm();
            if c.simulate_tick().is_some() {
                fired += 1;
            }
            c.disarm();
        }
        let rate = fired as f64 / trials as f64;
        assert!((rate - 0.05).abs() < 0.01, "rate was {}", rate);
    }

    #[test]
    fn test_recent_log_is_bounded() {
        let mut c = controller(ScriptedSource::new());
        for _ in 0..1500 {
            c.toggle_camera();
        }
        let recent = c.get_log(50);
        assert_eq!(recent.len(), 50);
        assert_eq!(c.recent_log().len(), 50);
        assert_eq!(recent, &c.get_log(usize::MAX)[1450..]);
    }

    #[test]
    fn test_events_follow_state_changes() {
        let mut c = controller(ScriptedSource::new());
        let mut rx = c.subscribe();
        c.arm();
        c.unlock_doors();

        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        let logged: Vec<_> = events
            .iter()
            .map(|e| match e {
                ControllerEvent::LogChanged(entry) => format!("log:{}", entry.message),
                ControllerEvent::Alarm { reason } => format!("alarm:{}", reason),
            })
            .collect();
        assert_eq!(
            logged,
            vec![
                "log:System armed",
                "log:All doors unlocked",
                "log:ALARM TRIGGERED: Door unlocked while system armed",
                "alarm:Door unlocked while system armed",
            ]
        );
    }

    #[test]
    fn test_retrigger_while_alarmed_logs_and_notifies_again() {
        let mut c = controller(ScriptedSource::new());
        let mut rx = c.subscribe();
        c.arm();
        c.unlock_doors();
        c.unlock_doors();
        assert_eq!(c.arm_state(), ArmState::Alarm);

        let alarms_logged = c
            .get_log(usize::MAX)
            .iter()
            .filter(|e| e.message == "ALARM TRIGGERED: Door unlocked while system armed")
            .count();
        assert_eq!(alarms_logged, 2);

        let mut alarm_events = 0;
        while let Ok(event) = rx.try_recv() {
            if let ControllerEvent::Alarm { reason } = event {
                assert_eq!(reason, "Door unlocked while system armed");
                alarm_events += 1;
            }
        }
        assert_eq!(alarm_events, 2);
    }

    #[test]
    fn test_cleared_sensor_does_not_alarm_on_arm() {
        let mut c = controller(ScriptedSource::new());
        c.trigger_sensor(Sensor::LivingRoomWindow);
        assert!(c.clear_sensor(Sensor::LivingRoomWindow));
        assert!(!c.clear_sensor(Sensor::LivingRoomWindow));
        assert!(!c.sensors().any_triggered());

        c.arm();
        assert_eq!(c.arm_state(), ArmState::Armed);
        assert_eq!(messages(&c), vec!["System armed"]);
    }

    #[test]
    fn test_nan_probability_never_fires() {
        let mut config = Config::default();
        config.simulator.trigger_probability = f64::NAN;
        let mut c =
            SecurityController::with_source(&config, Box::new(ChaCha8Rng::seed_from_u64(3)));
        c.arm();
        for _ in 0..1000 {
            assert_eq!(c.simulate_tick(), None);
        }
        assert_eq!(c.arm_state(), ArmState::Armed);
    }

    #[test]
    fn test_example_scenario() {
        let mut c = controller(ScriptedSource::new());
        c.arm();
        assert_eq!(c.arm_state(), ArmState::Armed);
        assert_eq!(messages(&c), vec!["System armed"]);

        c.unlock_doors();
        assert_eq!(c.arm_state(), ArmState::Alarm);
        assert_eq!(
            messages(&c),
            vec![
                "System armed",
                "All doors unlocked",
                "ALARM TRIGGERED: Door unlocked while system armed"
            ]
        );

        c.disarm();
        assert_eq!(c.arm_state(), ArmState::Disarmed);
        assert!(!c.state().alarm_triggered);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut c = controller(ScriptedSource::new());
        c.trigger_sensor(Sensor::BedroomWindow);
        let json = serde_json::to_value(c.snapshot()).unwrap();
        assert_eq!(json["arm_state"], "Disarmed");
        assert_eq!(json["triggered_sensors"][0], "BedroomWindow");
        assert_eq!(json["state"]["doors_locked"], true);
    }
}
