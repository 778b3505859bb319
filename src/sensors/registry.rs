// Copyright (c) 2026 bad-antics
// Licensed under the MIT License. See LICENSE file in the project root.
// https://github.com/bad-antics/smartguard-rs

//! Sensor set and their triggered flags

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sensors installed in the house
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sensor {
    FrontDoor,
    BackDoor,
    LivingRoomWindow,
    BedroomWindow,
    MotionKitchen,
    MotionLivingRoom,
}

/// What a sensor watches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorKind {
    Door,
    Window,
    Motion,
}

impl Sensor {
    /// Every sensor, in panel order.
    pub const ALL: [Sensor; 6] = [
        Sensor::FrontDoor,
        Sensor::BackDoor,
        Sensor::LivingRoomWindow,
        Sensor::BedroomWindow,
        Sensor::MotionKitchen,
        Sensor::MotionLivingRoom,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Sensor::FrontDoor => "Front Door",
            Sensor::BackDoor => "Back Door",
            Sensor::LivingRoomWindow => "Living Room Window",
            Sensor::BedroomWindow => "Bedroom Window",
            Sensor::MotionKitchen => "Motion Kitchen",
            Sensor::MotionLivingRoom => "Motion Living Room",
        }
    }

    pub fn kind(&self) -> SensorKind {
        match self {
            Sensor::FrontDoor | Sensor::BackDoor => SensorKind::Door,
            Sensor::LivingRoomWindow | Sensor::BedroomWindow => SensorKind::Window,
            Sensor::MotionKitchen | Sensor::MotionLivingRoom => SensorKind::Motion,
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a name matches no sensor
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sensor: {0}")]
pub struct UnknownSensor(pub String);

impl FromStr for Sensor {
    type Err = UnknownSensor;

    /// Accepts the display name in any case, with spaces, dashes or
    /// underscores between words ("front door", "motion-kitchen").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        Sensor::ALL
            .into_iter()
            .find(|sensor| {
                let name: String = sensor
                    .name()
                    .chars()
                    .filter(|c| *c != ' ')
                    .flat_map(char::to_lowercase)
                    .collect();
                name == wanted
            })
            .ok_or_else(|| UnknownSensor(s.trim().to_string()))
    }
}

/// Triggered flag for each sensor. Lives as long as its controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorRegistry {
    triggered: [bool; 6],
}

impl SensorRegistry {
    /// All sensors clear
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_triggered(&self, sensor: Sensor) -> bool {
        self.triggered[sensor.index()]
    }

    /// Sets the flag, returning whether it changed.
    pub fn set(&mut self, sensor: Sensor, triggered: bool) -> bool {
        let slot = &mut self.triggered[sensor.index()];
        let changed = *slot != triggered;
        *slot = triggered;
        changed
    }

    pub fn any_triggered(&self) -> bool {
        self.triggered.iter().any(|t| *t)
    }

    /// Triggered sensors in panel order
    pub fn triggered(&self) -> impl Iterator<Item = Sensor> + '_ {
        self.iter().filter(|(_, t)| *t).map(|(s, _)| s)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Sensor, bool)> + '_ {
        Sensor::ALL.into_iter().map(move |s| (s, self.is_triggered(s)))
    }

    pub fn clear_all(&mut self) {
        self.triggered = [false; 6];
    }
}
